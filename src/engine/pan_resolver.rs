use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    DisplayWindow, DurationMs, GestureContext, bucket_width_ms, gap_width_ms,
    invalid_zone_widths_ms,
};

use super::{BlockReason, EngineConfig, Verdict, check_zone_limits};

/// Headroom below this threshold absorbs the gesture entirely.
const HEADROOM_EPSILON_MS: f64 = 1.0;

/// Outcome of a pan constraint pass.
///
/// Pan never changes the window size, so a blocked gesture is expressed as a
/// reduced (possibly zero) delta rather than an edge reallocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanResolution {
    /// Delta the caller may apply; 0 when the gesture is absorbed.
    pub delta_ms: DurationMs,
    pub was_constrained: bool,
    /// Limit that reduced or absorbed the delta, when any did.
    pub reason: Option<BlockReason>,
}

impl PanResolution {
    fn unconstrained(delta_ms: DurationMs) -> Self {
        Self {
            delta_ms,
            was_constrained: false,
            reason: None,
        }
    }

    fn clamped(delta_ms: DurationMs, reason: BlockReason) -> Self {
        Self {
            delta_ms,
            was_constrained: true,
            reason: Some(reason),
        }
    }

    fn absorbed(reason: BlockReason) -> Self {
        Self::clamped(0, reason)
    }
}

/// Clamps a pan delta so the resulting window stays inside the invalid-zone
/// limits.
///
/// A delta blocked on a single side is reduced to that side's remaining
/// headroom (percent limit of the current span minus the current zone
/// width); headroom under 1 ms absorbs the gesture. A combined-limit block
/// rejects the pan outright, since neither side has exploitable headroom.
#[must_use]
pub fn constrain_pan(
    window: DisplayWindow,
    proposed_delta_ms: DurationMs,
    ctx: GestureContext<'_>,
    config: EngineConfig,
) -> PanResolution {
    if proposed_delta_ms == 0 {
        return PanResolution::unconstrained(0);
    }

    let candidate = window.pan(proposed_delta_ms);
    let blocked_on = match check_zone_limits(candidate, ctx, config.zones).verdict {
        Verdict::Clear => return PanResolution::unconstrained(proposed_delta_ms),
        Verdict::Blocked(reason) => reason,
    };

    let direction: DurationMs = match blocked_on {
        BlockReason::LeftInvalidZone => -1,
        BlockReason::RightInvalidZone => 1,
        reason => {
            debug!(reason = %reason, "pan rejected without single-sided headroom");
            return PanResolution::absorbed(reason);
        }
    };
    if proposed_delta_ms.signum() != direction {
        return PanResolution::absorbed(BlockReason::AtLimit);
    }

    let width = bucket_width_ms(ctx.bucket_timestamps);
    let gap = gap_width_ms(width, config.zones.gap_bucket_multiplier);
    let (left_ms, right_ms) =
        invalid_zone_widths_ms(window.start(), window.end(), ctx.lifetime, ctx.now, gap);
    let current_side_ms = match blocked_on {
        BlockReason::LeftInvalidZone => left_ms,
        _ => right_ms,
    };

    let limit_ms = config.zones.max_per_side_pct * window.span_ms() as f64 / 100.0;
    let headroom = limit_ms - current_side_ms as f64;
    if headroom < HEADROOM_EPSILON_MS {
        debug!(blocked_on = %blocked_on, headroom, "pan absorbed at invalid-zone limit");
        return PanResolution::absorbed(BlockReason::AtLimit);
    }

    let magnitude = (headroom.floor() as DurationMs).min(proposed_delta_ms.abs());
    let clamped_delta = direction * magnitude;

    let clamped_candidate = window.pan(clamped_delta);
    if check_zone_limits(clamped_candidate, ctx, config.zones)
        .verdict
        .is_blocked()
    {
        return PanResolution::absorbed(BlockReason::AtLimit);
    }

    debug!(
        proposed_delta_ms,
        clamped_delta,
        blocked_on = %blocked_on,
        "pan clamped to invalid-zone headroom"
    );
    PanResolution::clamped(clamped_delta, blocked_on)
}
