use serde::{Deserialize, Serialize};

use crate::core::{
    DisplayWindow, GestureContext, bucket_width_ms, gap_width_ms, invalid_zone_layout,
    invalid_zone_widths_ms,
};

use super::{BlockReason, Verdict, ZoneLimits};

/// Comparison slack so an edge pinned exactly on a limit still validates
/// after integer-millisecond rounding.
pub(crate) const LIMIT_TOLERANCE_PCT: f64 = 1e-3;

/// Result of the invalid-zone limit check.
///
/// The bucket counts describe how many histogram buckets each invalid zone
/// covers in the checked window; hosts use them for affordance hints even
/// when the verdict is clear.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneCheck {
    pub verdict: Verdict,
    pub left_invalid_buckets: f64,
    pub right_invalid_buckets: f64,
}

impl ZoneCheck {
    fn clear_without_granularity() -> Self {
        Self {
            verdict: Verdict::Clear,
            left_invalid_buckets: 0.0,
            right_invalid_buckets: 0.0,
        }
    }
}

/// Validates a candidate window against the per-side and combined
/// invalid-zone limits.
///
/// Check order fixes the reported reason (left, then right, then combined);
/// acceptance requires all three to pass. A zero bucket width reports clear:
/// no invalid-zone math is meaningful without a known granularity.
#[must_use]
pub fn check_zone_limits(
    window: DisplayWindow,
    ctx: GestureContext<'_>,
    limits: ZoneLimits,
) -> ZoneCheck {
    let width = bucket_width_ms(ctx.bucket_timestamps);
    if width <= 0 {
        return ZoneCheck::clear_without_granularity();
    }

    let layout = invalid_zone_layout(
        window.start(),
        window.end(),
        ctx.lifetime,
        ctx.now,
        width,
        limits.gap_bucket_multiplier,
    );

    let gap = gap_width_ms(width, limits.gap_bucket_multiplier);
    let (left_ms, right_ms) = invalid_zone_widths_ms(
        window.start(),
        window.end(),
        ctx.lifetime,
        ctx.now,
        gap,
    );
    let left_invalid_buckets = left_ms as f64 / width as f64;
    let right_invalid_buckets = right_ms as f64 / width as f64;

    let verdict = if layout.left_width_pct > limits.max_per_side_pct + LIMIT_TOLERANCE_PCT {
        Verdict::Blocked(BlockReason::LeftInvalidZone)
    } else if layout.right_width_pct > limits.max_per_side_pct + LIMIT_TOLERANCE_PCT {
        Verdict::Blocked(BlockReason::RightInvalidZone)
    } else if layout.combined_invalid_pct() > limits.max_combined_pct + LIMIT_TOLERANCE_PCT {
        Verdict::Blocked(BlockReason::CombinedInvalidZone)
    } else {
        Verdict::Clear
    };

    ZoneCheck {
        verdict,
        left_invalid_buckets,
        right_invalid_buckets,
    }
}
