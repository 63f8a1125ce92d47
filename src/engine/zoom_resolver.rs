use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    DisplayWindow, DurationMs, GestureContext, TimeMs, bucket_width_ms, gap_width_ms,
};

use super::{
    BlockReason, EngineConfig, Verdict, ZoneLimits, check_zone_limits, check_zoom_in_span,
    check_zoom_out_span,
};

/// Outcome of a zoom gesture resolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ZoomResolution {
    /// A valid window exists; the view should adopt it.
    Applied {
        window: DisplayWindow,
        /// True when a single-sided limit forced a deficit transfer.
        was_asymmetric: bool,
    },
    /// No valid window exists; the gesture must have zero effect.
    Blocked(BlockReason),
}

impl ZoomResolution {
    #[must_use]
    pub fn window(self) -> Option<DisplayWindow> {
        match self {
            Self::Applied { window, .. } => Some(window),
            Self::Blocked(_) => None,
        }
    }

    #[must_use]
    pub fn blocked_reason(self) -> Option<BlockReason> {
        match self {
            Self::Applied { .. } => None,
            Self::Blocked(reason) => Some(reason),
        }
    }
}

/// Resolves a zoom-out gesture targeting `new_span_ms`.
///
/// The center-preserving candidate is tried first. When exactly one side's
/// invalid zone overflows its limit, that edge is pinned at the limit and
/// the entire deficit moves to the opposite edge, preserving the requested
/// span. All-or-nothing: a returned window always passes the full
/// invalid-zone check; otherwise the gesture is blocked and the caller keeps
/// its current window.
#[must_use]
pub fn resolve_zoom_out(
    window: DisplayWindow,
    new_span_ms: DurationMs,
    ctx: GestureContext<'_>,
    config: EngineConfig,
) -> ZoomResolution {
    let width = bucket_width_ms(ctx.bucket_timestamps);
    if let Verdict::Blocked(reason) = check_zoom_out_span(new_span_ms, width, config.span) {
        return ZoomResolution::Blocked(reason);
    }

    let symmetric = window.symmetric_zoom(new_span_ms);
    match check_zone_limits(symmetric, ctx, config.zones).verdict {
        Verdict::Clear => ZoomResolution::Applied {
            window: symmetric,
            was_asymmetric: false,
        },
        Verdict::Blocked(BlockReason::LeftInvalidZone) => {
            pin_left_edge(symmetric, new_span_ms, ctx, config.zones, width)
        }
        Verdict::Blocked(BlockReason::RightInvalidZone) => {
            pin_right_edge(symmetric, new_span_ms, ctx, config.zones, width)
        }
        Verdict::Blocked(reason) => {
            debug!(reason = %reason, "zoom-out blocked without single-sided headroom");
            ZoomResolution::Blocked(reason)
        }
    }
}

/// Resolves a zoom-in gesture targeting `new_span_ms`.
///
/// Shrinking toward the center can only grow a fixed-width invalid zone's
/// share of the window, so there is no spare room to reallocate: the
/// symmetric candidate either passes as-is or the gesture is rejected.
#[must_use]
pub fn resolve_zoom_in(
    window: DisplayWindow,
    new_span_ms: DurationMs,
    ctx: GestureContext<'_>,
    config: EngineConfig,
) -> ZoomResolution {
    let width = bucket_width_ms(ctx.bucket_timestamps);
    if let Verdict::Blocked(reason) = check_zoom_in_span(new_span_ms, width, config.span) {
        return ZoomResolution::Blocked(reason);
    }

    let symmetric = window.symmetric_zoom(new_span_ms);
    match check_zone_limits(symmetric, ctx, config.zones).verdict {
        Verdict::Clear => ZoomResolution::Applied {
            window: symmetric,
            was_asymmetric: false,
        },
        Verdict::Blocked(reason) => ZoomResolution::Blocked(reason),
    }
}

/// Per-side limit expressed in milliseconds of the target span.
///
/// Multiply before dividing: integer-valued limits stay exact in f64.
fn per_side_limit_ms(new_span_ms: DurationMs, limits: ZoneLimits) -> f64 {
    limits.max_per_side_pct * new_span_ms as f64 / 100.0
}

fn pin_left_edge(
    symmetric: DisplayWindow,
    new_span_ms: DurationMs,
    ctx: GestureContext<'_>,
    limits: ZoneLimits,
    bucket_width: DurationMs,
) -> ZoomResolution {
    let gap = gap_width_ms(bucket_width, limits.gap_bucket_multiplier);
    let zone_edge = ctx.lifetime.start - gap;
    // Ceil biases the pinned start inward so the left zone never exceeds
    // its limit after rounding.
    let pinned_start = (zone_edge as f64 - per_side_limit_ms(new_span_ms, limits)).ceil() as TimeMs;
    let candidate = DisplayWindow::anchored_start(pinned_start, new_span_ms);
    finish_pinned(symmetric, candidate, ctx, limits, BlockReason::LeftInvalidZone)
}

fn pin_right_edge(
    symmetric: DisplayWindow,
    new_span_ms: DurationMs,
    ctx: GestureContext<'_>,
    limits: ZoneLimits,
    bucket_width: DurationMs,
) -> ZoomResolution {
    let gap = gap_width_ms(bucket_width, limits.gap_bucket_multiplier);
    let zone_edge = ctx.lifetime.resolved_end(ctx.now) + gap;
    // Floor biases the pinned end inward, mirroring the left pin.
    let pinned_end = (zone_edge as f64 + per_side_limit_ms(new_span_ms, limits)).floor() as TimeMs;
    let candidate = DisplayWindow::anchored_end(pinned_end, new_span_ms);
    finish_pinned(symmetric, candidate, ctx, limits, BlockReason::RightInvalidZone)
}

fn finish_pinned(
    symmetric: DisplayWindow,
    candidate: DisplayWindow,
    ctx: GestureContext<'_>,
    limits: ZoneLimits,
    pinned_side: BlockReason,
) -> ZoomResolution {
    match check_zone_limits(candidate, ctx, limits).verdict {
        Verdict::Clear => {
            debug!(
                pinned_side = %pinned_side,
                deficit_ms = candidate.start() - symmetric.start(),
                "zoom-out deficit transferred to opposite edge"
            );
            ZoomResolution::Applied {
                window: candidate,
                was_asymmetric: true,
            }
        }
        Verdict::Blocked(residual) => {
            debug!(
                pinned_side = %pinned_side,
                residual = %residual,
                "pinned zoom-out candidate still violates a limit"
            );
            ZoomResolution::Blocked(BlockReason::AtLimit)
        }
    }
}
