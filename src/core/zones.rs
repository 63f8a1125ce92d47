use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::types::{DurationMs, EntityLifetime, TimeMs};

/// Which side of the data region a stripe sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneSide {
    Left,
    Right,
}

/// Stripe species: hard invalid zone, or the gap buffer adjoining the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StripeKind {
    InvalidZone,
    GapBuffer,
}

/// Paintable horizontal stripe in window-percent coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneStripe {
    pub side: ZoneSide,
    pub kind: StripeKind,
    pub start_pct: f64,
    pub width_pct: f64,
}

/// Invalid-zone and gap-buffer positions as percentages of the visible
/// window span, all in `[0, 100]`.
///
/// The left zone covers the stretch before the entity started, the right
/// zone the stretch after it ended (or after "now" while ongoing). Each zone
/// is separated from the data region by a gap buffer one
/// `gap_bucket_multiplier × bucket_width` wide, so invalid stripes never
/// collide with the first or last histogram bar.
///
/// `right_start_pct == 100` means no right zone is visible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvalidZoneLayout {
    pub left_width_pct: f64,
    pub right_start_pct: f64,
    pub right_width_pct: f64,
    pub left_gap_start_pct: f64,
    pub left_gap_width_pct: f64,
    pub right_gap_start_pct: f64,
    pub right_gap_width_pct: f64,
}

impl InvalidZoneLayout {
    /// Layout for a degenerate (zero or negative span) window.
    #[must_use]
    pub fn degenerate() -> Self {
        Self {
            left_width_pct: 0.0,
            right_start_pct: 100.0,
            right_width_pct: 0.0,
            left_gap_start_pct: 0.0,
            left_gap_width_pct: 0.0,
            right_gap_start_pct: 100.0,
            right_gap_width_pct: 0.0,
        }
    }

    /// Percentage position where real data begins.
    #[must_use]
    pub fn data_start_pct(&self) -> f64 {
        self.left_gap_start_pct + self.left_gap_width_pct
    }

    /// Percentage position where real data ends.
    #[must_use]
    pub fn data_end_pct(&self) -> f64 {
        self.right_gap_start_pct
    }

    #[must_use]
    pub fn combined_invalid_pct(&self) -> f64 {
        self.left_width_pct + self.right_width_pct
    }

    /// Non-empty stripes in paint order, left to right.
    #[must_use]
    pub fn stripes(&self) -> SmallVec<[ZoneStripe; 4]> {
        let mut stripes: SmallVec<[ZoneStripe; 4]> = SmallVec::new();
        if self.left_width_pct > 0.0 {
            stripes.push(ZoneStripe {
                side: ZoneSide::Left,
                kind: StripeKind::InvalidZone,
                start_pct: 0.0,
                width_pct: self.left_width_pct,
            });
        }
        if self.left_gap_width_pct > 0.0 {
            stripes.push(ZoneStripe {
                side: ZoneSide::Left,
                kind: StripeKind::GapBuffer,
                start_pct: self.left_gap_start_pct,
                width_pct: self.left_gap_width_pct,
            });
        }
        if self.right_gap_width_pct > 0.0 {
            stripes.push(ZoneStripe {
                side: ZoneSide::Right,
                kind: StripeKind::GapBuffer,
                start_pct: self.right_gap_start_pct,
                width_pct: self.right_gap_width_pct,
            });
        }
        if self.right_width_pct > 0.0 {
            stripes.push(ZoneStripe {
                side: ZoneSide::Right,
                kind: StripeKind::InvalidZone,
                start_pct: self.right_start_pct,
                width_pct: self.right_width_pct,
            });
        }
        stripes
    }
}

/// Gap-buffer width in milliseconds for a bucket width and multiplier.
#[must_use]
pub fn gap_width_ms(bucket_width_ms: DurationMs, gap_bucket_multiplier: f64) -> DurationMs {
    if bucket_width_ms <= 0 {
        return 0;
    }
    (gap_bucket_multiplier * bucket_width_ms as f64).round() as DurationMs
}

/// Visible invalid-zone widths in whole milliseconds, `(left, right)`.
///
/// Exact integer counterpart of the percentage layout, used where
/// millisecond-precise headroom matters.
#[must_use]
pub fn invalid_zone_widths_ms(
    window_start: TimeMs,
    window_end: TimeMs,
    lifetime: EntityLifetime,
    now: TimeMs,
    gap_ms: DurationMs,
) -> (DurationMs, DurationMs) {
    if window_end <= window_start {
        return (0, 0);
    }
    let left_edge = (lifetime.start - gap_ms).clamp(window_start, window_end);
    let right_edge = (lifetime.resolved_end(now) + gap_ms).clamp(window_start, window_end);
    (left_edge - window_start, window_end - right_edge)
}

/// Computes invalid-zone and gap positions for a visible window.
///
/// A zero `bucket_width_ms` yields zero-width gaps; the zones are then
/// derived from the raw entity boundaries. A degenerate window
/// (`window_end <= window_start`) yields [`InvalidZoneLayout::degenerate`].
#[must_use]
pub fn invalid_zone_layout(
    window_start: TimeMs,
    window_end: TimeMs,
    lifetime: EntityLifetime,
    now: TimeMs,
    bucket_width_ms: DurationMs,
    gap_bucket_multiplier: f64,
) -> InvalidZoneLayout {
    let span = window_end - window_start;
    if span <= 0 {
        return InvalidZoneLayout::degenerate();
    }

    let to_pct = |ms: DurationMs| ms as f64 / span as f64 * 100.0;
    let clamp = |instant: TimeMs| instant.clamp(window_start, window_end);
    let gap = gap_width_ms(bucket_width_ms, gap_bucket_multiplier);

    let left_zone_end = lifetime.start - gap;
    let left_width_pct = if left_zone_end > window_start {
        to_pct(clamp(left_zone_end) - window_start)
    } else {
        0.0
    };

    let left_gap_start = clamp(lifetime.start - gap);
    let left_gap_end = clamp(lifetime.start);
    let left_gap_start_pct = to_pct(left_gap_start - window_start);
    let left_gap_width_pct = to_pct(left_gap_end - left_gap_start);

    let right_boundary = lifetime.resolved_end(now);
    let right_zone_start = right_boundary + gap;
    let (right_start_pct, right_width_pct) = if right_zone_start < window_end {
        let clamped = clamp(right_zone_start);
        (
            to_pct(clamped - window_start),
            to_pct(window_end - clamped),
        )
    } else {
        (100.0, 0.0)
    };

    let right_gap_start = clamp(right_boundary);
    let right_gap_end = clamp(right_zone_start);
    let right_gap_start_pct = to_pct(right_gap_start - window_start);
    let right_gap_width_pct = to_pct(right_gap_end - right_gap_start);

    InvalidZoneLayout {
        left_width_pct,
        right_start_pct,
        right_width_pct,
        left_gap_start_pct,
        left_gap_width_pct,
        right_gap_start_pct,
        right_gap_width_pct,
    }
}
