use serde::{Deserialize, Serialize};

use crate::core::DurationMs;

/// Absolute bounds on the visible span, independent of entity lifetime.
///
/// These are the cheap pre-filters applied before any invalid-zone math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanLimits {
    /// Smallest visible span a zoom-in may reach, in milliseconds.
    pub min_span_ms: DurationMs,
    /// Largest visible span a zoom-out may reach, in milliseconds.
    pub max_span_ms: DurationMs,
    /// Fewest buckets a zoom-in may leave visible.
    pub min_bucket_count: u32,
    /// Most buckets a zoom-out may bring into view.
    pub max_bucket_count: u32,
}

impl Default for SpanLimits {
    fn default() -> Self {
        Self {
            min_span_ms: 60_000,
            max_span_ms: 86_400_000,
            min_bucket_count: 20,
            max_bucket_count: 100,
        }
    }
}

/// Invalid-zone percentage limits and the data gap buffer width.
///
/// Valid windows form a triangle: left and right zone percentages must each
/// stay at or under `max_per_side_pct` while their sum stays at or under
/// `max_combined_pct`. The defaults let both sides sit exactly at 10% at
/// once, but rule out 11% + 0%.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneLimits {
    /// Most of the window, in percent, either invalid zone may occupy.
    pub max_per_side_pct: f64,
    /// Most of the window, in percent, both invalid zones may occupy together.
    pub max_combined_pct: f64,
    /// Gap buffer between an invalid zone and the data, in bucket-widths.
    pub gap_bucket_multiplier: f64,
}

impl Default for ZoneLimits {
    fn default() -> Self {
        Self {
            max_per_side_pct: 10.0,
            max_combined_pct: 20.0,
            gap_bucket_multiplier: 1.0,
        }
    }
}

/// Full constraint configuration handed to every engine entry point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    pub span: SpanLimits,
    pub zones: ZoneLimits,
}
