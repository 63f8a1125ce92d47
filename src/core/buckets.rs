use crate::core::types::{DurationMs, TimeMs};

/// Derives the fixed time-per-bucket from ordered bucket timestamps.
///
/// Returns 0 when fewer than two timestamps are available ("width unknown");
/// validators treat a zero width as "nothing to constrain yet", which is the
/// normal state during initial load.
#[must_use]
pub fn bucket_width_ms(timestamps: &[TimeMs]) -> DurationMs {
    match timestamps {
        [first, second, ..] => second - first,
        _ => 0,
    }
}

/// Fractional number of buckets covered by `span_ms`.
///
/// Returns 0.0 for a zero or negative bucket width.
#[must_use]
pub fn bucket_count(span_ms: DurationMs, bucket_width_ms: DurationMs) -> f64 {
    if bucket_width_ms <= 0 {
        return 0.0;
    }
    span_ms as f64 / bucket_width_ms as f64
}
