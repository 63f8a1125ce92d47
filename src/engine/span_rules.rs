use crate::core::{DurationMs, bucket_count};

use super::{BlockReason, SpanLimits, Verdict};

/// Checks a zoom-in target span against the absolute floor and the minimum
/// bucket count.
///
/// A zero bucket width skips the bucket-count check; without a known
/// granularity there is nothing to bound.
#[must_use]
pub fn check_zoom_in_span(
    new_span_ms: DurationMs,
    bucket_width_ms: DurationMs,
    limits: SpanLimits,
) -> Verdict {
    if new_span_ms < limits.min_span_ms {
        return Verdict::Blocked(BlockReason::MinRange);
    }
    if bucket_width_ms > 0
        && bucket_count(new_span_ms, bucket_width_ms) < f64::from(limits.min_bucket_count)
    {
        return Verdict::Blocked(BlockReason::MinBucketCount);
    }
    Verdict::Clear
}

/// Checks a zoom-out target span against the absolute ceiling and the
/// maximum bucket count.
#[must_use]
pub fn check_zoom_out_span(
    new_span_ms: DurationMs,
    bucket_width_ms: DurationMs,
    limits: SpanLimits,
) -> Verdict {
    if new_span_ms > limits.max_span_ms {
        return Verdict::Blocked(BlockReason::MaxRange);
    }
    if bucket_width_ms > 0
        && bucket_count(new_span_ms, bucket_width_ms) > f64::from(limits.max_bucket_count)
    {
        return Verdict::Blocked(BlockReason::MaxBucketCount);
    }
    Verdict::Clear
}
