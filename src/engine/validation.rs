use crate::error::{TimelineError, TimelineResult};

use super::{EngineConfig, SpanLimits, ZoneLimits};

pub(super) fn validate_span_limits(limits: SpanLimits) -> TimelineResult<()> {
    if limits.min_span_ms <= 0 {
        return Err(TimelineError::InvalidLimits(
            "minimum span must be > 0".to_owned(),
        ));
    }
    if limits.max_span_ms < limits.min_span_ms {
        return Err(TimelineError::InvalidLimits(
            "maximum span must be >= minimum span".to_owned(),
        ));
    }
    if limits.min_bucket_count == 0 {
        return Err(TimelineError::InvalidLimits(
            "minimum bucket count must be > 0".to_owned(),
        ));
    }
    if limits.max_bucket_count < limits.min_bucket_count {
        return Err(TimelineError::InvalidLimits(
            "maximum bucket count must be >= minimum bucket count".to_owned(),
        ));
    }
    Ok(())
}

pub(super) fn validate_zone_limits(limits: ZoneLimits) -> TimelineResult<()> {
    if !limits.max_per_side_pct.is_finite()
        || limits.max_per_side_pct <= 0.0
        || limits.max_per_side_pct > 100.0
    {
        return Err(TimelineError::InvalidLimits(
            "per-side invalid-zone limit must be finite and in (0, 100]".to_owned(),
        ));
    }
    if !limits.max_combined_pct.is_finite()
        || limits.max_combined_pct < limits.max_per_side_pct
        || limits.max_combined_pct > 2.0 * limits.max_per_side_pct
        || limits.max_combined_pct > 100.0
    {
        return Err(TimelineError::InvalidLimits(
            "combined invalid-zone limit must be finite, >= the per-side limit, \
             <= twice the per-side limit, and <= 100"
                .to_owned(),
        ));
    }
    if !limits.gap_bucket_multiplier.is_finite() || limits.gap_bucket_multiplier < 0.0 {
        return Err(TimelineError::InvalidLimits(
            "gap bucket multiplier must be finite and >= 0".to_owned(),
        ));
    }
    Ok(())
}

pub(super) fn validate_engine_config(config: EngineConfig) -> TimelineResult<()> {
    validate_span_limits(config.span)?;
    validate_zone_limits(config.zones)?;
    Ok(())
}
