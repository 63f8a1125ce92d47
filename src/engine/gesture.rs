//! Translation from raw input deltas to timeline quantities.
//!
//! Conventions:
//! - one wheel notch is normalized as `120` units
//! - `wheel_delta_y < 0` zooms in, `wheel_delta_y > 0` zooms out
//! - `wheel_delta_x > 0` pans to later times
//! - positive drag `delta_px` moves the window to earlier times, matching
//!   common drag-to-scroll behavior

use crate::core::DurationMs;
use crate::error::{TimelineError, TimelineResult};

/// Wheel notch normalization used by desktop scroll events.
const WHEEL_STEP_UNITS: f64 = 120.0;

/// Computes the zoom factor for a vertical wheel delta.
///
/// Returns `None` for a zero delta (nothing to apply). Factors above `1.0`
/// zoom out, below `1.0` zoom in.
pub fn wheel_zoom_factor(wheel_delta_y: f64, zoom_step_ratio: f64) -> TimelineResult<Option<f64>> {
    if !wheel_delta_y.is_finite() {
        return Err(TimelineError::InvalidInput(
            "wheel delta must be finite".to_owned(),
        ));
    }
    if !zoom_step_ratio.is_finite() || zoom_step_ratio <= 0.0 {
        return Err(TimelineError::InvalidInput(
            "wheel zoom step ratio must be finite and > 0".to_owned(),
        ));
    }
    if wheel_delta_y == 0.0 {
        return Ok(None);
    }

    let normalized_steps = wheel_delta_y / WHEEL_STEP_UNITS;
    let base = 1.0 + zoom_step_ratio;
    let factor = base.powf(normalized_steps);
    if !factor.is_finite() || factor <= 0.0 {
        return Err(TimelineError::InvalidInput(
            "computed wheel zoom factor must be finite and > 0".to_owned(),
        ));
    }
    Ok(Some(factor))
}

/// Applies a zoom factor to the current span, keeping the result >= 1 ms.
#[must_use]
pub fn zoomed_span_ms(span_ms: DurationMs, factor: f64) -> DurationMs {
    let scaled = (span_ms as f64 * factor).round() as DurationMs;
    scaled.max(1)
}

/// Converts a horizontal pixel drag into a time displacement.
///
/// Positive `delta_px` moves the window to earlier times.
pub fn drag_pan_delta_ms(
    delta_px: f64,
    container_width_px: f64,
    span_ms: DurationMs,
) -> TimelineResult<DurationMs> {
    if !delta_px.is_finite() {
        return Err(TimelineError::InvalidInput(
            "pan pixel delta must be finite".to_owned(),
        ));
    }
    if !container_width_px.is_finite() || container_width_px <= 0.0 {
        return Err(TimelineError::InvalidInput(
            "container width must be finite and > 0".to_owned(),
        ));
    }

    let delta_time = -(delta_px / container_width_px) * span_ms as f64;
    Ok(delta_time.round() as DurationMs)
}

/// Converts a horizontal wheel delta into a time displacement.
///
/// Returns `None` for a zero delta. `wheel_delta_x > 0` pans to later times.
pub fn wheel_pan_delta_ms(
    wheel_delta_x: f64,
    span_ms: DurationMs,
    pan_step_ratio: f64,
) -> TimelineResult<Option<DurationMs>> {
    if !wheel_delta_x.is_finite() {
        return Err(TimelineError::InvalidInput(
            "wheel pan delta must be finite".to_owned(),
        ));
    }
    if !pan_step_ratio.is_finite() || pan_step_ratio <= 0.0 {
        return Err(TimelineError::InvalidInput(
            "wheel pan step ratio must be finite and > 0".to_owned(),
        ));
    }
    if wheel_delta_x == 0.0 {
        return Ok(None);
    }

    let normalized_steps = wheel_delta_x / WHEEL_STEP_UNITS;
    let delta_time = normalized_steps * span_ms as f64 * pan_step_ratio;
    Ok(Some(delta_time.round() as DurationMs))
}
