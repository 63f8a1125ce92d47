use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{DisplayWindow, DurationMs, GestureContext};
use crate::error::{TimelineError, TimelineResult};

use super::{
    BlockReason, EngineConfig, ZoomResolution, constrain_pan, drag_pan_delta_ms, resolve_zoom_in,
    resolve_zoom_out, validation, wheel_pan_delta_ms, wheel_zoom_factor, zoomed_span_ms,
};

/// Wheel-step tuning for gesture translation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureTuning {
    /// Span growth per outward wheel notch; `0.25` yields 1.25x per notch.
    pub zoom_step_ratio: f64,
    /// Fraction of the span panned per horizontal wheel notch.
    pub pan_step_ratio: f64,
}

impl Default for GestureTuning {
    fn default() -> Self {
        Self {
            zoom_step_ratio: 0.25,
            pan_step_ratio: 0.1,
        }
    }
}

/// Raw wheel event as delivered by the host event layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelGesture {
    pub delta_x: f64,
    pub delta_y: f64,
    /// A held zoom modifier routes the vertical axis to zoom instead of pan.
    pub zoom_modifier: bool,
}

/// Result of folding one gesture into the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GestureOutcome {
    /// The window moved; `constrained` marks a clamped or edge-pinned apply.
    Applied {
        window: DisplayWindow,
        constrained: bool,
    },
    /// A limit blocked the gesture; the window is untouched.
    Rejected(BlockReason),
    /// The gesture carried no displacement.
    Idle,
}

impl GestureOutcome {
    #[must_use]
    pub fn window(self) -> Option<DisplayWindow> {
        match self {
            Self::Applied { window, .. } => Some(window),
            Self::Rejected(_) | Self::Idle => None,
        }
    }

    #[must_use]
    pub fn is_rejected(self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

/// Serialization point for gesture handling.
///
/// Holds the current display window and folds each gesture into the next
/// window, one at a time: a gesture either commits a fully validated window
/// or leaves the view untouched. The view owns no data and no clock; callers
/// pass a fresh [`GestureContext`] with every gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineView {
    config: EngineConfig,
    tuning: GestureTuning,
    window: DisplayWindow,
}

impl TimelineView {
    /// Creates a view over `initial_window`, validating the configuration.
    pub fn new(config: EngineConfig, initial_window: DisplayWindow) -> TimelineResult<Self> {
        validation::validate_engine_config(config)?;
        Ok(Self {
            config,
            tuning: GestureTuning::default(),
            window: initial_window,
        })
    }

    #[must_use]
    pub fn window(&self) -> DisplayWindow {
        self.window
    }

    #[must_use]
    pub fn config(&self) -> EngineConfig {
        self.config
    }

    #[must_use]
    pub fn tuning(&self) -> GestureTuning {
        self.tuning
    }

    pub fn set_tuning(&mut self, tuning: GestureTuning) {
        self.tuning = tuning;
    }

    /// Replaces the window without constraint checks, for host-driven jumps
    /// such as "follow live" or a programmatic reset.
    pub fn set_window(&mut self, window: DisplayWindow) {
        trace!(
            start = window.start(),
            end = window.end(),
            "window replaced by host"
        );
        self.window = window;
    }

    /// Routes a wheel event: zoom when the modifier is held, horizontal pan
    /// otherwise. Zero-delta events fold to [`GestureOutcome::Idle`].
    pub fn handle_wheel(
        &mut self,
        gesture: WheelGesture,
        ctx: GestureContext<'_>,
    ) -> TimelineResult<GestureOutcome> {
        if gesture.zoom_modifier {
            let Some(factor) = wheel_zoom_factor(gesture.delta_y, self.tuning.zoom_step_ratio)?
            else {
                return Ok(GestureOutcome::Idle);
            };
            return Ok(self.apply_zoom(factor, ctx));
        }

        let Some(delta_ms) = wheel_pan_delta_ms(
            gesture.delta_x,
            self.window.span_ms(),
            self.tuning.pan_step_ratio,
        )?
        else {
            return Ok(GestureOutcome::Idle);
        };
        Ok(self.apply_pan(delta_ms, ctx))
    }

    /// Pans by a horizontal pixel drag delta.
    ///
    /// Positive `delta_px` moves the window to earlier times.
    pub fn handle_drag(
        &mut self,
        delta_px: f64,
        container_width_px: f64,
        ctx: GestureContext<'_>,
    ) -> TimelineResult<GestureOutcome> {
        let delta_ms = drag_pan_delta_ms(delta_px, container_width_px, self.window.span_ms())?;
        Ok(self.apply_pan(delta_ms, ctx))
    }

    /// Programmatic zoom entry: scales the span by `factor` (`> 1` zooms
    /// out) around the window center.
    pub fn zoom_by_factor(
        &mut self,
        factor: f64,
        ctx: GestureContext<'_>,
    ) -> TimelineResult<GestureOutcome> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(TimelineError::InvalidInput(
                "zoom factor must be finite and > 0".to_owned(),
            ));
        }
        Ok(self.apply_zoom(factor, ctx))
    }

    /// Programmatic pan entry in milliseconds.
    pub fn pan_by(&mut self, delta_ms: DurationMs, ctx: GestureContext<'_>) -> GestureOutcome {
        self.apply_pan(delta_ms, ctx)
    }

    fn apply_zoom(&mut self, factor: f64, ctx: GestureContext<'_>) -> GestureOutcome {
        let current_span = self.window.span_ms();
        let target_span = zoomed_span_ms(current_span, factor);
        if target_span == current_span {
            return GestureOutcome::Idle;
        }

        let resolution = if target_span < current_span {
            resolve_zoom_in(self.window, target_span, ctx, self.config)
        } else {
            resolve_zoom_out(self.window, target_span, ctx, self.config)
        };
        match resolution {
            ZoomResolution::Applied {
                window,
                was_asymmetric,
            } => {
                self.commit(window, "zoom");
                GestureOutcome::Applied {
                    window,
                    constrained: was_asymmetric,
                }
            }
            ZoomResolution::Blocked(reason) => {
                debug!(reason = %reason, target_span, "zoom rejected");
                GestureOutcome::Rejected(reason)
            }
        }
    }

    fn apply_pan(&mut self, delta_ms: DurationMs, ctx: GestureContext<'_>) -> GestureOutcome {
        if delta_ms == 0 {
            return GestureOutcome::Idle;
        }

        let resolution = constrain_pan(self.window, delta_ms, ctx, self.config);
        if resolution.delta_ms == 0 {
            return match resolution.reason {
                Some(reason) => {
                    debug!(reason = %reason, proposed_delta_ms = delta_ms, "pan rejected");
                    GestureOutcome::Rejected(reason)
                }
                None => GestureOutcome::Idle,
            };
        }

        let window = self.window.pan(resolution.delta_ms);
        self.commit(window, "pan");
        GestureOutcome::Applied {
            window,
            constrained: resolution.was_constrained,
        }
    }

    fn commit(&mut self, window: DisplayWindow, gesture: &'static str) {
        trace!(
            gesture,
            start = window.start(),
            end = window.end(),
            span_ms = window.span_ms(),
            "window committed"
        );
        self.window = window;
    }
}
