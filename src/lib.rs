//! timeline-rs: headless gesture and constraint engine for log timelines.
//!
//! The crate folds zoom and pan gestures into an epoch-millisecond display
//! window, enforcing span limits and invalid-zone limits so every committed
//! window is valid. Hosts own pixels, events, and repaint; this crate owns
//! the arithmetic.

pub mod core;
pub mod engine;
pub mod error;
pub mod telemetry;

pub use engine::{
    BlockReason, EngineConfig, GestureOutcome, SpanLimits, TimelineView, WheelGesture, ZoneLimits,
};
pub use error::{TimelineError, TimelineResult};
