pub mod config;
pub mod gesture;
pub mod pan_resolver;
pub mod reason;
pub mod snapshot;
pub mod span_rules;
mod validation;
pub mod view;
pub mod zone_rules;
pub mod zoom_resolver;

pub use config::{EngineConfig, SpanLimits, ZoneLimits};
pub use gesture::{drag_pan_delta_ms, wheel_pan_delta_ms, wheel_zoom_factor, zoomed_span_ms};
pub use pan_resolver::{PanResolution, constrain_pan};
pub use reason::{BlockReason, Verdict};
pub use snapshot::{VIEW_SNAPSHOT_JSON_SCHEMA_V1, ViewSnapshot, ViewSnapshotJsonContractV1};
pub use span_rules::{check_zoom_in_span, check_zoom_out_span};
pub use view::{GestureOutcome, GestureTuning, TimelineView, WheelGesture};
pub use zone_rules::{ZoneCheck, check_zone_limits};
pub use zoom_resolver::{ZoomResolution, resolve_zoom_in, resolve_zoom_out};
