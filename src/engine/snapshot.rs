use serde::{Deserialize, Serialize};

use crate::core::{
    DisplayWindow, DurationMs, GestureContext, InvalidZoneLayout, bucket_width_ms,
    invalid_zone_layout,
};
use crate::error::{TimelineError, TimelineResult};

use super::{EngineConfig, TimelineView};

pub const VIEW_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable deterministic view state used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSnapshot {
    pub window: DisplayWindow,
    pub span_ms: DurationMs,
    pub zone_layout: InvalidZoneLayout,
    pub config: EngineConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: ViewSnapshot,
}

impl ViewSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> TimelineResult<String> {
        let payload = ViewSnapshotJsonContractV1 {
            schema_version: VIEW_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            TimelineError::InvalidInput(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    pub fn from_json_compat_str(input: &str) -> TimelineResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<ViewSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: ViewSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            TimelineError::InvalidInput(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != VIEW_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(TimelineError::InvalidInput(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl TimelineView {
    /// Captures the current window, its zone layout, and the active limits.
    #[must_use]
    pub fn snapshot(&self, ctx: GestureContext<'_>) -> ViewSnapshot {
        let window = self.window();
        let config = self.config();
        let zone_layout = invalid_zone_layout(
            window.start(),
            window.end(),
            ctx.lifetime,
            ctx.now,
            bucket_width_ms(ctx.bucket_timestamps),
            config.zones.gap_bucket_multiplier,
        );
        ViewSnapshot {
            window,
            span_ms: window.span_ms(),
            zone_layout,
            config,
        }
    }

    pub fn snapshot_json_contract_v1_pretty(
        &self,
        ctx: GestureContext<'_>,
    ) -> TimelineResult<String> {
        self.snapshot(ctx).to_json_contract_v1_pretty()
    }
}
