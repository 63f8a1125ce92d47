use timeline_rs::core::{
    DisplayWindow, EntityLifetime, GestureContext, TimeMs, bucket_width_ms, invalid_zone_layout,
};
use timeline_rs::engine::{
    BlockReason, EngineConfig, GestureOutcome, TimelineView, ViewSnapshot,
};
use timeline_rs::error::TimelineError;

fn sample_buckets() -> Vec<TimeMs> {
    (0..30).map(|i| 100_000 + i * 10_000).collect()
}

fn sample_view() -> TimelineView {
    let window = DisplayWindow::new(95_000, 195_000).expect("window");
    TimelineView::new(EngineConfig::default(), window).expect("view")
}

#[test]
fn snapshot_reflects_the_view_and_its_layout() {
    let buckets = sample_buckets();
    let ctx = GestureContext::new(EntityLifetime::completed(100_000, 200_000), 400_000, &buckets);
    let view = sample_view();

    let snapshot = view.snapshot(ctx);
    assert_eq!(snapshot.window, view.window());
    assert_eq!(snapshot.span_ms, view.window().span_ms());
    assert_eq!(snapshot.config, view.config());

    let expected_layout = invalid_zone_layout(
        view.window().start(),
        view.window().end(),
        ctx.lifetime,
        ctx.now,
        bucket_width_ms(ctx.bucket_timestamps),
        view.config().zones.gap_bucket_multiplier,
    );
    assert_eq!(snapshot.zone_layout, expected_layout);
}

#[test]
fn contract_v1_round_trips_through_pretty_json() {
    let buckets = sample_buckets();
    let ctx = GestureContext::new(EntityLifetime::completed(100_000, 200_000), 400_000, &buckets);
    let view = sample_view();

    let snapshot = view.snapshot(ctx);
    let json = snapshot.to_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains("\"schema_version\": 1"));
    assert!(json.contains("\"zone_layout\""));

    let parsed = ViewSnapshot::from_json_compat_str(&json).expect("parse");
    assert_eq!(parsed, snapshot);

    // The view-level shortcut emits the same document.
    let direct = view.snapshot_json_contract_v1_pretty(ctx).expect("serialize");
    assert_eq!(direct, json);
}

#[test]
fn bare_snapshot_payloads_still_parse() {
    let buckets = sample_buckets();
    let ctx = GestureContext::new(EntityLifetime::completed(100_000, 200_000), 400_000, &buckets);
    let snapshot = sample_view().snapshot(ctx);

    let bare = serde_json::to_string(&snapshot).expect("serialize");
    let parsed = ViewSnapshot::from_json_compat_str(&bare).expect("parse bare");
    assert_eq!(parsed, snapshot);
}

#[test]
fn unsupported_schema_versions_are_rejected() {
    let buckets = sample_buckets();
    let ctx = GestureContext::new(EntityLifetime::completed(100_000, 200_000), 400_000, &buckets);
    let snapshot = sample_view().snapshot(ctx);

    let payload = serde_json::json!({
        "schema_version": 99,
        "snapshot": serde_json::to_value(&snapshot).expect("to value"),
    });
    let err = ViewSnapshot::from_json_compat_str(&payload.to_string()).expect_err("version 99");
    assert!(matches!(err, TimelineError::InvalidInput(_)));
    assert!(err.to_string().contains("unsupported snapshot schema version"));
}

#[test]
fn malformed_payloads_error_cleanly() {
    let err = ViewSnapshot::from_json_compat_str("{not json").expect_err("garbage");
    assert!(matches!(err, TimelineError::InvalidInput(_)));
}

#[test]
fn block_reasons_keep_their_wire_codes() {
    let rejected = GestureOutcome::Rejected(BlockReason::AtLimit);
    let json = serde_json::to_string(&rejected).expect("serialize");
    assert!(json.contains("at-limit"));

    let json = serde_json::to_string(&BlockReason::MinRange).expect("serialize");
    assert_eq!(json, "\"MIN_RANGE_MS\"");

    let parsed: BlockReason =
        serde_json::from_str("\"left-invalid-zone-limit\"").expect("parse reason");
    assert_eq!(parsed, BlockReason::LeftInvalidZone);
}
