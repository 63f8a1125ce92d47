use chrono::{TimeZone, Utc};
use timeline_rs::core::{
    DisplayWindow, EntityLifetime, GestureContext, TimeMs, datetime_to_epoch_ms,
};
use timeline_rs::engine::{
    BlockReason, EngineConfig, PanResolution, ZoneLimits, constrain_pan,
};

const BUCKET_MS: i64 = 10_000;
const MINUTE_MS: i64 = 60_000;

fn at(hour: u32, minute: u32, second: u32) -> TimeMs {
    let time = Utc
        .with_ymd_and_hms(2025, 6, 12, hour, minute, second)
        .single()
        .expect("valid timestamp");
    datetime_to_epoch_ms(time)
}

/// Ten-second buckets under an entity spanning [100_000, 200_000].
fn tail_buckets() -> Vec<TimeMs> {
    (0..30).map(|i| 100_000 + i * BUCKET_MS).collect()
}

fn tail_ctx(buckets: &[TimeMs]) -> GestureContext<'_> {
    GestureContext::new(EntityLifetime::completed(100_000, 200_000), 400_000, buckets)
}

#[test]
fn pan_passes_through_when_no_zone_blocks() {
    let buckets = tail_buckets();
    let ctx = tail_ctx(&buckets);
    let window = DisplayWindow::new(95_000, 195_000).expect("window");

    let resolution = constrain_pan(window, 10_000, ctx, EngineConfig::default());
    assert_eq!(resolution, PanResolution {
        delta_ms: 10_000,
        was_constrained: false,
        reason: None,
    });

    let moved = window.pan(resolution.delta_ms);
    assert_eq!(moved.start(), 105_000);
    assert_eq!(moved.end(), 205_000);
}

#[test]
fn pan_clamps_to_remaining_right_headroom() {
    // Right zone sits at 131s of a 1313s span, 300 ms short of the 10%
    // budget; a large pan toward the future keeps only those 300 ms.
    let buckets: Vec<TimeMs> = (0..60).map(|i| at(10, 0, 0) + i * MINUTE_MS).collect();
    let lifetime = EntityLifetime::completed(at(10, 0, 30), at(10, 45, 0));
    let ctx = GestureContext::new(lifetime, at(10, 58, 5), &buckets);
    let window = DisplayWindow::new(at(10, 26, 18), at(10, 48, 11)).expect("window");

    let resolution = constrain_pan(window, 200_000, ctx, EngineConfig::default());
    assert_eq!(resolution, PanResolution {
        delta_ms: 300,
        was_constrained: true,
        reason: Some(BlockReason::RightInvalidZone),
    });

    // At the budget, a further push toward the future is absorbed whole.
    let pinned = window.pan(resolution.delta_ms);
    let resolution = constrain_pan(pinned, 50_000, ctx, EngineConfig::default());
    assert_eq!(resolution, PanResolution {
        delta_ms: 0,
        was_constrained: true,
        reason: Some(BlockReason::AtLimit),
    });

    // The past stays open.
    let resolution = constrain_pan(pinned, -100_000, ctx, EngineConfig::default());
    assert_eq!(resolution.delta_ms, -100_000);
    assert!(!resolution.was_constrained);
}

#[test]
fn pan_clamps_to_left_headroom_mirrored() {
    let buckets = tail_buckets();
    let ctx = tail_ctx(&buckets);
    // Left zone is 8_000 of a 100_000 span; 2_000 ms of budget remain.
    let window = DisplayWindow::new(82_000, 182_000).expect("window");

    let resolution = constrain_pan(window, -30_000, ctx, EngineConfig::default());
    assert_eq!(resolution, PanResolution {
        delta_ms: -2_000,
        was_constrained: true,
        reason: Some(BlockReason::LeftInvalidZone),
    });
}

#[test]
fn one_millisecond_of_headroom_still_moves() {
    let buckets = tail_buckets();
    let ctx = tail_ctx(&buckets);
    let window = DisplayWindow::new(80_001, 180_001).expect("window");

    let resolution = constrain_pan(window, -5_000, ctx, EngineConfig::default());
    assert_eq!(resolution.delta_ms, -1);
    assert_eq!(resolution.reason, Some(BlockReason::LeftInvalidZone));
}

#[test]
fn pan_with_no_headroom_is_absorbed() {
    let buckets = tail_buckets();
    let ctx = tail_ctx(&buckets);
    // Left zone already holds the full 10% budget.
    let window = DisplayWindow::new(80_000, 180_000).expect("window");

    let resolution = constrain_pan(window, -5_000, ctx, EngineConfig::default());
    assert_eq!(resolution, PanResolution {
        delta_ms: 0,
        was_constrained: true,
        reason: Some(BlockReason::AtLimit),
    });
}

#[test]
fn combined_overflow_rejects_without_clamping() {
    // 12.5% on each side stays under the relaxed per-side cap, so only the
    // combined cap blocks; that leaves no single side to take headroom from.
    let config = EngineConfig {
        zones: ZoneLimits {
            max_per_side_pct: 15.0,
            max_combined_pct: 20.0,
            gap_bucket_multiplier: 1.0,
        },
        ..EngineConfig::default()
    };
    let buckets = tail_buckets();
    let ctx = tail_ctx(&buckets);
    let window = DisplayWindow::new(70_000, 230_000).expect("window");

    let resolution = constrain_pan(window, 1_000, ctx, config);
    assert_eq!(resolution, PanResolution {
        delta_ms: 0,
        was_constrained: true,
        reason: Some(BlockReason::CombinedInvalidZone),
    });
}

#[test]
fn pan_away_from_an_overflow_that_stays_blocked_is_absorbed() {
    // Most of the window is right zone; a small pan toward the past still
    // lands blocked, and headroom only applies when pushing into the zone.
    let buckets: Vec<TimeMs> = (0..50).map(|i| i * BUCKET_MS).collect();
    let ctx = GestureContext::new(
        EntityLifetime::completed(-500_000, 300_000),
        2_000_000,
        &buckets,
    );
    let window = DisplayWindow::new(0, 1_000_000).expect("window");

    let resolution = constrain_pan(window, -10_000, ctx, EngineConfig::default());
    assert_eq!(resolution, PanResolution {
        delta_ms: 0,
        was_constrained: true,
        reason: Some(BlockReason::AtLimit),
    });

    // A pan long enough to land both zones inside their budgets clears.
    let resolution = constrain_pan(window, -600_000, ctx, EngineConfig::default());
    assert_eq!(resolution.delta_ms, -600_000);
    assert!(!resolution.was_constrained);
    assert_eq!(resolution.reason, None);
}

#[test]
fn ongoing_lifetime_resolves_to_now_for_the_right_zone() {
    let buckets = tail_buckets();
    let ongoing = GestureContext::new(EntityLifetime::ongoing(100_000), 300_000, &buckets);
    let window = DisplayWindow::new(215_000, 315_000).expect("window");

    let resolution = constrain_pan(window, 50_000, ongoing, EngineConfig::default());
    assert_eq!(resolution, PanResolution {
        delta_ms: 5_000,
        was_constrained: true,
        reason: Some(BlockReason::RightInvalidZone),
    });

    // An entity completed at the observation instant behaves identically.
    let completed = GestureContext::new(
        EntityLifetime::completed(100_000, 300_000),
        300_000,
        &buckets,
    );
    assert_eq!(
        constrain_pan(window, 50_000, completed, EngineConfig::default()),
        resolution
    );
}

#[test]
fn zero_delta_is_a_no_op() {
    let buckets = tail_buckets();
    let ctx = tail_ctx(&buckets);
    let window = DisplayWindow::new(80_000, 180_000).expect("window");

    let resolution = constrain_pan(window, 0, ctx, EngineConfig::default());
    assert_eq!(resolution, PanResolution {
        delta_ms: 0,
        was_constrained: false,
        reason: None,
    });
}

#[test]
fn unknown_bucket_width_never_blocks_pan() {
    let ctx = GestureContext::new(EntityLifetime::completed(0, 1_000), 10_000, &[]);
    let window = DisplayWindow::new(1_000_000, 2_000_000).expect("window");

    let resolution = constrain_pan(window, 10_000_000, ctx, EngineConfig::default());
    assert_eq!(resolution.delta_ms, 10_000_000);
    assert!(!resolution.was_constrained);
}
