use chrono::{TimeZone, Utc};
use timeline_rs::core::{TimeMs, bucket_count, bucket_width_ms, datetime_to_epoch_ms};

#[test]
fn width_is_zero_until_two_timestamps_exist() {
    assert_eq!(bucket_width_ms(&[]), 0);
    assert_eq!(bucket_width_ms(&[1_700_000_000_000]), 0);
}

#[test]
fn width_is_first_pair_spacing() {
    assert_eq!(bucket_width_ms(&[0, 60_000, 120_000]), 60_000);
    assert_eq!(bucket_width_ms(&[10_000, 11_000]), 1_000);
}

#[test]
fn width_trusts_the_producer_past_the_first_pair() {
    // Spacing is uniform by precondition; only the first pair is read.
    assert_eq!(bucket_width_ms(&[0, 5_000, 99_000]), 5_000);
}

#[test]
fn width_from_minute_bucket_series() {
    let base = datetime_to_epoch_ms(
        Utc.with_ymd_and_hms(2025, 6, 12, 10, 0, 0)
            .single()
            .expect("valid timestamp"),
    );
    let buckets: Vec<TimeMs> = (0..30).map(|i| base + i * 60_000).collect();
    assert_eq!(bucket_width_ms(&buckets), 60_000);
}

#[test]
fn count_is_fractional() {
    assert!((bucket_count(90_000, 60_000) - 1.5).abs() < 1e-12);
    assert!((bucket_count(1_313_000, 60_000) - 21.883_333_333_333_333).abs() < 1e-9);
}

#[test]
fn count_is_zero_without_a_known_width() {
    assert_eq!(bucket_count(1_000_000, 0), 0.0);
    assert_eq!(bucket_count(1_000_000, -60_000), 0.0);
}
