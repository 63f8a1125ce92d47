pub mod buckets;
pub mod types;
pub mod window;
pub mod zones;

pub use buckets::{bucket_count, bucket_width_ms};
pub use types::{
    DurationMs, EntityLifetime, GestureContext, LifetimeEnd, TimeMs, datetime_to_epoch_ms,
};
pub use window::DisplayWindow;
pub use zones::{
    InvalidZoneLayout, StripeKind, ZoneSide, ZoneStripe, gap_width_ms, invalid_zone_layout,
    invalid_zone_widths_ms,
};
