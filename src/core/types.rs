use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Absolute instant as signed epoch milliseconds.
pub type TimeMs = i64;

/// Signed duration in milliseconds.
pub type DurationMs = i64;

/// Converts a UTC datetime to epoch milliseconds.
#[must_use]
pub fn datetime_to_epoch_ms(time: DateTime<Utc>) -> TimeMs {
    time.timestamp_millis()
}

/// End boundary of an entity lifetime.
///
/// `Ongoing` means the entity is still producing data; every computation
/// substitutes the caller-supplied "now" instant for the missing end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifetimeEnd {
    Ongoing,
    Completed(TimeMs),
}

impl LifetimeEnd {
    /// Resolves to a concrete instant, substituting `now` while ongoing.
    #[must_use]
    pub fn resolve(self, now: TimeMs) -> TimeMs {
        match self {
            Self::Ongoing => now,
            Self::Completed(end) => end,
        }
    }
}

/// Lifetime of the entity whose data the timeline displays.
///
/// `start` is always known; the surrounding UI only renders an entity that
/// has started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityLifetime {
    pub start: TimeMs,
    pub end: LifetimeEnd,
}

impl EntityLifetime {
    #[must_use]
    pub fn ongoing(start: TimeMs) -> Self {
        Self {
            start,
            end: LifetimeEnd::Ongoing,
        }
    }

    #[must_use]
    pub fn completed(start: TimeMs, end: TimeMs) -> Self {
        Self {
            start,
            end: LifetimeEnd::Completed(end),
        }
    }

    /// Concrete end boundary, with `now` standing in while ongoing.
    #[must_use]
    pub fn resolved_end(self, now: TimeMs) -> TimeMs {
        self.end.resolve(now)
    }
}

/// Per-gesture inputs the caller refreshes on every invocation.
///
/// The engine never caches any of these; each gesture is resolved from
/// scratch against the context it is handed.
#[derive(Debug, Clone, Copy)]
pub struct GestureContext<'a> {
    pub lifetime: EntityLifetime,
    pub now: TimeMs,
    pub bucket_timestamps: &'a [TimeMs],
}

impl<'a> GestureContext<'a> {
    #[must_use]
    pub fn new(lifetime: EntityLifetime, now: TimeMs, bucket_timestamps: &'a [TimeMs]) -> Self {
        Self {
            lifetime,
            now,
            bucket_timestamps,
        }
    }
}
