use std::fmt;

use serde::{Deserialize, Serialize};

/// Machine-readable cause for a rejected or absorbed gesture.
///
/// The serialized codes are the contract consumed by embedding hosts (for
/// example to decide between a bounce animation and a silent ignore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockReason {
    /// Target span below the absolute minimum range.
    #[serde(rename = "MIN_RANGE_MS")]
    MinRange,
    /// Target span above the absolute maximum range.
    #[serde(rename = "MAX_RANGE_MS")]
    MaxRange,
    /// Target span would show fewer buckets than the data supports.
    #[serde(rename = "MIN_BUCKET_COUNT")]
    MinBucketCount,
    /// Target span would show more buckets than the display supports.
    #[serde(rename = "MAX_BUCKET_COUNT")]
    MaxBucketCount,
    /// Left invalid zone would exceed its per-side percentage limit.
    #[serde(rename = "left-invalid-zone-limit")]
    LeftInvalidZone,
    /// Right invalid zone would exceed its per-side percentage limit.
    #[serde(rename = "right-invalid-zone-limit")]
    RightInvalidZone,
    /// Both zones together would exceed the combined percentage limit.
    #[serde(rename = "combined-invalid-zone-limit")]
    CombinedInvalidZone,
    /// No headroom remains in the gesture direction; the gesture is absorbed.
    #[serde(rename = "at-limit")]
    AtLimit,
}

impl BlockReason {
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::MinRange => "MIN_RANGE_MS",
            Self::MaxRange => "MAX_RANGE_MS",
            Self::MinBucketCount => "MIN_BUCKET_COUNT",
            Self::MaxBucketCount => "MAX_BUCKET_COUNT",
            Self::LeftInvalidZone => "left-invalid-zone-limit",
            Self::RightInvalidZone => "right-invalid-zone-limit",
            Self::CombinedInvalidZone => "combined-invalid-zone-limit",
            Self::AtLimit => "at-limit",
        }
    }
}

impl fmt::Display for BlockReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Outcome of a single constraint check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Clear,
    Blocked(BlockReason),
}

impl Verdict {
    #[must_use]
    pub fn is_blocked(self) -> bool {
        matches!(self, Self::Blocked(_))
    }

    #[must_use]
    pub fn reason(self) -> Option<BlockReason> {
        match self {
            Self::Clear => None,
            Self::Blocked(reason) => Some(reason),
        }
    }
}
