use serde::{Deserialize, Serialize};

use crate::core::types::{DurationMs, TimeMs};
use crate::error::{TimelineError, TimelineResult};

/// Currently visible time range.
///
/// `end > start` always holds. Gestures never mutate a window in place; each
/// successful gesture produces a replacement window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayWindow {
    start: TimeMs,
    end: TimeMs,
}

impl DisplayWindow {
    pub fn new(start: TimeMs, end: TimeMs) -> TimelineResult<Self> {
        if end <= start {
            return Err(TimelineError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Window anchored at `start`, spanning `span_ms` (clamped to >= 1 ms).
    #[must_use]
    pub fn anchored_start(start: TimeMs, span_ms: DurationMs) -> Self {
        let span = span_ms.max(1);
        Self {
            start,
            end: start + span,
        }
    }

    /// Window anchored at `end`, spanning `span_ms` (clamped to >= 1 ms).
    #[must_use]
    pub fn anchored_end(end: TimeMs, span_ms: DurationMs) -> Self {
        let span = span_ms.max(1);
        Self {
            start: end - span,
            end,
        }
    }

    #[must_use]
    pub fn start(self) -> TimeMs {
        self.start
    }

    #[must_use]
    pub fn end(self) -> TimeMs {
        self.end
    }

    #[must_use]
    pub fn span_ms(self) -> DurationMs {
        self.end - self.start
    }

    /// Clamps an instant into the window.
    #[must_use]
    pub fn clamp_instant(self, instant: TimeMs) -> TimeMs {
        instant.clamp(self.start, self.end)
    }

    /// Center-preserving resize to `new_span_ms`.
    ///
    /// Pure arithmetic with no constraint checks; callers re-validate the
    /// result. The achieved span is exactly `new_span_ms` (clamped to at
    /// least 1 ms to preserve the window invariant).
    #[must_use]
    pub fn symmetric_zoom(self, new_span_ms: DurationMs) -> Self {
        let new_span = new_span_ms.max(1);
        let center = self.start + self.span_ms() / 2;
        let start = center - new_span / 2;
        Self {
            start,
            end: start + new_span,
        }
    }

    /// Translates the window by `delta_ms`.
    ///
    /// Pure arithmetic with no constraint checks; callers re-validate the
    /// result.
    #[must_use]
    pub fn pan(self, delta_ms: DurationMs) -> Self {
        Self {
            start: self.start + delta_ms,
            end: self.end + delta_ms,
        }
    }
}
