//! Time-blocked events on a single day.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::convert::{self, hhmm};
use crate::error::{Result, TimelineError};

/// Unique event identifier within an [`EventStore`](crate::store::EventStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub u64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A named block of time. Minutes since midnight internally, `"HH:MM"` on the wire.
///
/// Deserializing goes through [`Event::new`], so a decoded event always has a
/// non-blank name and `start < end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EventRecord")]
pub struct Event {
    pub id: EventId,
    pub name: String,
    #[serde(with = "hhmm")]
    pub start: u32,
    #[serde(with = "hhmm")]
    pub end: u32,
}

/// Unvalidated wire form of [`Event`].
#[derive(Deserialize)]
struct EventRecord {
    id: EventId,
    name: String,
    #[serde(with = "hhmm")]
    start: u32,
    #[serde(with = "hhmm")]
    end: u32,
}

impl TryFrom<EventRecord> for Event {
    type Error = TimelineError;

    fn try_from(record: EventRecord) -> Result<Self> {
        Event::new(record.id, &record.name, record.start, record.end)
    }
}

impl Event {
    /// Build a validated event. The name is trimmed.
    ///
    /// # Errors
    /// Returns `TimelineError::EmptyName` for a blank name and
    /// `TimelineError::InvalidRange` unless `start < end` within one day.
    pub fn new(id: EventId, name: &str, start: u32, end: u32) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TimelineError::EmptyName);
        }
        validate_range(i64::from(start), i64::from(end))?;
        Ok(Self {
            id,
            name: name.to_string(),
            start,
            end,
        })
    }

    pub fn duration_minutes(&self) -> u32 {
        self.end - self.start
    }

    /// Half-open overlap test; touching endpoints do not overlap.
    pub fn overlaps(&self, other: &Event) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// `"9:00 AM - 10:30 AM"`
    pub fn display_range(&self) -> String {
        convert::format_range_display(i64::from(self.start), i64::from(self.end))
    }
}

/// Check that `[start, end)` is a non-empty range inside a single day.
pub(crate) fn validate_range(start: i64, end: i64) -> Result<(u32, u32)> {
    let in_day = |m: i64| (0..convert::MINUTES_PER_DAY).contains(&m);
    if start >= end || !in_day(start) || !in_day(end) {
        return Err(TimelineError::InvalidRange {
            start: convert::minutes_to_time(start),
            end: convert::minutes_to_time(end),
        });
    }
    Ok((start as u32, end as u32))
}
