//! Pointer-drag rescheduling.
//!
//! A [`DragSession`] tracks one dragged block from pointer-down to release. While
//! the pointer moves, the block follows it (clamped to the track) and a preview
//! of the new times is produced; on release the final offset is snapped to the
//! five-minute grid and turned into a new start time.

use serde::Serialize;

use crate::convert::{self, hhmm};
use crate::event::{Event, EventId};
use crate::window::WorkingWindow;

#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    event_id: EventId,
    duration_minutes: u32,
    origin_y: f64,
    origin_top_px: f64,
    top_px: f64,
}

/// Where the dragged block currently sits and the times it would get.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DragPreview {
    pub event_id: EventId,
    pub top_px: f64,
    pub start: i64,
    pub end: i64,
    /// `"(9:15 AM - 10:45 AM)"`
    pub label: String,
}

impl DragSession {
    /// Start dragging `event`, whose block is drawn at `block_top_px`.
    pub fn begin(event: &Event, pointer_y: f64, block_top_px: f64) -> Self {
        Self {
            event_id: event.id,
            duration_minutes: event.duration_minutes(),
            origin_y: pointer_y,
            origin_top_px: block_top_px,
            top_px: block_top_px,
        }
    }

    pub fn event_id(&self) -> EventId {
        self.event_id
    }

    pub fn top_px(&self) -> f64 {
        self.top_px
    }

    /// Follow the pointer to `pointer_y`.
    ///
    /// The block is kept fully on the track: its top stays within
    /// `[0, track_height - block_height]`.
    pub fn update(&mut self, pointer_y: f64, window: &WorkingWindow) -> DragPreview {
        let block_height = f64::from(self.duration_minutes) * window.pixels_per_minute();
        let max_top = (window.track_height_px() - block_height).max(0.0);
        let top = self.origin_top_px + (pointer_y - self.origin_y);
        self.top_px = top.clamp(0.0, max_top);

        let start = convert::pixels_to_minutes(self.top_px, window);
        let end = start + i64::from(self.duration_minutes);
        DragPreview {
            event_id: self.event_id,
            top_px: self.top_px,
            start,
            end,
            label: format!("({})", convert::format_range_display(start, end)),
        }
    }

    /// Release the block and return its snapped start minute.
    pub fn finish(self, window: &WorkingWindow) -> i64 {
        let snapped = convert::snap_offset(self.top_px, window);
        convert::pixels_to_minutes(snapped, window)
    }
}

/// A drag that was committed to the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DragOutcome {
    pub event_id: EventId,
    pub name: String,
    #[serde(with = "hhmm")]
    pub start: u32,
    #[serde(with = "hhmm")]
    pub end: u32,
}

impl DragOutcome {
    /// `Event "Meeting A" rescheduled to 9:15 AM.`
    pub fn message(&self) -> String {
        format!(
            "Event \"{}\" rescheduled to {}.",
            self.name,
            convert::format_minutes_display(i64::from(self.start))
        )
    }
}

impl From<&Event> for DragOutcome {
    fn from(e: &Event) -> Self {
        Self {
            event_id: e.id,
            name: e.name.clone(),
            start: e.start,
            end: e.end,
        }
    }
}
