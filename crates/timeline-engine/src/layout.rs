//! Render model: everything a presenter needs to draw the timeline.

use serde::Serialize;

use crate::convert::{self, hhmm};
use crate::event::{Event, EventId};
use crate::window::WorkingWindow;

/// Step between hour labels on the track.
pub const LABEL_STEP_MINUTES: u32 = 60;

/// Position and state of one event block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventLayout {
    pub id: EventId,
    pub name: String,
    #[serde(with = "hhmm")]
    pub start: u32,
    #[serde(with = "hhmm")]
    pub end: u32,
    pub top_px: f64,
    pub height_px: f64,
    pub conflicting: bool,
    /// Starts before or ends after the working window.
    pub outside_window: bool,
    pub label: String,
}

/// An hour tick on the track.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeLabel {
    #[serde(with = "hhmm")]
    pub minutes: u32,
    pub top_px: f64,
    pub text: String,
}

/// Snapshot of the whole timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineView {
    pub window: WorkingWindow,
    pub window_label: String,
    pub labels: Vec<TimeLabel>,
    pub events: Vec<EventLayout>,
    pub conflicts: Vec<EventId>,
    pub conflict_message: Option<String>,
    pub advice: Option<String>,
}

pub fn layout_event(event: &Event, window: &WorkingWindow, conflicting: bool) -> EventLayout {
    EventLayout {
        id: event.id,
        name: event.name.clone(),
        start: event.start,
        end: event.end,
        top_px: convert::minutes_to_pixels(event.start, window),
        height_px: f64::from(event.duration_minutes()) * window.pixels_per_minute(),
        conflicting,
        outside_window: window.is_outside(event.start, event.end),
        label: event.display_range(),
    }
}

/// Hour labels from the window start to its end, inclusive.
pub fn time_labels(window: &WorkingWindow) -> Vec<TimeLabel> {
    (window.start_minutes()..=window.end_minutes())
        .step_by(LABEL_STEP_MINUTES as usize)
        .map(|minutes| TimeLabel {
            minutes,
            top_px: convert::minutes_to_pixels(minutes, window),
            text: convert::format_minutes_display(i64::from(minutes)),
        })
        .collect()
}
