//! One-shot rescheduling advice for the first conflicting event.
//!
//! The heuristic is intentionally naive: it takes the first event of the
//! conflict list as given, and proposes a single slot starting
//! [`RESOLUTION_BUFFER_MINUTES`] after the latest end time of *all* events. It
//! never searches for gaps and never looks at a second candidate. Because the
//! slot follows the global last end, it can land after unrelated events, and a
//! later move elsewhere can make it overlap again.

use std::fmt;

use serde::Serialize;
use tracing::warn;

use crate::convert::{self, hhmm};
use crate::error::{Result, TimelineError};
use crate::event::{Event, EventId};
use crate::window::WorkingWindow;

/// Gap between the latest event end and the proposed start.
pub const RESOLUTION_BUFFER_MINUTES: u32 = 10;

/// A proposed new slot for one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub event_id: EventId,
    pub name: String,
    #[serde(with = "hhmm")]
    pub start: u32,
    #[serde(with = "hhmm")]
    pub end: u32,
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Reschedule \"{}\" to {} - {}.",
            self.name,
            convert::format_minutes_display(i64::from(self.start)),
            convert::format_minutes_display(i64::from(self.end)),
        )
    }
}

/// Propose a slot for `conflicts[0]`.
///
/// `events` is every event on the timeline, not only the conflicting ones; the
/// latest end among them (or the window start when there are none) anchors the
/// proposal.
///
/// Returns `Ok(None)` when there is nothing to resolve.
///
/// # Errors
/// Returns `TimelineError::UnresolvableConflict` naming the event when the
/// proposed slot would run past the window end.
pub fn suggest_resolution(
    conflicts: &[&Event],
    events: &[Event],
    window: &WorkingWindow,
) -> Result<Option<Suggestion>> {
    let Some(to_move) = conflicts.first() else {
        return Ok(None);
    };

    let duration = to_move.duration_minutes();
    let last_end = events
        .iter()
        .map(|e| e.end)
        .fold(window.start_minutes(), u32::max);
    let start = last_end + RESOLUTION_BUFFER_MINUTES;
    let end = start + duration;

    if end > window.end_minutes() {
        warn!(id = %to_move.id, start, end, "no slot inside the working window");
        return Err(TimelineError::UnresolvableConflict {
            id: to_move.id,
            name: to_move.name.clone(),
        });
    }

    Ok(Some(Suggestion {
        event_id: to_move.id,
        name: to_move.name.clone(),
        start,
        end,
    }))
}

/// The advice line shown to the user, or `None` when there are no conflicts.
///
/// Both outcomes are plain text: the suggestion, or the "cannot resolve"
/// message naming the event.
pub fn advice_text(conflicts: &[&Event], events: &[Event], window: &WorkingWindow) -> Option<String> {
    match suggest_resolution(conflicts, events, window) {
        Ok(suggestion) => suggestion.map(|s| s.to_string()),
        Err(err) => Some(err.to_string()),
    }
}
