//! Error types for timeline-engine operations.

use thiserror::Error;

use crate::event::EventId;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimelineError {
    #[error("Invalid time: {0:?} (expected HH:MM)")]
    InvalidTime(String),

    #[error("Start time must be before end time (start {start}, end {end})")]
    InvalidRange { start: String, end: String },

    #[error("Event name must not be empty")]
    EmptyName,

    #[error("No event with id {0}")]
    NotFound(EventId),

    /// The advisor found no slot for the event inside the working window.
    ///
    /// The display text is the user-facing advice line.
    #[error("Cannot resolve {name}. No free slots.")]
    UnresolvableConflict { id: EventId, name: String },

    #[error("Event {0} is already being dragged")]
    DragInProgress(EventId),

    #[error("No drag in progress")]
    NoActiveDrag,

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, TimelineError>;
