//! # timeline-engine
//!
//! Core logic for a single-day, drag-to-reschedule timeline.
//!
//! Events are blocks of minutes since midnight laid out on a vertical track of
//! fixed pixel height. The engine maps minutes to pixels and back, finds events
//! whose time ranges overlap, and proposes one naive rescheduling slot. It has no
//! UI dependency: a presenter (the `timeline` CLI, the WASM bindings) owns a
//! [`Timeline`] and draws from [`Timeline::view`].
//!
//! ## Quick start
//!
//! ```rust
//! use timeline_engine::Timeline;
//!
//! let timeline = Timeline::demo();
//! let names: Vec<&str> = timeline.conflicts().iter().map(|e| e.name.as_str()).collect();
//! assert_eq!(names, ["Meeting A", "Workshop B", "Lunch Break", "Presentation C"]);
//! assert_eq!(
//!     timeline.advice().as_deref(),
//!     Some("Reschedule \"Meeting A\" to 2:10 PM - 3:40 PM."),
//! );
//! ```
//!
//! ## Modules
//!
//! - [`convert`] — `"HH:MM"` ⇄ minutes ⇄ 12-hour display ⇄ pixel offsets
//! - [`window`] — the working window mapped onto the track
//! - [`event`] — event and id types
//! - [`store`] — insertion-ordered event collection
//! - [`conflict`] — pairwise overlap detection
//! - [`advisor`] — one-shot rescheduling suggestion
//! - [`drag`] — pointer-drag sessions with grid snapping
//! - [`layout`] — serializable render model
//! - [`timeline`] — the state owner tying it together
//! - [`config`] — startup configuration
//! - [`error`] — Error types

pub mod advisor;
pub mod config;
pub mod conflict;
pub mod convert;
pub mod drag;
pub mod error;
pub mod event;
pub mod layout;
pub mod store;
pub mod timeline;
pub mod window;

pub use advisor::{advice_text, suggest_resolution, Suggestion};
pub use config::TimelineConfig;
pub use conflict::{check_for_conflicts, find_conflict_pairs, ConflictPair};
pub use error::TimelineError;
pub use event::{Event, EventId};
pub use layout::TimelineView;
pub use store::EventStore;
pub use timeline::Timeline;
pub use window::WorkingWindow;
