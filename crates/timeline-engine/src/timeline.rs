//! The timeline state owner: events, working window, and the active drag.
//!
//! A presenter holds one [`Timeline`], forwards user gestures to it, and redraws
//! from [`Timeline::view`] after every mutation.

use tracing::debug;

use crate::advisor::{self, Suggestion};
use crate::config::TimelineConfig;
use crate::conflict::{self, ConflictPair};
use crate::convert;
use crate::drag::{DragOutcome, DragPreview, DragSession};
use crate::error::{Result, TimelineError};
use crate::event::{Event, EventId};
use crate::layout::{self, TimelineView};
use crate::store::EventStore;
use crate::window::WorkingWindow;

#[derive(Debug, Clone, Default)]
pub struct Timeline {
    store: EventStore,
    window: WorkingWindow,
    drag: Option<DragSession>,
}

impl Timeline {
    pub fn new(store: EventStore, window: WorkingWindow) -> Self {
        Self {
            store,
            window,
            drag: None,
        }
    }

    /// Default window with the demo schedule loaded.
    pub fn demo() -> Self {
        Self::new(EventStore::demo(), WorkingWindow::default())
    }

    pub fn from_config(config: &TimelineConfig) -> Result<Self> {
        let store = if config.seed_demo {
            EventStore::demo()
        } else {
            EventStore::new()
        };
        Ok(Self::new(store, config.window()?))
    }

    pub fn events(&self) -> &[Event] {
        self.store.all()
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn window(&self) -> &WorkingWindow {
        &self.window
    }

    /// Add an event from form values (`"HH:MM"` strings).
    pub fn add_event(&mut self, name: &str, start: &str, end: &str) -> Result<&Event> {
        let start = convert::time_to_minutes(start)?;
        let end = convert::time_to_minutes(end)?;
        self.store.add(name, start, end)
    }

    /// Move an event to `new_start_minutes`, keeping its duration.
    pub fn move_event(&mut self, id: EventId, new_start_minutes: i64) -> Result<&Event> {
        self.store.move_to(id, new_start_minutes)
    }

    /// Replace the working window, keeping the track height.
    ///
    /// # Errors
    /// On an invalid range the previous window stays in place.
    pub fn set_working_window(&mut self, start: &str, end: &str) -> Result<&WorkingWindow> {
        let window = WorkingWindow::from_times(start, end)?
            .with_track_height(self.window.track_height_px())?;
        debug!(
            start = window.start_minutes(),
            end = window.end_minutes(),
            "working window changed"
        );
        self.window = window;
        Ok(&self.window)
    }

    pub fn conflicts(&self) -> Vec<&Event> {
        conflict::check_for_conflicts(self.store.all())
    }

    pub fn conflict_pairs(&self) -> Vec<ConflictPair<'_>> {
        conflict::find_conflict_pairs(self.store.all())
    }

    pub fn suggestion(&self) -> Result<Option<Suggestion>> {
        advisor::suggest_resolution(&self.conflicts(), self.store.all(), &self.window)
    }

    pub fn advice(&self) -> Option<String> {
        advisor::advice_text(&self.conflicts(), self.store.all(), &self.window)
    }

    /// Move the first conflicting event into its suggested slot.
    ///
    /// Returns `Ok(None)` when nothing conflicts.
    pub fn apply_suggestion(&mut self) -> Result<Option<&Event>> {
        let Some(suggestion) = self.suggestion()? else {
            return Ok(None);
        };
        let moved = self.store.move_event(
            suggestion.event_id,
            i64::from(suggestion.start),
            i64::from(suggestion.end),
        )?;
        Ok(Some(moved))
    }

    pub fn view(&self) -> TimelineView {
        let conflicts = self.conflicts();
        let events = self
            .store
            .all()
            .iter()
            .map(|e| {
                let conflicting = conflicts.iter().any(|c| c.id == e.id);
                layout::layout_event(e, &self.window, conflicting)
            })
            .collect();

        TimelineView {
            window: self.window,
            window_label: self.window.label(),
            labels: layout::time_labels(&self.window),
            events,
            conflict_message: conflict::conflict_summary(&conflicts),
            advice: advisor::advice_text(&conflicts, self.store.all(), &self.window),
            conflicts: conflicts.iter().map(|e| e.id).collect(),
        }
    }

    /// Pick up an event's block at pointer position `pointer_y`.
    ///
    /// # Errors
    /// `TimelineError::DragInProgress` when another drag is active,
    /// `TimelineError::NotFound` for an unknown id.
    pub fn begin_drag(&mut self, id: EventId, pointer_y: f64) -> Result<()> {
        if let Some(active) = &self.drag {
            return Err(TimelineError::DragInProgress(active.event_id()));
        }
        let event = self.store.get(id).ok_or(TimelineError::NotFound(id))?;
        let top = convert::minutes_to_pixels(event.start, &self.window);
        self.drag = Some(DragSession::begin(event, pointer_y, top));
        debug!(%id, pointer_y, "drag started");
        Ok(())
    }

    pub fn drag_to(&mut self, pointer_y: f64) -> Result<DragPreview> {
        let session = self.drag.as_mut().ok_or(TimelineError::NoActiveDrag)?;
        Ok(session.update(pointer_y, &self.window))
    }

    /// Release the dragged block and commit its snapped position.
    ///
    /// The session ends even when the move is rejected; the store is then
    /// left unchanged.
    pub fn end_drag(&mut self) -> Result<DragOutcome> {
        let session = self.drag.take().ok_or(TimelineError::NoActiveDrag)?;
        let id = session.event_id();
        let new_start = session.finish(&self.window);
        debug!(%id, new_start, "drag released");
        let moved = self.store.move_to(id, new_start)?;
        Ok(DragOutcome::from(moved))
    }

    /// Drop the active drag without moving anything.
    pub fn cancel_drag(&mut self) -> Option<EventId> {
        self.drag.take().map(|s| s.event_id())
    }

    pub fn dragged_event(&self) -> Option<EventId> {
        self.drag.as_ref().map(DragSession::event_id)
    }
}
