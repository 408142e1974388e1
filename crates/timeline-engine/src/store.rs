//! Insertion-ordered, in-memory event collection.
//!
//! Every operation is atomic: on error the store is left exactly as it was.
//! There is no removal; events only grow in number or move in time.

use chrono::Utc;
use tracing::debug;

use crate::event::{validate_range, Event, EventId};
use crate::error::{Result, TimelineError};

#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
    last_id: u64,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed demo schedule: two overlapping pairs before and after noon.
    pub fn demo() -> Self {
        let seed = [
            (101, "Meeting A", 540, 630),
            (102, "Workshop B", 600, 690),
            (103, "Lunch Break", 720, 780),
            (104, "Presentation C", 750, 840),
        ];
        let events = seed
            .into_iter()
            .map(|(id, name, start, end)| Event {
                id: EventId(id),
                name: name.to_string(),
                start,
                end,
            })
            .collect();
        Self {
            events,
            last_id: 104,
        }
    }

    /// Load a store from already-identified events, keeping their order.
    ///
    /// # Errors
    /// Fails on the first event with a blank name, an invalid range, or an id
    /// already seen (reported as `TimelineError::Config`).
    pub fn from_events(events: Vec<Event>) -> Result<Self> {
        let mut store = Self::new();
        for event in events {
            store.insert(event)?;
        }
        Ok(store)
    }

    /// Append an event that already carries an id.
    ///
    /// # Errors
    /// `TimelineError::Config` when the id is taken; otherwise the same
    /// validation as [`EventStore::add`].
    pub fn insert(&mut self, event: Event) -> Result<&Event> {
        if self.get(event.id).is_some() {
            return Err(TimelineError::Config(format!(
                "duplicate event id {}",
                event.id
            )));
        }
        let event = Event::new(event.id, &event.name, event.start, event.end)?;
        self.last_id = self.last_id.max(event.id.0);
        self.events.push(event);
        Ok(&self.events[self.events.len() - 1])
    }

    /// Append a new event with a fresh id.
    ///
    /// # Errors
    /// `TimelineError::InvalidRange` when `start >= end`,
    /// `TimelineError::EmptyName` when the name is blank.
    pub fn add(&mut self, name: &str, start: u32, end: u32) -> Result<&Event> {
        let event = Event::new(self.peek_id(), name, start, end)?;
        self.last_id = event.id.0;
        debug!(id = %event.id, name = %event.name, start, end, "event added");
        self.events.push(event);
        Ok(&self.events[self.events.len() - 1])
    }

    /// Rewrite an event's start and end in place; id, name and position are kept.
    ///
    /// # Errors
    /// `TimelineError::NotFound` for an unknown id, `TimelineError::InvalidRange`
    /// when the new range is empty, reversed, or leaves the day.
    pub fn move_event(&mut self, id: EventId, new_start: i64, new_end: i64) -> Result<&Event> {
        let index = self.index_of(id).ok_or(TimelineError::NotFound(id))?;
        let (start, end) = validate_range(new_start, new_end)?;

        let event = &mut self.events[index];
        event.start = start;
        event.end = end;
        debug!(%id, start, end, "event moved");
        Ok(&self.events[index])
    }

    /// Move an event to `new_start`, keeping its duration.
    pub fn move_to(&mut self, id: EventId, new_start: i64) -> Result<&Event> {
        let duration = self
            .get(id)
            .ok_or(TimelineError::NotFound(id))?
            .duration_minutes();
        self.move_event(id, new_start, new_start + i64::from(duration))
    }

    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn all(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Latest end time across every event, if any.
    pub fn last_end(&self) -> Option<u32> {
        self.events.iter().map(|e| e.end).max()
    }

    fn index_of(&self, id: EventId) -> Option<usize> {
        self.events.iter().position(|e| e.id == id)
    }

    /// Creation timestamp in milliseconds, bumped past anything already issued.
    fn peek_id(&self) -> EventId {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default();
        EventId(now.max(self.last_id + 1))
    }
}
