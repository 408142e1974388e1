//! WASM bindings for timeline-engine.
//!
//! The browser page is the presenter: it owns one [`TimelineHandle`], forwards
//! form submits and drag gestures to it, and redraws from the JSON returned by
//! [`TimelineHandle::view`]. Stateless helpers (time conversion, conflict checks)
//! are exported as free functions. All complex types cross the boundary as JSON
//! strings; errors become string `JsValue`s the page shows as notifications.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p timeline-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir web/pkg/ \
//!   target/wasm32-unknown-unknown/release/timeline_engine_wasm.wasm
//! ```

use serde::{Deserialize, Serialize};
use timeline_engine::{convert, Event, EventId, EventStore, Timeline, WorkingWindow};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

/// Input format for events passed from JavaScript. `id` is optional; events
/// without one are numbered after the highest explicit id.
#[derive(Deserialize)]
struct EventInput {
    id: Option<u64>,
    name: String,
    start: String,
    end: String,
}

#[derive(Serialize)]
struct NoticeDto<'a> {
    kind: &'a str,
    message: String,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| js_err(format!("Serialization error: {}", e)))
}

/// JavaScript numbers are f64; ids must be non-negative integers.
fn event_id(id: f64) -> Result<EventId, JsValue> {
    if id.is_finite() && id >= 0.0 && id.fract() == 0.0 {
        Ok(EventId(id as u64))
    } else {
        Err(js_err(format!("Invalid event id: {}", id)))
    }
}

/// Convert a JSON array of `{id?, name, start, end}` objects into events.
///
/// Missing ids are numbered after the highest explicit id, and the list goes
/// through [`EventStore::from_events`], so duplicate ids are rejected rather
/// than merged.
fn parse_events_json(json: &str) -> Result<Vec<Event>, JsValue> {
    let inputs: Vec<EventInput> = serde_json::from_str(json)
        .map_err(|e| js_err(format!("Invalid events JSON: {}", e)))?;

    let mut next_id = inputs.iter().filter_map(|e| e.id).max().unwrap_or(0);
    let events = inputs
        .into_iter()
        .map(|input| {
            let id = input.id.unwrap_or_else(|| {
                next_id += 1;
                next_id
            });
            let start = convert::time_to_minutes(&input.start).map_err(js_err)?;
            let end = convert::time_to_minutes(&input.end).map_err(js_err)?;
            Event::new(EventId(id), &input.name, start, end).map_err(js_err)
        })
        .collect::<Result<Vec<_>, JsValue>>()?;

    let store = EventStore::from_events(events).map_err(js_err)?;
    Ok(store.all().to_vec())
}

// ---------------------------------------------------------------------------
// Stateful timeline
// ---------------------------------------------------------------------------

/// One timeline owned by the page.
#[wasm_bindgen]
pub struct TimelineHandle {
    inner: Timeline,
}

#[wasm_bindgen]
impl TimelineHandle {
    /// Empty timeline over `working_start`–`working_end` (`"HH:MM"`).
    #[wasm_bindgen(constructor)]
    pub fn new(working_start: &str, working_end: &str) -> Result<TimelineHandle, JsValue> {
        let window = WorkingWindow::from_times(working_start, working_end).map_err(js_err)?;
        Ok(Self {
            inner: Timeline::new(EventStore::new(), window),
        })
    }

    /// Default window with the demo schedule.
    pub fn demo() -> TimelineHandle {
        Self {
            inner: Timeline::demo(),
        }
    }

    /// Load events from JSON, replacing the current set.
    #[wasm_bindgen(js_name = "loadEvents")]
    pub fn load_events(&mut self, events_json: &str) -> Result<(), JsValue> {
        let store = EventStore::from_events(parse_events_json(events_json)?).map_err(js_err)?;
        self.inner = Timeline::new(store, *self.inner.window());
        Ok(())
    }

    /// Add an event from form values. Returns the new event as JSON.
    #[wasm_bindgen(js_name = "addEvent")]
    pub fn add_event(&mut self, name: &str, start: &str, end: &str) -> Result<String, JsValue> {
        let event = self.inner.add_event(name, start, end).map_err(js_err)?;
        to_json(event)
    }

    /// Move an event to a new start minute, keeping its duration.
    #[wasm_bindgen(js_name = "moveEvent")]
    pub fn move_event(&mut self, id: f64, new_start_minutes: i32) -> Result<String, JsValue> {
        let event = self
            .inner
            .move_event(event_id(id)?, i64::from(new_start_minutes))
            .map_err(js_err)?;
        to_json(event)
    }

    #[wasm_bindgen(js_name = "setWorkingWindow")]
    pub fn set_working_window(&mut self, start: &str, end: &str) -> Result<String, JsValue> {
        let window = self.inner.set_working_window(start, end).map_err(js_err)?;
        Ok(window.label())
    }

    #[wasm_bindgen(js_name = "beginDrag")]
    pub fn begin_drag(&mut self, id: f64, pointer_y: f64) -> Result<(), JsValue> {
        self.inner.begin_drag(event_id(id)?, pointer_y).map_err(js_err)
    }

    /// Returns `{event_id, top_px, start, end, label}` for the dragged block.
    #[wasm_bindgen(js_name = "dragTo")]
    pub fn drag_to(&mut self, pointer_y: f64) -> Result<String, JsValue> {
        let preview = self.inner.drag_to(pointer_y).map_err(js_err)?;
        to_json(&preview)
    }

    /// Commit the drag. Returns a `{kind, message}` notice for the page.
    #[wasm_bindgen(js_name = "endDrag")]
    pub fn end_drag(&mut self) -> Result<String, JsValue> {
        let outcome = self.inner.end_drag().map_err(js_err)?;
        to_json(&NoticeDto {
            kind: "success",
            message: outcome.message(),
        })
    }

    #[wasm_bindgen(js_name = "cancelDrag")]
    pub fn cancel_drag(&mut self) {
        self.inner.cancel_drag();
    }

    /// Full render snapshot as JSON.
    pub fn view(&self) -> Result<String, JsValue> {
        to_json(&self.inner.view())
    }
}

// ---------------------------------------------------------------------------
// Stateless exports
// ---------------------------------------------------------------------------

#[wasm_bindgen(js_name = "timeToMinutes")]
pub fn time_to_minutes(s: &str) -> Result<u32, JsValue> {
    convert::time_to_minutes(s).map_err(js_err)
}

#[wasm_bindgen(js_name = "minutesToTime")]
pub fn minutes_to_time(minutes: i32) -> String {
    convert::minutes_to_time(i64::from(minutes))
}

#[wasm_bindgen(js_name = "formatTimeDisplay")]
pub fn format_time_display(s: &str) -> Result<String, JsValue> {
    convert::format_time_display(s).map_err(js_err)
}

/// Conflicting events from a JSON event array, as a JSON array.
#[wasm_bindgen(js_name = "checkForConflicts")]
pub fn check_for_conflicts(events_json: &str) -> Result<String, JsValue> {
    let events = parse_events_json(events_json)?;
    to_json(&timeline_engine::check_for_conflicts(&events))
}

/// Advice line for a JSON event array inside the given window, or `undefined`.
#[wasm_bindgen(js_name = "suggestResolution")]
pub fn suggest_resolution(
    events_json: &str,
    working_start: &str,
    working_end: &str,
) -> Result<Option<String>, JsValue> {
    let events = parse_events_json(events_json)?;
    let window = WorkingWindow::from_times(working_start, working_end).map_err(js_err)?;
    let conflicts = timeline_engine::check_for_conflicts(&events);
    Ok(timeline_engine::advice_text(&conflicts, &events, &window))
}
