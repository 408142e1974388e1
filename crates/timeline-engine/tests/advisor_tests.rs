//! Tests for the one-shot rescheduling heuristic.

use timeline_engine::advisor::RESOLUTION_BUFFER_MINUTES;
use timeline_engine::convert::time_to_minutes;
use timeline_engine::{
    advice_text, check_for_conflicts, suggest_resolution, Event, EventId, TimelineError,
    WorkingWindow,
};

fn event(id: u64, name: &str, start: &str, end: &str) -> Event {
    Event {
        id: EventId(id),
        name: name.to_string(),
        start: time_to_minutes(start).unwrap(),
        end: time_to_minutes(end).unwrap(),
    }
}

fn pair() -> Vec<Event> {
    vec![
        event(1, "A", "09:00", "10:30"),
        event(2, "B", "10:00", "11:30"),
    ]
}

#[test]
fn no_conflicts_no_suggestion() {
    let events = vec![event(1, "A", "09:00", "10:00")];
    let window = WorkingWindow::default();

    assert_eq!(suggest_resolution(&[], &events, &window).unwrap(), None);
    assert_eq!(advice_text(&[], &events, &window), None);
}

#[test]
fn first_conflict_moves_after_last_end() {
    // last end 11:30 + 10 min → A's 90 minutes at 11:40-13:10
    let events = pair();
    let conflicts = check_for_conflicts(&events);
    let window = WorkingWindow::default();

    let suggestion = suggest_resolution(&conflicts, &events, &window)
        .unwrap()
        .expect("a suggestion");

    assert_eq!(suggestion.event_id, EventId(1));
    assert_eq!(suggestion.start, time_to_minutes("11:40").unwrap());
    assert_eq!(suggestion.end, time_to_minutes("13:10").unwrap());
    assert_eq!(
        suggestion.to_string(),
        "Reschedule \"A\" to 11:40 AM - 1:10 PM."
    );
}

#[test]
fn window_end_too_early_is_unresolvable() {
    let events = pair();
    let conflicts = check_for_conflicts(&events);
    let window = WorkingWindow::from_times("08:00", "12:00").unwrap();

    let err = suggest_resolution(&conflicts, &events, &window).unwrap_err();

    assert_eq!(
        err,
        TimelineError::UnresolvableConflict {
            id: EventId(1),
            name: "A".to_string(),
        }
    );
    assert_eq!(
        advice_text(&conflicts, &events, &window).as_deref(),
        Some("Cannot resolve A. No free slots.")
    );
}

#[test]
fn slot_ending_exactly_at_window_end_fits() {
    // 11:40 + 90 min = 13:10
    let events = pair();
    let conflicts = check_for_conflicts(&events);
    let window = WorkingWindow::from_times("08:00", "13:10").unwrap();

    assert!(suggest_resolution(&conflicts, &events, &window)
        .unwrap()
        .is_some());
}

#[test]
fn last_end_spans_all_events_not_just_conflicts() {
    let mut events = pair();
    events.push(event(3, "Afternoon", "15:00", "16:00"));
    let conflicts = check_for_conflicts(&events);
    let window = WorkingWindow::default();

    let suggestion = suggest_resolution(&conflicts, &events, &window)
        .unwrap()
        .unwrap();

    assert_eq!(
        suggestion.start,
        time_to_minutes("16:00").unwrap() + RESOLUTION_BUFFER_MINUTES
    );
}

#[test]
fn first_in_given_order_wins_over_earliest_start() {
    let events = pair();
    let conflicts: Vec<&Event> = vec![&events[1], &events[0]];
    let window = WorkingWindow::default();

    let suggestion = suggest_resolution(&conflicts, &events, &window)
        .unwrap()
        .unwrap();

    assert_eq!(suggestion.event_id, EventId(2));
    assert_eq!(suggestion.end - suggestion.start, 90);
}

#[test]
fn window_start_anchors_when_no_events_end_later() {
    // Conflicts passed in without the store: the window start is the floor.
    let events = pair();
    let conflicts: Vec<&Event> = events.iter().collect();
    let window = WorkingWindow::from_times("08:00", "18:00").unwrap();

    let suggestion = suggest_resolution(&conflicts, &[], &window)
        .unwrap()
        .unwrap();

    assert_eq!(suggestion.start, time_to_minutes("08:10").unwrap());
}
