//! Tests for overlap detection.

use timeline_engine::conflict::conflict_summary;
use timeline_engine::convert::time_to_minutes;
use timeline_engine::{check_for_conflicts, find_conflict_pairs, Event, EventId};

/// Helper to create an Event from "HH:MM" strings.
fn event(id: u64, name: &str, start: &str, end: &str) -> Event {
    Event {
        id: EventId(id),
        name: name.to_string(),
        start: time_to_minutes(start).unwrap(),
        end: time_to_minutes(end).unwrap(),
    }
}

fn ids(events: &[&Event]) -> Vec<u64> {
    events.iter().map(|e| e.id.0).collect()
}

#[test]
fn two_overlapping_events_detected() {
    // 09:00-10:30 and 10:00-11:30 share [10:00, 10:30)
    let events = vec![
        event(1, "A", "09:00", "10:30"),
        event(2, "B", "10:00", "11:30"),
    ];

    let conflicts = check_for_conflicts(&events);

    assert_eq!(ids(&conflicts), vec![1, 2]);
}

#[test]
fn adjacent_events_not_a_conflict() {
    let events = vec![
        event(1, "A", "09:00", "10:00"),
        event(2, "B", "10:00", "11:00"),
    ];

    assert!(
        check_for_conflicts(&events).is_empty(),
        "adjacent events (end == start) should not be conflicts"
    );
}

#[test]
fn empty_list_has_no_conflicts() {
    assert!(check_for_conflicts(&[]).is_empty());
    assert!(find_conflict_pairs(&[]).is_empty());
}

#[test]
fn order_follows_start_sorted_discovery() {
    // Insertion order is B, A; the scan runs in start order, so A is found first.
    let events = vec![
        event(2, "B", "10:00", "11:30"),
        event(1, "A", "09:00", "10:30"),
    ];

    assert_eq!(ids(&check_for_conflicts(&events)), vec![1, 2]);
}

#[test]
fn event_in_several_conflicts_listed_once() {
    // Long block overlaps two short ones.
    let events = vec![
        event(1, "Long", "09:00", "12:00"),
        event(2, "Early", "09:30", "10:00"),
        event(3, "Late", "11:00", "11:30"),
    ];

    let conflicts = check_for_conflicts(&events);

    assert_eq!(ids(&conflicts), vec![1, 2, 3]);
}

#[test]
fn non_conflicting_events_are_excluded() {
    let events = vec![
        event(1, "A", "09:00", "10:30"),
        event(2, "B", "10:00", "11:30"),
        event(3, "C", "15:00", "16:00"),
    ];

    assert_eq!(ids(&check_for_conflicts(&events)), vec![1, 2]);
}

#[test]
fn input_order_is_not_mutated() {
    let events = vec![
        event(2, "B", "10:00", "11:30"),
        event(1, "A", "09:00", "10:30"),
    ];
    let before = events.clone();

    let _ = check_for_conflicts(&events);

    assert_eq!(events, before);
}

#[test]
fn pairs_report_overlap_minutes() {
    let events = vec![
        event(1, "Long", "09:00", "12:00"),
        event(2, "Inner", "10:00", "11:00"),
        event(3, "Tail", "11:30", "12:30"),
    ];

    let pairs = find_conflict_pairs(&events);

    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0].first.id, EventId(1));
    assert_eq!(pairs[0].second.id, EventId(2));
    assert_eq!(pairs[0].overlap_minutes, 60, "fully contained event");
    assert_eq!(pairs[1].second.id, EventId(3));
    assert_eq!(pairs[1].overlap_minutes, 30);
}

#[test]
fn summary_names_every_conflict() {
    let events = vec![
        event(1, "Meeting A", "09:00", "10:30"),
        event(2, "Workshop B", "10:00", "11:30"),
    ];
    let conflicts = check_for_conflicts(&events);

    assert_eq!(
        conflict_summary(&conflicts).as_deref(),
        Some("Conflict detected: \"Meeting A\", \"Workshop B\".")
    );
    assert_eq!(conflict_summary(&[]), None);
}
