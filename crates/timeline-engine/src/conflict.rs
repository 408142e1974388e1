//! Detect overlapping events on the timeline.
//!
//! Sorts a copy of the events by start time, then compares every ordered pair.
//! Adjacent events (where one ends exactly when another starts) are NOT conflicts.

use crate::event::Event;

/// Two overlapping events and how long they overlap.
#[derive(Debug, Clone, PartialEq)]
pub struct ConflictPair<'a> {
    pub first: &'a Event,
    pub second: &'a Event,
    pub overlap_minutes: u32,
}

/// Every event that overlaps at least one other event.
///
/// Each event appears once, in the order it was first found while scanning
/// the start-sorted pairs. The input slice is never reordered.
pub fn check_for_conflicts(events: &[Event]) -> Vec<&Event> {
    let mut conflicting: Vec<&Event> = Vec::new();

    for pair in find_conflict_pairs(events) {
        for event in [pair.first, pair.second] {
            if !conflicting.iter().any(|e| e.id == event.id) {
                conflicting.push(event);
            }
        }
    }

    conflicting
}

/// Find all overlapping pairs, earlier-starting event first.
///
/// Two events overlap when `a.start < b.end && a.end > b.start`.
/// The overlap duration is `min(a.end, b.end) - max(a.start, b.start)`.
pub fn find_conflict_pairs(events: &[Event]) -> Vec<ConflictPair<'_>> {
    let mut sorted: Vec<&Event> = events.iter().collect();
    // Stable, so equal starts keep insertion order.
    sorted.sort_by_key(|e| e.start);

    let mut pairs = Vec::new();
    for (i, &a) in sorted.iter().enumerate() {
        for &b in &sorted[i + 1..] {
            if a.overlaps(b) {
                pairs.push(ConflictPair {
                    first: a,
                    second: b,
                    overlap_minutes: a.end.min(b.end) - a.start.max(b.start),
                });
            }
        }
    }

    pairs
}

/// Banner text naming the conflicting events, or `None` when there are none.
///
/// `Conflict detected: "Meeting A", "Workshop B".`
pub fn conflict_summary(conflicts: &[&Event]) -> Option<String> {
    if conflicts.is_empty() {
        return None;
    }
    let names: Vec<String> = conflicts.iter().map(|e| format!("\"{}\"", e.name)).collect();
    Some(format!("Conflict detected: {}.", names.join(", ")))
}
