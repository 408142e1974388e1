//! Plain-text rendering of a timeline for the terminal.

use std::fmt::Write;

use timeline_engine::layout::TimelineView;
use timeline_engine::{ConflictPair, Event};

/// Hour ruler followed by one line per event, then the conflict banner and
/// suggestion when there are conflicts.
pub fn render_view(view: &TimelineView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Working hours: {}", view.window_label);
    let _ = writeln!(out);

    let mut events: Vec<_> = view.events.iter().collect();
    events.sort_by_key(|e| e.start);

    let mut pending = events.into_iter().peekable();
    for (i, label) in view.labels.iter().enumerate() {
        let _ = writeln!(out, "{:>8} ┤", label.text);

        // Events starting before the next hour line hang under this one.
        let next = view.labels.get(i + 1).map(|l| l.minutes);
        while let Some(event) = pending.next_if(|e| next.is_none_or(|n| e.start < n)) {
            let mut flags = Vec::new();
            if event.conflicting {
                flags.push("conflict");
            }
            if event.outside_window {
                flags.push("outside hours");
            }
            let flags = if flags.is_empty() {
                String::new()
            } else {
                format!("  [{}]", flags.join(", "))
            };
            let _ = writeln!(
                out,
                "{:>8} │ {:<20} {}{}",
                "", event.name, event.label, flags
            );
        }
    }

    if let Some(message) = &view.conflict_message {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", message);
    }
    if let Some(advice) = &view.advice {
        let _ = writeln!(out, "Suggested: {}", advice);
    }
    out
}

pub fn render_conflicts(conflicts: &[&Event], pairs: &[ConflictPair<'_>], advice: Option<&str>) -> String {
    if conflicts.is_empty() {
        return "No conflicts.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "{} conflicting events:", conflicts.len());
    for event in conflicts {
        let _ = writeln!(out, "  {:<14} {:<20} {}", event.id, event.name, event.display_range());
    }
    let _ = writeln!(out, "Overlaps:");
    for pair in pairs {
        let _ = writeln!(
            out,
            "  {} / {}: {} min",
            pair.first.name, pair.second.name, pair.overlap_minutes
        );
    }
    if let Some(advice) = advice {
        let _ = writeln!(out, "Suggested: {}", advice);
    }
    out
}
