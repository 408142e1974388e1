//! Conversions between `"HH:MM"` strings, minutes since midnight, 12-hour display
//! strings, and pixel offsets on the vertical track.
//!
//! The pixel mapping is lossy on purpose: `pixels_to_minutes` floors and
//! `minutes_to_pixels` clamps at the window start, which snaps dragged blocks to
//! whole minutes.

use chrono::{NaiveTime, Timelike};

use crate::error::{Result, TimelineError};
use crate::window::WorkingWindow;

pub const MINUTES_PER_DAY: i64 = 1440;

/// Grid used when a drag is released.
pub const SNAP_MINUTES: i64 = 5;

/// Parse `"HH:MM"` into minutes since midnight.
///
/// Empty (or whitespace-only) input yields `0` rather than an error; form fields
/// that were never filled in map to midnight.
///
/// # Errors
/// Returns `TimelineError::InvalidTime` for anything that is not a valid
/// 24-hour `H:MM` / `HH:MM` time.
pub fn time_to_minutes(s: &str) -> Result<u32> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }

    let time = NaiveTime::parse_from_str(trimmed, "%H:%M")
        .map_err(|_| TimelineError::InvalidTime(s.to_string()))?;

    Ok(time.hour() * 60 + time.minute())
}

/// Format minutes since midnight as zero-padded `"HH:MM"`.
///
/// Values outside a single day wrap around midnight (`1500` → `"01:00"`,
/// `-30` → `"23:30"`).
pub fn minutes_to_time(minutes: i64) -> String {
    wall_clock(minutes).format("%H:%M").to_string()
}

/// Convert `"HH:MM"` to a 12-hour display string (`"13:30"` → `"1:30 PM"`).
///
/// Hours `0` and `12` both display as `12`.
pub fn format_time_display(s: &str) -> Result<String> {
    let minutes = time_to_minutes(s)?;
    Ok(format_minutes_display(i64::from(minutes)))
}

/// 12-hour display for a minute count, wrapping like [`minutes_to_time`].
pub fn format_minutes_display(minutes: i64) -> String {
    wall_clock(minutes).format("%-I:%M %p").to_string()
}

/// `"9:00 AM - 10:30 AM"` for a start/end pair.
pub fn format_range_display(start: i64, end: i64) -> String {
    format!(
        "{} - {}",
        format_minutes_display(start),
        format_minutes_display(end)
    )
}

/// Vertical offset of `minutes` on the track.
///
/// Times before the window start clamp to `0.0`, so the result is never negative.
pub fn minutes_to_pixels(minutes: u32, window: &WorkingWindow) -> f64 {
    let offset = i64::from(minutes) - i64::from(window.start_minutes());
    (offset as f64 * window.pixels_per_minute()).max(0.0)
}

/// Minute at vertical offset `px`, floored to the whole minute.
///
/// The window start is added before flooring so a grid offset that divides
/// back to `124.99999…` still lands on its minute.
pub fn pixels_to_minutes(px: f64, window: &WorkingWindow) -> i64 {
    (px / window.pixels_per_minute() + f64::from(window.start_minutes())).floor() as i64
}

/// Snap a track offset to the nearest [`SNAP_MINUTES`] grid line.
///
/// The offset is first rounded to whole minutes, then to the grid, and mapped
/// back to pixels.
pub fn snap_offset(px: f64, window: &WorkingWindow) -> f64 {
    let ppm = window.pixels_per_minute();
    let moved = (px / ppm).round();
    let snapped = (moved / SNAP_MINUTES as f64).round() * SNAP_MINUTES as f64;
    snapped * ppm
}

fn wall_clock(minutes: i64) -> NaiveTime {
    let wrapped = minutes.rem_euclid(MINUTES_PER_DAY) as u32;
    NaiveTime::from_num_seconds_from_midnight_opt(wrapped * 60, 0).unwrap_or(NaiveTime::MIN)
}

/// Serde adapter that stores minutes as `u32` and puts `"HH:MM"` on the wire.
pub mod hhmm {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(minutes: &u32, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::minutes_to_time(i64::from(*minutes)))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::time_to_minutes(&s).map_err(de::Error::custom)
    }
}
