//! Tests for time string, minute, display and pixel conversions.

use timeline_engine::convert::{
    format_minutes_display, format_time_display, minutes_to_pixels, minutes_to_time,
    pixels_to_minutes, snap_offset, time_to_minutes,
};
use timeline_engine::{TimelineError, WorkingWindow};

// ── time_to_minutes ─────────────────────────────────────────────────────────

#[test]
fn parses_hours_and_minutes() {
    assert_eq!(time_to_minutes("00:00").unwrap(), 0);
    assert_eq!(time_to_minutes("09:30").unwrap(), 570);
    assert_eq!(time_to_minutes("23:59").unwrap(), 1439);
}

#[test]
fn accepts_single_digit_hour() {
    assert_eq!(time_to_minutes("9:05").unwrap(), 545);
}

#[test]
fn empty_input_is_midnight() {
    assert_eq!(time_to_minutes("").unwrap(), 0);
    assert_eq!(time_to_minutes("   ").unwrap(), 0);
}

#[test]
fn malformed_input_is_rejected() {
    for bad in ["25:00", "12:60", "noon", "12", "ab:cd"] {
        let err = time_to_minutes(bad).unwrap_err();
        assert!(
            matches!(err, TimelineError::InvalidTime(_)),
            "{bad:?} should be InvalidTime, got {err:?}"
        );
    }
}

// ── minutes_to_time ─────────────────────────────────────────────────────────

#[test]
fn formats_zero_padded() {
    assert_eq!(minutes_to_time(0), "00:00");
    assert_eq!(minutes_to_time(545), "09:05");
    assert_eq!(minutes_to_time(1439), "23:59");
}

#[test]
fn wraps_across_midnight() {
    assert_eq!(minutes_to_time(1440), "00:00");
    assert_eq!(minutes_to_time(1500), "01:00");
    assert_eq!(minutes_to_time(-30), "23:30");
}

// ── 12-hour display ─────────────────────────────────────────────────────────

#[test]
fn midnight_and_noon_display_as_twelve() {
    assert_eq!(format_time_display("00:00").unwrap(), "12:00 AM");
    assert_eq!(format_time_display("12:00").unwrap(), "12:00 PM");
}

#[test]
fn afternoon_hours_drop_padding() {
    assert_eq!(format_time_display("13:30").unwrap(), "1:30 PM");
    assert_eq!(format_time_display("09:05").unwrap(), "9:05 AM");
    assert_eq!(format_time_display("23:59").unwrap(), "11:59 PM");
}

#[test]
fn display_from_minutes_wraps() {
    assert_eq!(format_minutes_display(790), "1:10 PM");
    assert_eq!(format_minutes_display(1440 + 60), "1:00 AM");
}

#[test]
fn display_rejects_malformed_time() {
    assert!(format_time_display("7pm").is_err());
}

// ── Pixel mapping ───────────────────────────────────────────────────────────

#[test]
fn default_window_is_one_pixel_per_minute() {
    let window = WorkingWindow::default();
    assert_eq!(window.duration_minutes(), 600);
    assert_eq!(window.pixels_per_minute(), 1.0);

    assert_eq!(minutes_to_pixels(480, &window), 0.0);
    assert_eq!(minutes_to_pixels(540, &window), 60.0);
    assert_eq!(minutes_to_pixels(1080, &window), 600.0);
}

#[test]
fn times_before_window_clamp_to_zero() {
    let window = WorkingWindow::default();
    assert_eq!(minutes_to_pixels(300, &window), 0.0);
    assert_eq!(minutes_to_pixels(0, &window), 0.0);
}

#[test]
fn pixels_to_minutes_floors() {
    let window = WorkingWindow::default();
    assert_eq!(pixels_to_minutes(60.0, &window), 540);
    assert_eq!(pixels_to_minutes(60.9, &window), 540);
    assert_eq!(pixels_to_minutes(0.0, &window), 480);
}

#[test]
fn scaled_track_maps_both_ways() {
    // 08:00-13:00 on 600px: 2px per minute.
    let window = WorkingWindow::from_times("08:00", "13:00").unwrap();
    assert_eq!(window.pixels_per_minute(), 2.0);
    assert_eq!(minutes_to_pixels(600, &window), 240.0);
    assert_eq!(pixels_to_minutes(240.0, &window), 600);
    assert_eq!(pixels_to_minutes(241.0, &window), 600);
}

#[test]
fn snap_rounds_to_five_minute_grid() {
    let window = WorkingWindow::default();
    assert_eq!(snap_offset(77.0, &window), 75.0);
    assert_eq!(snap_offset(78.0, &window), 80.0);
    assert_eq!(snap_offset(0.4, &window), 0.0);
}

#[test]
fn snap_respects_track_scale() {
    let window = WorkingWindow::from_times("08:00", "13:00").unwrap();
    // 37px is 18.5 minutes → 19 → 20 minutes on the grid → 40px.
    assert_eq!(snap_offset(37.0, &window), 40.0);
}
