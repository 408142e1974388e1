//! The working window: the time-of-day range mapped onto the vertical track.

use serde::Serialize;

use crate::convert::{self, hhmm};
use crate::error::{Result, TimelineError};

/// Height of the vertical track in pixels.
pub const DEFAULT_TRACK_HEIGHT_PX: f64 = 600.0;

/// 08:00
pub const DEFAULT_WINDOW_START: u32 = 480;

/// 18:00
pub const DEFAULT_WINDOW_END: u32 = 1080;

/// Visible time-of-day range. Always satisfies `start_minutes < end_minutes`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WorkingWindow {
    #[serde(rename = "start", with = "hhmm")]
    start_minutes: u32,
    #[serde(rename = "end", with = "hhmm")]
    end_minutes: u32,
    track_height_px: f64,
}

impl WorkingWindow {
    /// Build a window over `[start_minutes, end_minutes)` on the default track.
    ///
    /// # Errors
    /// Returns `TimelineError::InvalidRange` when `start_minutes >= end_minutes`
    /// or the end lies past midnight.
    pub fn new(start_minutes: u32, end_minutes: u32) -> Result<Self> {
        if start_minutes >= end_minutes || i64::from(end_minutes) >= convert::MINUTES_PER_DAY {
            return Err(TimelineError::InvalidRange {
                start: convert::minutes_to_time(i64::from(start_minutes)),
                end: convert::minutes_to_time(i64::from(end_minutes)),
            });
        }
        Ok(Self {
            start_minutes,
            end_minutes,
            track_height_px: DEFAULT_TRACK_HEIGHT_PX,
        })
    }

    /// Build a window from two `"HH:MM"` strings.
    pub fn from_times(start: &str, end: &str) -> Result<Self> {
        Self::new(convert::time_to_minutes(start)?, convert::time_to_minutes(end)?)
    }

    /// Same range on a track of a different height.
    ///
    /// # Errors
    /// Returns `TimelineError::Config` unless `px` is finite and positive.
    pub fn with_track_height(self, px: f64) -> Result<Self> {
        if !px.is_finite() || px <= 0.0 {
            return Err(TimelineError::Config(format!(
                "track height must be a positive number of pixels, got {px}"
            )));
        }
        Ok(Self {
            track_height_px: px,
            ..self
        })
    }

    pub fn start_minutes(&self) -> u32 {
        self.start_minutes
    }

    pub fn end_minutes(&self) -> u32 {
        self.end_minutes
    }

    pub fn track_height_px(&self) -> f64 {
        self.track_height_px
    }

    pub fn duration_minutes(&self) -> u32 {
        self.end_minutes - self.start_minutes
    }

    pub fn pixels_per_minute(&self) -> f64 {
        self.track_height_px / f64::from(self.duration_minutes())
    }

    /// `"8:00 AM - 6:00 PM"`
    pub fn label(&self) -> String {
        convert::format_range_display(
            i64::from(self.start_minutes),
            i64::from(self.end_minutes),
        )
    }

    /// Whether `[start, end)` spills outside the window on either side.
    pub fn is_outside(&self, start: u32, end: u32) -> bool {
        start < self.start_minutes || end > self.end_minutes
    }
}

impl Default for WorkingWindow {
    fn default() -> Self {
        Self {
            start_minutes: DEFAULT_WINDOW_START,
            end_minutes: DEFAULT_WINDOW_END,
            track_height_px: DEFAULT_TRACK_HEIGHT_PX,
        }
    }
}
