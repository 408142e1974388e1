//! Startup configuration for a [`Timeline`](crate::timeline::Timeline).

use serde::{Deserialize, Serialize};

use crate::error::{Result, TimelineError};
use crate::window::{WorkingWindow, DEFAULT_TRACK_HEIGHT_PX};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Working window start, `"HH:MM"`.
    pub working_start: String,
    /// Working window end, `"HH:MM"`.
    pub working_end: String,
    pub track_height_px: f64,
    /// Load the demo schedule at startup.
    pub seed_demo: bool,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            working_start: "08:00".to_string(),
            working_end: "18:00".to_string(),
            track_height_px: DEFAULT_TRACK_HEIGHT_PX,
            seed_demo: true,
        }
    }
}

impl TimelineConfig {
    /// Parse a JSON config; missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| TimelineError::Config(e.to_string()))
    }

    pub fn window(&self) -> Result<WorkingWindow> {
        WorkingWindow::from_times(&self.working_start, &self.working_end)?
            .with_track_height(self.track_height_px)
    }
}
