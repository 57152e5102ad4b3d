use std::{fmt, path::Path};

use chrono::{NaiveTime, Timelike};

use crate::config::{WallpaperConfig, is_blank};

const MORNING_START_HOUR: u32 = 6;
const AFTERNOON_START_HOUR: u32 = 12;
const EVENING_START_HOUR: u32 = 18;

/// One of the three fixed periods of the day.
///
/// Boundaries are half-open: 06:00 starts the morning, 12:00 the
/// afternoon and 18:00 the evening, which wraps past midnight until 06:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeWindow {
    /// `[06:00, 12:00)`
    Morning,
    /// `[12:00, 18:00)`
    Afternoon,
    /// `[18:00, 24:00)` and `[00:00, 06:00)`
    Evening,
}

impl TimeWindow {
    /// Classifies a wall-clock time.
    pub fn classify(time: NaiveTime) -> Self {
        match time.hour() {
            h if (MORNING_START_HOUR..AFTERNOON_START_HOUR).contains(&h) => TimeWindow::Morning,
            h if (AFTERNOON_START_HOUR..EVENING_START_HOUR).contains(&h) => TimeWindow::Afternoon,
            _ => TimeWindow::Evening,
        }
    }

    /// The configured image for this window, `None` if the path is blank.
    pub fn path_in(self, config: &WallpaperConfig) -> Option<&Path> {
        let path = match self {
            TimeWindow::Morning => &config.morning,
            TimeWindow::Afternoon => &config.afternoon,
            TimeWindow::Evening => &config.evening,
        };

        (!is_blank(path)).then_some(path.as_path())
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeWindow::Morning => write!(f, "morning"),
            TimeWindow::Afternoon => write!(f, "afternoon"),
            TimeWindow::Evening => write!(f, "evening"),
        }
    }
}
