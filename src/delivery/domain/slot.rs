//! Time-of-day slots for the dispatch board.

use chrono::{DateTime, FixedOffset, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shown in place of a time that has not been recorded.
const NO_TIME: &str = "--:--";

/// Section of the dispatch board a run is listed under.
///
/// Slots are chosen by the local hour of the run's start time. A run that
/// has not started counts as hour zero and lands in [`TimeSlot::Adc`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeSlot {
    /// 04:00 through 11:59.
    #[serde(rename = "Morning Runs")]
    Morning,
    /// 12:00 through 19:59.
    #[serde(rename = "Afternoon Runs")]
    Afternoon,
    /// 20:00 through 03:59.
    #[serde(rename = "ADC Runs")]
    Adc,
}

impl TimeSlot {
    /// All slots in board order.
    pub const ALL: [Self; 3] = [Self::Morning, Self::Afternoon, Self::Adc];

    /// Returns the section heading.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Morning => "Morning Runs",
            Self::Afternoon => "Afternoon Runs",
            Self::Adc => "ADC Runs",
        }
    }

    /// Returns the slot for a local hour of the day.
    #[must_use]
    pub const fn from_hour(hour: u32) -> Self {
        match hour {
            4..=11 => Self::Morning,
            12..=19 => Self::Afternoon,
            _ => Self::Adc,
        }
    }

    /// Returns the slot for a run start time, read in `offset`.
    #[must_use]
    pub fn for_start(start_time: Option<DateTime<Utc>>, offset: FixedOffset) -> Self {
        let hour = start_time.map_or(0, |time| time.with_timezone(&offset).hour());
        Self::from_hour(hour)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Formats a timestamp as a 24-hour `HH:MM` in `offset`, or `--:--`.
#[must_use]
pub fn format_clock_time(time: Option<DateTime<Utc>>, offset: FixedOffset) -> String {
    time.map_or_else(
        || NO_TIME.to_owned(),
        |value| value.with_timezone(&offset).format("%H:%M").to_string(),
    )
}
