// Filter module
// Visibility modes for the event list

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::event::Event;

/// Which events are visible on the calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    All,
    Past,
    Upcoming,
}

impl FilterMode {
    pub const ALL_MODES: [FilterMode; 3] = [FilterMode::All, FilterMode::Past, FilterMode::Upcoming];

    /// Check whether `event` is visible under this mode.
    ///
    /// Past and upcoming are both strict, so an event starting exactly at
    /// `now` is only visible under [`FilterMode::All`].
    pub fn matches(&self, event: &Event, now: NaiveDateTime) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Past => event.is_past(now),
            FilterMode::Upcoming => event.is_upcoming(now),
        }
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::All => "All Events",
            FilterMode::Past => "Past Events",
            FilterMode::Upcoming => "Upcoming Events",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Past => "past",
            FilterMode::Upcoming => "upcoming",
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(FilterMode::All),
            "past" => Ok(FilterMode::Past),
            "upcoming" => Ok(FilterMode::Upcoming),
            other => Err(format!("Unknown filter mode '{}'", other)),
        }
    }
}
