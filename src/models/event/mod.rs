// Event module
// In-memory calendar event model

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;

/// Length of every event created from a date click
pub const DEFAULT_EVENT_DURATION_HOURS: i64 = 1;

/// Identifier assigned by the event store when an event is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId(pub u64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Candidate start/end pair for an event that has not been created yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Slot {
    /// Slot starting at `start` and lasting the default event duration
    pub fn starting_at(start: NaiveDateTime) -> Self {
        Self {
            start,
            end: start + Duration::hours(DEFAULT_EVENT_DURATION_HOURS),
        }
    }

    /// Slot for a clicked calendar date, anchored at midnight
    pub fn for_date(date: NaiveDate) -> Self {
        Self::starting_at(date.and_time(NaiveTime::MIN))
    }

    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }
}

/// Whether an event lies before or after a reference instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTiming {
    Past,
    Upcoming,
}

/// Calendar event held by the session's event store.
///
/// Times are local wall-clock values. `end` always comes from the slot the
/// event was created with and is never edited afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub location: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Event {
    pub(crate) fn from_slot(
        id: EventId,
        title: String,
        location: Option<String>,
        slot: Slot,
    ) -> Self {
        Self {
            id,
            title,
            location,
            start: slot.start,
            end: slot.end,
        }
    }

    /// Check whether the event starts on `date`, ignoring time of day
    pub fn starts_on(&self, date: NaiveDate) -> bool {
        self.start.date() == date
    }

    /// Strictly before `now`
    pub fn is_past(&self, now: NaiveDateTime) -> bool {
        self.start < now
    }

    /// Strictly after `now`
    pub fn is_upcoming(&self, now: NaiveDateTime) -> bool {
        self.start > now
    }

    /// Timing used for marker colouring. An event starting exactly at `now`
    /// is not past, so it is shown as upcoming.
    pub fn timing(&self, now: NaiveDateTime) -> EventTiming {
        if self.is_past(now) {
            EventTiming::Past
        } else {
            EventTiming::Upcoming
        }
    }
}

/// Required title, kept exactly as entered. Only the empty string is rejected.
pub fn non_empty_title(title: &str) -> Option<String> {
    (!title.is_empty()).then(|| title.to_string())
}

/// Optional location, kept as entered; empty input means no location
pub fn optional_location(location: &str) -> Option<String> {
    non_empty_title(location)
}
