// Test fixtures - reusable test data
// Provides consistent dates and seeded sessions across integration tests

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use event_tracker_calendar::models::event::Slot;
use event_tracker_calendar::models::filter::FilterMode;
use event_tracker_calendar::models::month::MonthRef;
use event_tracker_calendar::services::event::EventStore;
use event_tracker_calendar::services::interaction::CalendarState;

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, min, 0).unwrap()
    }

    /// Reference "now": Mar 15, 2024 at noon
    pub fn now() -> NaiveDateTime {
        at(2024, 3, 15, 12, 0)
    }

    pub fn march_2024() -> MonthRef {
        MonthRef::new(2024, 3).unwrap()
    }
}

/// Store seeded with one past, one current and one upcoming event
pub fn seeded_store() -> EventStore {
    let mut store = EventStore::new();
    store
        .create("Retro", "Room 1", Slot::starting_at(dates::at(2024, 3, 10, 9, 0)))
        .unwrap();
    store
        .create("Lunch", "", Slot::starting_at(dates::now()))
        .unwrap();
    store
        .create("Launch", "HQ", Slot::starting_at(dates::at(2024, 3, 20, 14, 0)))
        .unwrap();
    store
}

pub fn session(filter: FilterMode) -> CalendarState {
    CalendarState::new(dates::march_2024(), filter).with_store(seeded_store())
}
