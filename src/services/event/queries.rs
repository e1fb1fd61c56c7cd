use super::EventStore;
use crate::models::event::Event;
use crate::models::filter::FilterMode;
use chrono::{NaiveDate, NaiveDateTime};

impl EventStore {
    /// List the events visible under `mode`, in insertion order.
    pub fn list_events(&self, mode: FilterMode, now: NaiveDateTime) -> Vec<&Event> {
        filter_events(&self.events, mode, now)
    }

    /// Events on `date` under `mode`. This is the query a date click resolves against.
    pub fn events_for_date(
        &self,
        mode: FilterMode,
        now: NaiveDateTime,
        date: NaiveDate,
    ) -> Vec<&Event> {
        events_on_date(&self.list_events(mode, now), date)
    }
}

/// Keep the events visible under `mode`, preserving their order.
pub fn filter_events(events: &[Event], mode: FilterMode, now: NaiveDateTime) -> Vec<&Event> {
    events.iter().filter(|event| mode.matches(event, now)).collect()
}

/// Narrow an already filtered list to the events starting on `date`.
pub fn events_on_date<'a>(filtered: &[&'a Event], date: NaiveDate) -> Vec<&'a Event> {
    filtered
        .iter()
        .copied()
        .filter(|event| event.starts_on(date))
        .collect()
}
