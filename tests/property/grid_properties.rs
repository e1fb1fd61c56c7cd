// Property-based tests for month grid generation and event filtering
// Checks the grid shape for arbitrary months and the filter partition for arbitrary stores

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};
use event_tracker_calendar::models::event::Slot;
use event_tracker_calendar::models::filter::FilterMode;
use event_tracker_calendar::models::month::MonthRef;
use event_tracker_calendar::services::calendar_grid::generate_month_grid;
use event_tracker_calendar::services::event::queries::events_on_date;
use event_tracker_calendar::services::event::EventStore;
use proptest::prelude::*;

fn base() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

proptest! {
    /// Property: the grid is whole weeks, Sunday to Saturday, covering every day of the month once
    #[test]
    fn prop_grid_is_week_aligned(year in 1900..2200i32, month in 1..=12u32) {
        let month_ref = MonthRef::new(year, month).unwrap();
        let grid = generate_month_grid(month_ref);

        prop_assert_eq!(grid.len() % 7, 0);
        prop_assert!(grid.len() >= 28 && grid.len() <= 42);
        prop_assert_eq!(grid[0].weekday(), Weekday::Sun);
        prop_assert_eq!(grid[grid.len() - 1].weekday(), Weekday::Sat);

        let in_month: Vec<&NaiveDate> = grid
            .iter()
            .filter(|d| d.year() == year && d.month() == month)
            .collect();
        prop_assert_eq!(in_month.len() as u32, month_ref.days_in_month());
        prop_assert_eq!(*in_month[0], month_ref.first_day());
        prop_assert_eq!(*in_month[in_month.len() - 1], month_ref.last_day());

        for pair in grid.windows(2) {
            prop_assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }

    /// Property: navigating forward then back returns to the same month
    #[test]
    fn prop_navigation_round_trips(year in 1900..2200i32, month in 1..=12u32) {
        let month_ref = MonthRef::new(year, month).unwrap();
        prop_assert_eq!(month_ref.next().previous(), month_ref);
        prop_assert_eq!(month_ref.previous().next(), month_ref);
    }

    /// Property: past, upcoming and "exactly now" partition the store
    #[test]
    fn prop_filters_partition_events(
        offsets in proptest::collection::vec(0i64..(60 * 24 * 60), 0..40),
        now_offset in 0i64..(60 * 24 * 60),
    ) {
        let mut store = EventStore::new();
        for minutes in &offsets {
            let start = base() + Duration::minutes(*minutes);
            store.create("Event", "", Slot::starting_at(start)).unwrap();
        }
        let now = base() + Duration::minutes(now_offset);

        let past = store.list_events(FilterMode::Past, now);
        let upcoming = store.list_events(FilterMode::Upcoming, now);
        let at_now = store.events().iter().filter(|e| e.start == now).count();

        prop_assert_eq!(store.list_events(FilterMode::All, now).len(), store.len());
        prop_assert_eq!(past.len() + upcoming.len() + at_now, store.len());
        prop_assert!(past.iter().all(|e| e.start < now));
        prop_assert!(upcoming.iter().all(|e| e.start > now));
    }

    /// Property: every event matched for a date starts on that date, whatever its time
    #[test]
    fn prop_events_on_date_matches_calendar_day(
        offsets in proptest::collection::vec(0i64..(60 * 24 * 14), 1..30),
        day in 0i64..14,
    ) {
        let mut store = EventStore::new();
        for minutes in &offsets {
            let start = base() + Duration::minutes(*minutes);
            store.create("Event", "", Slot::starting_at(start)).unwrap();
        }
        let target = base().date() + Duration::days(day);

        let all = store.list_events(FilterMode::All, base());
        let matched = events_on_date(&all, target);
        let expected = store.events().iter().filter(|e| e.start.date() == target).count();

        prop_assert_eq!(matched.len(), expected);
        prop_assert!(matched.iter().all(|e| e.start.date() == target));
    }
}
