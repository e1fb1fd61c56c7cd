// Month module
// Month reference used to anchor the grid and navigation

use chrono::{Datelike, Days, Local, Months, NaiveDate};
use std::fmt;

/// Direction for month navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Previous,
    Next,
}

/// A calendar month, stored as its first and last day together with the
/// Sunday and Saturday that bound its padded grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthRef {
    first: NaiveDate,
    last: NaiveDate,
    grid_start: NaiveDate,
    grid_end: NaiveDate,
}

impl MonthRef {
    /// Build a month reference, `None` if the month or the weeks padding it
    /// out fall outside chrono's range
    pub fn new(year: i32, month: u32) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let last = NaiveDate::from_ymd_opt(year, month, days_in_month(year, month))?;
        Some(Self {
            first,
            last,
            grid_start: start_of_week(first)?,
            grid_end: end_of_week(last)?,
        })
    }

    /// Month containing `date`, `None` at the edges of the representable calendar
    pub fn containing(date: NaiveDate) -> Option<Self> {
        Self::new(date.year(), date.month())
    }

    /// Month containing today's local date
    pub fn current() -> Self {
        let today = Local::now().date_naive();
        Self::containing(today).unwrap_or_else(|| {
            log::warn!("No renderable month for {}, opening January 1970", today);
            Self::unix_epoch()
        })
    }

    /// January 1970, padded from Sunday Dec 28 1969 through Saturday Jan 31 1970
    fn unix_epoch() -> Self {
        let first = NaiveDate::default();
        Self {
            first,
            last: first + Days::new(30),
            grid_start: first - Days::new(4),
            grid_end: first + Days::new(30),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn last_day(&self) -> NaiveDate {
        self.last
    }

    /// Sunday on or before the first day
    pub fn grid_start(&self) -> NaiveDate {
        self.grid_start
    }

    /// Saturday on or after the last day
    pub fn grid_end(&self) -> NaiveDate {
        self.grid_end
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    pub fn previous(&self) -> Self {
        self.navigate(NavDirection::Previous)
    }

    pub fn next(&self) -> Self {
        self.navigate(NavDirection::Next)
    }

    /// Step one month in `direction`. At the edge of the representable
    /// calendar the reference stays where it is.
    pub fn navigate(&self, direction: NavDirection) -> Self {
        let shifted = match direction {
            NavDirection::Previous => self.first.checked_sub_months(Months::new(1)),
            NavDirection::Next => self.first.checked_add_months(Months::new(1)),
        };

        match shifted.and_then(|date| Self::new(date.year(), date.month())) {
            Some(month) => month,
            None => {
                log::warn!("Cannot navigate {:?} from {}", direction, self);
                *self
            }
        }
    }

    /// Heading text, e.g. "March 2024"
    pub fn title(&self) -> String {
        self.first.format("%B %Y").to_string()
    }
}

impl fmt::Display for MonthRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

/// Sunday on or before `date`, `None` if it precedes the representable calendar
pub fn start_of_week(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(u64::from(date.weekday().num_days_from_sunday())))
}

/// Saturday on or after `date`, `None` if it follows the representable calendar
pub fn end_of_week(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_add_days(Days::new(6 - u64::from(date.weekday().num_days_from_sunday())))
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use test_case::test_case;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_month() {
        assert!(MonthRef::new(2024, 0).is_none());
        assert!(MonthRef::new(2024, 13).is_none());
        assert!(MonthRef::new(2024, 3).is_some());
    }

    #[test]
    fn test_containing_uses_first_of_month() {
        let month = MonthRef::containing(date(2024, 3, 17)).unwrap();
        assert_eq!(month.first_day(), date(2024, 3, 1));
        assert_eq!(month, MonthRef::new(2024, 3).unwrap());
    }

    #[test_case(2024, 2, 29 ; "leap february")]
    #[test_case(2023, 2, 28 ; "common february")]
    #[test_case(1900, 2, 28 ; "century non leap")]
    #[test_case(2000, 2, 29 ; "quadricentennial leap")]
    #[test_case(2024, 4, 30 ; "thirty day month")]
    #[test_case(2024, 12, 31 ; "december")]
    fn test_last_day(year: i32, month: u32, expected_day: u32) {
        let month_ref = MonthRef::new(year, month).unwrap();
        assert_eq!(month_ref.last_day(), date(year, month, expected_day));
        assert_eq!(month_ref.days_in_month(), expected_day);
    }

    #[test]
    fn test_navigate_across_year_boundaries() {
        let january = MonthRef::new(2024, 1).unwrap();
        assert_eq!(january.previous(), MonthRef::new(2023, 12).unwrap());

        let december = MonthRef::new(2024, 12).unwrap();
        assert_eq!(december.next(), MonthRef::new(2025, 1).unwrap());
    }

    #[test]
    fn test_navigate_round_trip() {
        let march = MonthRef::new(2024, 3).unwrap();
        assert_eq!(march.next().previous(), march);
        assert_eq!(
            march.navigate(NavDirection::Previous),
            MonthRef::new(2024, 2).unwrap()
        );
    }

    #[test]
    fn test_contains() {
        let march = MonthRef::new(2024, 3).unwrap();
        assert!(march.contains(date(2024, 3, 31)));
        assert!(!march.contains(date(2024, 4, 1)));
        assert!(!march.contains(date(2023, 3, 15)));
    }

    #[test]
    fn test_title_and_display() {
        let march = MonthRef::new(2024, 3).unwrap();
        assert_eq!(march.title(), "March 2024");
        assert_eq!(march.to_string(), "2024-03");
    }

    #[test]
    fn test_grid_bounds_are_padded_to_full_weeks() {
        let march = MonthRef::new(2024, 3).unwrap();
        assert_eq!(march.grid_start(), date(2024, 2, 25));
        assert_eq!(march.grid_end(), date(2024, 4, 6));
    }

    #[test]
    fn test_new_rejects_months_whose_padding_leaves_the_calendar() {
        let first = NaiveDate::MIN;
        let last = NaiveDate::MAX;

        assert_eq!(
            MonthRef::new(first.year(), first.month()).is_some(),
            first.weekday() == Weekday::Sun
        );
        assert_eq!(
            MonthRef::new(last.year(), last.month()).is_some(),
            last.weekday() == Weekday::Sat
        );
        assert_eq!(
            MonthRef::containing(last),
            MonthRef::new(last.year(), last.month())
        );
    }

    #[test]
    fn test_navigate_stays_put_at_the_edge() {
        let mut month = MonthRef::new(NaiveDate::MAX.year(), 1).unwrap();
        for _ in 0..24 {
            month = month.next();
        }
        assert_eq!(month.next(), month);
        assert!(end_of_week(month.last_day()).is_some());
    }

    #[test]
    fn test_unix_epoch_matches_constructor() {
        assert_eq!(MonthRef::unix_epoch(), MonthRef::new(1970, 1).unwrap());
    }
}
