//! Month grid generation.
//!
//! The grid covers a whole month padded out to full Sunday-to-Saturday weeks,
//! so it always holds a multiple of seven dates.

use chrono::NaiveDate;

use crate::models::month::MonthRef;
pub use crate::models::month::{end_of_week, start_of_week};

/// Column headings, Sunday first
pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// A single day in the rendered grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub date: NaiveDate,
    /// False for the padding days borrowed from the neighbouring months
    pub in_current_month: bool,
    pub is_today: bool,
}

/// Every date to display for `month`, from the Sunday starting the first
/// week through the Saturday ending the last week.
pub fn generate_month_grid(month: MonthRef) -> Vec<NaiveDate> {
    let end = month.grid_end();
    month
        .grid_start()
        .iter_days()
        .take_while(|day| *day <= end)
        .collect()
}

/// Grid dates annotated with the flags the month view styles by
pub fn grid_cells(month: MonthRef, today: NaiveDate) -> Vec<GridCell> {
    generate_month_grid(month)
        .into_iter()
        .map(|date| GridCell {
            date,
            in_current_month: month.contains(date),
            is_today: date == today,
        })
        .collect()
}
