//! Calendar view types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// View granularity governing range size and navigation step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewType {
    Day,
    Week,
    Month,
}

/// One cell of a computed calendar range.
///
/// `in_month` distinguishes padding days in the month grid from days of
/// the anchor month; day and week ranges always set it to `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub in_month: bool,
}

impl CalendarDay {
    pub fn new(date: NaiveDate, in_month: bool) -> Self {
        Self { date, in_month }
    }
}
