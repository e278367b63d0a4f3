//! Calendar range calculator
//!
//! Computes the ordered set of dates to render for a given anchor date
//! and view granularity. Pure and deterministic: identical inputs give
//! identical output, which keeps the result memoizable and trivially
//! testable.

use cadence_domain::{CalendarDay, CalendarPolicy, ViewType};
use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

/// Compute the ordered date range for one calendar view.
///
/// - `Day`: exactly the anchor date.
/// - `Week`: the seven consecutive days starting at the configured week
///   start on or before the anchor.
/// - `Month`: the full-week grid covering the anchor's month, padded
///   backward and forward to whole weeks. Padding days are flagged
///   `in_month = false`; the result length is always a multiple of 7.
pub fn compute_range(
    anchor: NaiveDate,
    view: ViewType,
    policy: &CalendarPolicy,
) -> Vec<CalendarDay> {
    match view {
        ViewType::Day => vec![CalendarDay::new(anchor, true)],
        ViewType::Week => {
            let start = start_of_week(anchor, policy.week_start);
            start.iter_days().take(7).map(|date| CalendarDay::new(date, true)).collect()
        }
        ViewType::Month => month_grid(anchor, policy.week_start),
    }
}

/// The configured week-start day on or before `date`.
pub fn start_of_week(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    let offset = (7 + i64::from(date.weekday().num_days_from_monday())
        - i64::from(week_start.num_days_from_monday()))
        % 7;
    date - Days::new(offset.unsigned_abs())
}

fn month_grid(anchor: NaiveDate, week_start: Weekday) -> Vec<CalendarDay> {
    // with_day(1) cannot fail for an existing date; fall back to the
    // anchor itself rather than panic if chrono ever disagrees.
    let first = anchor.with_day(1).unwrap_or(anchor);
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(first);

    let grid_start = start_of_week(first, week_start);
    let grid_end = start_of_week(last, week_start) + Days::new(6);

    grid_start
        .iter_days()
        .take_while(|date| *date <= grid_end)
        .map(|date| {
            let in_month = date.month() == anchor.month() && date.year() == anchor.year();
            CalendarDay::new(date, in_month)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn policy() -> CalendarPolicy {
        CalendarPolicy::default()
    }

    #[test]
    fn day_view_is_exactly_the_anchor() {
        let range = compute_range(date(2025, 1, 29), ViewType::Day, &policy());
        assert_eq!(range, vec![CalendarDay::new(date(2025, 1, 29), true)]);
    }

    #[test]
    fn week_view_runs_monday_through_sunday() {
        // 2025-01-29 is a Wednesday
        let range = compute_range(date(2025, 1, 29), ViewType::Week, &policy());
        assert_eq!(range.len(), 7);
        assert_eq!(range[0].date, date(2025, 1, 27));
        assert_eq!(range[0].date.weekday(), Weekday::Mon);
        assert_eq!(range[6].date, date(2025, 2, 2));
        assert!(range.iter().all(|day| day.in_month));
    }

    #[test]
    fn week_view_on_a_monday_starts_at_the_anchor() {
        let range = compute_range(date(2025, 1, 27), ViewType::Week, &policy());
        assert_eq!(range[0].date, date(2025, 1, 27));
    }

    #[test]
    fn week_view_honours_sunday_start() {
        let sunday_start = CalendarPolicy { week_start: Weekday::Sun, ..policy() };
        let range = compute_range(date(2025, 1, 29), ViewType::Week, &sunday_start);
        assert_eq!(range[0].date, date(2025, 1, 26));
        assert_eq!(range[0].date.weekday(), Weekday::Sun);
        assert_eq!(range[6].date, date(2025, 2, 1));
    }

    #[test]
    fn month_grid_is_whole_weeks_with_padding_flagged() {
        let range = compute_range(date(2025, 1, 15), ViewType::Month, &policy());
        assert_eq!(range.len() % 7, 0);
        // January 2025: 1st is a Wednesday, 31st a Friday.
        assert_eq!(range[0].date, date(2024, 12, 30));
        assert!(!range[0].in_month);
        assert_eq!(range.last().map(|day| day.date), Some(date(2025, 2, 2)));
        let first_of_month =
            range.iter().find(|day| day.date == date(2025, 1, 1)).copied();
        assert_eq!(first_of_month, Some(CalendarDay::new(date(2025, 1, 1), true)));
        let in_month = range.iter().filter(|day| day.in_month).count();
        assert_eq!(in_month, 31);
    }

    #[test]
    fn month_grid_covers_february_in_a_leap_year() {
        let range = compute_range(date(2024, 2, 10), ViewType::Month, &policy());
        assert_eq!(range.len() % 7, 0);
        let in_month = range.iter().filter(|day| day.in_month).count();
        assert_eq!(in_month, 29);
    }

    #[test]
    fn compute_range_is_idempotent() {
        let a = compute_range(date(2025, 1, 29), ViewType::Month, &policy());
        let b = compute_range(date(2025, 1, 29), ViewType::Month, &policy());
        assert_eq!(a, b);
    }
}
