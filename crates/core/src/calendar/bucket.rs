//! Content bucketer
//!
//! Partitions scheduled items into per-date (and per-hour) buckets for
//! rendering. Bucketing uses calendar-day equality on the scheduled
//! time, never exact timestamp equality, and produces a deterministic
//! internal order so items sharing a timestamp render stably.

use std::collections::BTreeMap;

use cadence_domain::{CalendarDay, ScheduledItem};
use chrono::{NaiveDate, Timelike};

/// Assign items to the dates of a computed range.
///
/// Every date of the range is present in the result, empty or not, so
/// consumers can render cells without existence checks. An item whose
/// scheduled day falls outside the range is simply not visible in this
/// view. Bucket order is ascending by `(scheduled_time, id)`.
pub fn bucket_by_date(
    items: &[ScheduledItem],
    days: &[CalendarDay],
) -> BTreeMap<NaiveDate, Vec<ScheduledItem>> {
    let mut buckets: BTreeMap<NaiveDate, Vec<ScheduledItem>> =
        days.iter().map(|day| (day.date, Vec::new())).collect();

    for item in items {
        if let Some(bucket) = buckets.get_mut(&item.scheduled_time.date_naive()) {
            bucket.push(item.clone());
        }
    }

    for bucket in buckets.values_mut() {
        sort_bucket(bucket);
    }
    buckets
}

/// Assign one day's items to hour-of-day buckets (0..=23).
///
/// Only non-empty hours appear in the result.
pub fn bucket_by_hour(
    items: &[ScheduledItem],
    date: NaiveDate,
) -> BTreeMap<u32, Vec<ScheduledItem>> {
    let mut buckets: BTreeMap<u32, Vec<ScheduledItem>> = BTreeMap::new();

    for item in items {
        if item.scheduled_time.date_naive() == date {
            buckets.entry(item.scheduled_time.hour()).or_default().push(item.clone());
        }
    }

    for bucket in buckets.values_mut() {
        sort_bucket(bucket);
    }
    buckets
}

fn sort_bucket(bucket: &mut [ScheduledItem]) {
    bucket.sort_by(|a, b| {
        a.scheduled_time.cmp(&b.scheduled_time).then_with(|| a.id.cmp(&b.id))
    });
}
