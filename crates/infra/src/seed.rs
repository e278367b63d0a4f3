//! Sample data for degraded mode
//!
//! When the scheduling service is unreachable at load time the engine
//! shows this set instead of an empty calendar. Items are anchored to
//! the supplied date so the sample always lands in the visible week.

use std::collections::BTreeSet;

use cadence_domain::{ContentType, ItemStatus, Platform, Priority, ScheduledItem};
use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};

fn at(date: NaiveDate, hour: u32) -> DateTime<Utc> {
    let time = NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN);
    date.and_time(time).and_utc()
}

/// Deterministic sample set spanning platforms, statuses, and
/// priorities, spread around `anchor`.
pub fn sample_items(anchor: NaiveDate) -> Vec<ScheduledItem> {
    vec![
        ScheduledItem {
            id: "seed-1".to_string(),
            title: "Product launch announcement".to_string(),
            description: "Hero post for the spring launch".to_string(),
            platforms: BTreeSet::from([Platform::Twitter, Platform::Linkedin]),
            content_type: ContentType::Post,
            scheduled_time: at(anchor, 9),
            status: ItemStatus::Scheduled,
            priority: Priority::High,
            tags: BTreeSet::from(["launch".to_string()]),
            engagement: None,
            reach: None,
        },
        ScheduledItem {
            id: "seed-2".to_string(),
            title: "Behind the scenes reel".to_string(),
            description: String::new(),
            platforms: BTreeSet::from([Platform::Instagram]),
            content_type: ContentType::Reel,
            scheduled_time: at(anchor, 15),
            status: ItemStatus::Draft,
            priority: Priority::Medium,
            tags: BTreeSet::from(["culture".to_string()]),
            engagement: None,
            reach: None,
        },
        ScheduledItem {
            id: "seed-3".to_string(),
            title: "Feature deep-dive video".to_string(),
            description: "Walkthrough of the new editor".to_string(),
            platforms: BTreeSet::from([Platform::Youtube]),
            content_type: ContentType::Video,
            scheduled_time: at(anchor + Days::new(1), 12),
            status: ItemStatus::Scheduled,
            priority: Priority::Medium,
            tags: BTreeSet::new(),
            engagement: None,
            reach: None,
        },
        ScheduledItem {
            id: "seed-4".to_string(),
            title: "Customer story".to_string(),
            description: "Case study recap".to_string(),
            platforms: BTreeSet::from([Platform::Facebook, Platform::Linkedin]),
            content_type: ContentType::Article,
            scheduled_time: at(anchor.checked_sub_days(Days::new(1)).unwrap_or(anchor), 10),
            status: ItemStatus::Published,
            priority: Priority::Low,
            tags: BTreeSet::from(["case-study".to_string()]),
            engagement: Some(1840),
            reach: Some(52000),
        },
        ScheduledItem {
            id: "seed-5".to_string(),
            title: "Weekly tips story".to_string(),
            description: String::new(),
            platforms: BTreeSet::from([Platform::Instagram, Platform::Facebook]),
            content_type: ContentType::Story,
            scheduled_time: at(anchor + Days::new(2), 8),
            status: ItemStatus::Scheduled,
            priority: Priority::Low,
            tags: BTreeSet::from(["tips".to_string()]),
            engagement: None,
            reach: None,
        },
        ScheduledItem {
            id: "seed-6".to_string(),
            title: "Retry: webinar reminder".to_string(),
            description: "First attempt failed to publish".to_string(),
            platforms: BTreeSet::from([Platform::Twitter]),
            content_type: ContentType::Post,
            scheduled_time: at(anchor + Days::new(3), 17),
            status: ItemStatus::Failed,
            priority: Priority::High,
            tags: BTreeSet::from(["webinar".to_string()]),
            engagement: None,
            reach: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_set_is_deterministic_and_well_formed() {
        let anchor = NaiveDate::from_ymd_opt(2025, 1, 29).unwrap();
        let first = sample_items(anchor);
        let second = sample_items(anchor);
        assert_eq!(first, second);

        let mut ids: Vec<&str> = first.iter().map(|item| item.id.as_str()).collect();
        ids.dedup();
        assert_eq!(ids.len(), first.len());
        assert!(first.iter().all(|item| !item.platforms.is_empty()));
        assert!(first.iter().all(|item| !item.title.is_empty()));
    }

    #[test]
    fn only_published_samples_carry_metrics() {
        let anchor = NaiveDate::from_ymd_opt(2025, 1, 29).unwrap();
        for item in sample_items(anchor) {
            if item.status == ItemStatus::Published {
                assert!(item.engagement.is_some());
            } else {
                assert!(item.engagement.is_none());
                assert!(item.reach.is_none());
            }
        }
    }
}
