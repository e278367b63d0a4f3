//! Scheduled content models
//!
//! `ScheduledItem` is the unit of content scheduling; `ItemDraft` and
//! `ItemPatch` are the write-side payloads exchanged with the remote
//! scheduling service.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::LOCAL_ID_PREFIX;
use crate::errors::{CadenceError, Result};

/// Target platform for a piece of content.
///
/// Carried as a `BTreeSet` everywhere: membership is what matters,
/// display order is stable alphabetical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Facebook,
    Instagram,
    Linkedin,
    Twitter,
    Youtube,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Facebook => "facebook",
            Self::Instagram => "instagram",
            Self::Linkedin => "linkedin",
            Self::Twitter => "twitter",
            Self::Youtube => "youtube",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of content being scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Post,
    Story,
    Video,
    Reel,
    Article,
}

/// Publication status of a scheduled item.
///
/// Status is explicit state, never derived from comparing
/// `scheduled_time` against the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Draft,
    Scheduled,
    Published,
    Failed,
}

impl ItemStatus {
    /// Whether the status state machine permits moving to `next`.
    ///
    /// Allowed: draft -> scheduled, scheduled -> published,
    /// scheduled -> failed, failed -> scheduled, and identity moves.
    /// A published item never returns to draft.
    pub fn can_transition_to(self, next: Self) -> bool {
        if self == next {
            return true;
        }
        matches!(
            (self, next),
            (Self::Draft, Self::Scheduled)
                | (Self::Scheduled, Self::Published)
                | (Self::Scheduled, Self::Failed)
                | (Self::Failed, Self::Scheduled)
        )
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Draft => "draft",
            Self::Scheduled => "scheduled",
            Self::Published => "published",
            Self::Failed => "failed",
        };
        f.write_str(label)
    }
}

/// Editorial priority of a scheduled item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// A scheduled piece of content - the unit the calendar engine works on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledItem {
    /// Opaque identifier, unique within the store. Client-generated ids
    /// carry the `local-` prefix until reconciled with the server.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Never empty; an item with no platform cannot be created.
    pub platforms: BTreeSet<Platform>,
    pub content_type: ContentType,
    /// Sole ordering and bucketing key.
    pub scheduled_time: DateTime<Utc>,
    pub status: ItemStatus,
    pub priority: Priority,
    pub tags: BTreeSet<String>,
    /// Observed engagement metric, present only post-publish or for
    /// synthetic sample data.
    pub engagement: Option<u64>,
    /// Observed reach metric, same presence rules as `engagement`.
    pub reach: Option<u64>,
}

impl ScheduledItem {
    /// Whether this item still carries a client-generated temporary id.
    pub fn has_local_id(&self) -> bool {
        is_local_id(&self.id)
    }
}

/// Whether `id` is a client-generated temporary id (not server-assigned).
pub fn is_local_id(id: &str) -> bool {
    id.starts_with(LOCAL_ID_PREFIX)
}

/// Creation payload: everything except the id, which is assigned by the
/// server (or promoted locally on the availability fallback path).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub title: String,
    pub description: String,
    pub platforms: BTreeSet<Platform>,
    pub content_type: ContentType,
    pub scheduled_time: DateTime<Utc>,
    /// Defaults to `Draft` when omitted.
    #[serde(default)]
    pub status: Option<ItemStatus>,
    pub priority: Priority,
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl ItemDraft {
    /// Reject malformed drafts before any store or network activity.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(CadenceError::Validation("title must not be empty".into()));
        }
        if self.platforms.is_empty() {
            return Err(CadenceError::Validation(
                "at least one platform is required".into(),
            ));
        }
        Ok(())
    }

    /// Turn the draft into a store-ready item under the given id.
    pub fn materialize(self, id: String) -> ScheduledItem {
        ScheduledItem {
            id,
            title: self.title,
            description: self.description,
            platforms: self.platforms,
            content_type: self.content_type,
            scheduled_time: self.scheduled_time,
            status: self.status.unwrap_or(ItemStatus::Draft),
            priority: self.priority,
            tags: self.tags,
            engagement: None,
            reach: None,
        }
    }
}

/// Partial update: every field optional, the id is not patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub platforms: Option<BTreeSet<Platform>>,
    pub content_type: Option<ContentType>,
    pub scheduled_time: Option<DateTime<Utc>>,
    pub status: Option<ItemStatus>,
    pub priority: Option<Priority>,
    pub tags: Option<BTreeSet<String>>,
    pub engagement: Option<u64>,
    pub reach: Option<u64>,
}

impl ItemPatch {
    /// Reject patches that would leave the item malformed.
    pub fn validate(&self) -> Result<()> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(CadenceError::Validation("title must not be empty".into()));
            }
        }
        if let Some(platforms) = &self.platforms {
            if platforms.is_empty() {
                return Err(CadenceError::Validation(
                    "at least one platform is required".into(),
                ));
            }
        }
        Ok(())
    }

    /// Apply the patch to `item`, field by field. The id is untouched.
    pub fn apply_to(&self, item: &mut ScheduledItem) {
        if let Some(title) = &self.title {
            item.title = title.clone();
        }
        if let Some(description) = &self.description {
            item.description = description.clone();
        }
        if let Some(platforms) = &self.platforms {
            item.platforms = platforms.clone();
        }
        if let Some(content_type) = self.content_type {
            item.content_type = content_type;
        }
        if let Some(scheduled_time) = self.scheduled_time {
            item.scheduled_time = scheduled_time;
        }
        if let Some(status) = self.status {
            item.status = status;
        }
        if let Some(priority) = self.priority {
            item.priority = priority;
        }
        if let Some(tags) = &self.tags {
            item.tags = tags.clone();
        }
        if let Some(engagement) = self.engagement {
            item.engagement = Some(engagement);
        }
        if let Some(reach) = self.reach {
            item.reach = Some(reach);
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn draft() -> ItemDraft {
        ItemDraft {
            title: "Launch teaser".to_string(),
            description: String::new(),
            platforms: BTreeSet::from([Platform::Instagram]),
            content_type: ContentType::Post,
            scheduled_time: Utc.with_ymd_and_hms(2025, 1, 28, 9, 0, 0).unwrap(),
            status: None,
            priority: Priority::Medium,
            tags: BTreeSet::new(),
        }
    }

    #[test]
    fn draft_with_empty_title_is_rejected() {
        let mut d = draft();
        d.title = "   ".to_string();
        assert!(matches!(d.validate(), Err(CadenceError::Validation(_))));
    }

    #[test]
    fn draft_with_no_platforms_is_rejected() {
        let mut d = draft();
        d.platforms.clear();
        assert!(matches!(d.validate(), Err(CadenceError::Validation(_))));
    }

    #[test]
    fn materialize_defaults_status_to_draft() {
        let item = draft().materialize("srv-1".to_string());
        assert_eq!(item.status, ItemStatus::Draft);
        assert_eq!(item.id, "srv-1");
        assert!(item.engagement.is_none());
    }

    #[test]
    fn patch_apply_leaves_unset_fields_alone() {
        let mut item = draft().materialize("srv-1".to_string());
        let patch = ItemPatch { title: Some("Renamed".to_string()), ..ItemPatch::default() };
        patch.apply_to(&mut item);
        assert_eq!(item.title, "Renamed");
        assert_eq!(item.priority, Priority::Medium);
        assert_eq!(item.id, "srv-1");
    }

    #[test]
    fn status_machine_rejects_published_to_draft() {
        assert!(!ItemStatus::Published.can_transition_to(ItemStatus::Draft));
        assert!(!ItemStatus::Published.can_transition_to(ItemStatus::Scheduled));
        assert!(ItemStatus::Draft.can_transition_to(ItemStatus::Scheduled));
        assert!(ItemStatus::Failed.can_transition_to(ItemStatus::Scheduled));
        assert!(ItemStatus::Scheduled.can_transition_to(ItemStatus::Scheduled));
    }

    #[test]
    fn local_ids_are_distinguishable() {
        assert!(is_local_id("local-0193cafe"));
        assert!(!is_local_id("srv-42"));
    }

    #[test]
    fn platform_serializes_lowercase() {
        let json = serde_json::to_string(&Platform::Linkedin).unwrap();
        assert_eq!(json, "\"linkedin\"");
    }
}
