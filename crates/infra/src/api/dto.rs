//! Wire format for the scheduling service
//!
//! The service speaks camelCase JSON with ISO-8601 timestamps and
//! platform arrays. Platforms are a set in the domain; ingestion
//! deduplicates, and an item that would violate domain invariants
//! (empty title, no platforms) is rejected as a validation error.

use std::collections::BTreeSet;

use cadence_domain::{
    CadenceError, ContentType, ItemDraft, ItemPatch, ItemStatus, Platform, Priority, Result,
    ScheduledItem,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One scheduled item as exchanged with the service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledItemDto {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub platforms: Vec<Platform>,
    pub content_type: ContentType,
    pub scheduled_time: DateTime<Utc>,
    pub status: ItemStatus,
    pub priority: Priority,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engagement: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reach: Option<u64>,
}

impl ScheduledItemDto {
    /// Convert into the domain model, deduplicating platforms and
    /// enforcing the non-empty invariants.
    pub fn into_domain(self) -> Result<ScheduledItem> {
        if self.title.trim().is_empty() {
            return Err(CadenceError::Validation(format!(
                "item {} has an empty title",
                self.id
            )));
        }
        let platforms: BTreeSet<Platform> = self.platforms.into_iter().collect();
        if platforms.is_empty() {
            return Err(CadenceError::Validation(format!(
                "item {} has no platforms",
                self.id
            )));
        }
        Ok(ScheduledItem {
            id: self.id,
            title: self.title,
            description: self.description,
            platforms,
            content_type: self.content_type,
            scheduled_time: self.scheduled_time,
            status: self.status,
            priority: self.priority,
            tags: self.tags.into_iter().collect(),
            engagement: self.engagement,
            reach: self.reach,
        })
    }
}

impl From<ScheduledItem> for ScheduledItemDto {
    fn from(item: ScheduledItem) -> Self {
        Self {
            id: item.id,
            title: item.title,
            description: item.description,
            platforms: item.platforms.into_iter().collect(),
            content_type: item.content_type,
            scheduled_time: item.scheduled_time,
            status: item.status,
            priority: item.priority,
            tags: item.tags.into_iter().collect(),
            engagement: item.engagement,
            reach: item.reach,
        }
    }
}

/// Creation payload sent to the service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDraftDto {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub platforms: Vec<Platform>,
    pub content_type: ContentType,
    pub scheduled_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ItemStatus>,
    pub priority: Priority,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<ItemDraft> for ItemDraftDto {
    fn from(draft: ItemDraft) -> Self {
        Self {
            title: draft.title,
            description: draft.description,
            platforms: draft.platforms.into_iter().collect(),
            content_type: draft.content_type,
            scheduled_time: draft.scheduled_time,
            status: draft.status,
            priority: draft.priority,
            tags: draft.tags.into_iter().collect(),
        }
    }
}

/// Partial update payload; unset fields are omitted from the JSON
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPatchDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platforms: Option<Vec<Platform>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ItemStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engagement: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reach: Option<u64>,
}

impl From<ItemPatch> for ItemPatchDto {
    fn from(patch: ItemPatch) -> Self {
        Self {
            title: patch.title,
            description: patch.description,
            platforms: patch.platforms.map(|set| set.into_iter().collect()),
            content_type: patch.content_type,
            scheduled_time: patch.scheduled_time,
            status: patch.status,
            priority: patch.priority,
            tags: patch.tags.map(|set| set.into_iter().collect()),
            engagement: patch.engagement,
            reach: patch.reach,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn ingestion_deduplicates_platforms() {
        let json = r#"{
            "id": "srv-1",
            "title": "Launch teaser",
            "platforms": ["twitter", "twitter", "instagram"],
            "contentType": "post",
            "scheduledTime": "2025-01-28T09:00:00Z",
            "status": "scheduled",
            "priority": "high"
        }"#;
        let dto: ScheduledItemDto = serde_json::from_str(json).unwrap();
        let item = dto.into_domain().unwrap();

        assert_eq!(item.platforms.len(), 2);
        assert!(item.platforms.contains(&Platform::Twitter));
        assert!(item.platforms.contains(&Platform::Instagram));
        assert_eq!(item.scheduled_time, Utc.with_ymd_and_hms(2025, 1, 28, 9, 0, 0).unwrap());
    }

    #[test]
    fn ingestion_rejects_items_without_platforms() {
        let json = r#"{
            "id": "srv-1",
            "title": "Launch teaser",
            "platforms": [],
            "contentType": "post",
            "scheduledTime": "2025-01-28T09:00:00Z",
            "status": "scheduled",
            "priority": "high"
        }"#;
        let dto: ScheduledItemDto = serde_json::from_str(json).unwrap();
        assert!(matches!(dto.into_domain(), Err(CadenceError::Validation(_))));
    }

    #[test]
    fn patch_serializes_only_set_fields() {
        let patch = ItemPatch { title: Some("Renamed".to_string()), ..ItemPatch::default() };
        let json = serde_json::to_value(ItemPatchDto::from(patch)).unwrap();
        assert_eq!(json, serde_json::json!({ "title": "Renamed" }));
    }

    #[test]
    fn item_round_trips_through_the_wire_format() {
        let json = r#"{
            "id": "srv-1",
            "title": "Launch teaser",
            "description": "teaser video",
            "platforms": ["youtube"],
            "contentType": "video",
            "scheduledTime": "2025-01-28T09:00:00Z",
            "status": "published",
            "priority": "medium",
            "tags": ["launch"],
            "engagement": 1200,
            "reach": 54000
        }"#;
        let dto: ScheduledItemDto = serde_json::from_str(json).unwrap();
        let item = dto.into_domain().unwrap();
        assert_eq!(item.engagement, Some(1200));

        let back = serde_json::to_value(ScheduledItemDto::from(item)).unwrap();
        assert_eq!(back["scheduledTime"], "2025-01-28T09:00:00Z");
        assert_eq!(back["contentType"], "video");
    }
}
