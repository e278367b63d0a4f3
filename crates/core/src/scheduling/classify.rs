//! Presentation classifier
//!
//! Deterministic mapping from an item's priority and status to the
//! semantic category the renderer styles. Decouples "what category is
//! this" from "how is that category drawn".

use cadence_domain::{ItemStatus, Priority, ScheduledItem};
use serde::{Deserialize, Serialize};

/// Semantic urgency category derived from priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityClass {
    Urgent,
    Normal,
    Routine,
}

/// Semantic status category; mirrors `ItemStatus` one-to-one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusClass {
    Draft,
    Scheduled,
    Published,
    Failed,
}

/// Rendering annotation for one scheduled item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presentation {
    pub priority_class: PriorityClass,
    pub status_class: StatusClass,
}

/// Classify an item for rendering. Pure: depends only on `priority`
/// and `status`.
pub fn classify(item: &ScheduledItem) -> Presentation {
    let priority_class = match item.priority {
        Priority::High => PriorityClass::Urgent,
        Priority::Medium => PriorityClass::Normal,
        Priority::Low => PriorityClass::Routine,
    };
    let status_class = match item.status {
        ItemStatus::Draft => StatusClass::Draft,
        ItemStatus::Scheduled => StatusClass::Scheduled,
        ItemStatus::Published => StatusClass::Published,
        ItemStatus::Failed => StatusClass::Failed,
    };
    Presentation { priority_class, status_class }
}
