//! Domain types and models

pub mod calendar;
pub mod config;
pub mod content;

pub use calendar::{CalendarDay, ViewType};
pub use config::{ApiConfig, CadenceConfig, CalendarPolicy};
pub use content::{ContentType, ItemDraft, ItemPatch, ItemStatus, Platform, Priority, ScheduledItem};
