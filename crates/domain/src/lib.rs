//! # Cadence Domain
//!
//! Pure domain types for the content scheduling engine.
//!
//! This crate contains:
//! - Content and calendar models
//! - The error taxonomy shared across layers
//! - Configuration structs and domain constants
//!
//! ## Architecture Principles
//! - No infrastructure or I/O code
//! - Serializable types at every layer boundary
//! - Validation lives next to the data it validates

pub mod constants;
pub mod errors;
pub mod types;

pub use errors::{CadenceError, Result};
pub use types::calendar::{CalendarDay, ViewType};
pub use types::config::{ApiConfig, CadenceConfig, CalendarPolicy};
pub use types::content::{
    is_local_id, ContentType, ItemDraft, ItemPatch, ItemStatus, Platform, Priority, ScheduledItem,
};
