//! Port interfaces for the scheduling engine

use async_trait::async_trait;
use cadence_domain::{ItemDraft, ItemPatch, Result, ScheduledItem};
use chrono::{DateTime, NaiveDate, Utc};

/// Remote content-scheduling service.
///
/// The duplicate endpoint is optional on the server side; the provided
/// default synthesizes a duplicate through `create_scheduled`.
#[async_trait]
pub trait SchedulingApi: Send + Sync {
    /// Fetch every scheduled item known to the server.
    async fn list_scheduled(&self) -> Result<Vec<ScheduledItem>>;

    /// Create a new scheduled item; the server assigns the id.
    async fn create_scheduled(&self, draft: ItemDraft) -> Result<ScheduledItem>;

    /// Apply a partial update to an existing item.
    async fn update_scheduled(&self, id: &str, patch: ItemPatch) -> Result<ScheduledItem>;

    /// Delete an item.
    async fn delete_scheduled(&self, id: &str) -> Result<()>;

    /// Duplicate an existing item. `draft` carries the already-shifted
    /// clone so servers without a native duplicate endpoint can fall
    /// back to a plain create.
    async fn duplicate_scheduled(&self, source_id: &str, draft: ItemDraft) -> Result<ScheduledItem> {
        let _ = source_id;
        self.create_scheduled(draft).await
    }
}

/// User-visible notice emitted by the mutation service.
///
/// Rendering (toast, banner, log line) is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Warning(String),
    Error(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Self::Success(msg) | Self::Warning(msg) | Self::Error(msg) => msg,
        }
    }
}

/// Boundary to the notification UI
pub trait UserNotifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// External clock, injectable for tests
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}
