//! Scheduling service - optimistic mutation and reconciliation
//!
//! Every mutation follows the same three-phase protocol: optimistic
//! apply against the store, remote call, then reconcile on success or
//! roll back to the pre-mutation snapshot on failure. Validation,
//! unknown ids, disallowed status transitions, and conflicting
//! in-flight mutations all reject before the store is touched;
//! `ServiceUnavailable` is the only failure that can occur after the
//! optimistic apply.

use std::collections::HashSet;
use std::sync::Arc;

use cadence_domain::constants::{COPY_TITLE_SUFFIX, LOCAL_ID_PREFIX};
use cadence_domain::{
    CadenceError, CalendarPolicy, ItemDraft, ItemPatch, ItemStatus, Result, ScheduledItem,
};
use parking_lot::Mutex;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::ports::{Notice, SchedulingApi, UserNotifier};
use super::store::ScheduledItemStore;

#[derive(Default)]
struct StoreState {
    store: ScheduledItemStore,
    using_seed_data: bool,
}

/// Owns the scheduled item store and wraps every write with remote
/// synchronization bookkeeping.
pub struct SchedulingService {
    api: Arc<dyn SchedulingApi>,
    notifier: Arc<dyn UserNotifier>,
    policy: CalendarPolicy,
    state: Mutex<StoreState>,
    in_flight: Mutex<HashSet<String>>,
    seed: Vec<ScheduledItem>,
}

impl SchedulingService {
    pub fn new(
        api: Arc<dyn SchedulingApi>,
        notifier: Arc<dyn UserNotifier>,
        policy: CalendarPolicy,
    ) -> Self {
        Self {
            api,
            notifier,
            policy,
            state: Mutex::new(StoreState::default()),
            in_flight: Mutex::new(HashSet::new()),
            seed: Vec::new(),
        }
    }

    /// Configure the sample set used when the remote list call fails.
    pub fn with_seed_items(mut self, seed: Vec<ScheduledItem>) -> Self {
        self.seed = seed;
        self
    }

    /// Snapshot of the store contents, in stable order.
    pub fn items(&self) -> Vec<ScheduledItem> {
        self.state.lock().store.list()
    }

    pub fn get(&self, id: &str) -> Option<ScheduledItem> {
        self.state.lock().store.get(id).cloned()
    }

    /// Whether the store currently holds the degraded-mode sample set
    /// instead of server data.
    pub fn using_seed_data(&self) -> bool {
        self.state.lock().using_seed_data
    }

    /// Replace the store from the remote service.
    ///
    /// A full reload supersedes optimistic local entries that have not
    /// reconciled yet; their settlement will then report the item as
    /// missing. Accepted tradeoff of a whole-list reload.
    ///
    /// When the service is unreachable the configured seed set is shown
    /// instead of an empty calendar, with `using_seed_data` raised.
    pub async fn load(&self) -> Result<usize> {
        match self.api.list_scheduled().await {
            Ok(items) => {
                let count = items.len();
                let mut state = self.state.lock();
                state.store.replace_all(items);
                state.using_seed_data = false;
                drop(state);
                info!(count, "loaded scheduled items from remote service");
                Ok(count)
            }
            Err(CadenceError::ServiceUnavailable(reason)) => {
                let seed = self.seed.clone();
                let count = seed.len();
                let mut state = self.state.lock();
                state.store.replace_all(seed);
                state.using_seed_data = true;
                drop(state);
                warn!(%reason, count, "scheduling service unreachable; showing sample data");
                self.notifier.notify(Notice::Warning(
                    "Scheduling service unreachable; showing sample data".to_string(),
                ));
                Ok(count)
            }
            Err(err) => {
                self.notifier.notify(failure_notice("load scheduled content", &err));
                Err(err)
            }
        }
    }

    /// Create a new scheduled item.
    pub async fn create(&self, draft: ItemDraft) -> Result<ScheduledItem> {
        match self.try_create(draft).await {
            Ok(item) => Ok(item),
            Err(err) => {
                self.notifier.notify(failure_notice("schedule content", &err));
                Err(err)
            }
        }
    }

    /// Apply a partial update to an existing item.
    pub async fn update(&self, id: &str, patch: ItemPatch) -> Result<ScheduledItem> {
        match self.try_update(id, patch).await {
            Ok(item) => Ok(item),
            Err(err) => {
                self.notifier.notify(failure_notice("update content", &err));
                Err(err)
            }
        }
    }

    /// Delete an item.
    pub async fn delete(&self, id: &str) -> Result<()> {
        match self.try_delete(id).await {
            Ok(()) => Ok(()),
            Err(err) => {
                self.notifier.notify(failure_notice("delete content", &err));
                Err(err)
            }
        }
    }

    /// Clone an item one duplicate-offset later, titled "... (Copy)".
    pub async fn duplicate(&self, id: &str) -> Result<ScheduledItem> {
        match self.try_duplicate(id).await {
            Ok(item) => Ok(item),
            Err(err) => {
                self.notifier.notify(failure_notice("duplicate content", &err));
                Err(err)
            }
        }
    }

    async fn try_create(&self, draft: ItemDraft) -> Result<ScheduledItem> {
        draft.validate()?;

        let temp_id = local_id();
        let _guard = self.begin_mutation(&temp_id)?;

        let optimistic = draft.clone().materialize(temp_id.clone());
        self.state.lock().store.insert(optimistic.clone())?;
        info!(id = %temp_id, "optimistic insert of new scheduled item");

        match self.api.create_scheduled(draft).await {
            Ok(server_item) => {
                info!(temp_id = %temp_id, id = %server_item.id, "create reconciled");
                self.state.lock().store.replace(&temp_id, server_item.clone())?;
                self.notifier.notify(Notice::Success("Content scheduled".to_string()));
                Ok(server_item)
            }
            Err(CadenceError::ServiceUnavailable(reason)) if self.policy.allow_local_commit => {
                Ok(self.commit_locally(&temp_id, optimistic, &reason)?)
            }
            Err(err) => {
                self.rollback_insert(&temp_id);
                Err(err)
            }
        }
    }

    async fn try_update(&self, id: &str, patch: ItemPatch) -> Result<ScheduledItem> {
        patch.validate()?;

        // Guard before the lookup: while a mutation on this id is in
        // flight the store may hold its optimistic state (or, for a
        // delete, no entry at all), so the conflict must win over any
        // verdict read from the store.
        let _guard = self.begin_mutation(id)?;

        let snapshot = self
            .get(id)
            .ok_or_else(|| CadenceError::NotFound(format!("no item with id {id}")))?;

        if let Some(next) = patch.status {
            if !snapshot.status.can_transition_to(next) {
                return Err(CadenceError::InvalidTransition(format!(
                    "cannot move {id} from {} to {next}",
                    snapshot.status
                )));
            }
        }

        let mut optimistic = snapshot.clone();
        patch.apply_to(&mut optimistic);
        self.state.lock().store.replace(id, optimistic)?;

        match self.api.update_scheduled(id, patch).await {
            Ok(server_item) => {
                self.state.lock().store.replace(id, server_item.clone())?;
                self.notifier.notify(Notice::Success("Content updated".to_string()));
                Ok(server_item)
            }
            Err(err) => {
                self.rollback_replace(id, snapshot);
                Err(err)
            }
        }
    }

    async fn try_delete(&self, id: &str) -> Result<()> {
        let _guard = self.begin_mutation(id)?;
        // `remove` reports the unknown id itself.
        let snapshot = self.state.lock().store.remove(id)?;

        match self.api.delete_scheduled(id).await {
            Ok(()) => {
                info!(%id, "delete reconciled");
                self.notifier.notify(Notice::Success("Content deleted".to_string()));
                Ok(())
            }
            Err(err) => {
                if let Err(rollback_err) = self.state.lock().store.insert(snapshot) {
                    error!(%id, error = %rollback_err, "rollback of optimistic delete failed");
                }
                Err(err)
            }
        }
    }

    async fn try_duplicate(&self, id: &str) -> Result<ScheduledItem> {
        let source = self
            .get(id)
            .ok_or_else(|| CadenceError::NotFound(format!("no item with id {id}")))?;

        let temp_id = local_id();
        let _guard = self.begin_mutation(&temp_id)?;

        let mut optimistic = source.clone();
        optimistic.id = temp_id.clone();
        optimistic.title = format!("{}{COPY_TITLE_SUFFIX}", source.title);
        optimistic.scheduled_time = source.scheduled_time + self.policy.duplicate_offset();
        optimistic.status = ItemStatus::Scheduled;

        self.state.lock().store.insert(optimistic.clone())?;
        info!(source = %id, id = %temp_id, "optimistic insert of duplicate");

        let draft = draft_from(&optimistic);
        match self.api.duplicate_scheduled(id, draft).await {
            Ok(server_item) => {
                info!(temp_id = %temp_id, id = %server_item.id, "duplicate reconciled");
                self.state.lock().store.replace(&temp_id, server_item.clone())?;
                self.notifier.notify(Notice::Success("Content duplicated".to_string()));
                Ok(server_item)
            }
            Err(CadenceError::ServiceUnavailable(reason)) if self.policy.allow_local_commit => {
                Ok(self.commit_locally(&temp_id, optimistic, &reason)?)
            }
            Err(err) => {
                self.rollback_insert(&temp_id);
                Err(err)
            }
        }
    }

    /// Register `id` as having a mutation in flight.
    ///
    /// The logical substitute for a per-item lock: a second mutation on
    /// the same id is rejected instead of interleaving its optimistic
    /// and rollback phases with the first.
    fn begin_mutation(&self, id: &str) -> Result<InFlightGuard<'_>> {
        let mut in_flight = self.in_flight.lock();
        if !in_flight.insert(id.to_string()) {
            return Err(CadenceError::ConflictInProgress(format!(
                "a mutation for {id} is already in flight"
            )));
        }
        Ok(InFlightGuard { registry: &self.in_flight, id: id.to_string() })
    }

    /// Availability fallback: keep the optimistic item under a
    /// permanent local id instead of rolling back. Explicit and logged,
    /// never a silent default.
    fn commit_locally(
        &self,
        temp_id: &str,
        optimistic: ScheduledItem,
        reason: &str,
    ) -> Result<ScheduledItem> {
        let mut committed = optimistic;
        committed.id = Uuid::now_v7().to_string();
        self.state.lock().store.replace(temp_id, committed.clone())?;
        warn!(
            id = %committed.id,
            %reason,
            "scheduling service unreachable; committing item locally without server reconciliation"
        );
        self.notifier.notify(Notice::Warning(
            "Scheduling service unreachable; content saved locally".to_string(),
        ));
        Ok(committed)
    }

    fn rollback_insert(&self, temp_id: &str) {
        if let Err(rollback_err) = self.state.lock().store.remove(temp_id) {
            error!(id = %temp_id, error = %rollback_err, "rollback of optimistic insert failed");
        }
    }

    fn rollback_replace(&self, id: &str, snapshot: ScheduledItem) {
        if let Err(rollback_err) = self.state.lock().store.replace(id, snapshot) {
            error!(%id, error = %rollback_err, "rollback of optimistic update failed");
        }
    }
}

/// Guard holding an id in the in-flight registry until settlement.
struct InFlightGuard<'a> {
    registry: &'a Mutex<HashSet<String>>,
    id: String,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.registry.lock().remove(&self.id);
    }
}

fn local_id() -> String {
    format!("{LOCAL_ID_PREFIX}{}", Uuid::now_v7())
}

fn draft_from(item: &ScheduledItem) -> ItemDraft {
    ItemDraft {
        title: item.title.clone(),
        description: item.description.clone(),
        platforms: item.platforms.clone(),
        content_type: item.content_type,
        scheduled_time: item.scheduled_time,
        status: Some(item.status),
        priority: item.priority,
        tags: item.tags.clone(),
    }
}

fn failure_notice(action: &str, err: &CadenceError) -> Notice {
    let detail = match err {
        CadenceError::Validation(msg) => msg.clone(),
        CadenceError::NotFound(_) => "the item no longer exists".to_string(),
        CadenceError::ConflictInProgress(_) => {
            "another change for this item is still pending".to_string()
        }
        CadenceError::InvalidTransition(msg) => msg.clone(),
        CadenceError::ServiceUnavailable(_) => {
            "scheduling service is unavailable; your change was undone".to_string()
        }
        CadenceError::Config(msg) | CadenceError::Internal(msg) => msg.clone(),
    };
    Notice::Error(format!("Could not {action}: {detail}"))
}
