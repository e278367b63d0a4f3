//! Scheduled item store
//!
//! The single authoritative in-memory collection backing every calendar
//! read. Pure collection operations, no network behavior; only the
//! scheduling service writes to it so every write stays paired with
//! reconciliation bookkeeping.

use cadence_domain::{CadenceError, Result, ScheduledItem};

/// In-memory scheduled item collection.
///
/// Insertion order is preserved, which gives `list` a stable order
/// across calls with no intervening mutation.
#[derive(Debug, Default, Clone)]
pub struct ScheduledItemStore {
    items: Vec<ScheduledItem>,
}

impl ScheduledItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current contents.
    pub fn list(&self) -> Vec<ScheduledItem> {
        self.items.clone()
    }

    pub fn get(&self, id: &str) -> Option<&ScheduledItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Insert a new item. Id uniqueness is a store invariant, including
    /// during the optimistic window, so a duplicate id is an internal
    /// error rather than a silent overwrite.
    pub fn insert(&mut self, item: ScheduledItem) -> Result<()> {
        if self.get(&item.id).is_some() {
            return Err(CadenceError::Internal(format!(
                "duplicate item id in store: {}",
                item.id
            )));
        }
        self.items.push(item);
        Ok(())
    }

    /// Replace the item under `id` with `item`, adopting `item.id`.
    ///
    /// This is the atomic temp-id to server-id swap: at no point do the
    /// old and new ids coexist.
    pub fn replace(&mut self, id: &str, item: ScheduledItem) -> Result<()> {
        match self.items.iter_mut().find(|existing| existing.id == id) {
            Some(slot) => {
                *slot = item;
                Ok(())
            }
            None => Err(CadenceError::NotFound(format!("no item with id {id}"))),
        }
    }

    /// Remove and return the item under `id`.
    pub fn remove(&mut self, id: &str) -> Result<ScheduledItem> {
        match self.items.iter().position(|item| item.id == id) {
            Some(index) => Ok(self.items.remove(index)),
            None => Err(CadenceError::NotFound(format!("no item with id {id}"))),
        }
    }

    /// Replace the whole collection (full-list reload).
    pub fn replace_all(&mut self, items: Vec<ScheduledItem>) {
        self.items = items;
    }
}
