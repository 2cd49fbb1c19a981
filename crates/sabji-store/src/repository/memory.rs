//! In-memory list storage.
//!
//! The reference implementation of [`ListRepository`]. Lists live in a
//! `HashMap` behind a tokio `RwLock`; clones of the repository share the
//! same map.
//!
//! ## Limitations
//!
//! - **No persistence**: everything is gone when the process exits unless it
//!   was exported with [`MemoryListRepository::export_json`].
//! - **Last writer wins**: `update` replaces the whole list; two services
//!   editing the same list concurrently will overwrite each other.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sabji_core::types::{ListStatus, ShoppingList};
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::ListRepository;
use crate::error::{StoreError, StoreResult};

// ============================================================================
// MemoryListRepository
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct MemoryListRepository {
    lists: Arc<RwLock<HashMap<String, ShoppingList>>>,
}

impl MemoryListRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// All lists as pretty JSON, oldest first.
    pub async fn export_json(&self) -> StoreResult<String> {
        let lists = self.lists.read().await;
        let mut snapshot: Vec<&ShoppingList> = lists.values().collect();
        snapshot.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));

        let json = serde_json::to_string_pretty(&snapshot)?;
        debug!(lists = snapshot.len(), bytes = json.len(), "Exported list snapshot");
        Ok(json)
    }

    /// Replaces every stored list with the contents of a snapshot.
    ///
    /// The store is left untouched if the snapshot does not parse or
    /// repeats an id. Price rows are not read from the snapshot; each item
    /// recomputes them from its observation as it is loaded.
    pub async fn import_json(&self, json: &str) -> StoreResult<usize> {
        let snapshot: Vec<ShoppingList> = serde_json::from_str(json)?;

        let mut restored = HashMap::with_capacity(snapshot.len());
        for list in snapshot {
            if restored.contains_key(&list.id) {
                return Err(StoreError::duplicate("list id", list.id));
            }
            restored.insert(list.id.clone(), list);
        }

        let count = restored.len();
        *self.lists.write().await = restored;
        info!(lists = count, "Imported list snapshot");
        Ok(count)
    }

    /// Creates a repository pre-loaded from a snapshot.
    pub async fn from_json(json: &str) -> StoreResult<Self> {
        let repo = Self::new();
        repo.import_json(json).await?;
        Ok(repo)
    }

    async fn set_status(&self, id: &str, status: ListStatus) -> StoreResult<ShoppingList> {
        let mut lists = self.lists.write().await;
        let list = lists
            .get_mut(id)
            .ok_or_else(|| StoreError::not_found("List", id))?;

        let now = Utc::now();
        match status {
            ListStatus::History => list.archive(now),
            ListStatus::Current => list.restore(now),
        }
        Ok(list.clone())
    }
}

#[async_trait]
impl ListRepository for MemoryListRepository {
    async fn insert(&self, list: &ShoppingList) -> StoreResult<()> {
        debug!(id = %list.id, items = list.items.len(), "Inserting list");

        let mut lists = self.lists.write().await;
        if lists.contains_key(&list.id) {
            return Err(StoreError::duplicate("list id", list.id.clone()));
        }
        lists.insert(list.id.clone(), list.clone());
        Ok(())
    }

    async fn get(&self, id: &str) -> StoreResult<Option<ShoppingList>> {
        Ok(self.lists.read().await.get(id).cloned())
    }

    async fn list(&self, status: Option<ListStatus>) -> StoreResult<Vec<ShoppingList>> {
        let lists = self.lists.read().await;
        let mut found: Vec<ShoppingList> = lists
            .values()
            .filter(|l| status.map_or(true, |s| l.status == s))
            .cloned()
            .collect();
        found.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then_with(|| a.id.cmp(&b.id)));

        debug!(status = ?status, count = found.len(), "Listed lists");
        Ok(found)
    }

    async fn update(&self, list: &ShoppingList) -> StoreResult<()> {
        debug!(id = %list.id, "Updating list");

        let mut lists = self.lists.write().await;
        match lists.get_mut(&list.id) {
            Some(stored) => {
                *stored = list.clone();
                Ok(())
            }
            None => Err(StoreError::not_found("List", list.id.clone())),
        }
    }

    async fn archive(&self, id: &str) -> StoreResult<ShoppingList> {
        debug!(id = %id, "Archiving list");
        self.set_status(id, ListStatus::History).await
    }

    async fn restore(&self, id: &str) -> StoreResult<ShoppingList> {
        debug!(id = %id, "Restoring list");
        self.set_status(id, ListStatus::Current).await
    }

    async fn delete(&self, id: &str) -> StoreResult<bool> {
        debug!(id = %id, "Deleting list");
        Ok(self.lists.write().await.remove(id).is_some())
    }

    async fn count(&self, status: Option<ListStatus>) -> StoreResult<usize> {
        let lists = self.lists.read().await;
        Ok(lists
            .values()
            .filter(|l| status.map_or(true, |s| l.status == s))
            .count())
    }
}

// ============================================================================
// Tests
// ============================================================================
