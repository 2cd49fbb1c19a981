//! # Repository Module
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  ListService                                                           │
//! │       │                                                                 │
//! │       │  repo.list(Some(ListStatus::Current))                          │
//! │       ▼                                                                 │
//! │  ListRepository (trait)                                                │
//! │  ├── insert / get / update / delete                                    │
//! │  ├── list(status)          newest first                                │
//! │  └── archive / restore     current ⇄ history                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  MemoryListRepository  (today)                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`memory::MemoryListRepository`] - HashMap behind a tokio `RwLock`

pub mod memory;

use async_trait::async_trait;
use sabji_core::types::{ListStatus, ShoppingList};
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};

/// Storage for shopping lists.
///
/// Implementations hand out clones; callers mutate their copy and write it
/// back with [`ListRepository::update`].
#[async_trait]
pub trait ListRepository: Send + Sync + 'static {
    /// Stores a new list. Fails with `Duplicate` if the id is taken.
    async fn insert(&self, list: &ShoppingList) -> StoreResult<()>;

    async fn get(&self, id: &str) -> StoreResult<Option<ShoppingList>>;

    /// Lists with the given status (all when `None`), most recently
    /// updated first.
    async fn list(&self, status: Option<ListStatus>) -> StoreResult<Vec<ShoppingList>>;

    /// Replaces a stored list. Fails with `NotFound` if it is missing.
    async fn update(&self, list: &ShoppingList) -> StoreResult<()>;

    /// Moves a list to history (soft delete).
    async fn archive(&self, id: &str) -> StoreResult<ShoppingList>;

    /// Brings a list back from history.
    async fn restore(&self, id: &str) -> StoreResult<ShoppingList>;

    /// Removes a list for good. Returns whether anything was removed.
    async fn delete(&self, id: &str) -> StoreResult<bool>;

    async fn count(&self, status: Option<ListStatus>) -> StoreResult<usize>;

    /// Like [`ListRepository::get`] but a missing list is an error.
    async fn get_required(&self, id: &str) -> StoreResult<ShoppingList> {
        self.get(id)
            .await?
            .ok_or_else(|| StoreError::not_found("List", id))
    }
}

/// Helper to generate a new list or list-item ID.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
