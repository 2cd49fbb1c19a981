//! # sabji-store: List Storage for SabjiRate
//!
//! Shopping lists live behind the [`ListRepository`] trait. The app is handed
//! a repository; it never reaches for global state.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        SabjiRate Data Flow                              │
//! │                                                                         │
//! │  ListService::price_item                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   sabji-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────────────┐        ┌──────────────────────────┐   │   │
//! │  │   │  ListRepository    │        │  MemoryListRepository    │   │   │
//! │  │   │  (trait, async)    │◄───────│  RwLock<HashMap>         │   │   │
//! │  │   │                    │        │  + JSON snapshots        │   │   │
//! │  │   └────────────────────┘        └──────────────────────────┘   │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sabji_store::{ListRepository, MemoryListRepository};
//!
//! let repo = MemoryListRepository::new();
//! repo.insert(&list).await?;
//! let current = repo.list(Some(ListStatus::Current)).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use repository::memory::MemoryListRepository;
pub use repository::{generate_id, ListRepository};
