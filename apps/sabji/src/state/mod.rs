//! # State Module
//!
//! Application state shared by the commands.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────┐        ┌──────────────────────────────────┐  │
//! │  │   ConfigState        │        │   ListRepository (sabji-store)   │  │
//! │  │                      │        │                                  │  │
//! │  │  currency_symbol     │        │  injected into ListService       │  │
//! │  │  max_list_items      │        │  Arc<R>, internally locked       │  │
//! │  │  list_name_prefix    │        │                                  │  │
//! │  └──────────────────────┘        └──────────────────────────────────┘  │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • ConfigState: Read-only after initialization                         │
//! │  • Repository: tokio RwLock inside the implementation                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;

pub use config::ConfigState;
