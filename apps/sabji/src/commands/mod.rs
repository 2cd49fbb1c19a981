//! # Commands Module
//!
//! Everything a front end (the bundled CLI, or a UI) calls into.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── pricing.rs  ◄─── Rate cards, quotes, spoken prices
//! ├── catalog.rs  ◄─── Catalog search and item detail
//! ├── lists.rs    ◄─── ListService: shopping-list lifecycle
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Front end                                                              │
//! │  ─────────                                                              │
//! │  sabji rate-card --item v1 --qty 250 --price 12                         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Rust                                                                   │
//! │  ────                                                                   │
//! │  pricing::rate_card(                                                    │
//! │      config: &ConfigState,    ◄── Loaded once at startup               │
//! │      catalog: &Catalog,       ◄── Built once, read-only                │
//! │      request: &PriceRequest,  ◄── From the caller                      │
//! │  ) -> Result<RateCard, ApiError>                                        │
//! │         │                                                               │
//! │         │ (JSON serialization, camelCase)                               │
//! │         ▼                                                               │
//! │  Front end receives: RateCard or { code, message }                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pricing and catalog commands are plain functions. List commands live on
//! [`lists::ListService`], which owns the injected repository.

pub mod catalog;
pub mod config;
pub mod lists;
pub mod pricing;
