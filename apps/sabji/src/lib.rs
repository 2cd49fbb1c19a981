//! # SabjiRate Application Library
//!
//! Services the front ends call into, plus the command line that ships with
//! them.
//!
//! ## Module Organization
//! ```text
//! sabji_app/
//! ├── lib.rs          ◄─── You are here (exports & logging setup)
//! ├── cli.rs          ◄─── clap definitions and dispatch
//! ├── pricing.rs      ◄─── ValidatedObservation (input boundary)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── pricing.rs  ◄─── Rate card / quote / words
//! │   ├── catalog.rs  ◄─── Catalog search and detail
//! │   ├── lists.rs    ◄─── ListService
//! │   └── config.rs   ◄─── Configuration retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Layering
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   raw input ──► pricing::ValidatedObservation ──► sabji_core::engine     │
//! │                      │                                                  │
//! │                      └── strict dairy rule, finite positive numbers     │
//! │                                                                         │
//! │   ListService<R: ListRepository> ──► sabji_store (injected repository)  │
//! │                                                                         │
//! │   every error ──► ApiError { code, message }                            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod pricing;
pub mod state;

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so command output on stdout stays valid JSON.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=sabji_store=trace` - Trace the list store only
/// - Default: INFO, DEBUG for the sabji crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sabji=debug,sabji_app=debug,sabji_store=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
