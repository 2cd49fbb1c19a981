//! # sabji-core: Pure Business Logic for SabjiRate
//!
//! SabjiRate helps a shopper at an Indian market turn one observed price
//! ("₹12 for 250 g") into the price of every quantity they might ask for,
//! read out in Hindi and Marathi.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        SabjiRate Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/sabji (services + CLI)                  │   │
//! │  │    create_list, price_item, rate-card, quote, words            │   │
//! │  └──────────────┬──────────────────────────────┬──────────────────┘   │
//! │                 │                              │                        │
//! │  ┌──────────────▼──────────────────┐  ┌───────▼──────────────────┐    │
//! │  │   ★ sabji-core (THIS CRATE) ★   │  │   sabji-store            │    │
//! │  │                                 │  │   ListRepository         │    │
//! │  │  ┌─────────┐ ┌─────────┐        │  │   (async, in-memory)     │    │
//! │  │  │ engine  │ │numerals │        │  └──────────────────────────┘    │
//! │  │  │ fan-out │ │ hi / mr │        │                                   │
//! │  │  └─────────┘ └─────────┘        │                                   │
//! │  │  ┌─────────┐ ┌─────────┐        │                                   │
//! │  │  │ catalog │ │validate │        │                                   │
//! │  │  └─────────┘ └─────────┘        │                                   │
//! │  │  NO I/O • NO LOGGING • PURE     │                                   │
//! │  └─────────────────────────────────┘                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Mode, PriceObservation, PriceRow, ShoppingList)
//! - [`units`] - Canonical quantity tables per mode
//! - [`engine`] - Price fan-out, custom quotes, spend estimates
//! - [`numerals`] - Hindi and Marathi number words
//! - [`catalog`] - The built-in item catalog
//! - [`money`] - Paise-based display and totals
//! - [`validation`] - Boundary checks, including the strict dairy rule
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use sabji_core::engine::calculate_all_prices;
//! use sabji_core::types::{Mode, PriceObservation};
//!
//! // ₹40 for one kilo of tomatoes
//! let rows = calculate_all_prices(&PriceObservation::new(Mode::Weight, 1000.0, 40.0));
//!
//! let pav = &rows[2];
//! assert_eq!(pav.unit.display_name, "Pav");
//! assert_eq!(pav.price_formatted, "₹10.00");
//! assert_eq!(pav.words_hi, "दस");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod engine;
pub mod error;
pub mod money;
pub mod numerals;
pub mod types;
pub mod units;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{Catalog, CatalogEntry};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use numerals::{Language, SpokenPrice, Words};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum items on one shopping list.
///
/// The app can lower or raise this through configuration.
pub const MAX_LIST_ITEMS: usize = 200;

/// Maximum length, in characters, of list and item names.
pub const MAX_NAME_LEN: usize = 100;
