//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SABJI_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no lock needed.

use sabji_core::{Money, MAX_LIST_ITEMS};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Application configuration.
///
/// `currency_symbol` applies to everything the commands format: rate cards,
/// quotes, spoken prices and list totals. Rows stored on list items keep
/// the `₹` form they were computed with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Largest number of items one list may hold
    pub max_list_items: usize,

    /// Prefix of generated list names, e.g. "List" → "List - 01/03/2024 09:30"
    pub list_name_prefix: String,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            currency_symbol: "₹".to_string(),
            max_list_items: MAX_LIST_ITEMS,
            list_name_prefix: "List".to_string(),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `SABJI_CURRENCY_SYMBOL`: Override the currency symbol
    /// - `SABJI_MAX_LIST_ITEMS`: Override the per-list item limit
    /// - `SABJI_LIST_NAME_PREFIX`: Override the generated list name prefix
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();

        if let Some(symbol) = lookup("SABJI_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(max) = lookup("SABJI_MAX_LIST_ITEMS") {
            match max.trim().parse::<usize>() {
                Ok(max) if max > 0 => config.max_list_items = max,
                _ => warn!(value = %max, "Ignoring invalid SABJI_MAX_LIST_ITEMS"),
            }
        }

        if let Some(prefix) = lookup("SABJI_LIST_NAME_PREFIX") {
            let prefix = prefix.trim();
            if !prefix.is_empty() {
                config.list_name_prefix = prefix.to_string();
            }
        }

        config
    }

    /// Formats an amount with the configured currency symbol.
    pub fn format_currency(&self, amount: Money) -> String {
        amount.format_with(&self.currency_symbol)
    }

    /// Formats a computed rupee price, rounded to paise, with the configured
    /// symbol.
    pub fn format_rupees(&self, rupees: f64) -> String {
        match Money::from_rupees_f64(rupees) {
            Some(money) => self.format_currency(money),
            None => format!("{}{:.2}", self.currency_symbol, rupees),
        }
    }
}
