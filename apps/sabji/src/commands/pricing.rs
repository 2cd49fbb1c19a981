//! # Pricing Commands
//!
//! Rate cards, custom-quantity quotes and spoken prices.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Shopkeeper: "Tamatar, chaalis rupaye kilo"                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  rate_card(item = "v1", qty = 1000, price = 40)                        │
//! │       │                                                                 │
//! │       ├── look up item        → Tomato, VegFruits, default Weight      │
//! │       ├── ValidatedObservation → strict dairy rule, finite numbers     │
//! │       └── engine fan-out       → 7 rows, each with hi / mr words       │
//! │                                                                         │
//! │  Pav (250 g)   ₹10.00   दस / दहा                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sabji_core::numerals::{spoken_price, SpokenPrice};
use sabji_core::types::{MeasureUnit, Mode, PriceObservation, PriceRow, Quote};
use sabji_core::validation::validate_amount;
use sabji_core::{Catalog, CatalogEntry, ValidationError};
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::pricing::ValidatedObservation;
use crate::state::ConfigState;

/// The full table for one item at one observed price.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateCard {
    pub item: CatalogEntry,
    pub observation: PriceObservation,
    /// Price of one kilo / liter / packet / dozen.
    pub rate: f64,
    pub rate_formatted: String,
    pub rate_unit: &'static str,
    pub rows: Vec<PriceRow>,
}

/// Price of one item at a quantity outside the canonical table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub item: CatalogEntry,
    pub observation: PriceObservation,
    pub quote: Quote,
}

/// Input shared by [`rate_card`] and [`quote`].
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRequest {
    pub item_id: String,
    /// Falls back to the item's default mode.
    pub mode: Option<Mode>,
    pub quantity: f64,
    pub price: f64,
}

fn observe<'c>(
    catalog: &'c Catalog,
    request: &PriceRequest,
) -> Result<(&'c CatalogEntry, ValidatedObservation), ApiError> {
    let item = catalog.require(&request.item_id)?;
    let mode = request.mode.unwrap_or_else(|| item.default_mode());
    let observation =
        ValidatedObservation::new(item.category, mode, request.quantity, request.price)?;
    Ok((item, observation))
}

/// Re-labels computed rows with the configured currency symbol.
fn localize(config: &ConfigState, mut rows: Vec<PriceRow>) -> Vec<PriceRow> {
    for row in &mut rows {
        row.price_formatted = config.format_rupees(row.price);
    }
    rows
}

/// Builds the rate card for a catalog item.
pub fn rate_card(
    config: &ConfigState,
    catalog: &Catalog,
    request: &PriceRequest,
) -> Result<RateCard, ApiError> {
    debug!(item = %request.item_id, quantity = request.quantity, price = request.price, "rate_card command");

    let (item, observation) = observe(catalog, request)?;
    let rate = observation.rate();

    Ok(RateCard {
        item: item.clone(),
        observation: *observation.observation(),
        rate,
        rate_formatted: config.format_rupees(rate),
        rate_unit: observation.observation().mode.rate_unit(),
        rows: localize(config, observation.rows()),
    })
}

/// Quotes a custom quantity.
///
/// Without `unit`, `quantity` and `at` are in the mode's base measure. With a
/// unit, both are read in it (e.g. `quantity = 0.5, at = 1.5, unit = L`) and
/// the mode follows from the unit.
pub fn quote(
    config: &ConfigState,
    catalog: &Catalog,
    request: &PriceRequest,
    at: f64,
    unit: Option<MeasureUnit>,
) -> Result<QuoteResponse, ApiError> {
    debug!(item = %request.item_id, at, unit = ?unit, "quote command");

    let (item, observation, magnitude) = match unit {
        Some(unit) => {
            let item = catalog.require(&request.item_id)?;
            if let Some(mode) = request.mode.filter(|m| *m != unit.mode()) {
                return Err(ValidationError::NotAllowed {
                    field: "unit".to_string(),
                    allowed: vec![mode.base_measure().to_string()],
                }
                .into());
            }
            let observation = ValidatedObservation::from_measure(
                item.category,
                request.quantity,
                unit,
                request.price,
            )?;
            (item, observation, unit.to_base(at))
        }
        None => {
            let (item, observation) = observe(catalog, request)?;
            (item, observation, at)
        }
    };

    let mut quote = observation.quote(magnitude)?;
    quote.price_formatted = config.format_rupees(quote.price);

    Ok(QuoteResponse {
        item: item.clone(),
        observation: *observation.observation(),
        quote,
    })
}

/// Reads an amount out in Hindi and Marathi.
pub fn words(config: &ConfigState, amount: f64) -> Result<SpokenPrice, ApiError> {
    debug!(amount, "words command");
    let amount = validate_amount(amount)?;
    let mut spoken = spoken_price(amount);
    spoken.numeric = config.format_rupees(amount);
    Ok(spoken)
}
