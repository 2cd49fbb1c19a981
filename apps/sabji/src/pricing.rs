//! # Validated Observations
//!
//! The only way the app turns raw shopper input into a [`PriceObservation`].
//!
//! ```text
//! category, mode, quantity, price   (raw input)
//!        │
//!        ▼
//! ValidatedObservation::new ── price finite, > 0, ≤ MAX_PRICE
//!        │                  ── quantity finite, > 0, bounded
//!        │                  ── strict dairy rule
//!        ▼
//! PriceObservation ──► engine::calculate_all_prices
//! ```

use sabji_core::engine;
use sabji_core::types::{Category, MeasureUnit, Mode, PriceObservation, PriceRow, Quote};
use sabji_core::validation::{
    validate_measure_unit, validate_observation, validate_reference_magnitude, ValidationResult,
};

/// A [`PriceObservation`] that has passed every boundary check for its
/// item's category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedObservation {
    category: Category,
    observation: PriceObservation,
}

impl ValidatedObservation {
    pub fn new(
        category: Category,
        mode: Mode,
        reference_magnitude: f64,
        price: f64,
    ) -> ValidationResult<Self> {
        let observation = validate_observation(category, mode, reference_magnitude, price)?;
        Ok(ValidatedObservation {
            category,
            observation,
        })
    }

    /// Builds from a quantity typed in g/kg/ml/L, converting to the base
    /// measure first.
    pub fn from_measure(
        category: Category,
        quantity: f64,
        unit: MeasureUnit,
        price: f64,
    ) -> ValidationResult<Self> {
        validate_measure_unit(category, unit)?;
        Self::new(category, unit.mode(), unit.to_base(quantity), price)
    }

    #[inline]
    pub fn category(&self) -> Category {
        self.category
    }

    #[inline]
    pub fn observation(&self) -> &PriceObservation {
        &self.observation
    }

    pub fn into_inner(self) -> PriceObservation {
        self.observation
    }

    /// The full fan-out table. Never empty for a validated observation.
    pub fn rows(&self) -> Vec<PriceRow> {
        engine::calculate_all_prices(&self.observation)
    }

    /// Price per kilo, liter, packet or dozen.
    pub fn rate(&self) -> f64 {
        engine::rate(&self.observation).unwrap_or_default()
    }

    /// Price at an arbitrary quantity in the mode's base measure.
    pub fn quote(&self, magnitude: f64) -> ValidationResult<Quote> {
        let magnitude = validate_reference_magnitude(magnitude)?;
        // A validated observation always has a rate, so this only fails on
        // the magnitude checked above.
        engine::quote(&self.observation, magnitude).ok_or(
            sabji_core::ValidationError::MustBePositive {
                field: "quantity".to_string(),
            },
        )
    }
}
