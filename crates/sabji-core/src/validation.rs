//! # Validation Module
//!
//! The boundary between user input and the pure engine.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: UI / CLI parsing                                             │
//! │  └── Type validation (numbers, enum names)                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Finite, positive prices and quantities                            │
//! │  ├── Strict dairy rule (category ↔ mode / unit)                        │
//! │  └── Names, list size, ids                                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Engine                                                       │
//! │  └── Assumes valid input; degenerate input → empty table               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use sabji_core::types::{Category, Mode};
//! use sabji_core::validation::{validate_category_mode, validate_price};
//!
//! assert!(validate_price(40.0).is_ok());
//! assert!(validate_category_mode(Category::Dairy, Mode::Liter).is_ok());
//! assert!(validate_category_mode(Category::Dairy, Mode::Weight).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::{Category, MeasureUnit, Mode, PriceObservation};
use crate::MAX_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

pub const DAIRY_MODE_MESSAGE: &str = "Dairy products must use Liter as base unit";
pub const NON_DAIRY_MODE_MESSAGE: &str = "Non-dairy products must use Kilogram as base unit";
pub const DAIRY_UNIT_MESSAGE: &str = "Dairy products use Liters/mL only, not grams/kg";
pub const NON_DAIRY_UNIT_MESSAGE: &str =
    "Vegetables/Fruits/Kirana use grams/kg only, not Liters/mL";

/// Highest observed price accepted, in rupees (one crore).
pub const MAX_PRICE: f64 = 10_000_000.0;

/// Highest reference quantity accepted: a tonne in grams, a thousand liters
/// in ml, or a million packets / dozens.
pub const MAX_REFERENCE_MAGNITUDE: f64 = 1_000_000.0;

// =============================================================================
// Numeric Validators
// =============================================================================

fn positive_finite(field: &str, value: f64, max: f64) -> ValidationResult<f64> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }
    if value <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }
    if value > max {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: max as i64,
        });
    }
    Ok(value)
}

/// Validates an observed price in rupees.
///
/// ## Rules
/// - Must be finite
/// - Must be greater than zero
/// - At most [`MAX_PRICE`], so list totals stay within `Money`
pub fn validate_price(price: f64) -> ValidationResult<f64> {
    positive_finite("price", price, MAX_PRICE)
}

/// Validates the quantity a price was observed at (g, ml, packets, dozens).
pub fn validate_reference_magnitude(magnitude: f64) -> ValidationResult<f64> {
    positive_finite("quantity", magnitude, MAX_REFERENCE_MAGNITUDE)
}

/// Validates an amount about to be turned into words.
///
/// Zero is allowed; it reads as "शून्य".
pub fn validate_amount(amount: f64) -> ValidationResult<f64> {
    if !amount.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "amount".to_string(),
        });
    }
    if amount < 0.0 {
        return Err(ValidationError::OutOfRange {
            field: "amount".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }
    Ok(amount)
}

// =============================================================================
// Strict Dairy Rule
// =============================================================================

/// Checks that a mode suits the category.
///
/// ## Rules
/// ```text
/// ┌────────────┬──────────┬──────────┬──────────┬──────────┐
/// │            │  Weight  │  Liter   │  Packet  │  Dozen   │
/// ├────────────┼──────────┼──────────┼──────────┼──────────┤
/// │  Dairy     │    ✗     │    ✓     │    ✗     │    ✗     │
/// │  Non-dairy │    ✓     │    ✗     │    ✓     │    ✓     │
/// └────────────┴──────────┴──────────┴──────────┴──────────┘
/// ```
pub fn validate_category_mode(category: Category, mode: Mode) -> ValidationResult<()> {
    let message = match (category.is_dairy(), mode) {
        (true, Mode::Liter) | (false, Mode::Weight | Mode::Packet | Mode::Dozen) => {
            return Ok(())
        }
        (true, _) => DAIRY_MODE_MESSAGE,
        (false, Mode::Liter) => NON_DAIRY_MODE_MESSAGE,
    };
    Err(ValidationError::CategoryMismatch {
        message: message.to_string(),
    })
}

/// Checks that a typed-in unit suits the category: dairy in ml/L, everything
/// else in g/kg.
pub fn validate_measure_unit(category: Category, unit: MeasureUnit) -> ValidationResult<()> {
    let is_volume = unit.mode() == Mode::Liter;
    match (category.is_dairy(), is_volume) {
        (true, true) | (false, false) => Ok(()),
        (true, false) => Err(ValidationError::CategoryMismatch {
            message: DAIRY_UNIT_MESSAGE.to_string(),
        }),
        (false, true) => Err(ValidationError::CategoryMismatch {
            message: NON_DAIRY_UNIT_MESSAGE.to_string(),
        }),
    }
}

/// Runs every check an observation needs before it reaches the engine.
pub fn validate_observation(
    category: Category,
    mode: Mode,
    reference_magnitude: f64,
    price: f64,
) -> ValidationResult<PriceObservation> {
    let price = validate_price(price)?;
    let reference_magnitude = validate_reference_magnitude(reference_magnitude)?;
    validate_category_mode(category, mode)?;
    Ok(PriceObservation::new(mode, reference_magnitude, price))
}

// =============================================================================
// String Validators
// =============================================================================

fn validate_name(field: &str, name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(name.to_string())
}

/// Validates a list name and returns it trimmed.
pub fn validate_list_name(name: &str) -> ValidationResult<String> {
    validate_name("list name", name)
}

/// Validates a custom item name and returns it trimmed.
///
/// Length is counted in characters, so Devanagari names are not penalised
/// for their UTF-8 width.
pub fn validate_item_name(name: &str) -> ValidationResult<String> {
    validate_name("item name", name)
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates that a list holding `current_items` can take one more.
///
/// `max` is the configured limit, [`crate::MAX_LIST_ITEMS`] by default.
pub fn validate_list_size(current_items: usize, max: usize) -> ValidationResult<()> {
    if current_items >= max {
        return Err(ValidationError::OutOfRange {
            field: "list items".to_string(),
            min: 0,
            max: max as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_price() {
        assert_eq!(validate_price(40.0), Ok(40.0));
        assert_eq!(validate_price(0.01), Ok(0.01));

        assert!(matches!(validate_price(0.0), Err(ValidationError::MustBePositive { .. })));
        assert!(matches!(validate_price(-5.0), Err(ValidationError::MustBePositive { .. })));
        assert!(matches!(validate_price(f64::NAN), Err(ValidationError::NotFinite { .. })));
        assert!(validate_price(f64::INFINITY).is_err());

        assert_eq!(validate_price(MAX_PRICE), Ok(MAX_PRICE));
        assert!(matches!(validate_price(1e16), Err(ValidationError::OutOfRange { .. })));
    }

    #[test]
    fn test_validate_reference_magnitude() {
        assert!(validate_reference_magnitude(62.5).is_ok());
        assert!(validate_reference_magnitude(0.0).is_err());
        assert!(validate_reference_magnitude(f64::NEG_INFINITY).is_err());
        assert!(validate_reference_magnitude(MAX_REFERENCE_MAGNITUDE).is_ok());
        assert!(validate_reference_magnitude(MAX_REFERENCE_MAGNITUDE * 2.0).is_err());
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount(0.0).is_ok());
        assert!(validate_amount(999.99).is_ok());
        assert!(validate_amount(-0.5).is_err());
        assert!(validate_amount(f64::NAN).is_err());
    }

    #[test]
    fn test_dairy_must_use_liter() {
        assert!(validate_category_mode(Category::Dairy, Mode::Liter).is_ok());
        for mode in [Mode::Weight, Mode::Packet, Mode::Dozen] {
            let err = validate_category_mode(Category::Dairy, mode).unwrap_err();
            assert_eq!(err.to_string(), DAIRY_MODE_MESSAGE);
        }
    }

    #[test]
    fn test_non_dairy_cannot_use_liter() {
        for category in [Category::VegFruits, Category::Kirana] {
            let err = validate_category_mode(category, Mode::Liter).unwrap_err();
            assert_eq!(err.to_string(), NON_DAIRY_MODE_MESSAGE);

            for mode in [Mode::Weight, Mode::Packet, Mode::Dozen] {
                assert!(validate_category_mode(category, mode).is_ok());
            }
        }
    }

    #[test]
    fn test_validate_measure_unit() {
        assert!(validate_measure_unit(Category::Dairy, MeasureUnit::Milliliter).is_ok());
        assert!(validate_measure_unit(Category::Dairy, MeasureUnit::Liter).is_ok());
        assert_eq!(
            validate_measure_unit(Category::Dairy, MeasureUnit::Gram)
                .unwrap_err()
                .to_string(),
            DAIRY_UNIT_MESSAGE
        );

        assert!(validate_measure_unit(Category::Kirana, MeasureUnit::Kilogram).is_ok());
        assert_eq!(
            validate_measure_unit(Category::VegFruits, MeasureUnit::Liter)
                .unwrap_err()
                .to_string(),
            NON_DAIRY_UNIT_MESSAGE
        );
    }

    #[test]
    fn test_validate_names() {
        assert_eq!(validate_list_name("  Weekly  "), Ok("Weekly".to_string()));
        assert!(validate_list_name("").is_err());
        assert!(validate_item_name("   ").is_err());
        assert!(validate_item_name(&"क".repeat(MAX_NAME_LEN)).is_ok());
        assert!(validate_item_name(&"A".repeat(MAX_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn test_validate_list_size() {
        use crate::MAX_LIST_ITEMS;
        assert!(validate_list_size(0, MAX_LIST_ITEMS).is_ok());
        assert!(validate_list_size(MAX_LIST_ITEMS - 1, MAX_LIST_ITEMS).is_ok());
        assert!(validate_list_size(MAX_LIST_ITEMS, MAX_LIST_ITEMS).is_err());
        assert!(validate_list_size(3, 3).is_err());
    }

    #[test]
    fn test_validate_observation() {
        let obs = validate_observation(Category::Dairy, Mode::Liter, 500.0, 30.0).unwrap();
        assert_eq!(obs, PriceObservation::new(Mode::Liter, 500.0, 30.0));

        assert!(validate_observation(Category::Dairy, Mode::Weight, 500.0, 30.0).is_err());
        assert!(validate_observation(Category::Kirana, Mode::Packet, 1.0, 0.0).is_err());
        assert!(validate_observation(Category::Kirana, Mode::Packet, 2e6, 10.0).is_err());
    }
}
