//! # Quantity Price Engine
//!
//! Turns one observed price into the price of every canonical quantity.
//!
//! ## Fan-out
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PriceObservation { 250 g, ₹12, Weight }                                │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  rate = price / (reference / 1000)          = ₹48 per kilo              │
//! │        │                                                                │
//! │        ├──► 62.5 g  → (62.5 / 1000) × 48    = ₹3.00                     │
//! │        ├──► 125 g   → (125 / 1000) × 48     = ₹6.00                     │
//! │        ├──► ...                                                         │
//! │        └──► 1000 g  → (1000 / 1000) × 48    = ₹48.00                    │
//! │                                                                         │
//! │  Packet / Dozen: row = price × count (price is already per unit)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every row is derived from the rate, never from a neighbouring row, so
//! rounding error does not accumulate down the table.
//!
//! The engine does not check whether the mode suits the item's category.
//! That is the boundary's job (`validation::validate_category_mode`).

use crate::types::{Mode, PriceObservation, PriceRow, Quote};

/// Base units (g or ml) in one kilo or liter.
pub const BASE_PER_KILO: f64 = 1000.0;

/// Price of one kilo, liter, packet or dozen.
///
/// `None` when the observation is not computable.
pub fn rate(observation: &PriceObservation) -> Option<f64> {
    if !observation.is_computable() {
        return None;
    }
    let rate = match observation.mode {
        Mode::Weight | Mode::Liter => {
            observation.price / (observation.reference_magnitude / BASE_PER_KILO)
        }
        Mode::Packet | Mode::Dozen => observation.price,
    };
    Some(rate)
}

#[inline]
fn price_at(mode: Mode, rate: f64, magnitude: f64) -> f64 {
    match mode {
        Mode::Weight | Mode::Liter => (magnitude / BASE_PER_KILO) * rate,
        Mode::Packet | Mode::Dozen => rate * magnitude,
    }
}

/// Prices every quantity in the mode's canonical table, in table order.
///
/// Returns an empty vector for a zero, negative or non-finite price or
/// reference quantity.
pub fn calculate_all_prices(observation: &PriceObservation) -> Vec<PriceRow> {
    let Some(rate) = rate(observation) else {
        return Vec::new();
    };
    let mode = observation.mode;
    mode.units()
        .iter()
        .map(|unit| PriceRow::new(unit.clone(), price_at(mode, rate, unit.magnitude)))
        .collect()
}

/// Price at an arbitrary quantity in the mode's base measure, e.g. 300 g.
pub fn quote(observation: &PriceObservation, magnitude: f64) -> Option<Quote> {
    if !magnitude.is_finite() || magnitude <= 0.0 {
        return None;
    }
    let rate = rate(observation)?;
    Some(Quote::new(
        magnitude,
        price_at(observation.mode, rate, magnitude),
    ))
}

/// What the shopper pays for the quantity they observed.
///
/// Weight and liter prices already cover the reference quantity; packet
/// and dozen prices are per unit, so they scale by the count being bought.
pub fn estimated_spend(observation: &PriceObservation) -> Option<f64> {
    if !observation.is_computable() {
        return None;
    }
    let spend = match observation.mode {
        Mode::Weight | Mode::Liter => observation.price,
        Mode::Packet | Mode::Dozen => observation.price * observation.reference_magnitude,
    };
    Some(spend)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn prices(rows: &[PriceRow]) -> Vec<f64> {
        rows.iter().map(|r| r.price).collect()
    }

    #[test]
    fn test_kilo_at_forty() {
        let rows = calculate_all_prices(&PriceObservation::new(Mode::Weight, 1000.0, 40.0));

        assert_eq!(rows.len(), 7);
        assert_eq!(prices(&rows), vec![2.5, 5.0, 10.0, 15.0, 20.0, 30.0, 40.0]);

        let pav = &rows[2];
        assert_eq!(pav.unit.display_name, "Pav");
        assert_eq!(pav.price_formatted, "₹10.00");
        assert_eq!(pav.words_hi, "दस");
        assert_eq!(pav.words_mr, "दहा");

        let half = &rows[4];
        assert_eq!(half.words_hi, "बीस");
        assert_eq!(half.words_mr, "वीस");

        let kilo = &rows[6];
        assert_eq!(kilo.price_formatted, "₹40.00");
        assert_eq!(kilo.words_hi, "चालीस");
        assert_eq!(kilo.words_mr, "चाळीस");
    }

    #[test]
    fn test_half_liter_at_thirty() {
        let rows = calculate_all_prices(&PriceObservation::new(Mode::Liter, 500.0, 30.0));

        assert_eq!(rows.len(), 4);
        let liter = rows.last().unwrap();
        assert_eq!(liter.unit.display_name, "1 Liter");
        assert_eq!(liter.price, 60.0);
        assert_eq!(liter.words_hi, "साठ");
        assert_eq!(liter.words_mr, "साठ");
    }

    #[test]
    fn test_packet_rows() {
        let rows = calculate_all_prices(&PriceObservation::new(Mode::Packet, 1.0, 20.0));
        assert_eq!(prices(&rows), vec![20.0, 40.0, 60.0, 80.0, 100.0]);
        assert_eq!(rows[4].words_hi, "सौ");
        assert_eq!(rows[4].words_mr, "शंभर");
    }

    #[test]
    fn test_dozen_rows() {
        let rows = calculate_all_prices(&PriceObservation::new(Mode::Dozen, 1.0, 60.0));
        assert_eq!(
            prices(&rows),
            vec![15.0, 30.0, 60.0, 90.0, 120.0, 150.0, 180.0, 240.0, 300.0]
        );
        assert_eq!(rows[0].unit.piece_count, Some(3));
        assert_eq!(rows[4].words_hi, "सौ बीस");
        assert_eq!(rows[4].words_mr, "शंभर वीस");
    }

    #[test]
    fn test_degenerate_observations_yield_nothing() {
        for obs in [
            PriceObservation::new(Mode::Weight, 1000.0, 0.0),
            PriceObservation::new(Mode::Weight, 0.0, 40.0),
            PriceObservation::new(Mode::Liter, -500.0, 30.0),
            PriceObservation::new(Mode::Packet, 1.0, -20.0),
            PriceObservation::new(Mode::Dozen, 1.0, f64::NAN),
            PriceObservation::new(Mode::Weight, f64::INFINITY, 40.0),
        ] {
            assert!(calculate_all_prices(&obs).is_empty(), "{obs:?}");
            assert!(rate(&obs).is_none());
            assert!(estimated_spend(&obs).is_none());
        }
    }

    #[test]
    fn test_rate() {
        assert_eq!(rate(&PriceObservation::new(Mode::Weight, 250.0, 12.0)), Some(48.0));
        assert_eq!(rate(&PriceObservation::new(Mode::Dozen, 2.0, 60.0)), Some(60.0));
    }

    #[test]
    fn test_quote_custom_weight() {
        let obs = PriceObservation::new(Mode::Weight, 1000.0, 40.0);
        let quote = quote(&obs, 300.0).unwrap();
        assert_eq!(quote.price, 12.0);
        assert_eq!(quote.price_formatted, "₹12.00");
        assert_eq!(quote.words_hi, "बारह");

        assert!(super::quote(&obs, 0.0).is_none());
        assert!(super::quote(&obs, f64::NAN).is_none());
    }

    #[test]
    fn test_estimated_spend() {
        let weight = PriceObservation::new(Mode::Weight, 250.0, 12.0);
        assert_eq!(estimated_spend(&weight), Some(12.0));

        let packets = PriceObservation::new(Mode::Packet, 3.0, 20.0);
        assert_eq!(estimated_spend(&packets), Some(60.0));

        let dozens = PriceObservation::new(Mode::Dozen, 0.5, 80.0);
        assert_eq!(estimated_spend(&dozens), Some(40.0));
    }

    fn any_mode() -> impl Strategy<Value = Mode> {
        prop_oneof![
            Just(Mode::Weight),
            Just(Mode::Liter),
            Just(Mode::Packet),
            Just(Mode::Dozen),
        ]
    }

    proptest! {
        #[test]
        fn prop_proportional_rows_are_linear(
            proportional in prop_oneof![Just(Mode::Weight), Just(Mode::Liter)],
            reference in 1.0f64..5000.0,
            price in 0.5f64..5000.0,
        ) {
            let obs = PriceObservation::new(proportional, reference, price);
            let rate = price / (reference / 1000.0);
            for row in calculate_all_prices(&obs) {
                let expected = row.unit.magnitude * rate / 1000.0;
                prop_assert!((row.price - expected).abs() <= 1e-9 * expected.max(1.0));
            }
        }

        #[test]
        fn prop_discrete_rows_scale_price(
            discrete in prop_oneof![Just(Mode::Packet), Just(Mode::Dozen)],
            price in 0.5f64..5000.0,
        ) {
            let obs = PriceObservation::new(discrete, 1.0, price);
            for row in calculate_all_prices(&obs) {
                prop_assert_eq!(row.price, price * row.unit.magnitude);
            }
        }

        #[test]
        fn prop_fan_out_is_idempotent(
            mode in any_mode(),
            reference in 0.1f64..5000.0,
            price in 0.1f64..5000.0,
        ) {
            let obs = PriceObservation::new(mode, reference, price);
            let first = calculate_all_prices(&obs);
            prop_assert_eq!(first.len(), mode.units().len());
            prop_assert_eq!(first, calculate_all_prices(&obs));
        }
    }
}
