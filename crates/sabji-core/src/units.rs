//! Canonical quantity tables, one per [`Mode`].
//!
//! These are the quantities a shopper actually asks for at a market stall.
//! Every table is ascending by magnitude and fixed for the life of the process.

use crate::types::{Mode, QuantityUnit};

/// Traditional weights, in grams.
pub static WEIGHT_UNITS: [QuantityUnit; 7] = [
    QuantityUnit::named(62.5, "Adha Chatak", "आधा चटक", "अर्धा छटक"),
    QuantityUnit::named(125.0, "1 Chatak", "एक चटक", "एक छटक"),
    QuantityUnit::named(250.0, "Pav", "पाव", "पाव"),
    QuantityUnit::named(375.0, "Dedh Pav", "डेढ़ पाव", "डेढ पाव"),
    QuantityUnit::named(500.0, "Half Kilo", "आधा किलो", "अर्धा किलो"),
    QuantityUnit::named(750.0, "Paune Kilo", "पौने किलो", "पावणे किलो"),
    QuantityUnit::named(1000.0, "1 Kilo", "एक किलो", "एक किलो"),
];

/// Dairy volumes, in milliliters.
pub static LITER_UNITS: [QuantityUnit; 4] = [
    QuantityUnit::named(250.0, "250 ml", "250 मिली", "250 मिली"),
    QuantityUnit::named(500.0, "500 ml", "500 मिली", "500 मिली"),
    QuantityUnit::named(750.0, "750 ml", "750 मिली", "750 मिली"),
    QuantityUnit::named(1000.0, "1 Liter", "1 लीटर", "1 लिटर"),
];

pub static PACKET_UNITS: [QuantityUnit; 5] = [
    QuantityUnit::named(1.0, "1 Packet", "1 पैकेट", "1 पॅकेट"),
    QuantityUnit::named(2.0, "2 Packets", "2 पैकेट", "2 पॅकेट"),
    QuantityUnit::named(3.0, "3 Packets", "3 पैकेट", "3 पॅकेट"),
    QuantityUnit::named(4.0, "4 Packets", "4 पैकेट", "4 पॅकेट"),
    QuantityUnit::named(5.0, "5 Packets", "5 पैकेट", "5 पॅकेट"),
];

/// Dozen fractions with their piece counts.
pub static DOZEN_UNITS: [QuantityUnit; 9] = [
    QuantityUnit::counted(0.25, 3, "Quarter Dozen", "चौथाई दर्जन", "पाव डझन"),
    QuantityUnit::counted(0.5, 6, "Half Dozen", "आधा दर्जन", "अर्धा डझन"),
    QuantityUnit::counted(1.0, 12, "1 Dozen", "एक दर्जन", "एक डझन"),
    QuantityUnit::counted(1.5, 18, "1½ Dozen", "डेढ़ दर्जन", "दीड डझन"),
    QuantityUnit::counted(2.0, 24, "2 Dozens", "दो दर्जन", "दोन डझन"),
    QuantityUnit::counted(2.5, 30, "2½ Dozens", "ढाई दर्जन", "अडीच डझन"),
    QuantityUnit::counted(3.0, 36, "3 Dozens", "तीन दर्जन", "तीन डझन"),
    QuantityUnit::counted(4.0, 48, "4 Dozens", "चार दर्जन", "चार डझन"),
    QuantityUnit::counted(5.0, 60, "5 Dozens", "पाँच दर्जन", "पाच डझन"),
];

/// The canonical table for `mode`.
pub fn table(mode: Mode) -> &'static [QuantityUnit] {
    match mode {
        Mode::Weight => &WEIGHT_UNITS,
        Mode::Liter => &LITER_UNITS,
        Mode::Packet => &PACKET_UNITS,
        Mode::Dozen => &DOZEN_UNITS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_strictly_ascending() {
        for mode in Mode::ALL {
            let units = table(mode);
            assert!(!units.is_empty(), "{mode} table is empty");
            for pair in units.windows(2) {
                assert!(
                    pair[0].magnitude < pair[1].magnitude,
                    "{mode} table out of order at {}",
                    pair[1].display_name
                );
            }
        }
    }

    #[test]
    fn test_piece_count_only_on_dozens() {
        for unit in DOZEN_UNITS.iter() {
            let expected = (unit.magnitude * 12.0) as u32;
            assert_eq!(unit.piece_count, Some(expected));
        }
        for mode in [Mode::Weight, Mode::Liter, Mode::Packet] {
            assert!(table(mode).iter().all(|u| u.piece_count.is_none()));
        }
    }

    #[test]
    fn test_named_units() {
        assert_eq!(&*table(Mode::Weight)[2].display_name, "Pav");
        assert_eq!(table(Mode::Dozen)[1].piece_count, Some(6));
        assert_eq!(table(Mode::Liter)[0].magnitude, 250.0);
    }
}
