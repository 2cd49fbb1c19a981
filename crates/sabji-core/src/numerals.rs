//! # Spoken Numerals
//!
//! Renders rupee amounts as the words a shopkeeper says out loud, in Hindi
//! and Marathi.
//!
//! ## Composition
//! ```text
//! ┌───────────────┬───────────────────────────┬───────────────────────────┐
//! │  Whole rupees │  Hindi                    │  Marathi                  │
//! ├───────────────┼───────────────────────────┼───────────────────────────┤
//! │  0 ..= 100    │  table lookup             │  table lookup             │
//! │  101 ..= 999  │  "<h> सौ <rest>"          │  "<h>शे <rest>"           │
//! │               │  (h = 1 → "सौ")           │  (h = 1 → "शंभर")         │
//! │  ≥ 1000       │  digit string             │  digit string             │
//! └───────────────┴───────────────────────────┴───────────────────────────┘
//! ```
//!
//! Numbers 0..=100 are irregular in both languages, so they come straight
//! from a 101-entry table. Paise are never spoken.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::format_price;

/// First whole-rupee amount that is no longer rendered in words.
pub const WORD_LIMIT: u64 = 1000;

/// Appended to the words by [`spoken_price`].
pub const RUPEES_WORD: &str = "रुपये";

// =============================================================================
// Lookup Tables
// =============================================================================

const HINDI: [&str; 101] = [
    "शून्य", "एक", "दो", "तीन", "चार",
    "पाँच", "छह", "सात", "आठ", "नौ",
    "दस", "ग्यारह", "बारह", "तेरह", "चौदह",
    "पन्द्रह", "सोलह", "सत्रह", "अठारह", "उन्नीस",
    "बीस", "इक्कीस", "बाईस", "तेईस", "चौबीस",
    "पच्चीस", "छब्बीस", "सत्ताईस", "अट्ठाईस", "उनतीस",
    "तीस", "इकतीस", "बतीस", "तैंतीस", "चौतीस",
    "पैंतीस", "छतीस", "सैंतीस", "अड़तीस", "उनतालीस",
    "चालीस", "इकतालीस", "बयालीस", "तैंतालीस", "चौवालीस",
    "पैंतालीस", "छियालीस", "सैंतालीस", "अड़तालीस", "उनचास",
    "पचास", "इक्यावन", "बावन", "तिरेपन", "चौवन",
    "पचपन", "छप्पन", "सत्तावन", "अट्ठावन", "उनसठ",
    "साठ", "इकसठ", "बासठ", "तिरेसठ", "चौसठ",
    "पैंसठ", "छियासठ", "सड़सठ", "अड़सठ", "उनहत्तर",
    "सत्तर", "इकहत्तर", "बहत्तर", "तिहत्तर", "चौहत्तर",
    "पचहत्तर", "छिहत्तर", "सत्तहत्तर", "अठहत्तर", "उनासी",
    "अस्सी", "इक्यासी", "बयासी", "तिरासी", "चौरासी",
    "पचासी", "छियासी", "सत्तासी", "अट्ठासी", "नवासी",
    "नब्बे", "इक्यानवे", "बानवे", "तिरानवे", "चौरानवे",
    "पचानवे", "छियानवे", "सत्तानवे", "अट्ठानवे", "निन्यानवे",
    "सौ",
];

const MARATHI: [&str; 101] = [
    "शून्या", "एक", "दोन", "तीन", "चार",
    "पाच", "सहा", "सात", "आठ", "नव",
    "दहा", "अकरा", "बारा", "तेरा", "चौदा",
    "पंधरा", "सोळा", "सत्रा", "अठरा", "एकोणीस",
    "वीस", "एकवीस", "बावीस", "तेवीस", "चोवीस",
    "पंचीस", "शेवीस", "सत्तावीस", "अठ्तावीस", "एकोणतीस",
    "तीस", "एकतीस", "बतीस", "तेतीस", "चौतीस",
    "पंचतीस", "छतीस", "सैंतीस", "अठतीस", "एकोणचाळीस",
    "चाळीस", "एकताळीस", "बेचाळीस", "तेचाळीस", "चौचाळीस",
    "पंचेचाळीस", "शेचाळीस", "सैंताळीस", "अठेचाळीस", "एकोणन्नवेचाळीस",
    "पन्नास", "एक्यावन्नवे", "बावन्नवे", "त्रेपन्नवे", "चौवन्नवे",
    "पंचावन्नवे", "शावन्नवे", "सत्तावन्नवे", "अठ्यावन्नवे", "एकोणसठ",
    "साठ", "एकसठ", "बासठ", "त्रेसठ", "चौसठ",
    "पसठ", "शेसठ", "सत्तौसठ", "अठ्सठ", "एकोणहत्तर",
    "सत्तर", "एकहत्तर", "बहत्तर", "त्रेहत्तर", "चौहत्तर",
    "पंचहत्तर", "शेहत्तर", "सत्त्तहत्तर", "अठ्हत्तर", "एकोणासी",
    "अस्सी", "एक्यासी", "बयासी", "त्र्यासी", "चौऱ्यासी",
    "पंच्यासी", "शेयासी", "सत्त्यासी", "अठ्यासी", "एकोणनव्वे",
    "नव्वे", "एक्याणनव्वे", "बयाणनव्वे", "त्रयाणनव्वे", "चौऱ्याणनव्वे",
    "पंच्याणनव्वे", "शेणनव्वे", "सत्त्याणनव्वे", "अठ्याणनव्वे", "नव्याणनव्वे",
    "शंभर",
];

// =============================================================================
// Language
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Hindi,
    Marathi,
}

impl Language {
    fn table(&self) -> &'static [&'static str; 101] {
        match self {
            Language::Hindi => &HINDI,
            Language::Marathi => &MARATHI,
        }
    }

    fn hundreds(&self, digit: u64) -> String {
        let table = self.table();
        match (self, digit) {
            (Language::Hindi, 1) => "सौ".to_string(),
            (Language::Marathi, 1) => "शंभर".to_string(),
            (Language::Hindi, d) => format!("{} सौ", table[d as usize]),
            (Language::Marathi, d) => format!("{}शे", table[d as usize]),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Hindi => f.write_str("hindi"),
            Language::Marathi => f.write_str("marathi"),
        }
    }
}

// =============================================================================
// Translation
// =============================================================================

/// The same amount in both languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Words {
    pub hi: String,
    pub mr: String,
}

/// An amount ready to be read out: numeric display plus words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SpokenPrice {
    /// e.g. "₹40.00"
    pub numeric: String,
    /// e.g. "चालीस रुपये"
    pub hindi: String,
    /// e.g. "चाळीस रुपये"
    pub marathi: String,
}

/// Words for a whole-rupee count in one language.
pub fn words_in(language: Language, whole: u64) -> String {
    let table = language.table();

    if whole <= 100 {
        return table[whole as usize].to_string();
    }
    if whole >= WORD_LIMIT {
        return whole.to_string();
    }

    let hundreds = language.hundreds(whole / 100);
    match whole % 100 {
        0 => hundreds,
        rest => format!("{} {}", hundreds, table[rest as usize]),
    }
}

/// Words for the integer part of `amount` in both languages.
///
/// Callers validate with [`crate::validation::validate_amount`] first. Negative
/// and NaN amounts read as zero, and anything past the word tables reads as
/// its own digits, so this never panics.
pub fn to_words(amount: f64) -> Words {
    let floor = amount.floor();
    if floor >= WORD_LIMIT as f64 {
        // Formatted from the float so amounts past u64 keep their digits.
        let digits = format!("{:.0}", floor);
        return Words {
            hi: digits.clone(),
            mr: digits,
        };
    }

    // NaN and negatives saturate to 0.
    let whole = floor as u64;
    Words {
        hi: words_in(Language::Hindi, whole),
        mr: words_in(Language::Marathi, whole),
    }
}

/// Full spoken form of a price, e.g. `₹40.00` / "चालीस रुपये".
pub fn spoken_price(amount: f64) -> SpokenPrice {
    let words = to_words(amount);
    SpokenPrice {
        numeric: format_price(amount),
        hindi: format!("{} {}", words.hi, RUPEES_WORD),
        marathi: format!("{} {}", words.mr, RUPEES_WORD),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Spoken forms for 0 to 100 as shoppers say them: (n, hindi, marathi).
    const SPOKEN_0_TO_100: [(u64, &str, &str); 101] = [
        (0, "शून्य", "शून्या"),
        (1, "एक", "एक"),
        (2, "दो", "दोन"),
        (3, "तीन", "तीन"),
        (4, "चार", "चार"),
        (5, "पाँच", "पाच"),
        (6, "छह", "सहा"),
        (7, "सात", "सात"),
        (8, "आठ", "आठ"),
        (9, "नौ", "नव"),
        (10, "दस", "दहा"),
        (11, "ग्यारह", "अकरा"),
        (12, "बारह", "बारा"),
        (13, "तेरह", "तेरा"),
        (14, "चौदह", "चौदा"),
        (15, "पन्द्रह", "पंधरा"),
        (16, "सोलह", "सोळा"),
        (17, "सत्रह", "सत्रा"),
        (18, "अठारह", "अठरा"),
        (19, "उन्नीस", "एकोणीस"),
        (20, "बीस", "वीस"),
        (21, "इक्कीस", "एकवीस"),
        (22, "बाईस", "बावीस"),
        (23, "तेईस", "तेवीस"),
        (24, "चौबीस", "चोवीस"),
        (25, "पच्चीस", "पंचीस"),
        (26, "छब्बीस", "शेवीस"),
        (27, "सत्ताईस", "सत्तावीस"),
        (28, "अट्ठाईस", "अठ्तावीस"),
        (29, "उनतीस", "एकोणतीस"),
        (30, "तीस", "तीस"),
        (31, "इकतीस", "एकतीस"),
        (32, "बतीस", "बतीस"),
        (33, "तैंतीस", "तेतीस"),
        (34, "चौतीस", "चौतीस"),
        (35, "पैंतीस", "पंचतीस"),
        (36, "छतीस", "छतीस"),
        (37, "सैंतीस", "सैंतीस"),
        (38, "अड़तीस", "अठतीस"),
        (39, "उनतालीस", "एकोणचाळीस"),
        (40, "चालीस", "चाळीस"),
        (41, "इकतालीस", "एकताळीस"),
        (42, "बयालीस", "बेचाळीस"),
        (43, "तैंतालीस", "तेचाळीस"),
        (44, "चौवालीस", "चौचाळीस"),
        (45, "पैंतालीस", "पंचेचाळीस"),
        (46, "छियालीस", "शेचाळीस"),
        (47, "सैंतालीस", "सैंताळीस"),
        (48, "अड़तालीस", "अठेचाळीस"),
        (49, "उनचास", "एकोणन्नवेचाळीस"),
        (50, "पचास", "पन्नास"),
        (51, "इक्यावन", "एक्यावन्नवे"),
        (52, "बावन", "बावन्नवे"),
        (53, "तिरेपन", "त्रेपन्नवे"),
        (54, "चौवन", "चौवन्नवे"),
        (55, "पचपन", "पंचावन्नवे"),
        (56, "छप्पन", "शावन्नवे"),
        (57, "सत्तावन", "सत्तावन्नवे"),
        (58, "अट्ठावन", "अठ्यावन्नवे"),
        (59, "उनसठ", "एकोणसठ"),
        (60, "साठ", "साठ"),
        (61, "इकसठ", "एकसठ"),
        (62, "बासठ", "बासठ"),
        (63, "तिरेसठ", "त्रेसठ"),
        (64, "चौसठ", "चौसठ"),
        (65, "पैंसठ", "पसठ"),
        (66, "छियासठ", "शेसठ"),
        (67, "सड़सठ", "सत्तौसठ"),
        (68, "अड़सठ", "अठ्सठ"),
        (69, "उनहत्तर", "एकोणहत्तर"),
        (70, "सत्तर", "सत्तर"),
        (71, "इकहत्तर", "एकहत्तर"),
        (72, "बहत्तर", "बहत्तर"),
        (73, "तिहत्तर", "त्रेहत्तर"),
        (74, "चौहत्तर", "चौहत्तर"),
        (75, "पचहत्तर", "पंचहत्तर"),
        (76, "छिहत्तर", "शेहत्तर"),
        (77, "सत्तहत्तर", "सत्त्तहत्तर"),
        (78, "अठहत्तर", "अठ्हत्तर"),
        (79, "उनासी", "एकोणासी"),
        (80, "अस्सी", "अस्सी"),
        (81, "इक्यासी", "एक्यासी"),
        (82, "बयासी", "बयासी"),
        (83, "तिरासी", "त्र्यासी"),
        (84, "चौरासी", "चौऱ्यासी"),
        (85, "पचासी", "पंच्यासी"),
        (86, "छियासी", "शेयासी"),
        (87, "सत्तासी", "सत्त्यासी"),
        (88, "अट्ठासी", "अठ्यासी"),
        (89, "नवासी", "एकोणनव्वे"),
        (90, "नब्बे", "नव्वे"),
        (91, "इक्यानवे", "एक्याणनव्वे"),
        (92, "बानवे", "बयाणनव्वे"),
        (93, "तिरानवे", "त्रयाणनव्वे"),
        (94, "चौरानवे", "चौऱ्याणनव्वे"),
        (95, "पचानवे", "पंच्याणनव्वे"),
        (96, "छियानवे", "शेणनव्वे"),
        (97, "सत्तानवे", "सत्त्याणनव्वे"),
        (98, "अट्ठानवे", "अठ्याणनव्वे"),
        (99, "निन्यानवे", "नव्याणनव्वे"),
        (100, "सौ", "शंभर"),
    ];

    #[test]
    fn test_zero() {
        let words = to_words(0.0);
        assert_eq!(words.hi, "शून्य");
        assert_eq!(words.mr, "शून्या");
    }

    #[test]
    fn test_every_word_up_to_hundred() {
        for (n, hi, mr) in SPOKEN_0_TO_100 {
            assert_eq!(words_in(Language::Hindi, n), hi, "hindi {}", n);
            assert_eq!(words_in(Language::Marathi, n), mr, "marathi {}", n);
        }
    }

    #[test]
    fn test_irregular_forms() {
        assert_eq!(words_in(Language::Hindi, 11), "ग्यारह");
        assert_eq!(words_in(Language::Hindi, 21), "इक्कीस");
        assert_eq!(words_in(Language::Hindi, 49), "उनचास");
        assert_eq!(words_in(Language::Hindi, 71), "इकहत्तर");
        assert_eq!(words_in(Language::Hindi, 79), "उनासी");
        assert_eq!(words_in(Language::Marathi, 49), "एकोणन्नवेचाळीस");
        assert_eq!(words_in(Language::Marathi, 99), "नव्याणनव्वे");
    }

    #[test]
    fn test_table_boundaries() {
        assert_eq!(words_in(Language::Hindi, 40), "चालीस");
        assert_eq!(words_in(Language::Marathi, 40), "चाळीस");
        assert_eq!(words_in(Language::Hindi, 60), "साठ");
        assert_eq!(words_in(Language::Marathi, 90), "नव्वे");
        assert_eq!(words_in(Language::Hindi, 100), "सौ");
        assert_eq!(words_in(Language::Marathi, 100), "शंभर");
    }

    #[test]
    fn test_fraction_is_dropped() {
        let words = to_words(62.99);
        assert_eq!(words.hi, "बासठ");
        assert_eq!(words.mr, "बासठ");
    }

    #[test]
    fn test_hundreds_composition() {
        assert_eq!(words_in(Language::Hindi, 150), "सौ पचास");
        assert_eq!(words_in(Language::Marathi, 150), "शंभर पन्नास");
        assert_eq!(words_in(Language::Hindi, 240), "दो सौ चालीस");
        assert_eq!(words_in(Language::Marathi, 240), "दोनशे चाळीस");
        assert_eq!(words_in(Language::Hindi, 500), "पाँच सौ");
        assert_eq!(words_in(Language::Marathi, 500), "पाचशे");
        assert_eq!(words_in(Language::Hindi, 999), "नौ सौ निन्यानवे");
    }

    #[test]
    fn test_beyond_limit_is_digits() {
        assert_eq!(words_in(Language::Hindi, 1000), "1000");
        assert_eq!(words_in(Language::Marathi, 12345), "12345");
    }

    #[test]
    fn test_degenerate_input_does_not_panic() {
        assert_eq!(to_words(-5.0).hi, "शून्य");
        assert_eq!(to_words(f64::NAN).mr, "शून्या");
        assert_eq!(to_words(f64::INFINITY).hi, "inf");
    }

    #[test]
    fn test_huge_amounts_keep_their_digits() {
        let words = to_words(1e20);
        assert_eq!(words.hi, "100000000000000000000");
        assert_eq!(words.mr, "100000000000000000000");
        assert_eq!(to_words(1234.75).hi, "1234");
    }

    #[test]
    fn test_spoken_price() {
        let spoken = spoken_price(40.0);
        assert_eq!(spoken.numeric, "₹40.00");
        assert_eq!(spoken.hindi, "चालीस रुपये");
        assert_eq!(spoken.marathi, "चाळीस रुपये");
    }

    proptest! {
        #[test]
        fn prop_hundreds_end_with_remainder(n in 101u64..1000) {
            let rest = n % 100;
            let hi = words_in(Language::Hindi, n);
            let mr = words_in(Language::Marathi, n);
            if rest == 0 {
                prop_assert!(hi.ends_with("सौ"));
                prop_assert!(mr.ends_with("शे") || mr == "शंभर");
            } else {
                let (_, hi_rest, mr_rest) = SPOKEN_0_TO_100[rest as usize];
                let hi_suffix = format!(" {}", hi_rest);
                let mr_suffix = format!(" {}", mr_rest);
                prop_assert!(hi.ends_with(&hi_suffix));
                prop_assert!(mr.ends_with(&mr_suffix));
            }
        }
    }
}
