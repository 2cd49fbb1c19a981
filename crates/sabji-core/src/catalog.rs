//! # Catalog
//!
//! The fixed list of items a shopper can pick from, with English, Hindi and
//! Marathi names.
//!
//! ```text
//! ┌──────────────┬────────────────────┬───────┐
//! │ Category     │ Sub category       │ Items │
//! ├──────────────┼────────────────────┼───────┤
//! │ VegFruits    │ Vegetables         │   50  │
//! │              │ Fruits             │   20  │
//! │ Dairy        │ -                  │    9  │
//! │ Kirana       │ Grains .. DryFruits│   40  │
//! └──────────────┴────────────────────┴───────┘
//! ```
//!
//! [`Catalog::standard`] builds the index once per process; afterwards it is
//! read-only and shared freely between threads.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::types::{Category, Mode, SubCategory};

// =============================================================================
// Catalog Entry
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Stable id such as "v1", "d3", "k22".
    pub id: String,
    pub name_en: String,
    pub name_hi: String,
    pub name_mr: String,
    pub category: Category,
    pub sub_category: Option<SubCategory>,
}

impl CatalogEntry {
    /// The mode this item opens in when first priced.
    #[inline]
    pub fn default_mode(&self) -> Mode {
        Mode::default_for(self.category, self.sub_category)
    }

    /// Case-insensitive match on the English name, substring match on the
    /// Hindi and Marathi names. `needle` must already be lowercased.
    fn matches(&self, needle: &str) -> bool {
        self.name_en.to_lowercase().contains(needle)
            || self.name_hi.contains(needle)
            || self.name_mr.contains(needle)
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Catalog entries in display order plus an id index.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    by_id: HashMap<String, usize>,
}

static STANDARD: OnceLock<Catalog> = OnceLock::new();

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids.
    pub fn new(entries: Vec<CatalogEntry>) -> CoreResult<Self> {
        let mut by_id = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            if by_id.insert(entry.id.clone(), position).is_some() {
                return Err(CoreError::DuplicateCatalogId(entry.id.clone()));
            }
        }
        Ok(Catalog { entries, by_id })
    }

    /// The built-in catalog.
    pub fn standard() -> &'static Catalog {
        STANDARD.get_or_init(|| {
            let entries = seed_entries();
            let by_id = entries
                .iter()
                .enumerate()
                .map(|(position, entry)| (entry.id.clone(), position))
                .collect();
            Catalog { entries, by_id }
        })
    }

    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.by_id.get(id).map(|&position| &self.entries[position])
    }

    /// Like [`Catalog::get`] but reports a missing id as an error.
    pub fn require(&self, id: &str) -> CoreResult<&CatalogEntry> {
        self.get(id)
            .ok_or_else(|| CoreError::ItemNotFound(id.to_string()))
    }

    pub fn category_of(&self, id: &str) -> Option<Category> {
        self.get(id).map(|entry| entry.category)
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter().filter(move |e| e.category == category)
    }

    pub fn by_sub_category(
        &self,
        sub_category: SubCategory,
    ) -> impl Iterator<Item = &CatalogEntry> {
        self.entries
            .iter()
            .filter(move |e| e.sub_category == Some(sub_category))
    }

    /// Items whose name contains `query`, optionally within one category.
    ///
    /// An empty query returns everything in scope.
    pub fn search(&self, query: &str, category: Option<Category>) -> Vec<&CatalogEntry> {
        let needle = query.trim().to_lowercase();
        self.entries
            .iter()
            .filter(|e| category.map_or(true, |c| e.category == c))
            .filter(|e| needle.is_empty() || e.matches(&needle))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }
}

// =============================================================================
// Seed Data
// =============================================================================

struct Seed {
    id: &'static str,
    en: &'static str,
    hi: &'static str,
    mr: &'static str,
}

const fn seed(id: &'static str, en: &'static str, hi: &'static str, mr: &'static str) -> Seed {
    Seed { id, en, hi, mr }
}

const GROUPS: &[(Category, Option<SubCategory>, &[Seed])] = &[
    (Category::VegFruits, Some(SubCategory::Vegetables), VEGETABLES),
    (Category::VegFruits, Some(SubCategory::Fruits), FRUITS),
    (Category::Dairy, None, DAIRY),
    (Category::Kirana, Some(SubCategory::KiranaGrains), KIRANA_GRAINS),
    (Category::Kirana, Some(SubCategory::KiranaPulses), KIRANA_PULSES),
    (Category::Kirana, Some(SubCategory::KiranaSweeteners), KIRANA_SWEETENERS),
    (Category::Kirana, Some(SubCategory::KiranaOils), KIRANA_OILS),
    (Category::Kirana, Some(SubCategory::KiranaBeverages), KIRANA_BEVERAGES),
    (Category::Kirana, Some(SubCategory::KiranaBreakfast), KIRANA_BREAKFAST),
    (Category::Kirana, Some(SubCategory::KiranaSpices), KIRANA_SPICES),
    (Category::Kirana, Some(SubCategory::KiranaDryFruits), KIRANA_DRY_FRUITS),
];

fn seed_entries() -> Vec<CatalogEntry> {
    GROUPS
        .iter()
        .flat_map(|(category, sub_category, seeds)| {
            seeds.iter().map(move |s| CatalogEntry {
                id: s.id.to_string(),
                name_en: s.en.to_string(),
                name_hi: s.hi.to_string(),
                name_mr: s.mr.to_string(),
                category: *category,
                sub_category: *sub_category,
            })
        })
        .collect()
}

const VEGETABLES: &[Seed] = &[
    seed("v1", "Tomato", "टमाटर", "टोमॅटो"),
    seed("v2", "Onion", "प्याज", "कांदा"),
    seed("v3", "Potato", "आलू", "बटाटा"),
    seed("v4", "Brinjal", "बैंगन", "वांगे"),
    seed("v5", "Cauliflower", "फूल गोभी", "फुलकोबी"),
    seed("v6", "Cabbage", "पत्ता गोभी", "कोबी"),
    seed("v7", "Carrot", "गाजर", "गाजर"),
    seed("v8", "Capsicum", "शिमला मिर्च", "ढोबळी मिरची"),
    seed("v9", "Green Chilli", "हरी मिर्च", "हिरवी मिरची"),
    seed("v10", "Cucumber", "खीरा", "काकडी"),
    seed("v11", "Lady Finger", "भिंडी", "भेंडी"),
    seed("v12", "Pumpkin", "कद्दू", "भोपळा"),
    seed("v13", "Bottle Gourd", "लौकी", "दुधी भोपळा"),
    seed("v14", "Bitter Gourd", "करेला", "कारले"),
    seed("v15", "Ridge Gourd", "तोरई", "दोडका"),
    seed("v16", "Sponge Gourd", "नेनुआ", "घोसाळे"),
    seed("v17", "Drumstick", "सहजन", "शेवग्याची शेंग"),
    seed("v18", "Radish", "मूली", "मुळा"),
    seed("v19", "Beetroot", "चुकंदर", "बीट"),
    seed("v20", "Sweet Potato", "शकरकंद", "रताळे"),
    seed("v21", "Garlic", "लहसुन", "लसूण"),
    seed("v22", "Ginger", "अदरक", "आले"),
    seed("v23", "Green Peas", "मटर", "वाटाणा"),
    seed("v24", "French Beans", "फ्रेंच बीन्स", "फरसबी"),
    seed("v25", "Cluster Beans", "गवार", "गवार"),
    seed("v26", "Spinach", "पालक", "पालक"),
    seed("v27", "Fenugreek Leaves", "मेथी", "मेथी"),
    seed("v28", "Coriander", "धनिया", "कोथिंबीर"),
    seed("v29", "Spring Onion", "हरा प्याज", "पातळ कांदा"),
    seed("v30", "Raw Banana", "कच्चा केला", "कच्ची केळी"),
    seed("v31", "Ivy Gourd", "कुंदरू", "तोंडली"),
    seed("v32", "Snake Gourd", "चिचिंडा", "पडवळ"),
    seed("v33", "Ash Gourd", "पेठा", "कोहळा"),
    seed("v34", "Turnip", "शलगम", "नवलकोल"),
    seed("v35", "Colocasia", "अरबी", "अळू"),
    seed("v36", "Green Papaya", "कच्चा पपीता", "कच्ची पपई"),
    seed("v37", "Broad Beans", "सेम", "पावटा"),
    seed("v38", "Zucchini", "तोरी", "झुकीनी"),
    seed("v39", "Mushroom", "मशरूम", "अळिंबी"),
    seed("v40", "Corn", "मक्का", "मका"),
    seed("v41", "Green Amaranth", "चौलाई", "तांदुळजा"),
    seed("v42", "Red Amaranth", "लाल चौलाई", "लाल तांदुळजा"),
    seed("v43", "Lotus Stem", "कमल ककड़ी", "कमळ काडी"),
    seed("v44", "Raw Jackfruit", "कटहल", "फणस"),
    seed("v45", "Kohlrabi", "गांठ गोभी", "नवलकोल"),
    seed("v46", "Mint Leaves", "पुदीना", "पुदिना"),
    seed("v47", "Curry Leaves", "कड़ी पत्ता", "कढीपत्ता"),
    seed("v48", "Green Sorrel", "अम्बाडी", "आंबाडी"),
    seed("v49", "Elephant Yam", "सुरन", "सुरण"),
    seed("v50", "Chow Chow", "चायोटे", "चौचौ"),
];

const FRUITS: &[Seed] = &[
    seed("f1", "Apple", "सेब", "सफरचंद"),
    seed("f2", "Banana", "केला", "केळी"),
    seed("f3", "Mango", "आम", "आंबा"),
    seed("f4", "Orange", "संतरा", "संत्रा"),
    seed("f5", "Sweet Lime", "मौसंबी", "मोसंबी"),
    seed("f6", "Grapes", "अंगूर", "द्राक्ष"),
    seed("f7", "Papaya", "पपीता", "पपई"),
    seed("f8", "Pomegranate", "अनार", "डाळिंब"),
    seed("f9", "Guava", "अमरूद", "पेरू"),
    seed("f10", "Watermelon", "तरबूज", "कलिंगड"),
    seed("f11", "Muskmelon", "खरबूजा", "खरबूज"),
    seed("f12", "Pineapple", "अनानास", "अननस"),
    seed("f13", "Strawberry", "स्ट्रॉबेरी", "स्ट्रॉबेरी"),
    seed("f14", "Chikoo", "चीकू", "चिकू"),
    seed("f15", "Custard Apple", "सीताफल", "सीताफळ"),
    seed("f16", "Jamun", "जामुन", "जांभूळ"),
    seed("f17", "Litchi", "लीची", "लिची"),
    seed("f18", "Peach", "आड़ू", "पीच"),
    seed("f19", "Pear", "नाशपाती", "नाशपाती"),
    seed("f20", "Plum", "आलूबुखारा", "आलूबुखारा"),
];

const DAIRY: &[Seed] = &[
    seed("d1", "Milk", "दूध", "दूध"),
    seed("d2", "Curd", "दही", "दही"),
    seed("d3", "Paneer", "पनीर", "पनीर"),
    seed("d4", "Butter", "मक्खन", "लोणी"),
    seed("d5", "Ghee", "घी", "तूप"),
    seed("d6", "Cheese", "चीज़", "चीज"),
    seed("d7", "Cream", "मलाई", "साई"),
    seed("d8", "Buttermilk", "छाछ", "ताक"),
    seed("d9", "Condensed Milk", "कंडेंस्ड मिल्क", "कंडेन्स्ड दूध"),
];

const KIRANA_GRAINS: &[Seed] = &[
    seed("k1", "Rice", "चावल", "तांदूळ"),
    seed("k2", "Basmati Rice", "बासमती चावल", "बासमती तांदूळ"),
    seed("k3", "Wheat", "गेहूं", "गहू"),
    seed("k4", "Atta", "आटा", "पीठ"),
    seed("k5", "Maida", "मैदा", "मैदा"),
];

const KIRANA_PULSES: &[Seed] = &[
    seed("k6", "Toor Dal", "तूर दाल", "तूर डाळ"),
    seed("k7", "Moong Dal", "मूंग दाल", "मूग डाळ"),
    seed("k8", "Masoor Dal", "मसूर दाल", "मसूर डाळ"),
    seed("k9", "Chana Dal", "चना दाल", "चना डाळ"),
    seed("k10", "Urad Dal", "उड़द दाल", "उडीद डाळ"),
];

const KIRANA_SWEETENERS: &[Seed] = &[
    seed("k11", "Sugar", "चीनी", "साखर"),
    seed("k12", "Jaggery", "गुड़", "गूळ"),
];

const KIRANA_OILS: &[Seed] = &[
    seed("k13", "Salt", "नमक", "मीठ"),
    seed("k14", "Cooking Oil", "तेल", "तेल"),
    seed("k15", "Mustard Oil", "सरसों तेल", "मोहरी तेल"),
    seed("k16", "Groundnut Oil", "मूंगफली तेल", "शेंगदाणा तेल"),
];

const KIRANA_BEVERAGES: &[Seed] = &[
    seed("k17", "Tea", "चाय", "चहा"),
    seed("k18", "Coffee", "कॉफी", "कॉफी"),
];

const KIRANA_BREAKFAST: &[Seed] = &[
    seed("k19", "Poha", "पोहा", "पोहे"),
    seed("k20", "Rava", "सूजी", "रवा"),
    seed("k21", "Besan", "बेसन", "बेसन"),
];

const KIRANA_SPICES: &[Seed] = &[
    seed("k22", "Sooji", "सूजी", "रवा"),
    seed("k23", "Spices Mix", "मसाले", "मसाले"),
    seed("k24", "Red Chilli Powder", "लाल मिर्च", "लाल तिखट"),
    seed("k25", "Turmeric", "हल्दी", "हळद"),
    seed("k26", "Cumin Seeds", "जीरा", "जिरे"),
    seed("k27", "Mustard Seeds", "राई", "मोहरी"),
    seed("k28", "Tamarind", "इमली", "चिंच"),
    seed("k33", "Red Chilli", "लाल मिर्च", "लाल मिरची"),
    seed("k34", "Coriander Powder", "धनिया पाउडर", "कोथिंबीर पावडर"),
    seed("k35", "Red Chilli Flakes", "लाल मिर्च के टुकड़े", "लाल मिरचीचे तुकडे"),
    seed("k36", "Fenugreek Seeds", "मेथी के बीज", "मेथीची दाणी"),
    seed("k37", "Black Pepper", "काली मिर्च", "काळी मिरी"),
    seed("k38", "Clove", "लौंग", "लवंग"),
    seed("k39", "Cinnamon", "दालचीनी", "दालचिनी"),
    seed("k40", "Cardamom", "इलायची", "वेलची"),
];

const KIRANA_DRY_FRUITS: &[Seed] = &[
    seed("k29", "Dry Coconut", "सूखा नारियल", "सुकं खोबरं"),
    seed("k30", "Dates", "खजूर", "खजूर"),
    seed("k31", "Cashew", "काजू", "काजू"),
    seed("k32", "Raisins", "किशमिश", "मनुका"),
];

// =============================================================================
// Unit Tests
// =============================================================================
