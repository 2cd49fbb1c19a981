//! # Domain Types
//!
//! Core domain types used throughout SabjiRate.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ PriceObservation│   │  QuantityUnit   │   │    PriceRow     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  reference qty  │──►│  magnitude      │──►│  unit           │       │
//! │  │  price          │   │  name en/hi/mr  │   │  price (f64)    │       │
//! │  │  mode           │   │  piece_count    │   │  words hi/mr    │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Category     │   │      Mode       │   │  ShoppingList   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  VegFruits      │   │  Weight (g)     │   │  id (UUID)      │       │
//! │  │  Dairy          │   │  Liter (ml)     │   │  status         │       │
//! │  │  Kirana         │   │  Packet, Dozen  │   │  items          │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All pricing types are plain values: constructed fresh per calculation,
//! compared structurally, never mutated behind the caller's back.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::catalog::CatalogEntry;
use crate::engine;
use crate::error::ValidationError;
use crate::money::Money;
use crate::numerals;
use crate::validation;

// =============================================================================
// Category
// =============================================================================

/// Top-level catalog grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// Fresh produce: vegetables and fruits.
    VegFruits,
    /// Milk and milk products. Always sold by volume.
    Dairy,
    /// Neighbourhood grocery goods.
    Kirana,
}

impl Category {
    /// Heading shown in the UI.
    pub fn title(&self) -> &'static str {
        match self {
            Category::VegFruits => "Fruits & Vegetables",
            Category::Dairy => "Milk & Dairy",
            Category::Kirana => "Kirana / Grocery",
        }
    }

    #[inline]
    pub fn is_dairy(&self) -> bool {
        matches!(self, Category::Dairy)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "veg_fruits" | "vegetables" | "fruits" | "produce" => Ok(Category::VegFruits),
            "dairy" => Ok(Category::Dairy),
            "kirana" | "grocery" => Ok(Category::Kirana),
            _ => Err(ValidationError::NotAllowed {
                field: "category".to_string(),
                allowed: vec![
                    "veg_fruits".to_string(),
                    "dairy".to_string(),
                    "kirana".to_string(),
                ],
            }),
        }
    }
}

// =============================================================================
// Sub Category
// =============================================================================

/// Second-level grouping inside a category. Dairy has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubCategory {
    Vegetables,
    Fruits,
    KiranaGrains,
    KiranaPulses,
    KiranaSweeteners,
    KiranaOils,
    KiranaBeverages,
    KiranaBreakfast,
    KiranaSpices,
    KiranaDryFruits,
}

impl SubCategory {
    /// The category this subcategory belongs to.
    pub fn category(&self) -> Category {
        match self {
            SubCategory::Vegetables | SubCategory::Fruits => Category::VegFruits,
            _ => Category::Kirana,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SubCategory::Vegetables => "Vegetables",
            SubCategory::Fruits => "Fruits",
            SubCategory::KiranaGrains => "Grains",
            SubCategory::KiranaPulses => "Pulses",
            SubCategory::KiranaSweeteners => "Sweeteners",
            SubCategory::KiranaOils => "Oils",
            SubCategory::KiranaBeverages => "Beverages",
            SubCategory::KiranaBreakfast => "Breakfast",
            SubCategory::KiranaSpices => "Spices",
            SubCategory::KiranaDryFruits => "Dry Fruits",
        }
    }
}

// =============================================================================
// Mode
// =============================================================================

/// The sale-unit family an item is priced in.
///
/// ## Base Measures
/// ```text
/// ┌──────────┬──────────────┬──────────────────────────────────────────────┐
/// │  Mode    │ Base measure │ How the price is read                        │
/// ├──────────┼──────────────┼──────────────────────────────────────────────┤
/// │  Weight  │ grams        │ price of `reference_magnitude` grams         │
/// │  Liter   │ milliliters  │ price of `reference_magnitude` ml            │
/// │  Packet  │ packets      │ price of ONE packet                          │
/// │  Dozen   │ dozens       │ price of ONE dozen                           │
/// └──────────┴──────────────┴──────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Weight,
    Liter,
    Packet,
    Dozen,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::Weight, Mode::Liter, Mode::Packet, Mode::Dozen];

    /// Short label of the base measure.
    pub fn base_measure(&self) -> &'static str {
        match self {
            Mode::Weight => "g",
            Mode::Liter => "ml",
            Mode::Packet => "packet",
            Mode::Dozen => "dozen",
        }
    }

    /// Label of the unit `engine::rate` is expressed in.
    pub fn rate_unit(&self) -> &'static str {
        match self {
            Mode::Weight => "1 Kg",
            Mode::Liter => "1 Liter",
            Mode::Packet => "1 Packet",
            Mode::Dozen => "1 Dozen",
        }
    }

    /// The mode a freshly added item opens in.
    ///
    /// Fruits are bought by the dozen, dairy by the liter, everything
    /// else by weight.
    pub fn default_for(category: Category, sub_category: Option<SubCategory>) -> Mode {
        match (category, sub_category) {
            (Category::Dairy, _) => Mode::Liter,
            (_, Some(SubCategory::Fruits)) => Mode::Dozen,
            _ => Mode::Weight,
        }
    }

    /// The canonical quantity table for this mode.
    #[inline]
    pub fn units(&self) -> &'static [QuantityUnit] {
        crate::units::table(*self)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Weight => "weight",
            Mode::Liter => "liter",
            Mode::Packet => "packet",
            Mode::Dozen => "dozen",
        };
        f.write_str(name)
    }
}

impl FromStr for Mode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weight" | "kg" | "g" => Ok(Mode::Weight),
            "liter" | "litre" | "l" | "ml" => Ok(Mode::Liter),
            "packet" | "packets" => Ok(Mode::Packet),
            "dozen" | "dozens" => Ok(Mode::Dozen),
            _ => Err(ValidationError::NotAllowed {
                field: "mode".to_string(),
                allowed: Mode::ALL.iter().map(|m| m.to_string()).collect(),
            }),
        }
    }
}

// =============================================================================
// Measure Unit
// =============================================================================

/// Unit a shopper types a custom quantity in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum MeasureUnit {
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "kg")]
    Kilogram,
    #[serde(rename = "ml")]
    Milliliter,
    #[serde(rename = "L")]
    Liter,
}

impl MeasureUnit {
    /// Converts a value in this unit to the mode's base measure (g or ml).
    pub fn to_base(&self, value: f64) -> f64 {
        match self {
            MeasureUnit::Gram | MeasureUnit::Milliliter => value,
            MeasureUnit::Kilogram | MeasureUnit::Liter => value * 1000.0,
        }
    }

    /// The proportional mode this unit measures.
    pub fn mode(&self) -> Mode {
        match self {
            MeasureUnit::Gram | MeasureUnit::Kilogram => Mode::Weight,
            MeasureUnit::Milliliter | MeasureUnit::Liter => Mode::Liter,
        }
    }
}

impl FromStr for MeasureUnit {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "g" | "gm" | "gram" | "grams" => Ok(MeasureUnit::Gram),
            "kg" | "kilo" => Ok(MeasureUnit::Kilogram),
            "ml" => Ok(MeasureUnit::Milliliter),
            "L" | "l" | "liter" | "litre" => Ok(MeasureUnit::Liter),
            _ => Err(ValidationError::NotAllowed {
                field: "unit".to_string(),
                allowed: vec!["g".into(), "kg".into(), "ml".into(), "L".into()],
            }),
        }
    }
}

// =============================================================================
// Quantity Unit
// =============================================================================

/// One entry of a mode's canonical quantity table.
///
/// The canonical tables are `static` (see [`crate::units`]), so the labels are
/// borrowed there and owned only after a round trip through serde.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QuantityUnit {
    /// Quantity in the mode's base measure (g, ml, packets, dozens).
    pub magnitude: f64,

    #[ts(type = "string")]
    pub display_name: Cow<'static, str>,

    #[ts(type = "string")]
    pub display_name_hi: Cow<'static, str>,

    #[ts(type = "string")]
    pub display_name_mr: Cow<'static, str>,

    /// Number of pieces; dozen mode only.
    pub piece_count: Option<u32>,
}

impl QuantityUnit {
    /// Builds a table entry from static labels.
    pub const fn named(
        magnitude: f64,
        display_name: &'static str,
        display_name_hi: &'static str,
        display_name_mr: &'static str,
    ) -> Self {
        QuantityUnit {
            magnitude,
            display_name: Cow::Borrowed(display_name),
            display_name_hi: Cow::Borrowed(display_name_hi),
            display_name_mr: Cow::Borrowed(display_name_mr),
            piece_count: None,
        }
    }

    /// Builds a dozen-table entry carrying its piece count.
    pub const fn counted(
        magnitude: f64,
        pieces: u32,
        display_name: &'static str,
        display_name_hi: &'static str,
        display_name_mr: &'static str,
    ) -> Self {
        QuantityUnit {
            magnitude,
            display_name: Cow::Borrowed(display_name),
            display_name_hi: Cow::Borrowed(display_name_hi),
            display_name_mr: Cow::Borrowed(display_name_mr),
            piece_count: Some(pieces),
        }
    }
}

// =============================================================================
// Price Observation
// =============================================================================

/// A single observed price: the engine's only input.
///
/// For weight/liter, `price` buys exactly `reference_magnitude` grams or ml.
/// For packet/dozen, `price` is per packet/dozen and `reference_magnitude`
/// is how many packets/dozens the shopper is buying.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceObservation {
    pub reference_magnitude: f64,
    pub price: f64,
    pub mode: Mode,
}

impl PriceObservation {
    pub fn new(mode: Mode, reference_magnitude: f64, price: f64) -> Self {
        PriceObservation {
            reference_magnitude,
            price,
            mode,
        }
    }

    /// False when there is nothing to compute yet (zero, negative,
    /// NaN or infinite price or reference quantity).
    pub fn is_computable(&self) -> bool {
        self.price.is_finite()
            && self.reference_magnitude.is_finite()
            && self.price > 0.0
            && self.reference_magnitude > 0.0
    }
}

// =============================================================================
// Price Row
// =============================================================================

/// One row of a fan-out table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceRow {
    pub unit: QuantityUnit,

    /// Full-precision price. Never rounded.
    pub price: f64,

    /// Display string rounded to paise, e.g. "₹62.50".
    pub price_formatted: String,

    pub words_hi: String,
    pub words_mr: String,
}

impl PriceRow {
    pub fn new(unit: QuantityUnit, price: f64) -> Self {
        let words = numerals::to_words(price);
        PriceRow {
            unit,
            price,
            price_formatted: format_price(price),
            words_hi: words.hi,
            words_mr: words.mr,
        }
    }
}

/// Price at an arbitrary (non-canonical) quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Quantity in the mode's base measure.
    pub magnitude: f64,
    pub price: f64,
    pub price_formatted: String,
    pub words_hi: String,
    pub words_mr: String,
}

impl Quote {
    pub fn new(magnitude: f64, price: f64) -> Self {
        let words = numerals::to_words(price);
        Quote {
            magnitude,
            price,
            price_formatted: format_price(price),
            words_hi: words.hi,
            words_mr: words.mr,
        }
    }
}

pub(crate) fn format_price(price: f64) -> String {
    match Money::from_rupees_f64(price) {
        Some(money) => money.to_string(),
        None => format!("₹{:.2}", price),
    }
}

// =============================================================================
// Shopping List
// =============================================================================

/// Whether a list is in use or has been moved to history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ListStatus {
    #[default]
    Current,
    History,
}

/// A line on a shopping list.
///
/// ## Invariant
/// `rows` is always exactly what the engine computes from `observation`
/// (empty when there is no observation). Only [`ListItem::set_observation`]
/// and [`ListItem::clear_price`] touch either field.
///
/// Deserializing ignores any stored `rows` and recomputes them. A stored
/// observation that fails validation for the item's category is dropped,
/// leaving the item unpriced.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    pub id: String,

    /// Catalog id; `None` for custom items typed in by the shopper.
    pub catalog_id: Option<String>,

    pub name: String,
    pub name_hi: String,
    pub name_mr: String,
    pub category: Category,

    observation: Option<PriceObservation>,
    rows: Vec<PriceRow>,

    pub is_checked: bool,
}

impl ListItem {
    /// Creates an unpriced item from a catalog entry.
    pub fn from_catalog(id: impl Into<String>, entry: &CatalogEntry) -> Self {
        ListItem {
            id: id.into(),
            catalog_id: Some(entry.id.clone()),
            name: entry.name_en.clone(),
            name_hi: entry.name_hi.clone(),
            name_mr: entry.name_mr.clone(),
            category: entry.category,
            observation: None,
            rows: Vec::new(),
            is_checked: false,
        }
    }

    /// Creates an unpriced custom item (no translations).
    pub fn custom(id: impl Into<String>, name: impl Into<String>, category: Category) -> Self {
        ListItem {
            id: id.into(),
            catalog_id: None,
            name: name.into(),
            name_hi: String::new(),
            name_mr: String::new(),
            category,
            observation: None,
            rows: Vec::new(),
            is_checked: false,
        }
    }

    pub fn observation(&self) -> Option<&PriceObservation> {
        self.observation.as_ref()
    }

    pub fn rows(&self) -> &[PriceRow] {
        &self.rows
    }

    /// Records a new observation and recomputes the fan-out table.
    pub fn set_observation(&mut self, observation: PriceObservation) {
        self.rows = engine::calculate_all_prices(&observation);
        self.observation = Some(observation);
    }

    pub fn clear_price(&mut self) {
        self.observation = None;
        self.rows.clear();
    }

    #[inline]
    pub fn is_priced(&self) -> bool {
        !self.rows.is_empty()
    }

    /// What the shopper pays for the observed quantity, rounded to paise.
    pub fn estimated_spend(&self) -> Option<Money> {
        self.observation
            .as_ref()
            .and_then(engine::estimated_spend)
            .and_then(Money::from_rupees_f64)
    }
}

/// What a stored [`ListItem`] is read from. `rows` is derived data and is
/// not read back.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListItemRecord {
    id: String,
    #[serde(default)]
    catalog_id: Option<String>,
    name: String,
    #[serde(default)]
    name_hi: String,
    #[serde(default)]
    name_mr: String,
    category: Category,
    #[serde(default)]
    observation: Option<PriceObservation>,
    #[serde(default)]
    is_checked: bool,
}

impl From<ListItemRecord> for ListItem {
    fn from(record: ListItemRecord) -> Self {
        let mut item = ListItem {
            id: record.id,
            catalog_id: record.catalog_id,
            name: record.name,
            name_hi: record.name_hi,
            name_mr: record.name_mr,
            category: record.category,
            observation: None,
            rows: Vec::new(),
            is_checked: record.is_checked,
        };

        let valid = record.observation.and_then(|obs| {
            validation::validate_observation(
                item.category,
                obs.mode,
                obs.reference_magnitude,
                obs.price,
            )
            .ok()
        });
        if let Some(observation) = valid {
            item.set_observation(observation);
        }
        item
    }
}

impl<'de> Deserialize<'de> for ListItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        ListItemRecord::deserialize(deserializer).map(ListItem::from)
    }
}

/// A shopping list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    pub id: String,
    pub name: String,
    pub status: ListStatus,
    pub items: Vec<ListItem>,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,

    /// When the list was moved to history.
    #[ts(as = "Option<String>")]
    pub archived_at: Option<DateTime<Utc>>,
}

impl ShoppingList {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        items: Vec<ListItem>,
        now: DateTime<Utc>,
    ) -> Self {
        ShoppingList {
            id: id.into(),
            name: name.into(),
            status: ListStatus::Current,
            items,
            created_at: now,
            updated_at: now,
            archived_at: None,
        }
    }

    #[inline]
    pub fn is_archived(&self) -> bool {
        self.status == ListStatus::History
    }

    pub fn item(&self, item_id: &str) -> Option<&ListItem> {
        self.items.iter().find(|i| i.id == item_id)
    }

    pub fn item_mut(&mut self, item_id: &str) -> Option<&mut ListItem> {
        self.items.iter_mut().find(|i| i.id == item_id)
    }

    /// Sum of the estimated spend of every priced item. Saturates at
    /// `Money::MAX` rather than overflowing.
    pub fn total(&self) -> Money {
        self.items
            .iter()
            .filter_map(ListItem::estimated_spend)
            .fold(Money::zero(), Money::saturating_add)
    }

    pub fn archive(&mut self, now: DateTime<Utc>) {
        self.status = ListStatus::History;
        self.archived_at = Some(now);
        self.updated_at = now;
    }

    pub fn restore(&mut self, now: DateTime<Utc>) {
        self.status = ListStatus::Current;
        self.archived_at = None;
        self.updated_at = now;
    }

    #[inline]
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_default_for_category() {
        assert_eq!(Mode::default_for(Category::Dairy, None), Mode::Liter);
        assert_eq!(
            Mode::default_for(Category::VegFruits, Some(SubCategory::Fruits)),
            Mode::Dozen
        );
        assert_eq!(
            Mode::default_for(Category::VegFruits, Some(SubCategory::Vegetables)),
            Mode::Weight
        );
        assert_eq!(
            Mode::default_for(Category::Kirana, Some(SubCategory::KiranaPulses)),
            Mode::Weight
        );
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!("weight".parse::<Mode>().unwrap(), Mode::Weight);
        assert_eq!("Litre".parse::<Mode>().unwrap(), Mode::Liter);
        assert_eq!("dozens".parse::<Mode>().unwrap(), Mode::Dozen);
        assert!("bushel".parse::<Mode>().is_err());
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("dairy".parse::<Category>().unwrap(), Category::Dairy);
        assert_eq!("veg-fruits".parse::<Category>().unwrap(), Category::VegFruits);
        assert!("meat".parse::<Category>().is_err());
    }

    #[test]
    fn test_sub_category_parent() {
        assert_eq!(SubCategory::Fruits.category(), Category::VegFruits);
        assert_eq!(SubCategory::KiranaSpices.category(), Category::Kirana);
    }

    #[test]
    fn test_measure_unit_to_base() {
        assert_eq!(MeasureUnit::Kilogram.to_base(1.5), 1500.0);
        assert_eq!(MeasureUnit::Milliliter.to_base(200.0), 200.0);
        assert_eq!(MeasureUnit::Liter.mode(), Mode::Liter);
    }

    #[test]
    fn test_observation_computable() {
        assert!(PriceObservation::new(Mode::Weight, 1000.0, 40.0).is_computable());
        assert!(!PriceObservation::new(Mode::Weight, 0.0, 40.0).is_computable());
        assert!(!PriceObservation::new(Mode::Weight, 1000.0, 0.0).is_computable());
        assert!(!PriceObservation::new(Mode::Weight, f64::NAN, 40.0).is_computable());
        assert!(!PriceObservation::new(Mode::Dozen, 1.0, f64::INFINITY).is_computable());
    }

    #[test]
    fn test_list_item_rows_follow_observation() {
        let mut item = ListItem::custom("i-1", "Tomato", Category::VegFruits);
        assert!(!item.is_priced());

        item.set_observation(PriceObservation::new(Mode::Weight, 1000.0, 40.0));
        assert_eq!(item.rows().len(), 7);
        assert_eq!(item.estimated_spend(), Some(Money::from_paise(4000)));

        item.clear_price();
        assert!(item.rows().is_empty());
        assert!(item.observation().is_none());
    }

    #[test]
    fn test_list_item_rows_recomputed_on_load() {
        let mut item = ListItem::custom("i-1", "Milk", Category::Dairy);
        item.set_observation(PriceObservation::new(Mode::Liter, 500.0, 30.0));

        let mut json = serde_json::to_value(&item).unwrap();
        json["rows"][3]["price"] = serde_json::json!(999.0);
        json["rows"][3]["priceFormatted"] = serde_json::json!("₹999.00");

        let loaded: ListItem = serde_json::from_value(json).unwrap();
        let expected = engine::calculate_all_prices(loaded.observation().unwrap());
        assert_eq!(loaded.rows(), expected.as_slice());
        assert_eq!(loaded.rows()[3].price, 60.0);
        assert_eq!(loaded, item);
    }

    #[test]
    fn test_list_item_invalid_observation_dropped_on_load() {
        let mut item = ListItem::custom("i-2", "Paneer", Category::Dairy);
        item.set_observation(PriceObservation::new(Mode::Weight, 250.0, 90.0));

        let json = serde_json::to_value(&item).unwrap();
        let loaded: ListItem = serde_json::from_value(json).unwrap();
        assert!(loaded.observation().is_none());
        assert!(loaded.rows().is_empty());
        assert!(!loaded.is_priced());
    }

    #[test]
    fn test_list_total_saturates() {
        let now = Utc::now();
        let items = (0..2)
            .map(|i| {
                let mut item = ListItem::custom(format!("i-{}", i), "Soap", Category::Kirana);
                item.set_observation(PriceObservation::new(Mode::Packet, 5.0, 1e16));
                item
            })
            .collect();
        let list = ShoppingList::new("l-1", "Bulk", items, now);
        assert_eq!(list.total(), Money::MAX);
    }

    #[test]
    fn test_list_archive_and_restore() {
        let now = Utc::now();
        let mut list = ShoppingList::new("l-1", "Weekly", Vec::new(), now);
        assert_eq!(list.status, ListStatus::Current);

        list.archive(now);
        assert!(list.is_archived());
        assert_eq!(list.archived_at, Some(now));

        list.restore(now);
        assert!(!list.is_archived());
        assert!(list.archived_at.is_none());
    }

    #[test]
    fn test_price_row_serializes_camel_case() {
        let row = PriceRow::new(QuantityUnit::named(250.0, "Pav", "पाव", "पाव"), 10.0);
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["priceFormatted"], "₹10.00");
        assert_eq!(json["wordsHi"], "दस");
        assert_eq!(json["unit"]["displayNameMr"], "पाव");

        let back: PriceRow = serde_json::from_value(json).unwrap();
        assert_eq!(back, row);
    }
}
