//! # Money Module
//!
//! Provides the `Money` type for rupee amounts that have been rounded for
//! display or summed into a list total.
//!
//! ## Where Floats Stop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PRICE FLOW                                                             │
//! │                                                                         │
//! │  observed price (f64) ──► engine rate (f64) ──► row price (f64)        │
//! │                                                    │                    │
//! │                                  from_rupees_f64 ──┘  ← ONLY crossing   │
//! │                                                    │                    │
//! │                                                    ▼                    │
//! │                           Money (i64 paise) ──► "₹62.50", list totals  │
//! │                                                                         │
//! │  Row prices keep full precision. Rounding happens exactly once, here.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use sabji_core::money::Money;
//!
//! let pav = Money::from_paise(1000);      // ₹10.00
//! let total = pav + Money::from_rupees(5);
//! assert_eq!(total.to_string(), "₹15.00");
//!
//! let rounded = Money::from_rupees_f64(62.499).unwrap();
//! assert_eq!(rounded.paise(), 6250);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

/// Paise per rupee.
pub const PAISE_PER_RUPEE: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// A rupee amount in paise (1/100 rupee).
///
/// Signed so that differences between list totals stay representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// The largest representable amount.
    pub const MAX: Money = Money(i64::MAX);

    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Whole rupees.
    ///
    /// ```rust
    /// use sabji_core::money::Money;
    ///
    /// assert_eq!(Money::from_rupees(40).paise(), 4000);
    /// ```
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees * PAISE_PER_RUPEE)
    }

    /// Rounds a computed rupee amount to the nearest paisa, halves away
    /// from zero.
    ///
    /// Returns `None` for NaN, infinities, and amounts outside `i64` paise.
    ///
    /// ```rust
    /// use sabji_core::money::Money;
    ///
    /// assert_eq!(Money::from_rupees_f64(2.5).unwrap().paise(), 250);
    /// assert_eq!(Money::from_rupees_f64(0.005).unwrap().paise(), 1);
    /// assert!(Money::from_rupees_f64(f64::NAN).is_none());
    /// ```
    pub fn from_rupees_f64(rupees: f64) -> Option<Self> {
        let paise = (rupees * PAISE_PER_RUPEE as f64).round();
        if !paise.is_finite() || paise.abs() >= i64::MAX as f64 {
            return None;
        }
        Some(Money(paise as i64))
    }

    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Whole-rupee portion (truncated toward zero).
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / PAISE_PER_RUPEE
    }

    /// Paise portion, always 0-99.
    #[inline]
    pub const fn paise_part(&self) -> i64 {
        (self.0 % PAISE_PER_RUPEE).abs()
    }

    /// The amount as a float, for handing back to the numeral translator.
    #[inline]
    pub fn as_rupees_f64(&self) -> f64 {
        self.0 as f64 / PAISE_PER_RUPEE as f64
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// `None` if the sum does not fit.
    #[inline]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(paise) => Some(Money(paise)),
            None => None,
        }
    }

    /// Sum clamped to the representable range.
    #[inline]
    pub const fn saturating_add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }

    /// Formats with a caller-supplied currency symbol instead of `₹`.
    ///
    /// ```rust
    /// use sabji_core::money::Money;
    ///
    /// assert_eq!(Money::from_paise(-550).format_with("Rs. "), "-Rs. 5.50");
    /// ```
    pub fn format_with(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            self.rupees().abs(),
            self.paise_part()
        )
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with("₹"))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a whole count (packets).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Saturating, so a long list of large amounts never overflows.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Money::saturating_add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
