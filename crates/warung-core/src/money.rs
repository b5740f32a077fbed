//! # Money Module
//!
//! Monetary values and the fixed-rate rupiah display conversion.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In JavaScript/floating point:                                      │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Cents                                        │
//! │    Catalog prices become cents exactly once, at the fetch           │
//! │    boundary. After that every subtotal, total and rupiah            │
//! │    conversion is exact integer arithmetic.                          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Display Currency
//! Catalog prices are expressed in USD (the source currency). The visitor
//! sees rupiah, converted with one fixed multiplicative rate and formatted
//! with id-ID grouping and zero fractional digits: `Rp 450.000`.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::IDR_PER_USD;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest source-currency unit (cents of USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: arithmetic never silently wraps into a new type
/// - **Single-field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for boundary snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use warung_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use warung_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299); // $2.99
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 897);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Converts this amount to whole rupiah at the given fixed rate.
    ///
    /// Integer truncation toward zero; with the default rate (a multiple
    /// of 100 rupiah per cent) the division is exact, so the line-item
    /// and cart-total display paths always agree.
    ///
    /// ## Example
    /// ```rust
    /// use warung_core::money::{ExchangeRate, Money};
    ///
    /// let total = Money::from_cents(3000); // $30.00
    /// assert_eq!(total.to_rupiah(ExchangeRate::default()), 450_000);
    /// ```
    pub fn to_rupiah(&self, rate: ExchangeRate) -> i64 {
        // i128 intermediate so a large cart cannot overflow the multiply
        ((self.0 as i128 * rate.rupiah_per_unit() as i128) / 100) as i64
    }
}

/// Display implementation shows money in a human-readable source-currency
/// format. This is for debugging; user-facing output goes through
/// [`format_rupiah`].
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, (self.0 / 100).abs(), (self.0 % 100).abs())
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

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Exchange Rate
// =============================================================================

/// Fixed multiplicative conversion rate: rupiah per one source-currency
/// unit (dollar).
///
/// The default is [`IDR_PER_USD`] (Rp 15.000 per $1). The rate is a
/// session-wide constant; there is no live feed and no per-line override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRate(i64);

impl ExchangeRate {
    /// Creates a rate from whole rupiah per source unit.
    #[inline]
    pub const fn rupiah_per_dollar(rate: i64) -> Self {
        ExchangeRate(rate)
    }

    /// Returns the rate in rupiah per source unit.
    #[inline]
    pub const fn rupiah_per_unit(&self) -> i64 {
        self.0
    }
}

impl Default for ExchangeRate {
    fn default() -> Self {
        ExchangeRate(IDR_PER_USD)
    }
}

// =============================================================================
// Rupiah Formatting
// =============================================================================

/// Formats a whole-rupiah amount the way the id-ID locale renders IDR:
/// `Rp` prefix, `.` thousands grouping, zero fractional digits.
///
/// ## Example
/// ```rust
/// use warung_core::money::format_rupiah;
///
/// assert_eq!(format_rupiah(450_000), "Rp 450.000");
/// assert_eq!(format_rupiah(0), "Rp 0");
/// ```
pub fn format_rupiah(rupiah: i64) -> String {
    let sign = if rupiah < 0 { "-" } else { "" };
    format!("{}Rp {}", sign, group_thousands(rupiah.unsigned_abs()))
}

/// Inserts a `.` separator every three digits, id-ID style.
fn group_thousands(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut groups: Vec<String> = Vec::new();
    while value > 0 {
        groups.push((value % 1000).to_string());
        value /= 1000;
    }

    // All groups except the leading one are zero-padded to three digits
    let mut out = String::new();
    for (i, group) in groups.iter().rev().enumerate() {
        if i == 0 {
            out.push_str(group);
        } else {
            out.push('.');
            out.push_str(&format!("{:0>3}", group));
        }
    }
    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(299);
        assert_eq!(unit_price.multiply_quantity(3).cents(), 897);
    }

    #[test]
    fn test_to_rupiah_default_rate() {
        // $10.00 at Rp 15.000/$ = Rp 150.000
        assert_eq!(Money::from_cents(1000).to_rupiah(ExchangeRate::default()), 150_000);
        // $0.99 = Rp 14.850 (exact: 99 × 150)
        assert_eq!(Money::from_cents(99).to_rupiah(ExchangeRate::default()), 14_850);
        assert_eq!(Money::zero().to_rupiah(ExchangeRate::default()), 0);
    }

    #[test]
    fn test_to_rupiah_custom_rate() {
        let rate = ExchangeRate::rupiah_per_dollar(16_000);
        assert_eq!(Money::from_cents(250).to_rupiah(rate), 40_000);
    }

    /// Line-item and cart-total conversion must agree: converting each
    /// line then summing equals converting the summed total.
    #[test]
    fn test_conversion_consistency() {
        let rate = ExchangeRate::default();
        let lines = [Money::from_cents(1099), Money::from_cents(2550), Money::from_cents(7)];

        let per_line: i64 = lines.iter().map(|m| m.to_rupiah(rate)).sum();
        let total: Money = lines.iter().fold(Money::zero(), |acc, m| acc + *m);

        assert_eq!(per_line, total.to_rupiah(rate));
    }

    #[test]
    fn test_format_rupiah() {
        assert_eq!(format_rupiah(0), "Rp 0");
        assert_eq!(format_rupiah(500), "Rp 500");
        assert_eq!(format_rupiah(1_500), "Rp 1.500");
        assert_eq!(format_rupiah(450_000), "Rp 450.000");
        assert_eq!(format_rupiah(1_234_567), "Rp 1.234.567");
        // Inner groups are zero-padded
        assert_eq!(format_rupiah(1_000_050), "Rp 1.000.050");
    }

    #[test]
    fn test_format_rupiah_negative() {
        assert_eq!(format_rupiah(-450_000), "-Rp 450.000");
    }

    /// $10.00 × qty 3 at the default rate displays as Rp 450.000.
    #[test]
    fn test_three_units_display() {
        let total = Money::from_cents(1000).multiply_quantity(3);
        let rupiah = total.to_rupiah(ExchangeRate::default());
        assert_eq!(format_rupiah(rupiah), "Rp 450.000");
    }
}
