//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  In many retail systems:                                                │
//! │    Rs. 10.00 / 3 = Rs. 3.33 (×3 = Rs. 9.99)  → Lost Rs. 0.01!          │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Paisa                                            │
//! │    1000 paisa / 3 = 333 paisa (×3 = 999 paisa)                         │
//! │    We KNOW we lost 1 paisa, and handle it explicitly                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Wire Boundary
//! The Catalog & Billing Service speaks decimal rupees in its JSON
//! (`"sellingPrice": 150.5`). `Money` therefore carries custom serde that
//! converts paisa ↔ decimal rupees at the boundary; everything between the
//! two `serde` calls is integer arithmetic.
//!
//! ## Usage
//! ```rust
//! use vision_core::money::Money;
//!
//! // Create from paisa (preferred)
//! let price = Money::from_paisa(15050); // Rs. 150.50
//!
//! // Arithmetic operations
//! let doubled = price * 2;                       // Rs. 301.00
//! let total = price + Money::from_rupees(10);    // Rs. 160.50
//! ```

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in paisa (1/100 rupee), the smallest unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for corrections and deltas
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Custom serde**: Wire format is decimal rupees, storage is paisa
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Product.selling_price ──► CartLine.effective_price ──► line_total      │
/// │                                                                         │
/// │  Cart.total ──► change_due(cash) ──► BillRequest.change                 │
/// │                                                                         │
/// │  EVERY monetary value in the system flows through this type             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paisa (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use vision_core::money::Money;
    ///
    /// let price = Money::from_paisa(15050); // Represents Rs. 150.50
    /// assert_eq!(price.paisa(), 15050);
    /// ```
    #[inline]
    pub const fn from_paisa(paisa: i64) -> Self {
        Money(paisa)
    }

    /// Creates a Money value from whole rupees.
    ///
    /// ## Example
    /// ```rust
    /// use vision_core::money::Money;
    ///
    /// assert_eq!(Money::from_rupees(150).paisa(), 15000);
    /// ```
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees * 100)
    }

    /// Creates a Money value from major and minor units (rupees and paisa).
    ///
    /// For negative amounts, only the major unit should be negative:
    /// `from_major_minor(-5, 50)` = -Rs. 5.50, not -Rs. 4.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in paisa (smallest currency unit).
    #[inline]
    pub const fn paisa(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (whole rupees) portion, truncated toward zero.
    #[inline]
    pub const fn whole_rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (paisa) portion (always 0-99).
    #[inline]
    pub const fn paisa_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Converts a decimal rupee amount from the wire into paisa.
    ///
    /// ## Rounding
    /// Rounds half away from zero at the second decimal place, so
    /// `150.555` and float artifacts like `150.55000000000001` both land
    /// on 15055/15056 deterministically. This is the ONLY place floats
    /// enter the crate; business math never touches them.
    ///
    /// ## Example
    /// ```rust
    /// use vision_core::money::Money;
    ///
    /// assert_eq!(Money::from_rupee_value(150.55).paisa(), 15055);
    /// assert_eq!(Money::from_rupee_value(55.0).paisa(), 5500);
    /// ```
    #[inline]
    pub fn from_rupee_value(rupees: f64) -> Self {
        Money((rupees * 100.0).round() as i64)
    }

    /// Converts the value to decimal rupees for the wire.
    ///
    /// Display code should prefer the `Display` impl; this exists for the
    /// serde boundary and for callers that feed charts or reports.
    #[inline]
    pub fn rupee_value(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money the way receipts print it.
///
/// ## Example
/// ```rust
/// use vision_core::money::Money;
///
/// assert_eq!(Money::from_paisa(15000).to_string(), "Rs. 150.00");
/// assert_eq!(Money::from_paisa(-550).to_string(), "-Rs. 5.50");
/// ```
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}Rs. {}.{:02}",
            sign,
            self.whole_rupees().abs(),
            self.paisa_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Wire Format (serde)
// =============================================================================
// The backend's JSON carries plain numbers in rupees (55, 150.5). These
// impls keep that contract while the rest of the crate stays integer-only.

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.rupee_value())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rupees = f64::deserialize(deserializer)?;
        Ok(Money::from_rupee_value(rupees))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_paisa() {
        let money = Money::from_paisa(15055);
        assert_eq!(money.paisa(), 15055);
        assert_eq!(money.whole_rupees(), 150);
        assert_eq!(money.paisa_part(), 55);
    }

    #[test]
    fn test_from_major_minor() {
        let money = Money::from_major_minor(10, 99);
        assert_eq!(money.paisa(), 1099);

        let negative = Money::from_major_minor(-5, 50);
        assert_eq!(negative.paisa(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_paisa(15000)), "Rs. 150.00");
        assert_eq!(format!("{}", Money::from_paisa(500)), "Rs. 5.00");
        assert_eq!(format!("{}", Money::from_paisa(-550)), "-Rs. 5.50");
        assert_eq!(format!("{}", Money::from_paisa(0)), "Rs. 0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_paisa(1000);
        let b = Money::from_paisa(500);

        assert_eq!((a + b).paisa(), 1500);
        assert_eq!((a - b).paisa(), 500);
        let result: Money = a * 3;
        assert_eq!(result.paisa(), 3000);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_paisa(100);
        assert!(positive.is_positive());

        let negative = Money::from_paisa(-100);
        assert!(negative.is_negative());
    }

    #[test]
    fn test_rupee_value_round_trip() {
        assert_eq!(Money::from_rupee_value(150.55).paisa(), 15055);
        assert_eq!(Money::from_rupee_value(99.99).paisa(), 9999);
        assert_eq!(Money::from_rupee_value(55.0).paisa(), 5500);
        // Float noise from upstream arithmetic still lands on the paisa grid
        assert_eq!(Money::from_rupee_value(150.55000000000001).paisa(), 15055);

        assert_eq!(Money::from_paisa(15050).rupee_value(), 150.5);
    }

    #[test]
    fn test_serde_decimal_rupees() {
        // Serializes as a rupee number, not a paisa integer
        let json = serde_json::to_value(Money::from_paisa(15050)).unwrap();
        assert_eq!(json, serde_json::json!(150.5));

        // Accepts both integer and fractional JSON numbers
        let whole: Money = serde_json::from_str("55").unwrap();
        assert_eq!(whole.paisa(), 5500);
        let fractional: Money = serde_json::from_str("150.55").unwrap();
        assert_eq!(fractional.paisa(), 15055);
    }

    /// Documents the intentional precision loss of integer division.
    #[test]
    fn test_division_precision_loss_documented() {
        let ten_rupees = Money::from_paisa(1000);
        let one_third = Money::from_paisa(1000 / 3); // 333 paisa
        let reconstructed: Money = one_third * 3; // 999 paisa

        assert_eq!(reconstructed.paisa(), 999);
        let lost = ten_rupees - reconstructed;
        assert_eq!(lost.paisa(), 1);
    }
}
