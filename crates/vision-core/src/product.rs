//! # Product
//!
//! The catalog record as served by the Catalog & Billing Service.
//!
//! ## Identity Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Product Identity                                   │
//! │                                                                         │
//! │  product_id: "002"     zero-padded numeric code, shared by variants     │
//! │  variant:    "Small"   distinguishes sizes/kinds, "Standard" default    │
//! │                                                                         │
//! │  unique_key = product_id + "_" + variant                                │
//! │                                                                         │
//! │  "002" ──┬── "002_Small"   ◄── one catalog row each                    │
//! │          └── "002_Large"                                                │
//! │                                                                         │
//! │  The unique key is THE identity for cart lines and index lookups.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::STANDARD_VARIANT;

fn default_variant() -> String {
    STANDARD_VARIANT.to_string()
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// Deserializes directly from the backend's camelCase JSON records; a
/// record without a `variant` field is the Standard variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Zero-padded numeric code ("001"), shared by all variants.
    pub product_id: String,

    /// Display name shown to the operator and on receipts.
    pub name: String,

    /// Variant name ("Small", "Large", ...); "Standard" when absent.
    #[serde(default = "default_variant")]
    pub variant: String,

    /// Units currently available for sale.
    pub stock: i64,

    /// What the store paid per unit. Floor for price edits.
    pub buying_price: Money,

    /// Default per-unit price charged at the counter.
    pub selling_price: Money,

    /// Category the product is filed under.
    #[serde(default)]
    pub category_id: String,
}

impl Product {
    /// Returns the identity used for cart lines and index lookups.
    ///
    /// ## Example
    /// ```rust
    /// # use vision_core::product::Product;
    /// # use vision_core::money::Money;
    /// let p = Product {
    ///     product_id: "002".into(),
    ///     name: "Sugar".into(),
    ///     variant: "Small".into(),
    ///     stock: 10,
    ///     buying_price: Money::from_rupees(100),
    ///     selling_price: Money::from_rupees(150),
    ///     category_id: String::new(),
    /// };
    /// assert_eq!(p.unique_key(), "002_Small");
    /// ```
    pub fn unique_key(&self) -> String {
        format!("{}_{}", self.product_id, self.variant)
    }

    /// Name with the variant appended for non-Standard products.
    ///
    /// "Sugar" for the Standard variant, "Sugar (Small)" otherwise.
    pub fn display_name(&self) -> String {
        if self.variant == STANDARD_VARIANT {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.variant)
        }
    }

    /// Checks whether the product has at least `quantity` units in stock.
    #[inline]
    pub fn has_stock(&self, quantity: i64) -> bool {
        self.stock >= quantity
    }

    /// Checks whether a price may be charged for this product.
    ///
    /// The floor is the buying price; the store never sells at a loss.
    #[inline]
    pub fn is_valid_price(&self, price: Money) -> bool {
        price >= self.buying_price
    }

    /// Per-unit margin at the default selling price.
    #[inline]
    pub fn profit_margin(&self) -> Money {
        self.selling_price - self.buying_price
    }

    /// True when remaining stock is at or below the restock threshold.
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.stock <= crate::LOW_STOCK_THRESHOLD
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
