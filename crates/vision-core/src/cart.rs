//! # Cart
//!
//! The in-progress sale: cart lines keyed by product unique key.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart Operations                                   │
//! │                                                                         │
//! │  Operator Action            Cart Call                Line Change        │
//! │  ───────────────            ─────────                ───────────        │
//! │                                                                         │
//! │  Pick suggestion ─────────► add_product() ─────────► push / merge qty   │
//! │                                                                         │
//! │  Type quantity ───────────► update_quantity() ─────► qty = n (n>0)     │
//! │                                           └────────► remove (n<=0)     │
//! │                                                                         │
//! │  Type price ──────────────► update_price() ────────► edited price set  │
//! │                                                                         │
//! │  Click remove ────────────► remove_line() ─────────► line dropped      │
//! │                                                                         │
//! │  Bill saved ──────────────► clear() ───────────────► empty cart        │
//! │                                                                         │
//! │  Every mutation leaves the cart untouched when it fails.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per unique key (adding the same product merges)
//! - Line quantity is always >= 1 and <= the product's stock snapshot
//! - An edited price is never below the product's buying price
//! - Lines keep their insertion order across quantity/price edits

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::product::Product;
use crate::validation::validate_quantity;

// =============================================================================
// Cart Line
// =============================================================================

/// One line of the in-progress sale.
///
/// ## Design Notes
/// - `product` is a snapshot: catalog updates after the line was added do
///   not change what this sale charges
/// - `edited_price` is the operator's per-sale override; `None` means the
///   product's default selling price applies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Snapshot of the product at the time it entered the cart.
    pub product: Product,

    quantity: i64,

    edited_price: Option<Money>,
}

impl CartLine {
    fn new(product: Product, quantity: i64) -> Self {
        CartLine {
            product,
            quantity,
            edited_price: None,
        }
    }

    /// The key this line is stored under (`productId_variant`).
    pub fn unique_key(&self) -> String {
        self.product.unique_key()
    }

    /// Units of this product in the sale.
    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// The operator's price override, if any.
    #[inline]
    pub fn edited_price(&self) -> Option<Money> {
        self.edited_price
    }

    /// Whether the operator overrode the price for this sale.
    #[inline]
    pub fn is_price_edited(&self) -> bool {
        self.edited_price.is_some()
    }

    /// The per-unit price actually charged: edited if set, default otherwise.
    #[inline]
    pub fn effective_price(&self) -> Money {
        self.edited_price.unwrap_or(self.product.selling_price)
    }

    /// Effective price times quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.effective_price() * self.quantity
    }

    /// (Effective price - buying price) times quantity.
    #[inline]
    pub fn line_profit(&self) -> Money {
        (self.effective_price() - self.product.buying_price) * self.quantity
    }

    /// Sets the quantity, validating it against the stock snapshot.
    ///
    /// ## Behavior
    /// - Non-positive quantity: `Validation` error, line unchanged
    /// - Quantity above stock: `InsufficientStock`, line unchanged
    pub fn set_quantity(&mut self, quantity: i64) -> CoreResult<()> {
        validate_quantity(quantity)?;
        if !self.product.has_stock(quantity) {
            return Err(CoreError::InsufficientStock {
                name: self.product.display_name(),
                available: self.product.stock,
                requested: quantity,
            });
        }
        self.quantity = quantity;
        Ok(())
    }

    /// Records an operator price override.
    ///
    /// A price below the buying price is rejected with `PriceBelowCost` and
    /// the previous effective price stays in force.
    pub fn set_price(&mut self, price: Money) -> CoreResult<()> {
        if !self.product.is_valid_price(price) {
            return Err(CoreError::PriceBelowCost {
                price,
                floor: self.product.buying_price,
            });
        }
        self.edited_price = Some(price);
        Ok(())
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart: the mutable state of one sale.
///
/// Lines are stored in insertion order; the vector is private so every
/// mutation goes through the validating methods below.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Adds a product to the cart, merging into an existing line when the
    /// unique key is already present.
    ///
    /// ## Behavior
    /// - Existing line: quantity is incremented; the stock check covers the
    ///   combined quantity and a failure leaves the old quantity in place
    /// - New line: the product snapshot is taken here; stock must cover the
    ///   requested quantity
    ///
    /// ## Returns
    /// The unique key of the affected line, so callers can focus its
    /// quantity input.
    pub fn add_product(&mut self, product: &Product, quantity: i64) -> CoreResult<String> {
        validate_quantity(quantity)?;
        let key = product.unique_key();

        if let Some(line) = self.lines.iter_mut().find(|l| l.unique_key() == key) {
            line.set_quantity(line.quantity + quantity)?;
            return Ok(key);
        }

        if !product.has_stock(quantity) {
            return Err(CoreError::InsufficientStock {
                name: product.display_name(),
                available: product.stock,
                requested: quantity,
            });
        }
        self.lines.push(CartLine::new(product.clone(), quantity));
        Ok(key)
    }

    /// Sets the quantity of the line stored under `key`.
    ///
    /// ## Behavior
    /// - Quantity <= 0 removes the line (typing 0 clears it)
    /// - Quantity above the stock snapshot: `InsufficientStock`, unchanged
    /// - Unknown key: no-op
    pub fn update_quantity(&mut self, key: &str, quantity: i64) -> CoreResult<()> {
        if quantity <= 0 {
            self.remove_line(key);
            return Ok(());
        }
        match self.lines.iter_mut().find(|l| l.unique_key() == key) {
            Some(line) => line.set_quantity(quantity),
            None => Ok(()),
        }
    }

    /// Overrides the price of the line stored under `key`.
    ///
    /// ## Behavior
    /// - Price below buying price: `PriceBelowCost`, previous price stands
    /// - Unknown key: no-op
    pub fn update_price(&mut self, key: &str, price: Money) -> CoreResult<()> {
        match self.lines.iter_mut().find(|l| l.unique_key() == key) {
            Some(line) => line.set_price(price),
            None => Ok(()),
        }
    }

    /// Removes the line stored under `key`. Removing an absent key is a
    /// no-op; the key may later be reused by a fresh line.
    pub fn remove_line(&mut self, key: &str) {
        self.lines.retain(|l| l.unique_key() != key);
    }

    /// Clears all lines (after a bill is saved, or to abandon the sale).
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// The line stored under `key`, if present.
    pub fn line(&self, key: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.unique_key() == key)
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of lines (unique products) in the cart.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of line totals: what the customer owes.
    pub fn total(&self) -> Money {
        self.lines
            .iter()
            .map(|l| l.line_total())
            .fold(Money::zero(), |acc, t| acc + t)
    }

    /// Sum of line profits at the effective prices.
    pub fn profit(&self) -> Money {
        self.lines
            .iter()
            .map(|l| l.line_profit())
            .fold(Money::zero(), |acc, p| acc + p)
    }

    /// Change owed for the given cash: `max(0, cash - total)`.
    ///
    /// Never negative; a customer paying short (credit sale) gets 0 change.
    pub fn change_due(&self, cash: Money) -> Money {
        let total = self.total();
        if cash >= total {
            cash - total
        } else {
            Money::zero()
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
