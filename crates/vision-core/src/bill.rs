//! # Bill Assembly
//!
//! Packages a cart and the cash tendered into the request the Catalog &
//! Billing Service persists.
//!
//! ## Wire Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  POST /bills                                                            │
//! │  {                                                                      │
//! │    "items": [                                                           │
//! │      { "productId": "001", "variant": "Standard", "quantity": 2 },      │
//! │      { "productId": "002", "variant": "Small",                          │
//! │        "quantity": 1, "price": 120.0 }                                  │
//! │    ],                                                                   │
//! │    "cash": 500.0,                                                       │
//! │    "change": 50.0                                                       │
//! │  }                                                                      │
//! │                                                                         │
//! │  The "price" key appears ONLY on lines the operator repriced; the       │
//! │  service charges the catalog price when the key is absent.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Assembly is pure: no clock, no network. The service assigns the bill id,
//! date and time when it persists the request.

use serde::{Deserialize, Serialize};

use crate::cart::{Cart, CartLine};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::validate_cash;

// =============================================================================
// Bill Item Request
// =============================================================================

/// One sale line as the service expects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillItemRequest {
    /// Product code of the line.
    pub product_id: String,

    /// Variant sold (the service needs it to pick the catalog row).
    pub variant: String,

    /// Units sold.
    pub quantity: i64,

    /// Operator price override. Omitted from the JSON when the default
    /// selling price applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Money>,
}

impl BillItemRequest {
    /// Builds the wire item for one cart line.
    pub fn from_line(line: &CartLine) -> Self {
        BillItemRequest {
            product_id: line.product.product_id.clone(),
            variant: line.product.variant.clone(),
            quantity: line.quantity(),
            price: line.edited_price(),
        }
    }
}

// =============================================================================
// Bill Request
// =============================================================================

/// The complete checkout payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillRequest {
    /// Sale lines in cart order.
    pub items: Vec<BillItemRequest>,

    /// Cash tendered by the customer.
    pub cash: Money,

    /// Change owed: `max(0, cash - total)`.
    pub change: Money,
}

impl BillRequest {
    /// Assembles the checkout payload from a cart and the cash tendered.
    ///
    /// ## Behavior
    /// - Empty cart: `EmptyCart`, nothing is assembled
    /// - Negative cash: `Validation` error
    /// - Items appear in cart insertion order; unedited lines carry no
    ///   `price` key so the service bills its own catalog price
    ///
    /// ## Example
    /// ```rust
    /// # use vision_core::{Cart, Product, Money, BillRequest};
    /// # let product = Product {
    /// #     product_id: "001".into(), name: "Sugar".into(),
    /// #     variant: "Standard".into(), stock: 10,
    /// #     buying_price: Money::from_rupees(100),
    /// #     selling_price: Money::from_rupees(150),
    /// #     category_id: String::new(),
    /// # };
    /// let mut cart = Cart::new();
    /// cart.add_product(&product, 3)?;
    ///
    /// let request = BillRequest::from_cart(&cart, Money::from_rupees(500))?;
    /// assert_eq!(request.change, Money::from_rupees(50));
    /// # Ok::<(), vision_core::CoreError>(())
    /// ```
    pub fn from_cart(cart: &Cart, cash: Money) -> CoreResult<Self> {
        if cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }
        validate_cash(cash)?;

        Ok(BillRequest {
            items: cart.lines().iter().map(BillItemRequest::from_line).collect(),
            cash,
            change: cart.change_due(cash),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
