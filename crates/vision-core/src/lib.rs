//! # vision-core: Pure Business Logic for Vision POS
//!
//! This crate is the **heart** of the Vision POS register. It contains all
//! cart and billing logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Vision POS Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 vision-session (Selling Flow)                   │   │
//! │  │    Search ──► Add to Cart ──► Tender ──► Checkout ──► Day      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ vision-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  product  │  │   money   │  │   cart    │  │   bill    │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │  Request  │  │   │
//! │  │   │   index   │  │   paisa   │  │ CartLine  │  │  assembly │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO CLOCK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  vision-api (Billing Server HTTP)               │   │
//! │  │          products, bills, day summaries, monthly reports        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`product`] - Product records and identity (`productId_variant`)
//! - [`money`] - Money type with integer paisa arithmetic (no floating point!)
//! - [`cart`] - Merging cart with stock and price rules
//! - [`bill`] - Bill request assembly from a cart
//! - [`index`] - Client-side catalog snapshot with lookups
//! - [`validation`] - Input normalization and business rule validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, and clock access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in paisa (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use vision_core::{Cart, Money, Product};
//!
//! let product = Product {
//!     product_id: "001".to_string(),
//!     name: "Sugar 1kg".to_string(),
//!     variant: "Standard".to_string(),
//!     stock: 10,
//!     buying_price: Money::from_rupees(100),
//!     selling_price: Money::from_rupees(150),
//!     category_id: String::new(),
//! };
//!
//! let mut cart = Cart::new();
//! cart.add_product(&product, 2)?;
//!
//! assert_eq!(cart.total(), Money::from_rupees(300));
//! assert_eq!(cart.change_due(Money::from_rupees(500)), Money::from_rupees(200));
//! # Ok::<(), vision_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod bill;
pub mod cart;
pub mod error;
pub mod index;
pub mod money;
pub mod product;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use vision_core::Cart` instead of
// `use vision_core::cart::Cart`

pub use bill::{BillItemRequest, BillRequest};
pub use cart::{Cart, CartLine};
pub use error::{CoreError, CoreResult, ValidationError};
pub use index::ProductIndex;
pub use money::Money;
pub use product::Product;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Variant name given to products sold in a single form.
///
/// ## Why a constant?
/// The billing server omits the variant field for single-form products, and
/// the register fills it in with this value. The unique key of such a product
/// is then `"001_Standard"` rather than `"001_"`.
pub const STANDARD_VARIANT: &str = "Standard";

/// Width product ids are zero-padded to ("2" → "002").
///
/// Catalog ids are assigned as three-digit strings. Typing a bare "2" at the
/// register must find the same product.
pub const PRODUCT_ID_WIDTH: usize = 3;

/// Stock level at or below which a product counts as low stock.
pub const LOW_STOCK_THRESHOLD: i64 = 10;
