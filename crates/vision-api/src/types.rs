//! # Wire Types
//!
//! JSON shapes exchanged with the Catalog & Billing Service.
//!
//! ## Endpoint → Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Service Response Shapes                            │
//! │                                                                         │
//! │  GET /products .................... Vec<Product>                       │
//! │  GET /products/{id} ............... ProductLookup (object OR array!)   │
//! │  GET /products/next-id ............ { "productId": "045" }             │
//! │  POST /bills ...................... Bill                               │
//! │  GET /bills/today ................. Vec<Bill>                          │
//! │  GET /day/current ................. DaySummary (live counters)         │
//! │  GET /summary/daily/{date} ........ DailySummary (archived day)        │
//! │  GET /summary/monthly/{month} ..... MonthlySummary                     │
//! │  GET /summary/available-dates ..... Vec<String>                        │
//! │                                                                         │
//! │  All keys are camelCase. Amounts are decimal rupees on the wire and    │
//! │  Money (integer paisa) in memory. A missing variant means "Standard".  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use vision_core::{Money, Product, STANDARD_VARIANT};

fn default_variant() -> String {
    STANDARD_VARIANT.to_string()
}

// =============================================================================
// Bills
// =============================================================================

/// A persisted bill as the service returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    /// Service-assigned bill number.
    pub bill_id: i64,

    /// Sale date as the service formats it.
    pub date: String,

    /// Sale time as the service formats it.
    pub time: String,

    pub items: Vec<BillItem>,
    pub total_amount: Money,
    pub cash: Money,
    pub change: Money,
}

/// One sold line on a persisted bill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillItem {
    pub product_id: String,
    pub name: String,
    #[serde(default = "default_variant")]
    pub variant: String,
    pub quantity: i64,
    /// Unit price the line was actually sold at.
    pub price: Money,
    pub total: Money,
}

// =============================================================================
// Day Tracking
// =============================================================================

/// Live counters for the current trading day (`GET /day/current`).
///
/// Note the field names: the live endpoint reports `totalSales`, while the
/// archived summaries below report `totalIncome` for the same figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    pub date: String,
    pub total_sales: Money,
    pub total_profit: Money,
    #[serde(default)]
    pub items: Vec<SoldItem>,
    #[serde(default)]
    pub bills: Vec<Bill>,
}

/// Per-product sales aggregate inside a day or month summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoldItem {
    pub product_id: String,
    pub name: String,
    #[serde(default = "default_variant")]
    pub variant: String,
    pub sold_quantity: i64,
    pub total_income: Money,
    pub profit: Money,
}

// =============================================================================
// Summaries
// =============================================================================

/// An archived day (`GET /summary/daily/{date}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    pub date: String,
    #[serde(default)]
    pub items: Vec<SoldItem>,
    pub total_income: Money,
    pub total_profit: Money,
}

/// A month of aggregated sales (`GET /summary/monthly/{month}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    /// Month key, e.g. "2024-03".
    pub month: String,

    /// Human-readable month, e.g. "March 2024".
    pub month_name: String,

    pub start_date: String,
    pub end_date: String,

    /// Number of archived days aggregated into this month.
    pub days_included: i64,

    #[serde(default)]
    pub items: Vec<SoldItem>,
    pub total_income: Money,
    pub total_profit: Money,
}

// =============================================================================
// Products
// =============================================================================

/// Response of `GET /products/{id}`.
///
/// The service returns a single object when the id has one variant and an
/// array when it has several. Decoding must accept both.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ProductLookup {
    Many(Vec<Product>),
    One(Product),
}

impl ProductLookup {
    /// Flattens either response shape into a list.
    pub fn into_products(self) -> Vec<Product> {
        match self {
            ProductLookup::One(product) => vec![product],
            ProductLookup::Many(products) => products,
        }
    }
}

/// Envelope of `GET /products/next-id`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NextProductId {
    pub product_id: String,
}

/// Payload for creating or updating a product.
///
/// An absent variant means the service files it as "Standard".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub product_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    pub stock: i64,
    pub buying_price: Money,
    pub selling_price: Money,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub category_id: String,
}

// =============================================================================
// Unit Tests
// =============================================================================
