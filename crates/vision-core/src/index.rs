//! # Product Index
//!
//! The client-side snapshot of the catalog, built once per load.
//!
//! ## Lookup Paths
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Product Index                                     │
//! │                                                                         │
//! │  GET /products ──► build() ──► by_key:        "002_Small" → Product     │
//! │                                by_product_id: "002" → [keys]            │
//! │                                                                         │
//! │  Suggestion click ────► get("002_Small") ──────────► one Product        │
//! │  Typed id "2" ────────► resolve_all("002") ────────► all variants       │
//! │  Single-variant id ───► resolve_one("001") ────────► first variant      │
//! │  Restock screen ──────► low_stock(10) ─────────────► stock <= 10        │
//! │                                                                         │
//! │  Rebuild is always wholesale: a new catalog load REPLACES the index,    │
//! │  it never patches individual entries.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};
use crate::product::Product;

// =============================================================================
// Product Index
// =============================================================================

/// Catalog snapshot with unique-key and product-id lookups.
///
/// Variants of a product id keep their catalog order, so "the first listed
/// variant" is well defined. A duplicate unique key in the input keeps the
/// last record, like reloading a row.
#[derive(Debug, Clone, Default)]
pub struct ProductIndex {
    /// `productId_variant` → product record.
    by_key: HashMap<String, Product>,

    /// `productId` → unique keys of its variants, in catalog order.
    by_product_id: HashMap<String, Vec<String>>,

    /// All unique keys in catalog order, for ordered scans.
    keys: Vec<String>,
}

impl ProductIndex {
    /// Creates an empty index (a catalog that has not loaded yet).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a fresh index from a full catalog load.
    pub fn build(products: Vec<Product>) -> Self {
        let mut index = ProductIndex::default();
        for product in products {
            let key = product.unique_key();
            let product_id = product.product_id.clone();
            if index.by_key.insert(key.clone(), product).is_none() {
                index
                    .by_product_id
                    .entry(product_id)
                    .or_default()
                    .push(key.clone());
                index.keys.push(key);
            }
        }
        index
    }

    /// Looks up a product by its unique key.
    pub fn get(&self, key: &str) -> Option<&Product> {
        self.by_key.get(key)
    }

    /// All variants filed under a product id, in catalog order.
    ///
    /// Errors with `ProductNotFound` when the id is unknown.
    pub fn resolve_all(&self, product_id: &str) -> CoreResult<Vec<&Product>> {
        let keys = self
            .by_product_id
            .get(product_id)
            .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))?;
        Ok(keys.iter().filter_map(|k| self.by_key.get(k)).collect())
    }

    /// The first-listed variant of a product id.
    ///
    /// Errors with `ProductNotFound` when the id is unknown.
    pub fn resolve_one(&self, product_id: &str) -> CoreResult<&Product> {
        self.resolve_all(product_id)?
            .first()
            .copied()
            .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))
    }

    /// Products at or below the given stock threshold, in catalog order.
    pub fn low_stock(&self, threshold: i64) -> Vec<&Product> {
        self.keys
            .iter()
            .filter_map(|k| self.by_key.get(k))
            .filter(|p| p.stock <= threshold)
            .collect()
    }

    /// Products in catalog order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.keys.iter().filter_map(|k| self.by_key.get(k))
    }

    /// Number of catalog rows indexed.
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    /// Checks if the index holds no products.
    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
