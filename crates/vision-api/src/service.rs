//! # Service Seam
//!
//! The trait the selling flow consumes. `CatalogClient` implements it over
//! HTTP; tests implement it with canned data and no server.

use async_trait::async_trait;
use vision_core::{BillRequest, Product};

use crate::error::ServiceResult;
use crate::types::{Bill, DaySummary};

/// The slice of the backend the selling flow depends on.
///
/// Kept deliberately narrow: catalog reads, name/id search, bill
/// submission, and the live day counters. Management endpoints (drafts,
/// summaries, history) live on `CatalogClient` directly.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Full catalog load.
    async fn products(&self) -> ServiceResult<Vec<Product>>;

    /// All variants filed under a product id.
    async fn product(&self, product_id: &str) -> ServiceResult<Vec<Product>>;

    /// Name search.
    async fn search(&self, query: &str) -> ServiceResult<Vec<Product>>;

    /// Submits a bill and returns the persisted record.
    async fn create_bill(&self, request: &BillRequest) -> ServiceResult<Bill>;

    /// Live counters for the current trading day.
    async fn day_summary(&self) -> ServiceResult<DaySummary>;
}
