//! # Catalog Client
//!
//! HTTP client for the Catalog & Billing Service.
//!
//! ## Request Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        CatalogClient Pipeline                           │
//! │                                                                         │
//! │  endpoint("/products/002")                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  reqwest ──► status 2xx? ──yes──► decode typed JSON body               │
//! │                  │                                                      │
//! │                  no                                                     │
//! │                  ▼                                                      │
//! │  read body ──► {"message": ...}? ──yes──► Status { status, message }   │
//! │                  │                                                      │
//! │                  no                                                     │
//! │                  ▼                                                      │
//! │  Status { status, trimmed body text }                                  │
//! │                                                                         │
//! │  No retries anywhere in this client. Bill submission is not            │
//! │  idempotent, and every failure must reach the cashier as-is.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info};

use async_trait::async_trait;
use vision_core::{BillRequest, Product};

use crate::config::ServiceConfig;
use crate::error::{ServiceError, ServiceResult};
use crate::service::CatalogService;
use crate::types::{
    Bill, DailySummary, DaySummary, MonthlySummary, NextProductId, ProductDraft, ProductLookup,
};

/// Longest slice of a non-JSON error body carried into an error message.
const MAX_ERROR_TEXT: usize = 200;

/// The service's error envelope for non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

// =============================================================================
// Catalog Client
// =============================================================================

/// Typed HTTP wrapper over every service endpoint.
///
/// Cloning is cheap if needed later; today one client is shared by
/// reference behind the [`CatalogService`] trait.
pub struct CatalogClient {
    http: Client,
    base_url: String,
}

impl CatalogClient {
    /// Builds a client from validated connection settings.
    pub fn new(config: &ServiceConfig) -> ServiceResult<Self> {
        config.validate()?;

        let http = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()?;

        Ok(CatalogClient {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Joins a path onto the base URL.
    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // =========================================================================
    // Request Plumbing
    // =========================================================================

    /// Sends a request and decodes the JSON body of a 2xx response.
    async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> ServiceResult<T> {
        let response = request.send().await?;
        let response = Self::require_success(response).await?;
        Ok(response.json().await?)
    }

    /// Sends a request where only the status matters.
    async fn send_unit(request: RequestBuilder) -> ServiceResult<()> {
        let response = request.send().await?;
        Self::require_success(response).await?;
        Ok(())
    }

    /// Turns a non-2xx response into `ServiceError::Status`.
    ///
    /// The service wraps errors as `{"message": ...}`. Anything else in the
    /// body (a proxy error page, say) is carried through trimmed.
    async fn require_success(response: Response) -> ServiceResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ErrorBody>(&text) {
            Ok(body) => body.message,
            Err(_) if text.trim().is_empty() => status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string(),
            Err(_) => text.chars().take(MAX_ERROR_TEXT).collect(),
        };

        Err(ServiceError::Status {
            status: status.as_u16(),
            message,
        })
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// Full catalog load.
    pub async fn products(&self) -> ServiceResult<Vec<Product>> {
        debug!("Fetching full catalog");
        Self::send_json(self.http.get(self.endpoint("/products"))).await
    }

    /// Catalog filtered to one category.
    pub async fn products_in_category(&self, category_id: &str) -> ServiceResult<Vec<Product>> {
        debug!(category_id = %category_id, "Fetching catalog by category");
        Self::send_json(
            self.http
                .get(self.endpoint("/products"))
                .query(&[("categoryId", category_id)]),
        )
        .await
    }

    /// Looks up a product id.
    ///
    /// ## Behavior
    /// The service answers with a single object when the id has one variant
    /// and an array when it has several. Both decode into a list here, so
    /// callers always see `Vec<Product>`.
    pub async fn product(&self, product_id: &str) -> ServiceResult<Vec<Product>> {
        debug!(product_id = %product_id, "Fetching product");
        let lookup: ProductLookup =
            Self::send_json(self.http.get(self.endpoint(&format!("/products/{}", product_id))))
                .await?;
        Ok(lookup.into_products())
    }

    /// Fetches one specific variant of a product.
    pub async fn product_variant(
        &self,
        product_id: &str,
        variant: &str,
    ) -> ServiceResult<Product> {
        debug!(product_id = %product_id, variant = %variant, "Fetching product variant");
        Self::send_json(
            self.http
                .get(self.endpoint(&format!("/products/{}", product_id)))
                .query(&[("variant", variant)]),
        )
        .await
    }

    /// All variants of a product id.
    pub async fn product_variants(&self, product_id: &str) -> ServiceResult<Vec<Product>> {
        debug!(product_id = %product_id, "Fetching product variants");
        Self::send_json(
            self.http
                .get(self.endpoint(&format!("/products/{}/variants", product_id))),
        )
        .await
    }

    /// Name search over the catalog.
    pub async fn search_products(&self, query: &str) -> ServiceResult<Vec<Product>> {
        debug!(query = %query, "Searching products");
        Self::send_json(
            self.http
                .get(self.endpoint("/products/search"))
                .query(&[("query", query)]),
        )
        .await
    }

    /// Next unassigned product id, already zero-padded by the service.
    pub async fn next_product_id(&self) -> ServiceResult<String> {
        debug!("Fetching next product id");
        let next: NextProductId =
            Self::send_json(self.http.get(self.endpoint("/products/next-id"))).await?;
        Ok(next.product_id)
    }

    /// Creates a product (or a new variant of an existing id).
    pub async fn create_product(&self, draft: &ProductDraft) -> ServiceResult<()> {
        info!(product_id = %draft.product_id, "Creating product");
        Self::send_unit(self.http.post(self.endpoint("/products")).json(draft)).await
    }

    /// Updates a product, optionally addressing one variant.
    pub async fn update_product(
        &self,
        product_id: &str,
        draft: &ProductDraft,
        variant: Option<&str>,
    ) -> ServiceResult<()> {
        info!(product_id = %product_id, "Updating product");
        let mut request = self
            .http
            .put(self.endpoint(&format!("/products/{}", product_id)));
        if let Some(variant) = variant {
            request = request.query(&[("variant", variant)]);
        }
        Self::send_unit(request.json(draft)).await
    }

    /// Deletes a product, optionally addressing one variant.
    pub async fn delete_product(
        &self,
        product_id: &str,
        variant: Option<&str>,
    ) -> ServiceResult<()> {
        info!(product_id = %product_id, "Deleting product");
        let mut request = self
            .http
            .delete(self.endpoint(&format!("/products/{}", product_id)));
        if let Some(variant) = variant {
            request = request.query(&[("variant", variant)]);
        }
        Self::send_unit(request).await
    }

    // =========================================================================
    // Bills
    // =========================================================================

    /// Submits a bill and returns the persisted record.
    pub async fn create_bill(&self, request: &BillRequest) -> ServiceResult<Bill> {
        debug!(items = request.items.len(), "Submitting bill");
        let bill: Bill =
            Self::send_json(self.http.post(self.endpoint("/bills")).json(request)).await?;
        info!(bill_id = bill.bill_id, "Bill created");
        Ok(bill)
    }

    /// All bills of the current trading day.
    pub async fn todays_bills(&self) -> ServiceResult<Vec<Bill>> {
        debug!("Fetching today's bills");
        Self::send_json(self.http.get(self.endpoint("/bills/today"))).await
    }

    /// Bills of one archived date.
    pub async fn bills_by_date(&self, date: NaiveDate) -> ServiceResult<Vec<Bill>> {
        debug!(date = %date, "Fetching bills by date");
        Self::send_json(
            self.http
                .get(self.endpoint(&format!("/bills/date/{}", date.format("%Y-%m-%d")))),
        )
        .await
    }

    /// One bill by its number.
    pub async fn bill(&self, bill_id: i64) -> ServiceResult<Bill> {
        debug!(bill_id, "Fetching bill");
        Self::send_json(self.http.get(self.endpoint(&format!("/bills/{}", bill_id)))).await
    }

    /// Bills from the last thirty days.
    pub async fn recent_bills(&self) -> ServiceResult<Vec<Bill>> {
        debug!("Fetching recent bills");
        Self::send_json(self.http.get(self.endpoint("/bills/history/past30days"))).await
    }

    /// Deletes a bill.
    pub async fn delete_bill(&self, bill_id: i64) -> ServiceResult<()> {
        info!(bill_id, "Deleting bill");
        Self::send_unit(self.http.delete(self.endpoint(&format!("/bills/{}", bill_id)))).await
    }

    // =========================================================================
    // Day Tracking
    // =========================================================================

    /// Live counters for the current trading day.
    pub async fn current_day(&self) -> ServiceResult<DaySummary> {
        debug!("Fetching current day summary");
        Self::send_json(self.http.get(self.endpoint("/day/current"))).await
    }

    /// Closes the trading day and archives its summary.
    pub async fn end_day(&self) -> ServiceResult<()> {
        info!("Ending trading day");
        Self::send_unit(self.http.post(self.endpoint("/day/end"))).await
    }

    // =========================================================================
    // Summaries
    // =========================================================================

    /// One archived day.
    pub async fn daily_summary(&self, date: NaiveDate) -> ServiceResult<DailySummary> {
        debug!(date = %date, "Fetching daily summary");
        Self::send_json(
            self.http
                .get(self.endpoint(&format!("/summary/daily/{}", date.format("%Y-%m-%d")))),
        )
        .await
    }

    /// Asks the service to aggregate archived days into a month.
    pub async fn create_monthly_summary(&self) -> ServiceResult<()> {
        info!("Creating monthly summary");
        Self::send_unit(self.http.post(self.endpoint("/summary/monthly/create"))).await
    }

    /// One aggregated month, keyed like "2024-03".
    pub async fn monthly_summary(&self, month: &str) -> ServiceResult<MonthlySummary> {
        debug!(month = %month, "Fetching monthly summary");
        Self::send_json(
            self.http
                .get(self.endpoint(&format!("/summary/monthly/{}", month))),
        )
        .await
    }

    /// Every aggregated month on record.
    pub async fn monthly_summaries(&self) -> ServiceResult<Vec<MonthlySummary>> {
        debug!("Fetching monthly summaries");
        Self::send_json(self.http.get(self.endpoint("/summary/monthly"))).await
    }

    /// Dates that have an archived daily summary.
    pub async fn available_dates(&self) -> ServiceResult<Vec<String>> {
        debug!("Fetching available summary dates");
        Self::send_json(self.http.get(self.endpoint("/summary/available-dates"))).await
    }
}

// =============================================================================
// CatalogService Implementation
// =============================================================================

#[async_trait]
impl CatalogService for CatalogClient {
    async fn products(&self) -> ServiceResult<Vec<Product>> {
        CatalogClient::products(self).await
    }

    async fn product(&self, product_id: &str) -> ServiceResult<Vec<Product>> {
        CatalogClient::product(self, product_id).await
    }

    async fn search(&self, query: &str) -> ServiceResult<Vec<Product>> {
        self.search_products(query).await
    }

    async fn create_bill(&self, request: &BillRequest) -> ServiceResult<Bill> {
        CatalogClient::create_bill(self, request).await
    }

    async fn day_summary(&self) -> ServiceResult<DaySummary> {
        self.current_day().await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
// Endpoint round trips against a live mock live in tests/client_http.rs.
