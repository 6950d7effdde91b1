//! # Selling Session
//!
//! One register's trading state: the loaded catalog, the in-progress cart,
//! and the current day's counters, with checkout wired to the billing
//! service.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Selling Session                                  │
//! │                                                                         │
//! │   open() ──► GET /products ──► ProductIndex (hard requirement)          │
//! │          └─► GET /day/current ─► day counters (best effort)             │
//! │                                                                         │
//! │   add_by_id("7")  ──► "007" ──► one variant  ──► straight into cart     │
//! │                             └─► many variants ─► operator picks one     │
//! │                                                                         │
//! │   checkout(cash) ──► BillRequest::from_cart ──► POST /bills             │
//! │                                                      │                  │
//! │                           success ◄──────────────────┤                  │
//! │                           cart cleared,              │                  │
//! │                           day refreshed              └──► failure       │
//! │                                                           cart KEPT,    │
//! │                                                           error shown   │
//! │                                                                         │
//! │   The cart only empties after the service confirms the bill. A failed   │
//! │   submission costs the operator nothing but a retry.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use tracing::{info, warn};

use vision_api::{Bill, CatalogService, DaySummary};
use vision_core::validation::normalize_product_id;
use vision_core::{
    BillRequest, Cart, CoreError, Money, Product, ProductIndex, LOW_STOCK_THRESHOLD,
};

use crate::error::SessionResult;

// =============================================================================
// Cart Add Outcome
// =============================================================================

/// What happened when the operator entered a product id.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAdd {
    /// Exactly one variant exists; it went straight into the cart.
    /// Carries the unique key of the affected line.
    Added(String),

    /// The id has several variants; the operator must pick one and the
    /// cart is untouched. Add the chosen one with
    /// [`SellingSession::add_to_cart`].
    Variants(Vec<Product>),
}

// =============================================================================
// Selling Session
// =============================================================================

/// The state behind one selling screen.
///
/// ## Design Notes
/// - The catalog index is a snapshot. Stock numbers drift as other
///   registers sell; the service re-checks stock when the bill is saved,
///   so a stale snapshot can only cause a rejected checkout, never an
///   oversold bill.
/// - Mutating methods take `&mut self`, so one session cannot have two
///   checkouts in flight.
pub struct SellingSession {
    service: Arc<dyn CatalogService>,
    index: ProductIndex,
    cart: Cart,
    day: Option<DaySummary>,
}

impl SellingSession {
    /// Creates a session with an empty catalog. Call [`reload_catalog`]
    /// before selling, or use [`open`] which does it for you.
    ///
    /// [`reload_catalog`]: SellingSession::reload_catalog
    /// [`open`]: SellingSession::open
    pub fn new(service: Arc<dyn CatalogService>) -> Self {
        SellingSession {
            service,
            index: ProductIndex::new(),
            cart: Cart::new(),
            day: None,
        }
    }

    /// Opens a session ready to sell: loads the catalog and the current
    /// day's counters.
    ///
    /// ## Behavior
    /// - A catalog load failure is fatal; there is nothing to sell without it
    /// - A day-counters failure is logged and ignored; [`day`] stays `None`
    ///   until a later refresh succeeds
    ///
    /// [`day`]: SellingSession::day
    pub async fn open(service: Arc<dyn CatalogService>) -> SessionResult<Self> {
        let mut session = SellingSession::new(service);
        session.reload_catalog().await?;
        if let Err(err) = session.refresh_day().await {
            warn!(error = %err, "Day counters unavailable at open");
        }
        Ok(session)
    }

    /// Replaces the catalog index with a fresh load from the service.
    pub async fn reload_catalog(&mut self) -> SessionResult<()> {
        let products = self.service.products().await?;
        self.index = ProductIndex::build(products);
        info!(count = self.index.len(), "Catalog loaded");
        Ok(())
    }

    /// Refetches the current day's counters.
    ///
    /// On failure the previous counters are kept; stale numbers beat a
    /// blank day box.
    pub async fn refresh_day(&mut self) -> SessionResult<()> {
        let summary = self.service.day_summary().await?;
        self.day = Some(summary);
        Ok(())
    }

    /// The catalog index this session sells from.
    pub fn index(&self) -> &ProductIndex {
        &self.index
    }

    /// The in-progress sale.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Current day counters, if the last refresh succeeded.
    pub fn day(&self) -> Option<&DaySummary> {
        self.day.as_ref()
    }

    /// Products at or below the reorder threshold, in catalog order.
    pub fn low_stock(&self) -> Vec<&Product> {
        self.index.low_stock(LOW_STOCK_THRESHOLD)
    }

    /// Adds `quantity` units of the product stored under `key` (a
    /// suggestion click, or a variant the operator picked).
    ///
    /// ## Returns
    /// The unique key of the affected cart line.
    pub fn add_to_cart(&mut self, key: &str, quantity: i64) -> SessionResult<String> {
        let product = self
            .index
            .get(key)
            .ok_or_else(|| CoreError::ProductNotFound(key.to_string()))?;
        Ok(self.cart.add_product(product, quantity)?)
    }

    /// Rings up a typed product id.
    ///
    /// ## Behavior
    /// - The input is zero-padded ("7" means "007")
    /// - One variant: one unit goes straight into the cart
    /// - Several variants: nothing is added; the caller shows the list and
    ///   comes back through [`add_to_cart`]
    /// - Unknown id: `ProductNotFound`
    ///
    /// [`add_to_cart`]: SellingSession::add_to_cart
    pub fn add_by_id(&mut self, input: &str) -> SessionResult<CartAdd> {
        let id = normalize_product_id(input)?;
        let variants = self.index.resolve_all(&id)?;
        match variants.as_slice() {
            [product] => Ok(CartAdd::Added(self.cart.add_product(product, 1)?)),
            several => Ok(CartAdd::Variants(
                several.iter().map(|p| (*p).clone()).collect(),
            )),
        }
    }

    /// Sets the quantity of a cart line. Zero or less removes the line.
    pub fn update_quantity(&mut self, key: &str, quantity: i64) -> SessionResult<()> {
        Ok(self.cart.update_quantity(key, quantity)?)
    }

    /// Overrides the price of a cart line for this sale.
    pub fn update_price(&mut self, key: &str, price: Money) -> SessionResult<()> {
        Ok(self.cart.update_price(key, price)?)
    }

    /// Removes a cart line.
    pub fn remove_line(&mut self, key: &str) {
        self.cart.remove_line(key);
    }

    /// Abandons the sale in progress.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Change owed for the given cash against the current cart total.
    pub fn change_due(&self, cash: Money) -> Money {
        self.cart.change_due(cash)
    }

    /// Saves the sale: assembles the bill request, submits it, and clears
    /// the cart once the service confirms.
    ///
    /// ## Behavior
    /// - Empty cart or negative cash: nothing is submitted
    /// - Submission failure: the cart is left exactly as it was, so the
    ///   operator can retry or adjust
    /// - After a confirmed bill the day counters are refreshed best-effort;
    ///   a refresh failure does not fail the checkout
    pub async fn checkout(&mut self, cash: Money) -> SessionResult<Bill> {
        let request = BillRequest::from_cart(&self.cart, cash)?;
        let bill = self.service.create_bill(&request).await?;

        // Only now is the sale real; the cart survives any failure above.
        self.cart.clear();
        info!(bill_id = bill.bill_id, total = %bill.total_amount, "Sale completed");

        if let Err(err) = self.refresh_day().await {
            warn!(error = %err, "Day counters not refreshed after sale");
        }
        Ok(bill)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use vision_api::{ServiceError, ServiceResult};

    use crate::error::SessionError;

    struct FakeCatalog {
        catalog: Vec<Product>,
        fail_bills: AtomicBool,
        fail_day: AtomicBool,
        /// Every request the fake accepted, for assertions.
        bills: Mutex<Vec<BillRequest>>,
    }

    impl FakeCatalog {
        fn new(catalog: Vec<Product>) -> Self {
            FakeCatalog {
                catalog,
                fail_bills: AtomicBool::new(false),
                fail_day: AtomicBool::new(false),
                bills: Mutex::new(Vec::new()),
            }
        }

        fn failing_bills(self) -> Self {
            self.fail_bills.store(true, Ordering::SeqCst);
            self
        }

        fn failing_day(self) -> Self {
            self.fail_day.store(true, Ordering::SeqCst);
            self
        }

        fn submitted(&self) -> Vec<BillRequest> {
            self.bills.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CatalogService for FakeCatalog {
        async fn products(&self) -> ServiceResult<Vec<Product>> {
            Ok(self.catalog.clone())
        }

        async fn product(&self, _product_id: &str) -> ServiceResult<Vec<Product>> {
            unimplemented!("id lookup is not exercised by session tests")
        }

        async fn search(&self, _query: &str) -> ServiceResult<Vec<Product>> {
            unimplemented!("name search is not exercised by session tests")
        }

        async fn create_bill(&self, request: &BillRequest) -> ServiceResult<Bill> {
            if self.fail_bills.load(Ordering::SeqCst) {
                return Err(ServiceError::Status {
                    status: 500,
                    message: "billing store offline".into(),
                });
            }
            self.bills.lock().unwrap().push(request.clone());
            Ok(Bill {
                bill_id: 101,
                date: "2024-03-15".into(),
                time: "14:05:00".into(),
                items: Vec::new(),
                total_amount: request.cash - request.change,
                cash: request.cash,
                change: request.change,
            })
        }

        async fn day_summary(&self) -> ServiceResult<DaySummary> {
            if self.fail_day.load(Ordering::SeqCst) {
                return Err(ServiceError::Status {
                    status: 503,
                    message: "day tracker unavailable".into(),
                });
            }
            Ok(DaySummary {
                date: "2024-03-15".into(),
                total_sales: Money::from_rupees(4000),
                total_profit: Money::from_rupees(900),
                items: Vec::new(),
                bills: Vec::new(),
            })
        }
    }

    fn test_product(id: &str, variant: &str, stock: i64) -> Product {
        Product {
            product_id: id.to_string(),
            name: format!("Product {}", id),
            variant: variant.to_string(),
            stock,
            buying_price: Money::from_rupees(100),
            selling_price: Money::from_rupees(150),
            category_id: String::new(),
        }
    }

    fn sample_catalog() -> Vec<Product> {
        vec![
            test_product("001", "Standard", 10),
            test_product("002", "Small", 10),
            test_product("002", "Large", 10),
        ]
    }

    async fn open_session(fake: FakeCatalog) -> (Arc<FakeCatalog>, SellingSession) {
        let fake = Arc::new(fake);
        let session = SellingSession::open(Arc::clone(&fake) as Arc<dyn CatalogService>)
            .await
            .expect("session should open");
        (fake, session)
    }

    #[tokio::test]
    async fn test_open_loads_catalog_and_day() {
        let (_fake, session) = open_session(FakeCatalog::new(sample_catalog())).await;

        assert_eq!(session.index().len(), 3);
        let day = session.day().expect("day counters should load");
        assert_eq!(day.total_sales, Money::from_rupees(4000));
    }

    #[tokio::test]
    async fn test_open_survives_day_tracker_outage() {
        let (_fake, session) =
            open_session(FakeCatalog::new(sample_catalog()).failing_day()).await;

        // Selling works without the day box
        assert_eq!(session.index().len(), 3);
        assert!(session.day().is_none());
    }

    #[tokio::test]
    async fn test_add_by_id_single_variant_goes_straight_in() {
        let (_fake, mut session) = open_session(FakeCatalog::new(sample_catalog())).await;

        // "1" pads to "001"
        let outcome = session.add_by_id("1").unwrap();
        assert_eq!(outcome, CartAdd::Added("001_Standard".to_string()));
        assert_eq!(session.cart().line("001_Standard").unwrap().quantity(), 1);
    }

    #[tokio::test]
    async fn test_add_by_id_multiple_variants_asks_operator() {
        let (_fake, mut session) = open_session(FakeCatalog::new(sample_catalog())).await;

        let variants = match session.add_by_id("2").unwrap() {
            CartAdd::Variants(variants) => variants,
            other => panic!("expected a variant choice, got {other:?}"),
        };
        assert_eq!(variants.len(), 2);
        assert!(session.cart().is_empty(), "cart waits for the pick");

        // The operator picks one
        session.add_to_cart(&variants[1].unique_key(), 1).unwrap();
        assert_eq!(session.cart().len(), 1);
        assert!(session.cart().line("002_Large").is_some());
    }

    #[tokio::test]
    async fn test_add_by_id_unknown_id() {
        let (_fake, mut session) = open_session(FakeCatalog::new(sample_catalog())).await;

        let err = session.add_by_id("9").unwrap_err();
        assert!(matches!(
            err,
            SessionError::Core(CoreError::ProductNotFound(_))
        ));
        assert!(session.cart().is_empty());
    }

    #[tokio::test]
    async fn test_checkout_submits_and_clears_cart() {
        let (fake, mut session) = open_session(FakeCatalog::new(sample_catalog())).await;

        session.add_by_id("1").unwrap();
        session.update_quantity("001_Standard", 2).unwrap();

        let bill = session.checkout(Money::from_rupees(500)).await.unwrap();
        assert_eq!(bill.bill_id, 101);
        assert_eq!(bill.change, Money::from_rupees(200));
        assert!(session.cart().is_empty(), "confirmed sale empties the cart");

        let submitted = fake.submitted();
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].items.len(), 1);
        assert_eq!(submitted[0].items[0].product_id, "001");
        assert_eq!(submitted[0].items[0].quantity, 2);
        assert_eq!(submitted[0].cash, Money::from_rupees(500));
        assert_eq!(submitted[0].change, Money::from_rupees(200));
    }

    #[tokio::test]
    async fn test_failed_checkout_leaves_cart_untouched() {
        let (fake, mut session) =
            open_session(FakeCatalog::new(sample_catalog()).failing_bills()).await;

        session.add_by_id("1").unwrap();
        session.update_price("001_Standard", Money::from_rupees(140)).unwrap();
        let before = session.cart().clone();

        let err = session.checkout(Money::from_rupees(500)).await.unwrap_err();
        assert!(matches!(err, SessionError::Service(_)));

        // Lines, quantities and the price edit are all still there
        assert_eq!(session.cart(), &before);
        assert!(fake.submitted().is_empty());
    }

    #[tokio::test]
    async fn test_checkout_empty_cart_submits_nothing() {
        let (fake, mut session) = open_session(FakeCatalog::new(sample_catalog())).await;

        let err = session.checkout(Money::from_rupees(100)).await.unwrap_err();
        assert!(matches!(err, SessionError::Core(CoreError::EmptyCart)));
        assert!(fake.submitted().is_empty());
    }

    #[tokio::test]
    async fn test_stock_enforced_through_session() {
        let catalog = vec![test_product("001", "Standard", 2)];
        let (_fake, mut session) = open_session(FakeCatalog::new(catalog)).await;

        let err = session.add_to_cart("001_Standard", 3).unwrap_err();
        assert!(matches!(
            err,
            SessionError::Core(CoreError::InsufficientStock {
                available: 2,
                requested: 3,
                ..
            })
        ));
        assert!(session.cart().is_empty());
    }

    #[tokio::test]
    async fn test_checkout_survives_day_refresh_failure() {
        let (fake, mut session) =
            open_session(FakeCatalog::new(sample_catalog()).failing_day()).await;

        session.add_by_id("1").unwrap();
        let bill = session.checkout(Money::from_rupees(200)).await.unwrap();

        // The sale went through even though the day box could not update
        assert_eq!(bill.bill_id, 101);
        assert!(session.cart().is_empty());
        assert_eq!(fake.submitted().len(), 1);
        assert!(session.day().is_none());
    }

    #[tokio::test]
    async fn test_low_stock_reads_current_index() {
        let catalog = vec![
            test_product("001", "Standard", 3),
            test_product("002", "Standard", 50),
            test_product("003", "Standard", 10),
        ];
        let (_fake, session) = open_session(FakeCatalog::new(catalog)).await;

        let ids: Vec<&str> = session
            .low_stock()
            .iter()
            .map(|p| p.product_id.as_str())
            .collect();
        assert_eq!(ids, vec!["001", "003"]);
    }
}
