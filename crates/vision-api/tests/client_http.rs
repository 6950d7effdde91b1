//! HTTP round trips for `CatalogClient` against an in-process mock service.
//!
//! The mock runs on a random port inside the test process, so these tests
//! exercise the real reqwest pipeline (URL joining, query encoding, status
//! handling, envelope decoding) without a deployed backend.

use std::net::SocketAddr;

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use vision_api::{CatalogClient, ServiceConfig, ServiceError};
use vision_core::{BillRequest, Cart, Money, Product};

// =============================================================================
// Mock Service
// =============================================================================

fn wire_product(id: &str, variant: Option<&str>, stock: i64, buying: f64, selling: f64) -> Value {
    let mut product = json!({
        "productId": id,
        "name": format!("Product {}", id),
        "stock": stock,
        "buyingPrice": buying,
        "sellingPrice": selling,
    });
    if let Some(variant) = variant {
        product["variant"] = json!(variant);
    }
    product
}

async fn list_products() -> Json<Value> {
    Json(json!([
        wire_product("001", None, 10, 100.0, 150.0),
        wire_product("002", Some("Small"), 20, 200.0, 250.0),
        wire_product("002", Some("Large"), 5, 260.0, 320.0),
    ]))
}

/// `/products/{id}`: object for a single variant, array for several.
async fn get_product(Path(id): Path<String>) -> (StatusCode, Json<Value>) {
    match id.as_str() {
        "001" => (
            StatusCode::OK,
            Json(wire_product("001", None, 10, 100.0, 150.0)),
        ),
        "002" => (
            StatusCode::OK,
            Json(json!([
                wire_product("002", Some("Small"), 20, 200.0, 250.0),
                wire_product("002", Some("Large"), 5, 260.0, 320.0),
            ])),
        ),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "Product not found" })),
        ),
    }
}

#[derive(Deserialize)]
struct SearchParams {
    query: String,
}

async fn search_products(Query(params): Query<SearchParams>) -> Json<Value> {
    if params.query.to_lowercase().contains("product") {
        Json(json!([wire_product("001", None, 10, 100.0, 150.0)]))
    } else {
        Json(json!([]))
    }
}

async fn next_id() -> Json<Value> {
    Json(json!({ "productId": "003" }))
}

/// `/bills`: rejects a known-bad product, otherwise persists and echoes
/// the tendered cash and change back on the stored bill.
async fn create_bill(Json(request): Json<Value>) -> (StatusCode, Json<Value>) {
    let items = request["items"].as_array().cloned().unwrap_or_default();
    if items.iter().any(|item| item["productId"] == "999") {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "Insufficient stock for Product 999" })),
        );
    }

    (
        StatusCode::CREATED,
        Json(json!({
            "billId": 101,
            "date": "2024-03-15",
            "time": "14:32:05",
            "items": items.iter().map(|item| json!({
                "productId": item["productId"],
                "name": "Product",
                "variant": item["variant"],
                "quantity": item["quantity"],
                "price": item["price"].as_f64().unwrap_or(150.0),
                "total": 300.0
            })).collect::<Vec<_>>(),
            "totalAmount": 300.0,
            "cash": request["cash"],
            "change": request["change"]
        })),
    )
}

async fn current_day() -> Json<Value> {
    Json(json!({
        "date": "2024-03-15",
        "totalSales": 4580.5,
        "totalProfit": 920.25,
        "items": [{
            "productId": "001",
            "name": "Product 001",
            "soldQuantity": 12,
            "totalIncome": 1800.0,
            "profit": 240.0
        }],
        "bills": []
    }))
}

async fn end_day() -> StatusCode {
    StatusCode::OK
}

async fn available_dates() -> Json<Value> {
    Json(json!(["2024-03-13", "2024-03-14", "2024-03-15"]))
}

/// Starts the mock on a random port and returns a base URL with `/api`.
async fn start_mock() -> String {
    let app = Router::new()
        .route("/api/products", get(list_products))
        .route("/api/products/next-id", get(next_id))
        .route("/api/products/search", get(search_products))
        .route("/api/products/{id}", get(get_product))
        .route("/api/bills", post(create_bill))
        .route("/api/day/current", get(current_day))
        .route("/api/day/end", post(end_day))
        .route("/api/summary/available-dates", get(available_dates));

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock service");
    let addr: SocketAddr = listener.local_addr().expect("mock service address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock service failed");
    });

    format!("http://{}/api", addr)
}

async fn connect_client() -> CatalogClient {
    let base_url = start_mock().await;
    let config = ServiceConfig::default().with_base_url(base_url);
    CatalogClient::new(&config).expect("client from mock config")
}

fn sellable(id: &str, stock: i64, buying: i64, selling: i64) -> Product {
    Product {
        product_id: id.to_string(),
        name: format!("Product {}", id),
        variant: "Standard".to_string(),
        stock,
        buying_price: Money::from_rupees(buying),
        selling_price: Money::from_rupees(selling),
        category_id: String::new(),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn test_products_round_trip() {
    let client = connect_client().await;

    let products = client.products().await.expect("catalog load");
    assert_eq!(products.len(), 3);

    // camelCase keys and decimal rupees decode into the domain types
    assert_eq!(products[0].product_id, "001");
    assert_eq!(products[0].selling_price, Money::from_rupees(150));

    // Missing variant reads as Standard
    assert_eq!(products[0].variant, "Standard");
    assert_eq!(products[2].variant, "Large");
}

#[tokio::test]
async fn test_product_lookup_accepts_object_or_array() {
    let client = connect_client().await;

    let single = client.product("001").await.expect("single variant lookup");
    assert_eq!(single.len(), 1);

    let variants = client.product("002").await.expect("multi variant lookup");
    assert_eq!(variants.len(), 2);
    assert_eq!(variants[0].variant, "Small");
}

#[tokio::test]
async fn test_product_not_found_surfaces_server_message() {
    let client = connect_client().await;

    let err = client.product("404").await.expect_err("unknown id");
    assert!(err.is_not_found());
    match err {
        ServiceError::Status { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Product not found");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_search_round_trip() {
    let client = connect_client().await;

    let hits = client.search_products("product").await.expect("search");
    assert_eq!(hits.len(), 1);

    let misses = client.search_products("nothing here").await.expect("search");
    assert!(misses.is_empty());
}

#[tokio::test]
async fn test_next_product_id() {
    let client = connect_client().await;
    assert_eq!(client.next_product_id().await.expect("next id"), "003");
}

#[tokio::test]
async fn test_create_bill_round_trip() {
    let client = connect_client().await;

    let mut cart = Cart::new();
    cart.add_product(&sellable("001", 10, 100, 150), 2)
        .expect("add to cart");

    let request = BillRequest::from_cart(&cart, Money::from_rupees(500)).expect("bill request");
    let bill = client.create_bill(&request).await.expect("bill creation");

    assert_eq!(bill.bill_id, 101);
    // The mock echoes the tendered amounts, proving the request carried them
    assert_eq!(bill.cash, Money::from_rupees(500));
    assert_eq!(bill.change, Money::from_rupees(200));
    assert_eq!(bill.items.len(), 1);
}

#[tokio::test]
async fn test_create_bill_rejection_surfaces_server_message() {
    let client = connect_client().await;

    let mut cart = Cart::new();
    cart.add_product(&sellable("999", 10, 100, 150), 2)
        .expect("add to cart");
    let request = BillRequest::from_cart(&cart, Money::from_rupees(500)).expect("bill request");

    let err = client.create_bill(&request).await.expect_err("rejection");
    match err {
        ServiceError::Status { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Insufficient stock for Product 999");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_day_round_trip() {
    let client = connect_client().await;

    let day = client.current_day().await.expect("day summary");
    assert_eq!(day.date, "2024-03-15");
    assert_eq!(day.total_sales, Money::from_paisa(458_050));
    assert_eq!(day.items[0].sold_quantity, 12);

    client.end_day().await.expect("end day");
}

#[tokio::test]
async fn test_available_dates_is_plain_array() {
    let client = connect_client().await;

    let dates = client.available_dates().await.expect("dates");
    assert_eq!(dates, vec!["2024-03-13", "2024-03-14", "2024-03-15"]);
}
