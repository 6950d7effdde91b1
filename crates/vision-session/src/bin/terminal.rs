//! # Register Smoke Tool
//!
//! Opens a selling session against a live Catalog & Billing Service and
//! rings up a dry-run sale: everything except the final bill submission.
//!
//! ## Usage
//! ```bash
//! # Default service (http://localhost:5000/api), ring up product 001
//! cargo run -p vision-session --bin terminal
//!
//! # Pick the product and cash tendered
//! cargo run -p vision-session --bin terminal -- --id 2 --cash 500
//!
//! # Point at another service
//! VISION_API_URL=http://192.168.1.50:5000/api cargo run -p vision-session --bin terminal
//! ```
//!
//! The tool never posts a bill, so it is safe to run against a store's
//! live service. It loads the catalog, adds one product to a cart, and
//! prints the totals the register would show.

use std::env;
use std::sync::Arc;

use vision_api::{CatalogClient, CatalogService, ServiceConfig};
use vision_core::Money;
use vision_session::{CartAdd, SellingSession};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    let mut product_id = "1".to_string();
    let mut cash_rupees: i64 = 500;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--id" if i + 1 < args.len() => {
                product_id = args[i + 1].clone();
                i += 2;
            }
            "--cash" if i + 1 < args.len() => {
                cash_rupees = args[i + 1].parse()?;
                i += 2;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Usage: terminal [--id <productId>] [--cash <rupees>]");
                std::process::exit(1);
            }
        }
    }

    let config = ServiceConfig::load_or_default(None);
    println!("Connecting to {}", config.base_url);

    let client: Arc<dyn CatalogService> = Arc::new(CatalogClient::new(&config)?);
    let mut session = SellingSession::open(client).await?;

    println!("✓ Catalog loaded: {} products", session.index().len());

    match session.day() {
        Some(day) => println!(
            "  Today so far: {} sold, {} profit",
            day.total_sales, day.total_profit
        ),
        None => println!("  Day counters unavailable"),
    }

    let low = session.low_stock();
    if !low.is_empty() {
        println!("  Low stock ({} products):", low.len());
        for product in low.iter().take(5) {
            println!(
                "    {} {} ({} left)",
                product.product_id,
                product.display_name(),
                product.stock
            );
        }
    }

    println!();
    println!("Ringing up product {}...", product_id);
    let key = match session.add_by_id(&product_id)? {
        CartAdd::Added(key) => key,
        CartAdd::Variants(variants) => {
            println!("  {} variants, taking the first:", variants.len());
            for variant in &variants {
                println!("    {} at {}", variant.variant, variant.selling_price);
            }
            session.add_to_cart(&variants[0].unique_key(), 1)?
        }
    };

    let line = session.cart().line(&key).ok_or("cart line vanished")?;
    println!(
        "✓ In cart: {} x {} = {}",
        line.quantity(),
        line.product.display_name(),
        line.line_total()
    );

    let cash = Money::from_rupees(cash_rupees);
    println!();
    println!("  Total:  {}", session.cart().total());
    println!("  Cash:   {}", cash);
    println!("  Change: {}", session.change_due(cash));
    println!();
    println!("✓ Dry run complete, no bill was submitted");

    Ok(())
}
