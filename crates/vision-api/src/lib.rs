//! # vision-api: Catalog & Billing Service Client for Vision POS
//!
//! This crate owns all traffic between the register and the backend service.
//! Nothing else in the workspace opens a socket.
//!
//! ## Architecture Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Service Client Architecture                       │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    CatalogClient (client.rs)                     │  │
//! │  │                                                                  │  │
//! │  │  One reqwest::Client with request + connect timeouts            │  │
//! │  │  Typed wrappers over every endpoint, no retries                 │  │
//! │  └────────────────────────────┬─────────────────────────────────────┘  │
//! │                               │                                         │
//! │         ┌─────────────────────┼─────────────────────┐                  │
//! │         ▼                     ▼                     ▼                   │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────────────┐    │
//! │  │ ServiceConfig  │  │  Wire Types    │  │  ServiceError          │    │
//! │  │                │  │                │  │                        │    │
//! │  │ TOML file +    │  │ Bill, Day/     │  │ Config / Http /        │    │
//! │  │ VISION_* env   │  │ Daily/Monthly  │  │ Status{code, message}  │    │
//! │  │ overrides      │  │ Summary, draft │  │ categorized helpers    │    │
//! │  └────────────────┘  └────────────────┘  └────────────────────────┘    │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 CatalogService trait (service.rs)               │   │
//! │  │                                                                 │   │
//! │  │ The narrow seam the selling flow consumes: products, product,   │   │
//! │  │ search, create_bill, day_summary. Tests swap in a fake.         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`client`] - `CatalogClient`, the HTTP implementation
//! - [`config`] - Connection settings with env overrides
//! - [`error`] - Service error types
//! - [`service`] - The `CatalogService` trait
//! - [`types`] - JSON wire shapes
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vision_api::{CatalogClient, ServiceConfig};
//!
//! let config = ServiceConfig::load_or_default(None);
//! let client = CatalogClient::new(&config)?;
//!
//! let catalog = client.products().await?;
//! println!("{} products on sale", catalog.len());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod client;
pub mod config;
pub mod error;
pub mod service;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

pub use client::CatalogClient;
pub use config::{ServiceConfig, DEFAULT_BASE_URL};
pub use error::{ServiceError, ServiceResult};
pub use service::CatalogService;
pub use types::{
    Bill, BillItem, DailySummary, DaySummary, MonthlySummary, ProductDraft, ProductLookup,
    SoldItem,
};
