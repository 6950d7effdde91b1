//! # vision-session: Register Workflows for Vision POS
//!
//! The selling screen's brain: debounced product search and the cart-to-bill
//! flow, sitting between the pure rules in `vision-core` and the HTTP client
//! in `vision-api`.
//!
//! ## Where This Crate Sits
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Register UI                                     │
//! │              (keystrokes, clicks, rendered cart)                        │
//! └───────────────┬─────────────────────────────┬───────────────────────────┘
//!                 │                             │
//!                 ▼                             ▼
//! ┌───────────────────────────┐   ┌─────────────────────────────────────────┐
//! │       ProductSearch       │   │             SellingSession              │
//! │                           │   │                                         │
//! │  debounce, last query     │   │  catalog index, cart, day counters,     │
//! │  wins, id/name routing    │   │  checkout that never drops a cart       │
//! └─────────────┬─────────────┘   └───────────────────┬─────────────────────┘
//!               │                                     │
//!               └──────────────┬──────────────────────┘
//!                              ▼
//!               ┌─────────────────────────────┐
//!               │   Arc<dyn CatalogService>   │
//!               │   (vision-api HTTP client,  │
//!               │    or a fake in tests)      │
//!               └─────────────────────────────┘
//! ```
//!
//! Both workflows talk to the service through the [`CatalogService`] trait
//! object, so everything here is testable without a network.
//!
//! [`CatalogService`]: vision_api::CatalogService

pub mod error;
pub mod search;
pub mod selling;

pub use error::{SessionError, SessionResult};
pub use search::{ProductSearch, SearchOutcome, DEFAULT_DEBOUNCE};
pub use selling::{CartAdd, SellingSession};
