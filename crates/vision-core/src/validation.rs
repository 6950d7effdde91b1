//! # Validation Module
//!
//! Input validation utilities for Vision POS.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Register UI                                                  │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate cashier feedback                                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (Rust)                                           │
//! │  ├── Product id normalization ("2" → "002")                            │
//! │  └── Business rule validation (quantity, cash, query)                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Billing Server                                               │
//! │  ├── Stock re-check at sale time                                       │
//! │  └── Persistence constraints                                           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,no_run
//! use vision_core::validation::{normalize_product_id, validate_quantity};
//!
//! // Normalize a typed product id before lookup
//! assert_eq!(normalize_product_id("2").unwrap(), "002");
//!
//! // Validate quantity before cart operation
//! validate_quantity(5).unwrap();
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::PRODUCT_ID_WIDTH;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Product Id Validators
// =============================================================================

/// Normalizes a typed product id to catalog form.
///
/// ## Rules
/// - Must not be empty
/// - Must contain only digits
/// - Short ids are zero-padded to 3 characters ("2" → "002")
/// - Ids already 3 characters or longer pass through unchanged
///
/// ## Example
/// ```rust
/// use vision_core::validation::normalize_product_id;
///
/// assert_eq!(normalize_product_id("2").unwrap(), "002");
/// assert_eq!(normalize_product_id("045").unwrap(), "045");
/// assert!(normalize_product_id("12a").is_err());
/// ```
pub fn normalize_product_id(input: &str) -> ValidationResult<String> {
    let id = input.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "product id".to_string(),
        });
    }

    if !id.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "product id".to_string(),
            reason: "must contain only digits".to_string(),
        });
    }

    Ok(format!("{:0>width$}", id, width = PRODUCT_ID_WIDTH))
}

/// Checks whether a search input should be treated as a product code.
///
/// A code is 1 to 3 digits and nothing else. Anything longer or mixed is
/// treated as a name search instead.
pub fn is_product_code(input: &str) -> bool {
    let input = input.trim();
    !input.is_empty()
        && input.len() <= PRODUCT_ID_WIDTH
        && input.chars().all(|c| c.is_ascii_digit())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (the caller decides what an empty query means)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.len() > 100 {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: 100,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
///
/// Stock limits are enforced separately by the cart, which knows the
/// product being sold.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates cash tendered by the customer.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed; short payment simply yields zero change
pub fn validate_cash(cash: Money) -> ValidationResult<()> {
    if cash.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "cash".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
