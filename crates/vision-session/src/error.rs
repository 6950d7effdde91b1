//! # Session Error Types
//!
//! One error type for everything the selling flow can surface: business
//! rule rejections from the core and transport or server failures from the
//! service client. Both wrap transparently, so the cashier sees the
//! underlying message ("Insufficient stock for ...") without a prefix.

use thiserror::Error;

use vision_api::ServiceError;
use vision_core::{CoreError, ValidationError};

/// Result type alias for selling flow operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Failures surfaced to the register during a selling session.
///
/// Every variant is recoverable. The cart is never touched by a failed
/// operation, so the cashier fixes the input or retries.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Business rule rejection from the cart and billing core.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Transport or server failure from the service client.
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl From<ValidationError> for SessionError {
    fn from(err: ValidationError) -> Self {
        SessionError::Core(err.into())
    }
}
