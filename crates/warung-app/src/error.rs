//! # App Error Type
//!
//! Unified error type for the session layer's fallible entry points.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Error Flow                                     │
//! │                                                                     │
//! │  CatalogError  ──► AppError { CatalogUnavailable } ──► host shell   │
//! │  CheckoutError ──► AppError { ValidationError }                     │
//! │                                                                     │
//! │  Separately, the visitor sees each failure exactly once as a        │
//! │  transient Notice; nothing here is fatal — every failure leaves     │
//! │  the UI consistent and continuable.                                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use warung_core::error::CheckoutError;

use crate::catalog::CatalogError;

/// Error returned from session entry points to the host shell.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppError {
    /// Machine-readable error code for programmatic handling.
    pub code: ErrorCode,

    /// Human-readable message for logs.
    pub message: String,
}

/// Error codes for the host shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The catalog fetch failed; the product list stays empty.
    CatalogUnavailable,

    /// Checkout input validation failed.
    ValidationError,

    /// Anything unexpected.
    Internal,
}

impl AppError {
    /// Creates a new app error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Internal, message)
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        AppError::new(ErrorCode::CatalogUnavailable, err.to_string())
    }
}

impl From<CheckoutError> for AppError {
    fn from(err: CheckoutError) -> Self {
        AppError::validation(err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_checkout_error() {
        let err: AppError = CheckoutError::EmptyCart.into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "cart is empty");
    }

    #[test]
    fn test_display() {
        let err = AppError::internal("boom");
        assert_eq!(err.to_string(), "[Internal] boom");
    }
}
