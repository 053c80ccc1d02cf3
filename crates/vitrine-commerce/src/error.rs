//! Storefront error types.

use crate::ids::ProductId;
use thiserror::Error;

/// Errors that can occur when resolving storefront data.
///
/// Cart transitions are total and never produce errors; the failure
/// domain is limited to lookups against the catalog and money arithmetic
/// across currencies.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorefrontError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },
}
