//! Unified error types for the storefront ledgers.
//!
//! Every ledger operation returns [`Result`]; callers never get a blocking
//! dialog or a silent no-op. Missing records surface as the per-record
//! `*NotFound` variants rather than early returns.

use thiserror::Error;

/// All errors the storefront can produce.
#[derive(Debug, Error)]
pub enum Error {
    /// A required field was missing or malformed (empty cart, blank name,
    /// unknown status string, out-of-range rating, ...).
    #[error("Validation error: {message}")]
    Validation {
        /// Description of what failed validation
        message: String,
    },

    /// An action was attempted without the role it requires, or with a
    /// wrong admin passphrase.
    #[error("Auth error: {message}")]
    Auth {
        /// Description of the missing authority
        message: String,
    },

    /// No order with the given identifier exists.
    #[error("Order not found: {order_id}")]
    OrderNotFound {
        /// The order identifier that failed to resolve
        order_id: String,
    },

    /// No refund request with the given identifier exists.
    #[error("Refund request not found: {refund_id}")]
    RefundNotFound {
        /// The refund identifier that failed to resolve
        refund_id: String,
    },

    /// No product with the given identifier exists.
    #[error("Product not found: {product_id}")]
    ProductNotFound {
        /// The product identifier that failed to resolve
        product_id: String,
    },

    /// No upload record with the given identifier exists.
    #[error("Upload not found: {upload_id}")]
    UploadNotFound {
        /// The upload identifier that failed to resolve
        upload_id: String,
    },

    /// Configuration could not be loaded or parsed.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration problem
        message: String,
    },

    /// Database error from the persistence layer.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error (catalog seed file, .env).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
