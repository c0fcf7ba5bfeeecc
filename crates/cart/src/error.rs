//! Cart store errors.

use thiserror::Error;

use crate::storage::StorageError;

/// Errors returned by [`CartStore`](crate::CartStore) operations.
///
/// None of these are retried by the store.
#[derive(Debug, Error)]
pub enum CartError {
    /// Malformed identity or quantity. A caller contract violation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No entry has the requested identity.
    #[error("Cart item not found: {key}")]
    NotFound {
        /// Storage key of the missing entry.
        key: String,
    },

    /// A cart entry's product has no known unit price.
    #[error("Price unavailable for product {product_id}")]
    PriceUnavailable {
        /// Product without a price.
        product_id: String,
    },

    /// The cart total does not fit in a price.
    #[error("Price overflow computing the total for product {product_id}")]
    PriceOverflow {
        /// Product whose line overflowed the total.
        product_id: String,
    },

    /// Two different identities derive the same storage key.
    #[error("Storage key {key} already holds a different cart item")]
    KeyConflict {
        /// The shared storage key.
        key: String,
    },

    /// A persisted value is not a valid cart record.
    #[error("Corrupt cart record at {key}: {source}")]
    Corrupt {
        /// Storage key of the bad record.
        key: String,
        /// Decoding failure.
        #[source]
        source: serde_json::Error,
    },

    /// The storage backend failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type alias for `CartError`.
pub type Result<T> = std::result::Result<T, CartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_error_display() {
        let err = CartError::NotFound {
            key: "42-Blue".to_string(),
        };
        assert_eq!(err.to_string(), "Cart item not found: 42-Blue");

        let err = CartError::PriceUnavailable {
            product_id: "9".to_string(),
        };
        assert_eq!(err.to_string(), "Price unavailable for product 9");

        let err = CartError::InvalidInput("quantity must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid input: quantity must be positive");
    }
}
