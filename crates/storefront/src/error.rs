//! Unified error handling for the cart.
//!
//! Validation problems are never errors here: a skipped trigger or a rejected
//! checkout is a normal outcome reported through the page view. `CartError`
//! only covers failures of the storage backend and of rendering.

use thiserror::Error;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum CartError {
    /// The storage backend failed to write.
    #[error("Storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The cart could not be encoded.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// An HTML fragment failed to render.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

impl CartError {
    /// Wrap a backend error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Box::new(err))
    }
}

/// Result type alias for `CartError`.
pub type Result<T> = std::result::Result<T, CartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_error_display() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err = CartError::storage(io);
        assert_eq!(err.to_string(), "Storage error: read-only");
    }

    #[test]
    fn test_cart_error_source_is_backend_error() {
        use std::error::Error as _;

        let io = std::io::Error::other("disk full");
        let err = CartError::storage(io);
        assert_eq!(err.source().map(ToString::to_string).as_deref(), Some("disk full"));
    }
}
