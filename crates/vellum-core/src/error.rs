//! Error types for Vellum retrieval operations.
//!
//! This module provides the common `Error` type and `Result<T>` alias used
//! across all Vellum crates. Uses `thiserror` for derive macros.
//!
//! The taxonomy separates failures by what the caller can do about them: an
//! unavailable embedding provider is recoverable (retrieval degrades to the
//! remaining strategies), an unavailable corpus store is not, and scope or
//! configuration problems are rejected before any backend is contacted.
//! An empty retrieval is never an error — it is an `Ok` result with empty
//! context and sources.

use thiserror::Error;

/// Errors that can occur in Vellum operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The embedding provider failed or timed out.
    ///
    /// Recoverable: the coordinator treats vector results as empty and
    /// continues with the strategies that do not need an embedding.
    #[error("Embedding provider unavailable: {0}")]
    EmbeddingUnavailable(String),

    /// The corpus store failed or timed out.
    ///
    /// Not recoverable: every strategy reads the same store, so the whole
    /// retrieval fails.
    #[error("Corpus store unavailable: {0}")]
    StoreUnavailable(String),

    /// The query scope was missing or blank.
    #[error("Invalid scope: {0}")]
    InvalidScope(String),

    /// Two vectors disagreed on length.
    #[error("Embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Dimension the caller expected.
        expected: usize,
        /// Dimension actually received.
        actual: usize,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create an embedding-unavailable error.
    pub fn embedding_unavailable(msg: impl Into<String>) -> Self {
        Self::EmbeddingUnavailable(msg.into())
    }

    /// Create a store-unavailable error.
    pub fn store_unavailable(msg: impl Into<String>) -> Self {
        Self::StoreUnavailable(msg.into())
    }

    /// Create an invalid-scope error.
    pub fn invalid_scope(msg: impl Into<String>) -> Self {
        Self::InvalidScope(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this error came from the embedding provider.
    ///
    /// The coordinator uses this to decide between degrading to non-vector
    /// strategies and failing the retrieval outright.
    pub fn is_embedding_unavailable(&self) -> bool {
        matches!(self, Self::EmbeddingUnavailable(_))
    }

    /// Whether this error came from the corpus store.
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_))
    }
}

/// Result type alias using Vellum's Error type.
pub type Result<T> = std::result::Result<T, Error>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor_helpers() {
        assert!(matches!(
            Error::embedding_unavailable("down"),
            Error::EmbeddingUnavailable(_)
        ));
        assert!(matches!(
            Error::store_unavailable("down"),
            Error::StoreUnavailable(_)
        ));
        assert!(matches!(
            Error::invalid_scope("blank"),
            Error::InvalidScope(_)
        ));
        assert!(matches!(Error::config("bad"), Error::Config(_)));
    }

    #[test]
    fn test_display_messages() {
        let err = Error::embedding_unavailable("connection refused");
        assert_eq!(
            err.to_string(),
            "Embedding provider unavailable: connection refused"
        );

        let err = Error::DimensionMismatch {
            expected: 384,
            actual: 16,
        };
        assert_eq!(
            err.to_string(),
            "Embedding dimension mismatch: expected 384, got 16"
        );
    }

    #[test]
    fn test_embedding_unavailable_predicate() {
        assert!(Error::embedding_unavailable("x").is_embedding_unavailable());
        assert!(!Error::store_unavailable("x").is_embedding_unavailable());
        assert!(!Error::config("x").is_embedding_unavailable());
    }

    #[test]
    fn test_store_unavailable_predicate() {
        assert!(Error::store_unavailable("x").is_store_unavailable());
        assert!(!Error::embedding_unavailable("x").is_store_unavailable());
        assert!(!Error::invalid_scope("x").is_store_unavailable());
    }
}
