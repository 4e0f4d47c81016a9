//! Embedding provider trait.
//!
//! This module defines the `EmbeddingProvider` trait that abstracts over
//! embedding generation backends. The engine only ever embeds one query
//! string per retrieval, so the contract is deliberately small.
//!
//! # Providers
//!
//! - [`HttpEmbeddingProvider`](crate::http::HttpEmbeddingProvider):
//!   OpenAI-compatible HTTP endpoint
//! - [`MockEmbeddingProvider`](crate::mock::MockEmbeddingProvider):
//!   deterministic fixed-dimension vectors for testing

use async_trait::async_trait;
use vellum_core::Result;

/// Trait for generating text embeddings.
///
/// Implementations wrap a specific embedding backend and provide a uniform
/// async interface. The trait requires `Send + Sync` to allow safe sharing
/// across async tasks.
///
/// Failures surface as
/// [`Error::EmbeddingUnavailable`](vellum_core::Error); the retrieval
/// coordinator treats that as a degraded state, not a fatal one.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Generate an embedding for a single text.
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// The embedding dimension.
    fn dimension(&self) -> usize;

    /// The provider name for diagnostics.
    fn name(&self) -> &str;
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_object_safety() {
        // Verify EmbeddingProvider can be used as a trait object
        fn _assert_object_safe(_: &dyn EmbeddingProvider) {}
    }
}
