//! Mock embedding provider for tests.

use async_trait::async_trait;
use vellum_core::{Error, Result};

use crate::provider::EmbeddingProvider;

/// A mock embedding provider for testing.
///
/// Generates deterministic vectors derived from the input bytes, so the same
/// text always embeds to the same unit-normalized vector. The `failing`
/// constructor builds a provider whose every call returns
/// [`Error::EmbeddingUnavailable`], for exercising degraded retrieval.
pub struct MockEmbeddingProvider {
    dimension: usize,
    fail: bool,
}

impl MockEmbeddingProvider {
    /// Create a mock provider with the given dimension.
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            fail: false,
        }
    }

    /// Create a mock provider that fails every call.
    pub fn failing() -> Self {
        Self {
            dimension: 0,
            fail: true,
        }
    }

    /// Generate a deterministic embedding from text.
    fn deterministic_embedding(&self, text: &str) -> Vec<f32> {
        let bytes = text.as_bytes();
        let mut embedding = vec![0.0f32; self.dimension];

        for (i, component) in embedding.iter_mut().enumerate() {
            let byte = if bytes.is_empty() {
                0u8
            } else {
                bytes[i % bytes.len()]
            };
            *component = ((byte as f32 + i as f32) % 256.0) / 256.0;
        }

        // Normalize to unit vector
        let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for component in &mut embedding {
                *component /= norm;
            }
        }

        embedding
    }
}

impl Default for MockEmbeddingProvider {
    fn default() -> Self {
        Self::new(16)
    }
}

#[async_trait]
impl EmbeddingProvider for MockEmbeddingProvider {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        if self.fail {
            return Err(Error::embedding_unavailable(
                "mock provider configured to fail",
            ));
        }
        Ok(self.deterministic_embedding(text))
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn name(&self) -> &str {
        "mock"
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_provider_creation() {
        let provider = MockEmbeddingProvider::new(384);
        assert_eq!(provider.dimension(), 384);
        assert_eq!(provider.name(), "mock");
    }

    #[tokio::test]
    async fn test_mock_embed_unit_normalized() {
        let provider = MockEmbeddingProvider::new(8);
        let embedding = provider.embed("hello world").await.unwrap();

        assert_eq!(embedding.len(), 8);

        let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[tokio::test]
    async fn test_mock_embed_deterministic() {
        let provider = MockEmbeddingProvider::new(16);
        let e1 = provider.embed("same text").await.unwrap();
        let e2 = provider.embed("same text").await.unwrap();

        assert_eq!(e1, e2);
    }

    #[tokio::test]
    async fn test_mock_embed_different_texts() {
        let provider = MockEmbeddingProvider::new(16);
        let e1 = provider.embed("text one").await.unwrap();
        let e2 = provider.embed("text two").await.unwrap();

        assert_ne!(e1, e2);
    }

    #[tokio::test]
    async fn test_mock_embed_empty_text() {
        let provider = MockEmbeddingProvider::new(4);
        let embedding = provider.embed("").await.unwrap();

        // Empty input embeds like any other text, no panic on the empty slice
        assert_eq!(embedding.len(), 4);
    }

    #[tokio::test]
    async fn test_failing_mock_returns_embedding_unavailable() {
        let provider = MockEmbeddingProvider::failing();
        let err = provider.embed("anything").await.unwrap_err();

        assert!(err.is_embedding_unavailable());
    }
}
