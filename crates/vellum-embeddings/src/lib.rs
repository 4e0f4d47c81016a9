//! Embedding generation for Vellum.
//!
//! This crate provides the embedding side of retrieval: the
//! [`EmbeddingProvider`] trait, an OpenAI-compatible HTTP adapter, a
//! deterministic mock for tests, and the similarity math used to score
//! candidates.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      vellum-embeddings                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  EmbeddingProvider trait                                    │
//! │  ├── HttpEmbeddingProvider (OpenAI-compatible endpoint)     │
//! │  └── MockEmbeddingProvider (deterministic, for tests)       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Similarity (cosine + clamped retrieval score)              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use vellum_embeddings::{EmbeddingProvider, HttpEmbeddingConfig, HttpEmbeddingProvider};
//!
//! let config = HttpEmbeddingConfig::default()
//!     .with_api_key(std::env::var("OPENAI_API_KEY")?)
//!     .with_dimension(1536);
//! let provider: Arc<dyn EmbeddingProvider> = Arc::new(HttpEmbeddingProvider::new(config));
//!
//! let vector = provider.embed("What did I write about tidal locking?").await?;
//! ```

pub mod http;
pub mod mock;
pub mod provider;
pub mod similarity;

// Re-exports — provider trait and implementations
pub use http::{HttpEmbeddingConfig, HttpEmbeddingProvider};
pub use mock::MockEmbeddingProvider;
pub use provider::EmbeddingProvider;

// Re-exports — similarity math
pub use similarity::{cosine_similarity, normalized_similarity};
