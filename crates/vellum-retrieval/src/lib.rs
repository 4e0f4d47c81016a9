//! Retrieval pipeline that grounds text generation in a fragment corpus.
//!
//! Given a query and a scope, the pipeline gathers candidate fragments
//! through a cascade of strategies, merges and ranks them, and packs the
//! winners into a budgeted, labeled context string ready to prepend to a
//! generation prompt.
//!
//! # Architecture
//!
//! ```text
//!   query ──► RetrievalService ── validate scope and text
//!                   │
//!                   ▼
//!          RetrievalCoordinator
//!             │             │ (concurrent)
//!             ▼             ▼
//!        embed query   LexicalStrategy ──► store.term_query
//!             │
//!             ▼
//!        VectorStrategy ──► store.vector_query
//!             │             │
//!             └──► merge ◄──┘
//!                    │ empty?
//!                    ▼
//!             RecencyStrategy ──► store.recent_embedded
//!                    │
//!                    ▼
//!               pack_context ──► RetrievalResult
//! ```
//!
//! Vector search carries real cosine similarities; lexical and recency hits
//! carry fixed scores so the three signals rank against each other
//! predictably. An unreachable embedding provider degrades the pipeline to
//! lexical search instead of failing it; an unreachable store always fails.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use vellum_embeddings::MockEmbeddingProvider;
//! use vellum_retrieval::{MemoryCorpus, RetrievalQuery, RetrievalService};
//!
//! #[tokio::main]
//! async fn main() -> vellum_core::Result<()> {
//!     let corpus = Arc::new(MemoryCorpus::new());
//!     let provider = Arc::new(MockEmbeddingProvider::default());
//!     let service = RetrievalService::new(corpus, provider);
//!
//!     let query = RetrievalQuery::new("tidal locking", "notebook-1");
//!     let result = service.retrieve(&query).await?;
//!     println!("{}", result.context);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod coordinator;
pub mod memory;
pub mod packer;
pub mod service;
pub mod strategy;
pub mod types;

// Re-exports — configuration
pub use config::RetrievalConfig;

// Re-exports — pipeline
pub use coordinator::{CandidatePool, RetrievalCoordinator, merge_candidates};
pub use packer::{PackedContext, pack_context};
pub use service::RetrievalService;

// Re-exports — queries and results
pub use types::{RetrievalQuery, RetrievalResult, RetrievalStats};

// Re-exports — storage
pub use memory::MemoryCorpus;

// Re-exports — strategies
pub use strategy::{LexicalStrategy, RecencyStrategy, VectorStrategy, extract_terms};
