//! Retrieval service.
//!
//! The one entry point callers use: validate the query, gather candidates
//! through the coordinator, pack them into context, and report what happened
//! in the result stats.

use std::sync::Arc;

use vellum_core::{CorpusStore, Error, Result, ScoredFragment};
use vellum_embeddings::EmbeddingProvider;

use crate::coordinator::RetrievalCoordinator;
use crate::packer::pack_context;
use crate::types::{RetrievalQuery, RetrievalResult, RetrievalStats};

/// Facade over the full retrieval pipeline.
pub struct RetrievalService {
    coordinator: RetrievalCoordinator,
}

impl RetrievalService {
    /// Create a service over a corpus store and an embedding provider.
    pub fn new(store: Arc<dyn CorpusStore>, embeddings: Arc<dyn EmbeddingProvider>) -> Self {
        Self {
            coordinator: RetrievalCoordinator::new(store, embeddings),
        }
    }

    /// Retrieve context for a query.
    ///
    /// A blank scope is an [`Error::InvalidScope`]. A blank query text is not
    /// an error and returns an empty result without touching the store or
    /// the embedding provider. An empty corpus likewise yields an empty
    /// result, never an error.
    pub async fn retrieve(&self, query: &RetrievalQuery) -> Result<RetrievalResult> {
        query.config.validate()?;

        let scope = query.scope.trim();
        if scope.is_empty() {
            return Err(Error::invalid_scope("scope id must not be blank"));
        }

        let text = query.text.trim();
        if text.is_empty() {
            return Ok(RetrievalResult::empty());
        }

        let pool = self.coordinator.gather(text, scope, &query.config).await?;
        let packed = pack_context(&pool.fragments, &query.config);

        let sources: Vec<ScoredFragment> = pool
            .fragments
            .iter()
            .take(query.config.max_sources)
            .cloned()
            .collect();

        let stats = RetrievalStats {
            vector_candidates: pool.vector_candidates,
            lexical_candidates: pool.lexical_candidates,
            recency_candidates: pool.recency_candidates,
            pool_size: pool.fragments.len(),
            packed_fragments: packed.packed,
            context_chars: packed.context.chars().count(),
            embedding_degraded: pool.embedding_degraded,
        };

        log::info!(
            "Retrieved {} of {} candidates for scope {} ({} context chars{})",
            stats.packed_fragments,
            stats.pool_size,
            scope,
            stats.context_chars,
            if stats.embedding_degraded { ", degraded" } else { "" },
        );

        Ok(RetrievalResult {
            context: packed.context,
            sources,
            stats,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
