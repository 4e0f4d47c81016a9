//! Vector search strategy.

use std::sync::Arc;

use vellum_core::{CorpusStore, Result, ScoredFragment, Strategy};
use vellum_embeddings::normalized_similarity;

use crate::config::RetrievalConfig;
use crate::strategy::with_store_timeout;

/// Semantic search over fragment embeddings.
///
/// The store answers with candidate fragments carrying their stored
/// embeddings. Similarity is recomputed engine-side and the threshold
/// re-applied, so an approximate backend can never leak a result below the
/// configured floor.
pub struct VectorStrategy {
    store: Arc<dyn CorpusStore>,
}

impl VectorStrategy {
    /// Create the strategy over a corpus store.
    pub fn new(store: Arc<dyn CorpusStore>) -> Self {
        Self { store }
    }

    /// Fragments within `scope` semantically close to `query_vector`.
    ///
    /// Results satisfy `similarity >= config.similarity_threshold` and are
    /// sorted by similarity descending, with ties broken by most recent
    /// update and then by id. Fragments the store returned without an
    /// embedding, or with an embedding of the wrong dimension, are skipped.
    pub async fn search(
        &self,
        query_vector: &[f32],
        scope: &str,
        config: &RetrievalConfig,
    ) -> Result<Vec<ScoredFragment>> {
        let fragments = with_store_timeout(
            config.store_timeout_ms,
            "vector query",
            self.store.vector_query(
                scope,
                query_vector,
                config.similarity_threshold,
                config.per_strategy_limit,
            ),
        )
        .await?;

        let mut results = Vec::with_capacity(fragments.len());
        for fragment in fragments {
            let Some(embedding) = fragment.embedding.as_deref() else {
                continue;
            };
            let similarity = match normalized_similarity(query_vector, embedding) {
                Ok(similarity) => similarity,
                Err(err) => {
                    log::warn!("Skipping fragment {}: {}", fragment.id, err);
                    continue;
                }
            };
            if similarity >= config.similarity_threshold {
                results.push(ScoredFragment::new(fragment, similarity, Strategy::Vector));
            }
        }

        results.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| b.fragment.updated_at.cmp(&a.fragment.updated_at))
                .then_with(|| a.fragment.id.cmp(&b.fragment.id))
        });
        results.truncate(config.per_strategy_limit);

        Ok(results)
    }
}

// ============================================================================
// Tests
// ============================================================================
