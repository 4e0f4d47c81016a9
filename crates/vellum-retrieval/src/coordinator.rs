//! Candidate gathering across strategies.
//!
//! The coordinator owns the embedding provider and the three strategies and
//! runs the cascade for a single query: embed the query and run lexical
//! search concurrently, score vector candidates, merge the two pools, and
//! fall back to recency only when the merge produced nothing.
//!
//! Embedding failure is recoverable here. When the provider is down the
//! coordinator logs, marks the pool degraded, and carries on with whatever
//! lexical search found. Store failures are never recoverable and always
//! propagate.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use vellum_core::{CorpusStore, Error, Result, ScoredFragment};
use vellum_embeddings::EmbeddingProvider;

use crate::config::RetrievalConfig;
use crate::strategy::{LexicalStrategy, RecencyStrategy, VectorStrategy};

/// Candidates gathered for one query, with per-strategy counts.
#[derive(Debug)]
pub struct CandidatePool {
    /// Deduplicated candidates, best similarity first.
    pub fragments: Vec<ScoredFragment>,
    /// Vector candidates before merging.
    pub vector_candidates: usize,
    /// Lexical candidates before merging.
    pub lexical_candidates: usize,
    /// Recency candidates, non-zero only when the fallback fired.
    pub recency_candidates: usize,
    /// Whether vector search was skipped because embedding failed.
    pub embedding_degraded: bool,
}

/// Runs the strategy cascade for a query.
pub struct RetrievalCoordinator {
    embeddings: Arc<dyn EmbeddingProvider>,
    vector: VectorStrategy,
    lexical: LexicalStrategy,
    recency: RecencyStrategy,
}

impl RetrievalCoordinator {
    /// Create a coordinator over a store and an embedding provider.
    pub fn new(store: Arc<dyn CorpusStore>, embeddings: Arc<dyn EmbeddingProvider>) -> Self {
        Self {
            embeddings,
            vector: VectorStrategy::new(Arc::clone(&store)),
            lexical: LexicalStrategy::new(Arc::clone(&store)),
            recency: RecencyStrategy::new(store),
        }
    }

    /// Gather candidates for `text` within `scope`.
    ///
    /// Embedding errors propagate only when lexical and recency are both
    /// disabled and nothing can stand in for vector search. Store errors
    /// always propagate.
    pub async fn gather(
        &self,
        text: &str,
        scope: &str,
        config: &RetrievalConfig,
    ) -> Result<CandidatePool> {
        let (embedding, lexical) = tokio::join!(
            self.embed_query(text, config),
            self.lexical_candidates(text, scope, config),
        );
        let lexical = lexical?;

        let mut embedding_degraded = false;
        let vector = match embedding {
            Ok(Some(query_vector)) => self.vector.search(&query_vector, scope, config).await?,
            Ok(None) => Vec::new(),
            Err(err) => {
                if !config.lexical_enabled && !config.recency_enabled {
                    return Err(err);
                }
                log::warn!("Embedding failed, continuing without vector search: {err}");
                embedding_degraded = true;
                Vec::new()
            }
        };

        let vector_candidates = vector.len();
        let lexical_candidates = lexical.len();
        let mut fragments = merge_candidates(vector, lexical);

        let mut recency_candidates = 0;
        if fragments.is_empty() && config.recency_enabled {
            fragments = self.recency.search(scope, config).await?;
            recency_candidates = fragments.len();
        }

        Ok(CandidatePool {
            fragments,
            vector_candidates,
            lexical_candidates,
            recency_candidates,
            embedding_degraded,
        })
    }

    /// Embed the query text, or `None` when vector search is disabled.
    async fn embed_query(&self, text: &str, config: &RetrievalConfig) -> Result<Option<Vec<f32>>> {
        if !config.vector_enabled {
            return Ok(None);
        }
        let deadline = Duration::from_millis(config.embed_timeout_ms);
        match tokio::time::timeout(deadline, self.embeddings.embed(text)).await {
            Ok(result) => result.map(Some),
            Err(_) => Err(Error::embedding_unavailable(format!(
                "embedding timed out after {}ms",
                config.embed_timeout_ms
            ))),
        }
    }

    async fn lexical_candidates(
        &self,
        text: &str,
        scope: &str,
        config: &RetrievalConfig,
    ) -> Result<Vec<ScoredFragment>> {
        if !config.lexical_enabled {
            return Ok(Vec::new());
        }
        self.lexical.search(text, scope, config).await
    }
}

/// Merge vector and lexical candidates into one pool.
///
/// Vector candidates win on id collisions, keeping their computed similarity
/// over the fixed lexical score. The final order is best similarity first;
/// the sort is stable, so at equal similarity vector candidates stay ahead
/// of lexical ones and each strategy's internal order is preserved.
pub fn merge_candidates(
    vector: Vec<ScoredFragment>,
    lexical: Vec<ScoredFragment>,
) -> Vec<ScoredFragment> {
    let mut seen: HashSet<String> = vector.iter().map(|c| c.fragment.id.clone()).collect();
    let mut merged = vector;
    for candidate in lexical {
        if seen.insert(candidate.fragment.id.clone()) {
            merged.push(candidate);
        }
    }
    merged.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    merged
}

// ============================================================================
// Tests
// ============================================================================
