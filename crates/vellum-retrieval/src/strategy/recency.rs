//! Recency fallback strategy.
//!
//! Last resort when neither vector nor lexical search produced anything:
//! surface the most recently updated embedded fragments so generation still
//! has some grounding. Hits carry the fixed `recency_score` from the
//! configuration, deliberately below `lexical_score`.

use std::sync::Arc;

use vellum_core::{CorpusStore, Result, ScoredFragment, Strategy};

use crate::config::RetrievalConfig;
use crate::strategy::with_store_timeout;

/// Most-recently-updated fallback over embedded fragments.
pub struct RecencyStrategy {
    store: Arc<dyn CorpusStore>,
}

impl RecencyStrategy {
    /// Create the strategy over a corpus store.
    pub fn new(store: Arc<dyn CorpusStore>) -> Self {
        Self { store }
    }

    /// Most recently updated embedded fragments within `scope`.
    pub async fn search(
        &self,
        scope: &str,
        config: &RetrievalConfig,
    ) -> Result<Vec<ScoredFragment>> {
        let fragments = with_store_timeout(
            config.store_timeout_ms,
            "recency query",
            self.store.recent_embedded(scope, config.per_strategy_limit),
        )
        .await?;

        let mut results: Vec<ScoredFragment> = fragments
            .into_iter()
            .map(|fragment| ScoredFragment::new(fragment, config.recency_score, Strategy::Recency))
            .collect();

        results.sort_by(|a, b| {
            b.fragment
                .updated_at
                .cmp(&a.fragment.updated_at)
                .then_with(|| a.fragment.id.cmp(&b.fragment.id))
        });
        results.truncate(config.per_strategy_limit);

        Ok(results)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::memory::MemoryCorpus;
    use chrono::{Duration, Utc};
    use vellum_core::Fragment;

    fn corpus() -> Arc<MemoryCorpus> {
        let now = Utc::now();
        let corpus = MemoryCorpus::new();
        corpus
            .insert(
                Fragment::new("oldest", "scope-a", "Oldest", "body")
                    .with_embedding(vec![1.0, 0.0])
                    .with_updated_at(now - Duration::days(9)),
            )
            .unwrap();
        corpus
            .insert(
                Fragment::new("middle", "scope-a", "Middle", "body")
                    .with_embedding(vec![0.0, 1.0])
                    .with_updated_at(now - Duration::days(3)),
            )
            .unwrap();
        corpus
            .insert(
                Fragment::new("newest", "scope-a", "Newest", "body")
                    .with_embedding(vec![1.0, 1.0])
                    .with_updated_at(now),
            )
            .unwrap();
        corpus
            .insert(
                Fragment::new("unembedded", "scope-a", "Draft", "no embedding yet")
                    .with_updated_at(now),
            )
            .unwrap();
        corpus
            .insert(
                Fragment::new("elsewhere", "scope-b", "Elsewhere", "body")
                    .with_embedding(vec![1.0, 0.0]),
            )
            .unwrap();
        Arc::new(corpus)
    }

    #[tokio::test]
    async fn test_recency_search_orders_newest_first() {
        let strategy = RecencyStrategy::new(corpus());
        let config = RetrievalConfig::default();

        let results = strategy.search("scope-a", &config).await.unwrap();

        let ids: Vec<&str> = results.iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec!["newest", "middle", "oldest"]);
    }

    #[tokio::test]
    async fn test_recency_search_assigns_fixed_score() {
        let strategy = RecencyStrategy::new(corpus());
        let config = RetrievalConfig::default();

        let results = strategy.search("scope-a", &config).await.unwrap();

        assert!(results.iter().all(|c| c.similarity == 0.4));
        assert!(results.iter().all(|c| c.strategy == Strategy::Recency));
    }

    #[tokio::test]
    async fn test_recency_search_skips_unembedded_fragments() {
        let strategy = RecencyStrategy::new(corpus());
        let config = RetrievalConfig::default();

        let results = strategy.search("scope-a", &config).await.unwrap();

        assert!(results.iter().all(|c| c.fragment.has_embedding()));
    }

    #[tokio::test]
    async fn test_recency_search_never_crosses_scope() {
        let strategy = RecencyStrategy::new(corpus());
        let config = RetrievalConfig::default();

        let results = strategy.search("scope-b", &config).await.unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id(), "elsewhere");
    }

    #[tokio::test]
    async fn test_recency_search_respects_limit() {
        let strategy = RecencyStrategy::new(corpus());
        let config = RetrievalConfig::default().with_per_strategy_limit(2);

        let results = strategy.search("scope-a", &config).await.unwrap();

        let ids: Vec<&str> = results.iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec!["newest", "middle"]);
    }

    #[tokio::test]
    async fn test_recency_search_empty_scope_is_ok() {
        let strategy = RecencyStrategy::new(corpus());
        let config = RetrievalConfig::default();

        let results = strategy.search("scope-empty", &config).await.unwrap();

        assert!(results.is_empty());
    }
}
