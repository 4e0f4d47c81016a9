//! Lexical search strategy.
//!
//! Runs alongside vector search as an independent signal: exact terms the
//! author used will match even when an embedding is unavailable or the
//! semantic neighborhood is empty. Hits carry the fixed `lexical_score`
//! from the configuration rather than a computed relevance.

use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

use vellum_core::{CorpusStore, Result, ScoredFragment, Strategy};

use crate::config::RetrievalConfig;
use crate::strategy::with_store_timeout;

fn stopwords() -> &'static HashSet<String> {
    static STOPWORDS: OnceLock<HashSet<String>> = OnceLock::new();
    STOPWORDS.get_or_init(|| {
        // `get` hands back a static slice of borrowed words
        stop_words::get(stop_words::LANGUAGE::English)
            .iter()
            .map(|word| (*word).to_string())
            .collect()
    })
}

/// Extract search terms from query text.
///
/// Lowercases, splits on non-alphanumeric boundaries, keeps terms longer
/// than two chars, drops English stopwords, and dedupes preserving first
/// occurrence. The term count is not capped.
pub fn extract_terms(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut terms = Vec::new();

    for raw in text.split(|c: char| !c.is_alphanumeric()) {
        let term = raw.to_lowercase();
        if term.chars().count() <= 2 {
            continue;
        }
        if stopwords().contains(&term) {
            continue;
        }
        if seen.insert(term.clone()) {
            terms.push(term);
        }
    }

    terms
}

/// Term search over fragment titles and bodies.
pub struct LexicalStrategy {
    store: Arc<dyn CorpusStore>,
}

impl LexicalStrategy {
    /// Create the strategy over a corpus store.
    pub fn new(store: Arc<dyn CorpusStore>) -> Self {
        Self { store }
    }

    /// Fragments within `scope` matching any term of `query_text`.
    ///
    /// A query with no usable terms returns empty without touching the
    /// store. Hits all carry `config.lexical_score` and are ordered by most
    /// recent update, then id.
    pub async fn search(
        &self,
        query_text: &str,
        scope: &str,
        config: &RetrievalConfig,
    ) -> Result<Vec<ScoredFragment>> {
        let terms = extract_terms(query_text);
        if terms.is_empty() {
            return Ok(Vec::new());
        }

        let fragments = with_store_timeout(
            config.store_timeout_ms,
            "term query",
            self.store.term_query(scope, &terms, config.per_strategy_limit),
        )
        .await?;

        let mut results: Vec<ScoredFragment> = fragments
            .into_iter()
            .map(|fragment| ScoredFragment::new(fragment, config.lexical_score, Strategy::Lexical))
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
    use async_trait::async_trait;
    use chrono::{Duration, Utc};
    use vellum_core::{Error, Fragment};

    // ------------------------------------------------------------------------
    // extract_terms tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_extract_terms_basic() {
        assert_eq!(
            extract_terms("tidal locking mechanics"),
            vec!["tidal", "locking", "mechanics"]
        );
    }

    #[test]
    fn test_extract_terms_lowercases() {
        assert_eq!(extract_terms("Tidal LOCKING"), vec!["tidal", "locking"]);
    }

    #[test]
    fn test_extract_terms_drops_short_terms() {
        // "is" and "a" fall under the length floor, "sea" stays
        assert_eq!(extract_terms("it is a sea"), vec!["sea"]);
    }

    #[test]
    fn test_extract_terms_drops_stopwords() {
        assert_eq!(extract_terms("what about the cadence"), vec!["cadence"]);
    }

    #[test]
    fn test_stopword_set_is_populated() {
        let words = stopwords();
        // Full English list, not a stub
        assert!(words.len() > 100);
        for word in ["the", "and", "about", "what"] {
            assert!(words.contains(word), "missing stopword: {word}");
        }
    }

    #[test]
    fn test_extract_terms_splits_on_punctuation() {
        assert_eq!(
            extract_terms("tidal-locking, moons!"),
            vec!["tidal", "locking", "moons"]
        );
    }

    #[test]
    fn test_extract_terms_dedupes_preserving_order() {
        assert_eq!(
            extract_terms("moon orbit moon rotation orbit"),
            vec!["moon", "orbit", "rotation"]
        );
    }

    #[test]
    fn test_extract_terms_keeps_numbers() {
        assert_eq!(extract_terms("2024 retrospective"), vec!["2024", "retrospective"]);
    }

    #[test]
    fn test_extract_terms_empty_and_blank() {
        assert!(extract_terms("").is_empty());
        assert!(extract_terms("   ").is_empty());
        assert!(extract_terms("of it on").is_empty());
    }

    // ------------------------------------------------------------------------
    // LexicalStrategy tests
    // ------------------------------------------------------------------------

    /// Store that fails the test if any method is reached.
    struct UnreachableStore;

    #[async_trait]
    impl CorpusStore for UnreachableStore {
        async fn vector_query(
            &self,
            _scope: &str,
            _vector: &[f32],
            _threshold: f32,
            _limit: usize,
        ) -> Result<Vec<Fragment>> {
            Err(Error::store_unavailable("should not be called"))
        }

        async fn term_query(
            &self,
            _scope: &str,
            _terms: &[String],
            _limit: usize,
        ) -> Result<Vec<Fragment>> {
            Err(Error::store_unavailable("should not be called"))
        }

        async fn recent_embedded(&self, _scope: &str, _limit: usize) -> Result<Vec<Fragment>> {
            Err(Error::store_unavailable("should not be called"))
        }
    }

    fn corpus() -> Arc<MemoryCorpus> {
        let now = Utc::now();
        let corpus = MemoryCorpus::new();
        corpus
            .insert(
                Fragment::new("moon", "scope-a", "Moon Notes", "The moon is tidally locked.")
                    .with_updated_at(now - Duration::days(2)),
            )
            .unwrap();
        corpus
            .insert(
                Fragment::new("tides", "scope-a", "Tides", "Notes about ocean tides.")
                    .with_updated_at(now - Duration::days(1)),
            )
            .unwrap();
        corpus
            .insert(
                Fragment::new("recipes", "scope-a", "Recipes", "Bread and butter.")
                    .with_updated_at(now),
            )
            .unwrap();
        corpus
            .insert(Fragment::new("other", "scope-b", "Moon", "moon elsewhere"))
            .unwrap();
        Arc::new(corpus)
    }

    #[tokio::test]
    async fn test_lexical_search_matches_any_term() {
        let strategy = LexicalStrategy::new(corpus());
        let config = RetrievalConfig::default();

        let results = strategy
            .search("moon tides", "scope-a", &config)
            .await
            .unwrap();

        let ids: Vec<&str> = results.iter().map(|c| c.id()).collect();
        // Ordered newest first
        assert_eq!(ids, vec!["tides", "moon"]);
    }

    #[tokio::test]
    async fn test_lexical_search_assigns_fixed_score() {
        let strategy = LexicalStrategy::new(corpus());
        let config = RetrievalConfig::default();

        let results = strategy.search("moon", "scope-a", &config).await.unwrap();

        assert!(!results.is_empty());
        assert!(results.iter().all(|c| c.similarity == 0.6));
        assert!(results.iter().all(|c| c.strategy == Strategy::Lexical));
    }

    #[tokio::test]
    async fn test_lexical_search_matches_titles() {
        let strategy = LexicalStrategy::new(corpus());
        let config = RetrievalConfig::default();

        let results = strategy.search("recipes", "scope-a", &config).await.unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id(), "recipes");
    }

    #[tokio::test]
    async fn test_lexical_search_never_crosses_scope() {
        let strategy = LexicalStrategy::new(corpus());
        let config = RetrievalConfig::default();

        let results = strategy.search("moon", "scope-b", &config).await.unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].fragment.scope_id, "scope-b");
    }

    #[tokio::test]
    async fn test_lexical_search_without_usable_terms_skips_store() {
        // Every word is a stopword or too short, so the store must not be hit
        let strategy = LexicalStrategy::new(Arc::new(UnreachableStore));
        let config = RetrievalConfig::default();

        let results = strategy
            .search("what is the of", "scope-a", &config)
            .await
            .unwrap();

        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_lexical_search_respects_limit() {
        let strategy = LexicalStrategy::new(corpus());
        let config = RetrievalConfig::default().with_per_strategy_limit(1);

        let results = strategy
            .search("moon tides", "scope-a", &config)
            .await
            .unwrap();

        assert_eq!(results.len(), 1);
    }

    #[tokio::test]
    async fn test_lexical_search_store_error_propagates() {
        let strategy = LexicalStrategy::new(Arc::new(UnreachableStore));
        let config = RetrievalConfig::default();

        let err = strategy.search("moon", "scope-a", &config).await.unwrap_err();

        assert!(err.is_store_unavailable());
    }
}
