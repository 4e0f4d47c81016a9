//! In-memory corpus store.
//!
//! Reference [`CorpusStore`] backed by a `HashMap` behind an `RwLock`. Every
//! query is a linear scan, which is fine for tests, demos, and embedded use
//! with a few thousand fragments. Larger corpora should implement
//! [`CorpusStore`] over a real vector database instead.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use vellum_core::{CorpusStore, Error, Fragment, Result};
use vellum_embeddings::normalized_similarity;

/// Thread-safe in-memory fragment corpus.
#[derive(Default)]
pub struct MemoryCorpus {
    fragments: RwLock<HashMap<String, Fragment>>,
}

impl MemoryCorpus {
    /// Create an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fragment, replacing any existing fragment with the same id.
    pub fn insert(&self, fragment: Fragment) -> Result<()> {
        let mut fragments = self
            .fragments
            .write()
            .map_err(|_| Error::store_unavailable("corpus lock poisoned"))?;
        fragments.insert(fragment.id.clone(), fragment);
        Ok(())
    }

    /// Remove a fragment by id, returning it if present.
    pub fn remove(&self, id: &str) -> Result<Option<Fragment>> {
        let mut fragments = self
            .fragments
            .write()
            .map_err(|_| Error::store_unavailable("corpus lock poisoned"))?;
        Ok(fragments.remove(id))
    }

    /// Number of stored fragments.
    pub fn len(&self) -> Result<usize> {
        let fragments = self
            .fragments
            .read()
            .map_err(|_| Error::store_unavailable("corpus lock poisoned"))?;
        Ok(fragments.len())
    }

    /// Whether the corpus holds no fragments.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    fn collect_scope<F>(&self, scope: &str, mut keep: F) -> Result<Vec<Fragment>>
    where
        F: FnMut(&Fragment) -> bool,
    {
        let fragments = self
            .fragments
            .read()
            .map_err(|_| Error::store_unavailable("corpus lock poisoned"))?;
        Ok(fragments
            .values()
            .filter(|f| f.scope_id == scope && keep(f))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CorpusStore for MemoryCorpus {
    async fn vector_query(
        &self,
        scope: &str,
        vector: &[f32],
        threshold: f32,
        limit: usize,
    ) -> Result<Vec<Fragment>> {
        let candidates = self.collect_scope(scope, Fragment::has_embedding)?;

        let mut scored: Vec<(f32, Fragment)> = Vec::new();
        for fragment in candidates {
            let Some(embedding) = fragment.embedding.as_deref() else {
                continue;
            };
            // Fragments embedded under a different model dimension cannot be
            // compared against this query, so they are not candidates.
            let Ok(similarity) = normalized_similarity(vector, embedding) else {
                continue;
            };
            if similarity >= threshold {
                scored.push((similarity, fragment));
            }
        }

        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(Ordering::Equal)
                .then_with(|| b.1.updated_at.cmp(&a.1.updated_at))
                .then_with(|| a.1.id.cmp(&b.1.id))
        });
        scored.truncate(limit);

        Ok(scored.into_iter().map(|(_, fragment)| fragment).collect())
    }

    async fn term_query(
        &self,
        scope: &str,
        terms: &[String],
        limit: usize,
    ) -> Result<Vec<Fragment>> {
        let mut hits = self.collect_scope(scope, |fragment| {
            let title = fragment.title.to_lowercase();
            let body = fragment.body.to_lowercase();
            terms
                .iter()
                .any(|term| title.contains(term.as_str()) || body.contains(term.as_str()))
        })?;

        hits.sort_by(|a, b| {
            b.updated_at
                .cmp(&a.updated_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        hits.truncate(limit);

        Ok(hits)
    }

    async fn recent_embedded(&self, scope: &str, limit: usize) -> Result<Vec<Fragment>> {
        let mut hits = self.collect_scope(scope, Fragment::has_embedding)?;

        hits.sort_by(|a, b| {
            b.updated_at
                .cmp(&a.updated_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        hits.truncate(limit);

        Ok(hits)
    }
}

// ============================================================================
// Tests
// ============================================================================
