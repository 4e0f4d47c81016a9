//! Corpus store contract.
//!
//! Vellum does not own persistence. The host application implements
//! [`CorpusStore`] over whatever backs its documents (SQL, a vector
//! database, an in-memory table) and hands it to the retrieval service.
//! `vellum-retrieval` ships `MemoryCorpus`, an in-memory reference
//! implementation used throughout the test suites.

use async_trait::async_trait;

use crate::error::Result;
use crate::fragment::Fragment;

/// Read-side contract between the retrieval engine and fragment storage.
///
/// # Contract
///
/// - Every method takes the scope id first and must only ever return
///   fragments whose `scope_id` equals it. Scoping is enforced here, at the
///   boundary, not filtered after the fact.
/// - `limit` is an upper bound; returning fewer rows is normal.
/// - Failures map to [`Error::StoreUnavailable`](crate::Error) via the
///   crate's `Result`; the engine treats any store error as fatal for the
///   current retrieval.
///
/// # Example
///
/// ```
/// use async_trait::async_trait;
/// use vellum_core::{CorpusStore, Fragment, Result};
///
/// struct SingleDocStore {
///     doc: Fragment,
/// }
///
/// #[async_trait]
/// impl CorpusStore for SingleDocStore {
///     async fn vector_query(
///         &self,
///         scope: &str,
///         _vector: &[f32],
///         _threshold: f32,
///         _limit: usize,
///     ) -> Result<Vec<Fragment>> {
///         Ok(self.matching(scope))
///     }
///
///     async fn term_query(
///         &self,
///         scope: &str,
///         _terms: &[String],
///         _limit: usize,
///     ) -> Result<Vec<Fragment>> {
///         Ok(self.matching(scope))
///     }
///
///     async fn recent_embedded(&self, scope: &str, _limit: usize) -> Result<Vec<Fragment>> {
///         Ok(self.matching(scope))
///     }
/// }
///
/// impl SingleDocStore {
///     fn matching(&self, scope: &str) -> Vec<Fragment> {
///         if self.doc.scope_id == scope {
///             vec![self.doc.clone()]
///         } else {
///             Vec::new()
///         }
///     }
/// }
/// ```
#[async_trait]
pub trait CorpusStore: Send + Sync {
    /// Fragments within `scope` whose embedding similarity to `vector` is at
    /// least `threshold`, best first, at most `limit`.
    ///
    /// Returned fragments include their stored embeddings so the engine can
    /// recompute exact scores; approximate backends are acceptable.
    /// Fragments without an embedding never match.
    async fn vector_query(
        &self,
        scope: &str,
        vector: &[f32],
        threshold: f32,
        limit: usize,
    ) -> Result<Vec<Fragment>>;

    /// Fragments within `scope` whose title or body contains any of `terms`,
    /// case-insensitive substring semantics, at most `limit`.
    ///
    /// Terms are pre-normalized by the caller (lowercase, stopwords
    /// removed). An empty term slice returns no fragments.
    async fn term_query(
        &self,
        scope: &str,
        terms: &[String],
        limit: usize,
    ) -> Result<Vec<Fragment>>;

    /// The most recently updated fragments within `scope` that have an
    /// embedding, newest first, at most `limit`.
    async fn recent_embedded(&self, scope: &str, limit: usize) -> Result<Vec<Fragment>>;
}

// ============================================================================
// Tests
// ============================================================================
