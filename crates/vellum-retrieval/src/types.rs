//! Request and response types for the retrieval service.

use serde::{Deserialize, Serialize};
use vellum_core::ScoredFragment;

use crate::config::RetrievalConfig;

// ============================================================================
// Query
// ============================================================================

/// A retrieval request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalQuery {
    /// The user's query text.
    pub text: String,

    /// Scope id whose fragments may be consulted. Must be non-blank.
    pub scope: String,

    /// Tuning knobs for this call.
    #[serde(default)]
    pub config: RetrievalConfig,
}

impl RetrievalQuery {
    /// Create a query with the default configuration.
    pub fn new(text: impl Into<String>, scope: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            scope: scope.into(),
            config: RetrievalConfig::default(),
        }
    }

    /// Set the configuration.
    pub fn with_config(mut self, config: RetrievalConfig) -> Self {
        self.config = config;
        self
    }
}

// ============================================================================
// Stats
// ============================================================================

/// Per-call diagnostics surfaced on every retrieval result.
///
/// Pure data: nothing in the engine branches on these counters. They feed
/// the per-retrieval log line and whatever dashboards the host wires up.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RetrievalStats {
    /// Candidates the vector strategy produced.
    pub vector_candidates: usize,

    /// Candidates the lexical strategy produced.
    pub lexical_candidates: usize,

    /// Candidates the recency fallback produced (zero unless it fired).
    pub recency_candidates: usize,

    /// Pool size after merge and dedup.
    pub pool_size: usize,

    /// Fragments that made it into the packed context.
    pub packed_fragments: usize,

    /// Length of the packed context in chars.
    pub context_chars: usize,

    /// Whether the embedding provider failed and vector search was skipped.
    pub embedding_degraded: bool,
}

// ============================================================================
// Result
// ============================================================================

/// The outcome of a retrieval call.
///
/// An empty result is a normal outcome, not an error: it means the corpus
/// holds nothing relevant and the caller should generate without grounding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalResult {
    /// Packed context, possibly empty.
    pub context: String,

    /// Attribution list in packed order, capped at `max_sources`.
    pub sources: Vec<ScoredFragment>,

    /// Per-call diagnostics.
    #[serde(default)]
    pub stats: RetrievalStats,
}

impl RetrievalResult {
    /// A result with no grounding.
    pub fn empty() -> Self {
        Self {
            context: String::new(),
            sources: Vec::new(),
            stats: RetrievalStats::default(),
        }
    }

    /// Whether any grounding was found.
    pub fn is_empty(&self) -> bool {
        self.context.is_empty() && self.sources.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
