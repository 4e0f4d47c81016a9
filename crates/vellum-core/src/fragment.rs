//! Retrievable content types shared across Vellum crates.
//!
//! A [`Fragment`] is the unit of retrievable content: a chunk of a user
//! document with an optional embedding. Strategies wrap fragments in
//! [`ScoredFragment`] to carry the relevance score and producing strategy
//! through merging, ranking, and context packing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Fragment
// ============================================================================

/// A unit of retrievable content.
///
/// Fragments belong to exactly one scope (a user or workspace) and are never
/// visible outside it. The embedding is optional: fragments are written first
/// and embedded asynchronously, and un-embedded fragments are invisible to
/// vector and recency search until the embedding arrives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fragment {
    /// Opaque unique identifier.
    pub id: String,

    /// Title of the document the fragment came from.
    pub title: String,

    /// The retrievable text.
    pub body: String,

    /// Embedding vector, present once the fragment has been embedded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f32>>,

    /// Last modification time, used for recency ordering and tie-breaks.
    pub updated_at: DateTime<Utc>,

    /// Owning scope; the isolation boundary for all retrieval.
    pub scope_id: String,
}

impl Fragment {
    /// Create a new fragment with no embedding, updated now.
    pub fn new(
        id: impl Into<String>,
        scope_id: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
            embedding: None,
            updated_at: Utc::now(),
            scope_id: scope_id.into(),
        }
    }

    /// Set the embedding vector.
    pub fn with_embedding(mut self, embedding: Vec<f32>) -> Self {
        self.embedding = Some(embedding);
        self
    }

    /// Set the last modification time.
    pub fn with_updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = updated_at;
        self
    }

    /// Whether the fragment has an embedding.
    pub fn has_embedding(&self) -> bool {
        self.embedding.is_some()
    }
}

// ============================================================================
// Strategy
// ============================================================================

/// The search strategy that produced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Semantic similarity over embeddings.
    Vector,
    /// Term matching over title and body.
    Lexical,
    /// Most recently updated embedded fragments, used as a last resort.
    Recency,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vector => write!(f, "vector"),
            Self::Lexical => write!(f, "lexical"),
            Self::Recency => write!(f, "recency"),
        }
    }
}

// ============================================================================
// ScoredFragment
// ============================================================================

/// A fragment plus the retrieval metadata attached by a strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredFragment {
    /// The underlying fragment.
    pub fragment: Fragment,

    /// Normalized relevance in `[0.0, 1.0]`, higher is more relevant.
    ///
    /// Vector candidates carry a clamped cosine similarity; lexical and
    /// recency candidates carry the fixed scores from the configuration.
    pub similarity: f32,

    /// The strategy that produced this candidate.
    pub strategy: Strategy,
}

impl ScoredFragment {
    /// Create a scored fragment.
    pub fn new(fragment: Fragment, similarity: f32, strategy: Strategy) -> Self {
        Self {
            fragment,
            similarity,
            strategy,
        }
    }

    /// The underlying fragment id.
    pub fn id(&self) -> &str {
        &self.fragment.id
    }
}

// ============================================================================
// Tests
// ============================================================================
