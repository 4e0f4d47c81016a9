//! Retrieval configuration.
//!
//! One [`RetrievalConfig`] travels with each query and carries every tuning
//! knob the engine honors: the similarity floor, per-strategy candidate
//! caps, context budget, fixed strategy scores, strategy toggles, and
//! timeouts. Presets encode how the different product surfaces tune these
//! knobs; the serde defaults match [`RetrievalConfig::chat`].

use serde::{Deserialize, Serialize};
use vellum_core::{Error, Result};

/// Tuning knobs for a single retrieval call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Minimum similarity for vector candidates (0.0 to 1.0).
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f32,

    /// Maximum candidates each strategy may return.
    #[serde(default = "default_per_strategy_limit")]
    pub per_strategy_limit: usize,

    /// Maximum packed context length in chars.
    #[serde(default = "default_context_budget")]
    pub context_budget: usize,

    /// Maximum body chars taken from a single fragment.
    #[serde(default = "default_per_fragment_cap")]
    pub per_fragment_cap: usize,

    /// Maximum entries in the result's source list.
    #[serde(default = "default_max_sources")]
    pub max_sources: usize,

    /// Fixed similarity assigned to lexical hits.
    ///
    /// Sits above the usual vector threshold band so a term match is never
    /// drowned out by marginal semantic matches.
    #[serde(default = "default_lexical_score")]
    pub lexical_score: f32,

    /// Fixed similarity assigned to recency hits, below `lexical_score`.
    #[serde(default = "default_recency_score")]
    pub recency_score: f32,

    /// Whether vector search runs.
    #[serde(default = "default_true")]
    pub vector_enabled: bool,

    /// Whether lexical search runs.
    #[serde(default = "default_true")]
    pub lexical_enabled: bool,

    /// Whether recency fallback may run.
    #[serde(default = "default_true")]
    pub recency_enabled: bool,

    /// Timeout for the query embedding call, in milliseconds.
    #[serde(default = "default_embed_timeout_ms")]
    pub embed_timeout_ms: u64,

    /// Timeout for each corpus-store call, in milliseconds.
    #[serde(default = "default_store_timeout_ms")]
    pub store_timeout_ms: u64,
}

fn default_similarity_threshold() -> f32 {
    0.3
}

fn default_per_strategy_limit() -> usize {
    5
}

fn default_context_budget() -> usize {
    12_000
}

fn default_per_fragment_cap() -> usize {
    1_500
}

fn default_max_sources() -> usize {
    5
}

fn default_lexical_score() -> f32 {
    0.6
}

fn default_recency_score() -> f32 {
    0.4
}

fn default_true() -> bool {
    true
}

fn default_embed_timeout_ms() -> u64 {
    10_000
}

fn default_store_timeout_ms() -> u64 {
    5_000
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: default_similarity_threshold(),
            per_strategy_limit: default_per_strategy_limit(),
            context_budget: default_context_budget(),
            per_fragment_cap: default_per_fragment_cap(),
            max_sources: default_max_sources(),
            lexical_score: default_lexical_score(),
            recency_score: default_recency_score(),
            vector_enabled: default_true(),
            lexical_enabled: default_true(),
            recency_enabled: default_true(),
            embed_timeout_ms: default_embed_timeout_ms(),
            store_timeout_ms: default_store_timeout_ms(),
        }
    }
}

impl RetrievalConfig {
    /// Set the similarity threshold.
    pub fn with_similarity_threshold(mut self, threshold: f32) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    /// Set the per-strategy candidate cap.
    pub fn with_per_strategy_limit(mut self, limit: usize) -> Self {
        self.per_strategy_limit = limit;
        self
    }

    /// Set the context budget in chars.
    pub fn with_context_budget(mut self, budget: usize) -> Self {
        self.context_budget = budget;
        self
    }

    /// Set the per-fragment body cap in chars.
    pub fn with_per_fragment_cap(mut self, cap: usize) -> Self {
        self.per_fragment_cap = cap;
        self
    }

    /// Set the source list cap.
    pub fn with_max_sources(mut self, max_sources: usize) -> Self {
        self.max_sources = max_sources;
        self
    }

    /// Enable or disable vector search.
    pub fn with_vector_enabled(mut self, enabled: bool) -> Self {
        self.vector_enabled = enabled;
        self
    }

    /// Enable or disable lexical search.
    pub fn with_lexical_enabled(mut self, enabled: bool) -> Self {
        self.lexical_enabled = enabled;
        self
    }

    /// Enable or disable recency fallback.
    pub fn with_recency_enabled(mut self, enabled: bool) -> Self {
        self.recency_enabled = enabled;
        self
    }

    /// Set the embedding timeout in milliseconds.
    pub fn with_embed_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.embed_timeout_ms = timeout_ms;
        self
    }

    /// Set the per store-call timeout in milliseconds.
    pub fn with_store_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.store_timeout_ms = timeout_ms;
        self
    }

    /// Check the configuration for values the engine cannot honor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for out-of-range scores or thresholds,
    /// zero caps or timeouts, or a configuration with every strategy
    /// disabled.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(Error::config(format!(
                "similarity_threshold must be within [0.0, 1.0], got {}",
                self.similarity_threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.lexical_score) || !(0.0..=1.0).contains(&self.recency_score)
        {
            return Err(Error::config(
                "lexical_score and recency_score must be within [0.0, 1.0]",
            ));
        }
        if self.per_strategy_limit == 0 {
            return Err(Error::config("per_strategy_limit must be positive"));
        }
        if self.per_fragment_cap == 0 {
            return Err(Error::config("per_fragment_cap must be positive"));
        }
        if self.max_sources == 0 {
            return Err(Error::config("max_sources must be positive"));
        }
        if !self.vector_enabled && !self.lexical_enabled && !self.recency_enabled {
            return Err(Error::config("at least one strategy must be enabled"));
        }
        if self.embed_timeout_ms == 0 || self.store_timeout_ms == 0 {
            return Err(Error::config("timeouts must be positive"));
        }
        Ok(())
    }
}

// ============================================================================
// Presets
// ============================================================================

impl RetrievalConfig {
    /// Defaults tuned for conversational grounding in the chat panel.
    pub fn chat() -> Self {
        Self::default()
    }

    /// High-precision settings for fact-checking.
    ///
    /// Raises the similarity floor and turns recency fallback off: an
    /// unrelated recent document is worse than no grounding when checking
    /// a claim.
    pub fn fact_check() -> Self {
        Self {
            similarity_threshold: 0.5,
            recency_enabled: false,
            ..Self::default()
        }
    }

    /// Loose settings for continuation ("keep writing") suggestions.
    ///
    /// A low floor plus recency fallback: what the author is currently
    /// working on matters more than topical precision.
    pub fn continuation() -> Self {
        Self {
            similarity_threshold: 0.1,
            per_strategy_limit: 8,
            context_budget: 8_000,
            max_sources: 3,
            ..Self::default()
        }
    }

    /// Wide-net settings for multi-document synthesis.
    pub fn synthesis() -> Self {
        Self {
            similarity_threshold: 0.2,
            per_strategy_limit: 10,
            context_budget: 16_000,
            per_fragment_cap: 2_000,
            max_sources: 8,
            ..Self::default()
        }
    }

    /// Settings for side-by-side comparison queries.
    pub fn comparison() -> Self {
        Self {
            similarity_threshold: 0.25,
            per_strategy_limit: 6,
            max_sources: 6,
            ..Self::default()
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
