//! OpenAI-compatible HTTP embedding provider.
//!
//! Talks to any endpoint that accepts the OpenAI `/embeddings` request shape
//! (OpenAI itself, Azure deployments, local gateways). The adapter makes
//! exactly one attempt per call; retry policy belongs to the caller, and the
//! retrieval coordinator prefers degrading to its other strategies over
//! waiting out a flaky provider.
//!
//! Input longer than the configured maximum is truncated from the start,
//! deterministically, on a char boundary, before the request is sent. Long
//! input is never an error.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use vellum_core::{Error, Result, truncate_chars};

use crate::provider::EmbeddingProvider;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for [`HttpEmbeddingProvider`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpEmbeddingConfig {
    /// Full URL of the embeddings endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Bearer token for the Authorization header. Empty means no auth
    /// header is sent (local gateways).
    #[serde(default)]
    pub api_key: String,

    /// Model identifier passed through to the endpoint.
    #[serde(default = "default_model")]
    pub model: String,

    /// Expected embedding dimension.
    #[serde(default = "default_dimension")]
    pub dimension: usize,

    /// Maximum input length in chars; longer input is truncated.
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,
}

fn default_endpoint() -> String {
    "https://api.openai.com/v1/embeddings".to_string()
}

fn default_model() -> String {
    "text-embedding-3-small".to_string()
}

fn default_dimension() -> usize {
    1536
}

fn default_max_input_chars() -> usize {
    8000
}

impl Default for HttpEmbeddingConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: String::new(),
            model: default_model(),
            dimension: default_dimension(),
            max_input_chars: default_max_input_chars(),
        }
    }
}

impl HttpEmbeddingConfig {
    /// Set the endpoint URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Set the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the expected embedding dimension.
    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    /// Set the maximum input length in chars.
    pub fn with_max_input_chars(mut self, max_input_chars: usize) -> Self {
        self.max_input_chars = max_input_chars;
        self
    }
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

// ============================================================================
// Provider
// ============================================================================

/// Embedding provider backed by an OpenAI-compatible HTTP endpoint.
pub struct HttpEmbeddingProvider {
    config: HttpEmbeddingConfig,
    client: reqwest::Client,
}

impl HttpEmbeddingProvider {
    /// Create a provider from configuration.
    pub fn new(config: HttpEmbeddingConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl EmbeddingProvider for HttpEmbeddingProvider {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let input = truncate_chars(text, self.config.max_input_chars);
        if input.len() < text.len() {
            log::debug!(
                "Truncated embedding input to {} chars",
                self.config.max_input_chars
            );
        }

        let body = serde_json::json!({
            "model": self.config.model,
            "input": input,
        });

        let mut request = self.client.post(&self.config.endpoint).json(&body);
        if !self.config.api_key.is_empty() {
            request = request.bearer_auth(&self.config.api_key);
        }

        let response = request.send().await.map_err(|e| {
            Error::embedding_unavailable(format!("Failed to call embeddings endpoint: {}", e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(Error::embedding_unavailable(format!(
                "Embeddings endpoint returned {}: {}",
                status, error_text
            )));
        }

        let body: EmbeddingResponse = response.json().await.map_err(|e| {
            Error::embedding_unavailable(format!("Failed to parse embeddings response: {}", e))
        })?;

        let embedding = body
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| Error::embedding_unavailable("Embeddings response contained no data"))?;

        if embedding.len() != self.config.dimension {
            return Err(Error::DimensionMismatch {
                expected: self.config.dimension,
                actual: embedding.len(),
            });
        }

        Ok(embedding)
    }

    fn dimension(&self) -> usize {
        self.config.dimension
    }

    fn name(&self) -> &str {
        "http"
    }
}

// ============================================================================
// Tests
// ============================================================================
