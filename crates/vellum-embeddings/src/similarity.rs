//! Vector similarity math.
//!
//! Cosine similarity plus the normalized form the engine stores on
//! candidates. Raw cosine lives in `[-1.0, 1.0]`; retrieval scores are
//! clamped into `[0.0, 1.0]` so a positive cosine passes through unchanged
//! and anti-correlated vectors score zero rather than negative.

use vellum_core::{Error, Result};

/// Cosine similarity between two vectors.
///
/// Returns `0.0` when either vector has zero magnitude.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] when the vectors have different
/// lengths.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(Error::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    Ok(dot / (norm_a * norm_b))
}

/// Cosine similarity clamped to `[0.0, 1.0]`.
///
/// This is the score attached to vector-search candidates and compared
/// against the similarity threshold.
pub fn normalized_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    Ok(cosine_similarity(a, b)?.max(0.0))
}

// ============================================================================
// Tests
// ============================================================================
