//! Search strategies.
//!
//! Each strategy turns one kind of signal into scored candidates:
//!
//! - [`VectorStrategy`]: semantic similarity over embeddings
//! - [`LexicalStrategy`]: term matching over titles and bodies
//! - [`RecencyStrategy`]: newest embedded fragments, as a last resort
//!
//! Strategies are thin: they own no state beyond a handle to the corpus
//! store, respect the query scope and the per-strategy limit, and wrap
//! every store call in the configured timeout. Cascade order and merging
//! live in the [coordinator](crate::coordinator).

use std::future::Future;
use std::time::Duration;

use vellum_core::{Error, Result};

mod lexical;
mod recency;
mod vector;

pub use lexical::{LexicalStrategy, extract_terms};
pub use recency::RecencyStrategy;
pub use vector::VectorStrategy;

/// Await a store call under the configured timeout.
///
/// Elapsed timeouts become [`Error::StoreUnavailable`]: a store that cannot
/// answer in time is treated the same as a store that is down.
pub(crate) async fn with_store_timeout<T>(
    timeout_ms: u64,
    what: &str,
    fut: impl Future<Output = Result<T>>,
) -> Result<T> {
    match tokio::time::timeout(Duration::from_millis(timeout_ms), fut).await {
        Ok(result) => result,
        Err(_) => Err(Error::store_unavailable(format!(
            "{} timed out after {}ms",
            what, timeout_ms
        ))),
    }
}

// ============================================================================
// Tests
// ============================================================================
