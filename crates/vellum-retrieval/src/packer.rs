//! Context packing.
//!
//! Turns a candidate pool into the labeled text block handed to generation.
//! Each fragment renders as a header line naming the source document and its
//! relevance, followed by a content line. The whole assembly is budgeted in
//! characters, never bytes, so multibyte text can never split mid-character.

use vellum_core::{ScoredFragment, truncate_chars};

use crate::config::RetrievalConfig;

/// Assembled context and how many fragments made it in.
#[derive(Debug)]
pub struct PackedContext {
    /// Context text ready to prepend to a generation prompt.
    pub context: String,
    /// Number of fragments represented in `context`.
    pub packed: usize,
}

/// Pack candidates into a budgeted context string.
///
/// Candidates are taken in pool order until the character budget runs out.
/// Bodies are capped at `per_fragment_cap` chars, and a block that would
/// overflow the remaining budget has its body shrunk to fit. Packing stops
/// at the first candidate that cannot fit at all, except that the very first
/// block is clipped to the raw budget so a non-empty pool with a positive
/// budget always yields something.
pub fn pack_context(pool: &[ScoredFragment], config: &RetrievalConfig) -> PackedContext {
    let budget = config.context_budget;
    let mut context = String::new();
    let mut used = 0usize;
    let mut packed = 0usize;

    for candidate in pool {
        let first = packed == 0;
        // One char reserved for the separating newline after the first block.
        let available = budget.saturating_sub(used + usize::from(!first));
        let Some(block) = build_block(candidate, config.per_fragment_cap, available, first) else {
            break;
        };
        if !first {
            context.push('\n');
            used += 1;
        }
        used += block.chars().count();
        context.push_str(&block);
        packed += 1;
    }

    PackedContext { context, packed }
}

/// Render one candidate as a context block within `available` chars.
///
/// Returns `None` when the block cannot fit, which ends packing.
fn build_block(
    candidate: &ScoredFragment,
    cap: usize,
    available: usize,
    first: bool,
) -> Option<String> {
    if available == 0 {
        return None;
    }

    let percent = (candidate.similarity * 100.0).round() as u32;
    let header = format!(
        "Document: \"{}\" (relevance: {}%)\nContent: ",
        candidate.fragment.title, percent
    );

    let body = truncate_chars(&candidate.fragment.body, cap);
    let capped = body.chars().count() < candidate.fragment.body.chars().count();

    let assemble = |body: &str, ellipsis: bool| {
        let mut block = String::with_capacity(header.len() + body.len() + 4);
        block.push_str(&header);
        block.push_str(body);
        if ellipsis {
            block.push_str("...");
        }
        block.push('\n');
        block
    };

    let block = assemble(body, capped);
    if block.chars().count() <= available {
        return Some(block);
    }

    // Shrink the body until header, ellipsis, and newline fit together.
    let header_chars = header.chars().count();
    if available > header_chars + 4 {
        let body_room = available - header_chars - 4;
        return Some(assemble(truncate_chars(body, body_room), true));
    }

    if first {
        return Some(truncate_chars(&block, available).to_string());
    }

    None
}

// ============================================================================
// Tests
// ============================================================================
