//! Small shared utilities.
//!
//! String helpers used on both sides of the store boundary.

/// Truncate `text` to at most `max_chars` characters, on a char boundary.
///
/// Returns the original slice when it is already short enough. Counting is
/// by `char`, not bytes, so multibyte input never splits mid-character.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

// ============================================================================
// Tests
// ============================================================================
