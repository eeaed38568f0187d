//! Estimation and post-processing utilities
//!
//! Page estimates for formats without native pagination, and trimming of
//! the text handed to downstream consumers.

/// Estimate the page count of a document from its word count.
///
/// Always at least one page, even for an empty document.
pub fn estimate_page_count(word_count: usize, words_per_page: usize) -> usize {
    word_count.div_ceil(words_per_page.max(1)).max(1)
}

/// Page on which a word at `words_before` (zero-based) would start
pub(crate) fn page_for_word_offset(words_before: usize, words_per_page: usize) -> usize {
    estimate_page_count(words_before, words_per_page)
}

/// Truncate text to at most `max_chars` characters, respecting char boundaries
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text.to_string(),
    }
}

/// `Some(truncated)` for non-blank text, `None` otherwise
pub(crate) fn extracted_text(text: &str, max_chars: usize) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(truncate_chars(text, max_chars))
    }
}
