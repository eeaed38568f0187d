//! Raw-byte PDF inspection
//!
//! Used when no rich PDF backend is available. The version comes from the
//! `%PDF-x.y` header and the page count is approximated by counting page
//! object markers across the whole buffer.

use once_cell::sync::Lazy;
use regex::bytes::Regex;

/// How far into the buffer the header may appear
const HEADER_WINDOW: usize = 1024;

static VERSION_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"%PDF-(\d+\.\d+)").unwrap());

// `/Type /Page` but not `/Type /Pages`
static PAGE_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?-u)/Type\s*/Page\b").unwrap());

/// PDF version token from the leading bytes, e.g. `"1.7"`
pub fn detect_version(data: &[u8]) -> Option<String> {
    let window = &data[..data.len().min(HEADER_WINDOW)];
    VERSION_HEADER
        .captures(window)
        .and_then(|caps| caps.get(1))
        .map(|m| String::from_utf8_lossy(m.as_bytes()).into_owned())
}

/// Count page object markers; never less than one
pub fn count_page_markers(data: &[u8]) -> usize {
    PAGE_MARKER.find_iter(data).count().max(1)
}
