//! Image and diagram counting
//!
//! Counts come from two places: container entries under the media,
//! diagram and chart folders, and textual references such as "Figure 3"
//! found in extracted text.

use once_cell::sync::Lazy;
use regex::Regex;

const MEDIA_DIR: &str = "word/media/";
const DIAGRAMS_DIR: &str = "word/diagrams/";
const CHARTS_DIR: &str = "word/charts/";
const EMBEDDINGS_DIR: &str = "word/embeddings/";

const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "tif", "tiff", "webp", "svg", "emf", "wmf",
];

// Vector formats in the media folder are usually drawn diagrams, not photos
const DIAGRAM_MEDIA_EXTENSIONS: &[&str] = &["svg", "emf", "wmf", "vsd", "vsdx"];

const EMBEDDED_DIAGRAM_EXTENSIONS: &[&str] = &["vsd", "vsdx"];

static DIAGRAM_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:figure|fig\.|diagram|chart|exhibit|illustration)\s*\d+(?:\.\d+)*\b")
        .unwrap()
});

fn extension(entry: &str) -> Option<String> {
    let file_name = entry.rsplit('/').next()?;
    let (_, ext) = file_name.rsplit_once('.')?;
    Some(ext.to_ascii_lowercase())
}

fn file_stem(entry: &str) -> &str {
    let file_name = entry.rsplit('/').next().unwrap_or(entry);
    file_name
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(file_name)
}

fn has_extension(entry: &str, allowed: &[&str]) -> bool {
    extension(entry).is_some_and(|ext| allowed.contains(&ext.as_str()))
}

/// Count raster and vector images in the media folder
pub(crate) fn count_images<S: AsRef<str>>(entries: &[S]) -> usize {
    entries
        .iter()
        .map(AsRef::as_ref)
        .filter(|entry| entry.starts_with(MEDIA_DIR) && has_extension(entry, IMAGE_EXTENSIONS))
        .count()
}

/// Count container entries that hold a diagram or chart.
///
/// SmartArt contributes one `data*.xml` per diagram and each chart one
/// `chart*.xml`; their layout, style and color parts are not counted.
pub(crate) fn count_diagram_entries<S: AsRef<str>>(entries: &[S]) -> usize {
    entries
        .iter()
        .map(AsRef::as_ref)
        .filter(|entry| is_diagram_entry(entry))
        .count()
}

fn is_diagram_entry(entry: &str) -> bool {
    if entry.starts_with(MEDIA_DIR) {
        return has_extension(entry, DIAGRAM_MEDIA_EXTENSIONS);
    }
    if entry.starts_with(DIAGRAMS_DIR) {
        return has_extension(entry, &["xml"]) && file_stem(entry).starts_with("data");
    }
    if entry.starts_with(CHARTS_DIR) {
        // Skip word/charts/_rels/ and colors/style parts
        return !entry[CHARTS_DIR.len()..].contains('/')
            && has_extension(entry, &["xml"])
            && file_stem(entry).starts_with("chart");
    }
    if entry.starts_with(EMBEDDINGS_DIR) {
        return has_extension(entry, EMBEDDED_DIAGRAM_EXTENSIONS);
    }
    false
}

/// Count textual diagram references, capped to bound false positives from
/// repetitive phrasing
pub(crate) fn count_diagram_references(text: &str, cap: usize) -> usize {
    DIAGRAM_REFERENCE.find_iter(text).take(cap).count()
}
