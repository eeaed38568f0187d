//! Core document properties (`docProps/core.xml`)

use crate::document::models::{non_empty, split_keywords, DocumentProperties};
use crate::document::xml::XmlElement;

fn property(root: &XmlElement, name: &str) -> Option<String> {
    non_empty(root.child(name).map(|e| e.text.clone()))
}

/// Read author, title, description and keywords from a parsed core part.
///
/// `description` falls back to `subject` when the description is blank.
pub(crate) fn extract_core_properties(root: &XmlElement) -> DocumentProperties {
    DocumentProperties {
        author: property(root, "creator"),
        title: property(root, "title"),
        description: property(root, "description").or_else(|| property(root, "subject")),
        keywords: property(root, "keywords").and_then(|k| split_keywords(&k)),
    }
}
