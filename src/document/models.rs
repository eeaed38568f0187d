//! Core data structures for extracted metadata
//!
//! This module defines the public types produced by an extraction call:
//! the per-document metadata, its headings, and the nested table of contents
//! synthesized from them.

use serde::{Deserialize, Serialize};

use super::toc::generate_table_of_contents;
use crate::classification::{detect_compliance_frameworks, detect_technologies};

/// Source format that produced a [`DocumentMetadata`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    #[default]
    Docx,
    Pdf,
    Text,
}

/// How much of the document the extractor could actually see
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Completeness {
    #[default]
    Complete,
    /// Raw-byte PDF fallback: counts are proxies, text and headings are missing.
    Partial,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Heading {
    /// Outline level, 1 for top-level headings
    pub level: u32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_number: Option<usize>,
}

impl Heading {
    pub fn new(level: u32, title: impl Into<String>, page_number: Option<usize>) -> Self {
        Self {
            level,
            title: title.into(),
            page_number,
        }
    }
}

/// Structural metadata for one uploaded document.
///
/// Produced per extraction call and never persisted by this crate.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
    pub format: DocumentFormat,
    pub page_count: usize,
    pub word_count: usize,
    pub diagram_count: usize,
    pub image_count: usize,
    pub headings: Vec<Heading>,
    pub author: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<Vec<String>>,
    /// Body text truncated to the configured character limit
    pub extracted_text: Option<String>,
    pub pdf_version: Option<String>,
    pub completeness: Completeness,
}

impl DocumentMetadata {
    pub fn is_partial(&self) -> bool {
        self.completeness == Completeness::Partial
    }

    /// Classify the extracted text against the technology and compliance tables
    pub fn classify(&self) -> Classification {
        let text = self.extracted_text.as_deref().unwrap_or_default();
        Classification {
            technologies: detect_technologies(text),
            compliance_frameworks: detect_compliance_frameworks(text),
        }
    }

    /// Nested table of contents built from this document's headings
    pub fn table_of_contents(&self) -> Vec<TableOfContentsItem> {
        generate_table_of_contents(&self.headings)
    }
}

/// Document core properties (`docProps/core.xml` or the PDF Info dictionary)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentProperties {
    pub author: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<Vec<String>>,
}

/// One entry of a synthesized table of contents.
///
/// Each node owns its children; pre-order traversal yields the headings in
/// their original order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableOfContentsItem {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TableOfContentsItem>,
}

impl TableOfContentsItem {
    pub fn new(title: impl Into<String>, page: Option<usize>) -> Self {
        Self {
            title: title.into(),
            page,
            children: Vec::new(),
        }
    }
}

/// Technology and compliance names detected in a document's text
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub technologies: Vec<String>,
    pub compliance_frameworks: Vec<String>,
}

/// Split a free-form keyword property on `,` and `;`, dropping blanks
pub(crate) fn split_keywords(raw: &str) -> Option<Vec<String>> {
    let keywords: Vec<String> = raw
        .split([',', ';'])
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect();

    if keywords.is_empty() {
        None
    } else {
        Some(keywords)
    }
}

/// Treat blank property values as absent
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keywords() {
        assert_eq!(
            split_keywords("cloud, security; ,  migration"),
            Some(vec![
                "cloud".to_string(),
                "security".to_string(),
                "migration".to_string()
            ])
        );
        assert_eq!(split_keywords(" ; , "), None);
    }

    #[test]
    fn test_metadata_serializes_camel_case() {
        let metadata = DocumentMetadata {
            page_count: 2,
            headings: vec![Heading::new(1, "Intro", Some(1))],
            ..DocumentMetadata::default()
        };
        let json = serde_json::to_value(&metadata).unwrap();
        assert_eq!(json["pageCount"], 2);
        assert_eq!(json["headings"][0]["pageNumber"], 1);
        assert_eq!(json["completeness"], "complete");
    }

    #[test]
    fn test_toc_leaf_omits_children() {
        let json = serde_json::to_string(&TableOfContentsItem::new("Scope", None)).unwrap();
        assert_eq!(json, r#"{"title":"Scope"}"#);
    }
}
