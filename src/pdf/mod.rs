//! PDF metadata extraction
//!
//! Whether rich extraction is available is decided once, when a
//! [`PdfStrategy`] is constructed. The rich strategy delegates to a
//! [`PdfTextSource`]; the fallback inspects raw bytes only and marks its
//! result as partial.

#[cfg(feature = "pdf")]
pub mod lopdf_source;
pub mod raw;

use std::fmt;
use std::sync::Arc;

use crate::config::ExtractorConfig;
use crate::document::cleanup::extracted_text;
use crate::document::models::{
    Completeness, DocumentFormat, DocumentMetadata, DocumentProperties,
};
use crate::document::parsing::heading::headings_from_plain_text;
use crate::document::parsing::media::count_diagram_references;
use crate::document::parsing::text::count_words;
use crate::error::Result;

#[cfg(feature = "pdf")]
pub use lopdf_source::LopdfSource;

/// Everything a rich backend reports about one PDF
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PdfContent {
    /// Text of each page, in page order
    pub pages: Vec<String>,
    /// Authoritative page count from the page tree
    pub page_count: usize,
    pub properties: DocumentProperties,
    pub version: Option<String>,
}

/// A capability that yields full text, true page count and document
/// properties for a PDF buffer.
pub trait PdfTextSource: Send + Sync {
    fn name(&self) -> &'static str;

    fn read(&self, data: &[u8]) -> Result<PdfContent>;
}

/// PDF extraction path, fixed at construction
#[derive(Clone)]
pub enum PdfStrategy {
    Rich(Arc<dyn PdfTextSource>),
    Fallback,
}

impl fmt::Debug for PdfStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PdfStrategy::Rich(source) => write!(f, "Rich({})", source.name()),
            PdfStrategy::Fallback => write!(f, "Fallback"),
        }
    }
}

impl Default for PdfStrategy {
    /// Rich extraction when the `pdf` feature is enabled
    fn default() -> Self {
        default_strategy()
    }
}

#[cfg(feature = "pdf")]
fn default_strategy() -> PdfStrategy {
    PdfStrategy::rich(LopdfSource)
}

#[cfg(not(feature = "pdf"))]
fn default_strategy() -> PdfStrategy {
    PdfStrategy::fallback()
}

impl PdfStrategy {
    pub fn rich(source: impl PdfTextSource + 'static) -> Self {
        PdfStrategy::Rich(Arc::new(source))
    }

    pub fn fallback() -> Self {
        log::info!("Rich PDF extraction unavailable; using raw-byte fallback");
        PdfStrategy::Fallback
    }

    pub fn is_rich(&self) -> bool {
        matches!(self, PdfStrategy::Rich(_))
    }

    /// Extract metadata from a PDF buffer. Never fails: a rich backend
    /// error degrades this call to the fallback.
    pub fn extract(&self, data: &[u8], config: &ExtractorConfig) -> DocumentMetadata {
        match self {
            PdfStrategy::Rich(source) => match source.read(data) {
                Ok(content) => rich_metadata(content, config),
                Err(e) => {
                    log::warn!(
                        "{} could not read PDF ({}); using raw-byte fallback",
                        source.name(),
                        e
                    );
                    fallback_metadata(data)
                }
            },
            PdfStrategy::Fallback => fallback_metadata(data),
        }
    }
}

/// Assemble metadata from a rich backend's report
pub(crate) fn rich_metadata(content: PdfContent, config: &ExtractorConfig) -> DocumentMetadata {
    let mut headings = Vec::new();
    for (index, page_text) in content.pages.iter().enumerate() {
        headings.extend(headings_from_plain_text(
            page_text,
            Some(index + 1),
            config.max_pdf_heading_level,
        ));
    }

    let text = content.pages.join("\n");
    let properties = content.properties;

    DocumentMetadata {
        format: DocumentFormat::Pdf,
        page_count: content.page_count.max(1),
        word_count: count_words(&text),
        // No container to inspect; references in text only
        diagram_count: count_diagram_references(&text, config.diagram_reference_cap),
        image_count: 0,
        headings,
        author: properties.author,
        title: properties.title,
        description: properties.description,
        keywords: properties.keywords,
        extracted_text: extracted_text(&text, config.max_extracted_chars),
        pdf_version: content.version,
        completeness: Completeness::Complete,
    }
}

/// Degraded, low-confidence metadata from raw bytes
pub(crate) fn fallback_metadata(data: &[u8]) -> DocumentMetadata {
    DocumentMetadata {
        format: DocumentFormat::Pdf,
        page_count: raw::count_page_markers(data),
        pdf_version: raw::detect_version(data),
        completeness: Completeness::Partial,
        ..DocumentMetadata::default()
    }
}
