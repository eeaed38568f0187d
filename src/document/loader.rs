//! Metadata extraction orchestration
//!
//! This module contains [`MetadataExtractor`], which selects an extraction
//! path from the caller-declared extension and assembles the final
//! [`DocumentMetadata`].
//!
//! DOCX extraction runs five read-only passes over one shared container:
//! 1. Core properties (author, title, description, keywords)
//! 2. Body text
//! 3. Headings with estimated pages
//! 4. Image count
//! 5. Diagram count
//!
//! The passes run on the blocking pool and are joined before assembly. A
//! failing pass logs a warning and contributes its default value; only an
//! unreadable container fails the whole call.

use std::sync::Arc;

use super::cleanup::{estimate_page_count, extracted_text};
use super::container::{Container, CORE_PROPERTIES_PART, DOCUMENT_PART};
use super::models::*;
use super::parsing::heading::{extract_headings, headings_from_unpaginated_text};
use super::parsing::media::{count_diagram_entries, count_diagram_references, count_images};
use super::parsing::properties::extract_core_properties;
use super::parsing::text::{body_paragraphs, count_words, extract_body_text};
use super::xml::{parse_part, XmlElement};
use crate::config::{ExtractorConfig, TableTextOrder};
use crate::error::{Error, Result};
use crate::pdf::PdfStrategy;

impl DocumentFormat {
    /// Map a caller-declared extension (`".docx"`, `"PDF"`, ...) to a format
    pub fn from_extension(extension: &str) -> Result<Self> {
        let normalized = extension.trim().trim_start_matches('.').to_ascii_lowercase();
        match normalized.as_str() {
            "docx" => Ok(DocumentFormat::Docx),
            "pdf" => Ok(DocumentFormat::Pdf),
            "txt" | "text" | "md" => Ok(DocumentFormat::Text),
            _ => Err(Error::UnsupportedExtension(extension.to_string())),
        }
    }
}

/// Entry point for metadata extraction.
///
/// Configuration and the PDF strategy are fixed at construction; the
/// extractor itself holds no per-call state and can be shared.
#[derive(Debug, Clone, Default)]
pub struct MetadataExtractor {
    config: ExtractorConfig,
    pdf: PdfStrategy,
}

impl MetadataExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self {
            config,
            pdf: PdfStrategy::default(),
        }
    }

    pub fn with_pdf_strategy(config: ExtractorConfig, pdf: PdfStrategy) -> Self {
        Self { config, pdf }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    pub fn pdf_strategy(&self) -> &PdfStrategy {
        &self.pdf
    }

    /// Extract metadata using the path selected by `extension`.
    ///
    /// No content sniffing happens: a PDF declared as `.docx` fails as an
    /// unreadable container.
    pub async fn extract(&self, data: Vec<u8>, extension: &str) -> Result<DocumentMetadata> {
        match DocumentFormat::from_extension(extension)? {
            DocumentFormat::Docx => self.extract_docx_metadata(data).await,
            DocumentFormat::Pdf => Ok(self.extract_pdf_metadata(&data)),
            DocumentFormat::Text => Ok(self.extract_text_metadata(&data)),
        }
    }

    /// Extract metadata from a DOCX container buffer.
    ///
    /// Fails with [`Error::Format`] only when the buffer is not an archive.
    pub async fn extract_docx_metadata(&self, data: Vec<u8>) -> Result<DocumentMetadata> {
        let container = Arc::new(Container::open(data)?);
        let table_text = self.config.table_text;
        let words_per_page = self.config.words_per_page;
        let diagram_cap = self.config.diagram_reference_cap;

        let (properties, body_text, headings, image_count, diagram_count) = tokio::join!(
            run_pass("core properties", &container, read_core_properties),
            run_pass("body text", &container, move |c| read_body_text(c, table_text)),
            run_pass("headings", &container, move |c| {
                read_headings(c, words_per_page)
            }),
            run_pass("image count", &container, |c| Ok(count_images(c.entries()))),
            run_pass("diagram count", &container, move |c| {
                read_diagram_count(c, table_text, diagram_cap)
            }),
        );

        let word_count = count_words(&body_text);
        log::debug!(
            "docx: {} words, {} headings, {} images, {} diagrams",
            word_count,
            headings.len(),
            image_count,
            diagram_count
        );

        Ok(DocumentMetadata {
            format: DocumentFormat::Docx,
            page_count: estimate_page_count(word_count, words_per_page),
            word_count,
            diagram_count,
            image_count,
            headings,
            author: properties.author,
            title: properties.title,
            description: properties.description,
            keywords: properties.keywords,
            extracted_text: extracted_text(&body_text, self.config.max_extracted_chars),
            pdf_version: None,
            completeness: Completeness::Complete,
        })
    }

    /// Extract metadata from a PDF buffer with the configured strategy
    pub fn extract_pdf_metadata(&self, data: &[u8]) -> DocumentMetadata {
        self.pdf.extract(data, &self.config)
    }

    /// Extract metadata from plain text. Invalid UTF-8 is replaced, never
    /// rejected.
    pub fn extract_text_metadata(&self, data: &[u8]) -> DocumentMetadata {
        let text = String::from_utf8_lossy(data);
        let word_count = count_words(&text);

        DocumentMetadata {
            format: DocumentFormat::Text,
            page_count: estimate_page_count(word_count, self.config.words_per_page),
            word_count,
            diagram_count: count_diagram_references(&text, self.config.diagram_reference_cap),
            headings: headings_from_unpaginated_text(
                &text,
                self.config.words_per_page,
                self.config.max_pdf_heading_level,
            ),
            extracted_text: extracted_text(&text, self.config.max_extracted_chars),
            ..DocumentMetadata::default()
        }
    }
}

/// Run one extraction pass on the blocking pool, degrading to the default
/// value on error or panic.
async fn run_pass<T, F>(name: &'static str, container: &Arc<Container>, pass: F) -> T
where
    T: Default + Send + 'static,
    F: FnOnce(&Container) -> Result<T> + Send + 'static,
{
    let container = Arc::clone(container);
    match tokio::task::spawn_blocking(move || pass(&container)).await {
        Ok(Ok(value)) => value,
        Ok(Err(e)) => {
            log::warn!("{} pass failed, using default: {}", name, e);
            T::default()
        }
        Err(e) => {
            log::warn!("{} pass aborted, using default: {}", name, e);
            T::default()
        }
    }
}

fn parse_optional_part(container: &Container, part: &str) -> Result<Option<XmlElement>> {
    match container.read_part(part)? {
        Some(xml) => parse_part(part, &xml).map(Some),
        None => {
            log::debug!("{} not present in container", part);
            Ok(None)
        }
    }
}

fn read_core_properties(container: &Container) -> Result<DocumentProperties> {
    Ok(parse_optional_part(container, CORE_PROPERTIES_PART)?
        .map(|root| extract_core_properties(&root))
        .unwrap_or_default())
}

fn read_body_text(container: &Container, order: TableTextOrder) -> Result<String> {
    Ok(parse_optional_part(container, DOCUMENT_PART)?
        .map(|document| extract_body_text(&document, order))
        .unwrap_or_default())
}

fn read_headings(container: &Container, words_per_page: usize) -> Result<Vec<Heading>> {
    Ok(parse_optional_part(container, DOCUMENT_PART)?
        .map(|document| extract_headings(&body_paragraphs(&document), words_per_page))
        .unwrap_or_default())
}

fn read_diagram_count(container: &Container, order: TableTextOrder, cap: usize) -> Result<usize> {
    let from_entries = count_diagram_entries(container.entries());
    // A malformed body still leaves the entry count usable
    let body_text = match read_body_text(container, order) {
        Ok(text) => text,
        Err(e) => {
            log::warn!("diagram references skipped: {}", e);
            String::new()
        }
    };
    Ok(from_entries + count_diagram_references(&body_text, cap))
}
