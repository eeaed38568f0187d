//! metadox: structural metadata extraction for uploaded documents
//!
//! This library derives catalog metadata from `.docx` containers, PDFs and
//! plain text: page, word, image and diagram counts, a heading list with
//! estimated pages, a nested table of contents, core properties, and
//! keyword-based technology and compliance classification.

pub mod classification;
pub mod config;
pub mod document;
pub mod error;
pub mod pdf;

// Re-export commonly used types
pub use classification::{detect_compliance_frameworks, detect_technologies};
pub use config::{ExtractorConfig, TableTextOrder};
pub use document::{
    count_words, estimate_page_count, generate_table_of_contents, Classification, Completeness,
    DocumentFormat, DocumentMetadata, Heading, MetadataExtractor, TableOfContentsItem,
};
pub use error::{Error, Result};
pub use pdf::{PdfContent, PdfStrategy, PdfTextSource};
