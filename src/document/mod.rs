//! Document parsing and metadata synthesis module
//!
//! This module opens office containers, parses their XML parts, and turns
//! what it finds into [`DocumentMetadata`] and a nested table of contents.

pub(crate) mod cleanup;
pub mod container;
pub(crate) mod loader;
pub mod models;
pub(crate) mod parsing;
pub mod toc;
pub mod xml;

pub use cleanup::estimate_page_count;
pub use container::Container;
pub use loader::MetadataExtractor;
pub use models::*;
pub use parsing::text::count_words;
pub use toc::generate_table_of_contents;
