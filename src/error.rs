//! Error types for metadata extraction.

use std::io;
use thiserror::Error;

/// Result type alias for metadox operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while extracting document metadata.
///
/// Only [`Error::Format`] and [`Error::UnsupportedExtension`] ever escape the
/// public `extract*` operations; the other variants are produced inside the
/// individual extraction passes and absorbed there.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while reading a part or a configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The buffer is not a readable ZIP container.
    #[error("Unreadable document container: {0}")]
    Format(#[from] zip::result::ZipError),

    /// A part inside the container is not well-formed XML.
    #[error("Malformed XML in {part}: {message}")]
    Xml { part: String, message: String },

    /// The rich PDF backend could not process the buffer.
    #[error("PDF extraction error: {0}")]
    Pdf(String),

    /// The caller declared an extension with no extraction path.
    #[error("Unsupported document extension: {0}")]
    UnsupportedExtension(String),
}

#[cfg(feature = "pdf")]
impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            _ => Error::Pdf(err.to_string()),
        }
    }
}
