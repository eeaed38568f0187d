//! ZIP container access
//!
//! This module opens an in-memory office container and reads its named
//! parts. A missing part is not an error; only a buffer that is not an
//! archive at all is.

use std::io::{Cursor, Read};
use std::sync::Arc;
use zip::result::ZipError;
use zip::ZipArchive;

use crate::error::Result;

pub(crate) const DOCUMENT_PART: &str = "word/document.xml";
pub(crate) const CORE_PROPERTIES_PART: &str = "docProps/core.xml";

/// Read-only handle over a fully materialized container buffer.
///
/// The handle is `Sync`, so independent extraction passes can share it
/// behind an `Arc`. Each read opens its own archive view over the bytes.
#[derive(Debug, Clone)]
pub struct Container {
    data: Arc<[u8]>,
    entries: Vec<String>,
}

impl Container {
    /// Open a container, failing with [`crate::Error::Format`] when the
    /// buffer is not a valid archive.
    pub fn open(data: impl Into<Arc<[u8]>>) -> Result<Self> {
        let data = data.into();
        let archive = ZipArchive::new(Cursor::new(&data[..]))?;
        let entries = archive.file_names().map(str::to_string).collect();

        Ok(Self { data, entries })
    }

    /// All entry names, in central-directory order
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn has_part(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry == name)
    }

    /// Read a named part as text. Returns `Ok(None)` when the part is absent.
    pub fn read_part(&self, name: &str) -> Result<Option<String>> {
        let mut archive = ZipArchive::new(Cursor::new(&self.data[..]))?;

        let mut file = match archive.by_name(name) {
            Ok(file) => file,
            Err(ZipError::FileNotFound) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;

        // Parts are UTF-8 XML; tolerate stray bytes rather than losing the part
        Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
    }
}
