//! Rich PDF extraction backed by `lopdf`.

use lopdf::{Dictionary, Document, Object};

use super::{PdfContent, PdfTextSource};
use crate::document::models::{non_empty, split_keywords, DocumentProperties};
use crate::error::{Error, Result};

/// Reads per-page text, the page tree and the Info dictionary with `lopdf`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfSource;

impl PdfTextSource for LopdfSource {
    fn name(&self) -> &'static str {
        "lopdf"
    }

    fn read(&self, data: &[u8]) -> Result<PdfContent> {
        let doc = Document::load_mem(data)?;
        if doc.is_encrypted() {
            return Err(Error::Pdf("document is encrypted".to_string()));
        }

        let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
        let mut pages = Vec::with_capacity(page_numbers.len());

        for page_num in &page_numbers {
            match doc.extract_text(&[*page_num]) {
                Ok(text) => pages.push(text),
                Err(e) => {
                    // Keep the slot so later pages keep their numbers
                    log::warn!("Failed to extract text from page {}: {}", page_num, e);
                    pages.push(String::new());
                }
            }
        }

        Ok(PdfContent {
            page_count: page_numbers.len(),
            pages,
            properties: read_info(&doc),
            version: Some(doc.version.clone()),
        })
    }
}

fn info_dictionary(doc: &Document) -> Option<&Dictionary> {
    let info = doc.trailer.get(b"Info").ok()?;
    match info {
        Object::Reference(id) => doc.get_dictionary(*id).ok(),
        Object::Dictionary(dict) => Some(dict),
        _ => None,
    }
}

fn read_info(doc: &Document) -> DocumentProperties {
    let Some(info) = info_dictionary(doc) else {
        return DocumentProperties::default();
    };

    DocumentProperties {
        author: non_empty(get_string_from_dict(info, b"Author")),
        title: non_empty(get_string_from_dict(info, b"Title")),
        description: non_empty(get_string_from_dict(info, b"Subject")),
        keywords: get_string_from_dict(info, b"Keywords").and_then(|k| split_keywords(&k)),
    }
}

fn get_string_from_dict(dict: &Dictionary, key: &[u8]) -> Option<String> {
    match dict.get(key).ok()? {
        Object::String(bytes, _) => Some(decode_pdf_string(bytes)),
        Object::Name(bytes) => String::from_utf8(bytes.clone()).ok(),
        _ => None,
    }
}

/// Decode a PDF text string: UTF-16BE with BOM, else UTF-8, else Latin-1
pub(crate) fn decode_pdf_string(bytes: &[u8]) -> String {
    if let Some(rest) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let utf16: Vec<u16> = rest
            .chunks_exact(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]))
            .collect();
        return String::from_utf16_lossy(&utf16);
    }

    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}
