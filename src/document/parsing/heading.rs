//! Heading detection
//!
//! This module builds the flat heading list of a document: style-based
//! detection for Word paragraphs with page numbers estimated from the
//! running word count, and a line heuristic for plain text where no styles
//! exist.

use once_cell::sync::Lazy;
use regex::Regex;

use super::text::{count_words, extract_text_from_paragraph};
use crate::document::cleanup::page_for_word_offset;
use crate::document::models::Heading;
use crate::document::xml::XmlElement;

// "Heading1", "heading 2", "HEADING10"
static HEADING_STYLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^heading\s*([1-9][0-9]*)$").unwrap());

// "1 Introduction", "2.3 Scope", "4.1.2. Detail"
static NUMBERED_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,3}(?:\.\d{1,3})*)\.?\s+\p{Lu}").unwrap());

const MAX_PLAIN_HEADING_CHARS: usize = 100;
const MAX_CAPS_HEADING_CHARS: usize = 60;

/// Detect heading level from a paragraph's style reference
pub(crate) fn detect_heading_from_paragraph_style(para: &XmlElement) -> Option<u32> {
    let style = para.path(&["pPr", "pStyle"])?.attr("val")?;
    heading_level_from_style(style)
}

/// Parse the level out of a `Heading<N>` style id. Levels are not clamped.
pub(crate) fn heading_level_from_style(style: &str) -> Option<u32> {
    HEADING_STYLE
        .captures(style.trim())
        .and_then(|caps| caps.get(1))
        .and_then(|level| level.as_str().parse().ok())
}

/// Walk body paragraphs in order and collect heading-styled ones.
///
/// Every paragraph, heading or not, advances the running word count after
/// it is examined, so a heading's page reflects the words before it.
pub(crate) fn extract_headings(paragraphs: &[&XmlElement], words_per_page: usize) -> Vec<Heading> {
    let mut headings = Vec::new();
    let mut words_so_far = 0usize;

    for para in paragraphs {
        let text = extract_text_from_paragraph(para);

        if let Some(level) = detect_heading_from_paragraph_style(para) {
            let title = text.trim();
            if !title.is_empty() {
                headings.push(Heading::new(
                    level,
                    title,
                    Some(page_for_word_offset(words_so_far, words_per_page)),
                ));
            }
        }

        words_so_far += count_words(&text);
    }

    headings
}

/// Detect a heading level from a single line of plain text.
///
/// Numbered lines whose title starts with an uppercase letter take their
/// level from the dot count (clamped to `max_level`); short all-caps lines
/// are level 1. The trimmed line is the title.
pub(crate) fn detect_heading_from_text(line: &str, max_level: u32) -> Option<(u32, String)> {
    let line = line.trim();
    if line.is_empty() || line.chars().count() > MAX_PLAIN_HEADING_CHARS {
        return None;
    }

    if let Some(caps) = NUMBERED_HEADING.captures(line) {
        let dots = caps.get(1)?.as_str().matches('.').count() as u32;
        let level = (dots + 1).min(max_level.max(1));
        return Some((level, line.to_string()));
    }

    if is_caps_heading(line) {
        return Some((1, line.to_string()));
    }

    None
}

fn is_caps_heading(line: &str) -> bool {
    if line.chars().count() > MAX_CAPS_HEADING_CHARS {
        return false;
    }

    let letters: Vec<char> = line.chars().filter(|c| c.is_alphabetic()).collect();
    letters.len() >= 3
        && letters.iter().all(|c| c.is_uppercase())
        && !line.ends_with('.')
        && !line.ends_with(',')
}

/// Apply the plain-text heuristic to every line of a page of text.
///
/// `page` is attached verbatim to each heading found.
pub(crate) fn headings_from_plain_text(
    text: &str,
    page: Option<usize>,
    max_level: u32,
) -> Vec<Heading> {
    text.lines()
        .filter_map(|line| detect_heading_from_text(line, max_level))
        .map(|(level, title)| Heading::new(level, title, page))
        .collect()
}

/// Plain-text headings with pages estimated from the running word count
pub(crate) fn headings_from_unpaginated_text(
    text: &str,
    words_per_page: usize,
    max_level: u32,
) -> Vec<Heading> {
    let mut headings = Vec::new();
    let mut words_so_far = 0usize;

    for line in text.lines() {
        if let Some((level, title)) = detect_heading_from_text(line, max_level) {
            headings.push(Heading::new(
                level,
                title,
                Some(page_for_word_offset(words_so_far, words_per_page)),
            ));
        }
        words_so_far += count_words(line);
    }

    headings
}
