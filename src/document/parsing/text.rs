//! Text extraction from parsed body XML
//!
//! This module flattens paragraphs, hyperlinks and tables into plain
//! strings and provides the shared word-count primitive.

use crate::config::TableTextOrder;
use crate::document::xml::XmlElement;

/// Count words by splitting on whitespace runs
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Concatenate every run's text in document order, including runs nested
/// inside hyperlinks. Runs are joined without a separator.
pub(crate) fn extract_text_from_paragraph(para: &XmlElement) -> String {
    let mut text = String::new();

    for child in &para.children {
        match child.name.as_str() {
            "r" => push_run_text(child, &mut text),
            "hyperlink" => {
                for run in child.list("r") {
                    push_run_text(run, &mut text);
                }
            }
            _ => {
                // Properties, bookmarks, proofing marks carry no text
            }
        }
    }

    text
}

fn push_run_text(run: &XmlElement, out: &mut String) {
    for t in run.list("t") {
        out.push_str(&t.text);
    }
}

/// The `w:body` element of a parsed `word/document.xml`
pub(crate) fn body(document: &XmlElement) -> Option<&XmlElement> {
    document.child("body")
}

/// Top-level body paragraphs in document order
pub(crate) fn body_paragraphs(document: &XmlElement) -> Vec<&XmlElement> {
    body(document).map(|b| b.list("p")).unwrap_or_default()
}

/// Plain body text: one line per paragraph.
///
/// With [`TableTextOrder::Appended`] table-cell paragraphs follow all
/// top-level paragraphs; with [`TableTextOrder::Positional`] they appear
/// where their table sits.
pub(crate) fn extract_body_text(document: &XmlElement, order: TableTextOrder) -> String {
    let Some(body) = body(document) else {
        return String::new();
    };

    let mut lines: Vec<String> = Vec::new();

    match order {
        TableTextOrder::Appended => {
            for para in body.list("p") {
                lines.push(extract_text_from_paragraph(para));
            }
            for table in body.list("tbl") {
                collect_table_lines(table, &mut lines);
            }
        }
        TableTextOrder::Positional => {
            for child in &body.children {
                match child.name.as_str() {
                    "p" => lines.push(extract_text_from_paragraph(child)),
                    "tbl" => collect_table_lines(child, &mut lines),
                    _ => {}
                }
            }
        }
    }

    lines.join("\n")
}

fn collect_table_lines(table: &XmlElement, lines: &mut Vec<String>) {
    for row in table.list("tr") {
        for cell in row.list("tc") {
            for child in &cell.children {
                match child.name.as_str() {
                    "p" => lines.push(extract_text_from_paragraph(child)),
                    // Nested tables
                    "tbl" => collect_table_lines(child, lines),
                    _ => {}
                }
            }
        }
    }
}
