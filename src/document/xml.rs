//! Generic XML part parsing
//!
//! Parses a container part into an owned element tree. Namespace prefixes
//! are stripped from element and attribute names, attributes live in their
//! own map, and children keep document order. Elements in
//! [`LIST_ELEMENTS`] are only ever reached through [`XmlElement::list`], so
//! consumers never have to care whether a paragraph had one run or twenty.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// Element names that always materialize as lists, regardless of cardinality
pub const LIST_ELEMENTS: &[&str] = &[
    "p",
    "r",
    "t",
    "hyperlink",
    "tbl",
    "tr",
    "tc",
    "drawing",
    "inline",
    "anchor",
];

pub fn is_list_element(name: &str) -> bool {
    LIST_ELEMENTS.contains(&name)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    /// Local name, namespace prefix removed
    pub name: String,
    pub attributes: BTreeMap<String, String>,
    /// Character data directly inside this element
    pub text: String,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    fn from_start(start: &BytesStart<'_>) -> Self {
        let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
        let mut attributes = BTreeMap::new();

        for attr in start.attributes().with_checks(false).flatten() {
            let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
            let value = match attr.unescape_value() {
                Ok(v) => v.into_owned(),
                Err(_) => String::from_utf8_lossy(&attr.value).into_owned(),
            };
            attributes.insert(key, value);
        }

        Self {
            name,
            attributes,
            ..Self::default()
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// All direct children with the given local name, in document order
    pub fn list(&self, name: &str) -> Vec<&XmlElement> {
        self.children.iter().filter(|c| c.name == name).collect()
    }

    /// The first direct child with the given local name.
    ///
    /// Only meaningful for singleton elements; list elements go through
    /// [`XmlElement::list`].
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        debug_assert!(!is_list_element(name), "{name} is a list element");
        self.children.iter().find(|c| c.name == name)
    }

    /// Follow a path of singleton children, e.g. `["pPr", "pStyle"]`
    pub fn path(&self, names: &[&str]) -> Option<&XmlElement> {
        names.iter().try_fold(self, |node, name| node.child(name))
    }
}

/// Parse one XML part into its root element.
///
/// `part` is only used to label errors.
pub fn parse_part(part: &str, xml: &str) -> Result<XmlElement> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let malformed = |message: String| Error::Xml {
        part: part.to_string(),
        message,
    };

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => stack.push(XmlElement::from_start(e)),
            Ok(Event::Empty(ref e)) => {
                let element = XmlElement::from_start(e);
                attach(&mut stack, &mut root, element);
            }
            Ok(Event::End(_)) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| malformed("unbalanced end tag".to_string()))?;
                attach(&mut stack, &mut root, element);
            }
            Ok(Event::Text(ref e)) => {
                if let Some(current) = stack.last_mut() {
                    let text = e
                        .unescape()
                        .map_err(|err| malformed(err.to_string()))?;
                    current.text.push_str(&text);
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(current) = stack.last_mut() {
                    current
                        .text
                        .push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(malformed(format!(
                    "{} at position {}",
                    e,
                    reader.error_position()
                )));
            }
            // Declarations, comments, processing instructions
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(malformed("unexpected end of document".to_string()));
    }
    root.ok_or_else(|| malformed("no root element".to_string()))
}

fn attach(stack: &mut [XmlElement], root: &mut Option<XmlElement>, element: XmlElement) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => {
            // Keep the first top-level element; anything after it is ignored
            if root.is_none() {
                *root = Some(element);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_prefixes_are_stripped() {
        let xml = r#"<w:document xmlns:w="urn:w"><w:body><w:p w:rsidR="00A1"/></w:body></w:document>"#;
        let root = parse_part("word/document.xml", xml).unwrap();

        assert_eq!(root.name, "document");
        let body = root.child("body").unwrap();
        let paragraphs = body.list("p");
        assert_eq!(paragraphs.len(), 1);
        assert_eq!(paragraphs[0].attr("rsidR"), Some("00A1"));
    }

    #[test]
    fn test_single_and_repeated_children_read_the_same_way() {
        let one = parse_part("x", "<p><r><t>a</t></r></p>").unwrap();
        let many = parse_part("x", "<p><r><t>a</t></r><r><t>b</t></r></p>").unwrap();

        assert_eq!(one.list("r").len(), 1);
        assert_eq!(many.list("r").len(), 2);
        assert!(one.list("hyperlink").is_empty());
    }

    #[test]
    fn test_text_is_unescaped_and_preserved() {
        let root = parse_part("x", r#"<t xml:space="preserve"> R&amp;D </t>"#).unwrap();
        assert_eq!(root.text, " R&D ");
        assert_eq!(root.attr("space"), Some("preserve"));
    }

    #[test]
    fn test_path_follows_singletons() {
        let root = parse_part(
            "x",
            r#"<p><pPr><pStyle val="Heading2"/></pPr></p>"#,
        )
        .unwrap();
        assert_eq!(
            root.path(&["pPr", "pStyle"]).and_then(|s| s.attr("val")),
            Some("Heading2")
        );
        assert!(root.path(&["pPr", "numPr"]).is_none());
    }

    #[test]
    fn test_malformed_xml_is_error() {
        let err = parse_part("word/document.xml", "<a><b></a>").unwrap_err();
        assert!(matches!(err, Error::Xml { .. }));

        let err = parse_part("word/document.xml", "<a><b>").unwrap_err();
        assert!(matches!(err, Error::Xml { .. }));
    }

    #[test]
    fn test_list_elements_set() {
        assert!(is_list_element("tc"));
        assert!(!is_list_element("body"));
    }
}
