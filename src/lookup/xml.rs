//! Minimal XML document tree over `quick-xml`.
//!
//! Both services answer with small XML documents, and every extraction rule
//! we have is positional ("first `best_book`", "child 1 of the first
//! `author`"). A tiny owned tree keeps those rules readable without pulling
//! serde mappings over response shapes we only partially care about.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::domain::LookupError;

/// A single element: its local name, leading text and child elements.
///
/// `text` is the text content that appears before the first child element,
/// which is all that any of the services put in the elements we read.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmlElement {
    name: String,
    text: Option<String>,
    children: Vec<XmlElement>,
}

impl XmlElement {
    fn from_start(start: &BytesStart<'_>) -> Self {
        Self {
            name: String::from_utf8_lossy(start.local_name().as_ref()).into_owned(),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text content, if any non-whitespace text was present.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Positional child access (0-based, elements only).
    pub fn child(&self, index: usize) -> Option<&XmlElement> {
        self.children.get(index)
    }

    pub fn children(&self) -> &[XmlElement] {
        &self.children
    }

    fn push_text(&mut self, text: &str) {
        // Text after the first child is tail text of that child; ignore it.
        if !self.children.is_empty() || text.is_empty() {
            return;
        }
        match self.text {
            Some(ref mut existing) => existing.push_str(text),
            None => self.text = Some(text.to_string()),
        }
    }

    fn collect_named<'a>(&'a self, name: &str, out: &mut Vec<&'a XmlElement>) {
        if self.name == name {
            out.push(self);
        }
        for child in &self.children {
            child.collect_named(name, out);
        }
    }
}

/// A parsed XML response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDocument {
    root: XmlElement,
}

impl XmlDocument {
    /// Parse a raw response body.
    ///
    /// Malformed markup, mismatched end tags and empty bodies are all
    /// reported as [`LookupError::Parse`].
    pub fn parse(raw: &str) -> Result<Self, LookupError> {
        let mut reader = Reader::from_str(raw);
        reader.config_mut().trim_text(true);

        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;

        loop {
            let event = reader.read_event().map_err(|e| {
                LookupError::Parse(format!("at byte {}: {}", reader.buffer_position(), e))
            })?;

            match event {
                Event::Start(start) => stack.push(XmlElement::from_start(&start)),
                Event::Empty(start) => {
                    attach(&mut stack, &mut root, XmlElement::from_start(&start))?;
                }
                Event::End(_) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| LookupError::Parse("unbalanced end tag".to_string()))?;
                    attach(&mut stack, &mut root, element)?;
                }
                Event::Text(text) => {
                    if let Some(current) = stack.last_mut() {
                        let text = text
                            .unescape()
                            .map_err(|e| LookupError::Parse(e.to_string()))?;
                        current.push_text(&text);
                    }
                }
                Event::CData(data) => {
                    if let Some(current) = stack.last_mut() {
                        let bytes = data.into_inner();
                        current.push_text(String::from_utf8_lossy(&bytes).trim());
                    }
                }
                Event::Eof => break,
                // Declarations, comments, processing instructions, doctypes
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(LookupError::Parse(format!(
                "document ended inside <{}>",
                open.name
            )));
        }

        root.map(|root| Self { root })
            .ok_or_else(|| LookupError::Parse("document has no root element".to_string()))
    }

    pub fn root(&self) -> &XmlElement {
        &self.root
    }

    /// Every element with the given local name, in document order.
    ///
    /// The root itself is included when it matches.
    pub fn elements_named(&self, name: &str) -> Vec<&XmlElement> {
        let mut out = Vec::new();
        self.root.collect_named(name, &mut out);
        out
    }

    /// First element with the given local name, in document order.
    pub fn first_named(&self, name: &str) -> Option<&XmlElement> {
        self.elements_named(name).into_iter().next()
    }
}

fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<(), LookupError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => {
            return Err(LookupError::Parse(format!(
                "second root element <{}>",
                element.name
            )));
        }
    }
    Ok(())
}
