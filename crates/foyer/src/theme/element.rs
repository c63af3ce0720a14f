//! The theme XML element tree.

use std::collections::HashMap;

use quick_xml::events::Event;
use quick_xml::Reader;

use super::error::{ThemeError, ThemeResult};

/// A single element of a parsed theme document.
///
/// Theme widgets are configured from these: the loader feeds each child
/// element of a widget definition to the widget's `parse_element` hook.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeElement {
    /// Element tag name.
    name: String,
    /// Element attributes.
    attributes: HashMap<String, String>,
    /// Concatenated text content.
    text: String,
    /// Child elements, in document order.
    children: Vec<ThemeElement>,
}

impl ThemeElement {
    /// Create an element with the given tag name and no content.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: HashMap::new(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style helper setting the text content.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Builder-style helper setting an attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// The element tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up an attribute value.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|s| s.as_str())
    }

    /// The text content of the element.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Child elements in document order.
    pub fn children(&self) -> &[ThemeElement] {
        &self.children
    }

    /// Get the first child element with the given tag name.
    pub fn child(&self, name: &str) -> Option<&ThemeElement> {
        self.children.iter().find(|el| el.name == name)
    }

    /// Parse a theme XML fragment into its root element.
    pub fn from_str(xml: &str) -> ThemeResult<ThemeElement> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        let mut stack: Vec<ThemeElement> = Vec::new();
        let mut root: Option<ThemeElement> = None;

        loop {
            buf.clear();
            match reader.read_event_into(&mut buf)? {
                Event::Start(start) => {
                    let mut element =
                        ThemeElement::new(String::from_utf8_lossy(start.name().as_ref()));
                    for attr in start.attributes() {
                        let attr = attr?;
                        element.attributes.insert(
                            String::from_utf8_lossy(attr.key.as_ref()).to_string(),
                            String::from_utf8_lossy(&attr.value).to_string(),
                        );
                    }
                    stack.push(element);
                }
                Event::End(_) => {
                    if let Some(element) = stack.pop() {
                        match stack.last_mut() {
                            Some(parent) => parent.children.push(element),
                            None => root = Some(element),
                        }
                    }
                }
                Event::Empty(empty) => {
                    let mut element =
                        ThemeElement::new(String::from_utf8_lossy(empty.name().as_ref()));
                    for attr in empty.attributes() {
                        let attr = attr?;
                        element.attributes.insert(
                            String::from_utf8_lossy(attr.key.as_ref()).to_string(),
                            String::from_utf8_lossy(&attr.value).to_string(),
                        );
                    }
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(element),
                        None => root = Some(element),
                    }
                }
                Event::Text(text) => {
                    if let Some(parent) = stack.last_mut() {
                        parent.text.push_str(&text.unescape()?);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        root.ok_or(ThemeError::MissingRoot)
    }
}
