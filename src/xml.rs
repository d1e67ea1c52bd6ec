//! Order-preserving XML element tree.
//!
//! Slide parts are small enough to hold in memory, and most of the
//! resolution logic needs random access (placeholder lookups, theme
//! indices) as well as document order (path commands, color filters,
//! gradient stops), so parts are parsed once into [`XmlNode`] trees.

use crate::error::{Error, Result};
use quick_xml::events::{BytesStart, Event};

/// A single XML element with its attributes, text and child elements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XmlNode {
    /// Qualified element name as written (e.g. `a:solidFill`)
    pub name: String,
    /// Attributes in document order, keyed by qualified name
    pub attributes: Vec<(String, String)>,
    /// Child elements in document order
    pub children: Vec<XmlNode>,
    /// Concatenated character data directly inside this element
    pub text: String,
}

impl XmlNode {
    /// Create an empty element.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Parse an XML document and return its root element.
    pub fn parse(xml: &str) -> Result<XmlNode> {
        let mut reader = quick_xml::Reader::from_str(xml);
        reader.config_mut().trim_text(false);

        let mut stack: Vec<XmlNode> = Vec::new();
        let mut root: Option<XmlNode> = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) => stack.push(Self::from_start(&e)?),
                Event::Empty(e) => {
                    let node = Self::from_start(&e)?;
                    Self::attach(&mut stack, &mut root, node);
                }
                Event::End(_) => {
                    let node = stack
                        .pop()
                        .ok_or_else(|| Error::XmlParse("unbalanced end tag".to_string()))?;
                    Self::attach(&mut stack, &mut root, node);
                }
                Event::Text(e) => {
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(&e.unescape()?);
                    }
                }
                Event::CData(e) => {
                    if let Some(current) = stack.last_mut() {
                        current
                            .text
                            .push_str(&String::from_utf8_lossy(&e.into_inner()));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !stack.is_empty() {
            return Err(Error::XmlParse("unexpected end of document".to_string()));
        }
        root.ok_or_else(|| Error::XmlParse("document has no root element".to_string()))
    }

    fn from_start(e: &BytesStart<'_>) -> Result<XmlNode> {
        let mut node = XmlNode::new(String::from_utf8_lossy(e.name().as_ref()));
        for attr in e.attributes() {
            let attr = attr?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
            let value = attr.unescape_value()?.to_string();
            node.attributes.push((key, value));
        }
        Ok(node)
    }

    fn attach(stack: &mut [XmlNode], root: &mut Option<XmlNode>, node: XmlNode) {
        match stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => {
                if root.is_none() {
                    *root = Some(node);
                }
            }
        }
    }

    /// Name without its namespace prefix.
    pub fn local_name(&self) -> &str {
        self.name.rsplit(':').next().unwrap_or(&self.name)
    }

    /// Look up an attribute by qualified name.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Builder helper used mostly by tests.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Builder helper used mostly by tests.
    pub fn with_child(mut self, child: XmlNode) -> Self {
        self.children.push(child);
        self
    }

    /// First child element with the given qualified name.
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All child elements with the given qualified name.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlNode> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Follow a path of child names from this element.
    pub fn find(&self, path: &[&str]) -> Option<&XmlNode> {
        path.iter().try_fold(self, |node, name| node.child(name))
    }

    /// Follow a path and read an attribute at its end.
    pub fn attr_at(&self, path: &[&str], key: &str) -> Option<&str> {
        self.find(path)?.attr(key)
    }

    /// Text content of this element.
    pub fn text(&self) -> &str {
        &self.text
    }
}
