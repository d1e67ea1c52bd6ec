//! Placeholder lookup tables for layouts and masters.

use super::node::ShapeNode;
use crate::xml::XmlNode;
use std::collections::HashMap;

/// Shapes of one layout or master, keyed by id, placeholder index and
/// placeholder type. Built from the immediate children of `p:spTree`.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderIndex<'a> {
    by_id: HashMap<&'a str, &'a XmlNode>,
    by_idx: HashMap<&'a str, &'a XmlNode>,
    by_type: HashMap<&'a str, &'a XmlNode>,
}

impl<'a> PlaceholderIndex<'a> {
    /// Index the shape tree of a layout or master root.
    pub fn build(root: &'a XmlNode) -> Self {
        let mut index = Self::default();
        let Some(tree) = root.find(&["p:cSld", "p:spTree"]) else {
            return index;
        };

        for shape in tree.children.iter().map(ShapeNode::new) {
            if !shape.kind.is_indexed() {
                continue;
            }
            if !shape.id.is_empty() {
                index.by_id.insert(shape.id, shape.node);
            }
            if let Some(idx) = shape.ph_idx {
                index.by_idx.insert(idx, shape.node);
            }
            if let Some(ph_type) = shape.ph_type {
                index.by_type.insert(ph_type, shape.node);
            }
        }
        index
    }

    /// Shape with the given `cNvPr@id`.
    pub fn by_id(&self, id: &str) -> Option<&'a XmlNode> {
        self.by_id.get(id).copied()
    }

    /// Match a placeholder: by type first, then by index.
    ///
    /// An index match whose placeholder declares a different type is
    /// rejected.
    pub fn lookup(&self, ph_type: Option<&str>, ph_idx: Option<&str>) -> Option<&'a XmlNode> {
        if let Some(node) = ph_type.and_then(|t| self.by_type.get(t).copied()) {
            return Some(node);
        }
        let candidate = *self.by_idx.get(ph_idx?)?;
        match (ph_type, ShapeNode::new(candidate).ph_type) {
            (Some(wanted), Some(found)) if wanted != found => None,
            _ => Some(candidate),
        }
    }

    /// Number of indexed shapes.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
