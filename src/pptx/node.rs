//! Shape tree node classification.

use crate::xml::XmlNode;

/// The kinds of node found in a `p:spTree`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// `p:grpSp`
    Group,
    /// `p:sp`
    Shape,
    /// `p:pic`
    Picture,
    /// `p:cxnSp`
    Connector,
    /// `p:graphicFrame`, `p:contentPart`, tree properties, ...
    Unsupported,
}

impl ShapeKind {
    /// Classify an element by name.
    pub fn of(node: &XmlNode) -> Self {
        match node.name.as_str() {
            "p:grpSp" => ShapeKind::Group,
            "p:sp" => ShapeKind::Shape,
            "p:pic" => ShapeKind::Picture,
            "p:cxnSp" => ShapeKind::Connector,
            _ => ShapeKind::Unsupported,
        }
    }

    /// Name of the non-visual properties element for this kind.
    pub fn non_visual_name(self) -> Option<&'static str> {
        match self {
            ShapeKind::Group => Some("p:nvGrpSpPr"),
            ShapeKind::Shape => Some("p:nvSpPr"),
            ShapeKind::Picture => Some("p:nvPicPr"),
            ShapeKind::Connector => Some("p:nvCxnSpPr"),
            ShapeKind::Unsupported => None,
        }
    }

    /// Whether placeholder indexes record this kind.
    pub fn is_indexed(self) -> bool {
        matches!(self, ShapeKind::Shape | ShapeKind::Picture | ShapeKind::Connector)
    }
}

/// A shape tree node with its identity read out.
#[derive(Debug, Clone, Copy)]
pub struct ShapeNode<'a> {
    pub kind: ShapeKind,
    pub node: &'a XmlNode,
    /// `cNvPr@id`
    pub id: &'a str,
    /// `cNvPr@name`
    pub name: &'a str,
    /// `p:ph@type`
    pub ph_type: Option<&'a str>,
    /// `p:ph@idx`
    pub ph_idx: Option<&'a str>,
}

impl<'a> ShapeNode<'a> {
    pub fn new(node: &'a XmlNode) -> Self {
        let kind = ShapeKind::of(node);
        let nv = kind.non_visual_name().and_then(|name| node.child(name));
        let c_nv = nv.and_then(|nv| nv.child("p:cNvPr"));
        let ph = nv.and_then(|nv| nv.find(&["p:nvPr", "p:ph"]));

        Self {
            kind,
            node,
            id: c_nv.and_then(|c| c.attr("id")).unwrap_or_default(),
            name: c_nv.and_then(|c| c.attr("name")).unwrap_or_default(),
            ph_type: ph.and_then(|p| p.attr("type")),
            ph_idx: ph.and_then(|p| p.attr("idx")),
        }
    }

    /// The `cNvPr` element, where shape-level hyperlinks live.
    pub fn drawing_props(&self) -> Option<&'a XmlNode> {
        let nv = self.kind.non_visual_name()?;
        self.node.find(&[nv, "p:cNvPr"])
    }

    /// The `p:spPr` element.
    pub fn shape_props(&self) -> Option<&'a XmlNode> {
        self.node.child("p:spPr")
    }

    /// `p:spPr/a:xfrm`, or `p:grpSpPr/a:xfrm` for groups.
    pub fn xfrm(&self) -> Option<&'a XmlNode> {
        match self.kind {
            ShapeKind::Group => self.node.find(&["p:grpSpPr", "a:xfrm"]),
            _ => self.node.find(&["p:spPr", "a:xfrm"]),
        }
    }
}
