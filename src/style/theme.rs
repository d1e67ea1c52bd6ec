//! Theme part accessors.

use crate::xml::XmlNode;

/// A parsed theme part (`a:theme`).
#[derive(Debug, Clone, Default)]
pub struct Theme {
    root: XmlNode,
}

impl Theme {
    /// Wrap a parsed `a:theme` tree.
    pub fn new(root: XmlNode) -> Self {
        Self { root }
    }

    /// Parse theme XML.
    pub fn parse(xml: &str) -> crate::Result<Self> {
        Ok(Self::new(XmlNode::parse(xml)?))
    }

    fn elements(&self) -> Option<&XmlNode> {
        self.root.child("a:themeElements")
    }

    /// Color definition for a scheme slot such as `accent1` or `dk1`.
    pub fn scheme_color(&self, slot: &str) -> Option<&XmlNode> {
        self.elements()?
            .child("a:clrScheme")?
            .child(&format!("a:{}", slot))
    }

    /// Entry `idx` of `a:fillStyleLst`, by raw child position.
    pub fn fill_style(&self, idx: usize) -> Option<&XmlNode> {
        self.format_list("a:fillStyleLst")?.children.get(idx)
    }

    /// Entry `idx` of `a:lnStyleLst`, by raw child position.
    pub fn line_style(&self, idx: usize) -> Option<&XmlNode> {
        self.format_list("a:lnStyleLst")?.children.get(idx)
    }

    /// Entry `idx` of `a:bgFillStyleLst`, by raw child position.
    pub fn background_fill_style(&self, idx: usize) -> Option<&XmlNode> {
        self.format_list("a:bgFillStyleLst")?.children.get(idx)
    }

    fn format_list(&self, name: &str) -> Option<&XmlNode> {
        self.elements()?.child("a:fmtScheme")?.child(name)
    }

    /// Latin typeface of the heading font.
    pub fn major_font(&self) -> Option<&str> {
        self.font("a:majorFont")
    }

    /// Latin typeface of the body font.
    pub fn minor_font(&self) -> Option<&str> {
        self.font("a:minorFont")
    }

    fn font(&self, which: &str) -> Option<&str> {
        self.elements()?
            .find(&["a:fontScheme", which, "a:latin"])?
            .attr("typeface")
    }
}
