//! Hyperlinks (`a:hlinkClick`).

use crate::container::Relationships;
use crate::xml::XmlNode;

/// A resolved hyperlink.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    /// Link target: an external URL, a package path or `/#/<slide index>`
    pub target: String,
    pub external: bool,
}

impl Link {
    /// Resolve the `a:hlinkClick` child of `props` (`cNvPr` or `a:rPr`).
    pub fn from_props(props: Option<&XmlNode>, rels: &Relationships) -> Option<Link> {
        let id = props?.attr_at(&["a:hlinkClick"], "r:id")?;
        let rel = rels.get(id)?;
        let target = if rel.kind() == "slide" {
            slide_anchor(&rel.target).unwrap_or_else(|| rel.target.clone())
        } else {
            rels.resolve(rel)
        };
        Some(Link {
            target,
            external: rel.external,
        })
    }

    /// `onclick` handler for a clickable shape.
    pub fn script(&self) -> String {
        let nav = if self.external {
            format!("window.open('{}')", self.target)
        } else {
            format!("location='{}'", self.target)
        };
        format!("{};event.stopPropagation();", nav)
    }
}

/// `../slides/slide3.xml` becomes `/#/2`.
fn slide_anchor(target: &str) -> Option<String> {
    let file = target.rsplit('/').next()?;
    let number: usize = file.strip_prefix("slide")?.strip_suffix(".xml")?.parse().ok()?;
    Some(format!("/#/{}", number.checked_sub(1)?))
}
