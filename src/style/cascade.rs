//! Run property cascade.
//!
//! Text properties are looked up tier by tier: the run's own `a:rPr`, the
//! paragraph default, the text body's level-1 list style, then the matched
//! layout and master placeholders' level-1 list styles. The first tier that
//! has the property wins, even when its value is empty.

use crate::xml::XmlNode;

/// Path from a text body to its level-1 default run properties.
const LIST_STYLE_DEFAULTS: [&str; 3] = ["a:lstStyle", "a:lvl1pPr", "a:defRPr"];

/// Text bodies and paragraph enclosing the run being resolved.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextScope<'a> {
    /// Enclosing `a:p`
    pub paragraph: Option<&'a XmlNode>,
    /// Enclosing `p:txBody`
    pub body: Option<&'a XmlNode>,
    /// `p:txBody` of the matched layout placeholder
    pub layout_body: Option<&'a XmlNode>,
    /// `p:txBody` of the matched master placeholder
    pub master_body: Option<&'a XmlNode>,
}

impl<'a> TextScope<'a> {
    /// Same scope, narrowed to one paragraph.
    pub fn with_paragraph(self, paragraph: &'a XmlNode) -> Self {
        Self {
            paragraph: Some(paragraph),
            ..self
        }
    }
}

/// One tier: returns the properties element to read, if this tier has one.
pub type Tier = for<'a> fn(&'a XmlNode, &TextScope<'a>) -> Option<&'a XmlNode>;

fn run_properties<'a>(run: &'a XmlNode, _: &TextScope<'a>) -> Option<&'a XmlNode> {
    run.child("a:rPr")
}

fn paragraph_defaults<'a>(_: &'a XmlNode, scope: &TextScope<'a>) -> Option<&'a XmlNode> {
    scope.paragraph?.find(&["a:pPr", "a:defRPr"])
}

fn body_list_style<'a>(_: &'a XmlNode, scope: &TextScope<'a>) -> Option<&'a XmlNode> {
    scope.body?.find(&LIST_STYLE_DEFAULTS)
}

fn layout_list_style<'a>(_: &'a XmlNode, scope: &TextScope<'a>) -> Option<&'a XmlNode> {
    scope.layout_body?.find(&LIST_STYLE_DEFAULTS)
}

fn master_list_style<'a>(_: &'a XmlNode, scope: &TextScope<'a>) -> Option<&'a XmlNode> {
    scope.master_body?.find(&LIST_STYLE_DEFAULTS)
}

/// Tiers in lookup order.
pub const RUN_TIERS: [Tier; 5] = [
    run_properties,
    paragraph_defaults,
    body_list_style,
    layout_list_style,
    master_list_style,
];

/// First tier value of attribute `key`, else `fallback`.
pub fn cascade_attr<'a>(
    run: &'a XmlNode,
    scope: &TextScope<'a>,
    key: &str,
    fallback: Option<&'a str>,
) -> Option<&'a str> {
    RUN_TIERS
        .iter()
        .find_map(|tier| tier(run, scope)?.attr(key))
        .or(fallback)
}

/// First tier child element `name` (e.g. `a:solidFill`).
pub fn cascade_child<'a>(run: &'a XmlNode, scope: &TextScope<'a>, name: &str) -> Option<&'a XmlNode> {
    RUN_TIERS.iter().find_map(|tier| tier(run, scope)?.child(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(xml: &str) -> XmlNode {
        XmlNode::parse(xml).unwrap()
    }

    #[test]
    fn test_local_tier_wins() {
        let run = node(r#"<a:r><a:rPr b="1"/><a:t>x</a:t></a:r>"#);
        let master = node(r#"<p:txBody><a:lstStyle><a:lvl1pPr><a:defRPr b="0"/></a:lvl1pPr></a:lstStyle></p:txBody>"#);
        let scope = TextScope {
            master_body: Some(&master),
            ..Default::default()
        };
        assert_eq!(cascade_attr(&run, &scope, "b", None), Some("1"));
    }

    #[test]
    fn test_falls_through_tiers_in_order() {
        let run = node(r#"<a:r><a:t>x</a:t></a:r>"#);
        let para = node(r#"<a:p><a:pPr><a:defRPr sz="1800"/></a:pPr></a:p>"#);
        let body = node(r#"<p:txBody><a:lstStyle><a:lvl1pPr><a:defRPr sz="2000" i="1"/></a:lvl1pPr></a:lstStyle></p:txBody>"#);
        let layout = node(r#"<p:txBody><a:lstStyle><a:lvl1pPr><a:defRPr u="sng"/></a:lvl1pPr></a:lstStyle></p:txBody>"#);
        let master = node(r#"<p:txBody><a:lstStyle><a:lvl1pPr><a:defRPr u="none" baseline="30000"/></a:lvl1pPr></a:lstStyle></p:txBody>"#);
        let scope = TextScope {
            paragraph: Some(&para),
            body: Some(&body),
            layout_body: Some(&layout),
            master_body: Some(&master),
        };

        assert_eq!(cascade_attr(&run, &scope, "sz", None), Some("1800"));
        assert_eq!(cascade_attr(&run, &scope, "i", None), Some("1"));
        assert_eq!(cascade_attr(&run, &scope, "u", None), Some("sng"));
        assert_eq!(cascade_attr(&run, &scope, "baseline", None), Some("30000"));
        assert_eq!(cascade_attr(&run, &scope, "strike", Some("noStrike")), Some("noStrike"));
        assert_eq!(cascade_attr(&run, &scope, "kern", None), None);
    }

    #[test]
    fn test_empty_value_stops_cascade() {
        let run = node(r#"<a:r><a:rPr b=""/></a:r>"#);
        let master = node(r#"<p:txBody><a:lstStyle><a:lvl1pPr><a:defRPr b="1"/></a:lvl1pPr></a:lstStyle></p:txBody>"#);
        let scope = TextScope {
            master_body: Some(&master),
            ..Default::default()
        };
        assert_eq!(cascade_attr(&run, &scope, "b", Some("1")), Some(""));
    }

    #[test]
    fn test_cascade_child() {
        let run = node(r#"<a:r><a:rPr lang="en-US"/></a:r>"#);
        let body = node(r#"<p:txBody><a:lstStyle><a:lvl1pPr><a:defRPr><a:solidFill><a:srgbClr val="00FF00"/></a:solidFill></a:defRPr></a:lvl1pPr></a:lstStyle></p:txBody>"#);
        let scope = TextScope {
            body: Some(&body),
            ..Default::default()
        };
        let fill = cascade_child(&run, &scope, "a:solidFill").unwrap();
        assert_eq!(fill.attr_at(&["a:srgbClr"], "val"), Some("00FF00"));
    }
}
