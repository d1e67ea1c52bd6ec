//! Text alignment classes.

use crate::xml::XmlNode;

/// Placeholder types that take the title text style.
pub const TITLE_TYPES: [&str; 3] = ["title", "ctrTitle", "subTitle"];

/// Whether a placeholder type is title-class.
pub fn is_title_type(ph_type: Option<&str>) -> bool {
    ph_type.is_some_and(|t| TITLE_TYPES.contains(&t))
}

/// Vertical alignment class from `p:txBody/a:bodyPr@anchor`, looked up on
/// the shape, then its layout and master placeholders.
pub fn vertical_align(layers: [Option<&XmlNode>; 3]) -> &'static str {
    let anchor = layers
        .iter()
        .flatten()
        .find_map(|shape| shape.attr_at(&["p:txBody", "a:bodyPr"], "anchor"));
    match anchor {
        Some("t") => "v-up",
        Some("b") => "v-down",
        _ => "v-mid",
    }
}

/// Horizontal alignment class for a paragraph.
///
/// `bodies` are the shape's own text body followed by the layout and master
/// placeholder text bodies; `text_styles` is the master's `p:txStyles`.
pub fn horizontal_align(
    paragraph: &XmlNode,
    bodies: [Option<&XmlNode>; 3],
    text_styles: Option<&XmlNode>,
    ph_type: Option<&str>,
) -> &'static str {
    let algn = paragraph
        .attr_at(&["a:pPr"], "algn")
        .or_else(|| {
            bodies
                .iter()
                .flatten()
                .find_map(|body| body.attr_at(&["a:lstStyle", "a:lvl1pPr"], "algn"))
        })
        .or_else(|| {
            let styles = text_styles?;
            let style = if is_title_type(ph_type) {
                "p:titleStyle"
            } else {
                "p:otherStyle"
            };
            styles.attr_at(&[style, "a:lvl1pPr"], "algn")
        });

    match algn {
        Some("ctr") => "h-mid",
        Some("r") => "h-right",
        Some(_) => "h-left",
        None if is_title_type(ph_type) => "h-mid",
        None if ph_type == Some("sldNum") => "h-right",
        None => "h-left",
    }
}
