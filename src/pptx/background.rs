//! Slide background.

use crate::style::fill::background_ref;
use crate::style::{Fill, Theme};
use crate::xml::XmlNode;

/// Background used when no part defines one.
pub const DEFAULT_BACKGROUND: &str = "#fff";

/// Background CSS value of a slide: the first of slide, layout and master
/// that defines a visible `p:bg`.
pub fn slide_background(parts: [&XmlNode; 3], theme: &Theme) -> String {
    parts
        .iter()
        .find_map(|root| part_background(root, theme))
        .map_or_else(|| DEFAULT_BACKGROUND.to_string(), |fill| fill.to_css())
}

fn part_background(root: &XmlNode, theme: &Theme) -> Option<Fill> {
    let bg = root.find(&["p:cSld", "p:bg"])?;
    let fill = match (bg.child("p:bgPr"), bg.child("p:bgRef")) {
        (Some(props), _) => Fill::find(props, theme, None),
        (None, Some(reference)) => background_ref(reference, theme),
        (None, None) => None,
    };
    fill.filter(|f| *f != Fill::None)
}
