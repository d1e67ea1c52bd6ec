//! Line (outline) resolution.

use super::fill::{Fill, Paint};
use super::color::find_color;
use super::Theme;
use crate::session::RenderSession;
use crate::units::{fmt_num, parse_number, EMU_PER_PT};
use crate::xml::XmlNode;

/// Width used when `w` is missing or unreadable.
const DEFAULT_WIDTH_PT: f64 = 0.1;

/// Line-end decorations drawn as arrowheads.
const ARROW_ENDS: [&str; 2] = ["triangle", "arrow"];

/// Map a `a:prstDash` keyword to a CSS border style and an SVG dash array.
pub fn dash_style(keyword: &str) -> (&'static str, &'static str) {
    match keyword {
        "solid" => ("solid", "0"),
        "dash" => ("dashed", "5"),
        "dashDot" => ("dashed", "5, 5, 1, 5"),
        "dot" => ("dotted", "1, 5"),
        "lgDash" => ("dashed", "10, 5"),
        "lgDashDotDot" => ("dashed", "10, 5, 1, 5, 1, 5"),
        "sysDash" => ("dashed", "5, 2"),
        "sysDashDot" => ("dashed", "5, 2, 1, 5"),
        "sysDashDotDot" => ("dashed", "5, 2, 1, 5, 1, 5"),
        "sysDot" => ("dotted", "2, 5"),
        _ => ("", "0"),
    }
}

/// A resolved outline.
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    /// Width in points
    pub width_pt: f64,
    /// Stroke paint; `None` when the line carries no fill
    pub fill: Option<Fill>,
    /// CSS border style (`solid`, `dashed`, `dotted`, or empty)
    pub border: &'static str,
    /// SVG `stroke-dasharray`
    pub dash_array: &'static str,
    /// Arrowhead at the start of the path
    pub head_arrow: bool,
    /// Arrowhead at the end of the path
    pub tail_arrow: bool,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            width_pt: DEFAULT_WIDTH_PT,
            fill: None,
            border: "",
            dash_array: "0",
            head_arrow: false,
            tail_arrow: false,
        }
    }
}

impl LineStyle {
    /// Resolve an `a:ln` element.
    pub fn from_node(ln: &XmlNode, theme: &Theme, placeholder: Option<&str>) -> Self {
        let width_pt = match parse_number(ln.attr("w")) {
            Ok(Some(w)) => w / EMU_PER_PT,
            _ => DEFAULT_WIDTH_PT,
        };
        let (border, dash_array) = dash_style(ln.attr_at(&["a:prstDash"], "val").unwrap_or_default());
        let is_arrow = |end: &str| {
            ln.attr_at(&[end], "type")
                .is_some_and(|t| ARROW_ENDS.contains(&t))
        };

        Self {
            width_pt,
            fill: Fill::find(ln, theme, placeholder),
            border,
            dash_array,
            head_arrow: is_arrow("a:headEnd"),
            tail_arrow: is_arrow("a:tailEnd"),
        }
    }

    /// CSS width, e.g. `1pt`.
    pub fn width(&self) -> String {
        format!("{}pt", fmt_num(self.width_pt))
    }

    /// Whether either end carries an arrowhead.
    pub fn has_arrows(&self) -> bool {
        self.head_arrow || self.tail_arrow
    }

    /// SVG stroke paint. A line without fill strokes with `none`.
    pub fn stroke(&self, session: &RenderSession) -> Paint {
        match &self.fill {
            Some(fill) => fill.to_svg(session),
            None => Paint::plain("none"),
        }
    }

    /// `stroke`, `stroke-width` and `stroke-dasharray` attributes for a paint
    /// previously obtained from [`LineStyle::stroke`].
    pub fn svg_attributes(&self, stroke: &Paint) -> String {
        format!(
            r#"stroke="{}" stroke-width="{}" stroke-dasharray="{}""#,
            stroke.value,
            self.width(),
            self.dash_array
        )
    }
}

/// Resolve a `p:style/a:lnRef` through the theme's line style list.
pub fn line_ref(style_ref: &XmlNode, theme: &Theme) -> Option<LineStyle> {
    let idx = style_ref.attr("idx")?.parse::<usize>().ok()?;
    let entry = theme.line_style(idx)?;
    let color = find_color(style_ref, theme, None);
    Some(LineStyle::from_node(entry, theme, color.as_deref()))
}

/// Outline of a shape: its own `p:spPr/a:ln`, else the theme line style
/// referenced from `p:style`, else no line.
pub fn shape_line(shape: &XmlNode, theme: &Theme) -> Option<LineStyle> {
    if let Some(ln) = shape.find(&["p:spPr", "a:ln"]) {
        return Some(LineStyle::from_node(ln, theme, None));
    }
    shape
        .find(&["p:style", "a:lnRef"])
        .and_then(|r| line_ref(r, theme))
}
