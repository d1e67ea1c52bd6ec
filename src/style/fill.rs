//! Fill resolution: `a:noFill`, `a:solidFill` and `a:gradFill`.

use super::color::{find_color, resolve_color};
use super::Theme;
use crate::session::RenderSession;
use crate::units::{fmt_num, parse_number};
use crate::xml::XmlNode;
use log::warn;

/// Shape of a gradient.
#[derive(Debug, Clone, PartialEq)]
pub enum GradientKind {
    /// Linear gradient with a CSS angle in degrees
    Linear { angle: f64 },
    /// Path (radial) gradient
    Radial,
}

/// One gradient stop.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    /// Position in [0, 1]
    pub position: f64,
    /// Resolved CSS color
    pub color: String,
}

/// A resolved gradient.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    pub kind: GradientKind,
    pub stops: Vec<GradientStop>,
}

/// A resolved fill.
#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    /// Explicit `a:noFill`
    None,
    /// Solid color
    Solid(String),
    /// Linear or radial gradient
    Gradient(Gradient),
}

/// A paint value ready for markup, plus a definition to hoist into `<defs>`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paint {
    /// Attribute value: a color, `none` or `url(#id)`
    pub value: String,
    /// Definition fragment referenced by `value`, if any
    pub definition: Option<String>,
}

impl Paint {
    /// A plain paint value with no definition.
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            definition: None,
        }
    }

    /// Definition fragment, or an empty string.
    pub fn definition(&self) -> &str {
        self.definition.as_deref().unwrap_or_default()
    }
}

impl Fill {
    /// Resolve a fill element itself (`a:solidFill`, `a:gradFill`, `a:noFill`).
    ///
    /// A solid fill whose color cannot be resolved is treated as absent.
    pub fn from_node(node: &XmlNode, theme: &Theme, placeholder: Option<&str>) -> Option<Fill> {
        match node.name.as_str() {
            "a:noFill" => Some(Fill::None),
            "a:solidFill" => find_color(node, theme, placeholder).map(Fill::Solid),
            "a:gradFill" => Some(Fill::Gradient(parse_gradient(node, theme, placeholder))),
            _ => None,
        }
    }

    /// Resolve the first fill child of a properties element (`p:spPr`,
    /// `p:bgPr`, `a:ln`, `a:defRPr`, ...). Image and pattern fills are not
    /// resolved here.
    pub fn find(parent: &XmlNode, theme: &Theme, placeholder: Option<&str>) -> Option<Fill> {
        parent
            .children
            .iter()
            .filter(|c| matches!(c.name.as_str(), "a:noFill" | "a:solidFill" | "a:gradFill"))
            .find_map(|c| Fill::from_node(c, theme, placeholder))
    }

    /// CSS value (`background`, `color`).
    pub fn to_css(&self) -> String {
        match self {
            Fill::None => "none".to_string(),
            Fill::Solid(color) => color.clone(),
            Fill::Gradient(gradient) => gradient.to_css(),
        }
    }

    /// SVG paint; gradients get a session-unique definition.
    pub fn to_svg(&self, session: &RenderSession) -> Paint {
        match self {
            Fill::None => Paint::plain("none"),
            Fill::Solid(color) => Paint::plain(color.clone()),
            Fill::Gradient(gradient) => {
                let id = session.unique("grad");
                Paint {
                    value: format!("url(#{})", id),
                    definition: Some(gradient.to_svg(&id)),
                }
            }
        }
    }
}

impl Gradient {
    /// CSS gradient function.
    pub fn to_css(&self) -> String {
        let stops = self
            .stops
            .iter()
            .map(|s| format!("{} {}%", s.color, fmt_num(s.position * 100.0)))
            .collect::<Vec<_>>()
            .join(",");
        match self.kind {
            GradientKind::Linear { angle } => format!("linear-gradient({}deg,{})", fmt_num(angle), stops),
            GradientKind::Radial => format!("radial-gradient(circle,{})", stops),
        }
    }

    /// SVG gradient definition with the given id.
    pub fn to_svg(&self, id: &str) -> String {
        let stops: String = self
            .stops
            .iter()
            .map(|s| {
                format!(
                    r#"<stop offset="{}%" stop-color="{}" />"#,
                    fmt_num(s.position * 100.0),
                    s.color
                )
            })
            .collect();
        match self.kind {
            GradientKind::Linear { angle } => {
                let (x1, y1, x2, y2) = angle_to_points(angle);
                format!(
                    r#"<linearGradient id="{}" x1="{}" y1="{}" x2="{}" y2="{}">{}</linearGradient>"#,
                    id,
                    fmt_num(x1),
                    fmt_num(y1),
                    fmt_num(x2),
                    fmt_num(y2),
                    stops
                )
            }
            GradientKind::Radial => format!(
                r#"<radialGradient id="{}" cx="50%" cy="50%" r="50%">{}</radialGradient>"#,
                id, stops
            ),
        }
    }
}

/// Unit-box endpoints for a CSS gradient angle (0deg points up, 90deg right).
fn angle_to_points(angle: f64) -> (f64, f64, f64, f64) {
    let rad = angle.to_radians();
    let (dx, dy) = (rad.sin() * 0.5, -rad.cos() * 0.5);
    (0.5 - dx, 0.5 - dy, 0.5 + dx, 0.5 + dy)
}

fn parse_gradient(node: &XmlNode, theme: &Theme, placeholder: Option<&str>) -> Gradient {
    let stops = node
        .child("a:gsLst")
        .map(|list| {
            list.children_named("a:gs")
                .filter_map(|gs| {
                    let position = match parse_number(gs.attr("pos")) {
                        Ok(pos) => pos.unwrap_or(0.0) / 100_000.0,
                        Err(e) => {
                            warn!("skipping gradient stop: {}", e);
                            return None;
                        }
                    };
                    let color = gs
                        .children
                        .iter()
                        .find_map(|c| resolve_color(c, theme, placeholder))?;
                    Some(GradientStop { position, color })
                })
                .collect()
        })
        .unwrap_or_default();

    let kind = if node.child("a:path").is_some() {
        GradientKind::Radial
    } else {
        let ang = node
            .child("a:lin")
            .and_then(|lin| parse_number(lin.attr("ang")).ok().flatten())
            .unwrap_or(0.0);
        GradientKind::Linear {
            angle: ang / 60_000.0 + 90.0,
        }
    };

    Gradient { kind, stops }
}

/// Resolve a `p:style/a:fillRef` through the theme's fill style list.
///
/// The reference's own color stands in for `phClr` in the style entry.
pub fn fill_ref(style_ref: &XmlNode, theme: &Theme) -> Option<Fill> {
    let idx = style_ref.attr("idx")?.parse::<usize>().ok()?;
    let entry = theme.fill_style(idx)?;
    let color = find_color(style_ref, theme, None);
    Fill::from_node(entry, theme, color.as_deref())
}

/// Resolve a `p:bg/p:bgRef`. Indices from 1001 address the background fill
/// style list, lower ones the regular fill style list.
pub fn background_ref(bg_ref: &XmlNode, theme: &Theme) -> Option<Fill> {
    let idx = bg_ref.attr("idx")?.parse::<usize>().ok()?;
    let entry = match idx.checked_sub(1001) {
        Some(bg_idx) => theme.background_fill_style(bg_idx)?,
        None => theme.fill_style(idx)?,
    };
    let color = find_color(bg_ref, theme, None);
    Fill::from_node(entry, theme, color.as_deref())
}
