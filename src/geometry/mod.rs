//! Shape geometry to SVG.
//!
//! Preset geometries map onto a handful of primitive renderers; custom
//! geometries translate their path commands, rescaled into the shape box.

pub mod custom;
pub mod preset;

use crate::session::RenderSession;
use crate::style::{LineStyle, Paint};
use crate::units::fmt_num;

pub use custom::render_custom;
pub use preset::{render_preset, PresetKind};

/// Everything a geometry renderer needs besides the geometry itself.
#[derive(Debug, Clone, Default)]
pub struct DrawStyle {
    /// Box width in pixels
    pub width: f64,
    /// Box height in pixels
    pub height: f64,
    /// Fill paint (`none` when the shape is unfilled)
    pub fill: Paint,
    /// Resolved outline
    pub line: LineStyle,
    /// Stroke paint for the outline
    pub stroke: Paint,
    /// Image source to clip with the outline
    pub image: Option<String>,
}

impl DrawStyle {
    /// `fill` plus stroke attributes.
    fn paint_attributes(&self) -> String {
        format!(r#"fill="{}" {}"#, self.fill.value, self.stroke_attributes())
    }

    fn stroke_attributes(&self) -> String {
        self.line.svg_attributes(&self.stroke)
    }
}

/// Arrowhead marker definition.
fn marker_definition(id: &str, size: f64) -> String {
    format!(
        r#"<marker id="{id}" viewBox="0 0 10 10" refX="1" refY="5" markerWidth="{s}" markerHeight="{s}" orient="auto-start-reverse" markerUnits="strokeWidth"><path d="M 0 0 L 10 5 L 0 10 z" /></marker>"#,
        id = id,
        s = fmt_num(size)
    )
}

/// Wrap drawn outlines in the drawing `<svg>`, hoisting definitions and
/// compositing the image (if any) clipped to the outline.
fn wrap_svg(style: &DrawStyle, defs: &str, outline: &str, session: &RenderSession) -> String {
    let image = match &style.image {
        Some(src) if !outline.is_empty() => {
            let clip_id = session.unique("clip");
            format!(
                r#"<clipPath id="{id}">{outline}</clipPath><image clip-path="url(#{id})" href="{src}" width="{w}" height="{h}" preserveAspectRatio="none" />"#,
                id = clip_id,
                outline = outline,
                src = src,
                w = fmt_num(style.width),
                h = fmt_num(style.height)
            )
        }
        _ => String::new(),
    };

    format!(
        r#"<svg class="drawing" style="width:{}px;height:{}px"><defs>{}{}{}</defs>{}{}</svg>"#,
        fmt_num(if style.width > 0.0 { style.width } else { 1.0 }),
        fmt_num(if style.height > 0.0 { style.height } else { 1.0 }),
        style.fill.definition(),
        style.stroke.definition(),
        defs,
        outline,
        image
    )
}
