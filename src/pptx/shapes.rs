//! Shape tree rendering.
//!
//! Every node of a `p:spTree` becomes an absolutely positioned `div`:
//! groups nest their children, shapes carry an SVG drawing plus their text,
//! pictures carry an `img` (or an SVG clip when the picture has a non-rect
//! outline).

use super::context::RenderContext;
use super::image::load_blip_fill;
use super::link::Link;
use super::node::{ShapeKind, ShapeNode};
use super::text::{render_text_body, TextBody};
use crate::error::Result;
use crate::geometry::{render_custom, render_preset, DrawStyle, PresetKind};
use crate::render::html::escape_attr;
use crate::style::align::vertical_align;
use crate::style::fill::fill_ref;
use crate::style::line::shape_line;
use crate::style::{find_color, Fill, GroupFrame, LineStyle, Paint, Theme, Xfrm};
use crate::units::{emu_to_px, fmt_num};
use crate::xml::XmlNode;
use log::{debug, warn};

/// Text color when the shape's style names none.
const DEFAULT_FONT_COLOR: &str = "#000";

/// Render every child of a shape tree (or group) in document order.
pub fn render_tree(tree: &XmlNode, ctx: &RenderContext<'_>) -> Result<String> {
    let mut out = String::new();
    for child in &tree.children {
        out.push_str(&render_node(child, ctx)?);
    }
    Ok(out)
}

/// Render one shape tree node.
pub fn render_node(node: &XmlNode, ctx: &RenderContext<'_>) -> Result<String> {
    let shape = ShapeNode::new(node);
    match shape.kind {
        ShapeKind::Group => render_group(&shape, ctx),
        ShapeKind::Shape | ShapeKind::Connector => render_shape(&shape, ctx),
        ShapeKind::Picture => render_picture(&shape, ctx),
        ShapeKind::Unsupported => {
            match node.name.as_str() {
                "p:nvGrpSpPr" | "p:grpSpPr" | "p:extLst" => {}
                other => debug!("skipping {}", other),
            }
            Ok(String::new())
        }
    }
}

fn render_group(shape: &ShapeNode<'_>, ctx: &RenderContext<'_>) -> Result<String> {
    let frame = GroupFrame::from_node(shape.xfrm());
    let children = render_tree(shape.node, ctx)?;
    Ok(format!(
        r#"<div class="block group" _id="{}" _name="{}" style="{}">{}</div>"#,
        escape_attr(shape.id),
        escape_attr(shape.name),
        frame.css(),
        children
    ))
}

/// Layout and master placeholders matching a shape.
fn inherited<'a>(shape: &ShapeNode<'_>, ctx: &RenderContext<'a>) -> (Option<&'a XmlNode>, Option<&'a XmlNode>) {
    if shape.ph_type.is_none() && shape.ph_idx.is_none() {
        return (None, None);
    }
    let layout = ctx.part.layout.and_then(|index| index.lookup(shape.ph_type, shape.ph_idx));
    let master = ctx.part.master.and_then(|index| index.lookup(shape.ph_type, shape.ph_idx));
    (layout, master)
}

fn own_xfrm(node: Option<&XmlNode>) -> Option<&XmlNode> {
    node.and_then(|n| n.find(&["p:spPr", "a:xfrm"]))
}

fn render_shape(shape: &ShapeNode<'_>, ctx: &RenderContext<'_>) -> Result<String> {
    let node = shape.node;
    let theme = ctx.theme();
    let (layout, master) = inherited(shape, ctx);

    let ph_type = shape
        .ph_type
        .or_else(|| layout.and_then(|n| ShapeNode::new(n).ph_type))
        .or_else(|| master.and_then(|n| ShapeNode::new(n).ph_type));
    let xfrm = Xfrm::resolve([own_xfrm(Some(node)), own_xfrm(layout), own_xfrm(master)]);

    let line = shape_line(node, theme).unwrap_or_default();
    let style = DrawStyle {
        width: xfrm.width(),
        height: xfrm.height(),
        fill: shape_fill(node, theme).map_or_else(|| Paint::plain("none"), |f| f.to_svg(ctx.session)),
        stroke: line.stroke(ctx.session),
        line,
        image: None,
    };
    let drawing = geometry(shape.shape_props(), &style, ctx)?;

    let text = match node.child("p:txBody") {
        Some(body) => render_text_body(
            &TextBody {
                body,
                layout_body: layout.and_then(|n| n.child("p:txBody")),
                master_body: master.and_then(|n| n.child("p:txBody")),
                ph_type,
            },
            ctx,
        ),
        None => String::new(),
    };

    let font_color = node
        .find(&["p:style", "a:fontRef"])
        .and_then(|font_ref| find_color(font_ref, theme, None))
        .unwrap_or_else(|| DEFAULT_FONT_COLOR.to_string());
    let link = Link::from_props(shape.drawing_props(), ctx.part.rels);

    let mut class = format!("block content {}", vertical_align([Some(node), layout, master]));
    if link.is_some() {
        class.push_str(" has-link");
    }
    let onclick = link
        .map(|l| format!(r#" onclick="{}""#, escape_attr(&l.script())))
        .unwrap_or_default();

    Ok(format!(
        r#"<div class="{class}" _id="{id}" _idx="{idx}" _type="{ty}" _name="{name}" style="{xfrm};color: {color};{effects};"{onclick}>{drawing}{text}</div>"#,
        class = class,
        id = escape_attr(shape.id),
        idx = escape_attr(shape.ph_idx.unwrap_or_default()),
        ty = escape_attr(ph_type.unwrap_or_default()),
        name = escape_attr(shape.name),
        xfrm = xfrm.css(),
        color = font_color,
        effects = shadow_effects(node, theme),
        onclick = onclick,
        drawing = drawing,
        text = text
    ))
}

/// Explicit `p:spPr` fill, else the theme fill referenced from `p:style`.
fn shape_fill(node: &XmlNode, theme: &Theme) -> Option<Fill> {
    node.child("p:spPr")
        .and_then(|props| Fill::find(props, theme, None))
        .or_else(|| {
            node.find(&["p:style", "a:fillRef"])
                .and_then(|fill| fill_ref(fill, theme))
        })
}

fn geometry(props: Option<&XmlNode>, style: &DrawStyle, ctx: &RenderContext<'_>) -> Result<String> {
    let Some(props) = props else {
        return Ok(String::new());
    };
    if let Some(preset) = props.child("a:prstGeom") {
        render_preset(preset.attr("prst"), style, ctx.session)
    } else if let Some(custom) = props.child("a:custGeom") {
        render_custom(custom, style, ctx.session)
    } else {
        Ok(String::new())
    }
}

/// Outer shadows as CSS `text-shadow` declarations.
fn shadow_effects(node: &XmlNode, theme: &Theme) -> String {
    let Some(effects) = node.find(&["p:spPr", "a:effectLst"]) else {
        return String::new();
    };
    effects
        .children_named("a:outerShdw")
        .map(|shadow| {
            let px = |key: &str| match emu_to_px(shadow.attr(key)) {
                Ok(v) => v,
                Err(e) => {
                    warn!("ignoring shadow {}: {}", key, e);
                    0.0
                }
            };
            format!(
                "text-shadow:0 {}px {}px {}",
                fmt_num(px("dist")),
                fmt_num(px("blurRad")),
                find_color(shadow, theme, None).unwrap_or_default()
            )
        })
        .collect::<Vec<_>>()
        .join(";")
}

fn render_picture(shape: &ShapeNode<'_>, ctx: &RenderContext<'_>) -> Result<String> {
    let node = shape.node;
    let (layout, master) = inherited(shape, ctx);
    let xfrm = Xfrm::resolve([own_xfrm(Some(node)), own_xfrm(layout), own_xfrm(master)]);
    let src = load_blip_fill(node.child("p:blipFill"), ctx).unwrap_or_default();

    let outline = node
        .attr_at(&["p:spPr", "a:prstGeom"], "prst")
        .filter(|prst| !matches!(PresetKind::classify(prst), None | Some(PresetKind::Rect)));
    let body = match outline {
        Some(prst) if !src.is_empty() => {
            let line: LineStyle = shape_line(node, ctx.theme()).unwrap_or_default();
            let style = DrawStyle {
                width: xfrm.width(),
                height: xfrm.height(),
                fill: Paint::plain("none"),
                stroke: line.stroke(ctx.session),
                line,
                image: Some(escape_attr(&src)),
            };
            render_preset(Some(prst), &style, ctx.session)?
        }
        _ => format!(
            r#"<img src="{}" style="width:100%;height:100%;" />"#,
            escape_attr(&src)
        ),
    };

    Ok(format!(
        r#"<div class="block content" _id="{}" _name="{}" style="{}">{}</div>"#,
        escape_attr(shape.id),
        escape_attr(shape.name),
        xfrm.css(),
        body
    ))
}
