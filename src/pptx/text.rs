//! Text bodies: paragraphs, bullets and styled runs.

use super::context::RenderContext;
use super::link::Link;
use crate::render::escape_html;
use crate::style::align::{horizontal_align, is_title_type};
use crate::style::{cascade_attr, cascade_child, find_color, TextScope};
use crate::units::{emu_value_to_px, fmt_num, parse_number};
use crate::xml::XmlNode;

/// Bullet indent per outline level, in EMUs.
const BULLET_INDENT_EMU: f64 = 328_600.0;

/// Fixed size for date and slide number placeholders.
const FOOTER_FONT_PT: f64 = 12.0;

/// A shape's text body with the matching layout and master text bodies.
#[derive(Debug, Clone, Copy)]
pub struct TextBody<'a> {
    /// `p:txBody`
    pub body: &'a XmlNode,
    pub layout_body: Option<&'a XmlNode>,
    pub master_body: Option<&'a XmlNode>,
    /// Effective placeholder type
    pub ph_type: Option<&'a str>,
}

impl<'a> TextBody<'a> {
    fn scope(&self) -> TextScope<'a> {
        TextScope {
            paragraph: None,
            body: Some(self.body),
            layout_body: self.layout_body,
            master_body: self.master_body,
        }
    }
}

/// Render every paragraph of a text body. Layout and master walks render no
/// text.
pub fn render_text_body(text: &TextBody<'_>, ctx: &RenderContext<'_>) -> String {
    if ctx.part.is_master {
        return String::new();
    }

    let mut out = String::new();
    for paragraph in text.body.children_named("a:p") {
        let align = horizontal_align(
            paragraph,
            [Some(text.body), text.layout_body, text.master_body],
            ctx.part.text_styles,
            text.ph_type,
        );
        out.push_str(&format!("<div class=\"text-block {}\">", align));
        out.push_str(&bullet(paragraph));

        let runs: Vec<&XmlNode> = paragraph
            .children
            .iter()
            .filter(|c| matches!(c.name.as_str(), "a:r" | "a:fld" | "a:br"))
            .collect();
        if runs.is_empty() {
            out.push_str(&span(paragraph, &text.scope(), text, ctx));
        } else {
            let scope = text.scope().with_paragraph(paragraph);
            for run in runs {
                if run.name == "a:br" {
                    out.push_str("<br/>");
                } else {
                    out.push_str(&span(run, &scope, text, ctx));
                }
            }
        }
        out.push_str("</div>");
    }
    out
}

/// Bullet span. Paragraphs without a bullet character still reserve the
/// indent.
fn bullet(paragraph: &XmlNode) -> String {
    let props = paragraph.child("a:pPr");
    let attr = |key: &str| props.and_then(|p| p.attr(key));
    let level = attr("lvl").and_then(|l| l.parse::<u32>().ok()).unwrap_or(0) as f64;
    let indent = emu_value_to_px(BULLET_INDENT_EMU);

    let Some(ch) = props.and_then(|p| p.attr_at(&["a:buChar"], "char")) else {
        return format!(
            r#"<span style="margin-left: {}px; margin-right: 0px;"></span>"#,
            fmt_num(indent * level)
        );
    };

    match props.and_then(|p| p.child("a:buFont")) {
        Some(font) => {
            let margin_left = parse_number(attr("marL"))
                .ok()
                .flatten()
                .map_or(indent, emu_value_to_px);
            let margin_right = font
                .attr("pitchFamily")
                .and_then(|p| p.parse::<f64>().ok())
                .unwrap_or(0.0);
            format!(
                r#"<span style="font-size: 20pt; font-family: {}; margin-left: {}px; margin-right: {}px">{}</span>"#,
                escape_html(font.attr("typeface").unwrap_or("inherit")),
                fmt_num(margin_left * level),
                fmt_num(margin_right),
                escape_html(ch)
            )
        }
        None => format!(
            r#"<span style="margin-left: {}px;">{}</span>"#,
            fmt_num(indent * level),
            escape_html(ch)
        ),
    }
}

/// One styled span for a run (or for a paragraph without runs).
fn span(run: &XmlNode, scope: &TextScope<'_>, text: &TextBody<'_>, ctx: &RenderContext<'_>) -> String {
    let defaults = &ctx.doc.default_text;
    let color = cascade_child(run, scope, "a:solidFill")
        .and_then(|fill| find_color(fill, ctx.theme(), None))
        .or_else(|| defaults.color.clone())
        .unwrap_or_else(|| "inherit".to_string());
    let weight = if is_on(cascade_attr(run, scope, "b", defaults.bold.as_deref())) { "bold" } else { "initial" };
    let style = if is_on(cascade_attr(run, scope, "i", defaults.italic.as_deref())) { "italic" } else { "normal" };
    let decoration = match cascade_attr(run, scope, "u", defaults.underline.as_deref()) {
        Some("sng") => "underline",
        _ => "initial",
    };
    let baseline = cascade_attr(run, scope, "baseline", None)
        .and_then(|b| b.trim().parse::<f64>().ok())
        .map_or_else(|| "baseline".to_string(), |b| format!("{}%", fmt_num(b / 1000.0)));

    let css = format!(
        "color: {};font-size: {};font-family: {};font-weight: {};font-style: {};text-decoration: {};vertical-align: {};",
        color,
        font_size(run, scope, text, ctx),
        font_family(run, text.ph_type, ctx),
        weight,
        style,
        decoration,
        baseline
    );

    let content = run_text(run);
    match Link::from_props(run.child("a:rPr"), ctx.part.rels) {
        Some(link) => format!(
            r#"<span style="{}"><a href="{}" target="{}">{}</a></span>"#,
            css,
            escape_html(&link.target),
            if link.external { "_blank" } else { "" },
            content
        ),
        None => format!(r#"<span style="{}">{}</span>"#, css, content),
    }
}

fn is_on(value: Option<&str>) -> bool {
    matches!(value, Some("1" | "true"))
}

/// Size in points: the run cascade, then the master text styles when a
/// master placeholder matched, then the document default.
fn font_size(run: &XmlNode, scope: &TextScope<'_>, text: &TextBody<'_>, ctx: &RenderContext<'_>) -> String {
    let points = |sz: Option<&str>| sz.and_then(|s| s.trim().parse::<f64>().ok()).map(|v| v / 100.0);

    points(cascade_attr(run, scope, "sz", None))
        .or_else(|| {
            text.master_body?;
            let style = match text.ph_type {
                t if is_title_type(t) => "p:titleStyle",
                Some("body") => "p:bodyStyle",
                Some("dt" | "sldNum") => return Some(FOOTER_FONT_PT),
                _ => "p:otherStyle",
            };
            points(ctx.part.text_styles?.attr_at(&[style, "a:lvl1pPr", "a:defRPr"], "sz"))
        })
        .or_else(|| points(ctx.doc.default_text.size.as_deref()))
        .map_or_else(|| "inherit".to_string(), |pt| format!("{}pt", fmt_num(pt)))
}

/// Typeface from the run, else the theme heading font for titles and body
/// font otherwise.
fn font_family(run: &XmlNode, ph_type: Option<&str>, ctx: &RenderContext<'_>) -> String {
    let theme = ctx.theme();
    let typeface = match run.attr_at(&["a:rPr", "a:latin"], "typeface") {
        Some("+mj-lt") => theme.major_font(),
        Some("+mn-lt") => theme.minor_font(),
        Some(face) => Some(face),
        None if is_title_type(ph_type) => theme.major_font(),
        None => theme.minor_font(),
    };
    escape_html(typeface.unwrap_or("inherit"))
}

/// Escaped run text; an empty run renders a non-breaking space.
fn run_text(run: &XmlNode) -> String {
    let raw = run.child("a:t").map(XmlNode::text).unwrap_or_default();
    if raw.is_empty() {
        return "&nbsp;".to_string();
    }
    preserve_spaces(&escape_html(raw))
}

/// Leading, trailing and repeated spaces survive HTML whitespace collapsing.
fn preserve_spaces(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    for (i, &c) in chars.iter().enumerate() {
        let hard = c == ' ' && (i == 0 || i + 1 == chars.len() || chars[i - 1] == ' ');
        if hard {
            out.push_str("&nbsp;");
        } else {
            out.push(c);
        }
    }
    out
}
