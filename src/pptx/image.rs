//! Embedded pictures (`a:blip`).

use super::context::RenderContext;
use crate::render::{ImageFilter, ImageSource};
use crate::style::{resolve_color, Theme};
use crate::units::parse_number;
use crate::xml::XmlNode;
use log::warn;

/// MIME type from a part name's extension.
pub fn mime_type(name: &str) -> &'static str {
    let ext = name.rsplit('.').next().unwrap_or_default().to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "emf" => "image/emf",
        "wmf" => "image/wmf",
        _ => "image/*",
    }
}

/// Filter directives on a blip, in document order.
pub fn blip_filters(blip: &XmlNode, theme: &Theme) -> Vec<ImageFilter> {
    let fraction = |node: &XmlNode, key: &str| {
        parse_number(node.attr(key)).ok().flatten().unwrap_or(0.0) / 100_000.0
    };

    blip.children
        .iter()
        .filter_map(|filter| match filter.name.as_str() {
            "a:extLst" => None,
            "a:grayscl" => Some(ImageFilter::Grayscale),
            "a:biLevel" => Some(ImageFilter::BiLevel {
                threshold: fraction(filter, "thresh"),
            }),
            "a:alphaModFix" => Some(ImageFilter::AlphaModFix {
                amount: fraction(filter, "amt"),
            }),
            "a:duotone" => {
                let mut colors = filter
                    .children
                    .iter()
                    .filter_map(|c| resolve_color(c, theme, None));
                match (colors.next(), colors.next()) {
                    (Some(dark), Some(light)) => Some(ImageFilter::Duotone { dark, light }),
                    _ => {
                        warn!("duotone filter without two colors");
                        None
                    }
                }
            }
            other => {
                warn!("unsupported image filter {}", other);
                None
            }
        })
        .collect()
}

/// Image `src` for a blip fill (`p:blipFill` or `a:blipFill`).
///
/// A missing or unreadable image logs a warning and yields `None`.
pub fn load_blip_fill(blip_fill: Option<&XmlNode>, ctx: &RenderContext<'_>) -> Option<String> {
    let blip = blip_fill?.child("a:blip")?;
    let rel_id = blip.attr("r:embed")?;
    let Some(rel) = ctx.part.rels.get(rel_id) else {
        warn!("image relationship {} not found in {}", rel_id, ctx.part.rels.source);
        return None;
    };
    let name = ctx.part.rels.resolve(rel);

    let data = match ctx.part.container.read_binary(&name) {
        Ok(data) => data,
        Err(e) => {
            warn!("cannot read image {}: {}", name, e);
            return None;
        }
    };

    let filters = blip_filters(blip, ctx.theme());
    let source = ImageSource {
        name: &name,
        mime_type: mime_type(&name),
        data: &data,
        filters: &filters,
    };
    match ctx.doc.options.image_loader().load(&source) {
        Ok(src) => Some(src),
        Err(e) => {
            warn!("image loader failed for {}: {}", name, e);
            None
        }
    }
}
