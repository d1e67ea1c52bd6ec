//! Transform resolution (`a:xfrm`).
//!
//! Offset, extent, rotation and each flip are taken from the first of the
//! shape, its layout placeholder and its master placeholder that defines
//! them.

use crate::units::{emu_to_px, fmt_num, parse_number, ANGLE_PER_DEGREE};
use crate::xml::XmlNode;
use log::warn;

/// A resolved transform in pixels and degrees.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Xfrm {
    /// `(left, top)` in pixels
    pub position: Option<(f64, f64)>,
    /// `(width, height)` in pixels
    pub size: Option<(f64, f64)>,
    /// Rotation in degrees, when any of rotation/flip is set
    pub rotation: Option<f64>,
    pub flip_h: bool,
    pub flip_v: bool,
}

impl Xfrm {
    /// Resolve from up to three `a:xfrm` elements, most specific first.
    pub fn resolve(layers: [Option<&XmlNode>; 3]) -> Self {
        let first_child = |name: &str| layers.iter().flatten().find_map(|x| x.child(name));
        let first_attr = |key: &str| {
            layers
                .iter()
                .flatten()
                .find_map(|x| x.attr(key).filter(|v| !v.is_empty()))
        };

        let position = first_child("a:off").and_then(|off| pair(off, "x", "y"));
        let size = first_child("a:ext").and_then(|ext| pair(ext, "cx", "cy"));

        let rot = first_attr("rot");
        let flip_h = first_attr("flipH");
        let flip_v = first_attr("flipV");
        let rotation = if rot.is_none() && flip_h.is_none() && flip_v.is_none() {
            None
        } else {
            let deg = parse_number(rot).ok().flatten().unwrap_or(0.0) / ANGLE_PER_DEGREE;
            Some(deg)
        };

        Self {
            position,
            size,
            rotation,
            flip_h: flip_h.is_some_and(is_true),
            flip_v: flip_v.is_some_and(is_true),
        }
    }

    /// Resolve from a single element.
    pub fn from_node(xfrm: Option<&XmlNode>) -> Self {
        Self::resolve([xfrm, None, None])
    }

    /// Width in pixels (0 when unknown).
    pub fn width(&self) -> f64 {
        self.size.map_or(0.0, |(w, _)| w)
    }

    /// Height in pixels (0 when unknown).
    pub fn height(&self) -> f64 {
        self.size.map_or(0.0, |(_, h)| h)
    }

    /// Inline CSS for position, size and rotation/flip.
    pub fn css(&self) -> String {
        let mut parts = Vec::new();
        if let Some((left, top)) = self.position {
            parts.push(format!("top: {}px; left: {}px;", fmt_num(top), fmt_num(left)));
        }
        if let Some((w, h)) = self.size {
            parts.push(format!("width: {}px; height: {}px;", fmt_num(w), fmt_num(h)));
        }
        if let Some(deg) = self.rotation {
            parts.push(format!(
                "transform: rotate({}deg) scale({}, {});",
                fmt_num(deg),
                if self.flip_h { -1 } else { 1 },
                if self.flip_v { -1 } else { 1 }
            ));
        }
        parts.join(" ")
    }
}

fn is_true(v: &str) -> bool {
    v == "1" || v == "true"
}

fn pair(node: &XmlNode, a: &str, b: &str) -> Option<(f64, f64)> {
    match (emu_to_px(node.attr(a)), emu_to_px(node.attr(b))) {
        (Ok(x), Ok(y)) => Some((x, y)),
        (Err(e), _) | (_, Err(e)) => {
            warn!("ignoring {}: {}", node.name, e);
            None
        }
    }
}

/// Position of a group: its offset minus its child offset, with its own extent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupFrame {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    /// Child-space scale factors (`ext / chExt`); computed, not applied
    pub scale: (f64, f64),
}

impl GroupFrame {
    /// Resolve from a group's `a:xfrm`. Unreadable values count as 0.
    pub fn from_node(xfrm: Option<&XmlNode>) -> Self {
        let px = |path: &str, key: &str| {
            xfrm.and_then(|x| x.child(path))
                .map(|n| emu_to_px(n.attr(key)).unwrap_or(0.0))
                .unwrap_or(0.0)
        };
        let (x, y) = (px("a:off", "x"), px("a:off", "y"));
        let (chx, chy) = (px("a:chOff", "x"), px("a:chOff", "y"));
        let (cx, cy) = (px("a:ext", "cx"), px("a:ext", "cy"));
        let (chcx, chcy) = (px("a:chExt", "cx"), px("a:chExt", "cy"));
        let ratio = |ext: f64, ch: f64| if ch > 0.0 { ext / ch } else { 1.0 };

        Self {
            left: x - chx,
            top: y - chy,
            width: cx,
            height: cy,
            scale: (ratio(cx, chcx), ratio(cy, chcy)),
        }
    }

    /// Inline CSS for the group container.
    pub fn css(&self) -> String {
        format!(
            "top: {}px; left: {}px; width: {}px; height: {}px;",
            fmt_num(self.top),
            fmt_num(self.left),
            fmt_num(self.width),
            fmt_num(self.height)
        )
    }
}
