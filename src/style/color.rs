//! Color resolution.
//!
//! A DrawingML color element (`a:srgbClr`, `a:schemeClr`, `a:sysClr`,
//! `a:prstClr`) resolves to a base color, then its child transforms are
//! applied in document order. Unfiltered colors come out as `#rrggbb`,
//! filtered ones as `#rrggbbaa`.

use super::Theme;
use crate::units::parse_number;
use crate::xml::XmlNode;
use log::warn;

/// Color element names, in lookup priority order.
const COLOR_ELEMENTS: [&str; 4] = ["a:prstClr", "a:srgbClr", "a:schemeClr", "a:sysClr"];

/// Named preset colors (`a:prstClr`).
const PRESET_COLORS: &[(&str, &str)] = &[
    ("white", "ffffff"),
    ("black", "000000"),
    ("red", "ff0000"),
    ("green", "008000"),
    ("lime", "00ff00"),
    ("blue", "0000ff"),
    ("yellow", "ffff00"),
    ("cyan", "00ffff"),
    ("magenta", "ff00ff"),
    ("gray", "808080"),
    ("grey", "808080"),
    ("dkGray", "a9a9a9"),
    ("ltGray", "d3d3d3"),
    ("orange", "ffa500"),
    ("purple", "800080"),
    ("navy", "000080"),
    ("maroon", "800000"),
    ("olive", "808000"),
    ("teal", "008080"),
    ("silver", "c0c0c0"),
];

/// An RGBA color with channels in 0..=255 and alpha in 0..=1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    /// Opaque color from channel values.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Parse `fff`, `#ffffff` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        let channel = |s: &str| u8::from_str_radix(s, 16).ok().map(f64::from);
        match hex.len() {
            3 => {
                let mut it = hex.chars().map(|c| c.to_digit(16).map(|d| f64::from(d * 17)));
                Some(Self::rgb(it.next()??, it.next()??, it.next()??))
            }
            6 => Some(Self::rgb(
                channel(hex.get(0..2)?)?,
                channel(hex.get(2..4)?)?,
                channel(hex.get(4..6)?)?,
            )),
            8 => Some(Self {
                a: channel(hex.get(6..8)?)? / 255.0,
                ..Self::from_hex(hex.get(0..6)?)?
            }),
            _ => None,
        }
    }

    fn byte(v: f64) -> u8 {
        v.round().clamp(0.0, 255.0) as u8
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            Self::byte(self.r),
            Self::byte(self.g),
            Self::byte(self.b)
        )
    }

    /// Lowercase `#rrggbbaa`.
    pub fn to_hex8(&self) -> String {
        format!("{}{:02x}", self.to_hex(), Self::byte(self.a * 255.0))
    }

    /// Linear mix toward `other` by `amount` percent.
    pub fn mix(&self, other: Rgba, amount: f64) -> Rgba {
        let p = amount / 100.0;
        Rgba {
            r: self.r + (other.r - self.r) * p,
            g: self.g + (other.g - self.g) * p,
            b: self.b + (other.b - self.b) * p,
            a: self.a + (other.a - self.a) * p,
        }
    }

    /// Hue (degrees), saturation and lightness (fractions).
    pub fn to_hsl(&self) -> (f64, f64, f64) {
        let (r, g, b) = (self.r / 255.0, self.g / 255.0, self.b / 255.0);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        if (max - min).abs() < f64::EPSILON {
            return (0.0, 0.0, l);
        }
        let d = max - min;
        let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (h * 60.0, s, l)
    }

    /// Build from HSL, keeping `alpha`.
    pub fn from_hsl(h: f64, s: f64, l: f64, alpha: f64) -> Rgba {
        let s = s.clamp(0.0, 1.0);
        let l = l.clamp(0.0, 1.0);
        if s == 0.0 {
            let v = l * 255.0;
            return Rgba { r: v, g: v, b: v, a: alpha };
        }
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        let h = h / 360.0;
        let hue = |mut t: f64| {
            if t < 0.0 {
                t += 1.0;
            }
            if t > 1.0 {
                t -= 1.0;
            }
            if t < 1.0 / 6.0 {
                p + (q - p) * 6.0 * t
            } else if t < 0.5 {
                q
            } else if t < 2.0 / 3.0 {
                p + (q - p) * (2.0 / 3.0 - t) * 6.0
            } else {
                p
            }
        };
        Rgba {
            r: hue(h + 1.0 / 3.0) * 255.0,
            g: hue(h) * 255.0,
            b: hue(h - 1.0 / 3.0) * 255.0,
            a: alpha,
        }
    }
}

const BLACK: Rgba = Rgba { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
const WHITE: Rgba = Rgba { r: 255.0, g: 255.0, b: 255.0, a: 1.0 };

/// A color transform child such as `a:lumMod`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorFilter {
    Alpha(f64),
    Shade(f64),
    Tint(f64),
    SatMod(f64),
    SatOff(f64),
    LumMod(f64),
    LumOff(f64),
}

impl ColorFilter {
    /// Read a transform element. Unknown kinds and bad values yield `None`
    /// with a warning.
    pub fn from_node(node: &XmlNode) -> Option<Self> {
        let make: fn(f64) -> ColorFilter = match node.name.as_str() {
            "a:alpha" => ColorFilter::Alpha,
            "a:shade" => ColorFilter::Shade,
            "a:tint" => ColorFilter::Tint,
            "a:satMod" => ColorFilter::SatMod,
            "a:satOff" => ColorFilter::SatOff,
            "a:lumMod" => ColorFilter::LumMod,
            "a:lumOff" => ColorFilter::LumOff,
            other => {
                warn!("ignoring unsupported color filter {}", other);
                return None;
            }
        };
        match parse_number(node.attr("val")) {
            Ok(Some(val)) => Some(make(val)),
            _ => {
                warn!("ignoring {} with invalid value {:?}", node.name, node.attr("val"));
                None
            }
        }
    }

    /// Apply this transform to a color.
    pub fn apply(self, color: Rgba) -> Rgba {
        match self {
            ColorFilter::Alpha(val) => Rgba {
                a: (val / 100_000.0).clamp(0.0, 1.0),
                ..color
            },
            ColorFilter::Shade(val) => color.mix(BLACK, mix_amount(val)),
            ColorFilter::Tint(val) => color.mix(WHITE, mix_amount(val)),
            ColorFilter::SatMod(val) => adjust_hsl(color, |(h, s, l)| (h, s * val / 100_000.0, l)),
            ColorFilter::SatOff(val) => adjust_hsl(color, |(h, s, l)| (h, s + val / 100_000.0, l)),
            ColorFilter::LumMod(val) => adjust_hsl(color, |(h, s, l)| (h, s, l * val / 100_000.0)),
            ColorFilter::LumOff(val) => adjust_hsl(color, |(h, s, l)| (h, s, l + val / 100_000.0)),
        }
    }
}

/// Blend percentage for shade/tint. Matches PowerPoint's rendering rather
/// than the formula in the file format reference.
fn mix_amount(val: f64) -> f64 {
    (100.0 - val / 1000.0) / 2.0
}

fn adjust_hsl(color: Rgba, f: impl Fn((f64, f64, f64)) -> (f64, f64, f64)) -> Rgba {
    let (h, s, l) = f(color.to_hsl());
    Rgba::from_hsl(h, s, l, color.a)
}

/// Apply transforms left to right.
pub fn apply_filters(base: Rgba, filters: &[ColorFilter]) -> Rgba {
    filters.iter().fold(base, |color, filter| filter.apply(color))
}

/// Look up a named preset color.
pub fn preset_color(name: &str) -> Option<Rgba> {
    PRESET_COLORS
        .iter()
        .find(|(key, _)| *key == name)
        .and_then(|(_, hex)| Rgba::from_hex(hex))
}

fn scheme_alias(name: &str) -> &str {
    match name {
        "tx1" => "dk1",
        "tx2" => "dk2",
        "bg1" => "lt1",
        "bg2" => "lt2",
        other => other,
    }
}

/// Resolve a color element (e.g. `a:schemeClr`) to a CSS color.
///
/// `placeholder` is the color substituted for `phClr`, supplied when the
/// element comes from a theme style list entry.
pub fn resolve_color(node: &XmlNode, theme: &Theme, placeholder: Option<&str>) -> Option<String> {
    let (color, filtered) = resolve_rgba(node, theme, placeholder)?;
    Some(if filtered { color.to_hex8() } else { color.to_hex() })
}

/// Resolve the first color child of `parent` (e.g. of an `a:solidFill`).
pub fn find_color(parent: &XmlNode, theme: &Theme, placeholder: Option<&str>) -> Option<String> {
    COLOR_ELEMENTS
        .iter()
        .find_map(|name| parent.child(name))
        .and_then(|node| resolve_color(node, theme, placeholder))
}

fn resolve_rgba(node: &XmlNode, theme: &Theme, placeholder: Option<&str>) -> Option<(Rgba, bool)> {
    let (base, already_filtered) = match node.name.as_str() {
        "a:srgbClr" => (Rgba::from_hex(node.attr("val")?)?, false),
        "a:sysClr" => {
            let last = node.attr("lastClr").or_else(|| match node.attr("val") {
                Some("windowText") => Some("000000"),
                Some("window") => Some("ffffff"),
                _ => None,
            })?;
            (Rgba::from_hex(last)?, false)
        }
        "a:prstClr" => {
            let name = node.attr("val")?;
            match preset_color(name) {
                Some(color) => (color, false),
                None => {
                    warn!("unknown preset color {}", name);
                    return None;
                }
            }
        }
        "a:schemeClr" => {
            let name = node.attr("val")?;
            match (name, placeholder) {
                ("phClr", Some(ph)) => {
                    let color = Rgba::from_hex(ph)?;
                    (color, ph.trim_start_matches('#').len() == 8)
                }
                _ => {
                    let slot = scheme_alias(name);
                    let definition = match theme.scheme_color(slot) {
                        Some(def) => def,
                        None => {
                            warn!("theme has no color for scheme slot {}", slot);
                            return None;
                        }
                    };
                    let inner = COLOR_ELEMENTS.iter().find_map(|n| definition.child(n))?;
                    resolve_rgba(inner, theme, None)?
                }
            }
        }
        _ => return None,
    };

    let filters: Vec<ColorFilter> = node.children.iter().filter_map(ColorFilter::from_node).collect();
    let color = apply_filters(base, &filters);
    Some((color, already_filtered || !filters.is_empty()))
}
