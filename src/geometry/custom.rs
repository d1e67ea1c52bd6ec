//! Custom geometry (`a:custGeom`).
//!
//! Each `a:path` carries its own coordinate space (`w`, `h`); points are
//! rescaled into the shape box as `raw / extent * box`. A path without an
//! extent is taken to be in EMUs.

use super::{wrap_svg, DrawStyle};
use crate::error::{Error, Result};
use crate::session::RenderSession;
use crate::units::{emu_value_to_px, fmt_num, parse_number, ANGLE_PER_DEGREE};
use crate::xml::XmlNode;

/// Maps path-space coordinates to pixels.
struct PathSpace {
    scale_x: f64,
    scale_y: f64,
}

impl PathSpace {
    fn new(path: &XmlNode, style: &DrawStyle) -> Result<Self> {
        let extent = |key: &str| parse_number(path.attr(key)).map(|v| v.filter(|v| *v > 0.0));
        let axis = |ext: Option<f64>, size: f64| match ext {
            Some(ext) => size / ext,
            None => emu_value_to_px(1.0),
        };
        Ok(Self {
            scale_x: axis(extent("w")?, style.width),
            scale_y: axis(extent("h")?, style.height),
        })
    }

    fn point(&self, (x, y): (f64, f64)) -> String {
        format!("{},{}", fmt_num(x * self.scale_x), fmt_num(y * self.scale_y))
    }
}

fn read_point(pt: &XmlNode) -> Result<(f64, f64)> {
    let coord = |key: &str| {
        parse_number(pt.attr(key))?.ok_or_else(|| Error::UnitConversion(format!("{} missing {}", pt.name, key)))
    };
    Ok((coord("x")?, coord("y")?))
}

fn points(cmd: &XmlNode, count: usize) -> Result<Vec<(f64, f64)>> {
    let pts = cmd
        .children_named("a:pt")
        .map(read_point)
        .collect::<Result<Vec<_>>>()?;
    if pts.len() < count {
        return Err(Error::XmlParse(format!(
            "malformed path: {} needs {} points, found {}",
            cmd.name,
            count,
            pts.len()
        )));
    }
    Ok(pts)
}

/// Translate one `a:path` into SVG path data.
fn path_data(path: &XmlNode, space: &PathSpace) -> Result<String> {
    let mut commands = Vec::new();
    let mut current = (0.0, 0.0);
    let mut start = (0.0, 0.0);

    for cmd in &path.children {
        match cmd.name.as_str() {
            "a:moveTo" => {
                let pt = points(cmd, 1)?[0];
                commands.push(format!("M{}", space.point(pt)));
                current = pt;
                start = pt;
            }
            "a:lnTo" => {
                let pt = points(cmd, 1)?[0];
                commands.push(format!("L{}", space.point(pt)));
                current = pt;
            }
            "a:cubicBezTo" => {
                let pts = points(cmd, 3)?;
                let joined: Vec<String> = pts.iter().take(3).map(|p| space.point(*p)).collect();
                commands.push(format!("C{}", joined.join(" ")));
                current = pts[2];
            }
            "a:quadBezTo" => {
                let pts = points(cmd, 2)?;
                let joined: Vec<String> = pts.iter().take(2).map(|p| space.point(*p)).collect();
                commands.push(format!("Q{}", joined.join(" ")));
                current = pts[1];
            }
            "a:arcTo" => {
                let (svg, end) = arc(cmd, current, space)?;
                commands.push(svg);
                current = end;
            }
            "a:close" => {
                commands.push("Z".to_string());
                current = start;
            }
            other => return Err(Error::UnknownPathCommand(other.to_string())),
        }
    }

    Ok(commands.join(" "))
}

/// `a:arcTo`: the current point lies on the ellipse at `stAng`; the arc
/// sweeps `swAng` from there.
fn arc(cmd: &XmlNode, current: (f64, f64), space: &PathSpace) -> Result<(String, (f64, f64))> {
    let num = |key: &str| Ok::<f64, Error>(parse_number(cmd.attr(key))?.unwrap_or(0.0));
    let (wr, hr) = (num("wR")?, num("hR")?);
    let start = (num("stAng")? / ANGLE_PER_DEGREE).to_radians();
    let sweep_deg = num("swAng")? / ANGLE_PER_DEGREE;
    let end = start + sweep_deg.to_radians();

    let center = (current.0 - wr * start.cos(), current.1 - hr * start.sin());
    let target = (center.0 + wr * end.cos(), center.1 + hr * end.sin());

    let svg = format!(
        "A{},{} 0 {} {} {}",
        fmt_num(wr * space.scale_x),
        fmt_num(hr * space.scale_y),
        u8::from(sweep_deg.abs() > 180.0),
        u8::from(sweep_deg > 0.0),
        space.point(target)
    );
    Ok((svg, target))
}

/// Render a custom geometry into a drawing `<svg>`.
pub fn render_custom(geom: &XmlNode, style: &DrawStyle, session: &RenderSession) -> Result<String> {
    let mut outline = String::new();
    for path in geom
        .child("a:pathLst")
        .into_iter()
        .flat_map(|list| list.children_named("a:path"))
    {
        let space = PathSpace::new(path, style)?;
        let d = path_data(path, &space)?;
        let fill = if path.attr("fill") == Some("none") {
            "none"
        } else {
            style.fill.value.as_str()
        };
        let stroke = if path.attr("stroke") == Some("0") {
            format!(
                r#"stroke="none" stroke-width="{}" stroke-dasharray="{}""#,
                style.line.width(),
                style.line.dash_array
            )
        } else {
            style.stroke_attributes()
        };
        outline.push_str(&format!(r#"<path d="{}" fill="{}" {} />"#, d, fill, stroke));
    }

    Ok(wrap_svg(style, "", &outline, session))
}
