//! Preset geometry (`a:prstGeom`).

use super::{marker_definition, wrap_svg, DrawStyle};
use crate::error::{Error, Result};
use crate::session::RenderSession;
use crate::units::fmt_num;

/// Presets drawn as their bounding rectangle.
#[rustfmt::skip]
const RECT_PRESETS: &[&str] = &[
    "rect",
    "accentBorderCallout1", "accentBorderCallout2", "accentBorderCallout3", "accentCallout1",
    "accentCallout2", "accentCallout3", "actionButtonBackPrevious", "actionButtonBeginning",
    "actionButtonBlank", "actionButtonDocument", "actionButtonEnd", "actionButtonForwardNext",
    "actionButtonHelp", "actionButtonHome", "actionButtonInformation", "actionButtonMovie",
    "actionButtonReturn", "actionButtonSound", "arc", "bevel",
    "blockArc", "borderCallout1", "borderCallout2", "borderCallout3",
    "bracePair", "bracketPair", "callout1", "callout2",
    "callout3", "can", "chartPlus", "chartStar",
    "chartX", "chevron", "chord", "cloud",
    "cloudCallout", "corner", "cornerTabs", "cube",
    "decagon", "diagStripe", "diamond", "dodecagon",
    "donut", "doubleWave", "downArrowCallout", "ellipseRibbon",
    "ellipseRibbon2", "flowChartAlternateProcess", "flowChartCollate", "flowChartConnector",
    "flowChartDecision", "flowChartDelay", "flowChartDisplay", "flowChartDocument",
    "flowChartExtract", "flowChartInputOutput", "flowChartInternalStorage", "flowChartMagneticDisk",
    "flowChartMagneticDrum", "flowChartMagneticTape", "flowChartManualInput", "flowChartManualOperation",
    "flowChartMerge", "flowChartMultidocument", "flowChartOfflineStorage", "flowChartOffpageConnector",
    "flowChartOnlineStorage", "flowChartOr", "flowChartPredefinedProcess", "flowChartPreparation",
    "flowChartProcess", "flowChartPunchedCard", "flowChartPunchedTape", "flowChartSort",
    "flowChartSummingJunction", "flowChartTerminator", "folderCorner", "frame",
    "funnel", "gear6", "gear9", "halfFrame",
    "heart", "heptagon", "hexagon", "homePlate",
    "horizontalScroll", "irregularSeal1", "irregularSeal2", "leftArrow",
    "leftArrowCallout", "leftBrace", "leftBracket", "leftRightArrowCallout",
    "leftRightRibbon", "lightningBolt", "lineInv", "mathDivide",
    "mathEqual", "mathMinus", "mathMultiply", "mathNotEqual",
    "mathPlus", "moon", "nonIsoscelesTrapezoid", "noSmoking",
    "octagon", "parallelogram", "pentagon", "pie",
    "pieWedge", "plaque", "plaqueTabs", "plus",
    "quadArrowCallout", "ribbon", "ribbon2", "rightArrowCallout",
    "rightBrace", "rightBracket", "round1Rect", "round2DiagRect",
    "round2SameRect", "rtTriangle", "smileyFace", "snip1Rect",
    "snip2DiagRect", "snip2SameRect", "snipRoundRect", "squareTabs",
    "star10", "star12", "star16", "star24",
    "star32", "star4", "star5", "star6",
    "star7", "star8", "sun", "teardrop",
    "trapezoid", "upArrowCallout", "upDownArrowCallout", "verticalScroll",
    "wave", "wedgeEllipseCallout", "wedgeRectCallout", "wedgeRoundRectCallout",
];

/// Connector-like presets drawn as a straight line across the box.
const LINE_PRESETS: &[&str] = &[
    "line",
    "straightConnector1",
    "bentConnector3",
    "bentConnector4",
    "bentConnector5",
    "curvedConnector2",
    "curvedConnector3",
    "curvedConnector4",
    "curvedConnector5",
];

/// Known presets that are not drawn yet.
const UNDRAWN_PRESETS: &[&str] = &[
    "bentArrow",
    "bentUpArrow",
    "stripedRightArrow",
    "quadArrow",
    "circularArrow",
    "swooshArrow",
    "leftRightArrow",
    "leftRightUpArrow",
    "leftUpArrow",
    "leftCircularArrow",
    "notchedRightArrow",
    "curvedDownArrow",
    "curvedLeftArrow",
    "curvedRightArrow",
    "curvedUpArrow",
    "upDownArrow",
    "upArrow",
    "uturnArrow",
    "leftRightCircularArrow",
    "triangle",
];

/// Distance kept free for the arrowhead of a block arrow.
const ARROW_HEAD_ROOM: f64 = 15.0;

/// Primitive renderer for a preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetKind {
    Rect,
    Ellipse,
    RoundRect,
    /// Right-angle elbow path with optional arrowheads
    Elbow,
    /// Straight line with optional arrowheads
    Line,
    /// Block arrow drawn as a thick line pointing right
    RightArrow,
    /// Block arrow drawn as a thick line pointing down
    DownArrow,
    /// Known but not drawn
    Undrawn,
}

impl PresetKind {
    /// Classify a preset name. Unknown names yield `None`.
    pub fn classify(name: &str) -> Option<Self> {
        let kind = match name {
            "ellipse" => PresetKind::Ellipse,
            "roundRect" => PresetKind::RoundRect,
            "bentConnector2" => PresetKind::Elbow,
            "rightArrow" => PresetKind::RightArrow,
            "downArrow" => PresetKind::DownArrow,
            n if RECT_PRESETS.contains(&n) => PresetKind::Rect,
            n if LINE_PRESETS.contains(&n) => PresetKind::Line,
            n if UNDRAWN_PRESETS.contains(&n) => PresetKind::Undrawn,
            _ => return None,
        };
        Some(kind)
    }
}

/// Render a preset geometry into a drawing `<svg>`.
pub fn render_preset(prst: Option<&str>, style: &DrawStyle, session: &RenderSession) -> Result<String> {
    let name = prst.ok_or_else(|| Error::UnknownGeometry("(missing prst)".to_string()))?;
    let kind = PresetKind::classify(name).ok_or_else(|| Error::UnknownGeometry(name.to_string()))?;
    let (w, h) = (style.width, style.height);

    let mut defs = String::new();
    let marker_attrs = |defs: &mut String| {
        if !style.line.has_arrows() {
            return String::new();
        }
        let id = session.unique("marker");
        defs.push_str(&marker_definition(&id, 5.0));
        let mut attrs = String::new();
        if style.line.head_arrow {
            attrs.push_str(&format!(r#" marker-start="url(#{})""#, id));
        }
        if style.line.tail_arrow {
            attrs.push_str(&format!(r#" marker-end="url(#{})""#, id));
        }
        attrs
    };

    let outline = match kind {
        PresetKind::Rect => format!(
            r#"<rect x="0" y="0" width="{}" height="{}" {} />"#,
            fmt_num(w),
            fmt_num(h),
            style.paint_attributes()
        ),
        PresetKind::Ellipse => format!(
            r#"<ellipse cx="{cx}" cy="{cy}" rx="{cx}" ry="{cy}" {paint} />"#,
            cx = fmt_num(w / 2.0),
            cy = fmt_num(h / 2.0),
            paint = style.paint_attributes()
        ),
        PresetKind::RoundRect => format!(
            r#"<rect x="0" y="0" rx="7" ry="7" width="{}" height="{}" {} />"#,
            fmt_num(w),
            fmt_num(h),
            style.paint_attributes()
        ),
        PresetKind::Elbow => {
            let markers = marker_attrs(&mut defs);
            format!(
                r#"<path d="M {w} 0 L {w} {h} L 0 {h}" {paint}{markers} />"#,
                w = fmt_num(w),
                h = fmt_num(h),
                paint = style.paint_attributes(),
                markers = markers
            )
        }
        PresetKind::Line => {
            let markers = marker_attrs(&mut defs);
            format!(
                r#"<line x1="0" y1="0" x2="{}" y2="{}" {}{} />"#,
                fmt_num(w),
                fmt_num(h),
                style.stroke_attributes(),
                markers
            )
        }
        PresetKind::RightArrow | PresetKind::DownArrow => {
            let id = session.unique("marker");
            defs.push_str(&marker_definition(&id, 2.5));
            // the arrow body is the shape's fill when it has one
            let paint = if style.fill.value != "none" {
                &style.fill.value
            } else {
                &style.stroke.value
            };
            let (x1, y1, x2, y2, thickness) = if kind == PresetKind::RightArrow {
                (0.0, h / 2.0, w - ARROW_HEAD_ROOM, h / 2.0, h / 2.0)
            } else {
                (w / 2.0, 0.0, w / 2.0, h - ARROW_HEAD_ROOM, w / 2.0)
            };
            format!(
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" stroke-dasharray="{}" marker-end="url(#{})" />"#,
                fmt_num(x1),
                fmt_num(y1),
                fmt_num(x2),
                fmt_num(y2),
                paint,
                fmt_num(thickness),
                style.line.dash_array,
                id
            )
        }
        PresetKind::Undrawn => String::new(),
    };

    Ok(wrap_svg(style, &defs, &outline, session))
}
