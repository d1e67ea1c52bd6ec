//! Time node parsers (`p:par`, `p:seq` and the leaf behaviors).

use super::keyframes::{auto_reverse, reverse_keyframes};
use crate::error::Result;
use crate::model::{AnimationNode, Behavior, Condition, Keyframe, Sequence, TimeNode, TimeValue};
use crate::units::{angle_to_deg, fmt_num, parse_number};
use crate::xml::XmlNode;
use log::{debug, warn};

/// `tm` and scale attributes are in 1000ths of a percent.
const PERCENT_SCALE: f64 = 100_000.0;

/// Parse the children of a `p:tnLst` or `p:childTnLst` in document order.
pub fn parse_time_list(list: &XmlNode) -> Result<Vec<AnimationNode>> {
    let mut nodes = Vec::new();
    for child in &list.children {
        if let Some(node) = parse_node(child)? {
            nodes.push(node);
        }
    }
    Ok(nodes)
}

/// Parse one time node. Unsupported kinds yield `None`.
pub fn parse_node(node: &XmlNode) -> Result<Option<AnimationNode>> {
    let parsed = match node.name.as_str() {
        "p:par" => AnimationNode::Parallel(parse_common(node.child("p:cTn"))?),
        "p:seq" => AnimationNode::Sequence(parse_sequence(node)?),
        "p:set" => AnimationNode::Set(parse_set(node)?),
        "p:anim" => AnimationNode::Animate(parse_anim(node)?),
        "p:animEffect" => AnimationNode::AnimateEffect(parse_effect(node)?),
        "p:animRot" => AnimationNode::AnimateRotation(parse_rotation(node)?),
        "p:animScale" => AnimationNode::AnimateScale(parse_scale(node)?),
        other => {
            debug!("skipping time node {}", other);
            return Ok(None);
        }
    };
    Ok(Some(parsed))
}

/// Parse a time attribute: milliseconds or `indefinite`.
pub fn parse_time(raw: Option<&str>) -> Option<TimeValue> {
    match raw? {
        "indefinite" => Some(TimeValue::Indefinite),
        ms => match ms.trim().parse::<i64>() {
            Ok(ms) => Some(TimeValue::Millis(ms)),
            Err(_) => {
                warn!("ignoring time value {:?}", ms);
                None
            }
        },
    }
}

/// Parse a condition list (`p:stCondLst`, `p:endCondLst`, ...).
pub fn parse_conditions(list: Option<&XmlNode>) -> Vec<Condition> {
    let Some(list) = list else {
        return Vec::new();
    };
    list.children_named("p:cond")
        .map(|cond| Condition {
            event: cond.attr("evt").map(str::to_string),
            delay: parse_time(cond.attr("delay")),
            shape_id: cond
                .attr_at(&["p:tgtEl", "p:spTgt"], "spid")
                .map(str::to_string),
            time_node: cond.attr_at(&["p:tn"], "val").map(str::to_string),
            runtime_node: cond.attr_at(&["p:rtn"], "val").map(str::to_string),
        })
        .collect()
}

/// Parse the common timing (`p:cTn`) including its children.
fn parse_common(ctn: Option<&XmlNode>) -> Result<TimeNode> {
    let Some(ctn) = ctn else {
        return Ok(TimeNode::default());
    };
    let owned = |key: &str| ctn.attr(key).map(str::to_string);
    let children = match ctn.child("p:childTnLst") {
        Some(list) => parse_time_list(list)?,
        None => Vec::new(),
    };

    Ok(TimeNode {
        id: owned("id"),
        duration: parse_time(ctn.attr("dur")),
        auto_reverse: matches!(ctn.attr("autoRev"), Some("1" | "true")),
        fill: owned("fill"),
        node_type: owned("nodeType"),
        preset_class: owned("presetClass"),
        preset_id: owned("presetID"),
        start_conditions: parse_conditions(ctn.child("p:stCondLst")),
        end_conditions: parse_conditions(ctn.child("p:endCondLst")),
        children,
    })
}

fn parse_sequence(node: &XmlNode) -> Result<Sequence> {
    Ok(Sequence {
        timing: parse_common(node.child("p:cTn"))?,
        previous_conditions: parse_conditions(node.child("p:prevCondLst")),
        next_conditions: parse_conditions(node.child("p:nextCondLst")),
        concurrent: matches!(node.attr("concurrent"), Some("1" | "true")),
        next_action: node.attr("nextAc").map(str::to_string),
    })
}

/// Variant value (`p:boolVal`, `p:intVal`, `p:fltVal`, `p:strVal`).
fn variant_value(node: Option<&XmlNode>) -> Option<String> {
    let node = node?;
    ["p:boolVal", "p:intVal", "p:fltVal", "p:strVal"]
        .iter()
        .find_map(|kind| node.attr_at(&[*kind], "val"))
        .map(str::to_string)
}

/// Common behavior (`p:cBhvr`): timing, target and attribute names.
fn parse_behavior(node: &XmlNode) -> Result<Behavior> {
    let Some(bhvr) = node.child("p:cBhvr") else {
        return Ok(Behavior::default());
    };
    Ok(Behavior {
        timing: parse_common(bhvr.child("p:cTn"))?,
        shape_id: bhvr
            .attr_at(&["p:tgtEl", "p:spTgt"], "spid")
            .map(str::to_string),
        attribute_names: bhvr
            .child("p:attrNameLst")
            .map(|names| {
                names
                    .children_named("p:attrName")
                    .map(|n| n.text().to_string())
                    .collect()
            })
            .unwrap_or_default(),
        additive: bhvr.attr("additive").map(str::to_string),
        ..Default::default()
    })
}

/// Install keyframes, expanding them (and doubling the duration) when the
/// behavior auto-reverses.
fn with_keyframes(mut behavior: Behavior, keyframes: Vec<Keyframe>) -> Behavior {
    if behavior.timing.auto_reverse {
        behavior.keyframes = auto_reverse(&keyframes);
        behavior.timing.duration = behavior.timing.duration.map(TimeValue::doubled);
    } else {
        behavior.keyframes = keyframes;
    }
    behavior
}

fn parse_set(node: &XmlNode) -> Result<Behavior> {
    let mut behavior = parse_behavior(node)?;
    behavior.to_value = variant_value(node.child("p:to"));
    let end = Keyframe::at(1.0).with_value(behavior.to_value.clone());
    Ok(with_keyframes(behavior, vec![end]))
}

fn parse_anim(node: &XmlNode) -> Result<Behavior> {
    let mut behavior = parse_behavior(node)?;
    let tavs: Vec<&XmlNode> = node
        .child("p:tavLst")
        .map(|list| list.children_named("p:tav").collect())
        .unwrap_or_default();

    behavior.formula = tavs
        .first()
        .and_then(|tav| tav.attr("fmla"))
        .map(str::to_string);

    let last = tavs.len().saturating_sub(1).max(1) as f64;
    let mut keyframes = Vec::with_capacity(tavs.len());
    for (i, tav) in tavs.iter().enumerate() {
        let even = i as f64 / last;
        let offset = match parse_number(tav.attr("tm")) {
            Ok(Some(tm)) => tm / PERCENT_SCALE,
            Ok(None) => even,
            Err(e) => {
                warn!("keyframe time {:?} ignored: {}", tav.attr("tm"), e);
                even
            }
        };
        keyframes.push(Keyframe::at(offset.clamp(0.0, 1.0)).with_value(variant_value(tav.child("p:val"))));
    }
    Ok(with_keyframes(behavior, keyframes))
}

fn parse_effect(node: &XmlNode) -> Result<Behavior> {
    let mut behavior = parse_behavior(node)?;
    behavior.progress = variant_value(node.child("p:progress"));
    behavior.transition = node.attr("transition").map(str::to_string);
    behavior.filter = node.attr("filter").map(str::to_string);

    let filters = behavior.filter.as_deref().unwrap_or_default();
    let mut keyframes = effect_keyframes(filters);
    if behavior.transition.as_deref() == Some("out") {
        keyframes = reverse_keyframes(&keyframes);
    }
    Ok(with_keyframes(behavior, keyframes))
}

/// Keyframes for the first supported entry of a `;`-separated filter list.
/// Unsupported lists fall back to a fade.
fn effect_keyframes(filters: &str) -> Vec<Keyframe> {
    let fade = || vec![Keyframe::at(0.0).with_opacity(0.0), Keyframe::at(1.0).with_opacity(1.0)];
    for filter in filters.split(';').map(str::trim).filter(|f| !f.is_empty()) {
        match filter {
            "wipe(down)" | "wipe(up)" => {
                return vec![
                    Keyframe::at(0.0).with_transform("scaleY(0)"),
                    Keyframe::at(1.0).with_transform("scaleY(1)"),
                ]
            }
            "fade" => return fade(),
            _ => {}
        }
    }
    if !filters.is_empty() {
        warn!("unsupported animation filter {:?}, using fade", filters);
    }
    fade()
}

fn rotate(angle: &str) -> Result<String> {
    Ok(format!("rotate({}deg)", fmt_num(angle_to_deg(Some(angle))?)))
}

fn parse_rotation(node: &XmlNode) -> Result<Behavior> {
    let behavior = parse_behavior(node)?;
    let keyframes = match (node.attr("by"), node.attr("from"), node.attr("to")) {
        (_, Some(from), Some(to)) => vec![
            Keyframe::at(0.0).with_transform(rotate(from)?),
            Keyframe::at(1.0).with_transform(rotate(to)?),
        ],
        (Some(by), _, _) => vec![Keyframe::at(0.0), Keyframe::at(1.0).with_transform(rotate(by)?)],
        _ => Vec::new(),
    };
    Ok(with_keyframes(behavior, keyframes))
}

/// `scale(x,y)` from a point element; absent axes are 100%.
fn scale(point: &XmlNode) -> Result<String> {
    let axis = |key: &str| -> Result<f64> {
        Ok(parse_number(point.attr(key))?.unwrap_or(PERCENT_SCALE) / PERCENT_SCALE)
    };
    Ok(format!("scale({},{})", fmt_num(axis("x")?), fmt_num(axis("y")?)))
}

fn parse_scale(node: &XmlNode) -> Result<Behavior> {
    let behavior = parse_behavior(node)?;
    let keyframes = match (node.child("p:by"), node.child("p:from"), node.child("p:to")) {
        (_, Some(from), Some(to)) => vec![
            Keyframe::at(0.0).with_transform(scale(from)?),
            Keyframe::at(1.0).with_transform(scale(to)?),
        ],
        (Some(by), _, _) => vec![
            Keyframe::at(0.0).with_transform("scale(1,1)"),
            Keyframe::at(1.0).with_transform(scale(by)?),
        ],
        _ => Vec::new(),
    };
    Ok(with_keyframes(behavior, keyframes))
}
