//! Animation timeline structures.

use serde::{Deserialize, Serialize};

/// A time value from the timing tree: milliseconds or `indefinite`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeValue {
    /// A finite time in milliseconds
    Millis(i64),
    /// The `indefinite` keyword (waits for a trigger)
    Indefinite,
}

impl TimeValue {
    /// Double a finite time; `indefinite` stays indefinite.
    pub fn doubled(self) -> Self {
        match self {
            TimeValue::Millis(ms) => TimeValue::Millis(ms * 2),
            TimeValue::Indefinite => TimeValue::Indefinite,
        }
    }
}

/// A trigger condition (`p:cond`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Trigger event, e.g. `onBegin`, `onClick`, `onNext`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    /// Delay after the event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<TimeValue>,
    /// Target shape id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape_id: Option<String>,
    /// Referenced time node id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_node: Option<String>,
    /// Runtime trigger reference (e.g. `first`, `last`, `all`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_node: Option<String>,
}

/// Common timing of every time node (`p:cTn`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeNode {
    /// Time node id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Duration, doubled when auto-reverse applies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<TimeValue>,
    /// Whether the node plays backwards after playing forwards
    pub auto_reverse: bool,
    /// Fill behavior after the node ends (`hold`, `remove`, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    /// Node type (`clickEffect`, `withEffect`, `mainSeq`, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    /// Preset class (`entr`, `exit`, `emph`, `path`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset_class: Option<String>,
    /// Preset effect id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset_id: Option<String>,
    /// Conditions that start the node
    #[serde(default)]
    pub start_conditions: Vec<Condition>,
    /// Conditions that end the node
    #[serde(default)]
    pub end_conditions: Vec<Condition>,
    /// Child nodes in document order
    #[serde(default)]
    pub children: Vec<AnimationNode>,
}

/// A sequence container (`p:seq`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sequence {
    /// Timing of the sequence itself
    #[serde(flatten)]
    pub timing: TimeNode,
    /// Conditions for moving backwards
    #[serde(default)]
    pub previous_conditions: Vec<Condition>,
    /// Conditions for moving forwards
    #[serde(default)]
    pub next_conditions: Vec<Condition>,
    /// Whether next nodes may start while one is playing
    pub concurrent: bool,
    /// Action when advancing (`seek`, `none`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_action: Option<String>,
}

/// One stop on a normalized timeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Position in [0, 1]
    pub offset: f64,
    /// Raw attribute value (`anim`, `set`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// CSS transform (rotation, scale, wipe)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<String>,
    /// CSS opacity (fade)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl Keyframe {
    /// A keyframe at `offset` with no fields set.
    pub fn at(offset: f64) -> Self {
        Self {
            offset,
            ..Default::default()
        }
    }

    /// Set the transform field.
    pub fn with_transform(mut self, transform: impl Into<String>) -> Self {
        self.transform = Some(transform.into());
        self
    }

    /// Set the opacity field.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Set the value field.
    pub fn with_value(mut self, value: Option<String>) -> Self {
        self.value = value;
        self
    }
}

/// A leaf behavior (`set`, `anim`, `animEffect`, `animRot`, `animScale`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Behavior {
    /// Timing of the behavior
    #[serde(flatten)]
    pub timing: TimeNode,
    /// Target shape id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape_id: Option<String>,
    /// Animated attribute names (`style.visibility`, `ppt_x`, ...)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attribute_names: Vec<String>,
    /// Additive mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additive: Option<String>,
    /// End value (`set`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_value: Option<String>,
    /// Formula shared by all keyframes (`anim`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
    /// Progress value (`animEffect`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<String>,
    /// Transition direction (`in` / `out`, `animEffect`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<String>,
    /// Raw filter list (`animEffect`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Resolved keyframes
    #[serde(default)]
    pub keyframes: Vec<Keyframe>,
}

/// A node of the animation timing tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AnimationNode {
    /// `p:seq`
    Sequence(Sequence),
    /// `p:par`
    Parallel(TimeNode),
    /// `p:set`
    Set(Behavior),
    /// `p:anim`
    Animate(Behavior),
    /// `p:animEffect`
    AnimateEffect(Behavior),
    /// `p:animRot`
    AnimateRotation(Behavior),
    /// `p:animScale`
    AnimateScale(Behavior),
}

impl AnimationNode {
    /// Timing shared by every variant.
    pub fn timing(&self) -> &TimeNode {
        match self {
            AnimationNode::Sequence(seq) => &seq.timing,
            AnimationNode::Parallel(par) => par,
            AnimationNode::Set(b)
            | AnimationNode::Animate(b)
            | AnimationNode::AnimateEffect(b)
            | AnimationNode::AnimateRotation(b)
            | AnimationNode::AnimateScale(b) => &b.timing,
        }
    }

    /// Leaf behavior, if this node is one.
    pub fn behavior(&self) -> Option<&Behavior> {
        match self {
            AnimationNode::Set(b)
            | AnimationNode::Animate(b)
            | AnimationNode::AnimateEffect(b)
            | AnimationNode::AnimateRotation(b)
            | AnimationNode::AnimateScale(b) => Some(b),
            AnimationNode::Sequence(_) | AnimationNode::Parallel(_) => None,
        }
    }

    /// Depth-first iterator over this node and its descendants.
    pub fn walk(&self) -> Vec<&AnimationNode> {
        let mut out = vec![self];
        for child in &self.timing().children {
            out.extend(child.walk());
        }
        out
    }
}
