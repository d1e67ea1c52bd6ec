//! Animation timing.
//!
//! A slide's `p:timing/p:tnLst` is parsed into an [`AnimationNode`] tree:
//! sequences and parallel groups nest leaf behaviors whose keyframes are
//! resolved onto a normalized `[0, 1]` timeline.

mod keyframes;
mod timing;

pub use keyframes::{auto_reverse, reverse_keyframes};
pub use timing::{parse_conditions, parse_node, parse_time, parse_time_list};

use crate::error::Result;
use crate::model::AnimationNode;
use crate::xml::XmlNode;

/// Parse a slide's `p:timing` element. Slides without timing have no
/// animation.
pub fn parse_timing(timing: Option<&XmlNode>) -> Result<Vec<AnimationNode>> {
    match timing.and_then(|t| t.child("p:tnLst")) {
        Some(list) => parse_time_list(list),
        None => Ok(Vec::new()),
    }
}
