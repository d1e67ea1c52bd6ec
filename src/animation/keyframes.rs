//! Keyframe list transforms.

use crate::model::Keyframe;

/// Reverse the style fields of a keyframe list while keeping its offsets.
///
/// Fields are paired positionally: keyframe `i` takes the fields of keyframe
/// `n - 1 - i`. A field the partner lacks keeps its own value.
pub fn reverse_keyframes(keyframes: &[Keyframe]) -> Vec<Keyframe> {
    keyframes
        .iter()
        .zip(keyframes.iter().rev())
        .map(|(own, partner)| Keyframe {
            offset: own.offset,
            value: partner.value.clone().or_else(|| own.value.clone()),
            transform: partner.transform.clone().or_else(|| own.transform.clone()),
            opacity: partner.opacity.or(own.opacity),
        })
        .collect()
}

/// Play forwards then backwards: the list squeezed into the first half,
/// followed by its reverse in the second half.
pub fn auto_reverse(keyframes: &[Keyframe]) -> Vec<Keyframe> {
    let shifted: Vec<Keyframe> = keyframes
        .iter()
        .map(|kf| Keyframe {
            offset: kf.offset + 1.0,
            ..kf.clone()
        })
        .collect();

    keyframes
        .iter()
        .cloned()
        .chain(reverse_keyframes(&shifted))
        .map(|kf| Keyframe {
            offset: kf.offset / 2.0,
            ..kf
        })
        .collect()
}
