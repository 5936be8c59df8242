//! Keyframe sampling.
//!
//! The host engine owns frame scheduling; adapters call in here with a
//! normalized position `u` in [0,1] and get back the blended value per track.
//! Segment timing comes from the preset's explicit stops when present,
//! otherwise keyframes are spaced uniformly.

use crate::ease::{lerp_f32, EaseSpec};
use crate::preset::{Preset, Property, Value};

/// Find the segment [i, i+1] containing normalized time u over explicit stops,
/// returning (segment index, local t in [0,1] inside the segment).
/// Out-of-range u pins to the first or last segment boundary.
fn find_segment(stops: &[f32], u: f32) -> (usize, f32) {
    let n = stops.len();
    if n < 2 || u <= stops[0] {
        return (0, 0.0);
    }
    if u >= stops[n - 1] {
        return (n - 2, 1.0);
    }
    // Linear scan; stop counts are tiny (<= 11 in the catalog).
    for i in 0..(n - 1) {
        let t0 = stops[i];
        let t1 = stops[i + 1];
        if u >= t0 && u <= t1 {
            let denom = (t1 - t0).max(f32::EPSILON);
            return (i, ((u - t0) / denom).clamp(0.0, 1.0));
        }
    }
    (n - 2, 1.0)
}

/// Segment index and local t for uniformly spaced keyframes.
fn uniform_segment(len: usize, u: f32) -> (usize, f32) {
    let segments = len - 1;
    let scaled = u.clamp(0.0, 1.0) * segments as f32;
    let mut i = scaled.floor() as usize;
    if i >= segments {
        i = segments - 1;
    }
    (i, (scaled - i as f32).clamp(0.0, 1.0))
}

/// Sample one keyframe sequence at normalized time `u`.
///
/// `stops` and `ease` are the preset-level timing metadata; both endpoints of
/// a segment share one unit (validated at table construction), and the result
/// keeps that unit.
pub fn sample_values(values: &[Value], stops: Option<&[f32]>, ease: Option<&EaseSpec>, u: f32) -> Value {
    match values.len() {
        0 => Value::Number(0.0),
        1 => values[0],
        len => {
            let u = u.clamp(0.0, 1.0);
            let (seg, local) = match stops {
                Some(stops) if stops.len() == len => find_segment(stops, u),
                _ => uniform_segment(len, u),
            };
            let a = values[seg];
            let b = values[seg + 1];
            let eased = match ease {
                Some(spec) => spec.for_segment(seg).apply(local),
                None => local,
            };
            a.with_raw(lerp_f32(a.raw(), b.raw(), eased))
        }
    }
}

/// Sample every track of a preset at normalized time `u`.
pub fn sample_preset(preset: &Preset, u: f32) -> Vec<(Property, Value)> {
    preset
        .tracks
        .iter()
        .map(|track| {
            (
                track.property,
                sample_values(
                    &track.values,
                    preset.timing.times.as_deref(),
                    preset.timing.ease.as_ref(),
                    u,
                ),
            )
        })
        .collect()
}
