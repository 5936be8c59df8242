//! Sliding entrances and exits: a bare translate across the element extent.

use crate::names::PresetName as N;
use crate::preset::{pct, Preset, Property};

fn slide(name: N, axis: Property, from_pct: f32, to_pct: f32) -> Preset {
    Preset::new(name)
        .initial(axis, pct(from_pct))
        .track(axis, vec![pct(from_pct), pct(to_pct)])
}

pub(super) fn presets() -> Vec<Preset> {
    use crate::preset::Property::{X, Y};
    vec![
        slide(N::SlideInDown, Y, -100.0, 0.0),
        slide(N::SlideInLeft, X, -100.0, 0.0),
        slide(N::SlideInRight, X, 100.0, 0.0),
        slide(N::SlideInUp, Y, 100.0, 0.0),
        slide(N::SlideOutDown, Y, 0.0, 100.0),
        slide(N::SlideOutLeft, X, 0.0, -100.0),
        slide(N::SlideOutRight, X, 0.0, 100.0),
        slide(N::SlideOutUp, Y, 0.0, -100.0),
    ]
}
