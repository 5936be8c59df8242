//! Back entrances and exits: overshoot in from (or out to) a far offset while
//! the element is slightly shrunk and dimmed.

use crate::names::PresetName as N;
use crate::preset::Property::*;
use crate::preset::{num, Preset, Property};

fn back_in(name: N, axis: Property, from: f32) -> Preset {
    Preset::new(name)
        .initial(axis, num(from))
        .initial(Scale, num(0.7))
        .initial(Opacity, num(0.7))
        .track(axis, vec![num(from), num(0.0), num(0.0)])
        .track(Scale, vec![num(0.7), num(0.7), num(1.0)])
        .track(Opacity, vec![num(0.7), num(0.7), num(1.0)])
        .times(&[0.0, 0.8, 1.0])
}

fn back_out(name: N, axis: Property, to: f32) -> Preset {
    Preset::new(name)
        .initial(Scale, num(1.0))
        .initial(Opacity, num(1.0))
        .track(axis, vec![num(0.0), num(0.0), num(to)])
        .track(Scale, vec![num(1.0), num(0.7), num(0.7)])
        .track(Opacity, vec![num(1.0), num(0.7), num(0.7)])
        .times(&[0.0, 0.2, 1.0])
}

pub(super) fn presets() -> Vec<Preset> {
    vec![
        back_in(N::BackInDown, Y, -1200.0),
        back_in(N::BackInLeft, X, -2000.0),
        back_in(N::BackInRight, X, 2000.0),
        back_in(N::BackInUp, Y, 1200.0),
        back_out(N::BackOutDown, Y, 700.0),
        back_out(N::BackOutLeft, X, -2000.0),
        back_out(N::BackOutRight, X, 2000.0),
        back_out(N::BackOutUp, Y, -700.0),
    ]
}
