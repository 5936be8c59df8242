//! Rotating entrances and exits: a spin around a corner (or the center)
//! paired with a fade.

use crate::names::PresetName as N;
use crate::preset::Property::*;
use crate::preset::{num, Preset, TransformOrigin};

fn rotate_in(name: N, from_deg: f32, origin: TransformOrigin) -> Preset {
    Preset::new(name)
        .initial(Rotate, num(from_deg))
        .initial(Opacity, num(0.0))
        .track(Rotate, vec![num(from_deg), num(0.0)])
        .track(Opacity, vec![num(0.0), num(1.0)])
        .origin(origin)
}

fn rotate_out(name: N, to_deg: f32, origin: TransformOrigin) -> Preset {
    Preset::new(name)
        .initial(Opacity, num(1.0))
        .initial(Rotate, num(0.0))
        .track(Rotate, vec![num(0.0), num(to_deg)])
        .track(Opacity, vec![num(1.0), num(0.0)])
        .origin(origin)
}

pub(super) fn presets() -> Vec<Preset> {
    use crate::preset::TransformOrigin::{Center, LeftBottom, RightBottom};
    vec![
        rotate_in(N::RotateIn, -200.0, Center),
        rotate_in(N::RotateInDownLeft, -45.0, LeftBottom),
        rotate_in(N::RotateInDownRight, 45.0, RightBottom),
        rotate_in(N::RotateInUpLeft, 45.0, LeftBottom),
        rotate_in(N::RotateInUpRight, -90.0, RightBottom),
        rotate_out(N::RotateOut, 200.0, Center),
        rotate_out(N::RotateOutDownLeft, 45.0, LeftBottom),
        rotate_out(N::RotateOutDownRight, -45.0, RightBottom),
        rotate_out(N::RotateOutUpLeft, -45.0, LeftBottom),
        rotate_out(N::RotateOutUpRight, 90.0, RightBottom),
    ]
}
