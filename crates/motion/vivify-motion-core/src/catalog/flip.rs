//! Flippers: perspective rotations around the X or Y axis.

use crate::ease::Ease;
use crate::names::PresetName as N;
use crate::preset::Property::*;
use crate::preset::{num, Preset, Property};

fn flip_in(name: N, axis: Property) -> Preset {
    Preset::new(name)
        .initial(axis, num(90.0))
        .initial(Opacity, num(0.0))
        .initial(Perspective, num(400.0))
        .track(
            axis,
            vec![num(90.0), num(-20.0), num(10.0), num(-5.0), num(0.0)],
        )
        .track(
            Opacity,
            vec![num(0.0), num(0.0), num(1.0), num(1.0), num(1.0)],
        )
        .times(&[0.0, 0.4, 0.6, 0.8, 1.0])
        .ease_per_segment(vec![Ease::In, Ease::In, Ease::Linear, Ease::Linear])
}

fn flip_out(name: N, axis: Property, mid: f32) -> Preset {
    Preset::new(name)
        .initial(axis, num(0.0))
        .initial(Opacity, num(1.0))
        .initial(Perspective, num(400.0))
        .track(axis, vec![num(0.0), num(mid), num(90.0)])
        .track(Opacity, vec![num(1.0), num(1.0), num(0.0)])
        .times(&[0.0, 0.3, 1.0])
}

pub(super) fn presets() -> Vec<Preset> {
    vec![
        Preset::new(N::Flip)
            .initial(RotateY, num(-360.0))
            .initial(Scale, num(1.0))
            .track(
                RotateY,
                vec![num(-360.0), num(-190.0), num(-170.0), num(0.0), num(0.0)],
            )
            .track(
                Scale,
                vec![num(1.0), num(1.0), num(1.0), num(0.95), num(1.0)],
            )
            .track(Z, vec![num(0.0), num(150.0), num(150.0), num(0.0), num(0.0)])
            .times(&[0.0, 0.4, 0.5, 0.8, 1.0])
            .ease_per_segment(vec![Ease::Out, Ease::Out, Ease::In, Ease::In]),
        flip_in(N::FlipInX, RotateX),
        flip_in(N::FlipInY, RotateY),
        flip_out(N::FlipOutX, RotateX, -20.0),
        flip_out(N::FlipOutY, RotateY, -15.0),
    ]
}
