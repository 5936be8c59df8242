//! Bouncing entrances and exits.
//!
//! Entrances sweep in from 3000px out and release the squash on arrival; the
//! overshoot offsets come straight from the upstream choreography.

use crate::ease::Ease;
use crate::names::PresetName as N;
use crate::preset::Property::*;
use crate::preset::{num, Preset, Property};

/// The animate.css bounce timing curve.
const BOUNCE_EASE: Ease = Ease::Bezier([0.215, 0.61, 0.355, 1.0]);

fn bounce_in_axis(
    name: N,
    axis: Property,
    scale_axis: Property,
    path: [f32; 5],
    scale: [f32; 5],
) -> Preset {
    Preset::new(name)
        .initial(Opacity, num(0.0))
        .initial(axis, num(path[0]))
        .initial(scale_axis, num(scale[0]))
        .track(
            Opacity,
            vec![num(0.0), num(1.0), num(1.0), num(1.0), num(1.0)],
        )
        .track(axis, path.iter().map(|&v| num(v)).collect())
        .track(scale_axis, scale.iter().map(|&v| num(v)).collect())
        .times(&[0.0, 0.6, 0.75, 0.9, 1.0])
        .ease(BOUNCE_EASE)
}

fn bounce_out_far(name: N, axis: Property, scale_axis: Property, path: [f32; 5]) -> Preset {
    Preset::new(name)
        .initial(axis, num(0.0))
        .initial(scale_axis, num(1.0))
        .initial(Opacity, num(1.0))
        .track(axis, path.iter().map(|&v| num(v)).collect())
        .track(
            scale_axis,
            vec![num(1.0), num(0.985), num(0.9), num(0.9), num(3.0)],
        )
        .track(
            Opacity,
            vec![num(1.0), num(1.0), num(1.0), num(1.0), num(0.0)],
        )
        .times(&[0.0, 0.2, 0.4, 0.45, 1.0])
}

fn bounce_out_side(name: N, path: [f32; 3]) -> Preset {
    Preset::new(name)
        .initial(X, num(0.0))
        .initial(ScaleX, num(1.0))
        .initial(Opacity, num(1.0))
        .track(X, path.iter().map(|&v| num(v)).collect())
        .track(ScaleX, vec![num(1.0), num(0.9), num(2.0)])
        .track(Opacity, vec![num(1.0), num(1.0), num(0.0)])
        .times(&[0.0, 0.2, 1.0])
}

pub(super) fn presets() -> Vec<Preset> {
    vec![
        Preset::new(N::BounceIn)
            .initial(Opacity, num(0.0))
            .initial(Scale, num(0.3))
            .track(
                Opacity,
                vec![num(0.0), num(0.0), num(0.0), num(1.0), num(1.0), num(1.0)],
            )
            .track(
                Scale,
                vec![
                    num(0.3),
                    num(1.1),
                    num(0.9),
                    num(1.03),
                    num(0.97),
                    num(1.0),
                ],
            )
            .times(&[0.0, 0.2, 0.4, 0.6, 0.8, 1.0])
            .ease(BOUNCE_EASE),
        bounce_in_axis(
            N::BounceInDown,
            Y,
            ScaleY,
            [-3000.0, 25.0, -10.0, 5.0, 0.0],
            [3.0, 0.9, 0.95, 0.985, 1.0],
        ),
        bounce_in_axis(
            N::BounceInLeft,
            X,
            ScaleX,
            [-3000.0, 25.0, -10.0, 5.0, 0.0],
            [3.0, 1.0, 0.98, 0.995, 1.0],
        ),
        bounce_in_axis(
            N::BounceInRight,
            X,
            ScaleX,
            [3000.0, -25.0, 10.0, -5.0, 0.0],
            [3.0, 1.0, 0.98, 0.995, 1.0],
        ),
        bounce_in_axis(
            N::BounceInUp,
            Y,
            ScaleY,
            [3000.0, -20.0, 10.0, -5.0, 0.0],
            [5.0, 0.9, 0.95, 0.985, 1.0],
        ),
        Preset::new(N::BounceOut)
            .initial(Scale, num(1.0))
            .initial(Opacity, num(1.0))
            .track(
                Scale,
                vec![num(1.0), num(0.9), num(1.1), num(1.1), num(0.3)],
            )
            .track(
                Opacity,
                vec![num(1.0), num(1.0), num(1.0), num(1.0), num(0.0)],
            )
            .times(&[0.0, 0.2, 0.5, 0.55, 1.0]),
        bounce_out_far(N::BounceOutDown, Y, ScaleY, [0.0, 10.0, -20.0, -20.0, 2000.0]),
        bounce_out_side(N::BounceOutLeft, [0.0, 20.0, -2000.0]),
        bounce_out_side(N::BounceOutRight, [0.0, -20.0, 2000.0]),
        bounce_out_far(N::BounceOutUp, Y, ScaleY, [0.0, -10.0, 20.0, 20.0, -2000.0]),
    ]
}
