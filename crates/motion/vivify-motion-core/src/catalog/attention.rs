//! Attention seekers.
//!
//! Keyframe grids follow the upstream animate.css choreography; a few entries
//! spell out hold keyframes the CSS left implicit so every track lines up with
//! its stop list.

use crate::ease::Ease;
use crate::names::PresetName as N;
use crate::preset::Property::*;
use crate::preset::{num, pct, Preset, TransformOrigin};

pub(super) fn presets() -> Vec<Preset> {
    vec![
        Preset::new(N::Bounce)
            .initial(Y, num(0.0))
            .initial(ScaleY, num(1.0))
            .track(
                Y,
                vec![
                    num(0.0),
                    num(-30.0),
                    num(0.0),
                    num(-15.0),
                    num(0.0),
                    num(-4.0),
                    num(0.0),
                ],
            )
            .track(
                ScaleY,
                vec![
                    num(1.0),
                    num(1.1),
                    num(1.0),
                    num(1.05),
                    num(0.95),
                    num(1.02),
                    num(1.0),
                ],
            )
            .times(&[0.0, 0.2, 0.4, 0.53, 0.7, 0.9, 1.0])
            .ease(Ease::Bezier([0.215, 0.61, 0.355, 1.0]))
            .origin(TransformOrigin::CenterBottom),
        Preset::new(N::Flash)
            .initial(Opacity, num(1.0))
            .track(
                Opacity,
                vec![num(1.0), num(0.0), num(1.0), num(0.0), num(1.0)],
            )
            .times(&[0.0, 0.25, 0.5, 0.75, 1.0])
            .ease(Ease::Linear),
        Preset::new(N::Pulse)
            .initial(Scale, num(1.0))
            .track(Scale, vec![num(1.0), num(1.05), num(1.0)])
            .ease(Ease::InOut),
        Preset::new(N::RubberBand)
            .initial(ScaleX, num(1.0))
            .initial(ScaleY, num(1.0))
            .track(
                ScaleX,
                vec![
                    num(1.0),
                    num(1.25),
                    num(0.75),
                    num(1.15),
                    num(0.95),
                    num(1.05),
                    num(1.0),
                ],
            )
            .track(
                ScaleY,
                vec![
                    num(1.0),
                    num(0.75),
                    num(1.25),
                    num(0.85),
                    num(1.05),
                    num(0.95),
                    num(1.0),
                ],
            )
            .times(&[0.0, 0.3, 0.4, 0.5, 0.65, 0.75, 1.0]),
        Preset::new(N::ShakeX).initial(X, num(0.0)).track(X, shake_values()).times(&TENTH_STOPS),
        Preset::new(N::ShakeY).initial(Y, num(0.0)).track(Y, shake_values()).times(&TENTH_STOPS),
        Preset::new(N::HeadShake)
            .initial(X, num(0.0))
            .initial(RotateY, num(0.0))
            .track(
                X,
                vec![
                    num(0.0),
                    num(-6.0),
                    num(5.0),
                    num(-3.0),
                    num(2.0),
                    num(0.0),
                    num(0.0),
                ],
            )
            .track(
                RotateY,
                vec![
                    num(0.0),
                    num(-9.0),
                    num(7.0),
                    num(-5.0),
                    num(3.0),
                    num(0.0),
                    num(0.0),
                ],
            )
            .times(&[0.0, 0.065, 0.185, 0.315, 0.435, 0.5, 1.0])
            .ease(Ease::InOut),
        Preset::new(N::Swing)
            .initial(Rotate, num(0.0))
            .track(
                Rotate,
                vec![
                    num(0.0),
                    num(15.0),
                    num(-10.0),
                    num(5.0),
                    num(-5.0),
                    num(0.0),
                ],
            )
            .times(&[0.0, 0.2, 0.4, 0.6, 0.8, 1.0])
            .origin(TransformOrigin::TopCenter),
        Preset::new(N::Tada)
            .initial(Scale, num(1.0))
            .initial(Rotate, num(0.0))
            .track(
                Scale,
                vec![
                    num(1.0),
                    num(0.9),
                    num(0.9),
                    num(1.1),
                    num(1.1),
                    num(1.1),
                    num(1.1),
                    num(1.1),
                    num(1.1),
                    num(1.1),
                    num(1.0),
                ],
            )
            .track(
                Rotate,
                vec![
                    num(0.0),
                    num(-3.0),
                    num(-3.0),
                    num(3.0),
                    num(-3.0),
                    num(3.0),
                    num(-3.0),
                    num(3.0),
                    num(-3.0),
                    num(3.0),
                    num(0.0),
                ],
            )
            .times(&TENTH_STOPS),
        Preset::new(N::Wobble)
            .initial(X, pct(0.0))
            .initial(Rotate, num(0.0))
            .track(
                X,
                vec![
                    pct(0.0),
                    pct(-25.0),
                    pct(20.0),
                    pct(-15.0),
                    pct(10.0),
                    pct(-5.0),
                    pct(0.0),
                ],
            )
            .track(
                Rotate,
                vec![
                    num(0.0),
                    num(-5.0),
                    num(3.0),
                    num(-3.0),
                    num(2.0),
                    num(-1.0),
                    num(0.0),
                ],
            )
            .times(&[0.0, 0.15, 0.3, 0.45, 0.6, 0.75, 1.0]),
        Preset::new(N::Jello)
            .initial(SkewX, num(0.0))
            .initial(SkewY, num(0.0))
            .track(SkewX, jello_values())
            .track(SkewY, jello_values())
            .times(&[
                0.0, 0.111, 0.222, 0.333, 0.444, 0.555, 0.666, 0.777, 0.888, 1.0,
            ])
            .origin(TransformOrigin::Center),
        Preset::new(N::HeartBeat)
            .initial(Scale, num(1.0))
            .track(
                Scale,
                vec![num(1.0), num(1.3), num(1.0), num(1.3), num(1.0), num(1.0)],
            )
            .times(&[0.0, 0.14, 0.28, 0.42, 0.7, 1.0])
            .ease(Ease::InOut)
            .duration(1.3),
    ]
}

/// Stops at every tenth, shared by the shake and tada grids.
const TENTH_STOPS: [f32; 11] = [0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0];

fn shake_values() -> Vec<crate::preset::Value> {
    vec![
        num(0.0),
        num(-10.0),
        num(10.0),
        num(-10.0),
        num(10.0),
        num(-10.0),
        num(10.0),
        num(-10.0),
        num(10.0),
        num(-10.0),
        num(0.0),
    ]
}

fn jello_values() -> Vec<crate::preset::Value> {
    vec![
        num(0.0),
        num(0.0),
        num(-12.5),
        num(6.25),
        num(-3.125),
        num(1.5625),
        num(-0.78125),
        num(0.390_625),
        num(-0.195_312_5),
        num(0.0),
    ]
}
