//! Specials: the odd ones out.

use crate::ease::Ease;
use crate::names::PresetName as N;
use crate::preset::Property::*;
use crate::preset::{num, pct, Preset, TransformOrigin};

pub(super) fn presets() -> Vec<Preset> {
    vec![
        // Swings loose on a top-left hinge, then drops off screen.
        Preset::new(N::Hinge)
            .initial(Rotate, num(0.0))
            .initial(Opacity, num(1.0))
            .track(
                Rotate,
                vec![
                    num(0.0),
                    num(80.0),
                    num(60.0),
                    num(80.0),
                    num(60.0),
                    num(0.0),
                ],
            )
            .track(
                Y,
                vec![
                    num(0.0),
                    num(0.0),
                    num(0.0),
                    num(0.0),
                    num(0.0),
                    num(700.0),
                ],
            )
            .track(
                Opacity,
                vec![num(1.0), num(1.0), num(1.0), num(1.0), num(1.0), num(0.0)],
            )
            .times(&[0.0, 0.2, 0.4, 0.6, 0.8, 1.0])
            .ease(Ease::InOut)
            .origin(TransformOrigin::TopLeft)
            .duration(2.0),
        Preset::new(N::JackInTheBox)
            .initial(Opacity, num(0.0))
            .initial(Scale, num(0.1))
            .initial(Rotate, num(30.0))
            .track(Opacity, vec![num(0.0), num(0.0), num(0.0), num(1.0)])
            .track(Scale, vec![num(0.1), num(0.1), num(0.1), num(1.0)])
            .track(Rotate, vec![num(30.0), num(-10.0), num(3.0), num(0.0)])
            .times(&[0.0, 0.5, 0.7, 1.0])
            .origin(TransformOrigin::CenterBottom),
        Preset::new(N::RollIn)
            .initial(Opacity, num(0.0))
            .initial(X, pct(-100.0))
            .initial(Rotate, num(-120.0))
            .track(Opacity, vec![num(0.0), num(1.0)])
            .track(X, vec![pct(-100.0), pct(0.0)])
            .track(Rotate, vec![num(-120.0), num(0.0)]),
        Preset::new(N::RollOut)
            .initial(Opacity, num(1.0))
            .initial(X, pct(0.0))
            .initial(Rotate, num(0.0))
            .track(Opacity, vec![num(1.0), num(0.0)])
            .track(X, vec![pct(0.0), pct(100.0)])
            .track(Rotate, vec![num(0.0), num(120.0)]),
    ]
}
