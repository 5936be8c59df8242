//! Lightspeed: skewed dashes in from or out to the side.

use crate::ease::Ease;
use crate::names::PresetName as N;
use crate::preset::Property::*;
use crate::preset::{num, pct, Preset};

fn light_speed_in(name: N, from_pct: f32, skew: f32) -> Preset {
    Preset::new(name)
        .initial(X, pct(from_pct))
        .initial(SkewX, num(skew))
        .initial(Opacity, num(0.0))
        .track(X, vec![pct(from_pct), pct(0.0), pct(0.0), pct(0.0)])
        .track(
            SkewX,
            vec![num(skew), num(-skew * 2.0 / 3.0), num(skew / 6.0), num(0.0)],
        )
        .track(
            Opacity,
            vec![num(0.0), num(1.0), num(1.0), num(1.0)],
        )
        .times(&[0.0, 0.6, 0.8, 1.0])
        .ease(Ease::Out)
}

fn light_speed_out(name: N, to_pct: f32, skew: f32) -> Preset {
    Preset::new(name)
        .initial(Opacity, num(1.0))
        .initial(X, pct(0.0))
        .initial(SkewX, num(0.0))
        .track(X, vec![pct(0.0), pct(to_pct)])
        .track(SkewX, vec![num(0.0), num(skew)])
        .track(Opacity, vec![num(1.0), num(0.0)])
        .ease(Ease::In)
}

pub(super) fn presets() -> Vec<Preset> {
    vec![
        light_speed_in(N::LightSpeedInLeft, -100.0, 30.0),
        light_speed_in(N::LightSpeedInRight, 100.0, -30.0),
        light_speed_out(N::LightSpeedOutLeft, -100.0, -30.0),
        light_speed_out(N::LightSpeedOutRight, 100.0, 30.0),
    ]
}
