//! Fading entrances and exits: two-keyframe opacity ramps, optionally paired
//! with a slide. "Big" variants travel a fixed 2000px instead of the element
//! extent.

use crate::names::PresetName as N;
use crate::preset::Property::{Opacity, X, Y};
use crate::preset::{num, pct, Preset, Value};

/// Entrance: opacity 0 -> 1 plus optional per-axis travel into place.
fn fade_in(name: N, x: Option<Value>, y: Option<Value>) -> Preset {
    let mut preset = Preset::new(name).initial(Opacity, num(0.0));
    if let Some(from) = x {
        preset = preset.initial(X, from).track(X, vec![from, from.with_raw(0.0)]);
    }
    if let Some(from) = y {
        preset = preset.initial(Y, from).track(Y, vec![from, from.with_raw(0.0)]);
    }
    preset.track(Opacity, vec![num(0.0), num(1.0)])
}

/// Exit: opacity 1 -> 0 plus optional per-axis travel away.
fn fade_out(name: N, x: Option<Value>, y: Option<Value>) -> Preset {
    let mut preset = Preset::new(name).initial(Opacity, num(1.0));
    if let Some(to) = x {
        preset = preset.initial(X, to.with_raw(0.0)).track(X, vec![to.with_raw(0.0), to]);
    }
    if let Some(to) = y {
        preset = preset.initial(Y, to.with_raw(0.0)).track(Y, vec![to.with_raw(0.0), to]);
    }
    preset.track(Opacity, vec![num(1.0), num(0.0)])
}

pub(super) fn presets() -> Vec<Preset> {
    vec![
        fade_in(N::FadeIn, None, None),
        fade_in(N::FadeInDown, None, Some(pct(-100.0))),
        fade_in(N::FadeInDownBig, None, Some(num(-2000.0))),
        fade_in(N::FadeInLeft, Some(pct(-100.0)), None),
        fade_in(N::FadeInLeftBig, Some(num(-2000.0)), None),
        fade_in(N::FadeInRight, Some(pct(100.0)), None),
        fade_in(N::FadeInRightBig, Some(num(2000.0)), None),
        fade_in(N::FadeInUp, None, Some(pct(100.0))),
        fade_in(N::FadeInUpBig, None, Some(num(2000.0))),
        fade_in(N::FadeInTopLeft, Some(pct(-100.0)), Some(pct(-100.0))),
        fade_in(N::FadeInTopRight, Some(pct(100.0)), Some(pct(-100.0))),
        fade_in(N::FadeInBottomLeft, Some(pct(-100.0)), Some(pct(100.0))),
        fade_in(N::FadeInBottomRight, Some(pct(100.0)), Some(pct(100.0))),
        fade_out(N::FadeOut, None, None),
        fade_out(N::FadeOutDown, None, Some(pct(100.0))),
        fade_out(N::FadeOutDownBig, None, Some(num(2000.0))),
        fade_out(N::FadeOutLeft, Some(pct(-100.0)), None),
        fade_out(N::FadeOutLeftBig, Some(num(-2000.0)), None),
        fade_out(N::FadeOutRight, Some(pct(100.0)), None),
        fade_out(N::FadeOutRightBig, Some(num(2000.0)), None),
        fade_out(N::FadeOutUp, None, Some(pct(-100.0))),
        fade_out(N::FadeOutUpBig, None, Some(num(-2000.0))),
        fade_out(N::FadeOutTopLeft, Some(pct(-100.0)), Some(pct(-100.0))),
        fade_out(N::FadeOutTopRight, Some(pct(100.0)), Some(pct(-100.0))),
        fade_out(N::FadeOutBottomLeft, Some(pct(-100.0)), Some(pct(100.0))),
        fade_out(N::FadeOutBottomRight, Some(pct(100.0)), Some(pct(100.0))),
    ]
}
