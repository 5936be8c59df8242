//! Zooming entrances and exits.

use crate::ease::Ease;
use crate::names::PresetName as N;
use crate::preset::Property::*;
use crate::preset::{num, Preset, Property, TransformOrigin};

/// The upstream zoom curves: a hard accelerate-in followed by a soft landing.
fn zoom_eases() -> Vec<Ease> {
    vec![
        Ease::Bezier([0.55, 0.055, 0.675, 0.19]),
        Ease::Bezier([0.175, 0.885, 0.32, 1.0]),
    ]
}

fn zoom_in_axis(name: N, axis: Property, from: f32, overshoot: f32) -> Preset {
    Preset::new(name)
        .initial(Opacity, num(0.0))
        .initial(Scale, num(0.1))
        .initial(axis, num(from))
        .track(Opacity, vec![num(0.0), num(1.0), num(1.0)])
        .track(Scale, vec![num(0.1), num(0.475), num(1.0)])
        .track(axis, vec![num(from), num(overshoot), num(0.0)])
        .times(&[0.0, 0.6, 1.0])
        .ease_per_segment(zoom_eases())
}

fn zoom_out_axis(
    name: N,
    axis: Property,
    overshoot: f32,
    to: f32,
    eased: bool,
    origin: TransformOrigin,
) -> Preset {
    let mut preset = Preset::new(name)
        .initial(Opacity, num(1.0))
        .initial(Scale, num(1.0))
        .initial(axis, num(0.0))
        .track(Opacity, vec![num(1.0), num(1.0), num(0.0)])
        .track(Scale, vec![num(1.0), num(0.475), num(0.1)])
        .track(axis, vec![num(0.0), num(overshoot), num(to)])
        .times(&[0.0, 0.4, 1.0])
        .origin(origin);
    if eased {
        preset = preset.ease_per_segment(zoom_eases());
    }
    preset
}

pub(super) fn presets() -> Vec<Preset> {
    vec![
        Preset::new(N::ZoomIn)
            .initial(Opacity, num(0.0))
            .initial(Scale, num(0.3))
            .track(Opacity, vec![num(0.0), num(1.0), num(1.0)])
            .track(Scale, vec![num(0.3), num(1.0), num(1.0)])
            .times(&[0.0, 0.5, 1.0]),
        zoom_in_axis(N::ZoomInDown, Y, -1000.0, 60.0),
        zoom_in_axis(N::ZoomInLeft, X, -1000.0, 10.0),
        zoom_in_axis(N::ZoomInRight, X, 1000.0, -10.0),
        zoom_in_axis(N::ZoomInUp, Y, 1000.0, -60.0),
        Preset::new(N::ZoomOut)
            .initial(Opacity, num(1.0))
            .initial(Scale, num(1.0))
            .track(Opacity, vec![num(1.0), num(0.0), num(0.0)])
            .track(Scale, vec![num(1.0), num(0.3), num(0.3)])
            .times(&[0.0, 0.5, 1.0]),
        zoom_out_axis(
            N::ZoomOutDown,
            Y,
            -60.0,
            2000.0,
            true,
            TransformOrigin::CenterBottom,
        ),
        zoom_out_axis(
            N::ZoomOutLeft,
            X,
            42.0,
            -2000.0,
            false,
            TransformOrigin::LeftCenter,
        ),
        zoom_out_axis(
            N::ZoomOutRight,
            X,
            -42.0,
            2000.0,
            false,
            TransformOrigin::RightCenter,
        ),
        zoom_out_axis(
            N::ZoomOutUp,
            Y,
            60.0,
            -2000.0,
            true,
            TransformOrigin::CenterBottom,
        ),
    ]
}
