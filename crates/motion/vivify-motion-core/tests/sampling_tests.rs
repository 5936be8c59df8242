use approx::assert_abs_diff_eq;

use vivify_motion_core::preset::{num, pct};
use vivify_motion_core::{
    catalog, sample_preset, sample_values, Ease, EaseSpec, PresetName, Property, Value,
};

fn raw(v: Value) -> f32 {
    v.raw()
}

/// it should interpolate linearly with uniform spacing when no stops are given
#[test]
fn uniform_linear_sampling() {
    let values = [num(0.0), num(1.0)];
    assert_abs_diff_eq!(raw(sample_values(&values, None, None, 0.0)), 0.0);
    assert_abs_diff_eq!(raw(sample_values(&values, None, None, 0.5)), 0.5);
    assert_abs_diff_eq!(raw(sample_values(&values, None, None, 1.0)), 1.0);

    // Three keyframes: two uniform segments
    let three = [num(0.0), num(10.0), num(0.0)];
    assert_abs_diff_eq!(raw(sample_values(&three, None, None, 0.25)), 5.0, epsilon = 1e-5);
    assert_abs_diff_eq!(raw(sample_values(&three, None, None, 0.5)), 10.0, epsilon = 1e-5);
    assert_abs_diff_eq!(raw(sample_values(&three, None, None, 0.75)), 5.0, epsilon = 1e-5);
}

/// it should respect explicit stops
#[test]
fn explicit_stops_shift_segments() {
    let values = [num(0.0), num(1.0), num(1.0)];
    let stops = [0.0, 0.8, 1.0];
    // At u=0.4 we are halfway through the long first segment
    assert_abs_diff_eq!(
        raw(sample_values(&values, Some(&stops), None, 0.4)),
        0.5,
        epsilon = 1e-5
    );
    // Past the second stop the value holds
    assert_abs_diff_eq!(
        raw(sample_values(&values, Some(&stops), None, 0.9)),
        1.0,
        epsilon = 1e-5
    );
}

/// it should hold the ends outside [0,1] and hold single keyframes everywhere
#[test]
fn boundaries_hold() {
    let values = [num(2.0), num(4.0)];
    assert_abs_diff_eq!(raw(sample_values(&values, None, None, -1.0)), 2.0);
    assert_abs_diff_eq!(raw(sample_values(&values, None, None, 2.0)), 4.0);

    let single = [num(7.0)];
    assert_abs_diff_eq!(raw(sample_values(&single, None, None, 0.0)), 7.0);
    assert_abs_diff_eq!(raw(sample_values(&single, None, None, 0.9)), 7.0);
}

/// it should keep the unit of the segment endpoints
#[test]
fn percent_tracks_stay_percent() {
    let values = [pct(-100.0), pct(0.0)];
    let mid = sample_values(&values, None, None, 0.5);
    assert_eq!(mid, Value::Percent(-50.0));
}

/// it should ease segments through the configured curve
#[test]
fn eased_segment_bends_midpoint() {
    let values = [num(0.0), num(1.0)];
    let ease = EaseSpec::Uniform(Ease::In);
    let eased = raw(sample_values(&values, None, Some(&ease), 0.25));
    assert!(eased < 0.25, "ease-in should lag linear, got {eased}");

    let per_segment = EaseSpec::PerSegment(vec![Ease::Out, Ease::In]);
    let three = [num(0.0), num(1.0), num(2.0)];
    // First segment uses ease-out (ahead of linear)...
    let a = raw(sample_values(&three, None, Some(&per_segment), 0.125));
    assert!(a > 0.25);
    // ...second segment uses ease-in (behind linear)
    let b = raw(sample_values(&three, None, Some(&per_segment), 0.625));
    assert!(b < 1.25);
}

/// it should sample every track of a preset at once
#[test]
fn preset_sampling_covers_all_tracks() {
    let preset = catalog().get(PresetName::FadeInDown);
    let at_mid = sample_preset(preset, 0.5);
    assert_eq!(at_mid.len(), preset.tracks.len());

    let opacity = at_mid
        .iter()
        .find(|(p, _)| *p == Property::Opacity)
        .map(|&(_, v)| v)
        .unwrap();
    assert_abs_diff_eq!(opacity.raw(), 0.5, epsilon = 1e-5);

    let y = at_mid
        .iter()
        .find(|(p, _)| *p == Property::Y)
        .map(|&(_, v)| v)
        .unwrap();
    assert!(y.is_percent());
    assert_abs_diff_eq!(y.raw(), -50.0, epsilon = 1e-4);
}

/// it should pin the endpoints of the bounceIn choreography
#[test]
fn bounce_in_endpoints() {
    let preset = catalog().get(PresetName::BounceIn);
    let start = sample_preset(preset, 0.0);
    let end = sample_preset(preset, 1.0);

    let get = |samples: &[(Property, Value)], p: Property| {
        samples
            .iter()
            .find(|(sp, _)| *sp == p)
            .map(|&(_, v)| v.raw())
            .unwrap()
    };
    assert_abs_diff_eq!(get(&start, Property::Opacity), 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(get(&start, Property::Scale), 0.3, epsilon = 1e-6);
    assert_abs_diff_eq!(get(&end, Property::Opacity), 1.0, epsilon = 1e-6);
    assert_abs_diff_eq!(get(&end, Property::Scale), 1.0, epsilon = 1e-6);
}

/// it should sample every catalog entry across its span without panicking
#[test]
fn full_catalog_sweep() {
    for preset in catalog().iter() {
        for step in 0..=10 {
            let u = step as f32 / 10.0;
            let samples = sample_preset(preset, u);
            assert_eq!(samples.len(), preset.tracks.len());
            for (_, value) in samples {
                assert!(value.raw().is_finite());
            }
        }
    }
}
