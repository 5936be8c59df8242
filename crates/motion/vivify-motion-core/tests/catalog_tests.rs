use vivify_motion_core::{
    catalog, Catalog, Category, MotionError, Preset, PresetName, Property, Value,
};

fn track<'a>(preset: &'a Preset, property: Property) -> &'a [Value] {
    &preset
        .tracks
        .iter()
        .find(|t| t.property == property)
        .unwrap_or_else(|| panic!("{} has no {property:?} track", preset.name))
        .values
}

/// it should build a table with every known name, each entry valid
#[test]
fn table_is_complete_and_well_formed() {
    let table = Catalog::build().expect("builtin table must validate");
    assert_eq!(table.len(), PresetName::ALL.len());
    for preset in table.iter() {
        preset.validate().unwrap();
    }
}

/// it should look up fadeIn with opacity 0 -> 1
#[test]
fn fade_in_shape() {
    let preset = catalog().lookup("fadeIn").unwrap();
    assert_eq!(preset.name, PresetName::FadeIn);
    assert!(preset
        .initial
        .iter()
        .any(|&(p, v)| p == Property::Opacity && v == Value::Number(0.0)));
    let opacity = track(preset, Property::Opacity);
    assert_eq!(opacity.first(), Some(&Value::Number(0.0)));
    assert_eq!(opacity.last(), Some(&Value::Number(1.0)));
}

/// it should fail fast on an unknown name
#[test]
fn unknown_name_fails_lookup() {
    let err = catalog().lookup("doesNotExist").unwrap_err();
    assert_eq!(err, MotionError::unknown("doesNotExist"));
}

/// it should store the bounceIn keyframes the demo scenario expects
#[test]
fn bounce_in_keyframes() {
    let preset = catalog().get(PresetName::BounceIn);
    let opacity: Vec<f32> = track(preset, Property::Opacity)
        .iter()
        .map(|v| v.raw())
        .collect();
    let scale: Vec<f32> = track(preset, Property::Scale)
        .iter()
        .map(|v| v.raw())
        .collect();
    assert_eq!(opacity, vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
    assert_eq!(scale, vec![0.3, 1.1, 0.9, 1.03, 0.97, 1.0]);
    // bounceIn follows the caller's duration; it is not an intrinsic-timing preset
    assert_eq!(preset.timing.duration, None);
}

/// it should mark only heartBeat and hinge as intrinsic-duration presets
#[test]
fn intrinsic_durations() {
    let fixed: Vec<(PresetName, f32)> = catalog()
        .iter()
        .filter_map(|p| p.timing.duration.map(|d| (p.name, d)))
        .collect();
    assert_eq!(
        fixed,
        vec![(PresetName::HeartBeat, 1.3), (PresetName::Hinge, 2.0)]
    );
}

/// it should group presets into the sixteen demo categories
#[test]
fn category_grouping() {
    assert_eq!(Category::ALL.len(), 16);
    let mut total = 0;
    for &cat in Category::ALL {
        let count = catalog().in_category(cat).count();
        assert!(count > 0, "empty category {cat:?}");
        for preset in catalog().in_category(cat) {
            assert_eq!(preset.category, cat);
        }
        total += count;
    }
    assert_eq!(total, catalog().len());

    assert_eq!(catalog().in_category(Category::AttentionSeekers).count(), 12);
    assert_eq!(catalog().in_category(Category::FadingEntrances).count(), 13);
    assert_eq!(catalog().in_category(Category::SlidingExits).count(), 4);
}

/// it should keep typed get and wire-name lookup consistent
#[test]
fn typed_get_matches_lookup() {
    for &name in PresetName::ALL {
        let by_name = catalog().get(name);
        let by_str = catalog().lookup(name.as_str()).unwrap();
        assert_eq!(by_name.name, by_str.name);
    }
}

/// it should reject a malformed entry at validation time
#[test]
fn validation_rejects_mismatched_tracks() {
    use vivify_motion_core::preset::num;

    let bad = Preset::new(PresetName::FadeIn)
        .track(Property::Opacity, vec![num(0.0), num(1.0)])
        .track(Property::Y, vec![num(0.0)]);
    let err = bad.validate().unwrap_err();
    assert!(matches!(err, MotionError::MalformedPreset { .. }));

    let bad_times = Preset::new(PresetName::FadeIn)
        .track(Property::Opacity, vec![num(0.0), num(1.0)])
        .times(&[0.0, 0.5]);
    assert!(bad_times.validate().is_err());

    let decreasing = Preset::new(PresetName::FadeIn)
        .track(Property::Opacity, vec![num(0.0), num(0.5), num(1.0)])
        .times(&[0.0, 0.8, 1.0]);
    assert!(decreasing.validate().is_ok());
    let actually_decreasing = Preset::new(PresetName::FadeIn)
        .track(Property::Opacity, vec![num(0.0), num(0.5), num(1.0)])
        .times(&[0.0, 0.9, 0.8]);
    assert!(actually_decreasing.validate().is_err());
}

/// it should round-trip a preset through serde
#[test]
fn preset_serde_roundtrip() {
    let preset = catalog().get(PresetName::Wobble).clone();
    let s = serde_json::to_string(&preset).unwrap();
    let back: Preset = serde_json::from_str(&s).unwrap();
    assert_eq!(preset, back);
}
