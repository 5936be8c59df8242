use vivify_motion_core::{PresetName, Repeat};

use crate::state::Showcase;

/// Rust enum variant for a wire name: `bounceIn` -> `BounceIn`.
fn variant_name(name: PresetName) -> String {
    let wire = name.as_str();
    let mut chars = wire.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Generate the usage snippet shown next to the stage, listing only
/// non-default props in a fixed order.
pub fn usage_snippet(state: &Showcase) -> String {
    let mut props = String::new();
    if (state.duration - 1.0).abs() > f32::EPSILON {
        props.push_str(&format!("\n        .duration({:.2})", state.duration));
    }
    if state.delay != 0.0 {
        props.push_str(&format!("\n        .delay({:.2})", state.delay));
    }
    match state.repeat {
        Repeat::Count(0) => {}
        Repeat::Count(n) => props.push_str(&format!("\n        .repeat(Repeat::Count({n}))")),
        Repeat::Infinite => props.push_str("\n        .repeat(Repeat::Infinite)"),
    }
    for (set, call) in [
        (state.modifiers.faster, ".faster()"),
        (state.modifiers.fast, ".fast()"),
        (state.modifiers.slow, ".slow()"),
        (state.modifiers.slower, ".slower()"),
        (state.modifiers.infinite, ".infinite()"),
    ] {
        if set {
            props.push_str("\n        ");
            props.push_str(call);
        }
    }

    format!(
        "use bevy_vivify_motion::prelude::*;\n\n\
         commands.spawn((\n\
         \x20   SpriteBundle::default(),\n\
         \x20   MotionPreset::new(PresetName::{variant}){props},\n\
         ));\n",
        variant = variant_name(state.selected),
        props = props,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use vivify_motion_core::Modifiers;

    /// it should list only non-default props, in the fixed order
    #[test]
    fn snippet_reflects_flags() {
        let state = Showcase {
            selected: PresetName::BounceIn,
            duration: 2.0,
            modifiers: Modifiers {
                faster: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let snippet = usage_snippet(&state);
        assert!(snippet.contains("PresetName::BounceIn"));
        assert!(snippet.contains(".duration(2.00)"));
        assert!(snippet.contains(".faster()"));
        assert!(!snippet.contains(".slow()"));
        assert!(!snippet.contains(".delay("));
    }

    /// it should emit a bare constructor when everything is default
    #[test]
    fn snippet_defaults_are_bare() {
        let state = Showcase::default();
        let snippet = usage_snippet(&state);
        assert!(snippet.contains("MotionPreset::new(PresetName::BounceIn),"));
        assert!(!snippet.contains(".duration("));
    }
}
