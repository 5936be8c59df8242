//! Catalog browser for the Vivify motion presets.
//!
//! Pure UI glue: pick a preset, tweak the modifier flags, watch it play and
//! copy the generated usage snippet. Set `VIVIFY_REDUCED_MOTION=1` to see the
//! accessibility override collapse every timeline.

use bevy::prelude::*;

use bevy_vivify_motion::{ReducedMotion, VivifyMotionPlugin};

mod input;
mod snippet;
mod stage;
mod state;
mod ui;

use state::Showcase;

fn reduced_motion_from_env() -> bool {
    std::env::var("VIVIFY_REDUCED_MOTION")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "vivify showcase".into(),
                resolution: (960.0, 640.0).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(VivifyMotionPlugin)
        .insert_resource(ReducedMotion(reduced_motion_from_env()))
        .insert_resource(ClearColor(Color::srgb(0.10, 0.08, 0.18)))
        .init_resource::<Showcase>()
        .add_systems(Startup, ui::setup)
        .add_systems(
            Update,
            (
                input::handle_keys,
                stage::sync_stage,
                ui::update_info,
                stage::log_completions,
            )
                .chain(),
        )
        .run();
}
