use bevy::prelude::*;
use bevy_vivify_motion::{FixedDt, ReducedMotion, VivifyMotionPlugin};

/// it should insert the plugin resources when the plugin is added
#[test]
fn plugin_inserts_resources() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins).add_plugins(VivifyMotionPlugin);

    assert!(app.world().get_resource::<ReducedMotion>().is_some());
    assert!(app.world().get_resource::<FixedDt>().is_some());
    assert!(!app.world().resource::<ReducedMotion>().0);
}

/// it should tick the FixedUpdate schedule without panicking on an empty world
#[test]
fn fixedupdate_ticks_empty_world() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins).add_plugins(VivifyMotionPlugin);

    for _ in 0..10 {
        app.world_mut().run_schedule(FixedUpdate);
    }
}
