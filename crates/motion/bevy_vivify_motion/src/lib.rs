//! Bevy plugin that plays Vivify motion presets on entities.
//!
//! Insert a [`MotionPreset`] on an entity with a `Transform` (and optionally a
//! `Sprite` for opacity) and the plugin does the rest: timing is resolved once
//! at pickup, including the reduced-motion override, and the timeline is
//! advanced on a fixed tick until it completes (or forever for unbounded
//! repeats).

use bevy::prelude::*;

pub mod components;
pub mod events;
pub mod resources;
pub mod systems;

pub use components::{MotionExtent, MotionPreset, MotionTimeline};
pub use events::MotionCompleted;
pub use resources::{FixedDt, ReducedMotion};
pub use vivify_motion_core as core;

pub mod prelude {
    pub use crate::components::{MotionExtent, MotionPreset, MotionTimeline};
    pub use crate::events::MotionCompleted;
    pub use crate::resources::{FixedDt, ReducedMotion};
    pub use crate::VivifyMotionPlugin;
    pub use vivify_motion_core::{Category, Modifiers, PresetName, Repeat};
}

pub struct VivifyMotionPlugin;

impl Plugin for VivifyMotionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ReducedMotion>()
            .init_resource::<FixedDt>()
            .add_event::<MotionCompleted>()
            .add_systems(Update, systems::init_motion_timelines)
            .add_systems(FixedUpdate, systems::advance_motion_timelines);
    }
}
