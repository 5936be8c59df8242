use bevy::prelude::*;

use vivify_motion_core::PresetName;

/// Sent exactly once when a finite timeline plays its last run.
/// Never sent for `Repeat::Infinite` timelines.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub struct MotionCompleted {
    pub entity: Entity,
    pub preset: PresetName,
}
