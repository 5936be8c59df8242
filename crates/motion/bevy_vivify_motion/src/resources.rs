use bevy::prelude::*;

/// The user's reduced-motion accessibility preference.
///
/// Read once per timeline when it is initialized (a point-in-time read, not a
/// subscription): flipping the resource mid-flight does not affect running
/// timelines, only ones mounted afterwards.
#[derive(Resource, Default, Clone, Copy, Debug)]
pub struct ReducedMotion(pub bool);

/// Fixed timestep for timeline advancement (seconds per tick).
#[derive(Resource, Clone, Copy, Debug)]
pub struct FixedDt(pub f32);

impl Default for FixedDt {
    fn default() -> Self {
        Self(1.0 / 60.0)
    }
}
