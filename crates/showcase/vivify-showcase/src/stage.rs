use bevy::prelude::*;

use bevy_vivify_motion::{MotionCompleted, MotionExtent};

use crate::state::Showcase;

/// Marker for the animated demo entity.
#[derive(Component)]
pub struct StageTarget;

const STAGE_SIZE: f32 = 160.0;

/// Respawn the stage entity whenever the browser state changes. A fresh
/// entity means a fresh identity and a fresh timeline, which is exactly the
/// restart semantics the wrapper defines.
pub fn sync_stage(
    mut commands: Commands,
    state: Res<Showcase>,
    existing: Query<Entity, With<StageTarget>>,
) {
    if !state.is_changed() {
        return;
    }
    for entity in existing.iter() {
        commands.entity(entity).despawn_recursive();
    }

    commands.spawn((
        StageTarget,
        SpriteBundle {
            sprite: Sprite {
                color: Color::srgb(0.62, 0.42, 0.98),
                custom_size: Some(Vec2::splat(STAGE_SIZE)),
                ..default()
            },
            transform: Transform::from_xyz(0.0, 40.0, 0.0),
            ..default()
        },
        MotionExtent {
            width: STAGE_SIZE,
            height: STAGE_SIZE,
        },
        state.request(),
    ));
}

/// Log finished timelines; handy when flags make a run hard to eyeball.
pub fn log_completions(mut events: EventReader<MotionCompleted>) {
    for event in events.read() {
        log::info!("{} finished", event.preset);
    }
}
