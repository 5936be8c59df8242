use bevy::log::debug;
use bevy::prelude::*;

use vivify_motion_core::{
    catalog, resolve_timing, sample_preset, Property, TimelinePhase, TransformOrigin, Value,
};

use crate::components::{MotionExtent, MotionPreset, MotionTimeline};
use crate::events::MotionCompleted;
use crate::resources::{FixedDt, ReducedMotion};

/// Pick up freshly inserted [`MotionPreset`] components: resolve timing
/// (folding in the reduced-motion preference, read here and only here) and
/// apply the preset's initial state.
pub fn init_motion_timelines(
    mut commands: Commands,
    reduced: Res<ReducedMotion>,
    mut query: Query<
        (
            Entity,
            &MotionPreset,
            &Transform,
            Option<&MotionExtent>,
            Option<&mut Sprite>,
        ),
        Added<MotionPreset>,
    >,
) {
    for (entity, request, transform, extent, sprite) in query.iter_mut() {
        let preset = catalog().get(request.name);
        let timing = resolve_timing(
            request.duration,
            request.delay,
            request.repeat,
            request.modifiers,
            reduced.0,
            preset.timing.duration,
        );

        let timeline = MotionTimeline::new(preset, timing, *transform);
        let extent = extent.copied().unwrap_or_default();

        let mut initial = *transform;
        apply_samples(
            &preset.initial,
            &timeline,
            extent,
            &mut initial,
            sprite.map(|s| s.into_inner()),
        );

        commands
            .entity(entity)
            .insert(timeline)
            .insert(initial);
    }
}

/// Advance every live timeline by the fixed tick, sample the preset at the
/// current phase and write the result onto the entity.
pub fn advance_motion_timelines(
    dt: Res<FixedDt>,
    mut completed: EventWriter<MotionCompleted>,
    mut query: Query<(
        Entity,
        &MotionPreset,
        &mut MotionTimeline,
        &mut Transform,
        Option<&MotionExtent>,
        Option<&mut Sprite>,
    )>,
) {
    for (entity, request, mut timeline, mut transform, extent, sprite) in query.iter_mut() {
        if timeline.finished {
            continue;
        }
        timeline.elapsed += dt.0;

        let extent = extent.copied().unwrap_or_default();
        let sprite = sprite.map(|s| s.into_inner());

        match timeline.timing.phase(timeline.elapsed) {
            TimelinePhase::Pending => {
                // Still in the delay; the initial state is already applied.
            }
            TimelinePhase::Active { progress, .. } => {
                let samples = sample_preset(timeline.preset, progress);
                apply_samples(&samples, &timeline, extent, &mut transform, sprite);
            }
            TimelinePhase::Done => {
                let samples = sample_preset(timeline.preset, 1.0);
                apply_samples(&samples, &timeline, extent, &mut transform, sprite);
                timeline.finished = true;
                completed.send(MotionCompleted {
                    entity,
                    preset: request.name,
                });
            }
        }
    }
}

/// Where the element pivots, in Bevy's y-up local space.
fn pivot(origin: Option<TransformOrigin>, extent: MotionExtent) -> Vec3 {
    let (hw, hh) = (extent.width / 2.0, extent.height / 2.0);
    match origin.unwrap_or(TransformOrigin::Center) {
        TransformOrigin::Center => Vec3::ZERO,
        TransformOrigin::CenterBottom => Vec3::new(0.0, -hh, 0.0),
        TransformOrigin::TopCenter => Vec3::new(0.0, hh, 0.0),
        TransformOrigin::TopLeft => Vec3::new(-hw, hh, 0.0),
        TransformOrigin::LeftBottom => Vec3::new(-hw, -hh, 0.0),
        TransformOrigin::RightBottom => Vec3::new(hw, -hh, 0.0),
        TransformOrigin::LeftCenter => Vec3::new(-hw, 0.0, 0.0),
        TransformOrigin::RightCenter => Vec3::new(hw, 0.0, 0.0),
    }
}

fn resolve_len(value: Value, basis: f32) -> f32 {
    match value {
        Value::Number(v) => v,
        Value::Percent(v) => basis * v / 100.0,
    }
}

/// Compose sampled channel values onto the timeline's rest pose.
///
/// CSS coordinates are y-down with clockwise-positive rotation; Bevy is y-up,
/// so Y offsets and Z rotations flip sign. Skew and perspective have no
/// `Transform` counterpart and are ignored here (the wasm adapter exposes
/// them to hosts that can express them).
fn apply_samples(
    samples: &[(Property, Value)],
    timeline: &MotionTimeline,
    extent: MotionExtent,
    transform: &mut Transform,
    sprite: Option<&mut Sprite>,
) {
    let base = &timeline.base;
    let mut offset = Vec3::ZERO;
    let mut scale = Vec3::ONE;
    let (mut rx, mut ry, mut rz) = (0.0f32, 0.0f32, 0.0f32);
    let mut opacity: Option<f32> = None;

    for &(property, value) in samples {
        match property {
            Property::Opacity => opacity = Some(value.raw()),
            Property::X => offset.x += resolve_len(value, extent.width),
            Property::Y => offset.y -= resolve_len(value, extent.height),
            Property::Z => offset.z += value.raw(),
            Property::Scale => {
                scale.x *= value.raw();
                scale.y *= value.raw();
            }
            Property::ScaleX => scale.x *= value.raw(),
            Property::ScaleY => scale.y *= value.raw(),
            Property::Rotate => rz -= value.raw(),
            Property::RotateX => rx += value.raw(),
            Property::RotateY => ry += value.raw(),
            Property::SkewX | Property::SkewY | Property::Perspective => {
                debug!("channel {property:?} has no Transform mapping; skipped");
            }
        }
    }

    let rotation = Quat::from_euler(
        EulerRot::XYZ,
        rx.to_radians(),
        ry.to_radians(),
        rz.to_radians(),
    );

    // Rotate and scale about the preset's transform origin.
    let p = pivot(timeline.preset.timing.transform_origin, extent);
    let pivot_shift = p - rotation * (scale * p);

    transform.translation = base.translation + offset + pivot_shift;
    transform.rotation = base.rotation * rotation;
    transform.scale = base.scale * scale;

    if let (Some(sprite), Some(alpha)) = (sprite, opacity) {
        sprite.color.set_alpha(alpha.clamp(0.0, 1.0));
    }
}
