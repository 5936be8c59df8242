use bevy::prelude::*;

use vivify_motion_core::{Modifiers, Preset, PresetName, Repeat, ResolvedTiming};

/// Request to play a preset on this entity.
///
/// Insert it (typically at spawn) and the plugin resolves the timing, applies
/// the preset's initial state and drives the timeline to completion. Each
/// insertion is an independent timeline; to replay, respawn the entity or
/// reinsert the component.
#[derive(Component, Clone, Debug)]
pub struct MotionPreset {
    pub name: PresetName,
    /// Base duration in seconds before modifiers.
    pub duration: f32,
    /// Seconds to hold the initial state before the first run.
    pub delay: f32,
    /// Extra runs after the first; `Repeat::Infinite` loops forever.
    pub repeat: Repeat,
    pub modifiers: Modifiers,
}

impl MotionPreset {
    pub fn new(name: PresetName) -> Self {
        Self {
            name,
            duration: 1.0,
            delay: 0.0,
            repeat: Repeat::default(),
            modifiers: Modifiers::default(),
        }
    }

    pub fn duration(mut self, seconds: f32) -> Self {
        self.duration = seconds;
        self
    }

    pub fn delay(mut self, seconds: f32) -> Self {
        self.delay = seconds;
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn faster(mut self) -> Self {
        self.modifiers.faster = true;
        self
    }

    pub fn fast(mut self) -> Self {
        self.modifiers.fast = true;
        self
    }

    pub fn slow(mut self) -> Self {
        self.modifiers.slow = true;
        self
    }

    pub fn slower(mut self) -> Self {
        self.modifiers.slower = true;
        self
    }

    pub fn infinite(mut self) -> Self {
        self.modifiers.infinite = true;
        self
    }
}

/// Element extent used to resolve percent translations, mirroring the CSS
/// rule that `translateX(100%)` travels one element width.
#[derive(Component, Clone, Copy, Debug)]
pub struct MotionExtent {
    pub width: f32,
    pub height: f32,
}

impl Default for MotionExtent {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 100.0,
        }
    }
}

/// Live playback state, inserted by the plugin when it picks up a
/// [`MotionPreset`]. The reduced-motion preference is folded into `timing` at
/// that moment and never re-read for this timeline.
#[derive(Component, Debug)]
pub struct MotionTimeline {
    pub preset: &'static Preset,
    pub timing: ResolvedTiming,
    pub elapsed: f32,
    /// Set once the completion event has been sent.
    pub finished: bool,
    /// Rest pose captured at init; sampled offsets compose on top of it.
    pub base: Transform,
}

impl MotionTimeline {
    pub(crate) fn new(preset: &'static Preset, timing: ResolvedTiming, base: Transform) -> Self {
        Self {
            preset,
            timing,
            elapsed: 0.0,
            finished: false,
            base,
        }
    }
}
