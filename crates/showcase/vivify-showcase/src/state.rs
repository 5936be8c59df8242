use bevy::prelude::*;

use bevy_vivify_motion::MotionPreset;
use vivify_motion_core::{Modifiers, PresetName, Repeat};

/// Browser state: which preset is selected and which props the next mount
/// gets. Any change respawns the stage entity, so every tweak plays a fresh
/// timeline.
#[derive(Resource, Clone, Debug)]
pub struct Showcase {
    pub selected: PresetName,
    pub duration: f32,
    pub delay: f32,
    pub repeat: Repeat,
    pub modifiers: Modifiers,
    /// Bumped by the replay key to force a respawn without changing props.
    pub replay: u32,
}

impl Default for Showcase {
    fn default() -> Self {
        Self {
            selected: PresetName::BounceIn,
            duration: 1.0,
            delay: 0.0,
            repeat: Repeat::default(),
            modifiers: Modifiers::default(),
            replay: 0,
        }
    }
}

impl Showcase {
    fn selected_index(&self) -> usize {
        PresetName::ALL
            .iter()
            .position(|&n| n == self.selected)
            .unwrap_or(0)
    }

    pub fn select_next(&mut self) {
        let i = self.selected_index();
        self.selected = PresetName::ALL[(i + 1) % PresetName::ALL.len()];
    }

    pub fn select_prev(&mut self) {
        let i = self.selected_index();
        self.selected = PresetName::ALL[(i + PresetName::ALL.len() - 1) % PresetName::ALL.len()];
    }

    /// Jump to the first preset of the next (or previous) category.
    pub fn select_category(&mut self, forward: bool) {
        use vivify_motion_core::Category;
        let cats = Category::ALL;
        let current = cats
            .iter()
            .position(|&c| c == self.selected.category())
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % cats.len()
        } else {
            (current + cats.len() - 1) % cats.len()
        };
        if let Some(&first) = PresetName::ALL.iter().find(|n| n.category() == cats[next]) {
            self.selected = first;
        }
    }

    pub fn reset_props(&mut self) {
        let selected = self.selected;
        let replay = self.replay;
        *self = Self {
            selected,
            replay,
            ..Default::default()
        };
    }

    /// Component for the next stage mount, reflecting the current props.
    pub fn request(&self) -> MotionPreset {
        let mut request = MotionPreset::new(self.selected)
            .duration(self.duration)
            .delay(self.delay)
            .repeat(self.repeat);
        request.modifiers = self.modifiers;
        request
    }
}
