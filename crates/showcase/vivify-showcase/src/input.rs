use bevy::prelude::*;

use crate::state::Showcase;

/// Keyboard-driven browsing.
///
/// Left/Right step through presets, Up/Down jump categories, 1-4 toggle the
/// speed flags, I toggles infinite, -/= nudge the duration, 0 resets props
/// and R replays the current selection.
pub fn handle_keys(keys: Res<ButtonInput<KeyCode>>, mut state: ResMut<Showcase>) {
    if keys.just_pressed(KeyCode::ArrowRight) {
        state.select_next();
    }
    if keys.just_pressed(KeyCode::ArrowLeft) {
        state.select_prev();
    }
    if keys.just_pressed(KeyCode::ArrowDown) {
        state.select_category(true);
    }
    if keys.just_pressed(KeyCode::ArrowUp) {
        state.select_category(false);
    }

    if keys.just_pressed(KeyCode::Digit1) {
        let v = !state.modifiers.faster;
        state.modifiers.faster = v;
    }
    if keys.just_pressed(KeyCode::Digit2) {
        let v = !state.modifiers.fast;
        state.modifiers.fast = v;
    }
    if keys.just_pressed(KeyCode::Digit3) {
        let v = !state.modifiers.slow;
        state.modifiers.slow = v;
    }
    if keys.just_pressed(KeyCode::Digit4) {
        let v = !state.modifiers.slower;
        state.modifiers.slower = v;
    }
    if keys.just_pressed(KeyCode::KeyI) {
        let v = !state.modifiers.infinite;
        state.modifiers.infinite = v;
    }

    if keys.just_pressed(KeyCode::Equal) {
        state.duration = (state.duration + 0.25).min(5.0);
    }
    if keys.just_pressed(KeyCode::Minus) {
        state.duration = (state.duration - 0.25).max(0.25);
    }

    if keys.just_pressed(KeyCode::Digit0) {
        state.reset_props();
    }
    if keys.just_pressed(KeyCode::KeyR) {
        state.replay = state.replay.wrapping_add(1);
    }
}
