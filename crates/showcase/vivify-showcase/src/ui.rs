use bevy::prelude::*;

use crate::snippet::usage_snippet;
use crate::state::Showcase;

#[derive(Component)]
pub struct InfoText;

pub fn setup(mut commands: Commands) {
    commands.spawn(Camera2dBundle::default());

    commands.spawn((
        InfoText,
        TextBundle::from_sections([
            TextSection::new(
                "",
                TextStyle {
                    font_size: 28.0,
                    color: Color::WHITE,
                    ..default()
                },
            ),
            TextSection::new(
                "",
                TextStyle {
                    font_size: 16.0,
                    color: Color::srgb(0.75, 0.75, 0.85),
                    ..default()
                },
            ),
            TextSection::new(
                "",
                TextStyle {
                    font_size: 14.0,
                    color: Color::srgb(0.55, 0.9, 0.6),
                    ..default()
                },
            ),
        ])
        .with_style(Style {
            position_type: PositionType::Absolute,
            left: Val::Px(16.0),
            top: Val::Px(12.0),
            ..default()
        }),
    ));
}

/// Rewrite the overlay whenever the browser state changes.
pub fn update_info(state: Res<Showcase>, mut query: Query<&mut Text, With<InfoText>>) {
    if !state.is_changed() {
        return;
    }
    let Ok(mut text) = query.get_single_mut() else {
        return;
    };

    let m = &state.modifiers;
    let flags: Vec<&str> = [
        (m.faster, "faster"),
        (m.fast, "fast"),
        (m.slow, "slow"),
        (m.slower, "slower"),
        (m.infinite, "infinite"),
    ]
    .iter()
    .filter_map(|&(on, label)| on.then_some(label))
    .collect();

    text.sections[0].value = format!(
        "{}  ({})\n",
        state.selected,
        state.selected.category().label()
    );
    text.sections[1].value = format!(
        "duration {:.2}s   flags [{}]\n\
         arrows: browse   1-4/i: flags   -/=: duration   r: replay   0: reset\n\n",
        state.duration,
        flags.join(", "),
    );
    text.sections[2].value = usage_snippet(&state);
}
