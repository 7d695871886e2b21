//! UI domain: jump-charge pips and grounded indicator.

use bevy::prelude::*;

use crate::movement::{CharacterState, MovementTuning, Player};

pub(crate) const HUD_PADDING: f32 = 16.0;
pub(crate) const PIP_SIZE: f32 = 14.0;
pub(crate) const PIP_GAP: f32 = 6.0;

const PIP_LIT: Color = Color::srgb(0.9, 0.8, 0.3);
const PIP_SPENT: Color = Color::srgb(0.25, 0.22, 0.12);
const INDICATOR_GROUNDED: Color = Color::srgb(0.2, 0.8, 0.3);
const INDICATOR_AIRBORNE: Color = Color::srgb(0.3, 0.3, 0.3);

/// Marker for the jump HUD container
#[derive(Component)]
pub struct JumpHudUI;

/// One jump-charge pip; index counts from the left
#[derive(Component)]
pub struct JumpChargePip(pub u32);

/// Marker for the grounded indicator square
#[derive(Component)]
pub struct GroundedIndicator;

pub(crate) fn spawn_jump_hud(mut commands: Commands, tuning: Res<MovementTuning>) {
    // Root container positioned at top-left
    commands
        .spawn((
            JumpHudUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HUD_PADDING),
                top: Val::Px(HUD_PADDING),
                flex_direction: FlexDirection::Row,
                column_gap: Val::Px(PIP_GAP),
                align_items: AlignItems::Center,
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                GroundedIndicator,
                Node {
                    width: Val::Px(PIP_SIZE),
                    height: Val::Px(PIP_SIZE),
                    margin: UiRect::right(Val::Px(PIP_GAP * 2.0)),
                    border: UiRect::all(Val::Px(2.0)),
                    ..default()
                },
                BackgroundColor(INDICATOR_AIRBORNE),
                BorderColor::all(Color::srgb(0.6, 0.6, 0.6)),
            ));

            for index in 0..tuning.max_jumps {
                parent.spawn((
                    JumpChargePip(index),
                    Node {
                        width: Val::Px(PIP_SIZE),
                        height: Val::Px(PIP_SIZE),
                        ..default()
                    },
                    BackgroundColor(PIP_LIT),
                ));
            }
        });
}

pub(crate) fn update_jump_hud(
    player_query: Query<&CharacterState, With<Player>>,
    mut pip_query: Query<(&JumpChargePip, &mut BackgroundColor), Without<GroundedIndicator>>,
    mut indicator_query: Query<&mut BackgroundColor, With<GroundedIndicator>>,
) {
    let Ok(state) = player_query.single() else {
        return;
    };

    for (pip, mut bg_color) in &mut pip_query {
        bg_color.0 = if pip.0 < state.jumps_left {
            PIP_LIT
        } else {
            PIP_SPENT
        };
    }

    for mut bg_color in &mut indicator_query {
        bg_color.0 = if state.grounded {
            INDICATOR_GROUNDED
        } else {
            INDICATOR_AIRBORNE
        };
    }
}
