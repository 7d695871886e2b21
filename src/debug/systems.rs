//! Debug domain: hotkeys, info overlay, and probe-ray drawing.

use bevy::prelude::*;

use crate::debug::state::DebugState;
use crate::debug::ui::{DebugInfoOverlay, spawn_debug_info_overlay};
use crate::movement::{CharacterState, JumpStartedEvent, LandedEvent, Player, ProbeTrace};

/// F1 toggles the info overlay, F2 the probe rays
pub(crate) fn handle_debug_hotkeys(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.show_info = !debug_state.show_info;

        if debug_state.show_info {
            spawn_debug_info_overlay(&mut commands);
        } else {
            for entity in &existing_overlay {
                commands.entity(entity).despawn();
            }
        }
    }

    if keyboard.just_pressed(KeyCode::F2) {
        debug_state.show_probes = !debug_state.show_probes;
        info!(
            "Probe rays {}",
            if debug_state.show_probes { "ON" } else { "OFF" }
        );
    }
}

/// Update the overlay text with live movement state
pub(crate) fn update_debug_info_overlay(
    player_query: Query<(&Transform, &CharacterState), With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
) {
    if let (Ok((transform, state)), Ok(mut text)) =
        (player_query.single(), overlay_query.single_mut())
    {
        let pos = transform.translation;
        **text = format!(
            "Pos: ({:.0}, {:.0})\nGrounded: {}\nJumping: {}\nJumps left: {}",
            pos.x, pos.y, state.grounded, state.jumping, state.jumps_left
        );
    }
}

/// Draw the probe segments the driver recorded this frame
pub(crate) fn draw_probe_rays(trace: Res<ProbeTrace>, mut gizmos: Gizmos) {
    for segment in &trace.segments {
        let end = segment.origin + segment.direction * segment.length;
        let color = if segment.hit {
            Color::srgb(0.9, 0.3, 0.2)
        } else {
            Color::srgb(0.9, 0.8, 0.2)
        };
        gizmos.line_2d(segment.origin, end, color);
    }
}

/// Log locomotion notifications while debugging
pub(crate) fn log_movement_messages(
    mut jumps: MessageReader<JumpStartedEvent>,
    mut landings: MessageReader<LandedEvent>,
) {
    for jump in jumps.read() {
        debug!(
            "JumpStarted: entity={:?}, jumps_left={}",
            jump.entity, jump.jumps_left
        );
    }
    for landing in landings.read() {
        debug!("Landed: entity={:?}", landing.entity);
    }
}
