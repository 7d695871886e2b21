//! Debug domain: runtime overlay for movement inspection.

mod state;
mod systems;
mod ui;

pub use state::DebugState;

use bevy::prelude::*;

use crate::debug::systems::{
    draw_probe_rays, handle_debug_hotkeys, log_movement_messages, update_debug_info_overlay,
};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, (handle_debug_hotkeys, log_movement_messages))
            .add_systems(
                Update,
                update_debug_info_overlay.run_if(|state: Res<DebugState>| state.show_info),
            )
            .add_systems(
                Update,
                draw_probe_rays.run_if(|state: Res<DebugState>| state.show_probes),
            );
    }
}
