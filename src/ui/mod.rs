//! UI domain: in-run HUD elements.

mod hud_player;

use bevy::prelude::*;

use crate::ui::hud_player::{spawn_jump_hud, update_jump_hud};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_jump_hud)
            .add_systems(Update, update_jump_hud);
    }
}
