//! Content domain: data-driven movement configuration.

mod data;
mod loader;
mod validation;

pub use data::{CurveKeyDef, MovementFile, TuningDef};
pub use loader::ContentLoadError;
pub use validation::{ValidationError, validate_movement};

use bevy::prelude::*;
use std::path::Path;

use crate::movement::{JumpCurve, MovementTuning};

/// Jump curve parsed and validated from disk.
#[derive(Resource, Debug, Clone)]
pub struct LoadedJumpCurve(pub JumpCurve);

const MOVEMENT_FILE: &str = "assets/data/movement.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        // PreStartup so every Startup system sees the final tuning.
        app.add_systems(PreStartup, load_content);
    }
}

/// Load `movement.ron`. On any load or validation failure the compiled
/// defaults stay in effect and the failure is logged loudly; rejected values
/// never reach the kernel.
pub(crate) fn load_content(mut commands: Commands, mut tuning: ResMut<MovementTuning>) {
    let path = Path::new(MOVEMENT_FILE);
    let file = match loader::load_movement_file(path) {
        Ok(file) => file,
        Err(e) => {
            warn!("{}", e);
            warn!("Using built-in movement tuning");
            return;
        }
    };

    match validation::validate_movement(&file) {
        Ok((new_tuning, curve)) => {
            info!("Movement config loaded from {}", path.display());
            *tuning = new_tuning;
            commands.insert_resource(LoadedJumpCurve(curve));
        }
        Err(errors) => {
            for error in &errors {
                error!("{}", error);
            }
            error!("Movement config rejected ({} errors)", errors.len());
        }
    }
}
