//! Movement domain: raycast-kinematic locomotion plugin wiring and exports.

mod bootstrap;
mod components;
mod curve;
mod dev;
mod events;
mod resolver;
mod resources;
mod state;
mod sweep;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{GameLayer, Ground, KinematicBody, Player, Wall};
pub use curve::{CurveError, JumpCurve, Keyframe};
pub use events::{JumpStartedEvent, LandedEvent};
pub use resolver::{MotionResolver, MoveOutcome};
pub use resources::{MotionKernel, MovementInput, MovementTuning, ProbeSegment, ProbeTrace};
pub use state::CharacterState;
pub use sweep::{
    BodyShape, CastDirection, ProbeCaster, RayHit, Raycaster, SampleCountError, ShapeError,
    SweepHit,
};

use bevy::prelude::*;

use crate::movement::bootstrap::{setup_movement, spawn_player};
use crate::movement::dev::spawn_test_room;
use crate::movement::systems::{apply_movement, read_input};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .init_resource::<ProbeTrace>()
            .add_message::<JumpStartedEvent>()
            .add_message::<LandedEvent>()
            .add_systems(
                Startup,
                (setup_movement, spawn_player, spawn_test_room).chain(),
            )
            .add_systems(Update, (read_input, apply_movement).chain());
    }
}
