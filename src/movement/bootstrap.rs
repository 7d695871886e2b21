//! Movement domain: kernel construction and player spawn at startup.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::LoadedJumpCurve;
use crate::movement::components::{GameLayer, KinematicBody, Player};
use crate::movement::curve::JumpCurve;
use crate::movement::resolver::MotionResolver;
use crate::movement::resources::{MotionKernel, MovementTuning};
use crate::movement::state::CharacterState;
use crate::movement::sweep::{BodyShape, ProbeCaster};

/// Build the motion kernel from the tuning and curve the content layer
/// loaded, or from the built-in defaults when no valid config made it off
/// disk.
pub(crate) fn setup_movement(
    mut commands: Commands,
    curve: Option<Res<LoadedJumpCurve>>,
    tuning: Res<MovementTuning>,
) {
    let curve = match curve {
        Some(curve) => curve.0.clone(),
        None => JumpCurve::default(),
    };

    let caster = match ProbeCaster::new(tuning.probe_samples) {
        Ok(caster) => caster,
        Err(e) => {
            error!("Probe config rejected: {}", e);
            ProbeCaster::default()
        }
    };

    let resolver = MotionResolver::new(caster, tuning.slope_limit_deg.to_radians());
    commands.insert_resource(MotionKernel { resolver, curve });

    info!(
        "Movement kernel ready: {} probes per sweep, slope limit {} deg, {} jumps",
        caster.samples(),
        tuning.slope_limit_deg,
        tuning.max_jumps
    );
}

pub(crate) fn spawn_player(mut commands: Commands, tuning: Res<MovementTuning>) {
    let half = tuning.player_half_extents;
    let shape = match BodyShape::new(half, Vec2::ONE, tuning.skin_width) {
        Ok(shape) => shape,
        Err(e) => {
            error!("Player body rejected: {}", e);
            return;
        }
    };

    commands.spawn((
        // Identity & movement
        (
            Player,
            CharacterState::airborne(tuning.max_jumps),
            KinematicBody(shape),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(shape.half_extents() * 2.0),
            ..default()
        },
        Transform::from_xyz(-260.0, 60.0, 0.0),
        // Physics: kinematic body, the resolver owns all motion
        (
            RigidBody::Kinematic,
            Collider::rectangle(half.x * 2.0, half.y * 2.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
        ),
    ));
}
