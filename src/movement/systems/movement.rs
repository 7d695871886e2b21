//! Movement domain: the per-frame kinematic driver.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::components::{GameLayer, KinematicBody, Player};
use crate::movement::events::{JumpStartedEvent, LandedEvent};
use crate::movement::resources::{MotionKernel, MovementInput, MovementTuning, ProbeTrace};
use crate::movement::state::CharacterState;
use crate::movement::systems::collisions::{SpatialRays, TracedRays};

/// Drive every kinematic actor: jump trigger, horizontal resolve, vertical
/// resolve, then the grounded-state transition.
pub(crate) fn apply_movement(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    kernel: Res<MotionKernel>,
    spatial_query: SpatialQuery,
    mut trace: ResMut<ProbeTrace>,
    mut jump_messages: MessageWriter<JumpStartedEvent>,
    mut landed_messages: MessageWriter<LandedEvent>,
    mut query: Query<(Entity, &mut Transform, &KinematicBody, &mut CharacterState), With<Player>>,
) {
    let dt = time.delta_secs();
    trace.segments.clear();

    let filter = SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::Wall]);

    for (entity, mut transform, body, mut state) in &mut query {
        let mut rays = TracedRays::new(
            SpatialRays::new(&spatial_query, filter.clone()),
            &mut trace,
        );

        if input.jump_just_pressed && state.try_jump() {
            debug!("Jump started: jumps_left={}", state.jumps_left);
            jump_messages.write(JumpStartedEvent {
                entity,
                jumps_left: state.jumps_left,
            });
        }

        let mut position = transform.translation.truncate();

        // Horizontal leg from the input axis.
        let dx = input.axis_x * tuning.move_speed * dt;
        kernel
            .resolver
            .resolve(&mut rays, &body.0, &mut position, Vec2::new(dx, 0.0));

        // Vertical leg: jump-curve delta while the arc plays, constant fall
        // otherwise. The delta flips sign past the apex on its own.
        let dy = if state.jumping {
            let previous = kernel.curve.sample(state.jump_elapsed);
            state.jump_elapsed += dt;
            kernel.curve.sample(state.jump_elapsed) - previous
        } else {
            -tuning.fall_speed * dt
        };
        let outcome = kernel
            .resolver
            .resolve(&mut rays, &body.0, &mut position, Vec2::new(0.0, dy));

        // The net applied displacement decides grounding; a rising hit is a
        // ceiling, not a landing.
        if state.settle(outcome.hit.is_some(), outcome.applied.y, tuning.max_jumps) {
            debug!("Landed: jumps_left={}", state.jumps_left);
            landed_messages.write(LandedEvent { entity });
        }
        state.expire_jump(kernel.curve.final_time());

        transform.translation = position.extend(transform.translation.z);
    }
}
