//! Movement domain: locomotion notifications.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Event emitted when a jump charge is spent and an arc starts
#[derive(Debug)]
pub struct JumpStartedEvent {
    pub entity: Entity,
    pub jumps_left: u32,
}

impl Message for JumpStartedEvent {}

/// Event emitted once per airborne-to-grounded transition
#[derive(Debug)]
pub struct LandedEvent {
    pub entity: Entity,
}

impl Message for LandedEvent {}
