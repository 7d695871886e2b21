//! Movement domain: tuning, input, and kernel resources.

use bevy::prelude::*;

use crate::movement::curve::JumpCurve;
use crate::movement::resolver::MotionResolver;

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    /// Horizontal speed at full axis deflection, px/s.
    pub move_speed: f32,
    /// Constant fall speed outside a jump arc, px/s.
    pub fall_speed: f32,
    /// Maximum climbable surface angle, degrees from horizontal.
    pub slope_limit_deg: f32,
    /// Parallel probes per sweep (at least 2).
    pub probe_samples: u32,
    /// Skin inset keeping probe origins inside the silhouette, px.
    pub skin_width: f32,
    /// Jumps permitted between landings.
    pub max_jumps: u32,
    pub player_half_extents: Vec2,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_speed: 240.0,
            fall_speed: 560.0,
            slope_limit_deg: 50.0,
            probe_samples: 4,
            skin_width: 2.0,
            max_jumps: 2,
            player_half_extents: Vec2::new(12.0, 24.0),
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    /// Horizontal axis in [-1, 1].
    pub axis_x: f32,
    pub jump_just_pressed: bool,
}

/// Resolver and jump curve built from validated tuning at startup.
#[derive(Resource, Debug, Clone)]
pub struct MotionKernel {
    pub resolver: MotionResolver,
    pub curve: JumpCurve,
}

/// Probe segments recorded this frame, drawn by the debug overlay.
#[derive(Resource, Debug, Default)]
pub struct ProbeTrace {
    pub segments: Vec<ProbeSegment>,
}

#[derive(Debug, Clone, Copy)]
pub struct ProbeSegment {
    pub origin: Vec2,
    pub direction: Vec2,
    /// Hit distance, or the full cast length on a miss.
    pub length: f32,
    pub hit: bool,
}
