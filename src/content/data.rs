//! Serde definitions for the movement data file.

use serde::{Deserialize, Serialize};

/// Root of `assets/data/movement.ron`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MovementFile {
    pub tuning: TuningDef,
    pub jump_curve: Vec<CurveKeyDef>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TuningDef {
    pub move_speed: f32,
    pub fall_speed: f32,
    pub slope_limit_deg: f32,
    pub probe_samples: u32,
    pub skin_width: f32,
    pub max_jumps: u32,
    pub player_half_extents: (f32, f32),
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct CurveKeyDef {
    pub time: f32,
    pub height: f32,
}
