//! Validation for movement definitions before they reach the kernel.

use bevy::prelude::*;

use super::data::MovementFile;
use crate::movement::{BodyShape, JumpCurve, Keyframe, MovementTuning, ProbeCaster};

/// A validation error with context about which field failed.
#[derive(Debug)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "movement config field '{}': {}", self.field, self.message)
    }
}

fn invalid(field: &'static str, message: impl Into<String>) -> ValidationError {
    ValidationError {
        field,
        message: message.into(),
    }
}

/// Check every definition against the kernel's construction rules.
/// Returns the constructed tuning and curve, or the full error list.
pub fn validate_movement(file: &MovementFile) -> Result<(MovementTuning, JumpCurve), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let def = &file.tuning;

    if def.move_speed <= 0.0 {
        errors.push(invalid("move_speed", "must be positive"));
    }
    if def.fall_speed <= 0.0 {
        errors.push(invalid("fall_speed", "must be positive"));
    }
    if !(0.0..90.0).contains(&def.slope_limit_deg) {
        errors.push(invalid("slope_limit_deg", "must be in [0, 90)"));
    }
    if def.max_jumps == 0 {
        errors.push(invalid("max_jumps", "must allow at least one jump"));
    }

    if let Err(e) = ProbeCaster::new(def.probe_samples) {
        errors.push(invalid("probe_samples", e.to_string()));
    }

    let half = Vec2::new(def.player_half_extents.0, def.player_half_extents.1);
    if let Err(e) = BodyShape::new(half, Vec2::ONE, def.skin_width) {
        errors.push(invalid("skin_width", e.to_string()));
    }

    let keys: Vec<Keyframe> = file
        .jump_curve
        .iter()
        .map(|k| Keyframe {
            time: k.time,
            height: k.height,
        })
        .collect();

    match JumpCurve::new(keys) {
        Ok(curve) if errors.is_empty() => {
            let tuning = MovementTuning {
                move_speed: def.move_speed,
                fall_speed: def.fall_speed,
                slope_limit_deg: def.slope_limit_deg,
                probe_samples: def.probe_samples,
                skin_width: def.skin_width,
                max_jumps: def.max_jumps,
                player_half_extents: half,
            };
            Ok((tuning, curve))
        }
        Ok(_) => Err(errors),
        Err(e) => {
            errors.push(invalid("jump_curve", e.to_string()));
            Err(errors)
        }
    }
}
