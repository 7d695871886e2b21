//! Movement domain: collision-aware displacement resolution.

use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

use crate::movement::sweep::{BodyShape, CastDirection, ProbeCaster, Raycaster, SweepHit};

/// Outcome of one resolve call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveOutcome {
    /// The obstruction that decided the motion, if any. For a slope-corrected
    /// horizontal resolve this is always the original horizontal hit.
    pub hit: Option<SweepHit>,
    /// Total displacement applied to the pose, across the partial step, any
    /// slope compensation, and the completed remainder.
    pub applied: Vec2,
}

/// Turns single-axis displacement intents into safe displacements: full when
/// the sweep runs clear, clamped to the contact point when obstructed, with a
/// compensating vertical step for climbable slopes.
#[derive(Debug, Clone, Copy)]
pub struct MotionResolver {
    caster: ProbeCaster,
    /// Maximum climbable surface angle, radians from horizontal.
    slope_limit: f32,
}

impl MotionResolver {
    pub fn new(caster: ProbeCaster, slope_limit: f32) -> Self {
        Self { caster, slope_limit }
    }

    /// Resolve a single-axis intent, mutating `position` by the allowed
    /// amount.
    ///
    /// A horizontal intent blocked by a surface inclined less than the slope
    /// limit gets a compensating vertical step; if that step is unobstructed
    /// the remaining horizontal distance is completed on top, otherwise the
    /// actor keeps only the partial advance.
    pub fn resolve<R: Raycaster>(
        &self,
        rays: &mut R,
        body: &BodyShape,
        position: &mut Vec2,
        intent: Vec2,
    ) -> MoveOutcome {
        debug_assert!(
            intent.x == 0.0 || intent.y == 0.0,
            "movement intents must vary along one axis"
        );

        let start = *position;
        let direction = CastDirection::of(intent);
        let outcome = self.advance(rays, body, position, intent);

        let Some(hit) = outcome.hit else {
            return outcome;
        };

        if direction.is_horizontal() && intent.y == 0.0 {
            let slope = slope_angle(direction.unit(), hit.normal);
            if slope < self.slope_limit {
                let remaining = intent.x.abs() - hit.distance;
                if remaining > 0.0 {
                    let step = remaining * slope.tan();
                    let climb = self.advance(rays, body, position, Vec2::new(0.0, step));
                    if climb.hit.is_none() {
                        *position += direction.unit() * remaining;
                    }
                }
            }
        }

        MoveOutcome {
            hit: Some(hit),
            applied: *position - start,
        }
    }

    /// One sweep-and-apply step with no slope handling: the full intent when
    /// clear, an advance to exactly the contact point otherwise.
    fn advance<R: Raycaster>(
        &self,
        rays: &mut R,
        body: &BodyShape,
        position: &mut Vec2,
        intent: Vec2,
    ) -> MoveOutcome {
        let direction = CastDirection::of(intent);
        match self
            .caster
            .sweep(rays, body, *position, direction, intent.length())
        {
            None => {
                *position += intent;
                MoveOutcome {
                    hit: None,
                    applied: intent,
                }
            }
            Some(hit) => {
                let applied = direction.unit() * hit.distance;
                *position += applied;
                MoveOutcome {
                    hit: Some(hit),
                    applied,
                }
            }
        }
    }
}

/// Surface inclination implied by a hit normal against a horizontal motion
/// direction: 0 for flat ground, a quarter turn for a vertical wall.
fn slope_angle(motion: Vec2, normal: Vec2) -> f32 {
    let between = motion.dot(normal).clamp(-1.0, 1.0).acos();
    (FRAC_PI_2 - between).abs()
}
