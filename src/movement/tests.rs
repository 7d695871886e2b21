//! Movement domain: unit tests for the sweep, resolver, curve, and state.

use bevy::prelude::*;

use super::curve::{CurveError, JumpCurve, Keyframe};
use super::resolver::MotionResolver;
use super::state::CharacterState;
use super::sweep::{BodyShape, CastDirection, ProbeCaster, RayHit, Raycaster};

const EPSILON: f32 = 1e-4;

fn body_24x48() -> BodyShape {
    BodyShape::new(Vec2::new(12.0, 24.0), Vec2::ONE, 2.0).unwrap()
}

fn caster(samples: u32) -> ProbeCaster {
    ProbeCaster::new(samples).unwrap()
}

fn resolver(slope_limit_deg: f32) -> MotionResolver {
    MotionResolver::new(caster(4), slope_limit_deg.to_radians())
}

/// Raycaster that never hits.
struct OpenAir;

impl Raycaster for OpenAir {
    fn cast(&mut self, _: Vec2, _: Vec2, _: f32) -> Option<RayHit> {
        None
    }
}

/// Raycaster that hits at a fixed distance no matter what.
struct AlwaysHit(f32);

impl Raycaster for AlwaysHit {
    fn cast(&mut self, _: Vec2, _: Vec2, _: f32) -> Option<RayHit> {
        Some(RayHit {
            distance: self.0,
            normal: Vec2::Y,
        })
    }
}

/// Raycaster returning one scripted result per probe, in cast order.
struct ScriptedRays {
    results: Vec<Option<RayHit>>,
    cursor: usize,
}

impl ScriptedRays {
    fn new(results: Vec<Option<RayHit>>) -> Self {
        Self { results, cursor: 0 }
    }
}

impl Raycaster for ScriptedRays {
    fn cast(&mut self, _: Vec2, _: Vec2, _: f32) -> Option<RayHit> {
        let result = self.results.get(self.cursor).copied().flatten();
        self.cursor += 1;
        result
    }
}

/// Raycaster recording every probe origin and direction, never hitting.
#[derive(Default)]
struct RecordingRays {
    origins: Vec<Vec2>,
    directions: Vec<Vec2>,
}

impl Raycaster for RecordingRays {
    fn cast(&mut self, origin: Vec2, direction: Vec2, _: f32) -> Option<RayHit> {
        self.origins.push(origin);
        self.directions.push(direction);
        None
    }
}

/// Flat floor at a fixed height below the probe origins; only downward casts
/// can hit.
struct FlatFloor {
    y: f32,
}

impl Raycaster for FlatFloor {
    fn cast(&mut self, origin: Vec2, direction: Vec2, max_distance: f32) -> Option<RayHit> {
        if direction != Vec2::NEG_Y {
            return None;
        }
        let distance = origin.y - self.y;
        (0.0..=max_distance).contains(&distance).then_some(RayHit {
            distance,
            normal: Vec2::Y,
        })
    }
}

/// Horizontal casts hit a surface of the given inclination at a fixed
/// distance; upward casts optionally hit a ceiling.
struct SlopeWorld {
    hit_distance: f32,
    slope_deg: f32,
    ceiling_distance: Option<f32>,
}

impl Raycaster for SlopeWorld {
    fn cast(&mut self, _: Vec2, direction: Vec2, max_distance: f32) -> Option<RayHit> {
        if direction == Vec2::X || direction == Vec2::NEG_X {
            if self.hit_distance <= max_distance {
                let theta = self.slope_deg.to_radians();
                // Normal of a surface rising along the motion direction.
                let normal = Vec2::new(-direction.x * theta.sin(), theta.cos());
                return Some(RayHit {
                    distance: self.hit_distance,
                    normal,
                });
            }
            return None;
        }
        if direction == Vec2::Y {
            if let Some(distance) = self.ceiling_distance {
                if distance <= max_distance {
                    return Some(RayHit {
                        distance,
                        normal: Vec2::NEG_Y,
                    });
                }
            }
        }
        None
    }
}

// ==================== CastDirection Tests ====================

#[test]
fn classification_matches_axis_signs() {
    assert_eq!(CastDirection::of(Vec2::new(3.0, 0.0)), CastDirection::Right);
    assert_eq!(CastDirection::of(Vec2::new(-0.1, 0.0)), CastDirection::Left);
    assert_eq!(CastDirection::of(Vec2::new(0.0, 5.0)), CastDirection::Up);
    assert_eq!(CastDirection::of(Vec2::new(0.0, -5.0)), CastDirection::Down);
}

#[test]
fn zero_displacement_classifies_down() {
    assert_eq!(CastDirection::of(Vec2::ZERO), CastDirection::Down);
}

#[test]
fn diagonal_displacement_resolves_to_vertical() {
    // Legacy order: the vertical sign check wins for diagonal input.
    assert_eq!(CastDirection::of(Vec2::new(1.0, 1.0)), CastDirection::Up);
    assert_eq!(CastDirection::of(Vec2::new(1.0, -1.0)), CastDirection::Down);
    assert_eq!(CastDirection::of(Vec2::new(-2.0, 0.5)), CastDirection::Up);
}

// ==================== BodyShape Tests ====================

#[test]
fn shape_rejects_degenerate_geometry() {
    assert!(BodyShape::new(Vec2::new(-1.0, 24.0), Vec2::ONE, 2.0).is_err());
    assert!(BodyShape::new(Vec2::new(12.0, 24.0), Vec2::ONE, -0.5).is_err());
    assert!(BodyShape::new(Vec2::new(12.0, 24.0), Vec2::new(0.0, 1.0), 2.0).is_err());
    // Skin at or beyond the smaller half-extent inverts the probe lane.
    assert!(BodyShape::new(Vec2::new(12.0, 24.0), Vec2::ONE, 12.0).is_err());
    assert!(BodyShape::new(Vec2::new(12.0, 24.0), Vec2::ONE, 11.9).is_ok());
}

// ==================== ProbeCaster Tests ====================

#[test]
fn sample_count_below_two_is_rejected() {
    assert!(ProbeCaster::new(0).is_err());
    assert!(ProbeCaster::new(1).is_err());
    assert!(ProbeCaster::new(2).is_ok());
}

#[test]
fn down_sweep_probes_the_inset_bottom_edge() {
    let mut rays = RecordingRays::default();
    caster(4).sweep(&mut rays, &body_24x48(), Vec2::ZERO, CastDirection::Down, 10.0);

    assert_eq!(rays.origins.len(), 4);
    let expected_x = [-12.0, -4.0, 4.0, 12.0];
    for (origin, x) in rays.origins.iter().zip(expected_x) {
        assert!((origin.x - x).abs() < EPSILON);
        assert!((origin.y - -26.0).abs() < EPSILON);
    }
    for direction in &rays.directions {
        assert_eq!(*direction, Vec2::NEG_Y);
    }
}

#[test]
fn side_sweep_insets_vertically() {
    let mut rays = RecordingRays::default();
    caster(2).sweep(&mut rays, &body_24x48(), Vec2::ZERO, CastDirection::Left, 10.0);

    assert_eq!(rays.origins.len(), 2);
    assert!((rays.origins[0] - Vec2::new(-14.0, 24.0)).length() < EPSILON);
    assert!((rays.origins[1] - Vec2::new(-14.0, -24.0)).length() < EPSILON);
    assert_eq!(rays.directions[0], Vec2::NEG_X);
}

#[test]
fn scale_stretches_the_probe_lane() {
    let body = BodyShape::new(Vec2::new(12.0, 24.0), Vec2::new(2.0, 1.0), 2.0).unwrap();
    let mut rays = RecordingRays::default();
    caster(2).sweep(&mut rays, &body, Vec2::ZERO, CastDirection::Down, 10.0);

    // Corners push out to x = +-28, then inset by skin * scale.x = 4.
    assert!((rays.origins[0] - Vec2::new(-24.0, -26.0)).length() < EPSILON);
    assert!((rays.origins[1] - Vec2::new(24.0, -26.0)).length() < EPSILON);
}

#[test]
fn closest_hit_wins_across_probes() {
    let far = RayHit {
        distance: 5.0,
        normal: Vec2::Y,
    };
    let near = RayHit {
        distance: 2.0,
        normal: Vec2::new(0.6, 0.8),
    };
    let farther = RayHit {
        distance: 8.0,
        normal: Vec2::X,
    };
    let mut rays = ScriptedRays::new(vec![Some(far), Some(near), Some(farther), None]);

    let hit = caster(4)
        .sweep(&mut rays, &body_24x48(), Vec2::ZERO, CastDirection::Down, 10.0)
        .unwrap();
    assert!((hit.distance - 2.0).abs() < EPSILON);
    assert_eq!(hit.normal, Vec2::new(0.6, 0.8));
}

#[test]
fn tie_break_keeps_lower_sample_index() {
    let first = RayHit {
        distance: 3.0,
        normal: Vec2::Y,
    };
    let second = RayHit {
        distance: 3.0,
        normal: Vec2::X,
    };
    let mut rays = ScriptedRays::new(vec![Some(first), Some(second)]);

    let hit = caster(2)
        .sweep(&mut rays, &body_24x48(), Vec2::ZERO, CastDirection::Down, 10.0)
        .unwrap();
    assert_eq!(hit.normal, Vec2::Y);
}

#[test]
fn all_probes_clear_is_no_hit() {
    let mut rays = OpenAir;
    let hit = caster(4).sweep(&mut rays, &body_24x48(), Vec2::ZERO, CastDirection::Up, 10.0);
    assert!(hit.is_none());
}

#[test]
fn zero_max_distance_never_hits() {
    let mut rays = AlwaysHit(0.0);
    let hit = caster(4).sweep(&mut rays, &body_24x48(), Vec2::ZERO, CastDirection::Down, 0.0);
    assert!(hit.is_none());
}

// ==================== MotionResolver Tests ====================

#[test]
fn clear_path_applies_full_intent() {
    let mut position = Vec2::new(3.0, 7.0);
    let intent = Vec2::new(7.5, 0.0);
    let outcome = resolver(50.0).resolve(&mut OpenAir, &body_24x48(), &mut position, intent);

    assert!(outcome.hit.is_none());
    assert!((position - Vec2::new(10.5, 7.0)).length() < EPSILON);
    assert!((outcome.applied - intent).length() < EPSILON);
}

#[test]
fn obstruction_clamps_displacement_to_contact() {
    // Probe origins sit at y = -26; a floor at -30 is 4 below them.
    let mut floor = FlatFloor { y: -30.0 };
    let mut position = Vec2::ZERO;
    let outcome = resolver(50.0).resolve(
        &mut floor,
        &body_24x48(),
        &mut position,
        Vec2::new(0.0, -10.0),
    );

    let hit = outcome.hit.unwrap();
    assert!((hit.distance - 4.0).abs() < EPSILON);
    assert!((position.y - -4.0).abs() < EPSILON);
    assert!((outcome.applied - Vec2::new(0.0, -4.0)).length() < EPSILON);
}

#[test]
fn vertical_rise_stops_at_ceiling_without_correction() {
    let mut world = SlopeWorld {
        hit_distance: 4.0,
        slope_deg: 20.0,
        ceiling_distance: Some(2.0),
    };
    let mut position = Vec2::ZERO;
    let outcome = resolver(50.0).resolve(
        &mut world,
        &body_24x48(),
        &mut position,
        Vec2::new(0.0, 5.0),
    );

    // Slope correction never applies to vertical intents.
    assert!((position - Vec2::new(0.0, 2.0)).length() < EPSILON);
    assert!((outcome.applied.y - 2.0).abs() < EPSILON);
}

#[test]
fn gentle_slope_climbs_and_completes() {
    let mut world = SlopeWorld {
        hit_distance: 4.0,
        slope_deg: 20.0,
        ceiling_distance: None,
    };
    let mut position = Vec2::ZERO;
    let outcome = resolver(50.0).resolve(
        &mut world,
        &body_24x48(),
        &mut position,
        Vec2::new(10.0, 0.0),
    );

    // Partial step of 4, then a vertical step of 6 * tan(20 deg), then the
    // remaining 6 horizontally.
    let expected_rise = 6.0 * 20f32.to_radians().tan();
    assert!((position.x - 10.0).abs() < EPSILON);
    assert!((position.y - expected_rise).abs() < EPSILON);

    // The outcome still carries the original horizontal hit.
    let hit = outcome.hit.unwrap();
    assert!((hit.distance - 4.0).abs() < EPSILON);
}

#[test]
fn gentle_slope_climbs_leftward_too() {
    let mut world = SlopeWorld {
        hit_distance: 4.0,
        slope_deg: 20.0,
        ceiling_distance: None,
    };
    let mut position = Vec2::ZERO;
    resolver(50.0).resolve(
        &mut world,
        &body_24x48(),
        &mut position,
        Vec2::new(-10.0, 0.0),
    );

    let expected_rise = 6.0 * 20f32.to_radians().tan();
    assert!((position.x - -10.0).abs() < EPSILON);
    assert!((position.y - expected_rise).abs() < EPSILON);
}

#[test]
fn blocked_climb_stops_at_the_partial_step() {
    let mut world = SlopeWorld {
        hit_distance: 4.0,
        slope_deg: 20.0,
        ceiling_distance: Some(0.5),
    };
    let mut position = Vec2::ZERO;
    let outcome = resolver(50.0).resolve(
        &mut world,
        &body_24x48(),
        &mut position,
        Vec2::new(10.0, 0.0),
    );

    // The compensation probe hit a ceiling: the remaining 6 horizontal units
    // are discarded; the compensation's own partial rise stays applied.
    assert!((position.x - 4.0).abs() < EPSILON);
    assert!((position.y - 0.5).abs() < EPSILON);
    let hit = outcome.hit.unwrap();
    assert!((hit.distance - 4.0).abs() < EPSILON);
}

#[test]
fn steep_slope_beyond_limit_is_a_wall() {
    let mut world = SlopeWorld {
        hit_distance: 4.0,
        slope_deg: 60.0,
        ceiling_distance: None,
    };
    let mut position = Vec2::ZERO;
    resolver(50.0).resolve(
        &mut world,
        &body_24x48(),
        &mut position,
        Vec2::new(10.0, 0.0),
    );

    assert!((position.x - 4.0).abs() < EPSILON);
    assert!(position.y.abs() < EPSILON);
}

#[test]
fn vertical_wall_never_climbs() {
    // slope_deg 90 yields a normal exactly opposing the motion.
    let mut world = SlopeWorld {
        hit_distance: 4.0,
        slope_deg: 90.0,
        ceiling_distance: None,
    };
    let mut position = Vec2::ZERO;
    resolver(50.0).resolve(
        &mut world,
        &body_24x48(),
        &mut position,
        Vec2::new(10.0, 0.0),
    );

    assert!((position.x - 4.0).abs() < EPSILON);
    assert!(position.y.abs() < EPSILON);
}

#[test]
fn zero_intent_probes_down_without_moving() {
    let mut rays = AlwaysHit(0.0);
    let mut position = Vec2::new(5.0, 5.0);
    let outcome = resolver(50.0).resolve(&mut rays, &body_24x48(), &mut position, Vec2::ZERO);

    assert!(outcome.hit.is_none());
    assert_eq!(position, Vec2::new(5.0, 5.0));
}

#[test]
fn grounding_is_idempotent_against_a_resting_floor() {
    // Floor exactly at the probe origins: every frame hits at distance 0.
    let mut floor = FlatFloor { y: -26.0 };
    let resolver = resolver(50.0);
    let body = body_24x48();
    let mut position = Vec2::ZERO;
    let mut state = CharacterState::airborne(2);
    let mut landings = 0;

    for _ in 0..5 {
        let dy = -9.3;
        let outcome = resolver.resolve(&mut floor, &body, &mut position, Vec2::new(0.0, dy));
        if state.settle(outcome.hit.is_some(), dy, 2) {
            landings += 1;
        }
        assert!(position.length() < EPSILON);
        assert!(state.grounded);
    }

    assert_eq!(landings, 1);
}

// ==================== CharacterState Tests ====================

#[test]
fn spawn_state_is_airborne_with_one_charge_spent() {
    let state = CharacterState::airborne(3);
    assert!(!state.grounded);
    assert!(!state.jumping);
    assert_eq!(state.jumps_left, 2);
}

#[test]
fn jump_charges_exhaust_until_landing() {
    let mut state = CharacterState::airborne(3);

    // The airborne start already spent one of the three charges.
    assert!(state.try_jump());
    assert!(state.try_jump());
    assert!(!state.try_jump());

    // Landing restores the full budget.
    assert!(state.settle(true, -1.0, 3));
    assert_eq!(state.jumps_left, 3);
    assert!(state.try_jump());
    assert!(state.try_jump());
    assert!(state.try_jump());
    assert!(!state.try_jump());
}

#[test]
fn try_jump_resets_the_arc_clock() {
    let mut state = CharacterState::airborne(2);
    state.jump_elapsed = 0.4;
    assert!(state.try_jump());
    assert!(state.jumping);
    assert!(!state.grounded);
    assert_eq!(state.jump_elapsed, 0.0);
}

#[test]
fn landing_fires_once_across_grounded_frames() {
    let mut state = CharacterState::airborne(2);

    assert!(state.settle(true, -0.5, 2));
    for _ in 0..4 {
        assert!(!state.settle(true, -0.5, 2));
        assert!(state.grounded);
    }
}

#[test]
fn ceiling_hit_while_rising_does_not_ground() {
    let mut state = CharacterState::airborne(2);
    assert!(state.try_jump());

    assert!(!state.settle(true, 2.0, 2));
    assert!(!state.grounded);
    assert!(state.jumping);
}

#[test]
fn landing_overrides_a_running_jump_arc() {
    let mut state = CharacterState::airborne(2);
    assert!(state.try_jump());
    state.jump_elapsed = 0.2;

    assert!(state.settle(true, -0.1, 2));
    assert!(state.grounded);
    assert!(!state.jumping);
}

#[test]
fn jump_expires_after_the_curve_ends() {
    let mut state = CharacterState::airborne(2);
    assert!(state.try_jump());

    state.jump_elapsed = 0.5;
    state.expire_jump(0.6);
    assert!(state.jumping);

    state.jump_elapsed = 0.7;
    state.expire_jump(0.6);
    assert!(!state.jumping);
    assert!(!state.grounded);
}

// ==================== JumpCurve Tests ====================

#[test]
fn curve_samples_interpolate_linearly() {
    let curve = JumpCurve::new(vec![
        Keyframe {
            time: 0.0,
            height: 0.0,
        },
        Keyframe {
            time: 1.0,
            height: 10.0,
        },
    ])
    .unwrap();

    assert!((curve.sample(0.25) - 2.5).abs() < EPSILON);
    assert!((curve.sample(0.5) - 5.0).abs() < EPSILON);
}

#[test]
fn curve_clamps_outside_the_keyframe_range() {
    let curve = JumpCurve::default();
    assert!((curve.sample(-1.0) - curve.sample(0.0)).abs() < EPSILON);
    assert!((curve.sample(99.0) - curve.sample(curve.final_time())).abs() < EPSILON);
}

#[test]
fn curve_delta_reverses_across_the_apex() {
    let curve = JumpCurve::default();
    let rising = curve.sample(0.1) - curve.sample(0.05);
    let falling = curve.sample(0.4) - curve.sample(0.35);
    assert!(rising > 0.0);
    assert!(falling < 0.0);
}

#[test]
fn curve_reports_its_final_time() {
    assert!((JumpCurve::default().final_time() - 0.6).abs() < EPSILON);
}

#[test]
fn curve_rejects_malformed_keyframes() {
    assert_eq!(
        JumpCurve::new(vec![Keyframe {
            time: 0.0,
            height: 0.0
        }]),
        Err(CurveError::TooFewKeys(1))
    );

    assert_eq!(
        JumpCurve::new(vec![
            Keyframe {
                time: -0.5,
                height: 0.0
            },
            Keyframe {
                time: 0.5,
                height: 1.0
            },
        ]),
        Err(CurveError::NegativeTime(-0.5))
    );

    assert!(matches!(
        JumpCurve::new(vec![
            Keyframe {
                time: 0.0,
                height: 0.0
            },
            Keyframe {
                time: 0.5,
                height: 1.0
            },
            Keyframe {
                time: 0.5,
                height: 2.0
            },
        ]),
        Err(CurveError::NonIncreasingTime { index: 2, .. })
    ));
}
