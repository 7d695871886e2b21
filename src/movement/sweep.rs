//! Movement domain: directional multi-probe sweeps.
//!
//! A single ray at the body's center misses ledge edges and thin geometry;
//! sweeping several parallel probes across the body's leading edge
//! approximates the full box silhouette against irregular terrain without
//! polygon-vs-polygon collision.

use bevy::prelude::*;

/// Cardinal direction a sweep faces. Selects which box edge is probed and
/// which axis the probes travel along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastDirection {
    Left,
    Right,
    Up,
    Down,
}

impl CastDirection {
    /// Classify a displacement vector into the direction its probes face.
    ///
    /// A zero vector classifies `Down`: standing still is still a ground
    /// probe. For a diagonal vector the vertical component wins; callers are
    /// expected to decompose movement into single-axis displacements.
    pub fn of(displacement: Vec2) -> Self {
        if displacement.y > 0.0 {
            CastDirection::Up
        } else if displacement.y < 0.0 {
            CastDirection::Down
        } else if displacement.x > 0.0 {
            CastDirection::Right
        } else if displacement.x < 0.0 {
            CastDirection::Left
        } else {
            CastDirection::Down
        }
    }

    /// The axis-aligned unit vector probes travel along.
    pub fn unit(self) -> Vec2 {
        match self {
            CastDirection::Left => Vec2::NEG_X,
            CastDirection::Right => Vec2::X,
            CastDirection::Up => Vec2::Y,
            CastDirection::Down => Vec2::NEG_Y,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, CastDirection::Left | CastDirection::Right)
    }
}

/// Probe geometry of an axis-aligned body: half-extents, per-axis scale, and
/// a skin inset that keeps probe origins strictly inside the silhouette so
/// rays never graze adjacent geometry at an exact corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyShape {
    half_extents: Vec2,
    scale: Vec2,
    skin: f32,
}

/// Rejected body geometry. Shapes are validated once at construction so the
/// per-frame sweep never has to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeError {
    NegativeHalfExtents(Vec2),
    NonPositiveScale(Vec2),
    NegativeSkin(f32),
    /// Skin inset at or beyond a half-extent inverts the probe lane.
    SkinSwallowsBody { skin: f32, half_extent: f32 },
}

impl std::fmt::Display for ShapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeError::NegativeHalfExtents(half) => {
                write!(f, "half-extents must be non-negative, got {:?}", half)
            }
            ShapeError::NonPositiveScale(scale) => {
                write!(f, "scale must be positive on both axes, got {:?}", scale)
            }
            ShapeError::NegativeSkin(skin) => {
                write!(f, "skin width must be non-negative, got {}", skin)
            }
            ShapeError::SkinSwallowsBody { skin, half_extent } => {
                write!(
                    f,
                    "skin width {} must be smaller than the half-extent {}",
                    skin, half_extent
                )
            }
        }
    }
}

impl BodyShape {
    pub fn new(half_extents: Vec2, scale: Vec2, skin: f32) -> Result<Self, ShapeError> {
        if half_extents.x < 0.0 || half_extents.y < 0.0 {
            return Err(ShapeError::NegativeHalfExtents(half_extents));
        }
        if scale.x <= 0.0 || scale.y <= 0.0 {
            return Err(ShapeError::NonPositiveScale(scale));
        }
        if skin < 0.0 {
            return Err(ShapeError::NegativeSkin(skin));
        }
        let min_half = half_extents.x.min(half_extents.y);
        if skin >= min_half {
            return Err(ShapeError::SkinSwallowsBody {
                skin,
                half_extent: min_half,
            });
        }
        Ok(Self {
            half_extents,
            scale,
            skin,
        })
    }

    pub fn half_extents(&self) -> Vec2 {
        self.half_extents
    }

    /// Corner position for the given axis signs, pushed out by the skin and
    /// scaled per axis.
    fn corner(&self, center: Vec2, sign_x: f32, sign_y: f32) -> Vec2 {
        center
            + Vec2::new(
                sign_x * (self.half_extents.x + self.skin) * self.scale.x,
                sign_y * (self.half_extents.y + self.skin) * self.scale.y,
            )
    }

    /// Endpoints of the leading edge for `direction`, inset along the
    /// perpendicular axis by the skin so probes start inside the silhouette.
    pub(crate) fn leading_edge(&self, center: Vec2, direction: CastDirection) -> (Vec2, Vec2) {
        let (mut start, mut end) = match direction {
            CastDirection::Left => (self.corner(center, -1.0, 1.0), self.corner(center, -1.0, -1.0)),
            CastDirection::Right => (self.corner(center, 1.0, 1.0), self.corner(center, 1.0, -1.0)),
            CastDirection::Up => (self.corner(center, -1.0, 1.0), self.corner(center, 1.0, 1.0)),
            CastDirection::Down => {
                (self.corner(center, -1.0, -1.0), self.corner(center, 1.0, -1.0))
            }
        };

        if direction.is_horizontal() {
            start.y -= self.skin * self.scale.y;
            end.y += self.skin * self.scale.y;
        } else {
            start.x += self.skin * self.scale.x;
            end.x -= self.skin * self.scale.x;
        }

        (start, end)
    }
}

/// One ray's nearest obstruction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub distance: f32,
    /// Unit surface normal at the hit point.
    pub normal: Vec2,
}

/// Nearest-obstruction query the sweep is built on. Implementations must
/// report hits only within `max_distance`.
///
/// Injected as a capability so the kernel runs against synthetic geometry in
/// tests and against the spatial query pipeline in game.
pub trait Raycaster {
    fn cast(&mut self, origin: Vec2, direction: Vec2, max_distance: f32) -> Option<RayHit>;
}

/// Nearest obstruction across all probes of one directional sweep, as
/// opposed to a single raw ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepHit {
    pub distance: f32,
    pub normal: Vec2,
}

/// Sample-count configuration rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleCountError(pub u32);

impl std::fmt::Display for SampleCountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "probe sample count must be at least {}, got {}",
            ProbeCaster::MIN_SAMPLES,
            self.0
        )
    }
}

/// Fires `samples` evenly spaced parallel probes along a body's leading edge
/// and keeps the closest obstruction.
///
/// Stateless between calls; one caster can serve every sweep of an actor.
#[derive(Debug, Clone, Copy)]
pub struct ProbeCaster {
    samples: u32,
}

impl Default for ProbeCaster {
    fn default() -> Self {
        Self { samples: 4 }
    }
}

impl ProbeCaster {
    /// Below two samples there is no interpolation segment.
    pub const MIN_SAMPLES: u32 = 2;

    pub fn new(samples: u32) -> Result<Self, SampleCountError> {
        if samples < Self::MIN_SAMPLES {
            return Err(SampleCountError(samples));
        }
        Ok(Self { samples })
    }

    pub fn samples(&self) -> u32 {
        self.samples
    }

    /// Sweep the body's leading edge for `direction`, returning the closest
    /// obstruction across all probes, or `None` when every probe runs clear.
    ///
    /// Ties between probes resolve to the lowest sample index.
    pub fn sweep<R: Raycaster>(
        &self,
        rays: &mut R,
        body: &BodyShape,
        center: Vec2,
        direction: CastDirection,
        max_distance: f32,
    ) -> Option<SweepHit> {
        // A zero-length ray is degenerate and can never obstruct.
        if max_distance <= 0.0 {
            return None;
        }

        let (start, end) = body.leading_edge(center, direction);
        let unit = direction.unit();

        let mut closest: Option<SweepHit> = None;
        for i in 0..self.samples {
            let t = i as f32 / (self.samples - 1) as f32;
            let origin = start.lerp(end, t);

            let Some(hit) = rays.cast(origin, unit, max_distance) else {
                continue;
            };

            // Strict comparison keeps the first probe on a tie.
            if closest.is_none_or(|c| hit.distance < c.distance) {
                closest = Some(SweepHit {
                    distance: hit.distance,
                    normal: hit.normal,
                });
            }
        }

        closest
    }
}
