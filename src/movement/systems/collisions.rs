//! Movement domain: spatial-query ray provider for the sweep kernel.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::resources::{ProbeSegment, ProbeTrace};
use crate::movement::sweep::{RayHit, Raycaster};

/// `Raycaster` over the avian2d spatial query pipeline, filtered to the
/// layers that block movement.
pub(crate) struct SpatialRays<'a, 'w, 's> {
    query: &'a SpatialQuery<'w, 's>,
    filter: SpatialQueryFilter,
}

impl<'a, 'w, 's> SpatialRays<'a, 'w, 's> {
    pub(crate) fn new(query: &'a SpatialQuery<'w, 's>, filter: SpatialQueryFilter) -> Self {
        Self { query, filter }
    }
}

impl Raycaster for SpatialRays<'_, '_, '_> {
    fn cast(&mut self, origin: Vec2, direction: Vec2, max_distance: f32) -> Option<RayHit> {
        let Ok(direction) = Dir2::new(direction) else {
            return None;
        };
        self.query
            .cast_ray(origin, direction, max_distance, true, &self.filter)
            .map(|hit| RayHit {
                distance: hit.distance,
                normal: hit.normal,
            })
    }
}

/// Wrapper recording every probe segment so the debug overlay can draw the
/// frame's rays.
pub(crate) struct TracedRays<'a, R> {
    inner: R,
    trace: &'a mut ProbeTrace,
}

impl<'a, R> TracedRays<'a, R> {
    pub(crate) fn new(inner: R, trace: &'a mut ProbeTrace) -> Self {
        Self { inner, trace }
    }
}

impl<R: Raycaster> Raycaster for TracedRays<'_, R> {
    fn cast(&mut self, origin: Vec2, direction: Vec2, max_distance: f32) -> Option<RayHit> {
        let hit = self.inner.cast(origin, direction, max_distance);
        self.trace.segments.push(ProbeSegment {
            origin,
            direction,
            length: hit.map_or(max_distance, |h| h.distance),
            hit: hit.is_some(),
        });
        hit
    }
}
