//! Periphery insertion: grow the triangulation by one vertex fanned onto a boundary arc.
//!
//! Model
//! - The arc for `(vp, vq)` is the forward boundary walk from `vp` to `vq`,
//!   both inclusive; swapping the arguments selects the complementary arc.
//! - The new vertex sits outside the arc: arc centroid pushed away from the
//!   graph centroid by `max(chord / 2, min_distance)`.
//! - It is joined to every arc vertex (fan), the arc's interior leaves the
//!   periphery, and the new vertex takes its place right after `vp`.
//!
//! Code cross-refs: `store::PeripheryRing::{arc, splice}`, `geom2::{centroid, direction_or_unit}`.

use nalgebra::Vector2;
use rand::Rng;

use crate::error::GraphError;
use crate::geom2;
use crate::store::GraphStore;
use crate::vertex::{ColorIndex, VertexId};

/// Outward placement parameters.
#[derive(Clone, Copy, Debug)]
pub struct PlacementCfg {
    /// Lower bound on the offset from the arc centroid.
    pub min_distance: f64,
}

impl Default for PlacementCfg {
    fn default() -> Self {
        Self { min_distance: 80.0 }
    }
}

/// Result of one insertion.
#[derive(Clone, Debug, PartialEq)]
pub struct Insertion {
    pub id: VertexId,
    /// Arc the new vertex was fanned onto, `vp` first.
    pub arc: Vec<VertexId>,
    /// Former boundary vertices that became interior.
    pub enclosed: Vec<VertexId>,
}

impl GraphStore {
    /// Insert a vertex on the boundary arc walking forward from `vp` to `vq`.
    ///
    /// Fails with `InvalidSelection` for `vp == vq` or a non-boundary id, and with
    /// `DegenerateArc` for an arc of fewer than 2 vertices. The store is unchanged on error.
    pub fn insert_on_arc(&mut self, vp: VertexId, vq: VertexId) -> Result<Insertion, GraphError> {
        if vp == vq {
            return Err(GraphError::selection(vp, vq, "vertices must differ"));
        }
        if !self.on_periphery(vp) || !self.on_periphery(vq) {
            return Err(GraphError::selection(
                vp,
                vq,
                "vertices must be on the periphery",
            ));
        }
        let arc = self
            .ring()
            .arc(vp, vq)
            .ok_or(GraphError::selection(vp, vq, "no arc between vertices"))?;
        if arc.len() < 2 {
            return Err(GraphError::DegenerateArc { len: arc.len() });
        }

        let pos = self.outward_position(&arc);
        let id = self.next_id();
        let new = self.push_vertex(pos, ColorIndex::cycled(id));
        for &v in &arc {
            self.insert_edge(new, v);
        }
        let enclosed = self.ring_mut().splice(vp, vq, new);
        tracing::debug!(
            id = new.0,
            arc_len = arc.len(),
            enclosed = enclosed.len(),
            "inserted vertex on arc"
        );
        Ok(Insertion {
            id: new,
            arc,
            enclosed,
        })
    }

    /// Insert on the arc between two distinct boundary vertices drawn uniformly from `rng`.
    pub fn insert_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Insertion, GraphError> {
        let len = self.periphery_len();
        if len < 2 {
            return Err(GraphError::InsufficientBoundary { len });
        }
        let picks = rand::seq::index::sample(rng, len, 2);
        let (i, j) = (picks.index(0), picks.index(1));
        let mut vp = None;
        let mut vq = None;
        for (k, id) in self.ring().iter().enumerate() {
            if k == i {
                vp = Some(id);
            }
            if k == j {
                vq = Some(id);
            }
        }
        match (vp, vq) {
            (Some(vp), Some(vq)) => self.insert_on_arc(vp, vq),
            _ => Err(GraphError::InsufficientBoundary { len }),
        }
    }

    /// Arc centroid pushed away from the graph centroid by `max(chord / 2, min_distance)`.
    fn outward_position(&self, arc: &[VertexId]) -> Vector2<f64> {
        let points: Vec<Vector2<f64>> = arc
            .iter()
            .filter_map(|&id| self.vertex(id).map(|v| v.pos))
            .collect();
        let arc_center = geom2::centroid(points.iter().copied()).unwrap_or_else(Vector2::zeros);
        let graph_center = self.centroid().unwrap_or(arc_center);
        let dir = geom2::direction_or_unit(arc_center - graph_center);
        let half_chord = match (points.first(), points.last()) {
            (Some(&p), Some(&q)) if points.len() > 1 => geom2::distance(p, q) / 2.0,
            _ => 0.0,
        };
        arc_center + dir * half_chord.max(self.placement.min_distance)
    }
}
