//! Layout engine: regular boundary circle plus spring/repulsion relaxation inside.
//!
//! Model
//! - `L` is the mean edge length (`default_edge_length` without edges).
//! - Periphery vertex `i` of `n` goes to angle `2π·i/n` on a circle of radius
//!   `max(min_radius, L·n/2π)` around the graph centroid, in boundary order.
//! - Interior vertices then take `iterations` damped Euler steps under
//!   all-pairs repulsion `L²/d²` and springs `(d − L)·spring` on interior-interior edges.
//!
//! Cost is O(iterations · interior²). Beyond `interior_warn` interior vertices a
//! warning is logged; a grid-bucket neighbor search would be the next step.

use nalgebra::Vector2;

use crate::geom2;
use crate::store::GraphStore;

/// Relaxation parameters.
#[derive(Clone, Copy, Debug)]
pub struct LayoutCfg {
    pub iterations: usize,
    /// Euler step applied to the accumulated force.
    pub step: f64,
    /// Spring constant for interior edges.
    pub spring: f64,
    pub min_radius: f64,
    /// Target length when the graph has no edges.
    pub default_edge_length: f64,
    pub interior_warn: usize,
}

impl Default for LayoutCfg {
    fn default() -> Self {
        Self {
            iterations: 50,
            step: 0.1,
            spring: 0.1,
            min_radius: 150.0,
            default_edge_length: 100.0,
            interior_warn: 500,
        }
    }
}

impl GraphStore {
    /// Mean Euclidean edge length, or `default_edge_length` without edges.
    pub fn average_edge_length(&self) -> f64 {
        let mut total = 0.0;
        let mut n = 0usize;
        for e in self.edges() {
            if let (Some(a), Some(b)) = (self.vertex(e.a()), self.vertex(e.b())) {
                total += geom2::distance(a.pos, b.pos);
                n += 1;
            }
        }
        if n == 0 {
            self.layout.default_edge_length
        } else {
            total / n as f64
        }
    }

    /// Reposition the periphery on a circle and relax the interior. No-op below 3 vertices.
    pub fn redraw(&mut self) {
        if self.vertex_count() < 3 {
            return;
        }
        let Some(center) = self.centroid() else {
            return;
        };
        let cfg = self.layout;
        let avg = self.average_edge_length();
        let boundary = self.periphery();
        tracing::info!(
            vertices = self.vertex_count(),
            periphery = boundary.len(),
            avg_edge = avg,
            "redrawing layout"
        );

        let n = boundary.len();
        if n > 0 {
            let radius = cfg
                .min_radius
                .max(avg * n as f64 / std::f64::consts::TAU);
            for (i, &id) in boundary.iter().enumerate() {
                if let Some(v) = self.vertex_mut(id) {
                    v.pos = geom2::on_circle(center, radius, i, n);
                }
            }
        }

        self.relax_interior(avg, cfg);
    }

    fn relax_interior(&mut self, avg: f64, cfg: LayoutCfg) {
        let interior: Vec<_> = self.interior().collect();
        if interior.is_empty() {
            return;
        }
        if interior.len() > cfg.interior_warn {
            tracing::warn!(
                interior = interior.len(),
                "all-pairs relaxation over a large interior"
            );
        }
        // Local index per interior vertex, addressed by id slot.
        let mut local: Vec<Option<usize>> = vec![None; self.vertex_count()];
        for (k, id) in interior.iter().enumerate() {
            if let Some(slot) = id.slot() {
                local[slot] = Some(k);
            }
        }
        let springs: Vec<(usize, usize)> = self
            .edges()
            .filter_map(|e| {
                let a = local.get(e.a().slot()?).copied().flatten()?;
                let b = local.get(e.b().slot()?).copied().flatten()?;
                Some((a, b))
            })
            .collect();
        let mut pos: Vec<Vector2<f64>> = interior
            .iter()
            .map(|&id| self.vertex(id).map_or_else(Vector2::zeros, |v| v.pos))
            .collect();

        let k2 = avg * avg;
        let mut force = vec![Vector2::<f64>::zeros(); pos.len()];
        for _ in 0..cfg.iterations {
            force.iter_mut().for_each(|f| *f = Vector2::zeros());
            for i in 0..pos.len() {
                for j in (i + 1)..pos.len() {
                    let delta = pos[i] - pos[j];
                    let d = delta.norm();
                    if d > 0.0 {
                        let push = delta * (k2 / (d * d) / d);
                        force[i] += push;
                        force[j] -= push;
                    }
                }
            }
            for &(a, b) in &springs {
                let delta = pos[b] - pos[a];
                let d = delta.norm();
                if d > 0.0 {
                    let pull = delta * ((d - avg) * cfg.spring / d);
                    force[a] += pull;
                    force[b] -= pull;
                }
            }
            for (p, f) in pos.iter_mut().zip(&force) {
                *p += f * cfg.step;
            }
        }

        for (id, p) in interior.into_iter().zip(pos) {
            if let Some(v) = self.vertex_mut(id) {
                v.pos = p;
            }
        }
    }
}
