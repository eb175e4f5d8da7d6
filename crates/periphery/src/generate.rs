//! Bulk generation for scale testing, and distance-ring coloring.
//!
//! Determinism: randomness comes only from the caller's `Rng`; a seeded
//! `StdRng` reproduces the same topology.

use rand::Rng;

use crate::diagnostics::Statistics;
use crate::error::GraphError;
use crate::geom2;
use crate::store::GraphStore;
use crate::vertex::ColorIndex;

/// Batching for `generate`.
#[derive(Clone, Copy, Debug)]
pub struct GenerateCfg {
    /// Upper bound on the batch size; the batch is `min(max_batch, target / 20)`, at least 1.
    pub max_batch: usize,
    /// Redraw after this many batches.
    pub batches_per_redraw: usize,
}

impl Default for GenerateCfg {
    fn default() -> Self {
        Self {
            max_batch: 50,
            batches_per_redraw: 4,
        }
    }
}

/// Ring coloring for large graphs.
#[derive(Clone, Copy, Debug)]
pub struct ScaleCfg {
    /// Minimum vertex count before recoloring applies.
    pub threshold: usize,
    /// Ring boundaries (distance from centroid) for colors 1, 2, 3; beyond is color 4.
    pub rings: [f64; 3],
}

impl Default for ScaleCfg {
    fn default() -> Self {
        Self {
            threshold: 1000,
            rings: [100.0, 200.0, 300.0],
        }
    }
}

impl ScaleCfg {
    fn color_at(&self, dist: f64) -> ColorIndex {
        let k = self.rings.iter().take_while(|&&r| dist >= r).count();
        ColorIndex::saturating(k as u8 + 1)
    }
}

impl GraphStore {
    /// Reset to the triangle and grow to `target` vertices by random insertion.
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        target: usize,
        rng: &mut R,
    ) -> Result<Statistics, GraphError> {
        self.generate_with_cfg(target, rng, GenerateCfg::default())
    }

    pub fn generate_with_cfg<R: Rng + ?Sized>(
        &mut self,
        target: usize,
        rng: &mut R,
        cfg: GenerateCfg,
    ) -> Result<Statistics, GraphError> {
        tracing::info!(count = target, "generating graph");
        self.start_basic_graph();
        let batch = cfg.max_batch.min(target / 20).max(1);
        let redraw_every = batch * cfg.batches_per_redraw.max(1);
        for i in 4..=target {
            if i % batch == 0 {
                tracing::debug!(done = i, count = target, "generation progress");
                if i % redraw_every == 0 {
                    self.redraw();
                }
            }
            self.insert_random(rng)?;
        }
        tracing::info!(
            vertices = self.vertex_count(),
            edges = self.edge_count(),
            "generation complete"
        );
        Ok(self.statistics())
    }

    /// Recolor by distance from the centroid with the default rings.
    pub fn optimize_for_scale(&mut self) -> bool {
        self.optimize_for_scale_with(ScaleCfg::default())
    }

    /// Recolor by distance rings once the graph reaches `cfg.threshold`. Topology is untouched.
    pub fn optimize_for_scale_with(&mut self, cfg: ScaleCfg) -> bool {
        if self.vertex_count() < cfg.threshold {
            return false;
        }
        let Some(center) = self.centroid() else {
            return false;
        };
        for v in self.vertices_mut() {
            v.color = cfg.color_at(geom2::distance(v.pos, center));
        }
        tracing::info!(vertices = self.vertex_count(), "applied ring coloring");
        true
    }
}
