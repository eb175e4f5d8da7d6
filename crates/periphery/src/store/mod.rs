//! Graph storage: vertex arena, undirected edge set, periphery ring.
//!
//! Purpose
//! - Own all graph state and expose the mutation primitives used by insertion
//!   and layout (push vertex, insert edge, splice periphery).
//! - Give renderers read-only snapshot access (vertices, edges, periphery,
//!   bounding box) plus small queries a UI needs (hit test, visible prefix).
//!
//! Invariants
//! - Ids are dense from 1; `next_id() == vertex_count() + 1`; vertices are never removed.
//! - Every edge endpoint exists; no self-loops; no duplicates (canonical `Edge`).
//! - The periphery is a subset of the vertex ids with no repeats, and has ≥3 ids
//!   whenever there are ≥3 vertices.
//!
//! Code cross-refs: `ring::PeripheryRing`, `crate::insert`, `crate::layout`.

mod ring;

pub use ring::{PeripheryRing, RingIter};

use std::collections::BTreeSet;

use nalgebra::{vector, Vector2};

use crate::error::GraphError;
use crate::geom2::{self, BoundingBox};
use crate::insert::PlacementCfg;
use crate::layout::LayoutCfg;
use crate::vertex::{ColorIndex, Vertex, VertexId};

/// Undirected edge, stored smaller id first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge(VertexId, VertexId);

impl Edge {
    /// Canonical edge; `None` for a self-loop.
    pub fn new(a: VertexId, b: VertexId) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self(a, b)),
            std::cmp::Ordering::Greater => Some(Self(b, a)),
            std::cmp::Ordering::Equal => None,
        }
    }

    #[inline]
    pub fn a(&self) -> VertexId {
        self.0
    }

    #[inline]
    pub fn b(&self) -> VertexId {
        self.1
    }
}

/// Seed triangle positions for ids 1, 2, 3 (clockwise on screen).
const SEED_TRIANGLE: [(f64, f64); 3] = [(400.0, 200.0), (250.0, 450.0), (550.0, 450.0)];

/// Planar triangulated graph grown by periphery insertion.
#[derive(Clone, Debug, Default)]
pub struct GraphStore {
    vertices: Vec<Vertex>,
    edges: BTreeSet<Edge>,
    ring: PeripheryRing,
    pub(crate) placement: PlacementCfg,
    pub(crate) layout: LayoutCfg,
}

impl GraphStore {
    /// Empty store with default placement and layout parameters.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cfg(placement: PlacementCfg, layout: LayoutCfg) -> Self {
        Self {
            placement,
            layout,
            ..Self::default()
        }
    }

    /// Reset to the triangle 1-2-3 with periphery `[1, 2, 3]`.
    pub fn start_basic_graph(&mut self) {
        self.clear();
        for (k, &(x, y)) in SEED_TRIANGLE.iter().enumerate() {
            let id = VertexId(k + 1);
            self.push_vertex(vector![x, y], ColorIndex::cycled(id));
        }
        let (v1, v2, v3) = (VertexId(1), VertexId(2), VertexId(3));
        self.insert_edge(v1, v2);
        self.insert_edge(v2, v3);
        self.insert_edge(v3, v1);
        self.ring = PeripheryRing::from_cycle(&[v1, v2, v3]);
        tracing::info!("started basic graph with triangle V1-V2-V3");
    }

    fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        self.ring = PeripheryRing::default();
    }

    // --- read access -------------------------------------------------------

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn periphery_len(&self) -> usize {
        self.ring.len()
    }

    /// Id the next inserted vertex will receive.
    #[inline]
    pub fn next_id(&self) -> VertexId {
        VertexId(self.vertices.len() + 1)
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.slot()?)
    }

    #[inline]
    pub fn contains(&self, id: VertexId) -> bool {
        self.vertex(id).is_some()
    }

    /// Vertices in id order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertices.iter()
    }

    /// Vertices with `id <= limit`; all of them for `None`.
    pub fn visible(&self, limit: Option<usize>) -> impl Iterator<Item = &Vertex> + '_ {
        let n = limit.map_or(self.vertices.len(), |m| m.min(self.vertices.len()));
        self.vertices[..n].iter()
    }

    /// Edges in canonical order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().copied()
    }

    pub fn has_edge(&self, a: VertexId, b: VertexId) -> bool {
        Edge::new(a, b).is_some_and(|e| self.edges.contains(&e))
    }

    #[inline]
    pub fn ring(&self) -> &PeripheryRing {
        &self.ring
    }

    /// Periphery in boundary order, starting at the ring head.
    pub fn periphery(&self) -> Vec<VertexId> {
        self.ring.iter().collect()
    }

    #[inline]
    pub fn on_periphery(&self, id: VertexId) -> bool {
        self.ring.contains(id)
    }

    /// Non-boundary vertex ids in id order.
    pub fn interior(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices
            .iter()
            .map(|v| v.id)
            .filter(|&id| !self.ring.contains(id))
    }

    /// Mean position of all vertices.
    pub fn centroid(&self) -> Option<Vector2<f64>> {
        geom2::centroid(self.vertices.iter().map(|v| v.pos))
    }

    /// `(min_x, min_y, width, height)` over all positions; a fixed default view when empty.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(self.vertices.iter().map(|v| v.pos)).unwrap_or_default()
    }

    /// Closest vertex within `radius` of `point`, restricted to the visible prefix.
    pub fn vertex_near(
        &self,
        point: Vector2<f64>,
        radius: f64,
        limit: Option<usize>,
    ) -> Option<VertexId> {
        self.visible(limit)
            .map(|v| (v.id, geom2::distance(v.pos, point)))
            .filter(|&(_, d)| d <= radius)
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(id, _)| id)
    }

    // --- colors ------------------------------------------------------------

    pub fn get_color(&self, id: VertexId) -> Result<ColorIndex, GraphError> {
        self.vertex(id)
            .map(|v| v.color)
            .ok_or(GraphError::UnknownVertex { id })
    }

    /// Assign palette slot `index` (1..=4). Out-of-range indices leave the vertex untouched.
    pub fn set_color(&mut self, id: VertexId, index: u8) -> Result<(), GraphError> {
        let color = ColorIndex::new(index)?;
        let v = self
            .vertex_mut(id)
            .ok_or(GraphError::UnknownVertex { id })?;
        v.color = color;
        Ok(())
    }

    // --- mutation primitives ------------------------------------------------

    pub(crate) fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex> {
        self.vertices.get_mut(id.slot()?)
    }

    pub(crate) fn vertices_mut(&mut self) -> impl Iterator<Item = &mut Vertex> + '_ {
        self.vertices.iter_mut()
    }

    /// Append a vertex under `next_id()`.
    pub(crate) fn push_vertex(&mut self, pos: Vector2<f64>, color: ColorIndex) -> VertexId {
        let id = self.next_id();
        self.vertices.push(Vertex::new(id, pos, color));
        id
    }

    /// Insert the undirected edge `{a, b}`; false for self-loops, unknown ids, or duplicates.
    pub(crate) fn insert_edge(&mut self, a: VertexId, b: VertexId) -> bool {
        if !self.contains(a) || !self.contains(b) {
            return false;
        }
        match Edge::new(a, b) {
            Some(e) => self.edges.insert(e),
            None => false,
        }
    }

    #[inline]
    pub(crate) fn ring_mut(&mut self) -> &mut PeripheryRing {
        &mut self.ring
    }

    #[cfg(test)]
    pub(crate) fn set_ring(&mut self, ring: PeripheryRing) {
        self.ring = ring;
    }

    /// Edge insert that skips the endpoint existence check.
    #[cfg(test)]
    pub(crate) fn insert_edge_unchecked(&mut self, a: VertexId, b: VertexId) -> bool {
        Edge::new(a, b).is_some_and(|e| self.edges.insert(e))
    }
}
