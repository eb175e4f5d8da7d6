//! Curated surface for renderers and drivers.
//!
//! Commands mutate the store in place; snapshots are read-only views that stay
//! valid until the next command.

pub use crate::diagnostics::{DegreeStats, Issue, Statistics};
pub use crate::error::GraphError;
pub use crate::generate::{GenerateCfg, ScaleCfg};
pub use crate::geom2::BoundingBox;
pub use crate::insert::{Insertion, PlacementCfg};
pub use crate::layout::LayoutCfg;
pub use crate::store::{Edge, GraphStore};
pub use crate::vertex::{ColorIndex, Vertex, VertexId};

/// Owned copy of everything a renderer draws.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    /// `(id, x, y, color)` in id order.
    pub vertices: Vec<(VertexId, f64, f64, ColorIndex)>,
    pub edges: Vec<(VertexId, VertexId)>,
    pub periphery: Vec<VertexId>,
    pub bounds: BoundingBox,
}

/// Capture the visible prefix (`id <= limit`, all for `None`) of the store.
///
/// Periphery and bounds are restricted to the same prefix.
pub fn snapshot(g: &GraphStore, limit: Option<usize>) -> Snapshot {
    let max_id = limit.unwrap_or(usize::MAX);
    Snapshot {
        vertices: g
            .visible(limit)
            .map(|v| (v.id, v.pos.x, v.pos.y, v.color))
            .collect(),
        edges: g
            .edges()
            .filter(|e| e.b().0 <= max_id)
            .map(|e| (e.a(), e.b()))
            .collect(),
        periphery: g
            .periphery()
            .into_iter()
            .filter(|id| id.0 <= max_id)
            .collect(),
        bounds: BoundingBox::from_points(g.visible(limit).map(|v| v.pos)).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_respects_visible_prefix() {
        let mut g = GraphStore::new();
        g.start_basic_graph();
        g.insert_on_arc(VertexId(1), VertexId(2)).unwrap();
        let full = snapshot(&g, None);
        assert_eq!(full.vertices.len(), 4);
        assert_eq!(full.edges.len(), 5);
        assert_eq!(full.periphery.len(), 4);
        let partial = snapshot(&g, Some(3));
        assert_eq!(partial.vertices.len(), 3);
        assert_eq!(partial.edges.len(), 3);
        assert!(partial.edges.iter().all(|&(a, b)| a < b));
        // V4 sits on the boundary but is hidden, and must not widen the view.
        assert_eq!(
            partial.periphery,
            vec![VertexId(1), VertexId(2), VertexId(3)]
        );
        assert_eq!(partial.bounds.as_tuple(), (250.0, 200.0, 300.0, 250.0));
        assert_ne!(full.bounds, partial.bounds);
        assert_eq!(snapshot(&g, Some(0)).bounds, BoundingBox::default());
    }
}
