//! Structural validation and descriptive statistics.
//!
//! `validate` reports issues as values and never fails. The edge-count check is a
//! heuristic hint for under-triangulation, not a planarity proof: a fan-grown
//! triangulation keeps `|E| = 3|V| − 3 − |P|` exactly.

use std::fmt;

use crate::store::GraphStore;
use crate::vertex::VertexId;

/// One structural finding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Issue {
    MissingPeripheryVertex(VertexId),
    MissingEdgeEndpoint(VertexId),
    /// Consecutive boundary vertices without an edge between them.
    OpenBoundary(VertexId, VertexId),
    /// Ring links are not a single consistent cycle.
    BrokenRing,
    UnderTriangulated { expected: usize, actual: usize },
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::MissingPeripheryVertex(id) => write!(f, "periphery vertex {id} does not exist"),
            Issue::MissingEdgeEndpoint(id) => {
                write!(f, "edge references non-existent vertex {id}")
            }
            Issue::OpenBoundary(a, b) => write!(f, "periphery step {a} → {b} has no edge"),
            Issue::BrokenRing => write!(f, "periphery links do not form a single cycle"),
            Issue::UnderTriangulated { expected, actual } => write!(
                f,
                "graph may not be properly triangulated: expected ~{expected} edges, got {actual}"
            ),
        }
    }
}

/// Degree summary over vertices that have at least one edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DegreeStats {
    pub avg: f64,
    pub min: usize,
    pub max: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Statistics {
    pub vertices: usize,
    pub edges: usize,
    pub periphery: usize,
    pub interior: usize,
    pub issues: usize,
    /// `None` without edges.
    pub degree: Option<DegreeStats>,
}

impl GraphStore {
    pub fn validate(&self) -> Vec<Issue> {
        let mut issues = Vec::new();
        let boundary = self.periphery();
        for &id in &boundary {
            if !self.contains(id) {
                issues.push(Issue::MissingPeripheryVertex(id));
            }
        }
        if !self.ring().is_consistent() {
            issues.push(Issue::BrokenRing);
        }
        if boundary.len() >= 2 {
            for (k, &a) in boundary.iter().enumerate() {
                let b = boundary[(k + 1) % boundary.len()];
                if !self.has_edge(a, b) {
                    issues.push(Issue::OpenBoundary(a, b));
                }
            }
        }
        for e in self.edges() {
            for id in [e.a(), e.b()] {
                if !self.contains(id) {
                    issues.push(Issue::MissingEdgeEndpoint(id));
                }
            }
        }
        let v = self.vertex_count();
        if v > 2 {
            let expected = (3 * v).saturating_sub(3 + boundary.len());
            if self.edge_count() < expected {
                issues.push(Issue::UnderTriangulated {
                    expected,
                    actual: self.edge_count(),
                });
            }
        }
        issues
    }

    /// Per-vertex degree from the edge set, indexed by id slot.
    pub fn degrees(&self) -> Vec<usize> {
        let mut deg = vec![0usize; self.vertex_count()];
        for e in self.edges() {
            for id in [e.a(), e.b()] {
                if let Some(s) = id.slot().filter(|&s| s < deg.len()) {
                    deg[s] += 1;
                }
            }
        }
        deg
    }

    pub fn statistics(&self) -> Statistics {
        let touched: Vec<usize> = self.degrees().into_iter().filter(|&d| d > 0).collect();
        let degree = match (touched.iter().min(), touched.iter().max()) {
            (Some(&min), Some(&max)) => Some(DegreeStats {
                avg: touched.iter().sum::<usize>() as f64 / touched.len() as f64,
                min,
                max,
            }),
            _ => None,
        };
        Statistics {
            vertices: self.vertex_count(),
            edges: self.edge_count(),
            periphery: self.periphery_len(),
            interior: self.vertex_count().saturating_sub(self.periphery_len()),
            issues: self.validate().len(),
            degree,
        }
    }
}
