//! Error taxonomy for store commands.
//!
//! Every failure is local: the command aborts before touching the store, so the
//! caller can retry with corrected input.

use std::fmt;

use crate::vertex::VertexId;

/// Errors surfaced by periphery insertion and color assignment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// Same vertex chosen twice, or a chosen vertex is not on the periphery.
    InvalidSelection {
        vp: VertexId,
        vq: VertexId,
        reason: &'static str,
    },
    /// The selected arc has fewer than two vertices.
    DegenerateArc { len: usize },
    /// Fewer than two periphery vertices to draw a random pair from.
    InsufficientBoundary { len: usize },
    /// Color index outside `[1, 4]`.
    OutOfRangeColor { value: u8 },
    /// The id was never assigned by this store.
    UnknownVertex { id: VertexId },
}

impl GraphError {
    pub(crate) fn selection(vp: VertexId, vq: VertexId, reason: &'static str) -> Self {
        Self::InvalidSelection { vp, vq, reason }
    }
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::InvalidSelection { vp, vq, reason } => {
                write!(f, "invalid selection ({vp}, {vq}): {reason}")
            }
            GraphError::DegenerateArc { len } => {
                write!(f, "degenerate arc with {len} vertices (needs ≥2)")
            }
            GraphError::InsufficientBoundary { len } => write!(
                f,
                "periphery has {len} vertices; random insertion needs at least 2"
            ),
            GraphError::OutOfRangeColor { value } => {
                write!(f, "color index {value} is outside 1..=4")
            }
            GraphError::UnknownVertex { id } => write!(f, "vertex {id} does not exist"),
        }
    }
}

impl std::error::Error for GraphError {}
