//! Vertex record: identity, position, color index.
//!
//! Ids start at 1 and are dense, so the store keeps vertices in a plain `Vec`
//! addressed by `id - 1`.

use std::fmt;

use nalgebra::Vector2;

use crate::error::GraphError;

/// Vertex identifier (≥ 1, never reused).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);

impl VertexId {
    /// Slot in the dense vertex table.
    #[inline]
    pub(crate) fn slot(self) -> Option<usize> {
        self.0.checked_sub(1)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V{}", self.0)
    }
}

/// Palette slot in `[1, 4]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColorIndex(u8);

impl ColorIndex {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 4;

    pub fn new(value: u8) -> Result<Self, GraphError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(GraphError::OutOfRangeColor { value })
        }
    }

    /// Nearest valid slot.
    pub fn saturating(value: u8) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    /// Cyclic assignment 1→2→3→4→1 by id: `((id - 1) mod 4) + 1`.
    pub fn cycled(id: VertexId) -> Self {
        let k = id.0.saturating_sub(1) % usize::from(Self::MAX);
        Self(k as u8 + 1)
    }

    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Renderer palette: red, green, blue, yellow.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self.0 {
            1 => (255, 100, 100),
            2 => (100, 255, 100),
            3 => (100, 100, 255),
            _ => (255, 255, 100),
        }
    }
}

impl TryFrom<u8> for ColorIndex {
    type Error = GraphError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A vertex of the triangulated graph.
#[derive(Clone, Debug, PartialEq)]
pub struct Vertex {
    pub id: VertexId,
    pub pos: Vector2<f64>,
    pub color: ColorIndex,
}

impl Vertex {
    pub fn new(id: VertexId, pos: Vector2<f64>, color: ColorIndex) -> Self {
        Self { id, pos, color }
    }

    /// Marker radius for renderers; grows logarithmically with the id.
    pub fn display_radius(&self) -> f64 {
        15.0 + ((self.id.0 + 1) as f64).log10() * 5.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_range_is_enforced() {
        assert!(ColorIndex::new(0).is_err());
        assert!(ColorIndex::new(5).is_err());
        for v in 1..=4 {
            assert_eq!(ColorIndex::new(v).unwrap().get(), v);
        }
        assert_eq!(ColorIndex::saturating(0).get(), 1);
        assert_eq!(ColorIndex::saturating(200).get(), 4);
        assert_eq!(
            ColorIndex::try_from(9),
            Err(GraphError::OutOfRangeColor { value: 9 })
        );
    }

    #[test]
    fn color_cycles_by_id() {
        let seq: Vec<u8> = (1..=9)
            .map(|k| ColorIndex::cycled(VertexId(k)).get())
            .collect();
        assert_eq!(seq, vec![1, 2, 3, 4, 1, 2, 3, 4, 1]);
    }

    #[test]
    fn display_radius_grows_with_id() {
        let c = ColorIndex::cycled(VertexId(1));
        let small = Vertex::new(VertexId(9), Vector2::zeros(), c);
        let large = Vertex::new(VertexId(999), Vector2::zeros(), c);
        assert!((small.display_radius() - 20.0).abs() < 1e-12);
        assert!((large.display_radius() - 30.0).abs() < 1e-12);
    }
}
