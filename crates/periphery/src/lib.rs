//! Incremental planar triangulation grown along its outer boundary.
//!
//! A `GraphStore` starts from a triangle; each insertion fans a new vertex onto
//! a contiguous arc of the periphery and rewrites the boundary cycle. The layout
//! engine keeps the boundary on a regular circle and relaxes interior vertices.
//!
//! Rendering, input handling and windowing are outside this crate: callers read
//! positions, colors and the periphery, and issue insertion/redraw commands.

pub mod api;
pub mod diagnostics;
pub mod error;
pub mod generate;
pub mod geom2;
pub mod insert;
pub mod layout;
pub mod store;
pub mod vertex;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::GraphError;
pub use nalgebra::Vector2 as Vec2;
pub use store::GraphStore;
pub use vertex::{ColorIndex, Vertex, VertexId};

/// Quick imports for growing a graph; `api` carries the full surface.
pub mod prelude {
    pub use crate::error::GraphError;
    pub use crate::store::GraphStore;
    pub use crate::vertex::{ColorIndex, VertexId};
    pub use nalgebra::Vector2 as Vec2;
}

#[cfg(test)]
mod tests;
