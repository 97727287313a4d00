//! Traits and implementations of directed graphs with fixed vertex sets.
//!
//! # Vertices and edges
//!
//! Vertices are lightweight ID's, essentially `usize`, numbered from `0` to `vertex_size() - 1`.
//! The number of vertices is fixed when a graph is created.
//! Edges are directed and carry no weight.
//! Self loops are always allowed.
//! Whether parallel edges are kept apart depends on the representation, see [`MultiEdges`].
//!
//! # Representations
//!
//! [`directed`] holds four representations which trade memory against query time:
//!
//! * [`ListGraph`](directed::ListGraph): forward and reverse adjacency lists.
//! * [`MatrixGraph`](directed::MatrixGraph): a dense boolean adjacency matrix.
//! * [`SetGraph`](directed::SetGraph): forward and reverse adjacency sets.
//! * [`ArcGraph`](directed::ArcGraph): a flat list of arcs.
//!
//! # Conversion
//!
//! Every representation can be built from anything implementing [`QueryableGraph`]
//! by [`GrowableGraph::from_graph`].
//! The result never shares storage with its source.

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod error;
pub use self::error::*;
mod r#trait;
pub use self::r#trait::*;
mod graph_debug;
pub use self::graph_debug::*;

/// A vector of `len` copies of `elem`, or `None` if it cannot be allocated.
pub(crate) fn try_filled<T: Clone>(len: usize, elem: T) -> Option<Vec<T>> {
    let mut res = Vec::new();
    res.try_reserve_exact(len).ok()?;
    res.resize(len, elem);
    Some(res)
}

pub mod directed;
