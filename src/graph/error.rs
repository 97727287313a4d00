//! Errors reported by graph construction and edge operations.

use super::VertexId;
use thiserror::Error;

/// All errors that graphs in this crate can report.
///
/// Every operation either applies fully or fails before touching storage,
/// so a graph stays usable after any of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex outside `0..vertex_size` was passed in.
    #[error("vertex {} out of range for a graph of {vertex_size} vertices", .vertex.to_raw())]
    VertexOutOfRange {
        vertex: VertexId,
        vertex_size: usize,
    },

    /// A graph cannot be created with this many vertices.
    #[error("invalid vertex count: {0}")]
    InvalidVertexCount(i64),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let e = GraphError::VertexOutOfRange {
            vertex: VertexId::new(5),
            vertex_size: 3,
        };
        assert_eq!(
            e.to_string(),
            "vertex 5 out of range for a graph of 3 vertices"
        );
        assert_eq!(
            GraphError::InvalidVertexCount(-1).to_string(),
            "invalid vertex count: -1"
        );
    }
}
