//! Directed graphs with four interchangeable storage representations.
//!
//! All representations implement the same pair of traits,
//! [`QueryableGraph`](graph::QueryableGraph) and [`GrowableGraph`](graph::GrowableGraph),
//! so any of them can be built from any other:
//!
//! ```
//! use digraph_repr::graph::{directed::*, *};
//!
//! let mut list = ListGraph::new(3);
//! list.add_edge(VertexId::new(0), VertexId::new(1))?;
//! list.add_edge(VertexId::new(1), VertexId::new(2))?;
//!
//! let matrix = MatrixGraph::from_graph(&list)?;
//! let prev: Vec<_> = matrix.prev_vertices(VertexId::new(2))?.collect();
//! assert_eq!(prev, vec![VertexId::new(1)]);
//! # Ok::<(), GraphError>(())
//! ```

pub mod graph;
