//! The four storage representations of a directed graph.
//!
//! |                 | parallel edges | `add_edge`           | `next_vertices`         | `prev_vertices`        | memory                  |
//! | --------------- | -------------- | -------------------- | ----------------------- | ---------------------- | ----------------------- |
//! | [`ListGraph`]   | kept           | amortized $O(1)$     | $O(\deg^+)$             | $O(\deg^-)$            | $O(\|V\| + \|E\|)$      |
//! | [`MatrixGraph`] | collapsed      | $O(1)$               | $O(\|V\|)$              | $O(\|V\|)$             | $O(\|V\|^2)$            |
//! | [`SetGraph`]    | collapsed      | $O(\log \|V\|)$      | $O(\deg^+)$             | $O(\deg^-)$            | $O(\|V\| + \|E\|)$      |
//! | [`ArcGraph`]    | kept           | amortized $O(1)$     | $O(\|E\|)$              | $O(\|E\|)$             | $O(\|E\|)$              |

mod list_graph;
pub use self::list_graph::*;
mod matrix_graph;
pub use self::matrix_graph::*;
mod set_graph;
pub use self::set_graph::*;
mod arc_graph;
pub use self::arc_graph::*;

#[cfg(test)]
pub(crate) use self::tests::*;
