use crate::graph::graph_debug::impl_debug_by_graph_debug;
use crate::graph::*;

/// A directed graph stored as a dense `V x V` boolean adjacency matrix.
///
/// An edge is either present or not:
/// inserting the same `(source, sink)` again changes nothing.
/// Self loops live on the diagonal.
/// Neighbors are reported in ascending order.
///
/// |                 | Complexity                                                              |
/// | --------------- | ----------------------------------------------------------------------- |
/// | `new`           | $O(\|V\|^2)$                                                            |
/// | `add_edge`      | $O(1)$                                                                  |
/// | `has_edge`      | $O(1)$                                                                  |
/// | `vertex_size`   | $O(1)$                                                                  |
/// | `next_vertices` | $O(\|V\|)$ in total to drain, scanning a row.                           |
/// | `prev_vertices` | $O(\|V\|)$ in total to drain, scanning a column.                        |
/// | `from_graph`    | $O(\|V\|^2 + \|E\|)$ plus the cost of querying the source graph.        |
///
/// Converting *from* a `MatrixGraph` costs $O(\|V\|^2)$ since every row is scanned.
#[derive(Clone, Default)]
pub struct MatrixGraph {
    vertex_size: usize,
    cells: Vec<bool>,
}

impl MultiEdges for MatrixGraph {
    const KEEPS_MULTI_EDGES: bool = false;
}

impl_debug_by_graph_debug!(MatrixGraph);

impl MatrixGraph {
    fn cell(&self, source: usize, sink: usize) -> bool {
        self.cells[source * self.vertex_size + sink]
    }

    /// Whether an edge from `source` to `sink` is present.
    pub fn has_edge(&self, source: VertexId, sink: VertexId) -> GraphResult<bool> {
        self.check_vertex(source)?;
        self.check_vertex(sink)?;
        Ok(self.cell(source.to_raw(), sink.to_raw()))
    }
}

impl GrowableGraph for MatrixGraph {
    /// Panics if `vertex_size^2` cells cannot be allocated;
    /// use [`GrowableGraph::try_new`] for counts from outside.
    fn new(vertex_size: usize) -> Self {
        let cells = vertex_size
            .checked_mul(vertex_size)
            .expect("adjacency matrix size overflows usize");
        Self {
            vertex_size,
            cells: vec![false; cells],
        }
    }

    fn try_allocate(vertex_size: usize) -> Option<Self> {
        let cells = vertex_size.checked_mul(vertex_size)?;
        Some(Self {
            vertex_size,
            cells: try_filled(cells, false)?,
        })
    }

    fn add_edge(&mut self, source: VertexId, sink: VertexId) -> GraphResult<()> {
        self.check_vertex(source)?;
        self.check_vertex(sink)?;
        self.cells[source.to_raw() * self.vertex_size + sink.to_raw()] = true;
        Ok(())
    }
}

impl QueryableGraph for MatrixGraph {
    fn vertex_size(&self) -> usize {
        self.vertex_size
    }

    fn next_vertices(
        &self,
        vertex: VertexId,
    ) -> GraphResult<Box<dyn Iterator<Item = VertexId> + '_>> {
        self.check_vertex(vertex)?;
        let source = vertex.to_raw();
        let it = (0..self.vertex_size)
            .filter(move |sink| self.cell(source, *sink))
            .map(VertexId::new);
        Ok(Box::new(it))
    }

    fn prev_vertices(
        &self,
        vertex: VertexId,
    ) -> GraphResult<Box<dyn Iterator<Item = VertexId> + '_>> {
        self.check_vertex(vertex)?;
        let sink = vertex.to_raw();
        let it = (0..self.vertex_size)
            .filter(move |source| self.cell(*source, sink))
            .map(VertexId::new);
        Ok(Box::new(it))
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{directed::*, *};
    use quickcheck_macros::*;

    #[quickcheck]
    fn matrix_graph_gen(ops: Ops) {
        assert_matches_oracle::<MatrixGraph>(&ops);
    }

    #[test]
    fn add_edge_is_idempotent() {
        let g: MatrixGraph = Ops::new(3, &[(2, 0), (0, 1), (2, 0), (2, 0)]).build();
        let next: Vec<_> = g.next_vertices(VertexId::new(2)).unwrap().collect();
        assert_eq!(next, vec![VertexId::new(0)]);
        assert_eq!(g.iter_edges().count(), 2);
    }

    #[test]
    fn ascending_order() {
        let g: MatrixGraph = Ops::new(4, &[(3, 2), (1, 2), (0, 2), (2, 3), (2, 0)]).build();
        let prev: Vec<_> = g
            .prev_vertices(VertexId::new(2))
            .unwrap()
            .map(|v| v.to_raw())
            .collect();
        assert_eq!(prev, vec![0, 1, 3]);
        let next: Vec<_> = g
            .next_vertices(VertexId::new(2))
            .unwrap()
            .map(|v| v.to_raw())
            .collect();
        assert_eq!(next, vec![0, 3]);
    }

    #[test]
    fn has_edge() {
        let g: MatrixGraph = Ops::new(2, &[(1, 1), (0, 1)]).build();
        assert_eq!(g.has_edge(VertexId::new(1), VertexId::new(1)), Ok(true));
        assert_eq!(g.has_edge(VertexId::new(0), VertexId::new(1)), Ok(true));
        assert_eq!(g.has_edge(VertexId::new(1), VertexId::new(0)), Ok(false));
        assert_eq!(g.has_edge(VertexId::new(0), VertexId::new(0)), Ok(false));
        assert!(g.has_edge(VertexId::new(2), VertexId::new(0)).is_err());
    }

    #[test]
    fn unallocatable_size() {
        assert!(MatrixGraph::try_allocate(usize::MAX).is_none());
        assert_eq!(
            MatrixGraph::try_new(i64::MAX).err(),
            Some(GraphError::InvalidVertexCount(i64::MAX))
        );
        // 9e18 cells fit in isize but not in any address space
        assert_eq!(
            MatrixGraph::try_new(3_000_000_000).err(),
            Some(GraphError::InvalidVertexCount(3_000_000_000))
        );
        assert_eq!(MatrixGraph::try_new(5).unwrap().vertex_size(), 5);
    }

    #[test]
    #[should_panic(expected = "adjacency matrix size overflows usize")]
    fn new_rejects_overflowing_size() {
        let _ = MatrixGraph::new(usize::MAX);
    }
}
