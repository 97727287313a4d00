use crate::graph::graph_debug::impl_debug_by_graph_debug;
use crate::graph::*;

/// A directed graph of forward and reverse adjacency lists.
///
/// Parallel edges and self loops are kept exactly as inserted,
/// and neighbors are reported in insertion order.
///
/// |                 | Complexity                                                                |
/// | --------------- | ------------------------------------------------------------------------- |
/// | `new`           | $O(\|V\|)$                                                                |
/// | `add_edge`      | amortized $O(1)$                                                          |
/// | `vertex_size`   | $O(1)$                                                                    |
/// | `next_vertices` | returns in $O(1)$. $O(1)$ on each call to `.next`.                        |
/// | `prev_vertices` | returns in $O(1)$. $O(1)$ on each call to `.next`.                        |
/// | `from_graph`    | $O(\|V\| + \|E\|)$ plus the cost of querying the source graph.            |
#[derive(Clone, Default)]
pub struct ListGraph {
    next: Vec<Vec<VertexId>>,
    prev: Vec<Vec<VertexId>>,
}

impl MultiEdges for ListGraph {
    const KEEPS_MULTI_EDGES: bool = true;
}

impl_debug_by_graph_debug!(ListGraph);

impl GrowableGraph for ListGraph {
    fn new(vertex_size: usize) -> Self {
        Self {
            next: vec![Vec::new(); vertex_size],
            prev: vec![Vec::new(); vertex_size],
        }
    }

    fn try_allocate(vertex_size: usize) -> Option<Self> {
        Some(Self {
            next: try_filled(vertex_size, Vec::new())?,
            prev: try_filled(vertex_size, Vec::new())?,
        })
    }

    fn add_edge(&mut self, source: VertexId, sink: VertexId) -> GraphResult<()> {
        self.check_vertex(source)?;
        self.check_vertex(sink)?;
        self.next[source.to_raw()].push(sink);
        self.prev[sink.to_raw()].push(source);
        Ok(())
    }
}

impl QueryableGraph for ListGraph {
    fn vertex_size(&self) -> usize {
        self.next.len()
    }

    fn next_vertices(
        &self,
        vertex: VertexId,
    ) -> GraphResult<Box<dyn Iterator<Item = VertexId> + '_>> {
        self.check_vertex(vertex)?;
        Ok(Box::new(self.next[vertex.to_raw()].iter().copied()))
    }

    fn prev_vertices(
        &self,
        vertex: VertexId,
    ) -> GraphResult<Box<dyn Iterator<Item = VertexId> + '_>> {
        self.check_vertex(vertex)?;
        Ok(Box::new(self.prev[vertex.to_raw()].iter().copied()))
    }
}
