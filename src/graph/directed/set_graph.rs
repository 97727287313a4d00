use crate::graph::graph_debug::impl_debug_by_graph_debug;
use crate::graph::*;
use std::collections::BTreeSet;

/// A directed graph of forward and reverse adjacency sets.
///
/// Each neighbor appears at most once, so repeated insertions of an edge collapse.
/// Neighbors are reported in ascending order, not in insertion order.
///
/// |                 | Complexity                                                                           |
/// | --------------- | ------------------------------------------------------------------------------------ |
/// | `new`           | $O(\|V\|)$                                                                           |
/// | `add_edge`      | $O(\log \|V\|)$                                                                      |
/// | `vertex_size`   | $O(1)$                                                                               |
/// | `next_vertices` | returns in $O(1)$. amortized $O(1)$ and $O(\log \|V\|)$ in the worst cases on each call to `.next`. |
/// | `prev_vertices` | returns in $O(1)$. amortized $O(1)$ and $O(\log \|V\|)$ in the worst cases on each call to `.next`. |
/// | `from_graph`    | $O(\|V\| + \|E\| \log \|V\|)$ plus the cost of querying the source graph.               |
#[derive(Clone, Default)]
pub struct SetGraph {
    next: Vec<BTreeSet<VertexId>>,
    prev: Vec<BTreeSet<VertexId>>,
}

impl MultiEdges for SetGraph {
    const KEEPS_MULTI_EDGES: bool = false;
}

impl_debug_by_graph_debug!(SetGraph);

impl GrowableGraph for SetGraph {
    fn new(vertex_size: usize) -> Self {
        Self {
            next: vec![BTreeSet::new(); vertex_size],
            prev: vec![BTreeSet::new(); vertex_size],
        }
    }

    fn try_allocate(vertex_size: usize) -> Option<Self> {
        Some(Self {
            next: try_filled(vertex_size, BTreeSet::new())?,
            prev: try_filled(vertex_size, BTreeSet::new())?,
        })
    }

    fn add_edge(&mut self, source: VertexId, sink: VertexId) -> GraphResult<()> {
        self.check_vertex(source)?;
        self.check_vertex(sink)?;
        self.next[source.to_raw()].insert(sink);
        self.prev[sink.to_raw()].insert(source);
        Ok(())
    }
}

impl QueryableGraph for SetGraph {
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
