use crate::graph::graph_debug::impl_debug_by_graph_debug;
use crate::graph::*;

/// A directed graph stored as a flat list of arcs, without any per-vertex index.
///
/// Parallel edges and self loops are kept exactly as inserted,
/// and neighbors are reported in insertion order.
/// Lookups scan every arc, which keeps this the simplest representation
/// and a good reference to check the others against.
///
/// |                 | Complexity                                                         |
/// | --------------- | ------------------------------------------------------------------ |
/// | `new`           | $O(1)$                                                             |
/// | `add_edge`      | amortized $O(1)$                                                   |
/// | `vertex_size`   | $O(1)$                                                             |
/// | `edge_size`     | $O(1)$                                                             |
/// | `next_vertices` | $O(\|E\|)$ in total to drain.                                      |
/// | `prev_vertices` | $O(\|E\|)$ in total to drain.                                      |
/// | `from_graph`    | $O(\|E\|)$ plus the cost of querying the source graph.             |
#[derive(Clone, Default)]
pub struct ArcGraph {
    vertex_size: usize,
    arcs: Vec<Edge>,
}

impl MultiEdges for ArcGraph {
    const KEEPS_MULTI_EDGES: bool = true;
}

impl_debug_by_graph_debug!(ArcGraph);

impl ArcGraph {
    /// Number of stored arcs, parallel ones included.
    pub fn edge_size(&self) -> usize {
        self.arcs.len()
    }

    /// Stored arcs in insertion order.
    pub fn arcs(&self) -> &[Edge] {
        &self.arcs
    }
}

impl GrowableGraph for ArcGraph {
    fn new(vertex_size: usize) -> Self {
        Self {
            vertex_size,
            arcs: Vec::new(),
        }
    }

    fn try_allocate(vertex_size: usize) -> Option<Self> {
        Some(Self::new(vertex_size))
    }

    fn add_edge(&mut self, source: VertexId, sink: VertexId) -> GraphResult<()> {
        self.check_vertex(source)?;
        self.check_vertex(sink)?;
        self.arcs.push(Edge::new(source, sink));
        Ok(())
    }
}

impl QueryableGraph for ArcGraph {
    fn vertex_size(&self) -> usize {
        self.vertex_size
    }

    fn next_vertices(
        &self,
        vertex: VertexId,
    ) -> GraphResult<Box<dyn Iterator<Item = VertexId> + '_>> {
        self.check_vertex(vertex)?;
        let it = self
            .arcs
            .iter()
            .filter(move |e| e.source == vertex)
            .map(|e| e.sink);
        Ok(Box::new(it))
    }

    fn prev_vertices(
        &self,
        vertex: VertexId,
    ) -> GraphResult<Box<dyn Iterator<Item = VertexId> + '_>> {
        self.check_vertex(vertex)?;
        let it = self
            .arcs
            .iter()
            .filter(move |e| e.sink == vertex)
            .map(|e| e.source);
        Ok(Box::new(it))
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{directed::*, *};
    use petgraph::{graph::NodeIndex, Direction, Graph};
    use quickcheck_macros::*;

    fn petgraph_of(ops: &Ops) -> Graph<(), ()> {
        let mut res = Graph::with_capacity(ops.vertex_size, ops.edges.len());
        for _ in 0..ops.vertex_size {
            res.add_node(());
        }
        for e in ops.edges.iter() {
            res.add_edge(
                NodeIndex::new(e.source.to_raw()),
                NodeIndex::new(e.sink.to_raw()),
                (),
            );
        }
        res
    }

    fn sorted_neighbors(g: &Graph<(), ()>, v: VertexId, dir: Direction) -> Vec<VertexId> {
        let mut res: Vec<_> = g
            .neighbors_directed(NodeIndex::new(v.to_raw()), dir)
            .map(|x| VertexId::new(x.index()))
            .collect();
        res.sort();
        res
    }

    #[quickcheck]
    fn arc_graph_gen(ops: Ops) {
        let oracle = petgraph_of(&ops);
        let trial: ArcGraph = ops.build();
        assert_eq!(trial.vertex_size(), oracle.node_count());
        assert_eq!(trial.edge_size(), oracle.edge_count());
        for v in trial.iter_vertices() {
            let mut next: Vec<_> = trial.next_vertices(v).unwrap().collect();
            next.sort();
            assert_eq!(next, sorted_neighbors(&oracle, v, Direction::Outgoing));
            let mut prev: Vec<_> = trial.prev_vertices(v).unwrap().collect();
            prev.sort();
            assert_eq!(prev, sorted_neighbors(&oracle, v, Direction::Incoming));
        }
    }

    #[test]
    fn keeps_insertion_order_and_duplicates() {
        let g: ArcGraph = Ops::new(3, &[(1, 2), (0, 2), (1, 0), (1, 2)]).build();
        let next: Vec<_> = g
            .next_vertices(VertexId::new(1))
            .unwrap()
            .map(|v| v.to_raw())
            .collect();
        assert_eq!(next, vec![2, 0, 2]);
        let prev: Vec<_> = g
            .prev_vertices(VertexId::new(2))
            .unwrap()
            .map(|v| v.to_raw())
            .collect();
        assert_eq!(prev, vec![1, 0, 1]);
        assert_eq!(g.edge_size(), 4);
        assert_eq!(g.arcs()[1], Edge::from((0, 2)));
    }

    #[test]
    fn from_graph_groups_by_source() {
        let arcs: ArcGraph = Ops::new(3, &[(2, 0), (0, 1), (2, 1), (0, 0)]).build();
        let copy = ArcGraph::from_graph(&arcs).unwrap();
        assert_eq!(
            copy.arcs(),
            &[
                Edge::from((0, 1)),
                Edge::from((0, 0)),
                Edge::from((2, 0)),
                Edge::from((2, 1)),
            ]
        );
    }
}
