use crate::graph::*;
use log::debug;

/// Read access to a directed graph.
///
/// Neighbor order is up to each implementation.
/// Callers that compare graphs should compare neighbors as (multi)sets.
pub trait QueryableGraph {
    /// Number of vertices, fixed at construction.
    fn vertex_size(&self) -> usize;

    /// Iterates over every `w` such that an edge `(vertex, w)` is stored.
    fn next_vertices(&self, vertex: VertexId)
        -> GraphResult<Box<dyn Iterator<Item = VertexId> + '_>>;

    /// Iterates over every `w` such that an edge `(w, vertex)` is stored.
    fn prev_vertices(&self, vertex: VertexId)
        -> GraphResult<Box<dyn Iterator<Item = VertexId> + '_>>;

    fn contains_vertex(&self, vertex: VertexId) -> bool {
        vertex.to_raw() < self.vertex_size()
    }

    /// Fails with [`GraphError::VertexOutOfRange`] unless `vertex` belongs to this graph.
    fn check_vertex(&self, vertex: VertexId) -> GraphResult<()> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_size: self.vertex_size(),
            })
        }
    }

    /// Iterates over vertices in ascending order.
    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(VertexId::range(self.vertex_size()))
    }

    /// Iterates over stored edges, grouped by source in ascending order.
    ///
    /// A vertex whose `next_vertices` fails contributes no edges.
    /// That never happens for vertices in range of the graphs in this crate.
    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        let it = self.iter_vertices().flat_map(move |source| {
            self.next_vertices(source)
                .into_iter()
                .flatten()
                .map(move |sink| Edge::new(source, sink))
        });
        Box::new(it)
    }

    fn debug(&self) -> GraphDebug<'_, Self>
    where
        Self: Sized,
    {
        GraphDebug::new(self)
    }
}

/// Write access to a directed graph, and the ways to create one.
pub trait GrowableGraph {
    /// Creates a graph with `vertex_size` vertices and no edges.
    fn new(vertex_size: usize) -> Self
    where
        Self: Sized;

    /// Stores a directed edge from `source` to `sink`.
    ///
    /// Both endpoints are checked before anything is stored.
    fn add_edge(&mut self, source: VertexId, sink: VertexId) -> GraphResult<()>;

    /// Like [`GrowableGraph::new`], but returns `None` instead of panicking
    /// when storage for `vertex_size` vertices cannot be allocated.
    fn try_allocate(vertex_size: usize) -> Option<Self>
    where
        Self: Sized;

    /// Like [`GrowableGraph::new`], but takes a signed count from outside
    /// and rejects negative or unallocatable ones.
    fn try_new(count: i64) -> GraphResult<Self>
    where
        Self: Sized,
    {
        let res = usize::try_from(count)
            .ok()
            .and_then(Self::try_allocate);
        res.ok_or_else(|| {
            debug!(
                "rejecting {} with {} vertices",
                std::any::type_name::<Self>(),
                count
            );
            GraphError::InvalidVertexCount(count)
        })
    }

    /// Copies `other` into a new graph of this representation.
    ///
    /// For every vertex `i` of `other`, every vertex in `other.next_vertices(i)`
    /// becomes an edge `(i, next)` of the result.
    /// A representation that drops parallel edges collapses them here.
    fn from_graph<G>(other: &G) -> GraphResult<Self>
    where
        G: QueryableGraph + ?Sized,
        Self: Sized,
    {
        let vertex_size = other.vertex_size();
        debug!(
            "converting a graph of {} vertices into {}",
            vertex_size,
            std::any::type_name::<Self>()
        );
        let mut res = Self::new(vertex_size);
        for source in other.iter_vertices() {
            for sink in other.next_vertices(source)? {
                res.add_edge(source, sink)?;
            }
        }
        Ok(res)
    }
}

/// The full contract, usable as `dyn Digraph`.
pub trait Digraph: QueryableGraph + GrowableGraph {}

impl<G: QueryableGraph + GrowableGraph> Digraph for G {}

/// How a representation treats an edge inserted more than once.
pub trait MultiEdges {
    /// `true` if every insertion is kept and reported,
    /// `false` if repeated `(source, sink)` pairs collapse into one edge.
    const KEEPS_MULTI_EDGES: bool;
}
