/// ID for vertices, which are essentially `usize`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

impl VertexId {
    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }

    /// All vertices of a graph with `vertex_size` vertices, in ascending order.
    pub fn range(vertex_size: usize) -> impl Iterator<Item = VertexId> + Clone {
        (0..vertex_size).map(VertexId)
    }
}

impl From<usize> for VertexId {
    fn from(x: usize) -> Self {
        Self(x)
    }
}
