use super::VertexId;

/// A directed edge, from `source` to `sink`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub source: VertexId,
    pub sink: VertexId,
}

impl Edge {
    pub fn new(source: VertexId, sink: VertexId) -> Self {
        Self { source, sink }
    }
}

impl From<(usize, usize)> for Edge {
    fn from((source, sink): (usize, usize)) -> Self {
        Self {
            source: VertexId::new(source),
            sink: VertexId::new(sink),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_pair() {
        let e = Edge::from((1, 2));
        assert_eq!(e, Edge::new(VertexId::new(1), VertexId::new(2)));
        assert!(e < Edge::from((2, 0)));
    }
}
