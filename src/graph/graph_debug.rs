use crate::graph::*;

/// A default implementation of inspecting into a graph with customized indentation.
///
/// Every vertex is printed on its own line,
/// followed by one line per out-edge in the order the graph reports them.
/// A vertex whose `next_vertices` fails is printed without out-edges.
pub struct GraphDebug<'a, G>
where
    G: QueryableGraph + ?Sized,
{
    graph: &'a G,
    init_indent: usize,
    indent_step: usize,
}

impl<'a, G> GraphDebug<'a, G>
where
    G: QueryableGraph + ?Sized,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            init_indent: 0,
            indent_step: 2,
        }
    }

    pub fn indent(mut self, init: usize, step: usize) -> Self {
        self.init_indent = init;
        self.indent_step = step;
        self
    }

    fn display_indent(&self, f: &mut std::fmt::Formatter<'_>, level: usize) -> std::fmt::Result {
        let indention = self.init_indent + self.indent_step * level;
        for _ in 0..indention {
            write!(f, " ")?;
        }
        Ok(())
    }
}

impl<'a, G> std::fmt::Debug for GraphDebug<'a, G>
where
    G: QueryableGraph + ?Sized,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for v in self.graph.iter_vertices() {
            self.display_indent(f, 0)?;
            writeln!(f, "{}", v.to_raw())?;
            for sink in self.graph.next_vertices(v).into_iter().flatten() {
                self.display_indent(f, 1)?;
                writeln!(f, "--> {}", sink.to_raw())?;
            }
        }
        Ok(())
    }
}

/// Implements `Debug` for a representation by wrapping [`GraphDebug`] in `Name { ... }`.
macro_rules! impl_debug_by_graph_debug {
    ($graph:ident) => {
        impl std::fmt::Debug for $graph {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                writeln!(f, "{} {{", stringify!($graph))?;
                write!(f, "{:?}", self.debug().indent(2, 2))?;
                write!(f, "}}")
            }
        }
    };
}

pub(crate) use impl_debug_by_graph_debug;
