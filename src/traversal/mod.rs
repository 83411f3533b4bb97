//! Lazy vertex traversals over a [`Graph`](crate::graph::Graph)

pub mod depth_first;
pub mod topological;

pub use depth_first::DepthFirst;
pub use topological::Topological;

use crate::graph::{Graph, Weight};
use crate::{Error, Result};

pub(crate) fn check_vertex<W, G>(graph: &G, vertex: usize) -> Result<()>
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    if graph.has_vertex(vertex) {
        Ok(())
    } else {
        Err(Error::InvalidVertex(vertex))
    }
}
