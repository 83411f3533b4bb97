use std::iter::FusedIterator;
use std::marker::PhantomData;

use log::{debug, trace};

use crate::data_structures::{Fringe, VertexSet};
use crate::graph::{Graph, Weight};
use crate::traversal::check_vertex;
use crate::Result;

/// Depth-first iteration over the vertices reachable from a start vertex
///
/// Each step pops the fringe. An unvisited vertex pushes every neighbor that
/// is neither visited nor already queued (in adjacency order), is marked
/// visited and is yielded. Because the last pushed neighbor is popped first,
/// the order differs from a recursive pre-order walk. Every reachable vertex
/// is yielded exactly once; the iterator cannot be restarted.
#[derive(Debug)]
pub struct DepthFirst<'g, W, G>
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    graph: &'g G,
    fringe: Fringe,
    visited: VertexSet,
    _weight_marker: PhantomData<W>,
}

impl<'g, W, G> DepthFirst<'g, W, G>
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    /// Starts a traversal at `start`; an out-of-range start yields nothing
    pub fn new(graph: &'g G, start: usize) -> Self {
        let vertex_count = graph.vertex_count();
        let mut fringe = Fringe::new(vertex_count);
        fringe.push(start);

        DepthFirst {
            graph,
            fringe,
            visited: VertexSet::with_capacity(vertex_count),
            _weight_marker: PhantomData,
        }
    }

    /// Vertices yielded so far
    pub fn visited(&self) -> &VertexSet {
        &self.visited
    }
}

impl<'g, W, G> Iterator for DepthFirst<'g, W, G>
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let graph = self.graph;
        while let Some(vertex) = self.fringe.pop() {
            // only a self-loop can queue a vertex after it was visited
            if self.visited.contains(vertex) {
                trace!("dfs: skipping already visited vertex {}", vertex);
                continue;
            }

            for (target, _) in graph.outgoing_edges(vertex) {
                if !self.visited.contains(target) && !self.fringe.contains(target) {
                    self.fringe.push(target);
                }
            }
            self.visited.insert(vertex);
            return Some(vertex);
        }
        None
    }
}

impl<'g, W, G> FusedIterator for DepthFirst<'g, W, G>
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
}

/// Collects the depth-first iteration from `start`
pub fn dfs<W, G>(graph: &G, start: usize) -> Result<Vec<usize>>
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    check_vertex::<W, G>(graph, start)?;
    Ok(DepthFirst::<W, G>::new(graph, start).collect())
}

/// Returns true if `start == stop` or `stop` is reachable from `start`
pub fn path_exists<W, G>(graph: &G, start: usize, stop: usize) -> Result<bool>
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    check_vertex::<W, G>(graph, start)?;
    check_vertex::<W, G>(graph, stop)?;
    if start == stop {
        return Ok(true);
    }
    Ok(DepthFirst::<W, G>::new(graph, start).any(|vertex| vertex == stop))
}

/// Reconstructs some path from `start` to `stop` out of the depth-first order
///
/// The vertices yielded before `stop` are walked backwards; each one with an
/// edge into the current tail of the path becomes the new tail, until `start`
/// is reached. Every yielded vertex other than `start` was queued by an
/// earlier yielded vertex with an edge to it, so the walk always ends at
/// `start`. The result is a valid path but not necessarily the shortest.
///
/// Returns `[start]` when `start == stop` and an empty vector when `stop` is
/// unreachable.
pub fn path<W, G>(graph: &G, start: usize, stop: usize) -> Result<Vec<usize>>
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    check_vertex::<W, G>(graph, start)?;
    check_vertex::<W, G>(graph, stop)?;
    if start == stop {
        return Ok(vec![start]);
    }

    let mut prefix = Vec::new();
    let mut reached = false;
    for vertex in DepthFirst::<W, G>::new(graph, start) {
        if vertex == stop {
            reached = true;
            break;
        }
        prefix.push(vertex);
    }
    if !reached {
        debug!("path: {} is not reachable from {}", stop, start);
        return Ok(Vec::new());
    }

    let mut path = vec![stop];
    let mut tail = stop;
    for &vertex in prefix.iter().rev() {
        if !graph.has_edge(vertex, tail) {
            continue;
        }
        path.push(vertex);
        if vertex == start {
            break;
        }
        tail = vertex;
    }
    path.reverse();

    debug_assert_eq!(path.first(), Some(&start));
    Ok(path)
}
