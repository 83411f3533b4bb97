use std::iter::FusedIterator;
use std::marker::PhantomData;

use log::{debug, trace};

use crate::data_structures::{Fringe, VertexSet};
use crate::graph::{Graph, Weight};

/// Topological iteration over every vertex of a graph (Kahn's algorithm)
///
/// The fringe starts with all vertices of in-degree zero, pushed in ascending
/// id order and popped as a stack. Emitting a vertex decrements the remaining
/// in-degree of each distinct out-neighbor once, then every vertex that is
/// unvisited, not queued and down to zero is pushed. Vertices on a cycle, or
/// reachable only through one, are never emitted.
#[derive(Debug)]
pub struct Topological<'g, W, G>
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    graph: &'g G,
    fringe: Fringe,
    visited: VertexSet,
    in_degrees: Vec<usize>,
    _weight_marker: PhantomData<W>,
}

impl<'g, W, G> Topological<'g, W, G>
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    pub fn new(graph: &'g G) -> Self {
        let vertex_count = graph.vertex_count();
        let in_degrees: Vec<usize> = (0..vertex_count).map(|v| graph.in_degree(v)).collect();

        let mut fringe = Fringe::new(vertex_count);
        for (vertex, _) in in_degrees.iter().enumerate().filter(|&(_, &d)| d == 0) {
            fringe.push(vertex);
        }
        debug!(
            "topological: {} of {} vertices start with in-degree zero",
            fringe.len(),
            vertex_count
        );

        Topological {
            graph,
            fringe,
            visited: VertexSet::with_capacity(vertex_count),
            in_degrees,
            _weight_marker: PhantomData,
        }
    }

    /// Vertices currently queued, bottom of the stack first
    pub fn fringe(&self) -> &[usize] {
        self.fringe.as_slice()
    }

    /// In-degree of `vertex` not yet accounted for by emitted vertices
    pub fn remaining_in_degree(&self, vertex: usize) -> Option<usize> {
        self.in_degrees.get(vertex).copied()
    }
}

impl<'g, W, G> Iterator for Topological<'g, W, G>
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let vertex = self.fringe.pop()?;
        self.visited.insert(vertex);

        let mut targets = self.graph.neighbors(vertex);
        targets.sort_unstable();
        targets.dedup();
        for target in targets {
            self.in_degrees[target] = self.in_degrees[target].saturating_sub(1);
        }

        for candidate in 0..self.in_degrees.len() {
            if self.in_degrees[candidate] == 0
                && !self.visited.contains(candidate)
                && !self.fringe.contains(candidate)
            {
                trace!("topological: {} is ready", candidate);
                self.fringe.push(candidate);
            }
        }
        Some(vertex)
    }
}

impl<'g, W, G> FusedIterator for Topological<'g, W, G>
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
}

/// Collects the topological iteration over `graph`
///
/// On a graph with cycles the result holds fewer than `vertex_count` vertices.
pub fn topological_sort<W, G>(graph: &G) -> Vec<usize>
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    Topological::<W, G>::new(graph).collect()
}

/// Returns true if some vertex can never be emitted in topological order
pub fn has_cycle<W, G>(graph: &G) -> bool
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    topological_sort::<W, G>(graph).len() < graph.vertex_count()
}
