use log::warn;
use serde::Serialize;

use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPathResult<W>
where
    W: Weight,
{
    /// Distances from source to each vertex, `None` when unreachable
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Weight,
{
    pub fn distance(&self, target: usize) -> Option<W> {
        self.distances.get(target).copied().flatten()
    }

    pub fn is_reachable(&self, target: usize) -> bool {
        self.distance(target).is_some()
    }

    /// Walks the predecessor tree from `target` back to the source
    ///
    /// Returns `None` when `target` is out of range or unreachable.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            let pred = self.predecessors[current]?;
            path.push(pred);
            current = pred;

            if path.len() > self.predecessors.len() {
                warn!("predecessor cycle while rebuilding path to {}", target);
                return None;
            }
        }
        path.reverse();
        Some(path)
    }
}

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>> {
        result.path_to(target)
    }

    /// Lightest path from `start` to `stop`
    ///
    /// `[start]` when the two coincide, `Error::NoPathFound` when `stop` is
    /// unreachable.
    fn shortest_path(&self, graph: &G, start: usize, stop: usize) -> Result<Vec<usize>> {
        for vertex in [start, stop] {
            if !graph.has_vertex(vertex) {
                return Err(Error::InvalidVertex(vertex));
            }
        }
        if start == stop {
            return Ok(vec![start]);
        }

        let result = self.compute_shortest_paths(graph, start)?;
        self.get_path(&result, stop)
            .ok_or(Error::NoPathFound { start, stop })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> ShortestPathResult<i64> {
        // 0 -> 1 -> 2, 3 unreachable
        ShortestPathResult {
            distances: vec![Some(0), Some(4), Some(9), None],
            predecessors: vec![None, Some(0), Some(1), None],
            source: 0,
        }
    }

    #[test]
    fn path_to_follows_predecessors() {
        let result = tree();
        assert_eq!(result.path_to(2), Some(vec![0, 1, 2]));
        assert_eq!(result.path_to(0), Some(vec![0]));
        assert_eq!(result.distance(2), Some(9));
    }

    #[test]
    fn unreachable_or_unknown_targets_have_no_path() {
        let result = tree();
        assert_eq!(result.path_to(3), None);
        assert_eq!(result.path_to(10), None);
        assert!(!result.is_reachable(3));
    }

    #[test]
    fn predecessor_cycle_is_detected() {
        let result = ShortestPathResult {
            distances: vec![Some(0i64), Some(1), Some(1)],
            predecessors: vec![None, Some(2), Some(1)],
            source: 0,
        };
        assert_eq!(result.path_to(1), None);
    }
}
