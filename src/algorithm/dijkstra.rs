use log::{debug, trace, warn};

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{MinQueue, VertexSet};
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Dijkstra's algorithm with lazy deletion
///
/// The queue may hold several entries for one vertex. A vertex is finalized
/// the first time it is popped and every later entry for it is discarded.
/// Weights are assumed non-negative; negative weights are logged, not
/// rejected, and give no guarantee on the result. A relaxation whose sum
/// overflows the weight type is skipped.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }

        let n = graph.vertex_count();
        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut finalized = VertexSet::with_capacity(n);

        if let Some((u, v, weight)) = (0..n)
            .flat_map(|u| graph.outgoing_edges(u).map(move |(v, w)| (u, v, w)))
            .find(|&(_, _, w)| w < W::zero())
        {
            warn!("negative edge weight {:?} on {} -> {}", weight, u, v);
        }

        distances[source] = Some(W::zero());
        let mut queue = MinQueue::new();
        queue.push(source, W::zero());

        while let Some((u, _)) = queue.pop() {
            if !finalized.insert(u) {
                continue;
            }
            let Some(dist_u) = distances[u] else {
                continue;
            };

            for (v, weight) in graph.outgoing_edges(u) {
                // a distance past the weight type's range is never recorded
                let improved = match dist_u.checked_sum(weight) {
                    None => {
                        trace!("dijkstra: skipping {} -> {}, distance overflows", u, v);
                        None
                    }
                    Some(new_dist) => match distances[v] {
                        Some(current) if current <= new_dist => None,
                        _ => Some(new_dist),
                    },
                };
                if let Some(new_dist) = improved {
                    distances[v] = Some(new_dist);
                    predecessors[v] = Some(u);
                }

                // re-queued even without improvement; stale entries drop on pop
                if let Some(priority) = distances[v] {
                    queue.push(v, priority);
                }
            }
        }

        debug!(
            "dijkstra from {}: {} of {} vertices reachable",
            source,
            finalized.len(),
            n
        );

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::generators::sample_graphs;
    use crate::graph::DirectedGraph;

    #[test]
    fn weighted_demo_graph_distances() {
        let graph = sample_graphs::weighted();
        let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

        assert_eq!(
            result.distances,
            vec![Some(0), Some(10), Some(50), Some(30), Some(60)]
        );
        assert_eq!(result.predecessors, vec![None, Some(0), Some(3), Some(0), Some(2)]);
        assert_eq!(result.path_to(4), Some(vec![0, 3, 2, 4]));
    }

    #[test]
    fn unreachable_vertices_stay_unset() {
        let mut graph: DirectedGraph = DirectedGraph::new(3);
        graph.add_edge(1, 2, 4).unwrap();

        let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
        assert_eq!(result.distances, vec![Some(0), None, None]);
        assert_eq!(
            Dijkstra::new().shortest_path(&graph, 0, 2),
            Err(Error::NoPathFound { start: 0, stop: 2 })
        );
    }

    #[test]
    fn rejects_unknown_source() {
        let graph: DirectedGraph = DirectedGraph::new(2);
        assert_eq!(
            Dijkstra::new().compute_shortest_paths(&graph, 2),
            Err(Error::InvalidVertex(2))
        );
        assert_eq!(
            <Dijkstra as ShortestPathAlgorithm<i64, DirectedGraph>>::name(&Dijkstra::new()),
            "Dijkstra"
        );
    }

    #[test]
    fn overflowing_relaxation_is_skipped() {
        let mut graph: DirectedGraph = DirectedGraph::new(4);
        graph.add_edge(0, 1, i64::MAX).unwrap();
        graph.add_edge(1, 2, 1).unwrap();
        graph.add_edge(0, 3, 5).unwrap();
        graph.add_edge(3, 2, 7).unwrap();

        let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
        assert_eq!(result.distance(1), Some(i64::MAX));
        assert_eq!(result.distance(2), Some(12));
        assert_eq!(result.path_to(2), Some(vec![0, 3, 2]));

        let mut only_route: DirectedGraph = DirectedGraph::new(3);
        only_route.add_edge(0, 1, i64::MAX).unwrap();
        only_route.add_edge(1, 2, 1).unwrap();
        assert_eq!(
            Dijkstra::new().shortest_path(&only_route, 0, 2),
            Err(Error::NoPathFound { start: 0, stop: 2 })
        );
    }

    #[test]
    fn zero_weight_edges_and_parallel_edges() {
        let mut graph: DirectedGraph = DirectedGraph::new(3);
        graph.add_edge(0, 1, 9).unwrap();
        graph.add_edge(0, 1, 2).unwrap();
        graph.add_unweighted_edge(1, 2).unwrap();

        let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
        assert_eq!(result.distance(1), Some(2));
        assert_eq!(result.distance(2), Some(2));
    }
}
