use crate::graph::{DirectedGraph, MutableGraph};
use log::debug;
use rand::prelude::*;

/// Generates a random directed graph with about `edge_factor * n` edges
///
/// Endpoints are drawn uniformly (self-loops and parallel edges included) and
/// weights uniformly from `0..=max_weight`. The same seed always produces the
/// same graph.
pub fn random_graph(n: usize, edge_factor: f64, max_weight: i64, seed: u64) -> DirectedGraph {
    let mut graph = DirectedGraph::new(n);
    if n == 0 {
        return graph;
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let from = rng.gen_range(0..n);
        let to = rng.gen_range(0..n);
        let weight = rng.gen_range(0..=max_weight.max(0));
        let added = MutableGraph::add_edge(&mut graph, from, to, weight);
        debug_assert!(added, "endpoints drawn from 0..n");
    }

    debug!("random graph: {} vertices, {} edges, seed {}", n, num_edges, seed);
    graph
}

/// Generates a random directed acyclic graph: every edge goes from a lower to a higher id
pub fn random_dag(n: usize, edge_factor: f64, seed: u64) -> DirectedGraph {
    let mut graph = DirectedGraph::new(n);
    if n < 2 {
        return graph;
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let from = rng.gen_range(0..n - 1);
        let to = rng.gen_range(from + 1..n);
        let added = MutableGraph::add_edge(&mut graph, from, to, 0);
        debug_assert!(added, "endpoints drawn from 0..n");
    }
    graph
}

/// Generates an undirected `width x height` grid with unit weights
///
/// Vertex `y * width + x` is joined to its right and lower neighbors.
pub fn grid(width: usize, height: usize) -> DirectedGraph {
    let mut graph = DirectedGraph::new(width * height);

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            if x + 1 < width {
                let added = MutableGraph::add_undirected_edge(&mut graph, vertex, vertex + 1, 1);
                debug_assert!(added, "grid neighbor out of range");
            }
            if y + 1 < height {
                let added = MutableGraph::add_undirected_edge(&mut graph, vertex, vertex + width, 1);
                debug_assert!(added, "grid neighbor out of range");
            }
        }
    }

    graph
}

/// Small fixed graphs used by the demo driver and the tests
pub mod sample_graphs {
    use crate::graph::{DirectedGraph, MutableGraph};

    fn build(vertex_count: usize, edges: &[(usize, usize, i64)], undirected: bool) -> DirectedGraph {
        let mut graph = DirectedGraph::new(vertex_count);
        for &(from, to, weight) in edges {
            let added = if undirected {
                MutableGraph::add_undirected_edge(&mut graph, from, to, weight)
            } else {
                MutableGraph::add_edge(&mut graph, from, to, weight)
            };
            debug_assert!(added, "fixture edge {} -> {} out of range", from, to);
        }
        graph
    }

    /// Five vertices with the cycle 0 -> 2 -> 0
    pub fn g1() -> DirectedGraph {
        build(
            5,
            &[(0, 1, 0), (0, 2, 0), (0, 4, 0), (1, 2, 0), (2, 0, 0), (2, 3, 0), (4, 3, 0)],
            false,
        )
    }

    /// `g1` without the back edge, so acyclic
    pub fn g2() -> DirectedGraph {
        build(
            5,
            &[(0, 1, 0), (0, 2, 0), (0, 4, 0), (1, 2, 0), (2, 3, 0), (4, 3, 0)],
            false,
        )
    }

    /// Seven vertices, undirected, two components: {0, 2, 3, 6} and {1, 4, 5}
    pub fn g3() -> DirectedGraph {
        build(
            7,
            &[(0, 2, 0), (0, 3, 0), (1, 4, 0), (1, 5, 0), (2, 3, 0), (2, 6, 0), (4, 5, 0)],
            true,
        )
    }

    /// Cycle 0 -> 1 -> 2 -> 0 fed by 4 and draining into 3
    pub fn g4() -> DirectedGraph {
        build(5, &[(0, 1, 0), (1, 2, 0), (2, 0, 0), (2, 3, 0), (4, 2, 0)], false)
    }

    /// Weighted graph whose lightest 0 -> 2 path is 0 -> 3 -> 2 at cost 50
    pub fn weighted() -> DirectedGraph {
        build(
            5,
            &[
                (0, 1, 10),
                (0, 3, 30),
                (0, 4, 100),
                (1, 2, 50),
                (2, 4, 10),
                (3, 4, 60),
                (3, 2, 20),
            ],
            false,
        )
    }
}
