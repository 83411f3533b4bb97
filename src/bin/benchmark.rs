use std::env;
use std::time::{Duration, Instant};

use adjacency_graph::graph::generators::random_graph;
use adjacency_graph::DirectedGraph;
use log::info;

// Times one traversal; the closure returns how many vertices it produced
fn time_it<F>(name: &str, graph: &DirectedGraph, run: F) -> Duration
where
    F: FnOnce(&DirectedGraph) -> usize,
{
    let start = Instant::now();
    let produced = run(graph);
    let duration = start.elapsed();
    println!("  - {:<16} {:>8} vertices in {:?}", name, produced, duration);
    duration
}

fn main() {
    env_logger::init();

    // Vertex counts may be given on the command line
    let graph_sizes: Vec<usize> = {
        let parsed: Vec<usize> = env::args().skip(1).filter_map(|arg| arg.parse().ok()).collect();
        if parsed.is_empty() {
            // in-degrees are found by scanning every vertex, so keep these small
            vec![100, 500, 1_000, 2_000]
        } else {
            parsed
        }
    };

    // Edge factor: average number of edges per vertex
    let edge_factor = 3.0;
    let max_weight = 100;

    println!("=====================================================");
    println!("Benchmark: DFS, topological sort, Dijkstra");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &graph_sizes {
        info!("generating random graph with {} vertices", size);
        let graph = random_graph(size, edge_factor, max_weight, size as u64);
        println!("\nGraph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let dfs_time = time_it("dfs", &graph, |g| g.dfs(0).map_or(0, |order| order.len()));
        let topo_time = time_it("topological", &graph, |g| g.topological_sort().len());
        let dijkstra_time = time_it("dijkstra", &graph, |g| {
            g.shortest_paths(0)
                .map_or(0, |result| result.distances.iter().filter(|d| d.is_some()).count())
        });

        results.push((size, dfs_time, topo_time, dijkstra_time));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<12} | {:<12} | {:<12}", "Vertices", "DFS (ms)", "Topo (ms)", "Dijkstra (ms)");
    println!("-----------------------------------------------------");

    for (size, dfs_time, topo_time, dijkstra_time) in &results {
        println!(
            "{:<10} | {:<12.3} | {:<12.3} | {:<12.3}",
            size,
            dfs_time.as_secs_f64() * 1000.0,
            topo_time.as_secs_f64() * 1000.0,
            dijkstra_time.as_secs_f64() * 1000.0
        );
    }
}
