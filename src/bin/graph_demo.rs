use std::env;

use adjacency_graph::graph::generators::sample_graphs;
use adjacency_graph::{DirectedGraph, Result};
use log::debug;

/// Options for the demo, read from the command line
#[derive(Debug, Clone)]
struct DemoConfig {
    /// Print the weighted graph and its shortest-path tree as JSON
    json: bool,
    /// Source vertex for the shortest-path section
    source: usize,
    /// Target vertex for the shortest-path section
    target: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            json: false,
            source: 0,
            target: 2,
        }
    }
}

impl DemoConfig {
    fn from_args() -> Self {
        let mut config = DemoConfig::default();
        let mut args = env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--json" => config.json = true,
                "--source" => {
                    if let Some(v) = args.next().and_then(|v| v.parse().ok()) {
                        config.source = v;
                    }
                }
                "--target" => {
                    if let Some(v) = args.next().and_then(|v| v.parse().ok()) {
                        config.target = v;
                    }
                }
                other => eprintln!("ignoring unknown argument {:?}", other),
            }
        }
        config
    }
}

fn print_dfs(graph: &DirectedGraph, start: usize) -> Result<()> {
    println!("DFS traversal starting at {}: {:?}", start, graph.dfs(start)?);
    Ok(())
}

fn print_path(graph: &DirectedGraph, start: usize, stop: usize) -> Result<()> {
    let path = graph.path(start, stop)?;
    if path.is_empty() {
        println!("No path from {} to {}", start, stop);
    } else {
        println!("Path from {} to {}: {:?}", start, stop, path);
    }
    Ok(())
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let config = DemoConfig::from_args();
    debug!("demo configuration: {:?}", config);

    let g1 = sample_graphs::g1();
    for start in [0, 2, 3, 4] {
        print_dfs(&g1, start)?;
    }
    println!();

    for (start, stop) in [(0, 3), (0, 4), (1, 3), (1, 4), (4, 0)] {
        print_path(&g1, start, stop)?;
    }
    println!();

    let g2 = sample_graphs::g2();
    println!("Topological sort: {:?}", g2.topological_sort());
    println!();

    let weighted = sample_graphs::weighted();
    println!("Weighted graph edges:");
    for edge in weighted.all_edges() {
        println!("  {}", edge);
    }

    match weighted.shortest_path(config.source, config.target) {
        Ok(path) => println!(
            "Shortest path from {} to {}: {:?} (cost {})",
            config.source,
            config.target,
            path,
            weighted.path_weight(&path)?
        ),
        Err(e) => println!("Shortest path from {} to {}: {}", config.source, config.target, e),
    }

    if config.json {
        let tree = weighted.shortest_paths(config.source)?;
        println!("{}", serde_json::to_string_pretty(&weighted)?);
        println!("{}", serde_json::to_string_pretty(&tree)?);
    }

    Ok(())
}
