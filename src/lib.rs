//! Adjacency Graph - weighted directed graphs over dense vertex ids
//!
//! A graph is created with a fixed number of vertices `0..n` and grows only by
//! appending edges. On top of it the crate provides lazy depth-first and
//! topological iterators, reachability and path queries, and single-source
//! shortest paths with a lazy-deletion Dijkstra.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod traversal;

pub use algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPathResult};
/// Re-export main types for convenient use
pub use graph::directed::{DirectedGraph, Edge};
pub use graph::traits::Weight;
pub use traversal::{DepthFirst, Topological};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("No path from {start} to {stop}")]
    NoPathFound { start: usize, stop: usize },

    #[error("Path weight overflows at edge from {0} to {1}")]
    WeightOverflow(usize, usize),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
