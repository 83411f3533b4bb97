pub mod directed;
pub mod generators;
pub mod traits;

pub use directed::{DirectedGraph, Edge};
pub use traits::{Graph, MutableGraph, Weight};
