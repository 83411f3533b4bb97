pub mod fringe;
pub mod priority_queue;
pub mod vertex_set;

pub use fringe::Fringe;
pub use priority_queue::MinQueue;
pub use vertex_set::VertexSet;
