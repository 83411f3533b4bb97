use std::fmt::Debug;
use num_traits::Zero;
use ordered_float::OrderedFloat;

/// Edge weight bound used throughout the crate
///
/// Implemented for the primitive integers and for `OrderedFloat`, which
/// supplies the `Ord` that raw floats lack.
pub trait Weight: Copy + Ord + Zero + Debug {
    /// Sum of two weights, `None` when it cannot be represented
    fn checked_sum(self, rhs: Self) -> Option<Self>;
}

macro_rules! integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_sum(self, rhs: Self) -> Option<Self> {
                    self.checked_add(rhs)
                }
            }
        )*
    };
}

integer_weight!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for OrderedFloat<$t> {
                // inf + -inf is the only sum with no ordered value
                fn checked_sum(self, rhs: Self) -> Option<Self> {
                    let sum = self.0 + rhs.0;
                    if sum.is_nan() {
                        None
                    } else {
                        Some(OrderedFloat(sum))
                    }
                }
            }
        )*
    };
}

float_weight!(f32, f64);

/// Trait representing a weighted directed graph over vertices `0..vertex_count()`
///
/// Methods here are unchecked: an out-of-range vertex has no edges and no
/// neighbors. The checked API lives on the concrete graph type.
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex, in insertion order
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.outgoing_edges(from).any(|(target, _)| target == to)
    }

    /// Gets the weight of the first stored edge between two vertices
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing_edges(from)
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
    }

    /// Targets of the outgoing edges of `vertex`, duplicates included
    fn neighbors(&self, vertex: usize) -> Vec<usize> {
        self.outgoing_edges(vertex).map(|(target, _)| target).collect()
    }

    /// Number of distinct vertices `u` with an edge `u -> vertex`
    ///
    /// Scans every vertex, so this is O(V * average out-degree).
    fn in_degree(&self, vertex: usize) -> usize {
        (0..self.vertex_count())
            .filter(|&u| self.has_edge(u, vertex))
            .count()
    }
}

/// Trait for graphs that grow by appending edges
pub trait MutableGraph<W>: Graph<W>
where
    W: Weight,
{
    /// Appends a directed edge; returns false if either endpoint is out of range
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool;

    /// Appends the pair of directed edges `a -> b` and `b -> a`
    fn add_undirected_edge(&mut self, a: usize, b: usize, weight: W) -> bool {
        if !self.has_vertex(a) || !self.has_vertex(b) {
            return false;
        }
        self.add_edge(a, b, weight) && self.add_edge(b, a, weight)
    }
}
