use crate::algorithm::{Dijkstra, ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::traits::{Graph, MutableGraph, Weight};
use crate::traversal::{depth_first, topological, DepthFirst, Topological};
use crate::{Error, Result};
use serde::Serialize;
use std::fmt;

/// A directed, weighted edge record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge<W> {
    pub from: usize,
    pub to: usize,
    pub weight: W,
}

impl<W> Edge<W> {
    pub fn new(from: usize, to: usize, weight: W) -> Self {
        Edge { from, to, weight }
    }
}

impl<W: fmt::Display> fmt::Display for Edge<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, weight = {})", self.from, self.to, self.weight)
    }
}

/// A directed graph implementation using adjacency lists
///
/// The vertex set `0..vertex_count` is fixed at construction. Edges are only
/// ever appended: inserting the same `(from, to)` pair twice stores two
/// parallel edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectedGraph<W = i64>
where
    W: Weight,
{
    /// Number of vertices in the graph
    vertex_count: usize,

    /// Outgoing edges for each vertex, indexed by vertex id
    adjacency: Vec<Vec<Edge<W>>>,
}

impl<W> DirectedGraph<W>
where
    W: Weight,
{
    /// Creates a graph with `vertex_count` vertices and no edges
    pub fn new(vertex_count: usize) -> Self {
        DirectedGraph {
            vertex_count,
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    /// Builds a graph from `(from, to, weight)` triples, in order
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = DirectedGraph::new(vertex_count);
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Number of vertices, fixed at construction
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of stored edges, parallel edges counted separately
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|edges| edges.len()).sum()
    }

    /// Returns `Error::InvalidVertex` unless `vertex` is in `0..vertex_count`
    pub fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex < self.vertex_count {
            Ok(())
        } else {
            Err(Error::InvalidVertex(vertex))
        }
    }

    /// Appends the directed edge `from -> to` with the given weight
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        self.adjacency[from].push(Edge::new(from, to, weight));
        Ok(())
    }

    /// Appends the directed edge `from -> to` with weight zero
    pub fn add_unweighted_edge(&mut self, from: usize, to: usize) -> Result<()> {
        self.add_edge(from, to, W::zero())
    }

    /// Appends `a -> b` and `b -> a`, both with the given weight
    ///
    /// Both endpoints are validated first, so a failed call adds nothing.
    pub fn add_undirected_edge(&mut self, a: usize, b: usize, weight: W) -> Result<()> {
        self.check_vertex(a)?;
        self.check_vertex(b)?;
        self.adjacency[a].push(Edge::new(a, b, weight));
        self.adjacency[b].push(Edge::new(b, a, weight));
        Ok(())
    }

    /// Appends `a -> b` and `b -> a` with weight zero
    pub fn add_unweighted_undirected_edge(&mut self, a: usize, b: usize) -> Result<()> {
        self.add_undirected_edge(a, b, W::zero())
    }

    /// Outgoing edges of `vertex` in insertion order
    pub fn edges(&self, vertex: usize) -> Result<&[Edge<W>]> {
        self.check_vertex(vertex)?;
        Ok(&self.adjacency[vertex])
    }

    /// Iterates every stored edge, grouped by source vertex
    pub fn all_edges(&self) -> impl Iterator<Item = &Edge<W>> + '_ {
        self.adjacency.iter().flatten()
    }

    /// The first stored edge `from -> to`, if any
    pub fn edge(&self, from: usize, to: usize) -> Result<Option<&Edge<W>>> {
        let edges = self.edges(from)?;
        self.check_vertex(to)?;
        Ok(edges.iter().find(|e| e.to == to))
    }

    /// Returns true iff some stored edge goes from `from` to `to`
    pub fn is_adjacent(&self, from: usize, to: usize) -> Result<bool> {
        Ok(self.edge(from, to)?.is_some())
    }

    /// Targets of `vertex`'s outgoing edges in insertion order, not deduplicated
    pub fn neighbors(&self, vertex: usize) -> Result<Vec<usize>> {
        Ok(self.edges(vertex)?.iter().map(|e| e.to).collect())
    }

    /// Number of outgoing edges stored for `vertex`
    pub fn out_degree(&self, vertex: usize) -> Result<usize> {
        Ok(self.edges(vertex)?.len())
    }

    /// Number of vertices `u` such that `is_adjacent(u, vertex)`
    pub fn in_degree(&self, vertex: usize) -> Result<usize> {
        self.check_vertex(vertex)?;
        Ok(<Self as Graph<W>>::in_degree(self, vertex))
    }

    /// Total weight of a vertex sequence, taking the lightest parallel edge per hop
    pub fn path_weight(&self, path: &[usize]) -> Result<W> {
        if let Some(&first) = path.first() {
            self.check_vertex(first)?;
        }
        let mut total = W::zero();
        for hop in path.windows(2) {
            let (from, to) = (hop[0], hop[1]);
            let lightest = self
                .edges(from)?
                .iter()
                .filter(|e| e.to == to)
                .map(|e| e.weight)
                .min()
                .ok_or(Error::InvalidEdge(from, to))?;
            total = total
                .checked_sum(lightest)
                .ok_or(Error::WeightOverflow(from, to))?;
        }
        Ok(total)
    }

    /// Returns true if any stored edge has a weight below zero
    pub fn has_negative_weight(&self) -> bool {
        self.all_edges().any(|e| e.weight < W::zero())
    }

    /// Lazy depth-first iteration of the vertices reachable from `start`
    pub fn depth_first(&self, start: usize) -> Result<DepthFirst<'_, W, Self>> {
        self.check_vertex(start)?;
        Ok(DepthFirst::new(self, start))
    }

    /// Vertices reachable from `start`, in depth-first iteration order
    pub fn dfs(&self, start: usize) -> Result<Vec<usize>> {
        depth_first::dfs::<W, Self>(self, start)
    }

    /// Returns true iff `stop` is reachable from `start`
    pub fn path_exists(&self, start: usize, stop: usize) -> Result<bool> {
        depth_first::path_exists::<W, Self>(self, start, stop)
    }

    /// Some path from `start` to `stop`; empty if none exists
    pub fn path(&self, start: usize, stop: usize) -> Result<Vec<usize>> {
        depth_first::path::<W, Self>(self, start, stop)
    }

    /// Lazy topological iteration over all vertices
    pub fn topological(&self) -> Topological<'_, W, Self> {
        Topological::new(self)
    }

    /// Vertices in topological order; vertices on or behind a cycle are left out
    pub fn topological_sort(&self) -> Vec<usize> {
        topological::topological_sort::<W, Self>(self)
    }

    /// Returns true if the graph contains a directed cycle
    pub fn has_cycle(&self) -> bool {
        topological::has_cycle::<W, Self>(self)
    }

    /// Distances and predecessor tree of every vertex from `start`
    pub fn shortest_paths(&self, start: usize) -> Result<ShortestPathResult<W>> {
        <Dijkstra as ShortestPathAlgorithm<W, Self>>::compute_shortest_paths(&Dijkstra::new(), self, start)
    }

    /// Lightest path from `start` to `stop` by total edge weight
    pub fn shortest_path(&self, start: usize, stop: usize) -> Result<Vec<usize>> {
        <Dijkstra as ShortestPathAlgorithm<W, Self>>::shortest_path(&Dijkstra::new(), self, start, stop)
    }

    /// Total weight of the lightest path from `start` to `stop`
    pub fn shortest_distance(&self, start: usize, stop: usize) -> Result<W> {
        self.check_vertex(stop)?;
        self.shortest_paths(start)?
            .distance(stop)
            .ok_or(Error::NoPathFound { start, stop })
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        DirectedGraph::vertex_count(self)
    }

    fn edge_count(&self) -> usize {
        DirectedGraph::edge_count(self)
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(edges) = self.adjacency.get(vertex) {
            Box::new(edges.iter().map(|e| (e.to, e.weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }
}

impl<W> MutableGraph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool {
        DirectedGraph::add_edge(self, from, to, weight).is_ok()
    }
}

/// Iterating a graph reference yields its vertices in topological order
impl<'g, W> IntoIterator for &'g DirectedGraph<W>
where
    W: Weight,
{
    type Item = usize;
    type IntoIter = Topological<'g, W, DirectedGraph<W>>;

    fn into_iter(self) -> Self::IntoIter {
        self.topological()
    }
}
