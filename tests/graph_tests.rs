use adjacency_graph::graph::generators::random_graph;
use adjacency_graph::graph::{Graph, MutableGraph};
use adjacency_graph::{DirectedGraph, Edge, Error};

#[test]
fn vertex_count_never_changes() {
    let mut graph: DirectedGraph = DirectedGraph::new(6);
    for (from, to) in [(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0), (0, 1)] {
        graph.add_edge(from, to, 1).unwrap();
        assert_eq!(graph.vertex_count(), 6);
    }
    assert!(graph.add_edge(6, 0, 1).is_err());
    assert_eq!(graph.vertex_count(), 6);
    assert_eq!(graph.edge_count(), 7);
}

#[test]
fn undirected_edges_are_adjacent_both_ways() {
    let mut graph: DirectedGraph = DirectedGraph::new(4);
    graph.add_undirected_edge(0, 3, 8).unwrap();
    graph.add_unweighted_undirected_edge(1, 2).unwrap();

    for (a, b) in [(0, 3), (1, 2)] {
        assert!(graph.is_adjacent(a, b).unwrap());
        assert!(graph.is_adjacent(b, a).unwrap());
    }
    assert!(!graph.is_adjacent(0, 1).unwrap());
    assert_eq!(graph.edges(3).unwrap(), &[Edge::new(3, 0, 8)]);
}

#[test]
fn neighbors_count_every_insertion() {
    let graph = random_graph(30, 4.0, 9, 42);

    let mut expected = vec![0; 30];
    for edge in graph.all_edges() {
        expected[edge.from] += 1;
    }
    for v in 0..30 {
        assert_eq!(graph.neighbors(v).unwrap().len(), expected[v]);
        assert_eq!(graph.out_degree(v).unwrap(), expected[v]);
    }
}

#[test]
fn neighbors_keep_insertion_order() {
    let graph = DirectedGraph::from_edges(4, [(0, 3, 1), (0, 1, 1), (0, 3, 2), (0, 2, 1)]).unwrap();
    assert_eq!(graph.neighbors(0).unwrap(), vec![3, 1, 3, 2]);
}

#[test]
fn from_edges_stops_at_first_bad_vertex() {
    let result = DirectedGraph::from_edges(2, [(0, 1, 1), (1, 5, 1), (9, 0, 1)]);
    assert_eq!(result, Err(Error::InvalidVertex(5)));
}

#[test]
fn every_query_validates_vertices() {
    let graph: DirectedGraph = DirectedGraph::new(3);

    assert_eq!(graph.is_adjacent(3, 0), Err(Error::InvalidVertex(3)));
    assert_eq!(graph.is_adjacent(0, 3), Err(Error::InvalidVertex(3)));
    assert_eq!(graph.neighbors(4), Err(Error::InvalidVertex(4)));
    assert_eq!(graph.in_degree(3), Err(Error::InvalidVertex(3)));
    assert_eq!(graph.edge(0, 7), Err(Error::InvalidVertex(7)));
    assert_eq!(graph.dfs(3), Err(Error::InvalidVertex(3)));
    assert_eq!(graph.path(0, 3), Err(Error::InvalidVertex(3)));
    assert_eq!(graph.shortest_path(5, 0), Err(Error::InvalidVertex(5)));
    assert!(graph.depth_first(3).is_err());
}

#[test]
fn in_degree_matches_adjacency_scan() {
    let graph = random_graph(25, 3.0, 5, 3);
    for v in 0..25 {
        let expected = (0..25).filter(|&u| graph.is_adjacent(u, v).unwrap()).count();
        assert_eq!(graph.in_degree(v).unwrap(), expected);
    }
}

#[test]
fn trait_view_agrees_with_checked_api() {
    let mut graph: DirectedGraph = DirectedGraph::new(3);
    assert!(MutableGraph::add_edge(&mut graph, 0, 2, 4));
    assert!(!MutableGraph::add_edge(&mut graph, 0, 3, 4));
    assert!(MutableGraph::add_undirected_edge(&mut graph, 1, 2, 6));

    assert_eq!(Graph::edge_count(&graph), 3);
    assert!(Graph::has_edge(&graph, 2, 1));
    assert!(!Graph::has_edge(&graph, 2, 0));
    assert_eq!(Graph::get_edge_weight(&graph, 0, 2), Some(4));
    assert_eq!(Graph::outgoing_edges(&graph, 9).count(), 0);
}

#[test]
fn error_messages() {
    assert_eq!(Error::InvalidVertex(7).to_string(), "Invalid vertex ID: 7");
    assert_eq!(
        Error::NoPathFound { start: 1, stop: 4 }.to_string(),
        "No path from 1 to 4"
    );
    assert_eq!(Error::InvalidEdge(2, 3).to_string(), "Invalid edge: from 2 to 3");
}
