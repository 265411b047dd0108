//! Randomized structural exercises checking the adjacency invariants hold
//! after arbitrary mutation sequences.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use adjacency_graph::{DirectedGraph, Graph, NodeId, UndirectedGraph};

const NODE_RANGE: NodeId = 30;
const OPERATIONS: usize = 5_000;

fn random_op<G: Graph>(graph: &mut G, rng: &mut StdRng) {
    let a = rng.gen_range(0..NODE_RANGE);
    let b = rng.gen_range(0..NODE_RANGE);
    match rng.gen_range(0..8) {
        0 => {
            graph.add_node(a);
        }
        1 | 2 | 3 => {
            graph.add_edge(a, b, rng.gen_range(0.0..10.0));
        }
        4 => {
            graph.remove_edge(a, b);
        }
        5 => {
            graph.clear_node(a);
        }
        6 => {
            graph.remove_node(a);
        }
        _ => {
            graph.add_unweighted_edge(a, b);
        }
    }
}

/// Mirror invariant: successors and predecessors agree on every edge and
/// weight, and the incremental edge count matches the stored structure.
fn check_directed(graph: &DirectedGraph) {
    assert_eq!(graph.nodes().count(), graph.node_count());

    let mut edges_seen = 0;
    for u in graph.nodes() {
        for v in graph.children_of(u) {
            edges_seen += 1;
            let parents: HashSet<NodeId> = graph.parents_of(v).collect();
            assert!(parents.contains(&u), "missing mirror for edge ({u}, {v})");
            assert!(!graph.edge_weight(u, v).is_nan());
        }
        for v in graph.parents_of(u) {
            let children: HashSet<NodeId> = graph.children_of(v).collect();
            assert!(children.contains(&u), "stray predecessor entry ({v}, {u})");
        }
    }
    assert_eq!(edges_seen, graph.edge_count());
}

/// Symmetry invariant: every neighbor entry is mirrored, no self-loops, and
/// each mirrored pair counts as one edge.
fn check_undirected(graph: &UndirectedGraph) {
    assert_eq!(graph.nodes().count(), graph.node_count());

    let mut entries_seen = 0;
    for u in graph.nodes() {
        assert!(!graph.has_edge(u, u), "self-loop on node {u}");
        for v in graph.children_of(u) {
            entries_seen += 1;
            assert!(graph.has_edge(v, u));
            assert_eq!(graph.edge_weight(u, v), graph.edge_weight(v, u));
        }
    }
    assert_eq!(entries_seen, graph.edge_count() * 2);
}

#[test]
fn test_directed_invariants_under_random_mutation() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut rng = StdRng::seed_from_u64(0x1157);
    let mut graph = DirectedGraph::new();

    let mut last_count = graph.modification_count();
    for i in 0..OPERATIONS {
        random_op(&mut graph, &mut rng);
        let count = graph.modification_count();
        assert!(count >= last_count, "modification count went backwards");
        last_count = count;

        if i % 500 == 0 {
            check_directed(&graph);
        }
    }
    check_directed(&graph);

    graph.clear();
    assert!(graph.is_empty());
    assert_eq!(graph.edge_count(), 0);
    check_directed(&graph);
}

#[test]
fn test_undirected_invariants_under_random_mutation() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut rng = StdRng::seed_from_u64(0x2264);
    let mut graph = UndirectedGraph::new();

    let mut last_count = graph.modification_count();
    for i in 0..OPERATIONS {
        random_op(&mut graph, &mut rng);
        let count = graph.modification_count();
        assert!(count >= last_count, "modification count went backwards");
        last_count = count;

        if i % 500 == 0 {
            check_undirected(&graph);
        }
    }
    check_undirected(&graph);

    graph.clear();
    assert!(graph.is_empty());
    assert_eq!(graph.edge_count(), 0);
    check_undirected(&graph);
}
