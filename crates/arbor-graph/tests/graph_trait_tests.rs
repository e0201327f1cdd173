// SPDX-License-Identifier: Apache-2.0

#![allow(missing_docs)]
use arbor_graph::{Dag, DirectedGraph, Graph, Tree, Vertex};

fn vertex(label: &str, id: i64) -> Vertex {
    Vertex::from_parts(label, id)
}

/// Exercises the shared surface through the trait object-safe path.
fn populate(g: &mut dyn Graph) {
    g.add(&vertex("A", 1));
    g.add(&vertex("B", 2));
    g.add(&vertex("C", 3));
}

fn summarize<G: Graph>(g: &G) -> (usize, usize, String) {
    (g.vertex_count(), g.edge_count(), g.to_string())
}

#[test]
fn all_flavors_share_the_query_surface() {
    let mut digraph = DirectedGraph::new();
    let mut dag = Dag::new();
    let mut tree = Tree::new();
    populate(&mut digraph);
    populate(&mut dag);
    populate(&mut tree);

    for (vertices, edges, dump) in [
        summarize(&digraph),
        summarize(&dag),
        summarize(&tree),
    ] {
        assert_eq!(vertices, 3);
        assert_eq!(edges, 0);
        assert!(dump.contains("# vertices = 3"));
    }
}

#[test]
fn trait_removal_and_top_delegate() {
    let mut dag = Dag::new();
    populate(&mut dag);
    let g: &mut dyn Graph = &mut dag;

    assert_eq!(g.top(), Some(&vertex("A", 1)));
    g.remove(&vertex("A", 1));
    assert_eq!(g.vertex_count(), 2);
    assert_eq!(g.top(), Some(&vertex("B", 2)));
    assert_eq!(g.neighbors(&vertex("B", 2)), Vec::<Vertex>::new());
    assert!(!g.are_adjacent(&vertex("B", 2), &vertex("C", 3)));
}
