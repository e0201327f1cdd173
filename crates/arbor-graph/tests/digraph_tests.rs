// SPDX-License-Identifier: Apache-2.0

#![allow(missing_docs)]
use arbor_graph::{DirectedGraph, Edge, Value, Vertex};

fn vertex(label: &str, id: i64) -> Vertex {
    Vertex::from_parts(label, id)
}

fn unconnected_graph() -> DirectedGraph {
    let mut g = DirectedGraph::new();
    g.add(&vertex("A", 1));
    g.add(&vertex("B", 2));
    g.add(&vertex("C", 3));
    g
}

#[test]
fn three_isolated_vertices_count_as_three_vertices_zero_edges() {
    let g = unconnected_graph();
    assert_eq!(g.vertex_count(), 3);
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn adjacency_is_directed() {
    let mut g = unconnected_graph();
    let (a, b, c) = (vertex("A", 1), vertex("B", 2), vertex("C", 3));
    g.add_edge(&a, &b);
    g.add_edge(&a, &c);

    assert_eq!(g.edge_count(), 2);
    assert!(g.are_adjacent(&a, &b));
    assert!(!g.are_adjacent(&b, &a));
    assert!(g.are_adjacent(&a, &c));
    assert!(!g.are_adjacent(&c, &a));
    assert!(!g.are_adjacent(&b, &c));
}

#[test]
fn unconnected_vertices_are_not_adjacent() {
    let g = unconnected_graph();
    let (a, b) = (vertex("A", 1), vertex("B", 2));
    assert!(!g.are_adjacent(&a, &b));
    assert!(!g.are_adjacent(&b, &a));
}

#[test]
fn insert_edge_appends_a_caller_built_edge() {
    let mut g = DirectedGraph::new();
    let (a, b, c) = (vertex("A", 1), vertex("B", 2), vertex("C", 3));
    g.add_edge(&a, &b);
    g.add_edge(&a, &c);

    let e = Edge::with_endpoints(a.clone(), b.clone(), Value::dummy());
    g.insert_edge(&e);
    assert_eq!(g.edge_count(), 3);
}

#[test]
fn neighbors_follow_insertion_order_and_source_only() {
    let mut g = DirectedGraph::new();
    let (a, b, c) = (vertex("A", 1), vertex("B", 2), vertex("C", 3));
    g.add_edge(&a, &c);
    g.add_edge(&a, &b);
    g.add_edge(&b, &a);

    assert_eq!(g.neighbors(&a), vec![c.clone(), b.clone()]);
    assert_eq!(g.neighbors(&b), vec![a.clone()]);
    assert_eq!(g.neighbors(&c), Vec::<Vertex>::new());
}

#[test]
fn remove_edge_removes_only_the_first_match() {
    let mut g = DirectedGraph::new();
    let (a, b) = (vertex("A", 1), vertex("B", 2));
    g.add_edge(&a, &b);
    g.add_edge(&a, &b);
    assert_eq!(g.edge_count(), 2);

    let e = Edge::with_endpoints(a.clone(), b.clone(), Value::dummy());
    g.remove_edge(&e);
    assert_eq!(g.edge_count(), 1);
    assert!(g.are_adjacent(&a, &b));

    g.remove_edge(&e);
    assert_eq!(g.edge_count(), 0);
    assert!(!g.are_adjacent(&a, &b));
}

#[test]
fn remove_edge_with_wrong_payload_is_a_noop() {
    let mut g = DirectedGraph::new();
    let (a, b) = (vertex("A", 1), vertex("B", 2));
    g.add_edge(&a, &b);

    let e = Edge::with_endpoints(a.clone(), b.clone(), Value::new("weight", 7));
    g.remove_edge(&e);
    assert_eq!(g.edge_count(), 1);
}

#[test]
fn remove_edge_on_a_partial_edge_is_a_noop() {
    let mut g = DirectedGraph::new();
    let (a, b) = (vertex("A", 1), vertex("B", 2));
    g.add_edge(&a, &b);

    let mut partial = Edge::new();
    partial.set_source(&a);
    g.remove_edge(&partial);
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.record_count(), 1);
}

#[test]
fn remove_deletes_source_records_but_leaves_dest_only_edges() {
    let mut g = DirectedGraph::new();
    let (a, b) = (vertex("A", 1), vertex("B", 2));
    g.add(&a);
    g.add(&b);
    g.add_edge(&a, &b);
    g.add_edge(&b, &a);

    g.remove(&a);
    // A's presence record and A -> B are gone; B -> A dangles.
    assert_eq!(g.edge_count(), 1);
    assert!(!g.are_adjacent(&a, &b));
    assert!(g.are_adjacent(&b, &a));
    // A stays counted while the dangling inbound edge references it.
    assert_eq!(g.vertex_count(), 2);
}

#[test]
fn remove_of_an_unknown_vertex_is_a_noop() {
    let mut g = unconnected_graph();
    g.remove(&vertex("Z", 99));
    assert_eq!(g.vertex_count(), 3);
    assert_eq!(g.record_count(), 3);
}

#[test]
fn remove_prunes_vertices_with_no_remaining_references() {
    let mut g = unconnected_graph();
    assert_eq!(g.vertex_count(), 3);
    g.remove(&vertex("A", 1));
    assert_eq!(g.vertex_count(), 2);
}

#[test]
fn edge_count_never_exceeds_record_count() {
    let mut g = unconnected_graph();
    let (a, b) = (vertex("A", 1), vertex("B", 2));
    g.add_edge(&a, &b);
    assert!(g.edge_count() <= g.record_count());
    assert_eq!(g.record_count(), 4);
    assert_eq!(g.edge_count(), 1);
}

#[test]
fn top_is_the_first_inserted_source() {
    let mut g = DirectedGraph::new();
    assert!(g.top().is_none());

    let (a, b) = (vertex("A", 1), vertex("B", 2));
    g.add(&b);
    g.add_edge(&a, &b);
    assert_eq!(g.top(), Some(&b));

    g.remove(&b);
    assert_eq!(g.top(), Some(&a));
}

#[test]
fn display_dumps_header_and_one_line_per_record() {
    let g = unconnected_graph();
    let dump = g.to_string();
    assert!(dump.contains("# vertices = 3"));
    assert_eq!(dump.matches(" -> NULL").count(), 3);
    assert!(dump.contains("(A, 1) -> NULL"));
}

#[test]
fn display_shows_true_edges_with_both_endpoints() {
    let mut g = DirectedGraph::new();
    let (a, b) = (vertex("A", 1), vertex("B", 2));
    g.add_edge(&a, &b);
    assert!(g.to_string().contains("(A, 1) -> (B, 2)"));
}

#[test]
fn readding_a_vertex_updates_the_registry_copy() {
    let mut g = DirectedGraph::new();
    let (a, b) = (vertex("A", 1), vertex("B", 2));
    g.add_edge(&a, &b);

    let renamed = vertex("A2", 1);
    g.add(&renamed);
    assert_eq!(g.vertex_count(), 2);
    assert_eq!(g.neighbors(&b), Vec::<Vertex>::new());
    assert_eq!(g.neighbors(&renamed), vec![b]);
}
