// SPDX-License-Identifier: Apache-2.0
//! Shared query/mutation surface across graph flavors.

use std::fmt;

use crate::dag::Dag;
use crate::digraph::DirectedGraph;
use crate::tree::Tree;
use crate::vertex::Vertex;

/// Operations common to [`DirectedGraph`], [`Dag`], and [`Tree`].
///
/// Edge insertion is deliberately absent: the unconstrained graph inserts
/// infallibly while the constrained flavors can reject, so each type keeps
/// its own `add_edge` signature. `Display` is a supertrait because every
/// flavor renders the same human-readable dump.
pub trait Graph: fmt::Display {
    /// Records the vertex's presence in the graph.
    fn add(&mut self, vertex: &Vertex);

    /// Returns `true` iff a true edge runs from `source` to `dest`.
    fn are_adjacent(&self, source: &Vertex, dest: &Vertex) -> bool;

    /// Destinations of true edges originating at `vertex`, insertion order.
    fn neighbors(&self, vertex: &Vertex) -> Vec<Vertex>;

    /// Removes the vertex's presence records and outgoing edges.
    fn remove(&mut self, vertex: &Vertex);

    /// Number of true edges.
    fn edge_count(&self) -> usize;

    /// Number of distinct vertex ids referenced by stored records.
    fn vertex_count(&self) -> usize;

    /// Some deterministic vertex of the graph, or `None` when empty.
    fn top(&self) -> Option<&Vertex>;
}

impl Graph for DirectedGraph {
    fn add(&mut self, vertex: &Vertex) {
        DirectedGraph::add(self, vertex);
    }

    fn are_adjacent(&self, source: &Vertex, dest: &Vertex) -> bool {
        DirectedGraph::are_adjacent(self, source, dest)
    }

    fn neighbors(&self, vertex: &Vertex) -> Vec<Vertex> {
        DirectedGraph::neighbors(self, vertex)
    }

    fn remove(&mut self, vertex: &Vertex) {
        DirectedGraph::remove(self, vertex);
    }

    fn edge_count(&self) -> usize {
        DirectedGraph::edge_count(self)
    }

    fn vertex_count(&self) -> usize {
        DirectedGraph::vertex_count(self)
    }

    fn top(&self) -> Option<&Vertex> {
        DirectedGraph::top(self)
    }
}

impl Graph for Dag {
    fn add(&mut self, vertex: &Vertex) {
        Dag::add(self, vertex);
    }

    fn are_adjacent(&self, source: &Vertex, dest: &Vertex) -> bool {
        Dag::are_adjacent(self, source, dest)
    }

    fn neighbors(&self, vertex: &Vertex) -> Vec<Vertex> {
        Dag::neighbors(self, vertex)
    }

    fn remove(&mut self, vertex: &Vertex) {
        Dag::remove(self, vertex);
    }

    fn edge_count(&self) -> usize {
        Dag::edge_count(self)
    }

    fn vertex_count(&self) -> usize {
        Dag::vertex_count(self)
    }

    fn top(&self) -> Option<&Vertex> {
        Dag::top(self)
    }
}

impl Graph for Tree {
    fn add(&mut self, vertex: &Vertex) {
        Tree::add(self, vertex);
    }

    fn are_adjacent(&self, source: &Vertex, dest: &Vertex) -> bool {
        Tree::are_adjacent(self, source, dest)
    }

    fn neighbors(&self, vertex: &Vertex) -> Vec<Vertex> {
        Tree::neighbors(self, vertex)
    }

    fn remove(&mut self, vertex: &Vertex) {
        Tree::remove(self, vertex);
    }

    fn edge_count(&self) -> usize {
        Tree::edge_count(self)
    }

    fn vertex_count(&self) -> usize {
        Tree::vertex_count(self)
    }

    fn top(&self) -> Option<&Vertex> {
        Tree::top(self)
    }
}
