// SPDX-License-Identifier: Apache-2.0
//! Directed acyclic graph: a cycle-rejecting wrapper over [`DirectedGraph`].

use std::fmt;

use thiserror::Error;

use crate::cycle::has_cycle;
use crate::digraph::DirectedGraph;
use crate::edge::Edge;
use crate::vertex::Vertex;

/// Error returned when an insert would close a directed cycle.
///
/// The graph is left exactly as it was before the rejected call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("edge {from} -> {to} would close a directed cycle")]
pub struct CycleError {
    /// Source endpoint of the rejected edge.
    pub from: Vertex,
    /// Destination endpoint of the rejected edge.
    pub to: Vertex,
}

/// A directed graph that enforces acyclicity at insert time.
///
/// Wraps a [`DirectedGraph`] by exclusive ownership and adds no stored
/// state. Every operation except edge insertion delegates unchanged; edge
/// insertion is transactional:
///
/// 1. The edge is staged into the wrapped graph, yielding an undo ticket
///    naming the exact record inserted.
/// 2. A full depth-first cycle check runs over the current edge set.
/// 3. On a cycle, the staged record — and only that record — is removed and
///    the call reports [`CycleError`]; otherwise the insert stands.
///
/// Because the rollback targets the ticket rather than a structurally equal
/// edge, a failed insert can never delete a pre-existing duplicate edge.
/// The invariant is enforced only at insert time: removal cannot introduce
/// a cycle, so no re-check runs there.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dag {
    graph: DirectedGraph,
}

impl Dag {
    /// Creates an empty DAG.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the vertex's presence. Delegates to [`DirectedGraph::add`].
    pub fn add(&mut self, vertex: &Vertex) {
        self.graph.add(vertex);
    }

    /// Inserts a true edge from `source` to `dest` with the sentinel
    /// payload, unless it would close a directed cycle.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError`] when the edge would close a cycle; the graph
    /// is rolled back to its pre-call record set (vertex presence records
    /// from earlier `add` calls are untouched).
    pub fn add_edge(&mut self, source: &Vertex, dest: &Vertex) -> Result<(), CycleError> {
        let staged = self.graph.stage_edge(source, dest);
        if has_cycle(&self.graph) {
            self.graph.unstage(staged);
            return Err(CycleError {
                from: source.clone(),
                to: dest.clone(),
            });
        }
        Ok(())
    }

    /// Inserts a caller-supplied edge under the same transactional contract
    /// as [`Dag::add_edge`].
    ///
    /// An edge missing an endpoint cannot close a cycle and commits
    /// directly (as a non-edge for counting purposes).
    ///
    /// # Errors
    ///
    /// Returns [`CycleError`] when the edge would close a cycle.
    pub fn insert_edge(&mut self, edge: &Edge) -> Result<(), CycleError> {
        let staged = self.graph.stage_record(edge);
        if has_cycle(&self.graph) {
            self.graph.unstage(staged);
            return Err(CycleError {
                from: edge.source().cloned().unwrap_or_default(),
                to: edge.dest().cloned().unwrap_or_default(),
            });
        }
        Ok(())
    }

    /// Removes the first record equal to `edge`. Delegates to
    /// [`DirectedGraph::remove_edge`]; removal never needs a cycle re-check.
    pub fn remove_edge(&mut self, edge: &Edge) {
        self.graph.remove_edge(edge);
    }

    /// Removes the vertex's presence records and outgoing edges. Delegates
    /// to [`DirectedGraph::remove`].
    pub fn remove(&mut self, vertex: &Vertex) {
        self.graph.remove(vertex);
    }

    /// Delegates to [`DirectedGraph::are_adjacent`].
    #[must_use]
    pub fn are_adjacent(&self, source: &Vertex, dest: &Vertex) -> bool {
        self.graph.are_adjacent(source, dest)
    }

    /// Delegates to [`DirectedGraph::neighbors`].
    #[must_use]
    pub fn neighbors(&self, vertex: &Vertex) -> Vec<Vertex> {
        self.graph.neighbors(vertex)
    }

    /// Delegates to [`DirectedGraph::edge_count`].
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Delegates to [`DirectedGraph::vertex_count`].
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Delegates to [`DirectedGraph::top`].
    #[must_use]
    pub fn top(&self) -> Option<&Vertex> {
        self.graph.top()
    }

    /// Read-only view of the wrapped graph.
    #[must_use]
    pub fn graph(&self) -> &DirectedGraph {
        &self.graph
    }
}

impl fmt::Display for Dag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.graph.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertex(label: &str, id: i64) -> Vertex {
        Vertex::from_parts(label, id)
    }

    #[test]
    fn rejected_insert_reports_the_offending_endpoints() {
        let mut dag = Dag::new();
        let (a, b) = (vertex("A", 1), vertex("B", 2));
        dag.add_edge(&a, &b).unwrap();
        let err = dag.add_edge(&b, &a).unwrap_err();
        assert_eq!(err.from, b);
        assert_eq!(err.to, a);
        assert_eq!(
            err.to_string(),
            "edge (B, 2) -> (A, 1) would close a directed cycle"
        );
    }

    #[test]
    fn self_loop_is_rejected() {
        let mut dag = Dag::new();
        let a = vertex("A", 1);
        assert!(dag.add_edge(&a, &a).is_err());
        assert_eq!(dag.edge_count(), 0);
        assert_eq!(dag.vertex_count(), 0);
    }

    #[test]
    fn rollback_targets_the_staged_record_not_an_equal_one() {
        let mut dag = Dag::new();
        let (a, b, c) = (vertex("A", 1), vertex("B", 2), vertex("C", 3));
        dag.add_edge(&a, &b).unwrap();
        dag.add_edge(&a, &b).unwrap();
        dag.add_edge(&b, &c).unwrap();
        let before = dag.graph().record_count();
        assert!(dag.add_edge(&c, &a).is_err());
        // Both duplicate A -> B records survive the rollback.
        assert_eq!(dag.graph().record_count(), before);
        assert_eq!(dag.edge_count(), 3);
    }

    #[test]
    fn partial_edge_commits_without_a_cycle_check_failure() {
        let mut dag = Dag::new();
        let mut partial = Edge::new();
        partial.set_source(&vertex("A", 1));
        dag.insert_edge(&partial).unwrap();
        assert_eq!(dag.edge_count(), 0);
        assert_eq!(dag.vertex_count(), 1);
    }
}
