// SPDX-License-Identifier: Apache-2.0
//! Tree wrapper over [`Dag`].

use std::fmt;

use crate::dag::{CycleError, Dag};
use crate::edge::Edge;
use crate::vertex::Vertex;

/// A tree, currently a documented alias for [`Dag`].
///
/// Every operation delegates unchanged. In particular:
///
/// - Nothing enforces "at most one parent per vertex" yet, so a `Tree` can
///   hold any DAG shape. The single-parent invariant is a known gap, left
///   unenforced rather than silently imposed.
/// - [`Tree::top`] keeps the DAG's arbitrary-first-source semantics; it is
///   not the root of the tree.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tree {
    dag: Dag,
}

impl Tree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the vertex's presence. Delegates to [`Dag::add`].
    pub fn add(&mut self, vertex: &Vertex) {
        self.dag.add(vertex);
    }

    /// Inserts a true edge from `source` to `dest`.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError`] when the edge would close a cycle. A second
    /// parent for `dest` is **not** rejected (see the type-level note).
    pub fn add_edge(&mut self, source: &Vertex, dest: &Vertex) -> Result<(), CycleError> {
        self.dag.add_edge(source, dest)
    }

    /// Inserts a caller-supplied edge. Delegates to [`Dag::insert_edge`].
    ///
    /// # Errors
    ///
    /// Returns [`CycleError`] when the edge would close a cycle.
    pub fn insert_edge(&mut self, edge: &Edge) -> Result<(), CycleError> {
        self.dag.insert_edge(edge)
    }

    /// Delegates to [`Dag::remove_edge`].
    pub fn remove_edge(&mut self, edge: &Edge) {
        self.dag.remove_edge(edge);
    }

    /// Delegates to [`Dag::remove`].
    pub fn remove(&mut self, vertex: &Vertex) {
        self.dag.remove(vertex);
    }

    /// Delegates to [`Dag::are_adjacent`].
    #[must_use]
    pub fn are_adjacent(&self, source: &Vertex, dest: &Vertex) -> bool {
        self.dag.are_adjacent(source, dest)
    }

    /// Delegates to [`Dag::neighbors`].
    #[must_use]
    pub fn neighbors(&self, vertex: &Vertex) -> Vec<Vertex> {
        self.dag.neighbors(vertex)
    }

    /// Delegates to [`Dag::edge_count`].
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.dag.edge_count()
    }

    /// Delegates to [`Dag::vertex_count`].
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.dag.vertex_count()
    }

    /// Delegates to [`Dag::top`]; **not** the root of the tree.
    #[must_use]
    pub fn top(&self) -> Option<&Vertex> {
        self.dag.top()
    }

    /// Read-only view of the wrapped DAG.
    #[must_use]
    pub fn dag(&self) -> &Dag {
        &self.dag
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.dag.fmt(f)
    }
}
