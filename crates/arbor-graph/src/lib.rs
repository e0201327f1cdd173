// SPDX-License-Identifier: Apache-2.0
//! arbor-graph: layered in-memory graph structures.
//!
//! Three progressively constrained abstractions share one storage model:
//!
//! - [`DirectedGraph`] — an unconstrained directed graph backed by a vertex
//!   registry plus an insertion-ordered edge record list.
//! - [`Dag`] — wraps a [`DirectedGraph`] and rejects any edge insert that
//!   would close a directed cycle, rolling the speculative insert back.
//! - [`Tree`] — wraps a [`Dag`]; currently a documented alias with no
//!   additional invariant of its own.
//!
//! Vertices are value types keyed by an integer id. Edges stored in a graph
//! reference registry keys rather than embedding vertex copies, so updating
//! a vertex value never leaves stale copies behind.
//!
//! All structures are single-threaded and synchronous; callers that share a
//! graph across tasks must wrap it in their own lock.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions,
    clippy::use_self
)]

mod cycle;
mod dag;
mod digraph;
mod edge;
mod ident;
mod ops;
mod tree;
mod value;
mod vertex;

/// Cycle-rejecting DAG and its insert error.
pub use dag::{CycleError, Dag};
/// Unconstrained directed graph store.
pub use digraph::DirectedGraph;
/// Owned edge value type (endpoints + payload).
pub use edge::Edge;
/// Strongly typed vertex identity key.
pub use ident::VertexId;
/// Shared query/mutation surface implemented by all graph flavors.
pub use ops::Graph;
/// Tree wrapper (currently a documented DAG alias).
pub use tree::Tree;
/// Label/id pair carried by vertices and edge payloads.
pub use value::Value;
/// Identity-bearing, value-carrying node.
pub use vertex::Vertex;
