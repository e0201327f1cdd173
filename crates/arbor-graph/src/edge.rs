// SPDX-License-Identifier: Apache-2.0
//! Owned edge value type.

use std::fmt;

use crate::value::Value;
use crate::vertex::Vertex;

/// An owned pair of vertex copies plus an opaque payload.
///
/// An edge with only a source is a **vertex-presence record** ("this vertex
/// exists"), not a true edge; an edge with both endpoints is a true edge.
/// Graphs count only true edges in [`crate::DirectedGraph::edge_count`].
///
/// A freshly constructed edge has no endpoints and the `("DUMMY", -1)`
/// sentinel payload.
///
/// # Equality
///
/// Two edges are equal iff both have a source, both have a dest, both have a
/// payload, and all three compare equal pairwise. An edge missing any field
/// is unequal to everything, **including itself**, so `Edge` implements
/// `PartialEq` but deliberately not `Eq`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    source: Option<Vertex>,
    dest: Option<Vertex>,
    payload: Option<Value>,
}

impl Edge {
    /// Builds an empty edge: no endpoints, sentinel payload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a true edge from owned endpoints and payload.
    #[must_use]
    pub fn with_endpoints(source: Vertex, dest: Vertex, payload: Value) -> Self {
        Self {
            source: Some(source),
            dest: Some(dest),
            payload: Some(payload),
        }
    }

    /// Stores an owned copy of `v` as the source, replacing any existing copy.
    pub fn set_source(&mut self, v: &Vertex) {
        self.source = Some(v.clone());
    }

    /// Stores an owned copy of `v` as the destination, replacing any existing copy.
    pub fn set_dest(&mut self, v: &Vertex) {
        self.dest = Some(v.clone());
    }

    /// Returns the stored source copy, if any. Absence is a valid state.
    #[must_use]
    pub fn source(&self) -> Option<&Vertex> {
        self.source.as_ref()
    }

    /// Returns the stored destination copy, if any. Absence is a valid state.
    #[must_use]
    pub fn dest(&self) -> Option<&Vertex> {
        self.dest.as_ref()
    }

    /// Returns the payload, if any.
    #[must_use]
    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }

    /// Replaces the payload.
    pub fn set_payload(&mut self, value: Value) {
        self.payload = Some(value);
    }

    /// Returns `true` if both endpoints are present.
    #[must_use]
    pub fn is_true_edge(&self) -> bool {
        self.source.is_some() && self.dest.is_some()
    }
}

impl Default for Edge {
    fn default() -> Self {
        Self {
            source: None,
            dest: None,
            payload: Some(Value::dummy()),
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        match (
            &self.source,
            &other.source,
            &self.dest,
            &other.dest,
            &self.payload,
            &other.payload,
        ) {
            (Some(s1), Some(s2), Some(d1), Some(d2), Some(p1), Some(p2)) => {
                s1 == s2 && d1 == d2 && p1 == p2
            }
            _ => false,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(v) => write!(f, "{v}")?,
            None => f.write_str("NULL")?,
        }
        f.write_str(" -> ")?;
        match &self.dest {
            Some(v) => write!(f, "{v}"),
            None => f.write_str("NULL"),
        }
    }
}
