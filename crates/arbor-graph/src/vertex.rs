// SPDX-License-Identifier: Apache-2.0
//! Identity-bearing, value-carrying graph node.

use std::fmt;

use crate::ident::VertexId;
use crate::value::Value;

/// A graph node carrying a `(label, id)` [`Value`].
///
/// Vertices are plain values: copied freely, compared by full value, and
/// mutated in place via [`Vertex::set_value`]. Graph storage keys vertices
/// by the integer id alone; two vertices with the same id refer to the same
/// logical node (see [`crate::DirectedGraph`]).
///
/// The default vertex carries the `("DUMMY", -1)` sentinel value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex {
    value: Value,
}

impl Vertex {
    /// Wraps a value in a vertex.
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    /// Builds a vertex directly from a label and id.
    pub fn from_parts(label: impl Into<String>, id: i64) -> Self {
        Self::new(Value::new(label, id))
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Overwrites the value in place.
    pub fn set_value(&mut self, value: Value) {
        self.value = value;
    }

    /// Returns the registry key derived from this vertex's id.
    #[must_use]
    pub fn key(&self) -> VertexId {
        VertexId(self.value.id)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}
