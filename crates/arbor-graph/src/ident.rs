// SPDX-License-Identifier: Apache-2.0
//! Strongly typed identifiers used by graph storage.

/// Identity key of a vertex inside a graph's registry.
///
/// A `VertexId` is the integer half of a vertex's `(label, id)` value. Using
/// a dedicated wrapper keeps registry keys from mixing with payload ids or
/// insertion sequence numbers.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexId(pub i64);

impl VertexId {
    /// Returns the raw integer key.
    #[must_use]
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

/// Monotonic insertion sequence number for a stored edge record.
///
/// Sequence numbers order records for traversal, rendering, and "first
/// match" removal, and double as undo tickets for the DAG's speculative
/// insert. They are never reused within one graph.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub(crate) struct EdgeSeq(pub(crate) u64);
