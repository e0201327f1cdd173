// SPDX-License-Identifier: Apache-2.0
//! Edge-list directed graph backed by a vertex registry.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::edge::Edge;
use crate::ident::{EdgeSeq, VertexId};
use crate::value::Value;
use crate::vertex::Vertex;

/// Stored form of one edge-list entry.
///
/// Endpoints are registry keys, not vertex copies; the registry owns the
/// single canonical copy of each vertex value. A record with a source but no
/// destination is a vertex-presence record.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub(crate) struct EdgeRecord {
    pub(crate) source: Option<VertexId>,
    pub(crate) dest: Option<VertexId>,
    pub(crate) payload: Option<Value>,
}

impl EdgeRecord {
    fn is_true_edge(&self) -> bool {
        self.source.is_some() && self.dest.is_some()
    }
}

/// An unconstrained directed graph.
///
/// Storage model:
/// - `vertices` — registry of canonical vertex copies, keyed by integer id.
/// - `records` — every stored edge record (presence records and true edges),
///   keyed by a monotonic insertion sequence number, so iteration yields
///   insertion order.
/// - `edges_from` — outgoing index from source id to the sequence numbers of
///   its records, bucket order = insertion order.
///
/// # Invariants
/// - The registry holds exactly the ids referenced by at least one record,
///   so [`DirectedGraph::vertex_count`] equals the number of distinct ids
///   across all records' endpoints regardless of duplicate adds.
/// - `true_edges` equals the number of records with both endpoints set.
///
/// Removal prunes registry entries that lose their last referencing record.
/// Removing a vertex only deletes records where it is the **source**; records
/// where it appears only as destination are left dangling and keep the
/// vertex counted (deliberate asymmetry, matching the edge-list contract).
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectedGraph {
    vertices: BTreeMap<VertexId, Vertex>,
    records: BTreeMap<EdgeSeq, EdgeRecord>,
    edges_from: BTreeMap<VertexId, Vec<EdgeSeq>>,
    true_edges: usize,
    next_seq: u64,
}

impl DirectedGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the vertex's presence in the graph.
    ///
    /// No uniqueness check is performed: adding the same vertex twice stores
    /// two presence records, but [`DirectedGraph::vertex_count`] still
    /// reports the id once. Re-adding a vertex with an updated label
    /// replaces the registry copy (last write wins).
    pub fn add(&mut self, vertex: &Vertex) {
        let id = self.intern(vertex);
        self.push_record(EdgeRecord {
            source: Some(id),
            dest: None,
            payload: Some(Value::dummy()),
        });
    }

    /// Appends a true edge from `source` to `dest` with the sentinel payload.
    ///
    /// The general graph has no structural restriction; this never fails.
    pub fn add_edge(&mut self, source: &Vertex, dest: &Vertex) {
        self.stage_edge(source, dest);
    }

    /// Appends a caller-supplied edge verbatim.
    ///
    /// Endpoints that are present are interned into the registry; a missing
    /// endpoint is stored as-is and the record is treated as a non-edge for
    /// counting purposes.
    pub fn insert_edge(&mut self, edge: &Edge) {
        self.stage_record(edge);
    }

    /// Removes the first record (in insertion order) equal to `edge` under
    /// the edge equality rule. Silent no-op when no record matches or when
    /// `edge` is missing any of source, dest, or payload.
    pub fn remove_edge(&mut self, edge: &Edge) {
        let (Some(source), Some(dest), Some(payload)) =
            (edge.source(), edge.dest(), edge.payload())
        else {
            return;
        };
        let dest_id = dest.key();
        let mut found = None;
        if let Some(bucket) = self.edges_from.get(&source.key()) {
            for seq in bucket {
                let matches = self.records.get(seq).is_some_and(|record| {
                    record.dest == Some(dest_id) && record.payload.as_ref() == Some(payload)
                });
                if matches {
                    found = Some(*seq);
                    break;
                }
            }
        }
        if let Some(seq) = found {
            self.unstage(seq);
        }
    }

    /// Removes every record whose source is `vertex`: its presence records
    /// and every true edge it originates. Records where the vertex appears
    /// only as destination are left in place. Silent no-op for an unknown
    /// vertex.
    pub fn remove(&mut self, vertex: &Vertex) {
        let Some(bucket) = self.edges_from.remove(&vertex.key()) else {
            return;
        };
        for seq in bucket {
            if let Some(record) = self.records.remove(&seq) {
                if record.is_true_edge() {
                    self.true_edges -= 1;
                }
            }
        }
        self.prune_unreferenced();
    }

    /// Returns `true` iff some true edge runs from `source` to `dest`.
    /// Directed: adjacency is not symmetric.
    #[must_use]
    pub fn are_adjacent(&self, source: &Vertex, dest: &Vertex) -> bool {
        let dest_id = dest.key();
        self.outgoing(source.key())
            .any(|record| record.dest == Some(dest_id))
    }

    /// Returns the destinations of every true edge originating at `vertex`,
    /// in insertion order, cloned from the registry.
    #[must_use]
    pub fn neighbors(&self, vertex: &Vertex) -> Vec<Vertex> {
        self.outgoing(vertex.key())
            .filter_map(|record| record.dest)
            .filter_map(|id| self.vertices.get(&id).cloned())
            .collect()
    }

    /// Number of true edges (records with both endpoints set).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.true_edges
    }

    /// Number of distinct vertex ids referenced by stored records.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Total number of stored records, presence records included.
    ///
    /// Always `>=` [`DirectedGraph::edge_count`], with equality iff every
    /// record has both endpoints set.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Returns the source of the earliest-inserted record that has one, or
    /// `None` on an empty graph.
    ///
    /// This is an arbitrary but deterministic "some vertex" accessor, not a
    /// root or topological notion.
    #[must_use]
    pub fn top(&self) -> Option<&Vertex> {
        self.records
            .values()
            .find_map(|record| record.source.and_then(|id| self.vertices.get(&id)))
    }

    /// Interns a canonical copy of the vertex and returns its key.
    fn intern(&mut self, vertex: &Vertex) -> VertexId {
        let id = vertex.key();
        self.vertices.insert(id, vertex.clone());
        id
    }

    /// Appends a true edge record and returns its undo ticket.
    pub(crate) fn stage_edge(&mut self, source: &Vertex, dest: &Vertex) -> EdgeSeq {
        let source_id = self.intern(source);
        let dest_id = self.intern(dest);
        self.push_record(EdgeRecord {
            source: Some(source_id),
            dest: Some(dest_id),
            payload: Some(Value::dummy()),
        })
    }

    /// Appends a caller-supplied edge and returns its undo ticket.
    pub(crate) fn stage_record(&mut self, edge: &Edge) -> EdgeSeq {
        let source = edge.source().map(|v| self.intern(v));
        let dest = edge.dest().map(|v| self.intern(v));
        self.push_record(EdgeRecord {
            source,
            dest,
            payload: edge.payload().cloned(),
        })
    }

    /// Removes exactly the record behind `seq`, updating the outgoing index
    /// and pruning registry entries that lost their last reference.
    ///
    /// This is the DAG's rollback seam: because the ticket names one record,
    /// rollback can never delete a structurally equal older record.
    pub(crate) fn unstage(&mut self, seq: EdgeSeq) {
        let Some(record) = self.records.remove(&seq) else {
            return;
        };
        if record.is_true_edge() {
            self.true_edges -= 1;
        }
        if let Some(source) = record.source {
            let mut drop_bucket = false;
            if let Some(bucket) = self.edges_from.get_mut(&source) {
                bucket.retain(|s| *s != seq);
                drop_bucket = bucket.is_empty();
            }
            if drop_bucket {
                self.edges_from.remove(&source);
            }
        }
        self.prune_unreferenced();
    }

    /// All registry keys in ascending id order.
    pub(crate) fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.keys().copied()
    }

    /// Destination keys of true edges originating at `id`, insertion order.
    pub(crate) fn successors(&self, id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.outgoing(id).filter_map(|record| record.dest)
    }

    fn outgoing(&self, id: VertexId) -> impl Iterator<Item = &EdgeRecord> + '_ {
        self.edges_from
            .get(&id)
            .into_iter()
            .flatten()
            .filter_map(|seq| self.records.get(seq))
    }

    fn push_record(&mut self, record: EdgeRecord) -> EdgeSeq {
        let seq = EdgeSeq(self.next_seq);
        self.next_seq += 1;
        if record.is_true_edge() {
            self.true_edges += 1;
        }
        if let Some(source) = record.source {
            self.edges_from.entry(source).or_default().push(seq);
        }
        self.records.insert(seq, record);
        seq
    }

    /// Drops registry entries no longer referenced by any record.
    fn prune_unreferenced(&mut self) {
        let mut referenced = BTreeSet::new();
        for record in self.records.values() {
            if let Some(id) = record.source {
                referenced.insert(id);
            }
            if let Some(id) = record.dest {
                referenced.insert(id);
            }
        }
        self.vertices.retain(|id, _| referenced.contains(id));
    }
}

impl fmt::Display for DirectedGraph {
    /// Renders a header with the vertex count followed by one line per
    /// record in insertion order, with `NULL` for absent endpoints.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Graph (# vertices = {}):", self.vertex_count())?;
        for record in self.records.values() {
            match record.source.and_then(|id| self.vertices.get(&id)) {
                Some(v) => write!(f, "{v}")?,
                None => f.write_str("NULL")?,
            }
            f.write_str(" -> ")?;
            match record.dest.and_then(|id| self.vertices.get(&id)) {
                Some(v) => write!(f, "{v}")?,
                None => f.write_str("NULL")?,
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
