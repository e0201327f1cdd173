// SPDX-License-Identifier: Apache-2.0
//! Depth-first cycle detection over a directed graph.

use std::collections::BTreeSet;

use crate::digraph::DirectedGraph;
use crate::ident::VertexId;

/// Returns `true` if the graph's true edges contain a directed cycle.
///
/// Three-color DFS specialized to a `visited` set plus an `on_stack` set:
/// a true edge reaching a vertex that is currently on the recursion stack is
/// a back edge, which closes a cycle. The outer loop walks registry keys in
/// ascending id order; iteration order does not affect whether a cycle is
/// found. Cost is O(V + E) per call.
pub(crate) fn has_cycle(graph: &DirectedGraph) -> bool {
    let mut visited = BTreeSet::new();
    let mut on_stack = BTreeSet::new();
    for id in graph.vertex_ids() {
        if !visited.contains(&id) && walk(graph, id, &mut visited, &mut on_stack) {
            return true;
        }
    }
    false
}

/// DFS from `id`. Keeps `id` on the recursion stack while its successors are
/// explored; pops it on the way out. `visited` is never unwound, so the
/// outer loop skips already-explored components.
fn walk(
    graph: &DirectedGraph,
    id: VertexId,
    visited: &mut BTreeSet<VertexId>,
    on_stack: &mut BTreeSet<VertexId>,
) -> bool {
    visited.insert(id);
    on_stack.insert(id);
    for next in graph.successors(id) {
        if !visited.contains(&next) {
            if walk(graph, next, visited, on_stack) {
                return true;
            }
        } else if on_stack.contains(&next) {
            return true;
        }
    }
    on_stack.remove(&id);
    false
}
