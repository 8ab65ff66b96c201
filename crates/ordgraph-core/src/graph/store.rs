//! The graph container: value-ordered node store plus mutation algorithms.

use core::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::error::{Error, Result};

use super::arena::{NodeArena, NodeId};
use super::cursor::{EdgeCursor, EdgeIter};
use super::edges::EdgeRef;
use super::ordering;
use super::types::Edge;

/// An in-memory directed weighted graph over unique node values of type `N`
/// and edge weights of type `E`.
///
/// Nodes are kept in ascending value order; each node's outgoing edges are
/// kept in ascending (destination value, weight) order. Flattened iteration
/// therefore yields every edge in ascending (source, destination, weight)
/// order. Parallel edges between the same pair of nodes are allowed as long
/// as their weights differ.
///
/// Node storage is arena-backed: each node's value lives in exactly one
/// slot, and edges refer to their destination slot by internal id, so a
/// value replaced via [`Graph::replace_node`] is immediately observed by
/// every edge pointing at it.
///
/// # Example
///
/// ```rust
/// use ordgraph_core::Graph;
///
/// let mut g: Graph<i32, &str> = Graph::new();
/// g.insert_node(1);
/// g.insert_node(4);
/// g.insert_edge(&1, &4, "a").unwrap();
/// assert!(g.is_connected(&1, &4).unwrap());
/// assert_eq!(g.nodes(), vec![1, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct Graph<N, E> {
    pub(crate) arena: NodeArena<N, E>,
    pub(crate) order: Vec<NodeId>,
    pub(crate) edges: usize,
}

impl<N, E> Graph<N, E> {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            arena: NodeArena::new(),
            order: Vec::new(),
            edges: 0,
        }
    }

    /// Creates an empty graph with room for `nodes` nodes.
    #[must_use]
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            arena: NodeArena::with_capacity(nodes),
            order: Vec::with_capacity(nodes),
            edges: 0,
        }
    }

    /// Returns true if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.arena.live_count()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges
    }

    /// Removes every node and every edge.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.order.clear();
        self.edges = 0;
    }
}

impl<N, E> Default for Graph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E> Graph<N, E>
where
    N: Clone + Ord + fmt::Debug,
    E: Clone + Ord + fmt::Debug,
{
    /// Creates a graph holding the given node values, duplicates collapsed.
    #[must_use]
    pub fn from_nodes<I: IntoIterator<Item = N>>(nodes: I) -> Self {
        let mut graph = Self::new();
        graph.extend(nodes);
        graph
    }

    // ── Node operations ────────────────────────────────────────────────

    /// Inserts a node, returning whether it was absent.
    ///
    /// An equal value already in the graph is left untouched and `false`
    /// is returned.
    pub fn insert_node(&mut self, value: N) -> bool {
        match self.node_pos(&value) {
            Ok(_) => false,
            Err(pos) => {
                let id = self.arena.allocate(value);
                self.order.insert(pos, id);
                true
            }
        }
    }

    /// Returns true if `value` is a node in the graph.
    ///
    /// O(log n) probe by raw value; no node handle is constructed.
    #[must_use]
    pub fn is_node(&self, value: &N) -> bool {
        self.node_pos(value).is_ok()
    }

    /// Returns all node values in ascending order.
    ///
    /// The result is a snapshot copy, not a view.
    #[must_use]
    pub fn nodes(&self) -> Vec<N> {
        self.order
            .iter()
            .map(|&id| self.arena.value(id).clone())
            .collect()
    }

    /// Rewrites the value of an existing node in place.
    ///
    /// The node keeps its identity: every edge pointing at it observes the
    /// new value without being rewritten. The node order and any edge set
    /// holding an edge into the node are repositioned to stay sorted.
    ///
    /// Returns `Ok(false)` without mutating if `new` is already a node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeMissing`] if `old` is not a node.
    pub fn replace_node(&mut self, old: &N, new: N) -> Result<bool> {
        let old_pos = self
            .node_pos(old)
            .map_err(|_| Error::node_missing("replace_node", old))?;
        if self.node_pos(&new).is_ok() {
            return Ok(false);
        }
        let id = self.order[old_pos];
        self.order.remove(old_pos);
        let new_pos = self
            .node_pos(&new)
            .expect_err("replacement value vanished from uniqueness check");
        trace!(old = ?old, new = ?new, "replacing node value in place");
        self.arena.slot_mut(id).value = new;
        self.order.insert(new_pos, id);
        self.reposition_edges_to(id);
        Ok(true)
    }

    /// Merges `old` into `new`, then erases `old`.
    ///
    /// `old`'s outgoing edges are unioned into `new`'s (self-loops become
    /// loops on `new`; exact (destination, weight) collisions collapse).
    /// Edges elsewhere in the graph targeting `old` are redirected to `new`
    /// with the same de-duplication; `old`'s and `new`'s own edge sets are
    /// skipped by that scan. Finally `old` is removed along with any edge
    /// still referencing it.
    ///
    /// Merging a node into itself leaves the graph unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EndpointMissing`] if either value is not a node.
    pub fn merge_replace_node(&mut self, old: &N, new: &N) -> Result<()> {
        let (old_id, new_id) = match (self.node_id(old), self.node_id(new)) {
            (Some(o), Some(n)) => (o, n),
            _ => return Err(Error::endpoint_missing("merge_replace_node", old, new)),
        };
        if old_id == new_id {
            return Ok(());
        }
        debug!(old = ?old, new = ?new, "merging node into replacement");

        // Union the outgoing set, redirecting self-loops onto `new`.
        let drained = self.arena.slot_mut(old_id).out.take_all();
        self.edges -= drained.len();
        for e in drained {
            let to = if e.to == old_id { new_id } else { e.to };
            self.insert_ref(new_id, to, e.weight);
        }

        // Redirect incoming edges held by every other node.
        for pos in 0..self.order.len() {
            let sid = self.order[pos];
            if sid == old_id || sid == new_id {
                continue;
            }
            if let Some((lo, hi)) = self.arena.slot(sid).out.run_of_dst(old_id) {
                let moved = self.arena.slot_mut(sid).out.extract_run(lo, hi);
                self.edges -= moved.len();
                for e in moved {
                    self.insert_ref(sid, new_id, e.weight);
                }
            }
        }

        self.remove_node_by_id(old_id);
        Ok(())
    }

    /// Removes a node and every edge touching it.
    ///
    /// All outgoing edges are dropped, every other node's edge set is
    /// scanned for edges targeting the node (which are dropped too), and
    /// the node itself is removed last. Returns whether a node was removed;
    /// removing an absent value is a no-op returning `false`.
    pub fn remove_node(&mut self, value: &N) -> bool {
        match self.node_id(value) {
            None => false,
            Some(id) => {
                debug!(value = ?value, "removing node and cascading edge cleanup");
                self.remove_node_by_id(id);
                true
            }
        }
    }

    // ── Edge operations ────────────────────────────────────────────────

    /// Inserts an edge from `src` to `dst` with the given weight.
    ///
    /// Returns `Ok(false)` if an edge with the same destination and weight
    /// already leaves `src`. An equal destination with a different weight
    /// is a distinct, parallel edge.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EndpointMissing`] if either endpoint is not a node;
    /// nothing is mutated in that case.
    pub fn insert_edge(&mut self, src: &N, dst: &N, weight: E) -> Result<bool> {
        let (src_id, dst_id) = self.edge_endpoints("insert_edge", src, dst)?;
        Ok(self.insert_ref(src_id, dst_id, weight))
    }

    /// Removes the edge matching (`src`, `dst`, `weight`) exactly.
    ///
    /// Returns `Ok(false)` if no such edge exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EndpointMissing`] if either endpoint is not a node.
    pub fn remove_edge(&mut self, src: &N, dst: &N, weight: &E) -> Result<bool> {
        let (src_id, _) = self.edge_endpoints("remove_edge", src, dst)?;
        Ok(self.remove_ref_exact(src_id, dst, weight))
    }

    /// Removes the designated edge and returns a cursor at the next edge in
    /// global order (end if none).
    ///
    /// The position is re-resolved by value against the mutated graph, so
    /// the cursor is valid regardless of what else the removal displaced.
    /// A record naming an edge that no longer exists removes nothing and
    /// just yields the cursor after that position.
    pub fn remove_edge_at(&mut self, edge: &Edge<N, E>) -> EdgeCursor<'_, N, E> {
        if let Some(src_id) = self.node_id(&edge.from) {
            self.remove_ref_exact(src_id, &edge.to, &edge.weight);
        }
        self.seek_cursor(edge, true)
    }

    /// Removes every edge in the half-open global-order range
    /// `[first, last)`; `None` means the end of the sequence.
    ///
    /// Returns a cursor at `last`, re-resolved by value against the mutated
    /// graph.
    pub fn remove_edge_span(
        &mut self,
        first: &Edge<N, E>,
        last: Option<&Edge<N, E>>,
    ) -> EdgeCursor<'_, N, E> {
        let victims: Vec<Edge<N, E>> = {
            let mut cur = self.seek_cursor(first, false);
            let mut collected = Vec::new();
            while let Some(e) = cur.edge() {
                if let Some(stop) = last {
                    if e >= *stop {
                        break;
                    }
                }
                collected.push(e);
                cur.move_next();
            }
            collected
        };
        for e in &victims {
            if let Some(src_id) = self.node_id(&e.from) {
                self.remove_ref_exact(src_id, &e.to, &e.weight);
            }
        }
        match last {
            Some(stop) => self.seek_cursor(stop, false),
            None => self.cursor_end(),
        }
    }

    // ── Edge queries ───────────────────────────────────────────────────

    /// Returns true if any edge leads from `src` to `dst`, regardless of
    /// weight.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EndpointMissing`] if either value is not a node.
    pub fn is_connected(&self, src: &N, dst: &N) -> Result<bool> {
        let (src_id, _) = self.edge_endpoints("is_connected", src, dst)?;
        let out = &self.arena.slot(src_id).out;
        Ok(out
            .search_by(|e| ordering::dst_probe(&self.arena, e, dst))
            .is_ok())
    }

    /// Returns the weights of all edges from `src` to `dst`, ascending.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EndpointMissing`] if either value is not a node.
    pub fn weights(&self, src: &N, dst: &N) -> Result<Vec<E>> {
        let (src_id, _) = self.edge_endpoints("weights", src, dst)?;
        let out = &self.arena.slot(src_id).out;
        let lo = out.partition_point(|e| ordering::dst_probe(&self.arena, e, dst) == Ordering::Less);
        let hi =
            out.partition_point(|e| ordering::dst_probe(&self.arena, e, dst) != Ordering::Greater);
        Ok(out
            .iter()
            .skip(lo)
            .take(hi - lo)
            .map(|e| e.weight.clone())
            .collect())
    }

    /// Returns the distinct destinations reachable by one edge from `src`,
    /// ascending.
    ///
    /// A destination connected through several parallel edges appears once.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeMissing`] if `src` is not a node.
    pub fn connections(&self, src: &N) -> Result<Vec<N>> {
        let src_id = self
            .node_id(src)
            .ok_or_else(|| Error::node_missing("connections", src))?;
        let mut result: Vec<N> = Vec::new();
        for e in self.arena.slot(src_id).out.iter() {
            let value = self.arena.value(e.to);
            if result.last() != Some(value) {
                result.push(value.clone());
            }
        }
        Ok(result)
    }

    /// Returns a cursor positioned at the edge matching
    /// (`src`, `dst`, `weight`), or at end if there is no such edge.
    ///
    /// Missing nodes degrade to "not found"; this accessor never errors.
    #[must_use]
    pub fn find(&self, src: &N, dst: &N, weight: &E) -> EdgeCursor<'_, N, E> {
        let Ok(npos) = self.node_pos(src) else {
            return self.cursor_end();
        };
        let out = &self.arena.slot(self.order[npos]).out;
        match out.search_by(|e| ordering::edge_probe(&self.arena, e, dst, weight)) {
            Ok(idx) => EdgeCursor::new(self, npos, idx),
            Err(_) => self.cursor_end(),
        }
    }

    // ── Flattened traversal ────────────────────────────────────────────

    /// Returns a cursor at the first edge in global order (end if the graph
    /// has no edges).
    #[must_use]
    pub fn cursor(&self) -> EdgeCursor<'_, N, E> {
        let mut npos = 0;
        while npos < self.order.len() && self.arena.slot(self.order[npos]).out.is_empty() {
            npos += 1;
        }
        if npos < self.order.len() {
            EdgeCursor::new(self, npos, 0)
        } else {
            self.cursor_end()
        }
    }

    /// Returns the end-of-sequence cursor.
    #[must_use]
    pub fn cursor_end(&self) -> EdgeCursor<'_, N, E> {
        EdgeCursor::end(self)
    }

    /// Returns an iterator over every edge as [`Edge`] records, in
    /// ascending (source, destination, weight) order.
    #[must_use]
    pub fn iter(&self) -> EdgeIter<'_, N, E> {
        EdgeIter::new(self.cursor(), self.cursor_end())
    }

    // ── Internal helpers ───────────────────────────────────────────────

    /// Position of `value` in the node order, or its insertion point.
    fn node_pos(&self, value: &N) -> std::result::Result<usize, usize> {
        self.order
            .binary_search_by(|&id| ordering::node_probe(&self.arena, id, value))
    }

    fn node_id(&self, value: &N) -> Option<NodeId> {
        self.node_pos(value).ok().map(|pos| self.order[pos])
    }

    fn edge_endpoints(&self, op: &'static str, src: &N, dst: &N) -> Result<(NodeId, NodeId)> {
        match (self.node_id(src), self.node_id(dst)) {
            (Some(s), Some(d)) => Ok((s, d)),
            _ => Err(Error::endpoint_missing(op, src, dst)),
        }
    }

    /// Inserts a (destination, weight) ref into `src`'s edge set unless an
    /// equal one exists. Keeps the edge counter current.
    fn insert_ref(&mut self, src: NodeId, to: NodeId, weight: E) -> bool {
        let probe = EdgeRef { to, weight };
        let pos = {
            let out = &self.arena.slot(src).out;
            out.search_by(|e| ordering::edge_order(&self.arena, e, &probe))
        };
        match pos {
            Ok(_) => false,
            Err(idx) => {
                self.arena.slot_mut(src).out.insert_at(idx, probe);
                self.edges += 1;
                true
            }
        }
    }

    /// Removes the exact (destination, weight) ref from `src`'s edge set if
    /// present. Keeps the edge counter current.
    fn remove_ref_exact(&mut self, src: NodeId, dst: &N, weight: &E) -> bool {
        let pos = {
            let out = &self.arena.slot(src).out;
            out.search_by(|e| ordering::edge_probe(&self.arena, e, dst, weight))
        };
        match pos {
            Ok(idx) => {
                self.arena.slot_mut(src).out.remove_at(idx);
                self.edges -= 1;
                true
            }
            Err(_) => false,
        }
    }

    /// Re-sorts every edge set holding an edge into `id` after the slot's
    /// value changed. The displaced refs form one contiguous run (node
    /// values are unique), already ascending by weight; only the run's
    /// position within each set moves.
    fn reposition_edges_to(&mut self, id: NodeId) {
        for pos in 0..self.order.len() {
            let sid = self.order[pos];
            let Some((lo, hi)) = self.arena.slot(sid).out.run_of_dst(id) else {
                continue;
            };
            let moved = self.arena.slot_mut(sid).out.extract_run(lo, hi);
            let ins = {
                let out = &self.arena.slot(sid).out;
                let value = self.arena.value(id);
                out.partition_point(|e| ordering::dst_probe(&self.arena, e, value) == Ordering::Less)
            };
            self.arena.slot_mut(sid).out.splice_at(ins, moved);
        }
    }

    /// Cascade removal: outgoing edges, then incoming edges graph-wide,
    /// then the slot itself.
    fn remove_node_by_id(&mut self, id: NodeId) {
        let dropped = self.arena.slot_mut(id).out.take_all();
        self.edges -= dropped.len();
        for pos in 0..self.order.len() {
            let sid = self.order[pos];
            if sid == id {
                continue;
            }
            if let Some((lo, hi)) = self.arena.slot(sid).out.run_of_dst(id) {
                let removed = self.arena.slot_mut(sid).out.extract_run(lo, hi);
                self.edges -= removed.len();
            }
        }
        let pos = self
            .order
            .iter()
            .position(|&x| x == id)
            .expect("node id missing from the sorted order");
        self.order.remove(pos);
        self.arena.release(id);
    }

    /// Cursor at the first edge `>= key` in global order (`> key` when
    /// `after` is set).
    fn seek_cursor(&self, key: &Edge<N, E>, after: bool) -> EdgeCursor<'_, N, E> {
        let (mut npos, exact) = match self.node_pos(&key.from) {
            Ok(pos) => (pos, true),
            Err(pos) => (pos, false),
        };
        if exact {
            let out = &self.arena.slot(self.order[npos]).out;
            let epos = out.partition_point(|e| {
                let ord = ordering::edge_probe(&self.arena, e, &key.to, &key.weight);
                if after {
                    ord != Ordering::Greater
                } else {
                    ord == Ordering::Less
                }
            });
            if epos < out.len() {
                return EdgeCursor::new(self, npos, epos);
            }
            npos += 1;
        }
        while npos < self.order.len() && self.arena.slot(self.order[npos]).out.is_empty() {
            npos += 1;
        }
        if npos < self.order.len() {
            EdgeCursor::new(self, npos, 0)
        } else {
            self.cursor_end()
        }
    }
}

impl<N, E> Extend<N> for Graph<N, E>
where
    N: Clone + Ord + fmt::Debug,
    E: Clone + Ord + fmt::Debug,
{
    fn extend<I: IntoIterator<Item = N>>(&mut self, nodes: I) {
        for value in nodes {
            self.insert_node(value);
        }
    }
}

impl<N, E> FromIterator<N> for Graph<N, E>
where
    N: Clone + Ord + fmt::Debug,
    E: Clone + Ord + fmt::Debug,
{
    fn from_iter<I: IntoIterator<Item = N>>(nodes: I) -> Self {
        Self::from_nodes(nodes)
    }
}

/// Diagnostic rendering: each node ascending, then its outgoing edges as
/// `destination | weight` lines, ascending. Not a stable wire format.
impl<N, E> fmt::Display for Graph<N, E>
where
    N: fmt::Display,
    E: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &id in &self.order {
            let slot = self.arena.slot(id);
            writeln!(f, "{}(", slot.value)?;
            for e in slot.out.iter() {
                writeln!(f, "\t{} | {}", self.arena.value(e.to), e.weight)?;
            }
            writeln!(f, ")")?;
        }
        Ok(())
    }
}
