//! Ordering protocol over node handles and edge references.
//!
//! All comparisons resolve [`NodeId`]s through the arena to the value that
//! currently lives in the slot, so a bare `&N` lookup key can be compared
//! against stored handles directly. No comparison allocates or builds a
//! temporary handle.
//!
//! Edge ordering composes: destination value first, then weight.

use core::cmp::Ordering;

use super::arena::{NodeArena, NodeId};
use super::edges::EdgeRef;

/// Compares the value stored in `id`'s slot against a raw lookup key.
///
/// The sorted node index binary-searches with this probe; the symmetric
/// key-vs-handle direction is `node_probe(..).reverse()`.
pub(crate) fn node_probe<N: Ord, E>(arena: &NodeArena<N, E>, id: NodeId, key: &N) -> Ordering {
    arena.value(id).cmp(key)
}

/// Compares two edge references by (resolved destination value, weight).
pub(crate) fn edge_order<N: Ord, E: Ord>(
    arena: &NodeArena<N, E>,
    a: &EdgeRef<E>,
    b: &EdgeRef<E>,
) -> Ordering {
    arena
        .value(a.to)
        .cmp(arena.value(b.to))
        .then_with(|| a.weight.cmp(&b.weight))
}

/// Compares an edge reference against a full (destination, weight) key.
pub(crate) fn edge_probe<N: Ord, E: Ord>(
    arena: &NodeArena<N, E>,
    e: &EdgeRef<E>,
    dst: &N,
    weight: &E,
) -> Ordering {
    arena
        .value(e.to)
        .cmp(dst)
        .then_with(|| e.weight.cmp(weight))
}

/// Compares an edge reference against a destination value alone.
///
/// Used to probe for the contiguous run of edges sharing one destination,
/// regardless of weight.
pub(crate) fn dst_probe<N: Ord, E>(arena: &NodeArena<N, E>, e: &EdgeRef<E>, dst: &N) -> Ordering {
    arena.value(e.to).cmp(dst)
}
