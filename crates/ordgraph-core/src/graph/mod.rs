//! Directed weighted graph container with value-ordered storage.
//!
//! Provides [`Graph`], a container of unique node values connected by
//! weighted directed edges, along with a bidirectional [`EdgeCursor`] and
//! [`EdgeIter`] that present the per-node edge sets as one globally sorted
//! sequence of [`Edge`] records.
//!
//! # Example
//!
//! ```rust
//! use ordgraph_core::{Edge, Graph};
//!
//! let mut g: Graph<i32, &str> = Graph::from_nodes([1, 5, 7, 1, 4, 8]);
//! assert_eq!(g.node_count(), 5);
//!
//! g.insert_edge(&1, &4, "a").unwrap();
//! g.insert_edge(&4, &8, "d").unwrap();
//!
//! let edges: Vec<_> = g.iter().collect();
//! assert_eq!(edges[0], Edge::new(1, 4, "a"));
//! assert_eq!(g.weights(&1, &4).unwrap(), vec!["a"]);
//! ```

mod arena;
mod cursor;
mod edges;
mod ordering;
mod store;
mod types;

#[cfg(test)]
mod store_tests;

pub use cursor::{EdgeCursor, EdgeIter};
pub use store::Graph;
pub use types::Edge;
