//! # ordgraph-core
//!
//! An in-memory directed weighted graph container with value-ordered nodes
//! and edges.
//!
//! `ordgraph` stores unique node values of any totally ordered type `N`,
//! connected by directed edges carrying weights of any totally ordered type
//! `E`. Nodes are kept sorted by value; each node's outgoing edges are kept
//! sorted by (destination value, weight); and the whole edge population can
//! be walked in both directions as one flat, globally sorted sequence.
//!
//! The container is a pure data structure: no I/O, no locking, no
//! persistence. It supports node replacement that preserves edge identity,
//! merge-replacement that unions one node's edges into another, and cascade
//! erasure that keeps every edge endpoint valid by construction.
//!
//! ## Quick start
//!
//! ```rust
//! use ordgraph_core::Graph;
//!
//! let mut g: Graph<&str, i32> = Graph::from_nodes(["ams", "lhr", "syd"]);
//! g.insert_edge(&"ams", &"lhr", 320).unwrap();
//! g.insert_edge(&"ams", &"lhr", 410).unwrap();
//! g.insert_edge(&"lhr", &"syd", 9000).unwrap();
//!
//! assert_eq!(g.weights(&"ams", &"lhr").unwrap(), vec![320, 410]);
//! assert_eq!(g.connections(&"ams").unwrap(), vec!["lhr"]);
//!
//! // Every edge, ascending by (source, destination, weight).
//! for edge in &g {
//!     println!("{} -> {} ({})", edge.from, edge.to, edge.weight);
//! }
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod graph;

pub use error::{Error, Result};
pub use graph::{Edge, EdgeCursor, EdgeIter, Graph};
