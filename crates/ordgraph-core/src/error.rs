//! Error types for ordgraph-core.
//!
//! Only caller-contract violations surface as errors: operations that name a
//! node which must already exist. Expected negative outcomes (duplicate
//! inserts, absent edges) are ordinary `Ok` results.

use std::fmt;

use thiserror::Error;

/// Contract-violation errors raised by graph operations.
///
/// Every variant names the offending operation and the value(s) involved.
/// An `Err` is returned before any structural change happens, so the graph
/// is never left partially mutated.
#[derive(Error, Debug)]
pub enum Error {
    /// An edge operation referenced a source or destination that is not a
    /// node in the graph.
    #[error("cannot {op} when either `{src}` or `{dst}` is not a node in the graph")]
    EndpointMissing {
        /// The operation that was attempted.
        op: &'static str,
        /// The source value, rendered for diagnostics.
        src: String,
        /// The destination value, rendered for diagnostics.
        dst: String,
    },

    /// An operation referenced a node that does not exist in the graph.
    #[error("cannot {op} when node `{value}` does not exist in the graph")]
    NodeMissing {
        /// The operation that was attempted.
        op: &'static str,
        /// The missing value, rendered for diagnostics.
        value: String,
    },
}

impl Error {
    pub(crate) fn endpoint_missing(
        op: &'static str,
        src: &dyn fmt::Debug,
        dst: &dyn fmt::Debug,
    ) -> Self {
        Self::EndpointMissing {
            op,
            src: format!("{src:?}"),
            dst: format!("{dst:?}"),
        }
    }

    pub(crate) fn node_missing(op: &'static str, value: &dyn fmt::Debug) -> Self {
        Self::NodeMissing {
            op,
            value: format!("{value:?}"),
        }
    }
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, Error>;
