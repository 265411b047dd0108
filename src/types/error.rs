//! Error types for graph construction.

use thiserror::Error;

use super::NodeId;

/// All errors that can occur while assembling a graph.
///
/// The mutation API itself is infallible: unknown nodes and edges produce
/// empty results, not errors. These variants are raised only by the builder,
/// which validates a whole batch before constructing anything.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Edge weight is NaN, which would defeat weight-change detection.
    #[error("Edge ({tail}, {head}) has a NaN weight")]
    NanWeight { tail: NodeId, head: NodeId },

    /// Self-loop requested on an undirected graph.
    #[error("Self-loop on node {0} is not representable in an undirected graph")]
    SelfLoop(NodeId),
}

/// Convenience result type for graph construction.
pub type GraphResult<T> = Result<T, GraphError>;
