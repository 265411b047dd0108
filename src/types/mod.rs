//! Shared data types for the graph containers.

pub mod error;

pub use error::{GraphError, GraphResult};

/// Node identifier. Callers map their domain objects onto these integers;
/// the graph treats them as opaque.
pub type NodeId = u64;

/// Edge weight.
pub type Weight = f64;

/// Weight assigned by the unweighted edge-insertion shortcut.
pub const DEFAULT_EDGE_WEIGHT: Weight = 1.0;
