//! Weighted graph containers over integer node ids.
//!
//! Stores nodes and weighted edges in two variants: [`DirectedGraph`], backed
//! by a pair of mirrored successor/predecessor maps, and [`UndirectedGraph`],
//! backed by a single symmetric neighbor map. Both implement the [`Graph`]
//! trait, so the same bookkeeping rules apply everywhere: every mutation
//! reports whether the structure actually changed, and a modification counter
//! advances by one per atomic change.

pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{DirectedGraph, Graph, GraphBuilder, UndirectedGraph};
pub use types::{GraphError, GraphResult, NodeId, Weight, DEFAULT_EDGE_WEIGHT};
