//! Fluent API for assembling graphs with up-front validation.

use crate::types::{GraphError, GraphResult, NodeId, Weight, DEFAULT_EDGE_WEIGHT};

use super::{DirectedGraph, Graph, UndirectedGraph};

/// Fluent builder for constructing a graph from node and edge lists.
///
/// The direct mutation API silently drops undirected self-loops and trusts
/// callers not to pass NaN weights. The builder instead validates the whole
/// recorded batch before constructing anything, so bulk construction fails
/// loudly on bad input instead of hiding it.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<NodeId>,
    edges: Vec<(NodeId, NodeId, Weight)>,
}

impl GraphBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an isolated node. Endpoints of recorded edges need not be
    /// listed explicitly.
    pub fn node(&mut self, node: NodeId) -> &mut Self {
        self.nodes.push(node);
        self
    }

    /// Record a weighted edge.
    pub fn edge(&mut self, tail: NodeId, head: NodeId, weight: Weight) -> &mut Self {
        self.edges.push((tail, head, weight));
        self
    }

    /// Record an edge with [`DEFAULT_EDGE_WEIGHT`].
    pub fn unweighted_edge(&mut self, tail: NodeId, head: NodeId) -> &mut Self {
        self.edge(tail, head, DEFAULT_EDGE_WEIGHT)
    }

    /// Build a [`DirectedGraph`], rejecting NaN weights.
    pub fn build_directed(self) -> GraphResult<DirectedGraph> {
        self.check_weights()?;
        let mut graph = DirectedGraph::new();
        self.replay(&mut graph);
        Ok(graph)
    }

    /// Build an [`UndirectedGraph`], rejecting NaN weights and self-loops.
    pub fn build_undirected(self) -> GraphResult<UndirectedGraph> {
        self.check_weights()?;
        for &(tail, head, _) in &self.edges {
            if tail == head {
                return Err(GraphError::SelfLoop(tail));
            }
        }
        let mut graph = UndirectedGraph::new();
        self.replay(&mut graph);
        Ok(graph)
    }

    fn check_weights(&self) -> GraphResult<()> {
        for &(tail, head, weight) in &self.edges {
            if weight.is_nan() {
                return Err(GraphError::NanWeight { tail, head });
            }
        }
        Ok(())
    }

    /// Replay the recorded insertions through the normal mutation path, so
    /// the built graph's counters match hand-driven construction.
    fn replay<G: Graph>(&self, graph: &mut G) {
        for &node in &self.nodes {
            graph.add_node(node);
        }
        for &(tail, head, weight) in &self.edges {
            graph.add_edge(tail, head, weight);
        }
    }
}
