//! Directed graph backed by mirrored successor/predecessor maps.

use std::collections::HashMap;
use std::mem;

use log::{debug, trace};

use crate::types::{NodeId, Weight};

use super::{Counters, Graph};

/// A directed graph over integer node ids with one weight per edge.
///
/// Two adjacency maps are kept as exact mirrors: `successors[u]` holds
/// `(v, w)` exactly when `predecessors[v]` holds `(u, w)`. Every mutation
/// updates both maps within the same call, so the mirror invariant holds
/// between any two operations. `(u, v)` and `(v, u)` are independent edges
/// and may carry different weights; a self-loop `(u, u)` is a single edge
/// appearing in both maps.
#[derive(Debug, Default)]
pub struct DirectedGraph {
    /// Outgoing adjacency: tail -> (head -> weight).
    successors: HashMap<NodeId, HashMap<NodeId, Weight>>,
    /// Incoming adjacency, the mirror of `successors`.
    predecessors: HashMap<NodeId, HashMap<NodeId, Weight>>,
    counters: Counters,
}

impl DirectedGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Graph for DirectedGraph {
    fn node_count(&self) -> usize {
        self.successors.len()
    }

    fn edge_count(&self) -> usize {
        self.counters.edge_count()
    }

    fn add_node(&mut self, node: NodeId) -> bool {
        if self.successors.contains_key(&node) {
            return false;
        }
        self.successors.insert(node, HashMap::new());
        self.predecessors.insert(node, HashMap::new());
        self.counters.node_added();
        true
    }

    fn has_node(&self, node: NodeId) -> bool {
        self.successors.contains_key(&node)
    }

    fn clear_node(&mut self, node: NodeId) -> bool {
        let outgoing = match self.successors.get_mut(&node) {
            Some(heads) => mem::take(heads),
            None => return false,
        };
        let incoming = self
            .predecessors
            .get_mut(&node)
            .map(mem::take)
            .unwrap_or_default();

        for head in outgoing.keys() {
            if let Some(preds) = self.predecessors.get_mut(head) {
                preds.remove(&node);
            }
        }
        for tail in incoming.keys() {
            if let Some(succs) = self.successors.get_mut(tail) {
                succs.remove(&node);
            }
        }

        // A self-loop shows up in both taken maps but is a single edge.
        let mut removed = outgoing.len() + incoming.len();
        if outgoing.contains_key(&node) {
            removed -= 1;
        }
        if removed == 0 {
            return false;
        }
        self.counters.edges_removed(removed);
        trace!("cleared node {node}: {removed} edges removed");
        true
    }

    fn remove_node(&mut self, node: NodeId) -> bool {
        if !self.successors.contains_key(&node) {
            return false;
        }
        self.clear_node(node);
        self.successors.remove(&node);
        self.predecessors.remove(&node);
        self.counters.node_removed();
        true
    }

    fn add_edge(&mut self, tail: NodeId, head: NodeId, weight: Weight) -> bool {
        debug_assert!(!weight.is_nan(), "edge weights must not be NaN");
        self.add_node(tail);
        self.add_node(head);

        let previous = self
            .successors
            .entry(tail)
            .or_default()
            .insert(head, weight);
        self.predecessors
            .entry(head)
            .or_default()
            .insert(tail, weight);

        match previous {
            None => {
                self.counters.edge_added();
                true
            }
            Some(old) if old != weight => {
                self.counters.edge_updated();
                true
            }
            Some(_) => false,
        }
    }

    fn has_edge(&self, tail: NodeId, head: NodeId) -> bool {
        self.successors
            .get(&tail)
            .map_or(false, |heads| heads.contains_key(&head))
    }

    fn edge_weight(&self, tail: NodeId, head: NodeId) -> Weight {
        self.successors
            .get(&tail)
            .and_then(|heads| heads.get(&head))
            .copied()
            .unwrap_or(Weight::NAN)
    }

    fn remove_edge(&mut self, tail: NodeId, head: NodeId) -> bool {
        let removed = self
            .successors
            .get_mut(&tail)
            .and_then(|heads| heads.remove(&head));
        if removed.is_none() {
            return false;
        }
        if let Some(tails) = self.predecessors.get_mut(&head) {
            tails.remove(&tail);
        }
        self.counters.edge_removed();
        true
    }

    fn children_of(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.successors
            .get(&node)
            .into_iter()
            .flat_map(|heads| heads.keys().copied())
    }

    fn parents_of(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.predecessors
            .get(&node)
            .into_iter()
            .flat_map(|tails| tails.keys().copied())
    }

    fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.successors.keys().copied()
    }

    fn clear(&mut self) {
        let nodes_removed = self.successors.len();
        let edges_removed = self.counters.edge_count();
        self.successors.clear();
        self.predecessors.clear();
        self.counters.cleared(nodes_removed);
        if nodes_removed > 0 {
            debug!("cleared graph: {nodes_removed} nodes and {edges_removed} edges removed");
        }
    }

    fn modification_count(&self) -> u64 {
        self.counters.modification_count()
    }
}
