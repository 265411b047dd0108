//! Undirected graph backed by a single symmetric neighbor map.

use std::collections::HashMap;
use std::mem;

use log::{debug, trace};

use crate::types::{NodeId, Weight};

use super::{Counters, Graph};

/// An undirected graph over integer node ids with one weight per edge.
///
/// One adjacency map holds every edge twice: `neighbors[u]` contains
/// `(v, w)` exactly when `neighbors[v]` contains `(u, w)`. Both mirrored
/// entries are written or removed within the same call, as one logical edge
/// operation. Self-loops are not representable and are dropped silently by
/// [`add_edge`](Graph::add_edge).
#[derive(Debug, Default)]
pub struct UndirectedGraph {
    /// Symmetric adjacency: node -> (neighbor -> weight).
    neighbors: HashMap<NodeId, HashMap<NodeId, Weight>>,
    counters: Counters,
}

impl UndirectedGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Graph for UndirectedGraph {
    fn node_count(&self) -> usize {
        self.neighbors.len()
    }

    fn edge_count(&self) -> usize {
        self.counters.edge_count()
    }

    fn add_node(&mut self, node: NodeId) -> bool {
        if self.neighbors.contains_key(&node) {
            return false;
        }
        self.neighbors.insert(node, HashMap::new());
        self.counters.node_added();
        true
    }

    fn has_node(&self, node: NodeId) -> bool {
        self.neighbors.contains_key(&node)
    }

    fn clear_node(&mut self, node: NodeId) -> bool {
        let dropped = match self.neighbors.get_mut(&node) {
            Some(map) => mem::take(map),
            None => return false,
        };
        if dropped.is_empty() {
            return false;
        }
        for neighbor in dropped.keys() {
            if let Some(map) = self.neighbors.get_mut(neighbor) {
                map.remove(&node);
            }
        }
        self.counters.edges_removed(dropped.len());
        trace!("cleared node {node}: {} edges removed", dropped.len());
        true
    }

    fn remove_node(&mut self, node: NodeId) -> bool {
        if !self.neighbors.contains_key(&node) {
            return false;
        }
        self.clear_node(node);
        self.neighbors.remove(&node);
        self.counters.node_removed();
        true
    }

    fn add_edge(&mut self, tail: NodeId, head: NodeId, weight: Weight) -> bool {
        debug_assert!(!weight.is_nan(), "edge weights must not be NaN");
        if tail == head {
            // Self-loops are unrepresentable here; dropping the request is
            // not an error.
            return false;
        }
        self.add_node(tail);
        self.add_node(head);

        let previous = self
            .neighbors
            .entry(tail)
            .or_default()
            .insert(head, weight);
        self.neighbors
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
        self.neighbors
            .get(&tail)
            .map_or(false, |map| map.contains_key(&head))
    }

    fn edge_weight(&self, tail: NodeId, head: NodeId) -> Weight {
        self.neighbors
            .get(&tail)
            .and_then(|map| map.get(&head))
            .copied()
            .unwrap_or(Weight::NAN)
    }

    fn remove_edge(&mut self, tail: NodeId, head: NodeId) -> bool {
        let removed = self
            .neighbors
            .get_mut(&tail)
            .and_then(|map| map.remove(&head));
        if removed.is_none() {
            return false;
        }
        if let Some(map) = self.neighbors.get_mut(&head) {
            map.remove(&tail);
        }
        self.counters.edge_removed();
        true
    }

    fn children_of(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.neighbors
            .get(&node)
            .into_iter()
            .flat_map(|map| map.keys().copied())
    }

    fn parents_of(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children_of(node)
    }

    fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.neighbors.keys().copied()
    }

    fn clear(&mut self) {
        let nodes_removed = self.neighbors.len();
        let edges_removed = self.counters.edge_count();
        self.neighbors.clear();
        self.counters.cleared(nodes_removed);
        if nodes_removed > 0 {
            debug!("cleared graph: {nodes_removed} nodes and {edges_removed} edges removed");
        }
    }

    fn modification_count(&self) -> u64 {
        self.counters.modification_count()
    }
}
