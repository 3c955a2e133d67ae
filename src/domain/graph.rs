use crate::domain::model::AirportCode;
use std::collections::{BTreeSet, HashMap, HashSet};

/// Stable index into the graph arena. Slots of absorbed nodes are
/// tombstoned, never reused, so a handle taken before a merge can still be
/// checked for liveness afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeHandle(pub usize);

/// An aggregate of mutually reachable airports.
///
/// Invariants for live nodes: `airports` is non-empty, and neither `heads`
/// nor `tails` contains the node's own handle. Tombstoned nodes are empty
/// husks.
#[derive(Debug, Clone, Default)]
pub struct GraphNode {
    pub airports: BTreeSet<AirportCode>,
    /// Nodes with an edge into this node.
    pub heads: BTreeSet<NodeHandle>,
    /// Nodes this node has an edge into.
    pub tails: BTreeSet<NodeHandle>,
    pub deleted: bool,
}

/// Directed graph of airport aggregates: an arena of nodes plus an
/// airport-to-node index. Every airport known to the graph belongs to
/// exactly one live node at all times, including mid-condensation.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    pub nodes: Vec<GraphNode>,
    pub node_of: HashMap<AirportCode, NodeHandle>,
}

impl RouteGraph {
    /// The node currently holding `code`, if the airport is known.
    pub fn handle_of(&self, code: &AirportCode) -> Option<NodeHandle> {
        self.node_of.get(code).copied()
    }

    /// Returns the existing node owning `code`, or registers a fresh
    /// singleton node for it. Idempotent.
    pub fn get_or_create(&mut self, code: &AirportCode) -> NodeHandle {
        if let Some(h) = self.node_of.get(code) {
            return *h;
        }

        let handle = NodeHandle(self.nodes.len());
        self.nodes.push(GraphNode {
            airports: BTreeSet::from([code.clone()]),
            ..GraphNode::default()
        });
        self.node_of.insert(code.clone(), handle);
        handle
    }

    /// Adds the directed edge `from -> to`. Self-loops are refused and
    /// duplicates are absorbed by the sets. Returns true if the edge is new.
    pub fn add_edge(&mut self, from: NodeHandle, to: NodeHandle) -> bool {
        if from == to {
            return false;
        }
        let added = self.nodes[from.0].tails.insert(to);
        self.nodes[to.0].heads.insert(from);
        added
    }

    /// Handles of all live nodes, in arena order.
    pub fn live_handles(&self) -> Vec<NodeHandle> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| !n.deleted)
            .map(|(i, _)| NodeHandle(i))
            .collect()
    }

    pub fn live_node_count(&self) -> usize {
        self.nodes.iter().filter(|n| !n.deleted).count()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| !n.deleted)
            .map(|n| n.tails.len())
            .sum()
    }

    /// True when no live node can reach itself via a non-empty sequence of
    /// outgoing edges. Holds after condensation.
    pub fn is_acyclic(&self) -> bool {
        // Iterative DFS with an on-stack marker per node.
        let mut done: HashSet<NodeHandle> = HashSet::new();
        let mut on_path: HashSet<NodeHandle> = HashSet::new();

        for start in self.live_handles() {
            if done.contains(&start) {
                continue;
            }

            let mut stack: Vec<(NodeHandle, bool)> = vec![(start, false)];
            while let Some((h, expanded)) = stack.pop() {
                if expanded {
                    on_path.remove(&h);
                    done.insert(h);
                    continue;
                }
                if done.contains(&h) {
                    continue;
                }
                if !on_path.insert(h) {
                    continue;
                }
                stack.push((h, true));
                for &tail in self.nodes[h.0].tails.iter() {
                    if on_path.contains(&tail) {
                        return false;
                    }
                    if !done.contains(&tail) {
                        stack.push((tail, false));
                    }
                }
            }
        }

        true
    }
}

/// One merged cycle: the aggregate's airports after the merge and how many
/// nodes it absorbed.
#[derive(Debug, Clone)]
pub struct MergedCycle {
    pub airports: Vec<AirportCode>,
    pub absorbed: usize,
}

/// Outcome of a condensation run, reported by the `CycleCondenser` port.
#[derive(Debug, Clone, Default)]
pub struct CondenseSummary {
    pub merges: Vec<MergedCycle>,
    pub live_nodes: usize,
}
