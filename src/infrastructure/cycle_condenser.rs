use crate::domain::graph::{CondenseSummary, MergedCycle, NodeHandle, RouteGraph};
use crate::domain::traits::CycleCondenser;
use std::collections::{BTreeSet, HashMap};

/// Default `CycleCondenser`: repeated DFS cycle detection with in-place
/// merging. Absorbed arena slots are tombstoned and all traversal state is
/// discarded on every merge, so no stale handle is ever dereferenced.
pub struct InPlaceDfsCondenser;

impl CycleCondenser for InPlaceDfsCondenser {
    fn condense(&self, graph: &mut RouteGraph) -> CondenseSummary {
        condense_in_place(graph)
    }
}

fn condense_in_place(graph: &mut RouteGraph) -> CondenseSummary {
    let mut merges = Vec::new();

    // Every merge shrinks the live set and can change the degree or
    // cyclicity of nodes scanned earlier, so the scan restarts from the top
    // until a full pass closes no cycle. The live node count is finite and
    // strictly decreasing across merges, which bounds the pass count.
    while let Some((reference, pred)) = find_closing_traversal(graph) {
        let cycle = collect_cycle(graph, reference, &pred);
        merges.push(merge_cycle(graph, reference, &cycle));
    }

    CondenseSummary {
        merges,
        live_nodes: graph.live_node_count(),
    }
}

/// Scans live nodes in arena order and depth-first traverses the tails of
/// each candidate. Returns the first node reached again by its own
/// traversal, together with the predecessor map recording the edge used to
/// discover each node.
fn find_closing_traversal(
    graph: &RouteGraph,
) -> Option<(NodeHandle, HashMap<NodeHandle, NodeHandle>)> {
    for n in graph.live_handles() {
        let node = &graph.nodes[n.0];
        // A node without both an incoming and an outgoing edge cannot lie
        // on any directed cycle.
        if node.heads.is_empty() || node.tails.is_empty() {
            continue;
        }

        let mut pred: HashMap<NodeHandle, NodeHandle> = HashMap::new();
        let mut unexplored: Vec<NodeHandle> = Vec::new();

        for &tail in node.tails.iter() {
            pred.insert(tail, n);
            unexplored.push(tail);
        }

        while let Some(curr) = unexplored.pop() {
            for &tail in graph.nodes[curr.0].tails.iter() {
                if tail == n {
                    // Cycle closed; `curr` is the closing predecessor.
                    pred.insert(n, curr);
                    return Some((n, pred));
                }
                if !pred.contains_key(&tail) {
                    pred.insert(tail, curr);
                    unexplored.push(tail);
                }
            }
        }
    }

    None
}

/// Walks the predecessor chain backward from the closing predecessor,
/// collecting nodes until the walk re-enters the aggregate that already
/// contains the reference node.
fn collect_cycle(
    graph: &RouteGraph,
    reference: NodeHandle,
    pred: &HashMap<NodeHandle, NodeHandle>,
) -> Vec<NodeHandle> {
    let ref_airports = &graph.nodes[reference.0].airports;
    let mut collected: Vec<NodeHandle> = Vec::new();

    let mut curr = pred[&reference];
    while graph.nodes[curr.0].airports.is_disjoint(ref_airports) {
        if !collected.contains(&curr) {
            collected.push(curr);
        }
        curr = pred[&curr];
    }

    collected
}

/// Merges every collected node into the reference node: airports unioned,
/// edges re-homed (internal ones dropped), index entries re-pointed, the
/// absorbed slots tombstoned and scrubbed from every remaining node.
fn merge_cycle(
    graph: &mut RouteGraph,
    reference: NodeHandle,
    cycle: &[NodeHandle],
) -> MergedCycle {
    for &victim in cycle {
        let victim_node = std::mem::take(&mut graph.nodes[victim.0]);

        // Keep every airport in exactly one live node: re-point the index
        // entry at the survivor while the airport moves over.
        for code in victim_node.airports {
            graph.node_of.insert(code.clone(), reference);
            graph.nodes[reference.0].airports.insert(code);
        }

        // Edges whose other endpoint is inside the merged set become
        // internal and are dropped; the rest re-home onto the survivor.
        for head in victim_node.heads {
            if head == reference || cycle.contains(&head) {
                continue;
            }
            graph.nodes[reference.0].heads.insert(head);
        }
        for tail in victim_node.tails {
            if tail == reference || cycle.contains(&tail) {
                continue;
            }
            graph.nodes[reference.0].tails.insert(tail);
        }

        graph.nodes[victim.0].deleted = true;
    }

    // Scrub absorbed handles from every remaining node's edge sets,
    // re-homing those edges onto the survivor.
    for idx in 0..graph.nodes.len() {
        let h = NodeHandle(idx);
        if h == reference || graph.nodes[idx].deleted {
            continue;
        }
        rehome(&mut graph.nodes[idx].heads, cycle, reference);
        rehome(&mut graph.nodes[idx].tails, cycle, reference);
    }

    // Defensive self-loop removal on the survivor.
    for victim in cycle {
        graph.nodes[reference.0].heads.remove(victim);
        graph.nodes[reference.0].tails.remove(victim);
    }
    graph.nodes[reference.0].heads.remove(&reference);
    graph.nodes[reference.0].tails.remove(&reference);

    MergedCycle {
        airports: graph.nodes[reference.0].airports.iter().cloned().collect(),
        absorbed: cycle.len(),
    }
}

fn rehome(set: &mut BTreeSet<NodeHandle>, cycle: &[NodeHandle], survivor: NodeHandle) {
    let mut had_victim = false;
    for victim in cycle {
        if set.remove(victim) {
            had_victim = true;
        }
    }
    if had_victim {
        set.insert(survivor);
    }
}
