use crate::graph::{GraphModel, NodeId};
use ahash::{AHashMap, AHashSet};

/// Nodes whose mutual dependencies are all satisfied by earlier groups, and
/// which are therefore schedulable together.
pub type ParallelGroup = Vec<NodeId>;

/// Partitions the graph into dependency levels, Kahn-style.
///
/// Each round collects every unplaced node whose remaining in-degree is zero
/// (in snapshot order, so group contents are deterministic) then removes
/// the collected nodes by decrementing the in-degree of their targets. Group
/// 0 holds the nodes with no incoming edges at all.
///
/// If no zero-in-degree node remains among the unplaced ones, the remainder
/// sits on a cycle: the partition stops and returns the groups computed so
/// far. Callers must consult the cycle report before reading a short group
/// list as a schedule. For acyclic graphs every node appears in exactly one
/// group.
pub fn partition_levels(model: &GraphModel<'_>) -> Vec<ParallelGroup> {
    let mut remaining: AHashMap<&str, usize> = model
        .nodes()
        .map(|node| (node.id.as_str(), model.in_degree(&node.id)))
        .collect();
    let mut placed: AHashSet<&str> = AHashSet::with_capacity(model.node_count());
    let mut groups: Vec<ParallelGroup> = Vec::new();

    while placed.len() < model.node_count() {
        let ready: Vec<&str> = model
            .nodes()
            .map(|node| node.id.as_str())
            .filter(|id| !placed.contains(id) && remaining.get(id).copied().unwrap_or(0) == 0)
            .collect();

        if ready.is_empty() {
            // Cyclic remainder; partial result by contract.
            break;
        }

        for &id in &ready {
            placed.insert(id);
            for edge in model.outgoing(id) {
                if let Some(count) = remaining.get_mut(edge.target.as_str()) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        groups.push(ready.iter().map(|id| (*id).to_string()).collect());
    }

    groups
}
