use crate::graph::{GraphModel, NodeId};
use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// A closed walk through the graph. The first element is the conceptual
/// successor of the last; a self-loop is a cycle of length one.
pub type Cycle = Vec<NodeId>;

/// Every cycle found during one traversal of the snapshot.
///
/// Cycles are reported in the order the walk discovered them, which is fixed
/// by node-sequence and edge-sequence order and therefore stable across
/// calls. A node sitting on several loops can appear in more than one cycle;
/// loops that share all their on-stack nodes with an already-walked region
/// are not re-discovered: the report covers the loops actually walked, not
/// every loop in a denser subgraph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CycleReport {
    pub cycles: Vec<Cycle>,
}

impl CycleReport {
    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cycles.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cycle> {
        self.cycles.iter()
    }
}

/// Walks the graph depth-first and reports every cycle encountered.
///
/// The traversal starts from each unvisited node in snapshot order and
/// follows outgoing edges in edge-sequence order. An edge into a node on the
/// current path emits the path slice from that node to the current one, the
/// minimal closed loop actually walked. The walk keeps going after emitting,
/// so disjoint cycles all get reported in a single pass.
///
/// Uses an explicit frame stack instead of recursion; pathological inputs
/// cannot overflow the call stack. O(V+E).
pub fn detect_cycles(model: &GraphModel<'_>) -> CycleReport {
    let mut visited: AHashSet<&str> = AHashSet::with_capacity(model.node_count());
    let mut on_stack: AHashSet<&str> = AHashSet::new();
    let mut path: Vec<&str> = Vec::new();
    let mut cycles: Vec<Cycle> = Vec::new();

    for start in model.nodes() {
        let start_id = start.id.as_str();
        if visited.contains(start_id) {
            continue;
        }

        // Each frame is (node, index of the next outgoing edge to follow).
        let mut frames: Vec<(&str, usize)> = vec![(start_id, 0)];
        visited.insert(start_id);
        on_stack.insert(start_id);
        path.push(start_id);

        while let Some(frame) = frames.last_mut() {
            let node_id = frame.0;
            let out = model.outgoing(node_id);

            if frame.1 < out.len() {
                let target = out[frame.1].target.as_str();
                frame.1 += 1;

                if on_stack.contains(target) {
                    // Closed walk: everything from the target's position on
                    // the current path down to this node, inclusive.
                    if let Some(pos) = path.iter().position(|id| *id == target) {
                        cycles.push(path[pos..].iter().map(|id| (*id).to_string()).collect());
                    }
                } else if !visited.contains(target) {
                    visited.insert(target);
                    on_stack.insert(target);
                    path.push(target);
                    frames.push((target, 0));
                }
            } else {
                frames.pop();
                path.pop();
                on_stack.remove(node_id);
            }
        }
    }

    CycleReport { cycles }
}
