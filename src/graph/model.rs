use super::definition::{EdgeDefinition, GraphSnapshot, NodeDefinition};
use crate::error::SnapshotError;
use ahash::{AHashMap, AHashSet};

/// Per-call adjacency index over a [`GraphSnapshot`].
///
/// Built fresh at the start of every analysis and dropped when it returns;
/// there is no mutation API and no cross-call cache, so the index can never
/// go stale against the snapshot it was built from. Lookups for a node's
/// outgoing edges and incoming-edge count are O(1).
///
/// Edges whose `source` or `target` does not name a node in the snapshot are
/// excluded from the adjacency and in-degree tables and collected separately;
/// the `dangling-edge-reference` validation rule reports them. Only shape
/// violations (duplicate ids) fail construction.
#[derive(Debug)]
pub struct GraphModel<'a> {
    snapshot: &'a GraphSnapshot,
    nodes_by_id: AHashMap<&'a str, &'a NodeDefinition>,
    outgoing: AHashMap<&'a str, Vec<&'a EdgeDefinition>>,
    in_degree: AHashMap<&'a str, usize>,
    out_degree: AHashMap<&'a str, usize>,
    resolved_edges: Vec<&'a EdgeDefinition>,
    dangling_edges: Vec<&'a EdgeDefinition>,
}

impl<'a> GraphModel<'a> {
    /// Indexes a snapshot, rejecting duplicate node or edge ids upfront.
    pub fn build(snapshot: &'a GraphSnapshot) -> Result<Self, SnapshotError> {
        let mut nodes_by_id: AHashMap<&str, &NodeDefinition> =
            AHashMap::with_capacity(snapshot.nodes.len());
        for node in &snapshot.nodes {
            if nodes_by_id.insert(node.id.as_str(), node).is_some() {
                return Err(SnapshotError::DuplicateNodeId(node.id.clone()));
            }
        }

        let mut edge_ids: AHashSet<&str> = AHashSet::with_capacity(snapshot.edges.len());
        let mut outgoing: AHashMap<&str, Vec<&EdgeDefinition>> = AHashMap::new();
        let mut in_degree: AHashMap<&str, usize> = AHashMap::new();
        let mut out_degree: AHashMap<&str, usize> = AHashMap::new();
        let mut resolved_edges = Vec::with_capacity(snapshot.edges.len());
        let mut dangling_edges = Vec::new();

        for edge in &snapshot.edges {
            if !edge_ids.insert(edge.id.as_str()) {
                return Err(SnapshotError::DuplicateEdgeId(edge.id.clone()));
            }
            let known_source = nodes_by_id.contains_key(edge.source.as_str());
            let known_target = nodes_by_id.contains_key(edge.target.as_str());
            if known_source && known_target {
                outgoing.entry(edge.source.as_str()).or_default().push(edge);
                *in_degree.entry(edge.target.as_str()).or_default() += 1;
                *out_degree.entry(edge.source.as_str()).or_default() += 1;
                resolved_edges.push(edge);
            } else {
                dangling_edges.push(edge);
            }
        }

        Ok(Self {
            snapshot,
            nodes_by_id,
            outgoing,
            in_degree,
            out_degree,
            resolved_edges,
            dangling_edges,
        })
    }

    /// The snapshot this model was built from.
    pub fn snapshot(&self) -> &'a GraphSnapshot {
        self.snapshot
    }

    /// Nodes in snapshot order. Traversal order everywhere in the engine is
    /// derived from this, keeping results deterministic across calls.
    pub fn nodes(&self) -> impl Iterator<Item = &'a NodeDefinition> {
        self.snapshot.nodes.iter()
    }

    /// Looks up a node by id.
    pub fn node(&self, id: &str) -> Option<&'a NodeDefinition> {
        self.nodes_by_id.get(id).copied()
    }

    /// Outgoing edges of a node, in edge-sequence order.
    pub fn outgoing(&self, id: &str) -> &[&'a EdgeDefinition] {
        self.outgoing.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of resolved edges pointing at a node.
    pub fn in_degree(&self, id: &str) -> usize {
        self.in_degree.get(id).copied().unwrap_or(0)
    }

    /// Combined in- and out-degree over resolved edges.
    pub fn degree(&self, id: &str) -> usize {
        self.in_degree(id) + self.out_degree.get(id).copied().unwrap_or(0)
    }

    /// Edges whose endpoints both resolve to known nodes, in edge-sequence
    /// order.
    pub fn resolved_edges(&self) -> &[&'a EdgeDefinition] {
        &self.resolved_edges
    }

    /// Edges referencing at least one unknown node id, in edge-sequence order.
    pub fn dangling_edges(&self) -> &[&'a EdgeDefinition] {
        &self.dangling_edges
    }

    pub fn node_count(&self) -> usize {
        self.snapshot.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.snapshot.edges.len()
    }
}
