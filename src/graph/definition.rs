use crate::graph::config::NodeConfig;
use serde::{Deserialize, Serialize};

/// Unique identifier of a node within a snapshot.
pub type NodeId = String;

/// The processing category of a workflow node.
///
/// The type drives per-type validation (required fields) and the cost model's
/// baseline lookup. Editors that invent new categories should map them to
/// `Default` until the engine learns about them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Llm,
    Notebook,
    Data,
    Input,
    Output,
    Default,
}

impl NodeType {
    /// Every known node type, in declaration order.
    pub const ALL: [NodeType; 6] = [
        NodeType::Llm,
        NodeType::Notebook,
        NodeType::Data,
        NodeType::Input,
        NodeType::Output,
        NodeType::Default,
    ];

    /// The canvas-facing name of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Llm => "llm",
            NodeType::Notebook => "notebook",
            NodeType::Data => "data",
            NodeType::Input => "input",
            NodeType::Output => "output",
            NodeType::Default => "default",
        }
    }

    /// Parses a canvas type string. Unknown names come back as `None`;
    /// callers decide whether that is an error or a `Default` fallback.
    pub fn parse(name: &str) -> Option<NodeType> {
        match name {
            "llm" => Some(NodeType::Llm),
            "notebook" => Some(NodeType::Notebook),
            "data" => Some(NodeType::Data),
            "input" => Some(NodeType::Input),
            "output" => Some(NodeType::Output),
            "default" => Some(NodeType::Default),
            _ => None,
        }
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canvas position of a node. Presentation-only: the engine carries it
/// through untouched and never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A single workflow node as the engine sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDefinition {
    pub id: NodeId,
    pub node_type: NodeType,
    pub label: String,
    pub config: NodeConfig,
    pub position: Position,
}

/// A directed connection between two nodes.
///
/// `source`/`target` must name node ids in the same snapshot; the engine does
/// not reject edges that don't, it surfaces them as `dangling-edge-reference`
/// validation errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeDefinition {
    pub id: String,
    pub source: NodeId,
    pub target: NodeId,
    pub label: Option<String>,
}

/// One immutable read of the full node/edge set at a point in time.
///
/// Passed in whole on every call. The engine never retains a reference after
/// a call returns and never mutates the snapshot; every analysis is a full
/// recomputation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<NodeDefinition>,
    pub edges: Vec<EdgeDefinition>,
}

impl GraphSnapshot {
    pub fn new(nodes: Vec<NodeDefinition>, edges: Vec<EdgeDefinition>) -> Self {
        Self { nodes, edges }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
