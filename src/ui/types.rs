use crate::error::GraphConversionError;
use crate::graph::{
    EdgeDefinition, GraphSnapshot, IntoSnapshot, NodeConfig, NodeDefinition, NodeType, Position,
};
use serde::Deserialize;

/// Canvas coordinates as the editor serializes them.
#[derive(Debug, Deserialize, Clone, Copy, Default)]
pub struct UiPosition {
    pub x: f64,
    pub y: f64,
}

/// Payload block of a canvas node: display label plus the opaque config map.
#[derive(Debug, Deserialize, Clone)]
pub struct UiNodeData {
    pub label: Option<String>,
    #[serde(default)]
    pub config: serde_json::Map<String, serde_json::Value>,
}

/// A node as the canvas serializes it.
#[derive(Debug, Deserialize)]
pub struct UiNode {
    pub id: String,
    #[serde(default, rename = "type")]
    pub node_type: Option<String>,
    pub data: UiNodeData,
    #[serde(default)]
    pub position: UiPosition,
}

/// An edge as the canvas serializes it. The id is optional because some
/// editor versions only assign one on save.
#[derive(Debug, Deserialize)]
pub struct UiEdge {
    #[serde(default)]
    pub id: Option<String>,
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub label: Option<String>,
}

/// Complete canvas payload: the `{nodes, edges}` body the editor posts after
/// every structural change.
#[derive(Debug, Deserialize)]
pub struct UiGraph {
    pub nodes: Vec<UiNode>,
    pub edges: Vec<UiEdge>,
}

impl IntoSnapshot for UiGraph {
    /// Types the canvas payload into the canonical snapshot.
    ///
    /// Unknown node-type strings map to `default` (the editor's own fallback
    /// for unregistered components), missing edge ids are synthesized from
    /// the endpoints, and config maps are typed per node type with documented
    /// defaults for anything malformed.
    fn into_snapshot(self) -> Result<GraphSnapshot, GraphConversionError> {
        let nodes = self
            .nodes
            .into_iter()
            .map(|ui_node| {
                let node_type = ui_node
                    .node_type
                    .as_deref()
                    .and_then(NodeType::parse)
                    .unwrap_or(NodeType::Default);
                let config = NodeConfig::from_map(node_type, &ui_node.data.config);
                NodeDefinition {
                    label: ui_node.data.label.unwrap_or_else(|| ui_node.id.clone()),
                    id: ui_node.id,
                    node_type,
                    config,
                    position: Position {
                        x: ui_node.position.x,
                        y: ui_node.position.y,
                    },
                }
            })
            .collect();

        let edges = self
            .edges
            .into_iter()
            .map(|ui_edge| EdgeDefinition {
                id: ui_edge
                    .id
                    .unwrap_or_else(|| format!("{}->{}", ui_edge.source, ui_edge.target)),
                source: ui_edge.source,
                target: ui_edge.target,
                label: ui_edge.label,
            })
            .collect();

        Ok(GraphSnapshot { nodes, edges })
    }
}

impl UiGraph {
    /// Parses a canvas JSON document.
    pub fn from_json(json: &str) -> Result<Self, GraphConversionError> {
        serde_json::from_str(json).map_err(|e| {
            GraphConversionError::Malformed(format!("Failed to parse graph JSON: {}", e))
        })
    }
}
