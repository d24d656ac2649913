//! Common test utilities for building graph snapshots.
use kaiseki::graph::{NodeConfig, NodeParams, Position};
use kaiseki::prelude::*;

/// Creates a node with an empty (all-defaults) config.
#[allow(dead_code)]
pub fn node(id: &str, node_type: NodeType) -> NodeDefinition {
    NodeDefinition {
        id: id.to_string(),
        node_type,
        label: id.to_string(),
        config: NodeConfig::empty(node_type),
        position: Position::default(),
    }
}

/// Creates an `llm` node with its required fields filled in.
#[allow(dead_code)]
pub fn llm_node(id: &str, model: &str, prompt: &str) -> NodeDefinition {
    let mut definition = node(id, NodeType::Llm);
    definition.config.params = NodeParams::Llm {
        model: Some(model.to_string()),
        prompt: Some(prompt.to_string()),
        temperature: None,
        max_tokens: None,
    };
    definition
}

/// Creates an edge between two nodes.
#[allow(dead_code)]
pub fn edge(id: &str, source: &str, target: &str) -> EdgeDefinition {
    EdgeDefinition {
        id: id.to_string(),
        source: source.to_string(),
        target: target.to_string(),
        label: None,
    }
}

/// The canonical three-node pipeline: `1(input) -> 2(default) -> 3(output)`.
#[allow(dead_code)]
pub fn linear_snapshot() -> GraphSnapshot {
    GraphSnapshot {
        nodes: vec![
            node("1", NodeType::Input),
            node("2", NodeType::Default),
            node("3", NodeType::Output),
        ],
        edges: vec![edge("e1", "1", "2"), edge("e2", "2", "3")],
    }
}

/// A three-node loop: `A -> B -> C -> A`.
#[allow(dead_code)]
pub fn cyclic_snapshot() -> GraphSnapshot {
    GraphSnapshot {
        nodes: vec![
            node("A", NodeType::Default),
            node("B", NodeType::Default),
            node("C", NodeType::Default),
        ],
        edges: vec![edge("e1", "A", "B"), edge("e2", "B", "C"), edge("e3", "C", "A")],
    }
}

/// A connected pipeline plus an isolated input:
/// `A(input) -> B(default) -> C(output)`, `D(input)` unconnected.
#[allow(dead_code)]
pub fn disconnected_input_snapshot() -> GraphSnapshot {
    GraphSnapshot {
        nodes: vec![
            node("A", NodeType::Input),
            node("B", NodeType::Default),
            node("C", NodeType::Output),
            node("D", NodeType::Input),
        ],
        edges: vec![edge("e1", "A", "B"), edge("e2", "B", "C")],
    }
}

/// A diamond: `a(input)` fans out to `b` and `c`, which join at `d(output)`.
#[allow(dead_code)]
pub fn diamond_snapshot() -> GraphSnapshot {
    GraphSnapshot {
        nodes: vec![
            node("a", NodeType::Input),
            node("b", NodeType::Default),
            node("c", NodeType::Default),
            node("d", NodeType::Output),
        ],
        edges: vec![
            edge("e1", "a", "b"),
            edge("e2", "a", "c"),
            edge("e3", "b", "d"),
            edge("e4", "c", "d"),
        ],
    }
}
