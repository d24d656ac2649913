use super::{Severity, ValidationError, ValidationKind, ValidationRule};
use crate::analysis::cycles::detect_cycles;
use crate::graph::{GraphModel, NodeType};
use ahash::AHashSet;
use itertools::Itertools;
use serde_json::json;
use std::collections::VecDeque;

/// Registers the built-in rules in their documented run order.
pub fn register_default_rules(rules: &mut Vec<Box<dyn ValidationRule>>) {
    rules.push(Box::new(NoCycles));
    rules.push(Box::new(InputOutputConnectivity));
    rules.push(Box::new(RequiredFields));
    rules.push(Box::new(DanglingEdges));
}

/// Flags every cycle in the graph as a scheduling blocker.
pub struct NoCycles;

impl ValidationRule for NoCycles {
    fn name(&self) -> &str {
        "no-cycles"
    }

    fn check(&self, model: &GraphModel<'_>) -> Vec<ValidationError> {
        detect_cycles(model)
            .cycles
            .into_iter()
            .map(|cycle| ValidationError {
                kind: ValidationKind::CycleDetected,
                severity: Severity::Error,
                node_id: cycle.first().cloned(),
                message: format!(
                    "Workflow contains a circular dependency: {}",
                    cycle.iter().join(" -> ")
                ),
                detail: Some(json!({ "cycle": cycle })),
            })
            .collect()
    }
}

/// Flags `input` nodes from which no `output` node is reachable.
///
/// A workflow with no input nodes, or no output nodes at all, produces no
/// findings here; the rule only catches inputs that exist but feed nothing.
pub struct InputOutputConnectivity;

impl ValidationRule for InputOutputConnectivity {
    fn name(&self) -> &str {
        "input-output-connectivity"
    }

    fn check(&self, model: &GraphModel<'_>) -> Vec<ValidationError> {
        let has_output = model.nodes().any(|n| n.node_type == NodeType::Output);
        if !has_output {
            return Vec::new();
        }

        model
            .nodes()
            .filter(|node| node.node_type == NodeType::Input)
            .filter(|input| !reaches_output(model, &input.id))
            .map(|input| ValidationError {
                kind: ValidationKind::DisconnectedInput,
                severity: Severity::Error,
                node_id: Some(input.id.clone()),
                message: format!(
                    "Input node '{}' is not connected to any output node",
                    input.label
                ),
                detail: None,
            })
            .collect()
    }
}

/// Breadth-first forward walk; true once any output-type node is reached.
fn reaches_output(model: &GraphModel<'_>, start: &str) -> bool {
    let mut seen: AHashSet<&str> = AHashSet::new();
    let mut queue: VecDeque<&str> = VecDeque::new();
    seen.insert(start);
    queue.push_back(start);

    while let Some(id) = queue.pop_front() {
        if let Some(node) = model.node(id) {
            if node.node_type == NodeType::Output {
                return true;
            }
        }
        for edge in model.outgoing(id) {
            let target = edge.target.as_str();
            if seen.insert(target) {
                queue.push_back(target);
            }
        }
    }

    false
}

/// Flags required per-type config fields the user has not filled in.
pub struct RequiredFields;

impl ValidationRule for RequiredFields {
    fn name(&self) -> &str {
        "required-fields"
    }

    fn check(&self, model: &GraphModel<'_>) -> Vec<ValidationError> {
        let mut findings = Vec::new();
        for node in model.nodes() {
            for field in node.config.params.missing_required_fields() {
                findings.push(ValidationError {
                    kind: ValidationKind::MissingRequiredField,
                    severity: Severity::Error,
                    node_id: Some(node.id.clone()),
                    message: format!(
                        "Node '{}' ({}) is missing required field '{}'",
                        node.label, node.node_type, field
                    ),
                    detail: Some(json!({ "field": field })),
                });
            }
        }
        findings
    }
}

/// Flags edges referencing node ids that are not in the snapshot.
///
/// Editors normally prevent these, but snapshots also arrive from imports and
/// programmatic callers, so the engine checks anyway.
pub struct DanglingEdges;

impl ValidationRule for DanglingEdges {
    fn name(&self) -> &str {
        "dangling-edge-reference"
    }

    fn check(&self, model: &GraphModel<'_>) -> Vec<ValidationError> {
        model
            .dangling_edges()
            .iter()
            .map(|edge| {
                let missing: Vec<&str> = [edge.source.as_str(), edge.target.as_str()]
                    .into_iter()
                    .filter(|id| model.node(id).is_none())
                    .collect();
                ValidationError {
                    kind: ValidationKind::DanglingEdgeReference,
                    severity: Severity::Error,
                    node_id: None,
                    message: format!(
                        "Edge '{}' references unknown node id(s): {}",
                        edge.id,
                        missing.iter().join(", ")
                    ),
                    detail: Some(json!({
                        "edgeId": edge.id,
                        "source": edge.source,
                        "target": edge.target,
                    })),
                }
            })
            .collect()
    }
}
