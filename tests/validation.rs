//! Tests for the validation rule engine and its built-in rules.
mod common;
use kaiseki::graph::GraphModel;
use kaiseki::prelude::*;
use kaiseki::validate::{Severity, ValidationError, ValidationKind, ValidationRule, Validator};
use serde_json::json;

#[test]
fn test_default_rule_order() {
    let validator = Validator::new();
    assert_eq!(
        validator.rule_names(),
        vec![
            "no-cycles",
            "input-output-connectivity",
            "required-fields",
            "dangling-edge-reference",
        ]
    );
}

#[test]
fn test_clean_pipeline_validates() {
    let snapshot = common::linear_snapshot();
    let model = GraphModel::build(&snapshot).unwrap();

    let report = Validator::new().validate(&model);
    assert!(report.is_valid);
    assert!(report.errors.is_empty());
    assert!(report.warnings.is_empty());
    assert!(report.timestamp > 0);
}

#[test]
fn test_cycle_rule_reports_each_cycle() {
    let snapshot = common::cyclic_snapshot();
    let model = GraphModel::build(&snapshot).unwrap();

    let report = Validator::new().validate(&model);
    assert!(!report.is_valid);

    let cycle_errors: Vec<&ValidationError> = report
        .errors
        .iter()
        .filter(|e| e.kind == ValidationKind::CycleDetected)
        .collect();
    assert_eq!(cycle_errors.len(), 1);
    assert!(cycle_errors[0].message.contains("A -> B -> C"));
    assert_eq!(
        cycle_errors[0].detail,
        Some(json!({ "cycle": ["A", "B", "C"] }))
    );
}

#[test]
fn test_disconnected_input_names_the_offender() {
    let snapshot = common::disconnected_input_snapshot();
    let model = GraphModel::build(&snapshot).unwrap();

    let report = Validator::new().validate(&model);
    let disconnected: Vec<&ValidationError> = report
        .errors
        .iter()
        .filter(|e| e.kind == ValidationKind::DisconnectedInput)
        .collect();

    assert_eq!(disconnected.len(), 1);
    assert_eq!(disconnected[0].node_id.as_deref(), Some("D"));
}

#[test]
fn test_connectivity_rule_is_silent_without_outputs() {
    // An input with nowhere to go is fine when the workflow has no outputs
    // at all; the rule only flags inputs that could reach one but don't.
    let snapshot = GraphSnapshot {
        nodes: vec![
            common::node("in", NodeType::Input),
            common::node("mid", NodeType::Default),
        ],
        edges: vec![common::edge("e1", "in", "mid")],
    };
    let model = GraphModel::build(&snapshot).unwrap();

    let report = Validator::new().validate(&model);
    assert!(
        !report
            .errors
            .iter()
            .any(|e| e.kind == ValidationKind::DisconnectedInput)
    );
}

#[test]
fn test_required_fields_for_unconfigured_llm() {
    let snapshot = GraphSnapshot {
        nodes: vec![common::node("brain", NodeType::Llm)],
        edges: vec![],
    };
    let model = GraphModel::build(&snapshot).unwrap();

    let report = Validator::new().validate(&model);
    let missing: Vec<&ValidationError> = report
        .errors
        .iter()
        .filter(|e| e.kind == ValidationKind::MissingRequiredField)
        .collect();

    assert_eq!(missing.len(), 2);
    assert_eq!(missing[0].detail, Some(json!({ "field": "model" })));
    assert_eq!(missing[1].detail, Some(json!({ "field": "prompt" })));
    assert!(missing.iter().all(|e| e.node_id.as_deref() == Some("brain")));
}

#[test]
fn test_configured_llm_passes_required_fields() {
    let snapshot = GraphSnapshot {
        nodes: vec![common::llm_node("brain", "gpt-4o", "Answer politely")],
        edges: vec![],
    };
    let model = GraphModel::build(&snapshot).unwrap();

    let report = Validator::new().validate(&model);
    assert!(report.is_valid);
}

#[test]
fn test_dangling_edge_rule() {
    let mut snapshot = common::linear_snapshot();
    snapshot.edges.push(common::edge("e9", "2", "ghost"));
    let model = GraphModel::build(&snapshot).unwrap();

    let report = Validator::new().validate(&model);
    let dangling: Vec<&ValidationError> = report
        .errors
        .iter()
        .filter(|e| e.kind == ValidationKind::DanglingEdgeReference)
        .collect();

    assert_eq!(dangling.len(), 1);
    assert!(dangling[0].message.contains("e9"));
    assert!(dangling[0].message.contains("ghost"));
}

#[test]
fn test_rules_can_be_removed_without_touching_call_sites() {
    let snapshot = GraphSnapshot {
        nodes: vec![common::node("brain", NodeType::Llm)],
        edges: vec![],
    };
    let model = GraphModel::build(&snapshot).unwrap();

    let report = Validator::new()
        .without_rule("required-fields")
        .validate(&model);
    assert!(report.is_valid);
}

/// A caller-supplied rule: warns about nodes with single-character labels.
struct TerseLabels;

impl ValidationRule for TerseLabels {
    fn name(&self) -> &str {
        "terse-labels"
    }

    fn check(&self, model: &GraphModel<'_>) -> Vec<ValidationError> {
        model
            .nodes()
            .filter(|node| node.label.len() <= 1)
            .map(|node| ValidationError {
                kind: ValidationKind::MissingRequiredField,
                severity: Severity::Warning,
                node_id: Some(node.id.clone()),
                message: format!("Node '{}' could use a more descriptive label", node.id),
                detail: None,
            })
            .collect()
    }
}

#[test]
fn test_custom_rules_land_in_the_warning_bucket() {
    let snapshot = common::diamond_snapshot();
    let model = GraphModel::build(&snapshot).unwrap();

    let report = Validator::new()
        .with_rule(Box::new(TerseLabels))
        .validate(&model);

    // Warnings never flip is_valid.
    assert!(report.is_valid);
    assert_eq!(report.warnings.len(), 4);
    assert!(report.warnings.iter().all(|w| w.severity == Severity::Warning));
}

#[test]
fn test_analyzer_builder_extends_rule_set() {
    let snapshot = common::diamond_snapshot();

    let analyzer = Analyzer::builder()
        .with_rule(Box::new(TerseLabels))
        .without_rule("input-output-connectivity")
        .build();

    let report = analyzer.validate(&snapshot).unwrap();
    assert!(report.is_valid);
    assert_eq!(report.warnings.len(), 4);
}
