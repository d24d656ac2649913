//! End-to-end scenarios through the full engine.
mod common;
use kaiseki::analysis::artifact::AnalysisArtifact;
use kaiseki::prelude::*;
use kaiseki::validate::ValidationKind;

#[test]
fn test_linear_pipeline_end_to_end() {
    let analyzer = Analyzer::new();
    let report = analyzer.analyze(&common::linear_snapshot()).unwrap();

    assert!(report.cycles.is_empty());
    assert_eq!(
        report.parallel_groups,
        vec![
            vec!["1".to_string()],
            vec!["2".to_string()],
            vec!["3".to_string()],
        ]
    );
    assert!(report.is_valid);
    assert!(report.validation.is_valid);
    assert!(report.validation.errors.is_empty());
    assert!(report.cost_estimate.execution_time_ms > 0.0);
}

#[test]
fn test_cyclic_workflow_end_to_end() {
    let analyzer = Analyzer::new();
    let report = analyzer.analyze(&common::cyclic_snapshot()).unwrap();

    assert_eq!(
        report.cycles.cycles,
        vec![vec!["A".to_string(), "B".to_string(), "C".to_string()]]
    );
    assert!(!report.is_valid);
    assert!(report.parallel_groups.is_empty());

    assert!(!report.validation.is_valid);
    assert_eq!(report.validation.errors.len(), 1);
    assert_eq!(
        report.validation.errors[0].kind,
        ValidationKind::CycleDetected
    );

    // The cycle also surfaces as advisory text.
    assert!(
        report
            .suggestions
            .iter()
            .any(|s| s.contains("A -> B -> C -> A"))
    );
}

#[test]
fn test_duplicate_ids_are_rejected_before_analysis() {
    let mut snapshot = common::linear_snapshot();
    snapshot.nodes.push(common::node("1", NodeType::Default));

    let err = Analyzer::new().analyze(&snapshot).unwrap_err();
    assert_eq!(err, SnapshotError::DuplicateNodeId("1".to_string()));
}

#[test]
fn test_canvas_payload_end_to_end() {
    // A React-Flow shaped payload straight from the editor: one half-filled
    // llm node, a data source, an unknown node type, and an id-less edge.
    let payload = r#"{
        "nodes": [
            {
                "id": "source",
                "type": "data",
                "data": {
                    "label": "Sales CSV",
                    "config": { "dataType": "csv", "source": "s3://sales.csv", "estimatedDataSize": 40.0 }
                },
                "position": { "x": 0.0, "y": 100.0 }
            },
            {
                "id": "summarize",
                "type": "llm",
                "data": { "label": "Summarize", "config": { "model": "gpt-4o" } },
                "position": { "x": 220.0, "y": 100.0 }
            },
            {
                "id": "mystery",
                "type": "hologram",
                "data": { "label": "Mystery" }
            }
        ],
        "edges": [
            { "id": "e1", "source": "source", "target": "summarize" },
            { "source": "summarize", "target": "mystery" }
        ]
    }"#;

    let snapshot = UiGraph::from_json(payload)
        .and_then(IntoSnapshot::into_snapshot)
        .unwrap();

    assert_eq!(snapshot.node_count(), 3);
    assert_eq!(snapshot.nodes[2].node_type, NodeType::Default);
    assert_eq!(snapshot.edges[1].id, "summarize->mystery");
    assert_eq!(snapshot.nodes[0].config.estimated_data_size, 40.0);
    assert_eq!(snapshot.nodes[0].position.x, 0.0);

    let report = Analyzer::new().analyze(&snapshot).unwrap();
    assert!(report.is_valid);
    assert_eq!(report.parallel_groups.len(), 3);

    // The llm node has a model but no prompt.
    assert_eq!(report.validation.errors.len(), 1);
    assert_eq!(
        report.validation.errors[0].kind,
        ValidationKind::MissingRequiredField
    );
    assert_eq!(report.validation.errors[0].node_id.as_deref(), Some("summarize"));
}

#[test]
fn test_report_serializes_to_the_documented_shape() {
    let report = Analyzer::new().analyze(&common::diamond_snapshot()).unwrap();
    let value = serde_json::to_value(&report).unwrap();

    for key in [
        "cycles",
        "parallelGroups",
        "costEstimate",
        "suggestions",
        "isValid",
        "validation",
    ] {
        assert!(value.get(key).is_some(), "missing key {}", key);
    }
    assert!(value["cycles"].is_array());
    assert!(value["costEstimate"].get("memoryMB").is_some());
    assert!(value["costEstimate"].get("executionTimeMs").is_some());
    assert!(value["validation"].get("timestamp").is_some());

    // And back in again.
    let roundtrip: AnalysisReport = serde_json::from_value(value).unwrap();
    assert_eq!(roundtrip, report);
}

#[test]
fn test_artifact_byte_roundtrip() {
    // Use a report that actually carries detail payloads.
    let report = Analyzer::new().analyze(&common::cyclic_snapshot()).unwrap();
    let artifact = AnalysisArtifact::new(&report).unwrap();

    let bytes = artifact.to_bytes().unwrap();
    let decoded = AnalysisArtifact::from_bytes(&bytes).unwrap();

    assert_eq!(decoded.engine_version, env!("CARGO_PKG_VERSION"));
    assert_eq!(decoded.report().unwrap(), report);
}

#[test]
fn test_artifact_file_roundtrip() {
    let report = Analyzer::new().analyze(&common::linear_snapshot()).unwrap();
    let artifact = AnalysisArtifact::new(&report).unwrap();

    let path = std::env::temp_dir().join("kaiseki_artifact_test.bin");
    let path = path.to_string_lossy().to_string();

    artifact.save(&path).unwrap();
    let loaded = AnalysisArtifact::from_file(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded.report().unwrap(), report);
}

#[test]
fn test_empty_graph_is_boring_but_valid() {
    let report = Analyzer::new().analyze(&GraphSnapshot::default()).unwrap();

    assert!(report.is_valid);
    assert!(report.cycles.is_empty());
    assert!(report.parallel_groups.is_empty());
    assert!(report.suggestions.is_empty());
    assert_eq!(report.cost_estimate, CostEstimate::default());
    assert!(report.validation.errors.is_empty());
}
