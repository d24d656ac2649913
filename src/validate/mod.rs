//! Pluggable validation over a graph snapshot.
//!
//! Rules are pure functions from the indexed snapshot to a list of findings.
//! The [`Validator`] runs an ordered rule list and buckets findings by
//! severity; rules can be added or removed without touching any call site.
//! Validation is best-effort, heuristic feedback surfaced to a human in the
//! editor; it is not a compiler and does not try to be exhaustive.

use crate::graph::{GraphModel, NodeId};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

mod rules;

pub use rules::{
    DanglingEdges, InputOutputConnectivity, NoCycles, RequiredFields, register_default_rules,
};

/// What a finding is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationKind {
    CycleDetected,
    DisconnectedInput,
    MissingRequiredField,
    DanglingEdgeReference,
}

/// Whether a finding blocks scheduling or is merely advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    pub kind: ValidationKind,
    pub severity: Severity,
    pub node_id: Option<NodeId>,
    pub message: String,
    pub detail: Option<serde_json::Value>,
}

/// The bucketed outcome of one validation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationError>,
    /// True iff no error-severity finding was produced.
    pub is_valid: bool,
    /// Epoch milliseconds at which the run finished.
    pub timestamp: u64,
}

/// Defines the contract for one named validation rule.
pub trait ValidationRule: Send + Sync {
    fn name(&self) -> &str;
    fn check(&self, model: &GraphModel<'_>) -> Vec<ValidationError>;
}

/// Runs an ordered list of [`ValidationRule`]s against a snapshot.
pub struct Validator {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl Validator {
    /// Validator carrying the built-in rule set, in its documented order.
    pub fn new() -> Self {
        let mut rules: Vec<Box<dyn ValidationRule>> = Vec::new();
        register_default_rules(&mut rules);
        Self { rules }
    }

    /// Validator with no rules at all.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule to the end of the run order.
    pub fn with_rule(mut self, rule: Box<dyn ValidationRule>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Removes every rule with the given name.
    pub fn without_rule(mut self, name: &str) -> Self {
        self.rules.retain(|rule| rule.name() != name);
        self
    }

    /// Names of the registered rules, in run order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Runs every rule in order and buckets the findings by severity.
    pub fn validate(&self, model: &GraphModel<'_>) -> ValidationReport {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        for rule in &self.rules {
            for finding in rule.check(model) {
                match finding.severity {
                    Severity::Error => errors.push(finding),
                    Severity::Warning => warnings.push(finding),
                }
            }
        }

        let is_valid = errors.is_empty();
        ValidationReport {
            errors,
            warnings,
            is_valid,
            timestamp: epoch_millis(),
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

fn epoch_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
