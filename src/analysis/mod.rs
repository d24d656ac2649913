use crate::error::SnapshotError;
use crate::graph::{GraphModel, GraphSnapshot};
use crate::validate::{ValidationReport, ValidationRule, Validator};
use serde::{Deserialize, Serialize};

#[cfg(feature = "debug-tools")]
use std::fs;

pub mod artifact;
pub mod cost;
pub mod cycles;
pub mod levels;
pub mod suggest;

pub use cost::{CostEstimate, CostModel};
pub use cycles::{Cycle, CycleReport, detect_cycles};
pub use levels::{ParallelGroup, partition_levels};
pub use suggest::generate_suggestions;

/// The optimization half of an analysis: structure, schedule, cost, advice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    pub cycles: CycleReport,
    pub parallel_groups: Vec<ParallelGroup>,
    pub cost_estimate: CostEstimate,
    pub suggestions: Vec<String>,
    /// True iff the cycle report is empty. A false value means the parallel
    /// groups are partial and must not be read as a schedule.
    pub is_valid: bool,
}

/// Everything one engine call produces. Serializes to the documented
/// `/analyze` response body:
/// `{cycles, parallelGroups, costEstimate, suggestions, isValid, validation}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub cycles: CycleReport,
    pub parallel_groups: Vec<ParallelGroup>,
    pub cost_estimate: CostEstimate,
    pub suggestions: Vec<String>,
    /// True iff the cycle report is empty.
    pub is_valid: bool,
    pub validation: ValidationReport,
}

/// Builder for an [`Analyzer`].
pub struct AnalyzerBuilder {
    cost_model: CostModel,
    validator: Validator,
}

impl AnalyzerBuilder {
    pub fn new() -> Self {
        Self {
            cost_model: CostModel::default(),
            validator: Validator::new(),
        }
    }

    /// Replaces the built-in cost table with a loaded one.
    pub fn with_cost_model(mut self, cost_model: CostModel) -> Self {
        self.cost_model = cost_model;
        self
    }

    /// Appends a custom validation rule after the built-ins.
    pub fn with_rule(mut self, rule: Box<dyn ValidationRule>) -> Self {
        self.validator = self.validator.with_rule(rule);
        self
    }

    /// Removes a validation rule by name.
    pub fn without_rule(mut self, name: &str) -> Self {
        self.validator = self.validator.without_rule(name);
        self
    }

    pub fn build(self) -> Analyzer {
        Analyzer {
            cost_model: self.cost_model,
            validator: self.validator,
        }
    }
}

impl Default for AnalyzerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The analysis engine.
///
/// Holds only configuration (the cost table and the rule list); all per-call
/// state lives on the stack of [`Analyzer::analyze`]. A single instance can
/// be shared freely across threads and reused for every edit; each call is a
/// full, independent recomputation over the snapshot it is given.
pub struct Analyzer {
    cost_model: CostModel,
    validator: Validator,
}

impl Analyzer {
    /// Analyzer with the default cost model and built-in rules.
    pub fn new() -> Self {
        AnalyzerBuilder::new().build()
    }

    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Runs every pass over the snapshot and returns the combined report.
    ///
    /// The only error is a snapshot violating its shape contract (duplicate
    /// ids). Cyclic, disconnected, or misconfigured graphs are data, not
    /// errors: the report describes them.
    pub fn analyze(&self, snapshot: &GraphSnapshot) -> Result<AnalysisReport, SnapshotError> {
        let model = GraphModel::build(snapshot)?;

        let optimization = self.optimize_model(&model);
        let validation = self.validator.validate(&model);

        #[cfg(feature = "debug-tools")]
        self.write_debug_dump(&optimization);

        Ok(AnalysisReport {
            cycles: optimization.cycles,
            parallel_groups: optimization.parallel_groups,
            cost_estimate: optimization.cost_estimate,
            suggestions: optimization.suggestions,
            is_valid: optimization.is_valid,
            validation,
        })
    }

    /// Runs only the optimization passes (cycles, levels, cost, suggestions).
    pub fn optimize(&self, snapshot: &GraphSnapshot) -> Result<OptimizationResult, SnapshotError> {
        let model = GraphModel::build(snapshot)?;
        Ok(self.optimize_model(&model))
    }

    /// Runs only the validation rules.
    pub fn validate(&self, snapshot: &GraphSnapshot) -> Result<ValidationReport, SnapshotError> {
        let model = GraphModel::build(snapshot)?;
        Ok(self.validator.validate(&model))
    }

    fn optimize_model(&self, model: &GraphModel<'_>) -> OptimizationResult {
        let cycles = detect_cycles(model);
        let parallel_groups = partition_levels(model);
        let cost_estimate = cost::estimate_cost(model, &self.cost_model);
        let suggestions = generate_suggestions(&cycles, &parallel_groups, &cost_estimate);
        let is_valid = cycles.is_empty();

        OptimizationResult {
            cycles,
            parallel_groups,
            cost_estimate,
            suggestions,
            is_valid,
        }
    }

    #[cfg(feature = "debug-tools")]
    fn write_debug_dump(&self, optimization: &OptimizationResult) {
        let mut dump = String::new();
        for (index, group) in optimization.parallel_groups.iter().enumerate() {
            dump.push_str(&format!("level {}: {}\n", index, group.join(", ")));
        }
        dump.push_str(&format!(
            "cost: {:.1} ms, {:.1} MB, {:.1}% cpu, {:.1} net\n",
            optimization.cost_estimate.execution_time_ms,
            optimization.cost_estimate.memory_mb,
            optimization.cost_estimate.cpu_percent,
            optimization.cost_estimate.network_cost,
        ));
        if fs::create_dir_all("tmp").is_ok() {
            let _ = fs::write("tmp/analysis_levels.txt", dump);
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}
