use crate::analysis::{Analyzer, CostModel};
use crate::graph::IntoSnapshot;
use crate::ui::UiGraph;
use pyo3::prelude::*;

/// A high-performance analysis engine for node-based workflow graphs.
///
/// An instance holds only configuration (the cost table and validation rule
/// set); each `analyze` call is an independent, stateless pass over the graph
/// it is given, so one instance can be reused for every edit.
#[pyclass(name = "Kaiseki")]
struct KaisekiPy {
    analyzer: Analyzer,
}

#[pymethods]
impl KaisekiPy {
    /// Creates an analyzer.
    ///
    /// Args:
    ///     cost_model_json (str | None): Optional JSON document replacing the
    ///         built-in cost table (per-type baselines, transfer factors).
    ///
    /// Raises:
    ///     ValueError: If the cost model JSON is malformed.
    #[new]
    #[pyo3(signature = (cost_model_json=None))]
    fn new(cost_model_json: Option<&str>) -> PyResult<Self> {
        let mut builder = Analyzer::builder();
        if let Some(json) = cost_model_json {
            let cost_model = CostModel::from_json(json)
                .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;
            builder = builder.with_cost_model(cost_model);
        }
        Ok(KaisekiPy {
            analyzer: builder.build(),
        })
    }

    /// Analyzes a canvas graph payload.
    ///
    /// Args:
    ///     graph_json (str): The editor's `{nodes, edges}` JSON document.
    ///
    /// Returns:
    ///     str: The analysis report as a JSON document with keys "cycles",
    ///         "parallelGroups", "costEstimate", "suggestions", "isValid"
    ///         and "validation".
    ///
    /// Raises:
    ///     ValueError: If the payload is malformed or violates the snapshot
    ///         shape contract (duplicate node or edge ids).
    fn analyze(&self, graph_json: &str) -> PyResult<String> {
        let snapshot = UiGraph::from_json(graph_json)
            .and_then(IntoSnapshot::into_snapshot)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;

        let report = self
            .analyzer
            .analyze(&snapshot)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;

        serde_json::to_string(&report)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(e.to_string()))
    }
}

/// Workflow graph analysis for node-based editors.
///
/// This module provides Python bindings to the Kaiseki Rust library: cycle
/// detection, parallel-level partitioning, cost estimation, validation and
/// optimization suggestions over a `{nodes, edges}` graph snapshot.
#[pymodule]
fn kaiseki(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<KaisekiPy>()?;
    Ok(())
}
