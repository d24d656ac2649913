use crate::graph::{GraphModel, NodeType};
use crate::graph::config::{DEFAULT_COMPLEXITY, DEFAULT_DATA_SIZE};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fs;

/// Aggregate resource projection for one workflow snapshot.
///
/// A heuristic, not a simulation: totals are plain sums over nodes and edges
/// with no discounting for parallel levels. All fields are non-negative and
/// finite for every input, including empty graphs and malformed configs.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostEstimate {
    pub execution_time_ms: f64,
    #[serde(rename = "memoryMB")]
    pub memory_mb: f64,
    pub cpu_percent: f64,
    pub network_cost: f64,
}

/// Per-type cost baselines before connection/complexity scaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeBaseCost {
    pub execution_time_ms: f64,
    #[serde(rename = "memoryMB")]
    pub memory_mb: f64,
    pub cpu_percent: f64,
}

/// One entry of the transfer-cost table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransferCost {
    pub source: NodeType,
    pub target: NodeType,
    pub factor: f64,
}

/// The tunable constants behind [`estimate_cost`].
///
/// The numbers are product tuning, not an algorithmic contract, so they live
/// in data: `CostModel::default()` carries the built-in table and
/// [`CostModel::from_json`] / [`CostModel::from_file`] load a replacement.
/// Types missing from a loaded table fall back to the `default` row; node
/// type pairs missing from the transfer table fall back to
/// `default_transfer_cost`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostModel {
    pub base_costs: AHashMap<NodeType, NodeBaseCost>,
    pub transfer_costs: Vec<TransferCost>,
    pub default_transfer_cost: f64,
}

impl Default for CostModel {
    fn default() -> Self {
        let mut base_costs = AHashMap::new();
        base_costs.insert(
            NodeType::Llm,
            NodeBaseCost {
                execution_time_ms: 2500.0,
                memory_mb: 512.0,
                cpu_percent: 60.0,
            },
        );
        base_costs.insert(
            NodeType::Notebook,
            NodeBaseCost {
                execution_time_ms: 1800.0,
                memory_mb: 1024.0,
                cpu_percent: 75.0,
            },
        );
        base_costs.insert(
            NodeType::Data,
            NodeBaseCost {
                execution_time_ms: 400.0,
                memory_mb: 256.0,
                cpu_percent: 25.0,
            },
        );
        base_costs.insert(
            NodeType::Input,
            NodeBaseCost {
                execution_time_ms: 50.0,
                memory_mb: 16.0,
                cpu_percent: 5.0,
            },
        );
        base_costs.insert(
            NodeType::Output,
            NodeBaseCost {
                execution_time_ms: 50.0,
                memory_mb: 16.0,
                cpu_percent: 5.0,
            },
        );
        base_costs.insert(
            NodeType::Default,
            NodeBaseCost {
                execution_time_ms: 150.0,
                memory_mb: 64.0,
                cpu_percent: 10.0,
            },
        );

        let transfer_costs = vec![
            TransferCost {
                source: NodeType::Data,
                target: NodeType::Llm,
                factor: 0.5,
            },
            TransferCost {
                source: NodeType::Data,
                target: NodeType::Notebook,
                factor: 0.4,
            },
            TransferCost {
                source: NodeType::Llm,
                target: NodeType::Llm,
                factor: 0.3,
            },
            TransferCost {
                source: NodeType::Notebook,
                target: NodeType::Output,
                factor: 0.25,
            },
            TransferCost {
                source: NodeType::Llm,
                target: NodeType::Output,
                factor: 0.2,
            },
            TransferCost {
                source: NodeType::Input,
                target: NodeType::Llm,
                factor: 0.15,
            },
        ];

        Self {
            base_costs,
            transfer_costs,
            default_transfer_cost: 0.1,
        }
    }
}

impl CostModel {
    /// Loads a cost model from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Loads a cost model from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }

    /// Baseline row for a node type, falling back to the `default` row and
    /// finally to zeros if a loaded table dropped both.
    pub fn base_cost(&self, node_type: NodeType) -> NodeBaseCost {
        self.base_costs
            .get(&node_type)
            .or_else(|| self.base_costs.get(&NodeType::Default))
            .copied()
            .unwrap_or(NodeBaseCost {
                execution_time_ms: 0.0,
                memory_mb: 0.0,
                cpu_percent: 0.0,
            })
    }

    /// Transfer factor for a (source, target) type pair.
    pub fn transfer_factor(&self, source: NodeType, target: NodeType) -> f64 {
        self.transfer_costs
            .iter()
            .find(|t| t.source == source && t.target == target)
            .map(|t| t.factor)
            .unwrap_or(self.default_transfer_cost)
    }
}

/// Estimates aggregate execution cost for the snapshot.
///
/// Per node, each baseline is scaled by a connection factor
/// `1 + 0.1 x (in-degree + out-degree)` and a complexity factor
/// `1 + 0.2 x complexity`. Network cost is summed per resolved edge as the
/// source node's estimated data size times the type-pair transfer factor.
pub fn estimate_cost(model: &GraphModel<'_>, cost_model: &CostModel) -> CostEstimate {
    let mut estimate = CostEstimate::default();

    for node in model.nodes() {
        let base = cost_model.base_cost(node.node_type);
        let connection = 1.0 + 0.1 * model.degree(&node.id) as f64;
        let complexity = 1.0 + 0.2 * scrub(node.config.complexity, DEFAULT_COMPLEXITY);

        estimate.execution_time_ms += base.execution_time_ms * connection * complexity;
        estimate.memory_mb += base.memory_mb * connection * complexity;
        estimate.cpu_percent += base.cpu_percent * connection * complexity;
    }

    for edge in model.resolved_edges() {
        let (Some(source), Some(target)) = (model.node(&edge.source), model.node(&edge.target))
        else {
            continue;
        };
        let data_size = scrub(source.config.estimated_data_size, DEFAULT_DATA_SIZE);
        estimate.network_cost +=
            data_size * cost_model.transfer_factor(source.node_type, target.node_type);
    }

    CostEstimate {
        execution_time_ms: scrub(estimate.execution_time_ms, 0.0),
        memory_mb: scrub(estimate.memory_mb, 0.0),
        cpu_percent: scrub(estimate.cpu_percent, 0.0),
        network_cost: scrub(estimate.network_cost, 0.0),
    }
}

/// Snapshots can be built by hand with junk numbers; anything non-finite or
/// negative collapses to the documented default.
fn scrub(value: f64, default: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        default
    }
}
