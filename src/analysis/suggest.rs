use super::cost::CostEstimate;
use super::cycles::CycleReport;
use super::levels::ParallelGroup;
use itertools::Itertools;

/// Execution-time threshold above which a caching suggestion fires, in ms.
pub const SLOW_EXECUTION_MS: f64 = 1000.0;
/// Memory threshold above which a streaming suggestion fires, in MB.
pub const HIGH_MEMORY_MB: f64 = 500.0;
/// CPU threshold above which a load-spreading suggestion fires, in percent.
pub const HIGH_CPU_PERCENT: f64 = 80.0;
/// Network-cost threshold above which a transfer suggestion fires.
pub const HIGH_NETWORK_COST: f64 = 100.0;

/// Derives ranked, human-readable suggestions from the analysis results.
///
/// Each rule fires independently; a workflow can collect several suggestions
/// at once. Thresholds are fixed constants; there is deliberately no tuning
/// surface here, the text is advisory output for a human, not policy.
pub fn generate_suggestions(
    cycles: &CycleReport,
    groups: &[ParallelGroup],
    cost: &CostEstimate,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    if !cycles.is_empty() {
        suggestions.push(
            "Workflow contains circular dependencies; break them before it can be scheduled"
                .to_string(),
        );
        for cycle in cycles.iter() {
            suggestions.push(format!("Cycle detected: {}", render_cycle(cycle)));
        }
    }

    if let Some(largest) = groups.iter().max_by_key(|group| group.len()) {
        if largest.len() > 1 {
            suggestions.push(format!(
                "Nodes {} have no dependencies on each other and can run in parallel",
                largest.iter().join(", ")
            ));
        }
    }

    if cost.execution_time_ms > SLOW_EXECUTION_MS {
        suggestions.push(
            "Estimated execution time is high; consider caching intermediate results or trimming slow nodes"
                .to_string(),
        );
    }
    if cost.memory_mb > HIGH_MEMORY_MB {
        suggestions.push(
            "Estimated memory usage is high; consider streaming data between nodes instead of materializing it"
                .to_string(),
        );
    }
    if cost.cpu_percent > HIGH_CPU_PERCENT {
        suggestions.push(
            "Estimated CPU load is high; consider spreading compute-heavy nodes across runs"
                .to_string(),
        );
    }
    if cost.network_cost > HIGH_NETWORK_COST {
        suggestions.push(
            "Estimated data transfer is high; consider co-locating chatty nodes or caching transfers"
                .to_string(),
        );
    }

    suggestions
}

/// Renders a cycle as a closed path, e.g. `A -> B -> C -> A`.
fn render_cycle(cycle: &[String]) -> String {
    match cycle.first() {
        Some(first) => format!("{} -> {}", cycle.iter().join(" -> "), first),
        None => String::new(),
    }
}
