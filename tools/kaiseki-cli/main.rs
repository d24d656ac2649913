use clap::Parser;
use kaiseki::prelude::*;
use kaiseki::analysis::CostModel;
use std::fs;
use std::time::Instant;

/// A workflow graph analysis CLI: cycles, levels, cost, validation
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the workflow graph JSON file (canvas `{nodes, edges}` payload)
    graph_path: String,

    /// Optional path to a cost model JSON file replacing the built-in table
    #[arg(short, long)]
    cost_model: Option<String>,

    /// Only run the validation rules, skip the optimization passes
    #[arg(long)]
    validate_only: bool,

    /// Print the full report as pretty JSON instead of the summary
    #[arg(short, long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();
    let total_start = Instant::now();

    // --- 1. File Loading ---
    let graph_json = fs::read_to_string(&cli.graph_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read graph file '{}': {}",
            &cli.graph_path, e
        ))
    });

    let mut builder = Analyzer::builder();
    if let Some(cost_model_path) = &cli.cost_model {
        let cost_model = CostModel::from_file(cost_model_path).unwrap_or_else(|e| {
            exit_with_error(&format!(
                "Failed to load cost model from '{}': {}",
                cost_model_path, e
            ))
        });
        builder = builder.with_cost_model(cost_model);
    }
    let analyzer = builder.build();

    // --- 2. Parsing and Conversion ---
    let parse_start = Instant::now();
    let snapshot = UiGraph::from_json(&graph_json)
        .and_then(IntoSnapshot::into_snapshot)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert graph: {}", e)));
    let parse_duration = parse_start.elapsed();

    println!(
        "Loaded workflow: {} nodes, {} edges (parsed in {:?})",
        snapshot.node_count(),
        snapshot.edge_count(),
        parse_duration
    );

    if cli.validate_only {
        let validation = analyzer
            .validate(&snapshot)
            .unwrap_or_else(|e| exit_with_error(&format!("Snapshot rejected: {}", e)));
        print_validation(&validation);
        println!("\nDone in {:?}", total_start.elapsed());
        return;
    }

    // --- 3. Analysis ---
    let analyze_start = Instant::now();
    let report = analyzer
        .analyze(&snapshot)
        .unwrap_or_else(|e| exit_with_error(&format!("Snapshot rejected: {}", e)));
    let analyze_duration = analyze_start.elapsed();

    if cli.json {
        let rendered = serde_json::to_string_pretty(&report)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to render report: {}", e)));
        println!("{}", rendered);
        return;
    }

    // --- 4. Summary ---
    println!("\nAnalysis finished in {:?}", analyze_duration);

    if report.cycles.is_empty() {
        println!("  Cycles: none");
    } else {
        println!("  Cycles: {}", report.cycles.len());
        for cycle in report.cycles.iter() {
            println!("    - {}", cycle.join(" -> "));
        }
    }

    println!("  Parallel levels: {}", report.parallel_groups.len());
    for (index, group) in report.parallel_groups.iter().enumerate() {
        println!("    level {}: {}", index, group.join(", "));
    }

    let cost = &report.cost_estimate;
    println!(
        "  Estimated cost: {:.0} ms, {:.0} MB, {:.0}% cpu, {:.1} network",
        cost.execution_time_ms, cost.memory_mb, cost.cpu_percent, cost.network_cost
    );

    if !report.suggestions.is_empty() {
        println!("  Suggestions:");
        for suggestion in &report.suggestions {
            println!("    - {}", suggestion);
        }
    }

    print_validation(&report.validation);
    println!("\nDone in {:?}", total_start.elapsed());
}

fn print_validation(validation: &ValidationReport) {
    if validation.is_valid && validation.warnings.is_empty() {
        println!("  Validation: ok");
        return;
    }

    println!(
        "  Validation: {} error(s), {} warning(s)",
        validation.errors.len(),
        validation.warnings.len()
    );
    for error in &validation.errors {
        println!("    [error] {}", error.message);
    }
    for warning in &validation.warnings {
        println!("    [warn]  {}", warning.message);
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}
