use clap::Parser;
use rand::Rng;
use rand::rngs::ThreadRng;
use serde_json::{Value, json};
use std::fs;

/// A CLI tool to generate random workflow graphs for the Kaiseki analyzer
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_graph.json")]
    output: String,

    /// Number of processing nodes between the input and output layers
    #[arg(long, default_value_t = 12)]
    nodes: usize,

    /// Number of dependency levels to spread the processing nodes over
    #[arg(long, default_value_t = 4)]
    levels: usize,

    /// Probability of an extra cross-level edge between any two nodes
    #[arg(long, default_value_t = 0.15)]
    extra_edge_prob: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.levels == 0 || cli.nodes < cli.levels {
        eprintln!(
            "Error: --nodes ({}) must be at least --levels ({}), and --levels must be > 0",
            cli.nodes, cli.levels
        );
        std::process::exit(1);
    }

    println!(
        "Generating workflow graph ({} nodes over {} levels)...",
        cli.nodes, cli.levels
    );

    let graph = generate_graph(&mut rng, cli.nodes, cli.levels, cli.extra_edge_prob);

    let json_output = serde_json::to_string_pretty(&graph)?;
    fs::write(&cli.output, json_output)?;

    println!("Successfully generated and saved graph to '{}'", cli.output);

    Ok(())
}

const PROCESSING_TYPES: [&str; 3] = ["llm", "notebook", "data"];

fn generate_graph(rng: &mut ThreadRng, nodes: usize, levels: usize, extra_edge_prob: f64) -> Value {
    // Level 0 is a single input, the last level a single output; processing
    // nodes are spread round-robin over the levels in between.
    let mut level_members: Vec<Vec<String>> = vec![Vec::new(); levels + 2];
    level_members[0].push("input".to_string());
    level_members[levels + 1].push("output".to_string());

    let mut node_values = vec![
        node_value(rng, "input", "input", 0),
        node_value(rng, "output", "output", levels + 1),
    ];

    for index in 0..nodes {
        let level = 1 + index % levels;
        let id = format!("n{:03}", index);
        let node_type = PROCESSING_TYPES[rng.random_range(0..PROCESSING_TYPES.len())];
        node_values.push(node_value(rng, &id, node_type, level));
        level_members[level].push(id);
    }

    // Every node gets one edge from some node on the previous level, keeping
    // the graph connected and acyclic; extra forward edges add fan-out.
    let mut edge_values = Vec::new();
    let mut edge_index = 0;
    for level in 1..level_members.len() {
        for target in &level_members[level] {
            let sources = &level_members[level - 1];
            let source = &sources[rng.random_range(0..sources.len())];
            edge_values.push(edge_value(edge_index, source, target));
            edge_index += 1;
        }
    }
    for level in 1..level_members.len() {
        for target in &level_members[level] {
            for earlier in level_members[..level - 1].iter().flatten() {
                if rng.random_bool(extra_edge_prob) {
                    edge_values.push(edge_value(edge_index, earlier, target));
                    edge_index += 1;
                }
            }
        }
    }

    json!({ "nodes": node_values, "edges": edge_values })
}

fn node_value(rng: &mut ThreadRng, id: &str, node_type: &str, level: usize) -> Value {
    let config = match node_type {
        "llm" => json!({
            "model": "gpt-4o-mini",
            "prompt": format!("Process step {}", id),
            "complexity": rng.random_range(0.0..3.0),
        }),
        "notebook" => json!({
            "notebookPath": format!("notebooks/{}.ipynb", id),
            "complexity": rng.random_range(0.0..2.0),
        }),
        "data" => json!({
            "dataType": "csv",
            "source": format!("datasets/{}.csv", id),
            "estimatedDataSize": rng.random_range(1.0..100.0),
        }),
        _ => json!({}),
    };

    json!({
        "id": id,
        "type": node_type,
        "data": { "label": id, "config": config },
        "position": { "x": level as f64 * 220.0, "y": rng.random_range(0.0..600.0) },
    })
}

fn edge_value(index: usize, source: &str, target: &str) -> Value {
    json!({
        "id": format!("e{:04}", index),
        "source": source,
        "target": target,
    })
}
