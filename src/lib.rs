//! # Kaiseki - Workflow Graph Analysis Engine
//!
//! **Kaiseki** is a high-performance analysis engine for node-based workflow
//! graphs. Given a snapshot of the nodes and edges on an editor canvas, it
//! detects cycles, partitions the graph into parallel-executable levels,
//! estimates execution cost, validates structural and per-node-type
//! correctness, and derives human-readable optimization suggestions.
//!
//! The engine is pure: it performs no I/O, never mutates its input, and holds
//! no state across calls, so it can be re-run on every edit without side
//! effects. It computes facts about a graph; callers decide what to do with
//! them. Executing nodes, scheduling workers, and persisting workflows are
//! deliberately someone else's job.
//!
//! ## Core Workflow
//!
//! The engine is format-agnostic. It operates on a canonical internal model
//! of a graph snapshot. The primary workflow is:
//!
//! 1.  **Load Your Data**: Parse your editor's payload (e.g. from JSON) into your own Rust structs,
//!     or use the bundled [`ui::UiGraph`] types for React-Flow shaped canvases.
//! 2.  **Convert to Kaiseki's Model**: Implement the `IntoSnapshot` trait to translate your format
//!     into a [`graph::GraphSnapshot`].
//! 3.  **Analyze**: Build an [`analysis::Analyzer`] (optionally with a custom cost model or extra
//!     validation rules) and call `analyze` after every structural edit.
//! 4.  **Render**: Hand the serializable [`analysis::AnalysisReport`] back to the UI layer.
//!
//! ## Quick Start
//!
//! ```rust
//! use kaiseki::prelude::*;
//! use kaiseki::graph::{NodeConfig, Position};
//!
//! fn main() -> Result<()> {
//!     // A minimal three-node pipeline: input -> transform -> output.
//!     let node = |id: &str, node_type: NodeType| NodeDefinition {
//!         id: id.to_string(),
//!         node_type,
//!         label: id.to_string(),
//!         config: NodeConfig::empty(node_type),
//!         position: Position::default(),
//!     };
//!     let edge = |id: &str, source: &str, target: &str| EdgeDefinition {
//!         id: id.to_string(),
//!         source: source.to_string(),
//!         target: target.to_string(),
//!         label: None,
//!     };
//!
//!     let snapshot = GraphSnapshot {
//!         nodes: vec![
//!             node("read", NodeType::Input),
//!             node("transform", NodeType::Default),
//!             node("write", NodeType::Output),
//!         ],
//!         edges: vec![edge("e1", "read", "transform"), edge("e2", "transform", "write")],
//!     };
//!
//!     let analyzer = Analyzer::new();
//!     let report = analyzer.analyze(&snapshot)?;
//!
//!     assert!(report.is_valid);
//!     assert!(report.cycles.is_empty());
//!     assert_eq!(report.parallel_groups.len(), 3);
//!     assert!(report.validation.errors.is_empty());
//!
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod ui;
pub mod validate;

#[cfg(feature = "python-bindings")]
mod python;
