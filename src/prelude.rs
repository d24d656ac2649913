//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! kaiseki crate. Import this module to get access to the core functionality
//! without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! // Use the prelude to get easy access to all the core types.
//! use kaiseki::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Load a canvas payload and analyze it
//! let graph_json = std::fs::read_to_string("path/to/workflow.json")?;
//! let snapshot = UiGraph::from_json(&graph_json)?.into_snapshot()?;
//!
//! let analyzer = Analyzer::new();
//! let report = analyzer.analyze(&snapshot)?;
//!
//! println!("valid: {}", report.is_valid);
//! for suggestion in &report.suggestions {
//!     println!("- {}", suggestion);
//! }
//! # Ok(())
//! # }
//! ```

// Core engine
pub use crate::analysis::{
    AnalysisReport, Analyzer, AnalyzerBuilder, CostEstimate, CostModel, Cycle, CycleReport,
    OptimizationResult, ParallelGroup,
};

// Data structures
pub use crate::graph::{
    EdgeDefinition, GraphModel, GraphSnapshot, IntoSnapshot, NodeDefinition, NodeId, NodeType,
};
pub use crate::ui::UiGraph;

// Validation
pub use crate::validate::{
    Severity, ValidationError, ValidationKind, ValidationReport, ValidationRule, Validator,
};

// Error types
pub use crate::error::{GraphConversionError, SnapshotError};

// Standard library re-exports commonly used with this crate
pub use std::collections::HashMap;
pub use std::path::Path;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
