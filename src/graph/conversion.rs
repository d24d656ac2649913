use super::definition::GraphSnapshot;
use crate::error::GraphConversionError;

/// A trait for custom data models that can be converted into a Kaiseki
/// `GraphSnapshot`.
///
/// This is the primary extension point for making Kaiseki format-agnostic.
/// Implement it on your own editor or persistence structs to provide a
/// translation layer the analysis engine can consume. The crate ships one
/// implementation, [`crate::ui::UiGraph`], covering the common React-Flow
/// shaped canvas payload.
///
/// # Example
///
/// ```rust
/// use kaiseki::error::GraphConversionError;
/// use kaiseki::graph::{
///     GraphSnapshot, IntoSnapshot, NodeConfig, NodeDefinition, NodeType, Position,
/// };
///
/// // 1. Define your custom structs for parsing your format.
/// struct MyStep { id: String, kind: String }
/// struct MyPipeline { steps: Vec<MyStep> }
///
/// // 2. Implement `IntoSnapshot` for your top-level struct.
/// impl IntoSnapshot for MyPipeline {
///     fn into_snapshot(self) -> Result<GraphSnapshot, GraphConversionError> {
///         let nodes = self
///             .steps
///             .into_iter()
///             .map(|step| {
///                 let node_type = NodeType::parse(&step.kind).unwrap_or(NodeType::Default);
///                 NodeDefinition {
///                     label: step.id.clone(),
///                     id: step.id,
///                     node_type,
///                     config: NodeConfig::empty(node_type),
///                     position: Position::default(),
///                 }
///             })
///             .collect();
///
///         Ok(GraphSnapshot {
///             nodes,
///             edges: vec![], // Convert your connections here as well
///         })
///     }
/// }
/// ```
pub trait IntoSnapshot {
    /// Consumes the object and converts it into an analyzable snapshot.
    fn into_snapshot(self) -> Result<GraphSnapshot, GraphConversionError>;
}
