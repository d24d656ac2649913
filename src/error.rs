use thiserror::Error;

/// Errors raised when a snapshot violates its basic shape contract.
///
/// These are the only hard failures the engine produces. Graphs that are
/// cyclic, disconnected, or misconfigured are still analyzable and come back
/// as validation results, not errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("Duplicate node id '{0}' in snapshot")]
    DuplicateNodeId(String),

    #[error("Duplicate edge id '{0}' in snapshot")]
    DuplicateEdgeId(String),
}

/// Errors that can occur when converting a custom caller format into a
/// Kaiseki `GraphSnapshot`.
#[derive(Error, Debug, Clone)]
pub enum GraphConversionError {
    #[error("Invalid graph payload: {0}")]
    Malformed(String),
}

/// Errors that can occur while encoding, decoding, or storing an
/// `AnalysisArtifact`.
#[derive(Error, Debug, Clone)]
pub enum ArtifactError {
    #[error("{0}")]
    Generic(String),
}
