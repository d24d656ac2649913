use super::AnalysisReport;
use crate::error::ArtifactError;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};

/// A serialized analysis report, tagged with the engine version that
/// produced it.
///
/// The engine itself persists nothing; artifacts exist so callers can ship a
/// report over a queue or park it next to a saved workflow without re-running
/// the analysis on load. Readers should discard artifacts from a different
/// engine version and recompute.
///
/// Validation findings carry opaque JSON detail payloads, which only a
/// self-describing format can decode, so the report is stored as its JSON
/// encoding inside the bincode envelope.
#[derive(Serialize, Deserialize, Debug)]
pub struct AnalysisArtifact {
    pub engine_version: String,
    report_json: String,
}

impl AnalysisArtifact {
    pub fn new(report: &AnalysisReport) -> Result<Self, ArtifactError> {
        let report_json = serde_json::to_string(report)
            .map_err(|e| ArtifactError::Generic(format!("Report serialization failed: {}", e)))?;
        Ok(Self {
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            report_json,
        })
    }

    /// Decodes the stored report.
    pub fn report(&self) -> Result<AnalysisReport, ArtifactError> {
        serde_json::from_str(&self.report_json)
            .map_err(|e| ArtifactError::Generic(format!("Report deserialization failed: {}", e)))
    }

    /// Encodes the artifact with the bincode format.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ArtifactError> {
        encode_to_vec(self, standard())
            .map_err(|e| ArtifactError::Generic(format!("Serialization failed: {}", e)))
    }

    /// Decodes an artifact from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArtifactError> {
        decode_from_slice(bytes, standard())
            .map(|(artifact, _)| artifact) // bincode 2 returns a tuple (data, bytes_read)
            .map_err(|e| ArtifactError::Generic(format!("Deserialization failed: {}", e)))
    }

    /// Saves the artifact to a file.
    pub fn save(&self, path: &str) -> Result<(), ArtifactError> {
        let bytes = self.to_bytes()?;
        let mut file = fs::File::create(path).map_err(|e| {
            ArtifactError::Generic(format!("Could not create file '{}': {}", path, e))
        })?;
        file.write_all(&bytes).map_err(|e| {
            ArtifactError::Generic(format!("Could not write to file '{}': {}", path, e))
        })?;
        Ok(())
    }

    /// Loads an artifact from a file.
    pub fn from_file(path: &str) -> Result<Self, ArtifactError> {
        let mut file = fs::File::open(path)
            .map_err(|e| ArtifactError::Generic(format!("Could not open file '{}': {}", path, e)))?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| {
            ArtifactError::Generic(format!("Could not read from file '{}': {}", path, e))
        })?;
        Self::from_bytes(&bytes)
    }
}
