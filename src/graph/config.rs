use crate::graph::definition::NodeType;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fallback workload complexity when the editor supplies none.
pub const DEFAULT_COMPLEXITY: f64 = 0.0;
/// Fallback estimated output size (in arbitrary data units) per node.
pub const DEFAULT_DATA_SIZE: f64 = 10.0;

/// Typed configuration attached to a node.
///
/// The editor hands nodes an opaque key/value map; `NodeConfig` is the typed
/// rendition of that map. The two numeric tuning knobs every node shares live
/// at the top level, the per-type fields live in [`NodeParams`], one variant
/// per [`NodeType`]. Fields the user may legitimately leave blank in the
/// editor are `Option`s; the `required-fields` validation rule reports the
/// ones that must be filled in before the workflow can run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeConfig {
    /// Workload complexity knob, scales estimated cost. Non-negative.
    pub complexity: f64,
    /// Estimated size of the data this node emits per run. Non-negative.
    pub estimated_data_size: f64,
    /// Per-type parameters.
    pub params: NodeParams,
}

/// Per-type node parameters, one variant per node type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NodeParams {
    Llm {
        model: Option<String>,
        prompt: Option<String>,
        temperature: Option<f64>,
        max_tokens: Option<u32>,
    },
    Notebook {
        notebook_path: Option<String>,
        kernel: Option<String>,
        timeout_s: Option<u32>,
    },
    Data {
        data_type: Option<String>,
        source: Option<String>,
        format: Option<String>,
    },
    Input {
        description: Option<String>,
    },
    Output {
        description: Option<String>,
    },
    Default,
}

impl NodeParams {
    /// Empty parameter set for a node type.
    pub fn empty(node_type: NodeType) -> Self {
        match node_type {
            NodeType::Llm => NodeParams::Llm {
                model: None,
                prompt: None,
                temperature: None,
                max_tokens: None,
            },
            NodeType::Notebook => NodeParams::Notebook {
                notebook_path: None,
                kernel: None,
                timeout_s: None,
            },
            NodeType::Data => NodeParams::Data {
                data_type: None,
                source: None,
                format: None,
            },
            NodeType::Input => NodeParams::Input { description: None },
            NodeType::Output => NodeParams::Output { description: None },
            NodeType::Default => NodeParams::Default,
        }
    }

    /// Names of required fields that are absent, in declaration order.
    ///
    /// Field names use the editor's camelCase spelling since they are shown
    /// back to the user in validation messages.
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        match self {
            NodeParams::Llm { model, prompt, .. } => {
                let mut missing = Vec::new();
                if model.is_none() {
                    missing.push("model");
                }
                if prompt.is_none() {
                    missing.push("prompt");
                }
                missing
            }
            NodeParams::Notebook { notebook_path, .. } => {
                if notebook_path.is_none() {
                    vec!["notebookPath"]
                } else {
                    Vec::new()
                }
            }
            NodeParams::Data {
                data_type, source, ..
            } => {
                let mut missing = Vec::new();
                if data_type.is_none() {
                    missing.push("dataType");
                }
                if source.is_none() {
                    missing.push("source");
                }
                missing
            }
            NodeParams::Input { .. } | NodeParams::Output { .. } | NodeParams::Default => {
                Vec::new()
            }
        }
    }
}

impl NodeConfig {
    /// Empty configuration with documented defaults for a node type.
    pub fn empty(node_type: NodeType) -> Self {
        Self {
            complexity: DEFAULT_COMPLEXITY,
            estimated_data_size: DEFAULT_DATA_SIZE,
            params: NodeParams::empty(node_type),
        }
    }

    /// Builds a typed config from the editor's opaque key/value map.
    ///
    /// Unknown keys are ignored. Wrong-typed, missing, or non-finite values
    /// fall back to their documented defaults; this function never fails.
    pub fn from_map(node_type: NodeType, map: &Map<String, Value>) -> Self {
        let complexity = read_non_negative(map, "complexity").unwrap_or(DEFAULT_COMPLEXITY);
        let estimated_data_size =
            read_non_negative(map, "estimatedDataSize").unwrap_or(DEFAULT_DATA_SIZE);

        let params = match node_type {
            NodeType::Llm => NodeParams::Llm {
                model: read_string(map, "model"),
                prompt: read_string(map, "prompt"),
                temperature: read_finite(map, "temperature"),
                max_tokens: read_u32(map, "maxTokens"),
            },
            NodeType::Notebook => NodeParams::Notebook {
                notebook_path: read_string(map, "notebookPath"),
                kernel: read_string(map, "kernel"),
                timeout_s: read_u32(map, "timeoutS"),
            },
            NodeType::Data => NodeParams::Data {
                data_type: read_string(map, "dataType"),
                source: read_string(map, "source"),
                format: read_string(map, "format"),
            },
            NodeType::Input => NodeParams::Input {
                description: read_string(map, "description"),
            },
            NodeType::Output => NodeParams::Output {
                description: read_string(map, "description"),
            },
            NodeType::Default => NodeParams::Default,
        };

        Self {
            complexity,
            estimated_data_size,
            params,
        }
    }
}

fn read_string(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn read_finite(map: &Map<String, Value>, key: &str) -> Option<f64> {
    map.get(key).and_then(Value::as_f64).filter(|v| v.is_finite())
}

fn read_non_negative(map: &Map<String, Value>, key: &str) -> Option<f64> {
    read_finite(map, key).filter(|v| *v >= 0.0)
}

fn read_u32(map: &Map<String, Value>, key: &str) -> Option<u32> {
    map.get(key)
        .and_then(Value::as_u64)
        .and_then(|v| u32::try_from(v).ok())
}
