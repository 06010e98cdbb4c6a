use crate::codegen::EmissionStrategy;
use crate::error::GraphLoadError;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fs;

/// Line terminator applied to every line of the generated program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// What to do with a link that cannot be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkPolicy {
    /// Drop the link from the output and keep going.
    #[default]
    Lenient,
    /// Abort generation with a `GenerateError::MalformedLink`.
    Strict,
}

/// Settings for a single generation run.
///
/// Every field has a default, so a partial JSON file only needs to name
/// what it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Target language tag used to select each node's translation descriptor.
    pub language: String,
    /// Python variable holding the workflow object.
    pub workflow_var: String,
    /// Name passed to `nipype.Workflow(...)`.
    pub workflow_name: String,
    /// Execution plugin selected in the run block.
    pub plugin: String,
    pub n_procs: u32,
    /// Relative path the program is associated with in `GeneratedFiles`.
    pub output_path: String,
    pub line_ending: LineEnding,
    pub link_policy: LinkPolicy,
    /// Extra operation names routed to one of the built-in strategies.
    pub strategy_aliases: AHashMap<String, EmissionStrategy>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            language: "Nipype".to_string(),
            workflow_var: "analysisflow".to_string(),
            workflow_name: "MyWorkflow".to_string(),
            plugin: "MultiProc".to_string(),
            n_procs: 1,
            output_path: "GIRAFFE/code/workflow.py".to_string(),
            line_ending: LineEnding::Lf,
            link_policy: LinkPolicy::Lenient,
            strategy_aliases: AHashMap::new(),
        }
    }
}

impl GeneratorConfig {
    pub fn from_json(json: &str) -> Result<Self, GraphLoadError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &str) -> Result<Self, GraphLoadError> {
        let content = fs::read_to_string(path).map_err(|source| GraphLoadError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&content)
    }
}
