use thiserror::Error;

/// The specific way a link failed to be renderable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinkDefect {
    #[error("link has no source port")]
    MissingSourcePort,

    #[error("link has no target port")]
    MissingTargetPort,

    #[error("source port '{0}' is not attached to a node")]
    MissingSourceNode(String),

    #[error("target port '{0}' is not attached to a node")]
    MissingTargetNode(String),

    #[error("port refers to node '{0}', which is not part of the graph")]
    UnknownNode(String),
}

/// Errors that can occur while generating a workflow program.
///
/// Lenient generation never produces these; they only surface when the
/// generator runs with `LinkPolicy::Strict`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Link #{index} cannot be rendered: {defect}")]
    MalformedLink { index: usize, defect: LinkDefect },
}

/// Errors that can occur while loading a graph or configuration from JSON.
#[derive(Error, Debug)]
pub enum GraphLoadError {
    #[error("Failed to parse graph JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur when converting a custom editor format into a pipewright `Graph`.
#[derive(Error, Debug, Clone)]
pub enum GraphConversionError {
    #[error("Duplicate node id '{0}' in editor data")]
    DuplicateNodeId(String),
}
