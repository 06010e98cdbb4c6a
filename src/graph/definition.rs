use crate::error::GraphLoadError;
use serde::{Deserialize, Serialize};
use std::fs;

/// The complete, canonical pipeline graph, ready for code generation.
/// This is the target structure for any custom editor format conversion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl Graph {
    pub fn new(nodes: Vec<Node>, links: Vec<Link>) -> Self {
        Self { nodes, links }
    }

    /// Parses a graph from its canonical JSON representation.
    pub fn from_json(json: &str) -> Result<Self, GraphLoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a graph from a JSON file on disk.
    pub fn from_file(path: &str) -> Result<Self, GraphLoadError> {
        let content = fs::read_to_string(path).map_err(|source| GraphLoadError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&content)
    }
}

/// A single configurable processing step in the pipeline.
///
/// `name` doubles as the variable name in the emitted program, so callers
/// are expected to keep it a valid identifier and unique within the graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub code: Vec<CodeDescriptor>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_code(mut self, descriptor: CodeDescriptor) -> Self {
        self.code.push(descriptor);
        self
    }

    /// Returns the translation descriptor for the given target language, if any.
    pub fn descriptor(&self, language: &str) -> Option<&CodeDescriptor> {
        self.code.iter().find(|c| c.language == language)
    }

    /// Whether the node fans out over its iterable parameters.
    ///
    /// Derived from the parameter list on every call; there is no stored flag.
    pub fn is_fan_out(&self) -> bool {
        self.parameters.iter().any(Parameter::is_iterable_field)
    }
}

/// A named, valued configuration slot on a node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    /// Source text spliced verbatim into the program.
    #[serde(default)]
    pub value: String,
    /// `true` when the value is set on this node rather than received over a link.
    #[serde(default)]
    pub input: bool,
    #[serde(default, alias = "isIterable")]
    pub is_iterable: bool,
}

impl Parameter {
    /// A statically assigned input parameter.
    pub fn input(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            input: true,
            is_iterable: false,
        }
    }

    /// An input parameter whose value is iterated over.
    pub fn iterable(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            is_iterable: true,
            ..Self::input(name, value)
        }
    }

    /// A parameter fed over a link (or describing an output slot).
    pub fn output(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            input: false,
            is_iterable: false,
        }
    }

    /// Only input parameters with a value ever reach the emitted program.
    pub fn is_eligible(&self) -> bool {
        self.input && !self.value.is_empty()
    }

    pub fn is_iterable_field(&self) -> bool {
        self.is_iterable && self.is_eligible()
    }
}

/// Describes how a node translates into one target language.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodeDescriptor {
    pub language: String,
    /// Human-readable description, emitted as a comment above the declaration.
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub argument: Option<CodeArgument>,
}

impl CodeDescriptor {
    pub fn new(language: impl Into<String>, argument: CodeArgument) -> Self {
        Self {
            language: language.into(),
            comment: None,
            argument: Some(argument),
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// The operation this descriptor instantiates.
    pub fn operation(&self) -> Option<&str> {
        self.argument.as_ref().map(|a| a.name.as_str())
    }

    pub fn import(&self) -> Option<&str> {
        self.argument
            .as_ref()
            .and_then(|a| a.import.as_deref())
            .filter(|import| !import.is_empty())
    }
}

/// The operation/interface a node instantiates and where it is imported from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodeArgument {
    pub name: String,
    #[serde(default)]
    pub import: Option<String>,
}

impl CodeArgument {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            import: None,
        }
    }

    pub fn with_import(mut self, import: impl Into<String>) -> Self {
        self.import = Some(import.into());
        self
    }
}

/// A named attachment point on a node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Port {
    pub name: String,
    /// Name of the owning node. `None` when the editor lost track of it.
    #[serde(default)]
    pub node: Option<String>,
}

impl Port {
    pub fn new(node: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            node: Some(node.into()),
        }
    }

    /// A port whose owning node is missing.
    pub fn detached(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            node: None,
        }
    }
}

/// A directed connection from one node's output port to another node's input port.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Link {
    #[serde(default, alias = "portFrom")]
    pub port_from: Option<Port>,
    #[serde(default, alias = "portTo")]
    pub port_to: Option<Port>,
}

impl Link {
    pub fn new(port_from: Port, port_to: Port) -> Self {
        Self {
            port_from: Some(port_from),
            port_to: Some(port_to),
        }
    }
}
