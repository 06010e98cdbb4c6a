//! The exception table.
//!
//! Most operations are declared with the generic `pe.Node(interface = ...)`
//! template. A few interfaces in the target API have to be constructed with
//! arguments, which that template cannot express; each of them gets its own
//! variant here. The set is closed: adding an exception means adding a
//! variant, and `match` keeps every dispatch exhaustive.

use super::params::{iterable_fields, parameter_lines, parameter_lines_where, quoted_list};
use crate::graph::{CodeDescriptor, Node, Parameter};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Inputs of `io.SelectFiles` that are real inputs rather than template keys.
const SELECT_FILES_INPUTS: [&str; 4] = [
    "base_directory",
    "sort_filelist",
    "raise_on_empty",
    "force_lists",
];

/// How a node's declaration is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EmissionStrategy {
    /// Comment, `pe.Node`/`pe.MapNode` declaration, then parameter lines.
    Generic,
    /// `io.SelectFiles`, which takes its output templates in the constructor.
    SelectFiles,
    /// `utility.IdentityInterface`, which needs its field list up front.
    IdentityInterface,
    /// `utility.Function`, which wraps a Python callable.
    Function,
}

impl EmissionStrategy {
    /// Operations with a dedicated strategy, by their name in the target API.
    pub const EXCEPTIONS: [(&'static str, EmissionStrategy); 3] = [
        ("io.SelectFiles", EmissionStrategy::SelectFiles),
        ("utility.IdentityInterface", EmissionStrategy::IdentityInterface),
        ("utility.Function", EmissionStrategy::Function),
    ];

    /// Looks an operation up in the exception table, falling back to `Generic`.
    pub fn for_operation(operation: &str) -> Self {
        Self::EXCEPTIONS
            .iter()
            .find(|(name, _)| *name == operation)
            .map(|(_, strategy)| *strategy)
            .unwrap_or(EmissionStrategy::Generic)
    }

    /// Emits the declaration lines for `node` using this strategy.
    pub fn emit(self, node: &Node, descriptor: &CodeDescriptor, operation: &str) -> Vec<String> {
        match self {
            EmissionStrategy::Generic => emit_generic(node, descriptor, operation),
            EmissionStrategy::SelectFiles => emit_select_files(node),
            EmissionStrategy::IdentityInterface => emit_identity_interface(node),
            EmissionStrategy::Function => emit_function(node),
        }
    }
}

fn emit_generic(node: &Node, descriptor: &CodeDescriptor, operation: &str) -> Vec<String> {
    // A comment spanning several lines would break out of the `#` prefix.
    let comment = descriptor
        .comment
        .as_deref()
        .unwrap_or(operation)
        .lines()
        .join(" ");

    let fields = iterable_fields(node);
    let declaration = if fields.is_empty() {
        format!(
            "{} = pe.Node(interface = {}, name='{}')",
            node.name, operation, node.name
        )
    } else {
        format!(
            "{} = pe.MapNode(interface = {}, name='{}', iterfield = {})",
            node.name,
            operation,
            node.name,
            quoted_list(fields)
        )
    };

    let mut lines = vec![format!("#{}", comment), declaration];
    lines.extend(parameter_lines(node));
    lines
}

fn is_select_files_input(parameter: &Parameter) -> bool {
    SELECT_FILES_INPUTS.contains(&parameter.name.as_str())
}

fn emit_select_files(node: &Node) -> Vec<String> {
    let templates = node
        .parameters
        .iter()
        .filter(|p| p.is_eligible() && !p.is_iterable && !is_select_files_input(p))
        .map(|p| format!("'{}':{}", p.name, p.value))
        .join(",");

    let mut lines = vec![
        "#Flexibly collect data from disk to feed into workflows.".to_string(),
        format!(
            "{} = pe.Node(io.SelectFiles(templates={{{}}}), name='{}')",
            node.name, templates, node.name
        ),
    ];
    lines.extend(parameter_lines_where(node, |p| {
        p.is_iterable || is_select_files_input(p)
    }));
    lines
}

fn emit_identity_interface(node: &Node) -> Vec<String> {
    let fields = quoted_list(
        node.parameters
            .iter()
            .filter(|p| p.is_eligible())
            .map(|p| p.name.as_str()),
    );

    let mut lines = vec![
        "#Basic interface class generates identity mappings".to_string(),
        format!(
            "{} = pe.Node(utility.IdentityInterface(fields={}), name='{}')",
            node.name, fields, node.name
        ),
    ];
    lines.extend(parameter_lines(node));
    lines
}

fn is_function_setting(parameter: &Parameter) -> bool {
    matches!(parameter.name.as_str(), "function" | "output_names")
}

fn setting_value<'a>(node: &'a Node, name: &str) -> Option<&'a str> {
    node.parameters
        .iter()
        .find(|p| p.name == name && p.is_eligible())
        .map(|p| p.value.as_str())
}

fn emit_function(node: &Node) -> Vec<String> {
    let input_names = quoted_list(
        node.parameters
            .iter()
            .filter(|p| p.is_eligible() && !is_function_setting(p))
            .map(|p| p.name.as_str()),
    );
    let output_names = setting_value(node, "output_names").unwrap_or("[]");
    let function = setting_value(node, "function").unwrap_or("None");

    let mut lines = vec![
        "#Run a Python function as a node".to_string(),
        format!(
            "{} = pe.Node(utility.Function(input_names={}, output_names={}, function={}), name='{}')",
            node.name, input_names, output_names, function, node.name
        ),
    ];
    lines.extend(parameter_lines_where(node, |p| !is_function_setting(p)));
    lines
}
