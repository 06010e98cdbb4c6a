use crate::graph::{Node, Parameter};
use itertools::Itertools;

/// Names of the parameters a node fans out over, in declaration order.
///
/// Only eligible parameters (input, non-empty value) count, so the result
/// always matches the entries of the node's `.iterables` line.
pub fn iterable_fields(node: &Node) -> Vec<&str> {
    node.parameters
        .iter()
        .filter(|p| p.is_iterable_field())
        .map(|p| p.name.as_str())
        .collect()
}

/// Renders the static `.inputs` assignments followed by the `.iterables` line.
pub fn parameter_lines(node: &Node) -> Vec<String> {
    parameter_lines_where(node, |_| true)
}

/// Same as [`parameter_lines`], restricted to parameters accepted by `keep`.
pub(crate) fn parameter_lines_where<F>(node: &Node, keep: F) -> Vec<String>
where
    F: Fn(&Parameter) -> bool,
{
    let (iterables, scalars): (Vec<&Parameter>, Vec<&Parameter>) = node
        .parameters
        .iter()
        .filter(|p| p.is_eligible() && keep(*p))
        .partition(|p| p.is_iterable);

    let mut lines: Vec<String> = scalars
        .iter()
        .map(|p| format!("{}.inputs.{} = {}", node.name, p.name, p.value))
        .collect();

    if !iterables.is_empty() {
        let pairs = iterables
            .iter()
            .map(|p| format!("('{}', {})", p.name, p.value))
            .join(",");
        lines.push(format!("{}.iterables = [{}]", node.name, pairs));
    }
    lines
}

/// Renders names as a Python list of string literals: `['a', 'b']`.
pub(crate) fn quoted_list<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    format!(
        "[{}]",
        names.into_iter().map(|n| format!("'{}'", n)).join(", ")
    )
}
