use crate::error::LinkDefect;
use crate::graph::Link;
use ahash::AHashSet;

/// The four names a `connect` call needs, borrowed from a well-formed link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoints<'a> {
    pub source: &'a str,
    pub source_port: &'a str,
    pub target: &'a str,
    pub target_port: &'a str,
}

impl Endpoints<'_> {
    /// Renders the `connect` statement on the given workflow variable.
    pub fn render(&self, workflow_var: &str) -> String {
        format!(
            "{}.connect({}, \"{}\", {}, \"{}\")",
            workflow_var, self.source, self.source_port, self.target, self.target_port
        )
    }
}

/// Extracts the endpoints of a link, or reports the first missing piece.
pub fn endpoints(link: &Link) -> Result<Endpoints<'_>, LinkDefect> {
    let from = link
        .port_from
        .as_ref()
        .ok_or(LinkDefect::MissingSourcePort)?;
    let to = link.port_to.as_ref().ok_or(LinkDefect::MissingTargetPort)?;
    let source = from
        .node
        .as_deref()
        .ok_or_else(|| LinkDefect::MissingSourceNode(from.name.clone()))?;
    let target = to
        .node
        .as_deref()
        .ok_or_else(|| LinkDefect::MissingTargetNode(to.name.clone()))?;

    Ok(Endpoints {
        source,
        source_port: &from.name,
        target,
        target_port: &to.name,
    })
}

/// Checks a link against the nodes actually present in the graph.
///
/// Stricter than [`endpoints`]: a port naming a node that is not in
/// `known_nodes` is reported as `LinkDefect::UnknownNode`.
pub fn inspect_link(link: &Link, known_nodes: &AHashSet<&str>) -> Result<(), LinkDefect> {
    let endpoints = endpoints(link)?;
    for node in [endpoints.source, endpoints.target] {
        if !known_nodes.contains(node) {
            return Err(LinkDefect::UnknownNode(node.to_string()));
        }
    }
    Ok(())
}
