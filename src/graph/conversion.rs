use super::definition::Graph;
use crate::error::GraphConversionError;

/// A trait for custom editor models that can be converted into a pipewright `Graph`.
///
/// Graph editors rarely store links the way the generator wants them: ports
/// usually point at nodes by id, while the generator needs the node *name*
/// that becomes a variable in the emitted program. Implementing this trait on
/// your own structs is where that resolution happens.
///
/// # Example
///
/// ```rust,no_run
/// use pipewright::prelude::*;
/// use pipewright::error::GraphConversionError;
///
/// struct MyEdge { from: (String, String), to: (String, String) }
/// struct MyDocument { names: Vec<String>, edges: Vec<MyEdge> }
///
/// impl IntoGraph for MyDocument {
///     fn into_graph(self) -> std::result::Result<Graph, GraphConversionError> {
///         let nodes = self.names.into_iter().map(Node::new).collect();
///         let links = self
///             .edges
///             .into_iter()
///             .map(|e| Link::new(Port::new(e.from.0, e.from.1), Port::new(e.to.0, e.to.1)))
///             .collect();
///         Ok(Graph { nodes, links })
///     }
/// }
/// ```
pub trait IntoGraph {
    /// Consumes the object and converts it into a generator-ready graph.
    fn into_graph(self) -> Result<Graph, GraphConversionError>;
}

impl IntoGraph for Graph {
    fn into_graph(self) -> Result<Graph, GraphConversionError> {
        Ok(self)
    }
}
