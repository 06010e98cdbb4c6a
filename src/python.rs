use crate::codegen::Generator;
use crate::config::LinkPolicy;
use crate::graph::Graph;
use pyo3::prelude::*;
use std::collections::HashMap;

/// Generates a Nipype workflow script from a pipeline graph.
///
/// Args:
///     graph_json (str): The graph in canonical JSON form, with a `nodes`
///         list and a `links` list.
///     strict (bool): When true, a link with a missing port or node raises
///         instead of being dropped from the output.
///
/// Returns:
///     dict: A mapping from the relative output path (str) to the generated
///         program text (str).
///
/// Raises:
///     ValueError: If the JSON cannot be parsed, or if `strict` is set and a
///         link is malformed.
#[pyfunction]
#[pyo3(signature = (graph_json, strict = false))]
fn generate(graph_json: &str, strict: bool) -> PyResult<HashMap<String, String>> {
    let graph = Graph::from_json(graph_json)
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;

    let policy = if strict {
        LinkPolicy::Strict
    } else {
        LinkPolicy::Lenient
    };
    let files = Generator::builder(graph)
        .with_link_policy(policy)
        .build()
        .generate_files()
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;

    Ok(files.into_inner().into_iter().collect())
}

/// Pipeline graph to Nipype code generation.
///
/// This module provides Python bindings to the pipewright Rust library, so
/// editor backends written in Python can render workflow scripts without
/// shelling out.
#[pymodule]
fn pipewright(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(generate, m)?)?;
    Ok(())
}
