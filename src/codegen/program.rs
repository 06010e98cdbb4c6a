use crate::config::{GeneratorConfig, LineEnding};
use crate::graph::Node;
use itertools::Itertools;

const PREAMBLE: [&str; 6] = [
    "#This is a Nipype generator. Warning, here be dragons.",
    "#!/usr/bin/env python",
    "",
    "import sys",
    "import nipype",
    "import nipype.pipeline as pe",
];

/// Every node's import statement for the target language, deduplicated in first-seen order.
pub fn collect_imports<'a>(nodes: &'a [Node], language: &str) -> Vec<&'a str> {
    nodes
        .iter()
        .filter_map(|node| node.descriptor(language))
        .filter_map(|descriptor| descriptor.import())
        .unique()
        .collect()
}

/// Fixed header, node imports, and the blank line that closes the block.
pub fn preamble(imports: &[&str]) -> Vec<String> {
    let mut lines: Vec<String> = PREAMBLE.iter().map(|line| line.to_string()).collect();
    lines.extend(imports.iter().map(|import| import.to_string()));
    lines.push(String::new());
    lines
}

/// Comment and instantiation that open the connection section.
pub fn workflow_header(config: &GeneratorConfig) -> Vec<String> {
    vec![
        "#Create a workflow to connect all those nodes".to_string(),
        format!(
            "{} = nipype.Workflow('{}')",
            config.workflow_var, config.workflow_name
        ),
    ]
}

/// Run block: execution strategy, graph export, and the run call.
pub fn postamble(config: &GeneratorConfig) -> Vec<String> {
    let wf = &config.workflow_var;
    vec![
        "#Run the workflow".to_string(),
        format!(
            "plugin = '{}' #adjust your desired plugin here",
            config.plugin
        ),
        format!(
            "plugin_args = {{'n_procs': {}}} #adjust to your number of cores",
            config.n_procs
        ),
        format!(
            "{}.write_graph(graph2use='flat', format='png', simple_form=False)",
            wf
        ),
        format!("{}.run(plugin=plugin, plugin_args=plugin_args)", wf),
    ]
}

/// Joins lines into program text, terminating every line with `ending`.
///
/// Newlines embedded in a line (from a multi-line parameter value) are
/// rewritten to the same terminator, so the output never mixes endings.
pub fn render(lines: &[String], ending: LineEnding) -> String {
    let newline = ending.as_str();
    let mut out = String::with_capacity(lines.iter().map(|l| l.len() + newline.len()).sum());
    for line in lines {
        for piece in line.split('\n') {
            out.push_str(piece.strip_suffix('\r').unwrap_or(piece));
            out.push_str(newline);
        }
    }
    out
}
