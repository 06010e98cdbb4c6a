use ahash::AHashMap;
use clap::{Parser, ValueEnum};
use pipewright::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Instant;

// --- JSON Deserialization Structs (Editor Format Specific) ---
// The editor saves links as references to node ids; these structs are only
// used here to resolve them into the canonical graph.

#[derive(Deserialize)]
struct RawDocument {
    nodes: Vec<RawNode>,
    #[serde(default)]
    links: Vec<RawLink>,
}

#[derive(Deserialize)]
struct RawNode {
    id: String,
    name: String,
    #[serde(default)]
    parameters: Vec<Parameter>,
    #[serde(default)]
    code: Vec<CodeDescriptor>,
}

#[derive(Deserialize)]
struct RawLink {
    #[serde(default, alias = "portFrom")]
    port_from: Option<RawPort>,
    #[serde(default, alias = "portTo")]
    port_to: Option<RawPort>,
}

#[derive(Deserialize)]
struct RawPort {
    name: String,
    #[serde(default, alias = "nodeId")]
    node_id: Option<String>,
}

/// CLI-side mirror of `LineEnding` for clap.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum LineEndingCli {
    Lf,
    Crlf,
}

// --- Converter Implementation ---

impl IntoGraph for RawDocument {
    fn into_graph(self) -> std::result::Result<Graph, GraphConversionError> {
        let mut names_by_id: AHashMap<String, String> = AHashMap::new();
        for node in &self.nodes {
            if names_by_id
                .insert(node.id.clone(), node.name.clone())
                .is_some()
            {
                return Err(GraphConversionError::DuplicateNodeId(node.id.clone()));
            }
        }

        // A port whose node id does not resolve keeps `node: None`, which the
        // generator treats as a malformed link.
        let resolve = |port: RawPort| Port {
            node: port
                .node_id
                .and_then(|id| names_by_id.get(&id).cloned()),
            name: port.name,
        };

        let links = self
            .links
            .into_iter()
            .map(|raw| Link {
                port_from: raw.port_from.map(resolve),
                port_to: raw.port_to.map(resolve),
            })
            .collect();

        let nodes = self
            .nodes
            .into_iter()
            .map(|raw| Node {
                name: raw.name,
                parameters: raw.parameters,
                code: raw.code,
            })
            .collect();

        Ok(Graph { nodes, links })
    }
}

/// Generates a Nipype workflow script from a pipeline editor document
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the editor's graph JSON file
    graph_path: String,

    /// Directory the generated files are written under
    #[arg(short, long, default_value = ".")]
    output_dir: String,

    /// Optional generator configuration JSON file
    #[arg(short, long)]
    config: Option<String>,

    /// Fail on malformed links instead of dropping them
    #[arg(long)]
    strict: bool,

    /// Override the workflow name
    #[arg(long)]
    workflow_name: Option<String>,

    /// Override the line ending of the generated program
    #[arg(long, value_enum)]
    line_ending: Option<LineEndingCli>,

    /// Print the program to stdout instead of writing files
    #[arg(long)]
    stdout: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let total_start = Instant::now();

    // --- 1. Configuration ---
    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::from_file(path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to load config '{}': {}", path, e))
        }),
        None => GeneratorConfig::default(),
    };
    if cli.strict {
        config.link_policy = LinkPolicy::Strict;
    }
    if let Some(name) = cli.workflow_name {
        config.workflow_name = name;
    }
    if let Some(ending) = cli.line_ending {
        config.line_ending = match ending {
            LineEndingCli::Lf => LineEnding::Lf,
            LineEndingCli::Crlf => LineEnding::CrLf,
        };
    }

    // --- 2. Loading and Conversion ---
    let json = fs::read_to_string(&cli.graph_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read graph file '{}': {}",
            cli.graph_path, e
        ))
    });
    let document: RawDocument = serde_json::from_str(&json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse graph JSON: {}", e)));
    let graph = document
        .into_graph()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert graph: {}", e)));
    log::info!(
        "Loaded {} nodes and {} links from '{}'",
        graph.nodes.len(),
        graph.links.len(),
        cli.graph_path
    );

    // --- 3. Generation ---
    let files = Generator::builder(graph)
        .with_config(config)
        .build()
        .generate_files()
        .unwrap_or_else(|e| exit_with_error(&format!("Code generation failed: {}", e)));

    // --- 4. Output ---
    for (path, code) in files.iter() {
        if cli.stdout {
            print!("{}", code);
            continue;
        }
        let target = Path::new(&cli.output_dir).join(path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).unwrap_or_else(|e| {
                exit_with_error(&format!(
                    "Failed to create directory '{}': {}",
                    parent.display(),
                    e
                ))
            });
        }
        fs::write(&target, code).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to write '{}': {}", target.display(), e))
        });
        println!("Wrote {}", target.display());
    }

    log::info!("Finished in {:?}", total_start.elapsed());
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
