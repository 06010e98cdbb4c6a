use crate::config::{GeneratorConfig, LineEnding, LinkPolicy};
use crate::error::GenerateError;
use crate::graph::{Graph, Link, Node};
use ahash::{AHashMap, AHashSet};

pub mod link;
pub mod node;
pub mod params;
pub mod program;
mod strategy;

pub use node::NodeEmitter;
pub use strategy::EmissionStrategy;

/// Generated source files, keyed by their relative output path.
///
/// This is the hand-off to whatever writes files to disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedFiles {
    files: AHashMap<String, String>,
}

impl GeneratedFiles {
    pub fn get(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files.iter().map(|(p, c)| (p.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn into_inner(self) -> AHashMap<String, String> {
        self.files
    }
}

/// Turns a pipeline graph into a Nipype workflow script.
pub struct Generator {
    graph: Graph,
    config: GeneratorConfig,
}

pub struct GeneratorBuilder {
    graph: Graph,
    config: GeneratorConfig,
}

impl GeneratorBuilder {
    pub fn new(graph: Graph) -> Self {
        Self {
            graph,
            config: GeneratorConfig::default(),
        }
    }
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }
    pub fn with_language(mut self, language: &str) -> Self {
        self.config.language = language.to_string();
        self
    }
    pub fn with_workflow_name(mut self, name: &str) -> Self {
        self.config.workflow_name = name.to_string();
        self
    }
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.config.line_ending = line_ending;
        self
    }
    pub fn with_link_policy(mut self, policy: LinkPolicy) -> Self {
        self.config.link_policy = policy;
        self
    }
    /// Shorthand for `with_link_policy(LinkPolicy::Strict)`.
    pub fn strict(self) -> Self {
        self.with_link_policy(LinkPolicy::Strict)
    }
    /// Routes a custom operation name to one of the built-in strategies.
    pub fn with_strategy_alias(mut self, operation: &str, strategy: EmissionStrategy) -> Self {
        self.config
            .strategy_aliases
            .insert(operation.to_string(), strategy);
        self
    }
    pub fn build(self) -> Generator {
        Generator {
            graph: self.graph,
            config: self.config,
        }
    }
}

impl Generator {
    pub fn builder(graph: Graph) -> GeneratorBuilder {
        GeneratorBuilder::new(graph)
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates the complete program text.
    ///
    /// Sections are emitted in a fixed order: preamble with imports, node
    /// declarations, workflow connections, run block. With the default
    /// `LinkPolicy::Lenient` this never fails.
    pub fn generate(&self) -> Result<String, GenerateError> {
        let config = &self.config;
        let imports = program::collect_imports(&self.graph.nodes, &config.language);
        let mut lines = program::preamble(&imports);

        let emitter = NodeEmitter::new(config);
        let mut emitted_nodes = 0;
        for node in &self.graph.nodes {
            let block = emitter.emit(node);
            if block.is_empty() {
                continue;
            }
            lines.extend(block);
            lines.push(String::new());
            emitted_nodes += 1;
        }

        lines.extend(program::workflow_header(config));
        let link_lines = self.link_lines()?;
        let emitted_links = link_lines.len();
        lines.extend(link_lines);
        lines.push(String::new());
        lines.extend(program::postamble(config));

        log::info!(
            "Generated workflow '{}': {}/{} nodes, {}/{} links, {} imports",
            config.workflow_name,
            emitted_nodes,
            self.graph.nodes.len(),
            emitted_links,
            self.graph.links.len(),
            imports.len()
        );
        Ok(program::render(&lines, config.line_ending))
    }

    /// Generates the program and associates it with the configured output path.
    pub fn generate_files(&self) -> Result<GeneratedFiles, GenerateError> {
        let code = self.generate()?;
        let mut files = AHashMap::new();
        files.insert(self.config.output_path.clone(), code);
        Ok(GeneratedFiles { files })
    }

    fn link_lines(&self) -> Result<Vec<String>, GenerateError> {
        let known_nodes: AHashSet<&str> =
            self.graph.nodes.iter().map(|n| n.name.as_str()).collect();

        let mut lines = Vec::with_capacity(self.graph.links.len());
        for (index, link) in self.graph.links.iter().enumerate() {
            if self.config.link_policy == LinkPolicy::Strict {
                link::inspect_link(link, &known_nodes)
                    .map_err(|defect| GenerateError::MalformedLink { index, defect })?;
            }
            match link::endpoints(link) {
                Ok(endpoints) => lines.push(endpoints.render(&self.config.workflow_var)),
                Err(defect) => log::warn!("Dropping link #{}: {}", index, defect),
            }
        }
        Ok(lines)
    }
}

/// Generates program text for the given nodes and links with the default configuration.
pub fn write_code(nodes: &[Node], links: &[Link]) -> String {
    let graph = Graph::new(nodes.to_vec(), links.to_vec());
    // The default policy is lenient, which cannot fail.
    Generator::builder(graph)
        .with_link_policy(LinkPolicy::Lenient)
        .build()
        .generate()
        .unwrap_or_default()
}

/// Like [`write_code`], but returns the output-path mapping handed to the file writer.
pub fn write_files(nodes: &[Node], links: &[Link]) -> GeneratedFiles {
    let graph = Graph::new(nodes.to_vec(), links.to_vec());
    Generator::builder(graph)
        .with_link_policy(LinkPolicy::Lenient)
        .build()
        .generate_files()
        .unwrap_or_default()
}
