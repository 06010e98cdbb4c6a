//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the pipewright crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use pipewright::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let graph = Graph::from_file("path/to/graph.json")?;
//! let files = Generator::builder(graph).strict().build().generate_files()?;
//!
//! for (path, code) in files.iter() {
//!     std::fs::write(path, code)?;
//! }
//! # Ok(())
//! # }
//! ```

// Generation
pub use crate::codegen::{
    EmissionStrategy, GeneratedFiles, Generator, GeneratorBuilder, NodeEmitter, write_code,
    write_files,
};
pub use crate::config::{GeneratorConfig, LineEnding, LinkPolicy};

// Graph model
pub use crate::graph::{CodeArgument, CodeDescriptor, Graph, IntoGraph, Link, Node, Parameter, Port};

// Error types
pub use crate::error::{GenerateError, GraphConversionError, GraphLoadError, LinkDefect};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
