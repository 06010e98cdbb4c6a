//! # Pipewright - Pipeline Graph to Nipype Code Generator
//!
//! **Pipewright** turns the node graph drawn in a visual pipeline editor into a
//! Python script that builds and runs the same pipeline with
//! [Nipype](https://nipype.readthedocs.io). It is a small compiler backend:
//! graph in, source text out.
//!
//! ## Core Workflow
//!
//! 1.  **Load Your Graph**: Parse the editor's saved document into your own structs, or
//!     directly into [`graph::Graph`] if it already uses the canonical shape.
//! 2.  **Convert**: Implement [`graph::IntoGraph`] to resolve your node references into
//!     the names the generated program will use.
//! 3.  **Generate**: Build a [`codegen::Generator`] and call `generate` (program text) or
//!     `generate_files` (output path to text mapping for the file writer).
//!
//! Generation is deterministic and best-effort: nodes without a Nipype
//! descriptor and malformed links are left out rather than failing the whole
//! program. Use `LinkPolicy::Strict` to turn malformed links into errors.
//!
//! ## Quick Start
//!
//! ```rust
//! use pipewright::prelude::*;
//!
//! let smooth = Node::new("smooth")
//!     .with_parameter(Parameter::input("fwhm", "8"))
//!     .with_code(
//!         CodeDescriptor::new(
//!             "Nipype",
//!             CodeArgument::new("Smooth").with_import("from nipype.interfaces.spm import Smooth"),
//!         )
//!         .with_comment("Smooth an image with a gaussian kernel"),
//!     );
//!
//! let generator = Generator::builder(Graph::new(vec![smooth], vec![])).build();
//! let code = generator.generate().expect("lenient generation cannot fail");
//!
//! assert!(code.contains("smooth = pe.Node(interface = Smooth, name='smooth')"));
//! assert!(code.contains("smooth.inputs.fwhm = 8"));
//! ```

pub mod codegen;
pub mod config;
pub mod error;
pub mod graph;
pub mod prelude;

#[cfg(feature = "python-bindings")]
mod python;
