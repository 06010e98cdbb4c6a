//! Common test utilities for building pipeline graphs.
use pipewright::prelude::*;

/// A Nipype descriptor for `operation`, optionally carrying an import line.
#[allow(dead_code)]
pub fn nipype(operation: &str, import: Option<&str>) -> CodeDescriptor {
    let mut argument = CodeArgument::new(operation);
    if let Some(import) = import {
        argument = argument.with_import(import);
    }
    CodeDescriptor::new("Nipype", argument)
}

/// SPM smoothing node with a single static `fwhm` input.
#[allow(dead_code)]
pub fn create_smooth_node() -> Node {
    Node::new("smooth")
        .with_parameter(Parameter::input("fwhm", "8"))
        .with_code(nipype("Smooth", Some("from nipype.interfaces.spm import Smooth")))
}

/// FSL BET node fanning out over `in_file`, with a static and a linked input.
#[allow(dead_code)]
pub fn create_bet_node() -> Node {
    Node::new("bet")
        .with_parameter(Parameter::iterable("in_file", "['a.nii', 'b.nii']"))
        .with_parameter(Parameter::input("frac", "0.5"))
        .with_parameter(Parameter::output("mask_file", "'mask.nii'"))
        .with_code(
            nipype("fsl.BET", Some("from nipype.interfaces import fsl"))
                .with_comment("FSL BET wrapper for skull stripping"),
        )
}

/// Two-node graph: `bet.out_file -> smooth.in_files`.
///
/// Logic: skull strip every input image, then smooth the result.
#[allow(dead_code)]
pub fn create_simple_graph() -> Graph {
    Graph {
        nodes: vec![create_bet_node(), create_smooth_node()],
        links: vec![Link::new(
            Port::new("bet", "out_file"),
            Port::new("smooth", "in_files"),
        )],
    }
}

/// A graph with an infosource, a file selector, and two SPM steps sharing an import.
#[allow(dead_code)]
pub fn create_pipeline_graph() -> Graph {
    let infosource = Node::new("infosource")
        .with_parameter(Parameter::iterable("subject_id", "['sub-01', 'sub-02']"))
        .with_code(nipype(
            "utility.IdentityInterface",
            Some("import nipype.interfaces.utility as utility"),
        ));

    let selectfiles = Node::new("selectfiles")
        .with_parameter(Parameter::input("anat", "'{subject_id}/anat.nii'"))
        .with_parameter(Parameter::input("base_directory", "'/data'"))
        .with_parameter(Parameter::output("subject_id", ""))
        .with_code(nipype("io.SelectFiles", Some("import nipype.interfaces.io as io")));

    let realign = Node::new("realign")
        .with_parameter(Parameter::input("register_to_mean", "True"))
        .with_code(nipype(
            "spm.Realign",
            Some("import nipype.interfaces.spm as spm"),
        ));

    let smooth = Node::new("smooth")
        .with_parameter(Parameter::input("fwhm", "[6, 6, 6]"))
        .with_code(nipype("spm.Smooth", Some("import nipype.interfaces.spm as spm")));

    Graph {
        nodes: vec![infosource, selectfiles, realign, smooth],
        links: vec![
            Link::new(
                Port::new("infosource", "subject_id"),
                Port::new("selectfiles", "subject_id"),
            ),
            Link::new(
                Port::new("selectfiles", "anat"),
                Port::new("realign", "in_files"),
            ),
            Link::new(
                Port::new("realign", "realigned_files"),
                Port::new("smooth", "in_files"),
            ),
        ],
    }
}

/// Generates with the default configuration, which cannot fail.
#[allow(dead_code)]
pub fn generate(graph: Graph) -> String {
    Generator::builder(graph)
        .build()
        .generate()
        .expect("lenient generation failed")
}
