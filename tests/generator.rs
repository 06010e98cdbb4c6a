//! Tests for parameter classification and per-node emission.
mod common;
use common::*;
use pipewright::codegen::params::{iterable_fields, parameter_lines};
use pipewright::prelude::*;

fn emit(node: &Node) -> Vec<String> {
    let config = GeneratorConfig::default();
    NodeEmitter::new(&config).emit(node)
}

#[test]
fn test_iterable_fields_keep_declaration_order() {
    let node = Node::new("n")
        .with_parameter(Parameter::iterable("b", "[1]"))
        .with_parameter(Parameter::input("x", "1"))
        .with_parameter(Parameter::iterable("a", "[2]"));
    assert_eq!(iterable_fields(&node), vec!["b", "a"]);
}

#[test]
fn test_iterable_fields_on_empty_node() {
    assert!(iterable_fields(&Node::new("n")).is_empty());
    assert!(parameter_lines(&Node::new("n")).is_empty());
}

#[test]
fn test_parameter_lines_scalars_then_iterables() {
    let node = Node::new("bet")
        .with_parameter(Parameter::iterable("in_file", "['a.nii', 'b.nii']"))
        .with_parameter(Parameter::input("frac", "0.5"))
        .with_parameter(Parameter::iterable("mask", "[True, False]"))
        .with_parameter(Parameter::input("robust", "True"));

    assert_eq!(
        parameter_lines(&node),
        vec![
            "bet.inputs.frac = 0.5",
            "bet.inputs.robust = True",
            "bet.iterables = [('in_file', ['a.nii', 'b.nii']),('mask', [True, False])]",
        ]
    );
}

#[test]
fn test_empty_value_and_linked_parameters_never_emitted() {
    let node = Node::new("n")
        .with_parameter(Parameter::input("empty_scalar", ""))
        .with_parameter(Parameter::iterable("empty_iterable", ""))
        .with_parameter(Parameter::output("linked", "'x'"))
        .with_parameter(Parameter {
            input: false,
            ..Parameter::iterable("linked_iterable", "[1, 2]")
        })
        .with_code(nipype("Op", None));

    let code = emit(&node).join("\n");
    for name in ["empty_scalar", "empty_iterable", "linked", "linked_iterable"] {
        assert!(!code.contains(name), "'{}' leaked into:\n{}", name, code);
    }
    assert!(code.contains("n = pe.Node(interface = Op, name='n')"));
}

#[test]
fn test_single_run_node() {
    let lines = emit(&create_smooth_node());
    assert_eq!(
        lines,
        vec![
            "#Smooth",
            "smooth = pe.Node(interface = Smooth, name='smooth')",
            "smooth.inputs.fwhm = 8",
        ]
    );
}

#[test]
fn test_single_run_node_has_no_iteration_clauses() {
    let node = Node::new("plain").with_code(nipype("Op", None));
    let lines = emit(&node);
    assert_eq!(lines.len(), 2);
    assert!(!lines[1].contains("iterfield"));
    assert!(!lines.iter().any(|l| l.contains(".iterables")));
}

#[test]
fn test_fan_out_node() {
    let lines = emit(&create_bet_node());
    assert_eq!(
        lines,
        vec![
            "#FSL BET wrapper for skull stripping",
            "bet = pe.MapNode(interface = fsl.BET, name='bet', iterfield = ['in_file'])",
            "bet.inputs.frac = 0.5",
            "bet.iterables = [('in_file', ['a.nii', 'b.nii'])]",
        ]
    );
}

#[test]
fn test_fan_out_iterfield_matches_iterables() {
    let node = Node::new("m")
        .with_parameter(Parameter::iterable("x", "[1, 2]"))
        .with_parameter(Parameter::iterable("y", "[3, 4]"))
        .with_code(nipype("Op", None));
    let lines = emit(&node);
    assert!(lines[1].ends_with("iterfield = ['x', 'y'])"));
    assert_eq!(lines[2], "m.iterables = [('x', [1, 2]),('y', [3, 4])]");
}

#[test]
fn test_multiline_comment_is_flattened() {
    let node = Node::new("n").with_code(nipype("Op", None).with_comment("first\nsecond"));
    assert_eq!(emit(&node)[0], "#first second");
}

#[test]
fn test_node_without_matching_descriptor_emits_nothing() {
    let node = Node::new("n")
        .with_parameter(Parameter::input("x", "1"))
        .with_code(CodeDescriptor::new("Docker", CodeArgument::new("Op")));
    assert!(emit(&node).is_empty());

    let no_argument = Node::new("n").with_code(CodeDescriptor {
        language: "Nipype".to_string(),
        comment: Some("orphan".to_string()),
        argument: None,
    });
    assert!(emit(&no_argument).is_empty());
}

#[test]
fn test_language_is_configurable() {
    let node = Node::new("n").with_code(CodeDescriptor::new("Nipype2", CodeArgument::new("Op")));
    let config = GeneratorConfig {
        language: "Nipype2".to_string(),
        ..GeneratorConfig::default()
    };
    let lines = NodeEmitter::new(&config).emit(&node);
    assert_eq!(lines[1], "n = pe.Node(interface = Op, name='n')");
}

#[test]
fn test_exception_table_lookup() {
    assert_eq!(
        EmissionStrategy::for_operation("io.SelectFiles"),
        EmissionStrategy::SelectFiles
    );
    assert_eq!(
        EmissionStrategy::for_operation("utility.IdentityInterface"),
        EmissionStrategy::IdentityInterface
    );
    assert_eq!(
        EmissionStrategy::for_operation("utility.Function"),
        EmissionStrategy::Function
    );
    assert_eq!(
        EmissionStrategy::for_operation("spm.Smooth"),
        EmissionStrategy::Generic
    );
    assert!(
        EmissionStrategy::EXCEPTIONS
            .iter()
            .all(|(name, s)| EmissionStrategy::for_operation(name) == *s)
    );
}

#[test]
fn test_identity_interface_exception() {
    let node = Node::new("infosource")
        .with_parameter(Parameter::iterable("subject_id", "['01', '02']"))
        .with_parameter(Parameter::output("session", ""))
        .with_code(nipype("utility.IdentityInterface", None).with_comment("ignored"));

    assert_eq!(
        emit(&node),
        vec![
            "#Basic interface class generates identity mappings",
            "infosource = pe.Node(utility.IdentityInterface(fields=['subject_id']), name='infosource')",
            "infosource.iterables = [('subject_id', ['01', '02'])]",
        ]
    );
}

#[test]
fn test_select_files_exception() {
    let node = Node::new("selectfiles")
        .with_parameter(Parameter::input("anat", "'{subject_id}/anat.nii'"))
        .with_parameter(Parameter::input("func", "'{subject_id}/bold.nii'"))
        .with_parameter(Parameter::input("base_directory", "'/data'"))
        .with_parameter(Parameter::output("subject_id", ""))
        .with_code(nipype("io.SelectFiles", None));

    assert_eq!(
        emit(&node),
        vec![
            "#Flexibly collect data from disk to feed into workflows.",
            "selectfiles = pe.Node(io.SelectFiles(templates={'anat':'{subject_id}/anat.nii','func':'{subject_id}/bold.nii'}), name='selectfiles')",
            "selectfiles.inputs.base_directory = '/data'",
        ]
    );
}

#[test]
fn test_function_exception() {
    let node = Node::new("double")
        .with_parameter(Parameter::input("function", "double_it"))
        .with_parameter(Parameter::input("output_names", "['out']"))
        .with_parameter(Parameter::input("x", "2"))
        .with_parameter(Parameter::output("y", ""))
        .with_code(nipype("utility.Function", None));

    assert_eq!(
        emit(&node),
        vec![
            "#Run a Python function as a node",
            "double = pe.Node(utility.Function(input_names=['x'], output_names=['out'], function=double_it), name='double')",
            "double.inputs.x = 2",
        ]
    );
}

#[test]
fn test_function_exception_defaults() {
    let node = Node::new("f").with_code(nipype("utility.Function", None));
    assert_eq!(
        emit(&node)[1],
        "f = pe.Node(utility.Function(input_names=[], output_names=[], function=None), name='f')"
    );
}

#[test]
fn test_function_ignores_linked_settings() {
    let node = Node::new("f")
        .with_parameter(Parameter::output("function", "secret_func"))
        .with_parameter(Parameter::output("output_names", "['hidden']"))
        .with_parameter(Parameter::input("x", "1"))
        .with_code(nipype("utility.Function", None));

    let code = emit(&node).join("\n");
    assert!(!code.contains("secret_func"), "linked function leaked:\n{}", code);
    assert!(!code.contains("hidden"), "linked output_names leaked:\n{}", code);
    assert!(code.contains(
        "f = pe.Node(utility.Function(input_names=['x'], output_names=[], function=None), name='f')"
    ));
}

/// Empty, linked and linked-iterable parameters for the visibility checks below.
fn with_hidden_parameters(node: Node) -> Node {
    node.with_parameter(Parameter::input("empty_scalar", ""))
        .with_parameter(Parameter::iterable("empty_iterable", ""))
        .with_parameter(Parameter::output("linked", "'x'"))
        .with_parameter(Parameter {
            input: false,
            ..Parameter::iterable("linked_iterable", "[1, 2]")
        })
}

fn assert_hidden(code: &str) {
    for name in ["empty_scalar", "empty_iterable", "linked", "'x'", "[1, 2]"] {
        assert!(!code.contains(name), "'{}' leaked into:\n{}", name, code);
    }
}

#[test]
fn test_select_files_hides_empty_and_linked_parameters() {
    let node = with_hidden_parameters(Node::new("sf"))
        .with_parameter(Parameter::input("anat", "'anat.nii'"))
        .with_code(nipype("io.SelectFiles", None));

    let code = emit(&node).join("\n");
    assert_hidden(&code);
    assert!(code.contains("sf = pe.Node(io.SelectFiles(templates={'anat':'anat.nii'}), name='sf')"));
}

#[test]
fn test_identity_interface_hides_empty_and_linked_parameters() {
    let node = with_hidden_parameters(Node::new("ids"))
        .with_parameter(Parameter::output("linked_only", ""))
        .with_code(nipype("utility.IdentityInterface", None));

    let code = emit(&node).join("\n");
    assert_hidden(&code);
    assert!(!code.contains("linked_only"));
    assert!(code.contains("ids = pe.Node(utility.IdentityInterface(fields=[]), name='ids')"));
}

#[test]
fn test_function_hides_empty_and_linked_parameters() {
    let node = with_hidden_parameters(Node::new("wrap"))
        .with_parameter(Parameter::input("function", "run"))
        .with_code(nipype("utility.Function", None));

    let code = emit(&node).join("\n");
    assert_hidden(&code);
    assert!(code.contains(
        "wrap = pe.Node(utility.Function(input_names=[], output_names=[], function=run), name='wrap')"
    ));
}

#[test]
fn test_exception_output_replaces_generic_lines() {
    let node = Node::new("infosource")
        .with_parameter(Parameter::input("subject_id", "'01'"))
        .with_code(nipype("utility.IdentityInterface", None).with_comment("Generic comment"));

    let lines = emit(&node);
    assert!(!lines.iter().any(|l| l == "#Generic comment"));
    assert!(!lines.iter().any(|l| l.contains("pe.Node(interface =")));
    assert!(!lines.iter().any(|l| l.contains("pe.MapNode")));
}

#[test]
fn test_strategy_alias_routes_custom_operation() {
    let node = Node::new("ids")
        .with_parameter(Parameter::input("subject_id", "'01'"))
        .with_code(nipype("MyIdentity", None));

    let graph = Graph::new(vec![node], vec![]);
    let code = Generator::builder(graph)
        .with_strategy_alias("MyIdentity", EmissionStrategy::IdentityInterface)
        .build()
        .generate()
        .unwrap();

    assert!(code.contains("ids = pe.Node(utility.IdentityInterface(fields=['subject_id']), name='ids')"));
    assert!(!code.contains("interface = MyIdentity"));
}
