use std::collections::HashMap;

use printscript::{
    Version,
    ast::{AstNode, Builtin, Declaration, LiteralKind},
    error::InterpreterError,
    interpreter::{
        evaluator::{
            core::Context,
            scope::{VariableBinding, VariableStore},
        },
        io::{BufferedOutput, ScriptedInput},
        token::Location,
        value::{
            core::{PsType, PsValue},
            type_rules::{ensure_assignable, format_for_print, parse_raw_to},
        },
    },
    run_source,
};

const AT: Location = Location::new(1, 1);

fn number(lexeme: &str) -> AstNode {
    AstNode::Literal { kind:     LiteralKind::Number,
                       lexeme:   lexeme.to_string(),
                       location: AT, }
}

fn identifier(name: &str) -> AstNode {
    AstNode::Identifier { name:     name.to_string(),
                          location: AT, }
}

fn declare(name: &str, declared_type: PsType, is_mutable: bool) -> Declaration {
    Declaration { identifier: name.to_string(),
                  declared_type,
                  is_mutable,
                  location: AT }
}

fn binding(name: &str, value: f64) -> VariableBinding {
    VariableBinding { name:          name.to_string(),
                      declared_type: PsType::Number,
                      value:         PsValue::Number(value),
                      is_mutable:    true, }
}

#[test]
fn lookup_prefers_the_innermost_frame() {
    let mut store = VariableStore::default();
    store.declare(binding("x", 1.0));
    store.push_frame();
    store.declare(binding("x", 2.0));

    assert_eq!(store.lookup("x").map(|b| &b.value), Some(&PsValue::Number(2.0)));
    store.pop_frame();
    assert_eq!(store.lookup("x").map(|b| &b.value), Some(&PsValue::Number(1.0)));
}

#[test]
fn assign_writes_into_the_owning_frame() {
    let mut store = VariableStore::default();
    store.declare(binding("total", 1.0));
    store.push_frame();

    assert!(store.assign("total", PsValue::Number(5.0)));
    assert!(!store.assign("missing", PsValue::Number(5.0)));

    store.pop_frame();
    assert_eq!(store.lookup("total").map(|b| &b.value), Some(&PsValue::Number(5.0)));
}

#[test]
fn redeclaring_in_the_same_frame_replaces_the_binding() {
    let mut store = VariableStore::default();
    store.declare(binding("x", 1.0));
    store.declare(VariableBinding { name:          "x".to_string(),
                                    declared_type: PsType::String,
                                    value:         PsValue::from("now a string"),
                                    is_mutable:    false, });

    let current = store.lookup("x").unwrap();
    assert_eq!(current.declared_type, PsType::String);
    assert!(!current.is_mutable);
}

#[test]
fn global_frame_is_never_popped() {
    let mut store = VariableStore::default();
    store.declare(binding("x", 1.0));
    store.pop_frame();

    assert_eq!(store.depth(), 1);
    assert!(store.lookup("x").is_some());
}

#[test]
fn failing_block_still_pops_its_frame() {
    let mut input = ScriptedInput::default();
    let env: HashMap<String, String> = HashMap::new();
    let mut output = BufferedOutput::default();
    let mut context = Context::new(&mut input, &env, &mut output);

    let body = vec![AstNode::Declaration(declare("inner", PsType::Number, true)),
                    AstNode::Assignment { identifier: "missing".to_string(),
                                          expression: Box::new(number("1")),
                                          location:   AT, }];

    let result = context.exec_block(&body);

    assert!(matches!(result, Err(InterpreterError::UndeclaredVariable { .. })));
    assert_eq!(context.store().depth(), 1);
    assert!(context.binding("inner").is_none());
}

#[test]
fn statements_after_a_failure_do_not_run() {
    let mut input = ScriptedInput::default();
    let env: HashMap<String, String> = HashMap::new();
    let mut output = BufferedOutput::default();
    let mut context = Context::new(&mut input, &env, &mut output);

    let print = |argument: AstNode| AstNode::FunctionCall { function: Builtin::Println,
                                                            argument: Box::new(argument),
                                                            is_void:  true,
                                                            location: AT, };
    let program = [print(number("1")), print(identifier("nope")), print(number("3"))];

    assert!(context.execute_program(&program).is_err());
    drop(context);
    assert_eq!(output.lines(), ["1"]);
}

#[test]
fn expressions_are_not_statements() {
    let mut input = ScriptedInput::default();
    let env: HashMap<String, String> = HashMap::new();
    let mut output = BufferedOutput::default();
    let mut context = Context::new(&mut input, &env, &mut output);

    assert!(matches!(context.execute(&number("1")),
                     Err(InterpreterError::Unsupported { .. })));

    let declaration = AstNode::Declaration(declare("x", PsType::Number, true));
    assert!(matches!(context.evaluate(&declaration, None),
                     Err(InterpreterError::Unsupported { .. })));
}

#[test]
fn void_calls_are_decided_by_the_builtin() {
    let mut input = ScriptedInput::new(["typed"]);
    let env: HashMap<String, String> = HashMap::new();
    let mut output = BufferedOutput::default();
    let mut context = Context::new(&mut input, &env, &mut output);

    let prompt = AstNode::Literal { kind:     LiteralKind::String,
                                    lexeme:   "\"> \"".to_string(),
                                    location: AT, };
    let print = AstNode::FunctionCall { function: Builtin::Println,
                                        argument: Box::new(number("1")),
                                        is_void:  false,
                                        location: AT, };
    let read = AstNode::FunctionCall { function: Builtin::ReadInput,
                                       argument: Box::new(prompt),
                                       is_void:  true,
                                       location: AT, };

    assert!(matches!(context.evaluate(&print, None),
                     Err(InterpreterError::Unsupported { .. })));
    assert_eq!(context.evaluate(&read, None).unwrap(), PsValue::from("typed"));

    context.execute(&print).unwrap();
    drop(context);
    assert_eq!(output.lines(), ["1"]);
}

#[test]
fn const_binding_is_immutable_after_declaration() {
    let mut input = ScriptedInput::default();
    let env: HashMap<String, String> = HashMap::new();
    let mut output = BufferedOutput::default();
    let mut context = Context::new(&mut input, &env, &mut output);

    let init = AstNode::DeclarationAssignment { declaration: declare("limit", PsType::Number, false),
                                                value:       Box::new(number("10")), };
    context.execute(&init).unwrap();

    let reassign = AstNode::Assignment { identifier: "limit".to_string(),
                                         expression: Box::new(number("11")),
                                         location:   AT, };
    assert!(matches!(context.execute(&reassign),
                     Err(InterpreterError::ConstReassignment { name, .. }) if name == "limit"));
    assert_eq!(context.binding("limit").map(|b| &b.value), Some(&PsValue::Number(10.0)));
}

#[test]
fn read_input_uses_the_expected_type() {
    let mut input = ScriptedInput::new(["12.5", "12.5"]);
    let env: HashMap<String, String> = HashMap::new();
    let mut output = BufferedOutput::default();
    let mut context = Context::new(&mut input, &env, &mut output);

    let call = AstNode::FunctionCall { function: Builtin::ReadInput,
                                       argument: Box::new(AstNode::Literal { kind:     LiteralKind::String,
                                                                             lexeme:   "\"value: \"".to_string(),
                                                                             location: AT, }),
                                       is_void:  false,
                                       location: AT, };

    assert_eq!(context.evaluate(&call, Some(PsType::Number)).unwrap(), PsValue::Number(12.5));
    assert_eq!(context.evaluate(&call, None).unwrap(), PsValue::from("12.5"));
    drop(context);
    assert_eq!(input.prompts(), ["value: ", "value: "]);
}

#[test]
fn read_env_asks_the_environment_provider() {
    let mut input = ScriptedInput::default();
    let env = HashMap::from([("DEBUG".to_string(), "true".to_string())]);
    let mut output = BufferedOutput::default();
    let mut context = Context::new(&mut input, &env, &mut output);

    let result = run_source("const debug: boolean = readEnv(\"DEBUG\"); if (debug) { println(\"on\"); }",
                            Version::V1_1,
                            &mut context);
    assert!(result.is_ok());
    drop(context);
    assert_eq!(output.lines(), ["on"]);
}

#[test]
fn variables_persist_across_runs_on_one_context() {
    let mut input = ScriptedInput::default();
    let env: HashMap<String, String> = HashMap::new();
    let mut output = BufferedOutput::default();
    let mut context = Context::new(&mut input, &env, &mut output);

    run_source("let count: number = 1;", Version::V1_1, &mut context).unwrap();
    run_source("count = count * 10; println(count);", Version::V1_1, &mut context).unwrap();
    drop(context);
    assert_eq!(output.lines(), ["10"]);
}

#[test]
fn malformed_number_literal_is_unsupported() {
    let mut input = ScriptedInput::default();
    let env: HashMap<String, String> = HashMap::new();
    let mut output = BufferedOutput::default();
    let mut context = Context::new(&mut input, &env, &mut output);

    assert!(matches!(context.evaluate(&number("1.2.3"), None),
                     Err(InterpreterError::Unsupported { .. })));
}

#[test]
fn raw_text_converts_by_type() {
    assert_eq!(parse_raw_to(PsType::Number, "-4.25\n", AT).unwrap(), PsValue::Number(-4.25));
    assert_eq!(parse_raw_to(PsType::Boolean, " false ", AT).unwrap(), PsValue::Bool(false));
    assert_eq!(parse_raw_to(PsType::Boolean, "0", AT).unwrap(), PsValue::Bool(false));
    assert_eq!(parse_raw_to(PsType::String, " as is ", AT).unwrap(), PsValue::from(" as is "));

    assert!(matches!(parse_raw_to(PsType::Boolean, "yes", AT),
                     Err(InterpreterError::InputParse { raw, target: PsType::Boolean, .. }) if raw == "yes"));
}

#[test]
fn assignability_requires_identical_types() {
    assert!(ensure_assignable(PsType::Number, &PsValue::Number(1.0), AT).is_ok());
    assert!(matches!(ensure_assignable(PsType::Boolean, &PsValue::from("true"), AT),
                     Err(InterpreterError::TypeMismatch { expected: PsType::Boolean,
                                                          found: PsType::String,
                                                          .. })));
}

#[test]
fn printed_form_of_values() {
    assert_eq!(format_for_print(&PsValue::Number(-0.0)), "0");
    assert_eq!(format_for_print(&PsValue::Number(-12.0)), "-12");
    assert_eq!(format_for_print(&PsValue::Number(0.5)), "0.5");
    assert_eq!(format_for_print(&PsValue::Number(1e21)), "1000000000000000000000");
    assert_eq!(format_for_print(&PsValue::Bool(true)), "true");
    assert_eq!(PsValue::from("plain").to_string(), "plain");
}
