use printscript::{
    Version,
    ast::{AstNode, BinaryOperator, Builtin, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::tokenize,
        parser::{core::Parser, expression::build_expression},
        token::{Location, TokenProvider, TokenStream},
        value::core::PsType,
    },
};

fn stream(src: &str, version: Version) -> TokenStream {
    TokenStream::new(tokenize(src, version).unwrap_or_else(|e| panic!("Failed to lex {src:?}: {e}")))
}

fn parse_one(src: &str) -> Result<AstNode, ParseError> {
    Parser::new(Version::V1_1).parse(&mut stream(src, Version::V1_1))
}

fn expression(src: &str) -> AstNode {
    let tokens = tokenize(src, Version::V1_1).unwrap();
    build_expression(&tokens).unwrap_or_else(|e| panic!("Failed to build {src:?}: {e}"))
}

fn expression_error(src: &str) -> ParseError {
    let tokens = tokenize(src, Version::V1_1).unwrap();
    match build_expression(&tokens) {
        Ok(node) => panic!("{src:?} built {node:?} but was expected to fail"),
        Err(e) => e,
    }
}

fn binary_parts(node: &AstNode) -> (&AstNode, BinaryOperator, &AstNode) {
    match node {
        AstNode::BinaryOp { left, op, right, .. } => (&**left, *op, &**right),
        other => panic!("expected a binary operation, got {other:?}"),
    }
}

#[test]
fn each_statement_consumes_exactly_its_tokens() {
    let mut tokens = stream("let a: number = 1; a = a + 1; println(a);", Version::V1_1);
    let parser = Parser::new(Version::V1_1);

    assert!(matches!(parser.parse(&mut tokens), Ok(AstNode::DeclarationAssignment { .. })));
    assert_eq!(tokens.position(), 7);
    assert!(matches!(parser.parse(&mut tokens), Ok(AstNode::Assignment { .. })));
    assert_eq!(tokens.position(), 13);
    assert!(matches!(parser.parse(&mut tokens), Ok(AstNode::FunctionCall { .. })));
    assert_eq!(tokens.position(), 18);
    assert!(tokens.is_at_end());
}

#[test]
fn conditional_consumes_through_its_last_brace() {
    let mut tokens = stream("if (true) { println(1); } else { println(2); } println(3);",
                            Version::V1_1);
    let parser = Parser::new(Version::V1_1);

    assert!(matches!(parser.parse(&mut tokens), Ok(AstNode::Conditional { .. })));
    assert_eq!(tokens.peek(0).lexeme, "println");
    assert_eq!(tokens.peek(2).lexeme, "3");
}

#[test]
fn reparsing_the_same_tokens_yields_identical_trees() {
    let src = "let x: number = (1 + 2) * readInput(\"n\"); if (x > 2) { println(x); } else { x = 0; }";
    let tokens = tokenize(src, Version::V1_1).unwrap();
    let parser = Parser::new(Version::V1_1);

    let first = parser.parse_program(&mut TokenStream::new(tokens.clone())).unwrap();
    let second = parser.parse_program(&mut TokenStream::new(tokens)).unwrap();

    assert_eq!(first.len(), 2);
    assert_eq!(first, second);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let root = expression("2 + 3 * 4");
    let (left, op, right) = binary_parts(&root);
    assert_eq!(op, BinaryOperator::Add);
    assert!(matches!(left, AstNode::Literal { lexeme, .. } if lexeme == "2"));
    assert_eq!(binary_parts(right).1, BinaryOperator::Mul);

    let root = expression("(2 + 3) * 4");
    let (left, op, _) = binary_parts(&root);
    assert_eq!(op, BinaryOperator::Mul);
    assert_eq!(binary_parts(left).1, BinaryOperator::Add);
}

#[test]
fn equal_precedence_associates_left() {
    let root = expression("8 - 4 - 2");
    let (left, op, right) = binary_parts(&root);
    assert_eq!(op, BinaryOperator::Sub);
    assert_eq!(binary_parts(left).1, BinaryOperator::Sub);
    assert!(matches!(right, AstNode::Literal { lexeme, .. } if lexeme == "2"));
}

#[test]
fn comparisons_bind_looser_than_arithmetic() {
    let root = expression("1 + 1 == 4 / 2");
    let (left, op, right) = binary_parts(&root);
    assert_eq!(op, BinaryOperator::Equal);
    assert_eq!(binary_parts(left).1, BinaryOperator::Add);
    assert_eq!(binary_parts(right).1, BinaryOperator::Div);

    let root = expression("1 < 2 == true");
    let (left, op, _) = binary_parts(&root);
    assert_eq!(op, BinaryOperator::Equal);
    assert_eq!(binary_parts(left).1, BinaryOperator::Less);
}

#[test]
fn single_operand_makes_an_operator_unary() {
    let root = expression("-x");
    assert!(matches!(root, AstNode::UnaryOp { op: UnaryOperator::Minus, .. }));

    let root = expression("5 - -2");
    let (left, op, right) = binary_parts(&root);
    assert_eq!(op, BinaryOperator::Sub);
    assert!(matches!(left, AstNode::UnaryOp { op: UnaryOperator::Minus, .. }));
    assert!(matches!(right, AstNode::Literal { lexeme, .. } if lexeme == "2"));
}

#[test]
fn builtin_calls_are_atomic_operands() {
    let root = expression("readInput(\"a\" + \"b\") + 1");
    let (left, op, _) = binary_parts(&root);
    assert_eq!(op, BinaryOperator::Add);
    let AstNode::FunctionCall { function, argument, is_void, .. } = left else {
        panic!("expected a call, got {left:?}");
    };
    assert_eq!(*function, Builtin::ReadInput);
    assert!(!is_void);
    assert_eq!(binary_parts(argument).1, BinaryOperator::Add);
}

#[test]
fn malformed_expressions_are_invalid_syntax() {
    for src in ["", "(1 + 2", "1 + 2)", "1 2", "* 2", "2 * -3", "readEnv", "readEnv(\"X\"", "println(1)"] {
        assert!(matches!(expression_error(src), ParseError::InvalidSyntax { .. }),
                "{src:?} should be invalid syntax");
    }
}

#[test]
fn builtin_without_parenthesis_is_reported() {
    let error = expression_error("readInput + 1");
    assert!(matches!(&error, ParseError::InvalidSyntax { reason, .. }
                         if reason.contains("must be followed by '('")));

    let error = parse_one("println 1;").unwrap_err();
    assert!(matches!(&error, ParseError::InvalidSyntax { reason, .. }
                         if reason.contains("must be followed by '('")));
}

#[test]
fn non_operand_tokens_are_unexpected() {
    let error = parse_one("x = 1 = 2;").unwrap_err();
    assert!(matches!(error, ParseError::UnexpectedToken { token, .. } if token.lexeme == "="));
}

#[test]
fn declarations_record_type_and_mutability() {
    let Ok(AstNode::DeclarationAssignment { declaration, .. }) = parse_one("let s: string = 'a';") else {
        panic!("expected a declaration with assignment");
    };
    assert_eq!(declaration.identifier, "s");
    assert_eq!(declaration.declared_type, PsType::String);
    assert!(declaration.is_mutable);

    let Ok(AstNode::Declaration(declaration)) = parse_one("const flag: boolean;") else {
        panic!("expected a bare declaration");
    };
    assert_eq!(declaration.declared_type, PsType::Boolean);
    assert!(!declaration.is_mutable);
}

#[test]
fn broken_declarations_name_the_offending_token() {
    let error = parse_one("let x number = 1;").unwrap_err();
    assert!(matches!(error, ParseError::UnexpectedToken { token, .. } if token.lexeme == "number"));

    let error = parse_one("let x: integer = 1;").unwrap_err();
    assert!(matches!(error, ParseError::UnexpectedToken { token, .. } if token.lexeme == "integer"));

    let error = parse_one("let x: number 1;").unwrap_err();
    assert!(matches!(error, ParseError::UnexpectedToken { token, .. } if token.lexeme == "1"));

    let error = parse_one("let x: number = ;").unwrap_err();
    assert!(matches!(error, ParseError::InvalidSyntax { .. }));
}

#[test]
fn trailing_tokens_after_a_call_are_unexpected() {
    let error = parse_one("println(1) 2;").unwrap_err();
    assert!(matches!(error, ParseError::UnexpectedToken { token, .. } if token.lexeme == "2"));
}

#[test]
fn println_cannot_be_used_as_a_value() {
    let error = parse_one("let x: string = println(\"a\");").unwrap_err();
    assert!(matches!(error, ParseError::InvalidSyntax { .. }));
}

#[test]
fn empty_stream_has_no_valid_parser() {
    let error = parse_one("").unwrap_err();
    assert_eq!(error, ParseError::NoValidParser { tokens: Vec::new() });
}

#[test]
fn unrecognized_statement_carries_its_tokens() {
    let error = parse_one("1 + 2; println(3);").unwrap_err();
    let ParseError::NoValidParser { tokens } = error else {
        panic!("expected NoValidParser, got {error:?}");
    };
    let lexemes: Vec<_> = tokens.iter().map(|t| t.lexeme.as_str()).collect();
    assert_eq!(lexemes, ["1", "+", "2", ";"]);
}

#[test]
fn grammar_1_0_does_not_know_const_or_if() {
    let parser = Parser::new(Version::V1_0);

    let error = parser.parse(&mut stream("const x: number = 1;", Version::V1_0)).unwrap_err();
    assert!(matches!(error, ParseError::NoValidParser { .. }));

    let error = parser.parse(&mut stream("if (x) { println(1); }", Version::V1_0)).unwrap_err();
    assert!(matches!(error, ParseError::NoValidParser { .. }));

    // Tokens lexed for 1.1 still fail under the 1.0 grammar.
    let error = parser.parse(&mut stream("const x: number = 1;", Version::V1_1)).unwrap_err();
    assert!(matches!(error, ParseError::NoValidParser { .. }));
}

#[test]
fn nested_conditionals_parse_recursively() {
    let node = parse_one("if (a) { if (b) { println(1); } } else { println(2); }").unwrap();
    let AstNode::Conditional { then_body, else_body, .. } = node else {
        panic!("expected a conditional");
    };

    assert_eq!(then_body.len(), 1);
    assert!(matches!(&then_body[0], AstNode::Conditional { else_body: None, .. }));
    assert_eq!(else_body.map(|body| body.len()), Some(1));
}

#[test]
fn empty_blocks_are_allowed() {
    let node = parse_one("if (true) {} else {}").unwrap();
    assert!(matches!(node, AstNode::Conditional { then_body, else_body: Some(else_body), .. }
                         if then_body.is_empty() && else_body.is_empty()));
}

#[test]
fn malformed_conditionals_are_reported() {
    assert!(matches!(parse_one("if true { println(1); }"),
                     Err(ParseError::UnexpectedToken { .. })));
    assert!(matches!(parse_one("if () { println(1); }"),
                     Err(ParseError::InvalidSyntax { .. })));
    assert!(matches!(parse_one("if (true { println(1); }"),
                     Err(ParseError::InvalidSyntax { .. })));
    assert!(matches!(parse_one("if (true) println(1);"),
                     Err(ParseError::UnexpectedToken { .. })));
    assert!(matches!(parse_one("if (true) { println(1); } else println(2);"),
                     Err(ParseError::UnexpectedToken { .. })));
}

#[test]
fn unclosed_block_is_invalid_syntax() {
    let error = parse_one("if (true) {\n  println(1);").unwrap_err();
    let ParseError::InvalidSyntax { tokens, reason } = error else {
        panic!("expected InvalidSyntax, got {error:?}");
    };
    assert!(reason.contains("'}'"));
    assert_eq!(tokens[0].location, Location::new(2, 13));
}

#[test]
fn empty_expressions_point_at_their_statement() {
    let parser = Parser::new(Version::V1_1);

    for src in ["let a: number = 1;\nb = ;",
                "let a: number = 1;\nlet b: number = ;",
                "let a: number = 1;\nprintln();"]
    {
        let error = parser.parse_program(&mut stream(src, Version::V1_1)).unwrap_err();
        let ParseError::InvalidSyntax { tokens, reason } = &error else {
            panic!("{src:?}: expected InvalidSyntax, got {error:?}");
        };
        assert_eq!(reason, "expected an expression", "{src:?}");
        assert_eq!(tokens[0].location, Location::new(2, 1), "{src:?}");
        assert!(error.to_string().starts_with("Error at 2:1:"), "{src:?}: {error}");
    }

    let error = parser.parse_program(&mut stream("let a: number = 1;\nprintln(readInput());",
                                                 Version::V1_1))
                      .unwrap_err();
    let ParseError::InvalidSyntax { tokens, .. } = &error else {
        panic!("expected InvalidSyntax, got {error:?}");
    };
    assert_eq!(tokens[0].location, Location::new(2, 9));
}

#[test]
fn unclosed_call_argument_list_is_reported() {
    let error = parse_one("println(readInput(\"a\");").unwrap_err();
    assert!(matches!(&error, ParseError::InvalidSyntax { reason, .. } if reason == "unclosed argument list"),
            "got {error:?}");

    let error = parse_one("println(1)").unwrap_err();
    assert!(matches!(&error, ParseError::InvalidSyntax { reason, .. } if reason.contains("';'")),
            "got {error:?}");
}

#[test]
fn statements_carry_their_locations() {
    let mut tokens = stream("let x: number = 1;\n  println(x);", Version::V1_1);
    let statements = Parser::new(Version::V1_1).parse_program(&mut tokens).unwrap();

    assert_eq!(statements[0].location(), Location::new(1, 1));
    assert_eq!(statements[1].location(), Location::new(2, 3));
}
