//! Integration tests for end-to-end interpretation.
//!
//! These tests run whole programs through tokenizing, parsing with the
//! reference grammar and evaluation, and check the resulting values,
//! bindings and diagnostics.

use treewalk::{
    ast::ast::{Node, NodeKind},
    errors::errors::{ErrorCategory, ErrorImpl},
    evaluator::{interpreter::Interpreter, value::Value},
    format_error,
    grammar::basic::BasicGrammar,
    lexer::lexer::{tokenize, Lexer},
    parser::grammar::Grammar,
};

fn run(source: &str) -> (Interpreter, Vec<Value>) {
    let mut interpreter = Interpreter::new().unwrap();
    let values = interpreter
        .run(source, Some("main.stone".to_string()))
        .unwrap();
    (interpreter, values)
}

#[test]
fn test_fibonacci() {
    let source = r#"
// first Fibonacci number above 100
a = 0; b = 1
while b < 100 {
    t = b
    b = a + b
    a = t
}
b
"#;
    let (interpreter, values) = run(source);

    assert_eq!(values.last(), Some(&Value::Integer(144)));
    assert_eq!(interpreter.environment().get("a"), Some(&Value::Integer(89)));
}

#[test]
fn test_nested_control_flow() {
    let source = r#"
even = 0; odd = 0; i = 0
while i < 10 {
    if i % 2 == 0 {
        even = even + 1
    } else {
        odd = odd + 1
    }
    i = i + 1
}
"#;
    let (interpreter, _) = run(source);

    assert_eq!(interpreter.environment().get("even"), Some(&Value::Integer(5)));
    assert_eq!(interpreter.environment().get("odd"), Some(&Value::Integer(5)));
}

#[test]
fn test_string_building() {
    let source = r#"
greeting = "Hello"
name = "world"
message = greeting + ", " + name + "! " + 6 * 7
"#;
    let (_, values) = run(source);

    assert_eq!(values.last(), Some(&Value::from("Hello, world! 42")));
}

#[test]
fn test_factorial_with_negative_guard() {
    let source = r#"
n = 10; result = 1
if n < 0 { result = -1 } else {
    while n > 1 { result = result * n; n = n - 1 }
}
result
"#;
    let (_, values) = run(source);

    assert_eq!(values.last(), Some(&Value::Integer(3628800)));
}

#[test]
fn test_statement_values_in_order() {
    let (_, values) = run("x = 2\nx * 3; x - 5\n\n\"done\"\n");

    assert_eq!(
        values,
        vec![
            Value::Integer(2),
            Value::Integer(6),
            Value::Integer(-3),
            Value::from("done"),
        ]
    );
}

#[test]
fn test_lexical_error() {
    let mut interpreter = Interpreter::new().unwrap();

    let err = interpreter
        .run("x = 1\ny = x # 2\n", Some("main.stone".to_string()))
        .unwrap_err();

    // `#` is punctuation, so the error comes from the grammar
    assert_eq!(err.get_category(), ErrorCategory::Syntactic);

    let err = interpreter
        .run("x = \u{00e9}", Some("main.stone".to_string()))
        .unwrap_err();
    assert_eq!(err.get_category(), ErrorCategory::Lexical);
}

#[test]
fn test_syntax_error_diagnostic() {
    let source = "x = 1\nwhile x < 3 {\n  x = (x + 1\n}\n";
    let mut interpreter = Interpreter::new().unwrap();

    let err = interpreter
        .run(source, Some("main.stone".to_string()))
        .unwrap_err();

    assert_eq!(err.get_category(), ErrorCategory::Syntactic);
    assert_eq!(err.get_position().0, 3);

    let rendered = format_error(&err, source);
    assert!(rendered.starts_with("Error: UnexpectedTokenDetailed"));
    assert!(rendered.contains("`)` expected"));
    assert!(rendered.contains("-> main.stone\n"));
    assert!(rendered.contains("3 | x = (x + 1\n"));
}

#[test]
fn test_semantic_error_diagnostic() {
    let source = "total = 0\ntotal = total + missing\n";
    let mut interpreter = Interpreter::new().unwrap();

    let err = interpreter
        .run(source, Some("main.stone".to_string()))
        .unwrap_err();

    assert_eq!(
        *err.get_impl(),
        ErrorImpl::UndefinedName {
            name: "missing".to_string()
        }
    );
    assert_eq!(err.to_string(), "undefined name: missing (main.stone:2)");
    assert_eq!(
        format_error(&err, source),
        concat!(
            "Error: UndefinedName (Name `missing` is read before it is assigned)\n",
            "-> main.stone\n",
            "  |\n",
            "2 | total = total + missing\n",
            "  |\n",
        )
    );
    // The first statement ran before the failure
    assert_eq!(interpreter.environment().get("total"), Some(&Value::Integer(0)));
}

#[test]
fn test_grammar_shared_by_sessions() {
    let grammar = BasicGrammar::new().unwrap();
    let sources = ["1 + 2", "while x { y }", "if a { b } else { c }"];

    let kinds: Vec<NodeKind> = sources
        .iter()
        .map(|source| {
            let mut lexer = Lexer::from_source(source.to_string(), None);
            grammar.parse_program(&mut lexer).unwrap().get_node_kind()
        })
        .collect();

    assert_eq!(
        kinds,
        vec![NodeKind::BinaryExpr, NodeKind::WhileStmt, NodeKind::IfStmt]
    );
}

#[test]
fn test_tokenize_then_parse_agree() {
    let source = "x = (1 + 2) * 3\n";
    let tokens = tokenize(source.to_string(), None).unwrap();
    let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();

    assert_eq!(
        texts,
        vec!["x", "=", "(", "1", "+", "2", ")", "*", "3", "\n", "EOF"]
    );

    let grammar = BasicGrammar::new().unwrap();
    let tree = grammar
        .parse_program(&mut Lexer::from_source(source.to_string(), None))
        .unwrap();
    assert_eq!(tree.describe(), "(x = ((1 + 2) * 3))");
}

#[test]
fn test_custom_grammar_from_scratch() {
    // list : "[" [ NUMBER { "," NUMBER } ] "]"
    let mut grammar = Grammar::new();
    let number = grammar.rule();
    grammar.edit(number).number();
    let tail = grammar.rule();
    grammar.edit(tail).sep(&[","]).ast(number);
    let items = grammar.rule();
    grammar.edit(items).ast(number).repeat(tail);
    let list = grammar.rule();
    grammar.edit(list).sep(&["["]).option(items).sep(&["]"]);

    let mut lexer = Lexer::from_source("[1, 2, 3] [] [4]".to_string(), None);

    assert_eq!(grammar.parse(list, &mut lexer).unwrap().describe(), "(1 2 3)");
    assert!(grammar.parse(list, &mut lexer).unwrap().is_empty_list());
    assert_eq!(grammar.parse(list, &mut lexer).unwrap().describe(), "4");
}
