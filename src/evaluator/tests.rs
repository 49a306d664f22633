//! Unit tests for the evaluator module.
//!
//! Covers literal and operator semantics, assignment, control flow, the
//! error cases of evaluation and the interpreter session.

use std::rc::Rc;

use rstest::rstest;

use super::{
    environment::Environment,
    evaluator::evaluate,
    interpreter::Interpreter,
    value::{Value, FALSE, TRUE},
};
use crate::{
    ast::{
        ast::{Leaf, List, Node},
        expressions::{BinaryExpr, NumberLiteral},
        statements::{BlockStmt, NullStmt},
    },
    errors::errors::{Error, ErrorCategory, ErrorImpl},
    grammar::{
        basic::{BasicGrammar, BASIC_OPERATORS},
        func::FuncGrammar,
    },
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    parser::lookups::Associativity,
    Position, MK_TOKEN,
};

/// Value of the last statement of `source`, run in a fresh session.
fn eval(source: &str) -> Result<Value, Error> {
    let mut interpreter = Interpreter::new().unwrap();
    let values = interpreter.run(source, Some("test.stone".to_string()))?;
    Ok(values.last().cloned().unwrap_or(FALSE))
}

fn eval_err(source: &str) -> ErrorImpl {
    eval(source).unwrap_err().get_impl().clone()
}

fn number(value: i64) -> Token {
    MK_TOKEN!(
        TokenKind::Number,
        value.to_string(),
        Some(value),
        Position(1, Rc::new("test.stone".to_string()))
    )
}

#[rstest]
#[case("7 / 2", Value::Integer(3))]
#[case("-7 / 2", Value::Integer(-3))]
#[case("7 % 3", Value::Integer(1))]
#[case("10 - 2 - 3", Value::Integer(5))]
#[case("2 + 3 * 4", Value::Integer(14))]
#[case("-(2 + 3)", Value::Integer(-5))]
#[case("1 == 1", TRUE)]
#[case("1 == 2", FALSE)]
#[case("2 < 3", TRUE)]
#[case("2 > 3", FALSE)]
#[case("\"ab\" + 1", Value::from("ab1"))]
#[case("1 + \"ab\"", Value::from("1ab"))]
#[case("\"a\" + \"b\"", Value::from("ab"))]
#[case("\"a\" == \"a\"", TRUE)]
#[case("\"1\" == 1", FALSE)]
#[case("\"line\\n\"", Value::from("line\n"))]
fn test_expression_values(#[case] source: &str, #[case] expected: Value) {
    assert_eq!(eval(source).unwrap(), expected);
}

#[test]
fn test_undefined_name() {
    let err = eval("y").unwrap_err();

    assert_eq!(err.get_category(), ErrorCategory::Semantic);
    assert_eq!(
        *err.get_impl(),
        ErrorImpl::UndefinedName {
            name: "y".to_string()
        }
    );
    assert_eq!(err.get_position().0, 1);
}

#[test]
fn test_assignment_is_an_expression() {
    let mut interpreter = Interpreter::new().unwrap();

    let values = interpreter.run("x = 5\nx\ny = x = 7", None).unwrap();

    assert_eq!(values, vec![Value::Integer(5), Value::Integer(5), Value::Integer(7)]);
    assert_eq!(interpreter.environment().get("x"), Some(&Value::Integer(7)));
    assert_eq!(interpreter.environment().get("y"), Some(&Value::Integer(7)));
}

#[test]
fn test_assignment_evaluates_right_side_first() {
    let err = eval("x = x + 1").unwrap_err();

    assert_eq!(
        *err.get_impl(),
        ErrorImpl::UndefinedName {
            name: "x".to_string()
        }
    );
}

#[test]
fn test_block_value_and_environment() {
    let grammar = BasicGrammar::new().unwrap();
    let mut lexer = Lexer::from_source("{ x = 1; x = x + 1; x }".to_string(), None);
    let block = grammar.grammar().parse(grammar.block, &mut lexer).unwrap();
    let mut environment = Environment::new();

    let value = evaluate(&block, &mut environment).unwrap();

    assert_eq!(value, Value::Integer(2));
    assert_eq!(environment.get("x"), Some(&Value::Integer(2)));
}

#[test]
fn test_block_skips_empty_statements() {
    let block = BlockStmt::create(vec![
        NumberLiteral::create(number(3)),
        NullStmt::create(vec![]),
    ]);

    assert_eq!(evaluate(&block, &mut Environment::new()).unwrap(), Value::Integer(3));
    assert_eq!(
        evaluate(&BlockStmt::create(vec![]), &mut Environment::new()).unwrap(),
        FALSE
    );
}

#[rstest]
#[case("x = 0; if x { 1 } else { 2 }", Value::Integer(2))]
#[case("x = 3; if x { 1 } else { 2 }", Value::Integer(1))]
#[case("if 0 { 1 }", FALSE)]
#[case("if \"yes\" { 1 } else { 2 }", Value::Integer(2))]
#[case("if 1 < 2 { \"a\" } else { \"b\" }", Value::from("a"))]
fn test_if(#[case] source: &str, #[case] expected: Value) {
    assert_eq!(eval(source).unwrap(), expected);
}

#[test]
fn test_while_returns_last_body_value() {
    let source = "i = 0; s = 0\nwhile i < 4 {\n  i = i + 1\n  s = s + i\n}\n";
    let mut interpreter = Interpreter::new().unwrap();

    let values = interpreter.run(source, None).unwrap();

    assert_eq!(values.last(), Some(&Value::Integer(10)));
    assert_eq!(interpreter.environment().get("i"), Some(&Value::Integer(4)));
}

#[test]
fn test_while_that_never_runs() {
    assert_eq!(eval("while 0 { 1 }").unwrap(), FALSE);
}

#[test]
fn test_bad_operand_types() {
    assert_eq!(
        eval_err("\"a\" - 1"),
        ErrorImpl::BadOperandType {
            operator: "-".to_string()
        }
    );
    assert_eq!(
        eval_err("\"a\" < \"b\""),
        ErrorImpl::BadOperandType {
            operator: "<".to_string()
        }
    );
    assert_eq!(
        eval_err("-\"a\""),
        ErrorImpl::BadOperandType {
            operator: "-".to_string()
        }
    );
}

#[test]
fn test_bad_assignment() {
    assert_eq!(eval_err("1 = 2"), ErrorImpl::BadAssignment);
    assert_eq!(eval_err("-x = 2"), ErrorImpl::BadAssignment);
}

#[rstest]
#[case("1 / 0")]
#[case("1 % 0")]
fn test_division_by_zero(#[case] source: &str) {
    let err = eval(source).unwrap_err();

    assert_eq!(*err.get_impl(), ErrorImpl::DivisionByZero);
    assert_eq!(err.get_category(), ErrorCategory::Semantic);
}

#[rstest]
#[case("9223372036854775807 + 1", "+")]
#[case("0 - 9223372036854775807 - 2", "-")]
#[case("9223372036854775807 * 2", "*")]
#[case("(0 - 9223372036854775807 - 1) / -1", "/")]
#[case("-(0 - 9223372036854775807 - 1)", "-")]
fn test_arithmetic_overflow(#[case] source: &str, #[case] operator: &str) {
    assert_eq!(
        eval_err(source),
        ErrorImpl::ArithmeticOverflow {
            operator: operator.to_string()
        }
    );
}

#[test]
fn test_operator_without_semantics() {
    let mut operators = BASIC_OPERATORS.clone();
    operators.add("&&", 1, Associativity::Left);
    let grammar = BasicGrammar::with_operators(operators).unwrap();
    let mut interpreter = Interpreter::with_grammar(grammar);

    let err = interpreter.run("1 && 2", None).unwrap_err();

    assert_eq!(
        *err.get_impl(),
        ErrorImpl::BadOperator {
            operator: "&&".to_string()
        }
    );
}

#[test]
fn test_generic_nodes_cannot_be_evaluated() {
    let mut environment = Environment::new();

    let leaf = evaluate(&Leaf::create(number(1)), &mut environment).unwrap_err();
    assert_eq!(
        *leaf.get_impl(),
        ErrorImpl::CannotEvaluate {
            node: "1".to_string()
        }
    );

    let list = evaluate(&List::create(vec![]), &mut environment).unwrap_err();
    assert_eq!(list.get_category(), ErrorCategory::Semantic);
    assert_eq!(*list.get_position(), Position::null());

    assert!(evaluate(&NullStmt::create(vec![]), &mut environment).is_err());
}

#[test]
fn test_malformed_node() {
    let err = evaluate(&BinaryExpr::create(vec![]), &mut Environment::new()).unwrap_err();

    assert_eq!(err.get_category(), ErrorCategory::Internal);
    assert_eq!(
        *err.get_impl(),
        ErrorImpl::MalformedNode {
            kind: "BinaryExpr".to_string()
        }
    );
}

#[test]
fn test_empty_statements_produce_no_value() {
    let mut interpreter = Interpreter::new().unwrap();

    let values = interpreter.run("\n\n1\n;\n", None).unwrap();

    assert_eq!(values, vec![Value::Integer(1)]);
}

#[test]
fn test_failed_run_keeps_earlier_bindings() {
    let mut interpreter = Interpreter::new().unwrap();

    let err = interpreter.run("a = 1\nb = c\nd = 2", None).unwrap_err();

    assert_eq!(err.get_position().0, 2);
    assert!(interpreter.environment().contains("a"));
    assert!(!interpreter.environment().contains("b"));
    assert!(!interpreter.environment().contains("d"));
}

#[test]
fn test_bindings_persist_across_runs() {
    let mut interpreter = Interpreter::new().unwrap();

    interpreter.run("counter = 1", None).unwrap();
    let values = interpreter.run("counter = counter + 1", None).unwrap();

    assert_eq!(values, vec![Value::Integer(2)]);
    assert_eq!(interpreter.environment().len(), 1);
}

#[test]
fn test_environment() {
    let mut environment = Environment::new();
    assert!(environment.is_empty());

    environment.put("x", Value::Integer(1));
    environment.put("x", Value::from("one"));

    assert_eq!(environment.len(), 1);
    assert_eq!(environment.get("x"), Some(&Value::from("one")));
    assert_eq!(environment.get("y"), None);
}

#[test]
fn test_value_display_and_truthiness() {
    assert_eq!(Value::Integer(-4).to_string(), "-4");
    assert_eq!(Value::from("text").to_string(), "text");
    assert!(TRUE.is_truthy());
    assert!(!FALSE.is_truthy());
    assert!(!Value::from("1").is_truthy());
    assert_eq!(Value::from(true), TRUE);
    assert_eq!(Value::Integer(9).as_integer(), Some(9));
}

#[rstest]
#[case("def f(a) { a }", "(f (a) (a))")]
#[case("f(2)", "(f (2))")]
#[case("f 1, 2", "(f (1 2))")]
fn test_function_syntax_cannot_evaluate(#[case] source: &str, #[case] described: &str) {
    let grammar = FuncGrammar::new().unwrap().into_basic();
    let mut interpreter = Interpreter::with_grammar(grammar);

    let err = interpreter.run(source, None).unwrap_err();

    assert_eq!(err.get_category(), ErrorCategory::Semantic);
    assert_eq!(
        *err.get_impl(),
        ErrorImpl::CannotEvaluate {
            node: described.to_string()
        }
    );
    assert_eq!(err.get_position().0, 1);
}

#[test]
fn test_session_environment_and_grammar() {
    let mut interpreter = Interpreter::new().unwrap();
    interpreter.environment_mut().put("seed", Value::Integer(4));

    let values = interpreter.run("seed * 2", None).unwrap();
    assert_eq!(values, vec![Value::Integer(8)]);

    let mut lexer = Lexer::from_source("seed = seed + 1".to_string(), None);
    let statement = interpreter.grammar().parse_program(&mut lexer).unwrap();
    assert_eq!(statement.describe(), "(seed = (seed + 1))");

    // Parsing alone binds nothing
    assert_eq!(interpreter.environment().get("seed"), Some(&Value::Integer(4)));
}
