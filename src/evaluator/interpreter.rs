use tracing::debug;

use crate::{
    ast::ast::{Node, NodeKind},
    errors::errors::Error,
    grammar::basic::BasicGrammar,
    lexer::lexer::Lexer,
};

use super::{environment::Environment, evaluator::evaluate, value::Value};

/// A session that parses and runs source text against one environment.
///
/// Bindings persist across calls to [`Interpreter::run`]. A failing run
/// stops at the failing statement; bindings made before it are kept.
#[derive(Debug)]
pub struct Interpreter {
    grammar: BasicGrammar,
    environment: Environment,
}

impl Interpreter {
    pub fn new() -> Result<Self, Error> {
        Ok(Interpreter::with_grammar(BasicGrammar::new()?))
    }

    pub fn with_grammar(grammar: BasicGrammar) -> Self {
        Interpreter {
            grammar,
            environment: Environment::new(),
        }
    }

    /// Runs every top-level statement of `source` and returns their values
    /// in order. Empty statements produce no value.
    pub fn run(&mut self, source: &str, file: Option<String>) -> Result<Vec<Value>, Error> {
        let mut lexer = Lexer::from_source(source.to_string(), file);
        self.run_lexer(&mut lexer)
    }

    pub fn run_lexer(&mut self, lexer: &mut Lexer) -> Result<Vec<Value>, Error> {
        let mut values = vec![];

        while !lexer.peek(0)?.is_eof() {
            let statement = self.grammar.parse_program(lexer)?;
            if statement.get_node_kind() == NodeKind::NullStmt {
                continue;
            }

            let value = evaluate(&statement, &mut self.environment)?;
            debug!(statement = %statement, value = %value, "statement evaluated");
            values.push(value);
        }

        Ok(values)
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn environment_mut(&mut self) -> &mut Environment {
        &mut self.environment
    }

    pub fn grammar(&self) -> &BasicGrammar {
        &self.grammar
    }
}
