use std::collections::HashSet;

use lazy_static::lazy_static;

use crate::{
    ast::ast::{NodeKind, NodeWrapper},
    errors::errors::Error,
    lexer::{lexer::Lexer, tokens::EOL},
    parser::{
        grammar::{Grammar, RuleId},
        lookups::{Associativity, Operators},
    },
};

lazy_static! {
    pub static ref BASIC_OPERATORS: Operators = {
        let mut operators = Operators::new();
        operators
            .add("=", 1, Associativity::Right)
            .add("==", 2, Associativity::Left)
            .add(">", 2, Associativity::Left)
            .add("<", 2, Associativity::Left)
            .add("+", 3, Associativity::Left)
            .add("-", 3, Associativity::Left)
            .add("*", 4, Associativity::Left)
            .add("/", 4, Associativity::Left)
            .add("%", 4, Associativity::Left);
        operators
    };
    /// Spellings a name can never take.
    pub static ref BASIC_RESERVED: HashSet<String> = [";", "}", ")", EOL]
        .iter()
        .map(|s| s.to_string())
        .collect();
}

/// The reference grammar of the little language.
///
/// ```text
/// primary   : "(" expr ")" | NUMBER | IDENTIFIER | STRING
/// factor    : "-" primary | primary
/// expr      : factor { OP factor }
/// block     : "{" [ statement ] { (";" | EOL) [ statement ] } "}"
/// simple    : expr
/// statement : "if" expr block [ "else" block ] | "while" expr block | simple
/// program   : [ statement ] (";" | EOL)
/// ```
///
/// The rule handles are public so a caller can extend the grammar through
/// [`BasicGrammar::grammar_mut`], e.g. with `insert_choice` on `primary`.
#[derive(Debug)]
pub struct BasicGrammar {
    grammar: Grammar,
    pub primary: RuleId,
    pub factor: RuleId,
    pub expr: RuleId,
    pub block: RuleId,
    pub simple: RuleId,
    pub statement: RuleId,
    pub program: RuleId,
}

impl BasicGrammar {
    pub fn new() -> Result<Self, Error> {
        BasicGrammar::with_operators(BASIC_OPERATORS.clone())
    }

    pub fn with_operators(operators: Operators) -> Result<Self, Error> {
        let reserved: &HashSet<String> = &BASIC_RESERVED;
        let mut grammar = Grammar::new();

        // Declared up front so rules can refer to each other
        let primary = grammar.rule();
        let factor = grammar.rule();
        let expr = grammar.rule();
        let block = grammar.rule_of(NodeKind::BlockStmt)?;
        let simple = grammar.rule();
        let statement = grammar.rule();
        let program = grammar.rule();

        let paren = grammar.rule();
        grammar.edit(paren).sep(&["("]).ast(expr).sep(&[")"]);
        let number = grammar.rule();
        grammar.edit(number).number_as(NodeKind::NumberLiteral)?;
        let name = grammar.rule();
        grammar.edit(name).identifier_as(NodeKind::Name, reserved)?;
        let string = grammar.rule();
        grammar.edit(string).string_as(NodeKind::StringLiteral)?;
        grammar.edit(primary).or(&[paren, number, name, string]);

        let negative = grammar.rule_of(NodeKind::NegativeExpr)?;
        grammar.edit(negative).sep(&["-"]).ast(primary);
        grammar.edit(factor).or(&[negative, primary]);

        grammar
            .edit(expr)
            .expression_as(NodeKind::BinaryExpr, factor, &operators)?;

        let block_tail = grammar.rule();
        grammar.edit(block_tail).sep(&[";", EOL]).option(statement);
        grammar
            .edit(block)
            .sep(&["{"])
            .option(statement)
            .repeat(block_tail)
            .sep(&["}"]);

        grammar.edit(simple).ast(expr);

        let else_part = grammar.rule();
        grammar.edit(else_part).sep(&["else"]).ast(block);
        let if_stmt = grammar.rule_of(NodeKind::IfStmt)?;
        grammar
            .edit(if_stmt)
            .sep(&["if"])
            .ast(expr)
            .ast(block)
            .option(else_part);
        let while_stmt = grammar.rule_of(NodeKind::WhileStmt)?;
        grammar.edit(while_stmt).sep(&["while"]).ast(expr).ast(block);
        grammar.edit(statement).or(&[if_stmt, while_stmt, simple]);

        let null_stmt = grammar.rule_of(NodeKind::NullStmt)?;
        grammar
            .edit(program)
            .or(&[statement, null_stmt])
            .sep(&[";", EOL]);

        Ok(BasicGrammar {
            grammar,
            primary,
            factor,
            expr,
            block,
            simple,
            statement,
            program,
        })
    }

    /// Parses one top-level statement, including its terminating `;` or line
    /// end. An empty statement comes back as a `NullStmt`.
    pub fn parse_program(&self, lexer: &mut Lexer) -> Result<NodeWrapper, Error> {
        self.grammar.parse(self.program, lexer)
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn grammar_mut(&mut self) -> &mut Grammar {
        &mut self.grammar
    }
}
