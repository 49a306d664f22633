use std::collections::HashSet;

use crate::{
    ast::ast::{NodeKind, NodeWrapper},
    errors::errors::Error,
    lexer::lexer::Lexer,
    parser::grammar::RuleId,
};

use super::basic::{BasicGrammar, BASIC_RESERVED};

/// The reference grammar extended with function definitions and calls.
///
/// ```text
/// param      : IDENTIFIER
/// params     : param { "," param }
/// param_list : "(" [ params ] ")"
/// def        : "def" IDENTIFIER param_list block
/// args       : expr { "," expr }
/// postfix    : "(" [ args ] ")"
/// primary    : ( "(" expr ")" | NUMBER | IDENTIFIER | STRING ) { postfix }
/// simple     : expr [ args ]
/// program    : [ def | statement ] (";" | EOL)
/// ```
///
/// Only `primary`, `simple` and `program` of the base grammar change, and
/// they are extended in place rather than rebuilt. `)` is already reserved
/// by the base grammar, so a parameter or argument list always ends at it.
#[derive(Debug)]
pub struct FuncGrammar {
    basic: BasicGrammar,
    pub param_list: RuleId,
    pub def: RuleId,
    pub args: RuleId,
    pub postfix: RuleId,
}

impl FuncGrammar {
    pub fn new() -> Result<Self, Error> {
        FuncGrammar::extend(BasicGrammar::new()?)
    }

    /// Adds the function rules to `basic`.
    pub fn extend(mut basic: BasicGrammar) -> Result<Self, Error> {
        let reserved: &HashSet<String> = &BASIC_RESERVED;
        let (expr, block) = (basic.expr, basic.block);
        let (primary, simple, program) = (basic.primary, basic.simple, basic.program);
        let grammar = basic.grammar_mut();

        let param = grammar.rule();
        grammar.edit(param).identifier(reserved);
        let param_tail = grammar.rule();
        grammar.edit(param_tail).sep(&[","]).ast(param);
        let params = grammar.rule_of(NodeKind::ParameterList)?;
        grammar.edit(params).ast(param).repeat(param_tail);
        let param_list = grammar.rule();
        grammar.edit(param_list).sep(&["("]).maybe(params).sep(&[")"]);

        let def = grammar.rule_of(NodeKind::DefStmt)?;
        grammar
            .edit(def)
            .sep(&["def"])
            .identifier(reserved)
            .ast(param_list)
            .ast(block);

        let arg_tail = grammar.rule();
        grammar.edit(arg_tail).sep(&[","]).ast(expr);
        let args = grammar.rule_of(NodeKind::Arguments)?;
        grammar.edit(args).ast(expr).repeat(arg_tail);
        let postfix = grammar.rule();
        grammar.edit(postfix).sep(&["("]).maybe(args).sep(&[")"]);

        grammar.edit(primary).repeat(postfix);
        grammar.edit(simple).option(args);
        grammar.edit(program).insert_choice(def);

        Ok(FuncGrammar {
            basic,
            param_list,
            def,
            args,
            postfix,
        })
    }

    /// Parses one top-level definition or statement.
    pub fn parse_program(&self, lexer: &mut Lexer) -> Result<NodeWrapper, Error> {
        self.basic.parse_program(lexer)
    }

    pub fn basic(&self) -> &BasicGrammar {
        &self.basic
    }

    /// Gives up the function rule handles, keeping the extended grammar.
    pub fn into_basic(self) -> BasicGrammar {
        self.basic
    }
}
