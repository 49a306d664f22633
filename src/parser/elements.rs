//! The building blocks a rule is made of.
//!
//! Each element can tell from the current lookahead whether it would start
//! successfully (`is_match`) and can consume its input, appending whatever
//! nodes it produces to the rule's child list (`parse`).

use std::collections::HashSet;

use tracing::trace;

use crate::{
    ast::ast::{Leaf, NodeWrapper},
    errors::errors::{Error, ErrorImpl},
    lexer::{lexer::Lexer, tokens::Token},
};

use super::{
    factory::{ListFactory, TokenFactory},
    grammar::{Grammar, RuleId},
    lookups::{Operators, Precedence},
};

/// Which tokens a terminal matcher accepts.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenClass {
    Number,
    /// Any identifier-kind token except the reserved spellings.
    Identifier { reserved: HashSet<String> },
    String,
}

impl TokenClass {
    pub fn test(&self, token: &Token) -> bool {
        match self {
            TokenClass::Number => token.is_number(),
            TokenClass::Identifier { reserved } => {
                token.is_identifier() && !reserved.contains(&token.text)
            }
            TokenClass::String => token.is_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub enum Element {
    /// A number, identifier or string token turned into a leaf.
    Token {
        class: TokenClass,
        factory: TokenFactory,
    },
    /// One of a fixed set of spellings. A discarding literal contributes no
    /// node.
    Literal {
        spellings: Vec<String>,
        discard: bool,
    },
    /// Another rule; contributes that rule's single result.
    Tree(RuleId),
    /// The first candidate whose `is_match` holds, in registration order.
    Or(Vec<RuleId>),
    /// Zero or more (or, with `only_once`, zero or one) runs of a rule.
    Repeat { rule: RuleId, only_once: bool },
    /// Binary operators over `factor`, grouped by precedence climbing.
    Expr {
        factor: RuleId,
        operators: Operators,
        factory: ListFactory,
    },
}

impl Element {
    pub fn is_match(&self, grammar: &Grammar, lexer: &mut Lexer) -> Result<bool, Error> {
        match self {
            Element::Token { class, .. } => Ok(class.test(lexer.peek(0)?)),
            Element::Literal { spellings, .. } => Ok(is_spelled(spellings, lexer.peek(0)?)),
            Element::Tree(rule) => grammar.is_match(*rule, lexer),
            Element::Or(candidates) => Ok(choose(grammar, candidates, lexer)?.is_some()),
            Element::Repeat { rule, .. } => grammar.is_match(*rule, lexer),
            Element::Expr { factor, .. } => grammar.is_match(*factor, lexer),
        }
    }

    pub fn parse(
        &self,
        grammar: &Grammar,
        lexer: &mut Lexer,
        res: &mut Vec<NodeWrapper>,
    ) -> Result<(), Error> {
        match self {
            Element::Token { class, factory } => {
                let token = lexer.read()?;
                if !class.test(&token) {
                    return Err(unexpected(&token));
                }
                res.push(factory(token));
            }
            Element::Literal { spellings, discard } => {
                let token = lexer.read()?;
                if !is_spelled(spellings, &token) {
                    return Err(match spellings.first() {
                        Some(expected) => Error::new(
                            ErrorImpl::UnexpectedTokenDetailed {
                                token: token.to_string(),
                                message: format!("`{}` expected", expected.escape_debug()),
                            },
                            token.position.clone(),
                        ),
                        None => unexpected(&token),
                    });
                }
                if !discard {
                    res.push(Leaf::create(token));
                }
            }
            Element::Tree(rule) => {
                res.push(grammar.parse(*rule, lexer)?);
            }
            Element::Or(candidates) => match choose(grammar, candidates, lexer)? {
                Some(rule) => res.push(grammar.parse(rule, lexer)?),
                None => {
                    let token = lexer.peek(0)?;
                    return Err(Error::new(
                        ErrorImpl::NoMatchingAlternative {
                            token: token.to_string(),
                        },
                        token.position.clone(),
                    ));
                }
            },
            Element::Repeat { rule, only_once } => {
                while grammar.is_match(*rule, lexer)? {
                    let tree = grammar.parse(*rule, lexer)?;
                    // A generic empty list means the run produced nothing
                    if !tree.is_empty_list() {
                        res.push(tree);
                    }
                    if *only_once {
                        break;
                    }
                }
            }
            Element::Expr {
                factor,
                operators,
                factory,
            } => {
                let climber = PrecedenceClimber {
                    grammar,
                    factor: *factor,
                    operators,
                    factory: *factory,
                };
                res.push(climber.parse(lexer)?);
            }
        }

        Ok(())
    }
}

fn is_spelled(spellings: &[String], token: &Token) -> bool {
    token.is_literal_candidate() && spellings.iter().any(|s| *s == token.text)
}

fn unexpected(token: &Token) -> Error {
    Error::new(
        ErrorImpl::UnexpectedToken {
            token: token.to_string(),
        },
        token.position.clone(),
    )
}

fn choose(
    grammar: &Grammar,
    candidates: &[RuleId],
    lexer: &mut Lexer,
) -> Result<Option<RuleId>, Error> {
    for &candidate in candidates {
        if grammar.is_match(candidate, lexer)? {
            trace!(rule = ?candidate, "alternative chosen");
            return Ok(Some(candidate));
        }
    }

    Ok(None)
}

/// Shift-reduce over an operator table.
///
/// After an operator of precedence `p` and its right operand, a following
/// operator is shifted into that right operand while it binds tighter than
/// `p` (or equally tight, for right-associative operators). Otherwise the
/// pending `[left, op, right]` is reduced through the factory.
struct PrecedenceClimber<'a> {
    grammar: &'a Grammar,
    factor: RuleId,
    operators: &'a Operators,
    factory: ListFactory,
}

impl PrecedenceClimber<'_> {
    fn parse(&self, lexer: &mut Lexer) -> Result<NodeWrapper, Error> {
        let mut right = self.grammar.parse(self.factor, lexer)?;

        while let Some(prec) = self.next_operator(lexer)? {
            right = self.do_shift(lexer, right, prec.value)?;
        }

        Ok(right)
    }

    fn do_shift(&self, lexer: &mut Lexer, left: NodeWrapper, prec: i32) -> Result<NodeWrapper, Error> {
        let operator = lexer.read()?;
        trace!(operator = %operator, prec, "shift");

        let operator = Leaf::create(operator);
        let mut right = self.grammar.parse(self.factor, lexer)?;

        while let Some(next) = self.next_operator(lexer)? {
            if !next.binds_tighter_than(prec) {
                break;
            }
            right = self.do_shift(lexer, right, next.value)?;
        }

        Ok((self.factory)(vec![left, operator, right]))
    }

    fn next_operator(&self, lexer: &mut Lexer) -> Result<Option<Precedence>, Error> {
        let token = lexer.peek(0)?;

        if token.is_identifier() {
            Ok(self.operators.get(&token.text))
        } else {
            Ok(None)
        }
    }
}
