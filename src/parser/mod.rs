//! Grammar-rule combinator engine.
//!
//! This module builds recursive-descent parsers declaratively. A grammar
//! author composes rules out of elements and the engine drives them against
//! a [`Lexer`](crate::lexer::lexer::Lexer), building AST nodes as it goes:
//!
//! - Terminal matchers for number, identifier and string tokens
//! - Literal spellings, kept or discarded
//! - Nonterminal references, alternation, optional and repeated runs
//! - An operator-precedence sub-engine for binary expressions
//! - Node factories resolved once, when the grammar is built
//!
//! Alternation commits to the first candidate whose first token matches;
//! there is no backtracking, so candidates must differ on their first token.

pub mod elements;
pub mod factory;
pub mod grammar;
pub mod lookups;
