//! Lexical analysis module for the interpreter.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a pull-based stream of tokens for the grammar engine. It handles:
//!
//! - Line-at-a-time scanning with a single compound regex pattern
//! - Integer and string literals (with `\"`, `\\` and `\n` escapes)
//! - Identifiers and operators, which share one token kind
//! - Explicit end-of-line tokens and a permanent end-of-file token
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;
