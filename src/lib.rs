#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod evaluator;
pub mod grammar;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A source location: line number (1-based) and source name.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.1, self.0)
    }
}

/// Returns the text of `line` (1-based) in `source`, without its line ending.
pub fn get_line(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .lines()
        .nth((line - 1) as usize)
}

/// Renders an error as a short diagnostic pointing at the offending line.
pub fn format_error(error: &Error, source: &str) -> String {
    /*
        Error: UndefinedName (Name `y` is read before it is assigned)
        -> main.stone
           |
        20 | x = y + 1
           |
    */

    let position = error.get_position();
    let line_string = position.0.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", position.1));

    if let Some(line_text) = get_line(source, position.0) {
        out.push_str(&format!("{:>padding$}\n", "|"));
        out.push_str(&format!("{} | {}\n", line_string, line_text.trim()));
        out.push_str(&format!("{:>padding$}\n", "|"));
    }

    out
}
