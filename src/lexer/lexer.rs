use std::{
    collections::VecDeque,
    io::{BufRead, Cursor},
    rc::Rc,
};

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, EOL};

lazy_static! {
    /// Anchored at the scan position. Group 1 is the token (absent for pure
    /// whitespace), group 2 a comment, group 3 an integer, group 4 a string.
    /// Only ASCII whitespace separates tokens.
    static ref TOKEN_PATTERN: Regex = Regex::new(concat!(
        r#"^(?-u:\s)*("#,
        r#"(//.*)"#,
        r#"|([0-9]+)"#,
        r#"|("(?:\\"|\\\\|\\n|[^"])*")"#,
        r#"|[A-Z_a-z][A-Z_a-z0-9]*"#,
        r#"|==|<=|>=|&&|\|\||[[:punct:]]"#,
        r#")?"#
    ))
    .expect("token pattern compiles");
}

/// Pull-based tokenizer with arbitrary lookahead.
///
/// Source is consumed one line at a time, and only when `read` or `peek`
/// needs more tokens than are queued. Every line ends with an `EOL` token.
/// Once input is exhausted, `read` and `peek` keep returning an `EOF` token.
pub struct Lexer {
    reader: Box<dyn BufRead>,
    queue: VecDeque<Token>,
    has_more: bool,
    line_number: u32,
    file: Rc<String>,
    eof: Token,
}

impl Lexer {
    pub fn new(reader: Box<dyn BufRead>, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            reader,
            queue: VecDeque::new(),
            has_more: true,
            line_number: 0,
            eof: MK_TOKEN!(
                TokenKind::EOF,
                String::from("EOF"),
                None,
                Position(0, Rc::clone(&file_name))
            ),
            file: file_name,
        }
    }

    pub fn from_source(source: String, file: Option<String>) -> Lexer {
        Lexer::new(Box::new(Cursor::new(source)), file)
    }

    /// Removes and returns the next token.
    pub fn read(&mut self) -> Result<Token, Error> {
        self.fill_queue(0)?;
        Ok(self.queue.pop_front().unwrap_or_else(|| self.eof.clone()))
    }

    /// Returns the token `i` positions ahead without consuming anything.
    pub fn peek(&mut self, i: usize) -> Result<&Token, Error> {
        self.fill_queue(i)?;
        Ok(self.queue.get(i).unwrap_or(&self.eof))
    }

    pub fn get_position(&self) -> Position {
        Position(self.line_number, Rc::clone(&self.file))
    }

    fn fill_queue(&mut self, i: usize) -> Result<bool, Error> {
        while i >= self.queue.len() {
            if self.has_more {
                self.read_line()?;
            } else {
                return Ok(false);
            }
        }

        Ok(true)
    }

    fn read_line(&mut self) -> Result<(), Error> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line).map_err(|err| {
            Error::new(
                ErrorImpl::ReadError {
                    message: err.to_string(),
                },
                self.get_position(),
            )
        })?;

        if read == 0 {
            self.has_more = false;
            self.eof.position = self.get_position();
            trace!(line = self.line_number, "end of input");
            return Ok(());
        }

        self.line_number += 1;
        let line = line.trim_end_matches(['\n', '\r']);
        let queued_before = self.queue.len();

        let mut pos = 0;
        while pos < line.len() {
            let captures = TOKEN_PATTERN.captures(&line[pos..]);
            let end = captures
                .as_ref()
                .and_then(|c| c.get(0))
                .map(|m| m.end())
                .unwrap_or(0);

            if end == 0 {
                let token = line[pos..].chars().next().map(String::from).unwrap_or_default();
                return Err(Error::new(
                    ErrorImpl::UnrecognisedToken { token },
                    self.get_position(),
                ));
            }

            if let Some(captures) = captures {
                self.add_token(&captures)?;
            }
            pos += end;
        }

        self.queue.push_back(MK_TOKEN!(
            TokenKind::EOL,
            String::from(EOL),
            None,
            self.get_position()
        ));

        debug!(
            line = self.line_number,
            tokens = self.queue.len() - queued_before,
            "line tokenized"
        );
        Ok(())
    }

    fn add_token(&mut self, captures: &Captures) -> Result<(), Error> {
        // Pure whitespace or a comment
        let Some(matched) = captures.get(1) else {
            return Ok(());
        };
        if captures.get(2).is_some() {
            return Ok(());
        }

        let text = matched.as_str();
        let position = self.get_position();

        let token = if captures.get(3).is_some() {
            let value = text.parse::<i64>().map_err(|_| {
                Error::new(
                    ErrorImpl::NumberParseError {
                        token: text.to_string(),
                    },
                    position.clone(),
                )
            })?;
            MK_TOKEN!(TokenKind::Number, value.to_string(), Some(value), position)
        } else if captures.get(4).is_some() {
            MK_TOKEN!(TokenKind::String, to_string_literal(text), None, position)
        } else {
            MK_TOKEN!(TokenKind::Identifier, text.to_string(), None, position)
        };

        self.queue.push_back(token);
        Ok(())
    }
}

/// Strips the quotes and decodes `\"`, `\\` and `\n`. Any other backslash,
/// including one right before the closing quote, is kept as is.
fn to_string_literal(literal: &str) -> String {
    let body = &literal[1..literal.len() - 1];

    let mut result = String::new();
    let mut chars = body.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.peek() {
                Some(&next_ch) if next_ch == '"' || next_ch == '\\' => {
                    result.push(next_ch);
                    chars.next();
                }
                Some('n') => {
                    result.push('\n');
                    chars.next();
                }
                _ => {
                    result.push(ch); // Keep the backslash
                }
            }
        } else {
            result.push(ch);
        }
    }

    result
}

/// Drains `source` into a token vector ending in a single `EOF` token.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lexer = Lexer::from_source(source, file);
    let mut tokens = vec![];

    loop {
        let token = lexer.read()?;
        let done = token.is_eof();
        tokens.push(token);

        if done {
            return Ok(tokens);
        }
    }
}
