use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone)]
#[error("{internal_error} ({position})")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Which of the disjoint failure families this error belongs to.
    pub fn get_category(&self) -> ErrorCategory {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. }
            | ErrorImpl::NumberParseError { .. }
            | ErrorImpl::ReadError { .. } => ErrorCategory::Lexical,
            ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::UnexpectedTokenDetailed { .. }
            | ErrorImpl::NoMatchingAlternative { .. } => ErrorCategory::Syntactic,
            ErrorImpl::UndefinedName { .. }
            | ErrorImpl::BadOperandType { .. }
            | ErrorImpl::BadOperator { .. }
            | ErrorImpl::BadAssignment
            | ErrorImpl::CannotEvaluate { .. }
            | ErrorImpl::DivisionByZero
            | ErrorImpl::ArithmeticOverflow { .. } => ErrorCategory::Semantic,
            ErrorImpl::MissingFactory { .. } | ErrorImpl::MalformedNode { .. } => {
                ErrorCategory::Internal
            }
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::ReadError { .. } => "ReadError",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::NoMatchingAlternative { .. } => "NoMatchingAlternative",
            ErrorImpl::UndefinedName { .. } => "UndefinedName",
            ErrorImpl::BadOperandType { .. } => "BadOperandType",
            ErrorImpl::BadOperator { .. } => "BadOperator",
            ErrorImpl::BadAssignment => "BadAssignment",
            ErrorImpl::CannotEvaluate { .. } => "CannotEvaluate",
            ErrorImpl::DivisionByZero => "DivisionByZero",
            ErrorImpl::ArithmeticOverflow { .. } => "ArithmeticOverflow",
            ErrorImpl::MissingFactory { .. } => "MissingFactory",
            ErrorImpl::MalformedNode { .. } => "MalformedNode",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::ReadError { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`", token))
            }
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::NoMatchingAlternative { token } => ErrorTip::Suggestion(format!(
                "No rule can start with `{}`",
                token
            )),
            ErrorImpl::UndefinedName { name } => {
                ErrorTip::Suggestion(format!("Name `{}` is read before it is assigned", name))
            }
            ErrorImpl::BadOperandType { operator } => ErrorTip::Suggestion(format!(
                "Operator `{}` only accepts integer operands here",
                operator
            )),
            ErrorImpl::BadOperator { operator } => {
                ErrorTip::Suggestion(format!("Operator `{}` is not supported", operator))
            }
            ErrorImpl::BadAssignment => ErrorTip::Suggestion(String::from(
                "Only a plain name can appear on the left of `=`",
            )),
            ErrorImpl::CannotEvaluate { .. } => ErrorTip::None,
            ErrorImpl::DivisionByZero => ErrorTip::None,
            ErrorImpl::ArithmeticOverflow { .. } => ErrorTip::Suggestion(String::from(
                "The result does not fit in a 64-bit integer",
            )),
            ErrorImpl::MissingFactory { .. } | ErrorImpl::MalformedNode { .. } => {
                ErrorTip::Suggestion(String::from("This is a bug in the grammar definition"))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lexical,
    Syntactic,
    Semantic,
    Internal,
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    // Lexical
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("failed to read source: {message}")]
    ReadError { message: String },

    // Syntactic
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("no alternative matches token {token:?}")]
    NoMatchingAlternative { token: String },

    // Semantic
    #[error("undefined name: {name}")]
    UndefinedName { name: String },
    #[error("bad operand type for {operator}")]
    BadOperandType { operator: String },
    #[error("bad operator: {operator}")]
    BadOperator { operator: String },
    #[error("bad assignment")]
    BadAssignment,
    #[error("cannot evaluate: {node}")]
    CannotEvaluate { node: String },
    #[error("division by zero")]
    DivisionByZero,
    #[error("arithmetic overflow in {operator}")]
    ArithmeticOverflow { operator: String },

    // Internal
    #[error("no {shape} factory registered for node kind {kind}")]
    MissingFactory { kind: String, shape: String },
    #[error("malformed {kind} node")]
    MalformedNode { kind: String },
}
