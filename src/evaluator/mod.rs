//! Tree-walking evaluator.
//!
//! Node definitions know nothing about evaluation. This module attaches an
//! [`Evaluate`](evaluator::Evaluate) implementation to every node variant
//! that has a meaning and dispatches on the node kind:
//!
//! - Values are 64-bit integers and strings
//! - One mutable [`Environment`](environment::Environment) per run
//! - Arithmetic is checked; overflow and division by zero are errors
//! - [`Interpreter`](interpreter::Interpreter) drives a whole source text,
//!   one top-level statement at a time

pub mod environment;
pub mod evaluator;
pub mod interpreter;
pub mod value;

#[cfg(test)]
mod tests;
