//! Error types and error handling for the interpreter.
//!
//! This module defines the error types used throughout tokenizing, parsing
//! and evaluation. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants, grouped into lexical, syntactic, semantic and
//!   internal categories
//! - Helpful error messages and suggestions

pub mod errors;
