//! Reference grammar of the little language.
//!
//! Built entirely through the combinator API of [`crate::parser`], so it
//! doubles as the main consumer of that API. The evaluator and the
//! interpreter session run on top of it. [`func`] extends the base grammar
//! in place with function definitions and calls.

pub mod basic;
pub mod func;
