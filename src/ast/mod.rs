/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Core node trait, wrapper and the generic leaf/list variants
/// - expressions: Literals, names, negation and binary expressions
/// - statements: Block, if, while and null statements
pub mod ast;
pub mod expressions;
pub mod statements;
