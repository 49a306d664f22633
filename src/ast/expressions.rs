use crate::{lexer::tokens::Token, MK_LEAF_NODE, MK_LIST_NODE};

use super::ast::{Leaf, Node, NodeKind, NodeWrapper};

// LITERALS

/// Number Literal
/// Represents an integer literal in the AST.
#[derive(Debug, Clone)]
pub struct NumberLiteral {
    pub token: Token,
}

MK_LEAF_NODE!(NumberLiteral, NodeKind::NumberLiteral);

impl NumberLiteral {
    pub fn value(&self) -> Option<i64> {
        self.token.number
    }
}

/// String Literal
/// Represents a decoded string literal in the AST.
#[derive(Debug, Clone)]
pub struct StringLiteral {
    pub token: Token,
}

MK_LEAF_NODE!(StringLiteral, NodeKind::StringLiteral);

impl StringLiteral {
    pub fn value(&self) -> &str {
        &self.token.text
    }
}

/// Name
/// Represents a reference to a variable in the AST.
#[derive(Debug, Clone)]
pub struct Name {
    pub token: Token,
}

MK_LEAF_NODE!(Name, NodeKind::Name);

impl Name {
    pub fn name(&self) -> &str {
        &self.token.text
    }
}

// COMPLEX

/// Negative Expression
/// `-` applied to a single operand. The `-` itself is discarded by the
/// grammar, so the operand is the only child.
#[derive(Debug, Clone)]
pub struct NegativeExpr {
    pub children: Vec<NodeWrapper>,
}

MK_LIST_NODE!(NegativeExpr, NodeKind::NegativeExpr);

impl NegativeExpr {
    pub fn operand(&self) -> Option<&NodeWrapper> {
        self.children.first()
    }
}

/// Binary Expression
/// Children are `[left, operator, right]`, where the operator is a plain
/// leaf. Assignment is a binary expression with operator `=`.
#[derive(Debug, Clone)]
pub struct BinaryExpr {
    pub children: Vec<NodeWrapper>,
}

MK_LIST_NODE!(BinaryExpr, NodeKind::BinaryExpr);

impl BinaryExpr {
    pub fn left(&self) -> Option<&NodeWrapper> {
        self.children.first()
    }

    pub fn operator(&self) -> Option<&str> {
        self.children
            .get(1)?
            .as_any()
            .downcast_ref::<Leaf>()
            .map(|leaf| leaf.token.text.as_str())
    }

    pub fn right(&self) -> Option<&NodeWrapper> {
        self.children.get(2)
    }
}

/// Arguments
/// The argument list of a call, one child per argument expression.
#[derive(Debug, Clone)]
pub struct Arguments {
    pub children: Vec<NodeWrapper>,
}

MK_LIST_NODE!(Arguments, NodeKind::Arguments);

impl Arguments {
    pub fn size(&self) -> usize {
        self.children.len()
    }
}
