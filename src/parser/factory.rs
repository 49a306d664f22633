//! Node-factory resolution.
//!
//! Every node kind registers how it is built: from a single token (leaves)
//! or from a list of children (composites). Rules resolve their factory
//! once, when the grammar is built, and keep the function pointer for every
//! later parse. Asking for a shape a kind does not support is an authoring
//! bug and fails right there.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::{
        ast::{ArgShape, Leaf, List, NodeKind, NodeWrapper},
        expressions::{Arguments, BinaryExpr, Name, NegativeExpr, NumberLiteral, StringLiteral},
        statements::{BlockStmt, DefStmt, IfStmt, NullStmt, ParameterList, WhileStmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::Token,
    Position,
};

pub type TokenFactory = fn(Token) -> NodeWrapper;
pub type ListFactory = fn(Vec<NodeWrapper>) -> NodeWrapper;

lazy_static! {
    static ref TOKEN_FACTORY_LOOKUP: HashMap<NodeKind, TokenFactory> = {
        let mut map: HashMap<NodeKind, TokenFactory> = HashMap::new();
        map.insert(NodeKind::Leaf, Leaf::create);
        map.insert(NodeKind::NumberLiteral, NumberLiteral::create);
        map.insert(NodeKind::StringLiteral, StringLiteral::create);
        map.insert(NodeKind::Name, Name::create);
        map
    };
    static ref LIST_FACTORY_LOOKUP: HashMap<NodeKind, ListFactory> = {
        let mut map: HashMap<NodeKind, ListFactory> = HashMap::new();
        map.insert(NodeKind::List, List::create);
        map.insert(NodeKind::NegativeExpr, NegativeExpr::create);
        map.insert(NodeKind::BinaryExpr, BinaryExpr::create);
        map.insert(NodeKind::BlockStmt, BlockStmt::create);
        map.insert(NodeKind::IfStmt, IfStmt::create);
        map.insert(NodeKind::WhileStmt, WhileStmt::create);
        map.insert(NodeKind::NullStmt, NullStmt::create);
        map.insert(NodeKind::Arguments, Arguments::create);
        map.insert(NodeKind::ParameterList, ParameterList::create);
        map.insert(NodeKind::DefStmt, DefStmt::create);
        map
    };
}

/// Factory for terminal matchers. No kind means a plain `Leaf`.
pub fn resolve_token_factory(kind: Option<NodeKind>) -> Result<TokenFactory, Error> {
    let kind = kind.unwrap_or(NodeKind::Leaf);

    TOKEN_FACTORY_LOOKUP
        .get(&kind)
        .copied()
        .ok_or_else(|| missing_factory(kind, ArgShape::FromToken))
}

/// Factory for rules and expressions. No kind means `flatten`.
pub fn resolve_list_factory(kind: Option<NodeKind>) -> Result<ListFactory, Error> {
    match kind {
        None => Ok(flatten),
        Some(kind) => LIST_FACTORY_LOOKUP
            .get(&kind)
            .copied()
            .ok_or_else(|| missing_factory(kind, ArgShape::FromChildren)),
    }
}

/// The generic children factory: a single child is returned as is, any
/// other count is wrapped in a generic `List`.
pub fn flatten(mut children: Vec<NodeWrapper>) -> NodeWrapper {
    if children.len() == 1 {
        if let Some(only) = children.pop() {
            return only;
        }
    }

    List::create(children)
}

fn missing_factory(kind: NodeKind, shape: ArgShape) -> Error {
    Error::new(
        ErrorImpl::MissingFactory {
            kind: kind.to_string(),
            shape: shape.to_string(),
        },
        Position::null(),
    )
}
