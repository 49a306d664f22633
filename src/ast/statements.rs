use crate::MK_LIST_NODE;

use super::ast::{Leaf, Node, NodeKind, NodeWrapper};

/// Block Statement
/// Children are the statements in order.
#[derive(Debug, Clone)]
pub struct BlockStmt {
    pub children: Vec<NodeWrapper>,
}

MK_LIST_NODE!(BlockStmt, NodeKind::BlockStmt);

/// If Statement
/// Children are `[condition, then_block]` or `[condition, then_block, else_block]`.
#[derive(Debug, Clone)]
pub struct IfStmt {
    pub children: Vec<NodeWrapper>,
}

MK_LIST_NODE!(IfStmt, NodeKind::IfStmt);

impl IfStmt {
    pub fn condition(&self) -> Option<&NodeWrapper> {
        self.children.first()
    }

    pub fn then_block(&self) -> Option<&NodeWrapper> {
        self.children.get(1)
    }

    pub fn else_block(&self) -> Option<&NodeWrapper> {
        self.children.get(2)
    }
}

/// While Statement
/// Children are `[condition, body]`.
#[derive(Debug, Clone)]
pub struct WhileStmt {
    pub children: Vec<NodeWrapper>,
}

MK_LIST_NODE!(WhileStmt, NodeKind::WhileStmt);

impl WhileStmt {
    pub fn condition(&self) -> Option<&NodeWrapper> {
        self.children.first()
    }

    pub fn body(&self) -> Option<&NodeWrapper> {
        self.children.get(1)
    }
}

/// Null Statement
/// An empty line or a lone separator.
#[derive(Debug, Clone)]
pub struct NullStmt {
    pub children: Vec<NodeWrapper>,
}

MK_LIST_NODE!(NullStmt, NodeKind::NullStmt);

/// Parameter List
/// One plain leaf per parameter name.
#[derive(Debug, Clone)]
pub struct ParameterList {
    pub children: Vec<NodeWrapper>,
}

MK_LIST_NODE!(ParameterList, NodeKind::ParameterList);

impl ParameterList {
    pub fn name(&self, i: usize) -> Option<&str> {
        leaf_text(self.children.get(i)?)
    }

    pub fn size(&self) -> usize {
        self.children.len()
    }
}

/// Def Statement
/// Children are `[name, parameters, body]`.
#[derive(Debug, Clone)]
pub struct DefStmt {
    pub children: Vec<NodeWrapper>,
}

MK_LIST_NODE!(DefStmt, NodeKind::DefStmt);

impl DefStmt {
    pub fn name(&self) -> Option<&str> {
        leaf_text(self.children.first()?)
    }

    pub fn parameters(&self) -> Option<&NodeWrapper> {
        self.children.get(1)
    }

    pub fn body(&self) -> Option<&NodeWrapper> {
        self.children.get(2)
    }
}

fn leaf_text(node: &NodeWrapper) -> Option<&str> {
    node.as_any()
        .downcast_ref::<Leaf>()
        .map(|leaf| leaf.token.text.as_str())
}
