use std::{any::Any, fmt::Debug, fmt::Display, ops::Deref, slice::Iter};

use crate::{lexer::tokens::Token, Position, MK_LEAF_NODE, MK_LIST_NODE};

/// Node Kinds
///
/// The closed set of node variants a grammar can build. `Leaf` and `List`
/// are the generic variants used when a rule declares no kind.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum NodeKind {
    Leaf,
    List,
    NumberLiteral,
    StringLiteral,
    Name,
    NegativeExpr,
    BinaryExpr,
    BlockStmt,
    IfStmt,
    WhileStmt,
    NullStmt,
    Arguments,
    ParameterList,
    DefStmt,
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// What a node factory is built from.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum ArgShape {
    FromToken,
    FromChildren,
}

impl Display for ArgShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Node Trait
///
/// Structural behaviour shared by every AST node. Evaluation lives in the
/// evaluator, not here.
pub trait Node: Debug {
    /// Returns the kind of the node.
    fn get_node_kind(&self) -> NodeKind;
    /// Type conversion purposes - used with `.downcast_ref<T>()`
    fn as_any(&self) -> &dyn Any;
    /// Clones the node into a NodeWrapper.
    /// Clone cannot be derived for certain trait objects, so this method is necessary.
    fn clone_wrapper(&self) -> NodeWrapper;
    /// The `i`th child, if any. Leaves have none.
    fn child(&self, i: usize) -> Option<&NodeWrapper>;
    fn num_children(&self) -> usize;
    fn children(&self) -> Iter<'_, NodeWrapper>;
    /// Where the node came from. A list asks its children in order.
    fn location(&self) -> Option<Position>;
    /// Parenthesized rendering: a leaf is its token text, a list is
    /// `(` children separated by spaces `)`.
    fn describe(&self) -> String;
}

/// Node Wrapper
///
/// A wrapper that allows for any node kind to be stored with helper methods
#[derive(Debug)]
pub struct NodeWrapper(Box<dyn Node>);

impl NodeWrapper {
    pub fn new<T: Node + 'static>(node: T) -> Self {
        NodeWrapper(Box::new(node))
    }

    /// True for the generic empty list, which stands for "nothing matched".
    pub fn is_empty_list(&self) -> bool {
        self.get_node_kind() == NodeKind::List && self.num_children() == 0
    }
}

impl Deref for NodeWrapper {
    type Target = Box<dyn Node>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Node for NodeWrapper {
    fn get_node_kind(&self) -> NodeKind {
        self.0.get_node_kind()
    }
    fn as_any(&self) -> &dyn Any {
        self.0.as_any()
    }
    fn clone_wrapper(&self) -> NodeWrapper {
        self.0.clone_wrapper()
    }
    fn child(&self, i: usize) -> Option<&NodeWrapper> {
        self.0.child(i)
    }
    fn num_children(&self) -> usize {
        self.0.num_children()
    }
    fn children(&self) -> Iter<'_, NodeWrapper> {
        self.0.children()
    }
    fn location(&self) -> Option<Position> {
        self.0.location()
    }
    fn describe(&self) -> String {
        self.0.describe()
    }
}

impl Clone for NodeWrapper {
    fn clone(&self) -> Self {
        self.clone_wrapper()
    }
}

impl Display for NodeWrapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}

impl<'a> IntoIterator for &'a NodeWrapper {
    type Item = &'a NodeWrapper;
    type IntoIter = Iter<'a, NodeWrapper>;

    fn into_iter(self) -> Self::IntoIter {
        self.children()
    }
}

/// Leaf
/// A single token with no further meaning, e.g. an operator or keyword.
#[derive(Debug, Clone)]
pub struct Leaf {
    pub token: Token,
}

MK_LEAF_NODE!(Leaf, NodeKind::Leaf);

/// List
/// An ordered group of children with no further meaning.
#[derive(Debug, Clone)]
pub struct List {
    pub children: Vec<NodeWrapper>,
}

MK_LIST_NODE!(List, NodeKind::List);

/// Shared by every leaf variant.
pub(crate) fn leaf_location(token: &Token) -> Option<Position> {
    Some(token.position.clone())
}

/// Shared by every list variant.
pub(crate) fn list_location(children: &[NodeWrapper]) -> Option<Position> {
    children.iter().find_map(|child| child.location())
}

pub(crate) fn list_describe(children: &[NodeWrapper]) -> String {
    let parts: Vec<String> = children.iter().map(|child| child.describe()).collect();
    format!("({})", parts.join(" "))
}
