//! Utility macros for the interpreter.
//!
//! This module defines helper macros used throughout the crate:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_LEAF_NODE!` - Implements `Node` and a token factory for a leaf variant
//! - `MK_LIST_NODE!` - Implements `Node` and a children factory for a list variant
//!
//! These macros reduce boilerplate in the lexer and the AST definitions.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$text` - The token's text
/// * `$number` - `Some(value)` for number tokens, `None` otherwise
/// * `$position` - The source position
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), Some(42), position);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $text:expr, $number:expr, $position:expr) => {
        Token {
            kind: $kind,
            text: $text,
            number: $number,
            position: $position,
        }
    };
}

/// Implements `Node` for a struct holding a single `token: Token`, plus a
/// `create(Token)` constructor registered as its token factory.
///
/// # Example
///
/// ```ignore
/// #[derive(Debug, Clone)]
/// pub struct Name { pub token: Token }
///
/// MK_LEAF_NODE!(Name, NodeKind::Name);
/// ```
#[macro_export]
macro_rules! MK_LEAF_NODE {
    ($name:ident, $kind:expr) => {
        impl $name {
            pub fn create(token: $crate::lexer::tokens::Token) -> $crate::ast::ast::NodeWrapper {
                $crate::ast::ast::NodeWrapper::new($name { token })
            }
        }

        impl $crate::ast::ast::Node for $name {
            fn get_node_kind(&self) -> $crate::ast::ast::NodeKind {
                $kind
            }
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
            fn clone_wrapper(&self) -> $crate::ast::ast::NodeWrapper {
                $crate::ast::ast::NodeWrapper::new(self.clone())
            }
            fn child(&self, _i: usize) -> Option<&$crate::ast::ast::NodeWrapper> {
                None
            }
            fn num_children(&self) -> usize {
                0
            }
            fn children(&self) -> std::slice::Iter<'_, $crate::ast::ast::NodeWrapper> {
                <&[$crate::ast::ast::NodeWrapper]>::default().iter()
            }
            fn location(&self) -> Option<$crate::Position> {
                $crate::ast::ast::leaf_location(&self.token)
            }
            fn describe(&self) -> String {
                self.token.text.clone()
            }
        }
    };
}

/// Implements `Node` for a struct holding `children: Vec<NodeWrapper>`, plus
/// a `create(Vec<NodeWrapper>)` constructor registered as its children
/// factory.
#[macro_export]
macro_rules! MK_LIST_NODE {
    ($name:ident, $kind:expr) => {
        impl $name {
            pub fn create(
                children: Vec<$crate::ast::ast::NodeWrapper>,
            ) -> $crate::ast::ast::NodeWrapper {
                $crate::ast::ast::NodeWrapper::new($name { children })
            }
        }

        impl $crate::ast::ast::Node for $name {
            fn get_node_kind(&self) -> $crate::ast::ast::NodeKind {
                $kind
            }
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
            fn clone_wrapper(&self) -> $crate::ast::ast::NodeWrapper {
                $crate::ast::ast::NodeWrapper::new(self.clone())
            }
            fn child(&self, i: usize) -> Option<&$crate::ast::ast::NodeWrapper> {
                self.children.get(i)
            }
            fn num_children(&self) -> usize {
                self.children.len()
            }
            fn children(&self) -> std::slice::Iter<'_, $crate::ast::ast::NodeWrapper> {
                self.children.iter()
            }
            fn location(&self) -> Option<$crate::Position> {
                $crate::ast::ast::list_location(&self.children)
            }
            fn describe(&self) -> String {
                $crate::ast::ast::list_describe(&self.children)
            }
        }
    };
}
