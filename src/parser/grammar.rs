//! Grammar authoring API and rule-driven parsing.
//!
//! A [`Grammar`] owns every rule in an arena and hands out [`RuleId`]s, so
//! rules can refer to each other (and to themselves) before they are filled
//! in. Rules are edited through [`RuleBuilder`], which offers the
//! combinators:
//!
//! - Terminals: `number`, `identifier`, `string`, `token`, `sep`
//! - Nonterminals: `ast`, `or`, `maybe`, `option`, `repeat`
//! - Operator precedence: `expression`
//! - Differential extension: `insert_choice`
//!
//! Parsing only needs `&Grammar`, so a built grammar can be shared by any
//! number of parse sessions. All per-parse state lives in the [`Lexer`].

use std::collections::HashSet;

use tracing::trace;

use crate::{
    ast::ast::{Leaf, NodeKind, NodeWrapper},
    errors::errors::Error,
    lexer::lexer::Lexer,
};

use super::{
    elements::{Element, TokenClass},
    factory::{flatten, resolve_list_factory, resolve_token_factory, ListFactory, TokenFactory},
    lookups::Operators,
};

/// Handle to a rule inside the grammar that created it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RuleId(usize);

/// An ordered list of elements plus the factory that turns their combined
/// output into one node.
#[derive(Clone, Debug)]
pub struct Rule {
    elements: Vec<Element>,
    factory: ListFactory,
}

impl Rule {
    fn new(factory: ListFactory) -> Self {
        Rule {
            elements: vec![],
            factory,
        }
    }

    pub fn get_elements(&self) -> &[Element] {
        &self.elements
    }

    /// Decided by the first element alone; an empty rule always matches.
    pub fn is_match(&self, grammar: &Grammar, lexer: &mut Lexer) -> Result<bool, Error> {
        match self.elements.first() {
            Some(element) => element.is_match(grammar, lexer),
            None => Ok(true),
        }
    }

    pub fn parse(&self, grammar: &Grammar, lexer: &mut Lexer) -> Result<NodeWrapper, Error> {
        let mut results = vec![];

        for element in &self.elements {
            element.parse(grammar, lexer, &mut results)?;
        }

        Ok((self.factory)(results))
    }
}

#[derive(Debug, Default)]
pub struct Grammar {
    rules: Vec<Rule>,
}

impl Grammar {
    pub fn new() -> Self {
        Grammar { rules: vec![] }
    }

    fn push(&mut self, rule: Rule) -> RuleId {
        self.rules.push(rule);
        RuleId(self.rules.len() - 1)
    }

    /// Declares an empty rule with the generic flattening factory.
    pub fn rule(&mut self) -> RuleId {
        self.push(Rule::new(flatten))
    }

    /// Declares an empty rule that builds nodes of `kind`.
    ///
    /// Fails if `kind` cannot be built from a child list.
    pub fn rule_of(&mut self, kind: NodeKind) -> Result<RuleId, Error> {
        let factory = resolve_list_factory(Some(kind))?;
        Ok(self.push(Rule::new(factory)))
    }

    /// Declares a new rule starting as a copy of `base`'s elements and
    /// factory. Extending the copy leaves `base` untouched.
    pub fn copy_of(&mut self, base: RuleId) -> RuleId {
        let rule = self.get_rule(base).clone();
        self.push(rule)
    }

    /// Opens `id` for editing.
    pub fn edit(&mut self, id: RuleId) -> RuleBuilder<'_> {
        RuleBuilder { grammar: self, id }
    }

    pub fn get_rule(&self, id: RuleId) -> &Rule {
        &self.rules[id.0]
    }

    fn get_rule_mut(&mut self, id: RuleId) -> &mut Rule {
        &mut self.rules[id.0]
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Whether rule `id` can start at the current token.
    pub fn is_match(&self, id: RuleId, lexer: &mut Lexer) -> Result<bool, Error> {
        self.get_rule(id).is_match(self, lexer)
    }

    /// Parses one `id` from the lexer.
    pub fn parse(&self, id: RuleId, lexer: &mut Lexer) -> Result<NodeWrapper, Error> {
        trace!(rule = id.0, "enter rule");
        self.get_rule(id).parse(self, lexer)
    }
}

/// Appends elements to one rule of a grammar.
///
/// Every combinator consumes and returns the builder so calls chain. The
/// `_as` variants attach a node kind and fail if that kind has no factory of
/// the needed shape.
#[derive(Debug)]
pub struct RuleBuilder<'g> {
    grammar: &'g mut Grammar,
    id: RuleId,
}

impl RuleBuilder<'_> {
    pub fn id(&self) -> RuleId {
        self.id
    }

    fn push(self, element: Element) -> Self {
        self.grammar.get_rule_mut(self.id).elements.push(element);
        self
    }

    fn terminal(self, class: TokenClass, factory: TokenFactory) -> Self {
        self.push(Element::Token { class, factory })
    }

    /// Drops every element, keeping the factory.
    pub fn reset(self) -> Self {
        self.grammar.get_rule_mut(self.id).elements.clear();
        self
    }

    pub fn number(self) -> Self {
        self.terminal(TokenClass::Number, Leaf::create)
    }

    pub fn number_as(self, kind: NodeKind) -> Result<Self, Error> {
        let factory = resolve_token_factory(Some(kind))?;
        Ok(self.terminal(TokenClass::Number, factory))
    }

    /// Any identifier not in `reserved`.
    pub fn identifier(self, reserved: &HashSet<String>) -> Self {
        self.terminal(reserved_identifier(reserved), Leaf::create)
    }

    pub fn identifier_as(self, kind: NodeKind, reserved: &HashSet<String>) -> Result<Self, Error> {
        let factory = resolve_token_factory(Some(kind))?;
        Ok(self.terminal(reserved_identifier(reserved), factory))
    }

    pub fn string(self) -> Self {
        self.terminal(TokenClass::String, Leaf::create)
    }

    pub fn string_as(self, kind: NodeKind) -> Result<Self, Error> {
        let factory = resolve_token_factory(Some(kind))?;
        Ok(self.terminal(TokenClass::String, factory))
    }

    /// One of `spellings`, kept as a leaf.
    pub fn token(self, spellings: &[&str]) -> Self {
        self.push(Element::Literal {
            spellings: spellings.iter().map(|s| s.to_string()).collect(),
            discard: false,
        })
    }

    /// One of `spellings`, consumed and dropped.
    pub fn sep(self, spellings: &[&str]) -> Self {
        self.push(Element::Literal {
            spellings: spellings.iter().map(|s| s.to_string()).collect(),
            discard: true,
        })
    }

    pub fn ast(self, rule: RuleId) -> Self {
        self.push(Element::Tree(rule))
    }

    pub fn or(self, candidates: &[RuleId]) -> Self {
        self.push(Element::Or(candidates.to_vec()))
    }

    /// `rule`, or else an empty rule with `rule`'s factory.
    pub fn maybe(self, rule: RuleId) -> Self {
        let factory = self.grammar.get_rule(rule).factory;
        let empty = self.grammar.push(Rule::new(factory));
        self.push(Element::Or(vec![rule, empty]))
    }

    /// Zero or one `rule`.
    pub fn option(self, rule: RuleId) -> Self {
        self.push(Element::Repeat {
            rule,
            only_once: true,
        })
    }

    /// Zero or more `rule`.
    pub fn repeat(self, rule: RuleId) -> Self {
        self.push(Element::Repeat {
            rule,
            only_once: false,
        })
    }

    /// Binary operators from `operators` between `factor`s, built with the
    /// flattening factory.
    pub fn expression(self, factor: RuleId, operators: &Operators) -> Self {
        self.push(Element::Expr {
            factor,
            operators: operators.clone(),
            factory: flatten,
        })
    }

    /// Binary operators from `operators` between `factor`s, each one built
    /// as a node of `kind`.
    pub fn expression_as(self, kind: NodeKind, factor: RuleId, operators: &Operators) -> Result<Self, Error> {
        let factory = resolve_list_factory(Some(kind))?;
        Ok(self.push(Element::Expr {
            factor,
            operators: operators.clone(),
            factory,
        }))
    }

    /// Makes `rule` the first alternative of this rule.
    ///
    /// If the rule already starts with an alternation, `rule` is prepended
    /// to it. Otherwise the current rule body moves into a fresh rule and
    /// this rule becomes `or(rule, <old body>)`.
    pub fn insert_choice(self, rule: RuleId) -> Self {
        if let Some(Element::Or(candidates)) = self.grammar.get_rule_mut(self.id).elements.first_mut() {
            candidates.insert(0, rule);
            return self;
        }

        let otherwise = self.grammar.copy_of(self.id);
        let current = self.grammar.get_rule_mut(self.id);
        current.elements = vec![Element::Or(vec![rule, otherwise])];
        current.factory = flatten;
        self
    }
}

fn reserved_identifier(reserved: &HashSet<String>) -> TokenClass {
    TokenClass::Identifier {
        reserved: reserved.clone(),
    }
}
