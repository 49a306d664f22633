use std::collections::HashMap;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Associativity {
    Left,
    Right,
}

/// Binding strength of one operator. Higher values bind tighter.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Precedence {
    pub value: i32,
    pub associativity: Associativity,
}

impl Precedence {
    /// Whether this operator, met right after an operand that follows an
    /// operator of precedence `prec`, must be absorbed into that operand.
    pub fn binds_tighter_than(&self, prec: i32) -> bool {
        match self.associativity {
            Associativity::Left => prec < self.value,
            Associativity::Right => prec <= self.value,
        }
    }
}

// Keyed by operator spelling
pub type OperatorLookup = HashMap<String, Precedence>;

/// Operator table for the precedence-expression combinator.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Operators {
    lookup: OperatorLookup,
}

impl Operators {
    pub fn new() -> Self {
        Operators {
            lookup: HashMap::new(),
        }
    }

    /// Registers (or replaces) an operator.
    ///
    /// # Arguments
    ///
    /// * `name` - The operator spelling, e.g. `"+"` or `"=="`
    /// * `value` - The precedence; higher binds tighter
    /// * `associativity` - How equal-precedence chains group
    pub fn add(&mut self, name: &str, value: i32, associativity: Associativity) -> &mut Self {
        self.lookup.insert(
            name.to_string(),
            Precedence {
                value,
                associativity,
            },
        );
        self
    }

    pub fn get(&self, name: &str) -> Option<Precedence> {
        self.lookup.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }
}
