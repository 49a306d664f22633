use std::collections::HashMap;

use super::value::Value;

/// Name bindings for one run. There is no block scoping: every nested
/// block, `if` and `while` reads and writes the same environment.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    variable_lookup: HashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            variable_lookup: HashMap::new(),
        }
    }

    /// Binds `name`, replacing any previous value.
    pub fn put(&mut self, name: &str, value: Value) {
        self.variable_lookup.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variable_lookup.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variable_lookup.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.variable_lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variable_lookup.is_empty()
    }
}
