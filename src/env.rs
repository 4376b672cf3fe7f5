use std::collections::BTreeMap;

use crate::value::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Binding {
    Scalar(Value),
    List(Vec<Value>),
}

/// The evaluator's name store. A name holds at most one binding at a time,
/// either a scalar slot or a list slot.
#[derive(Debug, Default)]
pub struct SymbolTable {
    bindings: BTreeMap<String, Binding>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_defined(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn is_list(&self, name: &str) -> bool {
        matches!(self.bindings.get(name), Some(Binding::List(_)))
    }

    /// Binds `name` to a scalar, replacing any existing scalar or list
    /// binding. Scalars may change type on reassignment.
    pub fn set_scalar(&mut self, name: &str, value: Value) {
        self.bindings.insert(name.to_string(), Binding::Scalar(value));
    }

    pub fn get_scalar(&self, name: &str) -> Option<Value> {
        match self.bindings.get(name) {
            Some(Binding::Scalar(v)) => Some(*v),
            _ => None,
        }
    }

    /// Creates an empty list. Returns false when the name is already bound.
    pub fn declare_list(&mut self, name: &str) -> bool {
        if self.bindings.contains_key(name) {
            return false;
        }
        self.bindings
            .insert(name.to_string(), Binding::List(Vec::new()));
        true
    }

    pub fn get_list(&self, name: &str) -> Option<&[Value]> {
        match self.bindings.get(name) {
            Some(Binding::List(items)) => Some(items),
            _ => None,
        }
    }

    pub fn get_list_mut(&mut self, name: &str) -> Option<&mut Vec<Value>> {
        match self.bindings.get_mut(name) {
            Some(Binding::List(items)) => Some(items),
            _ => None,
        }
    }
}
