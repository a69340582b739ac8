use crate::value::Value;
use std::collections::HashMap;

/// Language version exposed to scripts as `_VERSION`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Implementation language exposed to scripts as `_LANG`.
pub const LANG: &str = "rust";

/// Variable bindings visible to one evaluation pass.
///
/// A fresh environment is created for every program and dropped when the
/// program ends; nothing carries over between runs. Scripts cannot assign
/// variables, so the only bindings are `_VERSION` and `_LANG`.
#[derive(Debug, Clone)]
pub struct Environment {
    vars: HashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        let mut vars = HashMap::new();
        vars.insert("_VERSION".to_string(), Value::from(VERSION));
        vars.insert("_LANG".to_string(), Value::from(LANG));
        Self { vars }
    }

    /// Value bound to exactly `name`, if any.
    pub fn get_var(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    #[cfg(test)]
    pub(crate) fn with_var(mut self, name: &str, value: Value) -> Self {
        self.vars.insert(name.to_string(), value);
        self
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
