use std::collections::HashMap;

use crate::{error::RuntimeErrorKind, value::Value};

/// Name bindings for one program run.
///
/// Owned by whoever drives evaluation and passed down explicitly.
#[derive(Debug, Clone, Default)]
pub struct Environment<'src> {
    values: HashMap<&'src str, Value<'src>>,
}

impl<'src> Environment<'src> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name`, replacing any earlier value.
    pub fn define(&mut self, name: &'src str, value: Value<'src>) {
        tracing::trace!(variable = name, kind = %value.kind(), "define");
        self.values.insert(name, value);
    }

    pub fn get(
        &self,
        name: &'src str,
    ) -> Result<Value<'src>, RuntimeErrorKind<'src>> {
        self.values
            .get(name)
            .cloned()
            .ok_or(RuntimeErrorKind::UndefinedVariable(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn define_then_get() {
        let mut env = Environment::new();
        env.define("a", Value::Number(10.0));
        assert_eq!(env.get("a"), Ok(Value::Number(10.0)));
    }

    #[test]
    fn redefinition_overwrites() {
        let mut env = Environment::new();
        env.define("a", Value::Number(10.0));
        env.define("a", Value::Boolean(true));
        assert_eq!(env.get("a"), Ok(Value::Boolean(true)));
    }

    #[test]
    fn missing_name_is_undefined() {
        let env = Environment::new();
        assert_eq!(
            env.get("nope"),
            Err(RuntimeErrorKind::UndefinedVariable("nope"))
        );
    }
}
