use roxanne_ast::node::Node;

use crate::{env::Environment, error::RuntimeError, value::Value};

/// Computes the value of a syntax tree node.
///
/// Implementations hold no per-run state: bindings live in the caller-owned
/// [`Environment`], so the same evaluator may be reused across programs.
pub trait Evaluator<'src> {
    fn evaluate(
        &self,
        node: &Node<'src>,
        env: &mut Environment<'src>,
    ) -> Result<Value<'src>, RuntimeError<'src>>;
}
