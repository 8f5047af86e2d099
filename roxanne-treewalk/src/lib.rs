pub mod interp;
pub mod options;

use roxanne_ast::node::Node;
use roxanne_runtime::{
    env::Environment, error::RuntimeError, eval::Evaluator, value::Value,
};

use crate::interp::TreeWalkInterpreter;

/// Evaluates `node` with default options and a fresh environment.
pub fn evaluate<'src>(
    node: &Node<'src>,
) -> Result<Value<'src>, RuntimeError<'src>> {
    let mut env = Environment::new();
    TreeWalkInterpreter::new().evaluate(node, &mut env)
}
