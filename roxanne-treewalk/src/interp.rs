use roxanne_ast::{
    node::{Identifier, Literal, Node, NodeKind},
    span::Span,
};
use roxanne_runtime::{
    env::Environment,
    error::{RuntimeError, RuntimeErrorKind},
    eval::Evaluator,
    stringify::GeneralNumber,
    value::Value,
};

use crate::options::EvalOptions;

#[derive(Debug, Clone, Default)]
pub struct TreeWalkInterpreter {
    options: EvalOptions,
}

impl TreeWalkInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: EvalOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EvalOptions {
        &self.options
    }

    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(kind = node.kind.name())
    )]
    fn eval<'src>(
        &self,
        node: &Node<'src>,
        env: &mut Environment<'src>,
    ) -> Result<Value<'src>, RuntimeError<'src>> {
        let value = match &node.kind {
            NodeKind::Program(stmts) => {
                let mut last = Value::None;
                for stmt in stmts {
                    last = self.eval(stmt, env)?;
                }
                last
            }
            // Control flow is not executed.
            NodeKind::Block(_)
            | NodeKind::Conditional { .. }
            | NodeKind::Function { .. } => Value::None,
            NodeKind::Expression(inner) => self.eval(inner, env)?,
            NodeKind::Binary {
                left,
                symbol,
                right,
            } => self.binary_expr(left, *symbol, right, node.span, env)?,
            NodeKind::Assignment { target, value } => {
                let NodeKind::Identifier(Identifier { symbol }) = &target.kind
                else {
                    return Err(fail(
                        RuntimeErrorKind::InvalidAssignmentTarget(
                            target.kind.name(),
                        ),
                        target.span,
                    ));
                };
                let value = self.eval(value, env)?;
                env.define(*symbol, value.clone());
                value
            }
            NodeKind::Array(elements) => Value::Array(
                elements
                    .iter()
                    .map(|element| self.eval(element, env))
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            NodeKind::Literal(literal) => match literal {
                Literal::Bool(b) => Value::Boolean(*b),
                Literal::Number(n) => Value::Number(*n),
                Literal::String(s) => Value::from(*s),
            },
            NodeKind::StringTemplate(parts) => self.template(parts, env)?,
            NodeKind::Identifier(Identifier { symbol }) => {
                env.get(*symbol).map_err(|kind| fail(kind, node.span))?
            }
        };

        Ok(value)
    }

    fn binary_expr<'src>(
        &self,
        left: &Node<'src>,
        symbol: &'src str,
        right: &Node<'src>,
        span: Span,
        env: &mut Environment<'src>,
    ) -> Result<Value<'src>, RuntimeError<'src>> {
        let (left, right) = (self.eval(left, env)?, self.eval(right, env)?);

        let op = self
            .options
            .operator_matching
            .classify(symbol)
            .ok_or_else(|| {
                fail(RuntimeErrorKind::UnknownOperator(symbol), span)
            })?;

        match (left.as_number(), right.as_number()) {
            (Some(l), Some(r)) => {
                tracing::trace!(%op, left = l, right = r, "apply");
                Ok(Value::Number(op.apply(l, r)))
            }
            _ => Err(fail(
                RuntimeErrorKind::TypeMismatch {
                    symbol,
                    left: left.kind(),
                    right: right.kind(),
                },
                span,
            )),
        }
    }

    fn template<'src>(
        &self,
        parts: &[Node<'src>],
        env: &mut Environment<'src>,
    ) -> Result<Value<'src>, RuntimeError<'src>> {
        let mut buffer = String::new();

        for part in parts {
            match self.eval(part, env)? {
                Value::String(s) => buffer.push_str(&s),
                Value::Boolean(b) => {
                    buffer.push_str(if b { "true" } else { "false" })
                }
                Value::Number(n) => {
                    buffer.push_str(&GeneralNumber(n).to_string())
                }
                other => {
                    return Err(fail(
                        RuntimeErrorKind::UnsupportedTemplatePart(other.kind()),
                        part.span,
                    ));
                }
            }
        }

        Ok(Value::from(buffer))
    }
}

impl<'src> Evaluator<'src> for TreeWalkInterpreter {
    fn evaluate(
        &self,
        node: &Node<'src>,
        env: &mut Environment<'src>,
    ) -> Result<Value<'src>, RuntimeError<'src>> {
        self.eval(node, env)
    }
}

fn fail<'src>(kind: RuntimeErrorKind<'src>, span: Span) -> RuntimeError<'src> {
    tracing::debug!(%kind, %span, "evaluation failed");
    RuntimeError::new(kind, span)
}
