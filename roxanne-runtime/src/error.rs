use roxanne_ast::span::Span;
use thiserror::Error;

use crate::value::ValueKind;

#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} at {span}")]
pub struct RuntimeError<'src> {
    pub kind: RuntimeErrorKind<'src>,
    pub span: Span,
}

impl<'src> RuntimeError<'src> {
    pub fn new(kind: RuntimeErrorKind<'src>, span: Span) -> Self {
        Self { kind, span }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeErrorKind<'src> {
    #[error("operator `{symbol}` expects numbers, found {left} and {right}")]
    TypeMismatch {
        symbol: &'src str,
        left: ValueKind,
        right: ValueKind,
    },
    #[error("unknown operator `{0}`")]
    UnknownOperator(&'src str),
    #[error("undefined variable `{0}`")]
    UndefinedVariable(&'src str),
    #[error("cannot assign to {0} node")]
    InvalidAssignmentTarget(&'static str),
    #[error("cannot interpolate {0} into a string template")]
    UnsupportedTemplatePart(ValueKind),
}
