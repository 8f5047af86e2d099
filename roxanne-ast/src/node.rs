use crate::span::Span;

/// A syntax tree node as handed over by the parser.
///
/// Operator precedence is already resolved; the evaluator only reads the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<'src> {
    pub kind: NodeKind<'src>,
    pub span: Span,
}

impl<'src> Node<'src> {
    pub fn new(kind: NodeKind<'src>, span: Span) -> Self {
        Self { kind, span }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind<'src> {
    Program(Vec<Node<'src>>),
    Block(Vec<Node<'src>>),
    Conditional {
        condition: Box<Node<'src>>,
        then_branch: Box<Node<'src>>,
        else_branch: Option<Box<Node<'src>>>,
    },
    Function {
        name: Option<Identifier<'src>>,
        params: Vec<Identifier<'src>>,
        body: Box<Node<'src>>,
    },
    Expression(Box<Node<'src>>),
    /// `symbol` is the operator text exactly as it appeared in the source.
    Binary {
        left: Box<Node<'src>>,
        symbol: &'src str,
        right: Box<Node<'src>>,
    },
    Assignment {
        target: Box<Node<'src>>,
        value: Box<Node<'src>>,
    },
    Array(Vec<Node<'src>>),
    Literal(Literal<'src>),
    /// Parts are concatenated in order.
    StringTemplate(Vec<Node<'src>>),
    Identifier(Identifier<'src>),
}

impl NodeKind<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Program(_) => "program",
            NodeKind::Block(_) => "block",
            NodeKind::Conditional { .. } => "conditional",
            NodeKind::Function { .. } => "function",
            NodeKind::Expression(_) => "expression",
            NodeKind::Binary { .. } => "binary",
            NodeKind::Assignment { .. } => "assignment",
            NodeKind::Array(_) => "array",
            NodeKind::Literal(Literal::Bool(_)) => "boolean",
            NodeKind::Literal(Literal::Number(_)) => "number",
            NodeKind::Literal(Literal::String(_)) => "string",
            NodeKind::StringTemplate(_) => "template",
            NodeKind::Identifier(_) => "identifier",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identifier<'src> {
    pub symbol: &'src str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal<'src> {
    Bool(bool),
    Number(f64),
    String(&'src str),
}
