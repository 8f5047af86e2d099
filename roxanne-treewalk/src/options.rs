use roxanne_ast::op::BinOp;

/// How binary operator symbols are mapped onto [`BinOp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperatorMatching {
    /// Match on the first character only. Anything not led by `+ - * /`
    /// evaluates as a remainder.
    #[default]
    LeadingChar,
    /// Only the exact symbols `+ - * / %` are accepted.
    Exact,
}

impl OperatorMatching {
    pub fn classify(self, symbol: &str) -> Option<BinOp> {
        match self {
            OperatorMatching::LeadingChar => BinOp::from_leading_char(symbol),
            OperatorMatching::Exact => BinOp::from_exact(symbol),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvalOptions {
    pub operator_matching: OperatorMatching,
}

impl EvalOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_operator_matching(
        mut self,
        matching: OperatorMatching,
    ) -> Self {
        self.operator_matching = matching;
        self
    }
}
