use std::fmt;

/// Arithmetic operators understood by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

bijective_enum_map::injective_enum_map! {
    BinOp, char,
    Add <=> '+',
    Sub <=> '-',
    Mul <=> '*',
    Div <=> '/',
    Rem <=> '%',
}

impl BinOp {
    /// Classifies `symbol` by its first character.
    ///
    /// Anything not led by `+`, `-`, `*` or `/` is a remainder, so `%`, `mod`
    /// and `>` all land on [`BinOp::Rem`]. Only an empty symbol is rejected.
    pub fn from_leading_char(symbol: &str) -> Option<Self> {
        let first = symbol.chars().next()?;
        match BinOp::try_from(first) {
            Ok(op) => Some(op),
            Err(()) => Some(BinOp::Rem),
        }
    }

    /// Accepts only the single-character symbols `+ - * / %`.
    pub fn from_exact(symbol: &str) -> Option<Self> {
        let mut chars = symbol.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => BinOp::try_from(c).ok(),
            _ => None,
        }
    }

    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            BinOp::Add => left + right,
            BinOp::Sub => left - right,
            BinOp::Mul => left * right,
            BinOp::Div => left / right,
            // f64 `%` is C fmod: the result takes the sign of `left`.
            BinOp::Rem => left % right,
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}
