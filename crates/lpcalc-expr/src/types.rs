//! Token model and error type for the expression pipeline.

/// Maximum accepted formula length, checked before any scanning happens.
pub const MAX_FORMULA_LENGTH: usize = 500;

/// Binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Op {
    /// Map a source character to an operator, if it is one.
    pub fn from_char(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Add),
            '-' => Some(Op::Sub),
            '*' => Some(Op::Mul),
            '/' => Some(Op::Div),
            '^' => Some(Op::Pow),
            _ => None,
        }
    }

    /// The source character for this operator.
    pub fn symbol(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
            Op::Pow => '^',
        }
    }

    /// Binding strength. Higher binds tighter: `^` > `*` `/` > `+` `-`.
    pub fn precedence(self) -> u8 {
        match self {
            Op::Pow => 4,
            Op::Mul | Op::Div => 3,
            Op::Add | Op::Sub => 2,
        }
    }

    /// Only `^` groups right: `2^3^2` is `2^(3^2)`.
    pub fn is_right_associative(self) -> bool {
        matches!(self, Op::Pow)
    }
}

/// A lexical token. Parentheses only exist in the infix stream; the
/// converter consumes them, so a postfix sequence holds the first three
/// variants only.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Ident(String),
    Op(Op),
    LParen,
    RParen,
}

/// Errors from any pipeline stage. Every stage fails fast on the first
/// problem; callers never see partial results.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExprError {
    #[error("formula must be {MAX_FORMULA_LENGTH} characters or less (got {0})")]
    FormulaTooLong(usize),

    #[error("invalid character '{ch}' at position {pos}")]
    InvalidCharacter { ch: char, pos: usize },

    #[error("invalid number: {0}")]
    InvalidNumber(String),

    #[error("unknown variable: {0}")]
    UnknownVariable(String),

    #[error("mismatched parentheses")]
    MismatchedParens,

    #[error("invalid expression")]
    InvalidExpression,

    #[error("invalid value for {0}")]
    InvalidVariableValue(String),

    #[error("non-finite result")]
    NonFiniteResult,
}
