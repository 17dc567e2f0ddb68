use exprlex::{LexError, TokenKind};
use thiserror::Error;

/// Everything that can go wrong evaluating an expression. Any error
/// rejects the whole expression.
#[derive(Error, Clone, PartialEq, Debug)]
pub enum EvalError {
    #[error("{0}")]
    Lex(#[from] LexError),
    #[error("parentheses are not paired")]
    UnbalancedParentheses,
    #[error("operator is missing an operand")]
    InvalidBoundary,
    #[error("expected a single number")]
    NotAValue,
    /// A token reached operator dispatch without being an operator. This
    /// is a bug in the evaluator, not in the input.
    #[error("internal error: {0:?} is not an operator")]
    UnknownOperator(TokenKind),
    #[error("division by zero")]
    DivisionByZero,
    #[error("expression nests deeper than {0} levels")]
    NestingTooDeep(usize),
}

impl EvalError {
    pub fn is_internal(&self) -> bool {
        matches!(self, EvalError::UnknownOperator(_))
    }
}
