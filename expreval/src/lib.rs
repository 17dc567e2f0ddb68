#![deny(warnings)]

macro_rules! debug {
    ($($args:tt)*) => (if cfg!(feature="debug") { eprintln!($($args)*); })
}

use std::str::FromStr;

pub use exprlex::{tokenize, Function, LexError, Token, TokenKind};

pub use apply::EPSILON;
pub use error::EvalError;
pub use precedence::{precedence, Arity};
pub use span::{SpanEvaluator, MAX_DEPTH};
pub use stack::StackEvaluator;

mod apply;
mod error;
mod precedence;
mod span;
mod stack;

#[cfg(test)]
mod span_test;

/// Turns a rewritten token sequence into a number.
pub trait Evaluator {
    fn eval(&self, tokens: &[Token]) -> Result<f64, EvalError>;
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Strategy {
    /// Recursive split at the weakest operator.
    #[default]
    Span,
    /// Operand and operator stacks.
    Stack,
}

impl Strategy {
    pub fn evaluator(self) -> &'static dyn Evaluator {
        match self {
            Strategy::Span => &SpanEvaluator,
            Strategy::Stack => &StackEvaluator,
        }
    }
}

impl FromStr for Strategy {
    type Err = String;
    fn from_str(s: &str) -> Result<Strategy, String> {
        match s {
            "span" => Ok(Strategy::Span),
            "stack" => Ok(Strategy::Stack),
            _ => Err(format!("Unknown strategy: {}", s)),
        }
    }
}

/// Evaluate `expression` with the recursive span evaluator.
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    evaluate_with(expression, Strategy::Span)
}

pub fn evaluate_with(expression: &str, strategy: Strategy) -> Result<f64, EvalError> {
    let tokens = tokenize(expression)?;
    strategy.evaluator().eval(&tokens)
}
