use crate::error::EvalError;
use exprlex::{Function, Token, TokenKind};

/// Divisors smaller than this (in absolute value) count as zero.
pub const EPSILON: f64 = 1e-9;

pub fn operand(token: &Token) -> Result<f64, EvalError> {
    token.value().ok_or(EvalError::NotAValue)
}

pub fn apply_unary(kind: TokenKind, a: f64) -> Result<f64, EvalError> {
    match kind {
        TokenKind::Negate => Ok(-a),
        TokenKind::Percent => Ok(a / 100.0),
        TokenKind::Function(func) => Ok(eval_fn(func, a)),
        _ => Err(EvalError::UnknownOperator(kind)),
    }
}

pub fn apply_binary(kind: TokenKind, a: f64, b: f64) -> Result<f64, EvalError> {
    match kind {
        TokenKind::Plus => Ok(a + b),
        TokenKind::Minus => Ok(a - b),
        TokenKind::Multiply => Ok(a * b),
        TokenKind::Divide if b.abs() < EPSILON => Err(EvalError::DivisionByZero),
        TokenKind::Divide => Ok(a / b),
        TokenKind::Power => Ok(a.powf(b)),
        _ => Err(EvalError::UnknownOperator(kind)),
    }
}

fn eval_fn(func: Function, a: f64) -> f64 {
    match func {
        Function::Cos => a.cos(),
        Function::Sin => a.sin(),
        Function::Tan => a.tan(),
        // unguarded: blows up near multiples of π
        Function::Cot => 1.0 / a.tan(),
    }
}

///////////////////////////////////////////////////////////////////////////////
