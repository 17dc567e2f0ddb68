use crate::apply;
use crate::error::EvalError;
use crate::precedence::{precedence, Arity};
use crate::Evaluator;
use exprlex::{Token, TokenKind};

/// Deepest recursion the span evaluator accepts before giving up.
pub const MAX_DEPTH: usize = 512;

/// Evaluates by splitting the token range at its weakest binding
/// operator and recursing on each side.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpanEvaluator;

impl SpanEvaluator {
    /// Evaluate the inclusive token range `[p, q]`.
    pub fn eval_span(&self, tokens: &[Token], p: usize, q: usize) -> Result<f64, EvalError> {
        if q >= tokens.len() {
            return Err(EvalError::InvalidBoundary);
        }
        Spans { tokens }.eval(p, q, 0)
    }
}

impl Evaluator for SpanEvaluator {
    fn eval(&self, tokens: &[Token]) -> Result<f64, EvalError> {
        let last = tokens.len().checked_sub(1).ok_or(EvalError::InvalidBoundary)?;
        self.eval_span(tokens, 0, last)
    }
}

struct Spans<'a> {
    tokens: &'a [Token],
}

impl<'a> Spans<'a> {
    fn eval(&self, p: usize, q: usize, depth: usize) -> Result<f64, EvalError> {
        if depth > MAX_DEPTH {
            return Err(EvalError::NestingTooDeep(MAX_DEPTH));
        }
        if p > q {
            return Err(EvalError::InvalidBoundary);
        }
        if p == q {
            return apply::operand(&self.tokens[p]);
        }
        if self.enclosed(p, q)? {
            return self.eval(p + 1, q - 1, depth + 1);
        }

        let (op, arity) = self.governing_op(p, q).ok_or(EvalError::NotAValue)?;
        let kind = self.tokens[op].kind;
        debug!("span [{}, {}] governed by {:?} at {}", p, q, kind, op);
        match arity {
            // anything left of a prefix op (or right of a postfix one)
            // would be silently dropped
            Arity::Prefix if op != p => Err(EvalError::NotAValue),
            Arity::Postfix if op != q => Err(EvalError::NotAValue),
            Arity::Prefix => apply::apply_unary(kind, self.eval(op + 1, q, depth + 1)?),
            Arity::Postfix => {
                let operand = self.eval(p, left_of(op)?, depth + 1)?;
                apply::apply_unary(kind, operand)
            }
            Arity::Binary => {
                let lhs = self.eval(p, left_of(op)?, depth + 1)?;
                let rhs = self.eval(op + 1, q, depth + 1)?;
                apply::apply_binary(kind, lhs, rhs)
            }
        }
    }

    // Checks bracket balance over [p, q], returns whether the whole span
    // is wrapped by one matching pair.
    fn enclosed(&self, p: usize, q: usize) -> Result<bool, EvalError> {
        let mut nesting = 0i32;
        let mut wrapped = true;
        for (i, token) in self.tokens[p..=q].iter().enumerate() {
            match token.kind {
                TokenKind::LBracket => nesting += 1,
                TokenKind::RBracket => nesting -= 1,
                _ => (),
            }
            if nesting < 0 {
                return Err(EvalError::UnbalancedParentheses);
            }
            if nesting == 0 && p + i < q {
                wrapped = false;
            }
        }
        if nesting != 0 {
            return Err(EvalError::UnbalancedParentheses);
        }
        Ok(wrapped && self.tokens[p].kind == TokenKind::LBracket
           && self.tokens[q].kind == TokenKind::RBracket)
    }

    // Weakest binding operator outside brackets. Equal priority binary
    // operators resolve to the leftmost so chains group right to left
    // (8-3-2 is 8-(3-2)). Among unary operators the rightmost postfix one
    // wins, else the leftmost prefix one: the outermost either way.
    fn governing_op(&self, p: usize, q: usize) -> Option<(usize, Arity)> {
        let mut nesting = 0i32;
        let mut found: Option<(usize, u8, Arity)> = None;
        for i in p..=q {
            let kind = self.tokens[i].kind;
            match kind {
                TokenKind::LBracket => nesting += 1,
                TokenKind::RBracket => nesting -= 1,
                _ if nesting != 0 => (),
                _ => if let Some((prio, arity)) = precedence(kind) {
                    let replace = match found {
                        None => true,
                        Some((_, min, _)) => {
                            prio < min || (prio == min && arity == Arity::Postfix)
                        }
                    };
                    if replace {
                        found = Some((i, prio, arity));
                    }
                },
            }
        }
        found.map(|(i, _, arity)| (i, arity))
    }
}

fn left_of(op: usize) -> Result<usize, EvalError> {
    op.checked_sub(1).ok_or(EvalError::InvalidBoundary)
}
