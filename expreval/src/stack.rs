use crate::apply;
use crate::error::EvalError;
use crate::precedence::{in_stack, incoming, precedence, Arity};
use crate::Evaluator;
use exprlex::{Token, TokenKind};
use std::cmp::Ordering;

/// Operator-precedence evaluator working off an operand stack and an
/// operator stack, no recursion.
#[derive(Clone, Copy, Debug, Default)]
pub struct StackEvaluator;

impl Evaluator for StackEvaluator {
    fn eval(&self, tokens: &[Token]) -> Result<f64, EvalError> {
        let mut machine = Machine::new();
        for token in tokens {
            match incoming(token.kind) {
                None => machine.operands.push(apply::operand(token)?),
                Some(icp) => machine.feed(Incoming::Token(token.kind), icp)?,
            }
        }
        machine.feed(Incoming::End, 0)?;
        machine.result()
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
enum Slot {
    Bottom,
    Operator(TokenKind),
}

impl Slot {
    fn isp(self) -> u8 {
        match self {
            Slot::Bottom => 0,
            Slot::Operator(kind) => in_stack(kind).unwrap_or(0),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
enum Incoming {
    Token(TokenKind),
    End,
}

struct Machine {
    operands: Vec<f64>,
    operators: Vec<Slot>,
}

impl Machine {
    fn new() -> Machine {
        Machine { operands: Vec::new(), operators: vec![Slot::Bottom] }
    }

    // Reduce while the stack top outranks the incoming item, then either
    // cancel it against the top (bracket pair, or bottom at end of input)
    // or shift it.
    fn feed(&mut self, next: Incoming, icp: u8) -> Result<(), EvalError> {
        loop {
            let top = self.operators.last().copied().unwrap_or(Slot::Bottom);
            match (top, top.isp().cmp(&icp)) {
                // only end of input ranks below an open bracket
                (Slot::Operator(TokenKind::LBracket), Ordering::Greater) => {
                    return Err(EvalError::UnbalancedParentheses);
                }
                (Slot::Operator(kind), Ordering::Greater) => {
                    self.operators.pop();
                    self.reduce(kind)?;
                }
                (_, Ordering::Equal) => {
                    self.operators.pop();
                    return Ok(());
                }
                _ => return self.shift(next),
            }
        }
    }

    fn shift(&mut self, next: Incoming) -> Result<(), EvalError> {
        match next {
            Incoming::Token(TokenKind::RBracket) => Err(EvalError::UnbalancedParentheses),
            Incoming::Token(kind) => {
                self.operators.push(Slot::Operator(kind));
                Ok(())
            }
            Incoming::End => Ok(()),
        }
    }

    fn reduce(&mut self, kind: TokenKind) -> Result<(), EvalError> {
        let (_, arity) = precedence(kind).ok_or(EvalError::UnknownOperator(kind))?;
        let value = match arity {
            Arity::Prefix | Arity::Postfix => {
                let a = self.pop_operand()?;
                apply::apply_unary(kind, a)?
            }
            Arity::Binary => {
                let b = self.pop_operand()?;
                let a = self.pop_operand()?;
                apply::apply_binary(kind, a, b)?
            }
        };
        debug!("reduced {:?} -> {}", kind, value);
        self.operands.push(value);
        Ok(())
    }

    fn pop_operand(&mut self) -> Result<f64, EvalError> {
        self.operands.pop().ok_or(EvalError::InvalidBoundary)
    }

    fn result(mut self) -> Result<f64, EvalError> {
        match self.operands.len() {
            0 => Err(EvalError::InvalidBoundary),
            1 => self.pop_operand(),
            _ => Err(EvalError::NotAValue),
        }
    }
}
