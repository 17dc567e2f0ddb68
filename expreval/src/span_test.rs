use crate::{evaluate, tokenize, EvalError, Evaluator, LexError, SpanEvaluator, MAX_DEPTH};
use approx::assert_relative_eq;
use std::f64::consts::PI;

#[test]
fn arithmetic() {
    assert_eq!(evaluate("1 + 2"), Ok(3.0));
    assert_eq!(evaluate("2*3+4"), Ok(10.0));
    assert_eq!(evaluate("2+3*4"), Ok(14.0));
    assert_eq!(evaluate("(2+3)*4"), Ok(20.0));
    assert_eq!(evaluate("(1)+(2)"), Ok(3.0));
    assert_eq!(evaluate("((7))"), Ok(7.0));
    assert_eq!(evaluate("-3 + 2.5"), Ok(-0.5));
}

#[test]
fn equal_priority_groups_right_to_left() {
    assert_eq!(evaluate("8-3-2"), Ok(7.0));
    assert_eq!(evaluate("1-2+3"), Ok(-4.0));
    assert_eq!(evaluate("8/4/2"), Ok(4.0));
    assert_eq!(evaluate("2^3^2"), Ok(512.0));
    assert_eq!(evaluate("(8-3)-2"), Ok(3.0));
}

#[test]
fn float_formula() {
    let expect = (1.0 / 0.32 + 2.5 * 8.3f64).powf(2.0);
    assert_eq!(evaluate("(1/0.32+2.5*8.3)^2"), Ok(expect));
}

#[test]
fn constant_and_functions() {
    assert_eq!(evaluate("π"), Ok(PI));
    assert_eq!(evaluate("2π"), Ok(2.0 * PI));
    assert_eq!(evaluate("cos(0)"), Ok(1.0));
    assert_eq!(evaluate("-cos(0)"), Ok(-1.0));
    assert_relative_eq!(evaluate("sin(π/2)").unwrap(), 1.0);
    assert_relative_eq!(evaluate("tan(π/4)").unwrap(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(evaluate("cot(π/4)").unwrap(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(evaluate("sin(0.345)^2 + cos(0.345)^2").unwrap(), 1.0);
}

#[test]
fn unary_operators() {
    assert_eq!(evaluate("5%"), Ok(0.05));
    assert_eq!(evaluate("-5%"), Ok(-0.05));
    assert_eq!(evaluate("(1+4)%"), Ok(0.05));
    assert_eq!(evaluate("cos(0)%"), Ok(0.01));
    assert_relative_eq!(evaluate("5%%").unwrap(), 0.0005);
    assert_eq!(evaluate("-(1+2)*2"), Ok(-6.0));
    // negation binds tighter than '^'
    assert_eq!(evaluate("-2^2"), Ok(4.0));
}

#[test]
fn division_by_zero() {
    assert_eq!(evaluate("1/0.0000000001"), Err(EvalError::DivisionByZero));
    assert_eq!(evaluate("1/(2-2)"), Err(EvalError::DivisionByZero));
    assert_eq!(evaluate("1/0.1"), Ok(10.0));
}

#[test]
fn unbalanced() {
    assert_eq!(evaluate("(1+2"), Err(EvalError::UnbalancedParentheses));
    assert_eq!(evaluate("1+2)"), Err(EvalError::UnbalancedParentheses));
    assert_eq!(evaluate(")1+2("), Err(EvalError::UnbalancedParentheses));
}

#[test]
fn boundaries() {
    let tokens = tokenize("()").unwrap();
    assert_eq!(SpanEvaluator.eval_span(&tokens, 1, 0), Err(EvalError::InvalidBoundary));
    assert_eq!(SpanEvaluator.eval_span(&tokens, 0, 0), Err(EvalError::NotAValue));
    assert_eq!(SpanEvaluator.eval_span(&tokens, 0, 5), Err(EvalError::InvalidBoundary));
    assert_eq!(SpanEvaluator.eval(&tokens), Err(EvalError::InvalidBoundary));
    assert_eq!(evaluate(""), Err(EvalError::InvalidBoundary));
    assert_eq!(evaluate("2*"), Err(EvalError::InvalidBoundary));
    assert_eq!(evaluate("*2"), Err(EvalError::InvalidBoundary));
    assert_eq!(evaluate("+"), Err(EvalError::NotAValue));
}

#[test]
fn sub_spans() {
    let tokens = tokenize("1 + 2 * 3").unwrap();
    assert_eq!(SpanEvaluator.eval_span(&tokens, 2, 4), Ok(6.0));
    assert_eq!(SpanEvaluator.eval_span(&tokens, 0, 2), Ok(3.0));
    assert_eq!(SpanEvaluator.eval_span(&tokens, 4, 4), Ok(3.0));
}

#[test]
fn stray_operands() {
    assert_eq!(evaluate("2 3"), Err(EvalError::NotAValue));
    assert_eq!(evaluate("2 cos(0)"), Err(EvalError::NotAValue));
    assert_eq!(evaluate("5%3"), Err(EvalError::NotAValue));
    assert_eq!(evaluate("(1)(2)"), Err(EvalError::NotAValue));
}

#[test]
fn minus_after_operator_is_rejected() {
    assert_eq!(evaluate("2*-3"), Err(EvalError::InvalidBoundary));
}

#[test]
fn lex_errors_propagate() {
    assert_eq!(
        evaluate("1+x"),
        Err(EvalError::Lex(LexError { position: 2, found: 'x' }))
    );
}

#[test]
fn nesting_limit() {
    let deep = format!("{}1{}", "(".repeat(MAX_DEPTH + 10), ")".repeat(MAX_DEPTH + 10));
    assert_eq!(evaluate(&deep), Err(EvalError::NestingTooDeep(MAX_DEPTH)));
    let shallow = format!("{}1{}", "(".repeat(100), ")".repeat(100));
    assert_eq!(evaluate(&shallow), Ok(1.0));
}
