use crate::token::{Function, TokenKind};
use once_cell::sync::Lazy;
use regex::Regex;

/// A lexical rule: what to emit (`None` discards the match) and an
/// anchored pattern that must match at the current offset.
pub struct Rule {
    pub emits: Option<TokenKind>,
    pub pattern: Regex,
}

fn rule(emits: Option<TokenKind>, pattern: &str) -> Rule {
    let anchored = format!("^(?:{})", pattern);
    Rule { emits, pattern: Regex::new(&anchored).unwrap() }
}

// Tried in this order, first match wins. Keep keywords after the single
// char rules but never let another rule consume a keyword prefix.
pub static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        rule(None, r"\s+"),
        rule(Some(TokenKind::Constant), "π"),
        rule(Some(TokenKind::Number), r"[0-9]+(?:\.[0-9]+)?"),
        rule(Some(TokenKind::Plus), r"\+"),
        rule(Some(TokenKind::Minus), "-"),
        rule(Some(TokenKind::Multiply), r"\*"),
        rule(Some(TokenKind::Divide), "/"),
        rule(Some(TokenKind::Power), r"\^"),
        rule(Some(TokenKind::Percent), "%"),
        rule(Some(TokenKind::LBracket), r"\("),
        rule(Some(TokenKind::RBracket), r"\)"),
        rule(Some(TokenKind::Function(Function::Cos)), "cos"),
        rule(Some(TokenKind::Function(Function::Sin)), "sin"),
        rule(Some(TokenKind::Function(Function::Tan)), "tan"),
        rule(Some(TokenKind::Function(Function::Cot)), "cot"),
    ]
});

/// Find the first rule matching at the start of `input`, returns the rule
/// and the length in bytes of the match.
pub fn first_match(input: &str) -> Option<(&'static Rule, usize)> {
    RULES.iter().find_map(|rule| {
        rule.pattern
            .find(input)
            .filter(|m| m.start() == 0 && m.end() > 0)
            .map(|m| (rule, m.end()))
    })
}

///////////////////////////////////////////////////////////////////////////////
