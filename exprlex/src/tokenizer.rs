use crate::rules;
use crate::token::{Token, TokenKind};
use thiserror::Error;

#[derive(Error, Clone, PartialEq, Debug)]
#[error("no lexical rule matches {found:?} at position {position}")]
pub struct LexError {
    /// Character (not byte) index of the offending input.
    pub position: usize,
    pub found: char,
}

/// Split `source` into tokens and apply the contextual rewrite.
/// Fails on the first offset where no rule matches.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut offset = 0;
    while offset < source.len() {
        let rest = &source[offset..];
        let (rule, len) = rules::first_match(rest).ok_or_else(|| LexError {
            position: source[..offset].chars().count(),
            found: rest.chars().next().unwrap_or_default(),
        })?;
        let text = &rest[..len];
        debug!("rule matched {:?} at {}: {:?}", rule.emits, offset, text);
        if let Some(kind) = rule.emits {
            tokens.push(Token::new(kind, text));
        }
        offset += len;
    }
    Ok(rewrite(tokens))
}

// Reclassify unary minus and insert implicit multiplication.
fn rewrite(tokens: Vec<Token>) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    for mut token in tokens {
        let prev = out.last().map(|t| t.kind);
        match (token.kind, prev) {
            // NOTE: only at the start or after '(', "2*-3" stays binary minus
            (TokenKind::Minus, None) | (TokenKind::Minus, Some(TokenKind::LBracket)) => {
                token.kind = TokenKind::Negate;
            }
            (TokenKind::Constant, Some(TokenKind::Number)) => {
                out.push(Token::implicit(TokenKind::Multiply));
            }
            _ => (),
        }
        out.push(token);
    }
    out
}
