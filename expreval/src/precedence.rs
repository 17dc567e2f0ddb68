use exprlex::TokenKind;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Arity {
    Prefix,
    Postfix,
    Binary,
}

// Unary operators bind tighter than any binary one.
pub const UNARY_PRIORITY: u8 = u8::MAX;

/// Binding priority and arity of an operator, `None` for operands and
/// brackets. Lower priority binds weaker.
pub fn precedence(kind: TokenKind) -> Option<(u8, Arity)> {
    match kind {
        TokenKind::Plus | TokenKind::Minus => Some((0, Arity::Binary)),
        TokenKind::Multiply | TokenKind::Divide => Some((1, Arity::Binary)),
        TokenKind::Power => Some((2, Arity::Binary)),
        TokenKind::Negate | TokenKind::Function(_) => Some((UNARY_PRIORITY, Arity::Prefix)),
        TokenKind::Percent => Some((UNARY_PRIORITY, Arity::Postfix)),
        TokenKind::Number | TokenKind::Constant => None,
        TokenKind::LBracket | TokenKind::RBracket => None,
    }
}

// Operator stack priorities. Within a binary level isp < icp, so an
// incoming operator of the same level is shifted: equal priority chains
// group right to left just like the span evaluator does.
const MAX_PRIORITY: u8 = 13;

/// Priority of `kind` while resident on the operator stack.
pub fn in_stack(kind: TokenKind) -> Option<u8> {
    match kind {
        TokenKind::LBracket => Some(1),
        TokenKind::RBracket => Some(MAX_PRIORITY),
        TokenKind::Plus | TokenKind::Minus => Some(2),
        TokenKind::Multiply | TokenKind::Divide => Some(4),
        TokenKind::Power => Some(6),
        TokenKind::Negate | TokenKind::Function(_) => Some(9),
        TokenKind::Percent => Some(12),
        TokenKind::Number | TokenKind::Constant => None,
    }
}

/// Priority of `kind` when it is the next input token.
pub fn incoming(kind: TokenKind) -> Option<u8> {
    match kind {
        TokenKind::LBracket => Some(MAX_PRIORITY),
        TokenKind::RBracket => Some(1),
        TokenKind::Plus | TokenKind::Minus => Some(3),
        TokenKind::Multiply | TokenKind::Divide => Some(5),
        TokenKind::Power => Some(7),
        TokenKind::Percent => Some(8),
        TokenKind::Negate | TokenKind::Function(_) => Some(10),
        TokenKind::Number | TokenKind::Constant => None,
    }
}

///////////////////////////////////////////////////////////////////////////////
