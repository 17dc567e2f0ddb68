use std::fmt;
use std::str::FromStr;

/// Prefix functions understood by the tokenizer. All take radians.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Function {
    Cos,
    Sin,
    Tan,
    Cot,
}

impl Function {
    pub fn name(self) -> &'static str {
        match self {
            Function::Cos => "cos",
            Function::Sin => "sin",
            Function::Tan => "tan",
            Function::Cot => "cot",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TokenKind {
    Number,
    Constant, // π
    Plus,
    Minus,
    Negate, // unary minus, only produced by the rewrite pass
    Multiply,
    Divide,
    Power,
    Percent,
    LBracket,
    RBracket,
    Function(Function),
}

/// Where a token's text came from.
#[derive(Clone, PartialEq, Debug)]
pub enum Origin {
    Source(String),
    // inserted by the rewrite pass, eg: the '*' in "2π"
    Implicit,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub origin: Origin,
}

impl Token {
    pub fn new(kind: TokenKind, text: &str) -> Token {
        Token { kind, origin: Origin::Source(text.to_string()) }
    }

    pub fn implicit(kind: TokenKind) -> Token {
        Token { kind, origin: Origin::Implicit }
    }

    pub fn text(&self) -> Option<&str> {
        match self.origin {
            Origin::Source(ref text) => Some(text.as_str()),
            Origin::Implicit => None,
        }
    }

    /// Numeric value of an operand token, `None` for anything else.
    pub fn value(&self) -> Option<f64> {
        match self.kind {
            TokenKind::Constant => Some(std::f64::consts::PI),
            TokenKind::Number => self.text().and_then(|t| f64::from_str(t).ok()),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (&self.origin, self.kind) {
            (Origin::Source(text), _) => write!(f, "{}", text),
            (Origin::Implicit, TokenKind::Multiply) => write!(f, "*"),
            (Origin::Implicit, kind) => write!(f, "<{:?}>", kind),
        }
    }
}

///////////////////////////////////////////////////////////////////////////////
