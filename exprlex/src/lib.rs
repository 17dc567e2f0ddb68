#![deny(warnings)]

macro_rules! debug {
    ($($args:tt)*) => (if cfg!(feature="debug") { eprintln!($($args)*); })
}

mod rules;
mod token;
mod tokenizer;

pub use token::{Function, Origin, Token, TokenKind};
pub use tokenizer::{tokenize, LexError};
