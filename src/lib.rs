#![allow(clippy::module_inception)]

pub mod lexer;
pub mod macros;

pub use lexer::lexer::{format_tokens, tokenize, Scanner};
pub use lexer::tokens::{Token, TokenKind, CLASSIFICATION};
