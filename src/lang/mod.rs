/*!
# Rust Language Module

This Rust module provides lexical analysis of the Pocket language
and the error type shared by the whole interpreter.

*/

#[macro_use]
mod error;
mod lex;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::{lex, line_number, Lexer, Quoting};
pub use token::{Operator, Token, Word, MAX_PRECEDENCE};

/// Byte range into the text being lexed.
pub type Span = std::ops::Range<usize>;
pub type LineNumber = Option<usize>;
