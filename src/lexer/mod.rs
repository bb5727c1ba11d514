//! Lexical analysis module.
//!
//! Converts source text into a stream of tokens for a parser:
//!
//! - Character-by-character scanning with one character of lookahead
//! - Recognition of keywords, identifiers, integers and operators
//! - Whitespace skipping and a stable end-of-input token

pub mod lexer;
pub mod tokens;
