//! Error types for the lexer front end.
//!
//! The lexer itself never fails; these errors come from strict tokenizing,
//! where an illegal token rejects the input, and from console/file I/O.

pub mod errors;

#[cfg(test)]
mod tests;
