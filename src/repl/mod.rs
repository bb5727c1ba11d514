//! Interactive console that prints the tokens of every line typed.

pub mod repl;

#[cfg(test)]
mod tests;
