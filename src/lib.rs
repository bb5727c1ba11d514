#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod repl;

/// Formats an error for the terminal:
///
/// ```text
/// Error: IllegalToken (`@` (token #3) is not part of the language)
/// -> source.mk
/// ```
pub fn format_error(error: &Error, source_name: &str) -> String {
    let header = if let ErrorTip::None = error.get_tip() {
        format!("Error: {}", error.get_error_name())
    } else {
        format!("Error: {} ({})", error.get_error_name(), error.get_tip())
    };

    format!("{}\n-> {}", header, source_name)
}

pub fn display_error(error: &Error, source_name: &str) {
    eprintln!("{}", format_error(error, source_name));
}
