use std::io::{BufRead, Write};

use log::debug;

use crate::{errors::errors::Error, lexer::lexer::Lexer};

pub const PROMPT: &str = ">> ";
pub const QUIT_COMMAND: &str = ".quit";

/// Runs the console until `input` is exhausted or the user types `.quit`.
pub fn start<R: BufRead, W: Write>(mut input: R, output: &mut W) -> Result<(), Error> {
    let mut line = String::new();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let source = line.trim_end_matches(['\n', '\r']);
        if source.trim() == QUIT_COMMAND {
            break;
        }

        debug!("repl line: {:?}", source);
        for token in Lexer::new(source) {
            writeln!(output, "{}", token)?;
        }
    }

    Ok(())
}
