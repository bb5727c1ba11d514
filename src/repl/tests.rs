//! Unit tests for the console loop.

use super::repl::{start, PROMPT};

fn run(input: &str) -> String {
    let mut output = Vec::new();
    start(input.as_bytes(), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_repl_prints_tokens() {
    let output = run("let x = 1;\n");

    assert_eq!(
        output,
        format!(
            "{p}Let(\"let\")\nIdentifier(\"x\")\nAssign(\"=\")\nInteger(\"1\")\nSemicolon(\";\")\n{p}",
            p = PROMPT
        )
    );
}

#[test]
fn test_repl_quit_command() {
    let output = run(".quit\nlet\n");

    assert_eq!(output, PROMPT);
}

#[test]
fn test_repl_empty_line_prints_nothing() {
    let output = run("\n\n");

    assert_eq!(output, PROMPT.repeat(3));
}

#[test]
fn test_repl_handles_crlf() {
    let output = run("!=\r\n.quit\r\n");

    assert_eq!(output, format!("{p}NotEqual(\"!=\")\n{p}", p = PROMPT));
}
