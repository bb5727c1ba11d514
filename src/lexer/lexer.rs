use log::{debug, trace};

use crate::{errors::errors::{Error, ErrorImpl}, MK_TOKEN};

use super::tokens::{lookup_identifier, Token, TokenKind};

#[derive(Debug, Clone)]
pub struct Lexer {
    input: Vec<char>,
    /// Index of `current`
    position: usize,
    /// Always `position + 1`
    read_position: usize,
    /// `None` once the cursor is past the end of input
    current: Option<char>,
}

impl Lexer {
    pub fn new(input: &str) -> Lexer {
        let input: Vec<char> = input.chars().collect();
        let current = input.first().copied();

        Lexer {
            input,
            position: 0,
            read_position: 1,
            current,
        }
    }

    /// Produces the next token, advancing the cursor past it.
    ///
    /// Never fails: unrecognised characters come back as `Illegal` tokens,
    /// and once the input is exhausted every call returns `EndOfInput`.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        // Identifiers and integers leave the cursor past their last character.
        let (token, self_advanced) = match self.current {
            None => (MK_TOKEN!(TokenKind::EndOfInput, String::new()), false),
            Some(ch) if is_letter(ch) => {
                let literal = self.read_identifier();
                (MK_TOKEN!(lookup_identifier(&literal), literal), true)
            }
            Some(ch) if is_digit(ch) => (MK_TOKEN!(TokenKind::Integer, self.read_number()), true),
            Some('=') => (self.either_or('=', '=', TokenKind::Equal, TokenKind::Assign), false),
            Some('!') => (self.either_or('!', '=', TokenKind::NotEqual, TokenKind::Bang), false),
            Some(ch) => (MK_TOKEN!(single_char_kind(ch), ch.to_string()), false),
        };

        if !self_advanced {
            self.read_char();
        }

        trace!("scanned {}", token);
        token
    }

    /// Moves the cursor forward by one character. A no-op once past the end.
    fn read_char(&mut self) {
        if self.position >= self.input.len() {
            return;
        }

        self.current = self.input.get(self.read_position).copied();
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn peek_char(&self) -> Option<char> {
        self.input.get(self.read_position).copied()
    }

    /// Emits `double` when the peeked character is `second`, consuming `first`
    /// so that the caller's advance steps past `second`; otherwise emits
    /// `single` for `first` alone.
    fn either_or(&mut self, first: char, second: char, double: TokenKind, single: TokenKind) -> Token {
        if self.peek_char() == Some(second) {
            self.read_char();
            MK_TOKEN!(double, format!("{}{}", first, second))
        } else {
            MK_TOKEN!(single, first.to_string())
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.current, Some(' ' | '\t' | '\n' | '\r')) {
            self.read_char();
        }
    }

    fn read_identifier(&mut self) -> String {
        self.read_while(is_letter)
    }

    fn read_number(&mut self) -> String {
        self.read_while(is_digit)
    }

    fn read_while(&mut self, class: fn(char) -> bool) -> String {
        let start = self.position;

        while self.current.is_some_and(class) {
            self.read_char();
        }

        self.input[start..self.position].iter().collect()
    }
}

impl Iterator for Lexer {
    type Item = Token;

    /// Yields tokens up to, but not including, `EndOfInput`.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();

        if token.is_end_of_input() {
            None
        } else {
            Some(token)
        }
    }
}

fn single_char_kind(ch: char) -> TokenKind {
    match ch {
        '+' => TokenKind::Plus,
        '-' => TokenKind::Minus,
        '*' => TokenKind::Asterisk,
        '/' => TokenKind::Slash,
        '<' => TokenKind::LessThan,
        '>' => TokenKind::GreaterThan,
        ',' => TokenKind::Comma,
        ';' => TokenKind::Semicolon,
        '(' => TokenKind::LeftParen,
        ')' => TokenKind::RightParen,
        '{' => TokenKind::LeftBrace,
        '}' => TokenKind::RightBrace,
        _ => TokenKind::Illegal,
    }
}

// Digits are not identifier characters: `x1` scans as `x`, `1`.
fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Scans the whole input, returning every token up to and including the
/// first `EndOfInput`.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.is_end_of_input();
        tokens.push(token);

        if done {
            break;
        }
    }

    debug!("tokenized {} chars into {} tokens", lex.input.len(), tokens.len());
    tokens
}

/// Like `tokenize`, but rejects the input at the first `Illegal` token.
pub fn tokenize_strict(source: &str) -> Result<Vec<Token>, Error> {
    let tokens = tokenize(source);

    if let Some((index, token)) = tokens
        .iter()
        .enumerate()
        .find(|(_, token)| token.kind == TokenKind::Illegal)
    {
        return Err(Error::new(ErrorImpl::IllegalToken {
            token: token.literal.clone(),
            index,
        }));
    }

    Ok(tokens)
}
