//! Lazy tokenizer for the WKT grammar.

use crate::error::WktError;

/// One lexical element of a WKT input.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Token {
    /// A keyword: a geometry name, a dimension suffix or `EMPTY`.
    Word(String),
    /// A numeric literal, already parsed.
    Number(f64),
    OpenParen,
    CloseParen,
    Comma,
}

impl Token {
    /// Rendering used in error messages.
    pub fn describe(&self) -> String {
        match self {
            Token::Word(w) => format!("word {w:?}"),
            Token::Number(n) => format!("number {n}"),
            Token::OpenParen => "'('".to_string(),
            Token::CloseParen => "')'".to_string(),
            Token::Comma => "','".to_string(),
        }
    }
}

/// Splits an input string into [`Token`]s on demand, one `next` call at a time.
///
/// Each produced token carries the byte offset it started at, so parse errors can point into
/// the original input.
pub(super) struct Tokenizer<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Next token and its starting byte offset, or `None` at the end of input.
    pub fn next(&mut self) -> Result<Option<(Token, usize)>, WktError> {
        self.skip_whitespace();
        let start = self.position;

        let Some(first) = self.rest().chars().next() else {
            return Ok(None);
        };

        let token = match first {
            '(' => {
                self.position += 1;
                Token::OpenParen
            }
            ')' => {
                self.position += 1;
                Token::CloseParen
            }
            ',' => {
                self.position += 1;
                Token::Comma
            }
            c if c.is_ascii_alphabetic() => {
                let word = self.take_while(|c| c.is_ascii_alphanumeric() || c == '_');
                Token::Word(word.to_string())
            }
            c if c.is_ascii_digit() || c == '-' || c == '+' || c == '.' => {
                let text = self.take_while(|c| {
                    c.is_ascii_digit()
                        || c == '-'
                        || c == '+'
                        || c == '.'
                        || c == 'e'
                        || c == 'E'
                });
                let number = text.parse().map_err(|_| WktError::InvalidNumber {
                    text: text.to_string(),
                    position: start,
                })?;
                Token::Number(number)
            }
            character => {
                return Err(WktError::UnexpectedCharacter {
                    character,
                    position: start,
                })
            }
        };

        Ok(Some((token, start)))
    }

    fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }

    fn skip_whitespace(&mut self) {
        let trimmed = self.rest().trim_start();
        self.position = self.input.len() - trimmed.len();
    }

    fn take_while(&mut self, accept: impl Fn(char) -> bool) -> &'a str {
        let rest = self.rest();
        let len = rest
            .char_indices()
            .find(|&(_, c)| !accept(c))
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        self.position += len;
        &rest[..len]
    }
}
