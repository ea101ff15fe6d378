//! Tokenizer for range queries

use super::{Operator, RangeError};
use crate::version::SemanticVersion;

/// What a token stands for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Version(SemanticVersion),
    Operator(Operator),
    OpenParen,
    CloseParen,
}

/// A token with the byte offset at which it starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
}

/// Characters that end a version literal
fn ends_literal(c: char) -> bool {
    c.is_whitespace() || matches!(c, '|' | '&' | '!' | '=' | '<' | '>' | '(' | ')')
}

/// Scans a range query left to right, skipping whitespace.
///
/// Yields an error for the first character that starts no valid token and
/// stops afterwards.
pub struct Tokenizer<'a> {
    input: &'a str,
    position: usize,
    failed: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Tokenizer {
            input,
            position: 0,
            failed: false,
        }
    }

    fn fail(&mut self, error: RangeError) -> Option<Result<Token, RangeError>> {
        self.failed = true;
        Some(Err(error))
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, RangeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let rest = &self.input[self.position..];
        let trimmed = rest.trim_start();
        self.position += rest.len() - trimmed.len();

        let start = self.position;
        let c = trimmed.chars().next()?;

        if c == '*' || c.is_ascii_digit() {
            let len = trimmed.find(ends_literal).unwrap_or(trimmed.len());
            let literal = &trimmed[..len];
            self.position += len;

            return match SemanticVersion::parse(literal) {
                Ok(version) => Some(Ok(Token {
                    kind: TokenKind::Version(version),
                    position: start,
                })),
                Err(source) => self.fail(RangeError::InvalidVersion {
                    literal: literal.to_string(),
                    position: start,
                    source,
                }),
            };
        }

        if let Some((op, len)) = Operator::scan(trimmed) {
            self.position += len;
            return Some(Ok(Token {
                kind: TokenKind::Operator(op),
                position: start,
            }));
        }

        let kind = match c {
            '(' => TokenKind::OpenParen,
            ')' => TokenKind::CloseParen,
            _ => {
                return self.fail(RangeError::InvalidCharacter {
                    character: c,
                    position: start,
                })
            }
        };
        self.position += 1;

        Some(Ok(Token {
            kind,
            position: start,
        }))
    }
}

/// Tokenize a whole range query
pub fn tokenize(input: &str) -> Result<Vec<Token>, RangeError> {
    Tokenizer::new(input).collect()
}
