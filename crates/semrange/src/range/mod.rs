//! Range queries over semantic versions
//!
//! A query such as `>=1.2.0 && <2.0.0` is tokenized, parsed with a
//! shunting-yard pass and compiled into a [`RangePredicate`] that can be
//! evaluated against any number of versions.

mod operator;
mod parser;
mod predicate;
mod token;

use thiserror::Error;

use crate::version::{ErrorKind, VersionError};

pub use operator::Operator;
pub use parser::RangeParser;
pub use predicate::RangePredicate;
pub use token::{tokenize, Token, TokenKind, Tokenizer};

/// Error type for range query parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("The range string must not be empty or only consist of whitespace")]
    Empty,
    #[error("Encountered invalid character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },
    #[error("Closing parenthesis at position {position} has no matching opening parenthesis")]
    UnmatchedParenthesis { position: usize },
    #[error("Opening parenthesis at position {position} is never closed")]
    UnclosedParenthesis { position: usize },
    #[error("Malformed range expression at position {position}: {reason}")]
    Malformed { position: usize, reason: String },
    #[error("Invalid version \"{literal}\" at position {position}")]
    InvalidVersion {
        literal: String,
        position: usize,
        #[source]
        source: VersionError,
    },
}

impl RangeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RangeError::Empty => ErrorKind::Argument,
            RangeError::InvalidVersion { .. } => ErrorKind::Format,
            _ => ErrorKind::Syntax,
        }
    }
}
