//! Error types for markup parsing.

use thiserror::Error;

use crate::placeholder::PlaceholderKey;

/// Why the tokenizer gave up on a tag.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TokenizeErrorKind {
    /// A `<` that is never matched by a `>`.
    #[error("unterminated tag")]
    UnterminatedTag,

    /// A quoted argument that is never closed.
    #[error("unterminated quoted argument")]
    UnterminatedQuote,
}

/// A tokenizer failure.
///
/// `offset` points at the offending construct (the `<` or the opening quote);
/// `tag_start` always points at the `<` of the tag being scanned.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("{reason} at offset {offset}")]
pub struct TokenizeError {
    pub offset: usize,
    pub tag_start: usize,
    pub reason: TokenizeErrorKind,
}

/// Errors that can occur when parsing markup.
///
/// Every variant aborts the parse; no partial tree is returned.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    /// The input could not be split into tokens.
    #[error("{reason} at offset {offset}")]
    Tokenize {
        offset: usize,
        reason: TokenizeErrorKind,
    },

    /// A tag name no handler is registered for (strict tags only).
    #[error("unknown tag <{name}> at offset {offset}")]
    UnknownTag { name: String, offset: usize },

    /// A handler rejected the arguments of a tag.
    #[error("invalid argument {arg_index} for tag <{tag}>: {reason}")]
    TagArgument {
        tag: String,
        arg_index: usize,
        reason: String,
    },

    /// A close tag that does not match the innermost open tag.
    #[error(
        "mismatched close tag </{found}> at offset {offset} (innermost open tag: {})",
        .expected.as_deref().unwrap_or("none")
    )]
    MismatchedCloseTag {
        expected: Option<String>,
        found: String,
        offset: usize,
    },

    /// Tags still open at the end of input, outermost first.
    #[error("unclosed tags at end of input: {}", .names.join(", "))]
    UnclosedTag { names: Vec<String>, offset: usize },

    /// `<reset>` used while close tags are strictly checked.
    #[error("<reset> is not allowed with strict closing (offset {offset})")]
    ResetNotAllowed { offset: usize },

    /// A placeholder reference with no matching entry.
    #[error("unresolved placeholder {key}")]
    UnresolvedPlaceholder { key: PlaceholderKey },

    /// Nested parses went deeper than the configured limit.
    #[error("recursion limit exceeded at depth {depth}")]
    RecursionLimitExceeded { depth: usize },

    /// More tags open at once than the configured limit.
    #[error("tag <{name}> at offset {offset} would nest {depth} tags deep")]
    NestingLimitExceeded { name: String, depth: usize, offset: usize },
}

impl From<TokenizeError> for ParseError {
    fn from(err: TokenizeError) -> Self {
        ParseError::Tokenize {
            offset: err.offset,
            reason: err.reason,
        }
    }
}

/// Errors reported by tag handlers.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TagError {
    /// An argument was missing or malformed.
    #[error("argument {index}: {reason}")]
    Argument { index: usize, reason: String },

    /// A nested parse failed; propagated unchanged.
    #[error(transparent)]
    Parse(Box<ParseError>),
}

impl From<ParseError> for TagError {
    fn from(err: ParseError) -> Self {
        TagError::Parse(Box::new(err))
    }
}
