//! Lexer for tag markup.
//!
//! Splits input into literal text and tag tokens. All offsets are byte
//! offsets into the original input; every token carries the raw source
//! slice it was produced from.

use std::borrow::Cow;

use crate::error::{TokenizeError, TokenizeErrorKind};

use super::tag::{Arguments, TagArgument};

const TAG_START: u8 = b'<';
const TAG_END: u8 = b'>';
const CLOSE: u8 = b'/';
const ESCAPE: u8 = b'\\';

/// The kind of a token.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind<'a> {
    /// Plain text with escapes resolved.
    Literal(Cow<'a, str>),
    /// `<name:arg...>` or the self-closing `<name:arg.../>`.
    OpenTag {
        name: &'a str,
        args: Arguments,
        self_closing: bool,
    },
    /// `</name:arg...>`; an empty name is the `</>` shorthand.
    CloseTag { name: &'a str, args: Arguments },
}

/// A token with its source slice and byte offset.
#[derive(Clone, Debug, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind<'a>,
    pub raw: &'a str,
    pub offset: usize,
}

/// Lexer for tag markup.
///
/// # Examples
///
/// ```
/// use minimark::parser::{Lexer, TokenKind};
///
/// let tokens: Vec<_> = Lexer::new("<red>Hi</red>").collect::<Result<_, _>>().unwrap();
/// assert_eq!(tokens.len(), 3);
/// assert!(matches!(tokens[1].kind, TokenKind::Literal(ref text) if text == "Hi"));
/// ```
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    /// Set after an error; the `<` the scan failed on.
    failed: Option<usize>,
    /// A `<` that must be read as text.
    literal_at: Option<usize>,
}

/// Tokenize `input`.
pub fn tokenize(input: &str) -> Lexer<'_> {
    Lexer::new(input)
}

enum TagScan<'a> {
    NotATag,
    Tag(Token<'a>),
    Error(TokenizeError),
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            failed: None,
            literal_at: None,
        }
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Current byte offset.
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Recover from the last error by reading the failed `<` as text.
    ///
    /// Returns false if the lexer had not failed.
    pub fn resume(&mut self) -> bool {
        match self.failed.take() {
            Some(start) => {
                self.pos = start;
                self.literal_at = Some(start);
                true
            }
            None => false,
        }
    }

    /// Take everything up to the close tag `</name>` as raw text.
    ///
    /// The close tag itself is consumed. Without one, the rest of the input
    /// is returned.
    pub fn take_verbatim(&mut self, name: &str) -> &'a str {
        let rest = &self.input[self.pos..];
        let needle = format!("</{}>", name.to_ascii_lowercase());
        match rest.to_ascii_lowercase().find(&needle) {
            Some(index) => {
                self.pos += index + needle.len();
                &rest[..index]
            }
            None => {
                self.pos = self.input.len();
                rest
            }
        }
    }

    fn scan_literal(&mut self) -> Option<Result<Token<'a>, TokenizeError>> {
        let bytes = self.input.as_bytes();
        let start = self.pos;
        let mut text: Cow<'a, str> = Cow::Borrowed("");
        let mut run = start;
        let mut i = start;

        while i < bytes.len() {
            match bytes[i] {
                ESCAPE if matches!(bytes.get(i + 1), Some(&(TAG_START | TAG_END | ESCAPE))) => {
                    append(&mut text, &self.input[run..i]);
                    run = i + 1;
                    i += 2;
                }
                TAG_START if self.literal_at != Some(i) => match self.scan_tag(i) {
                    TagScan::NotATag => i += 1,
                    TagScan::Tag(token) if i == start => {
                        self.pos = start + token.raw.len();
                        return Some(Ok(token));
                    }
                    TagScan::Error(err) if i == start => {
                        self.failed = Some(err.tag_start);
                        self.pos = self.input.len();
                        return Some(Err(err));
                    }
                    // Emit the text first; the tag is scanned again next call.
                    TagScan::Tag(_) | TagScan::Error(_) => break,
                },
                _ => i += 1,
            }
        }

        append(&mut text, &self.input[run..i]);
        self.pos = i;
        if i == start {
            return None;
        }
        Some(Ok(Token {
            kind: TokenKind::Literal(text),
            raw: &self.input[start..i],
            offset: start,
        }))
    }

    fn scan_tag(&self, start: usize) -> TagScan<'a> {
        let bytes = self.input.as_bytes();
        let closing = bytes.get(start + 1) == Some(&CLOSE);
        let body_start = if closing { start + 2 } else { start + 1 };

        let mut quote: Option<(u8, usize)> = None;
        let mut i = body_start;
        let end = loop {
            let Some(&byte) = bytes.get(i) else {
                let err = match quote {
                    Some((_, at)) => TokenizeError {
                        offset: at,
                        tag_start: start,
                        reason: TokenizeErrorKind::UnterminatedQuote,
                    },
                    None => TokenizeError {
                        offset: start,
                        tag_start: start,
                        reason: TokenizeErrorKind::UnterminatedTag,
                    },
                };
                return TagScan::Error(err);
            };
            match quote {
                Some((q, _)) => {
                    if byte == ESCAPE && matches!(bytes.get(i + 1), Some(&next) if next == q || next == ESCAPE) {
                        i += 2;
                        continue;
                    }
                    if byte == q {
                        quote = None;
                    }
                    i += 1;
                }
                None => match byte {
                    ESCAPE if matches!(bytes.get(i + 1), Some(&(TAG_START | TAG_END | ESCAPE))) => i += 2,
                    b'\'' | b'"' => {
                        quote = Some((byte, i));
                        i += 1;
                    }
                    // An unquoted `<` restarts the tag.
                    TAG_START => return TagScan::NotATag,
                    TAG_END => break i,
                    _ => i += 1,
                },
            }
        };

        let raw = &self.input[start..=end];
        let self_closing = !closing && end > body_start && bytes[end - 1] == CLOSE;
        let body_end = if self_closing { end - 1 } else { end };

        if body_start == body_end {
            if closing {
                return TagScan::Tag(Token {
                    kind: TokenKind::CloseTag {
                        name: "",
                        args: Arguments::new(),
                    },
                    raw,
                    offset: start,
                });
            }
            return TagScan::NotATag;
        }

        let mut parts = split_parts(self.input, body_start, body_end).into_iter();
        let Some((name, _)) = parts.next().filter(|(name, _)| is_valid_name(name)) else {
            return TagScan::NotATag;
        };

        let args: Arguments = parts
            .map(|(part, offset)| {
                let (value, quoted) = unquote(part);
                TagArgument::new(value, quoted, offset)
            })
            .collect();

        let kind = if closing {
            TokenKind::CloseTag { name, args }
        } else {
            TokenKind::OpenTag {
                name,
                args,
                self_closing,
            }
        };
        TagScan::Tag(Token {
            kind,
            raw,
            offset: start,
        })
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, TokenizeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed.is_some() || self.pos >= self.input.len() {
            return None;
        }
        self.scan_literal()
    }
}

fn append<'a>(text: &mut Cow<'a, str>, piece: &'a str) {
    if piece.is_empty() {
        return;
    }
    if text.is_empty() {
        *text = Cow::Borrowed(piece);
    } else {
        text.to_mut().push_str(piece);
    }
}

/// Tag names are ASCII words; `!`, `?` and `#` allow negation and hex colors.
fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '!' | '?' | '#'))
}

/// Split a tag body on unquoted `:` and `,`, keeping `://` intact.
fn split_parts(input: &str, start: usize, end: usize) -> Vec<(&str, usize)> {
    let bytes = input.as_bytes();
    let mut parts = Vec::new();
    let mut part_start = start;
    let mut quote: Option<u8> = None;
    let mut i = start;

    while i < end {
        let byte = bytes[i];
        match quote {
            Some(q) => {
                if byte == ESCAPE && i + 1 < end && (bytes[i + 1] == q || bytes[i + 1] == ESCAPE) {
                    i += 2;
                    continue;
                }
                if byte == q {
                    quote = None;
                }
                i += 1;
            }
            None => match byte {
                ESCAPE if i + 1 < end && matches!(bytes[i + 1], TAG_START | TAG_END | ESCAPE) => i += 2,
                b'\'' | b'"' => {
                    quote = Some(byte);
                    i += 1;
                }
                b':' if i + 2 < end && bytes[i + 1] == b'/' && bytes[i + 2] == b'/' => i += 3,
                b':' | b',' => {
                    parts.push((&input[part_start..i], part_start));
                    part_start = i + 1;
                    i += 1;
                }
                _ => i += 1,
            },
        }
    }
    parts.push((&input[part_start..end], part_start));
    parts
}

/// Strip surrounding quotes and resolve escapes.
fn unquote(part: &str) -> (String, bool) {
    let bytes = part.as_bytes();
    if bytes.len() >= 2 && matches!(bytes[0], b'\'' | b'"') && bytes[bytes.len() - 1] == bytes[0] {
        let quote = bytes[0] as char;
        let inner = &part[1..part.len() - 1];
        return (unescape(inner, |c| c == quote || c == '\\'), true);
    }
    (unescape(part, |c| matches!(c, '<' | '>' | '\\')), false)
}

fn unescape(text: &str, escapable: impl Fn(char) -> bool) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek().filter(|&&next| escapable(next)) {
                out.push(next);
                chars.next();
                continue;
            }
        }
        out.push(c);
    }
    out
}
