//! Parser for tag markup.
//!
//! This module contains the lexer, tag arguments, and the tree builder.

mod builder;
mod lexer;
mod tag;

pub(crate) use builder::Session;
pub use builder::parse;
pub use lexer::{Lexer, Token, TokenKind, tokenize};
pub use tag::{ArgumentQueue, Arguments, TagArgument};
