//! Tag-based markup for styled text.
//!
//! This crate parses markup like `<red>Hello <bold>World</bold>` into an
//! immutable [`styled::Component`] tree, and serializes trees back.
//!
//! # Overview
//!
//! - `<tag>text</tag>` - apply a tag to a region
//! - `<tag:arg:'quoted arg'>` - tag arguments, separated by `:`
//! - `<tag/>` - self-closing tag, for tags that insert content
//! - `</>` - close the innermost tag
//! - `\<` - escaped bracket (literal `<`)
//!
//! Unknown tags are kept as literal text unless [`ParserConfig::strict_tags`]
//! is set; unclosed tags are closed at the end of input unless
//! [`ParserConfig::strict_closing`] is set. A close tag for an outer tag
//! also closes every tag opened inside it; a close tag that matches no open
//! tag is kept as text.
//!
//! # Extension Mechanism
//!
//! Tags are resolved through a [`TagRegistry`]. Build one from
//! [`TagRegistry::standard_builder`] to add handlers next to the built-ins:
//!
//! ```
//! use minimark::{MiniMark, ParserConfig, Tag, TagRegistry};
//! use styled::Component;
//!
//! let registry = TagRegistry::standard_builder()
//!     .register_fn(["heart"], |_, _, _| Ok(Tag::insert(Component::text("♥"))))
//!     .build();
//! let mark = MiniMark::with_config(ParserConfig::default().with_registry(registry));
//! assert_eq!(mark.parse("<red><heart/>").unwrap().plain_text(), "♥");
//! ```
//!
//! # Usage
//!
//! ```
//! use minimark::{MiniMark, Placeholders};
//! use styled::{Color, Component, NamedColor};
//!
//! let mark = MiniMark::new();
//! let tree = mark
//!     .parse_with("<red>Hi <arg:0>!", &Placeholders::positional([Component::text("Alex")]))
//!     .unwrap();
//!
//! assert_eq!(tree.plain_text(), "Hi Alex!");
//! assert_eq!(tree.segments()[0].style.color, Some(Color::Named(NamedColor::Red)));
//! ```

pub mod config;
pub mod error;
pub mod markup;
pub mod parser;
pub mod placeholder;
pub mod registry;
pub mod serializer;
pub mod tags;

// Re-export main types at crate root
pub use config::ParserConfig;
pub use error::{ParseError, TagError, TokenizeError, TokenizeErrorKind};
pub use markup::MiniMark;
pub use placeholder::{Placeholder, PlaceholderKey, Placeholders};
pub use registry::{Directive, Modifier, Tag, TagContext, TagHandler, TagRegistry, TagRegistryBuilder};
pub use serializer::{escape_tags, serialize, strip_tags};
