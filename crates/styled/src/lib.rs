//! Immutable styled text components.
//!
//! This crate provides the tree that markup parsers build and renderers or
//! encoders consume: a [`Component`] holds text (or a keybind / translation
//! key), a [`Style`] and ordered children that inherit whatever style
//! attributes they do not set themselves.
//!
//! # Usage
//!
//! ```
//! use styled::{Color, Component, Decorations, NamedColor, Style};
//!
//! let message = Component::empty()
//!     .with_style(Style::color(NamedColor::Gold))
//!     .append(Component::text("Hello "))
//!     .append(Component::text("World").with_style(Style::decorated(Decorations::BOLD, true)));
//!
//! assert_eq!(message.plain_text(), "Hello World");
//! let segments = message.segments();
//! assert_eq!(segments[1].style.color, Some(Color::Named(NamedColor::Gold)));
//! ```

pub mod color;
pub mod component;
pub mod error;
pub mod event;
pub mod segment;
pub mod style;

// Re-export main types at crate root
pub use color::{Color, NamedColor};
pub use component::{Component, Content};
pub use error::{ColorParseError, NameError};
pub use event::{ClickAction, ClickEvent, HoverEvent};
pub use segment::Segment;
pub use style::{Decorations, Style};
