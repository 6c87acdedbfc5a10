//! Style types for styled text.
//!
//! A Style combines a color, decoration states and interaction metadata into a
//! single specification. Every attribute is optional: an unset attribute is
//! inherited from the enclosing component.

use bitflags::bitflags;

use crate::color::Color;
use crate::error::NameError;
use crate::event::{ClickEvent, HoverEvent};

bitflags! {
    /// A set of text decorations.
    ///
    /// # Example
    ///
    /// ```
    /// use styled::Decorations;
    ///
    /// let mut set = Decorations::empty();
    /// set |= Decorations::BOLD;
    /// assert!(set.contains(Decorations::BOLD));
    /// ```
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Decorations: u8 {
        const BOLD = 1 << 0;
        const ITALIC = 1 << 1;
        const UNDERLINED = 1 << 2;
        const STRIKETHROUGH = 1 << 3;
        const OBFUSCATED = 1 << 4;
    }
}

const DECORATION_NAMES: [(Decorations, &str); 5] = [
    (Decorations::BOLD, "bold"),
    (Decorations::ITALIC, "italic"),
    (Decorations::UNDERLINED, "underlined"),
    (Decorations::STRIKETHROUGH, "strikethrough"),
    (Decorations::OBFUSCATED, "obfuscated"),
];

impl Decorations {
    /// Each single decoration with its canonical name, in a fixed order.
    pub fn named() -> impl Iterator<Item = (Decorations, &'static str)> {
        DECORATION_NAMES.into_iter()
    }

    /// Canonical name of a single decoration flag.
    ///
    /// Returns `None` for the empty set or a combination of flags.
    pub fn name(self) -> Option<&'static str> {
        DECORATION_NAMES
            .iter()
            .find(|(flag, _)| *flag == self)
            .map(|(_, name)| *name)
    }

    /// Look up a single decoration by its canonical name.
    pub fn from_canonical_name(name: &str) -> Result<Self, NameError> {
        DECORATION_NAMES
            .iter()
            .find(|(_, candidate)| candidate.eq_ignore_ascii_case(name))
            .map(|(flag, _)| *flag)
            .ok_or_else(|| NameError::UnknownDecoration(name.to_string()))
    }
}

/// Complete style specification for a component.
///
/// Decorations are tri-state: explicitly on, explicitly off, or unset
/// (inherited). The two sets never overlap.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    /// Text color.
    pub color: Option<Color>,
    /// Action performed when the text is clicked.
    pub click: Option<ClickEvent>,
    /// Tooltip shown when the text is hovered.
    pub hover: Option<HoverEvent>,
    /// Text inserted into the input box on shift-click.
    pub insertion: Option<String>,
    /// Font resource key.
    pub font: Option<String>,
    enabled: Decorations,
    disabled: Decorations,
}

impl Style {
    /// Create a new empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// A style that only sets a color.
    pub fn color(color: impl Into<Color>) -> Self {
        Self {
            color: Some(color.into()),
            ..Self::default()
        }
    }

    /// A style that only sets one decoration state.
    pub fn decorated(decoration: Decorations, state: bool) -> Self {
        Self::new().with_decoration(decoration, state)
    }

    /// Returns true if no style properties are set.
    pub fn is_empty(&self) -> bool {
        self.color.is_none()
            && self.click.is_none()
            && self.hover.is_none()
            && self.insertion.is_none()
            && self.font.is_none()
            && self.enabled.is_empty()
            && self.disabled.is_empty()
    }

    /// State of a decoration: `Some(true)`, `Some(false)`, or `None` if unset.
    pub fn decoration(&self, decoration: Decorations) -> Option<bool> {
        if self.enabled.contains(decoration) {
            Some(true)
        } else if self.disabled.contains(decoration) {
            Some(false)
        } else {
            None
        }
    }

    /// Returns true if the decoration is explicitly on.
    pub fn has_decoration(&self, decoration: Decorations) -> bool {
        self.decoration(decoration) == Some(true)
    }

    /// Decorations explicitly switched on.
    pub fn enabled_decorations(&self) -> Decorations {
        self.enabled
    }

    /// Decorations explicitly switched off.
    pub fn disabled_decorations(&self) -> Decorations {
        self.disabled
    }

    /// Set (or clear, with `None`) the state of one or more decorations.
    pub fn set_decoration(&mut self, decoration: Decorations, state: Option<bool>) {
        self.enabled.remove(decoration);
        self.disabled.remove(decoration);
        match state {
            Some(true) => self.enabled.insert(decoration),
            Some(false) => self.disabled.insert(decoration),
            None => {}
        }
    }

    /// Builder form of [`Style::set_decoration`].
    pub fn with_decoration(mut self, decoration: Decorations, state: bool) -> Self {
        self.set_decoration(decoration, Some(state));
        self
    }

    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_click(mut self, click: ClickEvent) -> Self {
        self.click = Some(click);
        self
    }

    pub fn with_hover(mut self, hover: HoverEvent) -> Self {
        self.hover = Some(hover);
        self
    }

    pub fn with_insertion(mut self, insertion: impl Into<String>) -> Self {
        self.insertion = Some(insertion.into());
        self
    }

    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    /// Apply another style on top of this one.
    ///
    /// Attributes set in `other` override those in `self`; unset attributes
    /// in `other` leave `self` untouched.
    pub fn apply(&self, other: &Style) -> Style {
        Style {
            color: other.color.or(self.color),
            click: other.click.clone().or_else(|| self.click.clone()),
            hover: other.hover.clone().or_else(|| self.hover.clone()),
            insertion: other.insertion.clone().or_else(|| self.insertion.clone()),
            font: other.font.clone().or_else(|| self.font.clone()),
            enabled: (self.enabled - other.disabled) | other.enabled,
            disabled: (self.disabled - other.enabled) | other.disabled,
        }
    }
}
