//! Interaction metadata carried through a style: click actions and hover tooltips.

use crate::component::Component;
use crate::error::NameError;

/// What happens when a click event fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClickAction {
    OpenUrl,
    OpenFile,
    RunCommand,
    SuggestCommand,
    ChangePage,
    CopyToClipboard,
}

impl ClickAction {
    /// Every click action.
    pub const ALL: [ClickAction; 6] = [
        ClickAction::OpenUrl,
        ClickAction::OpenFile,
        ClickAction::RunCommand,
        ClickAction::SuggestCommand,
        ClickAction::ChangePage,
        ClickAction::CopyToClipboard,
    ];

    /// The snake_case name used in markup.
    pub fn name(self) -> &'static str {
        match self {
            ClickAction::OpenUrl => "open_url",
            ClickAction::OpenFile => "open_file",
            ClickAction::RunCommand => "run_command",
            ClickAction::SuggestCommand => "suggest_command",
            ClickAction::ChangePage => "change_page",
            ClickAction::CopyToClipboard => "copy_to_clipboard",
        }
    }

    /// Look up an action by name (case-insensitive).
    pub fn from_name(name: &str) -> Result<Self, NameError> {
        Self::ALL
            .into_iter()
            .find(|action| action.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| NameError::UnknownClickAction(name.to_string()))
    }
}

/// A click action with its payload (URL, command, page number...).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClickEvent {
    pub action: ClickAction,
    pub value: String,
}

impl ClickEvent {
    pub fn new(action: ClickAction, value: impl Into<String>) -> Self {
        Self {
            action,
            value: value.into(),
        }
    }
}

/// Tooltip content shown while hovering.
#[derive(Clone, Debug, PartialEq)]
pub enum HoverEvent {
    /// Show a styled text tooltip.
    ShowText(Box<Component>),
    /// Show an item tooltip.
    ShowItem { item: String, count: u32 },
    /// Show an entity tooltip.
    ShowEntity {
        kind: String,
        id: String,
        name: Option<Box<Component>>,
    },
}

impl HoverEvent {
    /// Tooltip showing the given component.
    pub fn show_text(text: Component) -> Self {
        HoverEvent::ShowText(Box::new(text))
    }

    /// The snake_case action name used in markup.
    pub fn action_name(&self) -> &'static str {
        match self {
            HoverEvent::ShowText(_) => "show_text",
            HoverEvent::ShowItem { .. } => "show_item",
            HoverEvent::ShowEntity { .. } => "show_entity",
        }
    }
}
