//! Error types for styled text values.

use thiserror::Error;

/// Errors that can occur when parsing a color.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorParseError {
    /// Unknown color name.
    #[error("unknown color name: {0}")]
    UnknownName(String),

    /// Invalid hex color format.
    #[error("invalid hex color: {0} (expected #RRGGBB)")]
    InvalidHex(String),
}

/// Errors that can occur when naming a click action or decoration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NameError {
    /// Unknown click action name.
    #[error("unknown click action: {0}")]
    UnknownClickAction(String),

    /// Unknown decoration name.
    #[error("unknown decoration: {0}")]
    UnknownDecoration(String),
}
