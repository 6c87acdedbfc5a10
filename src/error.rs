use thiserror::Error;

use minimark::ParseError;
use styled::{ColorParseError, NameError};

#[derive(Error, Debug)]
pub enum MarkupError {
    #[error("Markup error: {0}")]
    Parse(#[from] ParseError),

    #[error("Color error: {0}")]
    Color(#[from] ColorParseError),

    #[error("Name error: {0}")]
    Name(#[from] NameError),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, MarkupError>;
