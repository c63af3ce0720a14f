//! Error types for theme parsing.

use thiserror::Error;

/// Errors that can occur while parsing theme XML.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// The underlying XML was malformed.
    #[error("malformed theme XML: {0}")]
    Xml(#[from] quick_xml::Error),

    /// An element attribute could not be decoded.
    #[error("malformed attribute: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    /// The document contained no root element.
    #[error("theme XML has no root element")]
    MissingRoot,
}

/// Result type for theme parsing.
pub type ThemeResult<T> = Result<T, ThemeError>;
