//! Theme XML configuration.
//!
//! Themes describe widget trees as XML. Widgets are configured
//! incrementally: the loader walks a widget's child elements and hands
//! them to [`crate::widget::Widget::parse_element`] one at a time.

mod element;
mod error;
mod parse;

pub use element::ThemeElement;
pub use error::{ThemeError, ThemeResult};
pub use parse::{parse_alignment, parse_bool, parse_rect};
