//! Concrete widget types.

mod image_widget;
mod label;
mod text_edit;

pub use image_widget::ImageWidget;
pub use label::Label;
pub use text_edit::{MoveDirection, TextEdit};
