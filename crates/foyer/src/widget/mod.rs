//! The widget framework.
//!
//! Widgets own a rectangular area, participate in theme configuration via
//! [`Widget::parse_element`], receive translated key actions through
//! [`Widget::key_press_event`], and animate on the periodic
//! [`Widget::pulse`] tick.

mod base;
mod events;
mod justification;
mod keymap;
mod traits;
pub mod widgets;

pub use base::WidgetBase;
pub use events::{Key, KeyEvent};
pub use justification::{CharFilter, Justification};
pub use keymap::KeyBindings;
pub use traits::Widget;
