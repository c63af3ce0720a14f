//! Foyer — a themeable widget toolkit for ten-foot media-center interfaces.
//!
//! Widgets are configured from theme XML, driven by translated key actions,
//! and ticked by a periodic pulse for animation. The toolkit is
//! single-threaded and callback-driven: the host constructs widgets, feeds
//! them theme elements, forwards key events, and pulses them once per frame.
//!
//! The central widget is [`widget::widgets::TextEdit`], a themeable
//! single-line/multi-line text-entry field with password masking, character
//! filtering, max-length enforcement, and a blinking cursor.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use foyer::context::UiContext;
//! use foyer::widget::widgets::TextEdit;
//! use foyer_render::{FixedAdvanceMetrics, Rect};
//!
//! let ctx = UiContext::new(Arc::new(FixedAdvanceMetrics::default()));
//! let mut edit = TextEdit::new("editbox");
//! edit.set_area(Rect::new(0.0, 0.0, 300.0, 40.0));
//!
//! edit.insert_character(&ctx, "h");
//! edit.insert_character(&ctx, "i");
//! assert_eq!(edit.text(), "hi");
//! ```

pub mod context;
pub mod theme;
pub mod widget;

pub use context::UiContext;
