//! Rendering-facing value types and resources for Foyer.
//!
//! Widgets describe what a paint pass should draw: geometry, colors, image
//! content, and text measured against font metrics. This crate holds those
//! shared types. It deliberately contains no GPU or window-system code; a
//! renderer consumes widget state, it is not driven from here.

mod error;
mod font;
mod image_resource;
mod types;

pub use error::{RenderError, RenderResult};
pub use font::{FixedAdvanceMetrics, FontMap, FontMetrics, FontProperties, SharedFontMetrics};
pub use image_resource::Image;
pub use types::{Color, Point, Rect, Size};
