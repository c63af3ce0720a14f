//! A static text widget.

use foyer_render::{FontProperties, Point, Rect};

use crate::widget::{Justification, Widget, WidgetBase};

/// Displays a run of text with a font and justification.
///
/// The text is laid out inside `draw_rect`, offset by `start_position`.
/// Scrolling text fields move the start position negative to bring later
/// parts of a long string into view.
#[derive(Debug, Clone)]
pub struct Label {
    base: WidgetBase,
    text: String,
    font: FontProperties,
    justification: Justification,
    start_position: Point,
    draw_rect: Rect,
}

impl Label {
    /// Create an empty label with the given theme name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: WidgetBase::new(name),
            text: String::new(),
            font: FontProperties::default(),
            justification: Justification::default(),
            start_position: Point::ZERO,
            draw_rect: Rect::ZERO,
        }
    }

    /// The displayed text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the displayed text. Equal text is a no-op.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.text != text {
            self.text = text;
            self.base.update();
        }
    }

    /// The label's font.
    pub fn font(&self) -> &FontProperties {
        &self.font
    }

    /// Replace the label's font.
    pub fn set_font(&mut self, font: FontProperties) {
        self.font = font;
        self.base.update();
    }

    /// The text justification.
    pub fn justification(&self) -> Justification {
        self.justification
    }

    /// Replace the text justification.
    pub fn set_justification(&mut self, justification: Justification) {
        if self.justification != justification {
            self.justification = justification;
            self.base.update();
        }
    }

    /// The label's area in parent coordinates.
    pub fn area(&self) -> Rect {
        self.base.area()
    }

    /// Set the label's area. The drawing rectangle follows it.
    pub fn set_area(&mut self, area: Rect) {
        self.base.set_area(area);
        self.draw_rect = area;
    }

    /// The rectangle text is laid out in.
    pub fn draw_rect(&self) -> Rect {
        self.draw_rect
    }

    /// The layout offset within the drawing rectangle.
    pub fn start_position(&self) -> Point {
        self.start_position
    }

    /// Set the layout offset absolutely.
    pub fn set_start_position(&mut self, x: f32, y: f32) {
        self.start_position = Point::new(x, y);
        self.base.update();
    }

    /// Shift the layout offset.
    pub fn move_start_position(&mut self, dx: f32, dy: f32) {
        self.start_position = Point::new(
            self.start_position.x + dx,
            self.start_position.y + dy,
        );
        self.base.update();
    }
}

impl Widget for Label {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }
}
