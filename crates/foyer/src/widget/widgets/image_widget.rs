//! A widget displaying a single image.

use foyer_render::{Image, Point, Rect};

use crate::widget::{Widget, WidgetBase};

/// Displays an image at a fixed position.
///
/// Composite widgets use this for decorations such as backgrounds and
/// text cursors.
#[derive(Debug, Clone)]
pub struct ImageWidget {
    base: WidgetBase,
    image: Option<Image>,
}

impl ImageWidget {
    /// Create an empty image widget with the given theme name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: WidgetBase::new(name),
            image: None,
        }
    }

    /// The displayed image, if any.
    pub fn image(&self) -> Option<&Image> {
        self.image.as_ref()
    }

    /// Set the displayed image. The widget resizes to the image,
    /// keeping its position.
    pub fn set_image(&mut self, image: Image) {
        let mut area = self.base.area();
        area.size = image.size();
        self.base.set_area(area);
        self.image = Some(image);
        self.base.update();
    }

    /// The widget's area in parent coordinates.
    pub fn area(&self) -> Rect {
        self.base.area()
    }

    /// Move the widget without changing its size.
    pub fn set_position(&mut self, x: f32, y: f32) {
        let mut area = self.base.area();
        area.origin = Point::new(x, y);
        self.base.set_area(area);
    }

    /// Whether the widget is drawn.
    pub fn is_visible(&self) -> bool {
        self.base.is_visible()
    }

    /// Show or hide the widget.
    pub fn set_visible(&mut self, visible: bool) {
        self.base.set_visible(visible);
    }
}

impl Widget for ImageWidget {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }
}
