//! State shared by every widget.

use foyer_core::logging::targets;
use foyer_render::{Point, Rect};
use tracing::debug;

use crate::context::UiContext;
use crate::theme::{parse_bool, ThemeElement};

/// The common state embedded in each widget type.
#[derive(Debug, Clone)]
pub struct WidgetBase {
    name: String,
    area: Rect,
    visible: bool,
    enabled: bool,
    focusable: bool,
    focused: bool,
    needs_repaint: bool,
}

impl WidgetBase {
    /// Create widget state with the given theme name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            area: Rect::ZERO,
            visible: true,
            enabled: true,
            focusable: false,
            focused: false,
            needs_repaint: true,
        }
    }

    /// The widget's theme name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The widget's area in parent coordinates.
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Set the widget's area.
    pub fn set_area(&mut self, area: Rect) {
        if self.area != area {
            self.area = area;
            self.update();
        }
    }

    /// Whether the widget is drawn.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the widget.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.update();
        }
    }

    /// Whether the widget responds to input.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable input handling.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether the widget can take focus.
    pub fn is_focusable(&self) -> bool {
        self.focusable
    }

    /// Mark the widget as a focus target.
    pub fn set_focusable(&mut self, focusable: bool) {
        self.focusable = focusable;
    }

    /// Whether the widget currently has focus.
    pub fn has_focus(&self) -> bool {
        self.focused
    }

    /// Give or take focus.
    pub fn set_focused(&mut self, focused: bool) {
        if self.focused != focused {
            self.focused = focused;
            self.update();
        }
    }

    /// Mark the widget as needing a repaint.
    pub fn update(&mut self) {
        self.needs_repaint = true;
    }

    /// Whether a repaint is pending, clearing the flag.
    pub fn take_repaint(&mut self) -> bool {
        std::mem::replace(&mut self.needs_repaint, false)
    }

    /// Whether a repaint is pending.
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Configure base state from a theme element.
    ///
    /// Returns `false` for elements the base does not recognize so the
    /// caller can try its own.
    pub fn parse_element(&mut self, ctx: &UiContext, element: &ThemeElement) -> bool {
        match element.name() {
            "position" => {
                let text = element.text();
                let mut parts = text.split(',').map(|p| p.trim().parse::<f32>());
                if let (Some(Ok(x)), Some(Ok(y))) = (parts.next(), parts.next()) {
                    let scale = ctx.scale();
                    self.area.origin = Point::new(scale.norm_x(x), scale.norm_y(y));
                    self.update();
                } else {
                    debug!(
                        target: targets::THEME,
                        widget = self.name,
                        value = text,
                        "malformed position, expected x,y"
                    );
                }
                true
            }
            "visible" => {
                self.set_visible(parse_bool(element));
                true
            }
            _ => {
                debug!(
                    target: targets::THEME,
                    widget = self.name,
                    element = element.name(),
                    "unhandled theme element"
                );
                false
            }
        }
    }
}
