//! The widget trait.

use crate::context::UiContext;
use crate::theme::ThemeElement;

use super::base::WidgetBase;
use super::events::KeyEvent;

/// Behavior every widget implements.
pub trait Widget {
    /// Shared widget state.
    fn widget_base(&self) -> &WidgetBase;

    /// Mutable shared widget state.
    fn widget_base_mut(&mut self) -> &mut WidgetBase;

    /// Configure the widget from a single theme element.
    ///
    /// Returns `true` when the element was recognized. The default
    /// delegates to [`WidgetBase::parse_element`].
    fn parse_element(&mut self, ctx: &UiContext, element: &ThemeElement) -> bool {
        self.widget_base_mut().parse_element(ctx, element)
    }

    /// Advance animation state by one frame tick.
    fn pulse(&mut self) {}

    /// Handle a key press. Returns `true` when the event was consumed.
    fn key_press_event(&mut self, _ctx: &UiContext, _event: &KeyEvent) -> bool {
        false
    }
}
