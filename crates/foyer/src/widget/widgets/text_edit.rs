//! Themeable text-entry widget.
//!
//! `TextEdit` composes three child widgets, a background image, a text
//! label, and a cursor image, and coordinates their geometry and
//! visibility on every accepted keystroke and animation tick. It owns the
//! editing semantics: insertion, deletion, caret movement with horizontal
//! scrolling, password masking, character filtering and max-length
//! enforcement.
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
//! edit.value_changed.connect(|text| {
//!     println!("value is now {text}");
//! });
//!
//! edit.insert_character(&ctx, "a");
//! ```

use foyer_core::logging::targets;
use foyer_core::Signal;
use static_assertions::assert_impl_all;
use tracing::{error, warn};
use unicode_segmentation::UnicodeSegmentation;

use foyer_render::{Color, Image, Rect, Size};

use crate::context::UiContext;
use crate::theme::{parse_alignment, parse_bool, parse_rect, ThemeElement};
use crate::widget::{CharFilter, Justification, KeyEvent, Widget, WidgetBase};

use super::image_widget::ImageWidget;
use super::label::Label;

/// Character shown per logical character in password mode.
const MASK_CHAR: char = '*';

/// Caret movement operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    /// One position left.
    Left,
    /// One position right.
    Right,
    /// To the end of the text.
    End,
}

/// A single-line/multi-line text-entry field driven by translated key
/// actions.
///
/// The caret index is the logical position of the character immediately
/// left of the insertion point; `None` means the caret sits before the
/// first character. Logical positions are grapheme clusters, so combining
/// sequences move and delete as single units.
///
/// # Signals
///
/// - `value_changed`: emitted with the new text whenever committed
///   content actually changes.
pub struct TextEdit {
    base: WidgetBase,

    /// The full, unmasked text content.
    message: String,

    /// Caret index, `None` when before the first character.
    position: Option<usize>,

    /// Character classes rejected on insertion.
    filter: CharFilter,

    /// Whether displayed text is masked.
    is_password: bool,

    /// Alignment and wrap flags applied to the text child.
    justification: Justification,

    /// Whether a cursor glyph is installed and should blink.
    show_cursor: bool,

    /// Ticks since the cursor last toggled.
    blink_interval: u32,

    /// Ticks between cursor toggles.
    cursor_blink_rate: u32,

    /// Symmetric inset applied to the text rectangle.
    padding_margin: f32,

    /// Upper bound on content length, `None` for unbounded.
    max_length: Option<usize>,

    background_image: ImageWidget,
    label: Label,
    cursor_image: ImageWidget,

    /// Emitted whenever the committed text changes.
    pub value_changed: Signal<String>,
}

impl TextEdit {
    /// Create an empty text edit with the given theme name.
    pub fn new(name: impl Into<String>) -> Self {
        let mut base = WidgetBase::new(name);
        base.set_focusable(true);

        Self {
            base,
            message: String::new(),
            position: None,
            filter: CharFilter::empty(),
            is_password: false,
            justification: Justification::default(),
            show_cursor: false,
            blink_interval: 0,
            cursor_blink_rate: 40,
            padding_margin: 0.0,
            max_length: None,
            background_image: ImageWidget::new("backgroundimage"),
            label: Label::new("textarea"),
            cursor_image: ImageWidget::new("cursorimage"),
            value_changed: Signal::new(),
        }
    }

    /// The current text content, unmasked.
    pub fn text(&self) -> &str {
        &self.message
    }

    /// The caret index, `None` when before the first character.
    pub fn cursor_position(&self) -> Option<usize> {
        self.position
    }

    /// Whether password masking is active.
    pub fn is_password(&self) -> bool {
        self.is_password
    }

    /// Enable or disable password masking. Content is unaffected, only
    /// the displayed string changes.
    pub fn set_password(&mut self, is_password: bool) {
        if self.is_password != is_password {
            self.is_password = is_password;
            let display = self.display_text();
            self.label.set_text(display);
            self.base.update();
        }
    }

    /// The active character filter.
    pub fn filter(&self) -> CharFilter {
        self.filter
    }

    /// Set which character classes insertion rejects.
    pub fn set_filter(&mut self, filter: CharFilter) {
        self.filter = filter;
    }

    /// The maximum content length, `None` for unbounded.
    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    /// Set the maximum content length. Zero means unbounded.
    pub fn set_max_length(&mut self, length: usize) {
        self.max_length = if length == 0 { None } else { Some(length) };
    }

    /// Ticks between cursor blink toggles.
    pub fn set_cursor_blink_rate(&mut self, rate: u32) {
        self.cursor_blink_rate = rate;
    }

    /// The widget's area in parent coordinates.
    pub fn area(&self) -> Rect {
        self.base.area()
    }

    /// Set the widget's area and recompute the inner text rectangle.
    pub fn set_area(&mut self, area: Rect) {
        self.base.set_area(area);
        self.set_text_rect(Some(area));
    }

    /// Set the symmetric text inset. The cursor glyph rests at the
    /// margin corner when the field is empty.
    pub fn set_padding_margin(&mut self, margin: f32) {
        self.padding_margin = margin;
        self.set_text_rect(None);
        self.cursor_image.set_position(margin, margin);
    }

    /// The background child widget.
    pub fn background(&self) -> &ImageWidget {
        &self.background_image
    }

    /// The text child widget.
    pub fn text_label(&self) -> &Label {
        &self.label
    }

    /// The cursor child widget.
    pub fn cursor(&self) -> &ImageWidget {
        &self.cursor_image
    }

    /// Install a cursor glyph, scaled to the font's line height with
    /// aspect ratio preserved. Empty images are rejected.
    pub fn set_cursor_image(&mut self, ctx: &UiContext, image: Image) {
        if image.is_empty() {
            warn!(
                target: targets::WIDGET,
                widget = self.base.name(),
                "ignoring empty cursor image"
            );
            return;
        }

        let height = ctx.metrics().line_height(self.label.font());
        let image = if height > 0.0 {
            let width = height / image.height() as f32 * image.width() as f32;
            image.resized(Size::new(width, height))
        } else {
            image
        };
        self.cursor_image.set_image(image);

        self.show_cursor = true;
        // The glyph now reserves trailing space in the text rectangle.
        self.set_text_rect(None);
    }

    /// Install a background image, stretched over the widget's area.
    pub fn set_background_image(&mut self, image: Image) {
        let image = image.resized(self.base.area().size);
        self.background_image.set_position(0.0, 0.0);
        self.background_image.set_image(image);
    }

    /// Recompute the inner text rectangle from `area` (or the widget's
    /// own area), applying the padding inset and reserving the cursor
    /// glyph's width. An invalid result is skipped.
    fn set_text_rect(&mut self, area: Option<Rect>) {
        let source = match area {
            Some(rect) if !rect.is_empty() => rect,
            _ => self.base.area(),
        };

        let mut rect = Rect::new(
            self.padding_margin,
            self.padding_margin,
            source.width() - self.padding_margin * 2.0,
            source.height() - self.padding_margin * 2.0,
        );
        rect.size.width -= self.cursor_image.area().width();

        if !rect.is_empty() {
            self.label.set_area(rect);
        }
    }

    /// The string the label displays: the content, or one mask character
    /// per logical character in password mode.
    fn display_text(&self) -> String {
        if self.is_password {
            MASK_CHAR.to_string().repeat(grapheme_count(&self.message))
        } else {
            self.message.clone()
        }
    }

    /// Replace the text content.
    ///
    /// Equal text is a no-op. `move_cursor` relocates the caret to the
    /// end. Emits `value_changed` exactly once per actual change.
    pub fn set_text(&mut self, ctx: &UiContext, text: impl Into<String>, move_cursor: bool) {
        let text = text.into();
        if self.message == text {
            return;
        }

        self.message = text;
        let display = self.display_text();
        self.label.set_text(display);

        if move_cursor {
            self.move_cursor(ctx, MoveDirection::End);
        }

        self.base.update();
        self.value_changed.emit(self.message.clone());
    }

    /// Attempt to insert `character` at the caret.
    ///
    /// Returns `true` when the keystroke was consumed. A field already at
    /// its maximum length consumes the keystroke without mutating, so the
    /// event is not reinterpreted elsewhere. Control characters and
    /// filtered classes are rejected with `false`.
    pub fn insert_character(&mut self, ctx: &UiContext, character: &str) -> bool {
        if let Some(max) = self.max_length {
            if grapheme_count(&self.message) >= max {
                return true;
            }
        }

        let Some(first) = character.chars().next() else {
            return false;
        };
        let Some(class) = classify(first) else {
            return false;
        };

        let rejected = match class {
            CharClass::Letter => self.filter.contains(CharFilter::ALPHA),
            CharClass::Number => self.filter.contains(CharFilter::NUMERIC),
            CharClass::Symbol => self.filter.contains(CharFilter::SYMBOLS),
            CharClass::Punct => self.filter.contains(CharFilter::PUNCT),
            CharClass::Space => false,
        };
        if rejected {
            return false;
        }

        let index = self.position.map_or(0, |p| p + 1);
        let offset = grapheme_byte_offset(&self.message, index);
        let mut newmessage = self.message.clone();
        newmessage.insert_str(offset, character);

        self.set_text(ctx, newmessage, false);
        self.move_cursor(ctx, MoveDirection::Right);

        true
    }

    /// Remove the character at the caret.
    ///
    /// The caret moves left before the content is replaced; the move uses
    /// the pre-deletion string for its pixel measurements.
    pub fn remove_character(&mut self, ctx: &UiContext) {
        if self.message.is_empty() {
            return;
        }
        let Some(pos) = self.position else {
            return;
        };

        let start = grapheme_byte_offset(&self.message, pos);
        let end = grapheme_byte_offset(&self.message, pos + 1);
        let mut newmessage = self.message.clone();
        newmessage.replace_range(start..end, "");

        self.move_cursor(ctx, MoveDirection::Left);
        self.set_text(ctx, newmessage, false);
    }

    /// Move the caret, scrolling the text window when it would leave the
    /// visible rectangle. Returns `false` at a boundary, with no
    /// geometry change.
    pub fn move_cursor(&mut self, ctx: &UiContext, direction: MoveDirection) -> bool {
        let metrics = ctx.metrics();
        let font = self.label.font().clone();
        let cursor_pos = self.cursor_image.area().left();
        let cursor_width = self.cursor_image.area().width();
        let text_rect = self.label.area();
        let draw_rect = self.label.draw_rect();
        let display = self.display_text();
        let new_cursor_pos;

        match direction {
            MoveDirection::Left => {
                let Some(pos) = self.position else {
                    return false;
                };

                let step = grapheme_at(&display, pos)
                    .map_or(0.0, |g| metrics.measure(&font, g).width);
                let mut candidate = cursor_pos - step;

                if candidate < self.padding_margin {
                    candidate = self.padding_margin;
                    if pos == 0 {
                        self.label.set_start_position(0.0, 0.0);
                    } else {
                        self.label.move_start_position(step, 0.0);
                    }
                }

                new_cursor_pos = candidate;
                self.position = pos.checked_sub(1);
            }
            MoveDirection::Right => {
                let next = self.position.map_or(0, |p| p + 1);
                if next >= grapheme_count(&display) {
                    return false;
                }

                let step = grapheme_at(&display, next)
                    .map_or(0.0, |g| metrics.measure(&font, g).width);
                let candidate = cursor_pos + step;

                if candidate > text_rect.width() {
                    // Push the text left; the caret stays put visually.
                    self.label.move_start_position(-step, 0.0);
                    new_cursor_pos = cursor_pos;
                } else {
                    new_cursor_pos = candidate;
                }

                self.position = Some(next);
            }
            MoveDirection::End => {
                let message_width = metrics.measure(&font, &display).width;

                if message_width + cursor_width >= text_rect.width() {
                    // Scroll so the end of the text is flush against the
                    // right edge of the text rectangle.
                    let new_x = draw_rect.width() - (message_width + cursor_width);
                    self.label.set_start_position(new_x, 0.0);
                    new_cursor_pos = message_width + new_x + self.padding_margin;
                } else {
                    self.label.set_start_position(0.0, 0.0);
                    new_cursor_pos = if message_width <= 0.0 {
                        self.padding_margin
                    } else {
                        message_width + self.padding_margin
                    };
                }

                self.position = grapheme_count(&display).checked_sub(1);
            }
        }

        self.cursor_image.set_position(new_cursor_pos, text_rect.top());
        self.base.update();
        true
    }

    /// Copy configuration from another text edit.
    ///
    /// Scalar configuration and the child subtree are copied; text
    /// content, caret and signal connections are reset.
    pub fn copy_from(&mut self, other: &TextEdit) {
        self.message.clear();
        self.position = None;

        self.blink_interval = other.blink_interval;
        self.cursor_blink_rate = other.cursor_blink_rate;
        self.show_cursor = other.show_cursor;
        self.max_length = other.max_length;
        self.justification = other.justification;
        self.padding_margin = other.padding_margin;
        self.filter = other.filter;
        self.is_password = other.is_password;

        self.base = other.base.clone();
        self.background_image = other.background_image.clone();
        self.cursor_image = other.cursor_image.clone();
        self.label = other.label.clone();
        self.label.set_text("");
    }

    /// Create a configured copy with empty content.
    pub fn create_copy(&self) -> TextEdit {
        let mut copy = TextEdit::new(self.base.name());
        copy.copy_from(self);
        copy
    }
}

impl Widget for TextEdit {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn parse_element(&mut self, ctx: &UiContext, element: &ThemeElement) -> bool {
        match element.name() {
            "area" => {
                if let Some(rect) = parse_rect(element, ctx) {
                    self.set_area(rect);
                }
            }
            "font" => {
                let name = element.text();
                match ctx.font(name) {
                    Some(font) => self.label.set_font(font),
                    None => warn!(
                        target: targets::THEME,
                        widget = self.base.name(),
                        font = name,
                        "unknown font"
                    ),
                }
            }
            "value" => {
                let lang = element
                    .attribute("lang")
                    .unwrap_or_default()
                    .to_lowercase();
                if lang.is_empty() {
                    self.message = ctx.translate(element.text()).to_string();
                } else if lang == ctx.language_and_variant() || lang == ctx.language() {
                    self.message = element.text().to_string();
                }
                // Initial content set during configuration does not notify.
                let display = self.display_text();
                self.label.set_text(display);
            }
            "multiline" => {
                if parse_bool(element) {
                    self.justification |= Justification::WORD_WRAP;
                } else {
                    self.justification -= Justification::WORD_WRAP;
                }
                self.label.set_justification(self.justification);
            }
            "align" => {
                // Preserve the wrap flag, replace the alignment.
                self.justification = (self.justification & Justification::WORD_WRAP)
                    | parse_alignment(&element.text().to_lowercase());
                self.label.set_justification(self.justification);
            }
            "maxlength" => {
                let length = element.text().trim().parse::<usize>().unwrap_or(0);
                self.set_max_length(length);
            }
            "margin" => {
                let margin = element.text().trim().parse::<f32>().unwrap_or(0.0);
                self.set_padding_margin(ctx.scale().norm_x(margin));
            }
            "cursor" => {
                if let Some(filename) =
                    element.attribute("filename").filter(|f| !f.is_empty())
                {
                    match ctx.load_image(filename) {
                        Ok(image) => self.set_cursor_image(ctx, image),
                        Err(err) => warn!(
                            target: targets::THEME,
                            widget = self.base.name(),
                            filename,
                            error = %err,
                            "failed to load cursor image"
                        ),
                    }
                }
            }
            "background" => {
                let image = element
                    .attribute("filename")
                    .filter(|f| !f.is_empty())
                    .and_then(|f| ctx.load_image(f).ok())
                    .or_else(default_background);
                if let Some(image) = image {
                    self.set_background_image(image);
                }
            }
            _ => return self.base.parse_element(ctx, element),
        }

        true
    }

    fn pulse(&mut self) {
        if self.show_cursor && self.base.has_focus() {
            if self.blink_interval > self.cursor_blink_rate {
                self.blink_interval = 0;
                let visible = self.cursor_image.is_visible();
                self.cursor_image.set_visible(!visible);
            }
            self.blink_interval += 1;
        } else {
            self.cursor_image.set_visible(false);
        }

        self.background_image.pulse();
        self.label.pulse();
        self.cursor_image.pulse();
    }

    fn key_press_event(&mut self, ctx: &UiContext, event: &KeyEvent) -> bool {
        let actions = ctx.bindings().translate_key_press("Global", event);
        let mut handled = false;

        for action in actions {
            handled = true;

            match action.as_str() {
                "LEFT" => {
                    if !self.move_cursor(ctx, MoveDirection::Left) {
                        handled = false;
                    }
                }
                "RIGHT" => {
                    if !self.move_cursor(ctx, MoveDirection::Right) {
                        handled = false;
                    }
                }
                "BACKSPACE" | "DELETE" => self.remove_character(ctx),
                // Other bound actions are reserved: consumed, no effect.
                _ => {}
            }

            if handled {
                break;
            }
        }

        if !handled && self.insert_character(ctx, &event.text) {
            handled = true;
        }

        handled
    }
}

assert_impl_all!(TextEdit: Send, Sync);

/// The default background when a theme supplies none: a small vertical
/// gradient the paint pass stretches over the widget.
fn default_background() -> Option<Image> {
    match Image::gradient(
        Size::new(10.0, 10.0),
        Color::from_rgb8(0xEE, 0xEE, 0xEE),
        Color::from_rgb8(0xAE, 0xAE, 0xAE),
        255,
    ) {
        Ok(image) => Some(image),
        Err(err) => {
            error!(
                target: targets::WIDGET,
                error = %err,
                "failed to synthesize default background"
            );
            None
        }
    }
}

/// Character classes recognized for insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Letter,
    Number,
    Space,
    Punct,
    Symbol,
}

/// Classify an input character. `None` means not insertable.
fn classify(c: char) -> Option<CharClass> {
    if c.is_control() {
        return None;
    }

    if c.is_alphabetic() {
        Some(CharClass::Letter)
    } else if c.is_numeric() {
        Some(CharClass::Number)
    } else if c.is_whitespace() {
        Some(CharClass::Space)
    } else if "$+<=>^`|~".contains(c) {
        Some(CharClass::Symbol)
    } else if c.is_ascii_punctuation() {
        Some(CharClass::Punct)
    } else {
        Some(CharClass::Symbol)
    }
}

fn grapheme_count(s: &str) -> usize {
    s.graphemes(true).count()
}

/// Byte offset of the start of the `index`-th grapheme, or the string
/// length past the end.
fn grapheme_byte_offset(s: &str, index: usize) -> usize {
    s.grapheme_indices(true)
        .nth(index)
        .map_or(s.len(), |(offset, _)| offset)
}

fn grapheme_at(s: &str, index: usize) -> Option<&str> {
    s.graphemes(true).nth(index)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use foyer_render::{FixedAdvanceMetrics, Point};

    use crate::widget::Key;

    use super::*;

    // With these metrics and the 14px default font, every character
    // advances 7px and the line height is 14px.
    fn ctx() -> UiContext {
        UiContext::new(Arc::new(FixedAdvanceMetrics::new(0.5, 1.0)))
    }

    // Area 50x24 with a 2px margin gives a 46x20 text rectangle while no
    // cursor glyph is installed.
    fn edit() -> TextEdit {
        let mut edit = TextEdit::new("editbox");
        edit.set_area(Rect::new(0.0, 0.0, 50.0, 24.0));
        edit.set_padding_margin(2.0);
        edit
    }

    fn solid(width: f32, height: f32) -> Image {
        Image::solid(Size::new(width, height), Color::from_rgb8(255, 255, 255)).unwrap()
    }

    #[test]
    fn test_defaults() {
        let edit = TextEdit::new("editbox");
        assert_eq!(edit.text(), "");
        assert_eq!(edit.cursor_position(), None);
        assert_eq!(edit.max_length(), None);
        assert!(!edit.is_password());
        assert!(edit.filter().is_empty());
        assert!(edit.widget_base().is_focusable());
    }

    #[test]
    fn test_insert_and_remove() {
        let ctx = ctx();
        let mut edit = edit();

        assert!(edit.insert_character(&ctx, "A"));
        assert_eq!(edit.text(), "A");
        assert_eq!(edit.cursor_position(), Some(0));

        assert!(edit.insert_character(&ctx, "1"));
        assert_eq!(edit.text(), "A1");
        assert_eq!(edit.cursor_position(), Some(1));

        edit.remove_character(&ctx);
        assert_eq!(edit.text(), "A");
        assert_eq!(edit.cursor_position(), Some(0));
    }

    #[test]
    fn test_max_length_consumes_without_mutating() {
        let ctx = ctx();
        let mut edit = edit();
        edit.set_max_length(1);

        assert!(edit.insert_character(&ctx, "A"));
        assert_eq!(edit.text(), "A");

        // Still reported as handled so the keystroke is not
        // reinterpreted elsewhere.
        assert!(edit.insert_character(&ctx, "B"));
        assert_eq!(edit.text(), "A");
    }

    #[test]
    fn test_max_length_never_exceeded() {
        let ctx = ctx();
        let mut edit = edit();
        edit.set_max_length(3);

        for _ in 0..10 {
            edit.insert_character(&ctx, "x");
        }
        assert_eq!(edit.text().len(), 3);
    }

    #[test]
    fn test_zero_max_length_is_unbounded() {
        let mut edit = edit();
        edit.set_max_length(5);
        edit.set_max_length(0);
        assert_eq!(edit.max_length(), None);
    }

    #[test]
    fn test_password_masking() {
        let ctx = ctx();
        let mut edit = edit();
        edit.set_password(true);

        edit.insert_character(&ctx, "a");
        edit.insert_character(&ctx, "b");

        assert_eq!(edit.text(), "ab");
        assert_eq!(edit.text_label().text(), "**");
        assert!(!edit.text_label().text().contains('a'));

        edit.set_password(false);
        assert_eq!(edit.text_label().text(), "ab");
    }

    #[test]
    fn test_filter_rejects_classes() {
        let ctx = ctx();
        let mut edit = edit();

        edit.set_filter(CharFilter::ALPHA);
        assert!(!edit.insert_character(&ctx, "a"));
        assert!(edit.insert_character(&ctx, "1"));

        edit.set_filter(CharFilter::NUMERIC);
        assert!(!edit.insert_character(&ctx, "2"));
        assert!(edit.insert_character(&ctx, "b"));

        edit.set_filter(CharFilter::PUNCT);
        assert!(!edit.insert_character(&ctx, "."));

        edit.set_filter(CharFilter::SYMBOLS);
        assert!(!edit.insert_character(&ctx, "$"));

        // Spaces pass every filter.
        edit.set_filter(CharFilter::all());
        assert!(edit.insert_character(&ctx, " "));
        assert_eq!(edit.text(), "1b ");
    }

    #[test]
    fn test_control_and_empty_input_rejected() {
        let ctx = ctx();
        let mut edit = edit();

        assert!(!edit.insert_character(&ctx, "\u{7}"));
        assert!(!edit.insert_character(&ctx, ""));
        assert_eq!(edit.text(), "");
    }

    #[test]
    fn test_combining_sequence_is_one_position() {
        let ctx = ctx();
        let mut edit = edit();

        // "e" plus combining acute accent: one grapheme.
        assert!(edit.insert_character(&ctx, "e\u{301}"));
        assert_eq!(edit.cursor_position(), Some(0));

        assert!(edit.insert_character(&ctx, "b"));
        assert_eq!(edit.text(), "e\u{301}b");
        assert_eq!(edit.cursor_position(), Some(1));

        edit.remove_character(&ctx);
        assert_eq!(edit.text(), "e\u{301}");
        assert_eq!(edit.cursor_position(), Some(0));

        edit.remove_character(&ctx);
        assert_eq!(edit.text(), "");
        assert_eq!(edit.cursor_position(), None);
    }

    #[test]
    fn test_move_boundaries() {
        let ctx = ctx();
        let mut edit = edit();

        assert!(!edit.move_cursor(&ctx, MoveDirection::Left));
        assert!(!edit.move_cursor(&ctx, MoveDirection::Right));

        edit.insert_character(&ctx, "a");
        assert!(!edit.move_cursor(&ctx, MoveDirection::Right));
        assert!(edit.move_cursor(&ctx, MoveDirection::Left));
        assert_eq!(edit.cursor_position(), None);
        assert!(!edit.move_cursor(&ctx, MoveDirection::Left));
    }

    #[test]
    fn test_move_end_caret_index() {
        let ctx = ctx();
        let mut edit = edit();

        assert!(edit.move_cursor(&ctx, MoveDirection::End));
        assert_eq!(edit.cursor_position(), None);

        edit.set_text(&ctx, "abc", false);
        edit.move_cursor(&ctx, MoveDirection::End);
        assert_eq!(edit.cursor_position(), Some(2));
    }

    #[test]
    fn test_insert_scrolls_when_text_rect_full() {
        let ctx = ctx();
        let mut edit = edit();

        // Six characters fit: the caret walks 2 -> 9 -> ... -> 44 within
        // the 46px text rectangle.
        for _ in 0..6 {
            edit.insert_character(&ctx, "a");
        }
        assert_eq!(edit.cursor().area().left(), 44.0);
        assert_eq!(edit.text_label().start_position(), Point::ZERO);

        // The seventh pushes the text left; the caret stays put.
        edit.insert_character(&ctx, "a");
        assert_eq!(edit.cursor().area().left(), 44.0);
        assert_eq!(edit.text_label().start_position(), Point::new(-7.0, 0.0));
    }

    #[test]
    fn test_move_left_scrolls_back() {
        let ctx = ctx();
        let mut edit = edit();

        for _ in 0..7 {
            edit.insert_character(&ctx, "a");
        }
        // Scrolled by one character; walk back to the start.
        for _ in 0..7 {
            assert!(edit.move_cursor(&ctx, MoveDirection::Left));
        }
        assert_eq!(edit.cursor_position(), None);
        assert_eq!(edit.text_label().start_position(), Point::ZERO);
        assert_eq!(edit.cursor().area().left(), 2.0);
    }

    #[test]
    fn test_move_end_scrolls_long_text() {
        let ctx = ctx();
        let mut edit = edit();

        // Ten characters measure 70px against a 46px text rectangle.
        edit.set_text(&ctx, "abcdefghij", true);

        assert_eq!(edit.cursor_position(), Some(9));
        assert_eq!(edit.text_label().start_position(), Point::new(-24.0, 0.0));
        assert_eq!(edit.cursor().area().left(), 48.0);
    }

    #[test]
    fn test_move_end_short_text_resets_scroll() {
        let ctx = ctx();
        let mut edit = edit();

        edit.set_text(&ctx, "abcdefghij", true);
        edit.set_text(&ctx, "ab", true);

        assert_eq!(edit.cursor_position(), Some(1));
        assert_eq!(edit.text_label().start_position(), Point::ZERO);
        assert_eq!(edit.cursor().area().left(), 16.0);
    }

    #[test]
    fn test_insert_then_remove_round_trip() {
        let ctx = ctx();
        let mut edit = edit();
        edit.set_text(&ctx, "abc", true);

        edit.insert_character(&ctx, "X");
        assert_eq!(edit.text(), "abcX");

        edit.remove_character(&ctx);
        assert_eq!(edit.text(), "abc");
        assert_eq!(edit.cursor_position(), Some(2));
    }

    #[test]
    fn test_value_changed_emitted_once_per_change() {
        let ctx = ctx();
        let mut edit = edit();

        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();
        edit.value_changed.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        edit.set_text(&ctx, "x", false);
        assert_eq!(count.load(Ordering::SeqCst), 1);

        // Equal text is a no-op.
        edit.set_text(&ctx, "x", false);
        assert_eq!(count.load(Ordering::SeqCst), 1);

        edit.insert_character(&ctx, "y");
        edit.remove_character(&ctx);
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_cursor_image_scaled_to_font() {
        let ctx = ctx();
        let mut edit = edit();

        // Line height is 14px; a 20x10 glyph scales to 28x14.
        edit.set_cursor_image(&ctx, solid(20.0, 10.0));
        assert_eq!(edit.cursor().area().size, Size::new(28.0, 14.0));

        // The glyph reserves trailing space: 46 - 28 = 18.
        assert_eq!(edit.text_label().area().width(), 18.0);
    }

    #[test]
    fn test_background_image_stretched_to_area() {
        let mut edit = edit();
        edit.set_background_image(solid(10.0, 10.0));

        assert_eq!(edit.background().area(), Rect::new(0.0, 0.0, 50.0, 24.0));
    }

    #[test]
    fn test_pulse_blinks_cursor_with_focus() {
        let ctx = ctx();
        let mut edit = edit();
        edit.set_cursor_image(&ctx, solid(2.0, 14.0));
        edit.set_cursor_blink_rate(2);
        edit.widget_base_mut().set_focused(true);

        assert!(edit.cursor().is_visible());
        for _ in 0..4 {
            edit.pulse();
        }
        assert!(!edit.cursor().is_visible());

        for _ in 0..3 {
            edit.pulse();
        }
        assert!(edit.cursor().is_visible());
    }

    #[test]
    fn test_pulse_hides_cursor_without_focus() {
        let ctx = ctx();
        let mut edit = edit();
        edit.set_cursor_image(&ctx, solid(2.0, 14.0));

        edit.pulse();
        assert!(!edit.cursor().is_visible());
    }

    #[test]
    fn test_key_press_actions() {
        let ctx = ctx();
        let mut edit = edit();
        edit.set_text(&ctx, "ab", true);

        // At the end: RIGHT fails, nothing else applies.
        assert!(!edit.key_press_event(&ctx, &KeyEvent::new(Key::ArrowRight)));

        assert!(edit.key_press_event(&ctx, &KeyEvent::new(Key::ArrowLeft)));
        assert_eq!(edit.cursor_position(), Some(0));

        assert!(edit.key_press_event(&ctx, &KeyEvent::new(Key::Backspace)));
        assert_eq!(edit.text(), "b");

        // Unbound key with text falls through to insertion.
        assert!(edit.key_press_event(&ctx, &KeyEvent::character('x')));
        assert_eq!(edit.text(), "xb");

        // Bound but unhandled actions are consumed without effect.
        assert!(edit.key_press_event(&ctx, &KeyEvent::new(Key::Enter)));
        assert_eq!(edit.text(), "xb");
    }

    #[test]
    fn test_theme_configuration() {
        let ctx = ctx();
        let mut edit = TextEdit::new("editbox");

        let xml = r#"
            <textedit name="editbox">
                <area>0,0,50,24</area>
                <margin>2</margin>
                <maxlength>10</maxlength>
                <align>center</align>
                <multiline>yes</multiline>
                <background/>
            </textedit>
        "#;
        let root = ThemeElement::from_str(xml).unwrap();
        for child in root.children() {
            assert!(edit.parse_element(&ctx, child), "{}", child.name());
        }

        assert_eq!(edit.area(), Rect::new(0.0, 0.0, 50.0, 24.0));
        assert_eq!(edit.max_length(), Some(10));
        assert_eq!(
            edit.text_label().justification(),
            Justification::HCENTER | Justification::TOP | Justification::WORD_WRAP
        );
        // Missing filename synthesizes the gradient fallback.
        assert!(edit.background().image().is_some());
    }

    #[test]
    fn test_align_preserves_wrap_flag() {
        let ctx = ctx();
        let mut edit = edit();

        edit.parse_element(&ctx, &ThemeElement::new("multiline").with_text("yes"));
        edit.parse_element(&ctx, &ThemeElement::new("align").with_text("right"));

        assert_eq!(
            edit.text_label().justification(),
            Justification::RIGHT | Justification::TOP | Justification::WORD_WRAP
        );

        edit.parse_element(&ctx, &ThemeElement::new("multiline").with_text("no"));
        assert_eq!(
            edit.text_label().justification(),
            Justification::RIGHT | Justification::TOP
        );
    }

    #[test]
    fn test_value_language_selection() {
        let mut ctx = ctx();
        ctx.set_language("de", "at");
        ctx.add_translation("Search", "Suche");

        let mut edit = edit();

        // Matching base language wins.
        let element = ThemeElement::new("value")
            .with_text("Suchfeld")
            .with_attribute("lang", "de");
        edit.parse_element(&ctx, &element);
        assert_eq!(edit.text(), "Suchfeld");

        // Non-matching language leaves the value alone.
        let element = ThemeElement::new("value")
            .with_text("Champ")
            .with_attribute("lang", "fr");
        edit.parse_element(&ctx, &element);
        assert_eq!(edit.text(), "Suchfeld");

        // No language: the default text is translated.
        let element = ThemeElement::new("value").with_text("Search");
        edit.parse_element(&ctx, &element);
        assert_eq!(edit.text(), "Suche");
    }

    #[test]
    fn test_cursor_element_without_filename_skipped() {
        let ctx = ctx();
        let mut edit = edit();

        assert!(edit.parse_element(&ctx, &ThemeElement::new("cursor")));
        assert!(edit.cursor().image().is_none());
    }

    #[test]
    fn test_unknown_element_delegates_to_base() {
        let ctx = ctx();
        let mut edit = edit();

        assert!(edit.parse_element(&ctx, &ThemeElement::new("visible").with_text("no")));
        assert!(!edit.widget_base().is_visible());
        assert!(!edit.parse_element(&ctx, &ThemeElement::new("nonsense")));
    }

    #[test]
    fn test_copy_resets_content_keeps_configuration() {
        let ctx = ctx();
        let mut edit = edit();
        edit.set_max_length(12);
        edit.set_filter(CharFilter::NUMERIC);
        edit.set_password(true);
        edit.set_text(&ctx, "secret", true);
        edit.value_changed.connect(|_| {});

        let copy = edit.create_copy();
        assert_eq!(copy.text(), "");
        assert_eq!(copy.cursor_position(), None);
        assert_eq!(copy.text_label().text(), "");
        assert_eq!(copy.max_length(), Some(12));
        assert_eq!(copy.filter(), CharFilter::NUMERIC);
        assert!(copy.is_password());
        assert_eq!(copy.area(), edit.area());
        assert_eq!(copy.value_changed.connection_count(), 0);
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify('a'), Some(CharClass::Letter));
        assert_eq!(classify('ü'), Some(CharClass::Letter));
        assert_eq!(classify('7'), Some(CharClass::Number));
        assert_eq!(classify(' '), Some(CharClass::Space));
        assert_eq!(classify('.'), Some(CharClass::Punct));
        assert_eq!(classify('$'), Some(CharClass::Symbol));
        assert_eq!(classify('~'), Some(CharClass::Symbol));
        assert_eq!(classify('\n'), None);
        assert_eq!(classify('\u{1b}'), None);
    }
}
