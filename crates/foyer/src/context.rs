//! Shared UI services handed to widgets.
//!
//! Widgets never reach for process-wide state. Everything they need from
//! their environment, fonts, text metrics, display scaling, translations,
//! key bindings and theme resources, travels in a [`UiContext`] passed
//! explicitly to the operations that use it.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use foyer_core::logging::targets;
use foyer_render::{
    FontMap, FontMetrics, FontProperties, Image, RenderResult, SharedFontMetrics,
};
use tracing::debug;

use crate::widget::KeyBindings;

/// Scaling factors mapping theme coordinates to display pixels.
///
/// Themes are authored against a reference resolution; at load time every
/// coordinate is normalized through these factors and rounded to whole
/// pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayScale {
    horizontal: f32,
    vertical: f32,
}

impl DisplayScale {
    /// Create a scale with explicit horizontal and vertical factors.
    pub fn new(horizontal: f32, vertical: f32) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Normalize a horizontal theme coordinate to display pixels.
    pub fn norm_x(&self, value: f32) -> f32 {
        (value * self.horizontal).round()
    }

    /// Normalize a vertical theme coordinate to display pixels.
    pub fn norm_y(&self, value: f32) -> f32 {
        (value * self.vertical).round()
    }
}

impl Default for DisplayScale {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

/// The services a widget tree draws on.
pub struct UiContext {
    /// Fonts defined by the current screen's theme.
    fonts: FontMap,
    /// Fonts defined application-wide, consulted as a fallback.
    global_fonts: FontMap,
    /// Text measurement backend.
    metrics: SharedFontMetrics,
    /// Theme-to-display coordinate scaling.
    scale: DisplayScale,
    /// Two-letter language code, lowercase.
    language: String,
    /// Language code with regional variant, e.g. `en_gb`.
    language_and_variant: String,
    /// Translated UI strings keyed by source text.
    translations: HashMap<String, String>,
    /// Directory image filenames resolve against.
    theme_root: Option<PathBuf>,
    /// Key-to-action bindings per context.
    bindings: KeyBindings,
}

impl UiContext {
    /// Create a context with the given text metrics and defaults for
    /// everything else.
    pub fn new(metrics: SharedFontMetrics) -> Self {
        Self {
            fonts: FontMap::new(),
            global_fonts: FontMap::new(),
            metrics,
            scale: DisplayScale::default(),
            language: "en".to_string(),
            language_and_variant: "en".to_string(),
            translations: HashMap::new(),
            theme_root: None,
            bindings: KeyBindings::with_defaults(),
        }
    }

    /// Screen-level theme fonts.
    pub fn fonts(&self) -> &FontMap {
        &self.fonts
    }

    /// Application-wide fallback fonts.
    pub fn global_fonts(&self) -> &FontMap {
        &self.global_fonts
    }

    /// Resolve a themed font name, preferring the screen-level map.
    pub fn font(&self, name: &str) -> Option<FontProperties> {
        self.fonts.get(name).or_else(|| self.global_fonts.get(name))
    }

    /// The text measurement backend.
    pub fn metrics(&self) -> &dyn FontMetrics {
        self.metrics.as_ref()
    }

    /// The current display scaling.
    pub fn scale(&self) -> DisplayScale {
        self.scale
    }

    /// Replace the display scaling.
    pub fn set_scale(&mut self, scale: DisplayScale) {
        self.scale = scale;
    }

    /// The current language code.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The current language code including regional variant.
    pub fn language_and_variant(&self) -> &str {
        &self.language_and_variant
    }

    /// Set the UI language. Codes are lowercased for comparison against
    /// theme `lang` attributes.
    pub fn set_language(&mut self, language: &str, variant: &str) {
        self.language = language.to_lowercase();
        self.language_and_variant = if variant.is_empty() {
            self.language.clone()
        } else {
            format!("{}_{}", self.language, variant.to_lowercase())
        };
    }

    /// Translate a source string, falling back to the input when no
    /// translation is registered.
    pub fn translate<'a>(&'a self, text: &'a str) -> &'a str {
        self.translations.get(text).map_or(text, |s| s.as_str())
    }

    /// Register a translated string.
    pub fn add_translation(&mut self, source: impl Into<String>, translated: impl Into<String>) {
        self.translations.insert(source.into(), translated.into());
    }

    /// Set the directory theme image filenames resolve against.
    pub fn set_theme_root(&mut self, root: impl Into<PathBuf>) {
        self.theme_root = Some(root.into());
    }

    /// Load a theme image by filename, resolved against the theme root.
    pub fn load_image(&self, filename: &str) -> RenderResult<Image> {
        let path = match &self.theme_root {
            Some(root) => root.join(filename),
            None => Path::new(filename).to_path_buf(),
        };
        debug!(target: targets::THEME, path = %path.display(), "loading theme image");
        Image::load(&path)
    }

    /// Key bindings for action translation.
    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Mutable key bindings.
    pub fn bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.bindings
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use foyer_render::FixedAdvanceMetrics;

    use super::*;

    fn ctx() -> UiContext {
        UiContext::new(Arc::new(FixedAdvanceMetrics::default()))
    }

    #[test]
    fn test_display_scale_rounds_to_whole_pixels() {
        let scale = DisplayScale::new(1.5, 1.5);
        assert_eq!(scale.norm_x(3.0), 5.0);
        assert_eq!(scale.norm_y(1.0), 2.0);
    }

    #[test]
    fn test_font_lookup_prefers_screen_fonts() {
        let ctx = ctx();
        ctx.global_fonts()
            .insert("basefont", FontProperties::new("Global", 10.0));
        assert_eq!(ctx.font("basefont").unwrap().family(), "Global");

        ctx.fonts()
            .insert("basefont", FontProperties::new("Screen", 12.0));
        assert_eq!(ctx.font("basefont").unwrap().family(), "Screen");
        assert!(ctx.font("missing").is_none());
    }

    #[test]
    fn test_translate_falls_back_to_source() {
        let mut ctx = ctx();
        assert_eq!(ctx.translate("Search"), "Search");

        ctx.add_translation("Search", "Suche");
        assert_eq!(ctx.translate("Search"), "Suche");
    }

    #[test]
    fn test_set_language() {
        let mut ctx = ctx();
        ctx.set_language("DE", "AT");
        assert_eq!(ctx.language(), "de");
        assert_eq!(ctx.language_and_variant(), "de_at");

        ctx.set_language("fr", "");
        assert_eq!(ctx.language_and_variant(), "fr");
    }
}
