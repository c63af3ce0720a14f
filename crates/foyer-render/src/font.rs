//! Font properties, the named font registry, and text measurement.
//!
//! Text shaping lives outside this toolkit; widgets only need pixel
//! measurements, which they obtain through the [`FontMetrics`] trait. A
//! real deployment plugs in metrics backed by its shaping engine, while
//! [`FixedAdvanceMetrics`] provides a deterministic implementation for
//! tests and headless use.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::types::Size;

/// Resolved properties of a themed font.
#[derive(Debug, Clone, PartialEq)]
pub struct FontProperties {
    /// Font family name.
    family: String,
    /// Size in logical pixels.
    pixel_size: f32,
}

impl FontProperties {
    /// Create font properties with the given family and pixel size.
    pub fn new(family: impl Into<String>, pixel_size: f32) -> Self {
        Self {
            family: family.into(),
            pixel_size,
        }
    }

    /// The font family name.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// The font size in logical pixels.
    pub fn pixel_size(&self) -> f32 {
        self.pixel_size
    }
}

impl Default for FontProperties {
    fn default() -> Self {
        Self::new("sans-serif", 14.0)
    }
}

/// A registry of fonts keyed by theme name.
///
/// Themes refer to fonts by name (`<font>basefont</font>`); the map is
/// populated when the theme's font definitions are parsed. A screen-level
/// map is consulted first, falling back to an application-wide map.
#[derive(Default)]
pub struct FontMap {
    fonts: RwLock<HashMap<String, FontProperties>>,
}

impl FontMap {
    /// Create an empty font map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a font under a theme name, replacing any previous entry.
    pub fn insert(&self, name: impl Into<String>, font: FontProperties) {
        self.fonts.write().insert(name.into(), font);
    }

    /// Look up a font by theme name.
    pub fn get(&self, name: &str) -> Option<FontProperties> {
        self.fonts.read().get(name).cloned()
    }

    /// Check whether a name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.fonts.read().contains_key(name)
    }
}

/// Pixel measurement of single-line text.
pub trait FontMetrics: Send + Sync {
    /// Measure the bounding size of `text` laid out on a single line.
    fn measure(&self, font: &FontProperties, text: &str) -> Size;

    /// The line height for the font (what a text cursor's height matches).
    fn line_height(&self, font: &FontProperties) -> f32 {
        self.measure(font, " ").height
    }
}

/// A shared metrics handle.
pub type SharedFontMetrics = Arc<dyn FontMetrics>;

/// Deterministic metrics where every character advances a fixed fraction
/// of the font's pixel size.
///
/// Not typographically accurate, but stable: scroll and caret math can be
/// asserted exactly against it.
#[derive(Debug, Clone)]
pub struct FixedAdvanceMetrics {
    /// Horizontal advance per character, as a fraction of pixel size.
    advance_ratio: f32,
    /// Line height as a fraction of pixel size.
    line_ratio: f32,
}

impl FixedAdvanceMetrics {
    /// Create metrics with explicit advance and line-height ratios.
    pub fn new(advance_ratio: f32, line_ratio: f32) -> Self {
        Self {
            advance_ratio,
            line_ratio,
        }
    }
}

impl Default for FixedAdvanceMetrics {
    fn default() -> Self {
        Self::new(0.6, 1.2)
    }
}

impl FontMetrics for FixedAdvanceMetrics {
    fn measure(&self, font: &FontProperties, text: &str) -> Size {
        let advance = font.pixel_size() * self.advance_ratio;
        Size::new(
            text.chars().count() as f32 * advance,
            self.line_height(font),
        )
    }

    fn line_height(&self, font: &FontProperties) -> f32 {
        font.pixel_size() * self.line_ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_map_lookup() {
        let map = FontMap::new();
        assert!(map.get("basefont").is_none());

        map.insert("basefont", FontProperties::new("DejaVu Sans", 20.0));
        let font = map.get("basefont").unwrap();
        assert_eq!(font.family(), "DejaVu Sans");
        assert_eq!(font.pixel_size(), 20.0);
        assert!(map.contains("basefont"));
    }

    #[test]
    fn test_font_map_replaces_entry() {
        let map = FontMap::new();
        map.insert("basefont", FontProperties::new("A", 10.0));
        map.insert("basefont", FontProperties::new("B", 12.0));
        assert_eq!(map.get("basefont").unwrap().family(), "B");
    }

    #[test]
    fn test_fixed_advance_measure() {
        let metrics = FixedAdvanceMetrics::new(0.5, 1.0);
        let font = FontProperties::new("mono", 20.0);

        assert_eq!(metrics.measure(&font, "abcd").width, 40.0);
        assert_eq!(metrics.measure(&font, "").width, 0.0);
        assert_eq!(metrics.line_height(&font), 20.0);
    }

    #[test]
    fn test_default_line_height_tracks_pixel_size() {
        let metrics = FixedAdvanceMetrics::default();
        let small = FontProperties::new("sans-serif", 10.0);
        let large = FontProperties::new("sans-serif", 30.0);
        assert!(metrics.line_height(&large) > metrics.line_height(&small));
    }
}
