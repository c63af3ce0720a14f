//! CPU-side image resource.
//!
//! [`Image`] holds decoded RGBA pixel data for a paint pass to upload or
//! blit. Widgets use it for theme backgrounds and cursor glyphs; it also
//! knows how to synthesize the default vertical-gradient background used
//! when a theme supplies no image.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::error::{RenderError, RenderResult};
use crate::types::{Color, Size};

/// A decoded RGBA image.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    data: RgbaImage,
}

impl Image {
    /// Load and decode an image from a file.
    pub fn load(path: impl AsRef<Path>) -> RenderResult<Self> {
        let path = path.as_ref();
        let data = image::open(path)?.to_rgba8();
        tracing::debug!(
            target: "foyer_render",
            path = %path.display(),
            width = data.width(),
            height = data.height(),
            "loaded image"
        );
        Ok(Self { data })
    }

    /// Create an image filled with a single color.
    pub fn solid(size: Size, color: Color) -> RenderResult<Self> {
        let (width, height) = (size.width.round() as u32, size.height.round() as u32);
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions { width, height });
        }

        let pixel = image::Rgba(color.to_rgba8());
        Ok(Self {
            data: RgbaImage::from_pixel(width, height, pixel),
        })
    }

    /// Synthesize a vertical gradient from `start` (top) to `end` (bottom).
    ///
    /// `alpha` is applied uniformly over the whole ramp.
    pub fn gradient(size: Size, start: Color, end: Color, alpha: u8) -> RenderResult<Self> {
        let (width, height) = (size.width.round() as u32, size.height.round() as u32);
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions { width, height });
        }

        let alpha = alpha as f32 / 255.0;
        let mut data = RgbaImage::new(width, height);
        for y in 0..height {
            let t = if height > 1 {
                y as f32 / (height - 1) as f32
            } else {
                0.0
            };
            let row = start.lerp(end, t).with_alpha(alpha).to_rgba8();
            for x in 0..width {
                data.put_pixel(x, y, image::Rgba(row));
            }
        }

        Ok(Self { data })
    }

    /// Pixel width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.data.width()
    }

    /// Pixel height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.data.height()
    }

    /// Size in logical units.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.data.width() as f32, self.data.height() as f32)
    }

    /// Check if the image has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.width() == 0 || self.data.height() == 0
    }

    /// Return a copy resized to the given dimensions.
    ///
    /// Dimensions are rounded to whole pixels; a degenerate target size
    /// returns the image unchanged.
    pub fn resized(&self, size: Size) -> Image {
        let (width, height) = (size.width.round() as u32, size.height.round() as u32);
        if width == 0 || height == 0 || self.is_empty() {
            return self.clone();
        }

        Image {
            data: imageops::resize(&self.data, width, height, FilterType::Triangle),
        }
    }

    /// Access a pixel as a color (for tests and software blitting).
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        let p = self.data.get_pixel(x, y).0;
        Color::new(
            p[0] as f32 / 255.0,
            p[1] as f32 / 255.0,
            p[2] as f32 / 255.0,
            p[3] as f32 / 255.0,
        )
    }
}
