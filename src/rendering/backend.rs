//! Raster backend: canvas allocation, scoped draw context, encoding.
//!
//! The backend is a narrow capability interface composed by value into the
//! generator rather than a base type to inherit from; any table-like renderer
//! reuses the same helpers without subclassing.

use image::codecs::png::PngEncoder;
use image::{ImageEncoder as _, Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;
use log::trace;

use crate::error::Result;
use crate::font::ScaledFont;

/// Mutable raster surface scoped to one render call
pub type Canvas = RgbaImage;

/// Canvas creation, draw-context acquisition and encoding.
pub trait RasterBackend {
    /// Allocate a fresh canvas with an alpha channel, fully transparent.
    fn create_canvas(&self, width: u32, height: u32) -> Canvas;

    /// Borrow a scoped drawing context for `canvas`. The context is released
    /// when it goes out of scope, on every exit path.
    fn draw_context<'a>(&self, canvas: &'a mut Canvas) -> DrawContext<'a>;

    /// Serialize the finished canvas into a portable byte stream.
    fn encode(&self, canvas: &Canvas) -> Result<Vec<u8>>;
}

/// Scoped drawing context over a borrowed canvas.
///
/// Holds the only mutable handle to the canvas for its lifetime; dropping it
/// ends the drawing phase.
pub struct DrawContext<'a> {
    canvas: &'a mut Canvas,
    color: Rgba<u8>,
}

impl DrawContext<'_> {
    /// Draw `text` with its glyph-box top-left at (x, y).
    pub fn draw_text(&mut self, text: &str, x: i32, y: i32, font: &ScaledFont) {
        draw_text_mut(self.canvas, self.color, x, y, font.scale(), font.font(), text);
    }

    /// Composite `image` onto the canvas at (x, y), alpha-blended.
    pub fn overlay_image(&mut self, image: &RgbaImage, x: i64, y: i64) {
        image::imageops::overlay(self.canvas, image, x, y);
    }
}

impl Drop for DrawContext<'_> {
    fn drop(&mut self) {
        trace!("draw context released");
    }
}

/// PNG-producing backend. Output embeds no timestamps or ancillary metadata,
/// so identical pixels encode to identical bytes.
#[derive(Debug, Clone)]
pub struct PngBackend {
    /// Color all text is drawn in
    pub text_color: Rgba<u8>,
}

impl Default for PngBackend {
    fn default() -> Self {
        // White on transparent, for dark chat themes
        Self {
            text_color: Rgba([255, 255, 255, 255]),
        }
    }
}

impl RasterBackend for PngBackend {
    fn create_canvas(&self, width: u32, height: u32) -> Canvas {
        RgbaImage::new(width, height)
    }

    fn draw_context<'a>(&self, canvas: &'a mut Canvas) -> DrawContext<'a> {
        DrawContext {
            canvas,
            color: self.text_color,
        }
    }

    fn encode(&self, canvas: &Canvas) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        PngEncoder::new(&mut bytes).write_image(
            canvas.as_raw(),
            canvas.width(),
            canvas.height(),
            image::ExtendedColorType::Rgba8,
        )?;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_canvas_is_transparent() {
        let backend = PngBackend::default();
        let canvas = backend.create_canvas(4, 4);
        assert!(canvas.pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }

    #[test]
    fn encode_is_reproducible() {
        let backend = PngBackend::default();
        let mut canvas = backend.create_canvas(8, 8);
        canvas.put_pixel(3, 3, Rgba([255, 0, 0, 255]));

        let a = backend.encode(&canvas).unwrap();
        let b = backend.encode(&canvas).unwrap();
        assert_eq!(a, b);
        assert_eq!(&a[1..4], &b"PNG"[..]);
    }

    #[test]
    fn overlay_composites_on_top() {
        let backend = PngBackend::default();
        let mut canvas = backend.create_canvas(4, 4);
        let patch = RgbaImage::from_pixel(2, 2, Rgba([0, 255, 0, 255]));
        {
            let mut ctx = backend.draw_context(&mut canvas);
            ctx.overlay_image(&patch, 1, 1);
        }
        assert_eq!(canvas.get_pixel(1, 1).0, [0, 255, 0, 255]);
        assert_eq!(canvas.get_pixel(0, 0).0, [0, 0, 0, 0]);
    }
}
