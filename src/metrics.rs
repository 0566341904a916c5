//! Text measurement.
//!
//! Widths come from the same glyph layout the draw pass uses
//! (`imageproc::drawing`), so the layout calculator never under- or
//! over-estimates what `draw_text_mut` will put on the canvas.

use imageproc::drawing::text_size;

use crate::font::ScaledFont;

/// Pixel width of `text` rendered with `font`.
pub fn text_width(text: &str, font: &ScaledFont) -> u32 {
    let (w, _h) = text_size(font.scale(), font.font(), text);
    w
}
