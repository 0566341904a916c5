//! Table rendering pipeline.
//!
//! The pipeline is strictly linear: measure and aggregate into a
//! [`LayoutPlan`], allocate a canvas, draw top-to-bottom, overlay the side
//! image, release the draw context, encode. No stage loops back and no state
//! outlives the call.

pub mod backend;
pub mod layout;

use log::debug;

use crate::error::Result;
use crate::font::FontSet;
use crate::rendering::backend::{PngBackend, RasterBackend};
use crate::rendering::layout::LayoutPlan;
use crate::TableSpec;

/// Renders validated [`TableSpec`]s to encoded image bytes.
///
/// Composes a font set and a raster backend by value. `generate` takes
/// `&self` and keeps every piece of per-render state in its own call frame,
/// so one generator may serve any number of concurrent renders.
#[derive(Debug, Clone)]
pub struct TableImageGenerator<B = PngBackend> {
    fonts: FontSet,
    backend: B,
}

impl TableImageGenerator<PngBackend> {
    /// Generator backed by the process font set and the PNG backend.
    pub fn new() -> Result<Self> {
        Ok(Self::with_backend(FontSet::load()?, PngBackend::default()))
    }
}

impl<B: RasterBackend> TableImageGenerator<B> {
    /// Generator with an explicit font set and backend.
    pub fn with_backend(fonts: FontSet, backend: B) -> Self {
        Self { fonts, backend }
    }

    /// The font set this generator measures and draws with.
    pub fn fonts(&self) -> &FontSet {
        &self.fonts
    }

    /// Compute the layout for `spec` without drawing anything.
    pub fn layout(&self, spec: &TableSpec) -> LayoutPlan {
        LayoutPlan::compute(spec, &self.fonts)
    }

    /// Render `spec` and return the encoded image bytes.
    pub fn generate(&self, spec: &TableSpec) -> Result<Vec<u8>> {
        let plan = LayoutPlan::compute(spec, &self.fonts);
        let mut canvas = self
            .backend
            .create_canvas(plan.canvas_width, plan.canvas_height);

        {
            let mut ctx = self.backend.draw_context(&mut canvas);

            for (cell, &(x, y)) in spec.header().iter().zip(&plan.header_cells) {
                ctx.draw_text(cell, x, y, &self.fonts.title);
            }

            let (x, y) = plan.sub_header_pos;
            ctx.draw_text(spec.sub_header(), x, y, &self.fonts.sub_header);

            for (cell, &x) in spec.leaderboard()[0].iter().zip(&plan.column_x) {
                ctx.draw_text(cell, x, plan.leaderboard_header_top, &self.fonts.leaderboard_header);
            }

            for (row, &top) in spec.leaderboard()[1..].iter().zip(&plan.data_row_tops) {
                for (cell, &x) in row.iter().zip(&plan.column_x) {
                    ctx.draw_text(cell, x, top, &self.fonts.leaderboard_body);
                }
            }

            // Drawn last so nothing occludes it
            if let (Some(side), Some((x, y))) = (spec.side_image(), plan.side_image_pos) {
                ctx.overlay_image(side, x, y);
            }
        }

        debug!("rendered table canvas {}x{}", plan.canvas_width, plan.canvas_height);
        self.backend.encode(&canvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> TableSpec {
        TableSpec::new(
            vec!["Bedrock Games".to_string()],
            "All - Victories".to_string(),
            vec![
                vec!["Game".to_string(), "Victories".to_string()],
                vec!["Survival Games".to_string(), "123".to_string()],
            ],
            None,
        )
        .unwrap()
    }

    #[test]
    fn generate_produces_png_bytes() {
        let generator = TableImageGenerator::new().unwrap();
        let bytes = generator.generate(&spec()).unwrap();
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'][..]);
    }

    #[test]
    fn generate_paints_some_text_pixels() {
        let generator = TableImageGenerator::new().unwrap();
        let plan = generator.layout(&spec());
        let bytes = generator.generate(&spec()).unwrap();

        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded.width(), plan.canvas_width);
        assert_eq!(decoded.height(), plan.canvas_height);
        assert!(decoded.pixels().any(|p| p.0[3] != 0));
    }

    #[test]
    fn generator_is_reusable_across_specs() {
        let generator = TableImageGenerator::new().unwrap();
        let first = generator.generate(&spec()).unwrap();
        let second = generator.generate(&spec()).unwrap();
        assert_eq!(first, second);
    }
}
