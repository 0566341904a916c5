//! Two-pass layout for table rendering.
//!
//! Pass one measures every string with the draw backend's own metrics; pass
//! two aggregates those widths into canvas dimensions and per-cell draw
//! positions. The resulting [`LayoutPlan`] is immutable and local to one
//! render call; nothing here touches shared state.

use log::debug;

use crate::font::{
    FontSet, LEADERBOARD_BODY_PX, LEADERBOARD_HEADER_PX, SUB_HEADER_PX, TITLE_PX,
};
use crate::metrics::text_width;
use crate::TableSpec;

/// Fixed pixel margin reserved at the canvas edges
pub const GAP_X_BORDER: u32 = 10;
/// Vertical gap between leaderboard data rows
pub const GAP_Y_ROW: u32 = 15;
/// Minimum horizontal gap between cells in a row
pub const GAP_WORD_MIN: u32 = 20;
/// Gap below the header band
pub const GAP_HEADER: u32 = GAP_Y_ROW / 2;
/// Gap below the sub-header band (row gap x 2.3, truncated)
pub const GAP_SUB_HEADER: u32 = GAP_Y_ROW * 23 / 10;
/// Gap below the leaderboard column-title row
pub const GAP_LEADERBOARD_HEADER: u32 = GAP_Y_ROW * 2;
/// Separator between the leaderboard header band and the side image
pub const GAP_SIDE_IMAGE_TOP: u32 = 2;
/// Empirical trim subtracted from the side image's width when extending the
/// canvas; the source data's thumbnails report a width larger than their
/// visible pixels. Pinned by a regression test.
pub const SIDE_IMAGE_WIDTH_TRIM: u32 = GAP_X_BORDER * 3;

/// Fully resolved measurements and coordinates, computed before any drawing.
///
/// All `*_top` values are the y coordinate handed to the draw backend (top of
/// the glyph box), derived from a running baseline that advances by the gap
/// below each band plus the next band's font size.
#[derive(Debug, Clone)]
pub struct LayoutPlan {
    /// Measured width of each header cell under the title font
    pub header_widths: Vec<u32>,
    /// Width of each leaderboard column (max cell width over all rows)
    pub column_widths: Vec<u32>,
    /// Header cells plus minimum word gaps
    pub header_row_width: u32,
    /// Sub-header text plus one word gap
    pub sub_header_width: u32,
    /// Leaderboard columns plus word gaps
    pub leaderboard_width: u32,
    /// Final canvas width including both border margins
    pub canvas_width: u32,
    /// Final canvas height
    pub canvas_height: u32,
    /// (x, top) per header cell
    pub header_cells: Vec<(i32, i32)>,
    /// (x, top) of the sub-header
    pub sub_header_pos: (i32, i32),
    /// Left edge of each leaderboard column
    pub column_x: Vec<i32>,
    /// Top of the leaderboard column-title row
    pub leaderboard_header_top: i32,
    /// Top of each data row, in display order
    pub data_row_tops: Vec<i32>,
    /// Placement of the side image, if the spec carries one
    pub side_image_pos: Option<(i64, i64)>,
}

impl LayoutPlan {
    /// Measure `spec` under `fonts` and resolve every draw coordinate.
    pub fn compute(spec: &TableSpec, fonts: &FontSet) -> Self {
        // Measurement pass
        let header_widths: Vec<u32> = spec
            .header()
            .iter()
            .map(|cell| text_width(cell, &fonts.title))
            .collect();

        let columns = spec.leaderboard()[0].len();
        let mut column_widths = vec![0u32; columns];
        for (row_index, row) in spec.leaderboard().iter().enumerate() {
            let font = if row_index == 0 {
                &fonts.leaderboard_header
            } else {
                &fonts.leaderboard_body
            };
            for (col, cell) in row.iter().enumerate() {
                column_widths[col] = column_widths[col].max(text_width(cell, font));
            }
        }

        // Aggregation pass
        let header_sum: u32 = header_widths.iter().sum();
        let header_row_width = header_sum + GAP_WORD_MIN * (header_widths.len() as u32 - 1);
        let sub_header_text_width = text_width(spec.sub_header(), &fonts.sub_header);
        let sub_header_width = sub_header_text_width + GAP_WORD_MIN;
        let leaderboard_width: u32 =
            column_widths.iter().sum::<u32>() + GAP_WORD_MIN * (columns as u32 - 1);

        let header_band = TITLE_PX + GAP_HEADER;
        let sub_header_band = SUB_HEADER_PX + GAP_SUB_HEADER;
        let leaderboard_header_band = LEADERBOARD_HEADER_PX + GAP_LEADERBOARD_HEADER + GAP_Y_ROW;

        let data_rows = spec.leaderboard().len() as u32 - 1;
        let natural_body_height = data_rows * LEADERBOARD_BODY_PX + (data_rows - 1) * GAP_Y_ROW;

        let mut body_height = natural_body_height;
        let mut horizontal_extent = leaderboard_width as i64;
        let mut side_image_pos = None;
        if let Some(side) = spec.side_image() {
            side_image_pos = Some((
                leaderboard_width as i64,
                (header_band + sub_header_band + leaderboard_header_band + GAP_SIDE_IMAGE_TOP)
                    as i64,
            ));
            horizontal_extent += side.width() as i64 - SIDE_IMAGE_WIDTH_TRIM as i64;
            body_height = body_height.max(side.height());
        }

        let content_width = (header_row_width as i64)
            .max(sub_header_width as i64)
            .max(horizontal_extent)
            .max(0) as u32;
        let canvas_width = content_width + GAP_X_BORDER * 2;
        let canvas_height = header_band + sub_header_band + leaderboard_header_band + body_height;

        // Span the header and sub-header center over
        let center_span = sub_header_width.max(leaderboard_width);

        // Running baseline: the title sits with its top at the canvas edge,
        // every following band starts at previous baseline + gap + own size.
        let title_baseline = TITLE_PX as i32;
        let sub_header_baseline = title_baseline + (GAP_HEADER + SUB_HEADER_PX) as i32;
        let leaderboard_header_baseline =
            sub_header_baseline + (GAP_SUB_HEADER + LEADERBOARD_HEADER_PX) as i32;
        let first_data_baseline =
            leaderboard_header_baseline + (GAP_LEADERBOARD_HEADER + LEADERBOARD_BODY_PX) as i32;

        let header_cells = if header_widths.len() == 1 {
            let x =
                GAP_X_BORDER as i32 + (center_span.saturating_sub(header_widths[0]) / 2) as i32;
            vec![(x, 0)]
        } else {
            let spread = header_row_width.max(leaderboard_width);
            let word_gap =
                ((spread - header_sum) / (header_widths.len() as u32 - 1)).max(GAP_WORD_MIN);
            let mut x = GAP_X_BORDER as i32;
            let mut cells = Vec::with_capacity(header_widths.len());
            for width in &header_widths {
                cells.push((x, 0));
                x += (*width + word_gap) as i32;
            }
            cells
        };

        let sub_header_pos = (
            GAP_X_BORDER as i32 + (center_span.saturating_sub(sub_header_text_width) / 2) as i32,
            sub_header_baseline - SUB_HEADER_PX as i32,
        );

        let mut column_x = Vec::with_capacity(columns);
        let mut x = GAP_X_BORDER as i32;
        for width in &column_widths {
            column_x.push(x);
            x += (*width + GAP_WORD_MIN) as i32;
        }

        let leaderboard_header_top = leaderboard_header_baseline - LEADERBOARD_HEADER_PX as i32;
        let data_row_tops = (0..data_rows as i32)
            .map(|row| {
                first_data_baseline - LEADERBOARD_BODY_PX as i32
                    + row * (LEADERBOARD_BODY_PX + GAP_Y_ROW) as i32
            })
            .collect();

        let plan = Self {
            header_widths,
            column_widths,
            header_row_width,
            sub_header_width,
            leaderboard_width,
            canvas_width,
            canvas_height,
            header_cells,
            sub_header_pos,
            column_x,
            leaderboard_header_top,
            data_row_tops,
            side_image_pos,
        };
        debug!(
            "layout: canvas {}x{}, {} columns, {} data rows, side image: {}",
            plan.canvas_width,
            plan.canvas_height,
            plan.column_widths.len(),
            plan.data_row_tops.len(),
            plan.side_image_pos.is_some(),
        );
        plan
    }
}
