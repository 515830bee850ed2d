//! Text overlay style: the classic grid with a word spelled out in 7x5
//! glyph cells on top of it.

use crate::{
    geometry::{DAYS_PER_WEEK, RenderGeometry},
    glyphs::{self, GLYPH_ADVANCE, GLYPH_COLS},
    model::{ActivitySeries, StyleId, StyleParams, TextOverflow},
    palette::{BG_DARK, Rgba8, rgb},
    surface::Raster,
};

use super::{StyleRenderer, grid};

const FALLBACK: &str = "HELLO";
/// Warm overlay against the green grid.
const OVERLAY_FILL: Rgba8 = rgb(0xf0, 0x88, 0x3e);
const OVERLAY_OUTLINE: Rgba8 = rgb(0xff, 0xd3, 0x3d);

/// First glyph column for centering `text` on a grid `weeks` wide. Negative
/// when the text is wider than the grid, in which case the overlay simply
/// runs past the window and clips at the canvas edge.
pub fn overlay_start_week(weeks: u32, text: &str) -> i64 {
    let total = i64::from(glyphs::text_width_cols(text));
    (i64::from(weeks) - total + 1).div_euclid(2)
}

pub struct TextOverlay;

impl StyleRenderer for TextOverlay {
    fn id(&self) -> StyleId {
        StyleId::Text
    }

    fn background(&self) -> Rgba8 {
        BG_DARK
    }

    fn grid_aligned(&self) -> bool {
        true
    }

    fn draw(
        &self,
        raster: &mut Raster,
        series: &ActivitySeries,
        geo: &RenderGeometry,
        params: &StyleParams,
    ) {
        // Backdrop first: the full grid exactly as the classic style.
        grid::draw_classic_cells(raster, series, geo);

        let mut text = params
            .text
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(FALLBACK)
            .to_uppercase();

        if glyphs::text_width_cols(&text) > geo.weeks {
            match params.text_overflow {
                TextOverflow::Truncate => {
                    while !text.is_empty() && glyphs::text_width_cols(&text) > geo.weeks {
                        text.pop();
                    }
                }
                TextOverflow::Overlap => {
                    tracing::warn!(
                        text = %text,
                        weeks = geo.weeks,
                        "overlay text is wider than the grid; glyphs will overflow"
                    );
                }
            }
        }

        let start_week = overlay_start_week(geo.weeks, &text);
        let start_day = (DAYS_PER_WEEK - glyphs::GLYPH_ROWS) / 2; // 0

        for (ci, c) in text.chars().enumerate() {
            let glyph = glyphs::glyph(c);
            let glyph_col = start_week + (ci as i64) * i64::from(GLYPH_ADVANCE);
            for row in 0..glyphs::GLYPH_ROWS {
                for col in 0..GLYPH_COLS {
                    if !glyph.bit(row, col) {
                        continue; // unset bits leave the grid showing through
                    }
                    let x = (glyph_col + i64::from(col)) * i64::from(geo.pitch());
                    let y = i64::from((start_day + row) * geo.pitch() + geo.top_padding);
                    raster.fill_rect(x, y, geo.cell_size, geo.cell_size, OVERLAY_FILL);
                    raster.stroke_rect(x, y, geo.cell_size, geo.cell_size, OVERLAY_OUTLINE);
                }
            }
        }
    }
}
