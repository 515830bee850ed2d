//! Month labels above the grid and the caption line below it. Only the
//! grid-aligned styles get this layer.

use chrono::Datelike;

use crate::{
    geometry::RenderGeometry,
    glyphs,
    model::ActivitySeries,
    palette::{Rgba8, rgb},
    surface::Raster,
};

const LABEL_GRAY: Rgba8 = rgb(0x8b, 0x94, 0x9e);
const CAPTION_GRAY: Rgba8 = rgb(0xc9, 0xd1, 0xd9);
/// Pixels per glyph bit: small tags above the grid, larger caption below.
const LABEL_SCALE: u32 = 1;
const CAPTION_SCALE: u32 = 2;

/// The caption line, verbatim.
pub fn caption_text(name: &str, total: u64, year: i32) -> String {
    format!("@{name} \u{2022} {total} commits in {year}")
}

/// Draw a 3-letter month abbreviation over each week column that starts a
/// new month within the series year. No-op unless the geometry reserved a
/// label band.
pub fn draw_month_labels(raster: &mut Raster, series: &ActivitySeries, geo: &RenderGeometry) {
    if geo.top_padding == 0 {
        return;
    }
    let Some(series_year) = series.year() else {
        return;
    };

    let glyph_h = glyphs::GLYPH_ROWS * LABEL_SCALE;
    let y = i64::from(geo.top_padding.saturating_sub(glyph_h) / 2);

    let mut prev_month = 0u32;
    for (week, days) in series.days.chunks(7).enumerate() {
        let first = days[0];
        let month = first.date.month();
        if month == prev_month || first.date.year() != series_year {
            continue;
        }
        prev_month = month;
        let tag = first.date.format("%b").to_string().to_uppercase();
        let x = i64::from(week as u32 * geo.pitch());
        glyphs::draw_text(raster, x, y, &tag, LABEL_SCALE, LABEL_GRAY);
    }
}

/// Draw the centered `@name • N commits in YEAR` caption in the caption
/// band. No-op unless the geometry reserved one.
pub fn draw_caption(raster: &mut Raster, series: &ActivitySeries, geo: &RenderGeometry, name: &str) {
    if geo.caption_height == 0 {
        return;
    }
    let Some(year) = series.year() else {
        return;
    };

    let text = caption_text(name, series.total_count(), year);
    let width = glyphs::text_width_px(&text, CAPTION_SCALE);
    let glyph_h = glyphs::GLYPH_ROWS * CAPTION_SCALE;
    let x = (i64::from(geo.canvas_width) - i64::from(width)) / 2;
    let y = i64::from(
        geo.canvas_height - geo.caption_height + geo.caption_height.saturating_sub(glyph_h) / 2,
    );
    glyphs::draw_text(raster, x, y, &text, CAPTION_SCALE, CAPTION_GRAY);
}
