//! The grid-aligned cell styles: classic greens, rainbow, wave, heatmap and
//! pixel. They share the week/day cell placement and differ only in how a
//! record's index and level turn into color.

use crate::{
    geometry::RenderGeometry,
    model::{ActivitySeries, StyleId, StyleParams},
    palette::{self, BG_BLACK, BG_DARK, GRAYS, GREENS, HEAT, Rgba8, level_entry},
    surface::Raster,
};

use super::StyleRenderer;

/// Paint one series as plain classic cells. Shared with the text overlay
/// style, which uses it as its backdrop.
pub(super) fn draw_classic_cells(
    raster: &mut Raster,
    series: &ActivitySeries,
    geo: &RenderGeometry,
) {
    for (i, day) in series.days.iter().enumerate() {
        let (x, y) = geo.cell_origin(i);
        let color = level_entry(&GREENS, day.level);
        raster.fill_rect(x, y, geo.cell_size, geo.cell_size, color);
        if day.level >= 4 {
            draw_core(raster, x, y, geo.cell_size, color);
        }
    }
}

/// Brighter inner rectangle at ~45% of the cell, for a bit of depth on the
/// hottest cells.
fn draw_core(raster: &mut Raster, x: i64, y: i64, cell: u32, base: Rgba8) {
    let core = ((f64::from(cell) * 0.45).round() as u32).max(1);
    let inset = i64::from((cell - core) / 2);
    let bright = palette::lerp(base, [255, 255, 255, 255], 0.35);
    raster.fill_rect(x + inset, y + inset, core, core, bright);
}

pub struct Classic;

impl StyleRenderer for Classic {
    fn id(&self) -> StyleId {
        StyleId::Classic
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
        _params: &StyleParams,
    ) {
        draw_classic_cells(raster, series, geo);
    }
}

pub struct Rainbow;

impl StyleRenderer for Rainbow {
    fn id(&self) -> StyleId {
        StyleId::Rainbow
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
        _params: &StyleParams,
    ) {
        let n = series.len() as f64;
        for (i, day) in series.days.iter().enumerate() {
            let (x, y) = geo.cell_origin(i);
            let hue = (i as f64 / n) * 360.0;
            let lightness = 0.5 + 0.1 * f64::from(day.level.min(4));
            raster.fill_rect(x, y, geo.cell_size, geo.cell_size, palette::hsl(hue, 0.7, lightness));
        }
    }
}

pub struct Wave;

impl StyleRenderer for Wave {
    fn id(&self) -> StyleId {
        StyleId::Wave
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
        _params: &StyleParams,
    ) {
        for (i, day) in series.days.iter().enumerate() {
            let (x, y) = geo.cell_origin(i);
            let swell = (i as f64 / 10.0).sin() * 30.0 + 50.0;
            let lightness = (swell + 10.0 * f64::from(day.level.min(4))) / 100.0;
            raster.fill_rect(x, y, geo.cell_size, geo.cell_size, palette::hsl(200.0, 0.7, lightness));
        }
    }
}

pub struct Heatmap;

impl StyleRenderer for Heatmap {
    fn id(&self) -> StyleId {
        StyleId::Heatmap
    }

    fn background(&self) -> Rgba8 {
        BG_BLACK
    }

    fn grid_aligned(&self) -> bool {
        true
    }

    fn draw(
        &self,
        raster: &mut Raster,
        series: &ActivitySeries,
        geo: &RenderGeometry,
        _params: &StyleParams,
    ) {
        for (i, day) in series.days.iter().enumerate() {
            let (x, y) = geo.cell_origin(i);
            let color = level_entry(&HEAT, day.level);
            let glow = u32::from(day.level.min(4)) * 2;
            if glow > 0 {
                raster.glow_rect(x, y, geo.cell_size, geo.cell_size, palette::with_alpha(color, 150), glow);
            }
            raster.fill_rect(x, y, geo.cell_size, geo.cell_size, color);
            if day.level >= 3 {
                draw_core(raster, x, y, geo.cell_size, color);
            }
        }
    }
}

pub struct Pixel;

impl StyleRenderer for Pixel {
    fn id(&self) -> StyleId {
        StyleId::Pixel
    }

    fn background(&self) -> Rgba8 {
        BG_BLACK
    }

    fn grid_aligned(&self) -> bool {
        true
    }

    fn draw(
        &self,
        raster: &mut Raster,
        series: &ActivitySeries,
        geo: &RenderGeometry,
        _params: &StyleParams,
    ) {
        for (i, day) in series.days.iter().enumerate() {
            let (x, y) = geo.cell_origin(i);
            raster.fill_rect(x, y, geo.cell_size, geo.cell_size, level_entry(&GRAYS, day.level));
        }
    }
}
