//! Tetris stack: each week's summed levels become a column of beveled
//! blocks growing from the bottom of the body area.

use crate::{
    geometry::RenderGeometry,
    model::{ActivitySeries, StyleId, StyleParams},
    palette::{self, BG_DARK, Rgba8, TETROMINO},
    surface::Raster,
};

use super::StyleRenderer;

/// Maximum possible week total: seven days at level 4.
const WEEK_LEVEL_CAP: f64 = 28.0;

pub struct Tetris;

impl StyleRenderer for Tetris {
    fn id(&self) -> StyleId {
        StyleId::Tetris
    }

    fn background(&self) -> Rgba8 {
        BG_DARK
    }

    fn grid_aligned(&self) -> bool {
        false
    }

    fn draw(
        &self,
        raster: &mut Raster,
        series: &ActivitySeries,
        geo: &RenderGeometry,
        _params: &StyleParams,
    ) {
        let avail = f64::from(geo.body_height());
        let pitch = geo.pitch();
        let bottom = i64::from(geo.body_bottom());

        for (week, days) in series.days.chunks(7).enumerate() {
            let total: u32 = days.iter().map(|d| u32::from(d.level.min(4))).sum();
            let stack_px = f64::from(total) / WEEK_LEVEL_CAP * avail;
            let blocks = (stack_px / f64::from(pitch)).round() as u32;
            let x = i64::from(week as u32 * pitch);

            for b in 0..blocks {
                let y = bottom - i64::from((b + 1) * pitch);
                let color = TETROMINO[(b as usize) % TETROMINO.len()];
                raster.fill_rect(x, y, geo.cell_size, geo.cell_size, color);
                // Bevel: dark border, light top edge.
                raster.stroke_rect(
                    x,
                    y,
                    geo.cell_size,
                    geo.cell_size,
                    palette::lerp(color, [0, 0, 0, 255], 0.45),
                );
                if geo.cell_size > 2 {
                    raster.fill_rect(
                        x + 1,
                        y + 1,
                        geo.cell_size - 2,
                        1,
                        palette::lerp(color, [255, 255, 255, 255], 0.5),
                    );
                }
            }
        }
    }
}
