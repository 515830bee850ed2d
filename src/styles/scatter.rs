//! Random-scatter style. "Random" is a fixed multiply-add-modulo recurrence
//! of the day index, so the same series always produces the identical image;
//! no clock or entropy source is ever consulted.

use crate::{
    geometry::RenderGeometry,
    model::{ActivitySeries, StyleId, StyleParams},
    palette::{BG_DARK, GREENS, Rgba8, level_entry},
    surface::Raster,
};

use super::StyleRenderer;

/// Index-seeded pseudo-random pair in [0, 1).
pub(super) fn hash_pair(i: usize) -> (f64, f64) {
    let seed = (i as u64).wrapping_mul(9301).wrapping_add(49297);
    let r1 = (seed % 233_280) as f64 / 233_280.0;
    let r2 = ((seed.wrapping_mul(7)) % 233_280) as f64 / 233_280.0;
    (r1, r2)
}

pub struct Scatter;

impl StyleRenderer for Scatter {
    fn id(&self) -> StyleId {
        StyleId::Scatter
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
        let scale = f64::from(geo.cell_size) / 12.0;
        for (i, day) in series.days.iter().enumerate() {
            let (r1, r2) = hash_pair(i);
            let x = r1 * f64::from(geo.canvas_width);
            let y = r2 * f64::from(geo.canvas_height);
            let size = (10.0 + 5.0 * f64::from(day.level.min(4))) * scale;
            let color = level_entry(&GREENS, day.level);

            if i % 3 == 0 {
                raster.fill_rect(
                    (x - size / 2.0).round() as i64,
                    (y - size / 2.0).round() as i64,
                    size.round() as u32,
                    size.round() as u32,
                    color,
                );
            } else {
                raster.fill_circle(x, y, size / 2.0, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{geometry::ViewportClass, level::LevelPolicy};

    #[test]
    fn hash_pair_is_pure_and_in_range() {
        for i in 0..400 {
            let (a1, a2) = hash_pair(i);
            let (b1, b2) = hash_pair(i);
            assert_eq!((a1, a2), (b1, b2));
            assert!((0.0..1.0).contains(&a1));
            assert!((0.0..1.0).contains(&a2));
        }
    }

    #[test]
    fn same_series_renders_pixel_identical() {
        let series = ActivitySeries::synthetic(2026, 5, LevelPolicy::Absolute).unwrap();
        let geo = RenderGeometry::resolve(series.len(), ViewportClass::Standard, false, false);

        let mut a = Raster::new(geo.canvas_width, geo.canvas_height);
        a.clear(BG_DARK);
        Scatter.draw(&mut a, &series, &geo, &StyleParams::default());

        let mut b = Raster::new(geo.canvas_width, geo.canvas_height);
        b.clear(BG_DARK);
        Scatter.draw(&mut b, &series, &geo, &StyleParams::default());

        assert_eq!(a.data, b.data);
    }
}
