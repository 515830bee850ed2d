//! Heart style: the year traced along the classic parametric heart curve,
//! one level-scaled circle marker per day.

use std::f64::consts::TAU;

use crate::{
    geometry::RenderGeometry,
    model::{ActivitySeries, StyleId, StyleParams},
    palette::{BG_DARK, GREENS, Rgba8, level_entry},
    surface::Raster,
};

use super::StyleRenderer;

/// Half-extent of the unscaled curve (x spans +-16, y roughly +-17).
const CURVE_EXTENT: f64 = 17.0;

/// Point on the heart curve at parameter `t` in [0, 2pi), y growing down.
pub(super) fn heart_point(t: f64) -> (f64, f64) {
    let x = 16.0 * t.sin().powi(3);
    let y = -(13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos());
    (x, y)
}

pub struct Heart;

impl StyleRenderer for Heart {
    fn id(&self) -> StyleId {
        StyleId::Heart
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
        let n = series.len() as f64;
        let cx = f64::from(geo.canvas_width) / 2.0;
        let cy = f64::from(geo.canvas_height) / 2.0;
        let scale = f64::from(geo.canvas_width.min(geo.canvas_height)) / 2.0 * 0.85 / CURVE_EXTENT;
        let marker_scale = f64::from(geo.cell_size) / 12.0;

        for (i, day) in series.days.iter().enumerate() {
            let t = i as f64 / n * TAU;
            let (hx, hy) = heart_point(t);
            let x = cx + hx * scale;
            let y = cy + hy * scale;

            let radius = (8.0 + 2.0 * f64::from(day.level.min(4))) * marker_scale / 2.0;
            raster.fill_circle(x, y, radius, level_entry(&GREENS, day.level));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{geometry::ViewportClass, level::LevelPolicy};

    #[test]
    fn curve_stays_within_its_declared_extent() {
        for i in 0..1000 {
            let (x, y) = heart_point(f64::from(i) / 1000.0 * TAU);
            assert!(x.abs() <= CURVE_EXTENT + 1e-9);
            assert!(y.abs() <= CURVE_EXTENT + 1e-9);
        }
    }

    #[test]
    fn marker_centers_land_inside_the_canvas() {
        let series = ActivitySeries::synthetic(2026, 4, LevelPolicy::Absolute).unwrap();
        let geo = RenderGeometry::resolve(series.len(), ViewportClass::Standard, false, false);
        let n = series.len() as f64;
        let cx = f64::from(geo.canvas_width) / 2.0;
        let cy = f64::from(geo.canvas_height) / 2.0;
        let scale = f64::from(geo.canvas_width.min(geo.canvas_height)) / 2.0 * 0.85 / CURVE_EXTENT;
        for i in 0..series.len() {
            let (hx, hy) = heart_point(i as f64 / n * TAU);
            let x = cx + hx * scale;
            let y = cy + hy * scale;
            assert!(x >= 0.0 && x <= f64::from(geo.canvas_width));
            assert!(y >= 0.0 && y <= f64::from(geo.canvas_height));
        }
    }

    #[test]
    fn heart_renders_marks_on_the_canvas() {
        let series = ActivitySeries::synthetic(2026, 4, LevelPolicy::Absolute).unwrap();
        let geo = RenderGeometry::resolve(series.len(), ViewportClass::Standard, false, false);
        let mut raster = Raster::new(geo.canvas_width, geo.canvas_height);
        raster.clear(BG_DARK);
        Heart.draw(&mut raster, &series, &geo, &StyleParams::default());
        let touched = raster
            .data
            .chunks_exact(4)
            .any(|px| px != [BG_DARK[0], BG_DARK[1], BG_DARK[2], BG_DARK[3]]);
        assert!(touched);
    }
}
