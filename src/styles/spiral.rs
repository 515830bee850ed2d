//! Spiral style: the year unwinds from the canvas centroid over three full
//! rotations, one circular marker per day.

use std::f64::consts::TAU;

use crate::{
    geometry::RenderGeometry,
    glyphs,
    model::{ActivitySeries, StyleId, StyleParams},
    palette::{self, BG_DARK, GREENS, Rgba8, level_entry},
    surface::Raster,
};

use super::StyleRenderer;

const ROTATIONS: f64 = 3.0;
/// Marker diameter per level, as a multiple of the cell size.
const SIZE_MULT: [f64; 5] = [0.4, 0.6, 0.8, 1.05, 1.3];
const LABEL_GRAY: Rgba8 = palette::rgb(0x8b, 0x94, 0x9e);

pub struct Spiral;

impl StyleRenderer for Spiral {
    fn id(&self) -> StyleId {
        StyleId::Spiral
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
        params: &StyleParams,
    ) {
        let n = series.len() as f64;
        let cx = f64::from(geo.canvas_width) / 2.0;
        let cy = f64::from(geo.canvas_height) / 2.0;
        let max_radius = f64::from(geo.canvas_width.min(geo.canvas_height)) / 2.0 * 0.85;

        let mut last_point = (cx, cy);
        for (i, day) in series.days.iter().enumerate() {
            let t = i as f64 / n;
            let angle = t * TAU * ROTATIONS;
            let radius = t * max_radius;
            let x = cx + angle.cos() * radius;
            let y = cy + angle.sin() * radius;
            last_point = (x, y);

            let level = usize::from(day.level.min(4));
            let marker = f64::from(geo.cell_size) * SIZE_MULT[level] / 2.0;
            let color = level_entry(&GREENS, day.level);
            if day.level >= 3 {
                raster.glow_circle(x, y, marker, marker + 3.0, palette::with_alpha(color, 140));
            }
            raster.fill_circle(x, y, marker, color);
        }

        // Calendar tags at the origin and the outer end of the spiral.
        if params.show_month_labels {
            if let (Some(first), Some(last)) = (series.days.first(), series.days.last()) {
                let start_tag = first.date.format("%b %d").to_string().to_uppercase();
                let end_tag = last.date.format("%b %d").to_string().to_uppercase();
                glyphs::draw_text(raster, cx as i64 + 4, cy as i64 - 3, &start_tag, 1, LABEL_GRAY);
                glyphs::draw_text(
                    raster,
                    last_point.0 as i64 + 6,
                    last_point.1 as i64 - 3,
                    &end_tag,
                    1,
                    LABEL_GRAY,
                );
            }
        }
    }
}
