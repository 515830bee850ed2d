//! Audio-visualizer style: one bar per week, height from the week's mean
//! level, colored like a level meter (green at the bottom, red at the top).

use crate::{
    geometry::RenderGeometry,
    model::{ActivitySeries, StyleId, StyleParams},
    palette::{self, BG_BLACK, Rgba8, rgb},
    surface::Raster,
};

use super::StyleRenderer;

const METER_LOW: Rgba8 = rgb(0x2e, 0xa0, 0x43);
const METER_MID: Rgba8 = rgb(0xd4, 0xa7, 0x2c);
const METER_HIGH: Rgba8 = rgb(0xf8, 0x51, 0x49);
const CAP: Rgba8 = rgb(0xff, 0xff, 0xff);

/// Three-stop gradient over the meter scale, `t` 0 at the bottom.
fn meter_color(t: f64) -> Rgba8 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        palette::lerp(METER_LOW, METER_MID, t * 2.0)
    } else {
        palette::lerp(METER_MID, METER_HIGH, (t - 0.5) * 2.0)
    }
}

pub struct Audio;

impl StyleRenderer for Audio {
    fn id(&self) -> StyleId {
        StyleId::Audio
    }

    fn background(&self) -> Rgba8 {
        BG_BLACK
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
        let bottom = i64::from(geo.body_bottom());

        for (week, days) in series.days.chunks(7).enumerate() {
            let total: u32 = days.iter().map(|d| u32::from(d.level.min(4))).sum();
            let avg = f64::from(total) / 7.0;
            let bar_px = (avg / 4.0 * avail).round() as i64;
            if bar_px <= 0 {
                continue;
            }
            let x = i64::from(week as u32 * geo.pitch());
            let top = bottom - bar_px;

            let glow_alpha = (avg / 4.0 * 120.0).round() as u8;
            if glow_alpha > 0 {
                raster.glow_rect(
                    x,
                    top,
                    geo.cell_size,
                    bar_px as u32,
                    palette::with_alpha(METER_LOW, glow_alpha),
                    2,
                );
            }

            // Color follows absolute meter height, so only tall bars go red.
            for row in 0..bar_px {
                let t = (row + 1) as f64 / avail;
                raster.fill_rect(x, bottom - 1 - row, geo.cell_size, 1, meter_color(t));
            }

            if avg >= 3.0 {
                raster.fill_rect(x, top - 4, geo.cell_size, 2, CAP);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{geometry::ViewportClass, model::ActivityRecord};
    use chrono::NaiveDate;

    fn flat_week(level: u8) -> ActivitySeries {
        let start = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        ActivitySeries {
            days: (0..7)
                .map(|i| ActivityRecord {
                    date: start + chrono::Days::new(i),
                    count: u32::from(level),
                    level,
                })
                .collect(),
        }
    }

    #[test]
    fn meter_gradient_endpoints() {
        assert_eq!(meter_color(0.0), METER_LOW);
        assert_eq!(meter_color(1.0), METER_HIGH);
        assert_eq!(meter_color(0.5), METER_MID);
    }

    #[test]
    fn max_week_reaches_the_top_of_the_body_and_gets_a_cap() {
        let series = flat_week(4);
        let geo = RenderGeometry::resolve(series.len(), ViewportClass::Standard, false, false);
        let mut raster = Raster::new(geo.canvas_width, geo.canvas_height);
        raster.clear(BG_BLACK);
        Audio.draw(&mut raster, &series, &geo, &StyleParams::default());

        // Top row of the bar is painted red-ish, bottom green-ish.
        let top = raster.get(1, geo.top_padding);
        let bottom = raster.get(1, geo.body_bottom() - 1);
        assert!(top[0] > top[1], "top of a full bar should be red-dominant");
        assert!(bottom[1] > bottom[0], "bottom should be green-dominant");
    }

    #[test]
    fn silent_week_draws_no_bar() {
        let series = flat_week(0);
        let geo = RenderGeometry::resolve(series.len(), ViewportClass::Standard, false, false);
        let mut raster = Raster::new(geo.canvas_width, geo.canvas_height);
        raster.clear(BG_BLACK);
        let before = raster.clone();
        Audio.draw(&mut raster, &series, &geo, &StyleParams::default());
        assert_eq!(raster, before);
    }
}
