//! The mutable raster surface every style renderer draws into.
//!
//! Straight RGBA8, row-major. All primitives clip at the surface bounds, so
//! renderers are free to place marks partially (or entirely) outside the
//! canvas. Nothing here keeps ambient state between calls; every effect is a
//! plain parameterized function of the buffer.

use crate::palette::{Rgba8, with_alpha};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>, // rgba8, len = width * height * 4
}

impl Raster {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width as usize) * (height as usize) * 4],
        }
    }

    pub fn clear(&mut self, color: Rgba8) {
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&color);
        }
    }

    pub fn get(&self, x: u32, y: u32) -> Rgba8 {
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    /// Source-over blend of one pixel; out-of-bounds coordinates are ignored.
    pub fn blend_px(&mut self, x: i64, y: i64, color: Rgba8) {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let dst = [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]];
        let out = over(dst, color);
        self.data[i..i + 4].copy_from_slice(&out);
    }

    /// Axis-aligned filled rectangle. `x`/`y` may be negative; the visible
    /// intersection is drawn.
    pub fn fill_rect(&mut self, x: i64, y: i64, w: u32, h: u32, color: Rgba8) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + i64::from(w)).min(i64::from(self.width));
        let y1 = (y + i64::from(h)).min(i64::from(self.height));
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        if color[3] == 255 {
            for yy in y0..y1 {
                let row = ((yy as usize) * (self.width as usize) + (x0 as usize)) * 4;
                for px in self.data[row..row + ((x1 - x0) as usize) * 4].chunks_exact_mut(4) {
                    px.copy_from_slice(&color);
                }
            }
        } else {
            for yy in y0..y1 {
                for xx in x0..x1 {
                    self.blend_px(xx, yy, color);
                }
            }
        }
    }

    /// 1px rectangle outline.
    pub fn stroke_rect(&mut self, x: i64, y: i64, w: u32, h: u32, color: Rgba8) {
        if w == 0 || h == 0 {
            return;
        }
        self.fill_rect(x, y, w, 1, color);
        self.fill_rect(x, y + i64::from(h) - 1, w, 1, color);
        self.fill_rect(x, y, 1, h, color);
        self.fill_rect(x + i64::from(w) - 1, y, 1, h, color);
    }

    /// Filled circle centered on (`cx`, `cy`).
    pub fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Rgba8) {
        if radius <= 0.0 {
            return;
        }
        let r2 = radius * radius;
        let x0 = (cx - radius).floor() as i64;
        let x1 = (cx + radius).ceil() as i64;
        let y0 = (cy - radius).floor() as i64;
        let y1 = (cy + radius).ceil() as i64;
        for yy in y0..=y1 {
            for xx in x0..=x1 {
                let dx = (xx as f64 + 0.5) - cx;
                let dy = (yy as f64 + 0.5) - cy;
                if dx * dx + dy * dy <= r2 {
                    self.blend_px(xx, yy, color);
                }
            }
        }
    }

    /// Glow halo around a rectangle: `radius` concentric 1px outlines with
    /// falling alpha. The rectangle itself is not touched.
    pub fn glow_rect(&mut self, x: i64, y: i64, w: u32, h: u32, color: Rgba8, radius: u32) {
        for r in 1..=i64::from(radius) {
            let a = (f64::from(color[3]) / (1.5 * r as f64)).round() as u8;
            if a == 0 {
                break;
            }
            self.stroke_rect(
                x - r,
                y - r,
                w + 2 * r as u32,
                h + 2 * r as u32,
                with_alpha(color, a),
            );
        }
    }

    /// Radial falloff glow behind a circular marker. Alpha fades linearly
    /// from `color[3]` at `inner` to zero at `outer`.
    pub fn glow_circle(&mut self, cx: f64, cy: f64, inner: f64, outer: f64, color: Rgba8) {
        if outer <= inner || outer <= 0.0 {
            return;
        }
        let x0 = (cx - outer).floor() as i64;
        let x1 = (cx + outer).ceil() as i64;
        let y0 = (cy - outer).floor() as i64;
        let y1 = (cy + outer).ceil() as i64;
        for yy in y0..=y1 {
            for xx in x0..=x1 {
                let dx = (xx as f64 + 0.5) - cx;
                let dy = (yy as f64 + 0.5) - cy;
                let d = (dx * dx + dy * dy).sqrt();
                if d <= inner || d > outer {
                    continue;
                }
                let t = 1.0 - (d - inner) / (outer - inner);
                let a = (f64::from(color[3]) * t).round() as u8;
                if a > 0 {
                    self.blend_px(xx, yy, with_alpha(color, a));
                }
            }
        }
    }
}

/// Straight-alpha source-over with integer math.
fn over(dst: Rgba8, src: Rgba8) -> Rgba8 {
    let sa = u16::from(src[3]);
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }
    let inv = 255 - sa;
    let mut out = [0u8; 4];
    for i in 0..3 {
        out[i] = mul_div255(u16::from(src[i]), sa).saturating_add(mul_div255(u16::from(dst[i]), inv));
    }
    out[3] = (sa as u8).saturating_add(mul_div255(u16::from(dst[3]), inv));
    out
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}
