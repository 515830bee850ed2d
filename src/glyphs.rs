//! Fixed 7x5 bitmap glyphs.
//!
//! Uppercase Latin letters, digits and the handful of symbols the caption
//! needs. Each glyph is seven rows of five bits, bit 4 being the leftmost
//! column. The text overlay style maps these bits onto grid cells; the label
//! and caption bands paint them as small pixel blocks.

use crate::palette::Rgba8;
use crate::surface::Raster;

pub const GLYPH_ROWS: u32 = 7;
pub const GLYPH_COLS: u32 = 5;
/// Column advance per character: glyph width plus one blank column.
pub const GLYPH_ADVANCE: u32 = GLYPH_COLS + 1;

#[derive(Clone, Copy, Debug)]
pub struct GlyphPattern(pub [u8; 7]);

impl GlyphPattern {
    pub fn bit(&self, row: u32, col: u32) -> bool {
        if row >= GLYPH_ROWS || col >= GLYPH_COLS {
            return false;
        }
        (self.0[row as usize] >> (GLYPH_COLS - 1 - col)) & 1 == 1
    }
}

/// Look up the pattern for `c`. Lowercase letters map to uppercase; anything
/// unsupported renders blank.
pub fn glyph(c: char) -> GlyphPattern {
    let c = c.to_ascii_uppercase();
    let rows: [u8; 7] = match c {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b11011, 0b10001],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        '@' => [0b01110, 0b10001, 0b00001, 0b01101, 0b10101, 0b10101, 0b01110],
        '\u{2022}' => [0b00000, 0b00000, 0b01110, 0b01110, 0b01110, 0b00000, 0b00000],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00100, 0b00100],
        _ => [0; 7], // includes ' '
    };
    GlyphPattern(rows)
}

/// Width of `text` in glyph columns (the text-overlay centering unit).
pub fn text_width_cols(text: &str) -> u32 {
    let n = text.chars().count() as u32;
    if n == 0 { 0 } else { n * GLYPH_ADVANCE - 1 }
}

/// Width of `text` in pixels when painted at `px_scale` pixels per bit.
pub fn text_width_px(text: &str, px_scale: u32) -> u32 {
    text_width_cols(text) * px_scale
}

/// Paint `text` with `px_scale`-square blocks per set bit, top-left at
/// (`x`, `y`). Clips at the surface bounds like every other primitive.
pub fn draw_text(raster: &mut Raster, x: i64, y: i64, text: &str, px_scale: u32, color: Rgba8) {
    let mut pen_x = x;
    for c in text.chars() {
        let g = glyph(c);
        for row in 0..GLYPH_ROWS {
            for col in 0..GLYPH_COLS {
                if g.bit(row, col) {
                    raster.fill_rect(
                        pen_x + i64::from(col * px_scale),
                        y + i64::from(row * px_scale),
                        px_scale,
                        px_scale,
                        color,
                    );
                }
            }
        }
        pen_x += i64::from(GLYPH_ADVANCE * px_scale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_matches_advance_formula() {
        assert_eq!(text_width_cols(""), 0);
        assert_eq!(text_width_cols("A"), 5);
        assert_eq!(text_width_cols("AB"), 11);
        assert_eq!(text_width_cols("HELLO"), 29);
    }

    #[test]
    fn lowercase_maps_to_uppercase() {
        assert_eq!(glyph('a').0, glyph('A').0);
    }

    #[test]
    fn unknown_chars_are_blank() {
        assert_eq!(glyph('~').0, [0; 7]);
        assert_eq!(glyph(' ').0, [0; 7]);
    }

    #[test]
    fn bit_indexing_is_msb_left() {
        // 'L' has its full bottom row set and only the left column above.
        let l = glyph('L');
        assert!(l.bit(0, 0));
        assert!(!l.bit(0, 4));
        for col in 0..GLYPH_COLS {
            assert!(l.bit(6, col));
        }
    }

    #[test]
    fn draw_text_paints_set_bits() {
        let mut r = Raster::new(10, 10);
        draw_text(&mut r, 0, 0, "L", 1, [255, 255, 255, 255]);
        assert_eq!(r.get(0, 0), [255, 255, 255, 255]);
        assert_eq!(r.get(4, 6), [255, 255, 255, 255]);
        assert_eq!(r.get(4, 0), [0, 0, 0, 0]);
    }
}
