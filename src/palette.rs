//! Color tables and conversions shared by the style renderers.

/// Straight (non-premultiplied) RGBA8.
pub type Rgba8 = [u8; 4];

pub const fn rgb(r: u8, g: u8, b: u8) -> Rgba8 {
    [r, g, b, 255]
}

/// GitHub dark-theme page background.
pub const BG_DARK: Rgba8 = rgb(0x0d, 0x11, 0x17);
pub const BG_BLACK: Rgba8 = rgb(0x00, 0x00, 0x00);

/// Contribution greens, level 0..=4, dark theme.
pub const GREENS: [Rgba8; 5] = [
    rgb(0x16, 0x1b, 0x22),
    rgb(0x0e, 0x44, 0x29),
    rgb(0x00, 0x6d, 0x32),
    rgb(0x26, 0xa6, 0x41),
    rgb(0x39, 0xd3, 0x53),
];

/// Navy-to-red heat ramp, level 0..=4.
pub const HEAT: [Rgba8; 5] = [
    rgb(0x10, 0x20, 0x40),
    rgb(0x3a, 0x2a, 0x6a),
    rgb(0x7a, 0x2a, 0x5a),
    rgb(0xc0, 0x30, 0x30),
    rgb(0xff, 0x20, 0x20),
];

/// Grayscale ramp, level 0..=4.
pub const GRAYS: [Rgba8; 5] = [
    rgb(0x00, 0x00, 0x00),
    rgb(0x55, 0x55, 0x55),
    rgb(0x88, 0x88, 0x88),
    rgb(0xbb, 0xbb, 0xbb),
    rgb(0xff, 0xff, 0xff),
];

/// Cyclic block palette for the tetris stack.
pub const TETROMINO: [Rgba8; 7] = [
    rgb(0x00, 0xf0, 0xf0),
    rgb(0xf0, 0xf0, 0x00),
    rgb(0xa0, 0x00, 0xf0),
    rgb(0x00, 0xf0, 0x00),
    rgb(0xf0, 0x00, 0x00),
    rgb(0x00, 0x00, 0xf0),
    rgb(0xf0, 0xa0, 0x00),
];

/// Index a 5-entry palette by level, falling back to entry 0 for anything
/// outside 0..=4.
pub fn level_entry(palette: &[Rgba8; 5], level: u8) -> Rgba8 {
    palette.get(usize::from(level)).copied().unwrap_or(palette[0])
}

/// HSL to RGBA8. `h` in degrees (wraps), `s`/`l` in 0..=1 (clamped).
pub fn hsl(h: f64, s: f64, l: f64) -> Rgba8 {
    let h = h.rem_euclid(360.0);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r1, g1, b1) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;

    let to_u8 = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    [to_u8(r1), to_u8(g1), to_u8(b1), 255]
}

/// Linear interpolation between two colors, `t` in 0..=1.
pub fn lerp(a: Rgba8, b: Rgba8, t: f64) -> Rgba8 {
    let t = t.clamp(0.0, 1.0);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = (f64::from(a[i]) + (f64::from(b[i]) - f64::from(a[i])) * t).round() as u8;
    }
    out
}

pub fn with_alpha(c: Rgba8, a: u8) -> Rgba8 {
    [c[0], c[1], c[2], a]
}
