/// Saturation used when density is drawn as a hue.
pub const CELL_SATURATION: f64 = 0.3;
/// Value (brightness) used when density is drawn as a hue.
pub const CELL_VALUE: f64 = 0.8;

/// Background fill behind the field.
pub const BACKGROUND: [u8; 3] = [33, 33, 33];

/// Linearly map `x` from `[old_lo, old_hi]` onto `[new_lo, new_hi]`.
/// Not clamped: inputs outside the old range extrapolate.
pub fn map_number(x: f64, old_lo: f64, old_hi: f64, new_lo: f64, new_hi: f64) -> f64 {
    new_lo + (x - old_lo) * (new_hi - new_lo) / (old_hi - old_lo)
}

/// Constrain `x` to `[lo, hi]`.
pub fn constrain(x: f64, lo: f64, hi: f64) -> f64 {
    if x < lo {
        lo
    } else if x > hi {
        hi
    } else {
        x
    }
}

/// Convert HSV to 8-bit RGB with the six-sector piecewise formula.
/// `h` is in degrees and wraps mod 360; `s` and `v` are in `[0, 1]`.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> [u8; 3] {
    let h = h.rem_euclid(360.0);
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match (h / 60.0) as usize {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
    ]
}

/// Pack RGB into the 0RGB `u32` layout minifb expects.
#[inline]
pub fn rgb_to_argb(rgb: [u8; 3]) -> u32 {
    (rgb[0] as u32) << 16 | (rgb[1] as u32) << 8 | rgb[2] as u32
}
