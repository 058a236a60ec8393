pub mod color;

// Re-export public API
pub use color::{constrain, hsv_to_rgb, map_number, rgb_to_argb, BACKGROUND, CELL_SATURATION, CELL_VALUE};

use crate::state::{idx, DENSITY_MAX};

/// 0RGB pixel buffer the field draws into.
pub struct Frame {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl Frame {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major pixels, ready for `minifb::Window::update_with_buffer`.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        (x < self.width && y < self.height).then(|| self.pixels[y * self.width + x])
    }

    /// Fill the whole frame with one color.
    pub fn clear(&mut self, rgb: [u8; 3]) {
        self.pixels.fill(rgb_to_argb(rgb));
    }

    /// Fill `[x0, x1) × [y0, y1)`, clipped to the frame.
    pub fn fill_rect(&mut self, x0: usize, y0: usize, x1: usize, y1: usize, rgb: [u8; 3]) {
        let x1 = x1.min(self.width);
        let y1 = y1.min(self.height);
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        let argb = rgb_to_argb(rgb);
        for y in y0..y1 {
            let row = y * self.width;
            self.pixels[row + x0..row + x1].fill(argb);
        }
    }
}

/// Draw every cell of an `n × n` density grid as a filled rectangle.
///
/// Cell `(col, row)` covers pixels `[col·sx, (col+1)·sx) × [row·sy, (row+1)·sy)`,
/// so adjacent cells tile the surface without gaps even when the scale is
/// fractional. Density is clamped into the hue range before `color_fn` sees it.
pub fn render_cells<F>(frame: &mut Frame, density: &[f64], n: usize, scale_x: f64, scale_y: f64, color_fn: F)
where
    F: Fn(f64, f64, f64) -> [u8; 3],
{
    for row in 0..n {
        let y0 = (row as f64 * scale_y) as usize;
        let y1 = ((row + 1) as f64 * scale_y) as usize;
        for col in 0..n {
            let x0 = (col as f64 * scale_x) as usize;
            let x1 = ((col + 1) as f64 * scale_x) as usize;
            let hue = constrain(density[idx(col, row, n)], 0.0, DENSITY_MAX);
            let rgb = color_fn(hue, CELL_SATURATION, CELL_VALUE);
            frame.fill_rect(x0, y0, x1, y1, rgb);
        }
    }
}
