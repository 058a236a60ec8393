/// Smallest grid that still has an interior cell (`[1, N-2]` non-empty).
pub const MIN_GRID_SIZE: usize = 3;

/// Default grid resolution for a background session.
pub const DEFAULT_N: usize = 40;

/// Upper clamp for density. Density doubles as a hue angle, so it stays below 360.
pub const DENSITY_MAX: f64 = 359.0;

/// Grid arrays for one fluid session.
///
/// Every buffer is `n * n`, row-major, allocated once and never resized.
pub struct SimState {
    pub n: usize,
    pub density: Vec<f64>,
    pub density_prev: Vec<f64>,
    pub vx: Vec<f64>,
    pub vx_prev: Vec<f64>,
    pub vy: Vec<f64>,
    pub vy_prev: Vec<f64>,
}

/// Convert 2D coordinates to a 1D index.
/// Caller guarantees `0 <= x < n` and `0 <= y < n`.
#[inline(always)]
pub const fn idx(x: usize, y: usize, n: usize) -> usize {
    y * n + x
}

/// Clamp a signed cell coordinate into `[0, n-1]`.
#[inline]
pub fn clamp_cell(v: i64, n: usize) -> usize {
    v.clamp(0, n as i64 - 1) as usize
}

impl SimState {
    /// Zero-initialized state. `n` must already be validated (`>= MIN_GRID_SIZE`).
    pub fn new(n: usize) -> Self {
        let size = n * n;
        Self {
            n,
            density: vec![0.0; size],
            density_prev: vec![0.0; size],
            vx: vec![0.0; size],
            vx_prev: vec![0.0; size],
            vy: vec![0.0; size],
            vy_prev: vec![0.0; size],
        }
    }

    /// Zero every buffer in place.
    pub fn clear(&mut self) {
        for buf in [
            &mut self.density,
            &mut self.density_prev,
            &mut self.vx,
            &mut self.vx_prev,
            &mut self.vy,
            &mut self.vy_prev,
        ] {
            buf.fill(0.0);
        }
    }

    /// Clamp density into `[0, DENSITY_MAX]`.
    pub fn clamp_density(&mut self) {
        for d in self.density.iter_mut() {
            *d = d.clamp(0.0, DENSITY_MAX);
        }
    }
}
