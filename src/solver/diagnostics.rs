use crate::state::{idx, SimState};

/// Sum of density over the whole grid.
pub fn total_density(state: &SimState) -> f64 {
    state.density.iter().sum()
}

/// Volume-averaged kinetic energy over interior cells: KE = 0.5 * <vx² + vy²>.
pub fn kinetic_energy(vx: &[f64], vy: &[f64], n: usize) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for j in 1..(n - 1) {
        for i in 1..(n - 1) {
            let ii = idx(i, j, n);
            sum += vx[ii] * vx[ii] + vy[ii] * vy[ii];
            count += 1;
        }
    }
    if count > 0 { 0.5 * sum / count as f64 } else { 0.0 }
}

/// Largest central-difference divergence magnitude over interior cells.
pub fn max_divergence(vx: &[f64], vy: &[f64], n: usize) -> f64 {
    let mut max = 0.0_f64;
    for j in 1..(n - 1) {
        for i in 1..(n - 1) {
            let d = 0.5
                * (vx[idx(i + 1, j, n)] - vx[idx(i - 1, j, n)]
                    + vy[idx(i, j + 1, n)] - vy[idx(i, j - 1, n)]);
            max = max.max(d.abs());
        }
    }
    max
}

/// Whether every buffer is free of NaN/Inf.
///
/// The solver does not guard against blow-up from extreme dt, rates or
/// injected velocities; hosts can poll this and reset.
pub fn all_finite(state: &SimState) -> bool {
    [
        &state.density,
        &state.density_prev,
        &state.vx,
        &state.vx_prev,
        &state.vy,
        &state.vy_prev,
    ]
    .iter()
    .all(|buf| buf.iter().all(|v| v.is_finite()))
}
