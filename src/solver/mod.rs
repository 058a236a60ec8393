mod boundary;
mod core;
pub mod diagnostics;
mod params;

// Re-export public API
pub use boundary::{set_bnd, FieldType};
pub use self::core::{advect, diffuse, lin_solve, project};
pub use params::SolverParams;

use crate::state::SimState;

/// Full fluid simulation step.
///
/// Velocity is diffused, projected, self-advected and projected again; density
/// is then diffused and carried along the corrected velocity. Only the six
/// state buffers are touched: each projection borrows the pair of velocity
/// buffers that is about to be overwritten as its pressure/divergence scratch.
pub fn fluid_step(state: &mut SimState, params: &SolverParams) {
    let dt = params.dt;
    let n = state.n;
    let iter = params.iterations;

    // 1. Diffuse velocity
    diffuse(FieldType::Vx, &mut state.vx_prev, &state.vx, params.viscosity, dt, iter, n);
    diffuse(FieldType::Vy, &mut state.vy_prev, &state.vy, params.viscosity, dt, iter, n);

    // 2. Project diffused velocity (vx/vy are rewritten by advection next)
    project(&mut state.vx_prev, &mut state.vy_prev, &mut state.vx, &mut state.vy, iter, n);

    // 3. Advect velocity
    advect(FieldType::Vx, &mut state.vx, &state.vx_prev, &state.vx_prev, &state.vy_prev, dt, n);
    advect(FieldType::Vy, &mut state.vy, &state.vy_prev, &state.vx_prev, &state.vy_prev, dt, n);

    // 4. Project again to clean up advection divergence
    project(&mut state.vx, &mut state.vy, &mut state.vx_prev, &mut state.vy_prev, iter, n);

    // 5. Diffuse density
    diffuse(FieldType::Scalar, &mut state.density_prev, &state.density, params.diffusion, dt, iter, n);

    // 6. Advect density
    advect(FieldType::Scalar, &mut state.density, &state.density_prev, &state.vx, &state.vy, dt, n);

    state.clamp_density();
}
