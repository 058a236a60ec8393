use crate::error::FluidError;
use crate::state::{DEFAULT_N, MIN_GRID_SIZE};

/// Solver parameters for the fluid simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct SolverParams {
    /// Grid resolution N (cells per side).
    pub size: usize,
    pub dt: f64,
    /// Density diffusion rate.
    pub diffusion: f64,
    /// Velocity diffusion rate.
    pub viscosity: f64,
    /// Gauss-Seidel sweeps per diffuse/project solve.
    pub iterations: usize,
    /// Density removed from every cell per frame.
    pub density_fade: f64,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            size: DEFAULT_N,
            dt: 0.5,
            diffusion: 0.0,
            viscosity: 0.0,
            iterations: 1,
            density_fade: 1.0,
        }
    }
}

impl SolverParams {
    /// Default parameters at a given grid size.
    pub fn with_size(size: usize) -> Self {
        Self { size, ..Self::default() }
    }

    /// Reject parameters the solver cannot run with.
    ///
    /// Large but finite values pass: the solver is unconditionally stable in
    /// advection, and blow-up from extreme rates is left to the caller.
    pub fn validate(&self) -> Result<(), FluidError> {
        if self.size < MIN_GRID_SIZE {
            return Err(FluidError::GridTooSmall { size: self.size, min: MIN_GRID_SIZE });
        }
        for (name, value) in [
            ("dt", self.dt),
            ("diffusion", self.diffusion),
            ("viscosity", self.viscosity),
            ("density_fade", self.density_fade),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(FluidError::InvalidParameter { name, value });
            }
        }
        if self.iterations == 0 {
            return Err(FluidError::InvalidParameter { name: "iterations", value: 0.0 });
        }
        Ok(())
    }
}
