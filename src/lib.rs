//! Stable-fluids density simulation for animated backgrounds.
//!
//! [`FluidField`] owns an `N × N` grid of density and velocity and advances
//! it with a semi-implicit solver: Gauss-Seidel diffusion, pressure
//! projection and semi-Lagrangian advection. Density doubles as a hue angle
//! and is drawn as colored cells into a [`Frame`].

pub mod config;
pub mod error;
pub mod fluid;
pub mod input;
pub mod renderer;
pub mod solver;
pub mod state;

pub use error::{ConfigError, FluidError};
pub use fluid::FluidField;
pub use renderer::Frame;
pub use solver::SolverParams;
