use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::renderer::BACKGROUND;
use crate::solver::SolverParams;

pub const CONFIG_FILE: &str = "fluid-backdrop.yaml";

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub fluid: FluidConfig,
    pub display: DisplayConfig,
    pub stimulus: StimulusConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct FluidConfig {
    pub size: usize,
    pub dt: f64,
    pub diffusion: f64,
    pub viscosity: f64,
    pub iterations: usize,
    pub density_fade: f64,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub width: usize,
    pub height: usize,
    pub target_fps: usize,
    pub background: [u8; 3],
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct StimulusConfig {
    /// Inject ink at the center when the pointer is idle.
    pub random_motion: bool,
    /// Chance per idle frame of a `random_motion` call.
    pub probability: f64,
    /// Fixed RNG seed; entropy when absent.
    pub seed: Option<u64>,
    /// Inject on every pointer move, not only while the left button is held.
    pub hover_injects: bool,
}

impl Default for FluidConfig {
    fn default() -> Self {
        let p = SolverParams::default();
        Self {
            size: p.size,
            dt: p.dt,
            diffusion: p.diffusion,
            viscosity: p.viscosity,
            iterations: p.iterations,
            density_fade: p.density_fade,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
            target_fps: 60,
            background: BACKGROUND,
        }
    }
}

impl Default for StimulusConfig {
    fn default() -> Self {
        Self {
            random_motion: true,
            probability: 0.1,
            seed: None,
            hover_injects: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fluid: FluidConfig::default(),
            display: DisplayConfig::default(),
            stimulus: StimulusConfig::default(),
        }
    }
}

impl Config {
    /// Solver parameters for a new field. Validation happens at field construction.
    pub fn solver_params(&self) -> SolverParams {
        SolverParams {
            size: self.fluid.size,
            dt: self.fluid.dt,
            diffusion: self.fluid.diffusion,
            viscosity: self.fluid.viscosity,
            iterations: self.fluid.iterations,
            density_fade: self.fluid.density_fade,
        }
    }
}

impl StimulusConfig {
    /// Probability clamped into `[0, 1]`; NaN disables the stimulus.
    pub fn chance(&self) -> f64 {
        if self.probability.is_nan() { 0.0 } else { self.probability.clamp(0.0, 1.0) }
    }
}

pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&contents)?)
}

/// Load `fluid-backdrop.yaml` from the working directory, falling back to
/// defaults when it is missing or unreadable.
pub fn load() -> Config {
    let path = Path::new(CONFIG_FILE);
    if !path.exists() {
        return Config::default();
    }
    match load_from(path) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::warn!("{CONFIG_FILE}: {e}; using defaults");
            Config::default()
        }
    }
}
