//! Error types for stepping and configuring the simulation

use thiserror::Error;

/// Errors raised at the tick entry point.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Time step was NaN, infinite or negative. No particle was touched.
    #[error("time step must be finite and non-negative, got {dt}")]
    InvalidTimeStep { dt: f32 },
    /// Stepping by `dt` drove a particle to an infinite or NaN value. The tick was discarded.
    #[error("time step {dt} drove particle {index} out of finite range")]
    NonFiniteState { index: usize, dt: f32 },
}

/// Errors raised while loading or validating `SimulationParams`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(String),
    #[error("invalid config: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, SimulationError>;
