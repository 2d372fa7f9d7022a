//! Simulation parameters for runtime tuning
//!
//! Loaded from TOML, then optionally overridden by `PARTICLES_*` environment
//! variables. Missing fields fall back to the reference values.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use particle_physics::{BOUNCE_FACTOR, DEFAULT_DT, DRAG_COEFFICIENT, GRAVITY, INITIAL_PARTICLE_COUNT};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    /// Gravitational acceleration, read when a particle is created
    pub gravity: f32,
    /// Velocity kept along an axis after a wall reflection
    pub bounce_factor: f32,
    /// Drag base given to newly created particles
    pub drag: f32,
    /// Time advanced per tick
    pub dt: f32,
    /// Particles spawned when the simulation is built
    pub initial_count: usize,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            bounce_factor: BOUNCE_FACTOR,
            drag: DRAG_COEFFICIENT,
            dt: DEFAULT_DT,
            initial_count: INITIAL_PARTICLE_COUNT,
        }
    }
}

impl SimulationParams {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Override fields from `PARTICLES_*` environment variables
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Override fields from any key lookup. Values that fail to parse are logged and skipped.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        override_field(&lookup, "PARTICLES_GRAVITY", &mut self.gravity);
        override_field(&lookup, "PARTICLES_BOUNCE_FACTOR", &mut self.bounce_factor);
        override_field(&lookup, "PARTICLES_DRAG", &mut self.drag);
        override_field(&lookup, "PARTICLES_DT", &mut self.dt);
        override_field(&lookup, "PARTICLES_INITIAL_COUNT", &mut self.initial_count);
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.gravity.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "gravity must be finite, got {}",
                self.gravity
            )));
        }
        if !(0.0..=1.0).contains(&self.bounce_factor) {
            return Err(ConfigError::Invalid(format!(
                "bounce_factor must be in [0, 1], got {}",
                self.bounce_factor
            )));
        }
        if !(self.drag > 0.0 && self.drag < 1.0) {
            return Err(ConfigError::Invalid(format!(
                "drag must be in (0, 1), got {}",
                self.drag
            )));
        }
        if !self.dt.is_finite() || self.dt < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "dt must be finite and non-negative, got {}",
                self.dt
            )));
        }
        Ok(())
    }
}

fn override_field<F, T>(lookup: &F, key: &str, field: &mut T)
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let Some(raw) = lookup(key) else {
        return;
    };
    match raw.trim().parse::<T>() {
        Ok(value) => {
            log::debug!("{} overridden from environment", key);
            *field = value;
        }
        Err(_) => log::warn!("ignoring {}={:?}: not a valid value", key, raw),
    }
}
