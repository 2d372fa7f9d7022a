//! # Particle Simulation
//!
//! Owns the live particle population, applies population commands and
//! advances every particle once per tick.

pub mod error;
pub mod instance;
pub mod params;
pub mod population;
pub mod simulation;
pub mod store;

pub use error::{ConfigError, SimulationError};
pub use instance::*;
pub use params::*;
pub use population::*;
pub use simulation::*;
pub use store::*;
