//! # Particle Physics
//!
//! Point-mass spheres falling under gravity inside an axis-aligned `[-1, 1]^3`
//! box, with lossy wall reflection and power-law drag. No particle-particle
//! interaction.

pub mod constants;
pub mod integrator;
pub mod particle;

pub use constants::*;
pub use integrator::*;
pub use particle::*;
