//! Per-particle data handed to the renderer
//!
//! The renderer places and shades one shared sphere mesh per instance. It reads
//! position, radius and color and never writes back.

use bytemuck::{Pod, Zeroable};
use particle_physics::Particle;

/// Instance record laid out for a vertex/storage buffer (32 bytes)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct SphereInstance {
    pub position: [f32; 3],
    pub radius: f32,
    pub color: [f32; 3],
    pub _padding: f32,
}

impl From<&Particle> for SphereInstance {
    fn from(particle: &Particle) -> Self {
        Self {
            position: particle.position.to_array(),
            radius: particle.radius,
            color: particle.color.to_array(),
            _padding: 0.0,
        }
    }
}
