//! Particle record and random construction

use glam::Vec3;
use rand::Rng;

use crate::constants::{GRAVITY_SCALE, MIN_RADIUS, RADIUS_SPAN};

/// A point-mass sphere bouncing around the box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Position in 3D space
    pub position: Vec3,
    /// Velocity vector
    pub velocity: Vec3,
    /// Constant acceleration, derived from gravity at creation
    pub acceleration: Vec3,
    /// Drag base in (0, 1)
    pub drag: f32,
    /// Sphere radius for rendering
    pub radius: f32,
    /// RGB color, each channel in [0, 1]
    pub color: Vec3,
}

impl Particle {
    /// Create a particle with explicit state.
    ///
    /// Acceleration is `(0, -GRAVITY_SCALE * gravity, 0)` and is never updated afterwards.
    pub fn new(
        position: Vec3,
        velocity: Vec3,
        gravity: f32,
        drag: f32,
        radius: f32,
        color: Vec3,
    ) -> Self {
        Self {
            position,
            velocity,
            acceleration: Vec3::new(0.0, -GRAVITY_SCALE * gravity, 0.0),
            drag,
            radius,
            color,
        }
    }

    /// Create a particle with randomized position, velocity, radius and color.
    ///
    /// Position and velocity are unit vectors, so a fresh particle sits on the
    /// unit sphere and moves at unit speed.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, gravity: f32, drag: f32) -> Self {
        let position = random_unit_vector(rng);
        let velocity = random_unit_vector(rng);
        let radius = rng.random::<f32>() * RADIUS_SPAN + MIN_RADIUS;
        let color = Vec3::new(rng.random(), rng.random(), rng.random());

        Self::new(position, velocity, gravity, drag, radius, color)
    }

    /// Velocity magnitude
    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

/// Sample a direction uniformly on the unit sphere
pub fn random_unit_vector<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let theta = rng.random::<f32>() * std::f32::consts::TAU;
    let z = rng.random::<f32>() * 2.0 - 1.0;
    let ring = (1.0 - z * z).sqrt();

    Vec3::new(theta.cos() * ring, theta.sin() * ring, z)
}
