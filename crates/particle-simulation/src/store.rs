//! Ordered storage for live particles

use particle_physics::Particle;
use rand::Rng;

/// Owns every live particle. Insertion order is render order and nothing else.
#[derive(Debug, Clone)]
pub struct ParticleStore {
    particles: Vec<Particle>,
    gravity: f32,
    drag: f32,
}

impl ParticleStore {
    /// Empty store whose new particles use `gravity` and `drag`
    pub fn new(gravity: f32, drag: f32) -> Self {
        Self {
            particles: Vec::new(),
            gravity,
            drag,
        }
    }

    /// Build a fresh random particle without inserting it
    pub fn create<R: Rng + ?Sized>(&self, rng: &mut R) -> Particle {
        Particle::random(rng, self.gravity, self.drag)
    }

    /// Build a fresh random particle and append it
    pub fn spawn<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let particle = self.create(rng);
        self.particles.push(particle);
    }

    pub fn push(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Particle> {
        self.particles.iter_mut()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }
}
