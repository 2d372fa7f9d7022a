//! CPU particle simulation manager
//!
//! One `step` per animation frame. The time step is fixed and decoupled from
//! wall-clock time, so simulation speed follows the frame rate.

use particle_physics::{step_particle, Particle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Result, SimulationError};
use crate::instance::SphereInstance;
use crate::params::SimulationParams;
use crate::population::PopulationCommand;
use crate::store::ParticleStore;

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickStats {
    /// Particles advanced
    pub particles: usize,
    /// Wall reflections across all particles
    pub wall_hits: u32,
}

/// Particle store, population control and integrator behind one owner
pub struct ParticleSimulation<R = StdRng> {
    params: SimulationParams,
    store: ParticleStore,
    rng: R,
    tick_count: u64,
}

impl ParticleSimulation<StdRng> {
    /// Simulation seeded from the operating system
    pub fn new(params: SimulationParams) -> Self {
        Self::with_rng(params, StdRng::from_os_rng())
    }

    /// Reproducible simulation: the same seed and commands give the same particles
    pub fn with_seed(params: SimulationParams, seed: u64) -> Self {
        Self::with_rng(params, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ParticleSimulation<R> {
    /// Build a simulation drawing randomness from `rng`, spawning `params.initial_count` particles
    pub fn with_rng(params: SimulationParams, rng: R) -> Self {
        let mut sim = Self {
            params,
            store: ParticleStore::new(params.gravity, params.drag),
            rng,
            tick_count: 0,
        };
        sim.add(params.initial_count);

        log::info!(
            "Initialized simulation: {} particles, gravity={}, bounce={}, drag={}, dt={}",
            sim.store.len(),
            params.gravity,
            params.bounce_factor,
            params.drag,
            params.dt
        );
        sim
    }

    /// Advance every particle by the configured `dt`
    pub fn step(&mut self) -> Result<TickStats> {
        self.step_by(self.params.dt)
    }

    /// Advance every particle by `dt`.
    ///
    /// Rejects non-finite or negative `dt` before touching any particle. The tick
    /// runs on a scratch copy and is committed only if every particle stays finite.
    pub fn step_by(&mut self, dt: f32) -> Result<TickStats> {
        if !dt.is_finite() || dt < 0.0 {
            log::warn!("Rejected tick {} with dt={}", self.tick_count, dt);
            return Err(SimulationError::InvalidTimeStep { dt });
        }

        let bounce_factor = self.params.bounce_factor;
        let mut next = self.store.clone();
        let mut wall_hits = 0u32;
        for (index, particle) in next.iter_mut().enumerate() {
            wall_hits += step_particle(particle, dt, bounce_factor);
            if !particle.position.is_finite() || !particle.velocity.is_finite() {
                log::warn!(
                    "Rejected tick {} with dt={}: particle {} left finite range",
                    self.tick_count,
                    dt,
                    index
                );
                return Err(SimulationError::NonFiniteState { index, dt });
            }
        }

        self.store = next;
        self.tick_count += 1;

        Ok(TickStats {
            particles: self.store.len(),
            wall_hits,
        })
    }

    /// Apply one population command from the input handler
    pub fn apply(&mut self, command: PopulationCommand) {
        match command {
            PopulationCommand::AddOne => self.add_one(),
            PopulationCommand::AddFive => self.add_five(),
            PopulationCommand::ClearAll => self.clear_all(),
            PopulationCommand::ResetToOne => self.reset_to_one(),
        }
        log::debug!("{:?} -> {} particles", command, self.store.len());
    }

    /// Spawn one fresh particle
    pub fn add_one(&mut self) {
        self.add(1);
    }

    /// Spawn five fresh particles
    pub fn add_five(&mut self) {
        self.add(5);
    }

    /// Remove every particle
    pub fn clear_all(&mut self) {
        self.store.clear();
    }

    /// Clear, then spawn exactly one fresh particle
    pub fn reset_to_one(&mut self) {
        self.store.clear();
        self.add(1);
    }

    fn add(&mut self, count: usize) {
        for _ in 0..count {
            self.store.spawn(&mut self.rng);
        }
    }

    /// Live particles in store order
    pub fn particles(&self) -> &[Particle] {
        self.store.as_slice()
    }

    /// Number of live particles
    pub fn particle_count(&self) -> usize {
        self.store.len()
    }

    /// Ticks completed since construction
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Parameters the simulation was built with
    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    /// Render data for every particle, in store order
    pub fn instances(&self) -> Vec<SphereInstance> {
        self.store.iter().map(SphereInstance::from).collect()
    }
}
