//! Bouncing Particle Box
//!
//! Headless host for the particle simulation. Each line read from stdin is one
//! animation frame: its characters are treated as key presses, then the
//! simulation ticks once.
//!
//! Keys: `o` add one, `p` add five, `r` remove all, `n` reset to one.

use std::io::{self, BufRead};
use std::process::ExitCode;

use particle_physics::Particle;
use particle_simulation::{ConfigError, ParticleSimulation, PopulationCommand, SimulationParams};

/// Frames between info-level summaries
const REPORT_INTERVAL: u64 = 60;

fn load_params() -> Result<SimulationParams, ConfigError> {
    let mut params = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading config from {}", path);
            SimulationParams::from_toml_file(&path)?
        }
        None => SimulationParams::default(),
    };
    params.apply_env_overrides();
    params.validate()?;
    Ok(params)
}

fn log_particles(particles: &[Particle]) {
    for (i, p) in particles.iter().enumerate().take(5) {
        log::debug!(
            "    [{}] pos=({:.3}, {:.3}, {:.3}) speed={:.3} r={:.2}",
            i,
            p.position.x,
            p.position.y,
            p.position.z,
            p.speed(),
            p.radius
        );
    }
}

fn main() -> ExitCode {
    // Initialize logger (RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting particle box simulation...");

    let params = match load_params() {
        Ok(params) => params,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut sim = ParticleSimulation::new(params);
    let mut wall_hits = 0u64;

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("Failed to read input: {}", e);
                return ExitCode::FAILURE;
            }
        };

        for command in line.chars().filter_map(PopulationCommand::from_key) {
            sim.apply(command);
        }

        match sim.step() {
            Ok(stats) => wall_hits += u64::from(stats.wall_hits),
            Err(e) => {
                log::error!("{}", e);
                return ExitCode::FAILURE;
            }
        }

        if sim.tick_count() % REPORT_INTERVAL == 0 {
            log::info!(
                "Frame {}: {} particles, {} wall hits so far",
                sim.tick_count(),
                sim.particle_count(),
                wall_hits
            );
            log_particles(sim.particles());
        }
    }

    println!(
        "{} frames, {} particles, {} wall hits",
        sim.tick_count(),
        sim.particle_count(),
        wall_hits
    );
    ExitCode::SUCCESS
}
