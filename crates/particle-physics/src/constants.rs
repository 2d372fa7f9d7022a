//! Physical constants for the bouncing particle box
//!
//! Reference values for a frame-stepped simulation. Runtime tuning goes through
//! `SimulationParams` in the simulation crate; these are its defaults.

/// Gravitational acceleration
pub const GRAVITY: f32 = 9.8;

/// Fraction of gravity applied to particles (acceleration is `-GRAVITY_SCALE * g` on y)
pub const GRAVITY_SCALE: f32 = 0.2;

/// Velocity kept along the reflected axis after hitting a wall
pub const BOUNCE_FACTOR: f32 = 0.9;

/// Drag base, raised to the elapsed time each step
pub const DRAG_COEFFICIENT: f32 = 0.9;

/// Smallest particle radius
pub const MIN_RADIUS: f32 = 0.07;

/// Width of the radius distribution, radii fall in [MIN_RADIUS, MIN_RADIUS + RADIUS_SPAN)
pub const RADIUS_SPAN: f32 = 0.5;

/// Half the edge length of the bounding box centered on the origin
pub const BOX_HALF_EXTENT: f32 = 1.0;

/// Time advanced per tick (one tick per animation frame)
pub const DEFAULT_DT: f32 = 0.1;

/// Particles present when a simulation starts
pub const INITIAL_PARTICLE_COUNT: usize = 5;
