//! Semi-implicit Euler integration and wall collisions
//!
//! A step runs in a fixed order: move with the previous velocity, resolve the
//! walls, then decay and accelerate the (possibly reflected) velocity.
//! Reordering changes the bounce dynamics.

use crate::constants::BOX_HALF_EXTENT;
use crate::particle::Particle;

/// Advance position by the current velocity: p += v * dt
#[inline]
pub fn integrate_position(particle: &mut Particle, dt: f32) {
    particle.position += particle.velocity * dt;
}

/// Clamp the particle back into the box and reflect velocity on every axis that left it.
///
/// Returns the number of reflections. The lower and upper checks run one after
/// the other on the same axis; since the lower check clamps to `-BOX_HALF_EXTENT`,
/// at most one of them fires per axis.
pub fn resolve_wall_collisions(particle: &mut Particle, bounce_factor: f32) -> u32 {
    let mut hits = 0;

    for axis in 0..3 {
        if particle.position[axis] < -BOX_HALF_EXTENT {
            particle.position[axis] = -BOX_HALF_EXTENT;
            particle.velocity[axis] = -particle.velocity[axis] * bounce_factor;
            hits += 1;
        }
        if particle.position[axis] > BOX_HALF_EXTENT {
            particle.position[axis] = BOX_HALF_EXTENT;
            particle.velocity[axis] = -particle.velocity[axis] * bounce_factor;
            hits += 1;
        }
    }

    hits
}

/// Decay and accelerate velocity: v = v * drag^dt + a * dt
#[inline]
pub fn integrate_velocity(particle: &mut Particle, dt: f32) {
    particle.velocity = particle.velocity * particle.drag.powf(dt) + particle.acceleration * dt;
}

/// Run one full tick for a single particle, returning the number of wall hits
pub fn step_particle(particle: &mut Particle, dt: f32, bounce_factor: f32) -> u32 {
    integrate_position(particle, dt);
    let hits = resolve_wall_collisions(particle, bounce_factor);
    integrate_velocity(particle, dt);
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{BOUNCE_FACTOR, DEFAULT_DT, DRAG_COEFFICIENT, GRAVITY};
    use glam::Vec3;
    use proptest::prelude::*;

    fn in_box(p: &Particle) -> bool {
        p.position
            .to_array()
            .iter()
            .all(|c| (-BOX_HALF_EXTENT..=BOX_HALF_EXTENT).contains(c))
    }

    fn particle(position: Vec3, velocity: Vec3, gravity: f32) -> Particle {
        Particle::new(position, velocity, gravity, DRAG_COEFFICIENT, 0.1, Vec3::ONE)
    }

    #[test]
    fn test_step_bounces_off_positive_wall() {
        let mut p = particle(Vec3::new(0.95, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0), GRAVITY);

        let hits = step_particle(&mut p, DEFAULT_DT, BOUNCE_FACTOR);

        assert_eq!(hits, 1);
        assert_eq!(p.position.x, 1.0);
        assert_eq!(p.position.y, 0.0);
        let expected_x = -0.9 * 0.9_f32.powf(0.1);
        assert!((p.velocity.x - expected_x).abs() < 1e-5);
        assert!((p.velocity.y + 0.196).abs() < 1e-5);
        assert_eq!(p.velocity.z, 0.0);
    }

    #[test]
    fn test_position_moves_before_velocity_changes() {
        let mut p = particle(Vec3::ZERO, Vec3::new(0.0, 0.5, 0.0), GRAVITY);

        step_particle(&mut p, 0.1, BOUNCE_FACTOR);

        // Position uses the velocity from before this tick's gravity kick
        assert!((p.position.y - 0.05).abs() < 1e-6);
        let expected_vy = 0.5 * 0.9_f32.powf(0.1) - 0.196;
        assert!((p.velocity.y - expected_vy).abs() < 1e-6);
    }

    #[test]
    fn test_bounce_scales_axis_speed() {
        for (start, velocity) in [
            (Vec3::new(-0.99, 0.0, 0.0), Vec3::new(-3.0, 0.0, 0.0)),
            (Vec3::new(0.0, 0.98, 0.0), Vec3::new(0.0, 2.5, 0.0)),
            (Vec3::new(0.0, 0.0, -0.9), Vec3::new(0.0, 0.0, -7.0)),
        ] {
            let mut p = particle(start, velocity, GRAVITY);
            integrate_position(&mut p, DEFAULT_DT);
            let before = p.velocity;

            let hits = resolve_wall_collisions(&mut p, BOUNCE_FACTOR);

            assert_eq!(hits, 1);
            for axis in 0..3 {
                if before[axis] != 0.0 {
                    assert!((p.velocity[axis].abs() - BOUNCE_FACTOR * before[axis].abs()).abs() < 1e-6);
                    assert!(p.velocity[axis].signum() == -before[axis].signum());
                }
            }
        }
    }

    #[test]
    fn test_no_collision_inside_box() {
        let mut p = particle(Vec3::new(0.5, -0.5, 0.25), Vec3::new(0.1, 0.1, 0.1), GRAVITY);
        integrate_position(&mut p, DEFAULT_DT);
        let before = p;

        assert_eq!(resolve_wall_collisions(&mut p, BOUNCE_FACTOR), 0);
        assert_eq!(p, before);
    }

    #[test]
    fn test_corner_hit_reflects_every_axis() {
        let mut p = particle(Vec3::splat(0.99), Vec3::splat(1.0), 0.0);
        integrate_position(&mut p, DEFAULT_DT);

        assert_eq!(resolve_wall_collisions(&mut p, BOUNCE_FACTOR), 3);
        assert_eq!(p.position, Vec3::ONE);
        assert!(p.velocity.abs_diff_eq(Vec3::splat(-BOUNCE_FACTOR), 1e-6));
    }

    #[test]
    fn test_drag_decay_without_acceleration() {
        let v0 = Vec3::new(0.01, -0.02, 0.005);
        let mut p = particle(Vec3::ZERO, v0, 0.0);
        let n = 10;
        let dt = 0.1;

        for _ in 0..n {
            assert_eq!(step_particle(&mut p, dt, BOUNCE_FACTOR), 0);
        }

        let expected = v0.length() * DRAG_COEFFICIENT.powf(n as f32 * dt);
        assert!((p.speed() - expected).abs() < 1e-6);
    }

    #[test]
    fn test_nan_position_is_not_in_box() {
        let p = particle(Vec3::new(1.0, f32::NAN, 1.0), Vec3::ZERO, GRAVITY);
        assert!(!in_box(&p));
    }

    #[test]
    fn test_huge_finite_dt_still_clamps_position() {
        let mut p = particle(Vec3::new(0.5, -0.5, 0.0), Vec3::new(1.0, -1.0, 0.25), 0.0);

        let hits = step_particle(&mut p, 1.0e30, BOUNCE_FACTOR);

        assert_eq!(hits, 3);
        assert!(in_box(&p));
        assert_eq!(p.position, Vec3::new(1.0, -1.0, 1.0));
    }

    #[test]
    fn test_zero_dt_leaves_particle_unchanged() {
        let mut p = particle(Vec3::new(0.2, 0.3, 0.4), Vec3::new(1.0, 2.0, 3.0), GRAVITY);
        let before = p;

        step_particle(&mut p, 0.0, BOUNCE_FACTOR);

        assert_eq!(p, before);
    }

    proptest! {
        #[test]
        fn test_position_stays_in_box(
            px in -1.0f32..=1.0, py in -1.0f32..=1.0, pz in -1.0f32..=1.0,
            vx in -50.0f32..50.0, vy in -50.0f32..50.0, vz in -50.0f32..50.0,
            dt in 0.0f32..5.0,
            ticks in 1usize..200,
        ) {
            let mut p = particle(Vec3::new(px, py, pz), Vec3::new(vx, vy, vz), GRAVITY);
            for _ in 0..ticks {
                step_particle(&mut p, dt, BOUNCE_FACTOR);
                prop_assert!(in_box(&p), "escaped the box: {:?}", p.position);
            }
        }
    }
}
