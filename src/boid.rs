/*
 * Boid Module
 *
 * This module defines the Boid struct: the per-agent state of the simulation.
 * A boid holds no rules of its own. The Flock reads every boid to compute
 * steering and is the only thing that writes to them:
 * 1. acceleration is overwritten once per tick
 * 2. velocity and position are integrated from it
 */

use crate::vector::Vector2;

// Below this squared speed the boid is drawn as a dot instead of a triangle
pub const STATIONARY_SPEED_SQ: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Boid {
    pub position: Vector2,
    pub velocity: Vector2,
    pub acceleration: Vector2,
}

impl Boid {
    pub fn new(position: Vector2, velocity: Vector2) -> Self {
        Self {
            position,
            velocity,
            acceleration: Vector2::ZERO,
        }
    }

    // Angle of travel in radians, measured from the positive x axis
    pub fn heading(&self) -> f32 {
        self.velocity.y.atan2(self.velocity.x)
    }

    pub fn speed(&self) -> f32 {
        self.velocity.magnitude()
    }

    pub fn is_moving(&self) -> bool {
        self.velocity.magnitude_sq() >= STATIONARY_SPEED_SQ
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_boid_creation() {
        let boid = Boid::new(Vector2::new(10.0, 20.0), Vector2::new(1.0, -1.0));

        assert_eq!(boid.position, Vector2::new(10.0, 20.0));
        assert_eq!(boid.velocity, Vector2::new(1.0, -1.0));
        assert_eq!(boid.acceleration, Vector2::ZERO);
    }

    #[test]
    fn test_heading() {
        let boid = Boid::new(Vector2::ZERO, Vector2::new(0.0, 2.0));
        assert!((boid.heading() - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_is_moving() {
        assert!(!Boid::new(Vector2::ZERO, Vector2::new(0.05, 0.05)).is_moving());
        assert!(Boid::new(Vector2::ZERO, Vector2::new(0.1, 0.1)).is_moving());
        assert_eq!(Boid::new(Vector2::ZERO, Vector2::new(3.0, 4.0)).speed(), 5.0);
    }
}
