/*
 * Flock Statistics Module
 *
 * Summary numbers for a flock at one instant, shown in the debug overlay and
 * logged by the headless runner. Polarization is the usual flocking order
 * parameter: the length of the mean heading vector, 0 for boids pointing every
 * which way and 1 for boids all heading the same direction.
 */

use std::fmt;

use crate::boid::Boid;
use crate::vector::Vector2;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlockStats {
    pub count: usize,
    pub centroid: Vector2,
    pub mean_speed: f32,
    pub max_speed: f32,
    pub max_acceleration: f32,
    pub polarization: f32,
}

impl FlockStats {
    pub fn from_boids(boids: &[Boid]) -> Self {
        if boids.is_empty() {
            return Self::default();
        }

        let mut position_sum = Vector2::ZERO;
        let mut heading_sum = Vector2::ZERO;
        let mut speed_sum = 0.0;
        let mut max_speed: f32 = 0.0;
        let mut max_acceleration: f32 = 0.0;

        for boid in boids {
            let speed = boid.speed();
            position_sum += boid.position;
            heading_sum += boid.velocity.normalize();
            speed_sum += speed;
            max_speed = max_speed.max(speed);
            max_acceleration = max_acceleration.max(boid.acceleration.magnitude());
        }

        let n = boids.len() as f32;
        Self {
            count: boids.len(),
            centroid: position_sum / n,
            mean_speed: speed_sum / n,
            max_speed,
            max_acceleration,
            polarization: heading_sum.magnitude() / n,
        }
    }
}

impl fmt::Display for FlockStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "boids={} centroid=({:.1}, {:.1}) mean_speed={:.3} max_speed={:.3} max_accel={:.3} polarization={:.3}",
            self.count,
            self.centroid.x,
            self.centroid.y,
            self.mean_speed,
            self.max_speed,
            self.max_acceleration,
            self.polarization,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(FlockStats::from_boids(&[]), FlockStats::default());
    }

    #[test]
    fn test_aligned_flock_is_polarized() {
        let boids = [
            Boid::new(Vector2::new(0.0, 0.0), Vector2::new(2.0, 0.0)),
            Boid::new(Vector2::new(10.0, 4.0), Vector2::new(4.0, 0.0)),
        ];
        let stats = FlockStats::from_boids(&boids);

        assert_eq!(stats.count, 2);
        assert_eq!(stats.centroid, Vector2::new(5.0, 2.0));
        assert_eq!(stats.mean_speed, 3.0);
        assert_eq!(stats.max_speed, 4.0);
        assert!((stats.polarization - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_opposed_flock_is_disordered() {
        let boids = [
            Boid::new(Vector2::ZERO, Vector2::new(1.0, 0.0)),
            Boid::new(Vector2::ZERO, Vector2::new(-1.0, 0.0)),
        ];
        assert_eq!(FlockStats::from_boids(&boids).polarization, 0.0);
    }
}
