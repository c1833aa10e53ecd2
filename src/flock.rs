/*
 * Flock Module
 *
 * This module defines the Flock: the owner of every boid and of the rules
 * that move them. Each boid is steered by three rules evaluated against all
 * other boids in the flock:
 * 1. Cohesion: steer towards the centre of mass of the others
 * 2. Separation: steer away from close neighbours, harder the closer they are
 * 3. Alignment: steer towards the average velocity of the others
 *
 * Every rule is a full pairwise scan, so a tick costs O(n^2).
 *
 * Updates are simultaneous: all steering forces are computed from the state
 * at the start of the tick before any boid is moved, so the result does not
 * depend on the order boids are stored in.
 */

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::boid::Boid;
use crate::params::FlockParams;
use crate::stats::FlockStats;
use crate::vector::Vector2;

// Initial velocity is drawn from [-max_speed, max_speed] per axis, then scaled
const INITIAL_SPEED_FACTOR: f32 = 0.1;

#[derive(Debug, Clone)]
pub struct Flock {
    boids: Vec<Boid>,
    params: FlockParams,
    rng: StdRng,
    // Per-tick steering forces, reused between updates
    forces: Vec<Vector2>,
}

impl Flock {
    /// Creates `num_boids` boids scattered uniformly over the world, using
    /// default parameters and a generator seeded from system entropy.
    pub fn new(num_boids: usize, width: f32, height: f32) -> Self {
        Self::with_params(num_boids, width, height, FlockParams::default(), None)
    }

    /// Same as [`Flock::new`] but with a fixed seed, for reproducible runs.
    pub fn with_seed(num_boids: usize, width: f32, height: f32, seed: u64) -> Self {
        Self::with_params(num_boids, width, height, FlockParams::default(), Some(seed))
    }

    pub fn with_params(
        num_boids: usize,
        width: f32,
        height: f32,
        params: FlockParams,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut flock = Self {
            boids: Vec::new(),
            params,
            rng,
            forces: Vec::new(),
        };
        flock.respawn(num_boids, width, height);
        flock
    }

    /// Builds a flock from explicit boid state. Nothing is randomised.
    pub fn from_boids(boids: Vec<Boid>, params: FlockParams) -> Self {
        Self {
            forces: Vec::with_capacity(boids.len()),
            boids,
            params,
            rng: StdRng::from_entropy(),
        }
    }

    /// Replaces the population with `num_boids` freshly scattered boids,
    /// drawing from the flock's own generator. The generator is not reseeded.
    pub fn respawn(&mut self, num_boids: usize, width: f32, height: f32) {
        let max_speed = self.params.max_speed;
        let rng = &mut self.rng;

        self.boids.clear();
        self.boids.extend((0..num_boids).map(|_| {
            let position = Vector2::new(rng.gen_range(0.0..=width), rng.gen_range(0.0..=height));
            let velocity = Vector2::new(
                rng.gen_range(-max_speed..=max_speed),
                rng.gen_range(-max_speed..=max_speed),
            ) * INITIAL_SPEED_FACTOR;
            Boid::new(position, velocity)
        }));
        self.forces = Vec::with_capacity(num_boids);

        log::debug!("spawned {} boids in {}x{}", num_boids, width, height);
    }

    /// Read-only view of the boids, valid until the next `update`.
    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    pub fn params(&self) -> &FlockParams {
        &self.params
    }

    pub fn set_params(&mut self, params: FlockParams) {
        self.params = params;
    }

    pub fn stats(&self) -> FlockStats {
        FlockStats::from_boids(&self.boids)
    }

    // The rule accessors panic if `index` is out of bounds, like slice indexing.

    pub fn cohesion(&self, index: usize) -> Vector2 {
        cohesion(&self.boids, index)
    }

    pub fn separation(&self, index: usize) -> Vector2 {
        separation(&self.boids, index, self.params.separation_radius_sq())
    }

    pub fn alignment(&self, index: usize) -> Vector2 {
        alignment(&self.boids, index)
    }

    /// Weighted sum of the three rules for one boid, capped at `max_force`.
    pub fn steering_force(&self, index: usize) -> Vector2 {
        steering_force(&self.boids, index, &self.params)
    }

    /// Advances the simulation by one step of `dt`, wrapping positions into
    /// `[0, width) x [0, height)`.
    pub fn update(&mut self, dt: f32, width: f32, height: f32) {
        let params = self.params;
        let Self { boids, forces, .. } = self;

        log::trace!("update: {} boids, dt {}", boids.len(), dt);

        // Compute all forces against the start-of-tick state
        let snapshot: &[Boid] = boids;
        forces.clear();
        forces.extend((0..snapshot.len()).map(|i| steering_force(snapshot, i, &params)));

        for (boid, &force) in boids.iter_mut().zip(forces.iter()) {
            boid.acceleration = force;
            boid.velocity += force * dt;
            boid.velocity = boid.velocity.limit(params.max_speed);
            boid.position += boid.velocity * dt;
            wrap_position(boid, width, height);
        }
    }
}

fn steering_force(boids: &[Boid], index: usize, params: &FlockParams) -> Vector2 {
    let total = cohesion(boids, index) * params.cohesion_weight
        + separation(boids, index, params.separation_radius_sq()) * params.separation_weight
        + alignment(boids, index) * params.alignment_weight;

    total.limit(params.max_force)
}

// Offset from the boid to the mean position of every other boid
fn cohesion(boids: &[Boid], index: usize) -> Vector2 {
    let boid = &boids[index];
    let others = boids.len() - 1;
    if others == 0 {
        return Vector2::ZERO;
    }

    let mut center_of_mass = Vector2::ZERO;
    for (i, other) in boids.iter().enumerate() {
        if i != index {
            center_of_mass += other.position;
        }
    }
    center_of_mass /= others as f32;

    center_of_mass - boid.position
}

// Sum, not mean, of (self - other) / dist^2 over neighbours inside the radius.
// Coincident boids have no direction to push along and are skipped.
fn separation(boids: &[Boid], index: usize, radius_sq: f32) -> Vector2 {
    let boid = &boids[index];
    let mut steering = Vector2::ZERO;

    for (i, other) in boids.iter().enumerate() {
        if i == index {
            continue;
        }

        let dist_sq = boid.position.distance_sq(other.position);
        if dist_sq > 0.0 && dist_sq < radius_sq {
            steering += (boid.position - other.position) / dist_sq;
        }
    }

    steering
}

// Difference between the mean velocity of every other boid and this one's
fn alignment(boids: &[Boid], index: usize) -> Vector2 {
    let boid = &boids[index];
    let others = boids.len() - 1;
    if others == 0 {
        return Vector2::ZERO;
    }

    let mut average_velocity = Vector2::ZERO;
    for (i, other) in boids.iter().enumerate() {
        if i != index {
            average_velocity += other.velocity;
        }
    }
    average_velocity /= others as f32;

    average_velocity - boid.velocity
}

fn wrap_position(boid: &mut Boid, width: f32, height: f32) {
    boid.position.x = wrap_axis(boid.position.x, width);
    boid.position.y = wrap_axis(boid.position.y, height);
}

// Single pass: a value more than one extent out of range stays out of range.
fn wrap_axis(value: f32, extent: f32) -> f32 {
    if value < 0.0 {
        let wrapped = value + extent;
        // A tiny negative can round up to exactly `extent`
        if wrapped < extent {
            wrapped
        } else {
            0.0
        }
    } else if value >= extent {
        value - extent
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn still(x: f32, y: f32) -> Boid {
        Boid::new(Vector2::new(x, y), Vector2::ZERO)
    }

    #[test]
    fn test_flock_creation() {
        let flock = Flock::with_seed(50, 800.0, 600.0, 7);
        assert_eq!(flock.len(), 50);

        let max_initial = FlockParams::default().max_speed * INITIAL_SPEED_FACTOR;
        for boid in flock.boids() {
            assert!((0.0..=800.0).contains(&boid.position.x));
            assert!((0.0..=600.0).contains(&boid.position.y));
            assert!(boid.velocity.x.abs() <= max_initial + 1e-6);
            assert!(boid.velocity.y.abs() <= max_initial + 1e-6);
            assert_eq!(boid.acceleration, Vector2::ZERO);
        }
    }

    #[test]
    fn test_same_seed_same_population() {
        let a = Flock::with_seed(20, 800.0, 600.0, 42);
        let b = Flock::with_seed(20, 800.0, 600.0, 42);
        assert_eq!(a.boids(), b.boids());
    }

    #[test]
    fn test_empty_flock_updates() {
        let mut flock = Flock::new(0, 800.0, 600.0);
        assert!(flock.is_empty());
        flock.update(0.1, 800.0, 600.0);
        assert!(flock.is_empty());
    }

    #[test]
    fn test_respawn_keeps_generator() {
        let mut flock = Flock::with_seed(10, 800.0, 600.0, 3);
        let before = flock.boids().to_vec();
        flock.respawn(10, 800.0, 600.0);
        assert_eq!(flock.len(), 10);
        assert_ne!(flock.boids(), before.as_slice());
    }

    #[test]
    fn test_cohesion_points_at_centroid() {
        let flock = Flock::from_boids(
            vec![still(0.0, 0.0), still(10.0, 0.0), still(0.0, 10.0)],
            FlockParams::default(),
        );
        assert_eq!(flock.cohesion(0), Vector2::new(5.0, 5.0));
        assert_eq!(flock.cohesion(1), Vector2::new(-10.0, 5.0));
    }

    #[test]
    fn test_separation_sums_inverse_square() {
        let params = FlockParams {
            separation_radius: 20.0,
            ..FlockParams::default()
        };
        let flock = Flock::from_boids(
            vec![still(100.0, 100.0), still(110.0, 100.0), still(100.0, 95.0)],
            params,
        );
        // (-10, 0) / 100 + (0, 5) / 25
        let s = flock.separation(0);
        assert!((s.x - -0.1).abs() < 1e-6);
        assert!((s.y - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_separation_ignores_far_and_coincident() {
        let flock = Flock::from_boids(
            vec![still(100.0, 100.0), still(100.0, 100.0), still(150.0, 100.0)],
            FlockParams::default(),
        );
        assert_eq!(flock.separation(0), Vector2::ZERO);
    }

    #[test]
    fn test_default_separation_radius_is_half_a_unit() {
        let flock = Flock::from_boids(
            vec![still(100.0, 100.0), still(110.0, 100.0), still(100.3, 100.0)],
            FlockParams::default(),
        );
        // Only the neighbour 0.3 away is inside the 0.5 radius
        let s = flock.separation(0);
        assert!((s.x - -0.3 / 0.09).abs() < 1e-2, "{:?}", s);
        assert_eq!(s.y, 0.0);

        let far = Flock::from_boids(
            vec![still(100.0, 100.0), still(110.0, 100.0)],
            FlockParams::default(),
        );
        assert_eq!(far.separation(0), Vector2::ZERO);
    }

    #[test]
    fn test_separation_uses_radius_not_weight() {
        let mut params = FlockParams::default();
        params.separation_weight = 0.0;
        params.separation_radius = 5.0;
        let flock = Flock::from_boids(vec![still(0.0, 0.0), still(4.0, 0.0)], params);
        assert!(flock.separation(0).x < 0.0);
    }

    #[test]
    fn test_alignment_matches_mean_velocity() {
        let flock = Flock::from_boids(
            vec![
                Boid::new(Vector2::ZERO, Vector2::new(1.0, 0.0)),
                Boid::new(Vector2::ZERO, Vector2::new(3.0, 2.0)),
                Boid::new(Vector2::ZERO, Vector2::new(1.0, 2.0)),
            ],
            FlockParams::default(),
        );
        assert_eq!(flock.alignment(0), Vector2::new(1.0, 2.0));
    }

    #[test]
    fn test_single_boid_feels_nothing() {
        let flock = Flock::from_boids(
            vec![Boid::new(Vector2::new(5.0, 5.0), Vector2::new(1.0, 1.0))],
            FlockParams::default(),
        );
        assert_eq!(flock.cohesion(0), Vector2::ZERO);
        assert_eq!(flock.separation(0), Vector2::ZERO);
        assert_eq!(flock.alignment(0), Vector2::ZERO);
        assert_eq!(flock.steering_force(0), Vector2::ZERO);
    }

    #[test]
    fn test_steering_force_is_capped() {
        let flock = Flock::from_boids(
            vec![still(0.0, 0.0), still(700.0, 500.0)],
            FlockParams::default(),
        );
        let force = flock.steering_force(0);
        assert!((force.magnitude() - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_update_is_simultaneous() {
        let boids = vec![
            Boid::new(Vector2::new(100.0, 100.0), Vector2::new(1.0, 0.0)),
            Boid::new(Vector2::new(105.0, 100.0), Vector2::new(-1.0, 0.5)),
            Boid::new(Vector2::new(100.0, 108.0), Vector2::new(0.0, -1.0)),
        ];
        let reversed: Vec<Boid> = boids.iter().rev().copied().collect();

        let mut forward = Flock::from_boids(boids, FlockParams::default());
        let mut backward = Flock::from_boids(reversed, FlockParams::default());
        forward.update(0.1, 800.0, 600.0);
        backward.update(0.1, 800.0, 600.0);

        let flipped: Vec<Boid> = backward.boids().iter().rev().copied().collect();
        assert_eq!(forward.boids(), flipped.as_slice());
    }

    #[test]
    fn test_wrap_axis() {
        assert_eq!(wrap_axis(-1.0, 100.0), 99.0);
        assert_eq!(wrap_axis(100.0, 100.0), 0.0);
        assert_eq!(wrap_axis(101.5, 100.0), 1.5);
        assert_eq!(wrap_axis(50.0, 100.0), 50.0);
        assert_eq!(wrap_axis(-1e-9, 800.0), 0.0);
    }
}
