/*
 * Simulation Parameters Module
 *
 * This module defines the parameter structs for the simulation:
 * - FlockParams holds the rule weights and caps the Flock applies every tick
 * - SimulationParams holds what the driver needs: population size, world
 *   dimensions, the fixed time step and display flags
 *
 * Validation lives here rather than in the Flock. The Flock trusts whatever
 * it is given; the driver rejects bad input before building one.
 */

use crate::error::{ConfigError, ConfigResult};

pub const DEFAULT_NUM_BOIDS: usize = 100;
pub const DEFAULT_WIDTH: f32 = 800.0;
pub const DEFAULT_HEIGHT: f32 = 600.0;
pub const DEFAULT_DT: f32 = 0.1;
pub const MAX_NUM_BOIDS: usize = 10_000;

// Rule weights and caps applied by Flock::update
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlockParams {
    pub cohesion_weight: f32,
    pub separation_weight: f32,
    pub alignment_weight: f32,
    // Neighbours closer than this repel; independent of separation_weight
    pub separation_radius: f32,
    pub max_speed: f32,
    pub max_force: f32,
}

impl Default for FlockParams {
    fn default() -> Self {
        Self {
            cohesion_weight: 0.01,
            separation_weight: 0.5,
            alignment_weight: 0.2,
            separation_radius: 0.5,
            max_speed: 5.0,
            max_force: 0.5,
        }
    }
}

impl FlockParams {
    pub fn separation_radius_sq(&self) -> f32 {
        self.separation_radius * self.separation_radius
    }

    pub fn validate(&self) -> ConfigResult<()> {
        check_weight("cohesion", self.cohesion_weight)?;
        check_weight("separation", self.separation_weight)?;
        check_weight("alignment", self.alignment_weight)?;
        check_limit("separation radius", self.separation_radius)?;
        check_limit("max speed", self.max_speed)?;
        check_limit("max force", self.max_force)?;
        Ok(())
    }

    // Get parameter ranges for UI sliders
    pub fn get_cohesion_weight_range() -> std::ops::RangeInclusive<f32> {
        0.0..=0.1
    }

    pub fn get_weight_range() -> std::ops::RangeInclusive<f32> {
        0.0..=3.0
    }

    pub fn get_radius_range() -> std::ops::RangeInclusive<f32> {
        0.5..=100.0
    }

    pub fn get_max_speed_range() -> std::ops::RangeInclusive<f32> {
        0.5..=50.0
    }

    pub fn get_max_force_range() -> std::ops::RangeInclusive<f32> {
        0.01..=5.0
    }
}

// Parameters owned by the driver
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParams {
    pub num_boids: usize,
    pub width: f32,
    pub height: f32,
    pub dt: f32,
    pub seed: Option<u64>,
    pub flock: FlockParams,
    pub show_debug: bool,
    pub pause_simulation: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            num_boids: DEFAULT_NUM_BOIDS,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            dt: DEFAULT_DT,
            seed: None,
            flock: FlockParams::default(),
            show_debug: false,
            pause_simulation: false,
        }
    }
}

impl SimulationParams {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.num_boids > MAX_NUM_BOIDS {
            return Err(ConfigError::BoidCount { value: self.num_boids, max: MAX_NUM_BOIDS });
        }
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(ConfigError::WorldSize { axis: "width", value: self.width });
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(ConfigError::WorldSize { axis: "height", value: self.height });
        }
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(ConfigError::TimeStep(self.dt));
        }
        self.flock.validate()
    }

    // Covers every count validate() accepts, so the slider never clamps a CLI value
    pub fn get_num_boids_range() -> std::ops::RangeInclusive<usize> {
        0..=MAX_NUM_BOIDS
    }
}

fn check_weight(name: &'static str, value: f32) -> ConfigResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Weight { name, value })
    }
}

fn check_limit(name: &'static str, value: f32) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Limit { name, value })
    }
}
