/*
 * Error Module
 *
 * This module defines the errors raised when the driver validates its
 * parameters. The simulation core itself never fails.
 */

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("world {axis} must be positive and finite, got {value}")]
    WorldSize { axis: &'static str, value: f32 },

    #[error("boid count must be at most {max}, got {value}")]
    BoidCount { value: usize, max: usize },

    #[error("time step must be positive and finite, got {0}")]
    TimeStep(f32),

    #[error("{name} weight must be non-negative and finite, got {value}")]
    Weight { name: &'static str, value: f32 },

    #[error("{name} must be positive and finite, got {value}")]
    Limit { name: &'static str, value: f32 },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
