/*
 * Flocking Simulation - Module Definitions
 *
 * This file defines the module structure for the flocking simulation.
 * The simulation core (vector, boid, flock) has no dependency on the window;
 * the driver modules (app, renderer, ui, input) wrap it in a nannou window.
 */

// Re-export key components for easier access
pub use boid::Boid;
pub use debug::DebugInfo;
pub use error::{ConfigError, ConfigResult};
pub use flock::Flock;
pub use params::{FlockParams, SimulationParams};
pub use stats::FlockStats;
pub use vector::Vector2;

// Define modules
pub mod app;
pub mod boid;
pub mod debug;
pub mod error;
pub mod flock;
pub mod headless;
pub mod input;
pub mod params;
pub mod renderer;
pub mod stats;
pub mod ui;
pub mod vector;

// Constants
pub const BOID_SIZE: f32 = 10.0;
