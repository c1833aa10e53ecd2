/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains performance metrics
 * and flock statistics to be displayed in the UI.
 *
 * Includes metrics for:
 * - FPS (frames per second)
 * - Frame time
 * - Simulation ticks run so far
 * - The latest FlockStats snapshot
 */

use std::time::Duration;

use crate::stats::FlockStats;

// Debug information to display
#[derive(Debug, Clone, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub ticks: u64,
    pub stats: FlockStats,
}

impl DebugInfo {
    pub fn lines(&self, world_width: f32, world_height: f32) -> Vec<String> {
        vec![
            format!("FPS: {:.1}", self.fps),
            format!("Frame time: {:.2} ms", self.frame_time.as_secs_f64() * 1000.0),
            format!("Tick: {}", self.ticks),
            format!("Boids: {}", self.stats.count),
            format!("Mean speed: {:.2}", self.stats.mean_speed),
            format!("Polarization: {:.2}", self.stats.polarization),
            format!("World: {:.0}x{:.0}", world_width, world_height),
        ]
    }
}
