/*
 * Application Module
 *
 * This module defines the main application model and the simulation driver.
 * It owns the Flock and advances it by exactly one fixed step per frame, so
 * simulated speed does not depend on frame rate or event-loop latency.
 * Pausing, single-stepping and resetting all happen between ticks.
 */

use std::sync::OnceLock;

use nannou::prelude::*;
use nannou_egui::Egui;

use crate::debug::DebugInfo;
use crate::flock::Flock;
use crate::input::{key_pressed, raw_window_event};
use crate::params::SimulationParams;
use crate::renderer::view;
use crate::ui;

// nannou builds the model from a plain fn, so startup parameters are parked here
static STARTUP_PARAMS: OnceLock<SimulationParams> = OnceLock::new();

// Main model for the application
pub struct Model {
    pub flock: Flock,
    pub params: SimulationParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    // Advance one tick on the next frame even when paused
    pub step_requested: bool,
}

// Open the window and run until it is closed or Escape is pressed
pub fn run(params: SimulationParams) {
    if STARTUP_PARAMS.set(params).is_err() {
        log::warn!("simulation parameters were already set, keeping the first ones");
    }
    nannou::app(model).update(update).run();
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let params = STARTUP_PARAMS.get().cloned().unwrap_or_default();

    let window_id = app
        .new_window()
        .title("Flocking Simulation")
        .size(params.width as u32, params.height as u32)
        .resizable(false)
        .view(view)
        .key_pressed(key_pressed)
        .raw_event(raw_window_event)
        .build()
        .expect("failed to build the simulation window");

    let window = app
        .window(window_id)
        .expect("simulation window closed during startup");
    let egui = Egui::from_window(&window);

    let flock = Flock::with_params(
        params.num_boids,
        params.width,
        params.height,
        params.flock,
        params.seed,
    );

    log::info!(
        "starting with {} boids in a {}x{} world, dt {}",
        flock.len(),
        params.width,
        params.height,
        params.dt
    );

    let debug_info = DebugInfo {
        stats: flock.stats(),
        ..DebugInfo::default()
    };

    Model {
        flock,
        params,
        egui,
        debug_info,
        step_requested: false,
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.egui.set_elapsed_time(update.since_start);

    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    let actions = ui::update_ui(&mut model.egui, &mut model.params, &model.debug_info);

    if actions.flock_params_changed {
        model.flock.set_params(model.params.flock);
    }
    if actions.step {
        model.step_requested = true;
    }
    if actions.reset || model.flock.len() != model.params.num_boids {
        reset_flock(model);
    }

    advance(model);
}

// Run at most one tick, honouring pause and pending single steps
pub fn advance(model: &mut Model) {
    if model.params.pause_simulation && !model.step_requested {
        return;
    }
    model.step_requested = false;

    model
        .flock
        .update(model.params.dt, model.params.width, model.params.height);
    model.debug_info.ticks += 1;
    model.debug_info.stats = model.flock.stats();
}

// Scatter a fresh population using the flock's own generator
pub fn reset_flock(model: &mut Model) {
    model
        .flock
        .respawn(model.params.num_boids, model.params.width, model.params.height);
    model.debug_info.ticks = 0;
    model.debug_info.stats = model.flock.stats();

    log::info!("reset flock to {} boids", model.flock.len());
}

pub fn toggle_pause(model: &mut Model) {
    model.params.pause_simulation = !model.params.pause_simulation;
    log::debug!("paused: {}", model.params.pause_simulation);
}
