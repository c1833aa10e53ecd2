/*
 * Input Module
 *
 * This module handles user input events for the simulation window.
 *
 * Keys:
 * - Escape quits
 * - Space pauses or resumes
 * - S advances a single tick
 * - R scatters a fresh flock
 * - D toggles the debug overlay
 */

use nannou::prelude::*;

use crate::app::{reset_flock, toggle_pause, Model};

// Key pressed event handler
pub fn key_pressed(app: &App, model: &mut Model, key: Key) {
    // Leave keys to the UI while a text field or slider has focus
    if model.egui.ctx().wants_keyboard_input() {
        return;
    }

    match key {
        Key::Escape => {
            log::info!("escape pressed, quitting");
            app.quit();
        }
        Key::Space => toggle_pause(model),
        Key::S => {
            model.step_requested = true;
            log::debug!("single step requested");
        }
        Key::R => reset_flock(model),
        Key::D => model.params.show_debug = !model.params.show_debug,
        _ => {}
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
