/*
 * UI Module
 *
 * This module contains functions for creating and updating the user interface
 * using nannou_egui. It provides controls for pausing, stepping and resetting
 * the flock and for tuning the rule weights and caps between ticks.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::{FlockParams, SimulationParams};

// What the user asked for this frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UiActions {
    pub reset: bool,
    pub step: bool,
    pub flock_params_changed: bool,
}

// Update the UI and report the actions the driver should take
pub fn update_ui(egui: &mut Egui, params: &mut SimulationParams, debug_info: &DebugInfo) -> UiActions {
    let mut actions = UiActions::default();
    let previous_flock_params = params.flock;

    let ctx = egui.begin_frame();

    egui::Window::new("Simulation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Flock", |ui| {
                ui.add(
                    egui::Slider::new(&mut params.num_boids, SimulationParams::get_num_boids_range())
                        .text("Number of Boids"),
                );

                ui.horizontal(|ui| {
                    if ui.button("Reset").clicked() {
                        actions.reset = true;
                    }
                    if ui.button("Step").clicked() {
                        actions.step = true;
                    }
                });
            });

            ui.collapsing("Flocking Behavior", |ui| {
                let flock = &mut params.flock;
                ui.add(
                    egui::Slider::new(&mut flock.cohesion_weight, FlockParams::get_cohesion_weight_range())
                        .text("Cohesion Weight"),
                );
                ui.add(
                    egui::Slider::new(&mut flock.separation_weight, FlockParams::get_weight_range())
                        .text("Separation Weight"),
                );
                ui.add(
                    egui::Slider::new(&mut flock.alignment_weight, FlockParams::get_weight_range())
                        .text("Alignment Weight"),
                );
                ui.add(
                    egui::Slider::new(&mut flock.separation_radius, FlockParams::get_radius_range())
                        .text("Separation Radius"),
                );
                ui.add(
                    egui::Slider::new(&mut flock.max_speed, FlockParams::get_max_speed_range())
                        .text("Max Speed"),
                );
                ui.add(
                    egui::Slider::new(&mut flock.max_force, FlockParams::get_max_force_range())
                        .text("Max Force"),
                );
                if ui.button("Restore Defaults").clicked() {
                    *flock = FlockParams::default();
                }
            });

            ui.separator();
            ui.label(format!("Tick: {}", debug_info.ticks));
            ui.label(format!("FPS: {:.1}", debug_info.fps));
            ui.label(format!("Polarization: {:.2}", debug_info.stats.polarization));

            ui.checkbox(&mut params.show_debug, "Show Debug Info");
            ui.checkbox(&mut params.pause_simulation, "Pause Simulation");
        });

    actions.flock_params_changed = params.flock != previous_flock_params;
    actions
}

// Draw debug information on the screen
pub fn draw_debug_info(
    draw: &nannou::Draw,
    debug_info: &DebugInfo,
    window_rect: nannou::geom::Rect,
    world_width: f32,
    world_height: f32,
) {
    let lines = debug_info.lines(world_width, world_height);

    // Create a background panel in the top-right corner
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 200.0;
    let panel_height = line_height * lines.len() as f32 + margin;
    let panel_x = window_rect.right() - panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = panel_x;
    let text_y = window_rect.top() - margin;

    for (i, text) in lines.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        draw.text(text)
            .x_y(text_x, y)
            .w(panel_width - margin)
            .left_justify()
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
