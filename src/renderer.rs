/*
 * Renderer Module
 *
 * This module handles drawing the simulation. It only reads the flock, and
 * only between ticks.
 *
 * The world is [0, width) x [0, height) with y pointing down. nannou draws
 * with the origin in the middle of the window and y pointing up, so every
 * position and heading is flipped on the way out.
 */

use std::f32::consts::PI;

use nannou::prelude::*;

use crate::app::Model;
use crate::boid::Boid;
use crate::ui;
use crate::vector::Vector2;
use crate::BOID_SIZE;

// Back corners sit this far out relative to the tip, 135 degrees either side
const WING_SCALE: f32 = 0.7;
const WING_ANGLE: f32 = 3.0 * PI / 4.0;

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let (width, height) = (model.params.width, model.params.height);

    draw.background().color(WHITE);

    for boid in model.flock.boids() {
        draw_boid(&draw, boid, width, height);
    }

    if model.params.show_debug {
        // World boundary
        draw.rect()
            .x_y(0.0, 0.0)
            .w_h(width, height)
            .no_fill()
            .stroke_weight(1.0)
            .stroke(rgba(0.3, 0.3, 0.3, 1.0));

        // Separation radius and velocity of the first boid
        if let Some(first) = model.flock.boids().first() {
            let screen_pos = to_screen(first.position, width, height);

            draw.ellipse()
                .xy(screen_pos)
                .radius(model.flock.params().separation_radius)
                .no_fill()
                .stroke(RED)
                .stroke_weight(1.0);

            draw.arrow()
                .start(screen_pos)
                .end(screen_pos + vec2(first.velocity.x, -first.velocity.y) * 5.0)
                .color(ORANGE)
                .stroke_weight(2.0);
        }

        ui::draw_debug_info(&draw, &model.debug_info, app.window_rect(), width, height);
    }

    if let Err(e) = draw.to_frame(app, &frame) {
        log::error!("failed to draw frame: {:?}", e);
    }

    if let Err(e) = model.egui.draw_to_frame(&frame) {
        log::error!("failed to draw controls: {:?}", e);
    }
}

// Draw a boid as a triangle pointing along its velocity, or a dot when it is barely moving
pub fn draw_boid(draw: &Draw, boid: &Boid, width: f32, height: f32) {
    let screen_pos = to_screen(boid.position, width, height);

    if !boid.is_moving() {
        draw.rect().xy(screen_pos).w_h(4.0, 4.0).color(BLUE);
        return;
    }

    draw.polygon()
        .color(BLUE)
        .points(triangle_points(BOID_SIZE))
        .xy(screen_pos)
        .rotate(screen_heading(boid));
}

// World position to nannou window coordinates
pub fn to_screen(position: Vector2, width: f32, height: f32) -> Point2 {
    pt2(position.x - width / 2.0, height / 2.0 - position.y)
}

// Flipping y mirrors the angle
pub fn screen_heading(boid: &Boid) -> f32 {
    -boid.heading()
}

// Triangle around the origin with its tip on the positive x axis
pub fn triangle_points(size: f32) -> [Point2; 3] {
    let wing = size * WING_SCALE;
    [
        pt2(size, 0.0),
        pt2(wing * WING_ANGLE.cos(), -wing * WING_ANGLE.sin()),
        pt2(wing * WING_ANGLE.cos(), wing * WING_ANGLE.sin()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_screen_corners() {
        assert_eq!(to_screen(Vector2::new(0.0, 0.0), 800.0, 600.0), pt2(-400.0, 300.0));
        assert_eq!(to_screen(Vector2::new(800.0, 600.0), 800.0, 600.0), pt2(400.0, -300.0));
        assert_eq!(to_screen(Vector2::new(400.0, 300.0), 800.0, 600.0), pt2(0.0, 0.0));
    }

    #[test]
    fn test_screen_heading_flips_y() {
        // Moving down the world is moving down the screen
        let boid = Boid::new(Vector2::ZERO, Vector2::new(0.0, 1.0));
        assert!((screen_heading(&boid) + PI / 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_triangle_is_symmetric() {
        let [tip, right, left] = triangle_points(10.0);
        assert_eq!(tip, pt2(10.0, 0.0));
        assert!((right.x - left.x).abs() < 1e-6);
        assert!((right.y + left.y).abs() < 1e-6);
        assert!(right.x < 0.0);
    }
}
