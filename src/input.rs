/*
 * Input Module
 *
 * This module handles user input events for the swarm animation.
 * Pointer motion is converted to canvas coordinates and stored for the next
 * tick; raw window events are forwarded to egui.
 */

use nannou::prelude::*;

use crate::app::Model;

// Mouse moved event handler
pub fn mouse_moved(app: &App, model: &mut Model, pos: Point2) {
    // The control panel covers the canvas, so motion over it is not the canvas's
    if model.egui.ctx().is_pointer_over_area() {
        return;
    }

    let canvas_pos = model.camera.screen_to_canvas(pos, app.window_rect());
    model.animation.on_pointer_move(canvas_pos.x, canvas_pos.y);
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
