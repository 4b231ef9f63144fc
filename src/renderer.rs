/*
 * Renderer Module
 *
 * This module handles the rendering of the swarm animation.
 * It replays the retained shape store onto the frame: links first so the
 * particles sit on top of them, then the debug overlay and the egui panel.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::camera::Camera;
use crate::color::HexColor;
use crate::surface::Shape;
use crate::ui;

fn to_rgb(color: HexColor) -> Rgb<u8> {
    rgb(color.r, color.g, color.b)
}

fn draw_shape(draw: &Draw, shape: &Shape, camera: &Camera, window_rect: Rect) {
    match *shape {
        Shape::Circle { center, radius, color } => {
            draw.ellipse()
                .xy(camera.canvas_to_screen(center, window_rect))
                .radius(radius)
                .color(to_rgb(color));
        }
        Shape::Line { start, end, color, weight } => {
            draw.line()
                .start(camera.canvas_to_screen(start, window_rect))
                .end(camera.canvas_to_screen(end, window_rect))
                .weight(weight)
                .color(to_rgb(color));
        }
    }
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    let window_rect = app.window_rect();

    for shape in model.shapes.lines() {
        draw_shape(&draw, shape, &model.camera, window_rect);
    }
    for shape in model.shapes.circles() {
        draw_shape(&draw, shape, &model.camera, window_rect);
    }

    if model.animation.params.show_debug {
        // Outline the canvas when the window is larger than it
        let canvas = model.camera.canvas_rect(window_rect);
        draw.rect()
            .xy(canvas.xy())
            .wh(canvas.wh())
            .no_fill()
            .stroke_weight(1.0)
            .stroke(rgba(0.3, 0.3, 0.3, 1.0));

        ui::draw_debug_info(&draw, &model.debug_info, window_rect);
    }

    if let Err(err) = draw.to_frame(app, &frame) {
        log::error!("failed to draw frame: {:?}", err);
    }
    if let Err(err) = model.egui.draw_to_frame(&frame) {
        log::error!("failed to draw control panel: {:?}", err);
    }
}
