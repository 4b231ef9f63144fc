/*
 * Camera Module
 *
 * This module defines the Camera struct that maps between canvas space and
 * nannou screen space. The simulation works in canvas space (origin at the
 * top-left corner, y pointing down); nannou draws in a space centred on the
 * window with y pointing up. The canvas is kept centred in the window.
 */

use nannou::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub canvas_size: Vec2,
}

impl Camera {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            canvas_size: vec2(width, height),
        }
    }

    // Convert a point from canvas space to screen space
    pub fn canvas_to_screen(&self, point: Vec2, window_rect: Rect) -> Vec2 {
        let half = self.canvas_size / 2.0;
        vec2(point.x - half.x, half.y - point.y) + window_rect.xy()
    }

    // Convert a point from screen space to canvas space
    pub fn screen_to_canvas(&self, point: Vec2, window_rect: Rect) -> Vec2 {
        let centered = point - window_rect.xy();
        let half = self.canvas_size / 2.0;
        vec2(centered.x + half.x, half.y - centered.y)
    }

    // Screen-space rectangle covered by the canvas
    pub fn canvas_rect(&self, window_rect: Rect) -> Rect {
        let center = window_rect.xy();
        Rect::from_x_y_w_h(center.x, center.y, self.canvas_size.x, self.canvas_size.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> Rect {
        Rect::from_w_h(800.0, 600.0)
    }

    #[test]
    fn canvas_corners_map_to_window_corners() {
        let camera = Camera::new(800.0, 600.0);
        assert_eq!(camera.canvas_to_screen(vec2(0.0, 0.0), window()), vec2(-400.0, 300.0));
        assert_eq!(camera.canvas_to_screen(vec2(800.0, 600.0), window()), vec2(400.0, -300.0));
        assert_eq!(camera.canvas_to_screen(vec2(400.0, 300.0), window()), vec2(0.0, 0.0));
    }

    #[test]
    fn screen_to_canvas_inverts_canvas_to_screen() {
        let camera = Camera::new(800.0, 600.0);
        let point = vec2(123.0, 456.0);
        let screen = camera.canvas_to_screen(point, window());
        assert_eq!(camera.screen_to_canvas(screen, window()), point);
    }

    #[test]
    fn larger_window_keeps_canvas_centred() {
        let camera = Camera::new(800.0, 600.0);
        let big = Rect::from_w_h(1000.0, 1000.0);
        assert_eq!(camera.canvas_to_screen(vec2(0.0, 0.0), big), vec2(-400.0, 300.0));
        assert_eq!(camera.canvas_rect(big).w(), 800.0);
    }
}
