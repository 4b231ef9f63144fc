/*
 * UI Module
 *
 * This module contains functions for creating and updating the control panel
 * using nannou_egui, plus the on-canvas debug overlay. The panel only writes
 * into SimulationParams; change detection reports what the sliders touched.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::{ParamChange, SimulationParams};

// Draw the control panel and return the parameters that changed this frame
pub fn update_ui(egui: &mut Egui, params: &mut SimulationParams, debug_info: &DebugInfo) -> Vec<ParamChange> {
    // Take a snapshot of current parameter values for change detection
    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Swarm Controls")
        .anchor(egui::Align2::RIGHT_TOP, [-10.0, 10.0])
        .resizable(false)
        .show(&ctx, |ui| {
            ui.add(
                egui::Slider::new(&mut params.sensitivity, SimulationParams::get_sensitivity_range())
                    .text("Pointer Sensitivity"),
            );
            ui.add(
                egui::Slider::new(&mut params.particle_density, SimulationParams::get_particle_density_range())
                    .text("Particle Density"),
            );
            ui.add(
                egui::Slider::new(&mut params.swarm_density, SimulationParams::get_swarm_density_range())
                    .text("Swarm Density"),
            );
            ui.add(
                egui::Slider::new(&mut params.link_distance, SimulationParams::get_link_distance_range())
                    .text("Link Distance"),
            );
            ui.add(
                egui::Slider::new(&mut params.particle_speed, SimulationParams::get_particle_speed_range())
                    .text("Particle Speed"),
            );

            ui.separator();

            ui.checkbox(&mut params.show_debug, "Show Debug Info");
            ui.checkbox(&mut params.pause_animation, "Pause Animation");

            if params.show_debug {
                ui.label(format!("FPS: {:.1}", debug_info.fps));
                ui.label(format!("Particles: {}", debug_info.particles));
            }
        });

    params.detect_changes()
}

// Draw debug information in the top-left corner of the window
pub fn draw_debug_info(draw: &nannou::Draw, debug_info: &DebugInfo, window_rect: nannou::geom::Rect) {
    let margin = 20.0;
    let line_height = 20.0;
    let lines = debug_info.lines();
    let panel_width = 200.0;
    let panel_height = line_height * lines.len() as f32 + margin;
    let panel_x = window_rect.left() + panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.left() + margin;
    let text_y = window_rect.top() - margin;

    for (i, text) in lines.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        // Text is centred on its position, so shift right by roughly half a line
        draw.text(text)
            .x_y(text_x + 70.0, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
