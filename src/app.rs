/*
 * Application Module
 *
 * This module defines the main application model and frame driver for the
 * swarm animation. nannou calls `update` once per display frame; the tick
 * scheduler decides which of those frames run an animation tick, so ticks
 * keep their own cadence and never block event handling.
 */

use std::time::Instant;

use log::info;
use nannou::prelude::*;
use nannou_egui::Egui;

use crate::animation::{AnimationLoop, TickScheduler};
use crate::camera::Camera;
use crate::debug::DebugInfo;
use crate::input::{mouse_moved, raw_window_event};
use crate::renderer::view;
use crate::surface::ShapeStore;
use crate::ui;
use crate::{CANVAS_HEIGHT, CANVAS_WIDTH, TICK_INTERVAL, WINDOW_TITLE};

// Main model for the application
pub struct Model {
    pub animation: AnimationLoop,
    pub shapes: ShapeStore,
    pub egui: Egui,
    pub camera: Camera,
    pub scheduler: TickScheduler,
    pub debug_info: DebugInfo,
    pub started_at: Instant,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let window_id = app
        .new_window()
        .title(WINDOW_TITLE)
        .size(CANVAS_WIDTH as u32, CANVAS_HEIGHT as u32)
        .view(view)
        .mouse_moved(mouse_moved)
        .raw_event(raw_window_event)
        .build()
        .expect("failed to build the animation window");

    let window = app.window(window_id).expect("window closed during start-up");
    let egui = Egui::from_window(&window);

    let mut shapes = ShapeStore::new();
    let mut rng = rand::thread_rng();
    let animation = AnimationLoop::new(CANVAS_WIDTH, CANVAS_HEIGHT, &mut shapes, &mut rng);

    info!(
        "started {}x{} canvas with {} particles in {} swarms",
        CANVAS_WIDTH,
        CANVAS_HEIGHT,
        animation.swarms.particle_count(),
        animation.swarms.swarm_count()
    );

    Model {
        animation,
        shapes,
        egui,
        camera: Camera::new(CANVAS_WIDTH, CANVAS_HEIGHT),
        scheduler: TickScheduler::new(TICK_INTERVAL),
        debug_info: DebugInfo::default(),
        started_at: Instant::now(),
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;
    model.debug_info.elapsed = model.started_at.elapsed();

    let mut rng = rand::thread_rng();

    // Slider edits land in the params directly; densities also need a rebuild
    let changes = ui::update_ui(&mut model.egui, &mut model.animation.params, &model.debug_info);
    if !changes.is_empty() {
        model
            .animation
            .on_params_changed(&changes, &mut model.shapes, &mut rng);
    }

    if model.animation.params.pause_animation {
        model.scheduler.reset();
    } else if model.scheduler.poll(update.since_last) {
        let elapsed = model.started_at.elapsed().as_secs_f32();
        model.animation.tick(elapsed, &mut model.shapes, &mut rng);
    }

    model.debug_info.record_animation(&model.animation);
}
