/*
 * Particle Swarm Animation - Module Definitions
 *
 * This file defines the module structure for the swarm animation.
 * The simulation modules (particle, swarm, animation, color, surface, params)
 * do not touch the window and can be driven headless; the remaining modules
 * wire them into a nannou window with an egui control panel.
 */

use std::time::Duration;

// Re-export key components for easier access
pub use animation::{AnimationLoop, TickScheduler};
pub use app::Model;
pub use camera::Camera;
pub use color::{with_opacity, ColorError, HexColor};
pub use debug::DebugInfo;
pub use params::{ParamChange, SimulationParams};
pub use particle::Particle;
pub use surface::{Shape, ShapeHandle, ShapeStore, Surface};
pub use swarm::{Swarm, SwarmManager};

// Define modules
pub mod animation;
pub mod app;
pub mod camera;
pub mod color;
pub mod debug;
pub mod input;
pub mod params;
pub mod particle;
pub mod renderer;
pub mod surface;
pub mod swarm;
pub mod ui;

// Constants
pub const CANVAS_WIDTH: f32 = 800.0;
pub const CANVAS_HEIGHT: f32 = 600.0;
pub const PARTICLE_SIZE: f32 = 3.0;
pub const LINK_WIDTH: f32 = 1.0;
pub const TICK_INTERVAL: Duration = Duration::from_millis(30);
pub const WINDOW_TITLE: &str = "Enhanced Particle Swarm Animation";
