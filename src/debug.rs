/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains frame metrics
 * and population counts to be displayed in the overlay and control panel.
 */

use std::time::Duration;

use crate::animation::AnimationLoop;

// Debug information to display
#[derive(Debug, Clone, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub elapsed: Duration,
    pub ticks: u64,
    pub swarms: usize,
    pub particles: usize,
    pub links: usize,
}

impl DebugInfo {
    // Refresh the population counts from the animation state
    pub fn record_animation(&mut self, animation: &AnimationLoop) {
        self.ticks = animation.ticks;
        self.swarms = animation.swarms.swarm_count();
        self.particles = animation.swarms.particle_count();
        self.links = animation.links_drawn;
    }

    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("FPS: {:.1}", self.fps),
            format!("Frame time: {:.2} ms", self.frame_time.as_secs_f64() * 1000.0),
            format!("Elapsed: {:.1} s", self.elapsed.as_secs_f64()),
            format!("Ticks: {}", self.ticks),
            format!("Swarms: {}", self.swarms),
            format!("Particles: {}", self.particles),
            format!("Links: {}", self.links),
        ]
    }
}
