/*
 * Particle Module
 *
 * This module defines the Particle struct and its per-tick motion.
 * Each particle combines two steering components:
 * 1. Wander: a small random turn every tick
 * 2. Attraction: a pull toward the pointer that grows as the pointer gets closer
 *
 * Positions wrap around the canvas edges by snapping to the opposite edge.
 */

use std::f32::consts::TAU;

use nannou::prelude::*;
use rand::Rng;

use crate::color::{palette_color, HexColor};
use crate::surface::{ShapeHandle, Surface};
use crate::PARTICLE_SIZE;

// Largest random heading change per tick, in radians
pub const WANDER: f32 = 0.2;

// Range of the per-particle speed multiplier
pub const MIN_SPEED: f32 = 0.5;
pub const MAX_SPEED: f32 = 2.0;

#[derive(Debug, Clone)]
pub struct Particle {
    pub position: Vec2,
    pub heading: f32,
    pub speed: f32,
    pub size: f32,
    pub swarm_id: usize,
    pub color: HexColor,
    pub extent: Vec2,
    pub shape: ShapeHandle,
    // Links drawn against this particle during the last tick
    pub links: Vec<ShapeHandle>,
}

impl Particle {
    pub fn new<R, S>(width: f32, height: f32, swarm_id: usize, surface: &mut S, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
        S: Surface + ?Sized,
    {
        let position = vec2(rng.gen_range(0.0..=width), rng.gen_range(0.0..=height));
        let color = palette_color(swarm_id);
        let shape = surface.create_circle(position, PARTICLE_SIZE, color);

        Self {
            position,
            heading: rng.gen_range(0.0..TAU),
            speed: rng.gen_range(MIN_SPEED..=MAX_SPEED),
            size: PARTICLE_SIZE,
            swarm_id,
            color,
            extent: vec2(width, height),
            shape,
            links: Vec::new(),
        }
    }

    /// Advance one tick: wander, steer toward the pointer, move, wrap, and
    /// push the new position to the surface.
    pub fn update<R, S>(
        &mut self,
        pointer: Vec2,
        sensitivity: f32,
        speed_factor: f32,
        rng: &mut R,
        surface: &mut S,
    ) where
        R: Rng + ?Sized,
        S: Surface + ?Sized,
    {
        self.heading += rng.gen_range(-WANDER..=WANDER);
        self.steer_toward(pointer, sensitivity);

        let step = speed_factor * self.speed;
        self.position += vec2(self.heading.cos(), self.heading.sin()) * step;

        self.position.x = wrap_axis(self.position.x, self.extent.x);
        self.position.y = wrap_axis(self.position.y, self.extent.y);

        surface.move_circle(self.shape, self.position);
    }

    // Blend the current heading with the direction to the pointer
    pub fn steer_toward(&mut self, pointer: Vec2, sensitivity: f32) {
        let to_pointer = pointer - self.position;
        let dist = to_pointer.length().max(1.0);
        let pull = attraction(sensitivity, dist);

        let x = self.heading.cos() * (1.0 - pull) + to_pointer.x / dist * pull;
        let y = self.heading.sin() * (1.0 - pull) + to_pointer.y / dist * pull;
        self.heading = y.atan2(x);

        if !self.heading.is_finite() {
            self.heading = 0.0;
        }
    }

    // Delete every link shape recorded against this particle
    pub fn clear_links<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        for link in self.links.drain(..) {
            surface.delete_shape(link);
        }
    }

    // Remove the particle and its links from the surface
    pub fn release<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.clear_links(surface);
        surface.delete_shape(self.shape);
    }
}

/// Pull strength toward the pointer, `sensitivity * 100 / dist` capped at 1.
///
/// `dist` is floored at 1 so a particle sitting on the pointer cannot blow
/// up the ratio.
pub fn attraction(sensitivity: f32, dist: f32) -> f32 {
    let pull = (sensitivity * 100.0 / dist.max(1.0)).min(1.0);
    pull.max(0.0)
}

// Snap a coordinate that left 0..=extent to the opposite edge
pub fn wrap_axis(value: f32, extent: f32) -> f32 {
    if value < 0.0 {
        extent
    } else if value > extent {
        0.0
    } else {
        value
    }
}
