/*
 * Animation Module
 *
 * This module drives the frame cycle of the swarm animation. Every tick runs
 * two phases:
 * 1. Link clear: delete every link drawn in the previous tick
 * 2. Update and link: move each particle, then link it to every later
 *    particle of the same swarm that is closer than the link distance
 *
 * Ticks are paced by TickScheduler, which the host feeds with frame time.
 */

use std::time::Duration;

use log::{debug, trace};
use nannou::prelude::*;
use rand::Rng;

use crate::params::{ParamChange, SimulationParams};
use crate::surface::Surface;
use crate::swarm::SwarmManager;
use crate::LINK_WIDTH;

/// Stroke opacity of a link, pulsing over time and offset by its length.
pub fn link_opacity(elapsed_secs: f32, distance: f32) -> f32 {
    0.3 + 0.2 * (elapsed_secs + distance / 50.0).sin()
}

pub struct AnimationLoop {
    pub params: SimulationParams,
    pub pointer: Vec2,
    pub swarms: SwarmManager,
    // Links created by the most recent tick
    pub links_drawn: usize,
    pub ticks: u64,
}

impl AnimationLoop {
    /// Create the loop with default parameters, the pointer at the canvas
    /// centre, and freshly built swarms.
    pub fn new<R, S>(width: f32, height: f32, surface: &mut S, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
        S: Surface + ?Sized,
    {
        Self::with_params(width, height, SimulationParams::default(), surface, rng)
    }

    pub fn with_params<R, S>(width: f32, height: f32, params: SimulationParams, surface: &mut S, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
        S: Surface + ?Sized,
    {
        let mut swarms = SwarmManager::new(width, height);
        swarms.rebuild(params.particle_density, params.swarm_density, surface, rng);

        Self {
            params,
            pointer: vec2(width / 2.0, height / 2.0),
            swarms,
            links_drawn: 0,
            ticks: 0,
        }
    }

    // Store the latest pointer position; motion happens on the next tick
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.pointer = vec2(x, y);
    }

    /// Apply one parameter write, rebuilding the swarms when it changes a density.
    pub fn set_param<R, S>(&mut self, change: ParamChange, surface: &mut S, rng: &mut R)
    where
        R: Rng + ?Sized,
        S: Surface + ?Sized,
    {
        if self.params.apply(change) {
            self.on_params_changed(&[change], surface, rng);
        }
    }

    /// React to parameters already written into `self.params`.
    ///
    /// Only density changes rebuild, and several of them in one batch rebuild once.
    pub fn on_params_changed<R, S>(&mut self, changes: &[ParamChange], surface: &mut S, rng: &mut R)
    where
        R: Rng + ?Sized,
        S: Surface + ?Sized,
    {
        for change in changes {
            debug!("parameter changed: {:?}", change);
        }

        if changes.iter().any(ParamChange::requires_rebuild) {
            self.links_drawn = 0;
            self.swarms
                .rebuild(self.params.particle_density, self.params.swarm_density, surface, rng);
        }
    }

    // Delete every link from the previous tick
    pub fn clear_links<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        for particle in self.swarms.particles_mut() {
            particle.clear_links(surface);
        }
        self.links_drawn = 0;
    }

    /// Run one full tick at `elapsed_secs` since the animation started.
    pub fn tick<R, S>(&mut self, elapsed_secs: f32, surface: &mut S, rng: &mut R)
    where
        R: Rng + ?Sized,
        S: Surface + ?Sized,
    {
        self.clear_links(surface);

        let pointer = self.pointer;
        let sensitivity = self.params.sensitivity;
        let speed = self.params.particle_speed;
        let link_distance = self.params.link_distance;
        let mut links_drawn = 0;

        for swarm in &mut self.swarms.swarms {
            for i in 0..swarm.particles.len() {
                let (head, tail) = swarm.particles.split_at_mut(i + 1);
                let particle = &mut head[i];
                particle.update(pointer, sensitivity, speed, rng, surface);

                // Later particles still hold last tick's position here
                for other in tail.iter_mut() {
                    let distance = particle.position.distance(other.position);
                    if distance < link_distance {
                        let opacity = link_opacity(elapsed_secs, distance);
                        let color = particle.color.with_opacity(opacity);
                        let link = surface.create_line(particle.position, other.position, color, LINK_WIDTH);
                        particle.links.push(link);
                        other.links.push(link);
                        links_drawn += 1;
                    }
                }
            }
        }

        self.links_drawn = links_drawn;
        self.ticks += 1;
        trace!("tick {} drew {} links", self.ticks, links_drawn);
    }
}

/// Paces ticks from frame time, standing in for a one-shot timer that is
/// re-armed after every tick.
///
/// At most one tick is due per poll and leftover time is capped at one
/// interval, so a stalled frame never turns into a burst of catch-up ticks.
#[derive(Debug, Clone)]
pub struct TickScheduler {
    pub interval: Duration,
    accumulator: Duration,
}

impl TickScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulator: Duration::ZERO,
        }
    }

    // Add elapsed frame time and report whether a tick is due
    pub fn poll(&mut self, frame_time: Duration) -> bool {
        self.accumulator += frame_time;
        if self.accumulator < self.interval {
            return false;
        }

        self.accumulator -= self.interval;
        if self.accumulator > self.interval {
            self.accumulator = self.interval;
        }
        true
    }

    pub fn reset(&mut self) {
        self.accumulator = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Shape, ShapeStore};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn setup(particle_density: usize, swarm_density: usize) -> (AnimationLoop, ShapeStore, StdRng) {
        let mut rng = StdRng::seed_from_u64(21);
        let mut store = ShapeStore::new();
        let params = SimulationParams {
            particle_density,
            swarm_density,
            ..SimulationParams::default()
        };
        let animation = AnimationLoop::with_params(800.0, 600.0, params, &mut store, &mut rng);
        (animation, store, rng)
    }

    // Pin every particle in place so link geometry is predictable
    fn freeze(animation: &mut AnimationLoop, positions: &[Vec2]) {
        for (particle, position) in animation.swarms.particles_mut().zip(positions) {
            particle.position = *position;
            particle.speed = 0.0;
        }
    }

    #[test]
    fn opacity_at_fifty_pixels_and_time_zero() {
        let opacity = link_opacity(0.0, 50.0);
        assert!((opacity - (0.3 + 0.2 * 1.0f32.sin())).abs() < 1e-6);
        assert!((opacity - 0.468).abs() < 1e-3);
    }

    #[test]
    fn opacity_stays_between_tenth_and_half() {
        for step in 0..200 {
            let t = step as f32 * 0.37;
            let o = link_opacity(t, (step % 300) as f32);
            assert!((0.1 - 1e-6..=0.5 + 1e-6).contains(&o));
        }
    }

    #[test]
    fn starts_with_pointer_at_centre() {
        let (animation, store, _) = setup(50, 3);
        assert_eq!(animation.pointer, vec2(400.0, 300.0));
        assert_eq!(store.circle_count(), 48);
    }

    #[test]
    fn each_close_pair_links_exactly_once() {
        let (mut animation, mut store, mut rng) = setup(3, 1);
        freeze(&mut animation, &[vec2(100.0, 100.0), vec2(110.0, 100.0), vec2(700.0, 500.0)]);

        animation.tick(0.0, &mut store, &mut rng);

        assert_eq!(animation.links_drawn, 1);
        assert_eq!(store.line_count(), 1);
        let particles = &animation.swarms.swarms[0].particles;
        assert_eq!(particles[0].links, particles[1].links);
        assert!(particles[2].links.is_empty());
    }

    #[test]
    fn link_colour_is_darkened_swarm_colour() {
        let (mut animation, mut store, mut rng) = setup(2, 1);
        freeze(&mut animation, &[vec2(200.0, 200.0), vec2(250.0, 200.0)]);

        animation.tick(0.0, &mut store, &mut rng);

        let particles = &animation.swarms.swarms[0].particles;
        let expected = particles[0].color.with_opacity(link_opacity(0.0, 50.0));
        match store.get(particles[0].links[0]) {
            Some(Shape::Line { color, weight, start, end }) => {
                assert_eq!(*color, expected);
                assert_eq!(*weight, LINK_WIDTH);
                assert_eq!(*start, vec2(200.0, 200.0));
                assert_eq!(*end, vec2(250.0, 200.0));
            }
            other => panic!("expected line, got {:?}", other),
        }
    }

    #[test]
    fn different_swarms_never_link() {
        let (mut animation, mut store, mut rng) = setup(2, 2);
        freeze(&mut animation, &[vec2(300.0, 300.0), vec2(300.0, 300.0)]);

        animation.tick(1.0, &mut store, &mut rng);

        assert_eq!(animation.links_drawn, 0);
        assert_eq!(store.line_count(), 0);
    }

    #[test]
    fn coincident_particles_link_without_panicking() {
        let (mut animation, mut store, mut rng) = setup(2, 1);
        freeze(&mut animation, &[vec2(300.0, 300.0), vec2(300.0, 300.0)]);

        animation.tick(0.0, &mut store, &mut rng);

        assert_eq!(animation.links_drawn, 1);
    }

    #[test]
    fn previous_links_are_cleared_each_tick() {
        let (mut animation, mut store, mut rng) = setup(4, 1);
        freeze(
            &mut animation,
            &[vec2(10.0, 10.0), vec2(20.0, 10.0), vec2(30.0, 10.0), vec2(40.0, 10.0)],
        );

        for t in 0..5 {
            animation.tick(t as f32, &mut store, &mut rng);
            // All six pairs are within range every tick
            assert_eq!(store.line_count(), 6);
            assert_eq!(store.circle_count(), 4);
        }
        assert_eq!(animation.ticks, 5);
    }

    #[test]
    fn link_distance_is_read_live() {
        let (mut animation, mut store, mut rng) = setup(2, 1);
        freeze(&mut animation, &[vec2(100.0, 100.0), vec2(200.0, 100.0)]);
        let before: Vec<_> = animation.swarms.particles().map(|p| p.shape).collect();

        animation.set_param(ParamChange::LinkDistance(60.0), &mut store, &mut rng);
        animation.tick(0.0, &mut store, &mut rng);
        assert_eq!(animation.links_drawn, 0);

        animation.set_param(ParamChange::LinkDistance(150.0), &mut store, &mut rng);
        animation.tick(0.0, &mut store, &mut rng);
        assert_eq!(animation.links_drawn, 1);

        let after: Vec<_> = animation.swarms.particles().map(|p| p.shape).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn density_change_rebuilds_swarms() {
        let (mut animation, mut store, mut rng) = setup(50, 3);

        animation.set_param(ParamChange::SwarmDensity(5), &mut store, &mut rng);
        assert_eq!(animation.swarms.swarm_count(), 5);
        assert_eq!(animation.swarms.particle_count(), 50);

        animation.set_param(ParamChange::ParticleDensity(23), &mut store, &mut rng);
        assert_eq!(animation.swarms.particle_count(), 20);
        assert_eq!(store.circle_count(), 20);
    }

    #[test]
    fn pointer_move_only_records_position() {
        let (mut animation, _, _) = setup(10, 1);
        let positions: Vec<_> = animation.swarms.particles().map(|p| p.position).collect();

        animation.on_pointer_move(12.0, 34.0);

        assert_eq!(animation.pointer, vec2(12.0, 34.0));
        let unchanged: Vec<_> = animation.swarms.particles().map(|p| p.position).collect();
        assert_eq!(positions, unchanged);
    }

    #[test]
    fn scheduler_fires_once_per_interval() {
        let mut scheduler = TickScheduler::new(Duration::from_millis(30));

        assert!(!scheduler.poll(Duration::from_millis(16)));
        assert!(scheduler.poll(Duration::from_millis(16)));
        assert!(!scheduler.poll(Duration::from_millis(16)));
        assert!(scheduler.poll(Duration::from_millis(16)));
    }

    #[test]
    fn scheduler_does_not_build_a_backlog() {
        let mut scheduler = TickScheduler::new(Duration::from_millis(30));

        assert!(scheduler.poll(Duration::from_secs(2)));
        assert!(scheduler.poll(Duration::ZERO));
        assert!(!scheduler.poll(Duration::ZERO));

        scheduler.reset();
        assert!(!scheduler.poll(Duration::from_millis(29)));
    }
}
