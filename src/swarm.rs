/*
 * Swarm Module
 *
 * This module owns the swarms and their particles. Swarms are never edited
 * in place: any change to the particle or swarm density tears every swarm
 * down and builds a fresh population.
 */

use log::info;
use rand::Rng;

use crate::particle::Particle;
use crate::surface::Surface;

// Particles sharing one id and one colour; only these may link to each other
#[derive(Debug, Clone)]
pub struct Swarm {
    pub id: usize,
    pub particles: Vec<Particle>,
}

#[derive(Debug)]
pub struct SwarmManager {
    pub swarms: Vec<Swarm>,
    pub width: f32,
    pub height: f32,
}

impl SwarmManager {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            swarms: Vec::new(),
            width,
            height,
        }
    }

    /// Replace every swarm with `swarm_density` new swarms of
    /// `max(1, particle_density / swarm_density)` particles each.
    ///
    /// The total can land above or below `particle_density`; that is accepted.
    pub fn rebuild<R, S>(&mut self, particle_density: usize, swarm_density: usize, surface: &mut S, rng: &mut R)
    where
        R: Rng + ?Sized,
        S: Surface + ?Sized,
    {
        self.clear(surface);

        let per_swarm = particles_per_swarm(particle_density, swarm_density);
        let (width, height) = (self.width, self.height);
        self.swarms = (0..swarm_density)
            .map(|id| Swarm {
                id,
                particles: (0..per_swarm)
                    .map(|_| Particle::new(width, height, id, surface, rng))
                    .collect(),
            })
            .collect();

        info!(
            "rebuilt {} swarms x {} particles ({} requested, {} created)",
            swarm_density,
            per_swarm,
            particle_density,
            self.particle_count()
        );
    }

    // Delete every particle shape and link, leaving no swarms
    pub fn clear<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        for swarm in &mut self.swarms {
            for particle in &mut swarm.particles {
                particle.release(surface);
            }
        }
        self.swarms.clear();
    }

    pub fn swarm_count(&self) -> usize {
        self.swarms.len()
    }

    pub fn particle_count(&self) -> usize {
        self.swarms.iter().map(|swarm| swarm.particles.len()).sum()
    }

    pub fn particles(&self) -> impl Iterator<Item = &Particle> {
        self.swarms.iter().flat_map(|swarm| swarm.particles.iter())
    }

    pub fn particles_mut(&mut self) -> impl Iterator<Item = &mut Particle> {
        self.swarms.iter_mut().flat_map(|swarm| swarm.particles.iter_mut())
    }
}

// Floor division with a minimum of one; zero swarms means zero per swarm
pub fn particles_per_swarm(particle_density: usize, swarm_density: usize) -> usize {
    match particle_density.checked_div(swarm_density) {
        Some(per_swarm) => per_swarm.max(1),
        None => 0,
    }
}
