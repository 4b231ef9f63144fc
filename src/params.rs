/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains all the
 * live-tunable parameters for the swarm animation. These parameters are
 * modified through the UI sliders. It also provides snapshot-based change
 * detection so the caller can tell which edits need the swarms rebuilt.
 */

use log::warn;

// Parameters for the animation that can be adjusted via UI
#[derive(Debug, Clone)]
pub struct SimulationParams {
    pub sensitivity: f32,
    pub particle_density: usize,
    pub swarm_density: usize,
    pub link_distance: f32,
    pub particle_speed: f32,
    pub show_debug: bool,
    pub pause_animation: bool,

    // Internal state for tracking changes
    pub previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
#[derive(Debug, Clone, Copy)]
struct ParamSnapshot {
    sensitivity: f32,
    particle_density: usize,
    swarm_density: usize,
    link_distance: f32,
    particle_speed: f32,
}

// A single parameter write, as produced by one slider
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamChange {
    Sensitivity(f32),
    ParticleDensity(usize),
    SwarmDensity(usize),
    LinkDistance(f32),
    ParticleSpeed(f32),
}

impl ParamChange {
    // Density changes repopulate the swarms; the rest are read live every tick
    pub fn requires_rebuild(&self) -> bool {
        matches!(self, ParamChange::ParticleDensity(_) | ParamChange::SwarmDensity(_))
    }
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            sensitivity: 0.8,
            particle_density: 50,
            swarm_density: 3,
            link_distance: 150.0,
            particle_speed: 1.0,
            show_debug: false,
            pause_animation: false,
            previous_values: None,
        }
    }
}

impl SimulationParams {
    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(self.snapshot());
    }

    fn snapshot(&self) -> ParamSnapshot {
        ParamSnapshot {
            sensitivity: self.sensitivity,
            particle_density: self.particle_density,
            swarm_density: self.swarm_density,
            link_distance: self.link_distance,
            particle_speed: self.particle_speed,
        }
    }

    /// List the tunables that differ from the last snapshot.
    ///
    /// Without a snapshot nothing is reported as changed.
    pub fn detect_changes(&self) -> Vec<ParamChange> {
        let mut changes = Vec::new();

        if let Some(prev) = &self.previous_values {
            if self.sensitivity != prev.sensitivity {
                changes.push(ParamChange::Sensitivity(self.sensitivity));
            }
            if self.particle_density != prev.particle_density {
                changes.push(ParamChange::ParticleDensity(self.particle_density));
            }
            if self.swarm_density != prev.swarm_density {
                changes.push(ParamChange::SwarmDensity(self.swarm_density));
            }
            if self.link_distance != prev.link_distance {
                changes.push(ParamChange::LinkDistance(self.link_distance));
            }
            if self.particle_speed != prev.particle_speed {
                changes.push(ParamChange::ParticleSpeed(self.particle_speed));
            }
        }

        changes
    }

    /// Write one parameter, clamped to its slider range.
    ///
    /// Non-finite values are dropped and leave the field untouched. Returns
    /// whether the value was stored.
    pub fn apply(&mut self, change: ParamChange) -> bool {
        let finite = match change {
            ParamChange::Sensitivity(v) | ParamChange::LinkDistance(v) | ParamChange::ParticleSpeed(v) => {
                v.is_finite()
            }
            ParamChange::ParticleDensity(_) | ParamChange::SwarmDensity(_) => true,
        };
        if !finite {
            warn!("ignoring non-finite parameter value: {:?}", change);
            return false;
        }

        match change {
            ParamChange::Sensitivity(v) => self.sensitivity = clamp_to(v, Self::get_sensitivity_range()),
            ParamChange::ParticleDensity(v) => {
                self.particle_density = clamp_to(v, Self::get_particle_density_range())
            }
            ParamChange::SwarmDensity(v) => self.swarm_density = clamp_to(v, Self::get_swarm_density_range()),
            ParamChange::LinkDistance(v) => self.link_distance = clamp_to(v, Self::get_link_distance_range()),
            ParamChange::ParticleSpeed(v) => self.particle_speed = clamp_to(v, Self::get_particle_speed_range()),
        }
        true
    }

    // Get parameter ranges for UI sliders
    pub fn get_sensitivity_range() -> std::ops::RangeInclusive<f32> {
        0.1..=2.0
    }

    pub fn get_particle_density_range() -> std::ops::RangeInclusive<usize> {
        20..=200
    }

    pub fn get_swarm_density_range() -> std::ops::RangeInclusive<usize> {
        1..=10
    }

    pub fn get_link_distance_range() -> std::ops::RangeInclusive<f32> {
        50.0..=300.0
    }

    pub fn get_particle_speed_range() -> std::ops::RangeInclusive<f32> {
        0.2..=3.0
    }
}

fn clamp_to<T: PartialOrd + Copy>(value: T, range: std::ops::RangeInclusive<T>) -> T {
    if value < *range.start() {
        *range.start()
    } else if value > *range.end() {
        *range.end()
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_sit_inside_slider_ranges() {
        let params = SimulationParams::default();
        assert!(SimulationParams::get_sensitivity_range().contains(&params.sensitivity));
        assert!(SimulationParams::get_particle_density_range().contains(&params.particle_density));
        assert!(SimulationParams::get_swarm_density_range().contains(&params.swarm_density));
        assert!(SimulationParams::get_link_distance_range().contains(&params.link_distance));
        assert!(SimulationParams::get_particle_speed_range().contains(&params.particle_speed));
    }

    #[test]
    fn no_snapshot_means_no_changes() {
        let mut params = SimulationParams::default();
        params.sensitivity = 1.5;
        assert!(params.detect_changes().is_empty());
    }

    #[test]
    fn detects_each_edited_field() {
        let mut params = SimulationParams::default();
        params.take_snapshot();
        params.swarm_density = 5;
        params.link_distance = 200.0;

        let changes = params.detect_changes();
        assert_eq!(changes, vec![ParamChange::SwarmDensity(5), ParamChange::LinkDistance(200.0)]);
        assert!(changes.iter().any(ParamChange::requires_rebuild));
    }

    #[test]
    fn live_parameters_do_not_require_rebuild() {
        assert!(!ParamChange::Sensitivity(1.0).requires_rebuild());
        assert!(!ParamChange::LinkDistance(100.0).requires_rebuild());
        assert!(!ParamChange::ParticleSpeed(2.0).requires_rebuild());
        assert!(ParamChange::ParticleDensity(80).requires_rebuild());
        assert!(ParamChange::SwarmDensity(4).requires_rebuild());
    }

    #[test]
    fn apply_clamps_and_rejects_non_finite() {
        let mut params = SimulationParams::default();

        assert!(params.apply(ParamChange::Sensitivity(9.0)));
        assert_eq!(params.sensitivity, 2.0);

        assert!(params.apply(ParamChange::SwarmDensity(0)));
        assert_eq!(params.swarm_density, 1);

        assert!(!params.apply(ParamChange::ParticleSpeed(f32::NAN)));
        assert_eq!(params.particle_speed, 1.0);

        assert!(!params.apply(ParamChange::LinkDistance(f32::INFINITY)));
        assert_eq!(params.link_distance, 150.0);
    }
}
