//! Visual data export for the rendering backend
//!
//! The simulation arena is the source of truth; this adapter copies the
//! live particle attributes into flat buffers shaped for GPU vertex
//! attributes, plus the current light states. No graphics API types appear
//! here, so the core stays testable without a graphics context.

use crate::effects::LightState;
use crate::particles::ParticlePool;
use crate::simulation::HazardSimulation;

/// Flat per-particle buffers for one effect instance, active range only.
#[derive(Debug, Clone, Default)]
pub struct ParticleVisualData {
    /// Interleaved xyz positions, `3 × active_count` floats.
    pub positions: Vec<f32>,
    pub sizes: Vec<f32>,
    /// Normalized ages in `[0, 1)`, typically driving shader fade curves.
    pub ages: Vec<f32>,
    /// Effect-specific scalar: flame temperature for fire, opacity for
    /// smoke, zero for ash.
    pub aux: Vec<f32>,
}

impl ParticleVisualData {
    /// Copy the live slice of a pool into flat buffers.
    pub fn from_pool(pool: &ParticlePool) -> Self {
        let mut positions = Vec::with_capacity(pool.active_count() * 3);
        for position in pool.positions() {
            positions.extend_from_slice(&[position.x, position.y, position.z]);
        }
        ParticleVisualData {
            positions,
            sizes: pool.sizes().to_vec(),
            ages: pool.ages().to_vec(),
            aux: pool.aux().to_vec(),
        }
    }

    pub fn particle_count(&self) -> usize {
        self.sizes.len()
    }
}

/// Everything the rendering backend needs for one frame.
#[derive(Debug, Clone, Default)]
pub struct SceneVisualData {
    pub fire: Vec<ParticleVisualData>,
    pub smoke: Vec<ParticleVisualData>,
    pub ash: Vec<ParticleVisualData>,
    /// Ambient and flicker lights of every live fire.
    pub lights: Vec<LightState>,
    /// Simulation time the snapshot was taken at.
    pub timestamp: f32,
}

impl SceneVisualData {
    /// Snapshot every live effect's buffers and lights.
    pub fn capture(sim: &HazardSimulation) -> Self {
        let mut lights = Vec::with_capacity(sim.fires().len() * 2);
        let mut fire = Vec::with_capacity(sim.fires().len());
        for hazard in sim.fires() {
            fire.push(ParticleVisualData::from_pool(hazard.particles()));
            lights.push(hazard.lights().ambient);
            lights.push(hazard.lights().flicker);
        }
        SceneVisualData {
            fire,
            smoke: sim
                .smoke()
                .iter()
                .map(|emission| ParticleVisualData::from_pool(emission.particles()))
                .collect(),
            ash: sim
                .ash()
                .iter()
                .map(|emission| ParticleVisualData::from_pool(emission.particles()))
                .collect(),
            lights,
            timestamp: sim.simulation_time(),
        }
    }
}
