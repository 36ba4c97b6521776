//! Ash emission, the decorative byproduct of a suppression hit
//!
//! The simplest effect: a short downward-drifting burst with no health,
//! intensity, or auxiliary coupling. The coordinator spawns one near a fire
//! when a smoke hit lands, and prunes it once its particles' shared
//! lifetime window has fully elapsed.

use crate::core_types::{AshConfig, Vec3};
use crate::particles::{EmitterDrive, ParticlePool, SpawnProfile};

/// Ash spawn shape: slight outward scatter, downward drift, no auxiliary
/// scalar.
const ASH_PROFILE: SpawnProfile = SpawnProfile {
    spread_radius: 0.35,
    spread_height: 0.6,
    radial_speed: (0.1, 0.3),
    vertical_speed: (-1.0, -0.45),
    lifetime: (0.9, 1.8),
    size: (0.6, 1.2),
    aux: (0.0, 0.0),
    aux_decay: 1.0,
    turbulence: None,
};

/// One ash burst.
#[derive(Debug, Clone)]
pub struct AshEmission {
    position: Vec3,
    elapsed: f32,
    drive: EmitterDrive,
    pool: ParticlePool,
}

impl AshEmission {
    pub fn new(position: Vec3, config: &AshConfig) -> Self {
        let drive = EmitterDrive {
            intensity_scale: 1.0,
            speed: config.speed,
            size: config.particle_size,
        };
        AshEmission {
            position,
            elapsed: 0.0,
            drive,
            pool: ParticlePool::new(
                position,
                config.particle_count,
                config.particle_count,
                ASH_PROFILE,
                drive,
            ),
        }
    }

    pub fn update(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        self.elapsed += dt;
        self.pool.advance(dt, self.drive);
    }

    /// Whether the burst has outlived the longest particle lifetime it can
    /// sample. Past this point every particle has respawned at least once
    /// and the visual has served its purpose; the coordinator prunes it.
    pub fn is_finished(&self) -> bool {
        self.elapsed >= ASH_PROFILE.lifetime.1
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn particles(&self) -> &ParticlePool {
        &self.pool
    }
}
