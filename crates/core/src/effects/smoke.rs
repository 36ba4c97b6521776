//! Suppressant (smoke) emission
//!
//! A time-bounded particle burst created when the external trigger layer
//! discharges a suppressant. Particles drift outward from the origin with a
//! mild upward bias and fading opacity, self-cycling through the pool's
//! respawn mechanics for as long as the emission lives. The emission never
//! removes itself: it only reports expiry, and its owner (the coordinator)
//! disposes it.

use crate::core_types::{SmokeConfig, Vec3};
use crate::particles::{EmitterDrive, ParticlePool, SpawnProfile};

/// Smoke spawn shape: strong outward drift, mild lift, opacity in the
/// auxiliary slot with a fast multiplicative fade.
const SMOKE_PROFILE: SpawnProfile = SpawnProfile {
    spread_radius: 0.3,
    spread_height: 0.4,
    radial_speed: (0.6, 1.0),
    vertical_speed: (0.15, 0.4),
    lifetime: (0.8, 1.6),
    size: (0.8, 1.4),
    aux: (0.5, 0.9),
    aux_decay: 0.4,
    turbulence: None,
};

/// One suppressant burst.
#[derive(Debug, Clone)]
pub struct SmokeEmission {
    position: Vec3,
    lifespan: f32,
    elapsed: f32,
    drive: EmitterDrive,
    pool: ParticlePool,
}

impl SmokeEmission {
    /// Create a burst at `position` with its full particle complement
    /// already live.
    pub fn new(position: Vec3, config: &SmokeConfig) -> Self {
        let drive = EmitterDrive {
            intensity_scale: 1.0,
            speed: config.speed,
            size: config.particle_size,
        };
        SmokeEmission {
            position,
            lifespan: config.lifespan,
            elapsed: 0.0,
            drive,
            pool: ParticlePool::new(
                position,
                config.particle_count,
                config.particle_count,
                SMOKE_PROFILE,
                drive,
            ),
        }
    }

    /// Advance the burst clock and particle kinematics.
    pub fn update(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        self.elapsed += dt;
        self.pool.advance(dt, self.drive);
    }

    /// Whether the fixed lifespan has elapsed. The owner is responsible for
    /// disposal; an expired emission keeps cycling if it keeps being
    /// updated.
    pub fn is_expired(&self) -> bool {
        self.elapsed >= self.lifespan
    }

    /// Emission origin in world space. Suppression collision tests use this
    /// position, not per-particle positions.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn particles(&self) -> &ParticlePool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expires_after_lifespan() {
        let config = SmokeConfig {
            lifespan: 1.0,
            ..SmokeConfig::default()
        };
        let mut smoke = SmokeEmission::new(Vec3::zeros(), &config);
        assert!(!smoke.is_expired());
        for _ in 0..9 {
            smoke.update(0.1);
        }
        assert!(!smoke.is_expired());
        smoke.update(0.11);
        assert!(smoke.is_expired());
    }

    #[test]
    fn test_burst_is_fully_active_from_creation() {
        let config = SmokeConfig::default();
        let smoke = SmokeEmission::new(Vec3::zeros(), &config);
        assert_eq!(smoke.particles().active_count(), config.particle_count);
    }

    #[test]
    fn test_opacity_fades_while_alive() {
        let mut smoke = SmokeEmission::new(Vec3::zeros(), &SmokeConfig::default());
        let total_before: f32 = smoke.particles().aux().iter().sum();
        smoke.update(0.2);
        let total_after: f32 = smoke.particles().aux().iter().sum();
        // Respawns resample opacity upward, but the bulk of the burst fades
        assert!(total_after < total_before);
    }
}
