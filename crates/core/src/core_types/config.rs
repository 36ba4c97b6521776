//! Hand-tuned configuration presets for hazards and emissions
//!
//! All numbers here are gameplay constants: the simulation is a
//! performance-bounded approximation tuned for visual plausibility and
//! pacing, not a physical combustion model. Shape constants that describe
//! how particles are resampled (spread profiles, jitter ranges) live next
//! to each effect; this module holds the knobs a scenario author reaches
//! for.

use serde::{Deserialize, Serialize};

/// Configuration for a fire hazard instance.
///
/// Health and intensity drive everything derived: particle population,
/// spawn spread, light output, and the aggregate strength read by the HUD
/// layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FireConfig {
    /// Maximum (and starting) health.
    pub max_health: f32,
    /// Fraction of incoming damage absorbed, in `[0, 1)`.
    pub damage_resistance: f32,
    /// Intensity ceiling. Freshly spawned fires start at intensity 1.0 and
    /// grow toward this.
    pub max_intensity: f32,
    /// Intensity gained per second while growing.
    pub growth_rate: f32,
    /// Particle count at spawn; the pool never drops below this while the
    /// fire is alive.
    pub base_particle_count: usize,
    /// Particle pool capacity; population grows toward this at full health
    /// and intensity.
    pub max_particle_count: usize,
    /// Pool growth rate in particles per second.
    pub particle_growth_rate: f32,
    /// Seconds without damage before health starts restoring.
    pub recovery_delay: f32,
    /// Health restored per second while recovering.
    pub recovery_rate: f32,
    /// Base particle speed in m/s. Shrinks under damage and suppression;
    /// a fire whose speed falls far enough is considered smothered.
    pub base_speed: f32,
    /// Base particle size in world units. Shrinks under damage.
    pub particle_size: f32,
}

impl Default for FireConfig {
    fn default() -> Self {
        FireConfig {
            max_health: 100.0,
            damage_resistance: 0.15,
            max_intensity: 2.5,
            growth_rate: 0.05,
            base_particle_count: 60,
            max_particle_count: 180,
            particle_growth_rate: 12.0,
            recovery_delay: 5.0,
            recovery_rate: 6.0,
            base_speed: 1.6,
            particle_size: 0.35,
        }
    }
}

/// Configuration for a suppressant (smoke) emission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmokeConfig {
    /// Number of particles in the burst; the pool is fully active from
    /// creation.
    pub particle_count: usize,
    /// Total lifespan of the emission in seconds. The owner removes the
    /// emission once this elapses; the emission never removes itself.
    pub lifespan: f32,
    /// Base particle speed in m/s, mostly outward with a mild upward bias.
    pub speed: f32,
    /// Base particle size in world units.
    pub particle_size: f32,
    /// How far in front of the discharge origin the emission spawns, along
    /// the facing direction.
    pub discharge_offset: f32,
}

impl Default for SmokeConfig {
    fn default() -> Self {
        SmokeConfig {
            particle_count: 80,
            lifespan: 2.5,
            speed: 2.2,
            particle_size: 0.5,
            discharge_offset: 1.2,
        }
    }
}

/// Configuration for an ash emission, the decorative byproduct of a
/// successful suppression hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AshConfig {
    /// Number of particles in the burst.
    pub particle_count: usize,
    /// Base particle speed in m/s; drift is downward.
    pub speed: f32,
    /// Base particle size in world units.
    pub particle_size: f32,
}

impl Default for AshConfig {
    fn default() -> Self {
        AshConfig {
            particle_count: 40,
            speed: 0.7,
            particle_size: 0.12,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_within_documented_bounds() {
        let fire = FireConfig::default();
        assert!(fire.damage_resistance >= 0.0 && fire.damage_resistance < 1.0);
        assert!(fire.base_particle_count <= fire.max_particle_count);
        assert!(fire.max_intensity >= 1.0);
        // Smothered-speed threshold is 0.5; a default fire must start live
        assert!(fire.base_speed > 0.5);

        let smoke = SmokeConfig::default();
        assert!(smoke.lifespan > 0.0);
        assert!(smoke.particle_count > 0);

        let ash = AshConfig::default();
        assert!(ash.particle_count > 0);
    }
}
