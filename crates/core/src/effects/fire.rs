//! Fire hazard: growth, damage, recovery, and particle/light output
//!
//! A fire hazard owns a particle pool and a light pair, and runs a small
//! health/intensity state machine: it grows toward its intensity ceiling by
//! default, damage knocks health and everything derived from it down, and
//! after a quiet delay health restores at a fixed rate. A fire never removes
//! itself; the coordinator disposes it when health reaches zero or
//! suppression smothers it.

use crate::core_types::{FireConfig, Vec3};
use crate::effects::light::FireLights;
use crate::particles::{EmitterDrive, ParticlePool, SpawnProfile, Turbulence};
use tracing::debug;

/// Intensity floor; fires never render dimmer than this while alive.
pub const INTENSITY_FLOOR: f32 = 0.5;

/// A suppressed fire below this intensity is smothered. Checked by the
/// coordinator immediately after a suppression hit, before the floor
/// re-clamps.
pub const MIN_LIVE_INTENSITY: f32 = 0.3;

/// A fire whose base speed decays below this is smothered.
pub const MIN_LIVE_SPEED: f32 = 0.5;

/// Intensity multiplier of a direct suppression hit; grazing hits approach
/// 0.95, direct hits 0.85.
const SUPPRESS_BASE: f32 = 0.95;
const SUPPRESS_IMPACT_SCALE: f32 = 0.1;

/// Monotonic speed loss per suppression hit.
const SUPPRESS_SPEED_FACTOR: f32 = 0.98;

/// Flame particle spawn shape. Speeds/sizes are multipliers of the fire's
/// current base speed and size; the auxiliary scalar is a normalized flame
/// temperature that cools as the particle rises.
const FIRE_PROFILE: SpawnProfile = SpawnProfile {
    spread_radius: 0.45,
    spread_height: 0.9,
    radial_speed: (0.15, 0.45),
    vertical_speed: (0.55, 1.1),
    lifetime: (0.6, 1.4),
    size: (0.7, 1.3),
    aux: (0.7, 1.0),
    aux_decay: 0.92,
    turbulence: Some(Turbulence {
        frequency: 6.0,
        strength: 0.25,
    }),
};

/// A stateful fire hazard instance.
#[derive(Debug, Clone)]
pub struct FireHazard {
    position: Vec3,
    config: FireConfig,
    current_health: f32,
    current_intensity: f32,
    /// Current base particle speed; shrinks under damage and suppression.
    base_speed: f32,
    /// Current base particle size; shrinks under damage.
    particle_size: f32,
    is_recovering: bool,
    /// Seconds since the last damage event; gates recovery.
    time_since_damage: f32,
    /// Elapsed simulation time, drives the light flicker phase.
    elapsed: f32,
    /// Particle count ceiling derived from the health fraction.
    health_based_particle_count: usize,
    pool: ParticlePool,
    lights: FireLights,
}

impl FireHazard {
    /// Create a fire at `position`. It spawns at full health and intensity
    /// 1.0, with `base_particle_count` live particles.
    pub fn new(position: Vec3, config: FireConfig) -> Self {
        let intensity = 1.0f32.clamp(INTENSITY_FLOOR, config.max_intensity);
        let drive = EmitterDrive {
            intensity_scale: intensity,
            speed: config.base_speed,
            size: config.particle_size,
        };
        let pool = ParticlePool::new(
            position,
            config.max_particle_count,
            config.base_particle_count,
            FIRE_PROFILE,
            drive,
        );
        FireHazard {
            position,
            current_health: config.max_health,
            current_intensity: intensity,
            base_speed: config.base_speed,
            particle_size: config.particle_size,
            is_recovering: false,
            // Fresh fires are immediately eligible for recovery bookkeeping
            time_since_damage: config.recovery_delay,
            elapsed: 0.0,
            health_based_particle_count: config.max_particle_count,
            pool,
            lights: FireLights::new(position),
            config,
        }
    }

    /// Per-frame update: recovery, intensity growth, particle population,
    /// particle kinematics, lights, in that order.
    pub fn update(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        self.elapsed += dt;
        self.time_since_damage += dt;

        self.tick_recovery(dt);

        // Intensity grows toward a ceiling scaled by the health fraction;
        // suppression losses have to be regrown through.
        let ceiling = (self.config.max_intensity * self.health_fraction()).max(INTENSITY_FLOOR);
        self.current_intensity = (self.current_intensity + self.config.growth_rate * dt)
            .clamp(INTENSITY_FLOOR, ceiling);

        let target = ((self.health_based_particle_count as f32) * self.current_intensity
            / self.config.max_intensity)
            .floor() as usize;
        let target = target.clamp(
            self.config.base_particle_count,
            self.config.max_particle_count,
        );
        let drive = self.drive();
        self.pool
            .grow(target, self.config.particle_growth_rate, dt, drive);
        self.pool.advance(dt, drive);

        self.lights
            .update(self.position, self.current_intensity, self.elapsed);
    }

    /// Apply a damage event.
    ///
    /// `amount <= 0` changes nothing. Otherwise the effective damage
    /// (reduced by the configured resistance) comes off health, recovery is
    /// cancelled, and everything derived from health is recomputed: the
    /// particle-count ceiling, the intensity (lowered to the health
    /// fraction's ceiling when it exceeds it), and a slight shrink of
    /// particle size and base speed: a damaged fire is both dimmer and
    /// tireder.
    ///
    /// Returns `true` exactly when this call first brings health to zero.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        if amount <= 0.0 {
            return false;
        }
        let previous_health = self.current_health;
        let effective = amount * (1.0 - self.config.damage_resistance);
        self.current_health = (self.current_health - effective).max(0.0);
        self.is_recovering = false;
        self.time_since_damage = 0.0;

        self.refresh_health_derived();
        let shrink = 0.95 + 0.05 * self.health_fraction();
        self.particle_size *= shrink;
        self.base_speed *= shrink;

        debug!(
            health = self.current_health,
            intensity = self.current_intensity,
            "fire hazard damaged"
        );
        previous_health > 0.0 && self.current_health == 0.0
    }

    /// Suppression hit from the interaction coordinator. `impact` is 1.0
    /// for a direct hit, approaching 0.0 at the edge of the collision
    /// radius. Intensity is multiplied down and base speed decays
    /// monotonically, so sustained contact eventually smothers the fire
    /// even though the intensity floor re-clamps between frames.
    pub(crate) fn suppress(&mut self, impact: f32) {
        self.current_intensity *= SUPPRESS_BASE - impact * SUPPRESS_IMPACT_SCALE;
        self.base_speed *= SUPPRESS_SPEED_FACTOR;
    }

    /// Whether suppression has pushed this fire past the point of survival.
    pub fn is_smothered(&self) -> bool {
        self.current_intensity < MIN_LIVE_INTENSITY || self.base_speed < MIN_LIVE_SPEED
    }

    fn tick_recovery(&mut self, dt: f32) {
        if self.current_health >= self.config.max_health {
            self.is_recovering = false;
            return;
        }
        if self.time_since_damage < self.config.recovery_delay {
            return;
        }
        if !self.is_recovering {
            self.is_recovering = true;
            debug!(health = self.current_health, "fire hazard recovering");
        }
        self.current_health =
            (self.current_health + self.config.recovery_rate * dt).min(self.config.max_health);
        self.refresh_health_derived();
    }

    /// Recompute the particle-count ceiling and intensity from the health
    /// fraction. The intensity recompute only ever lowers: a fire below its
    /// health-scaled ceiling keeps its current value and must regrow
    /// through any loss at `growth_rate`, never snap back up.
    fn refresh_health_derived(&mut self) {
        let fraction = self.health_fraction();
        let span = self.config.max_particle_count - self.config.base_particle_count;
        self.health_based_particle_count =
            self.config.base_particle_count + (span as f32 * fraction) as usize;
        let ceiling = (self.config.max_intensity * fraction).max(INTENSITY_FLOOR);
        self.current_intensity = self.current_intensity.min(ceiling);
    }

    fn health_fraction(&self) -> f32 {
        if self.config.max_health <= 0.0 {
            return 0.0;
        }
        self.current_health / self.config.max_health
    }

    fn drive(&self) -> EmitterDrive {
        EmitterDrive {
            intensity_scale: self.current_intensity,
            speed: self.base_speed,
            size: self.particle_size,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn current_intensity(&self) -> f32 {
        self.current_intensity
    }

    pub fn max_intensity(&self) -> f32 {
        self.config.max_intensity
    }

    pub fn current_health(&self) -> f32 {
        self.current_health
    }

    pub fn max_health(&self) -> f32 {
        self.config.max_health
    }

    pub fn is_recovering(&self) -> bool {
        self.is_recovering
    }

    pub fn base_speed(&self) -> f32 {
        self.base_speed
    }

    pub fn particles(&self) -> &ParticlePool {
        &self.pool
    }

    pub fn lights(&self) -> &FireLights {
        &self.lights
    }
}
