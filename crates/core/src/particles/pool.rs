//! Fixed-capacity, structure-of-arrays particle pool
//!
//! Every effect kind (fire, smoke, ash) owns one pool. The pool is a
//! contiguous arena sized once at construction and never resized: expired
//! particles are respawned in place rather than removed, so the slot count
//! seen by the rendering backend is stable frame to frame. An active-count
//! cursor marks the live prefix; growth advances the cursor at a fixed
//! particles-per-second rate and shrinking retracts it immediately.
//!
//! Per-particle attributes are stored as parallel arrays (positions,
//! velocities, sizes, normalized ages, target lifetimes, one effect-specific
//! auxiliary scalar: flame temperature for fire, opacity for smoke, unused
//! for ash).

use crate::core_types::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Sinusoidal horizontal perturbation applied while integrating fire
/// particles. A function of elapsed pool time and particle height above the
/// origin, evaluated independently per horizontal axis; it is not
/// accumulated into the stored velocity, so the sway stays bounded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Turbulence {
    /// Oscillation frequency in rad/s.
    pub frequency: f32,
    /// Peak horizontal velocity contribution in m/s.
    pub strength: f32,
}

/// How a pool resamples an expired or newly enabled particle.
///
/// Speeds and sizes are multipliers of the owning effect's current base
/// values (see [`EmitterDrive`]), so a damaged fire with a shrunken base
/// speed emits slower particles without the profile changing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnProfile {
    /// Horizontal polar spread radius in meters, scaled by the drive's
    /// intensity scale at spawn time.
    pub spread_radius: f32,
    /// Vertical spawn band in meters above the origin, scaled like the
    /// radius.
    pub spread_height: f32,
    /// Outward speed multiplier range (of `drive.speed`).
    pub radial_speed: (f32, f32),
    /// Vertical speed multiplier range (of `drive.speed`); negative values
    /// drift downward.
    pub vertical_speed: (f32, f32),
    /// Target lifetime range in seconds. Both bounds must be positive.
    pub lifetime: (f32, f32),
    /// Size jitter multiplier range (of `drive.size`).
    pub size: (f32, f32),
    /// Initial auxiliary scalar range.
    pub aux: (f32, f32),
    /// Per-second multiplicative decay of the auxiliary scalar
    /// (1.0 = no decay).
    pub aux_decay: f32,
    /// Optional horizontal sway; fire only.
    pub turbulence: Option<Turbulence>,
}

/// Per-frame inputs from the owning effect.
///
/// Fires feed their live intensity/speed/size in here every frame; smoke
/// and ash pass constants from their configs.
#[derive(Debug, Clone, Copy)]
pub struct EmitterDrive {
    /// Scales the spawn spread (a more intense fire is physically larger).
    pub intensity_scale: f32,
    /// Current base particle speed in m/s.
    pub speed: f32,
    /// Current base particle size in world units.
    pub size: f32,
}

/// Fixed-capacity particle arena with respawn-in-place semantics.
///
/// Invariants:
/// - slots `0..active_count` are live, slots beyond are untouched until
///   growth enables them;
/// - normalized ages stay in `[0, 1)` after every [`advance`](Self::advance);
/// - capacity never changes after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticlePool {
    origin: Vec3,
    profile: SpawnProfile,
    positions: Vec<Vec3>,
    velocities: Vec<Vec3>,
    sizes: Vec<f32>,
    /// Normalized age in `[0, 1)`; reaching 1.0 triggers an in-place
    /// respawn.
    ages: Vec<f32>,
    /// Target lifetime in seconds, sampled per particle.
    lifetimes: Vec<f32>,
    /// Effect-specific scalar (temperature, opacity).
    aux: Vec<f32>,
    active: usize,
    /// Fractional particles accumulated by rate-limited growth.
    growth_carry: f32,
    /// Elapsed pool time, the turbulence phase.
    elapsed: f32,
}

/// Uniform sample from `[lo, hi)`, degrading to `lo` when the range is
/// empty so zero-jitter profiles don't panic.
fn sample(rng: &mut impl Rng, (lo, hi): (f32, f32)) -> f32 {
    if hi > lo {
        rng.random_range(lo..hi)
    } else {
        lo
    }
}

impl ParticlePool {
    /// Create a pool with `capacity` slots, seeding the first
    /// `initial_active` with randomized starting ages so the first respawn
    /// wave is not visibly synchronized.
    pub fn new(
        origin: Vec3,
        capacity: usize,
        initial_active: usize,
        profile: SpawnProfile,
        drive: EmitterDrive,
    ) -> Self {
        let mut pool = ParticlePool {
            origin,
            profile,
            positions: vec![Vec3::zeros(); capacity],
            velocities: vec![Vec3::zeros(); capacity],
            sizes: vec![0.0; capacity],
            ages: vec![0.0; capacity],
            lifetimes: vec![1.0; capacity],
            aux: vec![0.0; capacity],
            active: initial_active.min(capacity),
            growth_carry: 0.0,
            elapsed: 0.0,
        };
        for i in 0..pool.active {
            pool.reset_particle(i, true, drive);
        }
        pool
    }

    /// Resample one particle: polar position offset within the spread
    /// profile, outward+vertical velocity, target lifetime, size, and
    /// auxiliary scalar. `initial` seeds a randomized starting age instead
    /// of 0.
    fn reset_particle(&mut self, index: usize, initial: bool, drive: EmitterDrive) {
        let mut rng = rand::rng();

        let angle = rng.random_range(0.0..std::f32::consts::TAU);
        let scale = drive.intensity_scale.max(0.05);
        let radius = sample(&mut rng, (0.0, self.profile.spread_radius * scale));
        let height = sample(&mut rng, (0.0, self.profile.spread_height * scale));
        self.positions[index] =
            self.origin + Vec3::new(angle.cos() * radius, angle.sin() * radius, height);

        let outward = Vec3::new(angle.cos(), angle.sin(), 0.0);
        let radial = drive.speed * sample(&mut rng, self.profile.radial_speed);
        let vertical = drive.speed * sample(&mut rng, self.profile.vertical_speed);
        self.velocities[index] = outward * radial + Vec3::new(0.0, 0.0, vertical);

        self.lifetimes[index] = sample(&mut rng, self.profile.lifetime).max(0.05);
        self.sizes[index] = drive.size * sample(&mut rng, self.profile.size);
        self.aux[index] = sample(&mut rng, self.profile.aux);
        self.ages[index] = if initial {
            rng.random_range(0.0..1.0)
        } else {
            0.0
        };
    }

    /// Advance every live particle by `dt` seconds.
    ///
    /// A particle whose normalized age reaches 1.0 is respawned in place at
    /// age 0 instead of integrating; everything else drifts by its velocity
    /// (plus the transient turbulence term, if the profile has one) and
    /// decays its auxiliary scalar.
    pub fn advance(&mut self, dt: f32, drive: EmitterDrive) {
        let dt = dt.max(0.0);
        self.elapsed += dt;
        let aux_scale = self.profile.aux_decay.powf(dt);

        for i in 0..self.active {
            let age = self.ages[i] + dt / self.lifetimes[i];
            if age >= 1.0 {
                self.reset_particle(i, false, drive);
                continue;
            }
            self.ages[i] = age;

            let mut velocity = self.velocities[i];
            if let Some(turbulence) = self.profile.turbulence {
                let height = self.positions[i].z - self.origin.z;
                velocity.x += (self.elapsed * turbulence.frequency + height * 3.1).sin()
                    * turbulence.strength;
                velocity.y += (self.elapsed * turbulence.frequency * 1.18 + height * 2.3).cos()
                    * turbulence.strength;
            }
            self.positions[i] += velocity * dt;
            self.aux[i] *= aux_scale;
        }
    }

    /// Move the active count toward `target`.
    ///
    /// Growth is rate-limited to `rate` particles per second with a
    /// fractional carry; newly enabled slots are immediately resampled with
    /// a randomized starting age. Shrinking (damage, suppression) takes
    /// effect immediately.
    pub fn grow(&mut self, target: usize, rate: f32, dt: f32, drive: EmitterDrive) {
        let target = target.min(self.capacity());
        if target <= self.active {
            self.active = target;
            self.growth_carry = 0.0;
            return;
        }

        self.growth_carry += rate * dt.max(0.0);
        let step = self.growth_carry.floor() as usize;
        self.growth_carry -= step as f32;

        let new_active = (self.active + step).min(target);
        for i in self.active..new_active {
            self.reset_particle(i, true, drive);
        }
        self.active = new_active;
    }

    pub fn capacity(&self) -> usize {
        self.positions.len()
    }

    /// Number of live particles.
    pub fn active_count(&self) -> usize {
        self.active
    }

    /// Live particle positions (`0..active_count`).
    pub fn positions(&self) -> &[Vec3] {
        &self.positions[..self.active]
    }

    /// Live particle sizes.
    pub fn sizes(&self) -> &[f32] {
        &self.sizes[..self.active]
    }

    /// Live normalized ages, each in `[0, 1)`.
    pub fn ages(&self) -> &[f32] {
        &self.ages[..self.active]
    }

    /// Live auxiliary scalars (temperature or opacity).
    pub fn aux(&self) -> &[f32] {
        &self.aux[..self.active]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_profile(turbulence: Option<Turbulence>) -> SpawnProfile {
        SpawnProfile {
            spread_radius: 0.5,
            spread_height: 1.0,
            radial_speed: (0.2, 0.5),
            vertical_speed: (0.5, 1.0),
            lifetime: (0.5, 1.5),
            size: (0.7, 1.3),
            aux: (0.6, 1.0),
            aux_decay: 0.5,
            turbulence,
        }
    }

    fn test_drive() -> EmitterDrive {
        EmitterDrive {
            intensity_scale: 1.0,
            speed: 1.5,
            size: 0.3,
        }
    }

    #[test]
    fn test_ages_stay_normalized() {
        let mut pool = ParticlePool::new(Vec3::zeros(), 64, 64, test_profile(None), test_drive());
        // Large and small steps alike must leave every age in [0, 1)
        for _ in 0..200 {
            pool.advance(0.13, test_drive());
            for &age in pool.ages() {
                assert!((0.0..1.0).contains(&age), "age out of range: {age}");
            }
        }
        // A step longer than any lifetime forces a respawn of everything
        pool.advance(10.0, test_drive());
        for &age in pool.ages() {
            assert!((0.0..1.0).contains(&age));
        }
    }

    #[test]
    fn test_growth_is_rate_limited_and_shrink_immediate() {
        let mut pool = ParticlePool::new(Vec3::zeros(), 100, 10, test_profile(None), test_drive());
        assert_eq!(pool.active_count(), 10);

        // 20 particles/sec for half a second enables ~10 more
        pool.grow(100, 20.0, 0.5, test_drive());
        assert_eq!(pool.active_count(), 20);

        // Fractional carry accumulates across small steps
        for _ in 0..10 {
            pool.grow(100, 5.0, 0.1, test_drive());
        }
        assert_eq!(pool.active_count(), 25);

        // Shrink is not rate-limited
        pool.grow(4, 20.0, 0.1, test_drive());
        assert_eq!(pool.active_count(), 4);
    }

    #[test]
    fn test_growth_never_exceeds_capacity() {
        let mut pool = ParticlePool::new(Vec3::zeros(), 16, 0, test_profile(None), test_drive());
        pool.grow(1000, 1.0e6, 1.0, test_drive());
        assert_eq!(pool.active_count(), 16);
        assert_eq!(pool.capacity(), 16);
    }

    #[test]
    fn test_spawn_positions_within_spread() {
        let origin = Vec3::new(3.0, -2.0, 1.0);
        let pool = ParticlePool::new(origin, 128, 128, test_profile(None), test_drive());
        for position in pool.positions() {
            let offset = position - origin;
            let horizontal = (offset.x * offset.x + offset.y * offset.y).sqrt();
            assert!(horizontal <= 0.5 + 1e-5);
            assert!(offset.z >= 0.0 && offset.z <= 1.0 + 1e-5);
        }
    }

    #[test]
    fn test_aux_decays_multiplicatively() {
        let mut pool = ParticlePool::new(Vec3::zeros(), 32, 32, test_profile(None), test_drive());
        let before: Vec<f32> = pool.aux().to_vec();
        let ages: Vec<f32> = pool.ages().to_vec();
        pool.advance(0.1, test_drive());
        for i in 0..32 {
            // Skip particles that respawned during the step
            if pool.ages()[i] > ages[i] {
                assert!(pool.aux()[i] < before[i]);
            }
        }
    }

    #[test]
    fn test_turbulence_does_not_accumulate_into_velocity() {
        let turbulence = Some(Turbulence {
            frequency: 6.0,
            strength: 5.0,
        });
        let mut pool = ParticlePool::new(Vec3::zeros(), 8, 8, test_profile(turbulence), test_drive());
        // Stored velocity magnitudes are bounded by the spawn ranges no
        // matter how long the sway runs
        let max_speed = 1.5 * (0.5f32.powi(2) + 1.0f32.powi(2)).sqrt() + 1e-4;
        for _ in 0..100 {
            pool.advance(0.016, test_drive());
        }
        for i in 0..pool.active_count() {
            assert!(pool.velocities[i].norm() <= max_speed);
        }
    }

    #[test]
    fn test_zero_dt_is_a_no_op_for_positions() {
        let mut pool = ParticlePool::new(Vec3::zeros(), 16, 16, test_profile(None), test_drive());
        let before: Vec<Vec3> = pool.positions().to_vec();
        pool.advance(0.0, test_drive());
        assert_eq!(pool.positions(), &before[..]);
        // Negative dt is clamped, not integrated backwards
        pool.advance(-1.0, test_drive());
        assert_eq!(pool.positions(), &before[..]);
    }
}
