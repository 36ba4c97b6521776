//! Hazard interaction coordinator
//!
//! [`HazardSimulation`] owns the live collections of fire hazards, smoke
//! emissions, and ash emissions, and runs the per-frame tick: every fire
//! updates first, then every emission, then the suppression scan resolves
//! smoke-against-fire collisions on the current frame's positions, and
//! finally expired emissions are pruned. Everything is single-threaded and
//! synchronous; the external driver calls [`update`](HazardSimulation::update)
//! once per rendered frame with that frame's delta-time.

use crate::core_types::{AshConfig, FireConfig, SmokeConfig, Vec3};
use crate::effects::{AshEmission, FireHazard, SmokeEmission};
use rand::Rng;
use tracing::{debug, info};

/// Collision radius per unit of fire intensity: a fire at intensity `i` is
/// suppressible within `2i` meters of a smoke emission's origin.
const COLLISION_RADIUS_PER_INTENSITY: f32 = 2.0;

/// Maximum random offset of a spawned ash burst from its fire's position.
const ASH_SCATTER: f32 = 0.5;

/// The world object coordinating all live hazards and emissions.
///
/// Replaces the source material's process-global effect arrays: multiple
/// independent simulations can coexist, and tests construct throwaway
/// worlds freely.
#[derive(Debug)]
pub struct HazardSimulation {
    fires: Vec<FireHazard>,
    smoke: Vec<SmokeEmission>,
    ash: Vec<AshEmission>,
    smoke_config: SmokeConfig,
    ash_config: AshConfig,
    /// Sum of spawn-time intensity over every fire ever created; the
    /// denominator of the aggregate strength readout.
    intensity_budget: f32,
    simulation_time: f32,
}

impl Default for HazardSimulation {
    fn default() -> Self {
        Self::new(SmokeConfig::default(), AshConfig::default())
    }
}

impl HazardSimulation {
    pub fn new(smoke_config: SmokeConfig, ash_config: AshConfig) -> Self {
        HazardSimulation {
            fires: Vec::new(),
            smoke: Vec::new(),
            ash: Vec::new(),
            smoke_config,
            ash_config,
            intensity_budget: 0.0,
            simulation_time: 0.0,
        }
    }

    /// Create a fire hazard at `position`. Its spawn-time intensity joins
    /// the aggregate strength budget permanently, so extinguishing it later
    /// drives the readout down rather than shrinking the denominator.
    pub fn spawn_fire(&mut self, position: Vec3, config: FireConfig) -> usize {
        let fire = FireHazard::new(position, config);
        self.intensity_budget += fire.current_intensity();
        debug!(position = ?position, "fire hazard spawned");
        self.fires.push(fire);
        self.fires.len() - 1
    }

    /// Handle a suppressant-discharge trigger: create a smoke emission a
    /// fixed offset in front of `origin` along `facing`.
    pub fn discharge_suppressant(&mut self, origin: Vec3, facing: Vec3) {
        let direction = facing
            .try_normalize(1e-6)
            .unwrap_or_else(|| Vec3::new(0.0, 1.0, 0.0));
        let position = origin + direction * self.smoke_config.discharge_offset;
        self.smoke
            .push(SmokeEmission::new(position, &self.smoke_config));
    }

    /// Apply an external damage event to the fire at `index`.
    ///
    /// Returns `true` if the hit fully suppressed the fire, in which case
    /// it has been removed from the live set. Out-of-range indices are
    /// ignored.
    pub fn damage_fire(&mut self, index: usize, amount: f32) -> bool {
        let Some(fire) = self.fires.get_mut(index) else {
            return false;
        };
        if fire.take_damage(amount) {
            info!(position = ?fire.position(), "fire hazard fully suppressed");
            self.fires.swap_remove(index);
            return true;
        }
        false
    }

    /// One simulation tick.
    ///
    /// Ordering: fires, then smoke, then ash, then the suppression scan
    /// (which sees this frame's positions), then pruning of expired smoke
    /// and finished ash. Negative delta-times are clamped to zero to keep
    /// age and growth monotonic.
    pub fn update(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        self.simulation_time += dt;

        for fire in &mut self.fires {
            fire.update(dt);
        }
        for smoke in &mut self.smoke {
            smoke.update(dt);
        }
        for ash in &mut self.ash {
            ash.update(dt);
        }

        self.resolve_suppression();

        self.smoke.retain(|smoke| !smoke.is_expired());
        self.ash.retain(|ash| !ash.is_finished());
    }

    /// O(smoke × fire) collision scan, acceptable at gameplay counts.
    ///
    /// Each smoke emission tests its *origin* position against every live
    /// fire. Fires are iterated in reverse index order so removal keeps the
    /// indices of not-yet-visited fires valid.
    fn resolve_suppression(&mut self) {
        let mut rng = rand::rng();

        for smoke in &self.smoke {
            let smoke_position = smoke.position();

            for i in (0..self.fires.len()).rev() {
                let radius =
                    COLLISION_RADIUS_PER_INTENSITY * self.fires[i].current_intensity();
                let distance = (smoke_position - self.fires[i].position()).norm();
                if distance >= radius {
                    continue;
                }

                // 1.0 = direct hit, approaching 0.0 at the radius edge
                let impact = 1.0 - distance / radius;
                self.fires[i].suppress(impact);

                if rng.random_bool(f64::from(impact.clamp(0.0, 1.0))) {
                    let scatter = Vec3::new(
                        rng.random_range(-ASH_SCATTER..ASH_SCATTER),
                        rng.random_range(-ASH_SCATTER..ASH_SCATTER),
                        0.0,
                    );
                    let ash_position = self.fires[i].position() + scatter;
                    self.ash
                        .push(AshEmission::new(ash_position, &self.ash_config));
                }

                if self.fires[i].is_smothered() {
                    info!(position = ?self.fires[i].position(), "fire hazard extinguished");
                    self.fires.swap_remove(i);
                }
            }
        }
    }

    /// Aggregate hazard strength for the HUD layer, in percent.
    ///
    /// `round(Σ current intensity / Σ spawn-time intensity × 100)`, clamped
    /// to 100 since growth can push a fire past its spawn-time strength.
    /// Reads 0 once every fire is extinguished; the external session layer
    /// treats that as the win condition.
    pub fn hazard_strength(&self) -> u32 {
        if self.intensity_budget <= 0.0 || self.fires.is_empty() {
            return 0;
        }
        let total: f32 = self.fires.iter().map(FireHazard::current_intensity).sum();
        ((total / self.intensity_budget * 100.0).round() as u32).min(100)
    }

    pub fn fires(&self) -> &[FireHazard] {
        &self.fires
    }

    pub fn smoke(&self) -> &[SmokeEmission] {
        &self.smoke
    }

    pub fn ash(&self) -> &[AshEmission] {
        &self.ash
    }

    pub fn simulation_time(&self) -> f32 {
        self.simulation_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discharge_places_smoke_along_facing() {
        let mut sim = HazardSimulation::default();
        sim.discharge_suppressant(Vec3::zeros(), Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(sim.smoke().len(), 1);
        let expected = SmokeConfig::default().discharge_offset;
        assert!((sim.smoke()[0].position().x - expected).abs() < 1e-5);
    }

    #[test]
    fn test_degenerate_facing_falls_back_to_a_unit_direction() {
        let mut sim = HazardSimulation::default();
        sim.discharge_suppressant(Vec3::zeros(), Vec3::zeros());
        let offset = sim.smoke()[0].position().norm();
        assert!((offset - SmokeConfig::default().discharge_offset).abs() < 1e-5);
    }

    #[test]
    fn test_expired_smoke_is_pruned_after_the_scan() {
        let mut sim = HazardSimulation::default();
        sim.discharge_suppressant(Vec3::zeros(), Vec3::new(1.0, 0.0, 0.0));
        let lifespan = SmokeConfig::default().lifespan;
        sim.update(lifespan + 0.1);
        assert!(sim.smoke().is_empty());
    }

    #[test]
    fn test_damage_fire_removes_on_full_suppression() {
        let mut sim = HazardSimulation::default();
        sim.spawn_fire(Vec3::zeros(), FireConfig::default());
        assert!(!sim.damage_fire(0, 10.0));
        assert_eq!(sim.fires().len(), 1);
        assert!(sim.damage_fire(0, 1.0e6));
        assert!(sim.fires().is_empty());
        // Stale indices are ignored, not a panic
        assert!(!sim.damage_fire(0, 10.0));
    }
}
