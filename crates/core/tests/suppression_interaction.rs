//! Integration tests for the smoke-against-fire suppression scan
//!
//! These exercise the coordinator through its public API only: spawn
//! fires, discharge suppressant, tick, and observe. Collision geometry is
//! arranged via the discharge origin/facing so the smoke emission's origin
//! lands at a known distance from the fire.

use approx::assert_relative_eq;
use hazard_sim_core::{AshConfig, FireConfig, HazardSimulation, SmokeConfig, Vec3};

/// Discharge so the smoke emission's origin lands exactly at `target`.
fn discharge_at(sim: &mut HazardSimulation, offset: f32, target: Vec3) {
    let facing = Vec3::new(1.0, 0.0, 0.0);
    sim.discharge_suppressant(target - facing * offset, facing);
}

fn sim_with_default_configs() -> (HazardSimulation, f32) {
    let smoke_config = SmokeConfig::default();
    let offset = smoke_config.discharge_offset;
    (
        HazardSimulation::new(smoke_config, AshConfig::default()),
        offset,
    )
}

#[test]
fn direct_geometry_hit_applies_exact_intensity_factor() {
    let (mut sim, offset) = sim_with_default_configs();
    sim.spawn_fire(Vec3::zeros(), FireConfig::default());
    assert_relative_eq!(sim.fires()[0].current_intensity(), 1.0);

    // Intensity 1.0 means a 2.0m collision radius; smoke at distance 1.0
    // gives impact 0.5 and an intensity factor of 0.95 - 0.5 * 0.1 = 0.90
    discharge_at(&mut sim, offset, Vec3::new(1.0, 0.0, 0.0));
    sim.update(0.0);

    assert_eq!(sim.fires().len(), 1, "a single graze must not extinguish");
    assert_relative_eq!(sim.fires()[0].current_intensity(), 0.90, epsilon = 1e-6);
}

#[test]
fn smoke_outside_the_radius_does_nothing() {
    let (mut sim, offset) = sim_with_default_configs();
    sim.spawn_fire(Vec3::zeros(), FireConfig::default());

    discharge_at(&mut sim, offset, Vec3::new(5.0, 0.0, 0.0));
    sim.update(0.0);

    assert_relative_eq!(sim.fires()[0].current_intensity(), 1.0);
    assert_relative_eq!(sim.fires()[0].base_speed(), FireConfig::default().base_speed);
    assert!(sim.ash().is_empty());
}

#[test]
fn direct_hit_always_spawns_ash() {
    let (mut sim, offset) = sim_with_default_configs();
    sim.spawn_fire(Vec3::zeros(), FireConfig::default());

    // Distance 0 means impact 1.0, so the ash roll always succeeds
    discharge_at(&mut sim, offset, Vec3::zeros());
    sim.update(0.0);

    assert!(!sim.ash().is_empty(), "a direct hit must spawn ash");
    // Ash scatters near the fire, never far from it
    for ash in sim.ash() {
        assert!((ash.position() - Vec3::zeros()).norm() <= 1.0);
    }
}

#[test]
fn sustained_contact_extinguishes_exactly_once() {
    let (mut sim, offset) = sim_with_default_configs();
    sim.spawn_fire(Vec3::zeros(), FireConfig::default());
    discharge_at(&mut sim, offset, Vec3::zeros());

    // dt = 0 keeps the smoke alive forever; only the suppression scan acts.
    // Base speed decays by 0.98 per contact frame until the fire smothers.
    let mut removals = 0;
    let mut previous_count = sim.fires().len();
    for _ in 0..200 {
        sim.update(0.0);
        let count = sim.fires().len();
        if count < previous_count {
            removals += 1;
        }
        previous_count = count;
    }

    assert_eq!(removals, 1, "exactly one dispose for one fire");
    assert!(sim.fires().is_empty());
    assert_eq!(sim.hazard_strength(), 0);

    // Updating a world with no fires left is a no-op, never a panic
    sim.update(0.016);
    assert!(sim.fires().is_empty());
}

#[test]
fn collision_uses_the_current_intensity_for_the_radius() {
    let (mut sim, offset) = sim_with_default_configs();
    let config = FireConfig {
        growth_rate: 0.5,
        ..FireConfig::default()
    };
    sim.spawn_fire(Vec3::zeros(), config);

    // Grow the fire to intensity 2.5: radius 5.0, so distance 4.0 now hits
    for _ in 0..400 {
        sim.update(0.05);
    }
    assert_relative_eq!(sim.fires()[0].current_intensity(), 2.5);

    discharge_at(&mut sim, offset, Vec3::new(4.0, 0.0, 0.0));
    sim.update(0.0);

    // impact = 1 - 4/5 = 0.2, factor = 0.95 - 0.02 = 0.93
    assert_relative_eq!(sim.fires()[0].current_intensity(), 2.5 * 0.93, epsilon = 1e-5);
}

#[test]
fn seven_fires_read_full_strength_then_zero_when_contained() {
    let mut sim = HazardSimulation::default();
    let config = FireConfig {
        max_intensity: 2.5,
        ..FireConfig::default()
    };
    let mut positions = Vec::new();
    for i in 0..7 {
        let position = Vec3::new(20.0 * i as f32, 0.0, 0.0);
        positions.push(position);
        sim.spawn_fire(position, config.clone());
    }
    assert_eq!(sim.hazard_strength(), 100);

    // Smother every fire with a direct discharge; smoke outlives the
    // ~60 contact frames the speed decay needs
    let offset = SmokeConfig::default().discharge_offset;
    for &position in &positions {
        discharge_at(&mut sim, offset, position);
    }
    for _ in 0..150 {
        sim.update(0.016);
    }

    assert!(sim.fires().is_empty(), "all fires must be contained");
    assert_eq!(sim.hazard_strength(), 0);
}
