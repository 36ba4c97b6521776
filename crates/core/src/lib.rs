//! Hazard Simulation Core Library
//!
//! Real-time, stateful particle-based environmental hazard simulation:
//! fire hazards that grow, take damage, recover, and emit light; smoke
//! emissions that suppress nearby fire; and ash emissions spawned as a
//! byproduct of suppression. The model is a hand-tuned, performance-bounded
//! approximation built for visual plausibility and gameplay pacing, not a
//! physical combustion simulation.
//!
//! The crate is the simulation core only. Rendering, assets, input, audio,
//! and session logic are external collaborators: they feed delta-time,
//! damage events, and suppressant-discharge triggers in, and read particle
//! buffers, light states, and the aggregate hazard strength out (see
//! [`visual`]).
//!
//! Everything runs single-threaded and frame-driven: one
//! [`HazardSimulation::update`] call per rendered frame does all the work
//! synchronously.

// Core types and configuration
pub mod core_types;

// Shared particle pool mechanics
pub mod particles;

// Hazard and emission effect kinds
pub mod effects;

// Interaction coordinator
pub mod simulation;

// Render hand-off
pub mod visual;

// Re-export core types
pub use core_types::{AshConfig, FireConfig, SmokeConfig, Vec3};

// Re-export effect types
pub use effects::{AshEmission, FireHazard, FireLights, LightState, SmokeEmission};

// Re-export pool machinery
pub use particles::{EmitterDrive, ParticlePool, SpawnProfile, Turbulence};

// Re-export the coordinator and visual snapshot types
pub use simulation::HazardSimulation;
pub use visual::{ParticleVisualData, SceneVisualData};
