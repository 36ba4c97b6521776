//! Fixed-capacity particle pool mechanics shared by every effect kind

pub mod pool;

pub use pool::{EmitterDrive, ParticlePool, SpawnProfile, Turbulence};
