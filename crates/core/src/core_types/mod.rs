//! Core types and utilities

pub mod config;
pub mod vec3;

pub use config::{AshConfig, FireConfig, SmokeConfig};
pub use vec3::Vec3;
