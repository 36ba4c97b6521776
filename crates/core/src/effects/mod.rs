//! Hazard and emission effect kinds
//!
//! A *hazard* (fire) carries health/intensity state and is a combat target;
//! an *emission* (smoke, ash) is a time-bounded particle burst without
//! combat state. All three share the particle pool mechanics from
//! [`crate::particles`].

pub mod ash;
pub mod fire;
pub mod light;
pub mod smoke;

pub use ash::AshEmission;
pub use fire::{FireHazard, INTENSITY_FLOOR, MIN_LIVE_INTENSITY, MIN_LIVE_SPEED};
pub use light::{FireLights, LightState, FLAME_COLOR};
pub use smoke::SmokeEmission;
