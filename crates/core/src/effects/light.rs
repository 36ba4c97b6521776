//! Light state emitted by fire hazards
//!
//! CPU-side point light descriptions handed to the rendering backend every
//! frame. A fire owns two: a steady ambient glow scaled by intensity, and a
//! flickering light whose intensity and height oscillate with elapsed time.

use crate::core_types::Vec3;
use serde::{Deserialize, Serialize};

/// Flame color, `0xff4500` as linear RGB.
pub const FLAME_COLOR: [f32; 3] = [1.0, 0.27, 0.0];

/// Point light range in meters.
const LIGHT_RANGE: f32 = 20.0;

/// Height of the glow above the hazard origin.
const LIGHT_HEIGHT: f32 = 2.0;

/// Flicker oscillation frequency in rad/s.
const FLICKER_FREQUENCY: f32 = 5.0;

/// Peak intensity contribution of the flicker sinusoid.
const FLICKER_AMPLITUDE: f32 = 0.35;

/// Vertical bob amplitude of the flicker light in meters.
const BOB_AMPLITUDE: f32 = 0.12;

/// One point light as the rendering backend consumes it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LightState {
    pub position: Vec3,
    pub color: [f32; 3],
    pub intensity: f32,
    pub range: f32,
}

impl LightState {
    fn new(position: Vec3) -> Self {
        LightState {
            position,
            color: FLAME_COLOR,
            intensity: 0.0,
            range: LIGHT_RANGE,
        }
    }
}

/// The ambient + flicker light pair owned by one fire hazard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FireLights {
    /// Steady glow, intensity proportional to the fire's intensity.
    pub ambient: LightState,
    /// Oscillating light that bobs vertically above the flames.
    pub flicker: LightState,
}

impl FireLights {
    pub(crate) fn new(origin: Vec3) -> Self {
        FireLights {
            ambient: LightState::new(origin + Vec3::new(0.0, 0.0, LIGHT_HEIGHT)),
            flicker: LightState::new(origin + Vec3::new(0.0, 0.0, LIGHT_HEIGHT)),
        }
    }

    /// Recompute both lights from the fire's current intensity and elapsed
    /// time. The flicker is a sinusoid of elapsed time biased by intensity,
    /// never negative.
    pub(crate) fn update(&mut self, origin: Vec3, intensity: f32, elapsed: f32) {
        let anchor = origin + Vec3::new(0.0, 0.0, LIGHT_HEIGHT);

        self.ambient.position = anchor;
        self.ambient.intensity = 0.6 * intensity;

        let phase = elapsed * FLICKER_FREQUENCY;
        self.flicker.position = anchor + Vec3::new(0.0, 0.0, phase.sin() * BOB_AMPLITUDE);
        self.flicker.intensity = (intensity + phase.sin() * FLICKER_AMPLITUDE).max(0.0);
    }
}
