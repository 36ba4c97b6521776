//! Vector type alias for 3D positions and directions.

use nalgebra::Vector3;

/// 3D vector type for positions, velocities, and directions.
///
/// This is a simple alias for `nalgebra::Vector3<f32>`, used throughout
/// the simulation for hazard positions, particle kinematics, and light
/// placement. The world is z-up: particles rise along +z, ash falls along -z.
pub type Vec3 = Vector3<f32>;
