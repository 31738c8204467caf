//! Plain numeric types shared by the task, the reward and the simulator seam.
//!
//! Everything is `f64`: the reward constants (a `1e-15` epsilon, a `1e8`
//! evaluation time) are chosen for double precision.

use serde::{Deserialize, Serialize};

use crate::constants::{POSE_SIZE, ROTOR_COUNT};

/// A 3-vector in the world frame.
pub type Vec3 = [f64; 3];

/// Commanded spin rate for each rotor.
pub type RotorSpeeds = [f64; ROTOR_COUNT];

/// Position plus Euler angles, as reported by the simulator.
///
/// Layout of the flat form is `[x, y, z, roll, pitch, yaw]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Position (x, y, z)
    pub position: Vec3,
    /// Euler angles (roll, pitch, yaw) in radians
    pub angles: Vec3,
}

impl Pose {
    /// Create a pose from position and angles.
    #[inline]
    pub const fn new(position: Vec3, angles: Vec3) -> Self {
        Self { position, angles }
    }

    /// Create from the flat `[x, y, z, roll, pitch, yaw]` layout.
    #[inline]
    pub const fn from_array(arr: [f64; POSE_SIZE]) -> Self {
        Self {
            position: [arr[0], arr[1], arr[2]],
            angles: [arr[3], arr[4], arr[5]],
        }
    }

    /// Flatten to `[x, y, z, roll, pitch, yaw]`.
    #[inline]
    pub const fn to_array(&self) -> [f64; POSE_SIZE] {
        [
            self.position[0],
            self.position[1],
            self.position[2],
            self.angles[0],
            self.angles[1],
            self.angles[2],
        ]
    }

    #[inline]
    pub fn roll(&self) -> f64 {
        self.angles[0]
    }

    #[inline]
    pub fn pitch(&self) -> f64 {
        self.angles[1]
    }

    #[inline]
    pub fn yaw(&self) -> f64 {
        self.angles[2]
    }
}

impl From<[f64; POSE_SIZE]> for Pose {
    fn from(arr: [f64; POSE_SIZE]) -> Self {
        Self::from_array(arr)
    }
}

/// Elementwise `a - b`.
#[inline]
pub fn sub(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}
