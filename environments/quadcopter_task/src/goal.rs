//! Goal state and the normalization constants derived from it.
//!
//! The constants are measured from the start position to the target. Two
//! policies exist and both are kept as-is:
//!
//! | | L1 sum (`sum_initial_distance`) | L2 (`initial_distance_to_target`) |
//! |---|---|---|
//! | [`Goal::new`] | plain `abs`, floored at 5.0 | floored at 5.0 |
//! | [`Goal::retarget`] | `smooth_abs`, floored at 5.0 | not floored |

use serde::{Deserialize, Serialize};

use crate::constants::NORMALIZATION_FLOOR;
use crate::smoothing::{abs_sum, magnitude, smooth_abs_sum};
use crate::types::{sub, Vec3};

/// Target position/velocity plus distance normalization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    target_position: Vec3,
    target_velocity: Vec3,
    initial_vector_to_target: Vec3,
    sum_initial_distance: f64,
    initial_distance_to_target: f64,
}

impl Goal {
    /// Build the goal at construction time from the configured start position.
    pub fn new(target_position: Vec3, target_velocity: Vec3, start_position: Vec3) -> Self {
        let initial_vector_to_target = sub(target_position, start_position);
        Self {
            target_position,
            target_velocity,
            initial_vector_to_target,
            sum_initial_distance: abs_sum(&initial_vector_to_target).max(NORMALIZATION_FLOOR),
            initial_distance_to_target: magnitude(initial_vector_to_target)
                .max(NORMALIZATION_FLOOR),
        }
    }

    /// Replace the target position and recompute normalization from
    /// `start_position` (the freshly reset pose).
    ///
    /// Target velocity is left untouched.
    pub fn retarget(&mut self, target_position: Vec3, start_position: Vec3) {
        self.target_position = target_position;
        self.initial_vector_to_target = sub(target_position, start_position);
        self.sum_initial_distance =
            smooth_abs_sum(&self.initial_vector_to_target).max(NORMALIZATION_FLOOR);
        self.initial_distance_to_target = magnitude(self.initial_vector_to_target);
    }

    #[inline]
    pub fn target_position(&self) -> Vec3 {
        self.target_position
    }

    #[inline]
    pub fn target_velocity(&self) -> Vec3 {
        self.target_velocity
    }

    /// `target - start` at the time the goal was (re)set.
    #[inline]
    pub fn initial_vector_to_target(&self) -> Vec3 {
        self.initial_vector_to_target
    }

    /// L1 distance to target at (re)set time; never below 5.0.
    #[inline]
    pub fn sum_initial_distance(&self) -> f64 {
        self.sum_initial_distance
    }

    /// L2 distance to target at (re)set time.
    #[inline]
    pub fn initial_distance_to_target(&self) -> f64 {
        self.initial_distance_to_target
    }

    /// Whether the start lies inside the normalization floor (L1 < 5.0).
    pub fn is_floored(&self) -> bool {
        abs_sum(&self.initial_vector_to_target) < NORMALIZATION_FLOOR
    }
}
