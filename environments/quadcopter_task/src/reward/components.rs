//! Punishment terms feeding the reward.
//!
//! Each component is a zero-sized struct implementing [`RewardComponent`] and
//! returns a non-negative punishment.

use super::{RewardComponent, RewardContext};
use crate::smoothing::{smooth_abs, smooth_abs_sum, wrap_angle_once};
use crate::types::sub;

// ============================================================================
// Distance Punishment
// ============================================================================

/// Smoothed L1 distance to target, normalized by the initial L1 distance.
///
/// `sum(smooth_abs(target - pos)) / sum_initial_distance`
///
/// Equals ~1.0 at the start position (outside the floor) and ~0.0 at the
/// target.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DistancePunishment;

impl RewardComponent for DistancePunishment {
    const NAME: &'static str = "DistancePunishment";

    #[inline]
    fn compute(&self, ctx: &RewardContext<'_>) -> f64 {
        let vec_to_target = sub(ctx.goal.target_position(), ctx.position);
        smooth_abs_sum(&vec_to_target) / ctx.goal.sum_initial_distance()
    }
}

// ============================================================================
// High Angle Punishment
// ============================================================================

/// Smoothed magnitude of roll plus pitch.
///
/// `smooth_abs(pitch) + smooth_abs(roll)`, each angle first pulled into
/// (-π, π] with a single 2π correction. Yaw is free.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HighAnglePunishment;

impl RewardComponent for HighAnglePunishment {
    const NAME: &'static str = "HighAnglePunishment";

    #[inline]
    fn compute(&self, ctx: &RewardContext<'_>) -> f64 {
        let roll = wrap_angle_once(ctx.angles[0]);
        let pitch = wrap_angle_once(ctx.angles[1]);
        smooth_abs(pitch) + smooth_abs(roll)
    }
}
