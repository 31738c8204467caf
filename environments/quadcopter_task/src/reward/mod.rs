//! Reward shaping for the quadcopter task.
//!
//! The reward is a squashed punishment:
//!
//! ```text
//! reward = tanh(2 - high_angle_punishment [- dist_punishment])
//! ```
//!
//! so it always lies in (-1, 1), with `tanh(2) ~= 0.964` for a perfectly
//! level vehicle. The distance term is computed and recorded on every call,
//! but it only enters the squash when
//! [`TaskConfig::enable_distance_term`](crate::config::TaskConfig) is set.
//!
//! # Components
//!
//! - [`DistancePunishment`] - normalized smoothed L1 distance to the target
//! - [`HighAnglePunishment`] - smoothed roll + pitch magnitude

pub mod components;

pub use components::*;

use serde::{Deserialize, Serialize};

use crate::constants::ANGLE_PUNISHMENT_OFFSET;
use crate::goal::Goal;
use crate::smoothing::magnitude;
use crate::types::{sub, Vec3};

/// Inputs to a single reward evaluation.
#[derive(Clone, Copy, Debug)]
pub struct RewardContext<'a> {
    /// Simulated time (s)
    pub time: f64,
    /// Position [x, y, z]
    pub position: Vec3,
    /// Euler angles [roll, pitch, yaw]
    pub angles: Vec3,
    /// Linear velocity [vx, vy, vz]
    pub velocity: Vec3,
    /// Goal and its normalization constants
    pub goal: &'a Goal,
}

/// A named punishment term.
pub trait RewardComponent {
    /// Human-readable name for logging/debugging.
    const NAME: &'static str;

    /// Non-negative punishment for the given inputs.
    fn compute(&self, ctx: &RewardContext<'_>) -> f64;
}

/// Everything computed during the last reward evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RewardBreakdown {
    /// Euclidean distance from position to target
    pub distance_to_target: f64,
    /// Output of [`DistancePunishment`]
    pub dist_punishment: f64,
    /// Output of [`HighAnglePunishment`]
    pub high_angle_punishment: f64,
    /// Returned reward
    pub reward: f64,
}

/// Evaluates the reward and keeps the last breakdown for introspection.
#[derive(Clone, Debug, Default)]
pub struct RewardShaper {
    enable_distance_term: bool,
    last: RewardBreakdown,
}

impl RewardShaper {
    pub fn new(enable_distance_term: bool) -> Self {
        Self {
            enable_distance_term,
            last: RewardBreakdown::default(),
        }
    }

    /// Whether [`DistancePunishment`] enters the reward.
    pub fn distance_term_enabled(&self) -> bool {
        self.enable_distance_term
    }

    /// Breakdown of the most recent [`evaluate`](Self::evaluate) call.
    pub fn last(&self) -> &RewardBreakdown {
        &self.last
    }

    /// Compute the reward for `ctx` and record its breakdown.
    pub fn evaluate(&mut self, ctx: &RewardContext<'_>) -> f64 {
        let distance_to_target = magnitude(sub(ctx.goal.target_position(), ctx.position));
        let dist_punishment = DistancePunishment.compute(ctx);
        let high_angle_punishment = HighAnglePunishment.compute(ctx);

        let mut punishment = high_angle_punishment;
        if self.enable_distance_term {
            punishment += dist_punishment;
        }
        let reward = (ANGLE_PUNISHMENT_OFFSET - punishment).tanh();

        log::trace!(
            "reward {:.6} at t={:.3}: {}={:.6} {}={:.6}",
            reward,
            ctx.time,
            DistancePunishment::NAME,
            dist_punishment,
            HighAnglePunishment::NAME,
            high_angle_punishment
        );

        self.last = RewardBreakdown {
            distance_to_target,
            dist_punishment,
            high_angle_punishment,
            reward,
        };
        reward
    }
}
