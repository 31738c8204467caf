//! The quadcopter task: goal, reward and action-repeat stepping around a
//! [`FlightSimulator`].
//!
//! One external [`Task::step`] runs `ACTION_REPEAT` simulator timesteps with
//! the same rotor command, sums the per-timestep rewards and stacks the
//! resulting frames into a 27-element state.

use crate::config::TaskConfig;
use crate::constants::*;
use crate::error::{Result, TaskError};
use crate::goal::Goal;
use crate::observation::StateStack;
use crate::reward::{RewardBreakdown, RewardContext, RewardShaper};
use crate::sim::FlightSimulator;
use crate::types::{RotorSpeeds, Vec3};

/// Result of one external step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    /// Stacked frames, oldest sub-step first
    pub state: [f64; STATE_SIZE],
    /// Sum of the sub-step rewards (not averaged)
    pub reward: f64,
    /// Whether any sub-step ended the episode
    pub done: bool,
}

/// Convert an action to rotor speeds.
///
/// `rotor[i] = max(action[0] + action[1 + i], 1.0)`: element 0 is the common
/// throttle, elements 1..5 are per-rotor deltas. NaN passes through.
#[inline]
pub fn rotor_speeds_from_action(action: &[f64; ACTION_SIZE]) -> RotorSpeeds {
    let throttle = action[0];
    let mut rotor_speeds = [0.0; ROTOR_COUNT];
    for (speed, delta) in rotor_speeds.iter_mut().zip(&action[1..]) {
        let commanded = throttle + delta;
        *speed = if commanded < MIN_ROTOR_SPEED {
            MIN_ROTOR_SPEED
        } else {
            commanded
        };
    }
    rotor_speeds
}

/// Quadcopter environment wrapping a simulator `S`.
///
/// Not thread-safe by contract: one training loop drives one task.
pub struct Task<S: FlightSimulator> {
    config: TaskConfig,
    sim: S,
    goal: Goal,
    shaper: RewardShaper,
    state: StateStack,
}

impl<S: FlightSimulator> Task<S> {
    /// Create a task and its simulator from configuration.
    pub fn from_config(config: TaskConfig) -> Result<Self> {
        config.validate()?;

        let sim = S::from_initial_conditions(&config.init, config.runtime);
        let goal = Goal::new(
            config.target_position,
            config.target_velocity,
            config.init.position(),
        );
        let shaper = RewardShaper::new(config.enable_distance_term);
        let state = StateStack::replicate(&sim.pose(), sim.angular_velocity());

        log::debug!(
            "task created: target={:?} sum_initial_distance={} initial_distance_to_target={}",
            goal.target_position(),
            goal.sum_initial_distance(),
            goal.initial_distance_to_target()
        );

        Ok(Self {
            config,
            sim,
            goal,
            shaper,
            state,
        })
    }

    // ------------------------------------------------------------------------
    // Contract accessors
    // ------------------------------------------------------------------------

    /// Observation length (27).
    #[inline]
    pub fn state_size(&self) -> usize {
        STATE_SIZE
    }

    /// Action length (5).
    #[inline]
    pub fn action_size(&self) -> usize {
        ACTION_SIZE
    }

    #[inline]
    pub fn action_low(&self) -> [f64; ACTION_SIZE] {
        ACTION_LOW
    }

    #[inline]
    pub fn action_high(&self) -> [f64; ACTION_SIZE] {
        ACTION_HIGH
    }

    #[inline]
    pub fn action_repeat(&self) -> usize {
        ACTION_REPEAT
    }

    pub fn config(&self) -> &TaskConfig {
        &self.config
    }

    pub fn goal(&self) -> &Goal {
        &self.goal
    }

    pub fn simulator(&self) -> &S {
        &self.sim
    }

    pub fn simulator_mut(&mut self) -> &mut S {
        &mut self.sim
    }

    /// State returned by the last `step`/`reset` (or the initial frame
    /// replicated, before either has run).
    pub fn state(&self) -> &[f64] {
        self.state.as_slice()
    }

    /// Breakdown of the last reward evaluation, including the punishment
    /// terms that did not enter the reward.
    pub fn last_reward_breakdown(&self) -> &RewardBreakdown {
        self.shaper.last()
    }

    // ------------------------------------------------------------------------
    // Reward
    // ------------------------------------------------------------------------

    /// Reward for an arbitrary time/position/attitude/velocity.
    ///
    /// Updates [`last_reward_breakdown`](Self::last_reward_breakdown).
    pub fn calc_reward(&mut self, time: f64, position: Vec3, angles: Vec3, velocity: Vec3) -> f64 {
        let ctx = RewardContext {
            time,
            position,
            angles,
            velocity,
            goal: &self.goal,
        };
        self.shaper.evaluate(&ctx)
    }

    /// Reward for the simulator's current state.
    pub fn get_reward(&mut self) -> f64 {
        let pose = self.sim.pose();
        let time = self.sim.time();
        let velocity = self.sim.velocity();
        self.calc_reward(time, pose.position, pose.angles, velocity)
    }

    /// Asymptotic per-step reward for a vehicle resting level at the target.
    ///
    /// Scaled by `ACTION_REPEAT` to match the summed reward of [`step`](Self::step).
    pub fn get_max_reward(&mut self) -> f64 {
        let target = self.goal.target_position();
        ACTION_REPEAT as f64 * self.calc_reward(MAX_REWARD_TIME, target, [0.0; 3], [0.0; 3])
    }

    // ------------------------------------------------------------------------
    // Control surface
    // ------------------------------------------------------------------------

    /// Apply `action` for `ACTION_REPEAT` simulator timesteps.
    ///
    /// Fails only if `action` is not `ACTION_SIZE` long; action values are not
    /// range-checked.
    pub fn step(&mut self, action: &[f64]) -> Result<StepOutcome> {
        let action: &[f64; ACTION_SIZE] =
            action
                .try_into()
                .map_err(|_| TaskError::ActionDimensionMismatch {
                    expected: ACTION_SIZE,
                    actual: action.len(),
                })?;
        let rotor_speeds = rotor_speeds_from_action(action);

        let mut reward = 0.0;
        let mut done = false;
        self.state.clear();
        for _ in 0..ACTION_REPEAT {
            done |= self.sim.advance(rotor_speeds);
            reward += self.get_reward();
            self.state.push(&self.sim.pose(), self.sim.angular_velocity());
        }

        if !reward.is_finite() {
            log::warn!(
                "Non-finite reward {} for rotor speeds {:?}",
                reward,
                rotor_speeds
            );
        }
        log::trace!(
            "step: rotors={:?} reward={:.6} done={}",
            rotor_speeds,
            reward,
            done
        );

        Ok(StepOutcome {
            state: self.state.to_array(),
            reward,
            done,
        })
    }

    /// Start a new episode with the current goal.
    ///
    /// The returned state is the reset frame repeated `ACTION_REPEAT` times.
    pub fn reset(&mut self) -> [f64; STATE_SIZE] {
        self.reset_inner(None)
    }

    /// Start a new episode towards `target`.
    ///
    /// Normalization is recomputed from the reset pose: the L1 sum uses
    /// `smooth_abs` and keeps the 5.0 floor, the L2 distance has no floor.
    pub fn reset_with_target(&mut self, target: Vec3) -> [f64; STATE_SIZE] {
        self.reset_inner(Some(target))
    }

    fn reset_inner(&mut self, new_target: Option<Vec3>) -> [f64; STATE_SIZE] {
        self.sim.reset();
        let pose = self.sim.pose();
        self.state = StateStack::replicate(&pose, self.sim.angular_velocity());

        if let Some(target) = new_target {
            self.goal.retarget(target, pose.position);
            log::debug!(
                "retargeted to {:?}: initial_vector_to_target={:?} sum_initial_distance={} initial_distance_to_target={}",
                target,
                self.goal.initial_vector_to_target(),
                self.goal.sum_initial_distance(),
                self.goal.initial_distance_to_target()
            );
            if self.goal.is_floored() {
                log::debug!(
                    "target within {} of start, sum_initial_distance floored",
                    NORMALIZATION_FLOOR
                );
            }
        }

        self.state.to_array()
    }
}
