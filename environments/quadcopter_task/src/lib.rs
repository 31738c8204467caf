//! Quadcopter Reward-Shaping Task
//!
//! The environment layer between a reinforcement-learning agent and a
//! quadcopter physics simulator: it turns rotor commands into simulator
//! timesteps, scores the resulting flight, and encodes recent pose history
//! as the agent's state.
//!
//! # Features
//!
//! - **Action Repeat**: each action drives 3 simulator timesteps; rewards are
//!   summed and the 3 frames are stacked into a 27-element state
//! - **Smooth Punishments**: `sqrt(x^2 + 1e-15)` in place of `|x|`, squashed
//!   with `tanh` so the per-timestep reward stays in (-1, 1)
//! - **Retargeting**: `reset_with_target` moves the goal and recomputes the
//!   distance normalization
//! - **Simulator Agnostic**: any [`FlightSimulator`] implementation can be
//!   wrapped
//!
//! # Example
//!
//! ```rust,ignore
//! use quadcopter_task::{Task, TaskConfig};
//!
//! let config = TaskConfig::new()
//!     .with_init_pose([0.0, 0.0, 0.0, 0.0, 0.0, 0.0])
//!     .with_target_position([0.0, 0.0, 10.0]);
//!
//! // `MySim` implements `FlightSimulator`
//! let mut task = Task::<MySim>::from_config(config)?;
//!
//! let mut state = task.reset();
//! loop {
//!     let action = [450.0, 0.0, 0.0, 0.0, 0.0]; // throttle + 4 rotor deltas
//!     let outcome = task.step(&action)?;
//!     state = outcome.state;
//!     if outcome.done {
//!         break;
//!     }
//! }
//! ```

// Core modules
pub mod config;
pub mod constants;
pub mod error;
pub mod types;

// Numeric building blocks
pub mod goal;
pub mod smoothing;

// Environment components
pub mod observation;
pub mod reward;
pub mod sim;
pub mod task;

// Behavioral test suite
#[cfg(test)]
pub mod tests;

pub use config::{InitialConditions, TaskConfig};
pub use constants::{
    ACTION_HIGH, ACTION_LOW, ACTION_REPEAT, ACTION_SIZE, MIN_ROTOR_SPEED, NORMALIZATION_FLOOR,
    SMOOTH_ABS_EPSILON, STATE_SIZE,
};
pub use error::{Result, TaskError};
pub use goal::Goal;
pub use observation::StateStack;
pub use reward::{DistancePunishment, HighAnglePunishment, RewardBreakdown, RewardComponent};
pub use sim::FlightSimulator;
pub use smoothing::{magnitude, smooth_abs, smooth_min};
pub use task::{rotor_speeds_from_action, StepOutcome, Task};
pub use types::{Pose, RotorSpeeds, Vec3};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
