//! Configuration types and builders for the quadcopter task.
//!
//! Provides builder-style configuration for:
//! - Initial conditions handed to the simulator
//! - Episode runtime limit
//! - Goal (target position / velocity)
//! - Reward shaping toggles

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{Result, TaskError};
use crate::types::{Pose, Vec3};

// ============================================================================
// Initial Conditions
// ============================================================================

/// State the simulator starts from, and returns to on every reset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialConditions {
    /// Initial pose [x, y, z, roll, pitch, yaw]
    pub pose: [f64; POSE_SIZE],
    /// Initial linear velocity [vx, vy, vz]
    pub velocity: Vec3,
    /// Initial Euler angle rates (rad/s)
    pub angular_velocity: Vec3,
}

impl Default for InitialConditions {
    fn default() -> Self {
        Self {
            pose: DEFAULT_INIT_POSE,
            velocity: [0.0; 3],
            angular_velocity: [0.0; 3],
        }
    }
}

impl InitialConditions {
    /// Default initial conditions: 10 m up, level, at rest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial pose.
    pub fn with_pose(mut self, pose: [f64; POSE_SIZE]) -> Self {
        self.pose = pose;
        self
    }

    /// Set the initial linear velocity.
    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    /// Set the initial angular velocity.
    pub fn with_angular_velocity(mut self, angular_velocity: Vec3) -> Self {
        self.angular_velocity = angular_velocity;
        self
    }

    /// Initial position (first three pose entries).
    pub fn position(&self) -> Vec3 {
        Pose::from_array(self.pose).position
    }

    fn validate(&self) -> Result<()> {
        if self.pose.iter().any(|v| !v.is_finite()) {
            return Err(TaskError::invalid_config("init.pose", "must be finite"));
        }
        if self.velocity.iter().any(|v| !v.is_finite()) {
            return Err(TaskError::invalid_config("init.velocity", "must be finite"));
        }
        if self.angular_velocity.iter().any(|v| !v.is_finite()) {
            return Err(TaskError::invalid_config(
                "init.angular_velocity",
                "must be finite",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Task Configuration
// ============================================================================

/// Main configuration for [`Task`](crate::task::Task).
///
/// # Example
///
/// ```
/// use quadcopter_task::{InitialConditions, TaskConfig};
///
/// let config = TaskConfig::new()
///     .with_init(InitialConditions::new().with_pose([0.0; 6]))
///     .with_runtime(5.0)
///     .with_target_position([0.0, 0.0, 10.0]);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskConfig {
    /// Simulator initial conditions
    pub init: InitialConditions,
    /// Episode time limit (s), enforced by the simulator
    pub runtime: f64,
    /// Goal position [x, y, z]
    pub target_position: Vec3,
    /// Goal velocity [vx, vy, vz] (kept with the goal, not rewarded)
    pub target_velocity: Vec3,
    /// Add the normalized distance punishment to the reward
    pub enable_distance_term: bool,
}

impl Default for TaskConfig {
    fn default() -> Self {
        Self {
            init: InitialConditions::default(),
            runtime: DEFAULT_RUNTIME,
            target_position: DEFAULT_TARGET_POS,
            target_velocity: [0.0; 3],
            enable_distance_term: false,
        }
    }
}

impl TaskConfig {
    /// Create configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set simulator initial conditions.
    pub fn with_init(mut self, init: InitialConditions) -> Self {
        self.init = init;
        self
    }

    /// Shorthand for setting only the initial pose.
    pub fn with_init_pose(mut self, pose: [f64; POSE_SIZE]) -> Self {
        self.init.pose = pose;
        self
    }

    /// Set the episode time limit.
    pub fn with_runtime(mut self, runtime: f64) -> Self {
        self.runtime = runtime;
        self
    }

    /// Set the goal position.
    pub fn with_target_position(mut self, target: Vec3) -> Self {
        self.target_position = target;
        self
    }

    /// Set the goal velocity.
    pub fn with_target_velocity(mut self, target: Vec3) -> Self {
        self.target_velocity = target;
        self
    }

    /// Enable or disable the distance punishment term.
    pub fn with_distance_term(mut self, enabled: bool) -> Self {
        self.enable_distance_term = enabled;
        self
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.runtime.is_finite() || self.runtime <= 0.0 {
            return Err(TaskError::invalid_config(
                "runtime",
                format!("must be positive and finite, got {}", self.runtime),
            ));
        }
        self.init.validate()?;
        if self.target_position.iter().any(|v| !v.is_finite()) {
            return Err(TaskError::invalid_config("target_position", "must be finite"));
        }
        if self.target_velocity.iter().any(|v| !v.is_finite()) {
            return Err(TaskError::invalid_config("target_velocity", "must be finite"));
        }
        Ok(())
    }
}
