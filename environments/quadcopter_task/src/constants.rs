//! Contract constants for the quadcopter task.
//!
//! Sizes and bounds here are part of the interface seen by a training loop
//! and must not drift: the policy network is built from `STATE_SIZE` and
//! `ACTION_SIZE`, and its output layer is scaled by `ACTION_LOW`/`ACTION_HIGH`.

// ============================================================================
// Observation / Action Layout
// ============================================================================

/// Physics sub-steps executed per external `step()` call
pub const ACTION_REPEAT: usize = 3;

/// Pose length: position (x, y, z) + Euler angles (roll, pitch, yaw)
pub const POSE_SIZE: usize = 6;

/// Angular velocity length (one rate per Euler angle)
pub const ANGULAR_VELOCITY_SIZE: usize = 3;

/// One observation frame: pose followed by angular velocity
pub const FRAME_SIZE: usize = POSE_SIZE + ANGULAR_VELOCITY_SIZE;

/// Observation vector length: `ACTION_REPEAT` stacked frames = 27
pub const STATE_SIZE: usize = ACTION_REPEAT * FRAME_SIZE;

/// Action length: main throttle + one delta per rotor
pub const ACTION_SIZE: usize = 5;

/// Number of rotors driven by an action
pub const ROTOR_COUNT: usize = 4;

/// Lower action bounds: throttle, then per-rotor deltas.
///
/// A throttle of ~400 roughly balances gravity for the simulated airframe.
pub const ACTION_LOW: [f64; ACTION_SIZE] = [400.0, -1.0, -1.0, -1.0, -1.0];

/// Upper action bounds. The extra throttle headroom covers banked flight
/// (a 45 degree bank needs about sqrt(2) more thrust) and takeoff.
pub const ACTION_HIGH: [f64; ACTION_SIZE] = [565.0, 1.0, 1.0, 1.0, 1.0];

/// Minimum spin rate commanded to any rotor
pub const MIN_ROTOR_SPEED: f64 = 1.0;

// ============================================================================
// Reward Shaping
// ============================================================================

/// Epsilon inside `smooth_abs`: `sqrt(x^2 + eps)`
pub const SMOOTH_ABS_EPSILON: f64 = 1e-15;

/// Steepness of the exponential blend in `smooth_min`
pub const SMOOTH_MIN_ALPHA: f64 = -100.0;

/// Floor applied to the normalization denominators
pub const NORMALIZATION_FLOOR: f64 = 5.0;

/// Offset inside the reward squash: `tanh(offset - punishment)`
pub const ANGLE_PUNISHMENT_OFFSET: f64 = 2.0;

/// Simulated time used when evaluating the asymptotic maximum reward
pub const MAX_REWARD_TIME: f64 = 1e8;

// ============================================================================
// Defaults
// ============================================================================

/// Default episode time limit (s)
pub const DEFAULT_RUNTIME: f64 = 5.0;

/// Default initial pose: 10 m above the origin, level
pub const DEFAULT_INIT_POSE: [f64; POSE_SIZE] = [0.0, 0.0, 10.0, 0.0, 0.0, 0.0];

/// Default target position
pub const DEFAULT_TARGET_POS: [f64; 3] = [0.0, 0.0, 10.0];
