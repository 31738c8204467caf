//! Seam to the physics simulator.
//!
//! The task never integrates flight dynamics itself. Any simulator that can
//! report pose and rates, reset to its initial conditions and advance one
//! timestep under a rotor command can drive it.

use crate::config::InitialConditions;
use crate::types::{Pose, RotorSpeeds, Vec3};

/// A single-vehicle rigid-body simulator.
///
/// One simulator instance is owned by one [`Task`](crate::task::Task) and is
/// only ever touched from the thread driving that task.
pub trait FlightSimulator {
    /// Build a simulator that starts from (and resets to) `init`, with an
    /// episode time limit of `runtime` seconds.
    fn from_initial_conditions(init: &InitialConditions, runtime: f64) -> Self
    where
        Self: Sized;

    /// Current pose (position + Euler angles).
    fn pose(&self) -> Pose;

    /// Current linear velocity.
    fn velocity(&self) -> Vec3;

    /// Current Euler angle rates.
    fn angular_velocity(&self) -> Vec3;

    /// Simulated time since the last reset (s).
    fn time(&self) -> f64;

    /// Return to the initial conditions and zero the clock.
    fn reset(&mut self);

    /// Advance one timestep with the given rotor speeds.
    ///
    /// Returns `true` once the episode is over (time limit exceeded or the
    /// vehicle left the simulated volume).
    fn advance(&mut self, rotor_speeds: RotorSpeeds) -> bool;
}
