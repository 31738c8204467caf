//! Observation vector assembly.
//!
//! The state handed to the agent is `ACTION_REPEAT` frames of
//! `[x, y, z, roll, pitch, yaw, wx, wy, wz]`, oldest sub-step first.

use crate::constants::{ACTION_REPEAT, FRAME_SIZE, POSE_SIZE, STATE_SIZE};
use crate::types::{Pose, Vec3};

/// Write one frame (pose then angular velocity) into `output` at `offset`.
///
/// # Returns
/// Number of elements written
#[inline]
pub fn write_frame(pose: &Pose, angular_velocity: Vec3, output: &mut [f64], offset: usize) -> usize {
    output[offset..offset + POSE_SIZE].copy_from_slice(&pose.to_array());
    output[offset + POSE_SIZE..offset + FRAME_SIZE].copy_from_slice(&angular_velocity);
    FRAME_SIZE
}

/// Fixed-size stack of the frames seen during one external step.
#[derive(Clone, Debug, PartialEq)]
pub struct StateStack {
    buffer: [f64; STATE_SIZE],
    len: usize,
}

impl Default for StateStack {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStack {
    /// Empty stack.
    pub fn new() -> Self {
        Self {
            buffer: [0.0; STATE_SIZE],
            len: 0,
        }
    }

    /// Fill every slot with the same frame.
    ///
    /// Used at reset, where no sub-steps have run yet.
    pub fn replicate(pose: &Pose, angular_velocity: Vec3) -> Self {
        let mut stack = Self::new();
        for _ in 0..ACTION_REPEAT {
            stack.push(pose, angular_velocity);
        }
        stack
    }

    /// Drop all frames.
    pub fn clear(&mut self) {
        self.buffer = [0.0; STATE_SIZE];
        self.len = 0;
    }

    /// Append a frame after the ones already pushed.
    ///
    /// # Panics
    /// Panics if the stack already holds `ACTION_REPEAT` frames.
    pub fn push(&mut self, pose: &Pose, angular_velocity: Vec3) {
        assert!(self.len < ACTION_REPEAT, "StateStack is full");
        write_frame(pose, angular_velocity, &mut self.buffer, self.len * FRAME_SIZE);
        self.len += 1;
    }

    /// Number of frames pushed.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether all `ACTION_REPEAT` slots are filled.
    pub fn is_full(&self) -> bool {
        self.len == ACTION_REPEAT
    }

    /// Frame `i` (0 = oldest).
    pub fn frame(&self, i: usize) -> &[f64] {
        debug_assert!(i < ACTION_REPEAT, "frame index out of bounds");
        &self.buffer[i * FRAME_SIZE..(i + 1) * FRAME_SIZE]
    }

    /// Flat view of the full state vector.
    pub fn as_slice(&self) -> &[f64] {
        &self.buffer
    }

    /// Copy out as an owned array.
    pub fn to_array(&self) -> [f64; STATE_SIZE] {
        self.buffer
    }
}
