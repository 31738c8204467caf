//! Edge case tests defining behavior at boundaries and with degenerate inputs.
//!
//! These tests define:
//! - NaN propagation (no value validation on actions or simulator output)
//! - Infinite throttle handling
//! - Targets on top of the start position
//! - State isolation between consecutive steps

use super::mock_sim::{origin_task, scripted_task, ScriptedFrame};
use crate::config::TaskConfig;
use crate::constants::*;
use crate::task::rotor_speeds_from_action;

const HOVER_ACTION: [f64; ACTION_SIZE] = [450.0, 0.0, 0.0, 0.0, 0.0];

// ============================================================================
// NaN / Infinity
// ============================================================================

#[test]
fn should_pass_nan_throttle_through_to_rotors() {
    let speeds = rotor_speeds_from_action(&[f64::NAN, 0.0, 0.0, 0.0, 0.0]);
    assert!(speeds.iter().all(|s| s.is_nan()), "NaN must not be floored: {:?}", speeds);
}

#[test]
fn should_pass_nan_delta_through_to_one_rotor() {
    let speeds = rotor_speeds_from_action(&[450.0, 0.0, f64::NAN, 0.0, 0.0]);
    assert!(speeds[1].is_nan());
    assert_eq!(speeds[0], 450.0);
    assert_eq!(speeds[2], 450.0);
}

#[test]
fn should_accept_nan_action_without_error() {
    let mut task = origin_task();
    let result = task.step(&[f64::NAN; ACTION_SIZE]);

    assert!(result.is_ok(), "NaN actions are not validated");
    assert!(task.simulator().commands[0].iter().all(|s| s.is_nan()));
}

#[test]
fn should_floor_negative_infinite_throttle() {
    let speeds = rotor_speeds_from_action(&[f64::NEG_INFINITY, 0.0, 0.0, 0.0, 0.0]);
    assert_eq!(speeds, [MIN_ROTOR_SPEED; ROTOR_COUNT]);
}

#[test]
fn should_propagate_nan_pose_into_state_and_reward() {
    let mut task = origin_task();
    task.simulator_mut().queue([
        ScriptedFrame::at([0.0; 6]),
        ScriptedFrame::at([0.0, 0.0, 0.0, f64::NAN, 0.0, 0.0]),
        ScriptedFrame::at([0.0; 6]),
    ]);

    let outcome = task.step(&HOVER_ACTION).unwrap();

    assert!(outcome.reward.is_nan(), "NaN roll should poison the summed reward");
    assert!(outcome.state[FRAME_SIZE + 3].is_nan());
    assert!(!outcome.state[3].is_nan());
}

#[test]
fn should_return_nan_reward_for_nan_angles() {
    let mut task = origin_task();
    let reward = task.calc_reward(0.0, [0.0; 3], [0.0, f64::NAN, 0.0], [0.0; 3]);
    assert!(reward.is_nan());
}

// ============================================================================
// Degenerate Targets
// ============================================================================

#[test]
fn should_bound_distance_punishment_when_target_is_start() {
    let mut task = scripted_task(
        TaskConfig::new()
            .with_init_pose([0.0, 0.0, 10.0, 0.0, 0.0, 0.0])
            .with_target_position([0.0, 0.0, 10.0])
            .with_distance_term(true),
    );

    let reward = task.calc_reward(0.0, [0.0, 0.0, 10.0], [0.0; 3], [0.0; 3]);
    let breakdown = *task.last_reward_breakdown();

    assert_eq!(task.goal().sum_initial_distance(), NORMALIZATION_FLOOR);
    assert!(breakdown.dist_punishment.is_finite());
    assert!(breakdown.dist_punishment < 1e-7);
    assert!(reward.is_finite());
}

#[test]
fn should_use_floor_for_near_target_distance_punishment() {
    let mut task = scripted_task(
        TaskConfig::new()
            .with_init_pose([0.0; 6])
            .with_target_position([0.0, 0.0, 1.0]),
    );

    task.calc_reward(0.0, [0.0; 3], [0.0; 3], [0.0; 3]);

    // 1 m away, normalized by the 5.0 floor rather than by 1.0
    assert!((task.last_reward_breakdown().dist_punishment - 0.2).abs() < 1e-6);
}

#[test]
fn should_retarget_onto_start_position() {
    let mut task = origin_task();
    task.reset_with_target([0.0; 3]);

    assert_eq!(task.goal().initial_vector_to_target(), [0.0; 3]);
    assert_eq!(task.goal().sum_initial_distance(), NORMALIZATION_FLOOR);
    assert_eq!(task.goal().initial_distance_to_target(), 0.0);
}

// ============================================================================
// Step Isolation
// ============================================================================

#[test]
fn should_not_carry_frames_between_steps() {
    let mut task = origin_task();
    task.simulator_mut()
        .queue([ScriptedFrame::at([1.0, 1.0, 1.0, 0.0, 0.0, 0.0]); 3]);
    task.simulator_mut()
        .queue([ScriptedFrame::at([2.0, 2.0, 2.0, 0.0, 0.0, 0.0]); 3]);

    task.step(&HOVER_ACTION).unwrap();
    let second = task.step(&HOVER_ACTION).unwrap();

    for i in 0..ACTION_REPEAT {
        assert_eq!(second.state[i * FRAME_SIZE], 2.0);
    }
}

#[test]
fn should_ignore_velocity_reported_by_simulator() {
    let mut task = origin_task();
    task.simulator_mut()
        .queue([ScriptedFrame::at([0.0; 6]).with_velocity([30.0, -30.0, 30.0]); 3]);

    let outcome = task.step(&HOVER_ACTION).unwrap();
    assert!((outcome.reward - 3.0 * 2.0f64.tanh()).abs() < 1e-6);
}

#[test]
fn should_accept_actions_outside_bounds() {
    let mut task = origin_task();
    let outcome = task.step(&[10_000.0, 50.0, -50.0, 0.0, 0.0]).unwrap();

    assert_eq!(task.simulator().commands[0], [10_050.0, 9_950.0, 10_000.0, 10_000.0]);
    assert!(outcome.reward.is_finite());
}

// ============================================================================
// Property-Based Tests with Proptest
// ============================================================================

mod proptest_edge_cases {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: finite actions never produce a rotor speed below the floor
        #[test]
        fn test_rotor_speeds_respect_floor(
            throttle in -1000.0f64..1000.0,
            deltas in prop::array::uniform4(-10.0f64..10.0),
        ) {
            let action = [throttle, deltas[0], deltas[1], deltas[2], deltas[3]];
            let speeds = rotor_speeds_from_action(&action);

            for (i, speed) in speeds.iter().enumerate() {
                prop_assert!(*speed >= MIN_ROTOR_SPEED, "rotor {} = {} below floor", i, speed);
                prop_assert!(
                    *speed == (throttle + deltas[i]).max(MIN_ROTOR_SPEED),
                    "rotor {} = {} for throttle {} delta {}",
                    i, speed, throttle, deltas[i]
                );
            }
        }

        /// Property: retargeting always leaves sum_initial_distance at or above the floor
        #[test]
        fn test_retarget_keeps_floor(
            x in -50.0f64..50.0,
            y in -50.0f64..50.0,
            z in -50.0f64..50.0,
        ) {
            let mut task = origin_task();
            task.reset_with_target([x, y, z]);
            prop_assert!(task.goal().sum_initial_distance() >= NORMALIZATION_FLOOR);
            prop_assert_eq!(task.goal().initial_vector_to_target(), [x, y, z]);
        }
    }
}
