//! Behavioral tests for the quadcopter task.
//!
//! ## Organization
//!
//! - `mock_sim`: scripted [`FlightSimulator`](crate::sim::FlightSimulator) used by the suites below
//! - `smoothing_tests`: smooth-abs / smooth-min / magnitude / angle wrap
//! - `goal_tests`: target bookkeeping and normalization floors
//! - `reward_tests`: reward formula, angle wrap, breakdown record
//! - `task_tests`: construction, step, reset, retargeting
//! - `edge_case_tests`: NaN propagation, degenerate targets, saturation


pub mod edge_case_tests;
