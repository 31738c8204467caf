//! Smooth surrogates used by the reward.
//!
//! `smooth_abs` replaces `|x|` with `sqrt(x^2 + eps)` so punishment terms stay
//! differentiable at zero (see "smooth absolute value" approximations,
//! <http://www.cs.utep.edu/vladik/2013/tr13-44.pdf>). These are free
//! functions with no state.

use std::f64::consts::PI;

use crate::constants::{SMOOTH_ABS_EPSILON, SMOOTH_MIN_ALPHA};
use crate::types::Vec3;

/// Differentiable approximation of `|x|`: `sqrt(x^2 + 1e-15)`.
///
/// `smooth_abs(0.0)` is `sqrt(1e-15) ~= 3.16e-8`, never exactly zero.
#[inline]
pub fn smooth_abs(x: f64) -> f64 {
    (x * x + SMOOTH_ABS_EPSILON).sqrt()
}

/// Sum of `smooth_abs` over each component.
#[inline]
pub fn smooth_abs_sum(v: &[f64]) -> f64 {
    v.iter().map(|&x| smooth_abs(x)).sum()
}

/// Plain L1 norm.
#[inline]
pub fn abs_sum(v: &[f64]) -> f64 {
    v.iter().map(|x| x.abs()).sum()
}

/// Soft minimum of `a` and `b` via an exponential blend.
///
/// `(a e^{αa} + b e^{αb}) / (e^{αa} + e^{αb})` with α = -100. Close to
/// `min(a, b)` once the inputs differ by more than a few hundredths.
/// Inputs far below zero overflow `exp` and give NaN.
#[inline]
pub fn smooth_min(a: f64, b: f64) -> f64 {
    let ea = (SMOOTH_MIN_ALPHA * a).exp();
    let eb = (SMOOTH_MIN_ALPHA * b).exp();
    (a * ea + b * eb) / (ea + eb)
}

/// Euclidean norm of a 3-vector.
#[inline]
pub fn magnitude(v: Vec3) -> f64 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

/// Map an angle above π into (-π, π] by subtracting 2π once.
///
/// Only one correction is applied: `3π + 0.1` comes back as `π + 0.1`.
#[inline]
pub fn wrap_angle_once(angle: f64) -> f64 {
    if angle > PI {
        angle - 2.0 * PI
    } else {
        angle
    }
}
