//! This module contains common constructs for working with angles

use std::f64::consts::PI;

pub const ANGLE_TOL: f64 = 1.0e-12;

/// Re-expresses an angle, specified in radians, in the range (-pi, pi] by adding or subtracting
/// a single full turn. Only angles which overshoot the range by at most one period end up inside
/// it; anything further out is shifted once and returned as-is.
///
/// The beam angles of a scanning sensor are the sum of a bounded body-frame offset and the sensor
/// heading, so a single step is all the wrapping they need.
///
/// # Arguments
///
/// * `angle`: The angle to re-express, in radians
///
/// returns: f64
///
/// # Examples
///
/// ```
/// use planar_laser::common::wrap_pi_once;
/// use std::f64::consts::PI;
/// use approx::assert_relative_eq;
/// assert_relative_eq!(wrap_pi_once(1.5 * PI), -0.5 * PI, epsilon = 1.0e-12);
/// assert_relative_eq!(wrap_pi_once(-1.5 * PI), 0.5 * PI, epsilon = 1.0e-12);
/// assert_eq!(wrap_pi_once(PI), PI);
/// ```
pub fn wrap_pi_once(angle: f64) -> f64 {
    if angle > PI {
        angle - 2.0 * PI
    } else if angle < -PI {
        angle + 2.0 * PI
    } else {
        angle
    }
}

/// Three-valued sign of a number: -1.0, 0.0 or 1.0. Unlike `f64::signum`, both zeros map to 0.0
/// so that an angle of exactly zero only matches another zero.
///
/// # Examples
///
/// ```
/// use planar_laser::common::sign;
/// assert_eq!(sign(-3.0), -1.0);
/// assert_eq!(sign(0.0), 0.0);
/// assert_eq!(sign(-0.0), 0.0);
/// assert_eq!(sign(2.5), 1.0);
/// ```
pub fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}
