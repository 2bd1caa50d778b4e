//! This module contains tools for simulating sensors and sensor data

mod laser2d;
mod noise;
mod observation;
mod params;

use crate::geom2::{LineMap, Pose2};

pub use laser2d::Laser2D;
pub use noise::{GaussianNoise, NoNoise, RngNoise};
pub use observation::Observation;
pub use params::{DEFAULT_CORNER_TOL, DirectionCheck, Laser2DParams, MAX_BEAMS};

/// A simulated sensor which measures ranges and bearings to the obstacles of a `LineMap` from
/// its current pose.
pub trait SimulatedRangeSensor {
    fn pose(&self) -> &Pose2;

    fn observe(&self, map: &LineMap, noise: &mut dyn GaussianNoise) -> Observation;
}
