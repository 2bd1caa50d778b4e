//! Simulation of a planar rotating range sensor (a 2D "laser") which measures the distance to
//! line-segment obstacles from a known pose, producing noisy range-bearing readings.

pub mod common;
pub mod errors;
pub mod geom2;
pub mod sensors;

pub use errors::SensorError;
pub use geom2::{Iso2, LineMap, Point2, Pose2, Segment2, Vector2, line_intersection};
pub use sensors::{
    DirectionCheck, GaussianNoise, Laser2D, Laser2DParams, NoNoise, Observation, RngNoise,
    SimulatedRangeSensor,
};

pub type Result<T> = std::result::Result<T, SensorError>;
