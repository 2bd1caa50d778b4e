use crate::geom2::{Point2, Pose2};
use serde::{Deserialize, Serialize};

/// A single scan of a planar laser, stored as two rows of equal length: the measured ranges and
/// the measured bearings of each beam. Bearings are relative to the sensor heading (body frame)
/// and are not wrapped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    ranges: Vec<f64>,
    bearings: Vec<f64>,
}

impl Observation {
    pub(crate) fn with_capacity(n_beams: usize) -> Self {
        Self {
            ranges: Vec::with_capacity(n_beams),
            bearings: Vec::with_capacity(n_beams),
        }
    }

    pub(crate) fn push(&mut self, range: f64, bearing: f64) {
        self.ranges.push(range);
        self.bearings.push(bearing);
    }

    pub fn n_beams(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Row 0 of the observation table
    pub fn ranges(&self) -> &[f64] {
        &self.ranges
    }

    /// Row 1 of the observation table
    pub fn bearings(&self) -> &[f64] {
        &self.bearings
    }

    /// The observation as a 2 x n_beams table, ranges first
    pub fn rows(&self) -> [&[f64]; 2] {
        [&self.ranges, &self.bearings]
    }

    /// The (range, bearing) pair of a single beam
    pub fn column(&self, i: usize) -> Option<(f64, f64)> {
        Some((*self.ranges.get(i)?, *self.bearings.get(i)?))
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.ranges.iter().copied().zip(self.bearings.iter().copied())
    }

    /// Converts each (range, bearing) measurement back into the world frame point it describes,
    /// given the pose the observation was taken from.
    ///
    /// # Arguments
    ///
    /// * `pose`: the pose of the sensor when the observation was taken
    ///
    /// returns: Vec<OPoint<f64, Const<2>>, Global>
    pub fn endpoints(&self, pose: &Pose2) -> Vec<Point2> {
        self.iter()
            .map(|(range, bearing)| {
                let angle = bearing + pose.theta;
                Point2::new(
                    pose.x + range * angle.cos(),
                    pose.y + range * angle.sin(),
                )
            })
            .collect()
    }
}
