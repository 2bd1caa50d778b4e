//! This module simulates a planar scanning laser: a fan of beams is cast from the sensor pose
//! and each beam reports the distance to the closest segment of a `LineMap` it crosses, or the
//! maximum range if it crosses none. Gaussian noise is added to both the range and the bearing
//! of every beam.

use crate::Result;
use crate::common::points::dist;
use crate::common::{sign, wrap_pi_once};
use crate::geom2::{LineMap, Point2, Pose2, Segment2};
use crate::sensors::{
    DirectionCheck, GaussianNoise, Laser2DParams, Observation, SimulatedRangeSensor,
};
use log::{debug, trace, warn};
use std::f64::consts::FRAC_PI_2;

#[derive(Debug, Clone)]
pub struct Laser2D {
    params: Laser2DParams,
    pose: Pose2,
    last_observation: Option<Observation>,
}

impl Laser2D {
    /// Create a new simulated laser from its parameters and an initial pose. Fails with
    /// `SensorError::InvalidConfiguration` if the parameters do not pass validation.
    ///
    /// # Arguments
    ///
    /// * `params`: the laser configuration, fixed for the lifetime of the sensor
    /// * `pose`: the initial pose of the sensor in the world frame
    ///
    /// returns: Result<Laser2D, SensorError>
    ///
    /// # Examples
    ///
    /// ```
    /// use planar_laser::{Laser2D, Laser2DParams, LineMap, NoNoise, Pose2};
    /// use std::f64::consts::PI;
    ///
    /// let params = Laser2DParams::new(PI, PI / 2.0, 10.0, [[0.0, 0.0], [0.0, 0.0]]);
    /// let mut laser = Laser2D::new(params, Pose2::new(0.0, 0.0, 0.0)).unwrap();
    /// let wall = LineMap::from_xy(&[(5.0, -5.0), (5.0, 5.0)]);
    ///
    /// let z = laser.take_observation(&wall, &mut NoNoise);
    /// assert_eq!(z.ranges(), &[10.0, 5.0, 10.0]);
    /// ```
    pub fn new(params: Laser2DParams, pose: Pose2) -> Result<Self> {
        params.validate()?;
        debug!(
            "Laser2D created with {} beams over {:.4} rad, max distance {}",
            params.n_beams(),
            params.fov,
            params.max_distance
        );

        Ok(Self {
            params,
            pose,
            last_observation: None,
        })
    }

    pub fn params(&self) -> &Laser2DParams {
        &self.params
    }

    pub fn set_pose(&mut self, pose: Pose2) {
        self.pose = pose;
    }

    /// The most recent observation produced by `take_observation`, if any
    pub fn last_observation(&self) -> Option<&Observation> {
        self.last_observation.as_ref()
    }

    pub fn n_beams(&self) -> usize {
        self.params.n_beams()
    }

    /// The nominal bearing of beam `i` relative to the sensor heading, before any noise.
    pub fn beam_offset(&self, i: usize) -> f64 {
        i as f64 * self.params.resolution - self.params.fov / 2.0
    }

    /// The nominal bearings of all beams, relative to the sensor heading
    pub fn beam_angles(&self) -> Vec<f64> {
        (0..self.n_beams()).map(|i| self.beam_offset(i)).collect()
    }

    /// The world frame angle of beam `i` at the current pose, re-expressed in (-pi, pi] with a
    /// single wrap step.
    pub fn beam_heading(&self, i: usize) -> f64 {
        wrap_pi_once(self.beam_offset(i) + self.pose.theta)
    }

    /// Take an observation of the map from the current pose and keep a copy of it as the last
    /// observation. Noise is drawn from `noise` twice per beam in beam order, first for the range
    /// and then for the bearing.
    ///
    /// # Arguments
    ///
    /// * `map`: the obstacles to observe
    /// * `noise`: the source of the Gaussian measurement noise
    ///
    /// returns: Observation
    pub fn take_observation(
        &mut self,
        map: &LineMap,
        noise: &mut dyn GaussianNoise,
    ) -> Observation {
        let z = self.observe(map, noise);
        self.last_observation = Some(z.clone());
        z
    }

    /// Find the distance along the beam at world angle `phi` to the closest segment it hits,
    /// or the max distance if it hits none.
    fn beam_range(&self, phi: f64, segments: &[Segment2]) -> f64 {
        let origin = self.pose.position();

        // The beam end is always at full length; obstacles only shorten the reported distance
        let beam_end = Point2::new(
            origin.x + self.params.max_distance * phi.cos(),
            origin.y + self.params.max_distance * phi.sin(),
        );

        let mut d = self.params.max_distance;
        for segment in segments {
            let Some(hit) = segment.line_intersection(&origin, &beam_end) else {
                continue;
            };

            if !segment.loosely_contains(&hit, self.params.corner_tolerance) {
                continue;
            }

            if !self.is_ahead(phi, &origin, &beam_end, &hit) {
                continue;
            }

            let range = dist(&origin, &hit);
            if range < d {
                trace!(
                    "beam at {:.4} rad hit ({:.4}, {:.4}) at {:.4}",
                    phi, hit.x, hit.y, range
                );
                d = range;
            }
        }

        d
    }

    /// Checks that the intersection is on the beam's side of the sensor
    fn is_ahead(&self, phi: f64, origin: &Point2, beam_end: &Point2, hit: &Point2) -> bool {
        match self.params.direction_check {
            DirectionCheck::BearingSign => {
                let bearing = (-(hit.x - origin.x)).atan2(hit.y - origin.y) + FRAC_PI_2;
                sign(phi) == sign(wrap_pi_once(bearing))
            }
            DirectionCheck::Forward => (hit - origin).dot(&(beam_end - origin)) >= 0.0,
        }
    }
}

impl SimulatedRangeSensor for Laser2D {
    fn pose(&self) -> &Pose2 {
        &self.pose
    }

    fn observe(&self, map: &LineMap, noise: &mut dyn GaussianNoise) -> Observation {
        if map.is_degenerate() {
            warn!(
                "Map has {} point(s) and no segments, every beam will read max distance",
                map.points().len()
            );
        }

        let segments = map.segments().collect::<Vec<_>>();
        let n_beams = self.n_beams();
        let range_std = self.params.range_std_dev();
        let bearing_std = self.params.bearing_std_dev();

        let mut z = Observation::with_capacity(n_beams);
        let mut hits = 0;
        for i in 0..n_beams {
            let d = self.beam_range(self.beam_heading(i), &segments);
            if d < self.params.max_distance {
                hits += 1;
            }

            let range = noise.sample(d, range_std);
            let bearing = noise.sample(self.beam_offset(i), bearing_std);
            z.push(range, bearing);
        }

        debug!(
            "Observation from ({:.3}, {:.3}, {:.3}): {} beams, {} segments, {} hits",
            self.pose.x,
            self.pose.y,
            self.pose.theta,
            n_beams,
            segments.len(),
            hits
        );

        z
    }
}
