use crate::Result;
use crate::errors::SensorError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Distance past the end of a segment at which an intersection still counts as a hit on it
pub const DEFAULT_CORNER_TOL: f64 = 0.05;

/// Largest number of beams a single scan may have. Parameters whose `fov / resolution` ratio
/// would produce more beams than this are rejected by `Laser2DParams::validate`.
pub const MAX_BEAMS: usize = 1 << 20;

fn default_corner_tolerance() -> f64 {
    DEFAULT_CORNER_TOL
}

/// Selects how an intersection is confirmed to lie in the direction the beam is travelling,
/// rather than behind the sensor on the same infinite line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DirectionCheck {
    /// The bearing from the sensor to the intersection must have the same sign as the beam
    /// angle, both expressed in (-pi, pi]. A beam at exactly zero only accepts intersections at
    /// a bearing of exactly zero, so beams within rounding error of 0 or +/-pi can miss
    /// obstacles that are straight ahead.
    #[default]
    BearingSign,

    /// The intersection must have a non-negative projection onto the beam direction.
    Forward,
}

/// Configuration of a simulated planar laser. Angles are in radians and distances in meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Laser2DParams {
    /// Total angular span of the beam fan, centered on the sensor heading
    pub fov: f64,

    /// Angular step between neighboring beams
    pub resolution: f64,

    /// Range reported by beams which do not hit anything
    pub max_distance: f64,

    /// Measurement noise covariance. Entry `[0][0]` is the range variance and `[1][1]` is the
    /// bearing variance; the off-diagonal terms are ignored.
    pub noise_cov: [[f64; 2]; 2],

    #[serde(default = "default_corner_tolerance")]
    pub corner_tolerance: f64,

    #[serde(default)]
    pub direction_check: DirectionCheck,
}

impl Laser2DParams {
    /// Create a new set of laser parameters with the default corner tolerance and direction check.
    ///
    /// # Arguments
    ///
    /// * `fov`: the total field of view of the sensor, in radians
    /// * `resolution`: the angle between neighboring beams, in radians
    /// * `max_distance`: the maximum range of the sensor
    /// * `noise_cov`: the 2x2 covariance of the (range, bearing) measurement noise
    ///
    /// returns: Laser2DParams
    ///
    /// # Examples
    ///
    /// ```
    /// use planar_laser::Laser2DParams;
    /// use std::f64::consts::PI;
    /// let params = Laser2DParams::new(PI, PI / 2.0, 10.0, [[0.0, 0.0], [0.0, 0.0]]);
    /// assert_eq!(params.n_beams(), 3);
    /// ```
    pub fn new(fov: f64, resolution: f64, max_distance: f64, noise_cov: [[f64; 2]; 2]) -> Self {
        Self {
            fov,
            resolution,
            max_distance,
            noise_cov,
            corner_tolerance: DEFAULT_CORNER_TOL,
            direction_check: DirectionCheck::default(),
        }
    }

    pub fn with_corner_tolerance(mut self, corner_tolerance: f64) -> Self {
        self.corner_tolerance = corner_tolerance;
        self
    }

    pub fn with_direction_check(mut self, direction_check: DirectionCheck) -> Self {
        self.direction_check = direction_check;
        self
    }

    /// Parse laser parameters from a JSON document. The `corner_tolerance` and `direction_check`
    /// fields may be omitted, in which case their defaults are used. The parameters are not
    /// validated until they are used to build a sensor.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Check the parameters against the preconditions of the laser model, returning
    /// `SensorError::InvalidConfiguration` describing the first violation found.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("field of view", self.fov),
            ("resolution", self.resolution),
            ("max distance", self.max_distance),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(format!("{name} must be finite and > 0, got {value}")));
            }
        }

        let steps = (self.fov / self.resolution).floor();
        if !steps.is_finite() || steps >= MAX_BEAMS as f64 {
            return Err(invalid(format!(
                "field of view {} at resolution {} gives more than {MAX_BEAMS} beams",
                self.fov, self.resolution
            )));
        }

        let variances = [("range", self.noise_cov[0][0]), ("bearing", self.noise_cov[1][1])];
        for (name, value) in variances {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(format!(
                    "{name} noise variance must be finite and >= 0, got {value}"
                )));
            }
        }

        if !self.corner_tolerance.is_finite() || self.corner_tolerance < 0.0 {
            return Err(invalid(format!(
                "corner tolerance must be finite and >= 0, got {}",
                self.corner_tolerance
            )));
        }

        Ok(())
    }

    /// Number of beams in one scan, `floor(fov / resolution) + 1`. Only meaningful for parameters
    /// which pass `validate`, which bounds the count by `MAX_BEAMS`.
    pub fn n_beams(&self) -> usize {
        (self.fov / self.resolution).floor() as usize + 1
    }

    pub fn range_std_dev(&self) -> f64 {
        self.noise_cov[0][0].sqrt()
    }

    pub fn bearing_std_dev(&self) -> f64 {
        self.noise_cov[1][1].sqrt()
    }
}

fn invalid(message: String) -> SensorError {
    SensorError::InvalidConfiguration(message)
}
