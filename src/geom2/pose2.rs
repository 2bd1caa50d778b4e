use crate::geom2::{Iso2, Point2, Vector2};
use serde::{Deserialize, Serialize};

/// A planar pose: a position in the world frame and a heading in radians. The heading is stored
/// exactly as given and is never wrapped, which is why this is kept separate from `Iso2` (whose
/// rotation always normalizes the angle).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose2 {
    pub x: f64,
    pub y: f64,
    pub theta: f64,
}

impl Pose2 {
    pub fn new(x: f64, y: f64, theta: f64) -> Self {
        Self { x, y, theta }
    }

    pub fn position(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    /// Returns the rigid transform from the body frame of this pose to the world frame
    pub fn to_iso(&self) -> Iso2 {
        Iso2::new(Vector2::new(self.x, self.y), self.theta)
    }
}

impl From<(f64, f64, f64)> for Pose2 {
    fn from((x, y, theta): (f64, f64, f64)) -> Self {
        Self::new(x, y, theta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_heading_is_not_wrapped() {
        let pose = Pose2::new(1.0, 2.0, 3.0 * PI);
        assert_eq!(pose.theta, 3.0 * PI);
        assert_eq!(pose.position(), Point2::new(1.0, 2.0));
    }

    #[test]
    fn test_iso_maps_body_frame_to_world() {
        let pose = Pose2::new(1.0, -1.0, FRAC_PI_2);
        let iso = pose.to_iso();
        let p = iso * Point2::new(2.0, 0.0);
        assert_relative_eq!(p, Point2::new(1.0, 1.0), epsilon = 1.0e-12);
    }
}
