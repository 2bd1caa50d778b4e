mod line_map;
mod pose2;
mod segment2;

pub type Point2 = parry2d_f64::na::Point2<f64>;
pub type Vector2 = parry2d_f64::na::Vector2<f64>;
pub type Iso2 = parry2d_f64::na::Isometry2<f64>;

pub use self::line_map::LineMap;
pub use self::pose2::Pose2;
pub use self::segment2::{Segment2, line_intersection};
