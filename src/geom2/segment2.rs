//! Line segments and the determinant-based intersection of the infinite lines through two pairs
//! of points.

use crate::common::points::dist;
use crate::geom2::Point2;

/// A segment between two points, with its length computed once on construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2 {
    pub a: Point2,
    pub b: Point2,
    length: f64,
}

impl Segment2 {
    pub fn new(a: Point2, b: Point2) -> Self {
        Self {
            a,
            b,
            length: dist(&a, &b),
        }
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    /// Returns true if the test point is closer than `length + tol` to both ends of the segment.
    ///
    /// For a point already known to lie on the segment's infinite line this accepts everything
    /// between the ends plus a margin of `tol` past each end, so hits near a corner shared by
    /// two segments are not lost to rounding. For a point off the line it is only a coarse
    /// filter.
    ///
    /// # Arguments
    ///
    /// * `p`: the point to test
    /// * `tol`: the distance past either end which is still accepted
    ///
    /// returns: bool
    pub fn loosely_contains(&self, p: &Point2, tol: f64) -> bool {
        let limit = self.length + tol;
        dist(&self.a, p) < limit && dist(&self.b, p) < limit
    }

    /// Intersection of the infinite line through this segment with the infinite line through
    /// `p0` and `p1`. See `line_intersection`.
    pub fn line_intersection(&self, p0: &Point2, p1: &Point2) -> Option<Point2> {
        line_intersection(&self.a, &self.b, p0, p1)
    }
}

fn det(a: (f64, f64), b: (f64, f64)) -> f64 {
    a.0 * b.1 - a.1 * b.0
}

/// Computes the point where the infinite line through `a0` and `a1` crosses the infinite line
/// through `b0` and `b1`, using the 2x2 determinant form of the line-line intersection.
///
/// Returns `None` if the determinant of the direction differences is exactly zero, which covers
/// both parallel and coincident lines. Whether the point lies between either pair of points is
/// not checked.
///
/// # Arguments
///
/// * `a0`, `a1`: two points on the first line
/// * `b0`, `b1`: two points on the second line
///
/// returns: Option<OPoint<f64, Const<2>>>
///
/// # Examples
///
/// ```
/// use planar_laser::{line_intersection, Point2};
/// let p = line_intersection(
///     &Point2::new(0.0, 0.0),
///     &Point2::new(1.0, 1.0),
///     &Point2::new(0.0, 2.0),
///     &Point2::new(2.0, 0.0),
/// );
/// assert_eq!(p, Some(Point2::new(1.0, 1.0)));
/// ```
pub fn line_intersection(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> Option<Point2> {
    let x_diff = (a0.x - a1.x, b0.x - b1.x);
    let y_diff = (a0.y - a1.y, b0.y - b1.y);

    let div = det(x_diff, y_diff);
    if div == 0.0 {
        return None;
    }

    let d = (det((a0.x, a0.y), (a1.x, a1.y)), det((b0.x, b0.y), (b1.x, b1.y)));
    Some(Point2::new(det(d, x_diff) / div, det(d, y_diff) / div))
}
