//! A map of obstacles made from connected line segments, described by an ordered chain of
//! points. Point `i` and point `i + 1` are the ends of segment `i`. The chain does not need to
//! close on itself; to describe a closed room repeat the first point at the end.

use crate::Result;
use crate::errors::SensorError;
use crate::geom2::{Point2, Segment2};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineMap {
    points: Vec<Point2>,
}

impl LineMap {
    /// Create a map from an ordered chain of points. Any number of points is accepted; a map with
    /// fewer than two points simply has no segments, and a sensor looking at it will see nothing
    /// but maximum range readings. Use `try_new` to reject such maps instead.
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Create a map from an ordered chain of points, failing with `SensorError::InvalidMap` if
    /// there are fewer than two points and so no segments at all.
    ///
    /// # Arguments
    ///
    /// * `points`: the ordered chain of points making up the map
    ///
    /// returns: Result<LineMap, SensorError>
    ///
    /// # Examples
    ///
    /// ```
    /// use planar_laser::{LineMap, Point2};
    /// assert!(LineMap::try_new(vec![Point2::new(0.0, 0.0)]).is_err());
    /// let map = LineMap::try_new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)]).unwrap();
    /// assert_eq!(map.segment_count(), 1);
    /// ```
    pub fn try_new(points: Vec<Point2>) -> Result<Self> {
        if points.len() < 2 {
            return Err(SensorError::InvalidMap {
                points: points.len(),
            });
        }
        Ok(Self { points })
    }

    /// Create a map from a slice of `(x, y)` tuples, see `new`.
    pub fn from_xy(xy: &[(f64, f64)]) -> Self {
        Self::new(xy.iter().map(|(x, y)| Point2::new(*x, *y)).collect())
    }

    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// True if the map has no segments to collide with
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 2
    }

    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Iterates over the segments between consecutive points, in order
    pub fn segments(&self) -> impl Iterator<Item = Segment2> + '_ {
        self.points
            .iter()
            .tuple_windows()
            .map(|(a, b)| Segment2::new(*a, *b))
    }
}
