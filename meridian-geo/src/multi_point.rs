//! See documentation for the [`MultiPoint`] type.

use serde::{Deserialize, Serialize};

use crate::coordinate_system::CoordinateSystem;
use crate::error::MeridianGeoError;
use crate::point::Point;

/// A collection of points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiPoint {
    cs: CoordinateSystem,
    points: Vec<Point>,
}

impl MultiPoint {
    /// Creates a multi point from the given points.
    pub fn new(cs: CoordinateSystem, points: Vec<Point>) -> Result<Self, MeridianGeoError> {
        for point in &points {
            cs.check_matches(point.coordinate_system())?;
        }

        Ok(Self { cs, points })
    }

    /// Creates an empty multi point.
    pub fn empty(cs: CoordinateSystem) -> Self {
        Self { cs, points: vec![] }
    }

    /// Coordinate system of the collection.
    pub fn coordinate_system(&self) -> CoordinateSystem {
        self.cs
    }

    /// The collected points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Whether the collection has no elements. A collection of empty points is not empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub(crate) fn map_points(
        &self,
        cs: CoordinateSystem,
        f: &dyn Fn(&Point, CoordinateSystem) -> Point,
    ) -> Self {
        Self {
            cs,
            points: self.points.iter().map(|p| f(p, cs)).collect(),
        }
    }

    pub(crate) fn for_each_point(&self, f: &mut dyn FnMut(&Point)) {
        for point in &self.points {
            f(point);
        }
    }
}
