//! See documentation for the [`CircularString`] type.

use serde::{Deserialize, Serialize};

use crate::coordinate_system::CoordinateSystem;
use crate::error::MeridianGeoError;
use crate::geometry_type::GeometryType;
use crate::point::Point;

/// A curve made of circular arcs.
///
/// Each arc is defined by three consecutive points, and consecutive arcs share an endpoint, so
/// a non-empty circular string always has an odd number of points, at least three.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircularString {
    cs: CoordinateSystem,
    points: Vec<Point>,
}

impl CircularString {
    /// Creates a circular string from the given points, enforcing the arc parity rule.
    pub fn new(cs: CoordinateSystem, points: Vec<Point>) -> Result<Self, MeridianGeoError> {
        for point in &points {
            cs.check_matches(point.coordinate_system())?;
        }

        let count = points.len();
        if count != 0 && (count < 3 || count % 2 == 0) {
            return Err(MeridianGeoError::invalid(
                GeometryType::CircularString,
                format!("point count must be odd and at least 3, got {count}"),
            ));
        }

        Ok(Self { cs, points })
    }

    /// Creates an empty circular string.
    pub fn empty(cs: CoordinateSystem) -> Self {
        Self { cs, points: vec![] }
    }

    /// Coordinate system of the circular string.
    pub fn coordinate_system(&self) -> CoordinateSystem {
        self.cs
    }

    /// Points of the circular string, in order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Whether the circular string has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First point, unless empty.
    pub fn start_point(&self) -> Option<&Point> {
        self.points.first()
    }

    /// Last point, unless empty.
    pub fn end_point(&self) -> Option<&Point> {
        self.points.last()
    }

    /// Whether the circular string is non-empty and ends where it starts.
    pub fn is_closed(&self) -> bool {
        match (self.start_point(), self.end_point()) {
            (Some(start), Some(end)) => start.coordinates() == end.coordinates(),
            _ => false,
        }
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

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn points(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::xy(x, y)).collect()
    }

    #[test]
    fn parity_rule() {
        let cs = CoordinateSystem::xy();

        assert!(CircularString::new(cs, vec![]).is_ok());
        for count in [3, 5, 7] {
            let pts = points(&(0..count).map(|i| (i as f64, 0.0)).collect::<Vec<_>>());
            assert!(CircularString::new(cs, pts).is_ok(), "count {count}");
        }

        for count in [1, 2, 4, 6] {
            let pts = points(&(0..count).map(|i| (i as f64, 0.0)).collect::<Vec<_>>());
            assert_matches!(
                CircularString::new(cs, pts),
                Err(MeridianGeoError::InvalidGeometry { .. }),
                "count {count}"
            );
        }
    }
}
