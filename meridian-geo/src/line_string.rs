//! See documentation for the [`LineString`] type.

use serde::{Deserialize, Serialize};

use crate::coordinate_system::CoordinateSystem;
use crate::error::MeridianGeoError;
use crate::geometry_type::GeometryType;
use crate::point::Point;

/// A curve interpolated linearly between consecutive points.
///
/// A line string is either empty or has at least two points. Closure of the ring formed by a
/// line string is not enforced here; [`is_closed`](Self::is_closed) lets callers check it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineString {
    cs: CoordinateSystem,
    points: Vec<Point>,
}

impl LineString {
    /// Creates a line string from the given points.
    ///
    /// Every point must store the same axes as `cs`; a single-point input is rejected.
    pub fn new(cs: CoordinateSystem, points: Vec<Point>) -> Result<Self, MeridianGeoError> {
        for point in &points {
            cs.check_matches(point.coordinate_system())?;
        }

        if points.len() == 1 {
            return Err(MeridianGeoError::invalid(
                GeometryType::LineString,
                "must be empty or have at least 2 points",
            ));
        }

        Ok(Self { cs, points })
    }

    /// Creates an empty line string.
    pub fn empty(cs: CoordinateSystem) -> Self {
        Self { cs, points: vec![] }
    }

    /// Coordinate system of the line string.
    pub fn coordinate_system(&self) -> CoordinateSystem {
        self.cs
    }

    /// Points of the line string, in order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Whether the line string has no points.
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

    /// Whether the line string is non-empty and ends where it starts.
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

    #[test]
    fn single_point_is_rejected() {
        assert_matches!(
            LineString::new(CoordinateSystem::xy(), vec![Point::xy(1.0, 2.0)]),
            Err(MeridianGeoError::InvalidGeometry { .. })
        );
    }

    #[test]
    fn mixed_dimensionality_is_rejected() {
        let result = LineString::new(
            CoordinateSystem::xy(),
            vec![Point::xy(0.0, 0.0), Point::xyz(1.0, 1.0, 1.0)],
        );
        assert_matches!(
            result,
            Err(MeridianGeoError::CoordinateSystemMismatch { .. })
        );
    }

    #[test]
    fn closure() {
        let cs = CoordinateSystem::xy();
        let open = LineString::new(cs, vec![Point::xy(0.0, 0.0), Point::xy(1.0, 1.0)]).unwrap();
        assert!(!open.is_closed());

        let closed = LineString::new(
            cs,
            vec![
                Point::xy(0.0, 0.0),
                Point::xy(1.0, 1.0),
                Point::xy(0.0, 0.0),
            ],
        )
        .unwrap();
        assert!(closed.is_closed());
        assert!(!LineString::empty(cs).is_closed());
    }
}
