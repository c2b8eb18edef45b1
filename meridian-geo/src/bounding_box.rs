//! See documentation for the [`BoundingBox`] type.

use serde::{Deserialize, Serialize};

use crate::coordinate_system::CoordinateSystem;
use crate::error::MeridianGeoError;
use crate::point::Point;

/// The minimal axis-aligned envelope of a set of points, in XY or XYZ.
///
/// A freshly created bounding box is empty. Extending it grows the envelope by component-wise
/// min/max and returns a new value; M coordinates are never part of the envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    corners: Option<(Point, Point)>,
}

impl BoundingBox {
    /// Creates an empty bounding box.
    pub fn new() -> Self {
        Self { corners: None }
    }

    /// Whether the box contains no points yet.
    pub fn is_empty(&self) -> bool {
        self.corners.is_none()
    }

    /// The minimum corner, unless the box is empty.
    pub fn south_west(&self) -> Option<&Point> {
        self.corners.as_ref().map(|(sw, _)| sw)
    }

    /// The maximum corner, unless the box is empty.
    pub fn north_east(&self) -> Option<&Point> {
        self.corners.as_ref().map(|(_, ne)| ne)
    }

    /// Returns a box grown to include the given point.
    ///
    /// Extending with an empty point changes nothing. Extending an XY box with an XYZ point
    /// (or the other way around) is an error.
    pub fn extended_with_point(&self, point: &Point) -> Result<Self, MeridianGeoError> {
        if point.is_empty() {
            return Ok(self.clone());
        }

        let corner = Self::corner_of(point);
        let Some((sw, ne)) = &self.corners else {
            return Ok(Self {
                corners: Some((corner.clone(), corner)),
            });
        };

        if sw.coordinate_system().has_z() != corner.coordinate_system().has_z() {
            return Err(MeridianGeoError::CoordinateSystemMismatch {
                container: sw.coordinate_system(),
                element: point.coordinate_system(),
            });
        }

        let cs = sw.coordinate_system();
        let min = sw
            .coordinates()
            .iter()
            .zip(corner.coordinates())
            .map(|(a, b)| a.min(*b))
            .collect();
        let max = ne
            .coordinates()
            .iter()
            .zip(corner.coordinates())
            .map(|(a, b)| a.max(*b))
            .collect();

        Ok(Self {
            corners: Some((
                Point::new_unchecked(cs, min),
                Point::new_unchecked(cs, max),
            )),
        })
    }

    /// Returns a box grown to include another box. Extending with an empty box changes
    /// nothing.
    pub fn extended_with(&self, other: &BoundingBox) -> Result<Self, MeridianGeoError> {
        let Some((sw, ne)) = &other.corners else {
            return Ok(self.clone());
        };

        self.extended_with_point(sw)?.extended_with_point(ne)
    }

    // Projects a non-empty point onto the envelope axes: X, Y and Z kept, M dropped.
    fn corner_of(point: &Point) -> Point {
        let point_cs = point.coordinate_system();
        let cs = CoordinateSystem::new(point_cs.has_z(), false, point_cs.srid());
        let coords = point.coordinates()[..cs.coordinate_dimension()].to_vec();
        Point::new_unchecked(cs, coords)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn starts_empty() {
        let bbox = BoundingBox::new();
        assert!(bbox.is_empty());
        assert_eq!(bbox.south_west(), None);
        assert_eq!(bbox.north_east(), None);
    }

    #[test]
    fn first_point_becomes_both_corners() {
        let bbox = BoundingBox::new()
            .extended_with_point(&Point::xy(1.0, 2.0))
            .unwrap();
        assert_eq!(bbox.south_west(), Some(&Point::xy(1.0, 2.0)));
        assert_eq!(bbox.north_east(), Some(&Point::xy(1.0, 2.0)));
    }

    #[test]
    fn grows_by_min_max() {
        let bbox = BoundingBox::new()
            .extended_with_point(&Point::xy(1.0, 2.0))
            .unwrap()
            .extended_with_point(&Point::xy(3.0, 4.0))
            .unwrap();
        assert_eq!(bbox.south_west(), Some(&Point::xy(1.0, 2.0)));
        assert_eq!(bbox.north_east(), Some(&Point::xy(3.0, 4.0)));
    }

    #[test]
    fn empty_inputs_are_no_ops() {
        let bbox = BoundingBox::new()
            .extended_with_point(&Point::empty(CoordinateSystem::xy()))
            .unwrap();
        assert!(bbox.is_empty());

        let filled = BoundingBox::new()
            .extended_with_point(&Point::xy(1.0, 1.0))
            .unwrap();
        let same = filled.extended_with(&BoundingBox::new()).unwrap();
        assert_eq!(filled, same);
    }

    #[test]
    fn m_is_dropped() {
        let bbox = BoundingBox::new()
            .extended_with_point(&Point::xym(1.0, 2.0, 100.0))
            .unwrap();
        let sw = bbox.south_west().unwrap();
        assert!(!sw.coordinate_system().has_m());
        assert_eq!(sw.coordinates(), &[1.0, 2.0]);
    }

    #[test]
    fn dimension_mix_is_rejected() {
        let bbox = BoundingBox::new()
            .extended_with_point(&Point::xy(1.0, 2.0))
            .unwrap();
        assert_matches!(
            bbox.extended_with_point(&Point::xyz(1.0, 2.0, 3.0)),
            Err(MeridianGeoError::CoordinateSystemMismatch { .. })
        );
    }
}
