//! See documentation for the [`MultiPolygon`] type.

use serde::{Deserialize, Serialize};

use crate::coordinate_system::CoordinateSystem;
use crate::error::MeridianGeoError;
use crate::point::Point;
use crate::polygon::Polygon;

/// A collection of polygons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiPolygon {
    cs: CoordinateSystem,
    polygons: Vec<Polygon>,
}

impl MultiPolygon {
    /// Creates a multi polygon from the given polygons.
    pub fn new(cs: CoordinateSystem, polygons: Vec<Polygon>) -> Result<Self, MeridianGeoError> {
        for polygon in &polygons {
            cs.check_matches(polygon.coordinate_system())?;
        }

        Ok(Self { cs, polygons })
    }

    /// Creates an empty multi polygon.
    pub fn empty(cs: CoordinateSystem) -> Self {
        Self {
            cs,
            polygons: vec![],
        }
    }

    /// Coordinate system of the collection.
    pub fn coordinate_system(&self) -> CoordinateSystem {
        self.cs
    }

    /// The collected polygons.
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Whether the collection has no elements.
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    pub(crate) fn map_points(
        &self,
        cs: CoordinateSystem,
        f: &dyn Fn(&Point, CoordinateSystem) -> Point,
    ) -> Self {
        Self {
            cs,
            polygons: self.polygons.iter().map(|p| p.map_points(cs, f)).collect(),
        }
    }

    pub(crate) fn for_each_point(&self, f: &mut dyn FnMut(&Point)) {
        for polygon in &self.polygons {
            polygon.for_each_point(f);
        }
    }
}
