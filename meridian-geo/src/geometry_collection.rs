//! See documentation for the [`GeometryCollection`] type.

use serde::{Deserialize, Serialize};

use crate::coordinate_system::CoordinateSystem;
use crate::error::MeridianGeoError;
use crate::geometry::Geometry;
use crate::point::Point;

/// A heterogeneous collection of geometries sharing one coordinate system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryCollection {
    cs: CoordinateSystem,
    geometries: Vec<Geometry>,
}

impl GeometryCollection {
    /// Creates a collection from the given geometries.
    pub fn new(cs: CoordinateSystem, geometries: Vec<Geometry>) -> Result<Self, MeridianGeoError> {
        for geometry in &geometries {
            cs.check_matches(geometry.coordinate_system())?;
        }

        Ok(Self { cs, geometries })
    }

    /// Creates an empty collection.
    pub fn empty(cs: CoordinateSystem) -> Self {
        Self {
            cs,
            geometries: vec![],
        }
    }

    /// Coordinate system of the collection.
    pub fn coordinate_system(&self) -> CoordinateSystem {
        self.cs
    }

    /// The collected geometries.
    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }

    /// Whether the collection has no elements. A collection of empty geometries is not empty.
    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }

    pub(crate) fn map_points(
        &self,
        cs: CoordinateSystem,
        f: &dyn Fn(&Point, CoordinateSystem) -> Point,
    ) -> Self {
        Self {
            cs,
            geometries: self
                .geometries
                .iter()
                .map(|g| g.transformed(cs, f))
                .collect(),
        }
    }

    pub(crate) fn for_each_point(&self, f: &mut dyn FnMut(&Point)) {
        for geometry in &self.geometries {
            geometry.for_each_point(f);
        }
    }
}
