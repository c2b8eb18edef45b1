//! See documentation for the [`CurvePolygon`] type.

use serde::{Deserialize, Serialize};

use crate::coordinate_system::CoordinateSystem;
use crate::curve::Curve;
use crate::error::MeridianGeoError;
use crate::point::Point;

/// A polygon whose rings may be any curve variant, including circular strings and compound
/// curves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurvePolygon {
    cs: CoordinateSystem,
    rings: Vec<Curve>,
}

impl CurvePolygon {
    /// Creates a curve polygon from its rings, exterior first.
    pub fn new(cs: CoordinateSystem, rings: Vec<Curve>) -> Result<Self, MeridianGeoError> {
        for ring in &rings {
            cs.check_matches(ring.coordinate_system())?;
        }

        Ok(Self { cs, rings })
    }

    /// Creates an empty curve polygon.
    pub fn empty(cs: CoordinateSystem) -> Self {
        Self { cs, rings: vec![] }
    }

    /// Coordinate system of the curve polygon.
    pub fn coordinate_system(&self) -> CoordinateSystem {
        self.cs
    }

    /// All rings, exterior first.
    pub fn rings(&self) -> &[Curve] {
        &self.rings
    }

    /// The exterior ring, unless the curve polygon is empty.
    pub fn exterior_ring(&self) -> Option<&Curve> {
        self.rings.first()
    }

    /// Whether the curve polygon has no rings.
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    pub(crate) fn map_points(
        &self,
        cs: CoordinateSystem,
        f: &dyn Fn(&Point, CoordinateSystem) -> Point,
    ) -> Self {
        Self {
            cs,
            rings: self.rings.iter().map(|r| r.map_points(cs, f)).collect(),
        }
    }

    pub(crate) fn for_each_point(&self, f: &mut dyn FnMut(&Point)) {
        for ring in &self.rings {
            ring.for_each_point(f);
        }
    }
}
