//! See documentation for the [`Polygon`] type.

use serde::{Deserialize, Serialize};

use crate::coordinate_system::CoordinateSystem;
use crate::error::MeridianGeoError;
use crate::line_string::LineString;
use crate::point::Point;

/// A surface bounded by straight-edged rings.
///
/// The first ring is the exterior boundary; any further rings are interior holes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    cs: CoordinateSystem,
    rings: Vec<LineString>,
}

impl Polygon {
    /// Creates a polygon from its rings.
    pub fn new(cs: CoordinateSystem, rings: Vec<LineString>) -> Result<Self, MeridianGeoError> {
        for ring in &rings {
            cs.check_matches(ring.coordinate_system())?;
        }

        Ok(Self { cs, rings })
    }

    /// Creates an empty polygon.
    pub fn empty(cs: CoordinateSystem) -> Self {
        Self { cs, rings: vec![] }
    }

    /// Coordinate system of the polygon.
    pub fn coordinate_system(&self) -> CoordinateSystem {
        self.cs
    }

    /// All rings, exterior first.
    pub fn rings(&self) -> &[LineString] {
        &self.rings
    }

    /// The exterior ring, unless the polygon is empty.
    pub fn exterior_ring(&self) -> Option<&LineString> {
        self.rings.first()
    }

    /// The interior rings, exterior excluded.
    pub fn interior_rings(&self) -> &[LineString] {
        if self.rings.is_empty() {
            &[]
        } else {
            &self.rings[1..]
        }
    }

    /// Whether the polygon has no rings.
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
