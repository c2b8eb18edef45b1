//! See documentation for the [`Triangle`] type.

use serde::{Deserialize, Serialize};

use crate::coordinate_system::CoordinateSystem;
use crate::error::MeridianGeoError;
use crate::geometry_type::GeometryType;
use crate::line_string::LineString;
use crate::point::Point;

/// A polygon restricted to a single closed ring of four points and no holes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    cs: CoordinateSystem,
    ring: Option<LineString>,
}

impl Triangle {
    /// Creates a triangle from its exterior ring.
    ///
    /// The ring must have exactly four points and be closed (first point equal to the last).
    pub fn new(cs: CoordinateSystem, ring: LineString) -> Result<Self, MeridianGeoError> {
        cs.check_matches(ring.coordinate_system())?;

        if ring.points().len() != 4 {
            return Err(MeridianGeoError::invalid(
                GeometryType::Triangle,
                format!("ring must have exactly 4 points, got {}", ring.points().len()),
            ));
        }
        if !ring.is_closed() {
            return Err(MeridianGeoError::invalid(
                GeometryType::Triangle,
                "ring must be closed",
            ));
        }

        Ok(Self {
            cs,
            ring: Some(ring),
        })
    }

    /// Creates an empty triangle.
    pub fn empty(cs: CoordinateSystem) -> Self {
        Self { cs, ring: None }
    }

    /// Coordinate system of the triangle.
    pub fn coordinate_system(&self) -> CoordinateSystem {
        self.cs
    }

    /// The single ring of the triangle, unless empty.
    pub fn exterior_ring(&self) -> Option<&LineString> {
        self.ring.as_ref()
    }

    /// Whether the triangle has no ring.
    pub fn is_empty(&self) -> bool {
        self.ring.is_none()
    }

    pub(crate) fn map_points(
        &self,
        cs: CoordinateSystem,
        f: &dyn Fn(&Point, CoordinateSystem) -> Point,
    ) -> Self {
        Self {
            cs,
            ring: self.ring.as_ref().map(|r| r.map_points(cs, f)),
        }
    }

    pub(crate) fn for_each_point(&self, f: &mut dyn FnMut(&Point)) {
        if let Some(ring) = &self.ring {
            ring.for_each_point(f);
        }
    }
}
