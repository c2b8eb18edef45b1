//! See documentation for the [`GeometryType`] enum.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Tag identifying one of the geometry variants of [`Geometry`](crate::Geometry).
///
/// Family membership (curve, surface, collection) is a property of the tag, so code that only
/// needs to know "is this a curve" does not have to match all 13 variants.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryType {
    /// A single position, possibly empty.
    Point,
    /// A sequence of straight line segments.
    LineString,
    /// A sequence of circular arcs.
    CircularString,
    /// A continuous chain of line strings and circular strings.
    CompoundCurve,
    /// A surface bounded by straight-edged rings.
    Polygon,
    /// A surface bounded by rings that may be curved.
    CurvePolygon,
    /// A polygon with exactly one closed 4-point ring.
    Triangle,
    /// A collection of points.
    MultiPoint,
    /// A collection of line strings.
    MultiLineString,
    /// A collection of polygons.
    MultiPolygon,
    /// A heterogeneous collection of geometries.
    GeometryCollection,
    /// A surface assembled from polygon patches.
    PolyhedralSurface,
    /// A polyhedral surface restricted to triangle patches.
    Tin,
}

impl GeometryType {
    /// Canonical mixed-case name of the variant, e.g. `"LineString"`.
    ///
    /// For the variants GeoJSON knows about this is exactly the GeoJSON `type` string; the WKT
    /// keyword is this name in upper case.
    pub fn name(&self) -> &'static str {
        match self {
            GeometryType::Point => "Point",
            GeometryType::LineString => "LineString",
            GeometryType::CircularString => "CircularString",
            GeometryType::CompoundCurve => "CompoundCurve",
            GeometryType::Polygon => "Polygon",
            GeometryType::CurvePolygon => "CurvePolygon",
            GeometryType::Triangle => "Triangle",
            GeometryType::MultiPoint => "MultiPoint",
            GeometryType::MultiLineString => "MultiLineString",
            GeometryType::MultiPolygon => "MultiPolygon",
            GeometryType::GeometryCollection => "GeometryCollection",
            GeometryType::PolyhedralSurface => "PolyhedralSurface",
            GeometryType::Tin => "Tin",
        }
    }

    /// Whether the variant belongs to the 1-dimensional curve family.
    pub fn is_curve(&self) -> bool {
        matches!(
            self,
            GeometryType::LineString | GeometryType::CircularString | GeometryType::CompoundCurve
        )
    }

    /// Whether the variant belongs to the 2-dimensional surface family.
    pub fn is_surface(&self) -> bool {
        matches!(
            self,
            GeometryType::Polygon
                | GeometryType::CurvePolygon
                | GeometryType::Triangle
                | GeometryType::PolyhedralSurface
                | GeometryType::Tin
        )
    }

    /// Whether the variant is a collection of independent sub-geometries.
    pub fn is_collection(&self) -> bool {
        matches!(
            self,
            GeometryType::MultiPoint
                | GeometryType::MultiLineString
                | GeometryType::MultiPolygon
                | GeometryType::GeometryCollection
        )
    }
}

impl Display for GeometryType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn families() {
        assert!(GeometryType::CompoundCurve.is_curve());
        assert!(!GeometryType::Point.is_curve());
        assert!(GeometryType::Tin.is_surface());
        assert!(!GeometryType::Tin.is_collection());
        assert!(GeometryType::GeometryCollection.is_collection());
    }
}
