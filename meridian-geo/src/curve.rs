//! Closed sets of curve variants used as elements of composite geometries.

use serde::{Deserialize, Serialize};

use crate::circular_string::CircularString;
use crate::compound_curve::CompoundCurve;
use crate::coordinate_system::CoordinateSystem;
use crate::geometry_type::GeometryType;
use crate::line_string::LineString;
use crate::point::Point;

/// Any member of the curve family. This is what a [`CurvePolygon`](crate::CurvePolygon) ring
/// may be.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Curve {
    /// A straight-segment curve.
    LineString(LineString),
    /// An arc curve.
    CircularString(CircularString),
    /// A chain of straight and arc curves.
    CompoundCurve(CompoundCurve),
}

impl Curve {
    /// Variant tag of the curve.
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Curve::LineString(_) => GeometryType::LineString,
            Curve::CircularString(_) => GeometryType::CircularString,
            Curve::CompoundCurve(_) => GeometryType::CompoundCurve,
        }
    }

    /// Coordinate system of the curve.
    pub fn coordinate_system(&self) -> CoordinateSystem {
        match self {
            Curve::LineString(c) => c.coordinate_system(),
            Curve::CircularString(c) => c.coordinate_system(),
            Curve::CompoundCurve(c) => c.coordinate_system(),
        }
    }

    /// Whether the curve has no points.
    pub fn is_empty(&self) -> bool {
        match self {
            Curve::LineString(c) => c.is_empty(),
            Curve::CircularString(c) => c.is_empty(),
            Curve::CompoundCurve(c) => c.is_empty(),
        }
    }

    /// First point of the curve, unless empty.
    pub fn start_point(&self) -> Option<&Point> {
        match self {
            Curve::LineString(c) => c.start_point(),
            Curve::CircularString(c) => c.start_point(),
            Curve::CompoundCurve(c) => c.start_point(),
        }
    }

    /// Last point of the curve, unless empty.
    pub fn end_point(&self) -> Option<&Point> {
        match self {
            Curve::LineString(c) => c.end_point(),
            Curve::CircularString(c) => c.end_point(),
            Curve::CompoundCurve(c) => c.end_point(),
        }
    }

    /// Whether the curve is non-empty and ends where it starts.
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
        match self {
            Curve::LineString(c) => Curve::LineString(c.map_points(cs, f)),
            Curve::CircularString(c) => Curve::CircularString(c.map_points(cs, f)),
            Curve::CompoundCurve(c) => Curve::CompoundCurve(c.map_points(cs, f)),
        }
    }

    pub(crate) fn for_each_point(&self, f: &mut dyn FnMut(&Point)) {
        match self {
            Curve::LineString(c) => c.for_each_point(f),
            Curve::CircularString(c) => c.for_each_point(f),
            Curve::CompoundCurve(c) => c.for_each_point(f),
        }
    }
}

impl From<LineString> for Curve {
    fn from(value: LineString) -> Self {
        Curve::LineString(value)
    }
}

impl From<CircularString> for Curve {
    fn from(value: CircularString) -> Self {
        Curve::CircularString(value)
    }
}

impl From<CompoundCurve> for Curve {
    fn from(value: CompoundCurve) -> Self {
        Curve::CompoundCurve(value)
    }
}

/// A single element of a [`CompoundCurve`]. Compound curves cannot nest, so only the simple
/// curve variants are allowed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CurveElement {
    /// A straight-segment element.
    LineString(LineString),
    /// An arc element.
    CircularString(CircularString),
}

impl CurveElement {
    /// Variant tag of the element.
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            CurveElement::LineString(_) => GeometryType::LineString,
            CurveElement::CircularString(_) => GeometryType::CircularString,
        }
    }

    /// Coordinate system of the element.
    pub fn coordinate_system(&self) -> CoordinateSystem {
        match self {
            CurveElement::LineString(c) => c.coordinate_system(),
            CurveElement::CircularString(c) => c.coordinate_system(),
        }
    }

    /// Whether the element has no points.
    pub fn is_empty(&self) -> bool {
        match self {
            CurveElement::LineString(c) => c.is_empty(),
            CurveElement::CircularString(c) => c.is_empty(),
        }
    }

    /// First point of the element, unless empty.
    pub fn start_point(&self) -> Option<&Point> {
        match self {
            CurveElement::LineString(c) => c.start_point(),
            CurveElement::CircularString(c) => c.start_point(),
        }
    }

    /// Last point of the element, unless empty.
    pub fn end_point(&self) -> Option<&Point> {
        match self {
            CurveElement::LineString(c) => c.end_point(),
            CurveElement::CircularString(c) => c.end_point(),
        }
    }

    pub(crate) fn map_points(
        &self,
        cs: CoordinateSystem,
        f: &dyn Fn(&Point, CoordinateSystem) -> Point,
    ) -> Self {
        match self {
            CurveElement::LineString(c) => CurveElement::LineString(c.map_points(cs, f)),
            CurveElement::CircularString(c) => CurveElement::CircularString(c.map_points(cs, f)),
        }
    }

    pub(crate) fn for_each_point(&self, f: &mut dyn FnMut(&Point)) {
        match self {
            CurveElement::LineString(c) => c.for_each_point(f),
            CurveElement::CircularString(c) => c.for_each_point(f),
        }
    }
}

impl From<LineString> for CurveElement {
    fn from(value: LineString) -> Self {
        CurveElement::LineString(value)
    }
}

impl From<CircularString> for CurveElement {
    fn from(value: CircularString) -> Self {
        CurveElement::CircularString(value)
    }
}

impl From<CurveElement> for Curve {
    fn from(value: CurveElement) -> Self {
        match value {
            CurveElement::LineString(c) => Curve::LineString(c),
            CurveElement::CircularString(c) => Curve::CircularString(c),
        }
    }
}
