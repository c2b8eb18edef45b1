//! See documentation for the [`Geometry`] type.

use serde::{Deserialize, Serialize};

use crate::bounding_box::BoundingBox;
use crate::circular_string::CircularString;
use crate::compound_curve::CompoundCurve;
use crate::coordinate_system::CoordinateSystem;
use crate::curve_polygon::CurvePolygon;
use crate::geometry_collection::GeometryCollection;
use crate::geometry_type::GeometryType;
use crate::line_string::LineString;
use crate::multi_line_string::MultiLineString;
use crate::multi_point::MultiPoint;
use crate::multi_polygon::MultiPolygon;
use crate::point::Point;
use crate::polygon::Polygon;
use crate::polyhedral_surface::{PolyhedralSurface, Tin};
use crate::triangle::Triangle;

/// Any geometry of the Simple Features model.
///
/// This is a closed set: every geometry value is exactly one of these 13 variants, and each
/// variant carries exactly one [`CoordinateSystem`] that constrains all its coordinates. All
/// values are immutable; the transformation methods (`with_srid`, `without_z`, …) return new
/// values that share no mutable state with the original.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    /// A single position.
    Point(Point),
    /// A straight-segment curve.
    LineString(LineString),
    /// An arc curve.
    CircularString(CircularString),
    /// A chain of straight and arc curves.
    CompoundCurve(CompoundCurve),
    /// A straight-edged surface.
    Polygon(Polygon),
    /// A surface with possibly curved rings.
    CurvePolygon(CurvePolygon),
    /// A one-ring polygon with exactly three corners.
    Triangle(Triangle),
    /// A collection of points.
    MultiPoint(MultiPoint),
    /// A collection of line strings.
    MultiLineString(MultiLineString),
    /// A collection of polygons.
    MultiPolygon(MultiPolygon),
    /// A heterogeneous collection.
    GeometryCollection(GeometryCollection),
    /// A surface of polygon patches.
    PolyhedralSurface(PolyhedralSurface),
    /// A surface of triangle patches.
    Tin(Tin),
}

impl Geometry {
    /// Variant tag of the geometry.
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::LineString(_) => GeometryType::LineString,
            Geometry::CircularString(_) => GeometryType::CircularString,
            Geometry::CompoundCurve(_) => GeometryType::CompoundCurve,
            Geometry::Polygon(_) => GeometryType::Polygon,
            Geometry::CurvePolygon(_) => GeometryType::CurvePolygon,
            Geometry::Triangle(_) => GeometryType::Triangle,
            Geometry::MultiPoint(_) => GeometryType::MultiPoint,
            Geometry::MultiLineString(_) => GeometryType::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryType::GeometryCollection,
            Geometry::PolyhedralSurface(_) => GeometryType::PolyhedralSurface,
            Geometry::Tin(_) => GeometryType::Tin,
        }
    }

    /// Coordinate system shared by every coordinate of the geometry.
    pub fn coordinate_system(&self) -> CoordinateSystem {
        match self {
            Geometry::Point(g) => g.coordinate_system(),
            Geometry::LineString(g) => g.coordinate_system(),
            Geometry::CircularString(g) => g.coordinate_system(),
            Geometry::CompoundCurve(g) => g.coordinate_system(),
            Geometry::Polygon(g) => g.coordinate_system(),
            Geometry::CurvePolygon(g) => g.coordinate_system(),
            Geometry::Triangle(g) => g.coordinate_system(),
            Geometry::MultiPoint(g) => g.coordinate_system(),
            Geometry::MultiLineString(g) => g.coordinate_system(),
            Geometry::MultiPolygon(g) => g.coordinate_system(),
            Geometry::GeometryCollection(g) => g.coordinate_system(),
            Geometry::PolyhedralSurface(g) => g.coordinate_system(),
            Geometry::Tin(g) => g.coordinate_system(),
        }
    }

    /// Spatial reference identifier of the geometry. `0` means "not set".
    pub fn srid(&self) -> i32 {
        self.coordinate_system().srid()
    }

    /// Whether the geometry has no elements.
    ///
    /// A container with zero elements is empty; a container holding only empty elements still
    /// has elements and is not.
    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Point(g) => g.is_empty(),
            Geometry::LineString(g) => g.is_empty(),
            Geometry::CircularString(g) => g.is_empty(),
            Geometry::CompoundCurve(g) => g.is_empty(),
            Geometry::Polygon(g) => g.is_empty(),
            Geometry::CurvePolygon(g) => g.is_empty(),
            Geometry::Triangle(g) => g.is_empty(),
            Geometry::MultiPoint(g) => g.is_empty(),
            Geometry::MultiLineString(g) => g.is_empty(),
            Geometry::MultiPolygon(g) => g.is_empty(),
            Geometry::GeometryCollection(g) => g.is_empty(),
            Geometry::PolyhedralSurface(g) => g.is_empty(),
            Geometry::Tin(g) => g.is_empty(),
        }
    }

    /// Topological dimension of the geometry: 0 for points, 1 for curves, 2 for surfaces.
    ///
    /// For a heterogeneous collection this is the maximum dimension of its elements.
    pub fn dimension(&self) -> usize {
        match self {
            Geometry::Point(_) | Geometry::MultiPoint(_) => 0,
            Geometry::LineString(_)
            | Geometry::CircularString(_)
            | Geometry::CompoundCurve(_)
            | Geometry::MultiLineString(_) => 1,
            Geometry::Polygon(_)
            | Geometry::CurvePolygon(_)
            | Geometry::Triangle(_)
            | Geometry::MultiPolygon(_)
            | Geometry::PolyhedralSurface(_)
            | Geometry::Tin(_) => 2,
            Geometry::GeometryCollection(g) => g
                .geometries()
                .iter()
                .map(Geometry::dimension)
                .max()
                .unwrap_or(0),
        }
    }

    /// Returns a copy of the geometry with the SRID replaced everywhere.
    pub fn with_srid(&self, srid: i32) -> Geometry {
        self.transformed(self.coordinate_system().with_srid(srid), &rebuild_point)
    }

    /// Returns a copy of the geometry with the Z coordinates removed.
    pub fn without_z(&self) -> Geometry {
        if !self.coordinate_system().has_z() {
            return self.clone();
        }
        self.transformed(self.coordinate_system().without_z(), &rebuild_point)
    }

    /// Returns a copy of the geometry with the M coordinates removed.
    pub fn without_m(&self) -> Geometry {
        if !self.coordinate_system().has_m() {
            return self.clone();
        }
        self.transformed(self.coordinate_system().without_m(), &rebuild_point)
    }

    /// Returns a copy of the geometry with every coordinate rounded to the given number of
    /// decimal places.
    pub fn with_rounded_coordinates(&self, decimals: u32) -> Geometry {
        let factor = 10f64.powi(decimals as i32);
        self.transformed(self.coordinate_system(), &move |p, cs| {
            let coords = p
                .coordinates()
                .iter()
                .map(|c| (c * factor).round() / factor)
                .collect();
            Point::new_unchecked(cs, coords)
        })
    }

    /// Returns a copy of the geometry with the X and Y axes swapped.
    pub fn with_swapped_xy(&self) -> Geometry {
        self.transformed(self.coordinate_system(), &|p, cs| {
            let mut coords = p.coordinates().to_vec();
            if coords.len() >= 2 {
                coords.swap(0, 1);
            }
            Point::new_unchecked(cs, coords)
        })
    }

    /// The minimal axis-aligned envelope of the geometry. Empty for empty geometries.
    pub fn bounding_box(&self) -> BoundingBox {
        let mut bbox = BoundingBox::new();
        self.for_each_point(&mut |point| {
            // Every point shares the geometry's coordinate system, so extension cannot mix
            // dimensionalities here.
            if let Ok(extended) = bbox.extended_with_point(point) {
                bbox = extended;
            }
        });
        bbox
    }

    /// Rebuilds the geometry with a new coordinate system, passing every point through `f`.
    ///
    /// Mappings preserve point counts and coordinate-wise equality of shared points, so the
    /// construction invariants cannot be violated by them.
    pub(crate) fn transformed(
        &self,
        cs: CoordinateSystem,
        f: &dyn Fn(&Point, CoordinateSystem) -> Point,
    ) -> Geometry {
        match self {
            Geometry::Point(g) => Geometry::Point(f(g, cs)),
            Geometry::LineString(g) => Geometry::LineString(g.map_points(cs, f)),
            Geometry::CircularString(g) => Geometry::CircularString(g.map_points(cs, f)),
            Geometry::CompoundCurve(g) => Geometry::CompoundCurve(g.map_points(cs, f)),
            Geometry::Polygon(g) => Geometry::Polygon(g.map_points(cs, f)),
            Geometry::CurvePolygon(g) => Geometry::CurvePolygon(g.map_points(cs, f)),
            Geometry::Triangle(g) => Geometry::Triangle(g.map_points(cs, f)),
            Geometry::MultiPoint(g) => Geometry::MultiPoint(g.map_points(cs, f)),
            Geometry::MultiLineString(g) => Geometry::MultiLineString(g.map_points(cs, f)),
            Geometry::MultiPolygon(g) => Geometry::MultiPolygon(g.map_points(cs, f)),
            Geometry::GeometryCollection(g) => Geometry::GeometryCollection(g.map_points(cs, f)),
            Geometry::PolyhedralSurface(g) => Geometry::PolyhedralSurface(g.map_points(cs, f)),
            Geometry::Tin(g) => Geometry::Tin(g.map_points(cs, f)),
        }
    }

    pub(crate) fn for_each_point(&self, f: &mut dyn FnMut(&Point)) {
        match self {
            Geometry::Point(g) => f(g),
            Geometry::LineString(g) => g.for_each_point(f),
            Geometry::CircularString(g) => g.for_each_point(f),
            Geometry::CompoundCurve(g) => g.for_each_point(f),
            Geometry::Polygon(g) => g.for_each_point(f),
            Geometry::CurvePolygon(g) => g.for_each_point(f),
            Geometry::Triangle(g) => g.for_each_point(f),
            Geometry::MultiPoint(g) => g.for_each_point(f),
            Geometry::MultiLineString(g) => g.for_each_point(f),
            Geometry::MultiPolygon(g) => g.for_each_point(f),
            Geometry::GeometryCollection(g) => g.for_each_point(f),
            Geometry::PolyhedralSurface(g) => g.for_each_point(f),
            Geometry::Tin(g) => g.for_each_point(f),
        }
    }
}

// Re-assembles a point in a target coordinate system that stores a subset of the source axes,
// possibly with a different SRID.
fn rebuild_point(point: &Point, cs: CoordinateSystem) -> Point {
    if point.is_empty() {
        return Point::empty(cs);
    }

    let mut coords = Vec::with_capacity(cs.coordinate_dimension());
    coords.push(point.x().unwrap_or(f64::NAN));
    coords.push(point.y().unwrap_or(f64::NAN));
    if cs.has_z() {
        coords.push(point.z().unwrap_or(f64::NAN));
    }
    if cs.has_m() {
        coords.push(point.m().unwrap_or(f64::NAN));
    }
    Point::new_unchecked(cs, coords)
}

impl From<Point> for Geometry {
    fn from(value: Point) -> Self {
        Geometry::Point(value)
    }
}

impl From<LineString> for Geometry {
    fn from(value: LineString) -> Self {
        Geometry::LineString(value)
    }
}

impl From<CircularString> for Geometry {
    fn from(value: CircularString) -> Self {
        Geometry::CircularString(value)
    }
}

impl From<CompoundCurve> for Geometry {
    fn from(value: CompoundCurve) -> Self {
        Geometry::CompoundCurve(value)
    }
}

impl From<Polygon> for Geometry {
    fn from(value: Polygon) -> Self {
        Geometry::Polygon(value)
    }
}

impl From<CurvePolygon> for Geometry {
    fn from(value: CurvePolygon) -> Self {
        Geometry::CurvePolygon(value)
    }
}

impl From<Triangle> for Geometry {
    fn from(value: Triangle) -> Self {
        Geometry::Triangle(value)
    }
}

impl From<MultiPoint> for Geometry {
    fn from(value: MultiPoint) -> Self {
        Geometry::MultiPoint(value)
    }
}

impl From<MultiLineString> for Geometry {
    fn from(value: MultiLineString) -> Self {
        Geometry::MultiLineString(value)
    }
}

impl From<MultiPolygon> for Geometry {
    fn from(value: MultiPolygon) -> Self {
        Geometry::MultiPolygon(value)
    }
}

impl From<GeometryCollection> for Geometry {
    fn from(value: GeometryCollection) -> Self {
        Geometry::GeometryCollection(value)
    }
}

impl From<PolyhedralSurface> for Geometry {
    fn from(value: PolyhedralSurface) -> Self {
        Geometry::PolyhedralSurface(value)
    }
}

impl From<Tin> for Geometry {
    fn from(value: Tin) -> Self {
        Geometry::Tin(value)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn line_z(coords: &[(f64, f64, f64)], srid: i32) -> Geometry {
        let cs = CoordinateSystem::xyz().with_srid(srid);
        let points = coords
            .iter()
            .map(|&(x, y, z)| Point::new_unchecked(cs, vec![x, y, z]))
            .collect();
        LineString::new(cs, points).unwrap().into()
    }

    #[test]
    fn with_srid_reaches_every_level() {
        let collection: Geometry = GeometryCollection::new(
            CoordinateSystem::xyz(),
            vec![line_z(&[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)], 0)],
        )
        .unwrap()
        .into();

        let tagged = collection.with_srid(3857);
        assert_eq!(tagged.srid(), 3857);
        let Geometry::GeometryCollection(inner) = &tagged else {
            panic!("variant changed");
        };
        assert_eq!(inner.geometries()[0].srid(), 3857);
    }

    #[test]
    fn without_z_drops_the_axis() {
        let geometry = line_z(&[(1.0, 2.0, 3.0), (4.0, 5.0, 6.0)], 4326);
        let flat = geometry.without_z();

        assert!(!flat.coordinate_system().has_z());
        assert_eq!(flat.srid(), 4326);
        let Geometry::LineString(line) = &flat else {
            panic!("variant changed");
        };
        assert_eq!(line.points()[0].coordinates(), &[1.0, 2.0]);
        assert_eq!(line.points()[1].coordinates(), &[4.0, 5.0]);
    }

    #[test]
    fn swap_and_round() {
        let geometry: Geometry = Point::xy(1.23456, 7.65432).into();

        let Geometry::Point(swapped) = geometry.with_swapped_xy() else {
            panic!("variant changed");
        };
        assert_eq!(swapped.coordinates(), &[7.65432, 1.23456]);

        let Geometry::Point(rounded) = geometry.with_rounded_coordinates(2) else {
            panic!("variant changed");
        };
        assert_relative_eq!(rounded.x().unwrap(), 1.23);
        assert_relative_eq!(rounded.y().unwrap(), 7.65);
    }

    #[test]
    fn transformations_preserve_emptiness() {
        let empty: Geometry = Point::empty(CoordinateSystem::xyzm()).into();
        assert!(empty.without_z().is_empty());
        assert!(empty.with_srid(4326).is_empty());
        assert!(empty.with_swapped_xy().is_empty());
    }

    #[test]
    fn bounding_box_folds_all_points() {
        let geometry = line_z(&[(1.0, 5.0, -1.0), (3.0, 2.0, 7.0)], 0);
        let bbox = geometry.bounding_box();
        let sw = bbox.south_west().unwrap();
        let ne = bbox.north_east().unwrap();
        assert_eq!(sw.coordinates(), &[1.0, 2.0, -1.0]);
        assert_eq!(ne.coordinates(), &[3.0, 5.0, 7.0]);
    }

    #[test]
    fn collection_dimension_is_max_of_elements() {
        let cs = CoordinateSystem::xy();
        let collection: Geometry = GeometryCollection::new(
            cs,
            vec![
                Point::xy(0.0, 0.0).into(),
                Polygon::empty(cs).into(),
            ],
        )
        .unwrap()
        .into();
        assert_eq!(collection.dimension(), 2);
        assert_eq!(Geometry::from(Point::xy(0.0, 0.0)).dimension(), 0);
    }
}
