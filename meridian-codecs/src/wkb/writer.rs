//! WKB and EWKB encoding.

use meridian_geo::{
    CircularString, CoordinateSystem, Curve, CurveElement, Geometry, GeometryType, LineString,
    Point, Polygon, Triangle,
};

use super::buffer::{WkbBufferMut, WkbByteOrder};
use super::type_code::{ewkb_type_word, plain_type_word};
use super::WkbDialect;
use crate::error::WkbError;

/// Encoder producing WKB or EWKB byte streams.
///
/// In the EWKB dialect the SRID is embedded once, in the outermost header, and only when it is
/// non-zero. Plain WKB has no SRID slot at all, so writing in that dialect loses the SRID.
#[derive(Debug, Copy, Clone)]
pub struct WkbWriter {
    dialect: WkbDialect,
    byte_order: WkbByteOrder,
    nan_empty_points: bool,
}

impl WkbWriter {
    /// Creates a writer for the given dialect using the byte order of the current machine.
    pub fn new(dialect: WkbDialect) -> Self {
        Self {
            dialect,
            byte_order: WkbByteOrder::native(),
            nan_empty_points: false,
        }
    }

    /// Makes the writer emit the given byte order instead of the machine's.
    pub fn with_byte_order(mut self, byte_order: WkbByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    /// Makes the writer encode empty points as all-NaN coordinates.
    ///
    /// Without this an empty point anywhere in the geometry is an error, because WKB has no
    /// other way to represent one.
    pub fn with_nan_empty_points(mut self) -> Self {
        self.nan_empty_points = true;
        self
    }

    /// Encodes one geometry.
    pub fn write(&self, geometry: &Geometry) -> Result<Vec<u8>, WkbError> {
        let mut out = WkbBufferMut::new(self.byte_order);
        self.write_geometry(&mut out, geometry, true)?;
        Ok(out.into_vec())
    }

    fn write_geometry(
        &self,
        out: &mut WkbBufferMut,
        geometry: &Geometry,
        outermost: bool,
    ) -> Result<(), WkbError> {
        self.write_header(
            out,
            geometry.geometry_type(),
            geometry.coordinate_system(),
            outermost,
        );

        match geometry {
            Geometry::Point(g) => self.write_point_body(out, g)?,
            Geometry::LineString(g) => self.write_point_sequence(out, g.points())?,
            Geometry::CircularString(g) => self.write_point_sequence(out, g.points())?,
            Geometry::CompoundCurve(g) => {
                out.write_u32(g.elements().len() as u32);
                for element in g.elements() {
                    self.write_curve_element(out, element)?;
                }
            }
            Geometry::Polygon(g) => self.write_rings(out, g.rings())?,
            Geometry::CurvePolygon(g) => {
                out.write_u32(g.rings().len() as u32);
                for ring in g.rings() {
                    self.write_curve(out, ring)?;
                }
            }
            Geometry::Triangle(g) => self.write_triangle_body(out, g)?,
            Geometry::MultiPoint(g) => {
                out.write_u32(g.points().len() as u32);
                for point in g.points() {
                    self.write_header(out, GeometryType::Point, point.coordinate_system(), false);
                    self.write_point_body(out, point)?;
                }
            }
            Geometry::MultiLineString(g) => {
                out.write_u32(g.line_strings().len() as u32);
                for line in g.line_strings() {
                    self.write_line_string(out, line)?;
                }
            }
            Geometry::MultiPolygon(g) => {
                out.write_u32(g.polygons().len() as u32);
                for polygon in g.polygons() {
                    self.write_polygon(out, polygon)?;
                }
            }
            Geometry::GeometryCollection(g) => {
                out.write_u32(g.geometries().len() as u32);
                for child in g.geometries() {
                    self.write_geometry(out, child, false)?;
                }
            }
            Geometry::PolyhedralSurface(g) => {
                out.write_u32(g.patches().len() as u32);
                for patch in g.patches() {
                    self.write_polygon(out, patch)?;
                }
            }
            Geometry::Tin(g) => {
                out.write_u32(g.patches().len() as u32);
                for patch in g.patches() {
                    self.write_header(out, GeometryType::Triangle, patch.coordinate_system(), false);
                    self.write_triangle_body(out, patch)?;
                }
            }
        }
        Ok(())
    }

    fn write_header(
        &self,
        out: &mut WkbBufferMut,
        geometry_type: GeometryType,
        cs: CoordinateSystem,
        outermost: bool,
    ) {
        out.write_byte_order();
        match self.dialect {
            WkbDialect::Wkb => out.write_u32(plain_type_word(geometry_type, cs)),
            WkbDialect::Ewkb => {
                let with_srid = outermost && cs.srid() != 0;
                out.write_u32(ewkb_type_word(geometry_type, cs, with_srid));
                if with_srid {
                    out.write_u32(cs.srid() as u32);
                }
            }
        }
    }

    fn write_point_body(&self, out: &mut WkbBufferMut, point: &Point) -> Result<(), WkbError> {
        if point.is_empty() {
            if !self.nan_empty_points {
                return Err(WkbError::EmptyPoint);
            }
            for _ in 0..point.coordinate_system().coordinate_dimension() {
                out.write_f64(f64::NAN);
            }
            return Ok(());
        }

        for &coordinate in point.coordinates() {
            out.write_f64(coordinate);
        }
        Ok(())
    }

    fn write_point_sequence(
        &self,
        out: &mut WkbBufferMut,
        points: &[Point],
    ) -> Result<(), WkbError> {
        out.write_u32(points.len() as u32);
        for point in points {
            self.write_point_body(out, point)?;
        }
        Ok(())
    }

    fn write_rings(&self, out: &mut WkbBufferMut, rings: &[LineString]) -> Result<(), WkbError> {
        out.write_u32(rings.len() as u32);
        for ring in rings {
            self.write_point_sequence(out, ring.points())?;
        }
        Ok(())
    }

    fn write_triangle_body(&self, out: &mut WkbBufferMut, triangle: &Triangle) -> Result<(), WkbError> {
        match triangle.exterior_ring() {
            Some(ring) => {
                out.write_u32(1);
                self.write_point_sequence(out, ring.points())
            }
            None => {
                out.write_u32(0);
                Ok(())
            }
        }
    }

    fn write_line_string(&self, out: &mut WkbBufferMut, line: &LineString) -> Result<(), WkbError> {
        self.write_header(out, GeometryType::LineString, line.coordinate_system(), false);
        self.write_point_sequence(out, line.points())
    }

    fn write_circular_string(
        &self,
        out: &mut WkbBufferMut,
        arc: &CircularString,
    ) -> Result<(), WkbError> {
        self.write_header(out, GeometryType::CircularString, arc.coordinate_system(), false);
        self.write_point_sequence(out, arc.points())
    }

    fn write_polygon(&self, out: &mut WkbBufferMut, polygon: &Polygon) -> Result<(), WkbError> {
        self.write_header(out, GeometryType::Polygon, polygon.coordinate_system(), false);
        self.write_rings(out, polygon.rings())
    }

    fn write_curve_element(
        &self,
        out: &mut WkbBufferMut,
        element: &CurveElement,
    ) -> Result<(), WkbError> {
        match element {
            CurveElement::LineString(c) => self.write_line_string(out, c),
            CurveElement::CircularString(c) => self.write_circular_string(out, c),
        }
    }

    fn write_curve(&self, out: &mut WkbBufferMut, curve: &Curve) -> Result<(), WkbError> {
        match curve {
            Curve::LineString(c) => self.write_line_string(out, c),
            Curve::CircularString(c) => self.write_circular_string(out, c),
            Curve::CompoundCurve(c) => {
                self.write_header(out, GeometryType::CompoundCurve, c.coordinate_system(), false);
                out.write_u32(c.elements().len() as u32);
                for element in c.elements() {
                    self.write_curve_element(out, element)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use meridian_geo::{CompoundCurve, CurvePolygon, MultiPoint, Tin};

    use super::super::WkbReader;
    use super::*;

    fn to_hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    #[test]
    fn writes_little_endian_point() {
        let geometry: Geometry = Point::xy(10.0, -20.0).into();
        let bytes = WkbWriter::new(WkbDialect::Wkb)
            .with_byte_order(WkbByteOrder::LittleEndian)
            .write(&geometry)
            .unwrap();
        assert_eq!(
            to_hex(&bytes),
            "0101000000000000000000244000000000000034c0"
        );
    }

    #[test]
    fn writes_ewkb_srid_point() {
        let geometry: Geometry = Point::xy(10.0, -20.0).with_srid(4326).into();
        let bytes = WkbWriter::new(WkbDialect::Ewkb)
            .with_byte_order(WkbByteOrder::LittleEndian)
            .write(&geometry)
            .unwrap();
        assert_eq!(
            to_hex(&bytes),
            "0101000020e6100000000000000000244000000000000034c0"
        );
    }

    #[test]
    fn plain_wkb_never_embeds_the_srid() {
        let geometry: Geometry = Point::xy(10.0, -20.0).with_srid(4326).into();
        let bytes = WkbWriter::new(WkbDialect::Wkb)
            .with_byte_order(WkbByteOrder::LittleEndian)
            .write(&geometry)
            .unwrap();
        assert_eq!(WkbReader::new().read(&bytes).unwrap().srid(), 0);
    }

    #[test]
    fn empty_point_needs_the_opt_in() {
        let geometry: Geometry = Point::empty(CoordinateSystem::xy()).into();

        assert_matches!(
            WkbWriter::new(WkbDialect::Wkb).write(&geometry),
            Err(WkbError::EmptyPoint)
        );

        let bytes = WkbWriter::new(WkbDialect::Wkb)
            .with_nan_empty_points()
            .write(&geometry)
            .unwrap();
        let read = WkbReader::new()
            .with_nan_empty_points()
            .read(&bytes)
            .unwrap();
        assert_eq!(read, geometry);
    }

    #[test]
    fn ewkb_srid_reaches_nested_geometries_on_read() {
        let cs = CoordinateSystem::xy().with_srid(3857);
        let geometry: Geometry = MultiPoint::new(
            cs,
            vec![
                Point::xy(1.0, 2.0).with_srid(3857),
                Point::xy(3.0, 4.0).with_srid(3857),
            ],
        )
        .unwrap()
        .into();

        let bytes = WkbWriter::new(WkbDialect::Ewkb).write(&geometry).unwrap();
        let read = WkbReader::new().read(&bytes).unwrap();

        let Geometry::MultiPoint(multi) = &read else {
            panic!("wrong variant");
        };
        assert_eq!(multi.points()[0].coordinate_system().srid(), 3857);
        assert_eq!(read, geometry);
    }

    #[test]
    fn round_trips_curved_and_composite_geometries() {
        let cs = CoordinateSystem::xyzm();
        let point = |x: f64, y: f64| Point::xyzm(x, y, x + y, 0.5);

        let arc = meridian_geo::CircularString::new(
            cs,
            vec![point(0.0, 0.0), point(1.0, 1.0), point(2.0, 0.0)],
        )
        .unwrap();
        let closing = LineString::new(cs, vec![point(2.0, 0.0), point(0.0, 0.0)]).unwrap();
        let boundary = CompoundCurve::new(
            cs,
            vec![arc.clone().into(), closing.into()],
        )
        .unwrap();
        let surface = CurvePolygon::new(cs, vec![boundary.into()]).unwrap();

        let ring = LineString::new(
            cs,
            vec![point(0.0, 0.0), point(1.0, 0.0), point(0.0, 1.0), point(0.0, 0.0)],
        )
        .unwrap();
        let tin = Tin::new(cs, vec![Triangle::new(cs, ring).unwrap()]).unwrap();

        let collection: Geometry = meridian_geo::GeometryCollection::new(
            cs,
            vec![surface.into(), tin.into(), arc.into()],
        )
        .unwrap()
        .into();

        for dialect in [WkbDialect::Wkb, WkbDialect::Ewkb] {
            for byte_order in [WkbByteOrder::BigEndian, WkbByteOrder::LittleEndian] {
                let bytes = WkbWriter::new(dialect)
                    .with_byte_order(byte_order)
                    .write(&collection)
                    .unwrap();
                assert_eq!(WkbReader::new().read(&bytes).unwrap(), collection);
            }
        }
    }
}
