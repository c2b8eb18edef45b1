//! WKB and EWKB decoding.

use meridian_geo::{
    CircularString, CompoundCurve, CoordinateSystem, Curve, CurveElement, CurvePolygon, Geometry,
    GeometryCollection, GeometryType, LineString, MeridianGeoError, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon, PolyhedralSurface, Tin, Triangle,
};

use super::buffer::WkbBuffer;
use super::type_code::decode_type_word;
use crate::error::WkbError;

/// Decoder for WKB and EWKB byte streams.
///
/// The dialect is detected per geometry from the type word, so a single reader handles both.
/// When a nested geometry carries its own SRID (PostGIS never writes one, but other producers
/// do), the outermost SRID wins and the nested value is logged and dropped.
#[derive(Debug, Default, Copy, Clone)]
pub struct WkbReader {
    nan_empty_points: bool,
}

impl WkbReader {
    /// Creates a reader that rejects all-NaN point coordinates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the reader decode a point whose coordinates are all NaN as the empty point.
    pub fn with_nan_empty_points(mut self) -> Self {
        self.nan_empty_points = true;
        self
    }

    /// Decodes one geometry occupying the whole input.
    pub fn read(&self, bytes: &[u8]) -> Result<Geometry, WkbError> {
        let mut buf = WkbBuffer::new(bytes);
        let geometry = self.read_geometry(&mut buf, None)?;
        if !buf.is_end() {
            return Err(WkbError::TrailingData(buf.remaining()));
        }
        Ok(geometry)
    }

    /// `outer_srid` is `None` only for the outermost geometry; nested geometries inherit the
    /// outer SRID whatever their own header says.
    fn read_geometry(
        &self,
        buf: &mut WkbBuffer,
        outer_srid: Option<i32>,
    ) -> Result<Geometry, WkbError> {
        buf.read_byte_order()?;
        let header = decode_type_word(buf.read_u32("geometry type")?)?;

        let srid = if header.has_srid {
            let embedded = buf.read_u32("SRID")? as i32;
            match outer_srid {
                None => embedded,
                Some(outer) => {
                    log::debug!(
                        "ignoring SRID {embedded} of a nested {}: the outermost SRID {outer} is \
                         authoritative",
                        header.geometry_type
                    );
                    outer
                }
            }
        } else {
            outer_srid.unwrap_or(0)
        };
        let cs = CoordinateSystem::new(header.has_z, header.has_m, srid);

        Ok(match header.geometry_type {
            GeometryType::Point => self.read_point(buf, cs)?.into(),
            GeometryType::LineString => {
                let points = self.read_point_sequence(buf, cs)?;
                LineString::new(cs, points)?.into()
            }
            GeometryType::CircularString => {
                let points = self.read_point_sequence(buf, cs)?;
                CircularString::new(cs, points)?.into()
            }
            GeometryType::CompoundCurve => {
                let elements = self.read_children(buf, cs, |child| match child {
                    Geometry::LineString(c) => Ok(CurveElement::LineString(c)),
                    Geometry::CircularString(c) => Ok(CurveElement::CircularString(c)),
                    other => Err(unexpected_child(GeometryType::CompoundCurve, &other)),
                })?;
                CompoundCurve::new(cs, elements)?.into()
            }
            GeometryType::Polygon => Polygon::new(cs, self.read_rings(buf, cs)?)?.into(),
            GeometryType::CurvePolygon => {
                let rings = self.read_children(buf, cs, |child| match child {
                    Geometry::LineString(c) => Ok(Curve::LineString(c)),
                    Geometry::CircularString(c) => Ok(Curve::CircularString(c)),
                    Geometry::CompoundCurve(c) => Ok(Curve::CompoundCurve(c)),
                    other => Err(unexpected_child(GeometryType::CurvePolygon, &other)),
                })?;
                CurvePolygon::new(cs, rings)?.into()
            }
            GeometryType::Triangle => {
                let rings = self.read_rings(buf, cs)?;
                match rings.len() {
                    0 => Triangle::empty(cs).into(),
                    1 => {
                        let mut rings = rings;
                        Triangle::new(cs, rings.remove(0))?.into()
                    }
                    count => {
                        return Err(MeridianGeoError::InvalidGeometry {
                            geometry_type: GeometryType::Triangle,
                            message: format!("expected exactly 1 ring, got {count}"),
                        }
                        .into())
                    }
                }
            }
            GeometryType::MultiPoint => {
                let points = self.read_children(buf, cs, |child| match child {
                    Geometry::Point(p) => Ok(p),
                    other => Err(unexpected_child(GeometryType::MultiPoint, &other)),
                })?;
                MultiPoint::new(cs, points)?.into()
            }
            GeometryType::MultiLineString => {
                let lines = self.read_children(buf, cs, |child| match child {
                    Geometry::LineString(c) => Ok(c),
                    other => Err(unexpected_child(GeometryType::MultiLineString, &other)),
                })?;
                MultiLineString::new(cs, lines)?.into()
            }
            GeometryType::MultiPolygon => {
                let polygons = self.read_children(buf, cs, |child| match child {
                    Geometry::Polygon(p) => Ok(p),
                    other => Err(unexpected_child(GeometryType::MultiPolygon, &other)),
                })?;
                MultiPolygon::new(cs, polygons)?.into()
            }
            GeometryType::GeometryCollection => {
                let geometries = self.read_children(buf, cs, Ok)?;
                GeometryCollection::new(cs, geometries)?.into()
            }
            GeometryType::PolyhedralSurface => {
                let patches = self.read_children(buf, cs, |child| match child {
                    Geometry::Polygon(p) => Ok(p),
                    other => Err(unexpected_child(GeometryType::PolyhedralSurface, &other)),
                })?;
                PolyhedralSurface::new(cs, patches)?.into()
            }
            GeometryType::Tin => {
                let patches = self.read_children(buf, cs, |child| match child {
                    Geometry::Triangle(t) => Ok(t),
                    other => Err(unexpected_child(GeometryType::Tin, &other)),
                })?;
                Tin::new(cs, patches)?.into()
            }
        })
    }

    fn read_point(&self, buf: &mut WkbBuffer, cs: CoordinateSystem) -> Result<Point, WkbError> {
        let coords = buf.read_f64s(cs.coordinate_dimension(), "point coordinates")?;
        if coords.iter().all(|c| c.is_nan()) {
            if self.nan_empty_points {
                return Ok(Point::empty(cs));
            }
            return Err(WkbError::NanPoint);
        }
        Ok(Point::new(cs, &coords)?)
    }

    fn read_point_sequence(
        &self,
        buf: &mut WkbBuffer,
        cs: CoordinateSystem,
    ) -> Result<Vec<Point>, WkbError> {
        let count = checked_count(buf, cs.coordinate_dimension() * 8, "point count")?;
        let mut points = Vec::with_capacity(count);
        for _ in 0..count {
            points.push(self.read_point(buf, cs)?);
        }
        Ok(points)
    }

    fn read_rings(
        &self,
        buf: &mut WkbBuffer,
        cs: CoordinateSystem,
    ) -> Result<Vec<LineString>, WkbError> {
        let count = checked_count(buf, 4, "ring count")?;
        let mut rings = Vec::with_capacity(count);
        for _ in 0..count {
            let points = self.read_point_sequence(buf, cs)?;
            rings.push(LineString::new(cs, points)?);
        }
        Ok(rings)
    }

    fn read_children<T>(
        &self,
        buf: &mut WkbBuffer,
        cs: CoordinateSystem,
        convert: impl Fn(Geometry) -> Result<T, WkbError>,
    ) -> Result<Vec<T>, WkbError> {
        // Every child carries at least its own byte order marker and type word.
        let count = checked_count(buf, 5, "element count")?;
        let mut children = Vec::with_capacity(count);
        for _ in 0..count {
            children.push(convert(self.read_geometry(buf, Some(cs.srid()))?)?);
        }
        Ok(children)
    }
}

// Reads an element count and verifies the buffer can possibly hold that many elements, so a
// corrupted count cannot drive a huge allocation.
fn checked_count(
    buf: &mut WkbBuffer,
    min_element_size: usize,
    context: &'static str,
) -> Result<usize, WkbError> {
    let count = buf.read_u32(context)? as usize;
    if buf.remaining() < count.saturating_mul(min_element_size) {
        return Err(WkbError::Truncated { context });
    }
    Ok(count)
}

fn unexpected_child(parent: GeometryType, child: &Geometry) -> WkbError {
    WkbError::UnexpectedChildType {
        parent,
        child: child.geometry_type(),
    }
}

/// Header of a WKB stream: the variant and coordinate system of the outermost geometry.
///
/// This is everything that can be known about the geometry without decoding its body.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct WkbInfo {
    /// Variant of the outermost geometry.
    pub geometry_type: GeometryType,
    /// Axes and SRID declared by the header.
    pub coordinate_system: CoordinateSystem,
}

/// Decodes only the header of a WKB stream, leaving the body untouched.
pub fn peek_header(bytes: &[u8]) -> Result<WkbInfo, WkbError> {
    let mut buf = WkbBuffer::new(bytes);
    buf.read_byte_order()?;
    let header = decode_type_word(buf.read_u32("geometry type")?)?;
    let srid = if header.has_srid {
        buf.read_u32("SRID")? as i32
    } else {
        0
    };
    Ok(WkbInfo {
        geometry_type: header.geometry_type,
        coordinate_system: CoordinateSystem::new(header.has_z, header.has_m, srid),
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn from_hex(hex: &str) -> Vec<u8> {
        (0..hex.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).unwrap())
            .collect()
    }

    #[test]
    fn reads_little_endian_point() {
        let bytes = from_hex("0101000000000000000000244000000000000034C0");
        let geometry = WkbReader::new().read(&bytes).unwrap();

        let Geometry::Point(point) = geometry else {
            panic!("wrong variant");
        };
        assert_eq!(point.x(), Some(10.0));
        assert_eq!(point.y(), Some(-20.0));
        assert_eq!(point.coordinate_system().srid(), 0);
        assert!(!point.coordinate_system().has_z());
    }

    #[test]
    fn reads_ewkb_srid_point() {
        let bytes = from_hex("0101000020E6100000000000000000244000000000000034C0");
        let geometry = WkbReader::new().read(&bytes).unwrap();
        assert_eq!(geometry.srid(), 4326);
        assert_eq!(geometry.geometry_type(), GeometryType::Point);
    }

    #[test]
    fn reads_big_endian_point() {
        let bytes = from_hex("00000000014024000000000000C034000000000000");
        let geometry = WkbReader::new().read(&bytes).unwrap();
        let Geometry::Point(point) = geometry else {
            panic!("wrong variant");
        };
        assert_eq!(point.coordinates(), &[10.0, -20.0]);
    }

    #[test]
    fn trailing_bytes_are_an_error() {
        let mut bytes = from_hex("0101000000000000000000244000000000000034C0");
        bytes.push(0);
        assert_matches!(
            WkbReader::new().read(&bytes),
            Err(WkbError::TrailingData(1))
        );
    }

    #[test]
    fn nan_point_needs_the_opt_in() {
        let mut bytes = vec![1u8, 1, 0, 0, 0];
        bytes.extend_from_slice(&f64::NAN.to_le_bytes());
        bytes.extend_from_slice(&f64::NAN.to_le_bytes());

        assert_matches!(WkbReader::new().read(&bytes), Err(WkbError::NanPoint));

        let geometry = WkbReader::new()
            .with_nan_empty_points()
            .read(&bytes)
            .unwrap();
        assert!(geometry.is_empty());
        assert_eq!(geometry.geometry_type(), GeometryType::Point);
    }

    #[test]
    fn oversized_count_is_truncation_not_allocation() {
        // A line string claiming u32::MAX points with a 2-point body.
        let mut bytes = vec![1u8, 2, 0, 0, 0, 0xFF, 0xFF, 0xFF, 0xFF];
        for c in [0.0f64, 0.0, 1.0, 1.0] {
            bytes.extend_from_slice(&c.to_le_bytes());
        }
        assert_matches!(
            WkbReader::new().read(&bytes),
            Err(WkbError::Truncated {
                context: "point count"
            })
        );
    }

    #[test]
    fn collection_child_of_wrong_type_is_rejected() {
        // A multi point whose single child is a line string.
        let mut bytes = vec![1u8, 4, 0, 0, 0, 1, 0, 0, 0];
        bytes.extend_from_slice(&[1u8, 2, 0, 0, 0, 0, 0, 0, 0]);
        assert_matches!(
            WkbReader::new().read(&bytes),
            Err(WkbError::UnexpectedChildType {
                parent: GeometryType::MultiPoint,
                child: GeometryType::LineString,
            })
        );
    }

    #[test]
    fn peeking_does_not_need_the_body() {
        let bytes = from_hex("0101000020E6100000");
        let info = peek_header(&bytes).unwrap();
        assert_eq!(info.geometry_type, GeometryType::Point);
        assert_eq!(info.coordinate_system.srid(), 4326);
        assert!(!info.coordinate_system.has_z());
    }
}
