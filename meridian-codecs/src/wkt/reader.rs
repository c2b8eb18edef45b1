//! WKT and EWKT parsing.

use meridian_geo::{
    CircularString, CompoundCurve, CoordinateSystem, Curve, CurveElement, CurvePolygon, Geometry,
    GeometryCollection, GeometryType, LineString, MeridianGeoError, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon, PolyhedralSurface, Tin, Triangle,
};

use super::tokenizer::{Token, Tokenizer};
use crate::error::WktError;

/// Parser for ISO WKT text.
///
/// WKT itself has no SRID slot, so the caller supplies one; every coordinate system produced by
/// the parse carries it. Keywords and dimension suffixes are matched case-insensitively, and a
/// missing suffix is resolved from the arity of the first coordinate tuple (three coordinates
/// mean XYZ, four mean XYZM).
#[derive(Debug, Default, Copy, Clone)]
pub struct WktReader {}

impl WktReader {
    /// Creates a reader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses one geometry occupying the whole input, tagging it with `srid`.
    pub fn read(&self, input: &str, srid: i32) -> Result<Geometry, WktError> {
        let mut parser = Parser::new(input, srid);
        let geometry = parser.parse_geometry()?;
        if let Some(&(_, position)) = parser.peek()? {
            return Err(WktError::TrailingData { position });
        }
        Ok(geometry)
    }
}

/// Parser for PostGIS EWKT text: WKT with an optional `SRID=n;` prefix.
#[derive(Debug, Default, Copy, Clone)]
pub struct EwktReader {}

impl EwktReader {
    /// Creates a reader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses one geometry, taking the SRID from the prefix when there is one.
    pub fn read(&self, input: &str) -> Result<Geometry, WktError> {
        let (srid, rest) = split_srid_prefix(input)?;
        // Positions in parse errors must point into the full input, prefix included.
        let offset = input.len() - rest.len();
        WktReader::new()
            .read(rest, srid)
            .map_err(|error| error.at_offset(offset))
    }
}

pub(crate) fn split_srid_prefix(input: &str) -> Result<(i32, &str), WktError> {
    let trimmed = input.trim_start();
    let has_prefix = trimmed
        .get(..5)
        .is_some_and(|head| head.eq_ignore_ascii_case("SRID="));
    if !has_prefix {
        return Ok((0, input));
    }

    let after_key = &trimmed[5..];
    let semicolon = after_key.find(';').ok_or(WktError::InvalidSridPrefix)?;
    let srid = after_key[..semicolon]
        .trim()
        .parse()
        .map_err(|_| WktError::InvalidSridPrefix)?;
    Ok((srid, &after_key[semicolon + 1..]))
}

/// Dimensionality of the geometry being parsed: either declared by a suffix or resolved from
/// the arity of the first coordinate tuple.
struct Dims {
    srid: i32,
    cs: Option<CoordinateSystem>,
}

impl Dims {
    fn new(srid: i32, declared: Option<(bool, bool)>) -> Self {
        Self {
            srid,
            cs: declared.map(|(z, m)| CoordinateSystem::new(z, m, srid)),
        }
    }

    fn declare(&mut self, z: bool, m: bool, position: usize) -> Result<(), WktError> {
        let declared = CoordinateSystem::new(z, m, self.srid);
        match self.cs {
            None => {
                self.cs = Some(declared);
                Ok(())
            }
            Some(cs) if cs.matches(&declared) => Ok(()),
            Some(_) => Err(WktError::UnexpectedToken {
                found: format!("dimension suffix for {declared}"),
                expected: "a suffix matching the containing geometry",
                position,
            }),
        }
    }

    fn resolve(&mut self, arity: usize, position: usize) -> Result<CoordinateSystem, WktError> {
        match self.cs {
            Some(cs) if cs.coordinate_dimension() == arity => Ok(cs),
            Some(_) => Err(WktError::UnexpectedToken {
                found: format!("a point with {arity} coordinates"),
                expected: "a point matching the geometry's dimensionality",
                position,
            }),
            None => {
                let cs = match arity {
                    2 => CoordinateSystem::xy(),
                    3 => CoordinateSystem::xyz(),
                    4 => CoordinateSystem::xyzm(),
                    _ => {
                        return Err(WktError::UnexpectedToken {
                            found: format!("a point with {arity} coordinates"),
                            expected: "2 to 4 coordinates per point",
                            position,
                        })
                    }
                };
                let cs = cs.with_srid(self.srid);
                self.cs = Some(cs);
                Ok(cs)
            }
        }
    }

    /// Coordinate system to use for geometries that contained no tuple to resolve from.
    fn current(&self) -> CoordinateSystem {
        self.cs
            .unwrap_or_else(|| CoordinateSystem::xy().with_srid(self.srid))
    }
}

struct Parser<'a> {
    tokenizer: Tokenizer<'a>,
    peeked: Option<(Token, usize)>,
    srid: i32,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str, srid: i32) -> Self {
        Self {
            tokenizer: Tokenizer::new(input),
            peeked: None,
            srid,
        }
    }

    fn parse_geometry(&mut self) -> Result<Geometry, WktError> {
        let (word, position) = self.expect_word("a geometry keyword")?;
        let (geometry_type, attached) =
            parse_keyword(&word).ok_or(WktError::UnknownKeyword { word, position })?;
        let declared = match attached {
            Some(dims) => Some(dims),
            None => self.take_dimension_suffix()?,
        };

        let mut dims = Dims::new(self.srid, declared);
        self.parse_body(geometry_type, &mut dims)
    }

    fn parse_body(
        &mut self,
        geometry_type: GeometryType,
        dims: &mut Dims,
    ) -> Result<Geometry, WktError> {
        Ok(match geometry_type {
            GeometryType::Point => {
                if self.take_empty()? {
                    return Ok(Point::empty(dims.current()).into());
                }
                self.expect(Token::OpenParen, "'('")?;
                let point = self.parse_point_tuple(dims)?;
                self.expect(Token::CloseParen, "')'")?;
                point.into()
            }
            GeometryType::LineString => {
                let points = self.parse_point_list(dims)?;
                LineString::new(dims.current(), points)?.into()
            }
            GeometryType::CircularString => {
                let points = self.parse_point_list(dims)?;
                CircularString::new(dims.current(), points)?.into()
            }
            GeometryType::CompoundCurve => self.parse_compound_curve(dims)?.into(),
            GeometryType::Polygon => {
                let rings = self.parse_ring_list(dims)?;
                Polygon::new(dims.current(), rings)?.into()
            }
            GeometryType::CurvePolygon => {
                let mut rings = vec![];
                if !self.take_empty()? {
                    self.expect(Token::OpenParen, "'('")?;
                    loop {
                        rings.push(self.parse_curve(dims, GeometryType::CurvePolygon)?);
                        if !self.take_comma()? {
                            break;
                        }
                    }
                    self.expect(Token::CloseParen, "')'")?;
                }
                CurvePolygon::new(dims.current(), rings)?.into()
            }
            GeometryType::Triangle => {
                let rings = self.parse_ring_list(dims)?;
                triangle_from_rings(dims.current(), rings)?.into()
            }
            GeometryType::MultiPoint => {
                let mut points = vec![];
                if !self.take_empty()? {
                    self.expect(Token::OpenParen, "'('")?;
                    loop {
                        points.push(self.parse_multi_point_element(dims)?);
                        if !self.take_comma()? {
                            break;
                        }
                    }
                    self.expect(Token::CloseParen, "')'")?;
                }
                MultiPoint::new(dims.current(), points)?.into()
            }
            GeometryType::MultiLineString => {
                let mut lines = vec![];
                if !self.take_empty()? {
                    self.expect(Token::OpenParen, "'('")?;
                    loop {
                        let points = self.parse_point_list(dims)?;
                        lines.push(LineString::new(dims.current(), points)?);
                        if !self.take_comma()? {
                            break;
                        }
                    }
                    self.expect(Token::CloseParen, "')'")?;
                }
                MultiLineString::new(dims.current(), lines)?.into()
            }
            GeometryType::MultiPolygon => {
                let mut polygons = vec![];
                if !self.take_empty()? {
                    self.expect(Token::OpenParen, "'('")?;
                    loop {
                        let rings = self.parse_ring_list(dims)?;
                        polygons.push(Polygon::new(dims.current(), rings)?);
                        if !self.take_comma()? {
                            break;
                        }
                    }
                    self.expect(Token::CloseParen, "')'")?;
                }
                MultiPolygon::new(dims.current(), polygons)?.into()
            }
            GeometryType::GeometryCollection => {
                let mut children = vec![];
                if !self.take_empty()? {
                    self.expect(Token::OpenParen, "'('")?;
                    loop {
                        children.push(self.parse_geometry()?);
                        if !self.take_comma()? {
                            break;
                        }
                    }
                    self.expect(Token::CloseParen, "')'")?;
                }
                let cs = dims.cs.or_else(|| {
                    children.first().map(|child| child.coordinate_system())
                });
                GeometryCollection::new(cs.unwrap_or_else(|| dims.current()), children)?.into()
            }
            GeometryType::PolyhedralSurface => {
                let mut patches = vec![];
                if !self.take_empty()? {
                    self.expect(Token::OpenParen, "'('")?;
                    loop {
                        let rings = self.parse_ring_list(dims)?;
                        patches.push(Polygon::new(dims.current(), rings)?);
                        if !self.take_comma()? {
                            break;
                        }
                    }
                    self.expect(Token::CloseParen, "')'")?;
                }
                PolyhedralSurface::new(dims.current(), patches)?.into()
            }
            GeometryType::Tin => {
                let mut patches = vec![];
                if !self.take_empty()? {
                    self.expect(Token::OpenParen, "'('")?;
                    loop {
                        let rings = self.parse_ring_list(dims)?;
                        patches.push(triangle_from_rings(dims.current(), rings)?);
                        if !self.take_comma()? {
                            break;
                        }
                    }
                    self.expect(Token::CloseParen, "')'")?;
                }
                Tin::new(dims.current(), patches)?.into()
            }
        })
    }

    fn parse_compound_curve(&mut self, dims: &mut Dims) -> Result<CompoundCurve, WktError> {
        let mut elements = vec![];
        if !self.take_empty()? {
            self.expect(Token::OpenParen, "'('")?;
            loop {
                let element = match self.parse_curve(dims, GeometryType::CompoundCurve)? {
                    Curve::LineString(c) => CurveElement::LineString(c),
                    Curve::CircularString(c) => CurveElement::CircularString(c),
                    Curve::CompoundCurve(_) => {
                        return Err(MeridianGeoError::UnexpectedElementType {
                            container: GeometryType::CompoundCurve,
                            element: GeometryType::CompoundCurve,
                        }
                        .into())
                    }
                };
                elements.push(element);
                if !self.take_comma()? {
                    break;
                }
            }
            self.expect(Token::CloseParen, "')'")?;
        }
        Ok(CompoundCurve::new(dims.current(), elements)?)
    }

    /// One ring of a curve polygon or element of a compound curve: a bare point list is a line
    /// string, anything else must name a curve variant.
    fn parse_curve(
        &mut self,
        dims: &mut Dims,
        container: GeometryType,
    ) -> Result<Curve, WktError> {
        let Some((Token::Word(_), _)) = self.peek()? else {
            let points = self.parse_point_list(dims)?;
            return Ok(Curve::LineString(LineString::new(dims.current(), points)?));
        };

        let (word, position) = self.expect_word("a curve keyword")?;
        if word.eq_ignore_ascii_case("EMPTY") {
            return Ok(Curve::LineString(LineString::empty(dims.current())));
        }

        let (geometry_type, attached) =
            parse_keyword(&word).ok_or(WktError::UnknownKeyword { word, position })?;
        let declared = match attached {
            Some(d) => Some(d),
            None => self.take_dimension_suffix()?,
        };
        if let Some((z, m)) = declared {
            dims.declare(z, m, position)?;
        }

        Ok(match geometry_type {
            GeometryType::LineString => {
                let points = self.parse_point_list(dims)?;
                Curve::LineString(LineString::new(dims.current(), points)?)
            }
            GeometryType::CircularString => {
                let points = self.parse_point_list(dims)?;
                Curve::CircularString(CircularString::new(dims.current(), points)?)
            }
            GeometryType::CompoundCurve if container == GeometryType::CurvePolygon => {
                Curve::CompoundCurve(self.parse_compound_curve(dims)?)
            }
            element => {
                return Err(MeridianGeoError::UnexpectedElementType { container, element }.into())
            }
        })
    }

    fn parse_multi_point_element(&mut self, dims: &mut Dims) -> Result<Point, WktError> {
        match self.peek()? {
            Some((Token::Word(w), _)) if w.eq_ignore_ascii_case("EMPTY") => {
                self.next()?;
                Ok(Point::empty(dims.current()))
            }
            Some((Token::OpenParen, _)) => {
                self.next()?;
                let point = self.parse_point_tuple(dims)?;
                self.expect(Token::CloseParen, "')'")?;
                Ok(point)
            }
            _ => self.parse_point_tuple(dims),
        }
    }

    /// A parenthesized comma-separated list of coordinate tuples, or the `EMPTY` keyword.
    fn parse_point_list(&mut self, dims: &mut Dims) -> Result<Vec<Point>, WktError> {
        if self.take_empty()? {
            return Ok(vec![]);
        }

        self.expect(Token::OpenParen, "'('")?;
        let mut points = vec![self.parse_point_tuple(dims)?];
        while self.take_comma()? {
            points.push(self.parse_point_tuple(dims)?);
        }
        self.expect(Token::CloseParen, "')'")?;
        Ok(points)
    }

    /// A parenthesized list of rings, or `EMPTY`. Used for polygons, triangles and patches.
    fn parse_ring_list(&mut self, dims: &mut Dims) -> Result<Vec<LineString>, WktError> {
        if self.take_empty()? {
            return Ok(vec![]);
        }

        self.expect(Token::OpenParen, "'('")?;
        let mut rings = vec![];
        loop {
            let points = self.parse_point_list(dims)?;
            rings.push(LineString::new(dims.current(), points)?);
            if !self.take_comma()? {
                break;
            }
        }
        self.expect(Token::CloseParen, "')'")?;
        Ok(rings)
    }

    fn parse_point_tuple(&mut self, dims: &mut Dims) -> Result<Point, WktError> {
        let (first, position) = self.expect_number("a coordinate")?;
        let mut coords = vec![first];
        while matches!(self.peek()?, Some((Token::Number(_), _))) {
            if let Some((Token::Number(value), _)) = self.next()? {
                coords.push(value);
            }
        }

        let cs = dims.resolve(coords.len(), position)?;
        Ok(Point::new(cs, &coords)?)
    }

    fn take_dimension_suffix(&mut self) -> Result<Option<(bool, bool)>, WktError> {
        let Some((Token::Word(word), _)) = self.peek()? else {
            return Ok(None);
        };

        let dims = if word.eq_ignore_ascii_case("Z") {
            (true, false)
        } else if word.eq_ignore_ascii_case("M") {
            (false, true)
        } else if word.eq_ignore_ascii_case("ZM") {
            (true, true)
        } else {
            return Ok(None);
        };
        self.next()?;
        Ok(Some(dims))
    }

    fn take_empty(&mut self) -> Result<bool, WktError> {
        if let Some((Token::Word(word), _)) = self.peek()? {
            if word.eq_ignore_ascii_case("EMPTY") {
                self.next()?;
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn take_comma(&mut self) -> Result<bool, WktError> {
        if let Some((Token::Comma, _)) = self.peek()? {
            self.next()?;
            return Ok(true);
        }
        Ok(false)
    }

    fn peek(&mut self) -> Result<Option<&(Token, usize)>, WktError> {
        if self.peeked.is_none() {
            self.peeked = self.tokenizer.next()?;
        }
        Ok(self.peeked.as_ref())
    }

    fn next(&mut self) -> Result<Option<(Token, usize)>, WktError> {
        match self.peeked.take() {
            Some(entry) => Ok(Some(entry)),
            None => self.tokenizer.next(),
        }
    }

    fn expect(&mut self, token: Token, expected: &'static str) -> Result<(), WktError> {
        match self.next()? {
            Some((found, _)) if found == token => Ok(()),
            Some((found, position)) => Err(WktError::UnexpectedToken {
                found: found.describe(),
                expected,
                position,
            }),
            None => Err(WktError::UnexpectedEnd { expected }),
        }
    }

    fn expect_word(&mut self, expected: &'static str) -> Result<(String, usize), WktError> {
        match self.next()? {
            Some((Token::Word(word), position)) => Ok((word, position)),
            Some((found, position)) => Err(WktError::UnexpectedToken {
                found: found.describe(),
                expected,
                position,
            }),
            None => Err(WktError::UnexpectedEnd { expected }),
        }
    }

    fn expect_number(&mut self, expected: &'static str) -> Result<(f64, usize), WktError> {
        match self.next()? {
            Some((Token::Number(value), position)) => Ok((value, position)),
            Some((found, position)) => Err(WktError::UnexpectedToken {
                found: found.describe(),
                expected,
                position,
            }),
            None => Err(WktError::UnexpectedEnd { expected }),
        }
    }
}

fn triangle_from_rings(
    cs: CoordinateSystem,
    mut rings: Vec<LineString>,
) -> Result<Triangle, WktError> {
    match rings.len() {
        0 => Ok(Triangle::empty(cs)),
        1 => Ok(Triangle::new(cs, rings.remove(0))?),
        count => Err(MeridianGeoError::InvalidGeometry {
            geometry_type: GeometryType::Triangle,
            message: format!("expected exactly 1 ring, got {count}"),
        }
        .into()),
    }
}

fn parse_keyword(word: &str) -> Option<(GeometryType, Option<(bool, bool)>)> {
    let upper = word.to_ascii_uppercase();
    if let Some(geometry_type) = keyword_type(&upper) {
        return Some((geometry_type, None));
    }

    // PostGIS attaches the dimension suffix directly to the keyword, e.g. `POINTZM`.
    for (suffix, dims) in [
        ("ZM", (true, true)),
        ("Z", (true, false)),
        ("M", (false, true)),
    ] {
        if let Some(stem) = upper.strip_suffix(suffix) {
            if let Some(geometry_type) = keyword_type(stem) {
                return Some((geometry_type, Some(dims)));
            }
        }
    }
    None
}

fn keyword_type(upper: &str) -> Option<GeometryType> {
    Some(match upper {
        "POINT" => GeometryType::Point,
        "LINESTRING" => GeometryType::LineString,
        "CIRCULARSTRING" => GeometryType::CircularString,
        "COMPOUNDCURVE" => GeometryType::CompoundCurve,
        "POLYGON" => GeometryType::Polygon,
        "CURVEPOLYGON" => GeometryType::CurvePolygon,
        "TRIANGLE" => GeometryType::Triangle,
        "MULTIPOINT" => GeometryType::MultiPoint,
        "MULTILINESTRING" => GeometryType::MultiLineString,
        "MULTIPOLYGON" => GeometryType::MultiPolygon,
        "GEOMETRYCOLLECTION" => GeometryType::GeometryCollection,
        "POLYHEDRALSURFACE" => GeometryType::PolyhedralSurface,
        "TIN" => GeometryType::Tin,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use assert_matches::assert_matches;

    use super::*;

    fn read(input: &str) -> Geometry {
        WktReader::new().read(input, 0).unwrap()
    }

    #[test]
    fn reads_a_point() {
        let Geometry::Point(point) = read("POINT(10 -20.5)") else {
            panic!("wrong variant");
        };
        assert_eq!(point.coordinates(), &[10.0, -20.5]);
        assert!(!point.coordinate_system().has_z());
    }

    #[test]
    fn scientific_notation() {
        let Geometry::Point(point) = read("POINT(1.5e2 -2.5E-1)") else {
            panic!("wrong variant");
        };
        assert_relative_eq!(point.x().unwrap(), 150.0);
        assert_relative_eq!(point.y().unwrap(), -0.25);
    }

    #[test]
    fn dimensionality_from_suffix_or_arity() {
        let z = read("POINT Z (1 2 3)");
        assert!(z.coordinate_system().has_z());

        let m = read("POINT M (1 2 3)");
        assert!(!m.coordinate_system().has_z());
        assert!(m.coordinate_system().has_m());

        let attached = read("POINTZM(1 2 3 4)");
        assert!(attached.coordinate_system().has_z());
        assert!(attached.coordinate_system().has_m());

        // Three coordinates without a suffix mean XYZ.
        let inferred = read("point(1 2 3)");
        assert!(inferred.coordinate_system().has_z());
        assert!(!inferred.coordinate_system().has_m());
    }

    #[test]
    fn suffix_and_arity_must_agree() {
        assert_matches!(
            WktReader::new().read("POINT Z (1 2)", 0),
            Err(WktError::UnexpectedToken { .. })
        );
        assert_matches!(
            WktReader::new().read("LINESTRING(1 2, 3 4 5)", 0),
            Err(WktError::UnexpectedToken { .. })
        );
    }

    #[test]
    fn empty_geometries() {
        assert!(read("POINT EMPTY").is_empty());
        assert!(read("LINESTRING EMPTY").is_empty());
        assert!(read("GEOMETRYCOLLECTION EMPTY").is_empty());

        let empty_z = read("POLYGON Z EMPTY");
        assert!(empty_z.is_empty());
        assert!(empty_z.coordinate_system().has_z());
    }

    #[test]
    fn multi_point_accepts_both_element_forms() {
        let bare = read("MULTIPOINT(1 2, 3 4)");
        let wrapped = read("MULTIPOINT((1 2), (3 4))");
        assert_eq!(bare, wrapped);

        let Geometry::MultiPoint(with_empty) = read("MULTIPOINT((1 2), EMPTY)") else {
            panic!("wrong variant");
        };
        assert!(with_empty.points()[1].is_empty());
    }

    #[test]
    fn curved_geometries() {
        let Geometry::CompoundCurve(curve) =
            read("COMPOUNDCURVE(CIRCULARSTRING(0 0, 1 1, 2 0), (2 0, 4 0))")
        else {
            panic!("wrong variant");
        };
        assert_eq!(curve.elements().len(), 2);
        assert_matches!(curve.elements()[0], CurveElement::CircularString(_));
        assert_matches!(curve.elements()[1], CurveElement::LineString(_));

        let Geometry::CurvePolygon(surface) = read(
            "CURVEPOLYGON(COMPOUNDCURVE(CIRCULARSTRING(0 0, 1 1, 2 0), (2 0, 0 0)), (0.2 0.2, 0.4 0.2, 0.2 0.4, 0.2 0.2))",
        ) else {
            panic!("wrong variant");
        };
        assert_eq!(surface.rings().len(), 2);
        assert_matches!(surface.rings()[0], Curve::CompoundCurve(_));
    }

    #[test]
    fn compound_curve_cannot_nest() {
        assert_matches!(
            WktReader::new().read("COMPOUNDCURVE(COMPOUNDCURVE((0 0, 1 1)))", 0),
            Err(WktError::InvalidGeometry(
                MeridianGeoError::UnexpectedElementType { .. }
            ))
        );
    }

    #[test]
    fn surfaces_and_collections() {
        let Geometry::Tin(tin) = read("TIN(((0 0, 1 0, 0 1, 0 0)), ((1 0, 1 1, 0 1, 1 0)))")
        else {
            panic!("wrong variant");
        };
        assert_eq!(tin.patches().len(), 2);

        let collection = read("GEOMETRYCOLLECTION(POINT(1 2), LINESTRING(0 0, 1 1))");
        let Geometry::GeometryCollection(collection) = collection else {
            panic!("wrong variant");
        };
        assert_eq!(collection.geometries().len(), 2);
    }

    #[test]
    fn collection_elements_must_agree_on_axes() {
        assert_matches!(
            WktReader::new().read("GEOMETRYCOLLECTION(POINT(1 2), POINT Z (1 2 3))", 0),
            Err(WktError::InvalidGeometry(
                MeridianGeoError::CoordinateSystemMismatch { .. }
            ))
        );
    }

    #[test]
    fn srid_is_applied_everywhere() {
        let geometry = WktReader::new()
            .read("GEOMETRYCOLLECTION(POINT(1 2))", 4326)
            .unwrap();
        assert_eq!(geometry.srid(), 4326);
        let Geometry::GeometryCollection(collection) = &geometry else {
            panic!("wrong variant");
        };
        assert_eq!(collection.geometries()[0].srid(), 4326);
    }

    #[test]
    fn trailing_input_is_an_error() {
        assert_matches!(
            WktReader::new().read("POINT(1 2) POINT(3 4)", 0),
            Err(WktError::TrailingData { position: 11 })
        );
    }

    #[test]
    fn unknown_keywords_are_reported() {
        assert_matches!(
            WktReader::new().read("PINT(1 2)", 0),
            Err(WktError::UnknownKeyword { position: 0, .. })
        );
    }

    #[test]
    fn ewkt_prefix() {
        let geometry = EwktReader::new().read("SRID=4326;POINT(10 20)").unwrap();
        assert_eq!(geometry.srid(), 4326);

        let plain = EwktReader::new().read("POINT(10 20)").unwrap();
        assert_eq!(plain.srid(), 0);

        assert_matches!(
            EwktReader::new().read("SRID=abc;POINT(1 2)"),
            Err(WktError::InvalidSridPrefix)
        );
        assert_matches!(
            EwktReader::new().read("SRID=4326 POINT(1 2)"),
            Err(WktError::InvalidSridPrefix)
        );
    }

    #[test]
    fn ewkt_errors_report_positions_in_the_full_input() {
        assert_matches!(
            EwktReader::new().read("SRID=4326;PINT(1 2)"),
            Err(WktError::UnknownKeyword { position: 10, .. })
        );
        assert_matches!(
            EwktReader::new().read("SRID=4326;POINT(1 2) extra"),
            Err(WktError::TrailingData { position: 21 })
        );
    }
}
