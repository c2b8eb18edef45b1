//! WKT and EWKT formatting.

use meridian_geo::{
    CircularString, CoordinateSystem, Curve, CurveElement, Geometry, GeometryType, LineString,
    Point, Polygon, Triangle,
};

/// Formatter producing ISO WKT.
///
/// Formatting cannot fail: every constructible geometry has a WKT form, with empty geometries
/// rendered as the `EMPTY` keyword. The SRID is not part of WKT and is simply not written; use
/// [`EwktWriter`] to keep it.
#[derive(Debug, Default, Copy, Clone)]
pub struct WktWriter {
    pretty: bool,
}

impl WktWriter {
    /// Creates a writer producing compact output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the writer put a space after each comma and before each opening parenthesis.
    pub fn with_pretty_print(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Formats one geometry.
    pub fn write(&self, geometry: &Geometry) -> String {
        let mut out = String::new();
        self.write_geometry(&mut out, geometry);
        out
    }

    fn write_geometry(&self, out: &mut String, geometry: &Geometry) {
        self.write_tag(out, geometry.geometry_type(), geometry.coordinate_system());

        if geometry.is_empty() {
            write_tagged_empty(out);
            return;
        }

        match geometry {
            Geometry::Point(g) => {
                out.push('(');
                self.write_coordinates(out, g);
                out.push(')');
            }
            Geometry::LineString(g) => self.write_point_list(out, g.points()),
            Geometry::CircularString(g) => self.write_point_list(out, g.points()),
            Geometry::CompoundCurve(g) => {
                out.push('(');
                for (i, element) in g.elements().iter().enumerate() {
                    self.separate(out, i);
                    self.write_curve_element(out, element);
                }
                out.push(')');
            }
            Geometry::Polygon(g) => self.write_ring_list(out, g.rings()),
            Geometry::CurvePolygon(g) => {
                out.push('(');
                for (i, ring) in g.rings().iter().enumerate() {
                    self.separate(out, i);
                    self.write_curve(out, ring);
                }
                out.push(')');
            }
            Geometry::Triangle(g) => self.write_bare_triangle(out, g),
            Geometry::MultiPoint(g) => {
                out.push('(');
                for (i, point) in g.points().iter().enumerate() {
                    self.separate(out, i);
                    if point.is_empty() {
                        out.push_str("EMPTY");
                    } else {
                        out.push('(');
                        self.write_coordinates(out, point);
                        out.push(')');
                    }
                }
                out.push(')');
            }
            Geometry::MultiLineString(g) => {
                out.push('(');
                for (i, line) in g.line_strings().iter().enumerate() {
                    self.separate(out, i);
                    self.write_bare_line(out, line);
                }
                out.push(')');
            }
            Geometry::MultiPolygon(g) => {
                out.push('(');
                for (i, polygon) in g.polygons().iter().enumerate() {
                    self.separate(out, i);
                    self.write_bare_polygon(out, polygon);
                }
                out.push(')');
            }
            Geometry::GeometryCollection(g) => {
                out.push('(');
                for (i, child) in g.geometries().iter().enumerate() {
                    self.separate(out, i);
                    self.write_geometry(out, child);
                }
                out.push(')');
            }
            Geometry::PolyhedralSurface(g) => {
                out.push('(');
                for (i, patch) in g.patches().iter().enumerate() {
                    self.separate(out, i);
                    self.write_bare_polygon(out, patch);
                }
                out.push(')');
            }
            Geometry::Tin(g) => {
                out.push('(');
                for (i, patch) in g.patches().iter().enumerate() {
                    self.separate(out, i);
                    self.write_bare_triangle(out, patch);
                }
                out.push(')');
            }
        }
    }

    /// Keyword and dimension suffix, ending just before the body.
    fn write_tag(&self, out: &mut String, geometry_type: GeometryType, cs: CoordinateSystem) {
        out.push_str(&geometry_type.name().to_ascii_uppercase());
        match (cs.has_z(), cs.has_m()) {
            (false, false) => {}
            (true, false) => out.push_str(" Z"),
            (false, true) => out.push_str(" M"),
            (true, true) => out.push_str(" ZM"),
        }
        if self.pretty || cs.has_z() || cs.has_m() {
            out.push(' ');
        }
    }

    fn separate(&self, out: &mut String, index: usize) {
        if index > 0 {
            out.push(',');
            if self.pretty {
                out.push(' ');
            }
        }
    }

    fn write_coordinates(&self, out: &mut String, point: &Point) {
        for (i, coordinate) in point.coordinates().iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(&coordinate.to_string());
        }
    }

    fn write_point_list(&self, out: &mut String, points: &[Point]) {
        out.push('(');
        for (i, point) in points.iter().enumerate() {
            self.separate(out, i);
            self.write_coordinates(out, point);
        }
        out.push(')');
    }

    fn write_bare_line(&self, out: &mut String, line: &LineString) {
        if line.is_empty() {
            out.push_str("EMPTY");
        } else {
            self.write_point_list(out, line.points());
        }
    }

    fn write_ring_list(&self, out: &mut String, rings: &[LineString]) {
        out.push('(');
        for (i, ring) in rings.iter().enumerate() {
            self.separate(out, i);
            self.write_bare_line(out, ring);
        }
        out.push(')');
    }

    fn write_bare_polygon(&self, out: &mut String, polygon: &Polygon) {
        if polygon.is_empty() {
            out.push_str("EMPTY");
        } else {
            self.write_ring_list(out, polygon.rings());
        }
    }

    fn write_bare_triangle(&self, out: &mut String, triangle: &Triangle) {
        match triangle.exterior_ring() {
            Some(ring) => self.write_ring_list(out, std::slice::from_ref(ring)),
            None => out.push_str("EMPTY"),
        }
    }

    fn write_circular_string(&self, out: &mut String, arc: &CircularString) {
        self.write_tag(out, GeometryType::CircularString, arc.coordinate_system());
        if arc.is_empty() {
            write_tagged_empty(out);
        } else {
            self.write_point_list(out, arc.points());
        }
    }

    fn write_curve_element(&self, out: &mut String, element: &CurveElement) {
        match element {
            CurveElement::LineString(c) => self.write_bare_line(out, c),
            CurveElement::CircularString(c) => self.write_circular_string(out, c),
        }
    }

    fn write_curve(&self, out: &mut String, curve: &Curve) {
        match curve {
            Curve::LineString(c) => self.write_bare_line(out, c),
            Curve::CircularString(c) => self.write_circular_string(out, c),
            Curve::CompoundCurve(c) => {
                self.write_tag(out, GeometryType::CompoundCurve, c.coordinate_system());
                if c.is_empty() {
                    write_tagged_empty(out);
                    return;
                }
                out.push('(');
                for (i, element) in c.elements().iter().enumerate() {
                    self.separate(out, i);
                    self.write_curve_element(out, element);
                }
                out.push(')');
            }
        }
    }
}

// The tag ends with a space only in pretty mode or after a dimension suffix; EMPTY always
// needs one.
fn write_tagged_empty(out: &mut String) {
    if !out.ends_with(' ') {
        out.push(' ');
    }
    out.push_str("EMPTY");
}

/// Formatter producing PostGIS EWKT: WKT prefixed with `SRID=n;` when the SRID is set.
#[derive(Debug, Default, Copy, Clone)]
pub struct EwktWriter {
    inner: WktWriter,
}

impl EwktWriter {
    /// Creates a writer producing compact output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the writer put a space after each comma and before each opening parenthesis.
    pub fn with_pretty_print(mut self) -> Self {
        self.inner = self.inner.with_pretty_print();
        self
    }

    /// Formats one geometry with its SRID prefix.
    pub fn write(&self, geometry: &Geometry) -> String {
        let wkt = self.inner.write(geometry);
        match geometry.srid() {
            0 => wkt,
            srid => format!("SRID={srid};{wkt}"),
        }
    }
}
