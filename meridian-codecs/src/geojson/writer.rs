//! GeoJSON formatting.

use meridian_geo::{BoundingBox, Geometry, LineString, Point};
use serde_json::{json, Map, Value};

use super::{Feature, FeatureCollection, GEOJSON_SRID};
use crate::error::GeoJsonError;

/// Formatter producing GeoJSON documents.
///
/// Only the seven linear geometry types exist in GeoJSON; a curved or polyhedral variant is an
/// error. The M coordinate has no GeoJSON form and is dropped, and the SRID is not written at
/// all since GeoJSON coordinates are WGS 84 by definition.
#[derive(Debug, Default, Copy, Clone)]
pub struct GeoJsonWriter {
    bbox: bool,
}

impl GeoJsonWriter {
    /// Creates a writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the writer attach a `bbox` member to every non-empty geometry, feature and
    /// feature collection.
    pub fn with_bbox(mut self) -> Self {
        self.bbox = true;
        self
    }

    /// Formats one geometry as a JSON string.
    pub fn write(&self, geometry: &Geometry) -> Result<String, GeoJsonError> {
        Ok(self.to_value(geometry)?.to_string())
    }

    /// Formats one geometry as a JSON value.
    pub fn to_value(&self, geometry: &Geometry) -> Result<Value, GeoJsonError> {
        if geometry.srid() != 0 && geometry.srid() != GEOJSON_SRID {
            log::debug!(
                "writing a geometry with SRID {} as GeoJSON, which assumes WGS 84",
                geometry.srid()
            );
        }
        let geometry = geometry.without_m();

        let mut object = match &geometry {
            Geometry::Point(g) => json!({
                "type": "Point",
                "coordinates": position(g),
            }),
            Geometry::LineString(g) => json!({
                "type": "LineString",
                "coordinates": positions(g.points()),
            }),
            Geometry::Polygon(g) => json!({
                "type": "Polygon",
                "coordinates": rings(g.rings()),
            }),
            Geometry::MultiPoint(g) => json!({
                "type": "MultiPoint",
                "coordinates": positions(g.points()),
            }),
            Geometry::MultiLineString(g) => json!({
                "type": "MultiLineString",
                "coordinates": g.line_strings().iter().map(|l| positions(l.points())).collect::<Vec<_>>(),
            }),
            Geometry::MultiPolygon(g) => json!({
                "type": "MultiPolygon",
                "coordinates": g.polygons().iter().map(|p| rings(p.rings())).collect::<Vec<_>>(),
            }),
            Geometry::GeometryCollection(g) => {
                let geometries = g
                    .geometries()
                    .iter()
                    .map(|child| self.to_value(child))
                    .collect::<Result<Vec<_>, _>>()?;
                json!({
                    "type": "GeometryCollection",
                    "geometries": geometries,
                })
            }
            other => return Err(GeoJsonError::UnsupportedType(other.geometry_type())),
        };

        if self.bbox {
            if let Some(bbox) = bbox_values(&geometry) {
                if let Some(map) = object.as_object_mut() {
                    map.insert("bbox".to_string(), Value::from(bbox));
                }
            }
        }
        Ok(object)
    }

    /// Formats a feature.
    pub fn feature_to_value(&self, feature: &Feature) -> Result<Value, GeoJsonError> {
        let geometry = match &feature.geometry {
            Some(geometry) => self.to_value(geometry)?,
            None => Value::Null,
        };
        let mut object = Map::new();
        object.insert("type".to_string(), Value::from("Feature"));
        if let Some(id) = &feature.id {
            object.insert("id".to_string(), id.clone());
        }
        object.insert("geometry".to_string(), geometry);
        object.insert(
            "properties".to_string(),
            match &feature.properties {
                Some(properties) => Value::Object(properties.clone()),
                None => Value::Null,
            },
        );
        if self.bbox {
            if let Some(bbox) = feature.geometry.as_ref().and_then(bbox_values) {
                object.insert("bbox".to_string(), Value::from(bbox));
            }
        }
        Ok(Value::Object(object))
    }

    /// Formats a feature collection.
    pub fn feature_collection_to_value(
        &self,
        collection: &FeatureCollection,
    ) -> Result<Value, GeoJsonError> {
        let features = collection
            .features
            .iter()
            .map(|feature| self.feature_to_value(feature))
            .collect::<Result<Vec<_>, _>>()?;
        let mut object = Map::new();
        object.insert("type".to_string(), Value::from("FeatureCollection"));
        object.insert("features".to_string(), Value::Array(features));
        if self.bbox {
            if let Some(bbox) = collection_bbox(collection) {
                object.insert("bbox".to_string(), Value::from(bbox));
            }
        }
        Ok(Value::Object(object))
    }
}

fn position(point: &Point) -> Vec<f64> {
    point.coordinates().to_vec()
}

fn positions(points: &[Point]) -> Vec<Vec<f64>> {
    points.iter().map(position).collect()
}

fn rings(rings: &[LineString]) -> Vec<Vec<Vec<f64>>> {
    rings.iter().map(|ring| positions(ring.points())).collect()
}

fn bbox_values(geometry: &Geometry) -> Option<Vec<f64>> {
    corner_values(&geometry.bounding_box())
}

fn collection_bbox(collection: &FeatureCollection) -> Option<Vec<f64>> {
    let mut bbox = BoundingBox::new();
    for geometry in collection.features.iter().filter_map(|f| f.geometry.as_ref()) {
        // A dimensionality mix across features leaves the collection without a bbox.
        bbox = bbox.extended_with(&geometry.bounding_box()).ok()?;
    }
    corner_values(&bbox)
}

fn corner_values(bbox: &BoundingBox) -> Option<Vec<f64>> {
    let (sw, ne) = (bbox.south_west()?, bbox.north_east()?);
    let mut values = sw.coordinates().to_vec();
    values.extend_from_slice(ne.coordinates());
    Some(values)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use meridian_geo::{CircularString, CoordinateSystem, GeometryType, MultiPoint, Polygon};

    use super::super::{GeoJson, GeoJsonReader};
    use super::*;

    #[test]
    fn writes_a_point() {
        let value = GeoJsonWriter::new()
            .to_value(&Point::xy(10.0, -20.0).into())
            .unwrap();
        assert_eq!(value, json!({"type": "Point", "coordinates": [10.0, -20.0]}));
    }

    #[test]
    fn m_coordinate_is_dropped() {
        let value = GeoJsonWriter::new()
            .to_value(&Point::xyzm(1.0, 2.0, 3.0, 4.0).into())
            .unwrap();
        assert_eq!(
            value,
            json!({"type": "Point", "coordinates": [1.0, 2.0, 3.0]})
        );
    }

    #[test]
    fn empty_point_is_an_empty_array() {
        let value = GeoJsonWriter::new()
            .to_value(&Point::empty(CoordinateSystem::xy()).into())
            .unwrap();
        assert_eq!(value, json!({"type": "Point", "coordinates": []}));
    }

    #[test]
    fn curved_variants_are_unsupported() {
        let arc: Geometry = CircularString::empty(CoordinateSystem::xy()).into();
        assert_matches!(
            GeoJsonWriter::new().to_value(&arc),
            Err(GeoJsonError::UnsupportedType(GeometryType::CircularString))
        );
    }

    #[test]
    fn bbox_is_attached_on_request() {
        let cs = CoordinateSystem::xy();
        let geometry: Geometry =
            MultiPoint::new(cs, vec![Point::xy(1.0, 5.0), Point::xy(3.0, 2.0)])
                .unwrap()
                .into();

        let value = GeoJsonWriter::new().with_bbox().to_value(&geometry).unwrap();
        assert_eq!(value["bbox"], json!([1.0, 2.0, 3.0, 5.0]));

        let plain = GeoJsonWriter::new().to_value(&geometry).unwrap();
        assert_eq!(plain.get("bbox"), None);
    }

    #[test]
    fn output_parses_back_to_the_same_value() {
        let cs = CoordinateSystem::xy().with_srid(GEOJSON_SRID);
        let ring = LineString::new(
            cs,
            vec![
                Point::xy(0.0, 0.0).with_srid(GEOJSON_SRID),
                Point::xy(4.0, 0.0).with_srid(GEOJSON_SRID),
                Point::xy(0.0, 4.0).with_srid(GEOJSON_SRID),
                Point::xy(0.0, 0.0).with_srid(GEOJSON_SRID),
            ],
        )
        .unwrap();
        let geometry: Geometry = Polygon::new(cs, vec![ring]).unwrap().into();

        let text = GeoJsonWriter::new().write(&geometry).unwrap();
        assert_eq!(GeoJsonReader::new().read_geometry(&text).unwrap(), geometry);
    }

    #[test]
    fn features_round_trip() {
        let mut properties = Map::new();
        properties.insert("name".to_string(), Value::from("origin"));
        let feature = Feature {
            geometry: Some(Point::xy(0.0, 0.0).with_srid(GEOJSON_SRID).into()),
            properties: Some(properties),
            id: Some(Value::from("a")),
        };

        let value = GeoJsonWriter::new().feature_to_value(&feature).unwrap();
        let GeoJson::Feature(read) = GeoJsonReader::new().read(&value.to_string()).unwrap()
        else {
            panic!("wrong variant");
        };
        assert_eq!(read, feature);
    }
}
