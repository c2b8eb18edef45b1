//! GeoJSON parsing.

use meridian_geo::{
    CoordinateSystem, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};
use serde_json::Value;

use super::{Feature, FeatureCollection, GeoJson, GEOJSON_SRID};
use crate::error::GeoJsonError;

/// Parser for GeoJSON documents.
///
/// By default the reader enforces RFC 7946: type names must match exactly, geometry collections
/// cannot nest, and a feature must spell out its `geometry` and `properties` members even when
/// they are null. [`lenient`](Self::lenient) relaxes all of that, logging each deviation it
/// papers over.
#[derive(Debug, Default, Copy, Clone)]
pub struct GeoJsonReader {
    lenient: bool,
}

impl GeoJsonReader {
    /// Creates a strict reader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the reader accept common deviations from RFC 7946.
    pub fn lenient(mut self) -> Self {
        self.lenient = true;
        self
    }

    /// Parses any GeoJSON document.
    pub fn read(&self, json: &str) -> Result<GeoJson, GeoJsonError> {
        let value: Value = serde_json::from_str(json)?;
        self.read_value(&value)
    }

    /// Parses a document that must be a bare geometry.
    pub fn read_geometry(&self, json: &str) -> Result<Geometry, GeoJsonError> {
        match self.read(json)? {
            GeoJson::Geometry(geometry) => Ok(geometry),
            GeoJson::Feature(_) => Err(GeoJsonError::NotAGeometry("Feature".to_string())),
            GeoJson::FeatureCollection(_) => {
                Err(GeoJsonError::NotAGeometry("FeatureCollection".to_string()))
            }
        }
    }

    fn read_value(&self, value: &Value) -> Result<GeoJson, GeoJsonError> {
        let type_name = self.type_name(value)?;
        Ok(match type_name.as_str() {
            "Feature" => GeoJson::Feature(self.read_feature(value)?),
            "FeatureCollection" => {
                let features = member(value, "features")?
                    .as_array()
                    .ok_or(GeoJsonError::InvalidField {
                        field: "features",
                        message: "expected an array".to_string(),
                    })?
                    .iter()
                    .map(|feature| {
                        if self.type_name(feature)? != "Feature" {
                            return Err(GeoJsonError::InvalidField {
                                field: "features",
                                message: "expected every element to be a Feature".to_string(),
                            });
                        }
                        self.read_feature(feature)
                    })
                    .collect::<Result<_, _>>()?;
                GeoJson::FeatureCollection(FeatureCollection { features })
            }
            _ => GeoJson::Geometry(self.read_geometry_value(value, false)?),
        })
    }

    /// Resolves the `type` member, fixing the case in lenient mode.
    fn type_name(&self, value: &Value) -> Result<String, GeoJsonError> {
        let found = value
            .get("type")
            .ok_or(GeoJsonError::MissingField("type"))?
            .as_str()
            .ok_or(GeoJsonError::InvalidField {
                field: "type",
                message: "expected a string".to_string(),
            })?;

        const KNOWN: [&str; 9] = [
            "Point",
            "LineString",
            "Polygon",
            "MultiPoint",
            "MultiLineString",
            "MultiPolygon",
            "GeometryCollection",
            "Feature",
            "FeatureCollection",
        ];

        if KNOWN.contains(&found) {
            return Ok(found.to_string());
        }

        if let Some(expected) = KNOWN.iter().find(|name| name.eq_ignore_ascii_case(found)) {
            if !self.lenient {
                return Err(GeoJsonError::TypeCase {
                    found: found.to_string(),
                    expected,
                });
            }
            log::warn!("accepting miscased GeoJSON type {found:?} as {expected:?}");
            return Ok(expected.to_string());
        }

        Err(GeoJsonError::UnknownType(found.to_string()))
    }

    fn read_feature(&self, value: &Value) -> Result<Feature, GeoJsonError> {
        let geometry = match self.required_member(value, "geometry")? {
            Some(Value::Null) | None => None,
            Some(geometry) => Some(self.read_geometry_value(geometry, false)?),
        };

        let properties = match self.required_member(value, "properties")? {
            Some(Value::Null) | None => None,
            Some(Value::Object(map)) => Some(map.clone()),
            Some(_) => {
                return Err(GeoJsonError::InvalidField {
                    field: "properties",
                    message: "expected an object or null".to_string(),
                })
            }
        };

        Ok(Feature {
            geometry,
            properties,
            id: value.get("id").cloned(),
        })
    }

    /// A member a feature must carry even when null. Lenient mode treats absence as null.
    fn required_member<'a>(
        &self,
        value: &'a Value,
        field: &'static str,
    ) -> Result<Option<&'a Value>, GeoJsonError> {
        match value.get(field) {
            Some(member) => Ok(Some(member)),
            None if self.lenient => {
                log::warn!("feature is missing its {field:?} member, treating it as null");
                Ok(None)
            }
            None => Err(GeoJsonError::MissingField(field)),
        }
    }

    fn read_geometry_value(&self, value: &Value, nested: bool) -> Result<Geometry, GeoJsonError> {
        let type_name = self.type_name(value)?;

        if type_name == "GeometryCollection" {
            if nested {
                if !self.lenient {
                    return Err(GeoJsonError::NestedCollection);
                }
                log::warn!("accepting a GeometryCollection nested inside another one");
            }
            let geometries: Vec<Geometry> = member(value, "geometries")?
                .as_array()
                .ok_or(GeoJsonError::InvalidField {
                    field: "geometries",
                    message: "expected an array".to_string(),
                })?
                .iter()
                .map(|child| self.read_geometry_value(child, true))
                .collect::<Result<_, _>>()?;
            let cs = geometries
                .first()
                .map(|g| g.coordinate_system())
                .unwrap_or_else(geojson_cs);
            return Ok(GeometryCollection::new(cs, geometries)?.into());
        }

        if type_name == "Feature" || type_name == "FeatureCollection" {
            return Err(GeoJsonError::NotAGeometry(type_name));
        }

        let coordinates = member(value, "coordinates")?;
        Ok(match type_name.as_str() {
            "Point" => self.read_position(coordinates)?.into(),
            "LineString" => {
                let points = self.read_position_array(coordinates)?;
                LineString::new(cs_of(&points), points)?.into()
            }
            "Polygon" => {
                let rings = self.read_rings(coordinates)?;
                let cs = rings
                    .first()
                    .map(|r| r.coordinate_system())
                    .unwrap_or_else(geojson_cs);
                Polygon::new(cs, rings)?.into()
            }
            "MultiPoint" => {
                let points = self.read_position_array(coordinates)?;
                MultiPoint::new(cs_of(&points), points)?.into()
            }
            "MultiLineString" => {
                let lines: Vec<LineString> = array_of(coordinates)?
                    .iter()
                    .map(|line| {
                        let points = self.read_position_array(line)?;
                        Ok(LineString::new(cs_of(&points), points)?)
                    })
                    .collect::<Result<_, GeoJsonError>>()?;
                let cs = lines
                    .first()
                    .map(|l| l.coordinate_system())
                    .unwrap_or_else(geojson_cs);
                MultiLineString::new(cs, lines)?.into()
            }
            "MultiPolygon" => {
                let polygons: Vec<Polygon> = array_of(coordinates)?
                    .iter()
                    .map(|rings| {
                        let rings = self.read_rings(rings)?;
                        let cs = rings
                            .first()
                            .map(|r| r.coordinate_system())
                            .unwrap_or_else(geojson_cs);
                        Ok(Polygon::new(cs, rings)?)
                    })
                    .collect::<Result<_, GeoJsonError>>()?;
                let cs = polygons
                    .first()
                    .map(|p| p.coordinate_system())
                    .unwrap_or_else(geojson_cs);
                MultiPolygon::new(cs, polygons)?.into()
            }
            other => return Err(GeoJsonError::UnknownType(other.to_string())),
        })
    }

    fn read_rings(&self, value: &Value) -> Result<Vec<LineString>, GeoJsonError> {
        array_of(value)?
            .iter()
            .map(|ring| {
                let points = self.read_position_array(ring)?;
                Ok(LineString::new(cs_of(&points), points)?)
            })
            .collect()
    }

    fn read_position_array(&self, value: &Value) -> Result<Vec<Point>, GeoJsonError> {
        array_of(value)?
            .iter()
            .map(|position| self.read_position(position))
            .collect()
    }

    /// A position: 2 or 3 numbers. An empty array is the empty point.
    fn read_position(&self, value: &Value) -> Result<Point, GeoJsonError> {
        let values = array_of(value)?;
        let coords: Vec<f64> = values
            .iter()
            .map(|v| {
                v.as_f64().ok_or(GeoJsonError::InvalidField {
                    field: "coordinates",
                    message: "expected a number".to_string(),
                })
            })
            .collect::<Result<_, _>>()?;

        match coords.len() {
            0 => Ok(Point::empty(geojson_cs())),
            2 | 3 => {
                let cs = CoordinateSystem::new(coords.len() == 3, false, GEOJSON_SRID);
                Ok(Point::new(cs, &coords)?)
            }
            n if n > 3 && self.lenient => {
                log::warn!("position has {n} values, keeping the first 3");
                let cs = CoordinateSystem::xyz().with_srid(GEOJSON_SRID);
                Ok(Point::new(cs, &coords[..3])?)
            }
            n => Err(GeoJsonError::InvalidField {
                field: "coordinates",
                message: format!("a position must have 2 or 3 values, got {n}"),
            }),
        }
    }
}

fn member<'a>(value: &'a Value, field: &'static str) -> Result<&'a Value, GeoJsonError> {
    value.get(field).ok_or(GeoJsonError::MissingField(field))
}

fn array_of(value: &Value) -> Result<&Vec<Value>, GeoJsonError> {
    value.as_array().ok_or(GeoJsonError::InvalidField {
        field: "coordinates",
        message: "expected an array".to_string(),
    })
}

fn geojson_cs() -> CoordinateSystem {
    CoordinateSystem::xy().with_srid(GEOJSON_SRID)
}

fn cs_of(points: &[Point]) -> CoordinateSystem {
    points
        .first()
        .map(|p| p.coordinate_system())
        .unwrap_or_else(geojson_cs)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use meridian_geo::MeridianGeoError;

    use super::*;

    #[test]
    fn reads_a_point() {
        let geometry = GeoJsonReader::new()
            .read_geometry(r#"{"type": "Point", "coordinates": [10.0, -20.0]}"#)
            .unwrap();
        let Geometry::Point(point) = &geometry else {
            panic!("wrong variant");
        };
        assert_eq!(point.coordinates(), &[10.0, -20.0]);
        assert_eq!(geometry.srid(), GEOJSON_SRID);
    }

    #[test]
    fn three_values_mean_a_z_coordinate() {
        let geometry = GeoJsonReader::new()
            .read_geometry(r#"{"type": "Point", "coordinates": [1, 2, 3]}"#)
            .unwrap();
        assert!(geometry.coordinate_system().has_z());
        assert!(!geometry.coordinate_system().has_m());
    }

    #[test]
    fn empty_coordinates_are_the_empty_point() {
        let geometry = GeoJsonReader::new()
            .read_geometry(r#"{"type": "Point", "coordinates": []}"#)
            .unwrap();
        assert!(geometry.is_empty());
    }

    #[test]
    fn type_case_is_enforced_unless_lenient() {
        let json = r#"{"type": "point", "coordinates": [1, 2]}"#;
        assert_matches!(
            GeoJsonReader::new().read(json),
            Err(GeoJsonError::TypeCase { expected: "Point", .. })
        );
        assert_matches!(
            GeoJsonReader::new().lenient().read(json),
            Ok(GeoJson::Geometry(Geometry::Point(_)))
        );
    }

    #[test]
    fn nested_collections_are_rejected_unless_lenient() {
        let json = r#"{
            "type": "GeometryCollection",
            "geometries": [{
                "type": "GeometryCollection",
                "geometries": [{"type": "Point", "coordinates": [1, 2]}]
            }]
        }"#;
        assert_matches!(
            GeoJsonReader::new().read(json),
            Err(GeoJsonError::NestedCollection)
        );
        assert_matches!(GeoJsonReader::new().lenient().read(json), Ok(_));
    }

    #[test]
    fn feature_members_are_required_unless_lenient() {
        let json = r#"{"type": "Feature", "geometry": null}"#;
        assert_matches!(
            GeoJsonReader::new().read(json),
            Err(GeoJsonError::MissingField("properties"))
        );

        let GeoJson::Feature(feature) = GeoJsonReader::new().lenient().read(json).unwrap() else {
            panic!("wrong variant");
        };
        assert_eq!(feature.geometry, None);
        assert_eq!(feature.properties, None);
    }

    #[test]
    fn reads_a_feature_collection() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "id": 7,
                "geometry": {"type": "LineString", "coordinates": [[0, 0], [1, 1]]},
                "properties": {"name": "diagonal"}
            }]
        }"#;
        let GeoJson::FeatureCollection(collection) = GeoJsonReader::new().read(json).unwrap()
        else {
            panic!("wrong variant");
        };
        assert_eq!(collection.features.len(), 1);
        let feature = &collection.features[0];
        assert_eq!(feature.id, Some(Value::from(7)));
        assert_matches!(feature.geometry, Some(Geometry::LineString(_)));
        assert_eq!(
            feature.properties.as_ref().unwrap()["name"],
            Value::from("diagonal")
        );
    }

    #[test]
    fn a_feature_is_not_a_geometry() {
        let json = r#"{"type": "Feature", "geometry": null, "properties": null}"#;
        assert_matches!(
            GeoJsonReader::new().read_geometry(json),
            Err(GeoJsonError::NotAGeometry(_))
        );
    }

    #[test]
    fn mixed_arity_positions_are_rejected() {
        let json = r#"{"type": "LineString", "coordinates": [[0, 0], [1, 1, 1]]}"#;
        assert_matches!(
            GeoJsonReader::new().read(json),
            Err(GeoJsonError::InvalidGeometry(
                MeridianGeoError::CoordinateSystemMismatch { .. }
            ))
        );
    }

    #[test]
    fn unknown_types_are_reported() {
        assert_matches!(
            GeoJsonReader::new().read(r#"{"type": "Blob", "coordinates": []}"#),
            Err(GeoJsonError::UnknownType(_))
        );
    }
}
