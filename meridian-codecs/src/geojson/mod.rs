//! GeoJSON codec (RFC 7946).
//!
//! GeoJSON knows only the seven linear geometry types and has no SRID or M axis: every
//! coordinate is WGS 84, so geometries read from GeoJSON carry [`GEOJSON_SRID`] and writing
//! drops the M coordinate. The curved and polyhedral variants have no GeoJSON form and are
//! rejected by the writer.

mod reader;
mod writer;

pub use reader::GeoJsonReader;
pub use writer::GeoJsonWriter;

use meridian_geo::Geometry;
use serde_json::{Map, Value};

/// SRID of every GeoJSON coordinate, per RFC 7946.
pub const GEOJSON_SRID: i32 = 4326;

/// Any GeoJSON document: a bare geometry, a feature or a feature collection.
#[derive(Debug, Clone, PartialEq)]
pub enum GeoJson {
    /// A document whose `type` is one of the geometry types.
    Geometry(Geometry),
    /// A `Feature` document.
    Feature(Feature),
    /// A `FeatureCollection` document.
    FeatureCollection(FeatureCollection),
}

/// A GeoJSON feature: a geometry with attached properties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Feature {
    /// The feature's geometry. `null` in the document maps to `None`.
    pub geometry: Option<Geometry>,
    /// The feature's properties. `null` in the document maps to `None`.
    pub properties: Option<Map<String, Value>>,
    /// The optional `id` member, a string or a number when present.
    pub id: Option<Value>,
}

/// A GeoJSON feature collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureCollection {
    /// The features of the collection, in document order.
    pub features: Vec<Feature>,
}
