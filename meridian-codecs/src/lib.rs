//! Codecs between [`meridian_geo`] geometries and their interchange formats.
//!
//! Four codec families are provided, each with a reader and a writer:
//!
//! * [`wkb`]: Well-Known Binary and its PostGIS EWKB extension.
//! * [`wkt`]: Well-Known Text and its PostGIS EWKT extension.
//! * [`geojson`]: GeoJSON per RFC 7946.
//!
//! [`GeometryProxy`] wraps serialized WKB or WKT and defers parsing until the geometry itself
//! is needed, while still answering cheap metadata questions from the serialized headers. The
//! [`engine`] module declares the contract for an external spatial-operation engine; no spatial
//! algorithms are implemented here.

pub mod engine;
pub mod geojson;
pub mod wkb;
pub mod wkt;

mod error;
pub use error::*;

mod proxy;
pub use proxy::GeometryProxy;
