//! Lazy geometry wrapper deferring codec work until first access.

use std::sync::OnceLock;

use meridian_geo::{Geometry, GeometryType};

use crate::error::ProxyError;
use crate::wkb::{peek_header, WkbReader};
use crate::wkt::{split_srid_prefix, EwktReader};

#[derive(Debug, Clone)]
enum ProxySource {
    Wkb(Vec<u8>),
    Wkt(String),
}

/// A geometry held in its serialized form and parsed only when actually needed.
///
/// The raw form, the SRID and (for WKB) the geometry type are available without parsing.
/// Everything else goes through [`geometry`](Self::geometry), which parses on first call and
/// caches the value for the lifetime of the proxy. Materialization is idempotent: concurrent
/// callers may each parse independently, but all observe the single cached value. The WKB path
/// accepts both dialects and the NaN empty-point convention; the text path accepts EWKT and
/// therefore plain WKT too.
#[derive(Debug, Clone)]
pub struct GeometryProxy {
    source: ProxySource,
    expected: Option<GeometryType>,
    cache: OnceLock<Geometry>,
}

impl GeometryProxy {
    /// Wraps WKB or EWKB bytes without parsing them.
    pub fn from_wkb(bytes: Vec<u8>) -> Self {
        Self {
            source: ProxySource::Wkb(bytes),
            expected: None,
            cache: OnceLock::new(),
        }
    }

    /// Wraps WKT or EWKT text without parsing it.
    pub fn from_wkt(text: String) -> Self {
        Self {
            source: ProxySource::Wkt(text),
            expected: None,
            cache: OnceLock::new(),
        }
    }

    /// Declares the variant the wrapped data must contain.
    ///
    /// Materialization fails with [`ProxyError::TypeMismatch`] if the parsed geometry turns out
    /// to be anything else.
    pub fn expecting(mut self, geometry_type: GeometryType) -> Self {
        self.expected = Some(geometry_type);
        self
    }

    /// The wrapped bytes, if the proxy wraps WKB.
    pub fn wkb(&self) -> Option<&[u8]> {
        match &self.source {
            ProxySource::Wkb(bytes) => Some(bytes),
            ProxySource::Wkt(_) => None,
        }
    }

    /// The wrapped text, if the proxy wraps WKT.
    pub fn wkt(&self) -> Option<&str> {
        match &self.source {
            ProxySource::Wkb(_) => None,
            ProxySource::Wkt(text) => Some(text),
        }
    }

    /// The declared target variant, if one was set.
    pub fn expected_type(&self) -> Option<GeometryType> {
        self.expected
    }

    /// Whether the geometry has already been materialized.
    pub fn is_loaded(&self) -> bool {
        self.cache.get().is_some()
    }

    /// Variant of the wrapped geometry.
    ///
    /// For WKB this only decodes the header; for WKT it falls back to full materialization.
    pub fn geometry_type(&self) -> Result<GeometryType, ProxyError> {
        if let Some(geometry) = self.cache.get() {
            return Ok(geometry.geometry_type());
        }
        match &self.source {
            ProxySource::Wkb(bytes) => Ok(peek_header(bytes)?.geometry_type),
            ProxySource::Wkt(_) => Ok(self.geometry()?.geometry_type()),
        }
    }

    /// SRID of the wrapped geometry, without materialization.
    ///
    /// Only the serialized headers are consulted, so plain WKB and unprefixed WKT yield 0.
    pub fn srid(&self) -> Result<i32, ProxyError> {
        if let Some(geometry) = self.cache.get() {
            return Ok(geometry.srid());
        }
        match &self.source {
            ProxySource::Wkb(bytes) => Ok(peek_header(bytes)?.coordinate_system.srid()),
            ProxySource::Wkt(text) => {
                let (srid, _) = split_srid_prefix(text)?;
                Ok(srid)
            }
        }
    }

    /// The materialized geometry, parsing and caching it on first call.
    pub fn geometry(&self) -> Result<&Geometry, ProxyError> {
        if let Some(geometry) = self.cache.get() {
            return Ok(geometry);
        }

        let geometry = match &self.source {
            ProxySource::Wkb(bytes) => {
                WkbReader::new().with_nan_empty_points().read(bytes)?
            }
            ProxySource::Wkt(text) => EwktReader::new().read(text)?,
        };

        if let Some(expected) = self.expected {
            if geometry.geometry_type() != expected {
                return Err(ProxyError::TypeMismatch {
                    expected,
                    actual: geometry.geometry_type(),
                });
            }
        }

        // A concurrent caller may have won the race; either way one value is observed.
        Ok(self.cache.get_or_init(move || geometry))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use meridian_geo::Point;

    use super::*;
    use crate::wkb::{WkbDialect, WkbWriter};

    #[test]
    fn materialization_is_lazy_and_idempotent() {
        let proxy = GeometryProxy::from_wkt("SRID=4326;POINT(10 20)".to_string());
        assert!(!proxy.is_loaded());

        let first = proxy.geometry().unwrap().clone();
        assert!(proxy.is_loaded());
        let second = proxy.geometry().unwrap();
        assert_eq!(&first, second);
        assert_eq!(first.srid(), 4326);
    }

    #[test]
    fn wkb_metadata_without_materialization() {
        let geometry: Geometry = Point::xy(1.0, 2.0).with_srid(3857).into();
        let bytes = WkbWriter::new(WkbDialect::Ewkb).write(&geometry).unwrap();

        let proxy = GeometryProxy::from_wkb(bytes);
        assert_eq!(proxy.geometry_type().unwrap(), GeometryType::Point);
        assert_eq!(proxy.srid().unwrap(), 3857);
        assert!(!proxy.is_loaded());

        assert_eq!(proxy.geometry().unwrap(), &geometry);
    }

    #[test]
    fn wkt_srid_without_materialization() {
        let proxy = GeometryProxy::from_wkt("SRID=4326;POINT(1 2)".to_string());
        assert_eq!(proxy.srid().unwrap(), 4326);
        assert!(!proxy.is_loaded());
    }

    #[test]
    fn declared_type_is_checked_on_materialization() {
        let proxy = GeometryProxy::from_wkt("POINT(1 2)".to_string())
            .expecting(GeometryType::LineString);
        assert_matches!(
            proxy.geometry(),
            Err(ProxyError::TypeMismatch {
                expected: GeometryType::LineString,
                actual: GeometryType::Point,
            })
        );
        assert!(!proxy.is_loaded());
    }

    #[test]
    fn parse_errors_surface_through_the_proxy() {
        let proxy = GeometryProxy::from_wkt("PINT(1 2)".to_string());
        assert_matches!(proxy.geometry(), Err(ProxyError::Wkt(_)));

        let proxy = GeometryProxy::from_wkb(vec![1, 2]);
        assert_matches!(proxy.geometry(), Err(ProxyError::Wkb(_)));
    }
}
