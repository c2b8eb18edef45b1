//! Error types used by the codecs.

use meridian_geo::{GeometryType, MeridianGeoError};
use thiserror::Error;

/// Error returned by the WKB/EWKB reader and writer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WkbError {
    /// The input ended in the middle of a value.
    #[error("unexpected end of stream while reading {context}")]
    Truncated {
        /// What the codec was reading when the input ran out.
        context: &'static str,
    },

    /// The byte-order marker is neither big-endian (0) nor little-endian (1).
    #[error("unknown byte order marker {0:#04x}")]
    UnknownByteOrder(u8),

    /// The geometry type word does not name a supported geometry.
    #[error("unsupported WKB geometry type code {0:#x}")]
    UnsupportedTypeCode(u32),

    /// A composite geometry contains a child of a variant it cannot hold.
    #[error("{parent} cannot contain a {child} in WKB")]
    UnexpectedChildType {
        /// Variant of the composite geometry being read.
        parent: GeometryType,
        /// Variant found in the stream.
        child: GeometryType,
    },

    /// Input continued after a complete top-level geometry.
    #[error("unexpected data at end of stream: {0} bytes left")]
    TrailingData(usize),

    /// A point with all-NaN coordinates was read, but the NaN empty-point convention is not
    /// enabled.
    #[error("point has only NaN coordinates; enable NaN empty points to read it as empty")]
    NanPoint,

    /// An empty point was written, but the NaN empty-point convention is not enabled.
    #[error("empty points have no WKB representation; enable NaN empty points to write them")]
    EmptyPoint,

    /// The decoded structure violates a geometry invariant.
    #[error(transparent)]
    InvalidGeometry(#[from] MeridianGeoError),
}

/// Error returned by the WKT/EWKT reader.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WktError {
    /// A character outside the WKT grammar.
    #[error("unexpected character {character:?} at position {position}")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset in the input.
        position: usize,
    },

    /// A well-formed token in a place where a different token was required.
    #[error("unexpected {found} at position {position}, expected {expected}")]
    UnexpectedToken {
        /// Rendering of the token that was found.
        found: String,
        /// What the parser was looking for.
        expected: &'static str,
        /// Byte offset in the input.
        position: usize,
    },

    /// The input ended before the geometry was complete.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd {
        /// What the parser was looking for.
        expected: &'static str,
    },

    /// A word that is not a geometry keyword.
    #[error("unknown geometry keyword {word:?} at position {position}")]
    UnknownKeyword {
        /// The word that was found.
        word: String,
        /// Byte offset in the input.
        position: usize,
    },

    /// A numeric token that does not parse as a double.
    #[error("invalid number {text:?} at position {position}")]
    InvalidNumber {
        /// The text of the token.
        text: String,
        /// Byte offset in the input.
        position: usize,
    },

    /// Input continued after a complete top-level geometry.
    #[error("unexpected data after a complete geometry at position {position}")]
    TrailingData {
        /// Byte offset of the first trailing token.
        position: usize,
    },

    /// An `SRID=...;` prefix that is not followed by a valid integer and semicolon.
    #[error("malformed SRID prefix")]
    InvalidSridPrefix,

    /// The parsed structure violates a geometry invariant.
    #[error(transparent)]
    InvalidGeometry(#[from] MeridianGeoError),
}

impl WktError {
    /// Shifts the reported byte position, for input parsed after a stripped prefix.
    pub(crate) fn at_offset(mut self, offset: usize) -> Self {
        match &mut self {
            Self::UnexpectedCharacter { position, .. }
            | Self::UnexpectedToken { position, .. }
            | Self::UnknownKeyword { position, .. }
            | Self::InvalidNumber { position, .. }
            | Self::TrailingData { position } => *position += offset,
            Self::UnexpectedEnd { .. } | Self::InvalidSridPrefix | Self::InvalidGeometry(_) => {}
        }
        self
    }
}

/// Error returned by the GeoJSON reader and writer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoJsonError {
    /// The input is not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(String),

    /// A required field is absent.
    #[error("missing \"{0}\" field")]
    MissingField(&'static str),

    /// A field is present but has the wrong shape.
    #[error("invalid \"{field}\" field: {message}")]
    InvalidField {
        /// Name of the field.
        field: &'static str,
        /// What is wrong with it.
        message: String,
    },

    /// A type string with the right letters but the wrong case, rejected in strict mode.
    #[error("wrong case for type {found:?}: GeoJSON spells it {expected:?}")]
    TypeCase {
        /// The string found in the document.
        found: String,
        /// The canonical spelling.
        expected: &'static str,
    },

    /// A type string that is not a GeoJSON type.
    #[error("unknown GeoJSON type {0:?}")]
    UnknownType(String),

    /// A Feature or FeatureCollection where a geometry was required.
    #[error("expected a geometry, got a {0:?} document")]
    NotAGeometry(String),

    /// A GeometryCollection inside another GeometryCollection, rejected in strict mode.
    #[error("GeometryCollection cannot be nested inside another GeometryCollection")]
    NestedCollection,

    /// A geometry variant GeoJSON cannot represent.
    #[error("{0} has no GeoJSON representation")]
    UnsupportedType(GeometryType),

    /// The parsed structure violates a geometry invariant.
    #[error(transparent)]
    InvalidGeometry(#[from] MeridianGeoError),
}

impl From<serde_json::Error> for GeoJsonError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value.to_string())
    }
}

/// Error returned when materializing a [`GeometryProxy`](crate::proxy::GeometryProxy).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProxyError {
    /// The wrapped WKB failed to parse.
    #[error(transparent)]
    Wkb(#[from] WkbError),

    /// The wrapped WKT failed to parse.
    #[error(transparent)]
    Wkt(#[from] WktError),

    /// The wrapped data parsed into a different variant than the proxy was declared for.
    #[error("proxy declared for a {expected}, but the data contains a {actual}")]
    TypeMismatch {
        /// Variant the proxy was created for.
        expected: GeometryType,
        /// Variant actually found in the data.
        actual: GeometryType,
    },
}
