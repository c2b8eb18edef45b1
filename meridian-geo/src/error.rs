//! Error type used by the crate.

use thiserror::Error;

use crate::coordinate_system::CoordinateSystem;
use crate::geometry_type::GeometryType;

/// Error returned when a geometry value cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeridianGeoError {
    /// A container geometry was given an element with an incompatible coordinate system.
    #[error("coordinate system mismatch: container is {container}, element is {element}")]
    CoordinateSystemMismatch {
        /// Coordinate system of the container geometry.
        container: CoordinateSystem,
        /// Coordinate system of the offending element.
        element: CoordinateSystem,
    },

    /// A geometry violates an arity or shape invariant of its variant.
    #[error("invalid {geometry_type}: {message}")]
    InvalidGeometry {
        /// Variant that rejected the input.
        geometry_type: GeometryType,
        /// What exactly is wrong with it.
        message: String,
    },

    /// Consecutive elements of a compound curve do not share an endpoint.
    #[error("compound curve is not continuous between elements {index} and {}", index + 1)]
    DiscontinuousCompoundCurve {
        /// Index of the element whose end point does not match the next start point.
        index: usize,
    },

    /// A container was given an element of a variant it cannot hold.
    #[error("{container} cannot contain a {element}")]
    UnexpectedElementType {
        /// Variant of the container geometry.
        container: GeometryType,
        /// Variant of the rejected element.
        element: GeometryType,
    },
}

impl MeridianGeoError {
    pub(crate) fn invalid(geometry_type: GeometryType, message: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            geometry_type,
            message: message.into(),
        }
    }
}
