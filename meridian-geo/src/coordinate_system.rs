//! Dimensionality and spatial reference descriptor shared by all geometries.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::MeridianGeoError;

/// Describes which coordinates a geometry stores and in which spatial reference system.
///
/// A coordinate system is immutable. Operations that change it (`with_srid`, `without_z`, …)
/// return a new value.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CoordinateSystem {
    has_z: bool,
    has_m: bool,
    srid: i32,
}

impl CoordinateSystem {
    /// Creates a coordinate system with the given axes and SRID.
    pub fn new(has_z: bool, has_m: bool, srid: i32) -> Self {
        Self { has_z, has_m, srid }
    }

    /// 2-dimensional coordinate system with no SRID.
    pub fn xy() -> Self {
        Self::new(false, false, 0)
    }

    /// 3-dimensional coordinate system with no SRID.
    pub fn xyz() -> Self {
        Self::new(true, false, 0)
    }

    /// 2-dimensional measured coordinate system with no SRID.
    pub fn xym() -> Self {
        Self::new(false, true, 0)
    }

    /// 3-dimensional measured coordinate system with no SRID.
    pub fn xyzm() -> Self {
        Self::new(true, true, 0)
    }

    /// Returns a copy of the value with the SRID replaced.
    pub fn with_srid(self, srid: i32) -> Self {
        Self { srid, ..self }
    }

    /// Returns a copy of the value without the Z axis.
    pub fn without_z(self) -> Self {
        Self {
            has_z: false,
            ..self
        }
    }

    /// Returns a copy of the value without the M axis.
    pub fn without_m(self) -> Self {
        Self {
            has_m: false,
            ..self
        }
    }

    /// Whether geometries in this coordinate system store a Z coordinate.
    pub fn has_z(&self) -> bool {
        self.has_z
    }

    /// Whether geometries in this coordinate system store an M coordinate.
    pub fn has_m(&self) -> bool {
        self.has_m
    }

    /// Spatial reference identifier. `0` means "not set".
    pub fn srid(&self) -> i32 {
        self.srid
    }

    /// Number of coordinates stored per point: 2, 3 or 4.
    pub fn coordinate_dimension(&self) -> usize {
        2 + self.has_z as usize + self.has_m as usize
    }

    /// Number of spatial dimensions: 3 with a Z axis, 2 without. M does not count.
    pub fn spatial_dimension(&self) -> usize {
        if self.has_z {
            3
        } else {
            2
        }
    }

    /// Whether two coordinate systems agree on the stored axes.
    ///
    /// The SRID is intentionally not part of this check: a container and its elements must
    /// store the same coordinates, but SRIDs are reconciled by the container.
    pub fn matches(&self, other: &CoordinateSystem) -> bool {
        self.has_z == other.has_z && self.has_m == other.has_m
    }

    /// Same as [`matches`](Self::matches), but reports the mismatch as an error.
    pub fn check_matches(&self, element: CoordinateSystem) -> Result<(), MeridianGeoError> {
        if self.matches(&element) {
            Ok(())
        } else {
            Err(MeridianGeoError::CoordinateSystemMismatch {
                container: *self,
                element,
            })
        }
    }
}

impl Display for CoordinateSystem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "XY")?;
        if self.has_z {
            write!(f, "Z")?;
        }
        if self.has_m {
            write!(f, "M")?;
        }
        if self.srid != 0 {
            write!(f, " (SRID {})", self.srid)?;
        }
        Ok(())
    }
}
