//! See documentation for the [`Point`] type.

use serde::{Deserialize, Serialize};

use crate::coordinate_system::CoordinateSystem;
use crate::error::MeridianGeoError;
use crate::geometry_type::GeometryType;

/// A single position, or the empty point.
///
/// A non-empty point stores exactly [`CoordinateSystem::coordinate_dimension`] coordinates in
/// the order X, Y, then Z and M when present. The empty point stores no coordinates at all;
/// it is a proper sentinel value, not a NaN-filled position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    cs: CoordinateSystem,
    coords: Vec<f64>,
}

impl Point {
    /// Creates a point from a full coordinate tuple.
    ///
    /// The number of coordinates must equal the coordinate dimension of `cs`.
    pub fn new(cs: CoordinateSystem, coords: &[f64]) -> Result<Self, MeridianGeoError> {
        if coords.len() != cs.coordinate_dimension() {
            return Err(MeridianGeoError::invalid(
                GeometryType::Point,
                format!(
                    "expected {} coordinates for {}, got {}",
                    cs.coordinate_dimension(),
                    cs,
                    coords.len()
                ),
            ));
        }

        Ok(Self {
            cs,
            coords: coords.to_vec(),
        })
    }

    /// Creates the empty point in the given coordinate system.
    pub fn empty(cs: CoordinateSystem) -> Self {
        Self { cs, coords: vec![] }
    }

    /// Creates a 2-dimensional point with no SRID.
    pub fn xy(x: f64, y: f64) -> Self {
        Self {
            cs: CoordinateSystem::xy(),
            coords: vec![x, y],
        }
    }

    /// Creates a 3-dimensional point with no SRID.
    pub fn xyz(x: f64, y: f64, z: f64) -> Self {
        Self {
            cs: CoordinateSystem::xyz(),
            coords: vec![x, y, z],
        }
    }

    /// Creates a measured 2-dimensional point with no SRID.
    pub fn xym(x: f64, y: f64, m: f64) -> Self {
        Self {
            cs: CoordinateSystem::xym(),
            coords: vec![x, y, m],
        }
    }

    /// Creates a measured 3-dimensional point with no SRID.
    pub fn xyzm(x: f64, y: f64, z: f64, m: f64) -> Self {
        Self {
            cs: CoordinateSystem::xyzm(),
            coords: vec![x, y, z, m],
        }
    }

    pub(crate) fn new_unchecked(cs: CoordinateSystem, coords: Vec<f64>) -> Self {
        debug_assert!(coords.is_empty() || coords.len() == cs.coordinate_dimension());
        Self { cs, coords }
    }

    /// Coordinate system of the point.
    pub fn coordinate_system(&self) -> CoordinateSystem {
        self.cs
    }

    /// Whether this is the empty point.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// All stored coordinates in X, Y, Z, M order. Empty for the empty point.
    pub fn coordinates(&self) -> &[f64] {
        &self.coords
    }

    /// X coordinate, unless the point is empty.
    pub fn x(&self) -> Option<f64> {
        self.coords.first().copied()
    }

    /// Y coordinate, unless the point is empty.
    pub fn y(&self) -> Option<f64> {
        self.coords.get(1).copied()
    }

    /// Z coordinate, if the coordinate system has one and the point is not empty.
    pub fn z(&self) -> Option<f64> {
        if self.cs.has_z() {
            self.coords.get(2).copied()
        } else {
            None
        }
    }

    /// M coordinate, if the coordinate system has one and the point is not empty.
    pub fn m(&self) -> Option<f64> {
        if self.cs.has_m() {
            self.coords.get(2 + self.cs.has_z() as usize).copied()
        } else {
            None
        }
    }

    /// Returns a copy of the point with the SRID replaced.
    pub fn with_srid(&self, srid: i32) -> Self {
        Self {
            cs: self.cs.with_srid(srid),
            coords: self.coords.clone(),
        }
    }
}
