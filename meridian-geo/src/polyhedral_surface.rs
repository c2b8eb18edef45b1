//! Surfaces assembled from patches: [`PolyhedralSurface`] and [`Tin`].

use serde::{Deserialize, Serialize};

use crate::coordinate_system::CoordinateSystem;
use crate::error::MeridianGeoError;
use crate::point::Point;
use crate::polygon::Polygon;
use crate::triangle::Triangle;

/// A contiguous surface assembled from polygon patches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolyhedralSurface {
    cs: CoordinateSystem,
    patches: Vec<Polygon>,
}

impl PolyhedralSurface {
    /// Creates a polyhedral surface from its patches.
    pub fn new(cs: CoordinateSystem, patches: Vec<Polygon>) -> Result<Self, MeridianGeoError> {
        for patch in &patches {
            cs.check_matches(patch.coordinate_system())?;
        }

        Ok(Self { cs, patches })
    }

    /// Creates an empty polyhedral surface.
    pub fn empty(cs: CoordinateSystem) -> Self {
        Self {
            cs,
            patches: vec![],
        }
    }

    /// Coordinate system of the surface.
    pub fn coordinate_system(&self) -> CoordinateSystem {
        self.cs
    }

    /// The polygon patches of the surface.
    pub fn patches(&self) -> &[Polygon] {
        &self.patches
    }

    /// Whether the surface has no patches.
    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }

    pub(crate) fn map_points(
        &self,
        cs: CoordinateSystem,
        f: &dyn Fn(&Point, CoordinateSystem) -> Point,
    ) -> Self {
        Self {
            cs,
            patches: self.patches.iter().map(|p| p.map_points(cs, f)).collect(),
        }
    }

    pub(crate) fn for_each_point(&self, f: &mut dyn FnMut(&Point)) {
        for patch in &self.patches {
            patch.for_each_point(f);
        }
    }
}

/// A triangulated irregular network: a polyhedral surface whose patches are all triangles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tin {
    cs: CoordinateSystem,
    patches: Vec<Triangle>,
}

impl Tin {
    /// Creates a TIN from its triangle patches.
    pub fn new(cs: CoordinateSystem, patches: Vec<Triangle>) -> Result<Self, MeridianGeoError> {
        for patch in &patches {
            cs.check_matches(patch.coordinate_system())?;
        }

        Ok(Self { cs, patches })
    }

    /// Creates an empty TIN.
    pub fn empty(cs: CoordinateSystem) -> Self {
        Self {
            cs,
            patches: vec![],
        }
    }

    /// Coordinate system of the surface.
    pub fn coordinate_system(&self) -> CoordinateSystem {
        self.cs
    }

    /// The triangle patches of the surface.
    pub fn patches(&self) -> &[Triangle] {
        &self.patches
    }

    /// Whether the surface has no patches.
    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }

    pub(crate) fn map_points(
        &self,
        cs: CoordinateSystem,
        f: &dyn Fn(&Point, CoordinateSystem) -> Point,
    ) -> Self {
        Self {
            cs,
            patches: self.patches.iter().map(|p| p.map_points(cs, f)).collect(),
        }
    }

    pub(crate) fn for_each_point(&self, f: &mut dyn FnMut(&Point)) {
        for patch in &self.patches {
            patch.for_each_point(f);
        }
    }
}
