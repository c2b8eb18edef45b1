//! See documentation for the [`MultiLineString`] type.

use serde::{Deserialize, Serialize};

use crate::coordinate_system::CoordinateSystem;
use crate::error::MeridianGeoError;
use crate::line_string::LineString;
use crate::point::Point;

/// A collection of line strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiLineString {
    cs: CoordinateSystem,
    line_strings: Vec<LineString>,
}

impl MultiLineString {
    /// Creates a multi line string from the given line strings.
    pub fn new(
        cs: CoordinateSystem,
        line_strings: Vec<LineString>,
    ) -> Result<Self, MeridianGeoError> {
        for line_string in &line_strings {
            cs.check_matches(line_string.coordinate_system())?;
        }

        Ok(Self { cs, line_strings })
    }

    /// Creates an empty multi line string.
    pub fn empty(cs: CoordinateSystem) -> Self {
        Self {
            cs,
            line_strings: vec![],
        }
    }

    /// Coordinate system of the collection.
    pub fn coordinate_system(&self) -> CoordinateSystem {
        self.cs
    }

    /// The collected line strings.
    pub fn line_strings(&self) -> &[LineString] {
        &self.line_strings
    }

    /// Whether the collection has no elements.
    pub fn is_empty(&self) -> bool {
        self.line_strings.is_empty()
    }

    pub(crate) fn map_points(
        &self,
        cs: CoordinateSystem,
        f: &dyn Fn(&Point, CoordinateSystem) -> Point,
    ) -> Self {
        Self {
            cs,
            line_strings: self
                .line_strings
                .iter()
                .map(|l| l.map_points(cs, f))
                .collect(),
        }
    }

    pub(crate) fn for_each_point(&self, f: &mut dyn FnMut(&Point)) {
        for line_string in &self.line_strings {
            line_string.for_each_point(f);
        }
    }
}
