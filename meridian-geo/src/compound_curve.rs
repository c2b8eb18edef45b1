//! See documentation for the [`CompoundCurve`] type.

use serde::{Deserialize, Serialize};

use crate::coordinate_system::CoordinateSystem;
use crate::curve::CurveElement;
use crate::error::MeridianGeoError;
use crate::geometry_type::GeometryType;
use crate::point::Point;

/// A single continuous curve chained from line strings and circular strings.
///
/// Each element must start at the coordinates where the previous element ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundCurve {
    cs: CoordinateSystem,
    elements: Vec<CurveElement>,
}

impl CompoundCurve {
    /// Creates a compound curve from the given elements, enforcing continuity.
    pub fn new(cs: CoordinateSystem, elements: Vec<CurveElement>) -> Result<Self, MeridianGeoError> {
        for element in &elements {
            cs.check_matches(element.coordinate_system())?;
            if element.is_empty() {
                return Err(MeridianGeoError::invalid(
                    GeometryType::CompoundCurve,
                    "elements must not be empty",
                ));
            }
        }

        for (index, pair) in elements.windows(2).enumerate() {
            let end = pair[0].end_point().map(Point::coordinates);
            let start = pair[1].start_point().map(Point::coordinates);
            if end != start {
                return Err(MeridianGeoError::DiscontinuousCompoundCurve { index });
            }
        }

        Ok(Self { cs, elements })
    }

    /// Creates an empty compound curve.
    pub fn empty(cs: CoordinateSystem) -> Self {
        Self {
            cs,
            elements: vec![],
        }
    }

    /// Coordinate system of the curve.
    pub fn coordinate_system(&self) -> CoordinateSystem {
        self.cs
    }

    /// Elements of the curve, in order.
    pub fn elements(&self) -> &[CurveElement] {
        &self.elements
    }

    /// Whether the curve has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// First point of the first element, unless empty.
    pub fn start_point(&self) -> Option<&Point> {
        self.elements.first().and_then(CurveElement::start_point)
    }

    /// Last point of the last element, unless empty.
    pub fn end_point(&self) -> Option<&Point> {
        self.elements.last().and_then(CurveElement::end_point)
    }

    /// Whether the curve is non-empty and ends where it starts.
    pub fn is_closed(&self) -> bool {
        match (self.start_point(), self.end_point()) {
            (Some(start), Some(end)) => start.coordinates() == end.coordinates(),
            _ => false,
        }
    }

    pub(crate) fn map_points(
        &self,
        cs: CoordinateSystem,
        f: &dyn Fn(&Point, CoordinateSystem) -> Point,
    ) -> Self {
        Self {
            cs,
            elements: self.elements.iter().map(|e| e.map_points(cs, f)).collect(),
        }
    }

    pub(crate) fn for_each_point(&self, f: &mut dyn FnMut(&Point)) {
        for element in &self.elements {
            element.for_each_point(f);
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::line_string::LineString;

    fn segment(coords: &[(f64, f64)]) -> CurveElement {
        let points = coords.iter().map(|&(x, y)| Point::xy(x, y)).collect();
        LineString::new(CoordinateSystem::xy(), points)
            .unwrap()
            .into()
    }

    #[test]
    fn discontinuity_is_rejected() {
        let result = CompoundCurve::new(
            CoordinateSystem::xy(),
            vec![
                segment(&[(0.0, 0.0), (1.0, 1.0)]),
                segment(&[(2.0, 2.0), (3.0, 3.0)]),
            ],
        );
        assert_matches!(
            result,
            Err(MeridianGeoError::DiscontinuousCompoundCurve { index: 0 })
        );
    }

    #[test]
    fn continuous_chain_is_accepted() {
        let curve = CompoundCurve::new(
            CoordinateSystem::xy(),
            vec![
                segment(&[(0.0, 0.0), (1.0, 1.0)]),
                segment(&[(1.0, 1.0), (3.0, 3.0)]),
            ],
        )
        .unwrap();

        assert_eq!(curve.start_point().and_then(Point::x), Some(0.0));
        assert_eq!(curve.end_point().and_then(Point::x), Some(3.0));
        assert!(!curve.is_closed());
    }

    #[test]
    fn empty_element_is_rejected() {
        let result = CompoundCurve::new(
            CoordinateSystem::xy(),
            vec![CurveElement::LineString(LineString::empty(
                CoordinateSystem::xy(),
            ))],
        );
        assert_matches!(result, Err(MeridianGeoError::InvalidGeometry { .. }));
    }
}
