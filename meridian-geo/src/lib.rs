//! Immutable value objects for the OGC Simple Features geometry model, including the
//! non-linear extensions (circular strings, compound curves, curve polygons, polyhedral
//! surfaces and TINs).
//!
//! Every geometry carries one [`CoordinateSystem`] describing its axes (XY, XYZ, XYM or XYZM)
//! and SRID, and every constructor checks that nested geometries agree with their container on
//! the stored axes. Values never change after construction; transformations return new values.
//!
//! Serialization to and from the interchange formats (WKB, WKT, GeoJSON and their extended
//! dialects) lives in the `meridian-codecs` crate.

mod bounding_box;
pub use bounding_box::*;

mod coordinate_system;
pub use coordinate_system::*;

mod error;
pub use error::*;

mod geometry;
pub use geometry::*;

mod geometry_type;
pub use geometry_type::*;

mod curve;
pub use curve::*;

mod point;
pub use point::*;

mod line_string;
pub use line_string::*;

mod circular_string;
pub use circular_string::*;

mod compound_curve;
pub use compound_curve::*;

mod polygon;
pub use polygon::*;

mod triangle;
pub use triangle::*;

mod curve_polygon;
pub use curve_polygon::*;

mod multi_point;
pub use multi_point::*;

mod multi_line_string;
pub use multi_line_string::*;

mod multi_polygon;
pub use multi_polygon::*;

mod geometry_collection;
pub use geometry_collection::*;

mod polyhedral_surface;
pub use polyhedral_surface::*;
