//! Well-Known Binary codec, covering both the ISO WKB and the PostGIS EWKB dialects.
//!
//! The reader accepts either dialect and detects which one it is looking at from the geometry
//! type word; the writer is told which dialect to emit through [`WkbDialect`].

mod buffer;
mod reader;
mod type_code;
mod writer;

pub use buffer::WkbByteOrder;
pub use reader::{peek_header, WkbInfo, WkbReader};
pub use writer::WkbWriter;

/// Which header dialect [`WkbWriter`] emits.
///
/// Plain WKB encodes dimensionality additively in the type code (`base + 1000·Z + 2000·M`) and
/// never embeds an SRID. EWKB sets flag bits in the type word and embeds the SRID of the
/// outermost geometry when it is non-zero.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WkbDialect {
    /// ISO WKB with additive type codes.
    Wkb,
    /// PostGIS EWKB with flag bits and an embedded SRID.
    Ewkb,
}
