//! Well-Known Text codec, covering both the ISO WKT and the PostGIS EWKT dialects.
//!
//! EWKT is WKT with an optional `SRID=n;` prefix; the rest of the grammar is identical, so the
//! EWKT reader and writer delegate to the WKT ones after handling the prefix.

mod reader;
mod tokenizer;
mod writer;

pub use reader::{EwktReader, WktReader};
pub(crate) use reader::split_srid_prefix;
pub use writer::{EwktWriter, WktWriter};
