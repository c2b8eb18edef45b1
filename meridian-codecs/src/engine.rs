//! Contract for an external spatial-operation engine.
//!
//! Spatial algorithms (area, union, buffer, topological predicates and so on) are not
//! implemented by this crate. They are delegated to a collaborator behind this trait, such as a
//! computational-geometry library or a database with GIS extensions. Geometries cross the
//! boundary as WKB, so the collaborator never needs to understand the in-memory model.

/// One argument of an engine operation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum EngineParam<'a> {
    /// A geometry argument, encoded as WKB.
    Geometry(&'a [u8]),
    /// A numeric argument, e.g. a buffer distance.
    Number(f64),
    /// A textual argument.
    Text(&'a str),
    /// A boolean argument.
    Boolean(bool),
}

/// Result of an engine operation.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineValue {
    /// A geometry result, encoded as WKB.
    Geometry(Vec<u8>),
    /// A numeric result, e.g. an area.
    Number(f64),
    /// A boolean result, e.g. a topological predicate.
    Boolean(bool),
}

/// An external engine executing spatial operations by name.
///
/// Implementations are injected explicitly by the caller that needs them; there is no global
/// engine registry.
pub trait GeometryEngine {
    /// Error type of the engine.
    type Error: std::error::Error;

    /// Executes the named operation over the given parameters.
    fn execute(
        &self,
        operation: &str,
        params: &[EngineParam<'_>],
    ) -> Result<EngineValue, Self::Error>;
}
