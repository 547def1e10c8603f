//! Defines [`GeoHandleError`], representing all errors returned by this crate.

use crate::datatypes::GeometryType;
use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeoHandleError {
    /// The text reader rejected its input.
    #[error("WKT error: {0}")]
    Wkt(String),

    /// The binary reader rejected its input.
    #[error("WKB error: {0}")]
    Wkb(String),

    /// The engine reported a runtime type tag outside the known set.
    #[error("Unknown geometry type id: {0}")]
    UnknownGeometryType(i32),

    /// A specific geometry type was requested but the handle holds another one.
    #[error("Incorrect geometry type: expected {expected}, found {found}")]
    IncorrectGeometryType {
        expected: GeometryType,
        found: GeometryType,
    },

    /// The engine refused a query, e.g. on a destroyed handle.
    #[error("Geometry engine error: {0}")]
    Engine(String),

    /// Access past the end of a child geometry view.
    #[error("Index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeoHandleError>;
