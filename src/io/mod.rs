//! Construction of typed geometries from WKT and WKB input, and conversion of typed geometries
//! to `geo` values or any `geozero` output format.

pub mod geo;
pub mod geozero;
pub mod wkb;
pub mod wkt;
