//! Construction of typed geometries from WKT text.

mod api;

pub use api::FromWkt;
