//! Construction of typed geometries from WKB-encoded bytes.

mod api;

pub use api::FromWkb;
