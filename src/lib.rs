//! Typed, lifetime-safe access to geometries held by a native geometry engine.
//!
//! Geometries are parsed from WKT or WKB into the engine, which hands back an opaque handle. The
//! handle's runtime type tag selects one of the typed wrappers in [`scalar`]; the wrapper built
//! from a parse owns the handle and releases it when dropped, while rings and collection members
//! are borrowed views that cannot outlive it. Coordinates and sub-geometries are read from the
//! engine lazily, on access.
//!
//! ```
//! use geohandle::io::wkt::FromWkt;
//! use geohandle::scalar::{Geometry, MultiPoint, Polygon};
//! use geohandle::GeometryScalarTrait;
//!
//! let polygon = Polygon::from_wkt("POLYGON ((0 0, 4 0, 4 4, 0 4, 0 0))").unwrap();
//! assert_eq!(polygon.exterior_ring().points().len(), 5);
//! assert_eq!(polygon.interior_rings().len(), 0);
//!
//! let multi = MultiPoint::from_wkt("MULTIPOINT (0 0, 1 1)").unwrap();
//! let second = multi.geometries().value(1);
//! assert_eq!((second.x(), second.y()), (1.0, 1.0));
//!
//! let geometry = Geometry::from_wkt("LINESTRING (0 0, 10 10, 20 25)").unwrap();
//! assert_eq!(geometry.geometry_type().to_string(), "LineString");
//!
//! assert!(Geometry::from_wkt("POLYGON ((").is_none());
//! ```

#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use datatypes::GeometryType;
pub use error::{GeoHandleError, Result};
pub use trait_::{CollectionElement, FromHandle, GeometryScalarTrait};

pub mod datatypes;
pub mod engine;
pub mod error;
pub mod io;
pub mod scalar;
#[cfg(test)]
pub(crate) mod test;
pub mod trait_;
