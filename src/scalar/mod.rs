//! Typed wrappers over native geometry handles.
//!
//! A wrapper created by a reader owns its handle and releases it when dropped. Every wrapper
//! derived from it (a ring, a collection member) borrows the handle and cannot outlive the
//! wrapper it was obtained from.

pub use child::{ChildGeometryIterator, ChildGeometryView};
pub use coord::{Coordinate, CoordinateIterator, CoordinateView};
pub use geometry::Geometry;
pub use geometrycollection::{GeometryCollection, MultiLineString, MultiPoint, MultiPolygon};
pub use handle::HandleLifetime;
pub use linestring::{LineString, LinearRing};
pub use point::Point;
pub use polygon::Polygon;

pub mod child;
pub mod coord;
pub mod geometry;
pub mod geometrycollection;
pub(crate) mod handle;
pub mod linestring;
pub mod point;
pub mod polygon;
