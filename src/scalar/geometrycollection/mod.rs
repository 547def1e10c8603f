mod scalar;

pub use scalar::{GeometryCollection, MultiLineString, MultiPoint, MultiPolygon};
