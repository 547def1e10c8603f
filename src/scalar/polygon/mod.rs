mod scalar;

pub use scalar::Polygon;
