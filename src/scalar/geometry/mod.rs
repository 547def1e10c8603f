mod registry;
mod scalar;

pub use scalar::Geometry;
