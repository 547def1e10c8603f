mod scalar;

pub use scalar::Point;
