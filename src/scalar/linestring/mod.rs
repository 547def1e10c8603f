mod linearring;
mod scalar;

pub use linearring::LinearRing;
pub use scalar::LineString;
